// Prompt constants for the resume collaborators.
// Reuses the shared schema and JSON-only fragment from llm_client::prompts.

/// Role description for structured extraction. Combined with `JSON_ONLY_SYSTEM`.
pub const EXTRACT_ROLE: &str = "You are an expert resume parser specializing in \
    extracting quantifiable achievements and metrics. Resumes may be written in Hebrew \
    or another right-to-left language.";

/// Extraction prompt. Replace `{schema}` and `{resume_text}` before sending.
pub const EXTRACT_PROMPT_TEMPLATE: &str = r#"Extract the resume below into a JSON object matching this schema:

{schema}

Rules:
1. Extract the person's actual name. If the text is garbled or mirrored, infer it from the e-mail address.
2. Preserve all original text, including Hebrew, in the extracted fields. Do NOT translate.
3. Extract dates EXACTLY as they appear in the original text (e.g. "2016 – היום" stays "2016 – היום").
4. Extract ALL bullet points. Prefer ones with numbers, percentages, team sizes or budgets.
5. Group remaining content under titled "other" sections (e.g. "Skills", "Awards", "Certifications").
6. If a field is not present, use an empty string or an empty array.
7. Generate a unique "id" for each work, education and other entry.

Resume text:
{resume_text}"#;

/// Role description for the American-style rewrite. Combined with `JSON_ONLY_SYSTEM`.
pub const TRANSFORM_ROLE: &str = "You are an expert resume transformer. You convert \
    resumes written in any language into polished, professional, one-page \
    American-style resumes.";

/// Transform prompt. Replace `{schema}` and `{resume_json}` before sending.
pub const TRANSFORM_PROMPT_TEMPLATE: &str = r#"Rewrite the resume below as an American-style resume and return it as JSON matching this schema:

{schema}

Translation:
- Translate all content to professional American English with full fidelity. No summaries, no omissions.
- Fix date ranges written right-to-left (e.g. "2018–2016" becomes "2016–2018").
- Translate place names (e.g. "בת ים" becomes "Bat Yam, Israel") and add brief context to unfamiliar company names.

Dates:
- Month and year present: MM/YYYY. Only a year: YYYY.
- Ongoing roles: endDate "Present" and current true.
- Never fabricate dates. A missing date stays an empty string.

Structure:
- Work experience in reverse chronological order, 2 to 5 bullets per role.
- Education with institution, degree, field, location and graduation year.
- Combine skills, certifications, languages, awards, projects and military service into titled "other" sections.

Bullets:
- Start with an action verb (Managed, Built, Reduced, ...). At most 3 lines each.
- Every bullet includes a number or quantifiable result. If none exists, infer a realistic one ("~10%", "5+").
- Do NOT drop bullets. Do NOT invent employers, institutions or dates.

Resume JSON:
{resume_json}"#;
