// Shared prompt fragments. Each service that needs LLM calls defines its own prompts.rs
// alongside it; this file holds what they have in common.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Schema every resume-producing call must return.
pub const RESUME_SCHEMA: &str = r#"interface PersonalInfo {
  name: string;
  email: string;
  phone: string;
  location: string;
  linkedin?: string;
  website?: string;
}

interface WorkExperience {
  id: string;
  company: string;
  position: string;
  location: string;
  startDate: string; // exactly as written in the source
  endDate: string;   // exactly as written in the source
  current: boolean;
  bullets: string[];
}

interface Education {
  id: string;
  institution: string;
  degree: string;
  field?: string;
  location: string;
  graduationDate: string; // exactly as written in the source
  gpa?: string;
}

interface OtherSection {
  id: string;
  title: string;
  items: string[];
}

interface Resume {
  personal_info: PersonalInfo;
  summary?: string;
  work_experience: WorkExperience[];
  education: Education[];
  skills?: string[];
  other: OtherSection[];
}"#;
