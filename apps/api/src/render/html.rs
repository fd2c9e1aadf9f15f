//! Self-contained print HTML for a resume.
//!
//! Sizes come from a `FontSizingConfig` computed fresh for the same resume; this module
//! only formats. All resume text is escaped before it reaches the markup.

use html_escape::encode_text;

use crate::layout::{FontSizingConfig, PageSize};
use crate::models::{Education, StructuredResume, WorkExperience};

const CONTACT_SEPARATOR: &str = " | ";
const SKILL_SEPARATOR: &str = " • ";
const DATE_SEPARATOR: &str = " – ";
/// Points added to the header size for the candidate's name.
const NAME_BOOST: f32 = 6.0;

/// Renders a complete HTML document ready for printing on `page_size` paper.
pub fn render_html(resume: &StructuredResume, sizing: &FontSizingConfig, page_size: PageSize) -> String {
    let mut body = String::new();
    body.push_str(&render_header(resume));

    if let Some(summary) = resume.summary.as_deref().filter(|s| !s.trim().is_empty()) {
        body.push_str(&section(
            "Professional Summary",
            &format!("<div class=\"summary\">{}</div>", encode_text(summary)),
        ));
    }

    if !resume.work_experience.is_empty() {
        let items: String = resume.work_experience.iter().map(render_work).collect();
        body.push_str(&section("Work Experience", &items));
    }

    if !resume.education.is_empty() {
        let items: String = resume.education.iter().map(render_education).collect();
        body.push_str(&section("Education", &items));
    }

    let additional = render_additional(resume);
    if !additional.is_empty() {
        body.push_str(&section("Additional Information", &additional));
    }

    let title = if resume.personal_info.name.trim().is_empty() {
        "Resume".to_string()
    } else {
        format!("{} - Resume", encode_text(&resume.personal_info.name))
    };

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n<style>\n{css}</style>\n</head>\n<body>\n<div class=\"resume-container\">\n{body}</div>\n</body>\n</html>\n",
        css = stylesheet(sizing, page_size),
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

fn render_header(resume: &StructuredResume) -> String {
    let info = &resume.personal_info;
    let contact = [
        Some(info.email.as_str()),
        Some(info.phone.as_str()),
        Some(info.location.as_str()),
        info.linkedin.as_deref(),
        info.website.as_deref(),
    ]
    .into_iter()
    .flatten()
    .map(str::trim)
    .filter(|s| !s.is_empty())
    .map(|s| encode_text(s).into_owned())
    .collect::<Vec<_>>()
    .join(CONTACT_SEPARATOR);

    let mut html = String::from("<div class=\"header\">\n");
    if !info.name.trim().is_empty() {
        html.push_str(&format!("<div class=\"name\">{}</div>\n", encode_text(&info.name)));
    }
    if !contact.is_empty() {
        html.push_str(&format!("<div class=\"contact\">{contact}</div>\n"));
    }
    html.push_str("</div>\n");
    html
}

fn section(title: &str, content: &str) -> String {
    format!(
        "<div class=\"section\">\n<div class=\"section-title\">{}</div>\n{content}</div>\n",
        encode_text(title)
    )
}

fn render_work(work: &WorkExperience) -> String {
    let end = if work.current && work.end_date.trim().is_empty() {
        "Present"
    } else {
        work.end_date.as_str()
    };
    let dates = date_range(&work.start_date, end);

    let mut html = String::from("<div class=\"work-item\">\n");
    html.push_str(&format!(
        "<div class=\"item-head\"><span class=\"job-title\">{}</span>{}</div>\n",
        encode_text(&work.position),
        dates_span(&dates)
    ));
    html.push_str(&meta_line(&work.company, &work.location));
    html.push_str(&bullet_list(&work.bullets));
    html.push_str("</div>\n");
    html
}

fn render_education(edu: &Education) -> String {
    let degree = match edu.field.as_deref().map(str::trim) {
        Some(field) if !field.is_empty() => format!("{} in {field}", edu.degree),
        _ => edu.degree.clone(),
    };

    let mut html = String::from("<div class=\"education-item\">\n");
    html.push_str(&format!(
        "<div class=\"item-head\"><span class=\"job-title\">{}</span>{}</div>\n",
        encode_text(&degree),
        dates_span(edu.graduation_date.trim())
    ));
    html.push_str(&meta_line(&edu.institution, &edu.location));
    if let Some(gpa) = edu.gpa.as_deref().filter(|g| !g.trim().is_empty()) {
        html.push_str(&format!("<div class=\"meta\">GPA: {}</div>\n", encode_text(gpa)));
    }
    html.push_str("</div>\n");
    html
}

/// Skills plus every titled `other` section that has items.
fn render_additional(resume: &StructuredResume) -> String {
    let mut html = String::new();

    let skills: Vec<&str> = resume
        .skills
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();
    if !skills.is_empty() {
        html.push_str(&format!(
            "<div class=\"subsection\"><div class=\"subsection-title\">Skills</div><div class=\"skills\">{}</div></div>\n",
            encode_text(&skills.join(SKILL_SEPARATOR))
        ));
    }

    for other in resume.other.iter().filter(|o| !o.items.is_empty()) {
        html.push_str(&format!(
            "<div class=\"subsection\"><div class=\"subsection-title\">{}</div>\n{}</div>\n",
            encode_text(&other.title),
            bullet_list(&other.items)
        ));
    }

    html
}

// ────────────────────────────────────────────────────────────────────────────
// Fragments
// ────────────────────────────────────────────────────────────────────────────

fn date_range(start: &str, end: &str) -> String {
    [start.trim(), end.trim()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(DATE_SEPARATOR)
}

fn dates_span(dates: &str) -> String {
    if dates.is_empty() {
        String::new()
    } else {
        format!("<span class=\"dates\">{}</span>", encode_text(dates))
    }
}

fn meta_line(primary: &str, location: &str) -> String {
    let parts: Vec<String> = [primary.trim(), location.trim()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .map(|s| encode_text(s).into_owned())
        .collect();
    if parts.is_empty() {
        return String::new();
    }
    format!("<div class=\"meta\">{}</div>\n", parts.join(", "))
}

fn bullet_list(items: &[String]) -> String {
    let items: String = items
        .iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .map(|item| format!("<li>{}</li>", encode_text(item)))
        .collect();
    if items.is_empty() {
        String::new()
    } else {
        format!("<ul class=\"bullets\">{items}</ul>\n")
    }
}

fn px(value: f32) -> String {
    format!("{value:.1}px")
}

fn stylesheet(sizing: &FontSizingConfig, page_size: PageSize) -> String {
    let body = sizing.body_font_size;
    format!(
        r#"@page {{ size: {page}; margin: 10mm 15mm; }}
* {{ margin: 0; padding: 0; box-sizing: border-box; }}
body {{ font-family: Arial, Helvetica, sans-serif; color: #000; font-size: {body_px}; line-height: {line_height}; }}
.header {{ text-align: center; margin-bottom: {section_spacing}; border-bottom: 1px solid #333; }}
.name {{ font-size: {name}; font-weight: bold; letter-spacing: 0.5px; }}
.contact {{ font-size: {meta}; }}
.section {{ margin-bottom: {section_spacing}; }}
.section-title {{ font-size: {section_title}; font-weight: bold; text-transform: uppercase; border-bottom: 1px solid #ddd; }}
.item-head {{ display: flex; justify-content: space-between; font-size: {body_px}; }}
.job-title {{ font-weight: bold; }}
.dates, .meta {{ font-size: {meta}; }}
.meta {{ font-style: italic; }}
.bullets {{ padding-left: 14px; }}
.bullets li {{ font-size: {bullet}; line-height: {line_height}; margin-bottom: {bullet_spacing}; }}
.subsection-title {{ font-weight: bold; font-size: {body_px}; }}
.skills, .summary {{ font-size: {bullet}; }}
"#,
        page = page_size.css_name(),
        body_px = px(body),
        line_height = px(sizing.line_height),
        name = px(sizing.header_font_size + NAME_BOOST),
        meta = px(body - 0.5),
        section_title = px(body + 0.5),
        bullet = px(sizing.bullet_font_size),
        section_spacing = px(sizing.section_spacing),
        bullet_spacing = px(sizing.bullet_spacing),
    )
}
