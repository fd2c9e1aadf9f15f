//! Content weight: a weighted character count standing in for rendered height.
//!
//! This does not simulate wrapping. Each field contributes `chars × weight`, where the
//! weight reflects how prominently the field renders.

use crate::layout::page::FieldWeights;
use crate::models::StructuredResume;

pub fn content_weight(resume: &StructuredResume, weights: &FieldWeights) -> f32 {
    let mut total = 0.0_f32;
    let body = weights.body;

    let info = &resume.personal_info;
    total += chars(&info.name) * weights.name;
    total += chars(&info.email) * body;
    total += chars(&info.phone) * body;
    total += chars(&info.location) * body;
    total += opt_chars(&info.linkedin) * body;
    total += opt_chars(&info.website) * body;

    total += opt_chars(&resume.summary) * weights.summary;

    for job in &resume.work_experience {
        total += chars(&job.position) * weights.position;
        total += chars(&job.company) * weights.company;
        total += (chars(&job.location) + chars(&job.start_date) + chars(&job.end_date)) * body;
        total += job.bullets.iter().map(|b| chars(b)).sum::<f32>() * body;
    }

    for edu in &resume.education {
        total += chars(&edu.degree) * weights.degree;
        total += chars(&edu.institution) * weights.institution;
        total += (opt_chars(&edu.field)
            + chars(&edu.location)
            + chars(&edu.graduation_date)
            + opt_chars(&edu.gpa))
            * body;
    }

    if !resume.skills.is_empty() {
        // Skills render as one comma-separated line.
        total += chars(&resume.skills.join(", ")) * body;
    }

    for section in &resume.other {
        total += chars(&section.title) * weights.section_title;
        total += section.items.iter().map(|i| chars(i)).sum::<f32>() * body;
    }

    total
}

fn chars(s: &str) -> f32 {
    s.chars().count() as f32
}

fn opt_chars(s: &Option<String>) -> f32 {
    s.as_deref().map(chars).unwrap_or(0.0)
}
