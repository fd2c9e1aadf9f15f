//! Resume collaborators: semantic extraction and the American-style rewrite.
//!
//! Both are model-backed and pluggable: `AppState` holds an `Arc<dyn ResumeModel>`,
//! `LlmResumeModel` in production and a stub in router tests. The handlers pass whatever
//! the backend returns through `StructuredResume::normalize` before responding.

pub mod handlers;
pub mod prompts;

use async_trait::async_trait;
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::prompts::{JSON_ONLY_SYSTEM, RESUME_SCHEMA};
use crate::llm_client::LlmClient;
use crate::models::StructuredResume;
use crate::resume::prompts::{
    EXTRACT_PROMPT_TEMPLATE, EXTRACT_ROLE, TRANSFORM_PROMPT_TEMPLATE, TRANSFORM_ROLE,
};

/// Upper bound on a serialized resume accepted for transformation.
pub const MAX_RESUME_JSON_BYTES: usize = 50_000;

const EXTRACT_TEMPERATURE: f32 = 0.1;
const TRANSFORM_TEMPERATURE: f32 = 0.3;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait ResumeModel: Send + Sync {
    /// Raw resume text (any language) → structured record. Text is preserved, not translated.
    async fn extract(&self, raw_text: &str) -> Result<StructuredResume, AppError>;

    /// Structured record → American-style English record.
    async fn americanize(&self, resume: &StructuredResume) -> Result<StructuredResume, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// LlmResumeModel
// ────────────────────────────────────────────────────────────────────────────

pub struct LlmResumeModel(pub LlmClient);

#[async_trait]
impl ResumeModel for LlmResumeModel {
    async fn extract(&self, raw_text: &str) -> Result<StructuredResume, AppError> {
        let prompt = EXTRACT_PROMPT_TEMPLATE
            .replace("{schema}", RESUME_SCHEMA)
            .replace("{resume_text}", raw_text);
        let system = format!("{EXTRACT_ROLE}\n\n{JSON_ONLY_SYSTEM}");

        let resume = self
            .0
            .call_json::<StructuredResume>(&prompt, &system, EXTRACT_TEMPERATURE)
            .await
            .map_err(|e| AppError::Llm(format!("Resume extraction failed: {e}")))?;

        info!(
            work_entries = resume.work_experience.len(),
            education_entries = resume.education.len(),
            "Resume extracted"
        );
        Ok(resume)
    }

    async fn americanize(&self, resume: &StructuredResume) -> Result<StructuredResume, AppError> {
        let resume_json = serialize_bounded(resume)?;
        let prompt = TRANSFORM_PROMPT_TEMPLATE
            .replace("{schema}", RESUME_SCHEMA)
            .replace("{resume_json}", &resume_json);
        let system = format!("{TRANSFORM_ROLE}\n\n{JSON_ONLY_SYSTEM}");

        let transformed = self
            .0
            .call_json::<StructuredResume>(&prompt, &system, TRANSFORM_TEMPERATURE)
            .await
            .map_err(|e| AppError::Llm(format!("Resume transformation failed: {e}")))?;

        info!(
            work_entries = transformed.work_experience.len(),
            "Resume transformed"
        );
        Ok(transformed)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Input guards
// ────────────────────────────────────────────────────────────────────────────

/// Rejects blank resume text before any model call.
pub fn require_resume_text(raw_text: &str) -> Result<(), AppError> {
    if raw_text.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_text cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Serializes a resume for the transform prompt, enforcing `MAX_RESUME_JSON_BYTES`.
pub fn serialize_bounded(resume: &StructuredResume) -> Result<String, AppError> {
    if resume.is_empty() {
        return Err(AppError::Validation(
            "resume must contain personal_info or at least one section".to_string(),
        ));
    }
    let json = serde_json::to_string(resume)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize resume: {e}")))?;
    if json.len() > MAX_RESUME_JSON_BYTES {
        return Err(AppError::PayloadTooLarge(format!(
            "Resume data is {} bytes; the limit is {MAX_RESUME_JSON_BYTES}",
            json.len()
        )));
    }
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PersonalInfo, WorkExperience};

    fn resume_with_bullet(len: usize) -> StructuredResume {
        StructuredResume {
            personal_info: PersonalInfo {
                name: "Asaf Magen".to_string(),
                ..Default::default()
            },
            work_experience: vec![WorkExperience {
                company: "Acme".to_string(),
                bullets: vec!["x".repeat(len)],
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_blank_text_rejected() {
        assert!(matches!(
            require_resume_text("  \n\t"),
            Err(AppError::Validation(_))
        ));
        assert!(require_resume_text("Asaf Magen").is_ok());
    }

    #[test]
    fn test_empty_resume_rejected() {
        assert!(matches!(
            serialize_bounded(&StructuredResume::default()),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_oversized_resume_rejected() {
        assert!(matches!(
            serialize_bounded(&resume_with_bullet(MAX_RESUME_JSON_BYTES)),
            Err(AppError::PayloadTooLarge(_))
        ));
    }

    #[test]
    fn test_small_resume_serialized() {
        let json = serialize_bounded(&resume_with_bullet(40)).unwrap();
        assert!(json.len() < MAX_RESUME_JSON_BYTES);
        assert!(json.contains("\"personal_info\""));
        assert!(json.contains("\"startDate\""));
    }
}
