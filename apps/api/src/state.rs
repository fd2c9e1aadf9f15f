use std::sync::Arc;

use crate::config::Config;
use crate::extraction::BinaryTextRecovery;
use crate::layout::LayoutConfig;
use crate::resume::ResumeModel;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable extraction/transform backend. Default: `LlmResumeModel`.
    pub resume_model: Arc<dyn ResumeModel>,
    /// Sizing constants for the default page. Requests may switch paper size per call.
    pub layout: Arc<LayoutConfig>,
    pub recovery: Arc<BinaryTextRecovery>,
}
