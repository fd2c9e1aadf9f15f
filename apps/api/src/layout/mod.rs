// Page-Fit Sizing Engine.
// Chooses typography so a resume lands on a single printed page without dropping content.
// Pure and synchronous.

pub mod handlers;
pub mod page;
pub mod sizing;
pub mod weight;

// Re-export the public API consumed by other modules (render, config, main).
pub use page::{LayoutConfig, PageSize};
pub use sizing::{compute_font_sizing, FontSizingConfig};
