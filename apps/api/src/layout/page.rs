//! Page geometry and the immutable tuning values for the sizing engine.
//!
//! All pixel values assume 96 DPI, which is what the print template renders at.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ────────────────────────────────────────────────────────────────────────────
// Page size
// ────────────────────────────────────────────────────────────────────────────

/// Physical paper size of the printed resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    /// 210mm × 297mm.
    #[default]
    A4,
    /// 8.5" × 11".
    Letter,
}

impl PageSize {
    pub fn dimensions(self) -> PageDimensions {
        match self {
            PageSize::A4 => PageDimensions {
                width_px: 794.0,
                height_px: 1123.0,
            },
            PageSize::Letter => PageDimensions {
                width_px: 816.0,
                height_px: 1056.0,
            },
        }
    }

    /// Name used in the CSS `@page { size: ... }` rule.
    pub fn css_name(self) -> &'static str {
        match self {
            PageSize::A4 => "A4",
            PageSize::Letter => "Letter",
        }
    }
}

impl std::str::FromStr for PageSize {
    type Err = LayoutConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a4" => Ok(PageSize::A4),
            "letter" | "us-letter" => Ok(PageSize::Letter),
            other => Err(LayoutConfigError::UnknownPageSize(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageDimensions {
    pub width_px: f32,
    pub height_px: f32,
}

// ────────────────────────────────────────────────────────────────────────────
// Field weights
// ────────────────────────────────────────────────────────────────────────────

/// Multipliers applied to character counts when computing content weight.
/// Larger values stand for text that renders bigger or bolder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldWeights {
    pub name: f32,
    pub summary: f32,
    pub position: f32,
    pub degree: f32,
    pub company: f32,
    pub institution: f32,
    pub section_title: f32,
    /// Bullets, dates, locations, contact details, skills, section items.
    pub body: f32,
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            name: 2.0,
            summary: 1.5,
            position: 1.5,
            degree: 1.5,
            company: 1.2,
            institution: 1.2,
            section_title: 1.3,
            body: 1.0,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Layout configuration
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Error, PartialEq)]
pub enum LayoutConfigError {
    #[error("Unknown page size '{0}' (expected 'a4' or 'letter')")]
    UnknownPageSize(String),

    #[error("Font bounds must satisfy 0 < min ({min}) <= base ({base}) <= max ({max})")]
    FontBounds { min: f32, base: f32, max: f32 },

    #[error("Font sizes must be whole tenths of a pixel, got {0}")]
    FontPrecision(f32),

    #[error("Shrink step must be positive, got {0}")]
    ShrinkStep(f32),

    #[error("Page dimensions must be positive, got {width}x{height}")]
    PageDimensions { width: f32, height: f32 },
}

/// Every constant the sizing engine depends on. Built once at startup and
/// passed by reference so the engine stays pure and testable against other pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub page_size: PageSize,
    pub page: PageDimensions,
    pub min_font_size: f32,
    pub max_font_size: f32,
    pub base_font_size: f32,
    pub line_height_multiplier: f32,
    /// Section spacing at the base font size.
    pub section_spacing_px: f32,
    /// Bullet spacing at the base font size.
    pub bullet_spacing_px: f32,
    pub section_spacing_floor: f32,
    pub bullet_spacing_floor: f32,
    /// Average glyph width as a fraction of the font size.
    pub char_width_factor: f32,
    /// Top + bottom padding reserved on the page.
    pub margin_padding_px: f32,
    pub section_count: u32,
    pub lines_per_section: u32,
    pub shrink_step: f32,
    pub weights: FieldWeights,
    /// `(weight, reduction)` pairs in descending weight order. The first threshold
    /// strictly exceeded by the content weight sets the starting reduction.
    pub weight_thresholds: Vec<(f32, f32)>,
}

impl LayoutConfig {
    pub fn for_page(page_size: PageSize) -> Self {
        Self {
            page_size,
            page: page_size.dimensions(),
            min_font_size: 8.0,
            max_font_size: 12.0,
            base_font_size: 10.0,
            line_height_multiplier: 1.2,
            section_spacing_px: 8.0,
            bullet_spacing_px: 2.0,
            section_spacing_floor: 4.0,
            bullet_spacing_floor: 1.0,
            char_width_factor: 0.6,
            margin_padding_px: 40.0,
            section_count: 3,
            lines_per_section: 2,
            shrink_step: 0.5,
            weights: FieldWeights::default(),
            weight_thresholds: vec![(2000.0, 2.0), (1500.0, 1.5), (1000.0, 1.0), (500.0, 0.5)],
        }
    }

    /// Same tuning, different paper.
    pub fn with_page_size(&self, page_size: PageSize) -> Self {
        Self {
            page_size,
            page: page_size.dimensions(),
            ..self.clone()
        }
    }

    pub fn validate(&self) -> Result<(), LayoutConfigError> {
        let (min, base, max) = (self.min_font_size, self.base_font_size, self.max_font_size);
        if !(min > 0.0 && min <= base && base <= max) {
            return Err(LayoutConfigError::FontBounds { min, base, max });
        }
        if let Some(off_grid) = [min, base, max].into_iter().find(|v| !is_tenth(*v)) {
            return Err(LayoutConfigError::FontPrecision(off_grid));
        }
        if self.shrink_step <= 0.0 {
            return Err(LayoutConfigError::ShrinkStep(self.shrink_step));
        }
        if self.page.width_px <= 0.0 || self.page.height_px <= 0.0 {
            return Err(LayoutConfigError::PageDimensions {
                width: self.page.width_px,
                height: self.page.height_px,
            });
        }
        Ok(())
    }
}

/// Sizes are reported rounded to 0.1; bounds off that grid would round past themselves.
fn is_tenth(value: f32) -> bool {
    let scaled = value * 10.0;
    (scaled - scaled.round()).abs() < 1e-3
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::for_page(PageSize::A4)
    }
}
