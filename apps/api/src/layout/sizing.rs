//! Page-Fit Sizing: picks font sizes and spacing so a resume fits one page.
//!
//! # Procedure
//! 1. Content weight → starting body size via a fixed staircase.
//! 2. Header, bullet, line height and spacing are derived from the body size.
//! 3. While the estimated height overflows the page, shrink the body size by
//!    `shrink_step` and re-derive, stopping at `min_font_size`.
//!
//! Content is never dropped; only typography changes. The height estimate is a
//! heuristic, so the result is "most likely to fit", not a guarantee.

use serde::{Deserialize, Serialize};

use crate::layout::page::LayoutConfig;
use crate::layout::weight::content_weight;
use crate::models::StructuredResume;

// ────────────────────────────────────────────────────────────────────────────
// Output type
// ────────────────────────────────────────────────────────────────────────────

/// Typography for one rendering pass. Recomputed on every render, never stored.
///
/// Invariant: `min ≤ bullet_font_size ≤ body_font_size ≤ header_font_size ≤ max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontSizingConfig {
    pub header_font_size: f32,
    pub body_font_size: f32,
    pub bullet_font_size: f32,
    pub line_height: f32,
    pub section_spacing: f32,
    pub bullet_spacing: f32,
}

impl FontSizingConfig {
    /// Derives every value from a body font size.
    pub fn from_body(body_font_size: f32, config: &LayoutConfig) -> Self {
        let body = body_font_size.clamp(config.min_font_size, config.max_font_size);
        let scale = body / config.base_font_size;

        Self {
            header_font_size: snap_font_size((body + 1.0).min(config.max_font_size), config),
            body_font_size: snap_font_size(body, config),
            bullet_font_size: snap_font_size((body - 0.5).max(config.min_font_size), config),
            line_height: round_tenth(body * config.line_height_multiplier),
            section_spacing: (config.section_spacing_px * scale)
                .max(config.section_spacing_floor)
                .round(),
            bullet_spacing: (config.bullet_spacing_px * scale)
                .max(config.bullet_spacing_floor)
                .round(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core functions
// ────────────────────────────────────────────────────────────────────────────

/// Maps content weight to a starting body size using the configured staircase.
pub fn initial_body_size(weight: f32, config: &LayoutConfig) -> f32 {
    let reduction = config
        .weight_thresholds
        .iter()
        .find(|(threshold, _)| weight > *threshold)
        .map(|(_, reduction)| *reduction)
        .unwrap_or(0.0);

    (config.base_font_size - reduction).clamp(config.min_font_size, config.max_font_size)
}

/// Estimated rendered line count at a given body size.
pub fn estimate_line_count(weight: f32, body_font_size: f32, config: &LayoutConfig) -> u32 {
    let char_width = body_font_size * config.char_width_factor;
    let chars_per_line = (config.page.width_px / char_width).floor().max(1.0);
    let text_lines = (weight / chars_per_line).ceil() as u32;

    text_lines + config.section_count * config.lines_per_section
}

/// True if the estimated height plus margin padding fits the page height.
pub fn fits_on_page(weight: f32, sizing: &FontSizingConfig, config: &LayoutConfig) -> bool {
    let lines = estimate_line_count(weight, sizing.body_font_size, config);
    let height = lines as f32 * sizing.line_height;
    height + config.margin_padding_px <= config.page.height_px
}

/// Computes the sizing for a resume. Deterministic, no I/O.
pub fn compute_font_sizing(resume: &StructuredResume, config: &LayoutConfig) -> FontSizingConfig {
    let weight = content_weight(resume, &config.weights);
    size_for_weight(weight, config)
}

/// Staircase start, then shrink until the estimate fits or the floor is reached.
/// Bounded by `(base - min) / shrink_step` iterations.
pub fn size_for_weight(weight: f32, config: &LayoutConfig) -> FontSizingConfig {
    let mut sizing = FontSizingConfig::from_body(initial_body_size(weight, config), config);

    while !fits_on_page(weight, &sizing, config) && sizing.body_font_size > config.min_font_size {
        let next = (sizing.body_font_size - config.shrink_step).max(config.min_font_size);
        sizing = FontSizingConfig::from_body(next, config);
    }

    sizing
}

/// Rounds to 0.1 without leaving `[min_font_size, max_font_size]`.
fn snap_font_size(value: f32, config: &LayoutConfig) -> f32 {
    round_tenth(value).clamp(config.min_font_size, config.max_font_size)
}

fn round_tenth(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
