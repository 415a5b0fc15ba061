//! Shared class names so pages stay visually consistent.

use crate::domain::ResultSummary;

// ============================================
// BUTTON STYLES
// ============================================

pub const BTN_PRIMARY: &str = "btn btn-gradient";
pub const BTN_CTA: &str = "btn btn-gradient btn-pill";

pub fn nav_link(active: bool) -> &'static str {
    if active {
        "nav-link nav-link-active"
    } else {
        "nav-link"
    }
}

// ============================================
// INPUT STYLES
// ============================================

pub const INPUT: &str = "input-glass";
pub const LABEL: &str = "input-label";

// ============================================
// PANEL / CONTAINER STYLES
// ============================================

pub const PANEL: &str = "result-display";
pub const CONTAINER: &str = "welcome-container";
pub const BADGE: &str = "data-badge";

// ============================================
// TEXT STYLES
// ============================================

pub const TEXT_ACCENT: &str = "text-info";
pub const TEXT_MUTED: &str = "text-muted";

/// Headline colour for a prediction outcome.
pub fn summary_headline(summary: &ResultSummary) -> &'static str {
    match summary {
        ResultSummary::OutsideServiceArea { .. } => "headline text-warning",
        ResultSummary::Estimate { .. } => "headline text-info",
        ResultSummary::Unavailable => "headline text-danger",
    }
}
