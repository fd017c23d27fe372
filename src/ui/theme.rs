//! Color theme constants for the gallery UI
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

// ============================================================================
// Minimal Dark Color Theme
// ============================================================================

/// Card and frame border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color for the selected card and highlights
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Spinner and "loading more" indicator
pub const COLOR_ACTIVE: Color = Color::LightGreen;

/// Dim text for less important info (urls, hints)
pub const COLOR_DIM: Color = Color::DarkGray;

/// Failure card border and message
pub const COLOR_ERROR: Color = Color::Red;

/// Rendition dimensions on a card
pub const COLOR_DIMENSIONS: Color = Color::Rgb(0, 122, 204); // blue #007ACC
