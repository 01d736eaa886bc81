//! TUI color semantics and style constants.
//!
//! Pure data, consumed by the rendering layer for visual consistency.
//!
//! Color semantics:
//! - Blue: headers and prompts
//! - Magenta: the item under the cursor
//! - Green: panel border
//! - Gray (faint): hints and descriptions
//! - Near-black: panel background

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// PALETTE
// ============================================================================

pub const HEADER: Color = Color::Rgb(0x33, 0x99, 0xff);
pub const HIGHLIGHT: Color = Color::Rgb(0xff, 0x00, 0xff);
pub const BORDER: Color = Color::Rgb(0x25, 0xb8, 0x6e);
pub const MUTED: Color = Color::Rgb(0x9e, 0x9e, 0x9e);
pub const BACKGROUND: Color = Color::Rgb(0x13, 0x13, 0x13);

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

/// Panel fill, applied to every padded line.
pub const STYLE_PANEL: Style = Style::new().bg(BACKGROUND);

/// Title / prompt line.
pub const STYLE_TITLE: Style = Style::new().fg(HEADER).add_modifier(Modifier::BOLD);

/// Item under the cursor.
pub const STYLE_CURSOR: Style = Style::new().fg(HIGHLIGHT);

/// Footer / key hints.
pub const STYLE_HELP: Style = Style::new().fg(MUTED).add_modifier(Modifier::DIM);

/// Secondary description panel.
pub const STYLE_DESCRIPTION: Style = Style::new().fg(MUTED).add_modifier(Modifier::DIM);

/// Placeholder in an empty text field.
pub const STYLE_PLACEHOLDER: Style = Style::new().fg(MUTED).add_modifier(Modifier::DIM);

/// Panel border.
pub const STYLE_BORDER: Style = Style::new().fg(BORDER);

// ============================================================================
// TESTS
// ============================================================================
