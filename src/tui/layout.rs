//! Panel geometry shared by both screens.
//!
//! Pure functions: terminal size and content in, widths and rects out.
//! Recomputed on every frame, so a resize is picked up on the next draw.
//!
//! Shape of a panel:
//!
//! ```text
//!   ▗▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄▄▖
//!   ▐                            ▌   1 row padding
//!   ▐  main column │ side column ▌   2 columns padding
//!   ▐                            ▌
//!   ▝▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▘
//! ```

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};

use super::theme;

/// Horizontal padding inside the border, per side.
pub const PADDING_X: u16 = 2;
/// Vertical padding inside the border, per side.
pub const PADDING_Y: u16 = 1;
/// Border thickness, per side.
pub const BORDER: u16 = 1;

/// The path panel never grows wider than this.
pub const PATH_PANEL_MAX_WIDTH: u16 = 100;

/// Columns added around the content by border and padding.
pub const CHROME_WIDTH: u16 = 2 * (PADDING_X + BORDER);
/// Rows added around the content by border and padding.
pub const CHROME_HEIGHT: u16 = 2 * (PADDING_Y + BORDER);

/// Starting column width: a fifth of the terminal.
pub fn base_width(term_width: u16) -> u16 {
    term_width / 5
}

/// Column width: the base width, widened to fit the longest line.
pub fn column_width(term_width: u16, lines: &[Line]) -> u16 {
    let longest = lines.iter().map(Line::width).max().unwrap_or(0);
    let longest = u16::try_from(longest).unwrap_or(u16::MAX);
    base_width(term_width).max(longest)
}

/// Widest the selector panel may get: nine tenths of the terminal.
pub fn selector_max_width(term_width: u16) -> u16 {
    term_width.saturating_mul(9) / 10
}

/// Pad a line with trailing spaces to exactly `width` cells (if shorter)
/// and give it the panel background.
pub fn pad_line(line: Line<'static>, width: u16) -> Line<'static> {
    let missing = (width as usize).saturating_sub(line.width());
    let mut line = line.patch_style(theme::STYLE_PANEL);
    if missing > 0 {
        line.push_span(Span::styled(" ".repeat(missing), theme::STYLE_PANEL));
    }
    line
}

/// Outer size of a panel around `content_width` × `content_height`,
/// capped at `max_width` and at the terminal itself.
pub fn panel_size(content_width: u16, content_height: u16, max_width: u16, area: Rect) -> (u16, u16) {
    let width = content_width
        .saturating_add(CHROME_WIDTH)
        .min(max_width)
        .min(area.width);
    let height = content_height.saturating_add(CHROME_HEIGHT).min(area.height);
    (width, height)
}

/// A `width` × `height` rect centered in `area` (clamped to fit).
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
