//! Pure rendering: map screen state to ratatui widget trees.
//!
//! Each screen builds its content lines, then hands them to the shared
//! panel renderer (width from `layout`, padding, border, centering).
//! The only effect is Frame::render_widget() which writes to the buffer.

use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Clear, Padding, Paragraph};
use ratatui::Frame;

use crate::catalog::Category;

use super::layout::{self, PADDING_X, PADDING_Y};
use super::state::{Focus, PathInput, SelectorState};
use super::theme;

/// Title of the selector's top level.
const SELECTOR_TITLE: &str = "Vite Templates";

/// Prompt above the path field.
const PATH_PROMPT: &str = "Where do you want to create the project?";

/// Shown in the empty path field.
const PATH_PLACEHOLDER: &str = "./";

/// Suggestions visible at once.
pub const VISIBLE_SUGGESTIONS: usize = 5;

/// Row of the text field within the path panel's content (after prompt + blank).
const FIELD_ROW: u16 = 2;

// ============================================================================
// SHARED PANEL
// ============================================================================

/// Content of a bordered, centered panel.
struct Panel {
    main: Vec<Line<'static>>,
    /// Optional right-hand column (wrapped text).
    side: Option<String>,
    max_width: u16,
}

/// Lay out and draw a panel. Returns the area of the main column.
fn render_panel(panel: Panel, frame: &mut Frame) -> Rect {
    let area = frame.area();
    let width = layout::column_width(area.width, &panel.main);

    let main: Vec<Line<'static>> = panel
        .main
        .into_iter()
        .map(|line| layout::pad_line(line, width))
        .collect();

    let side: Option<Vec<Line<'static>>> = panel.side.map(|text| {
        textwrap::wrap(&text, usize::from(width.max(1)))
            .into_iter()
            .map(|chunk| layout::pad_line(Line::styled(chunk.into_owned(), theme::STYLE_DESCRIPTION), width))
            .collect()
    });

    let side_height = side.as_ref().map_or(0, Vec::len);
    let content_height = u16::try_from(main.len().max(side_height)).unwrap_or(u16::MAX);
    let content_width = if side.is_some() { width.saturating_mul(2) } else { width };

    let (outer_w, outer_h) = layout::panel_size(content_width, content_height, panel.max_width, area);
    let outer = layout::centered(area, outer_w, outer_h);

    let block = Block::bordered()
        .border_type(BorderType::QuadrantInside)
        .border_style(theme::STYLE_BORDER)
        .style(theme::STYLE_PANEL)
        .padding(Padding::new(PADDING_X, PADDING_X, PADDING_Y, PADDING_Y));
    let inner = block.inner(outer);

    frame.render_widget(Clear, outer);
    frame.render_widget(block, outer);

    let [main_area, side_area] =
        Layout::horizontal([Constraint::Length(width), Constraint::Min(0)]).areas(inner);

    frame.render_widget(Paragraph::new(main), main_area);
    if let Some(side) = side {
        frame.render_widget(Paragraph::new(side), side_area);
    }

    main_area
}

/// Uppercase the first character.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A list row, marked and highlighted when under the cursor.
fn list_item(label: String, is_cursor: bool) -> Line<'static> {
    if is_cursor {
        Line::styled(format!("> {}", label), theme::STYLE_CURSOR)
    } else {
        Line::from(format!("  {}", label))
    }
}

// ============================================================================
// SCREEN: TEMPLATE SELECTOR
// ============================================================================

/// Content lines of the selector (header, items, footer).
pub fn selector_lines(state: &SelectorState, catalog: &[Category]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    match state.active_category.and_then(|i| catalog.get(i)) {
        Some(category) => {
            lines.push(Line::styled(capitalize(category.name), theme::STYLE_TITLE));
            for (i, variant) in category.variants.iter().enumerate() {
                lines.push(list_item(capitalize(variant.language), i == state.cursor));
            }
            lines.push(Line::from(""));
            lines.push(Line::styled("press left or h to go back", theme::STYLE_HELP));
        }
        None => {
            lines.push(Line::styled(SELECTOR_TITLE, theme::STYLE_TITLE));
            lines.push(Line::from(""));
            for (i, category) in catalog.iter().enumerate() {
                lines.push(list_item(capitalize(category.name), i == state.cursor));
            }
            lines.push(Line::from(""));
            lines.push(Line::styled(
                "press left, h, q, esc or ctrl-c to exit",
                theme::STYLE_HELP,
            ));
        }
    }

    lines
}

/// Render the template selector.
pub fn render_selector(state: &SelectorState, catalog: &[Category], frame: &mut Frame) {
    let side = catalog
        .get(state.indicated_category())
        .and_then(Category::description)
        .map(str::to_string);

    let panel = Panel {
        main: selector_lines(state, catalog),
        side,
        max_width: layout::selector_max_width(frame.area().width),
    };
    render_panel(panel, frame);
}

// ============================================================================
// SCREEN: PATH INPUT
// ============================================================================

/// First suggestion index shown, so the cursor stays in the visible window.
pub fn suggestion_offset(cursor: usize) -> usize {
    (cursor + 1).saturating_sub(VISIBLE_SUGGESTIONS)
}

/// Content lines of the path screen (prompt, field, suggestions).
pub fn path_lines(input: &PathInput) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::styled(PATH_PROMPT, theme::STYLE_TITLE),
        Line::from(""),
    ];

    let value = input.field.value();
    if value.is_empty() && input.focus == Focus::Editing {
        lines.push(Line::from(Span::styled(PATH_PLACEHOLDER, theme::STYLE_PLACEHOLDER)));
    } else {
        lines.push(Line::from(value.to_string()));
    }

    let offset = suggestion_offset(input.suggestion_cursor);
    for (i, suggestion) in input
        .suggestions
        .iter()
        .enumerate()
        .skip(offset)
        .take(VISIBLE_SUGGESTIONS)
    {
        lines.push(list_item(suggestion.clone(), i == input.suggestion_cursor));
    }

    lines
}

/// Render the path screen. The terminal cursor sits in the field while editing.
pub fn render_path(input: &PathInput, frame: &mut Frame) {
    let panel = Panel {
        main: path_lines(input),
        side: None,
        max_width: layout::PATH_PANEL_MAX_WIDTH,
    };
    let main_area = render_panel(panel, frame);

    if input.focus == Focus::Editing && main_area.height > FIELD_ROW {
        let right_edge = (main_area.x + main_area.width).saturating_sub(1);
        let x = main_area
            .x
            .saturating_add(input.field.cursor_column())
            .min(right_edge);
        frame.set_cursor_position(Position::new(x, main_area.y + FIELD_ROW));
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::VITE_TEMPLATES;
    use crate::test_support::MemoryFilesystem;
    use crate::tui::text_field::Edit;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn make_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
        let backend = TestBackend::new(width, height);
        Terminal::new(backend).unwrap()
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol().to_string())
            .collect()
    }

    fn line_texts(lines: &[Line]) -> Vec<String> {
        lines.iter().map(|line| line.to_string()).collect()
    }

    fn input_with(text: &str, suggestions: &[&str]) -> PathInput {
        let mut input = PathInput::default();
        input.field.set_value(text);
        input.set_suggestions(suggestions.iter().map(|s| s.to_string()).collect());
        input
    }

    // -- helpers -----------------------------------------------------------

    #[test]
    fn capitalize_first_char_only() {
        assert_eq!(capitalize("react-swc"), "React-swc");
        assert_eq!(capitalize("évite"), "Évite");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn suggestion_window_follows_cursor() {
        assert_eq!(suggestion_offset(0), 0);
        assert_eq!(suggestion_offset(4), 0);
        assert_eq!(suggestion_offset(5), 1);
        assert_eq!(suggestion_offset(9), 5);
    }

    // -- selector lines ------------------------------------------------------

    #[test]
    fn top_level_lists_categories_with_cursor_marker() {
        let state = SelectorState { active_category: None, cursor: 1 };
        let lines = line_texts(&selector_lines(&state, VITE_TEMPLATES));
        assert_eq!(lines[0], "Vite Templates");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "  Svelte");
        assert_eq!(lines[3], "> React");
        assert!(lines.last().unwrap().contains("to exit"));
        assert_eq!(lines.len(), VITE_TEMPLATES.len() + 4);
    }

    #[test]
    fn sub_menu_lists_variants_under_category_name() {
        let state = SelectorState { active_category: Some(7), cursor: 0 };
        let lines = line_texts(&selector_lines(&state, VITE_TEMPLATES));
        assert_eq!(lines[0], "React-swc");
        assert_eq!(lines[1], "> Javascript");
        assert_eq!(lines[2], "  Typescript");
        assert!(lines.last().unwrap().contains("go back"));
    }

    // -- selector rendering --------------------------------------------------

    #[test]
    fn selector_renders_description_of_category_under_cursor() {
        let mut terminal = make_terminal(120, 30);
        let state = SelectorState { active_category: None, cursor: 2 };
        terminal
            .draw(|frame| render_selector(&state, VITE_TEMPLATES, frame))
            .unwrap();

        let content = buffer_text(&terminal);
        assert!(content.contains("Vite Templates"));
        assert!(content.contains("> Vue"));
        assert!(content.contains("progressive"), "Vue description should be shown");
    }

    #[test]
    fn sub_menu_keeps_active_category_description() {
        let mut terminal = make_terminal(120, 30);
        let state = SelectorState { active_category: Some(0), cursor: 1 };
        terminal
            .draw(|frame| render_selector(&state, VITE_TEMPLATES, frame))
            .unwrap();

        let content = buffer_text(&terminal);
        assert!(content.contains("> Typescript"));
        assert!(content.contains("radical"), "Svelte description should be shown");
    }

    #[test]
    fn selector_panel_is_centered() {
        let mut terminal = make_terminal(120, 30);
        let state = SelectorState::new();
        terminal
            .draw(|frame| render_selector(&state, VITE_TEMPLATES, frame))
            .unwrap();

        let buffer = terminal.backend().buffer();
        // Corners of the screen stay blank
        assert_eq!(buffer[(0, 0)].symbol(), " ");
        assert_eq!(buffer[(119, 29)].symbol(), " ");
    }

    #[test]
    fn selector_survives_tiny_terminal() {
        let mut terminal = make_terminal(8, 3);
        let state = SelectorState { active_category: Some(1), cursor: 1 };
        terminal
            .draw(|frame| render_selector(&state, VITE_TEMPLATES, frame))
            .expect("render should not panic");
    }

    // -- path lines ----------------------------------------------------------

    #[test]
    fn empty_field_shows_placeholder() {
        let lines = line_texts(&path_lines(&PathInput::default()));
        assert_eq!(lines[0], PATH_PROMPT);
        assert_eq!(lines[2], "./");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn at_most_five_suggestions_are_shown() {
        let input = input_with("/etc/", &["a", "b", "c", "d", "e", "f", "g"]);
        let lines = line_texts(&path_lines(&input));
        assert_eq!(lines[2], "/etc/");
        assert_eq!(&lines[3..], &["> a", "  b", "  c", "  d", "  e"]);
    }

    #[test]
    fn suggestion_window_scrolls_to_cursor() {
        let mut input = input_with("/etc/", &["a", "b", "c", "d", "e", "f", "g"]);
        input.suggestion_cursor = 6;
        let lines = line_texts(&path_lines(&input));
        assert_eq!(&lines[3..], &["  c", "  d", "  e", "  f", "> g"]);
    }

    // -- path rendering ------------------------------------------------------

    #[test]
    fn path_screen_renders_field_and_suggestions() {
        let fs = MemoryFilesystem::new().with_dir("/etc", &["hosts", "passwd"]);
        let mut input = PathInput::new(&fs);
        for c in "/etc/".chars() {
            input.field.apply(Edit::Insert(c));
        }
        input.refresh_suggestions(&fs);

        let mut terminal = make_terminal(100, 20);
        terminal.draw(|frame| render_path(&input, frame)).unwrap();

        let content = buffer_text(&terminal);
        assert!(content.contains(PATH_PROMPT));
        assert!(content.contains("/etc/"));
        assert!(content.contains("> hosts"));
        assert!(content.contains("  passwd"));
    }

    #[test]
    fn path_panel_respects_fixed_max_width() {
        let long = "x".repeat(150);
        let input = input_with(&long, &[]);
        let mut terminal = make_terminal(200, 20);
        terminal.draw(|frame| render_path(&input, frame)).unwrap();

        let buffer = terminal.backend().buffer();
        let row_with_border = (0..200u16)
            .filter(|&x| buffer[(x, 10)].symbol() != " ")
            .count();
        assert!(row_with_border <= usize::from(layout::PATH_PANEL_MAX_WIDTH));
    }

    #[test]
    fn cursor_sits_in_field_while_editing() {
        let input = input_with("abc", &[]);
        let mut terminal = make_terminal(100, 20);
        terminal.draw(|frame| render_path(&input, frame)).unwrap();

        let position = terminal.get_cursor_position().unwrap();
        let buffer = terminal.backend().buffer();
        // The character before the cursor is the last typed one
        assert_eq!(buffer[(position.x - 1, position.y)].symbol(), "c");
    }

    #[test]
    fn cursor_stays_inside_panel_for_oversized_text() {
        let input = input_with(&"x".repeat(70_000), &[]);
        let mut terminal = make_terminal(100, 20);
        terminal.draw(|frame| render_path(&input, frame)).unwrap();

        let position = terminal.get_cursor_position().unwrap();
        assert!(position.x < 100);
    }
}
