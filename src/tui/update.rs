//! Pure state transitions: (state, action) → Transition.
//!
//! This is the core logic of the wizard. Fully testable without a terminal.
//! Unhandled actions return the current state unchanged (no-op).

use crate::catalog::Category;
use crate::completion::Filesystem;

use super::state::{
    Focus, Outcome, PathAction, PathInput, Selection, SelectorAction, SelectorState, Transition,
};

// ============================================================================
// TEMPLATE SELECTOR
// ============================================================================

/// Selector transition function.
///
/// Cursor movement wraps around the visible list. Confirming a category
/// opens its sub-menu; confirming a variant finishes the screen.
pub fn update_selector(
    state: SelectorState,
    action: SelectorAction,
    catalog: &[Category],
) -> Transition<SelectorState, Selection> {
    let len = state.visible_len(catalog);

    match action {
        SelectorAction::MoveUp => Transition::Screen(SelectorState {
            cursor: wrap_up(state.cursor, len),
            ..state
        }),
        SelectorAction::MoveDown => Transition::Screen(SelectorState {
            cursor: wrap_down(state.cursor, len),
            ..state
        }),
        SelectorAction::Confirm => match state.active_category {
            _ if len == 0 => Transition::Screen(state),
            None => Transition::Screen(SelectorState {
                active_category: Some(state.cursor),
                cursor: 0,
            }),
            Some(category) => Transition::Exit(Outcome::Confirmed(Selection {
                category,
                variant: state.cursor,
            })),
        },
        SelectorAction::Back => match state.active_category {
            Some(_) => Transition::Screen(SelectorState::new()),
            None => Transition::Exit(Outcome::Cancelled),
        },
        SelectorAction::Quit => Transition::Exit(Outcome::Cancelled),
    }
}

/// Previous index, wrapping from the first to the last.
fn wrap_up(cursor: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else if cursor == 0 {
        len - 1
    } else {
        (cursor - 1).min(len - 1)
    }
}

/// Next index, wrapping from the last to the first.
fn wrap_down(cursor: usize, len: usize) -> usize {
    if len == 0 || cursor + 1 >= len {
        0
    } else {
        cursor + 1
    }
}

// ============================================================================
// PATH INPUT
// ============================================================================

/// Path screen transition function.
///
/// Suggestions are recomputed through `fs` after every edit that changes
/// the text. While browsing, the text only changes by accepting a
/// suggestion.
pub fn update_path(
    input: PathInput,
    action: PathAction,
    fs: &impl Filesystem,
) -> Transition<PathInput, String> {
    match input.focus {
        Focus::Editing => update_editing(input, action, fs),
        Focus::BrowsingSuggestions => update_browsing(input, action),
    }
}

fn update_editing(
    mut input: PathInput,
    action: PathAction,
    fs: &impl Filesystem,
) -> Transition<PathInput, String> {
    match action {
        PathAction::Confirm => {
            Transition::Exit(Outcome::Confirmed(input.field.value().to_string()))
        }
        PathAction::Cancel => Transition::Exit(Outcome::Cancelled),
        PathAction::Blur => {
            if !input.suggestions.is_empty() {
                input.focus = Focus::BrowsingSuggestions;
            }
            Transition::Screen(input)
        }
        PathAction::Edit(edit) => {
            input.field.apply(edit);
            input.refresh_suggestions(fs);
            Transition::Screen(input)
        }
        PathAction::MoveUp | PathAction::MoveDown => Transition::Screen(input),
    }
}

fn update_browsing(mut input: PathInput, action: PathAction) -> Transition<PathInput, String> {
    match action {
        PathAction::MoveUp => {
            input.suggestion_cursor = input.suggestion_cursor.saturating_sub(1);
        }
        PathAction::MoveDown => {
            if input.suggestion_cursor + 1 < input.suggestions.len() {
                input.suggestion_cursor += 1;
            }
        }
        PathAction::Confirm => {
            if let Some(suggestion) = input.selected_suggestion().map(str::to_string) {
                input.field.set_value(suggestion);
            }
        }
        PathAction::Cancel => {
            input.suggestions.clear();
            input.suggestion_cursor = 0;
            input.focus = Focus::Editing;
        }
        PathAction::Blur | PathAction::Edit(_) => {}
    }
    Transition::Screen(input)
}

// ============================================================================
// TESTS
// ============================================================================
