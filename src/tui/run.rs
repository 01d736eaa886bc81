//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//! Kept minimal: the decisions live in the pure layers.
//!
//! Single-threaded: each screen blocks on the next terminal event, applies
//! one transition, and redraws the whole frame before reading again.

use std::fmt;
use std::io;
use std::path::Path;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use log::{debug, info};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;

use crate::catalog::Category;
use crate::completion::Filesystem;
use crate::scaffold::{ScaffoldError, ScaffoldRequest, Scaffolder};

use super::state::{Focus, Outcome, PathAction, PathInput, Selection, SelectorAction, SelectorState, Transition};
use super::text_field::Edit;
use super::update::{update_path, update_selector};
use super::view::{render_path, render_selector};

// ============================================================================
// KEY MAPPING
// ============================================================================

fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

/// Map a key event to a selector action.
///
/// Returns None for keys that don't map to any action.
pub fn map_selector_key(key: KeyEvent) -> Option<SelectorAction> {
    // Ctrl+C always quits
    if is_ctrl_c(&key) {
        return Some(SelectorAction::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(SelectorAction::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(SelectorAction::MoveDown),
        KeyCode::Enter => Some(SelectorAction::Confirm),
        KeyCode::Left | KeyCode::Char('h') => Some(SelectorAction::Back),
        KeyCode::Esc | KeyCode::Char('q') => Some(SelectorAction::Quit),
        _ => None,
    }
}

/// Map a key event to a path-screen action.
///
/// Letters are navigation while browsing suggestions but plain text while
/// editing, so the mapping depends on focus.
pub fn map_path_key(key: KeyEvent, focus: Focus) -> Option<PathAction> {
    if is_ctrl_c(&key) || key.code == KeyCode::Esc {
        return Some(PathAction::Cancel);
    }
    if key.code == KeyCode::Enter {
        return Some(PathAction::Confirm);
    }

    match focus {
        Focus::BrowsingSuggestions => match key.code {
            KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => Some(PathAction::MoveUp),
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => Some(PathAction::MoveDown),
            _ => None,
        },
        Focus::Editing => {
            if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
                return Some(PathAction::Blur);
            }
            map_edit_key(key).map(PathAction::Edit)
        }
    }
}

/// Ordinary line-editing keys.
fn map_edit_key(key: KeyEvent) -> Option<Edit> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('a') => Some(Edit::Home),
            KeyCode::Char('e') => Some(Edit::End),
            KeyCode::Char('u') => Some(Edit::ClearToStart),
            KeyCode::Char('k') => Some(Edit::ClearToEnd),
            KeyCode::Char('w') | KeyCode::Backspace => Some(Edit::DeleteWordBack),
            KeyCode::Char('h') => Some(Edit::DeleteBack),
            KeyCode::Left => Some(Edit::Home),
            KeyCode::Right => Some(Edit::End),
            _ => None,
        };
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        return match key.code {
            KeyCode::Backspace => Some(Edit::DeleteWordBack),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char(c) => Some(Edit::Insert(c)),
        KeyCode::Backspace => Some(Edit::DeleteBack),
        KeyCode::Delete => Some(Edit::DeleteForward),
        KeyCode::Left => Some(Edit::Left),
        KeyCode::Right => Some(Edit::Right),
        KeyCode::Home | KeyCode::Up => Some(Edit::Home),
        KeyCode::End | KeyCode::Down => Some(Edit::End),
        _ => None,
    }
}

// ============================================================================
// ERRORS
// ============================================================================

/// Fatal wizard failure. Cancelling is not one of these.
#[derive(Debug)]
pub enum WizardError {
    /// Terminal setup, drawing or event reading failed.
    Terminal(String),
    /// A selection that doesn't exist in the catalog.
    UnknownSelection(Selection),
    /// Handing off to the generator failed.
    Scaffold(ScaffoldError),
}

impl fmt::Display for WizardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WizardError::Terminal(msg) => write!(f, "Terminal error: {}", msg),
            WizardError::UnknownSelection(s) => {
                write!(f, "No template at category {}, variant {}", s.category, s.variant)
            }
            WizardError::Scaffold(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for WizardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WizardError::Scaffold(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for WizardError {
    fn from(e: io::Error) -> Self {
        WizardError::Terminal(e.to_string())
    }
}

impl From<ScaffoldError> for WizardError {
    fn from(e: ScaffoldError) -> Self {
        WizardError::Scaffold(e)
    }
}

// ============================================================================
// EVENT SOURCE
// ============================================================================

/// Where terminal events come from.
pub trait EventSource {
    /// Block until the next event.
    fn next_event(&mut self) -> io::Result<Event>;
}

/// Events from the real terminal.
pub struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn next_event(&mut self) -> io::Result<Event> {
        event::read()
    }
}

/// Next key press. Resizes and other events yield None (the caller just
/// redraws); key releases are dropped.
fn next_key(events: &mut impl EventSource) -> Result<Option<KeyEvent>, WizardError> {
    match events.next_event()? {
        Event::Key(key) if key.kind != KeyEventKind::Release => {
            debug!("key {:?} with modifiers {:?}", key.code, key.modifiers);
            Ok(Some(key))
        }
        _ => Ok(None),
    }
}

fn draw_error(e: impl fmt::Display) -> WizardError {
    WizardError::Terminal(e.to_string())
}

// ============================================================================
// SCREEN LOOPS
// ============================================================================

/// Run the template selector until a variant is picked or the user leaves.
pub fn run_selector<B>(
    terminal: &mut Terminal<B>,
    events: &mut impl EventSource,
    catalog: &[Category],
) -> Result<Outcome<Selection>, WizardError>
where
    B: Backend,
    B::Error: fmt::Display,
{
    info!("template selector started ({} categories)", catalog.len());
    let mut state = SelectorState::new();

    loop {
        terminal
            .draw(|frame| render_selector(&state, catalog, frame))
            .map_err(draw_error)?;

        let Some(action) = next_key(events)?.and_then(map_selector_key) else {
            continue;
        };

        match update_selector(state, action, catalog) {
            Transition::Screen(next) => state = next,
            Transition::Exit(outcome) => {
                info!("template selector finished: {:?}", outcome);
                return Ok(outcome);
            }
        }
    }
}

/// Run the path screen until the user confirms a path or leaves.
pub fn run_path_input<B>(
    terminal: &mut Terminal<B>,
    events: &mut impl EventSource,
    fs: &impl Filesystem,
) -> Result<Outcome<String>, WizardError>
where
    B: Backend,
    B::Error: fmt::Display,
{
    info!("path input started");
    let mut input = PathInput::new(fs);

    loop {
        terminal
            .draw(|frame| render_path(&input, frame))
            .map_err(draw_error)?;

        let Some(action) = next_key(events)?.and_then(|key| map_path_key(key, input.focus)) else {
            continue;
        };

        let screen = std::mem::take(&mut input);
        match update_path(screen, action, fs) {
            Transition::Screen(next) => input = next,
            Transition::Exit(outcome) => {
                info!("path input finished: {:?}", outcome);
                return Ok(outcome);
            }
        }
    }
}

/// What both screens produced together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardChoice {
    pub selection: Selection,
    pub path: String,
}

/// Run both screens in order. The path screen only starts if a template
/// was confirmed.
pub fn run_screens<B>(
    terminal: &mut Terminal<B>,
    events: &mut impl EventSource,
    catalog: &[Category],
    fs: &impl Filesystem,
) -> Result<Outcome<WizardChoice>, WizardError>
where
    B: Backend,
    B::Error: fmt::Display,
{
    let selection = match run_selector(terminal, events, catalog)? {
        Outcome::Confirmed(selection) => selection,
        Outcome::Cancelled => return Ok(Outcome::Cancelled),
    };

    let path = match run_path_input(terminal, events, fs)? {
        Outcome::Confirmed(path) => path,
        Outcome::Cancelled => return Ok(Outcome::Cancelled),
    };

    Ok(Outcome::Confirmed(WizardChoice { selection, path }))
}

// ============================================================================
// HAND-OFF
// ============================================================================

/// Turn the wizard's result into a generator run.
///
/// A cancelled wizard never reaches the scaffolder. Returns the request
/// that was executed, if any.
pub fn hand_off(
    outcome: Outcome<WizardChoice>,
    catalog: &[Category],
    scaffolder: &mut impl Scaffolder,
    home: Option<&Path>,
    cwd: &Path,
) -> Result<Option<ScaffoldRequest>, WizardError> {
    let choice = match outcome {
        Outcome::Confirmed(choice) => choice,
        Outcome::Cancelled => {
            info!("wizard cancelled, nothing to create");
            return Ok(None);
        }
    };

    let variant = choice
        .selection
        .variant(catalog)
        .ok_or(WizardError::UnknownSelection(choice.selection))?;
    let request = ScaffoldRequest::new(variant.identifier, &choice.path, home, cwd)?;

    info!(
        "scaffolding {} into {}",
        request.template,
        request.target.display()
    );
    scaffolder.scaffold(&request)?;
    Ok(Some(request))
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// ENTRY POINT
// ============================================================================

/// Run the whole wizard on the real terminal, then hand off.
///
/// The terminal is restored before the scaffolder runs, since the
/// generator is interactive and writes to the normal screen.
pub fn run(
    catalog: &[Category],
    fs: &impl Filesystem,
    scaffolder: &mut impl Scaffolder,
) -> Result<Option<ScaffoldRequest>, WizardError> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;

    let outcome = run_screens(&mut terminal, &mut TerminalEvents, catalog, fs);
    restore_terminal()?;
    let outcome = outcome?;

    let cwd = std::env::current_dir().map_err(ScaffoldError::CurrentDir)?;
    hand_off(outcome, catalog, scaffolder, fs.home_dir().as_deref(), &cwd)
}

// ============================================================================
// TESTS
// ============================================================================
