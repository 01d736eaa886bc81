//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::{HashMap, VecDeque};
use std::io;
use std::path::{Path, PathBuf};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use crate::completion::Filesystem;
use crate::scaffold::{ScaffoldError, ScaffoldRequest, Scaffolder};
use crate::tui::run::EventSource;

/// An in-memory directory tree. Directories are keyed by their exact path.
#[derive(Debug, Default, Clone)]
pub struct MemoryFilesystem {
    dirs: HashMap<PathBuf, Vec<String>>,
    home: Option<PathBuf>,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory with the given entries (in listing order).
    pub fn with_dir(mut self, path: impl Into<PathBuf>, entries: &[&str]) -> Self {
        self.dirs
            .insert(path.into(), entries.iter().map(|e| e.to_string()).collect());
        self
    }

    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }
}

impl Filesystem for MemoryFilesystem {
    fn list_dir(&self, path: &Path) -> io::Result<Vec<String>> {
        self.dirs
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, path.display().to_string()))
    }

    fn home_dir(&self) -> Option<PathBuf> {
        self.home.clone()
    }
}

/// Replays a fixed list of terminal events, then reports end of input.
pub struct ScriptedEvents(VecDeque<Event>);

impl ScriptedEvents {
    pub fn new(events: impl IntoIterator<Item = Event>) -> Self {
        Self(events.into_iter().collect())
    }

    /// Build a script from plain key codes (no modifiers).
    pub fn keys(codes: impl IntoIterator<Item = KeyCode>) -> Self {
        Self::new(codes.into_iter().map(key))
    }
}

impl EventSource for ScriptedEvents {
    fn next_event(&mut self) -> io::Result<Event> {
        self.0
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }
}

/// A key press without modifiers.
pub fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

/// A key press with Ctrl held.
pub fn ctrl(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

/// Each character of `text` as a separate key press.
pub fn typed(text: &str) -> Vec<Event> {
    text.chars().map(|c| key(KeyCode::Char(c))).collect()
}

/// Records every request instead of running anything.
#[derive(Debug, Default)]
pub struct RecordingScaffolder {
    pub requests: Vec<ScaffoldRequest>,
}

impl Scaffolder for RecordingScaffolder {
    fn scaffold(&mut self, request: &ScaffoldRequest) -> Result<(), ScaffoldError> {
        self.requests.push(request.clone());
        Ok(())
    }
}
