//! vite-picker: pick a Vite template and a target path, then scaffold it.

pub mod catalog;
pub mod completion;
pub mod scaffold;
#[cfg(test)]
pub(crate) mod test_support;
pub mod tui;
pub mod types;
