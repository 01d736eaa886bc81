//! TUI module for the interactive wizard.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: Pure data types (screen states, actions, outcomes)
//! - `update`: Pure transitions
//! - `view`: Pure rendering, on top of `layout` geometry and `theme` styles
//! - `run`: Effects (terminal, event loop, hand-off)

pub mod layout;
pub mod run;
pub mod state;
pub mod text_field;
pub mod theme;
pub mod update;
pub mod view;
