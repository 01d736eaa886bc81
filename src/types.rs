//! Shared types for vite-picker: output formats and run configuration.

use std::path::PathBuf;

// ============================================================================
// ENUMS
// ============================================================================

/// Output format for `vite-picker list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Human,
    /// JSON output for scripting.
    Json,
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Configuration for one wizard run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardConfig {
    /// Print the generator command instead of running it.
    pub dry_run: bool,
    /// Where to write the log. None disables logging.
    pub log_file: Option<PathBuf>,
    /// Log at debug level instead of info.
    pub verbose: bool,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            dry_run: false,
            log_file: default_log_file(),
            verbose: false,
        }
    }
}

/// Returns the default log file location.
///
/// On Linux: ~/.cache/vite-picker/wizard.log
pub fn default_log_file() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("vite-picker").join("wizard.log"))
}

// ============================================================================
// TESTS
// ============================================================================
