//! Hand-off to the external project generator (`npm create vite`).
//!
//! Structure:
//! - Types: the request the wizard produces, errors
//! - Pure functions: target path resolution, command construction
//! - Effect implementations of [`Scaffolder`]: real (npm) and dry run
//!
//! The interactive core never touches these side effects directly; it only
//! produces a [`ScaffoldRequest`] and hands it to a `Scaffolder`.

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};
use std::process::{Command, ExitStatus};

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::{Color, Stylize};
use crossterm::terminal::{Clear, ClearType};
use log::{error, info};

/// Generator program.
const NPM: &str = "npm";

/// Package specifier passed to `npm create`.
const CREATE_VITE: &str = "vite@latest";

/// Success banner color (matches the wizard's panel border).
const BANNER_COLOR: Color = Color::Rgb { r: 0x25, g: 0xb8, b: 0x6e };

// ============================================================================
// TYPES
// ============================================================================

/// Everything the generator needs: which template, and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    /// Variant identifier, e.g. "react-ts".
    pub template: String,
    /// Absolute, lexically normalized project directory.
    pub target: PathBuf,
}

/// Failure while handing off to the generator. All variants are fatal.
#[derive(Debug)]
pub enum ScaffoldError {
    /// Path starts with `~` but the home directory is unknown.
    HomeNotFound,
    /// The working directory could not be read (needed for relative paths).
    CurrentDir(io::Error),
    /// Path has no final component to use as the project name (e.g. `/`).
    NoProjectName { path: PathBuf },
    /// Parent directory could not be created.
    CreateDir { path: PathBuf, source: io::Error },
    /// Generator could not be started.
    Spawn { program: String, source: io::Error },
    /// Generator ran but exited unsuccessfully.
    Failed { status: ExitStatus },
}

// ============================================================================
// PURE FUNCTIONS
// ============================================================================

/// Resolve the raw text of the path field into an absolute directory.
///
/// A leading `~` is replaced with `home`; relative paths are joined onto
/// `cwd`; `.` and `..` are removed lexically (no filesystem access).
pub fn resolve_target(raw: &str, home: Option<&Path>, cwd: &Path) -> Result<PathBuf, ScaffoldError> {
    let expanded = match raw.strip_prefix('~') {
        Some(rest) => {
            let home = home.ok_or(ScaffoldError::HomeNotFound)?;
            PathBuf::from(format!("{}{}", home.to_string_lossy(), rest))
        }
        None => PathBuf::from(raw),
    };

    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        cwd.join(expanded)
    };

    Ok(normalize(&absolute))
}

/// Drop `.` components and fold `..` into its parent.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

impl ScaffoldRequest {
    /// Build a request, resolving the target path.
    pub fn new(
        template: &str,
        raw_path: &str,
        home: Option<&Path>,
        cwd: &Path,
    ) -> Result<Self, ScaffoldError> {
        let target = resolve_target(raw_path, home, cwd)?;
        if target.file_name().is_none() {
            return Err(ScaffoldError::NoProjectName { path: target });
        }
        Ok(ScaffoldRequest {
            template: template.to_string(),
            target,
        })
    }

    /// Final path component, used as the project name.
    pub fn project_name(&self) -> String {
        self.target
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Directory the generator runs in.
    pub fn parent_dir(&self) -> &Path {
        self.target.parent().unwrap_or(Path::new("/"))
    }

    /// Full generator command line, program first.
    pub fn command_line(&self) -> Vec<String> {
        vec![
            NPM.to_string(),
            "create".to_string(),
            CREATE_VITE.to_string(),
            self.project_name(),
            "--".to_string(),
            "--template".to_string(),
            self.template.clone(),
        ]
    }
}

// ============================================================================
// COLLABORATOR
// ============================================================================

/// Performs the side effects of creating a project.
pub trait Scaffolder {
    fn scaffold(&mut self, request: &ScaffoldRequest) -> Result<(), ScaffoldError>;
}

/// Runs `npm create vite@latest` with inherited stdio.
#[derive(Debug, Default)]
pub struct NpmScaffolder;

impl Scaffolder for NpmScaffolder {
    fn scaffold(&mut self, request: &ScaffoldRequest) -> Result<(), ScaffoldError> {
        let parent = request.parent_dir();
        if !parent.exists() {
            info!("creating parent directory {}", parent.display());
            fs::create_dir_all(parent).map_err(|source| ScaffoldError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let command = request.command_line();
        println!("Creating project...");
        println!("Running command: {:?}", command);
        info!("running {:?} in {}", command, parent.display());

        let status = Command::new(&command[0])
            .args(&command[1..])
            .current_dir(parent)
            .status()
            .map_err(|source| ScaffoldError::Spawn {
                program: command[0].clone(),
                source,
            })?;

        if !status.success() {
            error!("generator exited with {}", status);
            return Err(ScaffoldError::Failed { status });
        }

        // Banner is cosmetic; a failed clear must not fail the run
        let _ = print_success_banner(&mut io::stdout());
        Ok(())
    }
}

/// Clear the screen and print the success message.
fn print_success_banner(out: &mut impl Write) -> io::Result<()> {
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    writeln!(out, "{}", "Project created successfully!".with(BANNER_COLOR))?;
    Ok(())
}

/// Prints what would run, touches nothing.
#[derive(Debug, Default)]
pub struct DryRunScaffolder;

impl Scaffolder for DryRunScaffolder {
    fn scaffold(&mut self, request: &ScaffoldRequest) -> Result<(), ScaffoldError> {
        let command = request.command_line().join(" ");
        info!("dry run: {} in {}", command, request.parent_dir().display());
        println!("DRY RUN - would run in {}:", request.parent_dir().display());
        println!("  {}", command);
        Ok(())
    }
}

// ============================================================================
// DISPLAY
// ============================================================================

impl fmt::Display for ScaffoldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaffoldError::HomeNotFound => write!(f, "Could not determine home directory"),
            ScaffoldError::CurrentDir(e) => write!(f, "Could not read working directory: {}", e),
            ScaffoldError::NoProjectName { path } => {
                write!(f, "No project name in path: {}", path.display())
            }
            ScaffoldError::CreateDir { path, source } => {
                write!(f, "Could not create {}: {}", path.display(), source)
            }
            ScaffoldError::Spawn { program, source } => {
                write!(f, "Could not run {}: {}", program, source)
            }
            ScaffoldError::Failed { status } => write!(f, "Project generator failed ({})", status),
        }
    }
}

impl std::error::Error for ScaffoldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScaffoldError::CurrentDir(e) => Some(e),
            ScaffoldError::CreateDir { source, .. } | ScaffoldError::Spawn { source, .. } => {
                Some(source)
            }
            _ => None,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn home() -> Option<&'static Path> {
        Some(Path::new("/home/ana"))
    }

    fn cwd() -> &'static Path {
        Path::new("/work")
    }

    #[test]
    fn tilde_resolves_against_home() {
        let target = resolve_target("~/apps/site", home(), cwd()).unwrap();
        assert_eq!(target, PathBuf::from("/home/ana/apps/site"));
    }

    #[test]
    fn tilde_without_home_is_an_error() {
        let result = resolve_target("~/apps/site", None, cwd());
        assert!(matches!(result, Err(ScaffoldError::HomeNotFound)));
    }

    #[test]
    fn relative_path_joins_cwd() {
        let target = resolve_target("./site", home(), cwd()).unwrap();
        assert_eq!(target, PathBuf::from("/work/site"));
    }

    #[test]
    fn dot_dot_is_folded() {
        let target = resolve_target("../other/./site", home(), cwd()).unwrap();
        assert_eq!(target, PathBuf::from("/other/site"));
    }

    #[test]
    fn absolute_path_is_kept() {
        let target = resolve_target("/srv/site", home(), cwd()).unwrap();
        assert_eq!(target, PathBuf::from("/srv/site"));
    }

    #[test]
    fn root_has_no_project_name() {
        let result = ScaffoldRequest::new("react", "/", home(), cwd());
        assert!(matches!(result, Err(ScaffoldError::NoProjectName { .. })));
    }

    #[test]
    fn command_line_matches_create_vite() {
        let request = ScaffoldRequest::new("react-ts", "~/apps/site", home(), cwd()).unwrap();
        assert_eq!(
            request.command_line(),
            vec!["npm", "create", "vite@latest", "site", "--", "--template", "react-ts"]
        );
        assert_eq!(request.parent_dir(), Path::new("/home/ana/apps"));
        assert_eq!(request.project_name(), "site");
    }

    #[test]
    fn dry_run_succeeds_without_side_effects() {
        let request = ScaffoldRequest::new("vue", "/nonexistent/deep/site", home(), cwd()).unwrap();
        DryRunScaffolder.scaffold(&request).unwrap();
        assert!(!Path::new("/nonexistent/deep").exists());
    }

    #[test]
    fn banner_contains_message() {
        let mut out = Vec::new();
        print_success_banner(&mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("Project created successfully!"));
    }

    #[test]
    fn error_messages_are_readable() {
        let err = ScaffoldError::NoProjectName { path: PathBuf::from("/") };
        assert_eq!(err.to_string(), "No project name in path: /");
        assert_eq!(ScaffoldError::HomeNotFound.to_string(), "Could not determine home directory");
    }
}
