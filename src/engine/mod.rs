//! engine
//!
//! Orchestrates one generator run: Resolve -> Invoke -> Report.
//!
//! # Lifecycle
//!
//! ```text
//! Resolving -> Invoking -> Succeeded
//!     |            |
//!     +------------+-----> Failed
//! ```
//!
//! 1. **Resolve**: read the manifest once and merge it with explicit flags
//! 2. **Invoke**: call the generator exactly once with the resolved descriptor
//! 3. **Report**: silence and exit 0 on success; message and exit 1 on failure
//!
//! # Invariants
//!
//! - The generator is never called if resolution fails
//! - Failures are reported once, at the runner boundary, without retries
//! - No state survives between runs

pub mod runner;

pub use runner::{exit_code, finish, InvocationRunner, RunError, RunState};

use std::path::{Path, PathBuf};

use crate::ui::output::Verbosity;

/// Execution context for a run.
///
/// Contains global settings derived from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Project directory override.
    pub cwd: Option<PathBuf>,
    /// Debug logging enabled.
    pub debug: bool,
    /// Quiet mode (minimal output).
    pub quiet: bool,
    /// Resolve only; do not invoke the generator.
    pub dry_run: bool,
}

impl Context {
    /// Output verbosity implied by the flags.
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug)
    }

    /// Directory holding the manifest; the generator runs here too.
    ///
    /// Falls back to `.` when no override is given, which resolves against
    /// the process working directory.
    pub fn project_dir(&self) -> &Path {
        self.cwd.as_deref().unwrap_or_else(|| Path::new("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod context {
        use super::*;

        #[test]
        fn default_values() {
            let ctx = Context::default();
            assert!(ctx.cwd.is_none());
            assert!(!ctx.debug);
            assert!(!ctx.quiet);
            assert!(!ctx.dry_run);
            assert_eq!(ctx.project_dir(), Path::new("."));
            assert_eq!(ctx.verbosity(), Verbosity::Normal);
        }

        #[test]
        fn custom_values() {
            let ctx = Context {
                cwd: Some(PathBuf::from("/custom")),
                debug: true,
                quiet: false,
                dry_run: true,
            };
            assert_eq!(ctx.project_dir(), Path::new("/custom"));
            assert_eq!(ctx.verbosity(), Verbosity::Debug);
        }

        #[test]
        fn quiet_beats_debug() {
            let ctx = Context {
                debug: true,
                quiet: true,
                ..Default::default()
            };
            assert_eq!(ctx.verbosity(), Verbosity::Quiet);
        }
    }
}
