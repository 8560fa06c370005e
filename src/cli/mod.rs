//! cli
//!
//! Command-line interface layer for cfn2ts.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments
//! - Wire the filesystem manifest reader and the process generator
//! - Hand the run to [`crate::engine`] and turn its outcome into an exit code
//!
//! # Architecture
//!
//! The CLI layer is thin. Precedence rules live in [`crate::core::config`];
//! the run lifecycle and error reporting live in [`crate::engine::runner`].

pub mod args;

pub use args::Cli;

use anyhow::Result;
use std::process::ExitCode;

use crate::core::config::ExplicitFlags;
use crate::engine::{self, Context, InvocationRunner};
use crate::generator::ProcessGenerator;
use crate::ui::output;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> ExitCode {
    let cli = Cli::parse_args();
    let ctx = cli.context();
    let flags = cli.explicit_flags();

    engine::finish(execute(&ctx, &flags))
}

/// Resolve and generate on a single-threaded runtime.
fn execute(ctx: &Context, flags: &ExplicitFlags) -> Result<()> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let generator = ProcessGenerator::from_env(ctx.project_dir());
    output::debug(
        format!("Generator program: {}", generator.program().display()),
        ctx.verbosity(),
    );

    let runner = InvocationRunner::with_fs_manifest(ctx, &generator);
    let descriptor = rt.block_on(runner.run(flags))?;

    if ctx.dry_run {
        output::print(serde_json::to_string_pretty(&descriptor)?, ctx.verbosity());
    }

    Ok(())
}
