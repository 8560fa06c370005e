//! engine::runner
//!
//! Single-shot invocation of the generator.
//!
//! # Governing Principle
//!
//! A run resolves its configuration, calls the generator at most once, and
//! reports the outcome at exactly one place. Resolution failures stop the
//! run before the generator is touched. Generator failures are caught here
//! and passed up with their message intact. Nothing is retried.
//!
//! # Example
//!
//! ```
//! use cfn2ts::core::config::ExplicitFlags;
//! use cfn2ts::core::manifest::StaticManifestReader;
//! use cfn2ts::engine::{Context, InvocationRunner};
//! use cfn2ts::generator::mock::MockGenerator;
//!
//! # tokio_test::block_on(async {
//! let ctx = Context::default();
//! let reader = StaticManifestReader::absent();
//! let generator = MockGenerator::new();
//!
//! let flags = ExplicitFlags {
//!     scope: vec!["AWS::EC2".to_string()],
//!     ..Default::default()
//! };
//! let descriptor = InvocationRunner::new(&ctx, &reader, &generator)
//!     .run(&flags)
//!     .await
//!     .unwrap();
//!
//! assert_eq!(descriptor.scope.as_slice(), ["AWS::EC2"]);
//! assert_eq!(generator.call_count(), 1);
//! # });
//! ```

use std::fmt::Display;
use std::path::Path;
use std::process::ExitCode;
use thiserror::Error;

use super::Context;
use crate::core::config::{ConfigResolver, ExplicitFlags, InvocationDescriptor, ResolveError};
use crate::core::manifest::{FsManifestReader, ManifestReader};
use crate::generator::{GenerationError, Generator};
use crate::ui::output;

/// Phase of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Reading the manifest and merging flags.
    Resolving,
    /// Waiting on the generator.
    Invoking,
    /// Generator finished (or dry run resolved).
    Succeeded,
    /// Run aborted with an error.
    Failed,
}

impl std::fmt::Display for RunState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RunState::Resolving => "resolving",
            RunState::Invoking => "invoking",
            RunState::Succeeded => "succeeded",
            RunState::Failed => "failed",
        };
        write!(f, "{}", name)
    }
}

/// Errors that end a run.
///
/// Both variants display the underlying message unchanged.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Generation(#[from] GenerationError),
}

impl RunError {
    /// The phase the run was in when it failed.
    pub fn failed_in(&self) -> RunState {
        match self {
            RunError::Resolve(_) => RunState::Resolving,
            RunError::Generation(_) => RunState::Invoking,
        }
    }
}

/// Drives one run from flags to generator.
///
/// A runner is consumed by [`run`](Self::run); build a new one per run.
pub struct InvocationRunner<'a> {
    ctx: &'a Context,
    reader: &'a dyn ManifestReader,
    generator: &'a dyn Generator,
    state: RunState,
}

impl<'a> InvocationRunner<'a> {
    /// Create a runner with explicit collaborators.
    pub fn new(
        ctx: &'a Context,
        reader: &'a dyn ManifestReader,
        generator: &'a dyn Generator,
    ) -> Self {
        Self {
            ctx,
            reader,
            generator,
            state: RunState::Resolving,
        }
    }

    /// Create a runner that reads `package.json` from the project directory.
    pub fn with_fs_manifest(ctx: &'a Context, generator: &'a dyn Generator) -> Self {
        Self::new(ctx, &FsManifestReader, generator)
    }

    /// Resolve configuration and invoke the generator once.
    ///
    /// In dry-run mode the generator is skipped and the resolved descriptor
    /// is returned as the result.
    ///
    /// # Errors
    ///
    /// - [`RunError::Resolve`] if the manifest is unreadable or no scope can
    ///   be determined; the generator is not called
    /// - [`RunError::Generation`] if the generator fails
    pub async fn run(mut self, flags: &ExplicitFlags) -> Result<InvocationDescriptor, RunError> {
        let ctx = self.ctx;
        let verbosity = ctx.verbosity();
        let project_dir = ctx.project_dir();

        output::debug(
            format!(
                "Reading {} manifest for {}",
                self.reader.name(),
                project_dir.display()
            ),
            verbosity,
        );
        let descriptor = match ConfigResolver::new(self.reader)
            .resolve(flags, project_dir)
            .await
        {
            Ok(descriptor) => descriptor,
            Err(e) => return Err(self.fail(e.into())),
        };

        output::debug(
            format!(
                "Resolved scope:\n{}",
                output::format_list(descriptor.scope.as_slice(), "  - ")
            ),
            verbosity,
        );
        output::debug(format!("Output directory: {}", descriptor.out_dir), verbosity);
        output::debug(format!("Core import: {}", descriptor.core_import), verbosity);
        if let Some(prefix) = &descriptor.filter_resource_prefix {
            output::debug(format!("Resource prefix filter: {}", prefix), verbosity);
        }

        if ctx.dry_run {
            output::debug("Dry run, skipping generator", verbosity);
            self.transition(RunState::Succeeded);
            return Ok(descriptor);
        }

        self.transition(RunState::Invoking);
        output::debug(
            format!("Invoking {} generator", self.generator.name()),
            verbosity,
        );
        let result = self
            .generator
            .generate(
                &descriptor.scope,
                Path::new(&descriptor.out_dir),
                &descriptor.settings(),
            )
            .await;

        match result {
            Ok(()) => {
                self.transition(RunState::Succeeded);
                Ok(descriptor)
            }
            Err(e) => Err(self.fail(e.into())),
        }
    }

    fn transition(&mut self, next: RunState) {
        output::debug(
            format!("State {} -> {}", self.state, next),
            self.ctx.verbosity(),
        );
        self.state = next;
    }

    fn fail(&mut self, error: RunError) -> RunError {
        self.transition(RunState::Failed);
        error
    }
}

/// Exit status for a finished run: 0 on success, 1 on any failure.
pub fn exit_code<T, E>(result: &Result<T, E>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

/// Report a finished run and convert it into a process exit code.
///
/// Success prints nothing. Failure prints the error message to stderr.
pub fn finish<T, E: Display>(result: Result<T, E>) -> ExitCode {
    let code = exit_code(&result);
    if let Err(e) = result {
        output::error(e);
    }
    ExitCode::from(code)
}
