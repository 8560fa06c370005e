//! generator::process
//!
//! Generator backend that runs an external generator executable.
//!
//! # Protocol
//!
//! The executable is started in the project directory and receives one JSON
//! request on stdin:
//!
//! ```json
//! {
//!   "scope": ["AWS::IAM", "AWS::S3"],
//!   "outDir": "lib",
//!   "settings": { "coreImport": "@aws-cdk/core", "filterResourcePrefix": null }
//! }
//! ```
//!
//! Exit status 0 means success. Anything else is a failure whose message is
//! the executable's stderr. Output is captured, never echoed.
//!
//! # Selection
//!
//! The program is `$CFN2TS_GENERATOR` if set, otherwise `cfn2ts-generate`
//! looked up on `PATH`.

use async_trait::async_trait;
use serde::Serialize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use super::traits::{GenerationError, Generator};
use crate::core::config::GeneratorSettings;
use crate::core::types::Scope;

/// Environment variable naming the generator executable.
pub const GENERATOR_ENV: &str = "CFN2TS_GENERATOR";

/// Program used when `CFN2TS_GENERATOR` is unset.
pub const DEFAULT_GENERATOR_PROGRAM: &str = "cfn2ts-generate";

/// Request written to the generator's stdin.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    scope: &'a [String],
    out_dir: &'a Path,
    settings: &'a GeneratorSettings,
}

/// Runs an external generator process.
#[derive(Debug, Clone)]
pub struct ProcessGenerator {
    program: OsString,
    working_dir: PathBuf,
}

impl ProcessGenerator {
    /// Create a backend running `program` inside `working_dir`.
    pub fn new(program: impl Into<OsString>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            working_dir: working_dir.into(),
        }
    }

    /// Create a backend from `$CFN2TS_GENERATOR`, falling back to the default program.
    pub fn from_env(working_dir: impl Into<PathBuf>) -> Self {
        let program = std::env::var_os(GENERATOR_ENV)
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| OsString::from(DEFAULT_GENERATOR_PROGRAM));
        Self::new(program, working_dir)
    }

    /// The executable this backend runs.
    pub fn program(&self) -> &Path {
        Path::new(&self.program)
    }
}

#[async_trait]
impl Generator for ProcessGenerator {
    fn name(&self) -> &'static str {
        "process"
    }

    async fn generate(
        &self,
        scope: &Scope,
        out_dir: &Path,
        settings: &GeneratorSettings,
    ) -> Result<(), GenerationError> {
        let request = serde_json::to_vec(&GenerateRequest {
            scope: scope.as_slice(),
            out_dir,
            settings,
        })
        .map_err(|e| GenerationError::new(format!("failed to encode generator request: {}", e)))?;

        let mut child = Command::new(&self.program)
            .current_dir(&self.working_dir)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                GenerationError::new(format!(
                    "failed to launch generator '{}': {}",
                    self.program().display(),
                    e
                ))
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            // A generator may exit without reading its request; the exit
            // status decides the outcome in that case.
            match stdin.write_all(&request).await {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {}
                Err(e) => {
                    return Err(GenerationError::new(format!(
                        "failed to send request to generator: {}",
                        e
                    )))
                }
            }
        }

        let output = child.wait_with_output().await.map_err(|e| {
            GenerationError::new(format!("failed to wait for generator: {}", e))
        })?;

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let stderr = stderr.trim();
        if stderr.is_empty() {
            Err(GenerationError::new(format!(
                "generator exited with {}",
                output.status
            )))
        } else {
            Err(GenerationError::new(stderr))
        }
    }
}
