//! generator::traits
//!
//! Generator trait definition.
//!
//! # Design
//!
//! The `Generator` trait is async because generation writes many files and
//! may shell out to another process. Its failure type is deliberately opaque:
//! the invocation pipeline only reports the message, it never branches on
//! the cause.
//!
//! # Example
//!
//! ```ignore
//! use cfn2ts::generator::{Generator, GenerationError};
//!
//! async fn generate_iam(generator: &dyn Generator) -> Result<(), GenerationError> {
//!     let scope = Scope::single("AWS::IAM");
//!     let settings = GeneratorSettings {
//!         core_import: "@aws-cdk/core".to_string(),
//!         filter_resource_prefix: None,
//!     };
//!     generator.generate(&scope, Path::new("lib"), &settings).await
//! }
//! ```

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

use crate::core::config::GeneratorSettings;
use crate::core::types::Scope;

/// Failure reported by a generator.
///
/// Carries the generator's own message unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct GenerationError {
    message: String,
}

impl GenerationError {
    /// Create an error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The generator's message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Code generator backend.
///
/// Implementations produce source files for every resource in `scope` under
/// `out_dir`. A call either completes fully or fails; there is no partial
/// success.
#[async_trait]
pub trait Generator: Send + Sync {
    /// Backend name, for diagnostics.
    fn name(&self) -> &'static str;

    /// Generate sources for `scope` into `out_dir`.
    async fn generate(
        &self,
        scope: &Scope,
        out_dir: &Path,
        settings: &GeneratorSettings,
    ) -> Result<(), GenerationError>;
}
