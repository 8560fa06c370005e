//! generator::mock
//!
//! Mock generator for deterministic testing.
//!
//! # Design
//!
//! The mock records every call it receives and can be configured to fail.
//! Clones share state, so a test can hand one clone to the runner and
//! inspect the other afterwards.
//!
//! # Example
//!
//! ```
//! use cfn2ts::core::config::GeneratorSettings;
//! use cfn2ts::core::types::Scope;
//! use cfn2ts::generator::mock::MockGenerator;
//! use cfn2ts::generator::Generator;
//! use std::path::Path;
//!
//! # tokio_test::block_on(async {
//! let generator = MockGenerator::new();
//! let settings = GeneratorSettings {
//!     core_import: "@aws-cdk/core".to_string(),
//!     filter_resource_prefix: None,
//! };
//!
//! generator
//!     .generate(&Scope::single("AWS::IAM"), Path::new("lib"), &settings)
//!     .await
//!     .unwrap();
//!
//! assert_eq!(generator.call_count(), 1);
//! assert_eq!(generator.calls()[0].scope, vec!["AWS::IAM".to_string()]);
//! # });
//! ```

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use super::traits::{GenerationError, Generator};
use crate::core::config::GeneratorSettings;
use crate::core::types::Scope;

/// Mock generator for testing.
#[derive(Debug, Clone, Default)]
pub struct MockGenerator {
    inner: Arc<Mutex<MockGeneratorInner>>,
}

#[derive(Debug, Default)]
struct MockGeneratorInner {
    /// Error to return from every call.
    fail_with: Option<GenerationError>,
    /// Recorded calls, in order.
    calls: Vec<GenerateCall>,
}

/// One recorded `generate` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateCall {
    pub scope: Vec<String>,
    pub out_dir: PathBuf,
    pub settings: GeneratorSettings,
}

impl MockGenerator {
    /// Create a mock that succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the mock to fail every call with `error`.
    ///
    /// The call is still recorded.
    pub fn fail_with(self, error: GenerationError) -> Self {
        {
            let mut inner = self.inner.lock().unwrap();
            inner.fail_with = Some(error);
        }
        self
    }

    /// All recorded calls.
    pub fn calls(&self) -> Vec<GenerateCall> {
        self.inner.lock().unwrap().calls.clone()
    }

    /// Number of recorded calls.
    pub fn call_count(&self) -> usize {
        self.inner.lock().unwrap().calls.len()
    }
}

#[async_trait]
impl Generator for MockGenerator {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn generate(
        &self,
        scope: &Scope,
        out_dir: &Path,
        settings: &GeneratorSettings,
    ) -> Result<(), GenerationError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(GenerateCall {
            scope: scope.as_slice().to_vec(),
            out_dir: out_dir.to_path_buf(),
            settings: settings.clone(),
        });
        match &inner.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> GeneratorSettings {
        GeneratorSettings {
            core_import: "@aws-cdk/core".to_string(),
            filter_resource_prefix: Some("AWS::IAM::Role".to_string()),
        }
    }

    #[tokio::test]
    async fn records_calls() {
        let generator = MockGenerator::new();
        let spy = generator.clone();

        generator
            .generate(&Scope::single("AWS::IAM"), Path::new("out"), &settings())
            .await
            .unwrap();

        let calls = spy.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].out_dir, PathBuf::from("out"));
        assert_eq!(calls[0].settings, settings());
    }

    #[tokio::test]
    async fn configured_failure() {
        let generator = MockGenerator::new()
            .fail_with(GenerationError::new("resource specification not found"));

        let err = generator
            .generate(&Scope::single("AWS::IAM"), Path::new("lib"), &settings())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "resource specification not found");
        assert_eq!(generator.call_count(), 1);
    }
}
