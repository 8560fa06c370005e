//! core::config
//!
//! Resolution of generator configuration.
//!
//! # Overview
//!
//! cfn2ts takes its parameters from two places:
//! - **Flags**: what was passed on the command line
//! - **Manifest**: the `cdk-build` block of the project's `package.json`
//!
//! # Precedence
//!
//! | Field | Winner |
//! |---|---|
//! | scope | `--scope` if non-empty, else `cdk-build.cloudformation` |
//! | filter prefix | `--filter-resource-prefix`, else `cdk-build.filter-resource-prefix` |
//! | core import | `cdk-build.cfn2ts-core-import`, else `--core-import` |
//! | output dir | `--out` only |
//!
//! The core import is the one field where the manifest beats the command
//! line. Module wiring belongs to the project, so a package pins it once in
//! `package.json` instead of on every invocation. Keep this inversion.
//!
//! Empty strings in the manifest count as absent.
//!
//! # Example
//!
//! ```
//! use cfn2ts::core::config::{resolve_descriptor, ExplicitFlags};
//! use cfn2ts::core::manifest::Manifest;
//!
//! let manifest = Manifest::from_json(
//!     r#"{"cdk-build":{"cloudformation":"AWS::IAM"}}"#,
//! ).unwrap();
//!
//! let descriptor = resolve_descriptor(&ExplicitFlags::default(), Some(&manifest)).unwrap();
//! assert_eq!(descriptor.scope.as_slice(), ["AWS::IAM"]);
//! assert_eq!(descriptor.out_dir, "lib");
//! ```

pub mod schema;

pub use schema::{
    ExplicitFlags, GeneratorSettings, InvocationDescriptor, DEFAULT_CORE_IMPORT, DEFAULT_OUT_DIR,
};

use std::path::Path;
use thiserror::Error;

use crate::core::manifest::{Manifest, ManifestError, ManifestReader, ScopeValue};
use crate::core::types::Scope;

/// Scope could not be determined from flags or manifest.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "--scope is not provided and cannot be auto-detected from package.json (under \"cdk-build.cloudformation\")"
)]
pub struct ConfigurationError;

/// Errors from [`ConfigResolver::resolve`].
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

/// Merge explicit flags with an optional manifest.
///
/// Pure: the same inputs always produce the same descriptor.
///
/// # Errors
///
/// Returns [`ConfigurationError`] if neither source yields a non-empty scope.
pub fn resolve_descriptor(
    flags: &ExplicitFlags,
    manifest: Option<&Manifest>,
) -> Result<InvocationDescriptor, ConfigurationError> {
    let scope = match Scope::new(flags.scope.clone()) {
        Ok(explicit) => Some(explicit),
        Err(_) => manifest.and_then(manifest_scope),
    };
    let scope = scope.ok_or(ConfigurationError)?;

    let filter_resource_prefix = non_empty(flags.filter_resource_prefix.as_deref())
        .or_else(|| manifest.and_then(|m| non_empty(m.filter_resource_prefix())))
        .map(str::to_string);

    let core_import = manifest
        .and_then(|m| non_empty(m.core_import()))
        .unwrap_or(flags.core_import.as_str())
        .to_string();

    Ok(InvocationDescriptor {
        scope,
        out_dir: flags.out_dir.clone(),
        core_import,
        filter_resource_prefix,
    })
}

/// Scope declared by the manifest, if usable.
fn manifest_scope(manifest: &Manifest) -> Option<Scope> {
    match manifest.scope()? {
        ScopeValue::Single(s) if s.is_empty() => None,
        value => Scope::new(value.to_vec()).ok(),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Resolves an [`InvocationDescriptor`] for a project directory.
///
/// Holds the manifest source; each call to [`resolve`](Self::resolve) reads
/// the manifest exactly once.
pub struct ConfigResolver<'a> {
    reader: &'a dyn ManifestReader,
}

impl<'a> ConfigResolver<'a> {
    /// Create a resolver backed by `reader`.
    pub fn new(reader: &'a dyn ManifestReader) -> Self {
        Self { reader }
    }

    /// Read the manifest for `project_dir` and merge it with `flags`.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::Manifest`] if a manifest exists but is unreadable
    /// - [`ResolveError::Configuration`] if no scope can be determined
    pub async fn resolve(
        &self,
        flags: &ExplicitFlags,
        project_dir: &Path,
    ) -> Result<InvocationDescriptor, ResolveError> {
        let manifest = self.reader.read_manifest(project_dir).await?;
        Ok(resolve_descriptor(flags, manifest.as_ref())?)
    }
}
