//! core::manifest
//!
//! Project manifest lookup.
//!
//! # Overview
//!
//! The manifest is the project's `package.json`. It is read at most once per
//! run through a [`ManifestReader`], which is injected into the resolver so
//! tests can fabricate manifests without touching the filesystem.
//!
//! A missing manifest is not an error: the reader returns `Ok(None)` and
//! resolution falls back to explicit flags. A manifest that exists but cannot
//! be read or parsed is an error and is never silently replaced by defaults.

pub mod schema;

pub use schema::{CdkBuildConfig, Manifest, ScopeValue};

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of the manifest inside the project directory.
pub const MANIFEST_FILE: &str = "package.json";

/// Errors from reading the manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read manifest '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse manifest '{path}': {message}")]
    ParseError { path: PathBuf, message: String },
}

/// Source of the project manifest.
#[async_trait]
pub trait ManifestReader: Send + Sync {
    /// Short name for debug traces.
    fn name(&self) -> &'static str;

    /// Read the manifest for `project_dir`.
    ///
    /// Returns `Ok(None)` when the project has no manifest.
    async fn read_manifest(&self, project_dir: &Path) -> Result<Option<Manifest>, ManifestError>;
}

/// Reads `package.json` from the project directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsManifestReader;

impl FsManifestReader {
    /// Path of the manifest for a project directory.
    pub fn manifest_path(project_dir: &Path) -> PathBuf {
        project_dir.join(MANIFEST_FILE)
    }
}

#[async_trait]
impl ManifestReader for FsManifestReader {
    fn name(&self) -> &'static str {
        MANIFEST_FILE
    }

    async fn read_manifest(&self, project_dir: &Path) -> Result<Option<Manifest>, ManifestError> {
        let path = Self::manifest_path(project_dir);

        let contents = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(ManifestError::ReadError { path, source: e }),
        };

        // Editors on some platforms save package.json with a BOM.
        let contents = contents.strip_prefix('\u{feff}').unwrap_or(&contents);

        Manifest::from_json(contents)
            .map(Some)
            .map_err(|e| ManifestError::ParseError {
                path,
                message: e.to_string(),
            })
    }
}

/// Returns a fixed manifest regardless of project directory.
///
/// Used to drive the resolver from fabricated manifests.
///
/// # Example
///
/// ```
/// use cfn2ts::core::manifest::{Manifest, ManifestReader, StaticManifestReader};
/// use std::path::Path;
///
/// # tokio_test::block_on(async {
/// let manifest = Manifest::from_json(r#"{"cdk-build":{"cloudformation":"AWS::IAM"}}"#).unwrap();
/// let reader = StaticManifestReader::new(Some(manifest.clone()));
///
/// let read = reader.read_manifest(Path::new("anywhere")).await.unwrap();
/// assert_eq!(read, Some(manifest));
/// # });
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticManifestReader {
    manifest: Option<Manifest>,
}

impl StaticManifestReader {
    /// Create a reader that always yields `manifest`.
    pub fn new(manifest: Option<Manifest>) -> Self {
        Self { manifest }
    }

    /// Create a reader for a project without a manifest.
    pub fn absent() -> Self {
        Self { manifest: None }
    }
}

#[async_trait]
impl ManifestReader for StaticManifestReader {
    fn name(&self) -> &'static str {
        "static"
    }

    async fn read_manifest(&self, _project_dir: &Path) -> Result<Option<Manifest>, ManifestError> {
        Ok(self.manifest.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn missing_manifest_is_none() {
        let temp = TempDir::new().unwrap();
        let result = FsManifestReader.read_manifest(temp.path()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn reads_package_json() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(MANIFEST_FILE),
            r#"{"name":"pkg","cdk-build":{"cloudformation":"AWS::IAM"}}"#,
        )
        .unwrap();

        let manifest = FsManifestReader
            .read_manifest(temp.path())
            .await
            .unwrap()
            .expect("manifest should be present");
        assert_eq!(
            manifest.scope(),
            Some(&ScopeValue::Single("AWS::IAM".to_string()))
        );
    }

    #[tokio::test]
    async fn bom_prefixed_manifest_is_read() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(MANIFEST_FILE),
            "\u{feff}{\"cdk-build\":{\"cloudformation\":\"AWS::IAM\"}}",
        )
        .unwrap();

        let manifest = FsManifestReader
            .read_manifest(temp.path())
            .await
            .unwrap()
            .expect("manifest should be present");
        assert_eq!(
            manifest.scope(),
            Some(&ScopeValue::Single("AWS::IAM".to_string()))
        );
    }

    #[test]
    fn reader_names() {
        assert_eq!(FsManifestReader.name(), "package.json");
        assert_eq!(StaticManifestReader::absent().name(), "static");
    }

    #[tokio::test]
    async fn malformed_manifest_is_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(MANIFEST_FILE), "{ not json").unwrap();

        let err = FsManifestReader
            .read_manifest(temp.path())
            .await
            .unwrap_err();
        assert!(matches!(err, ManifestError::ParseError { .. }));
        assert!(err.to_string().contains("package.json"));
    }

    #[tokio::test]
    async fn unreadable_manifest_is_error() {
        let temp = TempDir::new().unwrap();
        // A directory where the file should be cannot be read as text.
        fs::create_dir(temp.path().join(MANIFEST_FILE)).unwrap();

        let err = FsManifestReader
            .read_manifest(temp.path())
            .await
            .unwrap_err();
        assert!(matches!(err, ManifestError::ReadError { .. }));
    }

    #[tokio::test]
    async fn static_reader_absent() {
        let reader = StaticManifestReader::absent();
        assert!(reader
            .read_manifest(Path::new("."))
            .await
            .unwrap()
            .is_none());
    }
}
