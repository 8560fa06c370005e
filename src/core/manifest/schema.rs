//! core::manifest::schema
//!
//! Typed view of the parts of `package.json` that cfn2ts consumes.
//!
//! # Example
//!
//! ```json
//! {
//!   "name": "@aws-cdk/aws-iam",
//!   "cdk-build": {
//!     "cloudformation": ["AWS::IAM", "AWS::S3"],
//!     "filter-resource-prefix": "AWS::IAM::Role",
//!     "cfn2ts-core-import": "@foo/core"
//!   }
//! }
//! ```
//!
//! Only the `cdk-build` block is modeled. Every other key, including
//! unrelated keys inside `cdk-build`, is ignored.
//!
//! # Leniency
//!
//! The document must be valid JSON and a top-level object. Below that, a
//! `cdk-build` block or field holding an unexpected JSON type reads as
//! absent, so a flag that overrides the field is never blocked by it.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};

/// Project manifest (`package.json`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Manifest {
    /// Build settings block
    #[serde(
        rename = "cdk-build",
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub cdk_build: Option<CdkBuildConfig>,
}

impl Manifest {
    /// Parse a manifest from JSON text.
    ///
    /// Fails only on invalid JSON or a document that is not an object.
    pub fn from_json(contents: &str) -> Result<Self, serde_json::Error> {
        let value: serde_json::Value = serde_json::from_str(contents)?;
        if !value.is_object() {
            return Err(serde_json::Error::custom("manifest must be a JSON object"));
        }
        serde_json::from_value(value)
    }

    /// Scope declared under `cdk-build.cloudformation`, if any.
    pub fn scope(&self) -> Option<&ScopeValue> {
        self.cdk_build.as_ref().and_then(|b| b.cloudformation.as_ref())
    }

    /// Filter prefix declared under `cdk-build.filter-resource-prefix`.
    pub fn filter_resource_prefix(&self) -> Option<&str> {
        self.cdk_build
            .as_ref()
            .and_then(|b| b.filter_resource_prefix.as_deref())
    }

    /// Core import override declared under `cdk-build.cfn2ts-core-import`.
    pub fn core_import(&self) -> Option<&str> {
        self.cdk_build
            .as_ref()
            .and_then(|b| b.core_import.as_deref())
    }
}

/// The `cdk-build` block.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CdkBuildConfig {
    /// Scope to generate when `--scope` is not given
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub cloudformation: Option<ScopeValue>,

    /// Resource type name prefix filter
    #[serde(
        rename = "filter-resource-prefix",
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub filter_resource_prefix: Option<String>,

    /// Import path of the core module, overrides `--core-import`
    #[serde(
        rename = "cfn2ts-core-import",
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub core_import: Option<String>,
}

/// A scope written either as one identifier or as a list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ScopeValue {
    /// `"cloudformation": "AWS::IAM"`
    Single(String),
    /// `"cloudformation": ["AWS::IAM", "AWS::S3"]`
    Many(Vec<String>),
}

/// Read any JSON value, keeping it only if it has the expected shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

impl ScopeValue {
    /// Normalize into an ordered list of identifiers.
    ///
    /// A single string becomes a one-element list; a list is kept verbatim.
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            ScopeValue::Single(s) => vec![s.clone()],
            ScopeValue::Many(v) => v.clone(),
        }
    }
}
