//! core::config::schema
//!
//! Input and output types of configuration resolution.
//!
//! # Explicit Flags
//!
//! What the user typed on the command line, with CLI defaults already
//! applied to `out_dir` and `core_import`.
//!
//! # Invocation Descriptor
//!
//! The resolved parameter set for one generator run. It always carries a
//! non-empty [`Scope`]; a descriptor cannot exist without one.

use serde::{Deserialize, Serialize};

use crate::core::types::Scope;

/// Default output directory, relative to the project directory.
pub const DEFAULT_OUT_DIR: &str = "lib";

/// Default import path of the generator's core module.
pub const DEFAULT_CORE_IMPORT: &str = "@aws-cdk/core";

/// Flags supplied on the command line.
///
/// # Example
///
/// ```
/// use cfn2ts::core::config::ExplicitFlags;
///
/// let flags = ExplicitFlags {
///     scope: vec!["AWS::EC2".to_string()],
///     ..Default::default()
/// };
/// assert_eq!(flags.out_dir, "lib");
/// assert_eq!(flags.core_import, "@aws-cdk/core");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplicitFlags {
    /// `--scope`; empty means not given
    pub scope: Vec<String>,

    /// `--filter-resource-prefix`
    pub filter_resource_prefix: Option<String>,

    /// `--out`
    pub out_dir: String,

    /// `--core-import`
    pub core_import: String,
}

impl Default for ExplicitFlags {
    fn default() -> Self {
        Self {
            scope: Vec::new(),
            filter_resource_prefix: None,
            out_dir: DEFAULT_OUT_DIR.to_string(),
            core_import: DEFAULT_CORE_IMPORT.to_string(),
        }
    }
}

/// Settings bundle passed to the generator alongside scope and output dir.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorSettings {
    /// Import path of the core module in generated code
    pub core_import: String,

    /// Only generate resources whose type name starts with this prefix
    pub filter_resource_prefix: Option<String>,
}

/// Fully resolved parameters for one generator invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationDescriptor {
    /// Scopes to generate, in order
    pub scope: Scope,

    /// Output directory
    pub out_dir: String,

    /// Import path of the core module
    pub core_import: String,

    /// Resource type name prefix filter
    pub filter_resource_prefix: Option<String>,
}

impl InvocationDescriptor {
    /// The settings bundle handed to the generator.
    pub fn settings(&self) -> GeneratorSettings {
        GeneratorSettings {
            core_import: self.core_import.clone(),
            filter_resource_prefix: self.filter_resource_prefix.clone(),
        }
    }
}
