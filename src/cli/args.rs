//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Generation Flags
//!
//! - `--scope <SCOPE>...`: CloudFormation scopes to generate
//! - `--filter-resource-prefix <PREFIX>`: Resource type name prefix filter
//! - `--out <DIR>`: Output directory
//! - `--core-import <IMPORT>`: Import path of the core module
//!
//! # Global Flags
//!
//! - `--cwd <path>`: Project directory (defaults to the current directory)
//! - `--dry-run`: Print the resolved configuration instead of generating
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::Parser;
use std::path::PathBuf;

use crate::core::config::{ExplicitFlags, DEFAULT_CORE_IMPORT, DEFAULT_OUT_DIR};
use crate::engine::Context;

/// cfn2ts - Generate TypeScript from the CloudFormation resource specification
#[derive(Parser, Debug)]
#[command(name = "cfn2ts")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "If --scope is not defined, cfn2ts will try to obtain the scope from the local \
package.json under the \"cdk-build.cloudformation\" key."
)]
pub struct Cli {
    /// Scope to generate TypeScript for (e.g: AWS::IAM)
    #[arg(long, value_name = "SCOPE", num_args = 1..)]
    pub scope: Vec<String>,

    /// A prefix filter on the resource type name
    #[arg(long, value_name = "PREFIX")]
    pub filter_resource_prefix: Option<String>,

    /// Path to the directory where the TypeScript files should be written
    #[arg(long, value_name = "DIR", default_value = DEFAULT_OUT_DIR)]
    pub out: String,

    /// The TypeScript import to use for the core module. Can also be defined
    /// in package.json under "cdk-build.cfn2ts-core-import", which takes
    /// precedence over this flag
    #[arg(long, value_name = "IMPORT", default_value = DEFAULT_CORE_IMPORT)]
    pub core_import: String,

    /// Run as if cfn2ts was started in this directory
    #[arg(long)]
    pub cwd: Option<PathBuf>,

    /// Print the resolved configuration as JSON and exit without generating
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// Generation flags as given on the command line.
    pub fn explicit_flags(&self) -> ExplicitFlags {
        ExplicitFlags {
            scope: self.scope.clone(),
            filter_resource_prefix: self.filter_resource_prefix.clone(),
            out_dir: self.out.clone(),
            core_import: self.core_import.clone(),
        }
    }

    /// Execution context from the global flags.
    pub fn context(&self) -> Context {
        Context {
            cwd: self.cwd.clone(),
            debug: self.debug,
            quiet: self.quiet,
            dry_run: self.dry_run,
        }
    }
}
