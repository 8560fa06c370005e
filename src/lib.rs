//! cfn2ts - Invocation front-end for the CloudFormation-to-TypeScript generator
//!
//! cfn2ts decides what the code generator is asked to produce and where its
//! output goes. It reconciles explicit command-line flags with the
//! `cdk-build` block of the project's `package.json`, then hands one
//! resolved descriptor to the generator backend.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface layer (parses args, wires collaborators)
//! - [`engine`] - Runs Resolve → Invoke → Report and maps outcomes to exit codes
//! - [`core`] - Domain types, manifest schema, and configuration precedence
//! - [`generator`] - Abstraction over the code generator backend
//! - [`ui`] - Output utilities
//!
//! # Correctness Invariants
//!
//! 1. The generator is only invoked with a non-empty scope
//! 2. A malformed manifest is reported, never replaced by defaults
//! 3. Each run calls the generator at most once and never retries
//! 4. A successful run prints nothing

pub mod cli;
pub mod core;
pub mod engine;
pub mod generator;
pub mod ui;
