//! core
//!
//! Core domain types, schemas, and configuration resolution for cfn2ts.
//!
//! # Modules
//!
//! - [`types`] - Strong types: Scope
//! - [`manifest`] - `package.json` schema and reader
//! - [`config`] - Flag/manifest precedence and the invocation descriptor
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid states at compile time
//! - Resolution is a pure function of flags and manifest
//! - All I/O goes through injectable collaborators

pub mod config;
pub mod manifest;
pub mod types;
