//! generator
//!
//! Abstraction over the code generator backend.
//!
//! # Architecture
//!
//! The invocation pipeline only knows the [`Generator`] trait. Concrete
//! backends:
//!
//! - [`process::ProcessGenerator`] - runs an external generator executable
//! - [`mock::MockGenerator`] - records calls, for tests

pub mod mock;
pub mod process;
pub mod traits;

pub use process::ProcessGenerator;
pub use traits::{GenerationError, Generator};
