//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! split service test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built receipts for the documented scenarios
//! - `builders`: Builder for receipt requests with sensible defaults
//! - `assertions`: Custom assertion helpers for money and split errors
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
