//! # gendata Common
//!
//! Shared error types, logging setup, and common functionality for gendata.
//!
//! This crate provides the foundational types and utilities used across
//! all other crates in the gendata workspace.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::*;
pub use logging::*;
