//! # gendata
//!
//! Generates a noisy `x^1.5` dataset over the fixed range `[0, 100)` and
//! renders it as a scatter plot.
//!
//! The binary loads configuration, initializes logging and calls [`run`],
//! which wires the generator to the renderer. Nothing is kept between runs.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod error;

pub use app::*;
pub use error::*;
