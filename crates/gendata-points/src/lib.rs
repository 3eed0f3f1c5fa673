//! # gendata Points
//!
//! Synthetic data point generation for gendata.
//!
//! Samples integer x values uniformly from a validated [`Range`], maps them
//! through `x^1.5`, adds normally distributed noise and returns the points as
//! a [`Dataset`] sorted by x. The random source is always supplied by the
//! caller so runs can be reproduced from a seed.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod dataset;
pub mod generator;
pub mod range;

pub use dataset::*;
pub use generator::*;
pub use range::*;
