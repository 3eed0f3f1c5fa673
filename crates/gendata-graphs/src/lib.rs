//! # gendata Graphs
//!
//! Scatter plot rendering for generated data points.
//!
//! This crate turns a [`gendata_points::Dataset`] into a chart titled
//! "Data Points" with axes labelled "x" and "f(x)", using plotters for
//! native Rust rendering to PNG or SVG.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod scatter;
pub mod table;
pub mod traits;
pub mod utils;

pub use scatter::*;
pub use table::*;
pub use traits::*;
pub use utils::*;
