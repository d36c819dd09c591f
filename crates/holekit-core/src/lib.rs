//! # HoleKit Core
//!
//! Core types and utilities shared by the HoleKit crates.
//! Provides the length units, the plain geometry data carried between
//! crates, and the base error type.

pub mod data;
pub mod error;
pub mod units;

pub use data::{Bit, BitParams, Point};
pub use error::{CoreError, Result};
pub use units::{LengthUnit, HOLE_EPSILON, MM_PER_INCH};
