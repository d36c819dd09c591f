//! Unit conversion utilities
//!
//! Handles conversion between inches and millimeters, and parses the loose
//! numeric text that host parameter forms submit. Every length inside the
//! pipeline is carried in inches.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Millimeters per inch, the only conversion factor in the system
pub const MM_PER_INCH: f64 = 25.4;

/// Extra width added to a hole that exactly matches the bit, so the cut keeps
/// a non-zero wall
pub const HOLE_EPSILON: f64 = 0.001;

/// Length unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LengthUnit {
    /// Inches
    #[default]
    #[serde(rename = "in", alias = "inch", alias = "inches")]
    Inch,
    /// Millimeters
    #[serde(rename = "mm", alias = "millimeter", alias = "millimeters")]
    Millimeter,
}

impl LengthUnit {
    /// Convert a value expressed in this unit to inches
    pub fn to_inches(self, value: f64) -> f64 {
        match self {
            Self::Inch => value,
            Self::Millimeter => value / MM_PER_INCH,
        }
    }

    /// Convert a value in inches to this unit
    pub fn from_inches(self, inches: f64) -> f64 {
        match self {
            Self::Inch => inches,
            Self::Millimeter => inches * MM_PER_INCH,
        }
    }

    /// Short unit label ("in" or "mm")
    pub fn label(self) -> &'static str {
        match self {
            Self::Inch => "in",
            Self::Millimeter => "mm",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LengthUnit {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "in" | "inch" | "inches" => Ok(Self::Inch),
            "mm" | "millimeter" | "millimeters" => Ok(Self::Millimeter),
            _ => Err(CoreError::UnknownUnit(s.to_string())),
        }
    }
}

/// Format a length held in inches for display in `unit`
pub fn format_length(inches: f64, unit: LengthUnit) -> String {
    format!("{:.3} {}", unit.from_inches(inches), unit.label())
}

/// Parse the numeric prefix of a form value.
///
/// Surrounding whitespace is ignored and trailing text after the longest
/// valid number is dropped, so `"1.5in"` reads as `1.5`. Returns `None` when
/// no digits lead the input or the result is not finite.
pub fn parse_number(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when digits follow it.
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse the integer prefix of a form value (`"4.7"` reads as `4`).
pub fn parse_integer(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return None;
    }

    s[..end].parse::<i64>().ok()
}
