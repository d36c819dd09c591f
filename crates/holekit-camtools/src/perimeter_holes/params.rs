use std::collections::BTreeMap;

use holekit_core::units::{parse_integer, parse_number};
use holekit_core::{Bit, LengthUnit, HOLE_EPSILON};
use serde::{Deserialize, Serialize};

use super::context::ParamValue;
use crate::error::{HoleToolError, HoleToolResult};

pub const HOLE_SIZE: &str = "Hole Size";
pub const DEPTH: &str = "Depth";
pub const REPEAT_TYPE: &str = "Repeat Type";
pub const SPACING: &str = "Spacing";
pub const NUMBER_OF_HOLES: &str = "Number of holes";
pub const USE_DRILL_POINTS: &str = "Use Drill Points";

/// Default cut depth, in inches
pub const DEFAULT_DEPTH: f64 = 0.0625;
/// Default spacing, in bit widths
pub const DEFAULT_SPACING_BITS: f64 = 3.0;
pub const DEFAULT_HOLE_COUNT: u32 = 4;
/// Largest accepted "Number of holes" per outline
pub const MAX_HOLE_COUNT: usize = 100_000;

/// Hole size within this of the bit width counts as equal to it.
const BIT_MATCH_TOLERANCE: f64 = 1e-9;

/// How holes are spread along an outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RepeatType {
    /// At least a given distance apart, spread to fill the outline evenly
    #[default]
    #[serde(rename = "Spacing")]
    Spacing,
    /// A fixed number of holes
    #[serde(rename = "Number of holes")]
    HoleCount,
}

impl RepeatType {
    pub const ALL: [RepeatType; 2] = [RepeatType::Spacing, RepeatType::HoleCount];

    pub fn label(self) -> &'static str {
        match self {
            Self::Spacing => SPACING,
            Self::HoleCount => NUMBER_OF_HOLES,
        }
    }

    /// Read the form selection. Anything but the hole-count label, including
    /// a missing value, selects spacing.
    pub fn from_param(value: Option<&ParamValue>) -> Self {
        match value {
            Some(v) if v.as_text().trim() == NUMBER_OF_HOLES => Self::HoleCount,
            _ => Self::Spacing,
        }
    }
}

/// The active spacing policy with its validated value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpacingPolicy {
    /// Minimum distance between holes, in inches
    MinimumSpacing(f64),
    /// Exact number of holes per outline
    HoleCount(usize),
}

impl SpacingPolicy {
    pub fn repeat_type(&self) -> RepeatType {
        match self {
            Self::MinimumSpacing(_) => RepeatType::Spacing,
            Self::HoleCount(_) => RepeatType::HoleCount,
        }
    }
}

/// Submitted parameters after validation, all lengths in inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedParams {
    pub hole_size: f64,
    pub bit_width: f64,
    pub policy: SpacingPolicy,
    pub depth: f64,
    pub use_drill_points: bool,
}

/// Form defaults in the preferred unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Defaults {
    pub hole_size: f64,
    pub spacing: f64,
    pub depth: f64,
}

/// Defaults derived from the bit: a hole just wider than the bit, spaced
/// three bit widths apart, cut 1/16" deep.
pub fn compute_defaults(bit: &Bit, preferred_unit: LengthUnit) -> HoleToolResult<Defaults> {
    let bit_width = bit.width_in_inches()?;
    Ok(Defaults {
        hole_size: preferred_unit.from_inches(bit_width + HOLE_EPSILON),
        spacing: preferred_unit.from_inches(bit_width * DEFAULT_SPACING_BITS),
        depth: preferred_unit.from_inches(DEFAULT_DEPTH),
    })
}

/// Form field kinds the host knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    List,
    Boolean,
}

/// One field of the parameter form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescription {
    #[serde(rename = "type")]
    pub kind: FieldType,
    pub id: String,
    pub value: ParamValue,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

impl FieldDescription {
    fn text(id: &str, value: f64) -> Self {
        Self {
            kind: FieldType::Text,
            id: id.to_string(),
            value: ParamValue::Number(value),
            options: Vec::new(),
        }
    }
}

/// The parameter form, prefilled with defaults for the active bit.
pub fn properties(bit: &Bit, preferred_unit: LengthUnit) -> HoleToolResult<Vec<FieldDescription>> {
    let defaults = compute_defaults(bit, preferred_unit)?;
    Ok(vec![
        FieldDescription::text(HOLE_SIZE, defaults.hole_size),
        FieldDescription::text(DEPTH, defaults.depth),
        FieldDescription {
            kind: FieldType::List,
            id: REPEAT_TYPE.to_string(),
            value: ParamValue::from(RepeatType::default().label()),
            options: RepeatType::ALL
                .iter()
                .map(|r| r.label().to_string())
                .collect(),
        },
        FieldDescription::text(SPACING, defaults.spacing),
        FieldDescription::text(NUMBER_OF_HOLES, f64::from(DEFAULT_HOLE_COUNT)),
        FieldDescription {
            kind: FieldType::Boolean,
            id: USE_DRILL_POINTS.to_string(),
            value: ParamValue::Bool(false),
            options: Vec::new(),
        },
    ])
}

fn text_of(params: &BTreeMap<String, ParamValue>, id: &str) -> String {
    params.get(id).map(ParamValue::as_text).unwrap_or_default()
}

/// Check the submitted form, failing on the first bad field.
///
/// Lengths are converted to inches before they are compared with the bit.
pub fn validate(
    params: &BTreeMap<String, ParamValue>,
    bit_width: f64,
    preferred_unit: LengthUnit,
) -> HoleToolResult<ValidatedParams> {
    let hole_size = parse_number(&text_of(params, HOLE_SIZE))
        .filter(|v| *v >= 0.0)
        .ok_or_else(|| HoleToolError::invalid_number(HOLE_SIZE))?;
    let mut hole_size = preferred_unit.to_inches(hole_size);
    if hole_size < bit_width - BIT_MATCH_TOLERANCE {
        return Err(HoleToolError::HoleTooSmall {
            hole_size,
            bit_width,
        });
    }
    if (hole_size - bit_width).abs() <= BIT_MATCH_TOLERANCE {
        hole_size = bit_width + HOLE_EPSILON;
    }

    let policy = match RepeatType::from_param(params.get(REPEAT_TYPE)) {
        RepeatType::Spacing => {
            let spacing = parse_number(&text_of(params, SPACING))
                .filter(|v| *v >= 0.0)
                .map(|v| preferred_unit.to_inches(v))
                .ok_or(HoleToolError::SpacingTooSmall)?;
            if spacing < bit_width {
                return Err(HoleToolError::SpacingTooSmall);
            }
            SpacingPolicy::MinimumSpacing(spacing)
        }
        RepeatType::HoleCount => {
            let count = parse_integer(&text_of(params, NUMBER_OF_HOLES))
                .and_then(|n| usize::try_from(n).ok())
                .filter(|n| *n <= MAX_HOLE_COUNT)
                .ok_or(HoleToolError::InvalidHoleCount)?;
            SpacingPolicy::HoleCount(count)
        }
    };

    // No sign check: zero and negative depths pass through.
    let depth = parse_number(&text_of(params, DEPTH))
        .map(|v| preferred_unit.to_inches(v))
        .ok_or_else(|| HoleToolError::invalid_number(DEPTH))?;

    let use_drill_points = params
        .get(USE_DRILL_POINTS)
        .is_some_and(ParamValue::as_bool);

    Ok(ValidatedParams {
        hole_size,
        bit_width,
        policy,
        depth,
        use_drill_points,
    })
}
