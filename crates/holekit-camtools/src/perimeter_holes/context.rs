use std::collections::BTreeMap;
use std::fmt;

use holekit_core::{BitParams, LengthUnit};
use holekit_designer::Shape;
use serde::{Deserialize, Serialize};

/// One shape of the host's document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Volume {
    pub id: String,
    pub shape: Shape,
}

/// A raw form value as the host submits it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl ParamValue {
    /// The value as form text; numbers print in their shortest form.
    pub fn as_text(&self) -> String {
        self.to_string()
    }

    /// Truthiness of a checkbox value. Text counts when it reads "true".
    pub fn as_bool(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::Text(s) => s.trim().eq_ignore_ascii_case("true"),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Everything the host hands over for one run. Read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectContext {
    #[serde(default)]
    pub volumes: Vec<Volume>,
    #[serde(default)]
    pub selected_volume_ids: Vec<String>,
    pub bit_params: BitParams,
    #[serde(default)]
    pub preferred_unit: LengthUnit,
    #[serde(default)]
    pub params: BTreeMap<String, ParamValue>,
}

impl ProjectContext {
    pub fn new(bit_params: BitParams) -> Self {
        Self {
            volumes: Vec::new(),
            selected_volume_ids: Vec::new(),
            bit_params,
            preferred_unit: LengthUnit::Inch,
            params: BTreeMap::new(),
        }
    }

    /// Add a shape and mark it selected.
    pub fn select(&mut self, id: impl Into<String>, shape: Shape) {
        let id = id.into();
        self.selected_volume_ids.push(id.clone());
        self.volumes.push(Volume { id, shape });
    }

    pub fn set_param(&mut self, id: &str, value: impl Into<ParamValue>) {
        self.params.insert(id.to_string(), value.into());
    }

    /// Selected volumes, in document order.
    pub fn selected_volumes(&self) -> impl Iterator<Item = &Volume> {
        self.volumes
            .iter()
            .filter(|v| self.selected_volume_ids.contains(&v.id))
    }
}
