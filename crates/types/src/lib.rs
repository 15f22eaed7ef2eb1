pub mod error;

pub use error::ControlError;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Canonical names for the parameters and outputs declared in the control
/// manifest. Hosts address the bag with these exact strings.
pub mod param {
    /// Selects which half of the split value the control works with.
    pub const LEFT_CONTENT: &str = "LeftContent";
    /// Enables the text input; a disabled input is rendered read-only.
    pub const EDIT_MODE: &str = "EditMode";
    /// Token the stored value is split around.
    pub const SEPARATOR: &str = "Separator";
    /// The bound combined value; also the control's only output.
    pub const CONTENT_SEPARATOR_VALUE: &str = "ContentSeparatorValue";
    /// Text the optional caption label is derived from.
    pub const LABEL_VALUE: &str = "LabelValue";
    /// Whether the caption label is shown at all.
    pub const LABEL_DISPLAY: &str = "LabelDisplay";
}

/// Represents the declared data type of a manifest parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamKind {
    /// Two-state toggle delivered as `true` or `false`
    Bool,
    /// Single line of text
    Text,
}

/// Represents how a declared parameter participates in host binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamUsage {
    /// Read-only configuration supplied by the host at initialization
    Input,
    /// Two-way bound to a record field and surfaced through the outputs
    Bound,
}

/// Represents a single parameter declared by the control manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParamSpec {
    /// The canonical parameter name (e.g., "Separator")
    pub name: String,
    /// The declared data type of the parameter value
    pub kind: ParamKind,
    /// How the parameter is bound on the hosting form
    pub usage: ParamUsage,
    /// Default applied when the host supplies no usable value
    #[serde(default)]
    pub default_value: Option<String>,
    /// Human-readable description of what this parameter controls
    #[serde(default)]
    pub description: Option<String>,
}

impl ParamSpec {
    /// Creates a read-only input parameter.
    pub fn input(name: impl Into<String>, kind: ParamKind) -> Self {
        Self {
            name: name.into(),
            kind,
            usage: ParamUsage::Input,
            default_value: None,
            description: None,
        }
    }

    /// Creates a two-way bound parameter.
    pub fn bound(name: impl Into<String>, kind: ParamKind) -> Self {
        Self {
            usage: ParamUsage::Bound,
            ..Self::input(name, kind)
        }
    }

    /// Attaches a default value to the declaration.
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Attaches a description to the declaration.
    pub fn with_description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }
}

/// Represents the complete parameter and output schema a field control
/// declares to its host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlManifest {
    /// The control's registered name
    pub name: String,
    /// Declared parameters, in declaration order
    pub params: Vec<ParamSpec>,
    /// Names of the bound parameters surfaced through the output accessor
    #[serde(default)]
    pub outputs: Vec<String>,
}

impl ControlManifest {
    /// Looks up a declared parameter by canonical name.
    pub fn param(&self, name: &str) -> Option<&ParamSpec> {
        self.params.iter().find(|p| p.name == name)
    }

    /// Returns whether `name` is declared as an output of the control.
    pub fn is_output(&self, name: &str) -> bool {
        self.outputs.iter().any(|o| o == name)
    }
}

/// A single typed value supplied for a parameter or returned as an output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// A boolean toggle value
    Bool(bool),
    /// A text value
    Text(String),
}

impl ParamValue {
    /// Returns the boolean payload, if this value carries one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            Self::Text(_) => None,
        }
    }

    /// Returns the text payload, if this value carries one.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value.as_str()),
            Self::Bool(_) => None,
        }
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Represents the named parameter values a host supplies at initialization.
///
/// Lookups are by canonical name. Insertion order is preserved so hosts can
/// echo the bag back in manifest declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterBag {
    values: IndexMap<String, ParamValue>,
}

impl ParameterBag {
    /// Creates an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a value, returning the bag for chaining.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Inserts or replaces a value in place.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.values.insert(name.into(), value.into());
    }

    /// Returns the raw value stored under `name`, if any.
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values.get(name)
    }

    /// Reads a boolean parameter, falling back to `default` when the value is
    /// absent or carries the wrong type.
    pub fn bool_or(&self, name: &str, default: bool) -> bool {
        self.get(name).and_then(ParamValue::as_bool).unwrap_or(default)
    }

    /// Reads a text parameter, falling back to `default` when the value is
    /// absent or carries the wrong type. Empty text counts as unset.
    pub fn text_or(&self, name: &str, default: &str) -> String {
        match self.get(name).and_then(ParamValue::as_text) {
            Some(text) if !text.is_empty() => text.to_string(),
            _ => default.to_string(),
        }
    }

    /// Number of values in the bag.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns whether the bag holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Represents the bound values a control hands back from its output accessor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Outputs {
    values: IndexMap<String, ParamValue>,
}

impl Outputs {
    /// Creates an empty output set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a value under its declared output name, returning the set for
    /// chaining.
    pub fn bind(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Returns the raw value bound under `name`, if any.
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values.get(name)
    }

    /// Reads a bound text output by name.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(ParamValue::as_text)
    }

    /// Iterates bound outputs in binding order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of bound outputs.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns whether no outputs are bound.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
