//! Compile-time option model
//!
//! Each option is one orthogonal axis of the variant space: a preprocessor
//! define with an ordered list of possible values. Options without explicit
//! values default to the two-state axis {absent, defined}.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::VariantError;

/// An explicit value supplied for an option in the manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
    /// Integer value (e.g. an LOD level)
    Int(i64),
    /// Floating point value
    Float(f64),
    /// String value
    Text(String),
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{}", v),
            Self::Text(v) => write!(f, "{}", v),
        }
    }
}

/// One entry of an explicit values list in the manifest.
///
/// JSON `null` marks the absent state, so a list like `[null, 1, 2]` gives
/// an axis where the define is either not passed at all or passed with a
/// concrete value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ValueSpec {
    /// The define is not passed for this state
    Absent,
    /// The define is passed with this value
    Scalar(ScalarValue),
}

/// One possible state of an option axis.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    /// The define is not passed at all
    Absent,
    /// The define is passed without a value (`-DNAME`)
    Defined,
    /// The define is passed with an explicit value (`-DNAME=value`)
    Scalar(ScalarValue),
}

/// A fully resolved option axis.
///
/// Built once from the manifest by [`expand_defaults`] and immutable
/// afterwards. The order of `values` is the digit order of the mixed-radix
/// counter, so it must never be rearranged.
#[derive(Debug, Clone, PartialEq)]
pub struct ShaderOption {
    /// Preprocessor define name
    pub define: String,
    /// Ordered possible values, never empty
    pub values: Vec<OptionValue>,
}

impl ShaderOption {
    /// Number of possible values for this axis (the counter base).
    pub fn count(&self) -> usize {
        self.values.len()
    }
}

/// An option as declared in the manifest, before default expansion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionSpec {
    /// Preprocessor define name
    pub define: String,
    /// Explicit values; when omitted the option defaults to {absent, defined}
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<ValueSpec>>,
}

/// Resolve declared options into concrete axes.
///
/// Options without explicit values get the two-element default
/// `[Absent, Defined]`. Explicit values are kept in declaration order. An
/// explicitly empty values list would make the combination space empty and
/// is rejected as a configuration error.
///
/// Pure and order-preserving: calling it twice over the same specs yields
/// identical output.
pub fn expand_defaults(specs: &[OptionSpec]) -> Result<Vec<ShaderOption>, VariantError> {
    let mut options = Vec::with_capacity(specs.len());

    for spec in specs {
        let values = match &spec.values {
            None => vec![OptionValue::Absent, OptionValue::Defined],
            Some(explicit) if explicit.is_empty() => {
                return Err(VariantError::Configuration(format!(
                    "option '{}' has an empty values list",
                    spec.define
                )));
            }
            Some(explicit) => explicit
                .iter()
                .map(|value| match value {
                    ValueSpec::Absent => OptionValue::Absent,
                    ValueSpec::Scalar(scalar) => OptionValue::Scalar(scalar.clone()),
                })
                .collect(),
        };

        options.push(ShaderOption {
            define: spec.define.clone(),
            values,
        });
    }

    Ok(options)
}
