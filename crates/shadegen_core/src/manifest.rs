//! Variant manifest loading and output records
//!
//! The manifest is a JSON document with two ordered collections:
//!
//! ```json
//! {
//!   "options": [
//!     { "define": "USE_FOG" },
//!     { "define": "LOD", "values": [null, 1, 2] }
//!   ],
//!   "shaders": [
//!     { "filename": "main.frag", "options": [0, 1] }
//!   ]
//! }
//! ```
//!
//! Shader `options` entries are indices into the global `options` list; the
//! order of the indices is the digit order of the variant counter. The
//! result of a run is a [`VariantSet`], serialized back to JSON for the
//! build step that invokes the shader compiler.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::expand::{Shader, Variant};
use crate::options::{expand_defaults, OptionSpec, ShaderOption};
use crate::VariantError;

/// The parsed variant manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// Declared option axes, in digit-reference order
    pub options: Vec<OptionSpec>,
    /// Shaders to expand, in output order
    pub shaders: Vec<Shader>,
}

impl Manifest {
    /// Parse a manifest from JSON text.
    pub fn from_json(text: &str) -> Result<Self, VariantError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a manifest file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, VariantError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&text)
    }

    /// Resolve declared options into concrete axes.
    ///
    /// Applies default expansion; shaders are consumed as-is (their option
    /// references are validated during expansion).
    pub fn resolve(&self) -> Result<Vec<ShaderOption>, VariantError> {
        expand_defaults(&self.options)
    }
}

/// The ordered variant list produced by one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantSet {
    /// One record per (shader, combination), in final output order
    pub variants: Vec<Variant>,
}

impl VariantSet {
    /// Serialize the variant list to JSON.
    pub fn to_json(&self) -> Result<String, VariantError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
