//! Variant expansion
//!
//! Walks every shader over the full combination space of its referenced
//! options and collects one [`Variant`] record per combination. The output
//! order is fixed: shaders in input order, combinations in ascending linear
//! index per shader.

use serde::{Deserialize, Serialize};

use crate::counter::{bases, digits_for, step_count};
use crate::options::ShaderOption;
use crate::serialize::{build_defines, build_filename};
use crate::VariantError;

/// Default compiled-artifact suffix appended to output filenames.
pub const DEFAULT_ARTIFACT_SUFFIX: &str = ".spv";

/// A shader source file and the options it is compiled against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shader {
    /// Source filename
    pub filename: String,
    /// Ordered indices into the global option list; the order is the digit
    /// order of the counter and must be preserved as given
    #[serde(default)]
    pub options: Vec<usize>,
}

/// One concrete combination of option values for one shader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    /// Source filename to compile
    pub input: String,
    /// Compiler arguments for this combination, possibly empty
    pub defines: String,
    /// Filename to write the compiled variant to
    pub output: String,
}

/// Expands shaders into their full variant lists.
pub struct VariantExpander {
    artifact_suffix: String,
}

impl VariantExpander {
    /// Create an expander with the default `.spv` artifact suffix.
    pub fn new() -> Self {
        Self::with_suffix(DEFAULT_ARTIFACT_SUFFIX)
    }

    /// Create an expander with a custom artifact suffix.
    pub fn with_suffix(suffix: impl Into<String>) -> Self {
        Self {
            artifact_suffix: suffix.into(),
        }
    }

    /// Expand all shaders into one ordered variant list.
    ///
    /// For each shader in input order: materialize its option subset,
    /// enumerate every combination by ascending linear index and produce one
    /// variant per combination. The first error aborts the whole expansion;
    /// no partial list is returned.
    pub fn expand(
        &self,
        options: &[ShaderOption],
        shaders: &[Shader],
    ) -> Result<Vec<Variant>, VariantError> {
        let mut variants = Vec::new();

        for shader in shaders {
            let subset = Self::extract_options(options, shader)?;
            let bases = bases(&subset);
            let steps = step_count(&bases)?;

            log::debug!(
                "shader '{}': {} option axes, {} variants",
                shader.filename,
                subset.len(),
                steps
            );

            for index in 0..steps {
                let digits = digits_for(&bases, index)?;
                variants.push(Variant {
                    input: shader.filename.clone(),
                    defines: build_defines(&subset, &digits),
                    output: build_filename(
                        &shader.filename,
                        &subset,
                        &digits,
                        &self.artifact_suffix,
                    ),
                });
            }
        }

        Ok(variants)
    }

    /// Copy the options referenced by a shader, in reference order.
    fn extract_options(
        options: &[ShaderOption],
        shader: &Shader,
    ) -> Result<Vec<ShaderOption>, VariantError> {
        shader
            .options
            .iter()
            .map(|&index| {
                options.get(index).cloned().ok_or_else(|| {
                    VariantError::Configuration(format!(
                        "shader '{}' references option {} but only {} options are declared",
                        shader.filename,
                        index,
                        options.len()
                    ))
                })
            })
            .collect()
    }
}

impl Default for VariantExpander {
    fn default() -> Self {
        Self::new()
    }
}
