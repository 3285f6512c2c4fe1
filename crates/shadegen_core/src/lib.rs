//! # Shadegen Core
//!
//! Shader variant enumeration providing:
//! - Compile-time option axes with default {absent, defined} expansion
//! - Mixed-radix enumeration of every option combination per shader
//! - Serialization of combinations into compiler defines and output filenames
//! - JSON manifest input and variant list output for build pipelines
//!
//! ## Architecture
//!
//! ```text
//! Manifest (.json) ──► Option Model ──► Mixed-Radix Counter ──► Serializer ──► Variant List
//!                              │                                     │
//!                              ▼                                     ▼
//!                        option axes                       defines + output filename
//! ```
//!
//! The core is pure: it never invokes a compiler, touches the filesystem
//! (beyond [`Manifest::load`]) or validates define syntax. A build pipeline
//! consumes the variant list and shells out to a shader compiler once per
//! record.

pub mod counter;
pub mod expand;
pub mod manifest;
pub mod options;
pub mod serialize;

pub use expand::{Shader, Variant, VariantExpander, DEFAULT_ARTIFACT_SUFFIX};
pub use manifest::{Manifest, VariantSet};
pub use options::{expand_defaults, OptionSpec, OptionValue, ScalarValue, ShaderOption, ValueSpec};
pub use serialize::{build_defines, build_filename};

use thiserror::Error;

/// Errors from variant enumeration
#[derive(Debug, Error)]
pub enum VariantError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("combination space exceeds the supported range (u64)")]
    Overflow,

    #[error("step index {index} out of range (step count {count})")]
    IndexOutOfRange { index: u64, count: u64 },

    #[error("failed to read manifest: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse manifest: {0}")]
    Json(#[from] serde_json::Error),
}

/// Expand a manifest into its full variant set with the default suffix.
///
/// Convenience wrapper over [`Manifest::resolve`] and
/// [`VariantExpander::expand`].
pub fn generate(manifest: &Manifest) -> Result<VariantSet, VariantError> {
    let options = manifest.resolve()?;
    let variants = VariantExpander::new().expand(&options, &manifest.shaders)?;

    log::debug!(
        "expanded {} shaders into {} variants",
        manifest.shaders.len(),
        variants.len()
    );
    Ok(VariantSet { variants })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_MANIFEST: &str = r#"
        {
            "options": [
                { "define": "USE_FOG" },
                { "define": "LOD", "values": [null, 1, 2] }
            ],
            "shaders": [
                { "filename": "main.frag", "options": [0, 1] }
            ]
        }
    "#;

    #[test]
    fn test_generate_from_manifest() {
        let manifest = Manifest::from_json(TEST_MANIFEST).unwrap();
        let set = generate(&manifest).unwrap();

        assert_eq!(set.variants.len(), 6);
        assert_eq!(set.variants[0].defines, "");
        assert_eq!(set.variants[0].output, "main.frag.spv");
        assert_eq!(set.variants[5].defines, "-DUSE_FOG -DLOD=2");
    }

    #[test]
    fn test_generate_rejects_empty_values() {
        let manifest = Manifest::from_json(
            r#"{ "options": [ { "define": "BROKEN", "values": [] } ], "shaders": [] }"#,
        )
        .unwrap();
        assert!(matches!(
            generate(&manifest),
            Err(VariantError::Configuration(_))
        ));
    }
}
