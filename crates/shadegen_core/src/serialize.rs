//! Serialization of one selection into compiler arguments and a filename
//!
//! Both mappings walk the shader's option subset in axis order, so the
//! resulting strings are fully determined by the selection vector. The
//! filename mapping is injective per axis value, which keeps distinct
//! selections on distinct output files.

use std::path::Path;

use crate::options::{OptionValue, ShaderOption};

/// Build the preprocessor argument string for one selection.
///
/// Absent axes contribute nothing, defined axes contribute `-DNAME` and
/// scalar axes `-DNAME=value`, joined by single spaces. An all-absent
/// selection yields the empty string.
pub fn build_defines(subset: &[ShaderOption], selection: &[usize]) -> String {
    let mut args = String::new();

    for (option, &digit) in subset.iter().zip(selection) {
        match &option.values[digit] {
            OptionValue::Absent => {}
            OptionValue::Defined => {
                args.push_str(&format!(" -D{}", option.define));
            }
            OptionValue::Scalar(value) => {
                args.push_str(&format!(" -D{}={}", option.define, value));
            }
        }
    }

    args.trim().to_string()
}

/// Build the output filename for one selection.
///
/// Starts from the shader filename with its final extension stripped,
/// appends `_name` for defined axes and `_name_value` for scalar axes
/// (define names lowercased), then re-appends the original extension and
/// the compiled-artifact suffix.
pub fn build_filename(
    filename: &str,
    subset: &[ShaderOption],
    selection: &[usize],
    artifact_suffix: &str,
) -> String {
    let path = Path::new(filename);
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(filename);
    let extension = path.extension().and_then(|s| s.to_str());

    let mut name = stem.to_string();
    for (option, &digit) in subset.iter().zip(selection) {
        match &option.values[digit] {
            OptionValue::Absent => {}
            OptionValue::Defined => {
                name.push_str(&format!("_{}", option.define.to_lowercase()));
            }
            OptionValue::Scalar(value) => {
                name.push_str(&format!("_{}_{}", option.define.to_lowercase(), value));
            }
        }
    }

    if let Some(extension) = extension {
        name.push_str(&format!(".{}", extension));
    }
    name.push_str(artifact_suffix);
    name
}
