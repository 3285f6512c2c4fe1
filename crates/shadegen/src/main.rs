//! Shader variant generator
//!
//! Reads a variant manifest, expands every shader over the full combination
//! space of its options and prints the resulting variant list as JSON on
//! stdout. A build pipeline consumes that list and invokes the shader
//! compiler once per record.
//!
//! Run with: cargo run -p shadegen -- <variants-manifest.json>

use std::process::ExitCode;

use shadegen_core::{generate, Manifest, VariantError};

fn main() -> ExitCode {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let (Some(manifest_path), None) = (args.next(), args.next()) else {
        eprintln!("No manifest filename specified.");
        eprintln!("  Usage: shadegen <variants-manifest.json>");
        return ExitCode::FAILURE;
    };

    match run(&manifest_path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(manifest_path: &str) -> Result<(), VariantError> {
    let manifest = Manifest::load(manifest_path)?;
    log::info!(
        "loaded manifest '{}': {} options, {} shaders",
        manifest_path,
        manifest.options.len(),
        manifest.shaders.len()
    );

    let set = generate(&manifest)?;
    log::info!("generated {} variants", set.variants.len());

    println!("{}", set.to_json()?);
    Ok(())
}
