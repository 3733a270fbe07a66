//! Preview build command.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glimpse_bundle::Bundler;
use glimpse_tree::{load_dir, load_json, FileNode};

use crate::config::ConfigFile;

/// Run the build command.
pub async fn run(
    config: ConfigFile,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    minify: Option<bool>,
) -> Result<()> {
    let input = input.unwrap_or_else(|| config.project.dir.clone());
    let output = output.unwrap_or_else(|| config.build.output.clone());

    let mut bundle_config = config.bundle_config();
    if let Some(minify) = minify {
        bundle_config.minify_css = minify;
    }

    tracing::info!("Bundling {}...", input.display());

    let nodes = load_input(&input, &bundle_config.exclude)?;
    let result = Bundler::new(bundle_config).bundle(&nodes);

    let written = result
        .write_to(&output)
        .with_context(|| format!("Failed to write preview to {}", output.display()))?;

    tracing::info!(
        "Built {} preview with {} modules in {}ms",
        result.shape.as_str(),
        result.modules,
        result.duration_ms
    );
    tracing::info!("Output: {}", written.display());

    Ok(())
}

/// Read a project directory, or a serialized tree when `input` is a `.json`
/// file.
fn load_input(input: &Path, exclude: &[String]) -> Result<Vec<FileNode>> {
    if input.extension().is_some_and(|ext| ext == "json") {
        let source = fs::read_to_string(input)
            .with_context(|| format!("Failed to read {}", input.display()))?;
        return load_json(&source)
            .with_context(|| format!("Failed to parse {}", input.display()));
    }

    load_dir(input, exclude).with_context(|| format!("Failed to load {}", input.display()))
}
