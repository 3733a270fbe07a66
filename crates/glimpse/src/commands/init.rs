//! Initialize glimpse in a project.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub async fn run(config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing glimpse...");

    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(());
    }

    fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    tracing::info!("Created {}", config_path.display());

    tracing::info!("Run 'glimpse dev' to start the development server.");

    Ok(())
}

pub(crate) const DEFAULT_CONFIG: &str = r#"# glimpse configuration

[project]
# Project root on disk
dir = "."

# Import alias prefix and the directory it maps to
alias = "@/"
source_root = "src"

[build]
# Preview document written by `glimpse build`
output = "preview.html"

# Minify the aggregated stylesheet
minify_css = false

# Add missing lucide-react imports for icons used in JSX
autofix_icons = true

# Directories ignored when loading the project
exclude = ["node_modules", "dist", "build", ".git"]

[server]
host = "127.0.0.1"
port = 5177
"#;
