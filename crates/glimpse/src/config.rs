//! glimpse.toml loading.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glimpse_bundle::{BundleConfig, DEFAULT_EXCLUDE};
use serde::Deserialize;

/// Configuration file structure (glimpse.toml).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub project: ProjectConfig,
    #[serde(default)]
    pub build: BuildSettings,
    #[serde(default)]
    pub server: ServerSettings,
}

#[derive(Debug, Deserialize)]
pub struct ProjectConfig {
    #[serde(default = "default_project_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_alias")]
    pub alias: String,
    #[serde(default = "default_source_root")]
    pub source_root: String,
}

#[derive(Debug, Deserialize)]
pub struct BuildSettings {
    #[serde(default = "default_output")]
    pub output: PathBuf,
    #[serde(default)]
    pub minify_css: bool,
    #[serde(default = "default_autofix_icons")]
    pub autofix_icons: bool,
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            dir: default_project_dir(),
            alias: default_alias(),
            source_root: default_source_root(),
        }
    }
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            output: default_output(),
            minify_css: false,
            autofix_icons: default_autofix_icons(),
            exclude: default_exclude(),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_project_dir() -> PathBuf {
    PathBuf::from(".")
}
fn default_alias() -> String {
    "@/".to_string()
}
fn default_source_root() -> String {
    "src".to_string()
}
fn default_output() -> PathBuf {
    PathBuf::from("preview.html")
}
fn default_autofix_icons() -> bool {
    true
}
fn default_exclude() -> Vec<String> {
    DEFAULT_EXCLUDE.iter().map(|s| s.to_string()).collect()
}
fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    5177
}

impl ConfigFile {
    /// Bundler settings described by this file.
    pub fn bundle_config(&self) -> BundleConfig {
        BundleConfig {
            alias_prefix: self.project.alias.clone(),
            source_root: self.project.source_root.clone(),
            minify_css: self.build.minify_css,
            autofix_icons: self.build.autofix_icons,
            exclude: self.build.exclude.clone(),
        }
    }
}

/// Load configuration from `path` if it exists, defaults otherwise.
/// Returns an error if the file exists but is malformed.
pub fn load(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        tracing::debug!("No {} found, using defaults", path.display());
        return Ok(ConfigFile::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    tracing::info!("Loaded config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn missing_file_uses_defaults() {
        let temp = tempdir().unwrap();
        let config = load(&temp.path().join("glimpse.toml")).unwrap();

        assert_eq!(config.project.dir, PathBuf::from("."));
        assert_eq!(config.build.output, PathBuf::from("preview.html"));
        assert_eq!(config.server.port, 5177);
        assert!(config.build.autofix_icons);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("glimpse.toml");
        fs::write(
            &path,
            "[project]\nalias = \"~/\"\n\n[build]\nminify_css = true\n",
        )
        .unwrap();

        let config = load(&path).unwrap();
        let bundle = config.bundle_config();

        assert_eq!(bundle.alias_prefix, "~/");
        assert_eq!(bundle.source_root, "src");
        assert!(bundle.minify_css);
        assert_eq!(bundle.exclude, default_exclude());
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("glimpse.toml");
        fs::write(&path, "[server]\nport = \"high\"\n").unwrap();

        let err = load(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn default_template_parses() {
        let config: ConfigFile = toml::from_str(crate::commands::init::DEFAULT_CONFIG).unwrap();

        assert_eq!(config.server.port, 5177);
        assert_eq!(config.build.output, PathBuf::from("preview.html"));
    }
}
