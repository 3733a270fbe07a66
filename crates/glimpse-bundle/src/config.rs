//! Bundler configuration.

use glimpse_transform::PathResolver;

/// Directories skipped by default when collecting modules and styles.
pub const DEFAULT_EXCLUDE: [&str; 4] = ["node_modules", "dist", "build", ".git"];

/// Configuration for bundling a preview.
#[derive(Debug, Clone)]
pub struct BundleConfig {
    /// Import alias prefix (e.g., "@/")
    pub alias_prefix: String,

    /// Directory the alias maps to (e.g., "src")
    pub source_root: String,

    /// Minify aggregated CSS
    pub minify_css: bool,

    /// Add missing icon imports before rewriting
    pub autofix_icons: bool,

    /// Directory names whose contents are ignored
    pub exclude: Vec<String>,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            alias_prefix: "@/".to_string(),
            source_root: "src".to_string(),
            minify_css: false,
            autofix_icons: true,
            exclude: DEFAULT_EXCLUDE.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl BundleConfig {
    pub fn resolver(&self) -> PathResolver {
        PathResolver::new(self.alias_prefix.clone(), &self.source_root)
    }

    /// Whether any directory segment of `path` is excluded.
    pub fn is_excluded(&self, path: &str) -> bool {
        let mut segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        segments.pop();
        segments
            .iter()
            .any(|segment| self.exclude.iter().any(|e| e == segment))
    }
}
