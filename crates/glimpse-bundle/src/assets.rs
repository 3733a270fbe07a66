//! Stylesheet aggregation and CSS processing.

use glimpse_tree::{find_global_stylesheet, FlatFileMap};
use glimpse_transform::is_stylesheet;

use crate::builder::BundleError;
use crate::config::BundleConfig;

/// Every project stylesheet concatenated into one block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleBundle {
    /// Concatenated CSS text
    pub css: String,

    /// Source paths in the order they were concatenated
    pub sources: Vec<String>,
}

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// Collect stylesheets: the global stylesheet first, then every other
    /// stylesheet in discovery order.
    pub fn collect_styles(files: &FlatFileMap, config: &BundleConfig) -> StyleBundle {
        let mut bundle = StyleBundle::default();

        let global = find_global_stylesheet(files);
        if let Some((path, content)) = global {
            bundle.push(path, content);
        }

        for (path, content) in files.iter() {
            if !is_stylesheet(path) || config.is_excluded(path) {
                continue;
            }
            if global.is_some_and(|(g, _)| g == path) {
                continue;
            }
            bundle.push(path, content);
        }

        if config.minify_css && !bundle.css.is_empty() {
            match Self::minify_css(&bundle.css) {
                Ok(minified) => bundle.css = minified,
                Err(e) => tracing::warn!("{}; keeping unminified CSS", e),
            }
        }

        bundle
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, BundleError> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| BundleError::Css(format!("parse error: {}", e)))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| BundleError::Css(format!("print error: {}", e)))?;

        Ok(minified.code)
    }
}

impl StyleBundle {
    fn push(&mut self, path: &str, content: &str) {
        if !self.css.is_empty() {
            self.css.push('\n');
        }
        self.css.push_str(&format!("/* {} */\n", path));
        self.css.push_str(content);
        self.sources.push(path.to_string());
    }
}

/// Escape text placed inside an inline `<style>` element.
pub fn escape_style(css: &str) -> String {
    css.replace("</style", "<\\/style")
}
