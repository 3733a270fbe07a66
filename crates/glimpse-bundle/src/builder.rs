//! Preview bundler: file tree in, single HTML document out.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use glimpse_tree::{detect_shape, flatten, FileNode, FlatFileMap, ProjectShape, HTML_ENTRY_NAME};
use glimpse_transform::{ModuleRewriter, OxcTranspiler, PathResolver, RegexRewriter, Transpiler};

use crate::assets::{escape_style, AssetPipeline};
use crate::config::BundleConfig;
use crate::passthrough::enhance_html;
use crate::registry::{ModulePipeline, ModuleRegistry};
use crate::runtime::{
    shim_table_json, BOOTSTRAP_JS, CONSOLE_FORWARDER_JS, LOADER_JS, REACT_DOM_URL, REACT_URL,
    TAILWIND_URL,
};
use crate::templates::{FrameworkContext, TemplateEngine};

/// Result of a bundle operation.
#[derive(Debug, Clone)]
pub struct BundleOutput {
    /// The preview document
    pub html: String,

    /// Strategy that produced the document
    pub shape: ProjectShape,

    /// Number of modules in the registry (framework previews only)
    pub modules: usize,

    /// Total bundle time in milliseconds
    pub duration_ms: u64,
}

/// Errors that can occur while producing or writing a preview.
#[derive(Debug, thiserror::Error)]
pub enum BundleError {
    #[error("Failed to render template: {0}")]
    Template(String),

    #[error("Failed to serialize module table: {0}")]
    Serialize(String),

    #[error("CSS {0}")]
    Css(String),

    #[error("Failed to write {path}: {message}")]
    Write { path: String, message: String },
}

impl From<minijinja::Error> for BundleError {
    fn from(e: minijinja::Error) -> Self {
        BundleError::Template(e.to_string())
    }
}

/// Preview bundler.
pub struct Bundler {
    config: BundleConfig,
    resolver: PathResolver,
    rewriter: Box<dyn ModuleRewriter>,
    transpiler: Box<dyn Transpiler>,
    templates: TemplateEngine,
}

impl Bundler {
    /// Create a bundler with the regex rewriter and the oxc transpiler.
    pub fn new(config: BundleConfig) -> Self {
        Self::with_transforms(config, Box::new(RegexRewriter::new()), Box::new(OxcTranspiler::new()))
    }

    /// Create a bundler with custom transform steps.
    pub fn with_transforms(
        config: BundleConfig,
        rewriter: Box<dyn ModuleRewriter>,
        transpiler: Box<dyn Transpiler>,
    ) -> Self {
        Self {
            resolver: config.resolver(),
            config,
            rewriter,
            transpiler,
            templates: TemplateEngine::new(),
        }
    }

    pub fn config(&self) -> &BundleConfig {
        &self.config
    }

    /// Bundle a file tree into a preview document.
    ///
    /// Never fails: transform problems become inline diagnostics in the
    /// document, and an internal failure yields an error document.
    pub fn bundle(&self, nodes: &[FileNode]) -> BundleOutput {
        let start = Instant::now();

        let files = flatten(nodes);
        let shape = detect_shape(&files);
        tracing::info!("Bundling {} files as {} preview", files.len(), shape.as_str());

        let (html, modules) = match shape {
            ProjectShape::Framework => match self.bundle_framework(&files) {
                Ok(result) => result,
                Err(e) => {
                    tracing::warn!("{}", e);
                    (self.error_document(&e.to_string()), 0)
                }
            },
            ProjectShape::PlainHtml => (self.bundle_plain_html(&files), 0),
            ProjectShape::FileList => (self.bundle_file_list(&files), 0),
        };

        BundleOutput {
            html,
            shape,
            modules,
            duration_ms: start.elapsed().as_millis() as u64,
        }
    }

    fn bundle_framework(&self, files: &FlatFileMap) -> Result<(String, usize), BundleError> {
        let pipeline = ModulePipeline {
            rewriter: self.rewriter.as_ref(),
            transpiler: self.transpiler.as_ref(),
            resolver: &self.resolver,
            config: &self.config,
        };
        let registry = ModuleRegistry::build(files, &pipeline);
        let styles = AssetPipeline::collect_styles(files, &self.config);

        let context = FrameworkContext {
            title: "Preview".to_string(),
            css: escape_style(&styles.css),
            modules: registry.to_json()?,
            shims: shim_table_json()?,
            entries: json_list(&registry.main_entries())?,
            apps: json_list(&registry.app_entries())?,
            react_url: REACT_URL.to_string(),
            react_dom_url: REACT_DOM_URL.to_string(),
            tailwind_url: TAILWIND_URL.to_string(),
            console_forwarder: CONSOLE_FORWARDER_JS.to_string(),
            loader: LOADER_JS.to_string(),
            bootstrap: BOOTSTRAP_JS.to_string(),
        };

        let html = self.templates.render_framework(&context)?;
        Ok((html, registry.len()))
    }

    fn bundle_plain_html(&self, files: &FlatFileMap) -> String {
        let html = files
            .find_by_name(HTML_ENTRY_NAME)
            .map(|(_, content)| content)
            .unwrap_or_default();

        enhance_html(html, files, &self.config, self.transpiler.as_ref())
    }

    fn bundle_file_list(&self, files: &FlatFileMap) -> String {
        let paths: Vec<&str> = files.paths().collect();

        self.templates
            .render_file_list("Project Files", &paths)
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to render file list: {}", e);
                self.error_document(&e.to_string())
            })
    }

    fn error_document(&self, message: &str) -> String {
        self.templates
            .render_error(message)
            .unwrap_or_else(|_| format!("<pre>{}</pre>", html_escape(message)))
    }
}

impl Default for Bundler {
    fn default() -> Self {
        Self::new(BundleConfig::default())
    }
}

impl BundleOutput {
    /// Write the document to `path`, creating parent directories.
    pub fn write_to(&self, path: &Path) -> Result<PathBuf, BundleError> {
        let write_error = |e: std::io::Error| BundleError::Write {
            path: path.display().to_string(),
            message: e.to_string(),
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_error)?;
        }
        fs::write(path, &self.html).map_err(write_error)?;

        Ok(path.to_path_buf())
    }
}

/// Bundle with the default configuration and return the document.
pub fn bundle_preview(nodes: &[FileNode]) -> String {
    Bundler::default().bundle(nodes).html
}

fn json_list(items: &[String]) -> Result<String, BundleError> {
    serde_json::to_string(items).map_err(|e| BundleError::Serialize(e.to_string()))
}

fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
