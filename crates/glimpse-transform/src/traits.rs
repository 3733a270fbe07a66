//! Trait definitions for the per-module transform pipeline.

use glimpse_tree::FlatFileMap;

use crate::resolve::PathResolver;

/// Context for rewriting one module.
#[derive(Debug, Clone, Copy)]
pub struct RewriteContext<'a> {
    /// Resolved absolute path of the module being rewritten ("/src/App.tsx")
    pub path: &'a str,

    /// Every file in the project, for import resolution
    pub files: &'a FlatFileMap,

    /// Alias and extension rules
    pub resolver: &'a PathResolver,
}

/// Errors that can occur while transpiling a module.
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    #[error("Parse error in {path}: {message}")]
    Parse { path: String, message: String },

    #[error("Transform error in {path}: {message}")]
    Transform { path: String, message: String },

    #[error("Invalid JSON module {path}: {message}")]
    Json { path: String, message: String },
}

/// Rewrites static `import`/`export` syntax into calls against the in-document
/// loader (`require`) and the module's `exports` object.
pub trait ModuleRewriter: Send + Sync {
    /// Rewrite one module's source text.
    fn rewrite_module(&self, source: &str, ctx: &RewriteContext<'_>) -> String;
}

/// Turns JSX/TypeScript into plain script text.
pub trait Transpiler: Send + Sync {
    /// Identifier for logs (e.g., "oxc")
    fn name(&self) -> &'static str;

    /// Transpile `source`. `path` is only used for diagnostics and to pick the
    /// syntax flavor from its extension.
    fn transpile(&self, source: &str, path: &str) -> Result<String, TransformError>;

    /// Transpile, substituting a stand-in that logs the failure when the
    /// source cannot be transformed.
    fn transpile_or_stub(&self, source: &str, path: &str) -> String {
        match self.transpile(source, path) {
            Ok(code) => code,
            Err(e) => {
                tracing::warn!("{}", e);
                error_module(path, &e.to_string())
            }
        }
    }
}

/// Module body that only reports a transform failure to the console.
pub fn error_module(path: &str, message: &str) -> String {
    let text = format!("[preview] Failed to compile {}: {}", path, message);
    format!(
        "console.error({});\n",
        serde_json::to_string(&text).unwrap_or_else(|_| "\"[preview] compile error\"".to_string())
    )
}
