//! Per-module transforms for the preview bundler.
//!
//! Each project file goes through optional icon import fixing, import/export
//! rewriting against the in-document loader, and transpiling to plain script.

pub mod autofix;
pub mod externals;
pub mod icons;
pub mod resolve;
pub mod rewrite;
pub mod traits;
pub mod transpile;

pub use autofix::{accepts_autofix, autofix_missing_imports, detect_missing_icon_imports};
pub use externals::{ExternalModule, ICON_PACKAGE};
pub use resolve::{is_code_file, is_stylesheet, PathResolver, Resolution};
pub use rewrite::{js_string, ImportBinding, ImportClause, RegexRewriter};
pub use traits::{error_module, ModuleRewriter, RewriteContext, TransformError, Transpiler};
pub use transpile::OxcTranspiler;
