//! Project shape detection.

use crate::flatten::FlatFileMap;

/// Root component file names, in priority order.
pub const APP_ENTRY_NAMES: [&str; 2] = ["App.tsx", "App.jsx"];

/// Bootstrap module file names, in priority order.
pub const MAIN_ENTRY_NAMES: [&str; 4] = ["main.tsx", "main.jsx", "index.tsx", "index.jsx"];

/// Document used for plain HTML projects.
pub const HTML_ENTRY_NAME: &str = "index.html";

/// Global stylesheet candidates; the first name present wins.
pub const GLOBAL_STYLESHEET_NAMES: [&str; 3] = ["index.css", "styles.css", "style.css"];

/// Preview strategy for a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectShape {
    /// A framework entry point exists; build a module registry.
    Framework,
    /// No entry point but an `index.html`; pass it through.
    PlainHtml,
    /// Nothing recognizable; list the files.
    FileList,
}

impl ProjectShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectShape::Framework => "framework",
            ProjectShape::PlainHtml => "plain-html",
            ProjectShape::FileList => "file-list",
        }
    }
}

/// Final segment of a slash-delimited path.
pub fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Whether `path` names the file `name`.
///
/// This is a plain suffix test, so `src/MyApp.tsx` counts as an `App.tsx`.
/// Generated projects name their root component freely and still preview.
pub fn matches_name(path: &str, name: &str) -> bool {
    path.ends_with(name)
}

/// Decide which preview strategy applies to `files`.
pub fn detect_shape(files: &FlatFileMap) -> ProjectShape {
    let has_entry = APP_ENTRY_NAMES
        .iter()
        .chain(MAIN_ENTRY_NAMES.iter())
        .any(|name| files.find_by_name(name).is_some());

    if has_entry {
        ProjectShape::Framework
    } else if files.find_by_name(HTML_ENTRY_NAME).is_some() {
        ProjectShape::PlainHtml
    } else {
        ProjectShape::FileList
    }
}

/// Locate the global stylesheet, returning `(path, content)`.
pub fn find_global_stylesheet(files: &FlatFileMap) -> Option<(&str, &str)> {
    GLOBAL_STYLESHEET_NAMES
        .iter()
        .find_map(|name| files.find_by_name(name))
}
