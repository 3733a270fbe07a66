//! Import specifier resolution against the flattened project.

use glimpse_tree::FlatFileMap;

/// Extensions the registry treats as executable modules.
pub const CODE_EXTENSIONS: [&str; 6] = [".tsx", ".ts", ".jsx", ".js", ".mjs", ".json"];

/// Extensions aggregated as styles instead of executed.
pub const STYLE_EXTENSIONS: [&str; 1] = [".css"];

/// Suffixes tried, in order, when a specifier has no known extension.
pub const FALLBACK_SUFFIXES: [&str; 8] = [
    ".tsx",
    ".ts",
    ".jsx",
    ".js",
    "/index.tsx",
    "/index.ts",
    "/index.jsx",
    "/index.js",
];

/// A resolved in-project import target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Absolute path with leading slash; may not exist in the project
    pub path: String,

    /// Whether the target is a stylesheet
    pub is_stylesheet: bool,

    /// Whether `path` names a file in the project
    pub found: bool,
}

/// Resolves written specifiers to project paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResolver {
    alias_prefix: String,
    source_root: String,
}

impl Default for PathResolver {
    fn default() -> Self {
        Self::new("@/", "src")
    }
}

impl PathResolver {
    /// Create a resolver mapping `alias_prefix` (e.g., "@/") onto `source_root`
    /// (e.g., "src").
    pub fn new(alias_prefix: impl Into<String>, source_root: &str) -> Self {
        Self {
            alias_prefix: alias_prefix.into(),
            source_root: normalize(source_root),
        }
    }

    pub fn alias_prefix(&self) -> &str {
        &self.alias_prefix
    }

    /// Source root as an absolute path ("/src").
    pub fn source_root(&self) -> &str {
        &self.source_root
    }

    /// Whether `spec` points into the project rather than at a package.
    pub fn is_in_project(&self, spec: &str) -> bool {
        spec.starts_with("./")
            || spec.starts_with("../")
            || spec == "."
            || spec == ".."
            || spec.starts_with('/')
            || (!self.alias_prefix.is_empty() && spec.starts_with(&self.alias_prefix))
    }

    /// Map `spec` to an absolute path before extension inference.
    ///
    /// `importer` is the absolute path of the importing module. Bare package
    /// names are returned unchanged.
    pub fn candidate(&self, spec: &str, importer: &str) -> String {
        if !self.alias_prefix.is_empty() {
            if let Some(rest) = spec.strip_prefix(&self.alias_prefix) {
                return normalize(&format!("{}/{}", self.source_root, rest));
            }
        }

        if spec.starts_with('/') {
            normalize(spec)
        } else if spec.starts_with('.') {
            normalize(&format!("{}/{}", dirname(importer), spec))
        } else {
            spec.to_string()
        }
    }

    /// Resolve `spec` from `importer`, trying extension fallbacks against
    /// `files`. An unmatched specifier keeps its extension-less guess.
    pub fn resolve(&self, spec: &str, importer: &str, files: &FlatFileMap) -> Resolution {
        let candidate = self.candidate(spec, importer);
        let exists = |path: &str| files.contains(path.trim_start_matches('/'));

        if has_known_extension(&candidate) {
            if exists(&candidate) {
                return Resolution::found(candidate);
            }

            // `./util.js` written against a TypeScript source
            if let Some(stem) = candidate.strip_suffix(".js") {
                for ext in [".ts", ".tsx"] {
                    let swapped = format!("{}{}", stem, ext);
                    if exists(&swapped) {
                        return Resolution::found(swapped);
                    }
                }
            }

            return Resolution::missing(candidate);
        }

        for suffix in FALLBACK_SUFFIXES {
            let attempt = format!("{}{}", candidate, suffix);
            if exists(&attempt) {
                return Resolution::found(attempt);
            }
        }

        tracing::debug!("Unresolved import {} from {}", spec, importer);
        Resolution::missing(candidate)
    }
}

impl Resolution {
    fn found(path: String) -> Self {
        Self {
            is_stylesheet: is_stylesheet(&path),
            path,
            found: true,
        }
    }

    fn missing(path: String) -> Self {
        Self {
            is_stylesheet: is_stylesheet(&path),
            path,
            found: false,
        }
    }
}

/// Collapse `.`/`..`/empty segments and return an absolute path.
///
/// `..` at the root stays at the root.
pub fn normalize(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }

    format!("/{}", segments.join("/"))
}

/// Directory part of an absolute path ("/src/App.tsx" -> "/src").
pub fn dirname(path: &str) -> &str {
    match path.rfind('/') {
        Some(0) | None => "/",
        Some(i) => &path[..i],
    }
}

/// Whether the final segment ends in a code or style extension.
pub fn has_known_extension(path: &str) -> bool {
    let name = glimpse_tree::file_name(path);
    CODE_EXTENSIONS
        .iter()
        .chain(STYLE_EXTENSIONS.iter())
        .any(|ext| name.ends_with(ext))
}

pub fn is_stylesheet(path: &str) -> bool {
    STYLE_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}

/// Whether `path` has an extension the registry executes.
pub fn is_code_file(path: &str) -> bool {
    CODE_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}
