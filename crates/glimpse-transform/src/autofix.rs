//! Adds missing icon imports to generated components.
//!
//! Generated code often renders icons (`<Bot />`) without importing them. Tags
//! that are PascalCase, not bound in the file, not a common framework or
//! layout component, and that name a known icon get added to the file's
//! icon-package import.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::externals::ICON_PACKAGE;
use crate::icons::ICON_NAMES;

/// PascalCase names that are never treated as icons.
pub const IGNORED_COMPONENTS: &[&str] = &[
    "React",
    "ReactDOM",
    "Fragment",
    "Suspense",
    "StrictMode",
    "Component",
    "PureComponent",
    "Children",
    "Profiler",
    "ErrorBoundary",
    "App",
    "Provider",
    "Router",
    "Route",
    "Routes",
    "Switch",
    "Link",
    "NavLink",
    "Outlet",
    "Navigate",
    "BrowserRouter",
    "HashRouter",
    "MemoryRouter",
    "Header",
    "Footer",
    "Main",
    "Section",
    "Nav",
    "Aside",
    "Article",
    "AnimatePresence",
    "MotionDiv",
];

/// Browser and language globals that share a name with an icon. Importing
/// one of these would shadow the global for the whole module.
pub const GLOBAL_NAMES: &[&str] = &[
    "Array",
    "Audio",
    "Blob",
    "Clipboard",
    "Comment",
    "Date",
    "Error",
    "Event",
    "File",
    "FileList",
    "Function",
    "History",
    "Image",
    "Infinity",
    "Lock",
    "Map",
    "Navigator",
    "Node",
    "Number",
    "Object",
    "Option",
    "Promise",
    "Proxy",
    "Range",
    "Screen",
    "Selection",
    "Set",
    "Storage",
    "String",
    "Symbol",
    "Text",
    "Touch",
    "URL",
    "WeakMap",
    "WeakSet",
    "Worker",
];

/// Extensions whose files may render JSX.
const JSX_EXTENSIONS: &[&str] = &[".tsx", ".jsx", ".js"];

static JSX_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<([A-Z][A-Za-z0-9]+)[\s/>]").expect("Invalid JSX tag regex"));

static NAMED_IMPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"import\s*\{([^}]+)\}\s*from\s*['"][^'"]+['"]"#)
        .expect("Invalid named import regex")
});

static DEFAULT_IMPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"import\s+([A-Z]\w+)\s+from\s*['"][^'"]+['"]"#)
        .expect("Invalid default import regex")
});

static NAMESPACE_IMPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"import\s*\*\s*as\s+(\w+)\s+from\s*['"][^'"]+['"]"#)
        .expect("Invalid namespace import regex")
});

static LOCAL_DECL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:const|let|var|function|class)\s+([A-Z]\w+)")
        .expect("Invalid local declaration regex")
});

static ICON_IMPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r#"import\s*\{{([^}}]+)\}}\s*from\s*['"]{}['"]"#,
        regex::escape(ICON_PACKAGE)
    ))
    .expect("Invalid icon import regex")
});

static AS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+as\s+").expect("Invalid alias regex"));

pub fn is_icon_name(name: &str) -> bool {
    ICON_NAMES.binary_search_by(|icon| (*icon).cmp(name)).is_ok()
}

/// Whether the file at `path` can contain JSX and should be autofixed.
/// Plain `.ts` modules only ever use `<Name>` as a type argument.
pub fn accepts_autofix(path: &str) -> bool {
    JSX_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}

/// Icon names rendered as JSX tags in `source` but never bound, sorted.
pub fn detect_missing_icon_imports(source: &str) -> Vec<String> {
    let used: BTreeSet<&str> = JSX_TAG_RE
        .captures_iter(source)
        .filter(|c| c.get(0).is_some_and(|m| opens_element(source, m.start())))
        .filter_map(|c| c.get(1).map(|m| m.as_str()))
        .collect();

    if used.is_empty() {
        return Vec::new();
    }

    let bound = bound_names(source);

    used.into_iter()
        .filter(|name| !bound.contains(name))
        .filter(|name| !IGNORED_COMPONENTS.contains(name))
        .filter(|name| !GLOBAL_NAMES.contains(name))
        .filter(|name| is_icon_name(name))
        .map(str::to_string)
        .collect()
}

/// A `<` directly after an identifier is a type argument (`Array<File>`),
/// not the start of an element.
fn opens_element(source: &str, at: usize) -> bool {
    source[..at]
        .chars()
        .next_back()
        .map_or(true, |c| !(c.is_alphanumeric() || c == '_' || c == '$'))
}

fn bound_names(source: &str) -> BTreeSet<&str> {
    let mut bound = BTreeSet::new();

    for caps in NAMED_IMPORT_RE.captures_iter(source) {
        let Some(list) = caps.get(1) else { continue };
        for item in list.as_str().split(',') {
            let local = AS_RE.split(item.trim()).last().unwrap_or("").trim();
            if !local.is_empty() {
                bound.insert(local);
            }
        }
    }

    for re in [&*DEFAULT_IMPORT_RE, &*NAMESPACE_IMPORT_RE, &*LOCAL_DECL_RE] {
        bound.extend(re.captures_iter(source).filter_map(|c| c.get(1).map(|m| m.as_str())));
    }

    bound
}

/// Add missing icon imports to `source`.
///
/// Extends an existing icon-package import when there is one, otherwise
/// prepends a new import statement. Source without missing icons is returned
/// unchanged.
pub fn autofix_missing_imports(source: &str) -> String {
    let missing = detect_missing_icon_imports(source);
    if missing.is_empty() {
        return source.to_string();
    }

    tracing::debug!("Adding icon imports: {}", missing.join(", "));

    if let Some(caps) = ICON_IMPORT_RE.captures(source) {
        let (Some(whole), Some(list)) = (caps.get(0), caps.get(1)) else {
            return source.to_string();
        };

        let names: BTreeSet<&str> = list
            .as_str()
            .split(',')
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .chain(missing.iter().map(String::as_str))
            .collect();

        let statement = format!(
            "import {{ {} }} from '{}'",
            names.into_iter().collect::<Vec<_>>().join(", "),
            ICON_PACKAGE
        );

        let mut fixed = String::with_capacity(source.len() + statement.len());
        fixed.push_str(&source[..whole.start()]);
        fixed.push_str(&statement);
        fixed.push_str(&source[whole.end()..]);
        return fixed;
    }

    format!(
        "import {{ {} }} from '{}';\n{}",
        missing.join(", "),
        ICON_PACKAGE,
        source
    )
}
