//! Preview for projects that ship their own `index.html`.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::{NoExpand, Regex};

use glimpse_tree::{file_name, find_global_stylesheet, FlatFileMap};
use glimpse_transform::Transpiler;

use crate::assets::escape_style;
use crate::config::BundleConfig;
use crate::registry::escape_script;
use crate::runtime::{CONSOLE_FORWARDER_JS, ONERROR_JS};

static HEAD_CLOSE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</head\s*>").expect("Invalid head regex"));

static BODY_CLOSE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</body\s*>").expect("Invalid body regex"));

static MODULE_TYPE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\btype\s*=\s*["']module["']"#).expect("Invalid module type regex")
});

/// Extensions of scripts that may be inlined.
const SCRIPT_EXTENSIONS: [&str; 4] = [".js", ".jsx", ".ts", ".tsx"];

/// Enhance a hand-written document: inline the global stylesheet and local
/// scripts, and report console output and errors to the parent frame.
pub fn enhance_html(
    html: &str,
    files: &FlatFileMap,
    config: &BundleConfig,
    transpiler: &dyn Transpiler,
) -> String {
    let mut html = html.to_string();

    if let Some((path, css)) = find_global_stylesheet(files) {
        tracing::debug!("Inlining stylesheet {}", path);
        let style = format!("<style>{}</style>", escape_style(css));
        html = insert_before(&html, &HEAD_CLOSE_RE, &style, Placement::Prepend);
    }

    html = inline_scripts(&html, files, config, transpiler);

    let reporters = format!(
        "<script>{}</script>\n<script>{}</script>\n",
        CONSOLE_FORWARDER_JS, ONERROR_JS
    );
    insert_before(&html, &BODY_CLOSE_RE, &reporters, Placement::Append)
}

enum Placement {
    Prepend,
    Append,
}

/// Insert `text` before the first match of `close`, or at the start/end of
/// the document when there is none.
fn insert_before(html: &str, close: &Regex, text: &str, fallback: Placement) -> String {
    match close.find(html) {
        Some(m) => format!("{}{}{}", &html[..m.start()], text, &html[m.start()..]),
        None => match fallback {
            Placement::Prepend => format!("{}{}", text, html),
            Placement::Append => format!("{}{}", html, text),
        },
    }
}

/// Replace `<script src="...name.ext"></script>` tags that reference project
/// files with inline transpiled scripts. When several files share a name the
/// first one discovered wins.
fn inline_scripts(
    html: &str,
    files: &FlatFileMap,
    config: &BundleConfig,
    transpiler: &dyn Transpiler,
) -> String {
    let mut html = html.to_string();
    let mut seen = HashSet::new();

    for (path, source) in files.iter() {
        if config.is_excluded(path) || !SCRIPT_EXTENSIONS.iter().any(|ext| path.ends_with(ext)) {
            continue;
        }

        let name = file_name(path);
        if !seen.insert(name) {
            continue;
        }

        let pattern = format!(
            r#"(?i)<script([^>]*)\ssrc\s*=\s*["'](?:[^"']*/)?{}["']([^>]*)>\s*</script\s*>"#,
            regex::escape(name)
        );
        let Ok(tag_re) = Regex::new(&pattern) else {
            continue;
        };

        let Some(caps) = tag_re.captures(&html) else {
            continue;
        };

        let attrs = format!(
            "{}{}",
            caps.get(1).map_or("", |m| m.as_str()),
            caps.get(2).map_or("", |m| m.as_str())
        );
        let type_attr = if MODULE_TYPE_RE.is_match(&attrs) {
            " type=\"module\""
        } else {
            ""
        };

        tracing::debug!("Inlining script {}", path);
        let code = escape_script(&transpiler.transpile_or_stub(source, &format!("/{}", path)));
        let inline = format!("<script{}>{}</script>", type_attr, code);

        html = tag_re.replace_all(&html, NoExpand(&inline)).into_owned();
    }

    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use glimpse_transform::OxcTranspiler;

    fn enhance(html: &str, entries: &[(&str, &str)]) -> String {
        let mut files: FlatFileMap = entries.iter().copied().collect();
        files.insert("index.html", html);
        enhance_html(html, &files, &BundleConfig::default(), &OxcTranspiler::new())
    }

    #[test]
    fn inlines_stylesheet_before_head_close() {
        let out = enhance(
            "<html><head><title>x</title></head><body></body></html>",
            &[("styles.css", "body{color:red}")],
        );

        assert!(out.contains("<style>body{color:red}</style></head>"));
    }

    #[test]
    fn prepends_stylesheet_without_head() {
        let out = enhance("<p>hi</p>", &[("style.css", "p{margin:0}")]);
        assert!(out.starts_with("<style>p{margin:0}</style><p>hi</p>"));
    }

    #[test]
    fn inlines_referenced_scripts() {
        let out = enhance(
            "<html><body><script src=\"./app.ts\"></script></body></html>",
            &[("app.ts", "const n: number = 1; console.log(n);")],
        );

        assert!(!out.contains("src=\"./app.ts\""));
        assert!(out.contains("const n = 1"));
    }

    #[test]
    fn keeps_module_type_when_inlining() {
        let out = enhance(
            "<body><script type=\"module\" src=\"js/main.js\"></script></body>",
            &[("js/main.js", "console.log(1);")],
        );

        assert!(out.contains("<script type=\"module\">"));
    }

    #[test]
    fn does_not_match_name_suffixes() {
        let out = enhance(
            "<body><script src=\"domain.js\"></script></body>",
            &[("main.js", "console.log(1);")],
        );

        assert!(out.contains("src=\"domain.js\""));
    }

    #[test]
    fn leaves_remote_scripts_alone() {
        let out = enhance(
            "<body><script src=\"https://cdn.example.test/lib.js\"></script></body>",
            &[],
        );

        assert!(out.contains("src=\"https://cdn.example.test/lib.js\""));
    }

    #[test]
    fn injects_reporters_before_body_close() {
        let out = enhance("<html><body><h1>Hi</h1></body></html>", &[]);

        let forwarder = out.find("type: 'console'").unwrap();
        let onerror = out.find("window.onerror").unwrap();
        let body_close = out.find("</body>").unwrap();

        assert!(forwarder < body_close);
        assert!(onerror < body_close);
        assert!(out.contains("<h1>Hi</h1>"));
    }

    #[test]
    fn appends_reporters_without_body() {
        let out = enhance("<h1>Hi</h1>", &[]);
        assert!(out.starts_with("<h1>Hi</h1>"));
        assert!(out.contains("window.onerror"));
    }
}
