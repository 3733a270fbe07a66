//! Module registry: every project module transformed and keyed by its
//! absolute path.

use std::collections::BTreeMap;

use rayon::prelude::*;

use glimpse_tree::{matches_name, FlatFileMap, APP_ENTRY_NAMES, MAIN_ENTRY_NAMES};
use glimpse_transform::{
    accepts_autofix, autofix_missing_imports, is_code_file, ModuleRewriter, PathResolver,
    RewriteContext, Transpiler,
};

use crate::builder::BundleError;
use crate::config::BundleConfig;

/// Resolved path ("/src/App.tsx") to executable module body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleRegistry {
    modules: BTreeMap<String, String>,
}

/// The per-file transform steps, borrowed for one build.
pub struct ModulePipeline<'a> {
    pub rewriter: &'a dyn ModuleRewriter,
    pub transpiler: &'a dyn Transpiler,
    pub resolver: &'a PathResolver,
    pub config: &'a BundleConfig,
}

impl ModuleRegistry {
    /// Transform every code file in `files`.
    ///
    /// Files are processed in parallel; the registry is ordered by path so
    /// the result does not depend on scheduling.
    pub fn build(files: &FlatFileMap, pipeline: &ModulePipeline<'_>) -> Self {
        let sources: Vec<(&str, &str)> = files
            .iter()
            .filter(|(path, _)| is_code_file(path) && !pipeline.config.is_excluded(path))
            .collect();

        let modules: BTreeMap<String, String> = sources
            .par_iter()
            .map(|(path, source)| {
                let key = format!("/{}", path);
                let body = pipeline.transform(&key, source, files);
                (key, body)
            })
            .collect();

        tracing::debug!(
            "Built module registry with {} modules using {}",
            modules.len(),
            pipeline.transpiler.name()
        );

        Self { modules }
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.modules.get(path).map(String::as_str)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.modules.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Module paths in sorted order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.modules.keys().map(String::as_str)
    }

    /// Bootstrap module candidates: the conventional locations first, then
    /// any other module named like an entry point.
    pub fn main_entries(&self) -> Vec<String> {
        self.entries(&MAIN_ENTRY_CANDIDATES, &MAIN_ENTRY_NAMES)
    }

    /// Root component candidates, ordered like [`Self::main_entries`].
    pub fn app_entries(&self) -> Vec<String> {
        self.entries(&APP_ENTRY_CANDIDATES, &APP_ENTRY_NAMES)
    }

    fn entries(&self, preferred: &[&str], names: &[&str]) -> Vec<String> {
        let mut entries: Vec<String> = preferred.iter().map(|p| p.to_string()).collect();

        for name in names {
            for path in self.paths() {
                if matches_name(path, name) && !entries.iter().any(|e| e == path) {
                    entries.push(path.to_string());
                }
            }
        }

        entries
    }

    /// Serialize as a JSON object literal that is safe inside an inline
    /// `<script>` element.
    pub fn to_json(&self) -> Result<String, BundleError> {
        let json = serde_json::to_string(&self.modules)
            .map_err(|e| BundleError::Serialize(e.to_string()))?;
        Ok(escape_script(&json))
    }
}

/// Conventional bootstrap module locations, in priority order.
pub const MAIN_ENTRY_CANDIDATES: [&str; 8] = [
    "/src/main.tsx",
    "/src/main.jsx",
    "/src/index.tsx",
    "/src/index.jsx",
    "/main.tsx",
    "/main.jsx",
    "/index.tsx",
    "/index.jsx",
];

/// Conventional root component locations, in priority order.
pub const APP_ENTRY_CANDIDATES: [&str; 4] = ["/src/App.tsx", "/src/App.jsx", "/App.tsx", "/App.jsx"];

impl ModulePipeline<'_> {
    /// Run one file through icon fixing, rewriting and transpiling.
    fn transform(&self, path: &str, source: &str, files: &FlatFileMap) -> String {
        let fixed;
        let source = if self.config.autofix_icons && accepts_autofix(path) {
            fixed = autofix_missing_imports(source);
            fixed.as_str()
        } else {
            source
        };

        let rewritten = if path.ends_with(".json") {
            source.to_string()
        } else {
            let ctx = RewriteContext {
                path,
                files,
                resolver: self.resolver,
            };
            self.rewriter.rewrite_module(source, &ctx)
        };

        self.transpiler.transpile_or_stub(&rewritten, path)
    }
}

/// Break up `</` so embedded text cannot close the surrounding element.
pub fn escape_script(text: &str) -> String {
    text.replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use glimpse_transform::{OxcTranspiler, RegexRewriter};
    use pretty_assertions::assert_eq;

    fn build(entries: &[(&str, &str)], config: &BundleConfig) -> ModuleRegistry {
        let files: FlatFileMap = entries.iter().copied().collect();
        let resolver = config.resolver();
        let rewriter = RegexRewriter::new();
        let transpiler = OxcTranspiler::new();
        let pipeline = ModulePipeline {
            rewriter: &rewriter,
            transpiler: &transpiler,
            resolver: &resolver,
            config,
        };
        ModuleRegistry::build(&files, &pipeline)
    }

    #[test]
    fn keys_code_files_by_absolute_path() {
        let registry = build(
            &[
                ("src/App.tsx", "export default function App() { return <div />; }"),
                ("src/index.css", "body {}"),
                ("README.md", "# hi"),
                ("src/data.json", "{\"a\": 1}"),
            ],
            &BundleConfig::default(),
        );

        assert_eq!(registry.paths().collect::<Vec<_>>(), vec!["/src/App.tsx", "/src/data.json"]);
        assert!(registry.get("/src/App.tsx").unwrap().contains("exports.default = App;"));
        assert!(registry.get("/src/data.json").unwrap().starts_with("module.exports"));
    }

    #[test]
    fn rewrites_imports_before_transpiling() {
        let registry = build(
            &[
                ("src/App.tsx", "import { Button } from '@/components/Button';\nexport default () => <Button />;"),
                ("src/components/Button.tsx", "export const Button = () => <button />;"),
            ],
            &BundleConfig::default(),
        );

        let app = registry.get("/src/App.tsx").unwrap();
        assert!(app.contains("require(\"/src/components/Button.tsx\")"));
        assert!(app.contains("React.createElement"));
        assert!(!app.contains("import "));
    }

    #[test]
    fn failed_modules_become_error_stubs() {
        let registry = build(&[("src/App.tsx", "export default () => <div")], &BundleConfig::default());

        let body = registry.get("/src/App.tsx").unwrap();
        assert!(body.starts_with("console.error("));
        assert!(body.contains("/src/App.tsx"));
    }

    #[test]
    fn adds_missing_icon_imports() {
        let source = "export default () => <Bot size={24} />;";

        let registry = build(&[("src/App.tsx", source)], &BundleConfig::default());
        assert!(registry.get("/src/App.tsx").unwrap().contains("require(\"lucide-react\")"));

        let config = BundleConfig {
            autofix_icons: false,
            ..Default::default()
        };
        let registry = build(&[("src/App.tsx", source)], &config);
        assert!(!registry.get("/src/App.tsx").unwrap().contains("lucide-react"));
    }

    #[test]
    fn typescript_modules_keep_dom_globals() {
        let source = "export function makeFile(): File {\n  const all: Array<File> = [];\n  const f = new File(['x'], 'note.txt');\n  all.push(f);\n  return f;\n}";

        let registry = build(&[("src/files.ts", source)], &BundleConfig::default());
        let body = registry.get("/src/files.ts").unwrap();

        assert!(!body.contains("lucide-react"));
        assert!(body.contains("new File("));
    }

    #[test]
    fn skips_excluded_directories() {
        let registry = build(
            &[("node_modules/react/index.js", "module.exports = {}"), ("src/main.tsx", "")],
            &BundleConfig::default(),
        );

        assert_eq!(registry.paths().collect::<Vec<_>>(), vec!["/src/main.tsx"]);
    }

    #[test]
    fn entry_lists_put_conventional_paths_first() {
        let registry = build(
            &[
                ("app/main.jsx", ""),
                ("src/main.tsx", ""),
                ("web/App.jsx", ""),
            ],
            &BundleConfig::default(),
        );

        let mains = registry.main_entries();
        assert_eq!(mains[0], "/src/main.tsx");
        assert_eq!(mains.last().unwrap(), "/app/main.jsx");
        assert_eq!(mains.iter().filter(|m| *m == "/src/main.tsx").count(), 1);

        let apps = registry.app_entries();
        assert_eq!(apps.len(), APP_ENTRY_CANDIDATES.len() + 1);
        assert_eq!(apps.last().unwrap(), "/web/App.jsx");
    }

    #[test]
    fn suffix_named_components_are_app_entries() {
        let registry = build(&[("src/MyApp.tsx", "")], &BundleConfig::default());

        assert_eq!(registry.app_entries().last().unwrap(), "/src/MyApp.tsx");
    }

    #[test]
    fn json_escapes_closing_script_tags() {
        let registry = build(
            &[("src/App.tsx", "export const html = '</script><script>alert(1)';")],
            &BundleConfig::default(),
        );

        let json = registry.to_json().unwrap();
        assert!(!json.contains("</script"));
        assert_eq!(escape_script("a</b"), "a<\\/b");
    }

    #[test]
    fn builds_are_identical_across_runs() {
        let entries = [
            ("src/App.tsx", "import './index.css';\nexport default function App() { return <p>a</p>; }"),
            ("src/main.tsx", "import App from './App';\nconsole.log(App);"),
            ("src/util.ts", "export const n: number = 1;"),
        ];

        let first = build(&entries, &BundleConfig::default()).to_json().unwrap();
        let second = build(&entries, &BundleConfig::default()).to_json().unwrap();
        assert_eq!(first, second);
    }
}
