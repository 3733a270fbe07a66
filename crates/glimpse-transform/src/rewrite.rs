//! Statement-level import/export rewriting.
//!
//! Imports become `require(...)` calls destructured by their clause shape, and
//! exports become assignments onto the module's `exports` object. The rules
//! work line by line with regular expressions; statements inside string
//! literals and nested braces inside import lists are not understood.

use std::sync::LazyLock;

use regex::{Captures, NoExpand, Regex};

use crate::resolve::is_stylesheet;
use crate::traits::{ModuleRewriter, RewriteContext};

/// One imported name and the local it binds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportBinding {
    pub imported: String,
    pub local: String,
}

/// How an import statement binds names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportClause {
    /// `import { a, b as c } from ...`
    Named(Vec<ImportBinding>),
    /// `import X from ...`
    Default(String),
    /// `import * as X from ...`
    Namespace(String),
    /// `import X, { a } from ...`
    DefaultAndNamed(String, Vec<ImportBinding>),
    /// `import X, * as Y from ...`
    DefaultAndNamespace(String, String),
}

impl ImportClause {
    /// Parse the text between `import` and `from`.
    ///
    /// Inline `type` specifiers are dropped. Returns `None` when nothing with
    /// a runtime value remains.
    pub fn parse(clause: &str) -> Option<Self> {
        let clause = clause.trim();

        let (default, rest) = match clause.find([',', '{', '*']) {
            Some(i) if clause[..i].trim().is_empty() => (None, clause),
            Some(i) => (Some(clause[..i].trim()), clause[i..].trim_start_matches(',').trim()),
            None => (Some(clause), ""),
        };
        let default = default.filter(|d| !d.is_empty()).map(str::to_string);

        if let Some(ns) = rest.strip_prefix('*') {
            let name = ns.trim().strip_prefix("as")?.trim().to_string();
            return Some(match default {
                Some(d) => ImportClause::DefaultAndNamespace(d, name),
                None => ImportClause::Namespace(name),
            });
        }

        let named = match rest.strip_prefix('{') {
            Some(list) => parse_named(list.trim_end_matches('}')),
            None => Vec::new(),
        };

        match (default, named.is_empty()) {
            (Some(d), true) => Some(ImportClause::Default(d)),
            (Some(d), false) => Some(ImportClause::DefaultAndNamed(d, named)),
            (None, false) => Some(ImportClause::Named(named)),
            (None, true) => None,
        }
    }

    /// Render the replacement statement for a loader call on `specifier`.
    pub fn to_statement(&self, specifier: &str) -> String {
        let call = format!("require({})", js_string(specifier));

        match self {
            ImportClause::Named(names) => {
                format!("const {{ {} }} = {};", pattern(names), call)
            }
            ImportClause::Default(local) => {
                format!("const {{ default: {} }} = {};", local, call)
            }
            ImportClause::Namespace(local) => format!("const {} = {};", local, call),
            ImportClause::DefaultAndNamed(local, names) => {
                format!("const {{ default: {}, {} }} = {};", local, pattern(names), call)
            }
            ImportClause::DefaultAndNamespace(local, ns) => {
                format!("const {} = {}; const {} = {}.default;", ns, call, local, ns)
            }
        }
    }
}

fn parse_named(list: &str) -> Vec<ImportBinding> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && !is_type_specifier(s))
        .map(|s| {
            let (imported, local) = split_alias(s);
            ImportBinding {
                imported: imported.to_string(),
                local: local.to_string(),
            }
        })
        .collect()
}

fn is_type_specifier(s: &str) -> bool {
    s.strip_prefix("type")
        .is_some_and(|rest| rest.starts_with(char::is_whitespace))
}

/// Split `a as b` into `(a, b)`; a bare `a` binds to itself.
fn split_alias(s: &str) -> (&str, &str) {
    match AS_RE.splitn(s, 2).collect::<Vec<_>>().as_slice() {
        [name, alias] => (name.trim(), alias.trim()),
        _ => (s.trim(), s.trim()),
    }
}

fn pattern(names: &[ImportBinding]) -> String {
    names
        .iter()
        .map(|b| {
            if b.imported == b.local {
                b.local.clone()
            } else {
                format!("{}: {}", b.imported, b.local)
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Quote a string as a JavaScript literal.
pub fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| format!("\"{}\"", s))
}

static AS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+as\s+").expect("Invalid alias regex"));

static TYPE_IMPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^[ \t]*import\s+type\s[^;]*?from\s*['"][^'"\n]+['"][ \t]*;?"#)
        .expect("Invalid type import regex")
});

static TYPE_EXPORT_LIST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?m)^[ \t]*export\s+type\s*(?:\{[^}]*\}(?:\s*from\s*['"][^'"\n]+['"])?|\*\s*(?:as\s+[\w$]+\s*)?from\s*['"][^'"\n]+['"])[ \t]*;?"#,
    )
    .expect("Invalid type export regex")
});

static IMPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?m)^[ \t]*import\s+((?:[\w$]+\s*,\s*)?(?:\{[^}]*\}|\*\s*as\s+[\w$]+)|[\w$]+)\s*from\s*['"]([^'"\n]+)['"][ \t]*;?"#,
    )
    .expect("Invalid import regex")
});

static SIDE_EFFECT_IMPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^[ \t]*import\s*['"]([^'"\n]+)['"][ \t]*;?"#)
        .expect("Invalid side-effect import regex")
});

static DYNAMIC_IMPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\bimport\s*\(\s*['"]([^'"\n]+)['"]\s*\)"#).expect("Invalid dynamic import regex")
});

static IMPORT_META_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bimport\.meta\b").expect("Invalid import.meta regex"));

static EXPORT_STAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?m)^[ \t]*export\s*\*\s*(?:as\s+([\w$]+)\s*)?from\s*['"]([^'"\n]+)['"][ \t]*;?"#,
    )
    .expect("Invalid export star regex")
});

static EXPORT_FROM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^[ \t]*export\s*\{([^}]*)\}\s*from\s*['"]([^'"\n]+)['"][ \t]*;?"#)
        .expect("Invalid export from regex")
});

static EXPORT_LIST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*export\s*\{([^}]*)\}[ \t]*;?").expect("Invalid export list regex")
});

static EXPORT_DEFAULT_DECL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)^([ \t]*)export\s+default\s+((?:async\s+)?function\b\s*\*?\s*|(?:abstract\s+)?class\s+)([A-Za-z_$][\w$]*)",
    )
    .expect("Invalid default declaration regex")
});

static EXPORT_DEFAULT_INTERFACE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^([ \t]*)export\s+default\s+(interface\s)")
        .expect("Invalid default interface regex")
});

static EXPORT_DEFAULT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^([ \t]*)export\s+default\s+").expect("Invalid default export regex")
});

static EXPORT_TYPE_DECL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^([ \t]*)export\s+((?:declare\s+)?(?:interface|type)\s)")
        .expect("Invalid type declaration regex")
});

static EXPORT_DECL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)^([ \t]*)export\s+((?:declare\s+)?(?:(?:const\s+)?enum\s+|(?:const|let|var)\s+|(?:async\s+)?function\b\s*\*?\s*|(?:abstract\s+)?class\s+))([A-Za-z_$][\w$]*)",
    )
    .expect("Invalid export declaration regex")
});

static LEFTOVER_EXPORT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^([ \t]*)export\s+").expect("Invalid export regex"));

/// Where an import specifier leads.
enum Target {
    Stylesheet,
    Module(String),
}

/// Regex-based [`ModuleRewriter`].
#[derive(Debug, Default, Clone, Copy)]
pub struct RegexRewriter;

impl RegexRewriter {
    pub fn new() -> Self {
        Self
    }

    fn target(&self, spec: &str, ctx: &RewriteContext<'_>) -> Target {
        if ctx.resolver.is_in_project(spec) {
            let resolved = ctx.resolver.resolve(spec, ctx.path, ctx.files);
            if !resolved.found {
                tracing::warn!("Unresolved import '{}' in {}", spec, ctx.path);
            }
            if resolved.is_stylesheet {
                Target::Stylesheet
            } else {
                Target::Module(resolved.path)
            }
        } else if is_stylesheet(spec) {
            Target::Stylesheet
        } else {
            Target::Module(spec.to_string())
        }
    }
}

impl ModuleRewriter for RegexRewriter {
    fn rewrite_module(&self, source: &str, ctx: &RewriteContext<'_>) -> String {
        let mut trailer: Vec<String> = Vec::new();

        let code = TYPE_IMPORT_RE.replace_all(source, "");
        let code = TYPE_EXPORT_LIST_RE.replace_all(&code, "");

        let code = IMPORT_RE.replace_all(&code, |caps: &Captures| {
            let spec = &caps[2];
            match (ImportClause::parse(&caps[1]), self.target(spec, ctx)) {
                (_, Target::Stylesheet) => stylesheet_comment(spec),
                (None, _) => String::new(),
                (Some(clause), Target::Module(path)) => clause.to_statement(&path),
            }
        });

        let code = SIDE_EFFECT_IMPORT_RE.replace_all(&code, |caps: &Captures| {
            match self.target(&caps[1], ctx) {
                Target::Stylesheet => stylesheet_comment(&caps[1]),
                Target::Module(path) => format!("require({});", js_string(&path)),
            }
        });

        let code = DYNAMIC_IMPORT_RE.replace_all(&code, |caps: &Captures| {
            match self.target(&caps[1], ctx) {
                Target::Stylesheet => "Promise.resolve({})".to_string(),
                Target::Module(path) => {
                    format!("Promise.resolve().then(() => require({}))", js_string(&path))
                }
            }
        });

        let meta = format!(
            "({{ url: {}, env: {{ MODE: \"development\", DEV: true, PROD: false, SSR: false }} }})",
            js_string(ctx.path)
        );
        let code = IMPORT_META_RE.replace_all(&code, NoExpand(&meta));

        let code = EXPORT_STAR_RE.replace_all(&code, |caps: &Captures| {
            let path = match self.target(&caps[2], ctx) {
                Target::Stylesheet => return stylesheet_comment(&caps[2]),
                Target::Module(path) => path,
            };
            match caps.get(1) {
                Some(ns) => format!("exports.{} = require({});", ns.as_str(), js_string(&path)),
                None => format!(
                    "(function (m) {{ for (const k in m) if (k !== \"default\") exports[k] = m[k]; }})(require({}));",
                    js_string(&path)
                ),
            }
        });

        let code = EXPORT_FROM_RE.replace_all(&code, |caps: &Captures| {
            let path = match self.target(&caps[2], ctx) {
                Target::Stylesheet => return stylesheet_comment(&caps[2]),
                Target::Module(path) => path,
            };
            let assignments: Vec<String> = parse_export_list(&caps[1])
                .into_iter()
                .map(|(local, exported)| format!("exports.{} = m.{};", exported, local))
                .collect();
            format!(
                "{{ const m = require({}); {} }}",
                js_string(&path),
                assignments.join(" ")
            )
        });

        let code = EXPORT_LIST_RE.replace_all(&code, |caps: &Captures| {
            for (local, exported) in parse_export_list(&caps[1]) {
                trailer.push(format!("exports.{} = {};", exported, local));
            }
            String::new()
        });

        let code = EXPORT_DEFAULT_DECL_RE.replace_all(&code, |caps: &Captures| {
            let name = &caps[3];
            if name == "extends" {
                return format!("{}exports.default = {}{}", &caps[1], &caps[2], name);
            }
            trailer.push(format!("exports.default = {};", name));
            format!("{}{}{}", &caps[1], &caps[2], name)
        });

        let code = EXPORT_DEFAULT_INTERFACE_RE.replace_all(&code, "${1}${2}");
        let code = EXPORT_DEFAULT_RE.replace_all(&code, "${1}exports.default = ");
        let code = EXPORT_TYPE_DECL_RE.replace_all(&code, "${1}${2}");

        let code = EXPORT_DECL_RE.replace_all(&code, |caps: &Captures| {
            let keyword = &caps[2];
            let name = &caps[3];
            if !keyword.starts_with("declare") {
                trailer.push(format!("exports.{} = {};", name, name));
            }
            format!("{}{}{}", &caps[1], keyword, name)
        });

        let code = LEFTOVER_EXPORT_RE.replace_all(&code, "${1}");

        let mut output = code.into_owned();
        if !trailer.is_empty() {
            output.push('\n');
            output.push_str(&trailer.join("\n"));
            output.push('\n');
        }
        output
    }
}

/// `local as exported` pairs from an export list, skipping type-only names.
fn parse_export_list(list: &str) -> Vec<(String, String)> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && !is_type_specifier(s))
        .map(|s| {
            let (local, exported) = split_alias(s);
            (local.to_string(), exported.to_string())
        })
        .collect()
}

fn stylesheet_comment(spec: &str) -> String {
    format!("/* stylesheet {} is bundled separately */", spec.replace("*/", "* /"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::PathResolver;
    use glimpse_tree::FlatFileMap;
    use pretty_assertions::assert_eq;

    fn rewrite(source: &str, path: &str, files: &[&str]) -> String {
        let files: FlatFileMap = files.iter().map(|p| (*p, "")).collect();
        let resolver = PathResolver::default();
        let ctx = RewriteContext {
            path,
            files: &files,
            resolver: &resolver,
        };
        RegexRewriter::new().rewrite_module(source, &ctx)
    }

    fn binding(imported: &str, local: &str) -> ImportBinding {
        ImportBinding {
            imported: imported.to_string(),
            local: local.to_string(),
        }
    }

    #[test]
    fn parses_import_clauses() {
        assert_eq!(
            ImportClause::parse("{ a, b as c }"),
            Some(ImportClause::Named(vec![binding("a", "a"), binding("b", "c")]))
        );
        assert_eq!(
            ImportClause::parse("React"),
            Some(ImportClause::Default("React".to_string()))
        );
        assert_eq!(
            ImportClause::parse("* as Icons"),
            Some(ImportClause::Namespace("Icons".to_string()))
        );
        assert_eq!(
            ImportClause::parse("React, { useState }"),
            Some(ImportClause::DefaultAndNamed(
                "React".to_string(),
                vec![binding("useState", "useState")]
            ))
        );
        assert_eq!(
            ImportClause::parse("React, * as All"),
            Some(ImportClause::DefaultAndNamespace(
                "React".to_string(),
                "All".to_string()
            ))
        );
    }

    #[test]
    fn drops_inline_type_specifiers() {
        assert_eq!(
            ImportClause::parse("{ type Foo, Bar }"),
            Some(ImportClause::Named(vec![binding("Bar", "Bar")]))
        );
        assert_eq!(ImportClause::parse("{ type Foo }"), None);
        assert_eq!(
            ImportClause::parse("React, { type FC }"),
            Some(ImportClause::Default("React".to_string()))
        );
    }

    #[test]
    fn strips_type_only_imports() {
        let out = rewrite(
            "import type { Props } from './types';\nimport type React from 'react';\nconst x = 1;",
            "/src/App.tsx",
            &[],
        );

        assert!(!out.contains("import"));
        assert!(!out.contains("require"));
        assert!(out.contains("const x = 1;"));
    }

    #[test]
    fn rewrites_aliased_import_to_resolved_path() {
        let out = rewrite(
            "import { Button } from '@/components/Button';",
            "/src/App.tsx",
            &["src/components/Button.tsx"],
        );

        assert_eq!(
            out,
            "const { Button } = require(\"/src/components/Button.tsx\");"
        );
    }

    #[test]
    fn rewrites_each_clause_shape() {
        let source = "import React, { useState as useS } from 'react';\n\
                      import Card from './Card';\n\
                      import * as Icons from 'lucide-react';";
        let out = rewrite(source, "/src/App.tsx", &["src/Card.jsx"]);

        assert!(out.contains("const { default: React, useState: useS } = require(\"react\");"));
        assert!(out.contains("const { default: Card } = require(\"/src/Card.jsx\");"));
        assert!(out.contains("const Icons = require(\"lucide-react\");"));
    }

    #[test]
    fn multi_line_named_imports_are_rewritten() {
        let source = "import {\n  Bot,\n  Send,\n} from 'lucide-react';";
        let out = rewrite(source, "/src/App.tsx", &[]);

        assert_eq!(out, "const { Bot, Send } = require(\"lucide-react\");");
    }

    #[test]
    fn stylesheet_imports_become_comments() {
        let out = rewrite(
            "import './index.css';\nimport styles from './App.css';",
            "/src/main.tsx",
            &["src/index.css", "src/App.css"],
        );

        assert!(!out.contains("require"));
        assert_eq!(out.matches("bundled separately").count(), 2);
    }

    #[test]
    fn side_effect_imports_call_loader() {
        let out = rewrite("import './setup';", "/src/main.tsx", &["src/setup.ts"]);
        assert_eq!(out, "require(\"/src/setup.ts\");");
    }

    #[test]
    fn export_default_function_keeps_binding() {
        let out = rewrite(
            "export default function Foo() { return null; }",
            "/src/Foo.tsx",
            &[],
        );

        assert!(out.starts_with("function Foo() { return null; }"));
        assert!(out.trim_end().ends_with("exports.default = Foo;"));
    }

    #[test]
    fn export_default_expression_is_assigned() {
        let out = rewrite("export default App;", "/src/App.tsx", &[]);
        assert_eq!(out, "exports.default = App;");

        let out = rewrite("export default class extends Base {}", "/src/A.ts", &[]);
        assert_eq!(out, "exports.default = class extends Base {}");

        let out = rewrite("export default () => null;", "/src/A.ts", &[]);
        assert_eq!(out, "exports.default = () => null;");
    }

    #[test]
    fn named_declarations_are_copied_to_exports() {
        let source = "export const A = 1;\nexport async function load() {}\nexport class Store {}\nexport enum Mode { On }";
        let out = rewrite(source, "/src/lib.ts", &[]);

        assert!(out.contains("const A = 1;"));
        assert!(out.contains("async function load() {}"));
        assert!(out.contains("exports.A = A;"));
        assert!(out.contains("exports.load = load;"));
        assert!(out.contains("exports.Store = Store;"));
        assert!(out.contains("exports.Mode = Mode;"));
        assert!(!out.contains("export "));
    }

    #[test]
    fn type_declarations_lose_export_keyword_only() {
        let out = rewrite(
            "export interface Props { a: string }\nexport type Id = string;",
            "/src/types.ts",
            &[],
        );

        assert_eq!(out, "interface Props { a: string }\ntype Id = string;");
    }

    #[test]
    fn type_only_reexports_and_default_interfaces_are_erased() {
        let out = rewrite(
            "export type * from './shapes';\nexport type * as Api from './api';\nexport default interface Props { a: string }",
            "/src/types.ts",
            &["src/shapes.ts", "src/api.ts"],
        );

        assert_eq!(out.trim(), "interface Props { a: string }");
        assert!(!out.contains("require"));
        assert!(!out.contains("exports.default"));
    }

    #[test]
    fn export_lists_respect_aliases() {
        let out = rewrite(
            "const a = 1; const b = 2;\nexport { a, b as c, type T };",
            "/src/x.ts",
            &[],
        );

        assert!(out.contains("exports.a = a;"));
        assert!(out.contains("exports.c = b;"));
        assert!(!out.contains("exports.T"));
    }

    #[test]
    fn re_exports_copy_from_loaded_module() {
        let out = rewrite(
            "export * from './a';\nexport { x as y } from './b';\nexport * as ns from './c';",
            "/src/index.ts",
            &["src/a.ts", "src/b.ts", "src/c.ts"],
        );

        assert!(out.contains("require(\"/src/a.ts\")"));
        assert!(out.contains("k !== \"default\""));
        assert!(out.contains("{ const m = require(\"/src/b.ts\"); exports.y = m.x; }"));
        assert!(out.contains("exports.ns = require(\"/src/c.ts\");"));
    }

    #[test]
    fn dynamic_imports_and_import_meta_are_replaced() {
        let out = rewrite(
            "const Page = lazy(() => import('./Page'));\nconst mode = import.meta.env.MODE;",
            "/src/App.tsx",
            &["src/Page.tsx"],
        );

        assert!(out.contains("Promise.resolve().then(() => require(\"/src/Page.tsx\"))"));
        assert!(out.contains("MODE: \"development\""));
        assert!(!out.contains("import"));
    }

    #[test]
    fn bare_specifiers_are_left_for_runtime() {
        let out = rewrite(
            "import { motion } from 'framer-motion';",
            "/src/App.tsx",
            &[],
        );
        assert_eq!(out, "const { motion } = require(\"framer-motion\");");
    }
}
