//! JSX/TypeScript transpiling with oxc.

use std::path::Path;

use oxc_allocator::Allocator;
use oxc_codegen::Codegen;
use oxc_parser::Parser;
use oxc_semantic::SemanticBuilder;
use oxc_span::SourceType;
use oxc_transformer::{JsxOptions, JsxRuntime, TransformOptions, Transformer};

use crate::traits::{TransformError, Transpiler};

/// Transpiler built on the oxc parser, transformer and code generator.
///
/// JSX is lowered with the classic runtime (`React.createElement`) because the
/// framework is available as a document global inside the preview.
#[derive(Debug, Clone)]
pub struct OxcTranspiler {
    options: TransformOptions,
}

impl OxcTranspiler {
    pub fn new() -> Self {
        let options = TransformOptions {
            jsx: JsxOptions {
                runtime: JsxRuntime::Classic,
                ..JsxOptions::default()
            },
            ..TransformOptions::default()
        };

        Self { options }
    }
}

impl Default for OxcTranspiler {
    fn default() -> Self {
        Self::new()
    }
}

impl Transpiler for OxcTranspiler {
    fn name(&self) -> &'static str {
        "oxc"
    }

    fn transpile(&self, source: &str, path: &str) -> Result<String, TransformError> {
        if path.ends_with(".json") {
            return json_module(source, path);
        }

        let allocator = Allocator::default();
        let source_type = source_type_for(path);

        let ret = Parser::new(&allocator, source, source_type).parse();
        if ret.panicked || !ret.errors.is_empty() {
            return Err(TransformError::Parse {
                path: path.to_string(),
                message: join_errors(&ret.errors),
            });
        }
        let mut program = ret.program;

        let scoping = SemanticBuilder::new()
            .build(&program)
            .semantic
            .into_scoping();

        let ret = Transformer::new(&allocator, Path::new(path), &self.options)
            .build_with_scoping(scoping, &mut program);
        if !ret.errors.is_empty() {
            return Err(TransformError::Transform {
                path: path.to_string(),
                message: join_errors(&ret.errors),
            });
        }

        let code = Codegen::new().build(&program).code;
        tracing::debug!("Transpiled {} ({} bytes)", path, code.len());

        Ok(code)
    }
}

/// Syntax flavor from the file extension; unknown extensions parse as TSX.
fn source_type_for(path: &str) -> SourceType {
    let ext = path.rsplit('.').next().unwrap_or("");
    match ext {
        "ts" | "mts" => SourceType::ts(),
        "js" | "mjs" | "jsx" => SourceType::jsx(),
        _ => SourceType::tsx(),
    }
}

/// Wrap a JSON file as a module whose exports are the parsed value.
fn json_module(source: &str, path: &str) -> Result<String, TransformError> {
    let value: serde_json::Value =
        serde_json::from_str(source).map_err(|e| TransformError::Json {
            path: path.to_string(),
            message: e.to_string(),
        })?;

    let literal = value.to_string();
    Ok(if value.is_object() {
        format!("module.exports = Object.assign({}, {{ default: {} }});\n", literal, literal)
    } else {
        format!("module.exports = {{ default: {} }};\n", literal)
    })
}

fn join_errors<E: std::fmt::Display>(errors: &[E]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
