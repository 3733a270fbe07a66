//! Headless runner for rendered preview documents.
//!
//! Inline scripts run in document order against small stand-ins for
//! `React`, `ReactDOM` and a `document` holding one `#root` element. Mounting
//! expands function components into a plain tree that tests can inspect.

use std::sync::LazyLock;

use boa_engine::{Context, Source};
use glimpse_tree::FileNode;
use regex::Regex;
use serde_json::Value;

use crate::builder::Bundler;

static INLINE_SCRIPT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<script>(.*?)</script>").expect("Invalid inline script regex")
});

const DOM_STUBS: &str = r#"
var window = globalThis;
var __harness = { logs: [], posted: [], mounts: [] };

window.parent = { postMessage: function (msg) { __harness.posted.push(msg); } };
window.addEventListener = function () {};

var console = {};
['log', 'info', 'warn', 'error', 'debug'].forEach(function (level) {
  console[level] = function () {
    __harness.logs.push('[' + level + '] ' + Array.prototype.map.call(arguments, String).join(' '));
  };
});

function File(parts, name) {
  this.parts = parts;
  this.name = name;
}

function makeElement(tag) {
  return {
    tagName: tag,
    childNodes: [],
    textContent: '',
    innerHTML: '',
    attributes: {},
    setAttribute: function (key, value) { this.attributes[key] = value; },
    appendChild: function (child) { this.childNodes.push(child); return child; }
  };
}

var root = makeElement('div');
var document = {
  getElementById: function (id) { return id === 'root' ? root : null; },
  createElement: makeElement
};

var React = {
  Fragment: '#fragment',
  createElement: function (type, props) {
    return { type: type, props: props || {}, children: Array.prototype.slice.call(arguments, 2) };
  },
  forwardRef: function (render) { return { $$typeof: 'forward_ref', render: render }; },
  useState: function (initial) { return [typeof initial === 'function' ? initial() : initial, function () {}]; },
  useEffect: function () {},
  useRef: function (initial) { return { current: initial }; },
  useMemo: function (make) { return make(); },
  useCallback: function (fn) { return fn; }
};

function renderTree(node) {
  if (node === null || node === undefined || typeof node === 'boolean') return null;
  if (typeof node !== 'object') return String(node);
  if (Array.isArray(node)) return node.map(renderTree);

  var props = Object.assign({}, node.props);
  if (node.children.length > 0) {
    props.children = node.children.length === 1 ? node.children[0] : node.children;
  }

  var type = node.type;
  if (typeof type === 'function') return renderTree(type(props));
  if (type && type.$$typeof === 'forward_ref') return renderTree(type.render(props, null));

  var out = { tag: type, props: {}, children: [] };
  for (var key in props) {
    if (key !== 'children' && key !== 'ref' && typeof props[key] !== 'function') out.props[key] = props[key];
  }
  var kids = props.children === undefined ? [] : [].concat(props.children);
  out.children = kids.map(renderTree).filter(function (kid) { return kid !== null; });
  return out;
}

function textOf(node) {
  if (node === null || node === undefined) return '';
  if (typeof node === 'string') return node;
  if (Array.isArray(node)) return node.map(textOf).join('');
  if (node.children) return node.children.map(textOf).join('');
  return node.textContent || '';
}

var ReactDOM = {
  createRoot: function (container) {
    return {
      render: function (element) {
        var tree = renderTree(element);
        __harness.mounts.push(tree);
        container.appendChild(tree);
      }
    };
  }
};
"#;

/// A preview document after its inline scripts have run.
pub struct PreviewSandbox {
    context: Context,
    /// Errors thrown out of top-level scripts
    pub uncaught: Vec<String>,
}

impl PreviewSandbox {
    /// Run every inline script of `html`.
    pub fn load(html: &str) -> Self {
        let mut context = Context::default();
        context
            .eval(Source::from_bytes(DOM_STUBS))
            .expect("DOM stubs evaluate");

        let mut uncaught = Vec::new();
        for caps in INLINE_SCRIPT_RE.captures_iter(html) {
            if let Err(e) = context.eval(Source::from_bytes(&caps[1])) {
                uncaught.push(e.to_string());
            }
        }

        Self { context, uncaught }
    }

    /// Bundle `files` (slash-delimited path, content) with the default
    /// configuration and run the result.
    pub fn run(files: &[(&str, &str)]) -> Self {
        let mut nodes = Vec::new();
        for (path, content) in files {
            insert(&mut nodes, path, content);
        }
        Self::load(&Bundler::default().bundle(&nodes).html)
    }

    /// Evaluate `expr` and read its value back through JSON.
    pub fn eval_json(&mut self, expr: &str) -> Value {
        let code = format!("JSON.stringify({})", expr);
        let result = self
            .context
            .eval(Source::from_bytes(&code))
            .unwrap_or_else(|e| panic!("{} failed: {}", expr, e));
        let text = result
            .to_string(&mut self.context)
            .expect("string result")
            .to_std_string_escaped();
        serde_json::from_str(&text).unwrap_or(Value::Null)
    }

    /// Trees passed to `render`, in order.
    pub fn mounts(&mut self) -> Vec<Value> {
        match self.eval_json("__harness.mounts") {
            Value::Array(mounts) => mounts,
            _ => Vec::new(),
        }
    }

    /// Text content of everything under `#root`.
    pub fn root_text(&mut self) -> String {
        self.eval_json("textOf(root.childNodes)")
            .as_str()
            .unwrap_or_default()
            .to_string()
    }

    /// Console lines as `[level] text`.
    pub fn logs(&mut self) -> Vec<String> {
        match self.eval_json("__harness.logs") {
            Value::Array(lines) => lines
                .into_iter()
                .filter_map(|line| line.as_str().map(str::to_string))
                .collect(),
            _ => Vec::new(),
        }
    }
}

fn insert(nodes: &mut Vec<FileNode>, path: &str, content: &str) {
    match path.split_once('/') {
        None => nodes.push(FileNode::file(path, content)),
        Some((dir, rest)) => {
            let index = match nodes.iter().position(|n| n.name == dir && !n.is_file()) {
                Some(i) => i,
                None => {
                    nodes.push(FileNode::folder(dir, Vec::new()));
                    nodes.len() - 1
                }
            };
            insert(&mut nodes[index].children, rest, content);
        }
    }
}
