//! Scripts embedded into every framework preview document.
//!
//! The loader reads its inputs from `window.__preview`, which the document
//! template fills with the module table, the shim table and the entry lists.

use glimpse_transform::ExternalModule;

use crate::builder::BundleError;

/// UMD build of the UI framework.
pub const REACT_URL: &str = "https://unpkg.com/react@18/umd/react.production.min.js";

/// UMD build of the DOM renderer.
pub const REACT_DOM_URL: &str = "https://unpkg.com/react-dom@18/umd/react-dom.production.min.js";

/// Utility-class stylesheet generator.
pub const TAILWIND_URL: &str = "https://cdn.tailwindcss.com";

/// Shim table for the loader: specifier to namespace.
pub fn shim_table_json() -> Result<String, BundleError> {
    let table: serde_json::Map<String, serde_json::Value> = ExternalModule::shim_table()
        .into_iter()
        .map(|(spec, ns)| (spec.to_string(), serde_json::Value::from(ns)))
        .collect();

    serde_json::to_string(&table).map_err(|e| BundleError::Serialize(e.to_string()))
}

/// Wraps the console methods so every call is also posted to the parent
/// frame as `{ type: "console", message: "[level] ..." }`.
pub const CONSOLE_FORWARDER_JS: &str = r#"(function () {
  if (window.__previewConsole) return;
  window.__previewConsole = true;

  function format(value) {
    if (value instanceof Error) return value.stack || value.message;
    if (value !== null && typeof value === 'object') {
      try { return JSON.stringify(value); } catch (e) { return String(value); }
    }
    return String(value);
  }

  function send(level, args) {
    try {
      var text = Array.prototype.map.call(args, format).join(' ');
      window.parent.postMessage({ type: 'console', message: '[' + level + '] ' + text }, '*');
    } catch (e) {}
  }

  ['log', 'info', 'warn', 'error', 'debug'].forEach(function (level) {
    var original = typeof console[level] === 'function' ? console[level].bind(console) : function () {};
    console[level] = function () {
      send(level, arguments);
      original.apply(null, arguments);
    };
  });

  window.addEventListener('error', function (event) {
    var where = event.lineno ? ' (line ' + event.lineno + ')' : '';
    console.error((event.message || 'Script error') + where);
  });

  window.addEventListener('unhandledrejection', function (event) {
    var reason = event.reason;
    console.error('Unhandled rejection: ' + (reason && reason.message ? reason.message : String(reason)));
  });
})();"#;

/// Reporter appended to plain HTML documents.
pub const ONERROR_JS: &str = r#"window.onerror = function (msg, url, line) {
  console.error('Error:', msg, 'at line', line);
  return false;
};"#;

/// Module loader with the external shims.
pub const LOADER_JS: &str = r#"(function () {
  'use strict';

  var preview = window.__preview;
  var modules = preview.modules;
  var shimTable = preview.shims;
  var has = function (obj, key) { return Object.prototype.hasOwnProperty.call(obj, key); };

  var EXTENSIONS = ['.tsx', '.ts', '.jsx', '.js', '.mjs', '.json', '/index.tsx', '/index.ts', '/index.jsx', '/index.js'];
  var ANIMATION_PROPS = ['initial', 'animate', 'exit', 'transition', 'variants', 'whileHover', 'whileTap',
    'whileInView', 'whileFocus', 'whileDrag', 'layout', 'layoutId', 'drag'];

  var cache = {};
  var namespaces = {};

  window.process = window.process || { env: { NODE_ENV: 'development' } };

  function withDefault(value) {
    var ns = Object.assign({}, value);
    ns.default = value;
    ns.__esModule = true;
    return ns;
  }

  function packageName(spec) {
    var parts = spec.split('/');
    return spec.charAt(0) === '@' && parts.length > 1 ? parts[0] + '/' + parts[1] : parts[0];
  }

  function shimNamespace(spec) {
    if (has(shimTable, spec)) return shimTable[spec];
    var pkg = packageName(spec);
    return has(shimTable, pkg) ? shimTable[pkg] : 'stub';
  }

  // Framework globals

  function markMounted(render) {
    return function () {
      window.__previewMounted = true;
      return render.apply(this, arguments);
    };
  }

  function domModule() {
    var dom = Object.assign({}, ReactDOM);
    dom.createRoot = function (container, options) {
      var root = ReactDOM.createRoot(container, options);
      root.render = markMounted(root.render.bind(root));
      return root;
    };
    dom.hydrateRoot = function () {
      window.__previewMounted = true;
      return ReactDOM.hydrateRoot.apply(ReactDOM, arguments);
    };
    if (typeof ReactDOM.render === 'function') dom.render = markMounted(ReactDOM.render);
    return withDefault(dom);
  }

  function jsxRuntime() {
    var jsx = function (type, props, key) {
      var merged = key === undefined ? props : Object.assign({}, props, { key: key });
      return React.createElement(type, merged);
    };
    return { jsx: jsx, jsxs: jsx, jsxDEV: jsx, Fragment: React.Fragment, __esModule: true };
  }

  // Icons

  function makeIcon(name) {
    var Icon = React.forwardRef(function (props, ref) {
      props = props || {};
      var size = props.size || 24;
      return React.createElement('svg', {
        ref: ref,
        'data-icon': name,
        role: 'img',
        'aria-label': name,
        width: size,
        height: size,
        viewBox: '0 0 24 24',
        fill: 'none',
        stroke: props.color || 'currentColor',
        strokeWidth: props.strokeWidth || 2,
        strokeLinecap: 'round',
        strokeLinejoin: 'round',
        className: props.className,
        style: props.style,
        onClick: props.onClick
      },
        React.createElement('title', null, name),
        React.createElement('rect', { x: 3, y: 3, width: 18, height: 18, rx: 4 }),
        React.createElement('path', { d: 'M8 12h8' }));
    });
    Icon.displayName = name;
    return Icon;
  }

  // Animation

  var motionTags = {};

  function stripAnimationProps(props) {
    var clean = {};
    for (var key in props) {
      if (has(props, key) && ANIMATION_PROPS.indexOf(key) === -1) clean[key] = props[key];
    }
    return clean;
  }

  function motionElement(tag) {
    var key = typeof tag === 'string' ? tag : null;
    if (key !== null && motionTags[key]) return motionTags[key];
    var Element = React.forwardRef(function (props, ref) {
      var clean = stripAnimationProps(props || {});
      clean.ref = ref;
      return React.createElement(tag, clean);
    });
    Element.displayName = 'motion.' + (key || tag.displayName || tag.name || 'component');
    if (key !== null) motionTags[key] = Element;
    return Element;
  }

  var motionFactory = new Proxy(function (component) { return motionElement(component); }, {
    get: function (target, tag) {
      return typeof tag === 'string' ? motionElement(tag) : undefined;
    }
  });

  function renderChildren(props) {
    return React.createElement(React.Fragment, null, props && props.children);
  }

  function motionValue(initial) {
    var current = initial;
    return {
      get: function () { return current; },
      set: function (next) { current = next; },
      on: function () { return function () {}; },
      onChange: function () { return function () {}; },
      destroy: function () {}
    };
  }

  function animationControls() {
    return {
      start: function () { return Promise.resolve(); },
      stop: function () {},
      set: function () {},
      mount: function () { return function () {}; }
    };
  }

  function motionMember(member) {
    switch (member) {
      case 'motion':
      case 'm':
      case 'default':
        return motionFactory;
      case 'AnimatePresence':
      case 'LayoutGroup':
      case 'LazyMotion':
      case 'MotionConfig':
      case 'Reorder':
        return renderChildren;
      case 'useAnimation':
      case 'useAnimationControls':
        return animationControls;
      case 'useInView':
        return function () { return true; };
      case 'useReducedMotion':
        return function () { return false; };
      case 'useScroll':
      case 'useViewportScroll':
        return function () {
          return { scrollX: motionValue(0), scrollY: motionValue(0), scrollXProgress: motionValue(0), scrollYProgress: motionValue(0) };
        };
      case 'useMotionValue':
      case 'useSpring':
        return function (initial) { return motionValue(initial); };
      case 'useTransform':
      case 'useVelocity':
        return function () { return motionValue(0); };
      case 'animate':
        return function () { return { stop: function () {}, then: function (done) { return Promise.resolve().then(done); } }; };
      default:
        if (/^use[A-Z]/.test(member)) return function () { return motionValue(undefined); };
        return renderChildren;
    }
  }

  // Everything else

  function stubMember(spec, member) {
    var warned = false;
    return function () {
      if (!warned) {
        warned = true;
        console.warn('[preview] "' + member + '" from "' + spec + '" is not available in the preview');
      }
      return null;
    };
  }

  function resolveShim(namespace, member, spec) {
    switch (namespace) {
      case 'icons':
        return member === 'default' ? null : makeIcon(member);
      case 'motion':
        return motionMember(member);
      default:
        return stubMember(spec, member);
    }
  }

  function shimModule(namespace, spec) {
    var members = {};
    var proxy = new Proxy({}, {
      get: function (target, member) {
        if (typeof member !== 'string' || member === 'then') return undefined;
        if (member === '__esModule') return true;
        if (!has(members, member)) {
          var value = resolveShim(namespace, member, spec);
          members[member] = value === null ? proxy : value;
        }
        return members[member];
      }
    });
    return proxy;
  }

  function external(spec) {
    if (has(namespaces, spec)) return namespaces[spec];
    var namespace = shimNamespace(spec);
    var value;
    switch (namespace) {
      case 'react':
        value = withDefault(React);
        break;
      case 'react-dom':
        value = domModule();
        break;
      case 'jsx-runtime':
        value = jsxRuntime();
        break;
      default:
        value = shimModule(namespace, spec);
    }
    namespaces[spec] = value;
    return value;
  }

  // Project modules

  function placeholder(title, detail) {
    var Placeholder = function () {
      return React.createElement('div', {
        style: {
          padding: '1rem',
          margin: '1rem',
          borderRadius: '0.5rem',
          border: '1px solid #fca5a5',
          background: '#fef2f2',
          color: '#991b1b',
          fontFamily: 'ui-monospace, monospace',
          fontSize: '0.875rem',
          whiteSpace: 'pre-wrap'
        }
      }, React.createElement('strong', null, title), detail ? '\n' + detail : null);
    };
    return new Proxy({}, {
      get: function (target, member) {
        if (typeof member !== 'string' || member === 'then') return undefined;
        if (member === '__esModule') return true;
        return Placeholder;
      }
    });
  }

  function resolvePath(spec) {
    if (has(modules, spec)) return spec;
    for (var i = 0; i < EXTENSIONS.length; i++) {
      if (has(modules, spec + EXTENSIONS[i])) return spec + EXTENSIONS[i];
    }
    return null;
  }

  function require(spec) {
    if (spec.charAt(0) !== '/') return external(spec);

    var path = resolvePath(spec);
    if (path === null) {
      console.warn('[preview] Module not found: ' + spec);
      return placeholder('Module not found: ' + spec);
    }

    if (has(cache, path)) return cache[path].exports;

    var module = { exports: {} };
    cache[path] = module;

    try {
      var factory = new Function('require', 'module', 'exports', modules[path] + '\n//# sourceURL=' + path);
      factory(require, module, module.exports);
    } catch (err) {
      var message = err && err.message ? err.message : String(err);
      console.error('[preview] Error in ' + path + ': ' + message);
      module.exports = placeholder('Error in ' + path, message);
    }

    return module.exports;
  }

  preview.require = require;
  preview.has = function (path) { return has(modules, path); };
})();"#;

/// Runs the bootstrap module and mounts the root component when nothing
/// else did.
pub const BOOTSTRAP_JS: &str = r#"(function () {
  'use strict';

  var preview = window.__preview;
  var container = document.getElementById('root');

  function load(candidates) {
    for (var i = 0; i < candidates.length; i++) {
      if (preview.has(candidates[i])) {
        return { path: candidates[i], exports: preview.require(candidates[i]) };
      }
    }
    return null;
  }

  function showMessage(text) {
    if (!container) return;
    container.innerHTML = '';
    var box = document.createElement('div');
    box.setAttribute('style', 'display:flex;align-items:center;justify-content:center;min-height:100vh;' +
      'font-family:system-ui,sans-serif;color:#64748b;');
    box.textContent = text;
    container.appendChild(box);
  }

  var main = load(preview.entries);

  if (window.__previewMounted || !container || container.childNodes.length > 0) return;

  var app = load(preview.apps);
  if (app) {
    var exports = app.exports || {};
    var App = exports.default || exports.App;
    if (typeof App === 'function' || (App && typeof App === 'object')) {
      window.__previewMounted = true;
      ReactDOM.createRoot(container).render(React.createElement(App));
    } else {
      console.error('[preview] ' + app.path + ' has no default export to render');
    }
  } else if (!main) {
    showMessage('No entry point found');
  }
})();"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sandbox::PreviewSandbox;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn shim_table_covers_known_packages() {
        let table: serde_json::Value = serde_json::from_str(&shim_table_json().unwrap()).unwrap();

        assert_eq!(table["lucide-react"], "icons");
        assert_eq!(table["framer-motion"], "motion");
        assert_eq!(table["react-dom/client"], "react-dom");
        assert_eq!(table["react"], "react");
    }

    #[test]
    fn loader_drops_every_animation_prop() {
        for prop in [
            "initial",
            "animate",
            "exit",
            "transition",
            "variants",
            "whileHover",
            "whileTap",
            "whileInView",
            "whileFocus",
            "whileDrag",
            "layout",
            "layoutId",
            "drag",
        ] {
            assert!(LOADER_JS.contains(&format!("'{}'", prop)), "missing {}", prop);
        }
    }

    #[test]
    fn loader_dispatches_shims_explicitly() {
        assert!(LOADER_JS.contains("function resolveShim(namespace, member, spec)"));
        assert!(LOADER_JS.contains("case 'icons':"));
        assert!(LOADER_JS.contains("case 'motion':"));
        assert!(LOADER_JS.contains("return stubMember(spec, member);"));
        assert!(LOADER_JS.contains("case 'AnimatePresence':"));
    }

    #[test]
    fn modules_evaluate_once_and_cycles_see_partial_exports() {
        let mut preview = PreviewSandbox::run(&[
            (
                "src/counter.ts",
                "window.evaluations = (window.evaluations || 0) + 1;\nexport const count = 1;",
            ),
            ("src/a.ts", "import { count } from './counter';\nimport { b } from './b';\nexport const a = 'a' + count + b;"),
            ("src/b.ts", "import { count } from './counter';\nimport { a } from './a';\nexport const b = 'b';\nexport const seenA = typeof a;"),
            ("src/App.tsx", "import { a } from './a';\nexport default function App() { return <p>{a}</p>; }"),
        ]);

        assert!(preview.uncaught.is_empty(), "{:?}", preview.uncaught);
        assert_eq!(preview.eval_json("window.evaluations"), json!(1));
        assert_eq!(preview.eval_json("window.__preview.require('/src/b.ts').seenA"), json!("undefined"));
        assert_eq!(
            preview.eval_json("window.__preview.require('/src/counter.ts') === window.__preview.require('/src/counter')"),
            json!(true)
        );
        assert_eq!(preview.root_text(), "a1b");
    }

    #[test]
    fn rewritten_exports_are_live_on_the_module() {
        let mut preview = PreviewSandbox::run(&[
            ("src/lib.ts", "export const answer = 42;\nexport default function greet(name: string) { return 'hi ' + name; }"),
            ("src/index.ts", "export * from './lib';\nexport { default as greet } from './lib';"),
            ("src/App.tsx", "import { greet } from './index';\nexport default () => <h1>{greet('there')}</h1>;"),
        ]);

        assert_eq!(preview.eval_json("typeof window.__preview.require('/src/lib.ts').default"), json!("function"));
        assert_eq!(preview.eval_json("window.__preview.require('/src/lib.ts').default('you')"), json!("hi you"));
        assert_eq!(preview.eval_json("window.__preview.require('/src/index.ts').answer"), json!(42));
        assert_eq!(preview.eval_json("'default' in window.__preview.require('/src/index.ts')"), json!(false));
        assert_eq!(preview.root_text(), "hi there");
    }

    #[test]
    fn any_icon_name_renders_through_the_shim() {
        let mut preview = PreviewSandbox::run(&[(
            "src/App.tsx",
            "import { Rocket, IconThatDoesNotExist } from 'lucide-react';\n\
             export default function App() { return <div><Rocket size={16} /><IconThatDoesNotExist /></div>; }",
        )]);

        assert!(preview.uncaught.is_empty(), "{:?}", preview.uncaught);
        let tree = serde_json::to_string(&preview.mounts()).unwrap();
        assert!(tree.contains("\"data-icon\":\"Rocket\""));
        assert!(tree.contains("\"width\":16"));
        assert!(tree.contains("\"data-icon\":\"IconThatDoesNotExist\""));
        assert_eq!(preview.eval_json("typeof window.__preview.require('lucide-react').then"), json!("undefined"));
    }

    #[test]
    fn motion_and_unknown_packages_degrade_quietly() {
        let mut preview = PreviewSandbox::run(&[(
            "src/App.tsx",
            "import { motion, AnimatePresence } from 'framer-motion';\n\
             import { toast } from 'sonner';\n\
             export default function App() {\n\
               toast('saved');\n\
               toast('again');\n\
               return <AnimatePresence><motion.div className=\"box\" initial={{ opacity: 0 }} animate={{ opacity: 1 }}>ready</motion.div></AnimatePresence>;\n\
             }",
        )]);

        assert!(preview.uncaught.is_empty(), "{:?}", preview.uncaught);
        let tree = serde_json::to_string(&preview.mounts()).unwrap();
        assert!(tree.contains("\"className\":\"box\""));
        assert!(!tree.contains("\"initial\""));
        assert!(!tree.contains("\"animate\""));
        assert_eq!(preview.root_text(), "ready");

        let warnings: Vec<String> = preview
            .logs()
            .into_iter()
            .filter(|line| line.contains("\"toast\" from \"sonner\""))
            .collect();
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn failing_modules_render_error_placeholders() {
        let mut preview = PreviewSandbox::run(&[
            ("src/Broken.tsx", "throw new Error('boom');\nexport default function Broken() { return null; }"),
            (
                "src/App.tsx",
                "import Broken from './Broken';\nimport Missing from './Missing';\n\
                 export default function App() { return <main><Broken /><Missing /></main>; }",
            ),
        ]);

        assert!(preview.uncaught.is_empty(), "{:?}", preview.uncaught);
        let text = preview.root_text();
        assert!(text.contains("Error in /src/Broken.tsx\nboom"), "{}", text);
        assert!(text.contains("Module not found: /src/Missing"), "{}", text);

        let logs = preview.logs();
        assert!(logs.iter().any(|l| l == "[error] [preview] Error in /src/Broken.tsx: boom"), "{:?}", logs);
        assert!(logs.iter().any(|l| l.starts_with("[warn] [preview] Module not found: /src/Missing")));
        assert_eq!(
            preview.eval_json(
                "__harness.posted.some(function (m) { return m.type === 'console' && m.message.indexOf('[error] [preview] Error in') === 0; })"
            ),
            json!(true)
        );
    }

    #[test]
    fn bootstrap_mounts_app_when_main_does_not() {
        let mut preview = PreviewSandbox::run(&[(
            "src/App.tsx",
            "export default function App() { return <h1>Hello</h1>; }",
        )]);

        assert!(preview.uncaught.is_empty(), "{:?}", preview.uncaught);
        assert_eq!(preview.mounts().len(), 1);
        assert_eq!(preview.root_text(), "Hello");
        assert_eq!(preview.eval_json("window.__previewMounted"), json!(true));
    }

    #[test]
    fn bootstrap_leaves_main_mounts_alone() {
        let mut preview = PreviewSandbox::run(&[
            (
                "src/main.tsx",
                "import { createRoot } from 'react-dom/client';\nimport App from './App';\n\
                 createRoot(document.getElementById('root')!).render(<App />);",
            ),
            ("src/App.tsx", "export default function App() { return <h1>Hello</h1>; }"),
        ]);

        assert!(preview.uncaught.is_empty(), "{:?}", preview.uncaught);
        assert_eq!(preview.mounts().len(), 1);
        let text = preview.root_text();
        assert_eq!(text, "Hello");
        assert!(!text.contains("No entry point found"));
    }

    #[test]
    fn typescript_helpers_keep_dom_constructors() {
        let mut preview = PreviewSandbox::run(&[
            (
                "src/files.ts",
                "export function makeFile(): File {\n  const parts: Array<File> = [];\n  return new File(parts, 'note.txt');\n}",
            ),
            (
                "src/App.tsx",
                "import { useState } from 'react';\nimport { makeFile } from './files';\n\
                 export default function App() {\n\
                   const [file] = useState<File | null>(makeFile());\n\
                   return <p>{file ? file.name : 'none'}</p>;\n\
                 }",
            ),
        ]);

        assert!(preview.uncaught.is_empty(), "{:?}", preview.uncaught);
        assert_eq!(preview.root_text(), "note.txt");
    }

    #[test]
    fn shims_are_never_thenable() {
        assert!(LOADER_JS.matches("member === 'then'").count() >= 2);
    }

    #[test]
    fn forwarder_covers_all_levels() {
        assert!(CONSOLE_FORWARDER_JS.contains("['log', 'info', 'warn', 'error', 'debug']"));
        assert!(CONSOLE_FORWARDER_JS.contains("type: 'console'"));
        assert!(CONSOLE_FORWARDER_JS.contains("unhandledrejection"));
    }

    #[test]
    fn bootstrap_reports_missing_entry() {
        assert!(BOOTSTRAP_JS.contains("No entry point found"));
        assert!(BOOTSTRAP_JS.contains("window.__previewMounted"));
    }

    #[test]
    fn embedded_scripts_never_close_their_element() {
        for script in [CONSOLE_FORWARDER_JS, ONERROR_JS, LOADER_JS, BOOTSTRAP_JS] {
            assert!(!script.contains("</"));
        }
    }
}
