//! Document templates.

use minijinja::{context, Environment};

/// Inputs for a framework preview document. Every field except `title` is
/// inserted verbatim and must already be safe for its position.
#[derive(Debug, Clone, serde::Serialize)]
pub struct FrameworkContext {
    /// Document title
    pub title: String,
    /// Aggregated CSS
    pub css: String,
    /// Module table as a JSON object literal
    pub modules: String,
    /// Shim table as a JSON object literal
    pub shims: String,
    /// Bootstrap candidates as a JSON array
    pub entries: String,
    /// Root component candidates as a JSON array
    pub apps: String,
    /// UI framework script URL
    pub react_url: String,
    /// DOM renderer script URL
    pub react_dom_url: String,
    /// Utility CSS script URL
    pub tailwind_url: String,
    /// Console forwarding script
    pub console_forwarder: String,
    /// Module loader script
    pub loader: String,
    /// Bootstrap script
    pub bootstrap: String,
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a template engine with the preview templates.
    pub fn new() -> Self {
        let mut env = Environment::new();

        env.add_template_owned("framework.html".to_string(), FRAMEWORK_TEMPLATE.to_string())
            .expect("Failed to add framework template");

        env.add_template_owned("file_list.html".to_string(), FILE_LIST_TEMPLATE.to_string())
            .expect("Failed to add file list template");

        env.add_template_owned("error.html".to_string(), ERROR_TEMPLATE.to_string())
            .expect("Failed to add error template");

        Self { env }
    }

    /// Render the framework preview document.
    pub fn render_framework(&self, context: &FrameworkContext) -> Result<String, minijinja::Error> {
        self.env.get_template("framework.html")?.render(context)
    }

    /// Render a titled listing of `paths`.
    pub fn render_file_list(&self, title: &str, paths: &[&str]) -> Result<String, minijinja::Error> {
        self.env.get_template("file_list.html")?.render(context! {
            title => title,
            paths => paths,
        })
    }

    /// Render a document that only reports `message`.
    pub fn render_error(&self, message: &str) -> Result<String, minijinja::Error> {
        self.env.get_template("error.html")?.render(context! {
            message => message,
        })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const FRAMEWORK_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ title }}</title>
  <script>{{ console_forwarder | safe }}</script>
  <script crossorigin src="{{ react_url | safe }}"></script>
  <script crossorigin src="{{ react_dom_url | safe }}"></script>
  <script src="{{ tailwind_url | safe }}"></script>
  <style>{{ css | safe }}</style>
</head>
<body>
  <div id="root"></div>
  <script>
window.__preview = {
  modules: {{ modules | safe }},
  shims: {{ shims | safe }},
  entries: {{ entries | safe }},
  apps: {{ apps | safe }}
};
  </script>
  <script>{{ loader | safe }}</script>
  <script>{{ bootstrap | safe }}</script>
</body>
</html>"##;

const FILE_LIST_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ title }}</title>
  <style>
    * { margin: 0; padding: 0; box-sizing: border-box; }
    body {
      font-family: 'Inter', system-ui, sans-serif;
      background: linear-gradient(135deg, #0f172a 0%, #1e1b4b 100%);
      min-height: 100vh;
      color: white;
      display: flex;
      align-items: center;
      justify-content: center;
    }
    .container { text-align: center; padding: 2rem; }
    h1 {
      font-size: 1.5rem;
      margin-bottom: 1rem;
      background: linear-gradient(135deg, #06b6d4, #8b5cf6);
      -webkit-background-clip: text;
      -webkit-text-fill-color: transparent;
    }
    .file-list {
      text-align: left;
      background: rgba(255, 255, 255, 0.1);
      padding: 1rem;
      border-radius: 0.5rem;
      max-height: 300px;
      overflow-y: auto;
    }
    .file { padding: 0.25rem 0; opacity: 0.8; font-size: 0.875rem; }
    .empty { opacity: 0.6; }
  </style>
</head>
<body>
  <div class="container">
    <h1>{{ title }}</h1>
    <div class="file-list">
    {% for path in paths %}
      <div class="file">{{ path }}</div>
    {% else %}
      <div class="empty">No files</div>
    {% endfor %}
    </div>
  </div>
</body>
</html>"##;

const ERROR_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Preview error</title>
</head>
<body style="font-family: ui-monospace, monospace; padding: 2rem; color: #991b1b; background: #fef2f2;">
  <h1 style="font-size: 1.25rem; margin-bottom: 1rem;">Preview could not be built</h1>
  <pre style="white-space: pre-wrap;">{{ message }}</pre>
</body>
</html>"##;
