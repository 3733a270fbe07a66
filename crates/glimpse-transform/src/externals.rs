//! Classification of bare (package) import specifiers.
//!
//! Packages cannot be installed inside the preview sandbox, so every bare
//! import is answered at runtime by either a real document global or a shim.

/// Package providing icon components.
pub const ICON_PACKAGE: &str = "lucide-react";

/// How the in-document loader answers a bare specifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExternalModule {
    /// The UI framework runtime (the `React` global)
    Framework,
    /// The DOM mounting entry point (the `ReactDOM` global)
    FrameworkDom,
    /// JSX runtime helpers built on the framework global
    JsxRuntime,
    /// Placeholder icon components for any member name
    Icons,
    /// Animation wrappers that render plain elements
    Animation,
    /// Warning stub for everything else
    Generic,
}

/// Known specifiers and the shim that answers them.
const KNOWN: &[(&str, ExternalModule)] = &[
    ("react", ExternalModule::Framework),
    ("react-dom", ExternalModule::FrameworkDom),
    ("react-dom/client", ExternalModule::FrameworkDom),
    ("react/jsx-runtime", ExternalModule::JsxRuntime),
    ("react/jsx-dev-runtime", ExternalModule::JsxRuntime),
    ("lucide-react", ExternalModule::Icons),
    ("framer-motion", ExternalModule::Animation),
    ("motion", ExternalModule::Animation),
    ("motion/react", ExternalModule::Animation),
];

impl ExternalModule {
    /// Runtime namespace name used by the loader's shim dispatch.
    pub fn namespace(&self) -> &'static str {
        match self {
            ExternalModule::Framework => "react",
            ExternalModule::FrameworkDom => "react-dom",
            ExternalModule::JsxRuntime => "jsx-runtime",
            ExternalModule::Icons => "icons",
            ExternalModule::Animation => "motion",
            ExternalModule::Generic => "stub",
        }
    }

    /// Every explicitly known specifier with its namespace, for embedding
    /// into the loader runtime. Anything missing from the table, after
    /// trimming deep imports to their package, falls back to `stub`.
    pub fn shim_table() -> Vec<(&'static str, &'static str)> {
        KNOWN.iter().map(|(spec, m)| (*spec, m.namespace())).collect()
    }
}
