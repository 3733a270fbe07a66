//! Single-document preview bundler.
//!
//! Turns a virtual file tree into one self-contained HTML document: framework
//! projects get a module registry with an in-document loader, plain HTML
//! projects are enhanced in place, and anything else becomes a file listing.

pub mod assets;
pub mod builder;
pub mod config;
pub mod passthrough;
pub mod registry;
pub mod runtime;
#[cfg(test)]
mod sandbox;
pub mod templates;

pub use builder::{bundle_preview, BundleError, BundleOutput, Bundler};
pub use config::{BundleConfig, DEFAULT_EXCLUDE};
pub use registry::ModuleRegistry;
