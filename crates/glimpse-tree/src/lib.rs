//! Virtual file tree model for preview bundling.
//!
//! This crate holds the editor-facing `FileNode` tree, flattens it into a
//! path-to-content map, and decides which preview strategy a project needs.

pub mod flatten;
pub mod node;
pub mod shape;

pub use flatten::{flatten, FlatFileMap};
pub use node::{load_dir, load_json, FileNode, NodeKind, TreeError};
pub use shape::{
    detect_shape, file_name, find_global_stylesheet, matches_name, ProjectShape, APP_ENTRY_NAMES,
    GLOBAL_STYLESHEET_NAMES, HTML_ENTRY_NAME, MAIN_ENTRY_NAMES,
};
