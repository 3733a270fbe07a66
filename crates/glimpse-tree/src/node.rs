//! File tree nodes as produced by the editor.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use walkdir::{DirEntry, WalkDir};

/// Kind of a tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    Folder,
}

/// A labeled node of the editor's file tree.
///
/// Folders carry `children`, files carry `content`. The bundler never mutates
/// a tree it is handed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileNode {
    /// Entry name (a single path segment)
    pub name: String,

    /// File or folder
    #[serde(rename = "type")]
    pub kind: NodeKind,

    /// Child nodes, meaningful for folders only
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<FileNode>,

    /// File text, meaningful for files only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl FileNode {
    /// Create a file node.
    pub fn file(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::File,
            children: Vec::new(),
            content: Some(content.into()),
        }
    }

    /// Create a folder node.
    pub fn folder(name: impl Into<String>, children: Vec<FileNode>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Folder,
            children,
            content: None,
        }
    }

    pub fn is_file(&self) -> bool {
        self.kind == NodeKind::File
    }
}

/// Errors that can occur when loading a tree.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    #[error("Project directory not found: {0}")]
    DirectoryNotFound(String),

    #[error("Failed to read project: {0}")]
    Read(String),

    #[error("Invalid file tree JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse a serialized forest (a JSON array of nodes, or a single root node).
pub fn load_json(source: &str) -> Result<Vec<FileNode>, TreeError> {
    let trimmed = source.trim_start();
    if trimmed.starts_with('{') {
        let root: FileNode = serde_json::from_str(source)?;
        return Ok(vec![root]);
    }

    Ok(serde_json::from_str(source)?)
}

/// Build a forest from a directory on disk.
///
/// Directories named in `exclude` are skipped entirely. Files that are not
/// valid UTF-8 are left out of the tree.
pub fn load_dir(root: &Path, exclude: &[String]) -> Result<Vec<FileNode>, TreeError> {
    if !root.is_dir() {
        return Err(TreeError::DirectoryNotFound(root.display().to_string()));
    }

    let mut forest = Vec::new();

    let walker = WalkDir::new(root)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_excluded(e, exclude));

    for entry in walker {
        let entry = entry.map_err(|e| TreeError::Read(e.to_string()))?;
        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        let segments: Vec<String> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();

        let Some((name, dirs)) = segments.split_last() else {
            continue;
        };

        if entry.file_type().is_dir() {
            children_at(&mut forest, dirs).push(FileNode::folder(name.clone(), Vec::new()));
        } else if entry.file_type().is_file() {
            match fs::read_to_string(entry.path()) {
                Ok(content) => children_at(&mut forest, dirs).push(FileNode::file(name.clone(), content)),
                Err(e) => tracing::debug!("Skipping {}: {}", entry.path().display(), e),
            }
        }
    }

    Ok(forest)
}

fn is_excluded(entry: &DirEntry, exclude: &[String]) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| exclude.iter().any(|x| x == name))
}

/// Walk down (creating folders as needed) to the child list for `dirs`.
fn children_at<'a>(mut level: &'a mut Vec<FileNode>, dirs: &[String]) -> &'a mut Vec<FileNode> {
    for dir in dirs {
        let pos = match level
            .iter()
            .position(|n| n.kind == NodeKind::Folder && n.name == *dir)
        {
            Some(pos) => pos,
            None => {
                level.push(FileNode::folder(dir.clone(), Vec::new()));
                level.len() - 1
            }
        };
        level = &mut level[pos].children;
    }
    level
}
