//! Flattening of a file tree into a path-to-content map.

use std::collections::HashMap;

use crate::node::{FileNode, NodeKind};

/// Slash-delimited path (no leading slash) to file content.
///
/// Iteration follows insertion order, which for [`flatten`] is depth-first
/// discovery order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlatFileMap {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl FlatFileMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a file, replacing the content of an existing path in place.
    pub fn insert(&mut self, path: impl Into<String>, content: impl Into<String>) {
        let path = path.into();
        let content = content.into();

        match self.index.get(&path) {
            Some(&i) => self.entries[i].1 = content,
            None => {
                self.index.insert(path.clone(), self.entries.len());
                self.entries.push((path, content));
            }
        }
    }

    /// Look up a file by exact path.
    pub fn get(&self, path: &str) -> Option<&str> {
        self.index.get(path).map(|&i| self.entries[i].1.as_str())
    }

    pub fn contains(&self, path: &str) -> bool {
        self.index.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(path, content)` pairs in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(p, c)| (p.as_str(), c.as_str()))
    }

    /// All paths in discovery order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(p, _)| p.as_str())
    }

    /// First file whose path ends with `name`, in discovery order.
    pub fn find_by_name(&self, name: &str) -> Option<(&str, &str)> {
        self.iter()
            .find(|(path, _)| crate::shape::matches_name(path, name))
    }
}

impl<P: Into<String>, C: Into<String>> FromIterator<(P, C)> for FlatFileMap {
    fn from_iter<I: IntoIterator<Item = (P, C)>>(iter: I) -> Self {
        let mut map = FlatFileMap::new();
        for (path, content) in iter {
            map.insert(path, content);
        }
        map
    }
}

/// Flatten a forest into a [`FlatFileMap`].
///
/// Empty folders contribute nothing and files without content map to `""`.
pub fn flatten(nodes: &[FileNode]) -> FlatFileMap {
    let mut map = FlatFileMap::new();
    flatten_into(nodes, "", &mut map);
    map
}

fn flatten_into(nodes: &[FileNode], base: &str, map: &mut FlatFileMap) {
    for node in nodes {
        let path = if base.is_empty() {
            node.name.clone()
        } else {
            format!("{}/{}", base, node.name)
        };

        match node.kind {
            NodeKind::File => map.insert(path, node.content.clone().unwrap_or_default()),
            NodeKind::Folder => flatten_into(&node.children, &path, map),
        }
    }
}
