//! Project directory watching for live reload.

use std::path::{Component, Path, PathBuf};
use std::sync::mpsc;

use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc as async_mpsc;

/// Events emitted by the file watcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchEvent {
    /// File was created or modified
    Changed(PathBuf),

    /// File was deleted
    Removed(PathBuf),
}

impl WatchEvent {
    pub fn path(&self) -> &Path {
        match self {
            WatchEvent::Changed(path) | WatchEvent::Removed(path) => path,
        }
    }
}

/// File watcher for a project directory.
pub struct FileWatcher {
    _watcher: RecommendedWatcher,
}

impl FileWatcher {
    /// Watch `root` recursively, ignoring paths under any directory named in
    /// `exclude`.
    ///
    /// Returns the watcher and a channel to receive events. Events stop when
    /// the watcher is dropped.
    pub fn new(
        root: &Path,
        exclude: &[String],
    ) -> Result<(Self, async_mpsc::Receiver<WatchEvent>), std::io::Error> {
        let (sync_tx, sync_rx) = mpsc::channel();
        let (async_tx, async_rx) = async_mpsc::channel(100);

        let mut watcher = notify::recommended_watcher(move |res: Result<notify::Event, _>| {
            if let Ok(event) = res {
                let _ = sync_tx.send(event);
            }
        })
        .map_err(std::io::Error::other)?;

        watcher
            .watch(root, RecursiveMode::Recursive)
            .map_err(std::io::Error::other)?;

        let root = root.to_path_buf();
        let exclude = exclude.to_vec();
        std::thread::spawn(move || {
            while let Ok(event) = sync_rx.recv() {
                for path in &event.paths {
                    if is_excluded(&root, path, &exclude) {
                        continue;
                    }
                    if let Some(e) = classify_event(path, &event.kind) {
                        if async_tx.blocking_send(e).is_err() {
                            return;
                        }
                    }
                }
            }
        });

        Ok((Self { _watcher: watcher }, async_rx))
    }
}

/// Classify a notify event into a WatchEvent.
fn classify_event(path: &Path, kind: &notify::EventKind) -> Option<WatchEvent> {
    use notify::EventKind;

    match kind {
        EventKind::Create(_) | EventKind::Modify(_) => Some(WatchEvent::Changed(path.to_path_buf())),
        EventKind::Remove(_) => Some(WatchEvent::Removed(path.to_path_buf())),
        _ => None,
    }
}

/// Whether any directory between `root` and `path` is excluded.
fn is_excluded(root: &Path, path: &Path, exclude: &[String]) -> bool {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative.components().any(|c| match c {
        Component::Normal(name) => name
            .to_str()
            .is_some_and(|name| exclude.iter().any(|e| e == name)),
        _ => false,
    })
}
