use std::path::{Path, PathBuf};

use crate::layout::Node;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}
/// Represents a virtual file or directory entry staged in memory before it is created on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualEntry {
    /// Path of the entry, relative to the project base path.
    pub destination: PathBuf,
    pub kind: EntryKind,
}
impl VirtualEntry {
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }
}
/// Represents a virtual file system composed of multiple [`VirtualEntry`] values.
///
/// Entries are kept in creation order: every directory comes before anything nested under it.
#[derive(Debug, Clone, Default)]
pub struct VirtualFS {
    pub entries: Vec<VirtualEntry>,
}
impl VirtualFS {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
    /// Flattens a declarative layout with a depth-first, pre-order walk.
    pub fn from_layout(nodes: &[Node]) -> Self {
        let mut vfs = Self::new();

        vfs.push_nodes(Path::new(""), nodes);

        vfs
    }

    fn push_nodes(&mut self, parent: &Path, nodes: &[Node]) {
        for node in nodes {
            let destination = parent.join(node.name());

            match node {
                Node::Directory(_, children) => {
                    self.entries.push(VirtualEntry {
                        destination: destination.clone(),
                        kind: EntryKind::Directory,
                    });
                    self.push_nodes(&destination, children);
                }
                Node::File(_) => self.entries.push(VirtualEntry {
                    destination,
                    kind: EntryKind::File,
                }),
            }
        }
    }
}
