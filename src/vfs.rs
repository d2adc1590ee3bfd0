use crate::tree::{Node, Tree};
use std::path::{Path, PathBuf};

/// What should happen at a [`VirtualEntry`]'s destination.
#[derive(Debug, Clone, PartialEq)]
pub enum EntryKind {
    Directory,
    /// Create or truncate the file with these contents.
    File(String),
    /// Append to the file, creating it if needed.
    Append(String),
}

/// Represents a virtual file or directory entry to be created in memory before writing to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct VirtualEntry {
    /// The target path, relative to the root being built.
    pub destination: PathBuf,
    pub kind: EntryKind,
}
impl VirtualEntry {
    pub fn is_file(&self) -> bool {
        !matches!(self.kind, EntryKind::Directory)
    }
}

/// Represents a virtual file system composed of multiple [`VirtualEntry`] values.
///
/// Entries are kept in the order they will be applied, so the same plan always produces the same
/// sequence of filesystem operations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VirtualFS {
    pub entries: Vec<VirtualEntry>,
}
impl VirtualFS {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn push_directory<P: Into<PathBuf>>(&mut self, destination: P) {
        self.entries.push(VirtualEntry {
            destination: destination.into(),
            kind: EntryKind::Directory,
        });
    }

    pub fn push_file<P: Into<PathBuf>>(&mut self, destination: P, content: String) {
        self.entries.push(VirtualEntry {
            destination: destination.into(),
            kind: EntryKind::File(content),
        });
    }

    pub fn push_append<P: Into<PathBuf>>(&mut self, destination: P, content: String) {
        self.entries.push(VirtualEntry {
            destination: destination.into(),
            kind: EntryKind::Append(content),
        });
    }

    /// Folds the entries into the tree they would leave on disk, including implied parents.
    pub fn resolve(&self) -> Tree {
        let mut tree = Tree::new();

        for entry in &self.entries {
            insert_parents(&mut tree, &entry.destination);

            match &entry.kind {
                EntryKind::Directory => {
                    tree.insert(entry.destination.clone(), Node::Directory);
                }
                EntryKind::File(content) => {
                    tree.insert(entry.destination.clone(), Node::File(content.clone()));
                }
                EntryKind::Append(content) => {
                    let node = tree
                        .entry(entry.destination.clone())
                        .or_insert_with(|| Node::File(String::new()));

                    match node {
                        Node::File(existing) => existing.push_str(content),
                        Node::Directory => *node = Node::File(content.clone()),
                    }
                }
            }
        }

        tree
    }
}

fn insert_parents(tree: &mut Tree, destination: &Path) {
    for ancestor in destination.ancestors().skip(1) {
        if ancestor.as_os_str().is_empty() {
            break;
        }
        tree.entry(ancestor.to_path_buf()).or_insert(Node::Directory);
    }
}
