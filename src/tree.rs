use crate::errors::{FileOperation, IoError};
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};
use walkdir::WalkDir;

/// A path below the root, as found on disk or in a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Directory,
    File(String),
}

/// Every path below a root (the root itself excluded), keyed by its relative path.
pub type Tree = BTreeMap<PathBuf, Node>;

/// Reads the tree under `root` back into memory.
///
/// # Errors
///
/// Returns an [`IoError`] if the root cannot be walked or a file is not valid UTF-8 text.
pub fn snapshot(root: &Path) -> Result<Tree, IoError> {
    let mut tree = Tree::new();

    for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|error| {
            let path = error.path().unwrap_or(root).to_path_buf();

            IoError::new(FileOperation::Read, path, error.into())
        })?;

        let relative = entry
            .path()
            .strip_prefix(root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| entry.path().to_path_buf());

        if entry.file_type().is_dir() {
            tree.insert(relative, Node::Directory);
        } else {
            let content = fs::read_to_string(entry.path())
                .map_err(|error| IoError::new(FileOperation::Read, entry.path().into(), error))?;

            tree.insert(relative, Node::File(content));
        }
    }

    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_lists_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("a/b")).unwrap();
        fs::write(dir.path().join("a/b/x.txt"), "x\n").unwrap();

        let tree = snapshot(dir.path()).unwrap();

        assert_eq!(
            tree.into_iter().collect::<Vec<_>>(),
            vec![
                (PathBuf::from("a"), Node::Directory),
                (PathBuf::from("a/b"), Node::Directory),
                (PathBuf::from("a/b/x.txt"), Node::File("x\n".to_string())),
            ]
        );
    }

    #[test]
    fn snapshot_of_missing_root_fails() {
        let dir = tempfile::tempdir().unwrap();

        assert!(snapshot(&dir.path().join("missing")).is_err());
    }
}
