use std::path::{Component, Path, PathBuf};

/// Why a layout path was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathProblem {
    Empty,
    Absolute,
    ParentTraversal,
    NotAFileName,
    ReservedName,
}
impl std::fmt::Display for PathProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            Self::Empty => "path has no usable component",
            Self::Absolute => "path must be relative to the root",
            Self::ParentTraversal => "path must not contain '..'",
            Self::NotAFileName => "expected a bare file name",
            Self::ReservedName => "name is reserved for the directory marker",
        };
        write!(f, "{}", reason)
    }
}

/// Normalizes a layout path into one that stays below the root.
///
/// `.` segments and repeated separators are dropped, while `..`, root and prefix components
/// are refused instead of being resolved.
pub fn relative_path(raw: &str) -> Result<PathBuf, PathProblem> {
    let mut path = PathBuf::new();

    for component in Path::new(raw).components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => return Err(PathProblem::ParentTraversal),
            Component::RootDir | Component::Prefix(_) => return Err(PathProblem::Absolute),
            Component::Normal(segment) => path.push(segment),
        }
    }

    if path.as_os_str().is_empty() {
        return Err(PathProblem::Empty);
    }

    Ok(path)
}

/// Like [`relative_path`], but the result must be a single component.
pub fn file_name(raw: &str) -> Result<PathBuf, PathProblem> {
    let path = relative_path(raw)?;

    if path.components().count() != 1 {
        return Err(PathProblem::NotAFileName);
    }

    Ok(path)
}

/// Renders a relative path with `/` separators, the way layouts spell them.
pub fn display_key(path: &Path) -> String {
    path.components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
