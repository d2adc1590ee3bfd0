use crate::{
    content::MARKER_FILE_NAME,
    errors::{FileFormat, FileOperation, IoError, ParseError},
    utils::{self, PathProblem},
};
use indexmap::IndexMap;
use miette::Diagnostic;
use serde::Deserialize;
use std::{
    collections::HashSet,
    fs,
    path::{Component, Path, PathBuf},
};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum LayoutError {
    #[error("I/O error within layout domain")]
    #[diagnostic(code(tts_scaffold::layout::io))]
    Io(#[from] IoError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),

    #[error("Refusing to replace '{path}'")]
    #[diagnostic(
        code(tts_scaffold::layout::unsafe_root),
        help("The root is deleted on every run, point it at a dedicated directory")
    )]
    UnsafeRoot { path: PathBuf },

    #[error("Invalid {role} '{path}': {problem}")]
    #[diagnostic(code(tts_scaffold::layout::invalid_path))]
    InvalidPath {
        role: &'static str,
        path: String,
        problem: PathProblem,
    },

    #[error("Directory declared more than once: {path}")]
    #[diagnostic(
        code(tts_scaffold::layout::duplicate_directory),
        help("Remove the repeated entry from `directories`")
    )]
    DuplicateDirectory { path: String },

    #[error("Summary document '{document}' is not one of the top-level files")]
    #[diagnostic(
        code(tts_scaffold::layout::missing_summary_document),
        help("Declare the document under `[files]` or drop the `[summary]` table")
    )]
    MissingSummaryDocument { document: String },
}

/// Hand-written text appended to one of the top-level documents once the tree is built.
///
/// The lines are a tera template; see [`crate::plan`] for the variables in scope.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Summary {
    pub document: String,
    pub lines: Vec<String>,
}

/// Declarative description of the tree owned by `root`.
///
/// ```toml
/// root = "tts_core"
/// directories = ["docs", "docs/api"]
///
/// [files]
/// "README.md" = ["# tts_core", ""]
///
/// [contents]
/// "docs/api" = ["tts_api_endpoints.yaml", "api_overview.md"]
///
/// [summary]
/// document = "README.md"
/// lines = ["", "## Layout"]
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Layout {
    pub root: PathBuf,
    /// Top-level file name to its literal lines.
    #[serde(default)]
    pub files: IndexMap<String, Vec<String>>,
    /// Directories that each receive a marker file.
    #[serde(default)]
    pub directories: Vec<String>,
    /// Directory to the file names generated inside it.
    #[serde(default)]
    pub contents: IndexMap<String, Vec<String>>,
    #[serde(default)]
    pub summary: Option<Summary>,
}
impl Layout {
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self, LayoutError> {
        let parsed = toml::from_str(content)
            .map_err(|error| ParseError::new(FileFormat::Toml, origin.to_path_buf(), error))?;

        Ok(parsed)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LayoutError> {
        let path = path.as_ref();

        let content = fs::read_to_string(path)
            .map_err(|error| IoError::new(FileOperation::Read, path.to_path_buf(), error))?;

        Self::from_toml_str(&content, path)
    }

    pub fn with_root<P: Into<PathBuf>>(mut self, root: P) -> Self {
        self.root = root.into();
        self
    }

    /// Checks everything the builder relies on before the root is touched.
    ///
    /// # Errors
    ///
    /// Returns a [`LayoutError`] if:
    ///
    /// - The root is empty, `.`, `..` or a filesystem root.
    /// - Any directory, content key or file name escapes the root.
    /// - A directory is declared twice.
    /// - A content list names the marker file.
    /// - The summary targets a document that is not a top-level file.
    pub fn validate(&self) -> Result<(), LayoutError> {
        self.validate_root()?;

        for name in self.files.keys() {
            checked("top-level file", name, utils::relative_path)?;
        }

        let mut seen = HashSet::new();
        for directory in &self.directories {
            let normalized = checked("directory", directory, utils::relative_path)?;

            if !seen.insert(normalized) {
                return Err(LayoutError::DuplicateDirectory {
                    path: directory.clone(),
                });
            }
        }

        for (directory, files) in &self.contents {
            checked("content directory", directory, utils::relative_path)?;

            for name in files {
                let file = checked("file name", name, utils::file_name)?;

                if file.as_os_str() == MARKER_FILE_NAME {
                    return Err(LayoutError::InvalidPath {
                        role: "file name",
                        path: name.clone(),
                        problem: PathProblem::ReservedName,
                    });
                }
            }
        }

        if let Some(summary) = &self.summary {
            if !self.files.contains_key(&summary.document) {
                return Err(LayoutError::MissingSummaryDocument {
                    document: summary.document.clone(),
                });
            }
        }

        Ok(())
    }

    fn validate_root(&self) -> Result<(), LayoutError> {
        let has_name = self
            .root
            .components()
            .any(|component| matches!(component, Component::Normal(_)));
        let ends_in_name = matches!(self.root.components().last(), Some(Component::Normal(_)));

        if has_name && ends_in_name {
            Ok(())
        } else {
            Err(LayoutError::UnsafeRoot {
                path: self.root.clone(),
            })
        }
    }
}

fn checked(
    role: &'static str,
    raw: &str,
    check: fn(&str) -> Result<PathBuf, PathProblem>,
) -> Result<PathBuf, LayoutError> {
    check(raw).map_err(|problem| LayoutError::InvalidPath {
        role,
        path: raw.to_string(),
        problem,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r###"
root = "out"
directories = ["a", "a/b"]

[files]
"README.md" = ["# out", "hello"]

[contents]
"a/b" = ["x.yaml"]
"c" = ["script"]

[summary]
document = "README.md"
lines = ["", "## Layout"]
"###;

    fn sample() -> Layout {
        Layout::from_toml_str(SAMPLE, Path::new("layout.toml")).unwrap()
    }

    #[test]
    fn parses_toml_in_declaration_order() {
        let layout = sample();

        assert_eq!(layout.root, PathBuf::from("out"));
        assert_eq!(layout.directories, vec!["a", "a/b"]);
        assert_eq!(layout.files["README.md"], vec!["# out", "hello"]);
        assert_eq!(
            layout.contents.keys().collect::<Vec<_>>(),
            vec!["a/b", "c"]
        );
        assert_eq!(layout.summary.as_ref().unwrap().document, "README.md");
        assert_eq!(layout.summary.as_ref().unwrap().lines, vec!["", "## Layout"]);
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn unknown_keys_are_parse_errors() {
        let result = Layout::from_toml_str("root = \"x\"\nextra = 1\n", Path::new("l.toml"));

        assert!(matches!(result, Err(LayoutError::Parse(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = Layout::from_file("definitely/not/here.toml");

        assert!(matches!(result, Err(LayoutError::Io(_))));
    }

    #[test]
    fn rejects_duplicate_directories_after_normalization() {
        let mut layout = sample();
        layout.directories.push("./a/b/".to_string());

        assert!(matches!(
            layout.validate(),
            Err(LayoutError::DuplicateDirectory { path }) if path == "./a/b/"
        ));
    }

    #[test]
    fn rejects_paths_outside_the_root() {
        let mut layout = sample();
        layout.directories.push("../elsewhere".to_string());

        assert!(matches!(
            layout.validate(),
            Err(LayoutError::InvalidPath {
                problem: PathProblem::ParentTraversal,
                ..
            })
        ));
    }

    #[test]
    fn rejects_nested_content_file_names() {
        let mut layout = sample();
        layout
            .contents
            .insert("a".to_string(), vec!["nested/x.py".to_string()]);

        assert!(matches!(
            layout.validate(),
            Err(LayoutError::InvalidPath {
                role: "file name",
                problem: PathProblem::NotAFileName,
                ..
            })
        ));
    }

    #[test]
    fn rejects_roots_that_are_not_dedicated_directories() {
        for root in ["", ".", "..", "/", "out/.."] {
            let layout = sample().with_root(root);

            assert!(
                matches!(layout.validate(), Err(LayoutError::UnsafeRoot { .. })),
                "root {:?} should be refused",
                root
            );
        }
    }

    #[test]
    fn rejects_content_files_named_like_the_marker() {
        let mut layout = sample();
        layout
            .contents
            .insert("a".to_string(), vec!["./.gitkeep".to_string()]);

        assert!(matches!(
            layout.validate(),
            Err(LayoutError::InvalidPath {
                problem: PathProblem::ReservedName,
                ..
            })
        ));
    }

    #[test]
    fn summary_document_must_be_declared() {
        let mut layout = sample();
        layout.files.shift_remove("README.md");

        assert!(matches!(
            layout.validate(),
            Err(LayoutError::MissingSummaryDocument { document }) if document == "README.md"
        ));
    }
}
