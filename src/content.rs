use serde_json::json;
use std::path::Path;

/// Name of the file that keeps an otherwise empty directory in version control.
pub const MARKER_FILE_NAME: &str = ".gitkeep";

/// The placeholder families a generated file can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Python,
    Yaml,
    Json,
    Text,
    Shell,
    Notebook,
    Markdown,
    Mermaid,
    Other,
}

// Extensions are matched exactly, so `.PY` falls through to `Other`.
const DISPATCH: &[(&str, FileKind)] = &[
    ("py", FileKind::Python),
    ("yaml", FileKind::Yaml),
    ("yml", FileKind::Yaml),
    ("json", FileKind::Json),
    ("txt", FileKind::Text),
    ("sh", FileKind::Shell),
    ("ipynb", FileKind::Notebook),
    ("md", FileKind::Markdown),
    ("mmd", FileKind::Mermaid),
];

impl FileKind {
    pub fn from_file_name(file_name: &str) -> Self {
        let Some(extension) = Path::new(file_name).extension() else {
            return Self::Other;
        };

        DISPATCH
            .iter()
            .find(|(candidate, _)| extension == *candidate)
            .map(|(_, kind)| *kind)
            .unwrap_or(Self::Other)
    }

    /// Placeholder lines for a file of this kind called `file_name`.
    pub fn render(self, file_name: &str) -> Vec<String> {
        match self {
            Self::Python => header(file_name, "Python code for related functionality."),
            Self::Yaml => header(file_name, "YAML configuration file."),
            Self::Json => {
                let description = json!({ "description": format!("Placeholder for {}", file_name) });

                // `{:#}` pretty prints with a two space indent
                format!("{:#}", description)
                    .lines()
                    .map(String::from)
                    .collect()
            }
            Self::Text => header(file_name, "Text notes or documentation."),
            Self::Shell => vec![
                "#!/usr/bin/env bash".to_string(),
                format!("# {}", file_name),
                "# Shell script placeholder.".to_string(),
                "echo 'Running script...'".to_string(),
            ],
            Self::Notebook => {
                let notebook = json!({
                    "cells": [],
                    "metadata": {},
                    "nbformat": 4,
                    "nbformat_minor": 5,
                });

                vec![notebook.to_string()]
            }
            Self::Markdown => header(file_name, "Markdown documentation or guides."),
            Self::Mermaid => vec![
                format!("%% Mermaid diagram for {}", file_name),
                "graph LR;".to_string(),
                "A-->B;".to_string(),
            ],
            Self::Other => header(
                file_name,
                "Placeholder content for project use. Adjust as needed.",
            ),
        }
    }
}

fn header(file_name: &str, description: &str) -> Vec<String> {
    vec![format!("# {}", file_name), format!("# {}", description)]
}

/// Generated lines for `file_name`, chosen by its extension. Never empty.
pub fn render_content(file_name: &str) -> Vec<String> {
    FileKind::from_file_name(file_name).render(file_name)
}

/// The single line written into a directory's marker file.
pub fn marker_content(directory: &str) -> Vec<String> {
    vec![format!(
        "# {} to keep {} directory in version control.",
        MARKER_FILE_NAME, directory
    )]
}

/// Joins lines the way every generated file is written: `\n` separated, `\n` terminated.
pub fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let mut joined = lines
        .iter()
        .map(|line| line.as_ref())
        .collect::<Vec<_>>()
        .join("\n");
    joined.push('\n');

    joined
}
