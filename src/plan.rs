//! Turns a [`Layout`] into a [`VirtualFS`] without touching the filesystem.
//!
//! The summary lines are rendered as a single tera template with these variables:
//!
//! - `root`: the root directory's name
//! - `files`: top-level file names, in declaration order
//! - `directories`: declared directories, in declaration order
//! - `contents`: directory to generated file names
use crate::{
    content::{join_lines, marker_content, render_content, MARKER_FILE_NAME},
    layout::{Layout, LayoutError, Summary},
    utils::{self, display_key},
    vfs::VirtualFS,
};
use indexmap::IndexSet;
use miette::Diagnostic;
use std::path::{Path, PathBuf};
use tampopo::{errors::SortError, Graph};
use tera::{Context, Tera};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum PlanError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Layout(#[from] LayoutError),

    #[error("Unable to order directories for creation")]
    #[diagnostic(code(tts_scaffold::plan::directory_order))]
    DirectoryOrder {
        #[source]
        source: SortError<String>,
    },

    #[error("Error occurred attempting to render the summary for '{document}'")]
    #[diagnostic(
        code(tts_scaffold::plan::summary),
        help("Check the tera syntax in the summary lines")
    )]
    Summary {
        document: String,
        #[source]
        source: tera::Error,
    },
}

/// Plans the complete tree for `layout`.
///
/// Entries come out as: top-level files, then every directory parents first (each declared one
/// followed by its marker file), then the generated files, then the summary append.
///
/// # Errors
///
/// Returns a [`PlanError`] if the layout is invalid or the summary template fails to render.
pub fn plan(layout: &Layout) -> Result<VirtualFS, PlanError> {
    layout.validate()?;

    let mut vfs = VirtualFS::new();

    for (name, lines) in &layout.files {
        vfs.push_file(normalized(name)?, join_lines(lines));
    }

    let declared: Vec<String> = layout
        .directories
        .iter()
        .map(|directory| Ok(display_key(&normalized(directory)?)))
        .collect::<Result<_, PlanError>>()?;

    for directory in directory_order(layout, &declared)? {
        let path = PathBuf::from(&directory);

        vfs.push_directory(path.clone());

        // markers reference the directory exactly as it was declared
        if let Some(index) = declared.iter().position(|key| *key == directory) {
            let marker = marker_content(&layout.directories[index]);

            vfs.push_file(path.join(MARKER_FILE_NAME), join_lines(&marker));
        }
    }

    for (directory, files) in &layout.contents {
        let directory = normalized(directory)?;

        for file in files {
            vfs.push_file(directory.join(file), join_lines(&render_content(file)));
        }
    }

    if let Some(summary) = &layout.summary {
        let text = render_summary(layout, summary)?;

        vfs.push_append(normalized(&summary.document)?, text);
    }

    log::debug!("planned {} entries", vfs.entries.len());

    Ok(vfs)
}

fn normalized(raw: &str) -> Result<PathBuf, PlanError> {
    utils::relative_path(raw).map_err(|problem| {
        PlanError::Layout(LayoutError::InvalidPath {
            role: "path",
            path: raw.to_string(),
            problem,
        })
    })
}

/// Collects every directory the tree needs and sorts it so parents precede children.
///
/// Declared directories keep their order where it is already valid; directories implied by the
/// content map, by nested top-level files, or as missing ancestors are ordered after them.
fn directory_order(layout: &Layout, declared: &[String]) -> Result<Vec<String>, PlanError> {
    let mut nodes: IndexSet<String> = declared.iter().cloned().collect();

    for directory in layout.contents.keys() {
        nodes.insert(display_key(&normalized(directory)?));
    }

    for name in layout.files.keys() {
        if let Some(parent) = normalized(name)?.parent() {
            if !parent.as_os_str().is_empty() {
                nodes.insert(display_key(parent));
            }
        }
    }

    let mut edges = Vec::new();
    let mut pending: Vec<String> = nodes.iter().cloned().collect();

    while let Some(node) = pending.pop() {
        let Some(parent) = Path::new(&node).parent() else {
            continue;
        };
        if parent.as_os_str().is_empty() {
            continue;
        }

        let parent = display_key(parent);
        edges.push((parent.clone(), node));

        if nodes.insert(parent.clone()) {
            pending.push(parent);
        }
    }

    let graph = Graph {
        nodes: nodes.into_iter().collect(),
        edges,
    };

    tampopo::sort_graph(&graph).map_err(|source| PlanError::DirectoryOrder { source })
}

fn render_summary(layout: &Layout, summary: &Summary) -> Result<String, PlanError> {
    let root = layout
        .root
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| layout.root.display().to_string());

    let mut context = Context::new();
    context.insert("root", &root);
    context.insert("files", &layout.files.keys().collect::<Vec<_>>());
    context.insert("directories", &layout.directories);
    context.insert("contents", &layout.contents);

    let mut tera = Tera::default();

    let mut rendered = tera
        .render_str(&summary.lines.join("\n"), &context)
        .map_err(|error| PlanError::Summary {
            document: summary.document.clone(),
            source: error,
        })?;
    rendered.push('\n');

    Ok(rendered)
}
