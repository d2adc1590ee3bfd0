use crate::{
    apply::{self, Manifest},
    defaults,
    layout::{self, Layout},
    plan, preview,
};

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ScaffoldError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Layout(#[from] layout::LayoutError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Plan(#[from] plan::PlanError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Apply(#[from] apply::ApplyError),
}

/// Picks the layout to build: the TOML file at `layout_file`, or the built-in `tts_core` layout.
/// `root` replaces the layout's own root when given.
///
/// # Errors
///
/// Returns a [`ScaffoldError`] if the layout file cannot be read or parsed.
pub fn load_layout(layout_file: Option<&str>, root: Option<&str>) -> Result<Layout, ScaffoldError> {
    let layout = match layout_file {
        Some(path) => {
            log::debug!("loading layout from {}", path);
            Layout::from_file(path)?
        }
        None => defaults::tts_core(),
    };

    Ok(match root {
        Some(root) => layout.with_root(root),
        None => layout,
    })
}

/// Deletes the layout's root and builds it again from scratch.
///
/// # Errors
///
/// Returns a [`ScaffoldError`] if:
///
/// - The layout is invalid or its summary template does not render.
/// - The existing root cannot be removed.
/// - A directory or file cannot be created or written to.
pub fn rebuild_tree(layout: &Layout) -> Result<Manifest, ScaffoldError> {
    let vfs = plan::plan(layout)?;

    log::debug!("applying plan to {}", layout.root.display());

    let manifest = apply::apply(&vfs, &layout.root)?;

    Ok(manifest)
}

/// Prints the tree a rebuild would produce, leaving the filesystem untouched.
///
/// # Errors
///
/// Returns a [`ScaffoldError`] if the layout is invalid or its summary template does not render.
pub fn preview_tree(layout: &Layout) -> Result<(), ScaffoldError> {
    let vfs = plan::plan(layout)?;

    preview::preview_as_tree(&vfs, &layout.root);

    Ok(())
}
