use crate::{
    errors::{FileOperation, IoError},
    transactions::{Active, RollbackOperation, Transaction},
    vfs::{EntryKind, VirtualFS},
};
use colored::Colorize;
use miette::Diagnostic;
use std::{
    fmt, fs,
    io::{self, Write},
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ApplyError {
    #[error("I/O error within apply domain")]
    #[diagnostic(code(tts_scaffold::apply::io))]
    Io(#[from] IoError),
}

/// The kind of change a scaffold run made at a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Mkdir,
    Create,
    Append,
}
impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Mkdir => "mkdir",
            Self::Create => "create",
            Self::Append => "append",
        };
        write!(f, "{}", label)
    }
}

/// Everything a run did, in the order it did it.
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    pub root: PathBuf,
    pub actions: Vec<(Action, PathBuf)>,
}
impl Manifest {
    fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            actions: Vec::new(),
        }
    }

    fn record(&mut self, action: Action, path: &Path) {
        let label = match action {
            Action::Mkdir => action.to_string().blue(),
            Action::Create => action.to_string().green(),
            Action::Append => action.to_string().yellow(),
        };
        println!("{} {}", label, path.display());
        log::debug!("{} {}", action, path.display());

        self.actions.push((action, path.to_path_buf()));
    }

    /// Paths that were created as files, in order.
    pub fn files(&self) -> impl Iterator<Item = &Path> {
        self.actions
            .iter()
            .filter(|(action, _)| *action == Action::Create)
            .map(|(_, path)| path.as_path())
    }

    pub fn directories(&self) -> impl Iterator<Item = &Path> {
        self.actions
            .iter()
            .filter(|(action, _)| *action == Action::Mkdir)
            .map(|(_, path)| path.as_path())
    }
}

/// Replaces whatever lives at `root` with the tree described by `vfs`.
///
/// The existing root (directory or stray file) is removed first, then the root is recreated and
/// every entry is applied in plan order, creating missing parents as it goes. All steps are
/// recorded in a [`Transaction`]; if one fails, the partially built root is removed again before
/// the error is returned. The previous tree is not restored.
///
/// # Errors
///
/// Returns an [`ApplyError`] if the old root cannot be removed or any directory or file cannot be
/// created or written to.
pub fn apply(vfs: &VirtualFS, root: &Path) -> Result<Manifest, ApplyError> {
    remove_existing(root)?;

    let mut trx = Transaction::<Active>::new();
    let mut manifest = Manifest::new(root);

    create_directory(&mut trx, root)?;
    manifest.record(Action::Mkdir, root);

    for entry in &vfs.entries {
        let final_path = root.join(&entry.destination);

        match &entry.kind {
            EntryKind::Directory => {
                create_directory(&mut trx, &final_path)?;
                manifest.record(Action::Mkdir, &final_path);
            }
            EntryKind::File(contents) => {
                create_parent(&mut trx, &final_path)?;
                write_file(&mut trx, &final_path, contents)?;
                manifest.record(Action::Create, &final_path);
            }
            EntryKind::Append(text) => {
                create_parent(&mut trx, &final_path)?;
                append_summary(&final_path, text)?;
                manifest.record(Action::Append, &final_path);
            }
        }
    }

    trx.commit();

    log::info!(
        "built {} with {} directories and {} files",
        root.display(),
        manifest.directories().count(),
        manifest.files().count()
    );

    Ok(manifest)
}

/// Opens `path` in append mode (creating it when missing) and writes `text` to its end.
///
/// # Errors
///
/// Returns an [`ApplyError`] if the document cannot be opened or written to.
pub fn append_summary(path: &Path, text: &str) -> Result<(), ApplyError> {
    let append = || -> io::Result<()> {
        let mut document = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;

        document.write_all(text.as_bytes())
    };

    append().map_err(|error| IoError::new(FileOperation::Append, path.into(), error))?;

    log::debug!("appended {} bytes to {}", text.len(), path.display());

    Ok(())
}

/// Deletes `root` and everything beneath it, if anything is there.
fn remove_existing(root: &Path) -> Result<(), ApplyError> {
    let metadata = match fs::symlink_metadata(root) {
        Ok(metadata) => metadata,
        Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(error) => Err(IoError::new(FileOperation::Remove, root.into(), error))?,
    };

    log::debug!("removing existing {}", root.display());

    let removed = if metadata.is_dir() {
        fs::remove_dir_all(root)
    } else {
        fs::remove_file(root)
    };

    removed.map_err(|error| IoError::new(FileOperation::Remove, root.into(), error))?;

    Ok(())
}

fn create_parent(trx: &mut Transaction<Active>, path: &Path) -> Result<(), ApplyError> {
    match path.parent() {
        Some(parent) if !parent.exists() => create_directory(trx, parent),
        _ => Ok(()),
    }
}

/// Creates all directories in the specified path if they do not exist.
///
/// Registers a [`RollbackOperation::RemoveDir`] on the provided [`Transaction`] so the directory
/// disappears again if the run fails.
fn create_directory(trx: &mut Transaction<Active>, path: &Path) -> Result<(), ApplyError> {
    fs::create_dir_all(path)
        .map_err(|error| IoError::new(FileOperation::Mkdir, path.into(), error))?;

    trx.add_operation(RollbackOperation::RemoveDir(path.to_path_buf()));

    Ok(())
}

fn write_file(trx: &mut Transaction<Active>, path: &Path, contents: &str) -> Result<(), ApplyError> {
    fs::write(path, contents)
        .map_err(|error| IoError::new(FileOperation::Write, path.into(), error))?;

    trx.add_operation(RollbackOperation::RemoveFile(path.to_path_buf()));

    Ok(())
}
