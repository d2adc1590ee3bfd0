use std::{fs, marker::PhantomData, path::PathBuf};

/// A step that undoes one filesystem change made while building the root.
#[derive(Debug)]
pub enum RollbackOperation {
    RemoveFile(PathBuf),
    RemoveDir(PathBuf),
}
impl RollbackOperation {
    fn undo(self) {
        let (kind, path, removed) = match self {
            Self::RemoveDir(path) => {
                let removed = fs::remove_dir_all(&path);
                ("dir", path, removed)
            }
            Self::RemoveFile(path) => {
                let removed = fs::remove_file(&path);
                ("file", path, removed)
            }
        };

        match removed {
            Ok(()) => log::debug!("rolled back {} {}", kind, path.display()),
            // already gone with an enclosing directory
            Err(error) => log::trace!("skipped {} {}: {}", kind, path.display(), error),
        }
    }
}
/// Still recording, undoes its steps when dropped.
pub struct Active;
/// Finished successfully, leaves the tree alone.
pub struct Committed;
/// Decides at compile time whether dropping a [`Transaction`] undoes its steps.
pub trait TransactionState {
    const SHOULD_ROLLBACK: bool;
}
impl TransactionState for Active {
    const SHOULD_ROLLBACK: bool = true;
}
impl TransactionState for Committed {
    const SHOULD_ROLLBACK: bool = false;
}
/// Tracks what a scaffold run has created so a failed run can be undone.
///
/// A `Transaction<Active>` that is dropped, typically because an error was propagated with `?`
/// halfway through applying a plan, removes everything it recorded in reverse order. Calling
/// [`Transaction::commit`] turns it into a `Transaction<Committed>` that leaves the tree alone.
///
/// # Example
///
/// ```rust
/// use tts_scaffold::transactions::{Active, RollbackOperation, Transaction};
///
/// let mut trx = Transaction::<Active>::new();
/// trx.add_operation(RollbackOperation::RemoveFile("some/path".into()));
/// trx.commit(); // No rollback will happen
/// ```
pub struct Transaction<State: TransactionState> {
    rollback_operations: Vec<RollbackOperation>,
    state: PhantomData<State>,
}
impl Transaction<Active> {
    pub fn new() -> Self {
        Transaction {
            rollback_operations: vec![],
            state: PhantomData,
        }
    }
    /// Registers an action that undoes one step of the run.
    pub fn add_operation(&mut self, operation: RollbackOperation) {
        self.rollback_operations.push(operation);
    }
    /// Finalizes the transaction, preventing any rollback from occurring.
    pub fn commit(mut self) -> Transaction<Committed> {
        self.rollback_operations.clear();

        Transaction {
            rollback_operations: vec![],
            state: PhantomData,
        }
    }
}
impl Default for Transaction<Active> {
    fn default() -> Self {
        Self::new()
    }
}
impl<S: TransactionState> Drop for Transaction<S> {
    fn drop(&mut self) {
        if !S::SHOULD_ROLLBACK {
            log::debug!("scaffold transaction committed");
            return;
        }
        if self.rollback_operations.is_empty() {
            return;
        }

        log::warn!(
            "build failed, undoing {} step(s) of the partially built tree",
            self.rollback_operations.len()
        );
        while let Some(operation) = self.rollback_operations.pop() {
            operation.undo();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dropping_an_active_transaction_rolls_back() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("root");
        fs::create_dir(&root).unwrap();
        fs::write(root.join("file"), "x").unwrap();

        {
            let mut trx = Transaction::<Active>::new();
            trx.add_operation(RollbackOperation::RemoveDir(root.clone()));
            trx.add_operation(RollbackOperation::RemoveFile(root.join("file")));
        }

        assert!(!root.exists());
    }

    #[test]
    fn rollback_skips_paths_already_removed_with_their_parent() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("root");
        fs::create_dir(&root).unwrap();
        fs::write(root.join("file"), "x").unwrap();

        {
            let mut trx = Transaction::<Active>::new();
            trx.add_operation(RollbackOperation::RemoveFile(root.join("file")));
            trx.add_operation(RollbackOperation::RemoveDir(root.clone()));
        }

        assert!(!root.exists());
    }

    #[test]
    fn committed_transaction_keeps_everything() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("root");
        fs::create_dir(&root).unwrap();

        let mut trx = Transaction::<Active>::new();
        trx.add_operation(RollbackOperation::RemoveDir(root.clone()));
        drop(trx.commit());

        assert!(root.exists());
    }
}
