use crate::error::{OperationError, Result};
use crate::topology::{FaceId, ShellData, ShellId, TopologyStore};

/// Creates a shell from existing faces.
pub struct MakeShell {
    faces: Vec<FaceId>,
    closed: bool,
}

impl MakeShell {
    /// Creates a new `MakeShell` operation.
    #[must_use]
    pub fn new(faces: Vec<FaceId>, closed: bool) -> Self {
        Self { faces, closed }
    }

    /// Executes the operation, creating the shell in the topology store.
    ///
    /// # Errors
    ///
    /// Returns an error if the face list is empty or a face is not found.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<ShellId> {
        if self.faces.is_empty() {
            return Err(OperationError::InvalidInput("shell needs at least one face".into()).into());
        }
        for &face in &self.faces {
            store.face(face)?;
        }
        Ok(store.add_shell(ShellData {
            faces: self.faces.clone(),
            is_closed: self.closed,
        }))
    }
}
