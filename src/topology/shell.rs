use super::face::FaceId;

slotmap::new_key_type! {
    /// Unique identifier for a shell in the topology store.
    pub struct ShellId;
}

/// A connected set of faces forming a surface boundary.
#[derive(Debug, Clone)]
pub struct ShellData {
    /// The faces that make up this shell, in enumeration order.
    pub faces: Vec<FaceId>,
    /// Whether this shell is closed (watertight).
    pub is_closed: bool,
}
