//! Module model definition.

use serde::{Deserialize, Serialize};

/// A directory node within a course hierarchy.
///
/// Modules form an arena: the tree shape lives entirely in `parent_id`
/// references, and children are found by querying on the parent's id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Module {
    /// Unique identifier for the module
    pub id: u64,

    /// Owning course
    pub course_id: u64,

    /// Parent module; `None` for the root module of the course
    pub parent_id: Option<u64>,

    /// Directory name (the course title for the root module)
    pub title: String,

    /// Position among siblings: 0 for the root, 1.. for children
    pub order: u32,

    /// Absolute path of the directory this module mirrors
    pub file_path: String,
}

impl Module {
    /// Whether this is the synthetic root module of its course.
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}
