//! Lesson model definition.

use serde::{Deserialize, Serialize};

use super::FileKind;

/// A file within a module's directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Lesson {
    /// Unique identifier for the lesson
    pub id: u64,

    /// Module of the directory the file was found in
    pub module_id: u64,

    /// File name without its extension
    pub title: String,

    /// Content kind derived from the extension
    pub file_type: FileKind,

    /// Absolute path of the file
    pub file_path: String,

    /// Size on disk in bytes
    pub file_size: u64,

    /// Position among siblings (modules and lessons share the sequence)
    pub order: u32,

    /// Media duration in seconds, never populated by scans
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
}
