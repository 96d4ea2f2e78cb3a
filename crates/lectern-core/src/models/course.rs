//! Course model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A course imported from a second-level directory of the library root.
///
/// Courses are matched across scans by `file_path`. The title is fixed when
/// the course is first imported; later scans only refresh the category,
/// path and totals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Course {
    /// Unique identifier for the course
    pub id: u64,

    /// Title of the course (the directory name at first import)
    pub title: String,

    /// Detailed description of the course
    pub description: Option<String>,

    /// Owning category, if any
    pub category_id: Option<u64>,

    /// Absolute path of the course directory
    pub file_path: String,

    /// Number of lessons found by the last scan
    pub total_lessons: u32,

    /// Total media duration in seconds (not computed by scans)
    pub total_duration: u64,

    /// Timestamp when the course was first imported (UTC)
    pub created_at: Timestamp,
}
