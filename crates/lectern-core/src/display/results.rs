//! Result wrappers for mutating operations.

use std::fmt;

use crate::models::Course;

/// An updated resource together with a list of what changed.
///
/// # Examples
///
/// ```rust
/// use lectern_core::{display::UpdateResult, models::Course};
/// use jiff::Timestamp;
///
/// let course = Course {
///     id: 1,
///     title: "RustCourse".to_string(),
///     description: Some("Imported from /library/Programming/RustCourse".to_string()),
///     category_id: Some(4),
///     file_path: "/library/Programming/RustCourse".to_string(),
///     total_lessons: 12,
///     total_duration: 0,
///     created_at: Timestamp::now(),
/// };
///
/// let result = UpdateResult::with_changes(course, Vec::new());
/// assert!(result.to_string().contains("No changes made."));
/// println!("{}", result);
/// ```
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<Course> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated course with ID: {}", self.resource.id)?;

        if self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "No changes made.")?;
        } else {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}
