//! Data models for the course library.
//!
//! The persisted hierarchy is Category → Course → Module → Lesson. Modules
//! reference their parent by id and are never nested in memory; the nested
//! [`CourseTree`] / [`ModuleNode`] types are read-only snapshots built by the
//! tree materializer for presentation.
//!
//! Display implementations live in [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use lectern_core::models::{Course, CourseTree};
//! use jiff::Timestamp;
//!
//! let course = Course {
//!     id: 1,
//!     title: "GoCourse".to_string(),
//!     description: None,
//!     category_id: Some(1),
//!     file_path: "/library/Programming/GoCourse".to_string(),
//!     total_lessons: 0,
//!     total_duration: 0,
//!     created_at: Timestamp::now(),
//! };
//! let tree = CourseTree::new(course, vec![]);
//! assert_eq!(tree.lesson_count(), 0);
//! println!("{}", tree);
//! ```

pub mod caller;
pub mod category;
pub mod course;
pub mod file_kind;
pub mod lesson;
pub mod module;
pub mod report;
pub mod tree;

#[cfg(test)]
mod tests;

pub use caller::Caller;
pub use category::{Category, DEFAULT_CATEGORY_ICON};
pub use course::Course;
pub use file_kind::FileKind;
pub use lesson::Lesson;
pub use module::Module;
pub use report::ScanReport;
pub use tree::{CourseTree, LessonNode, ModuleNode};
