//! Markdown display for library models and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! collections and results are wrapped in small newtypes so every interface
//! (terminal, MCP) renders the same text:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │   Collections   │    │    Markdown     │
//! │ (Course, Tree)  │───▶│   & Results     │───▶│ (Terminal/MCP)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`collections`]: `Courses`, `Categories`, `CourseTrees`
//! - [`results`]: `UpdateResult`
//! - [`status`]: `OperationStatus`
//! - [`datetime`]: local timestamp formatting
//!
//! # Examples
//!
//! ```rust
//! use lectern_core::display::{OperationStatus, UpdateResult};
//! use lectern_core::models::Course;
//! use jiff::Timestamp;
//!
//! let course = Course {
//!     id: 3,
//!     title: "GoCourse".to_string(),
//!     description: None,
//!     category_id: Some(2),
//!     file_path: "/library/Programming/GoCourse".to_string(),
//!     total_lessons: 4,
//!     total_duration: 0,
//!     created_at: Timestamp::now(),
//! };
//!
//! let result = UpdateResult::with_changes(course, vec!["Moved to category 2".to_string()]);
//! assert!(result.to_string().contains("Updated course with ID: 3"));
//!
//! let status = OperationStatus::success("Scan completed".to_string());
//! assert!(status.to_string().starts_with("Success:"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{Categories, CourseTrees, Courses};
pub use datetime::LocalDateTime;
pub use results::UpdateResult;
pub use status::OperationStatus;
