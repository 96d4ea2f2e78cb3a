//! Nested hierarchy snapshots produced by the tree materializer.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Course, FileKind, Lesson, Module};

/// A course together with its full module hierarchy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CourseTree {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    pub category_id: Option<u64>,
    pub file_path: String,
    pub total_lessons: u32,
    pub total_duration: u64,
    pub created_at: Timestamp,
    /// Root-level modules ordered by `order`
    #[serde(default)]
    pub modules: Vec<ModuleNode>,
}

impl CourseTree {
    /// Wraps a course with an already materialized module list.
    pub fn new(course: Course, modules: Vec<ModuleNode>) -> Self {
        Self {
            id: course.id,
            title: course.title,
            description: course.description,
            category_id: course.category_id,
            file_path: course.file_path,
            total_lessons: course.total_lessons,
            total_duration: course.total_duration,
            created_at: course.created_at,
            modules,
        }
    }

    /// Number of lessons reachable from the tree.
    pub fn lesson_count(&self) -> usize {
        self.modules.iter().map(ModuleNode::lesson_count).sum()
    }
}

/// A module with its lessons and child modules, each sorted by `order`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModuleNode {
    pub id: u64,
    pub title: String,
    pub order: u32,
    pub file_path: String,
    #[serde(default)]
    pub lessons: Vec<LessonNode>,
    #[serde(default)]
    pub children: Vec<ModuleNode>,
}

impl ModuleNode {
    /// Creates a node for `module` with no lessons or children attached yet.
    pub fn leaf(module: Module) -> Self {
        Self {
            id: module.id,
            title: module.title,
            order: module.order,
            file_path: module.file_path,
            lessons: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Number of lessons in this node and all descendants.
    pub fn lesson_count(&self) -> usize {
        self.lessons.len() + self.children.iter().map(Self::lesson_count).sum::<usize>()
    }
}

/// Presentation view of a lesson.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LessonNode {
    pub id: u64,
    pub title: String,
    pub file_type: FileKind,
    pub file_path: String,
    pub order: u32,
    /// Seconds; `null` until something measures the media
    pub duration: Option<u32>,
}

impl From<Lesson> for LessonNode {
    fn from(lesson: Lesson) -> Self {
        Self {
            id: lesson.id,
            title: lesson.title,
            file_type: lesson.file_type,
            file_path: lesson.file_path,
            order: lesson.order,
            duration: lesson.duration,
        }
    }
}
