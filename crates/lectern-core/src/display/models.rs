//! Display implementations for domain models.
//!
//! Every model renders as markdown. Trees render as nested bullet lists with
//! modules in bold and lessons tagged with their file kind.

use std::fmt;

use super::{datetime::LocalDateTime, status::OperationStatus};
use crate::models::{Category, Course, CourseTree, FileKind, LessonNode, ModuleNode, ScanReport};

const INDENT: &str = "  ";

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} {} (ID: {})", self.icon, self.name, self.id)?;
        writeln!(f)?;
        if let Some(desc) = &self.description {
            writeln!(f, "- **Description**: {desc}")?;
        }
        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.title)?;
        writeln!(f)?;
        write_course_metadata(
            f,
            self.category_id,
            &self.file_path,
            self.total_lessons,
            &self.created_at,
        )?;

        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        Ok(())
    }
}

impl fmt::Display for CourseTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.title)?;
        writeln!(f)?;
        write_course_metadata(
            f,
            self.category_id,
            &self.file_path,
            self.total_lessons,
            &self.created_at,
        )?;

        if self.modules.is_empty() {
            writeln!(f, "\nNo modules in this course.")?;
            return Ok(());
        }

        writeln!(f, "\n## Contents")?;
        writeln!(f)?;
        for module in &self.modules {
            write_module(f, module, 0)?;
        }
        writeln!(f)
    }
}

fn write_course_metadata(
    f: &mut fmt::Formatter<'_>,
    category_id: Option<u64>,
    file_path: &str,
    total_lessons: u32,
    created_at: &jiff::Timestamp,
) -> fmt::Result {
    match category_id {
        Some(id) => writeln!(f, "- Category: {id}")?,
        None => writeln!(f, "- Category: none")?,
    }
    writeln!(f, "- Path: {file_path}")?;
    writeln!(f, "- Lessons: {total_lessons}")?;
    writeln!(f, "- Created: {}", LocalDateTime(created_at))
}

fn write_module(f: &mut fmt::Formatter<'_>, module: &ModuleNode, depth: usize) -> fmt::Result {
    let indent = INDENT.repeat(depth);
    writeln!(f, "{indent}- **{}** (module {})", module.title, module.id)?;

    // Lessons and child modules share one sibling counter.
    let mut lessons = module.lessons.iter().peekable();
    let mut children = module.children.iter().peekable();
    loop {
        let next_is_child = match (lessons.peek(), children.peek()) {
            (Some(lesson), Some(child)) => child.order < lesson.order,
            (None, Some(_)) => true,
            (Some(_), None) => false,
            (None, None) => break,
        };

        if next_is_child {
            if let Some(child) = children.next() {
                write_module(f, child, depth + 1)?;
            }
        } else if let Some(lesson) = lessons.next() {
            write_lesson(f, lesson, depth + 1)?;
        }
    }
    Ok(())
}

fn write_lesson(f: &mut fmt::Formatter<'_>, lesson: &LessonNode, depth: usize) -> fmt::Result {
    let indent = INDENT.repeat(depth);
    write!(f, "{indent}- {} `{}`", lesson.title, lesson.file_type)?;
    if let Some(seconds) = lesson.duration {
        write!(f, " {}:{:02}", seconds / 60, seconds % 60)?;
    }
    writeln!(f)
}

impl fmt::Display for ScanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = OperationStatus {
            message: self.message.clone(),
            success: self.success,
        };
        write!(f, "{status}")?;
        writeln!(f)?;
        writeln!(f, "- Categories created: {}", self.categories_created)?;
        writeln!(f, "- Courses created: {}", self.courses_created)?;
        writeln!(f, "- Courses updated: {}", self.courses_updated)?;
        writeln!(f, "- Modules created: {}", self.modules_created)?;
        writeln!(f, "- Lessons created: {}", self.lessons_created)
    }
}
