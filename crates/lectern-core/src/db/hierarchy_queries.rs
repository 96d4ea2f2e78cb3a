//! Module and lesson rows of a course hierarchy.

use rusqlite::{params, Connection};

use super::utils::{id_column, optional_id_column};
use crate::{
    error::{DatabaseResultExt, Result},
    models::{FileKind, Lesson, Module},
};

const INSERT_MODULE_SQL: &str = "INSERT INTO modules (course_id, parent_id, title, module_order, file_path) VALUES (?1, ?2, ?3, ?4, ?5)";
const INSERT_LESSON_SQL: &str = "INSERT INTO lessons (module_id, title, file_type, file_path, file_size, lesson_order, duration) VALUES (?1, ?2, ?3, ?4, ?5, ?6, NULL)";
const DELETE_COURSE_LESSONS_SQL: &str =
    "DELETE FROM lessons WHERE module_id IN (SELECT id FROM modules WHERE course_id = ?1)";
const DELETE_COURSE_MODULES_SQL: &str = "DELETE FROM modules WHERE course_id = ?1";
const SELECT_MODULES_BY_COURSE_SQL: &str = "SELECT id, course_id, parent_id, title, module_order, file_path FROM modules WHERE course_id = ?1 ORDER BY module_order, id";
const SELECT_LESSONS_BY_COURSE_SQL: &str = "SELECT l.id, l.module_id, l.title, l.file_type, l.file_path, l.file_size, l.lesson_order, l.duration FROM lessons l JOIN modules m ON m.id = l.module_id WHERE m.course_id = ?1 ORDER BY l.lesson_order, l.id";
const COUNT_LESSONS_BY_COURSE_SQL: &str = "SELECT COUNT(*) FROM lessons l JOIN modules m ON m.id = l.module_id WHERE m.course_id = ?1";

/// Fields of a module about to be inserted.
#[derive(Debug, Clone)]
pub struct NewModule<'a> {
    pub course_id: u64,
    pub parent_id: Option<u64>,
    pub title: &'a str,
    pub order: u32,
    pub file_path: &'a str,
}

/// Fields of a lesson about to be inserted.
#[derive(Debug, Clone)]
pub struct NewLesson<'a> {
    pub module_id: u64,
    pub title: &'a str,
    pub file_type: &'a FileKind,
    pub file_path: &'a str,
    pub file_size: u64,
    pub order: u32,
}

impl super::Database {
    fn build_module_from_row(row: &rusqlite::Row) -> rusqlite::Result<Module> {
        Ok(Module {
            id: id_column(row, 0)?,
            course_id: id_column(row, 1)?,
            parent_id: optional_id_column(row, 2)?,
            title: row.get(3)?,
            order: row.get::<_, i64>(4)? as u32,
            file_path: row.get(5)?,
        })
    }

    fn build_lesson_from_row(row: &rusqlite::Row) -> rusqlite::Result<Lesson> {
        Ok(Lesson {
            id: id_column(row, 0)?,
            module_id: id_column(row, 1)?,
            title: row.get(2)?,
            file_type: FileKind::from(row.get::<_, String>(3)?),
            file_path: row.get(4)?,
            file_size: row.get::<_, i64>(5)? as u64,
            order: row.get::<_, i64>(6)? as u32,
            duration: row.get::<_, Option<i64>>(7)?.map(|d| d as u32),
        })
    }

    /// Deletes every lesson and module of a course.
    pub(crate) fn clear_course_hierarchy(conn: &Connection, course_id: u64) -> Result<()> {
        conn.execute(DELETE_COURSE_LESSONS_SQL, params![course_id as i64])
            .db_context("Failed to delete course lessons")?;
        conn.execute(DELETE_COURSE_MODULES_SQL, params![course_id as i64])
            .db_context("Failed to delete course modules")?;
        Ok(())
    }

    /// Inserts a module and returns its ID.
    pub(crate) fn insert_module(conn: &Connection, module: &NewModule<'_>) -> Result<u64> {
        conn.execute(
            INSERT_MODULE_SQL,
            params![
                module.course_id as i64,
                module.parent_id.map(|id| id as i64),
                module.title,
                module.order as i64,
                module.file_path
            ],
        )
        .db_context("Failed to insert module")?;

        Ok(conn.last_insert_rowid() as u64)
    }

    /// Inserts a lesson and returns its ID.
    pub(crate) fn insert_lesson(conn: &Connection, lesson: &NewLesson<'_>) -> Result<u64> {
        conn.execute(
            INSERT_LESSON_SQL,
            params![
                lesson.module_id as i64,
                lesson.title,
                lesson.file_type.as_str(),
                lesson.file_path,
                lesson.file_size as i64,
                lesson.order as i64
            ],
        )
        .db_context("Failed to insert lesson")?;

        Ok(conn.last_insert_rowid() as u64)
    }

    /// Returns all modules of a course, ordered by sibling position.
    pub fn get_modules(&self, course_id: u64) -> Result<Vec<Module>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_MODULES_BY_COURSE_SQL)
            .db_context("Failed to prepare query")?;

        let modules = stmt
            .query_map(params![course_id as i64], Self::build_module_from_row)
            .db_context("Failed to query modules")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch modules")?;

        Ok(modules)
    }

    /// Returns all lessons reachable from a course's modules, ordered by
    /// sibling position.
    pub fn get_lessons(&self, course_id: u64) -> Result<Vec<Lesson>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_LESSONS_BY_COURSE_SQL)
            .db_context("Failed to prepare query")?;

        let lessons = stmt
            .query_map(params![course_id as i64], Self::build_lesson_from_row)
            .db_context("Failed to query lessons")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch lessons")?;

        Ok(lessons)
    }

    /// Counts the lessons reachable from a course's modules.
    pub fn count_lessons(&self, course_id: u64) -> Result<u32> {
        self.connection
            .query_row(COUNT_LESSONS_BY_COURSE_SQL, params![course_id as i64], |row| {
                row.get::<_, i64>(0)
            })
            .map(|count| count as u32)
            .db_context("Failed to count lessons")
    }
}
