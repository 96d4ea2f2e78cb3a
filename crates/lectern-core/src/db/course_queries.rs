//! Course CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, Connection, OptionalExtension};

use super::utils::{id_column, optional_id_column, timestamp_column};
use crate::{
    error::{DatabaseResultExt, LibraryError, Result},
    models::Course,
};

const COURSE_COLUMNS: &str =
    "id, title, description, category_id, file_path, total_lessons, total_duration, created_at";
const INSERT_COURSE_SQL: &str = "INSERT INTO courses (title, description, category_id, file_path, total_lessons, total_duration, created_at) VALUES (?1, ?2, ?3, ?4, 0, 0, ?5)";
const CHECK_COURSE_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM courses WHERE id = ?1)";
const UPDATE_COURSE_PLACEMENT_SQL: &str =
    "UPDATE courses SET category_id = ?1, file_path = ?2 WHERE id = ?3";
const UPDATE_COURSE_TOTALS_SQL: &str =
    "UPDATE courses SET total_lessons = ?1, total_duration = ?2 WHERE id = ?3";
const UPDATE_COURSE_CATEGORY_SQL: &str = "UPDATE courses SET category_id = ?1 WHERE id = ?2";

impl super::Database {
    /// Helper function to construct a Course from a database row
    fn build_course_from_row(row: &rusqlite::Row) -> rusqlite::Result<Course> {
        Ok(Course {
            id: id_column(row, 0)?,
            title: row.get(1)?,
            description: row.get(2)?,
            category_id: optional_id_column(row, 3)?,
            file_path: row.get(4)?,
            total_lessons: row.get::<_, i64>(5)? as u32,
            total_duration: row.get::<_, i64>(6)? as u64,
            created_at: timestamp_column(row, 7)?,
        })
    }

    /// Retrieves a course by its ID.
    pub fn get_course(&self, id: u64) -> Result<Option<Course>> {
        Self::get_course_in(&self.connection, id)
    }

    fn get_course_in(conn: &Connection, id: u64) -> Result<Option<Course>> {
        conn.query_row(
            &format!("SELECT {COURSE_COLUMNS} FROM courses WHERE id = ?1"),
            params![id as i64],
            Self::build_course_from_row,
        )
        .optional()
        .db_context("Failed to query course")
    }

    /// Lists courses ordered by ID, optionally restricted to one category.
    pub fn list_courses(&self, category_id: Option<u64>) -> Result<Vec<Course>> {
        let mut query = format!("SELECT {COURSE_COLUMNS} FROM courses");
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(category_id) = category_id {
            query.push_str(" WHERE category_id = ?");
            params_vec.push(Box::new(category_id as i64));
        }

        query.push_str(" ORDER BY id");

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

        let courses = stmt
            .query_map(&params_refs[..], Self::build_course_from_row)
            .db_context("Failed to query courses")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch courses")?;

        Ok(courses)
    }

    /// Reassigns a course to another category.
    ///
    /// With `category_id = None` the course keeps its current category and
    /// is returned unchanged.
    ///
    /// # Errors
    ///
    /// * `LibraryError::CourseNotFound` - no course with `course_id`
    /// * `LibraryError::CategoryNotFound` - `category_id` names no category
    pub fn update_course_category(
        &mut self,
        course_id: u64,
        category_id: Option<u64>,
    ) -> Result<Course> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let course_exists: bool = tx
            .query_row(CHECK_COURSE_EXISTS_SQL, params![course_id as i64], |row| {
                row.get(0)
            })
            .db_context("Failed to check course existence")?;

        if !course_exists {
            return Err(LibraryError::CourseNotFound { id: course_id });
        }

        if let Some(category_id) = category_id {
            if !Self::category_exists(&tx, category_id)? {
                return Err(LibraryError::CategoryNotFound { id: category_id });
            }

            tx.execute(
                UPDATE_COURSE_CATEGORY_SQL,
                params![category_id as i64, course_id as i64],
            )
            .db_context("Failed to update course category")?;
        }

        let course = Self::get_course_in(&tx, course_id)?
            .ok_or(LibraryError::CourseNotFound { id: course_id })?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(course)
    }

    /// Finds the course imported from exactly `file_path`.
    pub(crate) fn find_course_by_path(conn: &Connection, file_path: &str) -> Result<Option<Course>> {
        conn.query_row(
            &format!("SELECT {COURSE_COLUMNS} FROM courses WHERE file_path = ?1 ORDER BY id LIMIT 1"),
            params![file_path],
            Self::build_course_from_row,
        )
        .optional()
        .db_context("Failed to query course by path")
    }

    /// Inserts a new course with zeroed totals.
    pub(crate) fn insert_course(
        conn: &Connection,
        title: &str,
        description: Option<&str>,
        category_id: Option<u64>,
        file_path: &str,
    ) -> Result<Course> {
        let now = Timestamp::now();

        conn.execute(
            INSERT_COURSE_SQL,
            params![
                title,
                description,
                category_id.map(|id| id as i64),
                file_path,
                now.to_string()
            ],
        )
        .db_context("Failed to insert course")?;

        Ok(Course {
            id: conn.last_insert_rowid() as u64,
            title: title.to_string(),
            description: description.map(String::from),
            category_id,
            file_path: file_path.to_string(),
            total_lessons: 0,
            total_duration: 0,
            created_at: now,
        })
    }

    /// Refreshes the category and path of an existing course. The title is
    /// left untouched.
    pub(crate) fn update_course_placement(
        conn: &Connection,
        course_id: u64,
        category_id: Option<u64>,
        file_path: &str,
    ) -> Result<()> {
        conn.execute(
            UPDATE_COURSE_PLACEMENT_SQL,
            params![category_id.map(|id| id as i64), file_path, course_id as i64],
        )
        .db_context("Failed to update course placement")?;
        Ok(())
    }

    /// Stores the lesson count and duration computed by a scan.
    pub(crate) fn set_course_totals(
        conn: &Connection,
        course_id: u64,
        total_lessons: u32,
        total_duration: u64,
    ) -> Result<()> {
        conn.execute(
            UPDATE_COURSE_TOTALS_SQL,
            params![total_lessons as i64, total_duration as i64, course_id as i64],
        )
        .db_context("Failed to update course totals")?;
        Ok(())
    }
}
