//! Course, category and tree reads, and category reassignment.

use log::debug;

use super::Library;
use crate::{
    display::{Categories, CourseTrees, Courses},
    error::{LibraryError, Result},
    models::{Caller, Course, CourseTree},
    params::{GetTree, Id, ListCourses, UpdateCourseCategory},
};

impl Library {
    /// Lists courses ordered by ID, optionally within one category.
    pub async fn list_courses(&self, params: &ListCourses) -> Result<Courses> {
        let category_id = params.category_id;
        let courses = self
            .with_database(move |db| db.list_courses(category_id))
            .await?;
        Ok(Courses(courses))
    }

    /// Retrieves a single course.
    ///
    /// # Errors
    ///
    /// * `LibraryError::CourseNotFound` - no course with the given ID
    pub async fn get_course(&self, params: &Id) -> Result<Course> {
        let id = params.id;
        self.with_database(move |db| db.get_course(id)?.ok_or(LibraryError::CourseNotFound { id }))
            .await
    }

    /// Lists all categories ordered by name.
    pub async fn list_categories(&self) -> Result<Categories> {
        let categories = self.with_database(|db| db.list_categories()).await?;
        Ok(Categories(categories))
    }

    /// Materializes the hierarchy of one course, or of every course when
    /// `params.course_id` is absent.
    ///
    /// # Errors
    ///
    /// * `LibraryError::CourseNotFound` - `course_id` names no course
    pub async fn get_tree(&self, params: &GetTree) -> Result<CourseTrees> {
        let course_id = params.course_id;
        let trees = self
            .with_database(move |db| db.get_course_trees(course_id))
            .await?;
        Ok(CourseTrees(trees))
    }

    /// Materializes the hierarchy of a single course.
    ///
    /// # Errors
    ///
    /// * `LibraryError::CourseNotFound` - no course with the given ID
    pub async fn get_course_tree(&self, params: &Id) -> Result<CourseTree> {
        let id = params.id;
        self.get_tree(&GetTree { course_id: Some(id) })
            .await?
            .into_iter()
            .next()
            .ok_or(LibraryError::CourseNotFound { id })
    }

    /// Moves a course to another category and returns the updated course.
    ///
    /// A missing `category_id` leaves the course where it is.
    ///
    /// # Errors
    ///
    /// * `LibraryError::PermissionDenied` - `caller` is not privileged
    /// * `LibraryError::CourseNotFound` - no course with `course_id`
    /// * `LibraryError::CategoryNotFound` - `category_id` names no category
    pub async fn update_course_category(
        &self,
        caller: &Caller,
        params: &UpdateCourseCategory,
    ) -> Result<Course> {
        if !caller.is_privileged() {
            return Err(LibraryError::PermissionDenied {
                action: "update_course_category".to_string(),
            });
        }

        let UpdateCourseCategory {
            course_id,
            category_id,
        } = *params;
        debug!("Moving course {course_id} to category {category_id:?}");

        self.with_database(move |db| db.update_course_category(course_id, category_id))
            .await
    }
}
