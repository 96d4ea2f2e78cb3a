//! Tree materializer: rebuilds nested course trees from the module arena.
//!
//! Modules are stored flat with `parent_id` references. Materializing a
//! course groups its modules by parent and its lessons by module, then walks
//! the groups depth-first from the root-level modules. Every level is sorted
//! by `order` (ties broken by id) so repeated reads of the same state
//! produce identical trees.

use std::collections::HashMap;

use crate::{
    db::Database,
    error::{LibraryError, Result},
    models::{Course, CourseTree, Lesson, LessonNode, Module, ModuleNode},
};

impl Database {
    /// Materializes the tree of one course, or of every course ordered by
    /// ID when `course_id` is `None`.
    ///
    /// # Errors
    ///
    /// * `LibraryError::CourseNotFound` - `course_id` names no course
    pub fn get_course_trees(&self, course_id: Option<u64>) -> Result<Vec<CourseTree>> {
        let courses = match course_id {
            Some(id) => vec![self
                .get_course(id)?
                .ok_or(LibraryError::CourseNotFound { id })?],
            None => self.list_courses(None)?,
        };

        courses
            .into_iter()
            .map(|course| self.build_course_tree(course))
            .collect()
    }

    fn build_course_tree(&self, course: Course) -> Result<CourseTree> {
        let modules = self.get_modules(course.id)?;
        let lessons = self.get_lessons(course.id)?;
        Ok(CourseTree::new(course, assemble_modules(modules, lessons)))
    }
}

/// Arranges flat module and lesson rows into ordered nested nodes.
///
/// Returns the root-level modules (those without a parent). Modules whose
/// parent is not among `modules` are unreachable and left out, as are
/// their lessons.
pub fn assemble_modules(modules: Vec<Module>, lessons: Vec<Lesson>) -> Vec<ModuleNode> {
    let mut children: HashMap<Option<u64>, Vec<Module>> = HashMap::new();
    for module in modules {
        children.entry(module.parent_id).or_default().push(module);
    }
    for siblings in children.values_mut() {
        siblings.sort_by_key(|m| (m.order, m.id));
    }

    let mut lessons_by_module: HashMap<u64, Vec<Lesson>> = HashMap::new();
    for lesson in lessons {
        lessons_by_module.entry(lesson.module_id).or_default().push(lesson);
    }
    for siblings in lessons_by_module.values_mut() {
        siblings.sort_by_key(|l| (l.order, l.id));
    }

    let roots = children.remove(&None).unwrap_or_default();
    roots
        .into_iter()
        .map(|module| build_node(module, &mut children, &mut lessons_by_module))
        .collect()
}

fn build_node(
    module: Module,
    children: &mut HashMap<Option<u64>, Vec<Module>>,
    lessons: &mut HashMap<u64, Vec<Lesson>>,
) -> ModuleNode {
    let id = module.id;
    let mut node = ModuleNode::leaf(module);

    node.lessons = lessons
        .remove(&id)
        .unwrap_or_default()
        .into_iter()
        .map(LessonNode::from)
        .collect();

    node.children = children
        .remove(&Some(id))
        .unwrap_or_default()
        .into_iter()
        .map(|child| build_node(child, children, lessons))
        .collect();

    node
}
