//! Newtype collections with markdown display.
//!
//! Each wrapper prints its items back to back and a fixed message when
//! empty, leaving titles to the caller.

use std::{fmt, ops::Index};

use serde::Serialize;

use crate::models::{Category, Course, CourseTree};

macro_rules! display_collection {
    ($(#[$meta:meta])* $name:ident, $item:ty, $empty:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Serialize)]
        #[serde(transparent)]
        pub struct $name(pub Vec<$item>);

        impl $name {
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            pub fn len(&self) -> usize {
                self.0.len()
            }

            pub fn get(&self, index: usize) -> Option<&$item> {
                self.0.get(index)
            }

            pub fn iter(&self) -> std::slice::Iter<'_, $item> {
                self.0.iter()
            }
        }

        impl Index<usize> for $name {
            type Output = $item;

            fn index(&self, index: usize) -> &Self::Output {
                &self.0[index]
            }
        }

        impl IntoIterator for $name {
            type Item = $item;
            type IntoIter = std::vec::IntoIter<$item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.into_iter()
            }
        }

        impl<'a> IntoIterator for &'a $name {
            type Item = &'a $item;
            type IntoIter = std::slice::Iter<'a, $item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.0.is_empty() {
                    return writeln!(f, $empty);
                }
                for item in &self.0 {
                    writeln!(f, "{item}")?;
                }
                Ok(())
            }
        }
    };
}

display_collection!(
    /// Courses in listing order.
    ///
    /// ```rust
    /// use lectern_core::display::Courses;
    ///
    /// assert_eq!(Courses(vec![]).to_string(), "No courses found.\n");
    /// ```
    Courses,
    Course,
    "No courses found."
);

display_collection!(
    /// Categories ordered by name.
    Categories,
    Category,
    "No categories found."
);

display_collection!(
    /// Materialized course trees, one per course.
    CourseTrees,
    CourseTree,
    "No courses found."
);
