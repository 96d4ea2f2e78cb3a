//! MCP tool handler implementations.

use std::sync::Arc;

use lectern_core::{
    display::{OperationStatus, UpdateResult},
    models::Caller,
    params as core, Library,
};
use log::debug;
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::errors::to_mcp_error;

/// Transparent serde wrapper adding `JsonSchema` and `Deserialize` to a
/// core parameter type for the MCP tool schema.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type Id = McpParams<core::Id>;
pub type ListCourses = McpParams<core::ListCourses>;
pub type GetTree = McpParams<core::GetTree>;
pub type UpdateCourseCategory = McpParams<core::UpdateCourseCategory>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text(body: impl Into<String>) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(body.into())]))
}

/// Handler implementations backing the server's tools.
pub struct McpHandlers {
    library: Arc<Library>,
    caller: Caller,
}

impl McpHandlers {
    pub fn new(library: Arc<Library>, caller: Caller) -> Self {
        Self { library, caller }
    }

    pub async fn scan_library(&self) -> McpResult {
        debug!("scan_library");

        let report = self
            .library
            .scan_library(&self.caller)
            .await
            .map_err(|e| to_mcp_error("Failed to scan library", &e))?;

        text(report.to_string())
    }

    pub async fn list_courses(&self, Parameters(params): Parameters<ListCourses>) -> McpResult {
        debug!("list_courses: {:?}", params);

        let inner = params.as_ref();
        let courses = self
            .library
            .list_courses(inner)
            .await
            .map_err(|e| to_mcp_error("Failed to list courses", &e))?;

        let title = match inner.category_id {
            Some(id) => format!("Courses in category {id}"),
            None => "Courses".to_string(),
        };
        text(format!("# {title}\n\n{courses}"))
    }

    pub async fn show_course(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_course: {:?}", params);

        let course = self
            .library
            .get_course(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to get course", &e))?;

        text(course.to_string())
    }

    pub async fn course_tree(&self, Parameters(params): Parameters<GetTree>) -> McpResult {
        debug!("course_tree: {:?}", params);

        let trees = self
            .library
            .get_tree(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to read course tree", &e))?;

        text(trees.to_string())
    }

    pub async fn list_categories(&self) -> McpResult {
        debug!("list_categories");

        let categories = self
            .library
            .list_categories()
            .await
            .map_err(|e| to_mcp_error("Failed to list categories", &e))?;

        text(format!("# Categories\n\n{categories}"))
    }

    pub async fn set_course_category(
        &self,
        Parameters(params): Parameters<UpdateCourseCategory>,
    ) -> McpResult {
        debug!("set_course_category: {:?}", params);

        let inner = params.as_ref();
        let course = self
            .library
            .update_course_category(&self.caller, inner)
            .await
            .map_err(|e| to_mcp_error("Failed to update course", &e))?;

        let body = match inner.category_id {
            Some(id) => UpdateResult::with_changes(course, vec![format!("Moved to category {id}")])
                .to_string(),
            None => format!(
                "{}\n{}",
                OperationStatus::success("No category given; course left unchanged".to_string()),
                course
            ),
        };
        text(body)
    }
}
