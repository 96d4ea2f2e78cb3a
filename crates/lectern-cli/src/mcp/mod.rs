//! MCP server for the course library
//!
//! Exposes library scans and reads as Model Context Protocol tools over
//! stdio. The caller privilege is fixed when the server starts.

use std::sync::Arc;

use anyhow::Result;
use lectern_core::{models::Caller, Library};
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;

pub use handlers::{GetTree, Id, ListCourses, McpResult, UpdateCourseCategory};

const INSTRUCTIONS: &str = r#"Lectern indexes a directory of courses and serves it as a browsable hierarchy.

## Core Concepts
- **Categories**: top-level folders of the library root
- **Courses**: folders inside a category
- **Modules**: nested folders inside a course; every course has one root module named after the course
- **Lessons**: files inside a module, tagged video, audio, pdf, their extension, or file

## Workflow
1. Run `scan_library` after files change on disk (privileged servers only)
2. Use `list_courses` or `list_categories` to find IDs
3. Use `course_tree` to see the ordered modules and lessons of a course
4. Use `set_course_category` to reorganize courses (privileged servers only)

Lesson order mirrors the directory: subfolders first, then files, each sorted by name ignoring case."#;

/// MCP server for the course library
#[derive(Clone)]
pub struct LecternMcpServer {
    library: Arc<Library>,
    caller: Caller,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl LecternMcpServer {
    pub fn new(library: Library, caller: Caller) -> Self {
        Self {
            library: Arc::new(library),
            caller,
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.library.clone(), self.caller)
    }

    #[tool(
        name = "scan_library",
        description = "Rescan the library root and rebuild every course's modules and lessons from disk. Existing courses keep their IDs and titles. Returns counts of created and updated records. Requires a privileged server."
    )]
    async fn scan_library(&self) -> McpResult {
        self.handlers().scan_library().await
    }

    #[tool(
        name = "list_courses",
        description = "List imported courses ordered by ID with their category, path and lesson count. Pass category_id to restrict the list to one category."
    )]
    async fn list_courses(&self, params: Parameters<ListCourses>) -> McpResult {
        self.handlers().list_courses(params).await
    }

    #[tool(
        name = "show_course",
        description = "Show a single course by ID: title, description, category, path and lesson count."
    )]
    async fn show_course(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().show_course(params).await
    }

    #[tool(
        name = "course_tree",
        description = "Show the nested module and lesson hierarchy of one course (course_id) or of every course when course_id is omitted. Each lesson is listed with its file type."
    )]
    async fn course_tree(&self, params: Parameters<GetTree>) -> McpResult {
        self.handlers().course_tree(params).await
    }

    #[tool(
        name = "list_categories",
        description = "List all categories ordered by name with their IDs."
    )]
    async fn list_categories(&self) -> McpResult {
        self.handlers().list_categories().await
    }

    #[tool(
        name = "set_course_category",
        description = "Move a course to another category. Provide course_id and category_id; omitting category_id leaves the course unchanged. Requires a privileged server."
    )]
    async fn set_course_category(&self, params: Parameters<UpdateCourseCategory>) -> McpResult {
        self.handlers().set_course_category(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for LecternMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            instructions: Some(INSTRUCTIONS.to_string()),
            ..Default::default()
        }
    }
}

/// Run the MCP server with stdio transport until the client disconnects or
/// the process receives SIGINT or SIGTERM.
pub async fn run_stdio_server(server: LecternMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!(
        "Starting Lectern MCP server on stdio (privileged: {})",
        server.caller.is_privileged()
    );
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use lectern_core::LibraryBuilder;
    use tempfile::TempDir;

    use super::*;

    async fn create_test_server(caller: Caller) -> (TempDir, LecternMcpServer) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let library = LibraryBuilder::new()
            .with_database_path(Some(temp_dir.path().join("test.db")))
            .build()
            .await
            .expect("Failed to create library");
        (temp_dir, LecternMcpServer::new(library, caller))
    }

    #[tokio::test]
    async fn test_server_registers_all_tools() {
        let (_temp_dir, server) = create_test_server(Caller::anonymous()).await;

        let mut names: Vec<String> = server
            .tool_router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect();
        names.sort();

        assert_eq!(
            names,
            vec![
                "course_tree",
                "list_categories",
                "list_courses",
                "scan_library",
                "set_course_category",
                "show_course",
            ]
        );
    }

    #[tokio::test]
    async fn test_server_info_enables_tools() {
        let (_temp_dir, server) = create_test_server(Caller::anonymous()).await;
        let info = server.get_info();

        assert!(info.capabilities.tools.is_some());
        assert!(info.instructions.unwrap().contains("course_tree"));
    }

    #[tokio::test]
    async fn test_anonymous_scan_is_rejected() {
        let (_temp_dir, server) = create_test_server(Caller::anonymous()).await;

        let err = server.scan_library().await.unwrap_err();
        assert!(err.message.contains("Permission denied"));
    }

    #[tokio::test]
    async fn test_unknown_course_is_rejected() {
        let (_temp_dir, server) = create_test_server(Caller::anonymous()).await;

        let params: Id = serde_json::from_value(serde_json::json!({ "id": 42 })).unwrap();
        let err = server.show_course(Parameters(params)).await.unwrap_err();
        assert!(err.message.contains("42"));
    }

    #[tokio::test]
    async fn test_list_categories_on_empty_library() {
        let (_temp_dir, server) = create_test_server(Caller::anonymous()).await;

        let result = server.list_categories().await.unwrap();
        let rendered = format!("{:?}", result.content);
        assert!(rendered.contains("No categories found."));
    }
}
