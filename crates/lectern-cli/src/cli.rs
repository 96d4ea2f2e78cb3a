//! Command arguments and their handlers.
//!
//! Argument structs carry the clap derives and convert into the core
//! parameter types with `From`, so `lectern_core::params` stays free of CLI
//! concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Library
//! ```

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use lectern_core::{
    display::UpdateResult,
    models::Caller,
    params::{FetchFile, GetTree, Id, ListCourses, UpdateCourseCategory},
    Library,
};
use tokio::io::{self, AsyncWriteExt};

use crate::renderer::TerminalRenderer;

/// List imported courses
#[derive(Args)]
pub struct ListCoursesArgs {
    /// Only show courses in this category
    #[arg(long)]
    pub category: Option<u64>,
}

impl From<ListCoursesArgs> for ListCourses {
    fn from(val: ListCoursesArgs) -> Self {
        ListCourses {
            category_id: val.category,
        }
    }
}

/// Show one course
#[derive(Args)]
pub struct ShowCourseArgs {
    #[arg(help = "ID of the course to show")]
    pub id: u64,
}

impl From<ShowCourseArgs> for Id {
    fn from(val: ShowCourseArgs) -> Self {
        Id { id: val.id }
    }
}

/// Move a course to another category
#[derive(Args)]
pub struct SetCategoryArgs {
    #[arg(help = "ID of the course to move")]
    pub id: u64,
    /// Target category ID. Without it the course stays where it is
    #[arg(long)]
    pub category: Option<u64>,
}

impl From<SetCategoryArgs> for UpdateCourseCategory {
    fn from(val: SetCategoryArgs) -> Self {
        UpdateCourseCategory {
            course_id: val.id,
            category_id: val.category,
        }
    }
}

/// Show the module and lesson hierarchy
#[derive(Args)]
pub struct TreeArgs {
    #[arg(help = "Only show this course; all courses when omitted")]
    pub id: Option<u64>,
    /// Print the trees as JSON instead of markdown
    #[arg(long)]
    pub json: bool,
}

/// Write a library file to stdout
#[derive(Args)]
pub struct FileArgs {
    #[arg(help = "Absolute, optionally URL-encoded path of a file under the library root")]
    pub path: String,
}

impl From<FileArgs> for FetchFile {
    fn from(val: FileArgs) -> Self {
        FetchFile { path: val.path }
    }
}

#[derive(Subcommand)]
pub enum CourseCommands {
    /// List courses ordered by ID
    #[command(alias = "ls")]
    List(ListCoursesArgs),
    /// Show a single course
    Show(ShowCourseArgs),
    /// Move a course to another category (requires --admin)
    SetCategory(SetCategoryArgs),
    /// Show course hierarchies
    Tree(TreeArgs),
}

#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List categories ordered by name
    #[command(alias = "ls")]
    List,
}

/// Runs commands against a library and renders their output.
pub struct Cli {
    library: Library,
    renderer: TerminalRenderer,
    caller: Caller,
}

impl Cli {
    pub fn new(library: Library, renderer: TerminalRenderer, caller: Caller) -> Self {
        Self {
            library,
            renderer,
            caller,
        }
    }

    pub async fn scan(&self) -> Result<()> {
        let report = self
            .library
            .scan_library(&self.caller)
            .await
            .context("Failed to scan library")?;
        self.renderer.render(&report.to_string())
    }

    pub async fn handle_course_command(&self, command: CourseCommands) -> Result<()> {
        match command {
            CourseCommands::List(args) => self.list_courses(&args.into()).await,
            CourseCommands::Show(args) => self.show_course(&args.into()).await,
            CourseCommands::SetCategory(args) => self.set_category(&args.into()).await,
            CourseCommands::Tree(args) => self.tree(args).await,
        }
    }

    pub async fn handle_category_command(&self, command: CategoryCommands) -> Result<()> {
        match command {
            CategoryCommands::List => self.list_categories().await,
        }
    }

    pub async fn list_courses(&self, params: &ListCourses) -> Result<()> {
        let courses = self
            .library
            .list_courses(params)
            .await
            .context("Failed to list courses")?;

        let title = match params.category_id {
            Some(id) => format!("Courses in category {id}"),
            None => "Courses".to_string(),
        };
        self.renderer.render(&format!("# {title}\n\n{courses}"))
    }

    async fn show_course(&self, params: &Id) -> Result<()> {
        let course = self
            .library
            .get_course(params)
            .await
            .with_context(|| format!("Failed to show course {}", params.id))?;
        self.renderer.render(&course.to_string())
    }

    async fn set_category(&self, params: &UpdateCourseCategory) -> Result<()> {
        let course = self
            .library
            .update_course_category(&self.caller, params)
            .await
            .with_context(|| format!("Failed to update course {}", params.course_id))?;

        let changes = params
            .category_id
            .map(|id| vec![format!("Moved to category {id}")])
            .unwrap_or_default();
        let result = UpdateResult::with_changes(course, changes);
        self.renderer.render(&result.to_string())
    }

    async fn tree(&self, args: TreeArgs) -> Result<()> {
        let trees = self
            .library
            .get_tree(&GetTree { course_id: args.id })
            .await
            .context("Failed to read course tree")?;

        if args.json {
            let json = serde_json::to_string_pretty(&trees).context("Failed to encode tree")?;
            println!("{json}");
            return Ok(());
        }

        self.renderer.render(&trees.to_string())
    }

    async fn list_categories(&self) -> Result<()> {
        let categories = self
            .library
            .list_categories()
            .await
            .context("Failed to list categories")?;
        self.renderer
            .render(&format!("# Categories\n\n{categories}"))
    }

    pub async fn fetch_file(&self, params: &FetchFile) -> Result<()> {
        let mut opened = self
            .library
            .open_file(params)
            .await
            .with_context(|| format!("Failed to open {}", params.path))?;

        let mut stdout = io::stdout();
        io::copy(&mut opened.file, &mut stdout)
            .await
            .with_context(|| format!("Failed to stream {}", opened.path.display()))?;
        stdout.flush().await?;
        Ok(())
    }
}
