use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{CategoryCommands, CourseCommands, FileArgs};

/// Index a directory of courses and browse it from the terminal or over MCP
///
/// The library root is laid out as `<root>/<category>/<course>/...`. `scan`
/// imports it into a local SQLite database; every other command reads from
/// that database.
#[derive(Parser)]
#[command(version, about, name = "lectern")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/lectern/lectern.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Library root directory containing one folder per category
    #[arg(long, global = true, env = "LECTERN_ROOT")]
    pub root: Option<PathBuf>,

    /// Run as a privileged caller, allowing scans and category changes
    #[arg(long, global = true)]
    pub admin: bool,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands. Without one, `course list` runs.
#[derive(Subcommand)]
pub enum Commands {
    /// Scan the library root and rebuild every course (requires --admin)
    Scan,
    /// Browse and organize courses
    #[command(alias = "c")]
    Course {
        #[command(subcommand)]
        command: CourseCommands,
    },
    /// Browse categories
    Category {
        #[command(subcommand)]
        command: CategoryCommands,
    },
    /// Write a library file to stdout
    File(FileArgs),
    /// Start the MCP server on stdio
    Serve,
}
