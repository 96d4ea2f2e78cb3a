//! Lectern CLI application
//!
//! Command-line and MCP front end for the lectern course library.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use lectern_core::{models::Caller, params::ListCourses, LibraryBuilder};
use log::info;
use mcp::{run_stdio_server, LecternMcpServer};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        root,
        admin,
        no_color,
        command,
    } = Args::parse();

    let library = LibraryBuilder::new()
        .with_database_path(database_file)
        .with_root_path(root)
        .build()
        .await
        .context("Failed to initialize library")?;

    let caller = if admin {
        Caller::privileged()
    } else {
        Caller::anonymous()
    };
    let renderer = TerminalRenderer::new(!no_color);

    info!("Lectern started");

    match command {
        Some(Serve) => {
            info!("Starting Lectern MCP server");
            run_stdio_server(LecternMcpServer::new(library, caller))
                .await
                .context("MCP server failed")
        }
        Some(Scan) => Cli::new(library, renderer, caller).scan().await,
        Some(Course { command }) => {
            Cli::new(library, renderer, caller)
                .handle_course_command(command)
                .await
        }
        Some(Category { command }) => {
            Cli::new(library, renderer, caller)
                .handle_category_command(command)
                .await
        }
        Some(File(args)) => {
            Cli::new(library, renderer, caller)
                .fetch_file(&args.into())
                .await
        }
        None => {
            Cli::new(library, renderer, caller)
                .list_courses(&ListCourses::default())
                .await
        }
    }
}
