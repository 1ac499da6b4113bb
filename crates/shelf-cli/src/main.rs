//! Shelf CLI
//!
//! Terminal client for a remote Shelf file workspace.

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::error;

#[derive(Parser)]
#[command(name = "shelf")]
#[command(author, version, about = "Shelf - terminal client for a remote file workspace", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the directory tree
    Tree {
        /// Path to list from (defaults to the workspace root)
        path: Option<String>,

        /// Show sizes and modification times
        #[arg(short, long)]
        long: bool,
    },

    /// Print a file's content
    Cat {
        path: String,

        /// Show language, encoding and type flags instead of the body
        #[arg(long)]
        info: bool,
    },

    /// Overwrite a file's content from a local file or stdin
    Save {
        path: String,

        /// Local file to read from (stdin when omitted)
        file: Option<std::path::PathBuf>,
    },

    /// Create an empty directory
    Mkdir { path: String },

    /// Create a file
    Touch {
        path: String,

        /// Initial content
        #[arg(long)]
        content: Option<String>,
    },

    /// Delete a file or directory (directories are removed recursively)
    Rm {
        path: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Rename an entry
    Rename { old_path: String, new_path: String },

    /// Move an entry under a new parent
    Mv { source: String, target: String },

    /// Check whether a path exists
    Exists { path: String },

    /// Read or change the server's root directory
    Root {
        #[command(subcommand)]
        action: RootAction,
    },

    /// Manage CLI configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum RootAction {
    /// Show the configured root directory
    Get,
    /// Point the server at a new root directory
    Set {
        root_path: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Set the file service URL
    SetServer {
        /// Server URL (e.g., http://files.example.com:8080)
        url: String,
    },
    /// Show current configuration
    Show,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(if cli.verbose {
            "shelf_cli=debug,shelf_client=debug"
        } else {
            "shelf_cli=info"
        })
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let result = match cli.command {
        Commands::Tree { path, long } => commands::tree::run(path.as_deref(), long).await,
        Commands::Cat { path, info } => commands::content::cat(&path, info).await,
        Commands::Save { path, file } => commands::content::save(&path, file.as_deref()).await,
        Commands::Mkdir { path } => commands::manage::mkdir(&path).await,
        Commands::Touch { path, content } => {
            commands::manage::touch(&path, content.as_deref()).await
        }
        Commands::Rm { path, yes } => commands::manage::rm(&path, yes).await,
        Commands::Rename { old_path, new_path } => {
            commands::manage::rename(&old_path, &new_path).await
        }
        Commands::Mv { source, target } => commands::manage::mv(&source, &target).await,
        Commands::Exists { path } => commands::manage::exists(&path).await,
        Commands::Root { action } => match action {
            RootAction::Get => commands::root::get().await,
            RootAction::Set { root_path, yes } => commands::root::set(&root_path, yes).await,
        },
        Commands::Config { action } => match action {
            ConfigAction::SetServer { url } => commands::config::set_server(&url).await,
            ConfigAction::Show => commands::config::show().await,
        },
    };

    if let Err(ref e) = result {
        error!("Command failed: {}", e);
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }

    result
}
