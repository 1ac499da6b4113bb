//! Entry management commands - create, delete, relocate

use anyhow::Result;
use colored::Colorize;
use dialoguer::Confirm;
use shelf_types::vpath;

pub async fn mkdir(path: &str) -> Result<()> {
    check_target(path)?;
    let client = super::client()?;
    client.create_directory(path).await?;
    println!("{} Created directory {}", "✓".green(), path.cyan());
    Ok(())
}

pub async fn touch(path: &str, content: Option<&str>) -> Result<()> {
    check_target(path)?;
    let client = super::client()?;
    client.create_file(path, content).await?;
    println!("{} Created file {}", "✓".green(), path.cyan());
    Ok(())
}

pub async fn rm(path: &str, yes: bool) -> Result<()> {
    if !yes {
        let confirm = Confirm::new()
            .with_prompt(format!(
                "Delete {path}? Directories are removed recursively."
            ))
            .default(false)
            .interact()?;
        if !confirm {
            println!("{}", "Deletion cancelled.".yellow());
            return Ok(());
        }
    }

    let client = super::client()?;
    client.delete(path).await?;
    println!("{} Deleted {}", "✓".green(), path.cyan());
    Ok(())
}

pub async fn rename(old_path: &str, new_path: &str) -> Result<()> {
    check_target(new_path)?;
    let client = super::client()?;
    client.rename(old_path, new_path).await?;
    println!(
        "{} Renamed {} to {}",
        "✓".green(),
        old_path.cyan(),
        new_path.cyan()
    );
    Ok(())
}

pub async fn mv(source: &str, target: &str) -> Result<()> {
    let client = super::client()?;
    client.move_entry(source, target).await?;
    println!(
        "{} Moved {} under {}",
        "✓".green(),
        source.cyan(),
        target.cyan()
    );
    Ok(())
}

pub async fn exists(path: &str) -> Result<()> {
    let client = super::client()?;
    if client.exists(path).await? {
        println!("{}", "true".green());
    } else {
        println!("{}", "false".yellow());
        std::process::exit(1);
    }
    Ok(())
}

/// Reject paths the server will refuse before spending a round trip.
fn check_target(path: &str) -> Result<()> {
    if vpath::contains_traversal(path) {
        anyhow::bail!("Invalid path: {} contains a parent-directory segment", path);
    }
    match vpath::file_name(path) {
        Some(name) if vpath::is_valid_name(name) => Ok(()),
        Some(name) => anyhow::bail!("Invalid name: {:?}", name),
        None => anyhow::bail!("Invalid path: {}", path),
    }
}
