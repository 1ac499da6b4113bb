//! Root command - read or reconfigure the server's root directory

use anyhow::Result;
use colored::Colorize;
use dialoguer::Confirm;

pub async fn get() -> Result<()> {
    let client = super::client()?;
    let root = client.get_root_path().await?;
    println!("{root}");
    Ok(())
}

pub async fn set(root_path: &str, yes: bool) -> Result<()> {
    if !yes {
        let confirm = Confirm::new()
            .with_prompt(format!(
                "Point the server at {root_path}? Every client of this workspace is affected."
            ))
            .default(false)
            .interact()?;
        if !confirm {
            println!("{}", "Root change cancelled.".yellow());
            return Ok(());
        }
    }

    let client = super::client()?;
    client.set_root_path(root_path).await?;
    println!("{} Root directory set to {}", "✓".green(), root_path.cyan());
    Ok(())
}
