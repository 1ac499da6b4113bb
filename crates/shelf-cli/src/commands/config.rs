//! Config command - Manage CLI configuration

use crate::config::SettingsManager;
use anyhow::{Context, Result};
use colored::Colorize;

/// Set the file service URL
pub async fn set_server(url: &str) -> Result<()> {
    let mut settings = SettingsManager::load().context("Failed to load settings")?;

    let url = url.trim().trim_end_matches('/');
    if !url.starts_with("http://") && !url.starts_with("https://") {
        anyhow::bail!(
            "Invalid URL: {}. URL must start with http:// or https://",
            url
        );
    }

    settings.server_url = url.to_string();
    SettingsManager::save(&settings).context("Failed to save settings")?;

    println!("{} Server URL set to: {}", "✓".green(), url.cyan());
    println!("  File API: {}", settings.api_base().dimmed());

    Ok(())
}

/// Show current configuration
pub async fn show() -> Result<()> {
    let settings = SettingsManager::load().context("Failed to load settings")?;

    println!("{}", "Shelf Configuration".bold().underline());
    println!();

    println!("{}", "Server Settings:".cyan().bold());
    println!("  Server URL: {}", settings.server_url);
    println!("  File API:   {}", settings.api_base());
    println!();

    println!("{}", "Config Files:".cyan().bold());
    println!(
        "  Settings: {}",
        SettingsManager::settings_path()?
            .display()
            .to_string()
            .dimmed()
    );

    Ok(())
}
