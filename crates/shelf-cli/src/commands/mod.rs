//! CLI command implementations

pub mod config;
pub mod content;
pub mod manage;
pub mod root;
pub mod tree;

use crate::config::SettingsManager;
use anyhow::{Context, Result};
use shelf_client::FsClient;

/// Build a client against the configured server.
fn client() -> Result<FsClient> {
    let settings = SettingsManager::load().context("Failed to load settings")?;
    Ok(FsClient::new(settings.api_base())?)
}
