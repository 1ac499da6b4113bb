//! Content commands - read and write file bodies

use anyhow::{Context, Result};
use colored::{ColoredString, Colorize};
use shelf_types::{classify, lang, vpath};
use std::io::Read;
use std::path::Path;

pub async fn cat(path: &str, info: bool) -> Result<()> {
    let client = super::client()?;
    let content = client.get_content(path).await?;

    if info {
        let name = vpath::file_name(&content.path).unwrap_or(&content.path);
        let extension = vpath::extension_of(&content.path);
        println!("{}", "File".cyan().bold());
        println!("  Path:        {}", content.path);
        println!("  Size:        {} bytes", content.content.len());
        println!("  Language:    {}", lang::language_id(name));
        println!("  Encoding:    {}", content.encoding);
        println!("  Mime type:   {}", content.mime_type.dimmed());
        println!("  Editable:    {}", yes_no(classify::is_editable(extension)));
        println!("  Previewable: {}", yes_no(classify::is_previewable(extension)));
    } else {
        print!("{}", content.content);
    }
    Ok(())
}

pub async fn save(path: &str, file: Option<&Path>) -> Result<()> {
    let body = match file {
        Some(file) => std::fs::read_to_string(file)
            .with_context(|| format!("Failed to read {:?}", file))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            buffer
        }
    };

    let client = super::client()?;
    client.save_content(path, &body).await?;

    println!(
        "{} Saved {} ({} bytes)",
        "✓".green(),
        path.cyan(),
        body.len()
    );
    Ok(())
}

fn yes_no(flag: bool) -> ColoredString {
    if flag {
        "yes".green()
    } else {
        "no".yellow()
    }
}
