//! Tree command - print the remote directory tree

use anyhow::Result;
use colored::Colorize;
use shelf_types::node::Node;
use shelf_types::{classify, sort, vpath};

pub async fn run(path: Option<&str>, long: bool) -> Result<()> {
    let client = super::client()?;
    let tree = client.get_tree(path.unwrap_or(vpath::ROOT)).await?;
    let tree = sort::sort_tree(&tree);
    print_node(&tree, 0, long);
    Ok(())
}

fn print_node(node: &Node, depth: usize, long: bool) {
    let indent = "  ".repeat(depth);
    let icon = classify::icon_key(node.kind, node.extension.as_deref());
    let name = if node.is_directory() {
        node.name.cyan().bold().to_string()
    } else {
        node.name.to_string()
    };

    if long {
        let mut details = Vec::new();
        if let Some(size) = node.size {
            details.push(format_size(size));
        }
        if let Some(modified) = node.last_modified.as_deref() {
            details.push(format_timestamp(modified));
        }
        if details.is_empty() {
            println!("{indent}{icon} {name}");
        } else {
            println!("{indent}{icon} {name}  {}", details.join("  ").dimmed());
        }
    } else {
        println!("{indent}{icon} {name}");
    }

    if let Some(children) = &node.children {
        for child in children {
            print_node(child, depth + 1, long);
        }
    }
}

/// Human-readable byte count
fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}

/// Render the server's timestamp in short local form, raw when it does
/// not parse.
fn format_timestamp(raw: &str) -> String {
    if let Ok(parsed) = chrono::DateTime::parse_from_rfc3339(raw) {
        return parsed.format("%Y-%m-%d %H:%M").to_string();
    }
    if let Ok(parsed) = chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return parsed.format("%Y-%m-%d %H:%M").to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.0 MB");
    }

    #[test]
    fn test_format_timestamp_accepts_both_server_shapes() {
        assert_eq!(format_timestamp("2024-01-15T10:30:00"), "2024-01-15 10:30");
        assert_eq!(format_timestamp("2024-01-15T10:30:00Z"), "2024-01-15 10:30");
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }
}
