//! Presentation metadata derived from an entry's extension

use crate::node::NodeKind;

/// Icon key shared by all directories
pub const DIRECTORY_ICON: &str = "📁";

/// Icon key for files with an absent or unrecognized extension
pub const DEFAULT_ICON: &str = "📄";

/// Icon key for an entry. Extension comparison is case-insensitive.
pub fn icon_key(kind: NodeKind, extension: Option<&str>) -> &'static str {
    if kind == NodeKind::Directory {
        return DIRECTORY_ICON;
    }
    match extension.map(str::to_lowercase).as_deref() {
        Some("md") => "📝",
        Some("txt") => "📄",
        Some("pdf") => "📕",
        Some("doc" | "docx") => "📘",
        Some("xls" | "xlsx") => "📊",
        Some("html") => "🌐",
        Some("css") => "🎨",
        Some("js" | "ts") => "📜",
        Some("json" | "xml" | "yaml" | "yml") => "📋",
        Some("java") => "☕",
        Some("py") => "🐍",
        Some("sql") => "🗃️",
        Some("png" | "jpg" | "jpeg" | "gif" | "svg") => "🖼️",
        _ => DEFAULT_ICON,
    }
}

/// Text-like formats an editor will open. Absent extension means no.
pub fn is_editable(extension: Option<&str>) -> bool {
    matches!(
        extension.map(str::to_lowercase).as_deref(),
        Some(
            "md" | "txt" | "html" | "css" | "js" | "ts" | "json" | "xml" | "yaml" | "yml"
                | "java" | "py" | "sql"
        )
    )
}

/// Formats a viewer can render, including binary-ish ones like images
/// and office documents. Independent of [`is_editable`].
pub fn is_previewable(extension: Option<&str>) -> bool {
    matches!(
        extension.map(str::to_lowercase).as_deref(),
        Some(
            "md" | "txt" | "html" | "pdf" | "doc" | "docx" | "xls" | "xlsx" | "png" | "jpg"
                | "jpeg" | "gif" | "svg"
        )
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_icon_is_fixed() {
        assert_eq!(icon_key(NodeKind::Directory, None), DIRECTORY_ICON);
        assert_eq!(icon_key(NodeKind::Directory, Some("md")), DIRECTORY_ICON);
    }

    #[test]
    fn test_file_icons_are_case_insensitive() {
        assert_eq!(icon_key(NodeKind::File, Some("PY")), icon_key(NodeKind::File, Some("py")));
    }

    #[test]
    fn test_unknown_extension_falls_back() {
        assert_eq!(icon_key(NodeKind::File, Some("xyz")), DEFAULT_ICON);
        assert_eq!(icon_key(NodeKind::File, None), DEFAULT_ICON);
    }

    #[test]
    fn test_absent_extension_is_neither_editable_nor_previewable() {
        assert!(!is_editable(None));
        assert!(!is_previewable(None));
    }

    #[test]
    fn test_editable_text_formats() {
        assert!(is_editable(Some("md")));
        assert!(is_editable(Some("YAML")));
        assert!(!is_editable(Some("png")));
    }

    #[test]
    fn test_previewable_and_editable_are_independent() {
        // images and PDFs preview but do not edit
        assert!(is_previewable(Some("png")));
        assert!(!is_editable(Some("png")));
        assert!(is_previewable(Some("pdf")));
        assert!(!is_editable(Some("pdf")));

        // code formats edit but do not preview
        assert!(is_editable(Some("ts")));
        assert!(!is_previewable(Some("ts")));
    }
}
