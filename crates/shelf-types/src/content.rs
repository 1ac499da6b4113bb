//! File body type

use serde::{Deserialize, Serialize};

/// A file body materialized by the server.
///
/// Constructed fresh on every read and never updated in place; after a
/// save, re-fetch to observe any server-side normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileContent {
    /// Virtual path of the source entry
    pub path: String,
    /// Full text payload, no partial reads
    pub content: String,
    /// Declared text encoding of `content`
    pub encoding: String,
    /// Server-declared content type, advisory only
    pub mime_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_content_wire_shape() {
        let json = r##"{
            "path": "/notes/todo.md",
            "content": "# todo\n",
            "encoding": "UTF-8",
            "mimeType": "text/markdown"
        }"##;

        let content: FileContent = serde_json::from_str(json).unwrap();
        assert_eq!(content.path, "/notes/todo.md");
        assert_eq!(content.mime_type, "text/markdown");
    }
}
