//! Filesystem entry types

use serde::{Deserialize, Serialize};

/// Kind of a filesystem entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    Directory,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::File => "file",
            NodeKind::Directory => "directory",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One filesystem entry as reported by the server.
///
/// `path` is the entry's `/`-rooted virtual path and identifies it
/// within a tree snapshot. `children` is `None` for a directory whose
/// content has not been loaded; an empty vector means the directory is
/// genuinely empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Extension of a file name, original case preserved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
    /// Byte count, files only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Node>>,
    /// Server-assigned ISO-8601 timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
}

impl Node {
    pub fn is_directory(&self) -> bool {
        self.kind == NodeKind::Directory
    }

    pub fn is_file(&self) -> bool {
        self.kind == NodeKind::File
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_wire_shape() {
        let json = r#"{
            "name": "docs",
            "path": "/docs",
            "type": "directory",
            "lastModified": "2024-01-15T10:30:00",
            "children": [
                {
                    "name": "readme.md",
                    "path": "/docs/readme.md",
                    "type": "file",
                    "extension": "md",
                    "size": 420
                }
            ]
        }"#;

        let node: Node = serde_json::from_str(json).unwrap();
        assert_eq!(node.kind, NodeKind::Directory);
        assert!(node.is_directory());
        assert_eq!(node.last_modified.as_deref(), Some("2024-01-15T10:30:00"));

        let children = node.children.as_ref().unwrap();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].path, "/docs/readme.md");
        assert_eq!(children[0].extension.as_deref(), Some("md"));
        assert_eq!(children[0].size, Some(420));
        assert!(children[0].children.is_none());
    }

    #[test]
    fn test_empty_children_distinct_from_absent() {
        let loaded: Node =
            serde_json::from_str(r#"{"name":"a","path":"/a","type":"directory","children":[]}"#)
                .unwrap();
        let unloaded: Node =
            serde_json::from_str(r#"{"name":"a","path":"/a","type":"directory"}"#).unwrap();

        assert_eq!(loaded.children, Some(vec![]));
        assert_eq!(unloaded.children, None);
        assert_ne!(loaded, unloaded);
    }
}
