//! Request bodies for the mutating endpoints

use serde::{Deserialize, Serialize};

/// PUT /content
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveRequest {
    pub path: String,
    pub content: String,
}

/// POST /file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFileRequest {
    pub path: String,
    /// Initial content, empty file when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// POST /directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDirectoryRequest {
    pub path: String,
}

/// PUT /rename
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameRequest {
    pub old_path: String,
    pub new_path: String,
}

/// PUT /move
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRequest {
    pub source_path: String,
    pub target_path: String,
}

/// PUT /config/root-path
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetRootPathRequest {
    pub root_path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rename_uses_camel_case_fields() {
        let body = RenameRequest {
            old_path: "/a.txt".into(),
            new_path: "/b.txt".into(),
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"oldPath":"/a.txt","newPath":"/b.txt"}"#
        );
    }

    #[test]
    fn test_create_file_omits_absent_content() {
        let body = CreateFileRequest {
            path: "/new.md".into(),
            content: None,
        };
        assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"path":"/new.md"}"#);
    }
}
