//! HTTP client for the remote file service

use reqwest::{Client as HttpClient, RequestBuilder};
use serde::de::DeserializeOwned;
use shelf_types::envelope::Envelope;
use shelf_types::requests::{
    CreateDirectoryRequest, CreateFileRequest, MoveRequest, RenameRequest, SaveRequest,
    SetRootPathRequest,
};
use shelf_types::vpath;
use shelf_types::{FileContent, Node};
use std::time::Duration;
use tracing::debug;

use crate::error::{ClientError, Result};

/// Default bound on any single round trip.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the remote file service.
///
/// Stateless: every call is one independent request/response round
/// trip, nothing is cached or retried, and the server stays the sole
/// source of truth. Cheap to clone and usable from any task.
#[derive(Debug, Clone)]
pub struct FsClient {
    http: HttpClient,
    base_url: String,
}

impl FsClient {
    /// Build a client against a base endpoint such as
    /// `http://localhost:8080/api/files`, with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::failed(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the directory node at `path` with its direct and
    /// transitive children fully populated.
    pub async fn get_tree(&self, path: &str) -> Result<Node> {
        debug!(path, "fetching directory tree");
        let req = self.http.get(self.url("/tree")).query(&[("path", path)]);
        self.fetch(req, "/tree", "failed to fetch directory tree").await
    }

    /// Fetch the tree from the configured root down.
    pub async fn get_root_tree(&self) -> Result<Node> {
        self.get_tree(vpath::ROOT).await
    }

    /// Fetch the file body at `path`. Fails if the path does not name
    /// a file.
    pub async fn get_content(&self, path: &str) -> Result<FileContent> {
        debug!(path, "reading file content");
        let req = self.http.get(self.url("/content")).query(&[("path", path)]);
        self.fetch(req, "/content", "failed to read file content").await
    }

    /// Overwrite the file at `path` with `content`.
    pub async fn save_content(&self, path: &str, content: &str) -> Result<()> {
        debug!(path, "saving file content");
        let body = SaveRequest {
            path: path.to_string(),
            content: content.to_string(),
        };
        let req = self.http.put(self.url("/content")).json(&body);
        self.execute(req, "failed to save file").await
    }

    /// Create an empty directory at `path`.
    pub async fn create_directory(&self, path: &str) -> Result<()> {
        debug!(path, "creating directory");
        let body = CreateDirectoryRequest {
            path: path.to_string(),
        };
        let req = self.http.post(self.url("/directory")).json(&body);
        self.execute(req, "failed to create directory").await
    }

    /// Create a file at `path`, empty unless `content` is given.
    pub async fn create_file(&self, path: &str, content: Option<&str>) -> Result<()> {
        debug!(path, "creating file");
        let body = CreateFileRequest {
            path: path.to_string(),
            content: content.map(str::to_string),
        };
        let req = self.http.post(self.url("/file")).json(&body);
        self.execute(req, "failed to create file").await
    }

    /// True iff an entry currently exists at `path`. A nonexistent
    /// path is the `false` case, not a failure.
    pub async fn exists(&self, path: &str) -> Result<bool> {
        debug!(path, "checking existence");
        let req = self.http.get(self.url("/exists")).query(&[("path", path)]);
        self.fetch(req, "/exists", "failed to check existence").await
    }

    /// Change the name/location of the entry at `old_path` to
    /// `new_path`. Distinct from [`move_entry`](Self::move_entry);
    /// the server may treat the two differently.
    pub async fn rename(&self, old_path: &str, new_path: &str) -> Result<()> {
        debug!(old_path, new_path, "renaming entry");
        let body = RenameRequest {
            old_path: old_path.to_string(),
            new_path: new_path.to_string(),
        };
        let req = self.http.put(self.url("/rename")).json(&body);
        self.execute(req, "failed to rename entry").await
    }

    /// Relocate the entry at `source_path` under `target_path`.
    pub async fn move_entry(&self, source_path: &str, target_path: &str) -> Result<()> {
        debug!(source_path, target_path, "moving entry");
        let body = MoveRequest {
            source_path: source_path.to_string(),
            target_path: target_path.to_string(),
        };
        let req = self.http.put(self.url("/move")).json(&body);
        self.execute(req, "failed to move entry").await
    }

    /// Remove the entry at `path`. Directories are removed
    /// recursively on the server side.
    pub async fn delete(&self, path: &str) -> Result<()> {
        debug!(path, "deleting entry");
        let req = self.http.delete(self.url("/delete")).query(&[("path", path)]);
        self.execute(req, "failed to delete entry").await
    }

    /// Read the server's currently configured root directory.
    pub async fn get_root_path(&self) -> Result<String> {
        debug!("reading root path");
        let req = self.http.get(self.url("/config/root-path"));
        self.fetch(req, "/config/root-path", "failed to read root path").await
    }

    /// Reconfigure the server's root directory. Affects path
    /// resolution for every subsequent operation of every client of
    /// this workspace.
    pub async fn set_root_path(&self, root_path: &str) -> Result<()> {
        debug!(root_path, "setting root path");
        let body = SetRootPathRequest {
            root_path: root_path.to_string(),
        };
        let req = self.http.put(self.url("/config/root-path")).json(&body);
        self.execute(req, "failed to set root path").await
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Issue a request and return the envelope's payload, if any.
    ///
    /// Every failure shape collapses into [`ClientError::RequestFailed`]
    /// with the most specific message available: the envelope's
    /// `message`, then its `error`, then the transport's own detail,
    /// then the per-operation default phrase.
    async fn send<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
        default_msg: &'static str,
    ) -> Result<Option<T>> {
        let response = req
            .send()
            .await
            .map_err(|e| ClientError::failed(e.to_string()))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ClientError::failed(e.to_string()))?;

        match serde_json::from_slice::<Envelope<T>>(&body) {
            Ok(envelope) => envelope.into_result().map_err(|detail| {
                ClientError::failed(detail.unwrap_or_else(|| default_msg.to_string()))
            }),
            Err(_) if !status.is_success() => {
                Err(ClientError::failed(format!("{default_msg}: HTTP {status}")))
            }
            Err(e) => Err(ClientError::failed(format!(
                "{default_msg}: unreadable response body: {e}"
            ))),
        }
    }

    /// A data-returning operation: a success envelope without `data`
    /// is a contract violation, not an empty result.
    async fn fetch<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
        endpoint: &'static str,
        default_msg: &'static str,
    ) -> Result<T> {
        self.send(req, default_msg)
            .await?
            .ok_or(ClientError::MalformedResponse { endpoint })
    }

    /// A void operation: any payload the server includes is ignored.
    async fn execute(&self, req: RequestBuilder, default_msg: &'static str) -> Result<()> {
        self.send::<serde_json::Value>(req, default_msg).await?;
        Ok(())
    }
}
