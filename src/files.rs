use std::path::Path;

use http::Method;
use reqwest::Response;
use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::links::Link;
use crate::{Error, Result};

/// File or directory metadata, recursively nested for directory children.
///
/// Every field is optional on the wire; absent fields decode to their zero
/// value, which keeps the shape uniform across the `meta`, `@activity` and
/// link payloads that all reuse this record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Meta {
    pub id: String,
    pub path: String,
    pub name: String,
    pub link_name: String,
    pub token: String,
    pub permissions: String,
    pub public: bool,
    /// One of `root`, `copy`, `dir` or `file`.
    #[serde(rename = "type")]
    pub kind: String,
    pub size: u64,
    pub date_last_synced: i64,
    pub modified_time: i64,
    pub stub: bool,
    pub share: bool,
    pub children: Vec<Meta>,
    pub counts: Count,
    pub recipient_confirmed: bool,
    pub mime_type: String,
    pub syncing: bool,
    pub object_available: bool,
    pub links: Vec<Link>,
    pub revisions: Vec<Revision>,
    pub url: String,
    pub revision_id: i64,
    pub thumb: String,
    pub thumb_original_dimensions: ThumbOriginalDimensions,
    pub children_count: u64,
    pub revision: i64,
    pub list_index: i64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Count {
    pub new: u64,
    pub viewed: u64,
    pub hidden: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThumbOriginalDimensions {
    pub width: u32,
    pub height: u32,
}

/// A point-in-time snapshot reference for a file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Revision {
    pub revision_id: String,
    pub modified_time: String,
    pub size: u64,
    pub latest: bool,
    pub conflict: i64,
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub creator: Creator,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Creator {
    pub user_id: String,
    pub created_time: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub confirmed: bool,
}

/// Filesystem operations: metadata, revisions, content download, upload,
/// rename, move, delete and directory creation.
///
/// Path arguments are trimmed of leading/trailing `/` before template
/// substitution; the caller is responsible for pre-escaping path segments.
///
/// https://www.copy.com/developer/documentation#api-calls/filesystem
#[derive(Debug, Clone)]
pub struct FileService {
    client: Client,
}

impl FileService {
    pub fn new(client: Client) -> Self {
        FileService { client }
    }

    /// Metadata of the root folder.
    pub async fn top_level_meta(&self) -> Result<Meta> {
        self.client.request_json(Method::GET, "meta", &[]).await
    }

    /// Metadata of the file or directory at `path`.
    pub async fn meta(&self, path: &str) -> Result<Meta> {
        let path = path.trim_matches('/');
        self.client
            .request_json(Method::GET, &format!("meta/copy/{}", path), &[])
            .await
    }

    /// All revisions recorded for the file at `path`.
    pub async fn revisions(&self, path: &str) -> Result<Vec<Revision>> {
        let path = path.trim_matches('/');
        let meta: Meta = self
            .client
            .request_json(Method::GET, &format!("meta/copy/{}/@activity", path), &[])
            .await?;
        Ok(meta.revisions)
    }

    /// Metadata of `path` as of the revision timestamp `time`.
    pub async fn revision_meta(&self, path: &str, time: i64) -> Result<Meta> {
        let path = path.trim_matches('/');
        self.client
            .request_json(
                Method::GET,
                &format!("meta/copy/{}/@activity/@time:{}", path, time),
                &[],
            )
            .await
    }

    /// Downloads the file content. The body is handed back unconsumed so it
    /// can be streamed; dropping the response releases the connection.
    pub async fn get_file(&self, path: &str) -> Result<Response> {
        let path = path.trim_matches('/');
        self.client
            .request_content(&format!("files/{}", path))
            .await
    }

    /// Uploads the local file at `local_path` to `upload_path`.
    ///
    /// The last segment of `upload_path` is the remote filename, everything
    /// before it the containing directory:
    ///
    /// ```text
    /// local_path:  /home/slok/myfile.txt
    /// upload_path: test/uploads/something.txt
    /// ```
    ///
    /// Not idempotent unless `overwrite` is true.
    pub async fn upload_file(
        &self,
        local_path: impl AsRef<Path>,
        upload_path: &str,
        overwrite: bool,
    ) -> Result<()> {
        let remote = upload_path.trim_matches('/');
        let (directory, filename) = split_upload_path(remote)?;
        let target = format!("files/{}?overwrite={}", directory, overwrite);
        self.client
            .request_multipart(local_path.as_ref(), &target, filename)
            .await?;
        Ok(())
    }

    /// Renames the file at `path` to `new_name` within its directory.
    pub async fn rename_file(&self, path: &str, new_name: &str, overwrite: bool) -> Result<()> {
        let path = path.trim_matches('/');
        self.client
            .request_empty(
                Method::PUT,
                &format!("files/{}?name={}&overwrite={}", path, new_name, overwrite),
                &[],
            )
            .await
    }

    /// Moves the file at `path` to `new_path`.
    pub async fn move_file(&self, path: &str, new_path: &str, overwrite: bool) -> Result<()> {
        let path = path.trim_matches('/');
        self.client
            .request_empty(
                Method::PUT,
                &format!("files/{}?path={}&overwrite={}", path, new_path, overwrite),
                &[],
            )
            .await
    }

    /// Deletes the file or directory at `path`.
    pub async fn delete_file(&self, path: &str) -> Result<()> {
        let path = path.trim_matches('/');
        self.client
            .request_empty(Method::DELETE, &format!("files/{}", path), &[])
            .await
    }

    /// Creates a directory at `path`.
    pub async fn create_directory(&self, path: &str) -> Result<()> {
        let path = path.trim_matches('/');
        self.client
            .request_empty(Method::POST, &format!("files/{}", path), &[])
            .await
    }
}

/// Splits an already-trimmed upload path into containing directory and
/// filename. An empty filename is rejected before any network call.
fn split_upload_path(path: &str) -> Result<(&str, &str)> {
    let (directory, filename) = match path.rfind('/') {
        Some(index) => (&path[..index], &path[index + 1..]),
        None => ("", path),
    };
    if filename.is_empty() {
        return Err(Error::InvalidPath(path.to_owned()));
    }
    Ok((directory.trim_matches('/'), filename))
}
