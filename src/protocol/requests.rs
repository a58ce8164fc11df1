//! HTTP request schemas
//!
//! Bodies and query strings accepted by the gateway endpoints. A `path`
//! that may be omitted defaults to the root.

use serde::Deserialize;

/// Query string of `GET /`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GetContentsQuery {
    pub path: String,
}

/// Body of `POST /file`
#[derive(Debug, Deserialize)]
pub struct CreateFileRequest {
    #[serde(default)]
    pub path: Option<String>,
    pub name: String,
    pub content: String,
}

/// Body of `PUT /file`
#[derive(Debug, Deserialize)]
pub struct EditFileRequest {
    #[serde(default)]
    pub path: Option<String>,
    pub content: String,
}

/// Body of `DELETE /file`
#[derive(Debug, Deserialize)]
pub struct DeleteFileRequest {
    pub path: String,
}

/// Body of `POST /directory`
#[derive(Debug, Deserialize)]
pub struct CreateDirectoryRequest {
    #[serde(default)]
    pub path: Option<String>,
    pub name: String,
}

/// Body of `PUT /directory`
#[derive(Debug, Deserialize)]
pub struct EditDirectoryRequest {
    pub path: String,
    pub name: String,
}

/// Body of `DELETE /directory`
#[derive(Debug, Deserialize)]
pub struct DeleteDirectoryRequest {
    pub path: String,
}

/// Absent and `null` paths both mean the root
pub fn path_or_root(path: Option<String>) -> String {
    path.unwrap_or_default()
}
