//! Storage result types
//!
//! Defines the shapes returned by gateway operations. They serialize
//! directly into response bodies.

use serde::Serialize;

/// One immediate child of a listed directory
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DirectoryEntry {
    File {
        name: String,
        hidden: bool,
        #[serde(rename = "fullPath")]
        full_path: String,
        size: u64,
        owner: String,
        permissions: String,
    },
    Directory {
        name: String,
    },
}

impl DirectoryEntry {
    pub fn name(&self) -> &str {
        match self {
            DirectoryEntry::File { name, .. } | DirectoryEntry::Directory { name } => name,
        }
    }
}

/// Result of a `Get` on a file or directory
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "pathType")]
pub enum PathContents {
    #[serde(rename = "file")]
    File {
        #[serde(rename = "fullPath")]
        full_path: String,
        contents: String,
    },
    #[serde(rename = "dir")]
    Dir {
        #[serde(rename = "fullPath")]
        full_path: String,
        contents: Vec<DirectoryEntry>,
    },
}

/// Confirmation returned by mutating operations
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
