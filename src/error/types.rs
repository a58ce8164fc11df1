//! Error types
//!
//! Every gateway operation fails with a `GatewayError`. Client-facing
//! variants carry the relative path (or entry name) the client sent.

use std::fmt;
use std::io;

/// Path gateway errors
#[derive(Debug)]
pub enum GatewayError {
    /// Nothing exists at the path
    NotFound(String),
    /// The path exists but is not a regular file
    NotAFile(String),
    /// The path exists but is not a directory
    NotADirectory(String),
    /// A file with this name already exists
    FileExists(String),
    /// A directory with this name already exists
    DirectoryExists(String),
    /// The path climbs out of the root directory
    PathEscapesRoot(String),
    /// The operation would rename or remove the root itself
    RootProtected(String),
    /// The request body or query string could not be decoded
    BadRequest(String),
    IoError(io::Error),
    Internal(String),
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayError::NotFound(p) => write!(f, "Path '{}' not found", p),
            GatewayError::NotAFile(p) => write!(f, "Path '{}' is not a file", p),
            GatewayError::NotADirectory(p) => write!(f, "Path '{}' is not a directory", p),
            GatewayError::FileExists(n) => write!(f, "File '{}' already exists at this path", n),
            GatewayError::DirectoryExists(n) => {
                write!(f, "Directory '{}' already exists at this path", n)
            }
            GatewayError::PathEscapesRoot(p) => {
                write!(f, "Path '{}' is outside the root directory", p)
            }
            GatewayError::RootProtected(p) => {
                write!(f, "Path '{}' refers to the root directory", p)
            }
            GatewayError::BadRequest(msg) => write!(f, "{}", msg),
            GatewayError::IoError(e) => write!(f, "IO error: {}", e),
            GatewayError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for GatewayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GatewayError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for GatewayError {
    fn from(error: io::Error) -> Self {
        GatewayError::IoError(error)
    }
}

impl GatewayError {
    /// Whether the failure is the server's fault rather than the request's
    pub fn is_server_error(&self) -> bool {
        matches!(self, GatewayError::IoError(_) | GatewayError::Internal(_))
    }
}

/// Result alias used by storage operations
pub type GatewayResult<T> = Result<T, GatewayError>;
