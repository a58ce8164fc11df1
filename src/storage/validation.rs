//! Path validation
//!
//! Turns client-supplied relative paths into filesystem paths under the
//! root. Containment is checked lexically: a `..` may only undo a segment
//! the same path already descended into.

use std::path::{Component, Path, PathBuf};

use crate::error::{GatewayError, GatewayResult};

/// A client path joined onto the root
#[derive(Debug, Clone)]
pub struct ResolvedPath {
    /// The path exactly as the client sent it
    pub relative: String,
    /// Root joined with the relative path
    pub full: PathBuf,
    depth: Option<usize>,
}

impl ResolvedPath {
    /// Whether the path names the root directory itself
    pub fn is_root(&self) -> bool {
        self.depth == Some(0)
    }

    /// Rendered form used in `fullPath` response fields
    pub fn display(&self) -> String {
        self.full.to_string_lossy().into_owned()
    }
}

/// Strip leading separators so the path joins under the root
pub fn strip_leading_slash(relative: &str) -> &str {
    relative.trim_start_matches('/')
}

/// How many segments below the root `relative` ends up, or `None` if it
/// leaves the root (through `..` or an absolute component) at any point.
pub fn relative_depth(relative: &Path) -> Option<usize> {
    let mut depth: usize = 0;
    for component in relative.components() {
        match component {
            Component::Normal(_) => depth += 1,
            Component::CurDir => {}
            Component::ParentDir => depth = depth.checked_sub(1)?,
            Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    Some(depth)
}

/// Resolve a client path against the root
pub fn resolve_path(root: &Path, relative: &str, enforce: bool) -> GatewayResult<ResolvedPath> {
    let trimmed = strip_leading_slash(relative);
    let depth = relative_depth(Path::new(trimmed));

    if enforce && depth.is_none() {
        return Err(GatewayError::PathEscapesRoot(relative.to_string()));
    }

    Ok(ResolvedPath {
        relative: relative.to_string(),
        full: root.join(trimmed),
        depth,
    })
}

/// Resolve `name` inside an already resolved directory path
pub fn resolve_child(parent: &ResolvedPath, name: &str, enforce: bool) -> GatewayResult<PathBuf> {
    if enforce {
        let combined = Path::new(strip_leading_slash(&parent.relative)).join(name);
        if relative_depth(&combined).is_none() {
            return Err(GatewayError::PathEscapesRoot(name.to_string()));
        }
    }

    Ok(parent.full.join(name))
}
