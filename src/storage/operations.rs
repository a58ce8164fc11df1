//! Storage operations
//!
//! Handles the filesystem side of every endpoint: reading and listing,
//! creating, editing and deleting files and directories.

use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{RenameBase, ServerConfig};
use crate::error::{GatewayError, GatewayResult};
use crate::storage::filesystem::{EntryKind, probe};
use crate::storage::permissions::{mode_string, owner_name};
use crate::storage::results::{DirectoryEntry, Message, PathContents};
use crate::storage::validation::{
    ResolvedPath, relative_depth, resolve_child, resolve_path, strip_leading_slash,
};

/// Filesystem access scoped to one root directory
#[derive(Debug, Clone)]
pub struct PathGateway {
    root: PathBuf,
    enforce_containment: bool,
    rename_base: RenameBase,
}

impl PathGateway {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            enforce_containment: true,
            rename_base: RenameBase::Root,
        }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        Self {
            root: config.root_path_buf(),
            enforce_containment: config.enforce_containment,
            rename_base: config.rename_base,
        }
    }

    /// Allow or forbid `..` segments that climb above the root
    pub fn with_containment(mut self, enforce: bool) -> Self {
        self.enforce_containment = enforce;
        self
    }

    pub fn with_rename_base(mut self, rename_base: RenameBase) -> Self {
        self.rename_base = rename_base;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, relative: &str) -> GatewayResult<ResolvedPath> {
        resolve_path(&self.root, relative, self.enforce_containment)
    }

    /// Resolve `relative` and fail with `NotFound` unless something is there
    fn resolve_existing(&self, relative: &str) -> GatewayResult<(ResolvedPath, EntryKind)> {
        let resolved = self.resolve(relative)?;
        match probe(&resolved.full)? {
            Some(kind) => Ok((resolved, kind)),
            None => Err(GatewayError::NotFound(relative.to_string())),
        }
    }

    /// Returns a file's text or a directory's immediate children
    pub fn get(&self, relative: &str) -> GatewayResult<PathContents> {
        let (resolved, kind) = self.resolve_existing(relative)?;

        match kind {
            EntryKind::File(_) => {
                let contents = fs::read_to_string(&resolved.full)?;
                info!("Read file {} ({} bytes)", resolved.display(), contents.len());
                Ok(PathContents::File {
                    full_path: resolved.display(),
                    contents,
                })
            }
            EntryKind::Directory => {
                let contents = self.list_directory(&resolved.full)?;
                info!(
                    "Listed directory {} - {} entries",
                    resolved.display(),
                    contents.len()
                );
                Ok(PathContents::Dir {
                    full_path: resolved.display(),
                    contents,
                })
            }
            EntryKind::Other => Err(GatewayError::NotAFile(relative.to_string())),
        }
    }

    /// Lists a directory in the order the OS returns its entries
    fn list_directory(&self, dir: &Path) -> GatewayResult<Vec<DirectoryEntry>> {
        let mut entries = Vec::new();

        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            let item_path = dir.join(entry.file_name());

            match probe(&item_path) {
                Ok(Some(EntryKind::File(meta))) => entries.push(DirectoryEntry::File {
                    hidden: name.starts_with('.'),
                    full_path: item_path.to_string_lossy().into_owned(),
                    size: meta.len(),
                    owner: owner_name(&meta),
                    permissions: mode_string(&meta),
                    name,
                }),
                Ok(Some(EntryKind::Directory)) => entries.push(DirectoryEntry::Directory { name }),
                Ok(_) => debug!("Skipping special or dangling entry {}", item_path.display()),
                Err(e) => debug!("Skipping {}: {}", item_path.display(), e),
            }
        }

        Ok(entries)
    }

    /// Writes a new file `name` inside the directory at `relative`
    pub fn create_file(&self, relative: &str, name: &str, content: &str) -> GatewayResult<Message> {
        let (resolved, _) = self.resolve_existing(relative)?;
        let target = resolve_child(&resolved, name, self.enforce_containment)?;

        if let Some(EntryKind::File(_)) = probe(&target)? {
            return Err(GatewayError::FileExists(name.to_string()));
        }

        fs::write(&target, content)?;
        info!("Created file {} ({} bytes)", target.display(), content.len());
        Ok(Message::new(format!("File '{}' created", name)))
    }

    /// Creates directory `name` inside `relative`; parents are not created
    pub fn create_directory(&self, relative: &str, name: &str) -> GatewayResult<Message> {
        let (resolved, _) = self.resolve_existing(relative)?;
        let target = resolve_child(&resolved, name, self.enforce_containment)?;

        if let Some(EntryKind::Directory) = probe(&target)? {
            return Err(GatewayError::DirectoryExists(name.to_string()));
        }

        fs::create_dir(&target)?;
        info!("Created directory {}", target.display());
        Ok(Message::new(format!("Directory '{}' created", name)))
    }

    /// Replaces the whole content of the file at `relative`
    pub fn edit_file(&self, relative: &str, content: &str) -> GatewayResult<Message> {
        let (resolved, kind) = self.resolve_existing(relative)?;
        let EntryKind::File(_) = kind else {
            return Err(GatewayError::NotAFile(relative.to_string()));
        };

        fs::write(&resolved.full, content)?;
        info!(
            "Rewrote file {} ({} bytes)",
            resolved.display(),
            content.len()
        );
        Ok(Message::new(format!("File at path '{}' edited", relative)))
    }

    /// Renames the directory at `relative` to `name`
    pub fn edit_directory(&self, relative: &str, name: &str) -> GatewayResult<Message> {
        let (resolved, kind) = self.resolve_existing(relative)?;
        if !matches!(kind, EntryKind::Directory) {
            return Err(GatewayError::NotADirectory(relative.to_string()));
        }
        if resolved.is_root() {
            return Err(GatewayError::RootProtected(relative.to_string()));
        }

        let target = self.rename_target(&resolved, name)?;
        fs::rename(&resolved.full, &target)?;
        info!(
            "Renamed directory {} to {}",
            resolved.display(),
            target.display()
        );
        Ok(Message::new(format!(
            "Directory at path '{}' edited",
            relative
        )))
    }

    fn rename_target(&self, source: &ResolvedPath, name: &str) -> GatewayResult<PathBuf> {
        match self.rename_base {
            RenameBase::Root => {
                let root = self.resolve("")?;
                resolve_child(&root, name, self.enforce_containment)
            }
            RenameBase::Parent => {
                let relative = Path::new(strip_leading_slash(&source.relative));
                let parent = relative.parent().unwrap_or_else(|| Path::new(""));
                let target = parent.join(name);
                if self.enforce_containment && relative_depth(&target).is_none() {
                    return Err(GatewayError::PathEscapesRoot(name.to_string()));
                }
                Ok(self.root.join(target))
            }
        }
    }

    /// Removes the single file at `relative`
    pub fn delete_file(&self, relative: &str) -> GatewayResult<Message> {
        let (resolved, kind) = self.resolve_existing(relative)?;
        let EntryKind::File(_) = kind else {
            return Err(GatewayError::NotAFile(relative.to_string()));
        };

        fs::remove_file(&resolved.full)?;
        info!("Deleted file {}", resolved.display());
        Ok(Message::new(format!("File at path '{}' deleted", relative)))
    }

    /// Removes the directory at `relative` together with everything below it
    pub fn delete_directory(&self, relative: &str) -> GatewayResult<Message> {
        let (resolved, kind) = self.resolve_existing(relative)?;
        if !matches!(kind, EntryKind::Directory) {
            return Err(GatewayError::NotADirectory(relative.to_string()));
        }
        if resolved.is_root() {
            return Err(GatewayError::RootProtected(relative.to_string()));
        }

        fs::remove_dir_all(&resolved.full)?;
        info!("Deleted directory tree {}", resolved.display());
        Ok(Message::new(format!(
            "Directory at path '{}' deleted",
            relative
        )))
    }
}
