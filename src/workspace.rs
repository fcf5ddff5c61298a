//! Workspace File Store — flat-namespace CRUD confined to one directory.
//!
//! Every operation returns a human-readable status string and never lets an
//! error escape; callers (the tools) relay the string to the model as-is.

use std::io;
use std::path::{Component, Path, PathBuf};

/// Errors from path sanitization and file operations.
#[derive(Debug, thiserror::Error)]
pub enum WorkspaceError {
    #[error("Invalid filename provided")]
    InvalidName,

    #[error("Path traversal detected. Access denied.")]
    Traversal,

    #[error("{0}")]
    Io(#[from] io::Error),
}

/// A single directory to which all file operations are confined.
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    /// Open a workspace, creating the directory if absent. Idempotent.
    pub async fn open(root: impl AsRef<Path>) -> io::Result<Self> {
        tokio::fs::create_dir_all(root.as_ref()).await?;
        let root = tokio::fs::canonicalize(root.as_ref()).await?;
        Ok(Self { root })
    }

    /// Absolute workspace root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a caller-supplied filename to a path inside the root.
    ///
    /// Two stages: strip `..` substrings and separator characters (best-effort
    /// pre-filter, intentionally permissive — `a/b` becomes `ab`), then verify
    /// the resolved path's offset from the root holds no parent-directory
    /// component. The verification is the authoritative boundary.
    fn safe_path(&self, filename: &str) -> Result<PathBuf, WorkspaceError> {
        let sanitized = sanitize(filename)?;
        let full = self.root.join(&sanitized);

        let relative = full
            .strip_prefix(&self.root)
            .map_err(|_| WorkspaceError::Traversal)?;
        if relative
            .components()
            .any(|c| matches!(c, Component::ParentDir))
        {
            return Err(WorkspaceError::Traversal);
        }

        Ok(full)
    }

    /// Write `content` to the file, overwriting if present.
    pub async fn create(&self, filename: &str, content: &str) -> String {
        match self.try_create(filename, content).await {
            Ok(()) => format!("File '{filename}' created successfully."),
            Err(e) => format!("Error creating file '{filename}': {e}"),
        }
    }

    async fn try_create(&self, filename: &str, content: &str) -> Result<(), WorkspaceError> {
        let path = self.safe_path(filename)?;
        tokio::fs::write(&path, content).await?;
        Ok(())
    }

    /// Read the file as text.
    pub async fn read(&self, filename: &str) -> String {
        match self.try_read(filename).await {
            Ok(content) => format!("Content of '{filename}':\n{content}"),
            Err(e) => format!("Error reading file '{filename}': {e}"),
        }
    }

    async fn try_read(&self, filename: &str) -> Result<String, WorkspaceError> {
        let path = self.safe_path(filename)?;
        Ok(tokio::fs::read_to_string(&path).await?)
    }

    /// Overwrite an existing file. Fails if the file is absent.
    pub async fn update(&self, filename: &str, content: &str) -> String {
        match self.try_update(filename, content).await {
            Ok(()) => format!("File '{filename}' updated successfully."),
            Err(e) => format!("Error updating file '{filename}': {e}"),
        }
    }

    async fn try_update(&self, filename: &str, content: &str) -> Result<(), WorkspaceError> {
        let path = self.safe_path(filename)?;
        tokio::fs::metadata(&path).await?;
        tokio::fs::write(&path, content).await?;
        Ok(())
    }

    /// Remove the file.
    pub async fn delete(&self, filename: &str) -> String {
        match self.try_delete(filename).await {
            Ok(()) => format!("File '{filename}' deleted successfully."),
            Err(e) => format!("Error deleting file '{filename}': {e}"),
        }
    }

    async fn try_delete(&self, filename: &str) -> Result<(), WorkspaceError> {
        let path = self.safe_path(filename)?;
        tokio::fs::remove_file(&path).await?;
        Ok(())
    }

    /// Enumerate entries directly inside the root (non-recursive).
    pub async fn list(&self) -> String {
        match self.try_list().await {
            Ok(names) if names.is_empty() => "No files found in the workspace.".to_string(),
            Ok(names) => {
                let mut out = String::from("Files in workspace:");
                for name in names {
                    out.push_str("\n- ");
                    out.push_str(&name);
                }
                out
            }
            Err(e) => format!("Error listing files: {e}"),
        }
    }

    async fn try_list(&self) -> Result<Vec<String>, WorkspaceError> {
        let mut entries = tokio::fs::read_dir(&self.root).await?;
        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }
}

/// Strip every `..` substring and every path separator from a filename.
fn sanitize(filename: &str) -> Result<String, WorkspaceError> {
    let stripped = filename.replace("..", "");
    let sanitized: String = stripped.chars().filter(|c| !matches!(c, '/' | '\\')).collect();

    if sanitized.trim().is_empty() {
        return Err(WorkspaceError::InvalidName);
    }

    Ok(sanitized)
}
