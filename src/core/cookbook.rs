//! Cookbook discovery and copying.
//!
//! A cookbook is any file under the repository directory whose name ends with
//! the configured extension. Its name is the file name with that extension
//! stripped.
//!
//! Names are not unique across subdirectories: `a/foo.toml` and `b/foo.toml`
//! both list as `foo`. Resolving `foo` picks `<root>/foo.toml` if it exists,
//! otherwise the first match in sorted path order (`a/foo.toml` here).

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::config::RepositoryConfig;
use crate::error::{MicooError, MicooResult};

/// A cookbook resolved to its backing file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cookbook {
    /// Cookbook name (file name without the extension)
    pub name: String,

    /// Path of the backing file
    pub path: PathBuf,
}

impl Cookbook {
    /// Read the raw cookbook content.
    pub fn read(&self) -> MicooResult<Vec<u8>> {
        fs::read(&self.path).map_err(|e| MicooError::io(&self.path, e))
    }

    /// Copy the cookbook verbatim to `dest`, creating missing parent
    /// directories and overwriting any existing file.
    ///
    /// Returns the number of bytes written.
    pub fn write_to(&self, dest: &Path) -> MicooResult<usize> {
        let content = self.read()?;

        if let Some(parent) = dest.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| MicooError::io(parent, e))?;
            }
        }

        fs::write(dest, &content).map_err(|e| MicooError::io(dest, e))?;
        Ok(content.len())
    }
}

/// The local directory holding cookbook files.
///
/// Read-only from micoo's point of view; populating it is someone else's job.
#[derive(Debug, Clone)]
pub struct Repository {
    root: PathBuf,
    extension: String,
}

impl Repository {
    /// Create a repository view over `root` matching files ending in `extension`.
    pub fn new(root: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self { root: root.into(), extension: extension.into() }
    }

    /// Create a repository view from configuration.
    pub fn from_config(config: &RepositoryConfig) -> Self {
        Self::new(&config.path, &config.file_extension)
    }

    /// Repository directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether the repository directory exists.
    pub fn exists(&self) -> bool {
        self.root.is_dir()
    }

    /// List cookbook names, sorted lexicographically.
    ///
    /// Scans recursively. A missing directory yields an empty list. Files whose
    /// names are not valid UTF-8 are skipped (logged at debug level).
    pub fn list(&self) -> Vec<String> {
        if !self.exists() {
            return Vec::new();
        }

        let mut names: Vec<String> = WalkDir::new(&self.root)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| match entry.file_name().to_str() {
                Some(file_name) => self.name_of(file_name),
                None => {
                    tracing::debug!(path = %entry.path().display(), "skipping non UTF-8 file name");
                    None
                }
            })
            .collect();

        names.sort();
        tracing::debug!(count = names.len(), root = %self.root.display(), "listed cookbooks");
        names
    }

    fn name_of(&self, file_name: &str) -> Option<String> {
        file_name
            .strip_suffix(self.extension.as_str())
            .filter(|name| !name.is_empty())
            .map(str::to_string)
    }

    /// Path a cookbook with this name has at the top of the repository.
    pub fn cookbook_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}{}", self.extension))
    }

    /// Resolve a cookbook by name.
    ///
    /// The top-level file wins. Cookbooks that only exist in a subdirectory are
    /// found by a recursive search, first match in sorted path order. Other
    /// files listed under the same name are never selected.
    pub fn find(&self, name: &str) -> MicooResult<Cookbook> {
        validate_name(name)?;

        let direct = self.cookbook_path(name);
        if direct.is_file() {
            return Ok(Cookbook { name: name.to_string(), path: direct });
        }

        let file_name = format!("{name}{}", self.extension);
        let nested = if self.exists() {
            WalkDir::new(&self.root)
                .sort_by_file_name()
                .into_iter()
                .filter_map(Result::ok)
                .find(|entry| entry.file_name() == file_name.as_str() && entry.path().is_file())
                .map(walkdir::DirEntry::into_path)
        } else {
            None
        };

        nested
            .map(|path| Cookbook { name: name.to_string(), path })
            .ok_or_else(|| MicooError::CookbookNotFound { name: name.to_string(), path: direct })
    }
}

/// Check that a cookbook name cannot escape the repository directory.
pub fn validate_name(name: &str) -> MicooResult<()> {
    let invalid = name.trim().is_empty()
        || name.contains('/')
        || name.contains('\\')
        || name == "..";

    if invalid {
        return Err(MicooError::InvalidCookbookName(name.to_string()));
    }
    Ok(())
}
