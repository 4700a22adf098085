//! File scanning for playable files

use crate::{PlaylistError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extensions picked up when none are configured
pub const DEFAULT_EXTENSIONS: &[&str] = &["mp3", "flac", "ogg", "wav", "aac", "m4a", "opus"];

/// Scanner for playable files in a directory
#[derive(Debug, Clone)]
pub struct FileScanner {
    /// Lowercase extensions without the leading dot
    extensions: Vec<String>,

    /// Whether to descend into subdirectories
    recursive: bool,

    /// Whether to follow symbolic links
    follow_links: bool,
}

impl Default for FileScanner {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
            recursive: false,
            follow_links: false,
        }
    }
}

impl FileScanner {
    /// Create a new file scanner
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the accepted extensions
    ///
    /// `".MP3"`, `"mp3"` and `"Mp3"` are the same extension.
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|ext| normalize_extension(ext.as_ref()))
            .filter(|ext| !ext.is_empty())
            .collect();
        self
    }

    /// Set whether to scan subdirectories
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Set whether to follow symbolic links
    pub fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Accepted extensions
    pub fn accepted_extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Scan a directory for playable files
    ///
    /// # Returns
    ///
    /// Matching regular files, sorted by path
    pub fn scan_directory(&self, path: &Path) -> Result<Vec<PathBuf>> {
        if !path.exists() {
            return Err(PlaylistError::FileNotFound(path.display().to_string()));
        }

        if !path.is_dir() {
            return Err(PlaylistError::InvalidPath(format!(
                "{} is not a directory",
                path.display()
            )));
        }

        let mut walker = WalkDir::new(path)
            .follow_links(self.follow_links)
            .min_depth(1);

        if !self.recursive {
            walker = walker.max_depth(1);
        }

        let mut files = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry under {}: {}", path.display(), e);
                    continue;
                }
            };

            let path = entry.path();
            if path.is_file() && self.matches(path) {
                files.push(path.to_path_buf());
            }
        }

        files.sort();
        tracing::debug!("Found {} playable files in {}", files.len(), path.display());

        Ok(files)
    }

    /// Check if a path has one of the accepted extensions
    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                let ext = ext.to_lowercase();
                self.extensions.iter().any(|accepted| *accepted == ext)
            })
            .unwrap_or(false)
    }
}

fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_lowercase()
}
