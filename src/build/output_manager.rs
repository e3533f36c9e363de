use crate::generators::base::templates::is_generated;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Permission denied: {0}")]
    PermissionDenied(String),
    #[error("Output path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

/// Owns one output tree: prepares it and removes generated files that a
/// pass no longer produces
pub struct OutputManager {
    output_dir: PathBuf,
}

impl OutputManager {
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// Create the output directory unless it exists
    pub fn prepare_output_directory(&self) -> Result<(), OutputError> {
        if self.output_dir.exists() && !self.output_dir.is_dir() {
            return Err(OutputError::NotADirectory(self.output_dir.clone()));
        }
        fs::create_dir_all(&self.output_dir).map_err(|e| {
            OutputError::PermissionDenied(format!(
                "Cannot create output directory {}: {}",
                self.output_dir.display(),
                e
            ))
        })
    }

    /// Remove generated files below the output directory that are not in
    /// `current_files`. Only files starting with the generated header are touched.
    pub fn cleanup_stale_files(&self, current_files: &[PathBuf]) -> Result<Vec<PathBuf>, OutputError> {
        let mut removed = Vec::new();
        if !self.output_dir.exists() {
            return Ok(removed);
        }

        let current: HashSet<&Path> = current_files.iter().map(|p| p.as_path()).collect();
        for entry in WalkDir::new(&self.output_dir).sort_by_file_name() {
            let entry = entry.map_err(|e| OutputError::Io(e.into()))?;
            let path = entry.path();
            if !path.is_file() || current.contains(path) || !self.is_generated_file(path)? {
                continue;
            }
            fs::remove_file(path)?;
            removed.push(path.to_path_buf());
        }

        Ok(removed)
    }

    fn is_generated_file(&self, path: &Path) -> Result<bool, OutputError> {
        let is_source = path
            .extension()
            .is_some_and(|ext| ext == "kt" || ext == "swift");
        if !is_source {
            return Ok(false);
        }
        // Non-UTF-8 content cannot be one of ours
        match fs::read_to_string(path) {
            Ok(content) => Ok(is_generated(&content)),
            Err(e) if e.kind() == std::io::ErrorKind::InvalidData => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
