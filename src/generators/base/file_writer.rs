use crate::models::{ArtifactLanguage, GeneratedArtifact};
use crate::{Error, Result};
use indexmap::IndexSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes rendered artifacts below one output root per language
pub struct FileWriter {
    kotlin_root: PathBuf,
    swift_root: PathBuf,
    generated_files: IndexSet<PathBuf>,
}

impl FileWriter {
    pub fn new<K: AsRef<Path>, S: AsRef<Path>>(kotlin_root: K, swift_root: S) -> Self {
        Self {
            kotlin_root: kotlin_root.as_ref().to_path_buf(),
            swift_root: swift_root.as_ref().to_path_buf(),
            generated_files: IndexSet::new(),
        }
    }

    /// Full output path of an artifact
    pub fn path_for(&self, artifact: &GeneratedArtifact) -> PathBuf {
        let root = match artifact.language {
            ArtifactLanguage::Kotlin => &self.kotlin_root,
            ArtifactLanguage::Swift => &self.swift_root,
        };
        let mut path = root.clone();
        for segment in artifact.directory.split('/').filter(|s| !s.is_empty()) {
            path.push(segment);
        }
        path.push(&artifact.file_name);
        path
    }

    /// Fail if two artifacts, or an artifact and an earlier write, share a path
    pub fn check_unique(&self, artifacts: &[GeneratedArtifact]) -> Result<()> {
        let mut seen: IndexSet<PathBuf> = IndexSet::new();
        for artifact in artifacts {
            let path = self.path_for(artifact);
            if self.generated_files.contains(&path) || !seen.insert(path.clone()) {
                return Err(Error::DuplicateArtifact(path.display().to_string()));
            }
        }
        Ok(())
    }

    /// Write one artifact, creating parent directories as needed
    pub fn write_artifact(&mut self, artifact: &GeneratedArtifact) -> Result<PathBuf> {
        let path = self.path_for(artifact);
        if self.generated_files.contains(&path) {
            return Err(Error::DuplicateArtifact(path.display().to_string()));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, &artifact.content)?;
        self.generated_files.insert(path.clone());
        Ok(path)
    }

    /// Write a batch after checking that no path repeats
    pub fn write_all(&mut self, artifacts: &[GeneratedArtifact]) -> Result<Vec<PathBuf>> {
        self.check_unique(artifacts)?;
        artifacts.iter().map(|a| self.write_artifact(a)).collect()
    }
}
