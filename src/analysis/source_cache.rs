use crate::analysis::kotlin_parser::KotlinSourceParser;
use crate::analysis::symbol_graph::SymbolTable;
use crate::interface::output::Logger;
use crate::models::SourceFile;
use crate::Result;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Directories that never hold hand-written sources
const SKIPPED_DIRECTORIES: &[&str] = &["build", ".gradle", ".git", ".idea"];

/// Parsed Kotlin files keyed by path. Iteration is in path order, so every
/// pass sees the files in the same sequence.
#[derive(Debug, Default)]
pub struct SourceCache {
    cache: BTreeMap<PathBuf, SourceFile>,
    parser: KotlinSourceParser,
}

impl SourceCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and cache all Kotlin files below `project_path`
    pub fn parse_and_cache_all_files(
        &mut self,
        project_path: &Path,
        exclude_patterns: &[String],
        logger: &Logger,
    ) -> Result<()> {
        logger.verbose(&format!(
            "Scanning Kotlin sources in: {}",
            project_path.display()
        ));

        let walker = WalkDir::new(project_path)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !is_skipped(entry, exclude_patterns));

        for entry in walker {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() || !path.extension().is_some_and(|ext| ext == "kt") {
                continue;
            }
            if self.cache.contains_key(path) {
                continue;
            }

            logger.verbose(&format!("Parsing file: {}", path.display()));
            self.parse_and_cache_file(path)?;
        }

        logger.debug(&format!("Cached {} Kotlin files", self.cache.len()));
        Ok(())
    }

    /// Parse a single file and add it to the cache
    pub fn parse_and_cache_file(&mut self, path: &Path) -> Result<()> {
        let content = std::fs::read_to_string(path)?;
        let parsed = self
            .parser
            .parse(&path.to_string_lossy(), &content)?;
        self.cache.insert(path.to_path_buf(), parsed);
        Ok(())
    }

    /// Snapshot of the cached files as a symbol graph
    pub fn to_symbol_table(&self) -> SymbolTable {
        SymbolTable::new(self.cache.values().cloned().collect())
    }
}

fn is_skipped(entry: &DirEntry, exclude_patterns: &[String]) -> bool {
    // Never filter the walk root itself
    if entry.depth() == 0 {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    if entry.file_type().is_dir() && SKIPPED_DIRECTORIES.contains(&name.as_ref()) {
        return true;
    }
    let path = entry.path().to_string_lossy();
    exclude_patterns
        .iter()
        .any(|pattern| !pattern.is_empty() && path.contains(pattern.as_str()))
}
