use crate::interface::output::Logger;
use crate::Result;
use indexmap::IndexSet;
use regex::Regex;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use walkdir::WalkDir;

fn package_directive() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?m)^\s*package\s+([A-Za-z_][\w.`]*)").expect("package directive pattern")
    })
}

/// Finds the packages declared below a source directory.
///
/// Results are cached per directory for the lifetime of the resolver, so
/// modules sharing a source root only scan it once.
#[derive(Debug)]
pub struct PackageNameResolver {
    cache: HashMap<PathBuf, Vec<String>>,
    logger: Logger,
}

impl PackageNameResolver {
    pub fn new(logger: Logger) -> Self {
        Self {
            cache: HashMap::new(),
            logger,
        }
    }

    /// Distinct packages of all `.kt` files below `directory`, in path order.
    /// A missing directory has no packages.
    pub fn packages_in(&mut self, directory: &Path) -> Result<Vec<String>> {
        if let Some(cached) = self.cache.get(directory) {
            return Ok(cached.clone());
        }

        let mut packages = IndexSet::new();
        if directory.is_dir() {
            for entry in WalkDir::new(directory).sort_by_file_name() {
                let entry = entry?;
                let path = entry.path();
                if !path.is_file() || !path.extension().is_some_and(|ext| ext == "kt") {
                    continue;
                }
                let content = std::fs::read_to_string(path)?;
                if let Some(package) = self.package_of(&content) {
                    packages.insert(package);
                }
            }
        } else {
            self.logger.warning(&format!(
                "Source directory does not exist: {}",
                directory.display()
            ));
        }

        let packages: Vec<String> = packages.into_iter().collect();
        self.logger.verbose(&format!(
            "Resolved {} package(s) in {}",
            packages.len(),
            directory.display()
        ));
        self.cache.insert(directory.to_path_buf(), packages.clone());
        Ok(packages)
    }

    /// The `package` directive of one file, backticks removed
    pub fn package_of(&self, content: &str) -> Option<String> {
        package_directive()
            .captures(content)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().replace('`', ""))
    }
}
