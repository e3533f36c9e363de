use crate::build::package_resolver::PackageNameResolver;
use crate::{Error, Result};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One build module as described by the build orchestration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ModuleMetadata {
    pub name: String,
    #[serde(default)]
    pub package_names: IndexSet<String>,
    #[serde(default)]
    pub framework_base_name: String,
    #[serde(default)]
    pub swift_export_enabled: bool,
    #[serde(default)]
    pub flatten_package_configured: bool,
    /// Source roots whose `package` directives extend `package_names`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub source_directories: Vec<PathBuf>,
}

impl ModuleMetadata {
    /// Framework name with any `:`-separated project prefix removed
    pub fn framework_name(&self) -> &str {
        strip_framework_prefix(&self.framework_base_name)
    }

    pub fn owns_package(&self, package: &str) -> bool {
        self.package_names.contains(package)
    }

    /// Types of this module are reachable from Swift only through an alias
    pub fn needs_type_aliases(&self) -> bool {
        self.swift_export_enabled && !self.flatten_package_configured
    }
}

/// `":shared:SharedKit"` and `"SharedKit"` both name the `SharedKit` framework
pub fn strip_framework_prefix(name: &str) -> &str {
    let name = name.trim();
    match name.rfind(':') {
        Some(index) => &name[index + 1..],
        None => name,
    }
}

/// Read-only snapshot of all module records for one generation pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModuleMetadataIndex {
    modules: Vec<ModuleMetadata>,
}

impl ModuleMetadataIndex {
    pub fn new(modules: Vec<ModuleMetadata>) -> Self {
        Self { modules }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let modules: Vec<ModuleMetadata> = serde_json::from_str(content).map_err(|e| {
            Error::Configuration(format!("Invalid module metadata document: {}", e))
        })?;
        Ok(Self::new(modules))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Configuration(format!(
                "Failed to read module metadata {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json(&content)
    }

    /// Load the document if it exists, otherwise start from an empty snapshot
    pub fn load_or_empty<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::empty())
        }
    }

    /// The first module, in document order, that owns `package`
    pub fn module_for_package(&self, package: &str) -> Option<&ModuleMetadata> {
        if package.is_empty() {
            return None;
        }
        self.modules.iter().find(|m| m.owns_package(package))
    }

    /// Add the packages declared under each module's source directories
    pub fn resolve_source_packages(&mut self, resolver: &mut PackageNameResolver) -> Result<()> {
        for module in &mut self.modules {
            for directory in &module.source_directories {
                for package in resolver.packages_in(directory)? {
                    module.package_names.insert(package);
                }
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}
