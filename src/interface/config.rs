use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Metadata location used when none is configured, relative to the project path
pub const DEFAULT_METADATA_PATH: &str = "build/compose-bridge/modules.json";

/// File written by `compose-bridge init`
pub const DEFAULT_CONFIG_FILE: &str = "compose-bridge.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Module metadata not found at {0}")]
    MissingMetadata(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateConfig {
    /// Root of the Kotlin sources to scan
    #[serde(default = "default_project_path")]
    pub project_path: String,

    /// Pre-resolved symbol graph; replaces source scanning when set
    #[serde(default)]
    pub symbol_graph_path: Option<String>,

    /// Output root for generated Kotlin wrappers
    #[serde(default = "default_kotlin_output_path")]
    pub kotlin_output_path: String,

    /// Output root for generated Swift files
    #[serde(default = "default_swift_output_path")]
    pub swift_output_path: String,

    /// Module metadata document. Must exist when set explicitly.
    #[serde(default)]
    pub metadata_path: Option<String>,

    #[serde(default)]
    pub verbose: Option<bool>,

    /// Log resolution details without the per-file verbose output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<bool>,

    /// Remove generated files the current pass no longer produces
    #[serde(default)]
    pub clean_stale_files: Option<bool>,

    /// Path fragments excluded from source scanning
    #[serde(default)]
    pub exclude_patterns: Option<Vec<String>>,
}

fn default_project_path() -> String {
    "./src".to_string()
}

fn default_kotlin_output_path() -> String {
    "./build/generated/compose-bridge/kotlin".to_string()
}

fn default_swift_output_path() -> String {
    "./build/generated/compose-bridge/swift".to_string()
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            project_path: default_project_path(),
            symbol_graph_path: None,
            kotlin_output_path: default_kotlin_output_path(),
            swift_output_path: default_swift_output_path(),
            metadata_path: None,
            verbose: Some(false),
            debug: None,
            clean_stale_files: Some(true),
            exclude_patterns: None,
        }
    }
}

impl GenerateConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate a configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match &self.symbol_graph_path {
            Some(graph) if !Path::new(graph).is_file() => {
                return Err(ConfigError::InvalidConfig(format!(
                    "Symbol graph does not exist: {}",
                    graph
                )));
            }
            Some(_) => {}
            None => {
                if !Path::new(&self.project_path).exists() {
                    return Err(ConfigError::InvalidConfig(format!(
                        "Project path does not exist: {}",
                        self.project_path
                    )));
                }
            }
        }

        if let Some(metadata) = &self.metadata_path {
            if !Path::new(metadata).is_file() {
                return Err(ConfigError::MissingMetadata(metadata.clone()));
            }
        }

        if self.kotlin_output_path.trim().is_empty() || self.swift_output_path.trim().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "Output paths must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Merge with another configuration, with other taking precedence
    pub fn merge(&mut self, other: &GenerateConfig) {
        if other.project_path != default_project_path() {
            self.project_path = other.project_path.clone();
        }
        if other.symbol_graph_path.is_some() {
            self.symbol_graph_path = other.symbol_graph_path.clone();
        }
        if other.kotlin_output_path != default_kotlin_output_path() {
            self.kotlin_output_path = other.kotlin_output_path.clone();
        }
        if other.swift_output_path != default_swift_output_path() {
            self.swift_output_path = other.swift_output_path.clone();
        }
        if other.metadata_path.is_some() {
            self.metadata_path = other.metadata_path.clone();
        }
        if other.verbose.is_some() {
            self.verbose = other.verbose;
        }
        if other.debug.is_some() {
            self.debug = other.debug;
        }
        if other.clean_stale_files.is_some() {
            self.clean_stale_files = other.clean_stale_files;
        }
        if other.exclude_patterns.is_some() {
            self.exclude_patterns = other.exclude_patterns.clone();
        }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose.unwrap_or(false)
    }

    pub fn is_debug(&self) -> bool {
        self.debug.unwrap_or(false)
    }

    pub fn should_clean_stale_files(&self) -> bool {
        self.clean_stale_files.unwrap_or(true)
    }

    pub fn exclude_patterns(&self) -> &[String] {
        self.exclude_patterns.as_deref().unwrap_or(&[])
    }

    /// Explicit metadata path, else the default location under the project
    pub fn resolved_metadata_path(&self) -> PathBuf {
        match &self.metadata_path {
            Some(path) => PathBuf::from(path),
            None => Path::new(&self.project_path).join(DEFAULT_METADATA_PATH),
        }
    }

    pub fn has_explicit_metadata(&self) -> bool {
        self.metadata_path.is_some()
    }
}
