#![allow(dead_code)]
/// Common test utilities and helpers
use compose_bridge::{generate_from_config, GenerateConfig, GenerationReport};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A Kotlin project in a temporary directory: sources under `src/`,
/// generated output under `out/kotlin` and `out/swift`
pub struct TestProject {
    pub temp_dir: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("src")).unwrap();
        Self { temp_dir }
    }

    /// Write a Kotlin source file relative to the source root
    pub fn write_source(&self, name: &str, content: &str) -> &Self {
        let file_path = self.source_root().join(name);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(file_path, content).unwrap();
        self
    }

    /// Write the module metadata document at its default location
    pub fn write_metadata(&self, json: &str) -> &Self {
        let path = self.source_root().join("build/compose-bridge/modules.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, json).unwrap();
        self
    }

    /// Write a file anywhere in the project and return its path
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    pub fn source_root(&self) -> PathBuf {
        self.temp_dir.path().join("src")
    }

    pub fn config(&self) -> GenerateConfig {
        GenerateConfig {
            project_path: path_string(&self.source_root()),
            kotlin_output_path: path_string(&self.temp_dir.path().join("out/kotlin")),
            swift_output_path: path_string(&self.temp_dir.path().join("out/swift")),
            ..Default::default()
        }
    }

    pub fn generate(&self) -> compose_bridge::Result<GenerationReport> {
        generate_from_config(&self.config())
    }

    pub fn generate_with(&self, config: &GenerateConfig) -> compose_bridge::Result<GenerationReport> {
        generate_from_config(config)
    }

    pub fn output(&self) -> TestOutput {
        TestOutput {
            kotlin_root: self.temp_dir.path().join("out/kotlin"),
            swift_root: self.temp_dir.path().join("out/swift"),
        }
    }
}

/// Reads what a generation pass wrote
pub struct TestOutput {
    pub kotlin_root: PathBuf,
    pub swift_root: PathBuf,
}

impl TestOutput {
    /// Read a Kotlin wrapper, e.g. `com/example/ScreenUIViewController.kt`
    pub fn read_kotlin(&self, relative: &str) -> String {
        fs::read_to_string(self.kotlin_root.join(relative)).unwrap()
    }

    pub fn read_swift(&self, file_name: &str) -> String {
        fs::read_to_string(self.swift_root.join(file_name)).unwrap()
    }

    pub fn kotlin_exists(&self, relative: &str) -> bool {
        self.kotlin_root.join(relative).exists()
    }

    pub fn swift_exists(&self, file_name: &str) -> bool {
        self.swift_root.join(file_name).exists()
    }

    /// Swift file names, sorted
    pub fn swift_files(&self) -> Vec<String> {
        list_files(&self.swift_root)
    }

    pub fn nothing_written(&self) -> bool {
        !self.kotlin_root.exists() && !self.swift_root.exists()
    }
}

fn list_files(root: &Path) -> Vec<String> {
    let mut names: Vec<String> = match fs::read_dir(root) {
        Ok(entries) => entries
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_file())
            .map(|e| e.file_name().to_string_lossy().to_string())
            .collect(),
        Err(_) => Vec::new(),
    };
    names.sort();
    names
}

pub fn path_string(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

/// Assert that generated content contains expected string
#[macro_export]
macro_rules! assert_generated_contains {
    ($content:expr, $expected:expr) => {
        assert!(
            $content.contains($expected),
            "Expected generated content to contain:\n{}\n\nBut got:\n{}",
            $expected,
            $content
        );
    };
}

/// Assert that generated content does NOT contain string
#[macro_export]
macro_rules! assert_generated_not_contains {
    ($content:expr, $unexpected:expr) => {
        assert!(
            !$content.contains($unexpected),
            "Expected generated content NOT to contain:\n{}\n\nBut got:\n{}",
            $unexpected,
            $content
        );
    };
}
