use crate::models::{FunctionDeclaration, SourceFile};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A declaration found by annotation, together with the file that contains it
#[derive(Debug, Clone, Copy)]
pub struct AnnotatedSymbol<'a> {
    pub file: &'a SourceFile,
    pub declaration: &'a FunctionDeclaration,
}

/// Read access to resolved declarations.
///
/// Implementors only have to expose their files in a stable order; lookup by
/// annotation is derived from that.
pub trait SymbolGraph {
    fn files(&self) -> &[SourceFile];

    /// Every top-level function carrying `marker`, files in graph order and
    /// functions in declaration order
    fn symbols_with_annotation(&self, marker: &str) -> Vec<AnnotatedSymbol<'_>> {
        self.files()
            .iter()
            .flat_map(|file| {
                file.functions
                    .iter()
                    .filter(|f| f.annotation(marker).is_some())
                    .map(move |declaration| AnnotatedSymbol { file, declaration })
            })
            .collect()
    }

    fn file(&self, path: &str) -> Option<&SourceFile> {
        self.files().iter().find(|f| f.path == path)
    }
}

/// In-memory symbol graph, either scanned from sources or loaded from a
/// pre-resolved JSON document
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SymbolTable {
    #[serde(default)]
    pub files: Vec<SourceFile>,
}

impl SymbolTable {
    pub fn new(files: Vec<SourceFile>) -> Self {
        Self { files }
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl SymbolGraph for SymbolTable {
    fn files(&self) -> &[SourceFile] {
        &self.files
    }
}
