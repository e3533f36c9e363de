pub mod classifier;
pub mod framework_resolver;
pub mod import_resolver;
pub mod kotlin_parser;
pub mod lexer;
pub mod source_cache;
pub mod symbol_graph;
pub mod type_parser;

use crate::interface::output::Logger;
use crate::Result;
use std::path::Path;

use source_cache::SourceCache;
use symbol_graph::SymbolTable;

pub use classifier::classify;
pub use framework_resolver::{FrameworkResolver, ResolvedOrigins};
pub use import_resolver::WildcardImportResolver;
pub use symbol_graph::{AnnotatedSymbol, SymbolGraph};

/// Produces the symbol graph for a generation pass, either by scanning
/// Kotlin sources or by loading a pre-resolved document
pub struct SourceAnalyzer {
    source_cache: SourceCache,
    logger: Logger,
}

impl SourceAnalyzer {
    pub fn new(logger: Logger) -> Self {
        Self {
            source_cache: SourceCache::new(),
            logger,
        }
    }

    /// Scan every Kotlin file below `project_path`
    pub fn analyze_project(
        &mut self,
        project_path: &Path,
        exclude_patterns: &[String],
    ) -> Result<SymbolTable> {
        self.source_cache
            .parse_and_cache_all_files(project_path, exclude_patterns, &self.logger)?;
        let table = self.source_cache.to_symbol_table();
        self.logger.verbose(&format!(
            "Analyzed {} Kotlin file(s) in {}",
            table.files.len(),
            project_path.display()
        ));
        Ok(table)
    }

    /// Use a symbol graph resolved by an external front end
    pub fn load_symbol_graph(&self, path: &Path) -> Result<SymbolTable> {
        self.logger
            .verbose(&format!("Loading symbol graph from {}", path.display()));
        SymbolTable::from_file(path)
    }
}
