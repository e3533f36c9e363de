pub mod module_metadata;
pub mod output_manager;
pub mod package_resolver;

use crate::analysis::symbol_graph::SymbolTable;
use crate::analysis::SourceAnalyzer;
use crate::generators::base::FileWriter;
use crate::interface::config::GenerateConfig;
use crate::interface::output::{Logger, ProgressReporter};
use crate::processor::BridgeProcessor;
use crate::Result;
use std::path::{Path, PathBuf};

pub use module_metadata::*;
pub use output_manager::*;
pub use package_resolver::*;

/// What one generation pass produced
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GenerationReport {
    /// Qualified names of the bridged functions
    pub functions: Vec<String>,
    pub written: Vec<PathBuf>,
    /// Stale generated files removed after writing
    pub removed: Vec<PathBuf>,
}

/// Runs one generation pass: metadata, symbol graph, render, write, clean up
pub struct BuildSystem {
    logger: Logger,
}

impl BuildSystem {
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }

    pub fn run_generation(&self, config: &GenerateConfig) -> Result<GenerationReport> {
        config.validate()?;
        let total_steps = if config.should_clean_stale_files() { 5 } else { 4 };
        let mut reporter = ProgressReporter::new(self.logger.clone(), total_steps);

        reporter.start_step("Loading module metadata");
        let metadata = track(&mut reporter, self.load_metadata(config))?;
        reporter.complete_step(Some(&format!("{} module(s)", metadata.len())));

        reporter.start_step("Building symbol graph");
        let graph = track(&mut reporter, self.build_symbol_graph(config))?;
        reporter.complete_step(Some(&format!("{} source file(s)", graph.files.len())));

        reporter.start_step("Generating bridges");
        let processor = track(&mut reporter, BridgeProcessor::new(&metadata, &self.logger))?;
        let output = track(&mut reporter, processor.process(&graph))?;
        reporter.complete_step(Some(&format!(
            "{} function(s), {} artifact(s)",
            output.functions.len(),
            output.artifacts.len()
        )));

        reporter.start_step("Writing output");
        let mut writer = FileWriter::new(&config.kotlin_output_path, &config.swift_output_path);
        track(&mut reporter, writer.check_unique(&output.artifacts))?;
        let managers = [
            OutputManager::new(&config.kotlin_output_path),
            OutputManager::new(&config.swift_output_path),
        ];
        for manager in &managers {
            track(
                &mut reporter,
                manager.prepare_output_directory().map_err(Into::into),
            )?;
        }
        let written = track(&mut reporter, writer.write_all(&output.artifacts))?;
        for path in &written {
            reporter.update_progress(&format!("  📄 {}", path.display()));
        }
        reporter.complete_step(None);

        let mut removed = Vec::new();
        if config.should_clean_stale_files() {
            reporter.start_step("Cleaning stale files");
            for manager in &managers {
                let stale = track(
                    &mut reporter,
                    manager.cleanup_stale_files(&written).map_err(Into::into),
                )?;
                removed.extend(stale);
            }
            reporter.complete_step(Some(&format!("{} removed", removed.len())));
        }

        reporter.finish(&format!(
            "Generated {} file(s) for {} function(s)",
            written.len(),
            output.functions.len()
        ));

        Ok(GenerationReport {
            functions: output.functions,
            written,
            removed,
        })
    }

    /// An explicitly configured document must load; the default location
    /// may be absent
    fn load_metadata(&self, config: &GenerateConfig) -> Result<ModuleMetadataIndex> {
        let path = config.resolved_metadata_path();
        let mut metadata = if config.has_explicit_metadata() {
            ModuleMetadataIndex::load(&path)?
        } else {
            if !path.exists() {
                self.logger.debug(&format!(
                    "No module metadata at {}, using annotation framework names only",
                    path.display()
                ));
            }
            ModuleMetadataIndex::load_or_empty(&path)?
        };

        let mut resolver = PackageNameResolver::new(self.logger.clone());
        metadata.resolve_source_packages(&mut resolver)?;
        Ok(metadata)
    }

    fn build_symbol_graph(&self, config: &GenerateConfig) -> Result<SymbolTable> {
        let mut analyzer = SourceAnalyzer::new(self.logger.clone());
        match &config.symbol_graph_path {
            Some(path) => analyzer.load_symbol_graph(Path::new(path)),
            None => analyzer.analyze_project(Path::new(&config.project_path), config.exclude_patterns()),
        }
    }
}

fn track<T>(reporter: &mut ProgressReporter, result: Result<T>) -> Result<T> {
    if let Err(e) = &result {
        reporter.fail_step(&e.to_string());
    }
    result
}
