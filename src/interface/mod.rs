pub mod cli;
pub mod config;
pub mod output;

use crate::build::{BuildSystem, GenerationReport};

pub use cli::*;
pub use config::*;
pub use output::*;

/// Run one generation pass from configuration
pub fn generate_from_config(config: &config::GenerateConfig) -> crate::Result<GenerationReport> {
    let logger = output::Logger::new(config.is_verbose(), config.is_debug());

    if config.is_verbose() {
        match &config.symbol_graph_path {
            Some(graph) => logger.info(&format!("🔍 Using symbol graph: {}", graph)),
            None => logger.info(&format!(
                "🔍 Scanning Kotlin sources in: {}",
                config.project_path
            )),
        }
    }

    let report = BuildSystem::new(logger.clone()).run_generation(config)?;

    if report.functions.is_empty() {
        logger.warning(
            "No @ComposeUIViewController functions found. Annotate a @Composable function to generate a bridge.",
        );
    } else if config.is_verbose() {
        logger.info(&format!(
            "✅ Generated {} file(s) for {} function(s):",
            report.written.len(),
            report.functions.len()
        ));
        for function in &report.functions {
            logger.verbose(&format!("  - {}", function));
        }
    }

    Ok(report)
}
