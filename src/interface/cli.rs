use crate::interface::config::GenerateConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "compose-bridge")]
#[command(about = "Generate UIKit view controllers and SwiftUI representables for Compose functions")]
pub struct BridgeCli {
    #[command(subcommand)]
    pub command: BridgeCommands,
}

#[derive(Subcommand)]
pub enum BridgeCommands {
    /// Generate bridges for every @ComposeUIViewController function
    Generate {
        /// Kotlin source root to scan (default: ./src)
        #[arg(short = 'p', long = "project-path", default_value = "./src")]
        project_path: PathBuf,

        /// Pre-resolved symbol graph JSON; replaces source scanning
        #[arg(short = 'g', long = "symbol-graph")]
        symbol_graph: Option<PathBuf>,

        /// Output root for Kotlin wrappers
        #[arg(
            short = 'k',
            long = "kotlin-output",
            default_value = "./build/generated/compose-bridge/kotlin"
        )]
        kotlin_output: PathBuf,

        /// Output root for Swift files
        #[arg(
            short = 's',
            long = "swift-output",
            default_value = "./build/generated/compose-bridge/swift"
        )]
        swift_output: PathBuf,

        /// Module metadata document
        #[arg(short = 'm', long = "metadata")]
        metadata: Option<PathBuf>,

        /// Path fragment to skip while scanning (repeatable)
        #[arg(short = 'e', long = "exclude")]
        exclude: Vec<String>,

        /// Keep generated files the current pass no longer produces
        #[arg(long, action = clap::ArgAction::SetTrue)]
        no_clean: bool,

        /// Verbose output
        #[arg(long, action = clap::ArgAction::SetTrue)]
        verbose: bool,

        /// Debug output: origin resolution and skipped metadata
        #[arg(long, action = clap::ArgAction::SetTrue)]
        debug: bool,

        /// Configuration file path
        #[arg(short = 'c', long = "config")]
        config_file: Option<PathBuf>,
    },
    /// Write a configuration file with default settings
    Init {
        /// Kotlin source root to scan (default: ./src)
        #[arg(short = 'p', long = "project-path", default_value = "./src")]
        project_path: PathBuf,

        /// Output path for configuration file
        #[arg(short = 'o', long = "output", default_value = "compose-bridge.json")]
        output_path: PathBuf,

        /// Force overwrite existing configuration
        #[arg(long, action = clap::ArgAction::SetTrue)]
        force: bool,
    },
    /// Print the Swift spelling of a Kotlin type
    MapType {
        /// Kotlin type, e.g. `List<Int>?`
        type_name: String,

        /// Map for a module with Swift export enabled
        #[arg(long, action = clap::ArgAction::SetTrue)]
        swift_export: bool,
    },
}

/// Flags that were not given stay unset so a config file can supply them
impl From<&BridgeCommands> for GenerateConfig {
    fn from(cmd: &BridgeCommands) -> Self {
        match cmd {
            BridgeCommands::Generate {
                project_path,
                symbol_graph,
                kotlin_output,
                swift_output,
                metadata,
                exclude,
                no_clean,
                verbose,
                debug,
                ..
            } => GenerateConfig {
                project_path: project_path.to_string_lossy().to_string(),
                symbol_graph_path: symbol_graph.as_ref().map(|p| p.to_string_lossy().to_string()),
                kotlin_output_path: kotlin_output.to_string_lossy().to_string(),
                swift_output_path: swift_output.to_string_lossy().to_string(),
                metadata_path: metadata.as_ref().map(|p| p.to_string_lossy().to_string()),
                verbose: verbose.then_some(true),
                debug: debug.then_some(true),
                clean_stale_files: no_clean.then_some(false),
                exclude_patterns: (!exclude.is_empty()).then(|| exclude.clone()),
            },
            BridgeCommands::Init { project_path, .. } => GenerateConfig {
                project_path: project_path.to_string_lossy().to_string(),
                ..Default::default()
            },
            BridgeCommands::MapType { .. } => GenerateConfig::default(),
        }
    }
}
