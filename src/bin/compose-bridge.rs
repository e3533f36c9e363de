use clap::Parser;
use compose_bridge::generators::map_type_name;
use compose_bridge::interface::cli::{BridgeCli, BridgeCommands};
use compose_bridge::interface::config::GenerateConfig;
use compose_bridge::interface::output::{print_generation_summary, Logger};
use compose_bridge::{generate_from_config, MappingProfile};
use std::path::Path;
use std::process;

fn main() {
    let cli = BridgeCli::parse();

    let result = match &cli.command {
        cmd @ BridgeCommands::Generate { config_file, .. } => {
            run_generate(GenerateConfig::from(cmd), config_file.as_deref())
        }
        cmd @ BridgeCommands::Init {
            output_path, force, ..
        } => run_init(GenerateConfig::from(cmd), output_path, *force),
        BridgeCommands::MapType {
            type_name,
            swift_export,
        } => {
            let profile = if *swift_export {
                MappingProfile::NativeExport
            } else {
                MappingProfile::BridgedObject
            };
            println!("{}", map_type_name(type_name, profile));
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run_generate(
    cli_config: GenerateConfig,
    config_file: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = match config_file {
        Some(path) => {
            let mut config = GenerateConfig::from_file(path)?;
            config.merge(&cli_config);
            config
        }
        None => cli_config,
    };

    let report = generate_from_config(&config)?;
    if !report.functions.is_empty() {
        print_generation_summary(&report, &config.kotlin_output_path, &config.swift_output_path);
    }
    Ok(())
}

fn run_init(
    config: GenerateConfig,
    output_path: &Path,
    force: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let logger = Logger::new(false, false);
    if output_path.exists() && !force {
        return Err(format!(
            "{} already exists. Use --force to overwrite.",
            output_path.display()
        )
        .into());
    }

    config.save_to_file(output_path)?;
    logger.info(&format!("✓ Wrote {}", output_path.display()));
    logger.info(&format!("  Kotlin sources: {}", config.project_path));
    logger.info(&format!(
        "  Module metadata: {}",
        config.resolved_metadata_path().display()
    ));
    logger.info("\n💡 Next: compose-bridge generate --config compose-bridge.json");
    Ok(())
}
