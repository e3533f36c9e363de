//! # Compose Bridge
//!
//! Generates the glue that embeds Compose Multiplatform screens in a SwiftUI app.
//!
//! For every `@Composable` function annotated with `@ComposeUIViewController`, the
//! generator emits:
//!
//! - a Kotlin `<Fn>UIViewController` object whose `make(...)` factory returns a
//!   `UIViewController` hosting the composable, plus an `update(...)` method when a
//!   parameter is marked `@ComposeUIViewControllerState`;
//! - a Swift `<Fn>Representable` conforming to `UIViewControllerRepresentable`
//!   that forwards its properties to the Kotlin object;
//! - one shared `ExternalTypeAliases.swift` per pass for types owned by modules
//!   built with Swift export.
//!
//! ## Quick Start
//!
//! ```bash
//! compose-bridge generate --project-path shared/src --metadata build/compose-bridge/modules.json
//! ```
//!
//! ### Programmatic Usage
//!
//! ```rust,no_run
//! use compose_bridge::{generate_from_config, GenerateConfig};
//!
//! let config = GenerateConfig {
//!     project_path: "./shared/src".to_string(),
//!     swift_output_path: "./iosApp/Generated".to_string(),
//!     verbose: Some(true),
//!     ..Default::default()
//! };
//!
//! let report = generate_from_config(&config)?;
//! println!("bridged {} function(s)", report.functions.len());
//! # Ok::<(), compose_bridge::Error>(())
//! ```
//!
//! ## Example
//!
//! Given this Kotlin code:
//!
//! ```kotlin
//! package com.example
//!
//! @ComposeUIViewController("Shared")
//! @Composable
//! fun Screen(@ComposeUIViewControllerState state: ViewState, onClose: () -> Unit) { }
//! ```
//!
//! the Swift side can embed it as:
//!
//! ```swift
//! ScreenRepresentable(state: $state, onClose: { dismiss() })
//! ```
//!
//! ## Module metadata
//!
//! Framework names and Swift export settings of the other modules of the build
//! come from a JSON document (default `build/compose-bridge/modules.json` below
//! the project path):
//!
//! ```json
//! [
//!   {
//!     "name": ":core",
//!     "packageNames": ["com.example.core"],
//!     "frameworkBaseName": "Core",
//!     "swiftExportEnabled": true,
//!     "flattenPackageConfigured": false
//!   }
//! ]
//! ```

pub mod analysis;
pub mod build;
mod error;
pub mod generators;
pub mod interface;
pub mod models;
pub mod processor;

pub use error::{Error, ErrorCategory, Result};
pub use models::*;

// Convenience re-exports for common use cases
pub use generators::CodeEmitter;
pub use interface::config::GenerateConfig;
pub use interface::generate_from_config;
pub use interface::output::{Logger, ProgressReporter};
pub use processor::BridgeProcessor;

pub use build::{BuildSystem, GenerationReport, ModuleMetadata, ModuleMetadataIndex};
