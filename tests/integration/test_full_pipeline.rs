//! Configuration-driven passes: symbol graph input, exclusions, cleanup

use crate::common::{path_string, TestProject};
use crate::fixtures::screens;
use compose_bridge::GenerateConfig;
use std::fs;

const SYMBOL_GRAPH: &str = r#"{
  "files": [
    {
      "path": "shared/src/iosMain/kotlin/com/example/Screens.kt",
      "packageName": "com.example",
      "functions": [
        {
          "name": "Detail",
          "line": 12,
          "annotations": [
            { "name": "com.example.annotations.ComposeUIViewController", "arguments": { "frameworkBaseName": "F" } },
            { "name": "androidx.compose.runtime.Composable" }
          ],
          "parameters": [
            { "name": "title", "type": { "name": "String", "package": "kotlin" } },
            {
              "name": "model",
              "type": { "name": "DetailModel", "package": "com.example.model", "nullable": true },
              "annotations": ["ComposeUIViewControllerState"]
            },
            {
              "name": "onClose",
              "type": { "name": "Function0", "package": "kotlin", "arguments": [{ "name": "Unit", "package": "kotlin" }] }
            }
          ]
        }
      ]
    }
  ]
}"#;

#[test]
fn test_symbol_graph_replaces_source_scanning() {
    let project = TestProject::new();
    // Would fail the pass if it were scanned
    project.write_source("Broken.kt", screens::TWO_STATES);
    let graph = project.write_file("graph.json", SYMBOL_GRAPH);

    let config = GenerateConfig {
        symbol_graph_path: Some(path_string(&graph)),
        ..project.config()
    };
    let report = project.generate_with(&config).unwrap();
    assert_eq!(report.functions, vec!["com.example.Detail"]);

    let output = project.output();
    assert_eq!(
        output.read_kotlin("com/example/DetailUIViewController.kt"),
        r#"// This file is auto-generated by compose-bridge. Do not edit manually.
@file:Suppress("unused")

package com.example

import androidx.compose.runtime.mutableStateOf
import androidx.compose.ui.window.ComposeUIViewController
import platform.UIKit.UIViewController
import com.example.model.DetailModel

object DetailUIViewController {
    private val model = mutableStateOf<DetailModel?>(null)

    fun make(title: String, onClose: () -> Unit): UIViewController {
        return ComposeUIViewController {
            model.value?.let { Detail(title, it, onClose) }
        }
    }

    fun update(model: DetailModel?) {
        this.model.value = model
    }
}
"#
    );
    assert_eq!(
        output.read_swift("DetailRepresentable.swift"),
        r#"// This file is auto-generated by compose-bridge. Do not edit manually.
import SwiftUI
import F

struct DetailRepresentable: UIViewControllerRepresentable {
    @Binding var model: DetailModel?
    let title: String
    let onClose: () -> Void

    func makeUIViewController(context: Context) -> UIViewController {
        DetailUIViewController().make(title: title, onClose: onClose)
    }

    func updateUIViewController(_ uiViewController: UIViewController, context: Context) {
        DetailUIViewController().update(model: model)
    }
}
"#
    );
}

#[test]
fn test_exclude_patterns_skip_sources() {
    let project = TestProject::new();
    project
        .write_source("iosMain/Screen.kt", screens::SCREEN)
        .write_source("androidMain/Broken.kt", screens::TWO_STATES);

    let config = GenerateConfig {
        exclude_patterns: Some(vec!["androidMain".to_string()]),
        ..project.config()
    };
    let report = project.generate_with(&config).unwrap();
    assert_eq!(report.functions, vec!["com.example.Screen"]);
}

#[test]
fn test_rerun_removes_outputs_of_deleted_functions() {
    let project = TestProject::new();
    project
        .write_source("Screen.kt", screens::SCREEN)
        .write_source("Card.kt", screens::STATELESS_CARD);
    project.generate().unwrap();

    let output = project.output();
    let handwritten = output.swift_root.join("Extensions.swift");
    fs::write(&handwritten, "extension String {}\n").unwrap();

    fs::remove_file(project.source_root().join("Card.kt")).unwrap();
    let report = project.generate().unwrap();

    assert_eq!(report.removed.len(), 2);
    assert!(!output.swift_exists("CardRepresentable.swift"));
    assert!(!output.kotlin_exists("com/example/CardUIViewController.kt"));
    assert!(output.swift_exists("ScreenRepresentable.swift"));
    assert!(handwritten.exists());
}

#[test]
fn test_rerun_keeps_stale_outputs_when_cleanup_is_off() {
    let project = TestProject::new();
    project.write_source("Card.kt", screens::STATELESS_CARD);
    project.generate().unwrap();

    fs::write(
        project.source_root().join("Card.kt"),
        screens::STATELESS_CARD.replace("fun Card", "fun Tile"),
    )
    .unwrap();
    let config = GenerateConfig {
        clean_stale_files: Some(false),
        ..project.config()
    };
    let report = project.generate_with(&config).unwrap();

    assert!(report.removed.is_empty());
    assert!(project.output().swift_exists("CardRepresentable.swift"));
    assert!(project.output().swift_exists("TileRepresentable.swift"));
}

#[test]
fn test_config_file_round_trip_drives_generation() {
    let project = TestProject::new();
    project.write_source("Screen.kt", screens::SCREEN);

    let config_path = project.temp_dir.path().join("compose-bridge.json");
    project.config().save_to_file(&config_path).unwrap();
    let loaded = GenerateConfig::from_file(&config_path).unwrap();

    let report = project.generate_with(&loaded).unwrap();
    assert_eq!(report.written.len(), 2);
}
