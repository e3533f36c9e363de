//! Passes that must fail without writing anything

use crate::common::TestProject;
use crate::fixtures::screens;
use compose_bridge::{Error, ErrorCategory};

#[test]
fn test_two_state_markers_fail() {
    let project = TestProject::new();
    project.write_source("Broken.kt", screens::TWO_STATES);

    let err = project.generate().unwrap_err();
    assert_eq!(err.category(), ErrorCategory::ShapeValidation);
    match &err {
        Error::MultipleStateMarkers {
            function,
            parameters,
        } => {
            assert_eq!(function, "com.example.Broken");
            assert_eq!(parameters, &vec!["first".to_string(), "second".to_string()]);
        }
        other => panic!("Expected MultipleStateMarkers, got {:?}", other),
    }
    assert!(err.to_string().contains("@ComposeUIViewControllerState"));
    assert!(project.output().nothing_written());
}

#[test]
fn test_two_content_slots_fail() {
    let project = TestProject::new();
    project.write_source("Scaffold.kt", screens::TWO_CONTENT_SLOTS);

    let err = project.generate().unwrap_err();
    assert!(matches!(err, Error::InvalidParameterShape { .. }));
    let message = err.to_string();
    assert!(message.contains("com.example.Scaffold"));
    assert!(message.contains("@Composable"));
    assert!(message.contains("header, footer"));
}

#[test]
fn test_missing_framework_name_fails() {
    let project = TestProject::new();
    project.write_source("Orphan.kt", screens::NO_FRAMEWORK);

    let err = project.generate().unwrap_err();
    assert_eq!(err.category(), ErrorCategory::OriginResolution);
    let message = err.to_string();
    assert!(message.contains("com.example.Orphan"));
    assert!(message.contains("@ComposeUIViewController"));
    assert!(message.contains("frameworkBaseName"));
    assert!(project.output().nothing_written());
}

#[test]
fn test_first_failure_aborts_whole_pass() {
    let project = TestProject::new();
    project
        .write_source("a/Screen.kt", screens::SCREEN)
        .write_source("b/Broken.kt", screens::TWO_STATES);

    assert!(project.generate().is_err());
    assert!(project.output().nothing_written());
}

#[test]
fn test_malformed_declaration_reports_location() {
    let project = TestProject::new();
    project.write_source("Screen.kt", screens::MALFORMED);

    match project.generate().unwrap_err() {
        Error::Parse { path, line, message } => {
            assert!(path.ends_with("Screen.kt"));
            assert_eq!(line, 5);
            assert!(message.contains("expected ':'"));
        }
        other => panic!("Expected Parse, got {:?}", other),
    }
}

#[test]
fn test_missing_project_path_is_a_configuration_error() {
    let project = TestProject::new();
    let config = compose_bridge::GenerateConfig {
        project_path: project
            .temp_dir
            .path()
            .join("missing")
            .to_string_lossy()
            .to_string(),
        ..project.config()
    };

    let err = project.generate_with(&config).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Configuration);
}

#[test]
fn test_parameter_name_with_spaces_fails() {
    let project = TestProject::new();
    project.write_source(
        "Odd.kt",
        r#"package com.example

@ComposeUIViewController("F")
@Composable
fun Odd(`weird name`: Int) {}
"#,
    );

    let err = project.generate().unwrap_err();
    assert_eq!(err.category(), ErrorCategory::ShapeValidation);
    assert!(err.to_string().contains("`weird name`"));
    assert!(project.output().nothing_written());
}
