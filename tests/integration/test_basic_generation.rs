//! Byte-exact output for single functions

use crate::common::TestProject;
use crate::fixtures::screens;
use crate::{assert_generated_contains, assert_generated_not_contains};

#[test]
fn test_screen_with_state() {
    let project = TestProject::new();
    project.write_source("com/example/Screen.kt", screens::SCREEN);

    let report = project.generate().unwrap();
    assert_eq!(report.functions, vec!["com.example.Screen"]);

    let output = project.output();
    assert_eq!(
        output.read_kotlin("com/example/ScreenUIViewController.kt"),
        r#"// This file is auto-generated by compose-bridge. Do not edit manually.
@file:Suppress("unused")

package com.example

import androidx.compose.runtime.mutableStateOf
import androidx.compose.ui.window.ComposeUIViewController
import platform.UIKit.UIViewController

object ScreenUIViewController {
    private val state = mutableStateOf<ViewState?>(null)

    fun make(): UIViewController {
        return ComposeUIViewController {
            state.value?.let { Screen(it) }
        }
    }

    fun update(state: ViewState) {
        this.state.value = state
    }
}
"#
    );
    assert_eq!(
        output.read_swift("ScreenRepresentable.swift"),
        r#"// This file is auto-generated by compose-bridge. Do not edit manually.
import SwiftUI
import F

struct ScreenRepresentable: UIViewControllerRepresentable {
    @Binding var state: ViewState

    func makeUIViewController(context: Context) -> UIViewController {
        ScreenUIViewController().make()
    }

    func updateUIViewController(_ uiViewController: UIViewController, context: Context) {
        ScreenUIViewController().update(state: state)
    }
}
"#
    );
    assert!(!output.swift_exists("ExternalTypeAliases.swift"));
}

#[test]
fn test_stateless_function_has_no_holder() {
    let project = TestProject::new();
    project.write_source("Card.kt", screens::STATELESS_CARD);
    project.generate().unwrap();

    let output = project.output();
    let kotlin = output.read_kotlin("com/example/CardUIViewController.kt");
    assert_eq!(
        kotlin,
        r#"// This file is auto-generated by compose-bridge. Do not edit manually.
@file:Suppress("unused")

package com.example

import androidx.compose.ui.window.ComposeUIViewController
import platform.UIKit.UIViewController

object CardUIViewController {
    fun make(title: String, count: Int): UIViewController {
        return ComposeUIViewController {
            Card(title, count)
        }
    }
}
"#
    );

    let swift = output.read_swift("CardRepresentable.swift");
    assert_generated_contains!(swift, "    let title: String\n    let count: KotlinInt\n");
    assert_generated_contains!(
        swift,
        "context: Context) {\n        // nothing to update\n    }\n"
    );
    assert_generated_not_contains!(swift, "@Binding");
}

#[test]
fn test_state_name_is_preserved_and_receiver_is_shared() {
    let project = TestProject::new();
    project.write_source("Player.kt", screens::SHARED_RECEIVER);
    project.generate().unwrap();

    let output = project.output();
    let kotlin = output.read_kotlin("com/example/PlayerUIViewController.kt");
    assert_generated_contains!(
        kotlin,
        "    private val uiState = mutableStateOf<PlayerState?>(null)\n"
    );
    assert_generated_contains!(kotlin, "    fun make(onPause: () -> Unit): UIViewController {\n");
    assert_generated_contains!(kotlin, "uiState.value?.let { Player(it, onPause) }");
    assert_generated_contains!(
        kotlin,
        "    fun update(uiState: PlayerState?) {\n        this.uiState.value = uiState\n    }\n"
    );

    assert_eq!(
        output.read_swift("PlayerRepresentable.swift"),
        r#"// This file is auto-generated by compose-bridge. Do not edit manually.
import SwiftUI
import F

struct PlayerRepresentable: UIViewControllerRepresentable {
    @Binding var uiState: PlayerState?
    let onPause: () -> Void

    func makeUIViewController(context: Context) -> UIViewController {
        PlayerUIViewController.shared.make(onPause: onPause)
    }

    func updateUIViewController(_ uiViewController: UIViewController, context: Context) {
        PlayerUIViewController.shared.update(uiState: uiState)
    }
}
"#
    );
}

#[test]
fn test_project_without_annotations_generates_nothing() {
    let project = TestProject::new();
    project.write_source(
        "Plain.kt",
        "package com.example\n\n@Composable\nfun Plain(title: String) {}\n",
    );

    let report = project.generate().unwrap();
    assert!(report.functions.is_empty());
    assert!(report.written.is_empty());
    assert!(project.output().swift_files().is_empty());
}

#[test]
fn test_function_typed_state_is_held_as_nullable_function() {
    let project = TestProject::new();
    project.write_source(
        "com/example/Timer.kt",
        r#"package com.example

@ComposeUIViewController("F")
@Composable
fun Timer(@ComposeUIViewControllerState onTick: () -> Unit) {}
"#,
    );

    project.generate().unwrap();
    let kotlin = project.output().read_kotlin("com/example/TimerUIViewController.kt");
    assert_generated_contains!(kotlin, "private val onTick = mutableStateOf<(() -> Unit)?>(null)\n");
    assert_generated_contains!(kotlin, "fun update(onTick: () -> Unit) {\n");
}

#[test]
fn test_keyword_parameter_names_are_escaped_per_language() {
    let project = TestProject::new();
    project.write_source(
        "com/example/Range.kt",
        r#"package com.example

@ComposeUIViewController("F")
@Composable
fun Range(`in`: Int, default: String) {}
"#,
    );

    project.generate().unwrap();
    let output = project.output();
    assert_generated_contains!(
        output.read_kotlin("com/example/RangeUIViewController.kt"),
        "    fun make(`in`: Int, default: String): UIViewController {\n"
    );
    let swift = output.read_swift("RangeRepresentable.swift");
    assert_generated_contains!(swift, "    let `in`: KotlinInt\n    let `default`: String\n");
    assert_generated_contains!(swift, ".make(`in`: `in`, `default`: `default`)\n");
}
