//! Framework imports and the shared type-alias file

use crate::common::{path_string, TestProject};
use crate::fixtures::{metadata, screens};
use crate::{assert_generated_contains, assert_generated_not_contains};
use compose_bridge::GenerateConfig;

#[test]
fn test_exported_module_types_get_aliases() {
    let project = TestProject::new();
    project
        .write_source("com/example/ui/Profile.kt", screens::PROFILE)
        .write_metadata(metadata::SHARED_AND_EXPORTED_CORE);

    let report = project.generate().unwrap();
    assert_eq!(report.written.len(), 3);

    let output = project.output();
    assert_eq!(
        output.read_kotlin("com/example/ui/ProfileScreenUIViewController.kt"),
        r#"// This file is auto-generated by compose-bridge. Do not edit manually.
@file:Suppress("unused")

package com.example.ui

import androidx.compose.runtime.mutableStateOf
import androidx.compose.ui.window.ComposeUIViewController
import platform.UIKit.UIViewController
import com.example.core.User

object ProfileScreenUIViewController {
    private val profile = mutableStateOf<User?>(null)

    fun make(count: Int, onSave: (User) -> Unit): UIViewController {
        return ComposeUIViewController {
            profile.value?.let { ProfileScreen(it, count, onSave) }
        }
    }

    fun update(profile: User) {
        this.profile.value = profile
    }
}
"#
    );

    assert_eq!(
        output.read_swift("ProfileScreenRepresentable.swift"),
        r#"// This file is auto-generated by compose-bridge. Do not edit manually.
import SwiftUI
import Shared
import Core

struct ProfileScreenRepresentable: UIViewControllerRepresentable {
    @Binding var profile: User
    let count: KotlinInt
    let onSave: (User) -> Void

    func makeUIViewController(context: Context) -> UIViewController {
        ProfileScreenUIViewController().make(count: count, onSave: onSave)
    }

    func updateUIViewController(_ uiViewController: UIViewController, context: Context) {
        ProfileScreenUIViewController().update(profile: profile)
    }
}
"#
    );

    assert_eq!(
        output.read_swift("ExternalTypeAliases.swift"),
        r#"// This file is auto-generated by compose-bridge. Do not edit manually.
import Core

typealias User = ExportedKotlinPackages.com.example.core.User
"#
    );
}

#[test]
fn test_module_without_swift_export_gets_no_alias() {
    let project = TestProject::new();
    project
        .write_source("com/example/ui/Profile.kt", screens::PROFILE)
        .write_metadata(metadata::SHARED_AND_OBJC_CORE);

    project.generate().unwrap();
    let output = project.output();
    assert!(!output.swift_exists("ExternalTypeAliases.swift"));

    let swift = output.read_swift("ProfileScreenRepresentable.swift");
    assert_generated_contains!(swift, "import SwiftUI\nimport Shared\nimport Core\n");
}

#[test]
fn test_flattened_module_gets_no_alias() {
    let project = TestProject::new();
    project
        .write_source("com/example/ui/Profile.kt", screens::PROFILE)
        .write_metadata(metadata::SHARED_AND_FLATTENED_CORE);

    project.generate().unwrap();
    assert!(!project.output().swift_exists("ExternalTypeAliases.swift"));
}

#[test]
fn test_same_simple_name_from_two_packages_keeps_both_aliases() {
    let project = TestProject::new();
    project
        .write_source(
            "com/example/ui/Compare.kt",
            r#"package com.example.ui

@ComposeUIViewController
@Composable
fun Compare(left: com.example.core.User, right: com.example.legacy.User) {}
"#,
        )
        .write_metadata(
            r#"[
  {"name": ":shared", "packageNames": ["com.example.ui"], "frameworkBaseName": "Shared"},
  {"name": ":core", "packageNames": ["com.example.core"], "frameworkBaseName": "Core", "swiftExportEnabled": true},
  {"name": ":legacy", "packageNames": ["com.example.legacy"], "frameworkBaseName": "Legacy", "swiftExportEnabled": true}
]"#,
        );

    project.generate().unwrap();
    let output = project.output();
    assert_eq!(
        output.read_swift("ExternalTypeAliases.swift"),
        r#"// This file is auto-generated by compose-bridge. Do not edit manually.
import Core
import Legacy

typealias User = ExportedKotlinPackages.com.example.core.User
typealias User = ExportedKotlinPackages.com.example.legacy.User
"#
    );

    let swift = output.read_swift("CompareRepresentable.swift");
    assert_generated_contains!(swift, "import SwiftUI\nimport Shared\nimport Core\nimport Legacy\n");
}

#[test]
fn test_metadata_overrides_annotation_framework() {
    let project = TestProject::new();
    project
        .write_source(
            "com/example/ui/Screen.kt",
            r#"package com.example.ui

@ComposeUIViewController("Fallback")
@Composable
fun Screen(title: String) {}
"#,
        )
        .write_metadata(r#"[{"name": ":app:shared", "packageNames": ["com.example.ui"], "frameworkBaseName": "app:Shared"}]"#);

    project.generate().unwrap();
    let swift = project.output().read_swift("ScreenRepresentable.swift");
    assert_generated_contains!(swift, "import SwiftUI\nimport Shared\n\nstruct");
    assert_generated_not_contains!(swift, "Fallback");
}

#[test]
fn test_source_directories_extend_module_packages() {
    let project = TestProject::new();
    let core_sources = project.temp_dir.path().join("core/src");
    project.write_file(
        "core/src/com/example/core/model/Session.kt",
        "package com.example.core.model\n\nclass Session\n",
    );
    project.write_source(
        "com/example/ui/Login.kt",
        r#"package com.example.ui

import com.example.core.model.Session

@ComposeUIViewController("Shared")
@Composable
fun Login(@ComposeUIViewControllerState session: Session) {}
"#,
    );
    let metadata_path = project.write_file(
        "modules.json",
        &format!(
            r#"[{{"name": ":core", "packageNames": [], "frameworkBaseName": "Core", "swiftExportEnabled": true, "sourceDirectories": [{}]}}]"#,
            serde_json::to_string(&path_string(&core_sources)).unwrap()
        ),
    );

    let config = GenerateConfig {
        metadata_path: Some(path_string(&metadata_path)),
        ..project.config()
    };
    project.generate_with(&config).unwrap();

    let output = project.output();
    assert_generated_contains!(
        output.read_swift("ExternalTypeAliases.swift"),
        "typealias Session = ExportedKotlinPackages.com.example.core.model.Session\n"
    );
    assert_generated_contains!(
        output.read_swift("LoginRepresentable.swift"),
        "import SwiftUI\nimport Shared\nimport Core\n"
    );
}

#[test]
fn test_wrapped_type_maps_like_its_bare_use() {
    let project = TestProject::new();
    project
        .write_source(
            "com/example/ui/Shelf.kt",
            r#"package com.example.ui

import com.example.box.Box

@ComposeUIViewController
@Composable
fun Shelf(single: Box<Int>, many: List<Box<Int>>, count: Int) {}
"#,
        )
        .write_metadata(
            r#"[
  {"name": ":app", "packageNames": ["com.example.ui"], "frameworkBaseName": "App"},
  {"name": ":box", "packageNames": ["com.example.box"], "frameworkBaseName": "BoxKit", "swiftExportEnabled": true}
]"#,
        );

    project.generate().unwrap();
    let swift = project.output().read_swift("ShelfRepresentable.swift");
    assert_generated_contains!(swift, "    let single: Box<Int32>\n");
    assert_generated_contains!(swift, "    let many: [Box<Int32>]\n");
    assert_generated_contains!(swift, "    let count: KotlinInt\n");
}

#[test]
fn test_star_import_of_a_known_module_resolves_its_types() {
    let project = TestProject::new();
    project
        .write_source(
            "com/example/ui/Account.kt",
            r#"package com.example.ui

import com.example.model.*

@ComposeUIViewController
@Composable
fun Account(@ComposeUIViewControllerState profile: Profile) {}
"#,
        )
        .write_metadata(
            r#"[
  {"name": ":app", "packageNames": ["com.example.ui"], "frameworkBaseName": "App"},
  {"name": ":model", "packageNames": ["com.example.model"], "frameworkBaseName": "Model"}
]"#,
        );

    project.generate().unwrap();
    let output = project.output();
    let kotlin = output.read_kotlin("com/example/ui/AccountUIViewController.kt");
    assert_generated_contains!(kotlin, "import com.example.model.Profile\n");
    assert_generated_not_contains!(kotlin, "import com.example.model.*");
    assert_generated_contains!(
        output.read_swift("AccountRepresentable.swift"),
        "import SwiftUI\nimport App\nimport Model\n"
    );
}

#[test]
fn test_unplaceable_star_import_is_repeated_in_the_wrapper() {
    let project = TestProject::new();
    project.write_source(
        "com/example/ui/Account.kt",
        r#"package com.example.ui

import com.example.model.*

@ComposeUIViewController("App")
@Composable
fun Account(@ComposeUIViewControllerState profile: Profile) {}
"#,
    );

    project.generate().unwrap();
    let kotlin = project
        .output()
        .read_kotlin("com/example/ui/AccountUIViewController.kt");
    assert_generated_contains!(
        kotlin,
        "import platform.UIKit.UIViewController\nimport com.example.model.*\n\nobject"
    );
}

#[test]
fn test_star_import_yields_to_scanned_declarations() {
    let project = TestProject::new();
    project
        .write_source(
            "com/example/ui/Account.kt",
            r#"package com.example.ui

import com.example.model.*

@ComposeUIViewController("App")
@Composable
fun Account(@ComposeUIViewControllerState profile: Profile, theme: Theme) {}
"#,
        )
        .write_source("com/example/ui/Theme.kt", "package com.example.ui\n\nclass Theme\n")
        .write_source(
            "com/example/model/Profile.kt",
            "package com.example.model\n\ndata class Profile(val name: String)\n",
        );

    project.generate().unwrap();
    let kotlin = project
        .output()
        .read_kotlin("com/example/ui/AccountUIViewController.kt");
    assert_generated_contains!(kotlin, "import com.example.model.Profile\n");
    assert_generated_not_contains!(kotlin, "com.example.ui.Theme");
    assert_generated_not_contains!(kotlin, ".*");
}
