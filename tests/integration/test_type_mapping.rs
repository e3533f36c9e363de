//! Kotlin to Swift type names

use compose_bridge::generators::map_type_name;
use compose_bridge::MappingProfile::{BridgedObject, NativeExport};

#[test]
fn test_unknown_names_are_unchanged() {
    for name in ["ViewState", "Int32", "[String: Bool]", "com.example.User"] {
        assert_eq!(map_type_name(name, NativeExport), name);
    }
    assert_eq!(map_type_name("ViewState", BridgedObject), "ViewState");
    assert_eq!(
        map_type_name("List<com.example.User>", BridgedObject),
        "[com.example.User]"
    );
}

#[test]
fn test_nested_generics_map_every_leaf() {
    assert_eq!(
        map_type_name("Map<String, List<Map<String, Int>>>", NativeExport),
        "[String: [[String: Int32]]]"
    );
    assert_eq!(
        map_type_name("Map<String, List<Map<String, Int>>>", BridgedObject),
        "[String: [[String: KotlinInt]]]"
    );
}

#[test]
fn test_profiles_differ_on_primitives_and_arrays() {
    assert_eq!(map_type_name("Long", BridgedObject), "KotlinLong");
    assert_eq!(map_type_name("Long", NativeExport), "Int64");
    assert_eq!(map_type_name("Boolean", NativeExport), "Bool");
    assert_eq!(map_type_name("Char", NativeExport), "Unicode.UTF16.CodeUnit");
    assert_eq!(map_type_name("Array<String>", BridgedObject), "KotlinArray<String>");
    assert_eq!(map_type_name("Array<String>", NativeExport), "[String]");
}

#[test]
fn test_nullable_and_function_types() {
    assert_eq!(map_type_name("Set<Int>?", NativeExport), "Set<Int32>?");
    assert_eq!(map_type_name("(Int) -> Unit", NativeExport), "(Int32) -> Void");
    assert_eq!(map_type_name("((String) -> Unit)?", BridgedObject), "((String) -> Void)?");
}
