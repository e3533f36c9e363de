use crate::analysis::type_parser::parse_type_text;
use crate::models::{MappingProfile, TypeReference};

/// Visitor converting Kotlin type references to their Swift spelling.
///
/// Only names from the Kotlin standard library (or unresolved names) are
/// looked up in the vocabulary; everything else is a user type whose name is
/// the same on both sides, with its type arguments mapped recursively.
pub trait SwiftTypeVisitor {
    fn visit_type(&self, ty: &TypeReference) -> String {
        let rendered = if ty.is_star() {
            "Any".to_string()
        } else if ty.is_function_type() {
            let (return_type, parameters) = match ty.arguments.split_last() {
                Some((last, rest)) => (last, rest),
                None => return self.visit_custom(ty),
            };
            self.visit_function(parameters, return_type)
        } else if ty.is_builtin() {
            self.visit_builtin(ty)
        } else {
            self.visit_custom(ty)
        };

        if ty.nullable {
            self.visit_optional(&rendered, ty.is_function_type())
        } else {
            rendered
        }
    }

    fn visit_builtin(&self, ty: &TypeReference) -> String {
        let first = ty.arguments.first();
        match ty.name.as_str() {
            "List" | "MutableList" | "Collection" | "MutableCollection" | "Iterable" => {
                self.visit_list(first)
            }
            "Set" | "MutableSet" => self.visit_set(first),
            "Map" | "MutableMap" => self.visit_map(first, ty.arguments.get(1)),
            "Array" => self.visit_array(first),
            name => match self.visit_primitive(name) {
                Some(primitive) => primitive,
                None => self.visit_custom(ty),
            },
        }
    }

    /// Swift name for a Kotlin primitive, `None` when the name is not one
    fn visit_primitive(&self, name: &str) -> Option<String>;

    fn visit_list(&self, element: Option<&TypeReference>) -> String {
        format!("[{}]", self.visit_argument(element))
    }

    fn visit_set(&self, element: Option<&TypeReference>) -> String {
        format!("Set<{}>", self.visit_argument(element))
    }

    fn visit_map(&self, key: Option<&TypeReference>, value: Option<&TypeReference>) -> String {
        format!(
            "[{}: {}]",
            self.visit_argument(key),
            self.visit_argument(value)
        )
    }

    fn visit_array(&self, element: Option<&TypeReference>) -> String;

    fn visit_function(&self, parameters: &[TypeReference], return_type: &TypeReference) -> String {
        let parameters: Vec<String> = parameters.iter().map(|p| self.visit_type(p)).collect();
        format!("({}) -> {}", parameters.join(", "), self.visit_type(return_type))
    }

    fn visit_optional(&self, inner: &str, is_function: bool) -> String {
        if is_function {
            format!("({})?", inner)
        } else {
            format!("{}?", inner)
        }
    }

    fn visit_custom(&self, ty: &TypeReference) -> String {
        if ty.arguments.is_empty() {
            return ty.name.clone();
        }
        let arguments: Vec<String> = ty.arguments.iter().map(|a| self.visit_type(a)).collect();
        format!("{}<{}>", ty.name, arguments.join(", "))
    }

    /// A missing generic argument (raw `List`) becomes `Any`
    fn visit_argument(&self, argument: Option<&TypeReference>) -> String {
        argument
            .map(|a| self.visit_type(a))
            .unwrap_or_else(|| "Any".to_string())
    }
}

fn common_primitive(name: &str) -> Option<&'static str> {
    match name {
        "String" | "CharSequence" => Some("String"),
        "Unit" => Some("Void"),
        "Any" => Some("Any"),
        _ => None,
    }
}

/// Objective-C bridged framework: primitives appear as boxed `Kotlin*` classes
pub struct BridgedObjectVisitor;

impl SwiftTypeVisitor for BridgedObjectVisitor {
    fn visit_primitive(&self, name: &str) -> Option<String> {
        let boxed = match name {
            "Int" => "KotlinInt",
            "Long" => "KotlinLong",
            "Short" => "KotlinShort",
            "Byte" => "KotlinByte",
            "UInt" => "KotlinUInt",
            "ULong" => "KotlinULong",
            "UShort" => "KotlinUShort",
            "UByte" => "KotlinUByte",
            "Float" => "KotlinFloat",
            "Double" => "KotlinDouble",
            "Boolean" => "KotlinBoolean",
            "Char" => "KotlinChar",
            other => return common_primitive(other).map(str::to_string),
        };
        Some(boxed.to_string())
    }

    fn visit_array(&self, element: Option<&TypeReference>) -> String {
        format!("KotlinArray<{}>", self.visit_argument(element))
    }
}

/// Swift export: primitives map onto Swift's width-specific value types
pub struct SwiftExportVisitor;

impl SwiftTypeVisitor for SwiftExportVisitor {
    fn visit_primitive(&self, name: &str) -> Option<String> {
        let native = match name {
            "Int" => "Int32",
            "Long" => "Int64",
            "Short" => "Int16",
            "Byte" => "Int8",
            "UInt" => "UInt32",
            "ULong" => "UInt64",
            "UShort" => "UInt16",
            "UByte" => "UInt8",
            "Float" => "Float",
            "Double" => "Double",
            "Boolean" => "Bool",
            "Char" => "Unicode.UTF16.CodeUnit",
            other => return common_primitive(other).map(str::to_string),
        };
        Some(native.to_string())
    }

    fn visit_array(&self, element: Option<&TypeReference>) -> String {
        self.visit_list(element)
    }
}

/// Map a resolved type with the visitor for `profile`
pub fn map_type(ty: &TypeReference, profile: MappingProfile) -> String {
    match profile {
        MappingProfile::BridgedObject => BridgedObjectVisitor.visit_type(ty),
        MappingProfile::NativeExport => SwiftExportVisitor.visit_type(ty),
    }
}

/// Map Kotlin type text such as `Map<String, List<Int>>` to Swift.
/// Names outside the vocabulary keep their spelling, package qualifier
/// included; text that does not parse as a Kotlin type is returned unchanged.
pub fn map_type_name(text: &str, profile: MappingProfile) -> String {
    match parse_type_text(text) {
        Ok(mut parsed) => {
            keep_written_names(&mut parsed.type_ref);
            map_type(&parsed.type_ref, profile)
        }
        Err(_) => text.to_string(),
    }
}

fn keep_written_names(ty: &mut TypeReference) {
    for argument in &mut ty.arguments {
        keep_written_names(argument);
    }
    if !ty.is_builtin() {
        ty.name = ty.qualified_name();
    }
}
