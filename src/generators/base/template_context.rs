use crate::analysis::ResolvedOrigins;
use crate::generators::base::type_visitor::map_type;
use crate::models::{AnnotatedFunction, ClassifiedParameters, Parameter, ParameterRole, TypeAlias};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Template context for the Kotlin wrapper object
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewControllerContext {
    pub package_name: String,
    pub name: String,
    pub function_name: String,
    pub type_imports: Vec<String>,
    pub has_state: bool,
    pub state: Option<StateContext>,
    /// `title: String, onClick: () -> Unit`
    pub factory_parameters: String,
    /// All original parameters in declaration order, the state replaced by `it`
    pub call_arguments: String,
}

/// Kotlin hard keywords; a parameter named like one was declared in backticks
const KOTLIN_KEYWORDS: &[&str] = &[
    "as", "break", "class", "continue", "do", "else", "false", "for", "fun", "if", "in",
    "interface", "is", "null", "object", "package", "return", "super", "this", "throw", "true",
    "try", "typealias", "typeof", "val", "var", "when", "while",
];

const SWIFT_KEYWORDS: &[&str] = &[
    "associatedtype", "class", "deinit", "enum", "extension", "fileprivate", "func", "import",
    "init", "inout", "internal", "let", "open", "operator", "private", "protocol", "public",
    "rethrows", "static", "struct", "subscript", "typealias", "var", "break", "case", "catch",
    "continue", "default", "defer", "do", "else", "fallthrough", "for", "guard", "if", "in",
    "repeat", "return", "throw", "switch", "where", "while", "Any", "as", "await", "false", "is",
    "nil", "self", "Self", "super", "throws", "true", "try",
];

fn escape(name: &str, keywords: &[&str]) -> String {
    if keywords.contains(&name) {
        format!("`{}`", name)
    } else {
        name.to_string()
    }
}

pub(crate) fn kotlin_name(name: &str) -> String {
    escape(name, KOTLIN_KEYWORDS)
}

pub(crate) fn swift_name(name: &str) -> String {
    escape(name, SWIFT_KEYWORDS)
}

/// The state holder of a wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateContext {
    pub name: String,
    pub swift_name: String,
    /// Declared type, as `update` takes it
    pub kotlin_type: String,
    /// Nullable type held by `mutableStateOf`, parenthesized for function types
    pub holder_type: String,
}

impl StateContext {
    fn new(state: &Parameter) -> Self {
        Self {
            name: kotlin_name(&state.name),
            swift_name: swift_name(&state.name),
            kotlin_type: state.type_ref.to_string(),
            holder_type: state.type_ref.clone().nullable().to_string(),
        }
    }
}

impl ViewControllerContext {
    pub fn new(function: &AnnotatedFunction, classified: &ClassifiedParameters) -> Self {
        let factory_parameters: Vec<String> = classified
            .pass_through
            .iter()
            .map(|p| format!("{}: {}", kotlin_name(&p.name), p.type_ref))
            .collect();

        let call_arguments: Vec<String> = function
            .parameters
            .iter()
            .filter(|p| p.role != ParameterRole::UiBuilder)
            .map(|p| match p.role {
                ParameterRole::State => "it".to_string(),
                _ => kotlin_name(&p.parameter.name),
            })
            .collect();

        Self {
            package_name: function.package_name.clone(),
            name: function.view_controller_name(),
            function_name: function.name.clone(),
            type_imports: kotlin_imports(function),
            has_state: classified.has_state(),
            state: classified.state.as_ref().map(StateContext::new),
            factory_parameters: factory_parameters.join(", "),
            call_arguments: call_arguments.join(", "),
        }
    }
}

/// Declarations the wrapper has to import: outside its own package and
/// outside the Kotlin standard library, first encounter wins. Star imports
/// still open on the function follow.
fn kotlin_imports(function: &AnnotatedFunction) -> Vec<String> {
    let mut imports = IndexSet::new();
    for parameter in function.all_parameters() {
        for ty in parameter.type_ref.walk() {
            if ty.is_builtin() || ty.is_star() || ty.package == function.package_name {
                continue;
            }
            let outer = ty.name.split('.').next().unwrap_or(&ty.name);
            imports.insert(format!("{}.{}", ty.package, outer));
        }
    }
    for package in &function.wildcard_imports {
        imports.insert(format!("{}.*", package));
    }
    imports.into_iter().collect()
}

/// Template context for the SwiftUI representable
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepresentableContext {
    pub name: String,
    pub frameworks: Vec<String>,
    pub properties: Vec<PropertyContext>,
    pub has_properties: bool,
    pub has_state: bool,
    pub state: Option<StateContext>,
    /// `ScreenUIViewController()` or `ScreenUIViewController.shared`
    pub receiver: String,
    /// `title: title, onClick: onClick`
    pub make_arguments: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyContext {
    pub name: String,
    pub swift_type: String,
    /// `@Binding var` for the state, `let` otherwise
    pub is_binding: bool,
}

impl RepresentableContext {
    pub fn new(
        function: &AnnotatedFunction,
        classified: &ClassifiedParameters,
        origins: &ResolvedOrigins,
    ) -> Self {
        let mut properties = Vec::new();
        if let Some(state) = &classified.state {
            properties.push(PropertyContext {
                name: swift_name(&state.name),
                swift_type: map_type(&state.type_ref, origins.profile_for(&state.name)),
                is_binding: true,
            });
        }
        for parameter in &classified.pass_through {
            properties.push(PropertyContext {
                name: swift_name(&parameter.name),
                swift_type: map_type(&parameter.type_ref, origins.profile_for(&parameter.name)),
                is_binding: false,
            });
        }

        let make_arguments: Vec<String> = classified
            .pass_through
            .iter()
            .map(|p| {
                let name = swift_name(&p.name);
                format!("{}: {}", name, name)
            })
            .collect();

        let receiver = if function.opaque {
            format!("{}()", function.view_controller_name())
        } else {
            format!("{}.shared", function.view_controller_name())
        };

        Self {
            name: function.representable_name(),
            frameworks: origins.frameworks.clone(),
            has_properties: !properties.is_empty(),
            properties,
            has_state: classified.has_state(),
            state: classified.state.as_ref().map(StateContext::new),
            receiver,
            make_arguments: make_arguments.join(", "),
        }
    }
}

/// Template context for the shared type-alias file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeAliasFileContext {
    pub frameworks: Vec<String>,
    pub aliases: Vec<TypeAliasContext>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeAliasContext {
    pub simple_name: String,
    pub target: String,
}

impl TypeAliasFileContext {
    pub fn new(aliases: &[TypeAlias]) -> Self {
        let frameworks: IndexSet<String> = aliases
            .iter()
            .map(|a| a.framework_base_name.clone())
            .collect();
        Self {
            frameworks: frameworks.into_iter().collect(),
            aliases: aliases
                .iter()
                .map(|a| TypeAliasContext {
                    simple_name: a.simple_name.clone(),
                    target: a.target(),
                })
                .collect(),
        }
    }
}
