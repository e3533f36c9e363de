use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Entry marker placed on composable functions that should get a bridge
pub const ENTRY_MARKER: &str = "ComposeUIViewController";

/// Marker for the single parameter that is threaded through `update`
pub const STATE_MARKER: &str = "ComposeUIViewControllerState";

/// Marker for parameters that only carry a UI-builder closure
pub const UI_BUILDER_MARKER: &str = "Composable";

/// Positional argument names of the entry marker, in declaration order
pub const ENTRY_MARKER_ARGUMENTS: [&str; 2] = ["frameworkBaseName", "opaque"];

/// Compare an annotation name against a marker by simple name, so that
/// `com.example.ComposeUIViewController` and `ComposeUIViewController` both match.
pub fn matches_marker(annotation_name: &str, marker: &str) -> bool {
    let simple = annotation_name
        .rsplit('.')
        .next()
        .unwrap_or(annotation_name);
    simple == marker
}

/// A resolved reference to a Kotlin type.
///
/// Function types are represented the way the Kotlin compiler resolves them:
/// `kotlin.FunctionN` with the return type as the last argument.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct TypeReference {
    pub name: String,
    /// Package that declares the type, empty when unknown
    #[serde(default)]
    pub package: String,
    #[serde(default)]
    pub arguments: Vec<TypeReference>,
    #[serde(default)]
    pub nullable: bool,
}

impl TypeReference {
    pub fn new(name: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: package.into(),
            arguments: Vec::new(),
            nullable: false,
        }
    }

    pub fn with_arguments(mut self, arguments: Vec<TypeReference>) -> Self {
        self.arguments = arguments;
        self
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Build a `kotlin.FunctionN` reference from parameter types and a return type
    pub fn function(parameters: Vec<TypeReference>, return_type: TypeReference) -> Self {
        let name = format!("Function{}", parameters.len());
        let mut arguments = parameters;
        arguments.push(return_type);
        Self::new(name, "kotlin").with_arguments(arguments)
    }

    /// Star projection `*`
    pub fn star() -> Self {
        Self::new("*", "")
    }

    pub fn is_star(&self) -> bool {
        self.name == "*"
    }

    pub fn is_function_type(&self) -> bool {
        self.package == "kotlin"
            && !self.arguments.is_empty()
            && self
                .name
                .strip_prefix("Function")
                .is_some_and(|arity| !arity.is_empty() && arity.chars().all(|c| c.is_ascii_digit()))
    }

    /// Declared in the Kotlin standard library (or not resolved at all)
    pub fn is_builtin(&self) -> bool {
        self.package.is_empty() || is_builtin_package(&self.package)
    }

    pub fn qualified_name(&self) -> String {
        if self.package.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.package, self.name)
        }
    }

    /// Visit this reference and every nested type argument, outermost first
    pub fn walk(&self) -> Vec<&TypeReference> {
        let mut out = vec![self];
        for argument in &self.arguments {
            out.extend(argument.walk());
        }
        out
    }
}

/// Renders the reference in Kotlin syntax
impl fmt::Display for TypeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_function_type() {
            let (return_type, parameters) = self
                .arguments
                .split_last()
                .ok_or(fmt::Error)?;
            let parameters: Vec<String> = parameters.iter().map(|p| p.to_string()).collect();
            let rendered = format!("({}) -> {}", parameters.join(", "), return_type);
            return if self.nullable {
                write!(f, "({})?", rendered)
            } else {
                write!(f, "{}", rendered)
            };
        }

        write!(f, "{}", self.name)?;
        if !self.arguments.is_empty() {
            let arguments: Vec<String> = self.arguments.iter().map(|a| a.to_string()).collect();
            write!(f, "<{}>", arguments.join(", "))?;
        }
        if self.nullable {
            write!(f, "?")?;
        }
        Ok(())
    }
}

pub fn is_builtin_package(package: &str) -> bool {
    package == "kotlin" || package.starts_with("kotlin.")
}

/// An annotation as it appears on a declaration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    pub name: String,
    #[serde(default)]
    pub arguments: BTreeMap<String, serde_json::Value>,
}

impl Annotation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: BTreeMap::new(),
        }
    }

    pub fn with_argument(mut self, name: &str, value: impl Into<serde_json::Value>) -> Self {
        self.arguments.insert(name.to_string(), value.into());
        self
    }

    pub fn string_argument(&self, name: &str) -> Option<&str> {
        self.arguments.get(name).and_then(|v| v.as_str())
    }

    pub fn bool_argument(&self, name: &str) -> Option<bool> {
        self.arguments.get(name).and_then(|v| v.as_bool())
    }

    pub fn is(&self, marker: &str) -> bool {
        matches_marker(&self.name, marker)
    }
}

/// A parameter of a declared function
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub type_ref: TypeReference,
    /// Names of the annotations on the parameter and on its type
    #[serde(default)]
    pub annotations: Vec<String>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, type_ref: TypeReference) -> Self {
        Self {
            name: name.into(),
            type_ref,
            annotations: Vec::new(),
        }
    }

    pub fn annotated(mut self, annotation: impl Into<String>) -> Self {
        self.annotations.push(annotation.into());
        self
    }

    pub fn has_marker(&self, marker: &str) -> bool {
        self.annotations.iter().any(|a| matches_marker(a, marker))
    }
}

/// A function declaration as exposed by the symbol graph
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FunctionDeclaration {
    pub name: String,
    #[serde(default)]
    pub line: usize,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
}

impl FunctionDeclaration {
    pub fn annotation(&self, marker: &str) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.is(marker))
    }
}

/// One source file of the symbol graph with its top-level functions in declaration order
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SourceFile {
    pub path: String,
    #[serde(default)]
    pub package_name: String,
    #[serde(default)]
    pub functions: Vec<FunctionDeclaration>,
    /// Packages imported with `.*`, in import order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub wildcard_imports: Vec<String>,
    /// Simple names of the top-level classes, objects and type aliases
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub declared_types: Vec<String>,
}

/// How a parameter takes part in the generated bridge.
/// Resolved once from the annotation names when the function is discovered.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ParameterRole {
    State,
    UiBuilder,
    PassThrough,
}

impl ParameterRole {
    pub fn of(parameter: &Parameter) -> Self {
        if parameter.has_marker(STATE_MARKER) {
            ParameterRole::State
        } else if parameter.has_marker(UI_BUILDER_MARKER) {
            ParameterRole::UiBuilder
        } else {
            ParameterRole::PassThrough
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoledParameter {
    pub parameter: Parameter,
    pub role: ParameterRole,
}

/// A function carrying the entry marker, ready for classification
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedFunction {
    pub name: String,
    pub package_name: String,
    pub file_path: String,
    pub line: usize,
    pub parameters: Vec<RoledParameter>,
    /// `frameworkBaseName` argument of the entry marker, empty when absent
    pub framework_base_name: String,
    /// `opaque` argument of the entry marker
    pub opaque: bool,
    /// Star imports the wrapper has to repeat for names they may have supplied
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub wildcard_imports: Vec<String>,
}

impl AnnotatedFunction {
    /// Build from a declaration; `None` when the declaration lacks the entry marker
    pub fn from_declaration(file: &SourceFile, declaration: &FunctionDeclaration) -> Option<Self> {
        let marker = declaration.annotation(ENTRY_MARKER)?;
        Some(Self {
            name: declaration.name.clone(),
            package_name: file.package_name.clone(),
            file_path: file.path.clone(),
            line: declaration.line,
            parameters: declaration
                .parameters
                .iter()
                .map(|p| RoledParameter {
                    parameter: p.clone(),
                    role: ParameterRole::of(p),
                })
                .collect(),
            framework_base_name: marker
                .string_argument(ENTRY_MARKER_ARGUMENTS[0])
                .unwrap_or_default()
                .trim()
                .to_string(),
            opaque: marker.bool_argument(ENTRY_MARKER_ARGUMENTS[1]).unwrap_or(true),
            wildcard_imports: file.wildcard_imports.clone(),
        })
    }

    pub fn qualified_name(&self) -> String {
        if self.package_name.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.package_name, self.name)
        }
    }

    pub fn view_controller_name(&self) -> String {
        format!("{}UIViewController", self.name)
    }

    pub fn representable_name(&self) -> String {
        format!("{}Representable", self.name)
    }

    pub fn all_parameters(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.iter().map(|p| &p.parameter)
    }
}

/// Derived view of a function's parameters
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedParameters {
    pub state: Option<Parameter>,
    pub pass_through: Vec<Parameter>,
}

impl ClassifiedParameters {
    pub fn has_state(&self) -> bool {
        self.state.is_some()
    }
}

/// The framework a referenced package is imported from
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkOrigin {
    pub package_name: String,
    pub framework_base_name: String,
}

/// Which spelling of Kotlin types a native declaration sees
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum MappingProfile {
    /// Objective-C bridge: primitives are boxed in `Kotlin*` wrapper classes
    #[default]
    BridgedObject,
    /// Swift export: primitives map to width-specific Swift types
    NativeExport,
}

/// One line of the shared type-alias file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct TypeAlias {
    pub simple_name: String,
    pub package_name: String,
    pub framework_base_name: String,
}

impl TypeAlias {
    /// The Swift-export spelling of the aliased type
    pub fn target(&self) -> String {
        format!("ExportedKotlinPackages.{}.{}", self.package_name, self.simple_name)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ArtifactLanguage {
    Kotlin,
    Swift,
}

impl ArtifactLanguage {
    pub fn extension(&self) -> &'static str {
        match self {
            ArtifactLanguage::Kotlin => "kt",
            ArtifactLanguage::Swift => "swift",
        }
    }
}

/// A rendered output file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedArtifact {
    pub file_name: String,
    pub language: ArtifactLanguage,
    /// Directory below the language's output root, `/`-separated, may be empty
    pub directory: String,
    pub content: String,
}
