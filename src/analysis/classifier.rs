use crate::models::{AnnotatedFunction, ClassifiedParameters, Parameter, ParameterRole};
use crate::{Error, Result};

/// Split a function's parameters into the optional state parameter and the
/// pass-through list used by the generated factory method.
///
/// Fails when more than one parameter carries the state marker, and when the
/// remaining parameters are not exactly the pass-through ones: a UI-builder
/// parameter has no counterpart on the native side, so its presence breaks
/// the count invariant. Names only expressible in backticks (`` `two words` ``)
/// have no Swift spelling and are rejected too.
pub fn classify(function: &AnnotatedFunction) -> Result<ClassifiedParameters> {
    if !is_plain_identifier(&function.name) {
        return Err(Error::InvalidParameterShape {
            function: function.qualified_name(),
            message: "the function name is not a plain identifier".to_string(),
        });
    }
    let unspellable: Vec<&str> = function
        .all_parameters()
        .map(|p| p.name.as_str())
        .filter(|name| !is_plain_identifier(name))
        .collect();
    if !unspellable.is_empty() {
        return Err(Error::InvalidParameterShape {
            function: function.qualified_name(),
            message: format!(
                "parameter names must be plain identifiers to be bridged: {}",
                unspellable
                    .iter()
                    .map(|name| format!("`{}`", name))
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        });
    }

    let states: Vec<&Parameter> = parameters_with_role(function, ParameterRole::State).collect();
    if states.len() > 1 {
        return Err(Error::MultipleStateMarkers {
            function: function.qualified_name(),
            parameters: states.iter().map(|p| p.name.clone()).collect(),
        });
    }

    let pass_through: Vec<Parameter> = parameters_with_role(function, ParameterRole::PassThrough)
        .cloned()
        .collect();

    let expected = function.parameters.len() - states.len();
    if pass_through.len() != expected {
        let builders: Vec<String> = parameters_with_role(function, ParameterRole::UiBuilder)
            .map(|p| p.name.clone())
            .collect();
        return Err(Error::InvalidParameterShape {
            function: function.qualified_name(),
            message: format!(
                "expected {} pass-through parameter(s) but found {}; parameters annotated with @Composable cannot be bridged: {}",
                expected,
                pass_through.len(),
                builders.join(", ")
            ),
        });
    }

    Ok(ClassifiedParameters {
        state: states.first().map(|p| (*p).clone()),
        pass_through,
    })
}

/// Letters, digits and `_`, not starting with a digit
fn is_plain_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|first| first.is_alphabetic() || first == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_')
}

fn parameters_with_role(
    function: &AnnotatedFunction,
    role: ParameterRole,
) -> impl Iterator<Item = &Parameter> {
    function
        .parameters
        .iter()
        .filter(move |p| p.role == role)
        .map(|p| &p.parameter)
}
