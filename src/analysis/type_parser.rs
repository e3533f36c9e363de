use crate::analysis::lexer::{Lexer, TokenCursor, TokenKind};
use crate::models::TypeReference;

/// A type reference read from source text, before package resolution
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedType {
    pub type_ref: TypeReference,
    /// Annotations written on the type or any of its components, e.g. `@Composable`
    pub annotations: Vec<String>,
}

/// Parse a complete Kotlin type from text, e.g. `Map<String, List<Item?>>`
/// or `@Composable (Int) -> Unit`.
pub fn parse_type_text(text: &str) -> Result<ParsedType, String> {
    let tokens = Lexer::new(text).tokenize()?;
    let mut cursor = TokenCursor::new(&tokens);
    let parsed = parse_type(&mut cursor)?;
    if !cursor.is_at_end() {
        return Err(format!(
            "unexpected {} after type '{}'",
            cursor.describe_current(),
            parsed.type_ref
        ));
    }
    Ok(parsed)
}

/// Parse one type at the cursor
pub fn parse_type(cursor: &mut TokenCursor<'_>) -> Result<ParsedType, String> {
    let mut annotations = Vec::new();
    let type_ref = parse_type_inner(cursor, &mut annotations)?;
    Ok(ParsedType {
        type_ref,
        annotations,
    })
}

fn parse_type_inner(
    cursor: &mut TokenCursor<'_>,
    annotations: &mut Vec<String>,
) -> Result<TypeReference, String> {
    read_type_annotations(cursor, annotations)?;
    cursor.eat_ident("suspend");

    let mut type_ref = if cursor.at_symbol('(') {
        let components = parse_parenthesized_list(cursor, annotations)?;
        if cursor.peek().is_some_and(|t| t.kind == TokenKind::Arrow) {
            cursor.next();
            let return_type = parse_type_inner(cursor, annotations)?;
            TypeReference::function(components, return_type)
        } else {
            let mut components = components;
            match (components.pop(), components.is_empty()) {
                (Some(inner), true) => inner,
                _ => return Err("expected '->' after function type parameters".to_string()),
            }
        }
    } else {
        let named = parse_named(cursor, annotations)?;
        // Function type with receiver: `Receiver.(A) -> B`
        if cursor.at_symbol('.') && cursor.peek_ahead(1).is_some_and(|t| t.is_symbol('(')) {
            cursor.next();
            let mut parameters = vec![named];
            parameters.extend(parse_parenthesized_list(cursor, annotations)?);
            match cursor.next() {
                Some(token) if token.kind == TokenKind::Arrow => {}
                _ => return Err("expected '->' after receiver function type".to_string()),
            }
            let return_type = parse_type_inner(cursor, annotations)?;
            TypeReference::function(parameters, return_type)
        } else {
            named
        }
    };

    while cursor.eat_symbol('?') {
        type_ref.nullable = true;
    }
    Ok(type_ref)
}

fn read_type_annotations(
    cursor: &mut TokenCursor<'_>,
    annotations: &mut Vec<String>,
) -> Result<(), String> {
    while cursor.eat_symbol('@') {
        let name = cursor.qualified_name()?.join(".");
        if cursor.at_symbol('(') {
            cursor.skip_group()?;
        }
        annotations.push(name);
    }
    Ok(())
}

/// `( [name:] Type, ... )`: function type parameters or a parenthesized type
fn parse_parenthesized_list(
    cursor: &mut TokenCursor<'_>,
    annotations: &mut Vec<String>,
) -> Result<Vec<TypeReference>, String> {
    cursor.expect_symbol('(')?;
    let mut items = Vec::new();
    while !cursor.eat_symbol(')') {
        if cursor.peek().and_then(|t| t.ident()).is_some()
            && cursor.peek_ahead(1).is_some_and(|t| t.is_symbol(':'))
        {
            cursor.next();
            cursor.next();
        }
        items.push(parse_type_inner(cursor, annotations)?);
        if !cursor.eat_symbol(',') && !cursor.at_symbol(')') {
            return Err(format!(
                "expected ',' or ')' in type list but found {}",
                cursor.describe_current()
            ));
        }
    }
    Ok(items)
}

fn parse_named(
    cursor: &mut TokenCursor<'_>,
    annotations: &mut Vec<String>,
) -> Result<TypeReference, String> {
    if cursor.eat_symbol('*') {
        return Ok(TypeReference::star());
    }

    let segments = cursor.qualified_name()?;
    // Lower-case leading segments spell the package: `com.example.Outer.Inner`
    let split = segments
        .iter()
        .position(|s| s.chars().next().is_some_and(|c| c.is_uppercase()))
        .unwrap_or(segments.len() - 1);
    let (package, name) = segments.split_at(split);
    let mut type_ref = TypeReference::new(name.join("."), package.join("."));

    if cursor.eat_symbol('<') {
        loop {
            if cursor.eat_symbol('*') {
                type_ref.arguments.push(TypeReference::star());
            } else {
                // Variance modifiers only apply when another type follows them
                if (cursor.at_ident("in") || cursor.at_ident("out"))
                    && cursor.peek_ahead(1).is_some_and(|t| {
                        t.ident().is_some() || t.is_symbol('(') || t.is_symbol('@')
                    })
                {
                    cursor.next();
                }
                type_ref.arguments.push(parse_type_inner(cursor, annotations)?);
            }
            if cursor.eat_symbol('>') {
                break;
            }
            if !cursor.eat_symbol(',') {
                return Err(format!(
                    "expected ',' or '>' in type arguments but found {}",
                    cursor.describe_current()
                ));
            }
        }
    }
    Ok(type_ref)
}
