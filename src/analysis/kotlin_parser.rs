use crate::analysis::lexer::{Lexer, Token, TokenCursor, TokenKind};
use crate::analysis::type_parser;
use crate::models::{
    matches_marker, Annotation, FunctionDeclaration, Parameter, SourceFile, TypeReference,
    ENTRY_MARKER, ENTRY_MARKER_ARGUMENTS,
};
use crate::{Error, Result};
use std::collections::{HashMap, HashSet};

/// Keywords introducing a top-level type name
const TYPE_DECLARATIONS: &[&str] = &["class", "interface", "object", "typealias"];

/// Declaration modifiers that may sit between annotations and `fun`
const MODIFIERS: &[&str] = &[
    "public", "internal", "private", "protected", "inline", "suspend", "actual", "expect",
    "external", "tailrec", "operator", "infix",
];

const PARAMETER_MODIFIERS: &[&str] = &["vararg", "noinline", "crossinline"];

const KOTLIN_TYPES: &[&str] = &[
    "Any", "Unit", "Nothing", "String", "CharSequence", "Int", "Long", "Short", "Byte", "Float",
    "Double", "Boolean", "Char", "UInt", "ULong", "UShort", "UByte", "Number", "Array",
    "IntArray", "LongArray", "ShortArray", "ByteArray", "FloatArray", "DoubleArray",
    "BooleanArray", "CharArray", "Pair", "Triple", "Comparable", "Throwable", "Result", "Lazy",
];

const KOTLIN_COLLECTION_TYPES: &[&str] = &[
    "List", "MutableList", "Set", "MutableSet", "Map", "MutableMap", "Collection",
    "MutableCollection", "Iterable", "MutableIterable", "ArrayList", "HashMap", "HashSet",
    "LinkedHashMap", "LinkedHashSet",
];

/// Reads the package, imports and top-level function declarations of a Kotlin file.
///
/// Only functions carrying the entry marker get their parameter lists parsed;
/// other functions are recorded with their annotations so the symbol table can
/// still be queried by annotation.
#[derive(Debug, Clone, Copy)]
pub struct KotlinSourceParser;

impl KotlinSourceParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, path: &str, content: &str) -> Result<SourceFile> {
        let tokens = Lexer::new(content).tokenize().map_err(|message| Error::Parse {
            path: path.to_string(),
            line: 0,
            message,
        })?;
        let mut state = FileState::new(&tokens);
        state.parse().map_err(|(line, message)| Error::Parse {
            path: path.to_string(),
            line,
            message,
        })?;

        let imports = state.imports;
        let package_name = state.package_name;
        let declared_types = state.declared_types;
        let functions = state
            .functions
            .into_iter()
            .map(|mut function| {
                for parameter in &mut function.declaration.parameters {
                    imports.resolve(
                        &mut parameter.type_ref,
                        &package_name,
                        &function.type_parameters,
                    );
                }
                function.declaration
            })
            .collect();

        Ok(SourceFile {
            path: path.to_string(),
            package_name,
            functions,
            wildcard_imports: imports.wildcards,
            declared_types,
        })
    }
}

impl Default for KotlinSourceParser {
    fn default() -> Self {
        Self::new()
    }
}

struct ParsedFunction {
    declaration: FunctionDeclaration,
    type_parameters: HashSet<String>,
}

type ParseResult<T> = std::result::Result<T, (usize, String)>;

struct FileState<'a> {
    cursor: TokenCursor<'a>,
    package_name: String,
    imports: ImportTable,
    functions: Vec<ParsedFunction>,
    declared_types: Vec<String>,
}

impl<'a> FileState<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Self {
            cursor: TokenCursor::new(tokens),
            package_name: String::new(),
            imports: ImportTable::default(),
            functions: Vec::new(),
            declared_types: Vec::new(),
        }
    }

    fn fail<T>(&self, message: String) -> ParseResult<T> {
        Err((self.cursor.line(), message))
    }

    fn lift<T>(&self, result: std::result::Result<T, String>) -> ParseResult<T> {
        match result {
            Ok(value) => Ok(value),
            Err(message) => self.fail(message),
        }
    }

    fn parse(&mut self) -> ParseResult<()> {
        let mut pending: Vec<Annotation> = Vec::new();
        let mut depth = 0usize;

        while let Some(token) = self.cursor.peek() {
            if depth > 0 {
                match token.kind {
                    TokenKind::Symbol('{') => depth += 1,
                    TokenKind::Symbol('}') => depth -= 1,
                    _ => {}
                }
                self.cursor.next();
                continue;
            }

            match &token.kind {
                TokenKind::Ident(word) if word == "package" => {
                    self.cursor.next();
                    let name = self.cursor.qualified_name();
                    self.package_name = self.lift(name)?.join(".");
                    pending.clear();
                }
                TokenKind::Ident(word) if word == "import" => {
                    self.cursor.next();
                    self.parse_import()?;
                    pending.clear();
                }
                TokenKind::Ident(word) if word == "fun" => {
                    self.cursor.next();
                    let annotations = std::mem::take(&mut pending);
                    self.parse_function(annotations)?;
                }
                TokenKind::Ident(word) if TYPE_DECLARATIONS.contains(&word.as_str()) => {
                    self.cursor.next();
                    if let Some(name) = self.cursor.peek().and_then(|t| t.ident()) {
                        self.declared_types.push(name.to_string());
                        self.cursor.next();
                    }
                    pending.clear();
                }
                TokenKind::Ident(word) if MODIFIERS.contains(&word.as_str()) => {
                    self.cursor.next();
                }
                TokenKind::Symbol('@') => {
                    self.cursor.next();
                    if let Some(annotation) = self.parse_annotation()? {
                        pending.push(annotation);
                    }
                }
                TokenKind::Symbol('{') => {
                    self.cursor.next();
                    depth += 1;
                    pending.clear();
                }
                _ => {
                    self.cursor.next();
                    pending.clear();
                }
            }
        }
        Ok(())
    }

    fn parse_import(&mut self) -> ParseResult<()> {
        let segments = self.cursor.qualified_name();
        let segments = self.lift(segments)?;
        if self.cursor.at_symbol('.') && self.cursor.peek_ahead(1).is_some_and(|t| t.is_symbol('*'))
        {
            self.cursor.next();
            self.cursor.next();
            self.imports.wildcards.push(segments.join("."));
            return Ok(());
        }

        let Some((name, package)) = segments.split_last() else {
            return self.fail("empty import".to_string());
        };
        let alias = if self.cursor.eat_ident("as") {
            let alias = self.cursor.expect_ident();
            self.lift(alias)?
        } else {
            name.clone()
        };
        self.imports
            .explicit
            .insert(alias, (package.join("."), name.clone()));
        Ok(())
    }

    /// Reads an annotation after its `@`. File-targeted annotations return `None`.
    fn parse_annotation(&mut self) -> ParseResult<Option<Annotation>> {
        let file_target = self.cursor.at_ident("file")
            && self.cursor.peek_ahead(1).is_some_and(|t| t.is_symbol(':'));
        if file_target {
            self.cursor.next();
            self.cursor.next();
        }

        let name = self.cursor.qualified_name();
        let name = self.lift(name)?.join(".");
        let mut annotation = Annotation::new(name);
        if self.cursor.at_symbol('(') {
            self.parse_annotation_arguments(&mut annotation)?;
        }
        Ok(if file_target { None } else { Some(annotation) })
    }

    fn parse_annotation_arguments(&mut self, annotation: &mut Annotation) -> ParseResult<()> {
        let opened = self.cursor.expect_symbol('(');
        self.lift(opened)?;
        let positional_names: &[&str] = if matches_marker(&annotation.name, ENTRY_MARKER) {
            &ENTRY_MARKER_ARGUMENTS
        } else {
            &[]
        };

        let mut index = 0;
        while !self.cursor.eat_symbol(')') {
            let named = self.cursor.peek().and_then(|t| t.ident()).is_some()
                && self.cursor.peek_ahead(1).is_some_and(|t| t.is_symbol('='));
            let key = if named {
                let key = self.cursor.expect_ident();
                let key = self.lift(key)?;
                self.cursor.next();
                key
            } else {
                positional_names
                    .get(index)
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| format!("arg{}", index))
            };

            let value = self.read_argument_value()?;
            annotation.arguments.insert(key, value);
            index += 1;

            if !self.cursor.eat_symbol(',') && !self.cursor.at_symbol(')') {
                let found = self.cursor.describe_current();
                return self.fail(format!(
                    "expected ',' or ')' in arguments of @{} but found {}",
                    annotation.name, found
                ));
            }
        }
        Ok(())
    }

    fn read_argument_value(&mut self) -> ParseResult<serde_json::Value> {
        let start = self.cursor.peek().cloned();
        let next_is_end = self
            .cursor
            .peek_ahead(1)
            .is_some_and(|t| t.is_symbol(',') || t.is_symbol(')'));

        if let (Some(token), true) = (&start, next_is_end) {
            let value = match &token.kind {
                TokenKind::Str(s) => Some(serde_json::Value::String(s.clone())),
                TokenKind::Ident(w) if w == "true" => Some(serde_json::Value::Bool(true)),
                TokenKind::Ident(w) if w == "false" => Some(serde_json::Value::Bool(false)),
                _ => None,
            };
            if let Some(value) = value {
                self.cursor.next();
                return Ok(value);
            }
        }

        // Anything else is kept as its source spelling
        let mut text = String::new();
        let mut depth = 0usize;
        while let Some(token) = self.cursor.peek() {
            match token.kind {
                TokenKind::Symbol(',') | TokenKind::Symbol(')') if depth == 0 => break,
                TokenKind::Symbol('(') | TokenKind::Symbol('[') | TokenKind::Symbol('{') => depth += 1,
                TokenKind::Symbol(')') | TokenKind::Symbol(']') | TokenKind::Symbol('}') => {
                    depth = depth.saturating_sub(1)
                }
                _ => {}
            }
            text.push_str(&token.text());
            self.cursor.next();
        }
        if depth > 0 {
            return self.fail("unbalanced brackets in annotation argument".to_string());
        }
        Ok(serde_json::Value::String(text))
    }

    fn parse_function(&mut self, annotations: Vec<Annotation>) -> ParseResult<()> {
        let line = self.cursor.line();
        let is_entry = annotations.iter().any(|a| a.is(ENTRY_MARKER));
        let mut type_parameters = HashSet::new();
        if self.cursor.eat_symbol('<') {
            self.read_type_parameters(&mut type_parameters)?;
        }

        // Anonymous functions and `fun interface` declarations
        if self.cursor.peek().and_then(|t| t.ident()).is_none() || self.cursor.at_ident("interface") {
            return Ok(());
        }

        // Extension receivers are skipped: the last segment before `(` is the name
        let segments = self.cursor.qualified_name();
        let mut segments = self.lift(segments)?;
        loop {
            if self.cursor.eat_symbol('<') {
                self.read_type_parameters(&mut HashSet::new())?;
            } else if !self.cursor.eat_symbol('?') {
                break;
            }
            if self.cursor.eat_symbol('.') {
                let rest = self.cursor.qualified_name();
                segments = self.lift(rest)?;
            }
        }
        let name = segments.last().cloned().unwrap_or_default();

        if !self.cursor.at_symbol('(') {
            if !is_entry {
                return Ok(());
            }
            let found = self.cursor.describe_current();
            return self.fail(format!("expected '(' after fun {} but found {}", name, found));
        }

        let parameters = if is_entry {
            self.parse_parameters(&name)?
        } else {
            let skipped = self.cursor.skip_group();
            self.lift(skipped)?;
            Vec::new()
        };

        self.functions.push(ParsedFunction {
            declaration: FunctionDeclaration {
                name,
                line,
                annotations,
                parameters,
            },
            type_parameters,
        });
        Ok(())
    }

    fn read_type_parameters(&mut self, names: &mut HashSet<String>) -> ParseResult<()> {
        let mut depth = 1;
        let mut expect_name = true;
        while depth > 0 {
            let Some(token) = self.cursor.next() else {
                return self.fail("unterminated type parameter list".to_string());
            };
            match &token.kind {
                TokenKind::Symbol('<') => depth += 1,
                TokenKind::Symbol('>') => depth -= 1,
                TokenKind::Symbol(',') if depth == 1 => expect_name = true,
                TokenKind::Ident(word)
                    if depth == 1 && expect_name && word != "reified" && word != "in" && word != "out" =>
                {
                    names.insert(word.clone());
                    expect_name = false;
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn parse_parameters(&mut self, function_name: &str) -> ParseResult<Vec<Parameter>> {
        let opened = self.cursor.expect_symbol('(');
        self.lift(opened)?;
        let mut parameters = Vec::new();

        while !self.cursor.eat_symbol(')') {
            let mut annotations = Vec::new();
            loop {
                if self.cursor.eat_symbol('@') {
                    if let Some(annotation) = self.parse_annotation()? {
                        annotations.push(annotation.name);
                    }
                } else if PARAMETER_MODIFIERS
                    .iter()
                    .any(|m| self.cursor.at_ident(m))
                {
                    self.cursor.next();
                } else {
                    break;
                }
            }

            let name = self.cursor.expect_ident();
            let name = self.lift(name)?;
            if !self.cursor.eat_symbol(':') {
                let found = self.cursor.describe_current();
                return self.fail(format!(
                    "expected ':' after parameter {} of {} but found {}",
                    name, function_name, found
                ));
            }

            let parsed = type_parser::parse_type(&mut self.cursor);
            let parsed = self.lift(parsed)?;
            annotations.extend(parsed.annotations);

            if self.cursor.eat_symbol('=') {
                let skipped = self.cursor.skip_until_any(&[',', ')']);
                self.lift(skipped)?;
            }

            parameters.push(Parameter {
                name,
                type_ref: parsed.type_ref,
                annotations,
            });

            if !self.cursor.eat_symbol(',') && !self.cursor.at_symbol(')') {
                let found = self.cursor.describe_current();
                return self.fail(format!(
                    "expected ',' or ')' in parameters of {} but found {}",
                    function_name, found
                ));
            }
        }
        Ok(parameters)
    }
}

/// Import directives of one file, used to find the package of a simple type name
#[derive(Debug, Default)]
struct ImportTable {
    /// visible name -> (package, declared name)
    explicit: HashMap<String, (String, String)>,
    /// Packages of `.*` imports
    wildcards: Vec<String>,
}

impl ImportTable {
    /// Fill in packages: explicit import, then Kotlin built-ins, then the file's own package.
    /// Names that may come from a star import are settled later, once every file is known.
    fn resolve(&self, type_ref: &mut TypeReference, file_package: &str, type_parameters: &HashSet<String>) {
        for argument in &mut type_ref.arguments {
            self.resolve(argument, file_package, type_parameters);
        }
        if type_ref.is_star() || !type_ref.package.is_empty() {
            return;
        }

        let (head, rest) = match type_ref.name.split_once('.') {
            Some((head, rest)) => (head.to_string(), Some(rest.to_string())),
            None => (type_ref.name.clone(), None),
        };

        if type_parameters.contains(&head) {
            return;
        }
        if let Some((package, declared)) = self.explicit.get(&head) {
            type_ref.package = package.clone();
            type_ref.name = match rest {
                Some(rest) => format!("{}.{}", declared, rest),
                None => declared.clone(),
            };
        } else if KOTLIN_TYPES.contains(&type_ref.name.as_str()) {
            type_ref.package = "kotlin".to_string();
        } else if KOTLIN_COLLECTION_TYPES.contains(&type_ref.name.as_str()) {
            type_ref.package = "kotlin.collections".to_string();
        } else {
            type_ref.package = file_package.to_string();
        }
    }
}
