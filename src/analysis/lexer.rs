/// Token-level view of Kotlin source, just rich enough to read declarations
/// and type references. Comments are dropped, string literals are kept whole.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Ident(String),
    Str(String),
    Number(String),
    Arrow,
    Symbol(char),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
}

impl Token {
    pub fn is_symbol(&self, c: char) -> bool {
        self.kind == TokenKind::Symbol(c)
    }

    pub fn is_ident(&self, word: &str) -> bool {
        matches!(&self.kind, TokenKind::Ident(w) if w == word)
    }

    pub fn ident(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Ident(w) => Some(w),
            _ => None,
        }
    }

    /// Source-like spelling, used when an annotation argument is not a plain literal
    pub fn text(&self) -> String {
        match &self.kind {
            TokenKind::Ident(w) | TokenKind::Number(w) => w.clone(),
            TokenKind::Str(s) => format!("\"{}\"", s),
            TokenKind::Arrow => "->".to_string(),
            TokenKind::Symbol(c) => c.to_string(),
        }
    }
}

pub struct Lexer {
    chars: Vec<char>,
    pos: usize,
    line: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
            line: 1,
        }
    }

    pub fn tokenize(mut self) -> Result<Vec<Token>, String> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace_and_comments()?;
            let Some(ch) = self.peek_char() else {
                break;
            };
            let line = self.line;

            let kind = if ch == '"' {
                TokenKind::Str(self.read_string()?)
            } else if ch == '\'' {
                TokenKind::Str(self.read_char_literal()?)
            } else if ch == '`' {
                TokenKind::Ident(self.read_backticked()?)
            } else if ch.is_alphabetic() || ch == '_' {
                TokenKind::Ident(self.read_while(|c| c.is_alphanumeric() || c == '_'))
            } else if ch.is_ascii_digit() {
                TokenKind::Number(self.read_while(|c| c.is_ascii_alphanumeric() || c == '.' || c == '_'))
            } else if ch == '-' && self.peek_ahead(1) == Some('>') {
                self.pos += 2;
                TokenKind::Arrow
            } else {
                self.pos += 1;
                TokenKind::Symbol(ch)
            };

            tokens.push(Token { kind, line });
        }
        Ok(tokens)
    }

    fn peek_char(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_ahead(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.pos += 1;
        if ch == '\n' {
            self.line += 1;
        }
        Some(ch)
    }

    fn read_while(&mut self, predicate: impl Fn(char) -> bool) -> String {
        let mut out = String::new();
        while let Some(ch) = self.peek_char() {
            if !predicate(ch) {
                break;
            }
            out.push(ch);
            self.pos += 1;
        }
        out
    }

    fn skip_whitespace_and_comments(&mut self) -> Result<(), String> {
        loop {
            match (self.peek_char(), self.peek_ahead(1)) {
                (Some(c), _) if c.is_whitespace() => {
                    self.bump();
                }
                (Some('/'), Some('/')) => {
                    while let Some(c) = self.peek_char() {
                        if c == '\n' {
                            break;
                        }
                        self.pos += 1;
                    }
                }
                (Some('/'), Some('*')) => {
                    // Kotlin block comments nest
                    let start_line = self.line;
                    self.pos += 2;
                    let mut depth = 1;
                    while depth > 0 {
                        match (self.peek_char(), self.peek_ahead(1)) {
                            (Some('/'), Some('*')) => {
                                self.pos += 2;
                                depth += 1;
                            }
                            (Some('*'), Some('/')) => {
                                self.pos += 2;
                                depth -= 1;
                            }
                            (Some(_), _) => {
                                self.bump();
                            }
                            (None, _) => {
                                return Err(format!(
                                    "unterminated block comment starting on line {}",
                                    start_line
                                ))
                            }
                        }
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn read_string(&mut self) -> Result<String, String> {
        let start_line = self.line;
        let raw = self.peek_ahead(1) == Some('"') && self.peek_ahead(2) == Some('"');
        self.pos += if raw { 3 } else { 1 };

        let mut out = String::new();
        loop {
            match self.peek_char() {
                None => {
                    return Err(format!(
                        "unterminated string literal starting on line {}",
                        start_line
                    ))
                }
                Some('"') if raw => {
                    // Extra quotes before the closing triple belong to the content
                    if self.peek_ahead(1) == Some('"')
                        && self.peek_ahead(2) == Some('"')
                        && self.peek_ahead(3) != Some('"')
                    {
                        self.pos += 3;
                        return Ok(out);
                    }
                    out.push('"');
                    self.pos += 1;
                }
                Some('"') => {
                    self.pos += 1;
                    return Ok(out);
                }
                Some('\\') if !raw => {
                    self.pos += 1;
                    if let Some(escaped) = self.bump() {
                        out.push('\\');
                        out.push(escaped);
                    }
                }
                Some('$') if self.peek_ahead(1) == Some('{') => {
                    out.push_str(&self.read_template_expression()?);
                }
                Some(_) => {
                    if let Some(ch) = self.bump() {
                        out.push(ch);
                    }
                }
            }
        }
    }

    /// `${ ... }` inside a string; may itself contain braces and strings
    fn read_template_expression(&mut self) -> Result<String, String> {
        let mut out = String::from("${");
        self.pos += 2;
        let mut depth = 1;
        while depth > 0 {
            match self.peek_char() {
                None => return Err("unterminated string template".to_string()),
                Some('"') => {
                    let inner = self.read_string()?;
                    out.push('"');
                    out.push_str(&inner);
                    out.push('"');
                }
                Some(ch) => {
                    if ch == '{' {
                        depth += 1;
                    } else if ch == '}' {
                        depth -= 1;
                    }
                    out.push(ch);
                    self.bump();
                }
            }
        }
        Ok(out)
    }

    fn read_char_literal(&mut self) -> Result<String, String> {
        self.pos += 1;
        let mut out = String::new();
        loop {
            match self.bump() {
                None | Some('\n') => return Err("unterminated character literal".to_string()),
                Some('\\') => {
                    out.push('\\');
                    if let Some(escaped) = self.bump() {
                        out.push(escaped);
                    }
                }
                Some('\'') => return Ok(out),
                Some(ch) => out.push(ch),
            }
        }
    }

    fn read_backticked(&mut self) -> Result<String, String> {
        self.pos += 1;
        let mut out = String::new();
        loop {
            match self.bump() {
                None | Some('\n') => return Err("unterminated backticked identifier".to_string()),
                Some('`') => return Ok(out),
                Some(ch) => out.push(ch),
            }
        }
    }
}

/// Forward-only cursor over a token slice
pub struct TokenCursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> TokenCursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    pub fn peek_ahead(&self, offset: usize) -> Option<&'a Token> {
        self.tokens.get(self.pos + offset)
    }

    pub fn next(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Line of the current token, or of the last one at end of input
    pub fn line(&self) -> usize {
        self.peek()
            .or_else(|| self.tokens.last())
            .map(|t| t.line)
            .unwrap_or(1)
    }

    pub fn at_symbol(&self, c: char) -> bool {
        self.peek().is_some_and(|t| t.is_symbol(c))
    }

    pub fn at_ident(&self, word: &str) -> bool {
        self.peek().is_some_and(|t| t.is_ident(word))
    }

    pub fn eat_symbol(&mut self, c: char) -> bool {
        if self.at_symbol(c) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    pub fn eat_ident(&mut self, word: &str) -> bool {
        if self.at_ident(word) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    pub fn expect_symbol(&mut self, c: char) -> Result<(), String> {
        if self.eat_symbol(c) {
            Ok(())
        } else {
            Err(format!("expected '{}' but found {}", c, self.describe_current()))
        }
    }

    pub fn expect_ident(&mut self) -> Result<String, String> {
        match self.peek().and_then(|t| t.ident()) {
            Some(word) => {
                self.pos += 1;
                Ok(word.to_string())
            }
            None => Err(format!("expected identifier but found {}", self.describe_current())),
        }
    }

    /// `a.b.c`, stopping before a `.` that is not followed by an identifier
    pub fn qualified_name(&mut self) -> Result<Vec<String>, String> {
        let mut segments = vec![self.expect_ident()?];
        while self.at_symbol('.') && self.peek_ahead(1).and_then(|t| t.ident()).is_some() {
            self.pos += 1;
            segments.push(self.expect_ident()?);
        }
        Ok(segments)
    }

    /// Skip a balanced group starting at the current opening symbol
    pub fn skip_group(&mut self) -> Result<(), String> {
        let start_line = self.line();
        let mut depth = 0usize;
        while let Some(token) = self.next() {
            match token.kind {
                TokenKind::Symbol('(') | TokenKind::Symbol('[') | TokenKind::Symbol('{') => {
                    depth += 1
                }
                TokenKind::Symbol(')') | TokenKind::Symbol(']') | TokenKind::Symbol('}') => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        return Ok(());
                    }
                }
                _ => {}
            }
        }
        Err(format!("unbalanced brackets starting on line {}", start_line))
    }

    /// Skip tokens until one of `stops` at bracket depth zero (not consumed)
    pub fn skip_until_any(&mut self, stops: &[char]) -> Result<(), String> {
        while let Some(token) = self.peek() {
            match token.kind {
                TokenKind::Symbol(c) if stops.contains(&c) => return Ok(()),
                TokenKind::Symbol('(') | TokenKind::Symbol('[') | TokenKind::Symbol('{') => {
                    self.skip_group()?
                }
                _ => self.pos += 1,
            }
        }
        Err(format!("expected one of {:?} before end of input", stops))
    }

    pub fn describe_current(&self) -> String {
        match self.peek() {
            Some(token) => format!("'{}'", token.text()),
            None => "end of input".to_string(),
        }
    }
}
