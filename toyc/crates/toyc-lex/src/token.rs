//! Token definitions and the keyword table.
//!
//! [`TokenKind`] is the one closed set of lexical categories shared by every
//! dialect of the language. Which identifier spellings are reserved is not
//! part of the enumeration: that is decided by the [`KeywordTable`] a lexer
//! is built with, so a dialect is configuration rather than a code fork.

use std::fmt;
use std::str::FromStr;

use toyc_util::{FxHashMap, Span};

use crate::error::{KeywordError, KeywordResult};

/// The lexical category of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenKind {
    // Special
    /// A character no lexical rule accepts
    Illegal,
    /// End of input
    Eof,

    // Identifiers and literals
    /// Identifier that is not a reserved word
    Ident,
    /// Integer literal, e.g. `42`
    Int,
    /// Floating-point literal, e.g. `3.14`
    Float,
    /// Double-quoted string literal
    String,

    // Operators
    /// `=`
    Assign,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `!`
    Bang,
    /// `*`
    Asterisk,
    /// `/`
    Slash,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `==`
    Eq,
    /// `!=`
    NotEq,
    /// `<=`
    LtEq,
    /// `>=`
    GtEq,
    /// `&`
    Ampersand,
    /// `&&`
    And,
    /// `|`
    Pipe,
    /// `||`
    Or,

    // Delimiters
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `:`
    Colon,
    /// `.`
    Dot,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,

    // Keywords
    /// `func` (and `fn` in the standard dialect)
    Func,
    /// `let`
    Let,
    /// `const`
    Const,
    /// `var`
    Var,
    /// `true`
    True,
    /// `false`
    False,
    /// `null`
    Null,
    /// `if`
    If,
    /// `else`
    Else,
    /// `return`
    Return,
    /// `for`
    For,
    /// `while`
    While,
    /// `break`
    Break,
    /// `case`
    Case,
    /// `chan`
    Chan,
    /// `continue`
    Continue,
    /// `default`
    Default,
    /// `defer`
    Defer,
    /// `fallthrough`
    Fallthrough,
    /// `go`
    Go,
    /// `goto`
    Goto,
    /// `import`
    Import,
    /// `interface`
    Interface,
    /// `map`
    Map,
    /// `package`
    Package,
    /// `range`
    Range,
    /// `select`
    Select,
    /// `struct`
    Struct,
    /// `switch`
    Switch,
    /// `type`
    Type,
}

impl TokenKind {
    /// Every token kind, in declaration order.
    pub const ALL: &'static [TokenKind] = &[
        TokenKind::Illegal,
        TokenKind::Eof,
        TokenKind::Ident,
        TokenKind::Int,
        TokenKind::Float,
        TokenKind::String,
        TokenKind::Assign,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Bang,
        TokenKind::Asterisk,
        TokenKind::Slash,
        TokenKind::Lt,
        TokenKind::Gt,
        TokenKind::Eq,
        TokenKind::NotEq,
        TokenKind::LtEq,
        TokenKind::GtEq,
        TokenKind::Ampersand,
        TokenKind::And,
        TokenKind::Pipe,
        TokenKind::Or,
        TokenKind::Comma,
        TokenKind::Semicolon,
        TokenKind::Colon,
        TokenKind::Dot,
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::LBrace,
        TokenKind::RBrace,
        TokenKind::LBracket,
        TokenKind::RBracket,
        TokenKind::Func,
        TokenKind::Let,
        TokenKind::Const,
        TokenKind::Var,
        TokenKind::True,
        TokenKind::False,
        TokenKind::Null,
        TokenKind::If,
        TokenKind::Else,
        TokenKind::Return,
        TokenKind::For,
        TokenKind::While,
        TokenKind::Break,
        TokenKind::Case,
        TokenKind::Chan,
        TokenKind::Continue,
        TokenKind::Default,
        TokenKind::Defer,
        TokenKind::Fallthrough,
        TokenKind::Go,
        TokenKind::Goto,
        TokenKind::Import,
        TokenKind::Interface,
        TokenKind::Map,
        TokenKind::Package,
        TokenKind::Range,
        TokenKind::Select,
        TokenKind::Struct,
        TokenKind::Switch,
        TokenKind::Type,
    ];

    /// Stable upper-case label, e.g. `"IDENT"`, `"NOT_EQ"`, `"RETURN"`.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::Float => "FLOAT",
            TokenKind::String => "STRING",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Bang => "BANG",
            TokenKind::Asterisk => "ASTERISK",
            TokenKind::Slash => "SLASH",
            TokenKind::Lt => "LT",
            TokenKind::Gt => "GT",
            TokenKind::Eq => "EQ",
            TokenKind::NotEq => "NOT_EQ",
            TokenKind::LtEq => "LTE",
            TokenKind::GtEq => "GTE",
            TokenKind::Ampersand => "AMPERSAND",
            TokenKind::And => "AND",
            TokenKind::Pipe => "PIPE",
            TokenKind::Or => "OR",
            TokenKind::Comma => "COMMA",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Colon => "COLON",
            TokenKind::Dot => "DOT",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::LBracket => "LBRACKET",
            TokenKind::RBracket => "RBRACKET",
            TokenKind::Func => "FUNC",
            TokenKind::Let => "LET",
            TokenKind::Const => "CONST",
            TokenKind::Var => "VAR",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::Null => "NULL",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Return => "RETURN",
            TokenKind::For => "FOR",
            TokenKind::While => "WHILE",
            TokenKind::Break => "BREAK",
            TokenKind::Case => "CASE",
            TokenKind::Chan => "CHAN",
            TokenKind::Continue => "CONTINUE",
            TokenKind::Default => "DEFAULT",
            TokenKind::Defer => "DEFER",
            TokenKind::Fallthrough => "FALLTHROUGH",
            TokenKind::Go => "GO",
            TokenKind::Goto => "GOTO",
            TokenKind::Import => "IMPORT",
            TokenKind::Interface => "INTERFACE",
            TokenKind::Map => "MAP",
            TokenKind::Package => "PACKAGE",
            TokenKind::Range => "RANGE",
            TokenKind::Select => "SELECT",
            TokenKind::Struct => "STRUCT",
            TokenKind::Switch => "SWITCH",
            TokenKind::Type => "TYPE",
        }
    }

    /// Look a kind up by its [`name`](Self::name), ignoring ASCII case.
    ///
    /// ```
    /// use toyc_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::from_name("func"), Some(TokenKind::Func));
    /// assert_eq!(TokenKind::from_name("NOT_EQ"), Some(TokenKind::NotEq));
    /// assert_eq!(TokenKind::from_name("lambda"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<TokenKind> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }

    /// The fixed spelling of operators and delimiters.
    pub fn symbol(self) -> Option<&'static str> {
        let symbol = match self {
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Bang => "!",
            TokenKind::Asterisk => "*",
            TokenKind::Slash => "/",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::Eq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::LtEq => "<=",
            TokenKind::GtEq => ">=",
            TokenKind::Ampersand => "&",
            TokenKind::And => "&&",
            TokenKind::Pipe => "|",
            TokenKind::Or => "||",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::Dot => ".",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            _ => return None,
        };
        Some(symbol)
    }

    /// Returns true for reserved-word kinds.
    #[inline]
    pub fn is_keyword(self) -> bool {
        self >= TokenKind::Func
    }

    /// Returns true for identifier and literal kinds.
    #[inline]
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::Ident | TokenKind::Int | TokenKind::Float | TokenKind::String
        )
    }

    /// Returns true for operator kinds.
    #[inline]
    pub fn is_operator(self) -> bool {
        self >= TokenKind::Assign && self <= TokenKind::Or
    }

    /// Returns true for delimiter kinds.
    #[inline]
    pub fn is_delimiter(self) -> bool {
        self >= TokenKind::Comma && self <= TokenKind::RBracket
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified slice of source text.
///
/// `text` borrows from the lexer's input. For string literals it is the raw
/// content between the quotes, escape sequences left as written; `span`
/// still covers the quotes. The end-of-input token has empty `text`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token<'a> {
    /// Lexical category
    pub kind: TokenKind,
    /// Source text of the token
    pub text: &'a str,
    /// Location of the whole lexeme
    pub span: Span,
}

impl<'a> Token<'a> {
    /// Create a token.
    pub fn new(kind: TokenKind, text: &'a str, span: Span) -> Self {
        Self { kind, text, span }
    }

    /// Returns true for the end-of-input token.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Returns true if this token has the given kind.
    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.text)
    }
}

/// A named keyword-table preset.
///
/// ```
/// use toyc_lex::Dialect;
///
/// let dialect: Dialect = "go".parse().unwrap();
/// assert_eq!(dialect, Dialect::Go);
/// assert!("cobol".parse::<Dialect>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// `func`/`fn`, `let`, `const`, `var`, literals and basic control flow
    #[default]
    Standard,
    /// The Go reserved words
    Go,
}

impl Dialect {
    /// Every dialect.
    pub const ALL: [Dialect; 2] = [Dialect::Standard, Dialect::Go];

    /// Lower-case name used on the command line and in configuration.
    pub fn name(self) -> &'static str {
        match self {
            Dialect::Standard => "standard",
            Dialect::Go => "go",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = KeywordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dialect::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| KeywordError::UnknownDialect(s.to_string()))
    }
}

const STANDARD_KEYWORDS: &[(&str, TokenKind)] = &[
    ("func", TokenKind::Func),
    ("fn", TokenKind::Func),
    ("let", TokenKind::Let),
    ("const", TokenKind::Const),
    ("var", TokenKind::Var),
    ("true", TokenKind::True),
    ("false", TokenKind::False),
    ("null", TokenKind::Null),
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("return", TokenKind::Return),
    ("for", TokenKind::For),
    ("while", TokenKind::While),
];

const GO_KEYWORDS: &[(&str, TokenKind)] = &[
    ("break", TokenKind::Break),
    ("case", TokenKind::Case),
    ("chan", TokenKind::Chan),
    ("const", TokenKind::Const),
    ("continue", TokenKind::Continue),
    ("default", TokenKind::Default),
    ("defer", TokenKind::Defer),
    ("else", TokenKind::Else),
    ("fallthrough", TokenKind::Fallthrough),
    ("for", TokenKind::For),
    ("func", TokenKind::Func),
    ("go", TokenKind::Go),
    ("goto", TokenKind::Goto),
    ("if", TokenKind::If),
    ("import", TokenKind::Import),
    ("interface", TokenKind::Interface),
    ("map", TokenKind::Map),
    ("package", TokenKind::Package),
    ("range", TokenKind::Range),
    ("return", TokenKind::Return),
    ("select", TokenKind::Select),
    ("struct", TokenKind::Struct),
    ("switch", TokenKind::Switch),
    ("type", TokenKind::Type),
    ("var", TokenKind::Var),
];

/// Mapping from reserved spellings to keyword kinds.
///
/// # Example
///
/// ```
/// use toyc_lex::{KeywordTable, TokenKind};
///
/// let mut table = KeywordTable::standard();
/// assert_eq!(table.lookup_ident("let"), TokenKind::Let);
/// assert_eq!(table.lookup_ident("letx"), TokenKind::Ident);
///
/// table.insert("fun", TokenKind::Func).unwrap();
/// assert_eq!(table.lookup("fun"), Some(TokenKind::Func));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeywordTable {
    words: FxHashMap<String, TokenKind>,
}

impl KeywordTable {
    /// A table that reserves nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The standard dialect.
    pub fn standard() -> Self {
        Self::from_pairs(STANDARD_KEYWORDS)
    }

    /// The Go dialect.
    pub fn go() -> Self {
        Self::from_pairs(GO_KEYWORDS)
    }

    /// The preset for `dialect`.
    pub fn for_dialect(dialect: Dialect) -> Self {
        match dialect {
            Dialect::Standard => Self::standard(),
            Dialect::Go => Self::go(),
        }
    }

    fn from_pairs(pairs: &[(&str, TokenKind)]) -> Self {
        let words = pairs
            .iter()
            .map(|&(word, kind)| (word.to_string(), kind))
            .collect();
        Self { words }
    }

    /// Reserve `word` as `kind`, returning the kind it previously mapped to.
    ///
    /// # Errors
    ///
    /// [`KeywordError::InvalidSpelling`] if `word` could never be lexed as an
    /// identifier, [`KeywordError::NotAKeyword`] if `kind` is not a keyword
    /// kind.
    pub fn insert(&mut self, word: &str, kind: TokenKind) -> KeywordResult<Option<TokenKind>> {
        if !is_identifier_spelling(word) {
            return Err(KeywordError::InvalidSpelling(word.to_string()));
        }
        if !kind.is_keyword() {
            return Err(KeywordError::NotAKeyword {
                word: word.to_string(),
                kind,
            });
        }
        Ok(self.words.insert(word.to_string(), kind))
    }

    /// Like [`insert`](Self::insert), naming the kind by its label.
    ///
    /// # Errors
    ///
    /// [`KeywordError::UnknownKind`] when `kind_name` names no token kind,
    /// plus everything [`insert`](Self::insert) rejects.
    pub fn insert_named(&mut self, word: &str, kind_name: &str) -> KeywordResult<Option<TokenKind>> {
        let kind = TokenKind::from_name(kind_name)
            .ok_or_else(|| KeywordError::UnknownKind(kind_name.to_string()))?;
        self.insert(word, kind)
    }

    /// Stop reserving `word`.
    pub fn remove(&mut self, word: &str) -> Option<TokenKind> {
        self.words.remove(word)
    }

    /// The keyword kind for `word`, if it is reserved.
    #[inline]
    pub fn lookup(&self, word: &str) -> Option<TokenKind> {
        self.words.get(word).copied()
    }

    /// The keyword kind for `word`, or [`TokenKind::Ident`].
    #[inline]
    pub fn lookup_ident(&self, word: &str) -> TokenKind {
        self.lookup(word).unwrap_or(TokenKind::Ident)
    }

    /// Returns true if `word` is reserved.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    /// Number of reserved spellings.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if nothing is reserved.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Reserved spellings and their kinds, sorted by spelling.
    pub fn iter(&self) -> impl Iterator<Item = (&str, TokenKind)> {
        let mut entries: Vec<_> = self
            .words
            .iter()
            .map(|(word, kind)| (word.as_str(), *kind))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries.into_iter()
    }
}

/// `[A-Za-z_][A-Za-z0-9_]*`
fn is_identifier_spelling(word: &str) -> bool {
    let mut bytes = word.bytes();
    match bytes.next() {
        Some(first) if first.is_ascii_alphabetic() || first == b'_' => {},
        _ => return false,
    }
    bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_')
}
