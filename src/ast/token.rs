use super::ast::*;
use super::strings::scan_string;
use logos::Logos;

/// A lexical token of the GraphQL Query Language.
///
/// Tokens borrow their texts from the source they've been lexed from. String tokens carry the
/// raw text between their quotes, with escape sequences left as they were written.
///
/// Keyword tokens are only produced when the keyword is followed by whitespace, an opening
/// brace, or the end of the input. Otherwise [`lex`](super::lexer::lex) turns them into
/// [`Token::Name`] tokens.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token<'a> {
    #[regex(r"([ \t\n\r]+|#[^\n\r]*)+")]
    Whitespace,

    #[token("=")]
    Equal,

    #[token("!")]
    Exclam,

    #[token(":")]
    Colon,

    #[token(",")]
    Comma,

    #[token("...")]
    Ellipsis,

    #[token("&")]
    Ampersand,

    #[token("query")]
    Query,

    #[token("mutation")]
    Mutation,

    #[token("subscription")]
    Subscription,

    #[token("on")]
    On,

    #[token("fragment")]
    Fragment,

    #[token("scalar")]
    Scalar,

    #[token("type")]
    Type,

    #[token("implements")]
    Implements,

    #[regex(r"-?[0-9]+[.][0-9]+", |lex| lex.slice())]
    Float(&'a str),

    #[regex(r"-?[0-9]+", |lex| lex.slice())]
    Integer(&'a str),

    #[regex(r#"""?"?"#, scan_string)]
    String(StringValue<'a>),

    #[token("true", |_| true)]
    #[token("false", |_| false)]
    Boolean(bool),

    #[token("null")]
    Null,

    #[regex(r"[_a-zA-Z][_0-9a-zA-Z]*", |lex| lex.slice())]
    Name(&'a str),

    #[regex(r"\$[_0-9a-zA-Z]+", |lex| &lex.slice()[1..])]
    VariableName(&'a str),

    #[regex(r"@[_0-9a-zA-Z]+", |lex| &lex.slice()[1..])]
    DirectiveName(&'a str),

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    #[error]
    Error,

    /// Token indicates the end of the input
    End,
}

impl<'a> Token<'a> {
    /// Views a literal token as an AST [Value].
    ///
    /// Only integer, float, string, boolean, and null tokens have a value.
    #[inline]
    pub fn as_value(&self) -> Option<Value<'a>> {
        match *self {
            Token::Integer(value) => Some(Value::Int(IntValue { value })),
            Token::Float(value) => Some(Value::Float(FloatValue { value })),
            Token::String(value) => Some(Value::String(value)),
            Token::Boolean(value) => Some(Value::Boolean(BooleanValue { value })),
            Token::Null => Some(Value::Null),
            _ => None,
        }
    }

    /// Views a name, variable, or directive token as its bare name, without any sigil.
    #[inline]
    pub fn as_str(&self) -> Option<&'a str> {
        match *self {
            Token::Name(name) | Token::VariableName(name) | Token::DirectiveName(name) => {
                Some(name)
            }
            _ => None,
        }
    }

    /// Returns the source text of a keyword token.
    #[inline]
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            Token::Query => Some("query"),
            Token::Mutation => Some("mutation"),
            Token::Subscription => Some("subscription"),
            Token::On => Some("on"),
            Token::Fragment => Some("fragment"),
            Token::Scalar => Some("scalar"),
            Token::Type => Some("type"),
            Token::Implements => Some("implements"),
            _ => None,
        }
    }

    #[inline]
    pub fn is_whitespace(&self) -> bool {
        matches!(self, Token::Whitespace)
    }
}
