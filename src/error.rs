//! # Error and Result for this crate
//!
//! This crate defines a common [Error] structure that's used across this crate, or that certain
//! utilities convert their errors to.
//!
//! Errors produced while parsing are split into two kinds, which are told apart using
//! [`Error::error_type`]:
//!
//! - [`ErrorType::Lexical`] errors are raised when no token matches the source text at a given
//!   position. Their [`Error::position`] is a character offset into the source text.
//! - [`ErrorType::Syntax`] errors are raised when the tokens don't form a valid document. Their
//!   [`Error::position`] is an index into the source's tokens, not counting whitespace.

use logos::Span;
use std::{error, fmt, result};

/// This crate's result type using the [Error] structure.
pub type Result<T> = result::Result<T, Error>;

/// This crate's error structure which internal errors are converted into.
///
/// The error is split into a general message and a context string. For parsing, for instance, the
/// context string is populated with a snippet of the source text that points at the offending
/// token or character.
///
/// The Error implements both the [`fmt::Display`] and [`fmt::Debug`] traits. It also implements
/// [`error::Error`] so that it can be used with existing patterns for error handling.
#[derive(PartialEq, Eq, Clone)]
pub struct Error {
    pub(crate) message: String,
    pub(crate) position: Option<usize>,
    pub(crate) location: Option<Location>,
    pub(crate) context: Option<String>,
    pub(crate) error_type: ErrorType,
}

/// The kind of an [Error].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorType {
    /// An error that isn't caused by parsing, e.g. when looking up an operation by name.
    GraphQL,
    /// No token could be matched at a position in the source text.
    Lexical,
    /// The source's tokens don't form the requested AST node.
    Syntax,
}

impl Error {
    /// Create a new Error with only a main message from an input string.
    pub fn new<S: Into<String>>(message: S, error_type: Option<ErrorType>) -> Self {
        Self {
            message: message.into(),
            position: None,
            location: None,
            context: None,
            error_type: error_type.unwrap_or(ErrorType::GraphQL),
        }
    }

    /// Create a new Error with a main message and a context string from two input strings.
    pub fn new_with_context<S: Into<String>>(
        message: S,
        location: Option<Location>,
        context: S,
        error_type: Option<ErrorType>,
    ) -> Self {
        Self {
            message: message.into(),
            position: None,
            location,
            context: Some(context.into()),
            error_type: error_type.unwrap_or(ErrorType::GraphQL),
        }
    }

    /// Attaches the offending position to this error.
    #[inline]
    pub(crate) fn at(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }

    /// Returns the message of the current error. The context is discarded.
    pub fn message(&self) -> &str {
        self.message.as_ref()
    }

    /// Returns the kind of the current error.
    pub fn error_type(&self) -> ErrorType {
        self.error_type
    }

    /// Returns the offending position of the current error.
    ///
    /// For lexical errors this is the character offset in the source text, for syntax errors
    /// it's the index of the offending token, whitespace excluded.
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    /// Returns the location of the current error.
    pub fn location(&self) -> &Option<Location> {
        &self.location
    }

    /// Formats this error, with the option to include the context information as well,
    /// which will cause the string to be multi-line.
    pub fn print(&self, include_ctx: bool) -> String {
        let formatted = match self.error_type {
            ErrorType::GraphQL => {
                format!("GraphQL Error: {}", self.message)
            }
            ErrorType::Lexical => {
                format!("Lexical Error: {}", self.message)
            }
            ErrorType::Syntax => {
                format!("Syntax Error: {}", self.message)
            }
        };

        match self.context {
            Some(ref context) if include_ctx => format!("{}\n{}", formatted, context),
            _ => formatted,
        }
    }
}

pub(crate) fn print_span(source: &str, span: Span) -> String {
    let mut out = String::new();
    let start_line = source[..span.start].matches('\n').count() + 1;

    let start = source[..span.start]
        .rfind('\n')
        .and_then(|start| source[..start].rfind('\n'))
        .map_or(0, |idx| idx + 1);

    let end = source[span.end..]
        .find('\n')
        .map_or(source.len(), |idx| idx + span.end);

    let snippet = &source[start..end];
    let first_line = start_line - source[start..span.start].matches('\n').count();
    let line_count = snippet.lines().count().max(1);
    let line_num_pad = (first_line + line_count - 1).to_string().len();
    for (index, line) in snippet.lines().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        let line_num = (first_line + index).to_string();
        out.push_str(&" ".repeat(line_num_pad - line_num.len() + 1));
        out.push_str(&line_num);
        out.push_str(" | ");
        out.push_str(line);
    }
    if !source[span.start..span.end].contains('\n') {
        let start = source[..span.start].rfind('\n').map_or(0, |idx| idx + 1);
        out.push('\n');
        out.push_str(&" ".repeat(line_num_pad + 1));
        out.push_str(" | ");
        out.push_str(&" ".repeat(source[start..span.start].chars().count()));
        out.push_str(&"^".repeat(source[span.start..span.end].chars().count().max(1)));
    };

    out
}

/// A 1-based line and column in a source text.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

pub(crate) fn get_location(source: &str, span: Span) -> Location {
    let prefix = &source[..span.start];
    let line = prefix.matches('\n').count() + 1;
    let column = prefix
        .rfind('\n')
        .map_or(prefix, |idx| &prefix[idx + 1..])
        .chars()
        .count()
        + 1;

    Location { line, column }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.print(true))
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n{}\n", self)
    }
}

impl error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locations() {
        assert_eq!(get_location("{ a }", 2..3), Location { line: 1, column: 3 });
        assert_eq!(
            get_location("{\n  a\n}", 4..5),
            Location { line: 2, column: 3 }
        );
        assert_eq!(get_location("", 0..0), Location { line: 1, column: 1 });
    }

    #[test]
    fn snippets() {
        assert_eq!(print_span("{ a $ }", 4..5), " 1 | { a $ }\n   |     ^");
        assert_eq!(
            print_span("query {\n  a\n  $\n}", 14..15),
            " 2 |   a\n 3 |   $\n   |   ^"
        );
        assert_eq!(print_span("{ ", 2..2), " 1 | { \n   |   ^");
    }

    #[test]
    fn printing() {
        let error = Error::new("Invalid Selection Set", Some(ErrorType::Syntax)).at(1);
        assert_eq!(error.print(false), "Syntax Error: Invalid Selection Set");
        assert_eq!(error.position(), Some(1));
        assert_eq!(error.error_type(), ErrorType::Syntax);

        let error = Error::new_with_context(
            "Unexpected character `%`",
            None,
            " 1 | %\n   | ^",
            Some(ErrorType::Lexical),
        );
        assert_eq!(
            error.to_string(),
            "Lexical Error: Unexpected character `%`\n 1 | %\n   | ^"
        );
    }
}
