//! # GraphQL Query Language AST
//!
//! The `graphql_frontend::ast` module contains the lexer, the token model, the AST and the traits
//! to parse and print GraphQL query language documents. Besides executable definitions it also
//! parses scalar and object type definitions.
//! [Reference](https://spec.graphql.org/October2021/#sec-Language)
//!
//! It's easiest to use this module by importing all of it, however, its main parts are:
//! - [`ASTContext`], a context containing an arena that defines the lifetime for an AST
//! - [`lex`], which splits a source text into [`Token`]s
//! - [`ParseNode`], a trait using which AST Nodes are parsed from source text
//! - [`PrintNode`], a trait using which AST Nodes are printed into source text
//!
//! The following workflow describes the minimum that's done using this module and while an AST
//! Context is active in the given scope.
//!
//! ```
//! use graphql_frontend::ast::*;
//!
//! // Create an AST Context for a document
//! let ctx = ASTContext::new();
//!
//! // Parse a source text into a Document AST root node
//! let ast = parse(&ctx, "{ field }").unwrap();
//!
//! // Print the Document node to an output String
//! let output = ast.print();
//! assert_eq!(output, "{\n  field\n}");
//! ```
//!
//! Parsing fails with a lexical [Error](crate::error::Error) when a character can't be lexed, and
//! with a syntax error when the tokens don't form a document.
//!
//! ```
//! use graphql_frontend::{ast::*, error::ErrorType};
//!
//! let ctx = ASTContext::new();
//! let error = parse(&ctx, "{ ").unwrap_err();
//! assert_eq!(error.error_type(), ErrorType::Syntax);
//! ```

#[allow(clippy::module_inception)]
mod ast;

mod ast_conversion;
mod ast_kind;
mod lexer;
mod parser;
mod printer;
mod strings;
mod token;

pub use ast::*;
pub use ast_kind::ASTKind;
pub use lexer::lex;
pub use parser::ParseNode;
pub use printer::PrintNode;
pub use token::Token;

use crate::error::Result;

/// Parses a source text into a [Document] that's allocated onto the given [ASTContext].
///
/// This is a shorthand for `Document::parse(ctx, source)`.
#[inline]
pub fn parse<'a>(ctx: &'a ASTContext, source: &str) -> Result<&'a Document<'a>> {
    Document::parse(ctx, source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorType;

    #[test]
    fn simple_selection() {
        let ctx = ASTContext::new();
        let document = parse(&ctx, "{ test }").unwrap();
        let operation = document.operation(None).unwrap();
        assert_eq!(operation.operation, OperationKind::Query);
        assert_eq!(operation.name, None);
        assert!(operation.variable_definitions.is_empty());
        assert_eq!(
            operation.selection_set.selections[0],
            Selection::Field(Field::new_leaf(&ctx, "test"))
        );
    }

    #[test]
    fn aliased_field() {
        let ctx = ASTContext::new();
        let document = parse(&ctx, "{ shortPic: profilePic(size: 64) }").unwrap();
        let field = document.operation(None).unwrap().selection_set.selections[0]
            .field()
            .unwrap();
        assert_eq!(field.alias, Some("shortPic"));
        assert_eq!(field.name, "profilePic");
        assert_eq!(field.alias_or_name(), "shortPic");
        assert_eq!(
            field.arguments.children[0].value,
            Value::Int(IntValue { value: "64" })
        );
    }

    #[test]
    fn fragment_disambiguation() {
        let ctx = ASTContext::new();
        let document = parse(&ctx, "{ ... on Foo { a } }").unwrap();
        let selection = &document.operation(None).unwrap().selection_set.selections[0];
        let inline = selection.inline_fragment().unwrap();
        assert_eq!(
            inline.type_condition,
            Some(Type::NamedType(NamedType { name: "Foo" }))
        );

        let document = parse(&ctx, "{ ...Foo }").unwrap();
        let selection = &document.operation(None).unwrap().selection_set.selections[0];
        assert_eq!(selection.fragment_spread().unwrap().name.name, "Foo");
    }

    #[test]
    fn failures() {
        let ctx = ASTContext::new();
        assert_eq!(
            parse(&ctx, "{ ").unwrap_err().error_type(),
            ErrorType::Syntax
        );
        assert_eq!(
            parse(&ctx, "{ a(b: ~) }").unwrap_err().error_type(),
            ErrorType::Lexical
        );
        assert_eq!(
            parse(&ctx, "{ a(b: \"unterminated) }").unwrap_err().error_type(),
            ErrorType::Lexical
        );
    }
}
