//! `graphql_frontend`
//! =========
//!
//! _A lexer, parser and AST for the GraphQL Query Language._
//!
//! The **`graphql_frontend`** library turns GraphQL source text into an arena-allocated syntax
//! tree. It's split into a few stages that may each be used on their own:
//!
//! - [`ast::lex`] splits a source text into tokens and fails on the first character that doesn't
//!   start a token.
//! - [`ast::ParseNode`] parses tokens into any AST node using recursive descent with
//!   backtracking, most commonly a whole [`ast::Document`].
//! - [`ast::PrintNode`] prints AST nodes back into canonical source text.
//!
//! All AST nodes borrow from an [`ast::ASTContext`], which owns both the source text and an arena
//! that the nodes are allocated into. Dropping the context frees a whole document at once.
//!
//! The parser only checks syntax. Documents aren't validated against a schema, and a document
//! with, for instance, unused variables or unknown fragments is still parsed.
//!
//! [A good place to start learning more about this crate is the `ast` module...](ast)

pub mod ast;
pub mod error;

pub use bumpalo;

#[cfg(feature = "json")]
pub mod json;
