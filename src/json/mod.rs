//! # JSON Conversion
//!
//! The `graphql_frontend::json` module contains utilities to convert from and to `serde_json`
//! values. Any values that are converted to this crate's structures are represented as AST values.
//!
//! The [ValueFromNode] trait allows conversion to `serde_json` values using a `to_json` method on
//! any given value. This method converts without using any type information and decodes strings.
//!
//! The module otherwise only contains a handful of utility functions:
//!
//! - [ast_variables_from_value] is used to create a `Variables` map for a given JSON value.
//! - [ast_from_value_untyped] is used to convert any given JSON value to AST values.
//! - [value_from_ast_variables] is used to convert AST `Variables` back to a JSON value.
//! - [value_from_ast_untyped] is used to convert a given AST value to a JSON value while filling
//!   in variables.

mod conversion;
mod values;

pub use conversion::*;
pub use values::*;
