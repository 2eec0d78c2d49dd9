use bumpalo::collections::Vec;
use hashbrown::HashMap;
use serde_json::{map::Map as JSMap, Value as JSValue};

use super::ValueFromNode;
use crate::ast::*;
use crate::error::{Error, ErrorType, Result};

/// Convert [serde_json::Value] to [Variables] given an operation's [VariableDefinitions].
///
/// Variables that are missing from the input fall back to their default value. Variables without
/// either are left out, which [`Variable::to_json`](ValueFromNode::to_json) turns into `null`.
pub fn ast_variables_from_value<'a>(
    ctx: &'a ASTContext,
    input: &JSValue,
    var_defs: &'a VariableDefinitions<'a>,
) -> Result<Variables<'a>> {
    let mut vars = HashMap::new_in(&ctx.arena);
    if var_defs.is_empty() {
        return Ok(vars);
    }
    let obj = match input {
        JSValue::Object(obj) => obj,
        JSValue::Null => return Ok(vars),
        _ => {
            return Err(Error::new(
                "Variables expected but received non-object value",
                Some(ErrorType::GraphQL),
            ))
        }
    };
    for var_def in var_defs.children.iter() {
        let name = var_def.variable.name;
        if let Some(value) = obj.get(name) {
            vars.insert(name, ast_from_value_untyped(ctx, value));
        } else if let Some(default_value) = &var_def.default_value {
            vars.insert(name, default_value.clone());
        }
    }
    Ok(vars)
}

/// Convert [serde_json::Value] to an AST Value Node without casting the JSON value to a type.
///
/// Strings are escaped, so that the resulting node prints as a valid string literal.
pub fn ast_from_value_untyped<'a>(ctx: &'a ASTContext, value: &JSValue) -> Value<'a> {
    match value {
        JSValue::Array(list) => {
            let mut children = Vec::with_capacity_in(list.len(), &ctx.arena);
            for item in list.iter() {
                children.push(ast_from_value_untyped(ctx, item));
            }
            Value::List(ListValue { children })
        }
        JSValue::Object(map) => {
            let mut children = Vec::with_capacity_in(map.len(), &ctx.arena);
            for (key, value) in map.iter() {
                children.push(ObjectField {
                    name: ctx.alloc_str(key),
                    value: ast_from_value_untyped(ctx, value),
                });
            }
            Value::Object(ObjectValue { children })
        }
        JSValue::Number(num) => match num.as_i64() {
            Some(int) => Value::Int(IntValue {
                value: ctx.alloc_string(int.to_string()),
            }),
            None => match num.as_f64().filter(|float| float.is_finite()) {
                Some(float) => Value::Float(FloatValue {
                    value: ctx.alloc_string(float_literal(float)),
                }),
                None => Value::Null,
            },
        },
        JSValue::Bool(x) => Value::Boolean((*x).into()),
        JSValue::String(str) => Value::String(StringValue::escape(ctx, str)),
        JSValue::Null => Value::Null,
    }
}

/// Float literals always need a fractional part and may not use an exponent.
fn float_literal(float: f64) -> String {
    let mut literal = float.to_string();
    if !literal.contains('.') {
        literal.push_str(".0");
    }
    literal
}

/// Convert [Variables] back to a [serde_json::Value] map.
pub fn value_from_ast_variables(variables: &Variables<'_>) -> JSMap<String, JSValue> {
    variables
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone().to_json(None)))
        .collect()
}
