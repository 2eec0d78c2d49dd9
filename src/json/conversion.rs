use crate::ast::*;
use serde_json::{Map as JSMap, Number as JSNumber, Value as JSValue};

/// Trait for converting AST Value Nodes of a GraphQL language document to [serde_json::Value]s.
pub trait ValueFromNode<'a>: Sized {
    /// Convert current AST Value Node to a [serde_json::Value] with given [Variables].
    fn to_json(self, variables: Option<&Variables<'a>>) -> JSValue;
}

impl<'a> ValueFromNode<'a> for Value<'a> {
    #[inline]
    fn to_json(self, variables: Option<&Variables<'a>>) -> JSValue {
        match self {
            Value::Variable(var) => var.to_json(variables),
            Value::List(list) => list.to_json(variables),
            Value::Object(obj) => obj.to_json(variables),
            Value::Int(node) => node.to_json(variables),
            Value::Float(node) => node.to_json(variables),
            Value::Boolean(node) => node.to_json(variables),
            Value::String(node) => node.to_json(variables),
            Value::Enum(node) => node.to_json(variables),
            Value::Null => JSValue::Null,
        }
    }
}

impl<'a> ValueFromNode<'a> for IntValue<'a> {
    /// Integers that don't fit into an `i64` are kept as strings.
    #[inline]
    fn to_json(self, _variables: Option<&Variables<'a>>) -> JSValue {
        match self.as_i64() {
            Some(value) => value.into(),
            None => self.value.into(),
        }
    }
}

impl<'a> ValueFromNode<'a> for FloatValue<'a> {
    #[inline]
    fn to_json(self, _variables: Option<&Variables<'a>>) -> JSValue {
        match self.as_f64().and_then(JSNumber::from_f64) {
            Some(number) => JSValue::Number(number),
            None => self.value.into(),
        }
    }
}

impl<'a> ValueFromNode<'a> for BooleanValue {
    #[inline]
    fn to_json(self, _variables: Option<&Variables<'a>>) -> JSValue {
        self.value.into()
    }
}

impl<'a> ValueFromNode<'a> for StringValue<'a> {
    /// Convert current StringValue Node to a [serde_json::Value] holding its decoded text.
    ///
    /// A string with an invalid escape sequence is converted as it was written.
    #[inline]
    fn to_json(self, _variables: Option<&Variables<'a>>) -> JSValue {
        match self.decode() {
            Ok(text) => text.into_owned().into(),
            Err(_) => self.value.into(),
        }
    }
}

impl<'a> ValueFromNode<'a> for EnumValue<'a> {
    #[inline]
    fn to_json(self, _variables: Option<&Variables<'a>>) -> JSValue {
        self.value.into()
    }
}

impl<'a> ValueFromNode<'a> for Variable<'a> {
    /// Convert current Variable Node to the JSON value of its variable, or `null` if it's missing.
    #[inline]
    fn to_json(self, variables: Option<&Variables<'a>>) -> JSValue {
        variables
            .and_then(|vars| vars.get(self.name))
            .map(|value| value.clone().to_json(None))
            .unwrap_or(JSValue::Null)
    }
}

impl<'a> ValueFromNode<'a> for ListValue<'a> {
    #[inline]
    fn to_json(self, variables: Option<&Variables<'a>>) -> JSValue {
        self.into_iter()
            .map(|value| value.to_json(variables))
            .collect::<Vec<JSValue>>()
            .into()
    }
}

impl<'a> ValueFromNode<'a> for ObjectValue<'a> {
    #[inline]
    fn to_json(self, variables: Option<&Variables<'a>>) -> JSValue {
        self.into_iter()
            .map(|field| (field.name.to_string(), field.value.to_json(variables)))
            .collect::<JSMap<String, JSValue>>()
            .into()
    }
}

/// Convert AST Value Node to a [serde_json::Value] with given [Variables].
pub fn value_from_ast_untyped<'a>(value: Value<'a>, variables: Option<&Variables<'a>>) -> JSValue {
    value.to_json(variables)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashbrown::HashMap;
    use serde_json::json;

    #[test]
    fn literals() {
        let ctx = ASTContext::new();
        let value = Value::parse(&ctx, r#"[1, -1.5, true, null, ENUM, "a\nb", """say "hi""""]"#);
        assert_eq!(
            value.unwrap().clone().to_json(None),
            json!([1, -1.5, true, null, "ENUM", "a\nb", "say \"hi\""])
        );
    }

    #[test]
    fn large_numbers() {
        let ctx = ASTContext::new();
        let value = Value::parse(&ctx, "100227510000998950000000000000000");
        assert_eq!(
            value.unwrap().clone().to_json(None),
            json!("100227510000998950000000000000000")
        );
    }

    #[test]
    fn variables() {
        let ctx = ASTContext::new();
        let mut variables: Variables = HashMap::new_in(&ctx.arena);
        variables.insert("id", Value::Int(IntValue { value: "2" }));

        let value = Value::parse(&ctx, "{ id: $id, missing: $missing }").unwrap();
        assert_eq!(
            value_from_ast_untyped(value.clone(), Some(&variables)),
            json!({ "id": 2, "missing": null })
        );
        assert_eq!(
            value.clone().to_json(None),
            json!({ "id": null, "missing": null })
        );
    }
}
