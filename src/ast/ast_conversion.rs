use super::ast::*;
use bumpalo::collections::{vec::IntoIter, Vec};

impl<'a> IntoIterator for ListValue<'a> {
    type Item = Value<'a>;
    type IntoIter = IntoIter<'a, Value<'a>>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.children.into_iter()
    }
}

impl<'a> IntoIterator for ObjectValue<'a> {
    type Item = ObjectField<'a>;
    type IntoIter = IntoIter<'a, ObjectField<'a>>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.children.into_iter()
    }
}

impl<'a> IntoIterator for Arguments<'a> {
    type Item = Argument<'a>;
    type IntoIter = IntoIter<'a, Argument<'a>>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.children.into_iter()
    }
}

impl<'a> IntoIterator for Directives<'a> {
    type Item = Directive<'a>;
    type IntoIter = IntoIter<'a, Directive<'a>>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.children.into_iter()
    }
}

impl<'a> IntoIterator for VariableDefinitions<'a> {
    type Item = VariableDefinition<'a>;
    type IntoIter = IntoIter<'a, VariableDefinition<'a>>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.children.into_iter()
    }
}

impl<'a> IntoIterator for Document<'a> {
    type Item = Definition<'a>;
    type IntoIter = IntoIter<'a, Definition<'a>>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.definitions.into_iter()
    }
}

impl<'a> IntoIterator for SelectionSet<'a> {
    type Item = Selection<'a>;
    type IntoIter = IntoIter<'a, Selection<'a>>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.selections.into_iter()
    }
}

pub trait DefaultIn<'a> {
    fn default_in(arena: &'a bumpalo::Bump) -> Self;
}

impl<'a, T> DefaultIn<'a> for T
where
    T: Default,
{
    fn default_in(_ctx: &'a bumpalo::Bump) -> Self {
        Self::default()
    }
}

impl<'a> DefaultIn<'a> for Document<'a> {
    fn default_in(arena: &'a bumpalo::Bump) -> Self {
        Document {
            definitions: Vec::new_in(&arena),
            size_hint: 0,
        }
    }
}

impl<'a> DefaultIn<'a> for VariableDefinitions<'a> {
    fn default_in(arena: &'a bumpalo::Bump) -> Self {
        VariableDefinitions {
            children: Vec::new_in(&arena),
        }
    }
}

impl<'a> DefaultIn<'a> for ObjectValue<'a> {
    fn default_in(arena: &'a bumpalo::Bump) -> Self {
        ObjectValue {
            children: Vec::new_in(&arena),
        }
    }
}

impl<'a> DefaultIn<'a> for ListValue<'a> {
    fn default_in(arena: &'a bumpalo::Bump) -> Self {
        ListValue {
            children: Vec::new_in(&arena),
        }
    }
}

impl<'a> DefaultIn<'a> for Arguments<'a> {
    fn default_in(arena: &'a bumpalo::Bump) -> Self {
        Arguments {
            children: Vec::new_in(&arena),
        }
    }
}

impl<'a> DefaultIn<'a> for Directives<'a> {
    fn default_in(arena: &'a bumpalo::Bump) -> Self {
        Directives {
            children: Vec::new_in(&arena),
        }
    }
}

impl<'a> DefaultIn<'a> for SelectionSet<'a> {
    fn default_in(arena: &'a bumpalo::Bump) -> Self {
        SelectionSet {
            selections: Vec::new_in(&arena),
        }
    }
}

impl<'a> From<&'a str> for NamedType<'a> {
    #[inline]
    fn from(name: &'a str) -> Self {
        NamedType { name }
    }
}

impl<'a> From<&'a str> for Variable<'a> {
    #[inline]
    fn from(name: &'a str) -> Variable<'a> {
        Variable { name }
    }
}

impl From<bool> for BooleanValue {
    #[inline]
    fn from(value: bool) -> Self {
        BooleanValue { value }
    }
}

/// Uses the given text as the raw value of a single-quoted string.
impl<'a> From<&'a str> for StringValue<'a> {
    #[inline]
    fn from(value: &'a str) -> Self {
        StringValue {
            value,
            block: false,
        }
    }
}

impl<'a> From<&'a str> for EnumValue<'a> {
    #[inline]
    fn from(value: &'a str) -> Self {
        EnumValue { value }
    }
}

impl<'a> From<Variable<'a>> for Value<'a> {
    #[inline]
    fn from(x: Variable<'a>) -> Self {
        Value::Variable(x)
    }
}

impl<'a> From<StringValue<'a>> for Value<'a> {
    #[inline]
    fn from(x: StringValue<'a>) -> Self {
        Value::String(x)
    }
}

impl<'a> From<FloatValue<'a>> for Value<'a> {
    #[inline]
    fn from(x: FloatValue<'a>) -> Self {
        Value::Float(x)
    }
}

impl<'a> From<IntValue<'a>> for Value<'a> {
    #[inline]
    fn from(x: IntValue<'a>) -> Self {
        Value::Int(x)
    }
}

impl<'a> From<BooleanValue> for Value<'a> {
    #[inline]
    fn from(x: BooleanValue) -> Self {
        Value::Boolean(x)
    }
}

impl<'a> From<EnumValue<'a>> for Value<'a> {
    #[inline]
    fn from(x: EnumValue<'a>) -> Self {
        Value::Enum(x)
    }
}

impl<'a> From<ListValue<'a>> for Value<'a> {
    #[inline]
    fn from(x: ListValue<'a>) -> Self {
        Value::List(x)
    }
}

impl<'a> From<ObjectValue<'a>> for Value<'a> {
    #[inline]
    fn from(x: ObjectValue<'a>) -> Self {
        Value::Object(x)
    }
}

impl<'a> From<NamedType<'a>> for Type<'a> {
    #[inline]
    fn from(x: NamedType<'a>) -> Self {
        Type::NamedType(x)
    }
}

impl<'a> From<Field<'a>> for Selection<'a> {
    #[inline]
    fn from(x: Field<'a>) -> Self {
        Selection::Field(x)
    }
}

impl<'a> From<FragmentSpread<'a>> for Selection<'a> {
    #[inline]
    fn from(x: FragmentSpread<'a>) -> Self {
        Selection::FragmentSpread(x)
    }
}

impl<'a> From<InlineFragment<'a>> for Selection<'a> {
    #[inline]
    fn from(x: InlineFragment<'a>) -> Self {
        Selection::InlineFragment(x)
    }
}

impl<'a> From<OperationDefinition<'a>> for ExecutableDefinition<'a> {
    #[inline]
    fn from(x: OperationDefinition<'a>) -> Self {
        ExecutableDefinition::Operation(x)
    }
}

impl<'a> From<FragmentDefinition<'a>> for ExecutableDefinition<'a> {
    #[inline]
    fn from(x: FragmentDefinition<'a>) -> Self {
        ExecutableDefinition::Fragment(x)
    }
}

impl<'a> From<ScalarTypeDefinition<'a>> for TypeDefinition<'a> {
    #[inline]
    fn from(x: ScalarTypeDefinition<'a>) -> Self {
        TypeDefinition::Scalar(x)
    }
}

impl<'a> From<ObjectTypeDefinition<'a>> for TypeDefinition<'a> {
    #[inline]
    fn from(x: ObjectTypeDefinition<'a>) -> Self {
        TypeDefinition::Object(x)
    }
}

impl<'a> From<ExecutableDefinition<'a>> for Definition<'a> {
    #[inline]
    fn from(x: ExecutableDefinition<'a>) -> Self {
        Definition::Executable(x)
    }
}

impl<'a> From<TypeDefinition<'a>> for Definition<'a> {
    #[inline]
    fn from(x: TypeDefinition<'a>) -> Self {
        Definition::TypeSystem(x)
    }
}

impl<'a> From<OperationDefinition<'a>> for Definition<'a> {
    #[inline]
    fn from(x: OperationDefinition<'a>) -> Self {
        Definition::Executable(x.into())
    }
}

impl<'a> From<FragmentDefinition<'a>> for Definition<'a> {
    #[inline]
    fn from(x: FragmentDefinition<'a>) -> Self {
        Definition::Executable(x.into())
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::*;
    use bumpalo::collections::Vec;

    #[test]
    fn build_document() {
        let ctx = ASTContext::new();
        let field = Field {
            arguments: Arguments {
                children: Vec::from_iter_in(
                    [Argument {
                        name: "id",
                        value: Variable::from("id").into(),
                    }],
                    &ctx.arena,
                ),
            },
            ..Field::new_leaf(&ctx, "node")
        };
        let operation = OperationDefinition {
            operation: OperationKind::default(),
            name: Some("Get".into()),
            variable_definitions: VariableDefinitions {
                children: Vec::from_iter_in(
                    [VariableDefinition {
                        variable: "id".into(),
                        of_type: Type::from(NamedType::from("ID")).into_nonnull(&ctx),
                        default_value: None,
                        directives: Directives::default_in(&ctx.arena),
                    }],
                    &ctx.arena,
                ),
            },
            directives: Directives::default_in(&ctx.arena),
            selection_set: SelectionSet {
                selections: Vec::from_iter_in([field.into()], &ctx.arena),
            },
        };
        let scalar = ScalarTypeDefinition {
            description: Some("An ID".into()),
            name: "ID".into(),
            directives: Directives::default_in(&ctx.arena),
        };

        let mut document = Document::default_in(&ctx.arena);
        document.definitions.push(operation.into());
        document.definitions.push(TypeDefinition::from(scalar).into());
        assert_eq!(
            document.print(),
            "query Get($id: ID!) {\n  node(id: $id)\n}\n\n\"An ID\"\nscalar ID"
        );

        let names = document
            .into_iter()
            .filter_map(|definition| match definition {
                Definition::Executable(ExecutableDefinition::Operation(operation)) => {
                    operation.name.map(|name| name.name)
                }
                Definition::TypeSystem(definition) => definition.name(),
                _ => None,
            })
            .collect::<std::vec::Vec<_>>();
        assert_eq!(names, ["Get", "ID"]);
    }

    #[test]
    fn iterate_values() {
        let ctx = ASTContext::new();
        let list = ListValue {
            children: Vec::from_iter_in(
                [BooleanValue::from(true).into(), EnumValue::from("RED").into()],
                &ctx.arena,
            ),
        };
        let values = list.into_iter().collect::<std::vec::Vec<Value>>();
        assert_eq!(
            values,
            [
                Value::Boolean(BooleanValue { value: true }),
                Value::Enum(EnumValue { value: "RED" })
            ]
        );
        assert!(ObjectValue::default_in(&ctx.arena).into_iter().next().is_none());
    }
}
