pub use super::ast_conversion::*;
use super::strings::{decode_block_string, decode_string, escape_string};
use crate::error::{Error, ErrorType, Result};
use bumpalo::collections::CollectIn;
use hashbrown::{hash_map::DefaultHashBuilder, HashMap};
use std::borrow::Cow;

/// A context for a GraphQL document which holds an arena allocator.
///
/// For the duration of parsing, storing, and printing an AST it's performant and convenient to
/// allocate memory in one chunk for the AST's operations. This context represents the lifetime
/// of an AST and its derivatives.
///
/// An AST Context in other words represents the memory a document and the operations you perform
/// on it take up. Once you're done with the document this entire allocated memory is dropped all
/// at once. Hence it's inadvisable to reuse an AST Context across unrelated documents.
pub struct ASTContext {
    /// An arena allocator that holds the memory allocated for the AST Context's lifetime
    pub arena: bumpalo::Bump,
}

impl ASTContext {
    /// Create a new AST context with a preallocated arena.
    pub fn new() -> Self {
        let arena = bumpalo::Bump::new();
        ASTContext { arena }
    }

    /// Put the value of `item` onto the arena and return a reference to it.
    #[inline]
    pub fn alloc<T>(&self, item: T) -> &T {
        self.arena.alloc(item)
    }

    /// Allocate an `&str` slice onto the arena and return a reference to it.
    ///
    /// This is useful when the original slice has an undefined lifetime.
    /// This is typically unnecessary for static slices (`&'static str`) whose lifetimes are as
    /// long as the running program and don't need to be allocated dynamically.
    #[inline]
    pub fn alloc_str(&self, str: &str) -> &str {
        self.arena.alloc_str(str)
    }

    /// Puts a `String` onto the arena and returns a reference to it to tie the `String`'s lifetime
    /// to this AST context without reallocating or copying it.
    #[inline]
    pub fn alloc_string(&self, str: String) -> &str {
        self.arena.alloc(str)
    }
}

impl Default for ASTContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Map of AST Values for GraphQL Variables
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Coercing-Variable-Values)
pub type Variables<'a> = HashMap<&'a str, Value<'a>, DefaultHashBuilder, &'a bumpalo::Bump>;

/// AST Node of a boolean value
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Boolean-Value)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct BooleanValue {
    pub value: bool,
}

/// AST Node of a variable identifier value.
///
/// These are identifiers prefixed with a `$` sign, typically in variable definitions.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Variables)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Variable<'a> {
    pub name: &'a str,
}

/// AST Node of an enum value.
///
/// These are bare names in the place of a value, typically written in all caps and snake case,
/// e.g. "`MOBILE_WEB`".
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Enum-Value)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct EnumValue<'a> {
    pub value: &'a str,
}

/// AST Node of an integer value.
///
/// The literal is kept as it was written, an optional minus sign followed by digits.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Int)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct IntValue<'a> {
    pub value: &'a str,
}

impl<'a> IntValue<'a> {
    /// Parses the literal into an `i64`, returning `None` when it overflows.
    #[inline]
    pub fn as_i64(&self) -> Option<i64> {
        lexical_core::parse::<i64>(self.value.as_bytes()).ok()
    }
}

/// AST Node of a floating point value.
///
/// The literal is kept as it was written, so two float values are equal when their source texts
/// are equal.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Float)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct FloatValue<'a> {
    pub value: &'a str,
}

impl<'a> FloatValue<'a> {
    /// Parses the literal into an `f64`.
    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        lexical_core::parse::<f64>(self.value.as_bytes()).ok()
    }
}

/// AST Node of a string value.
///
/// The `value` is the raw text between the string's delimiters. Escape sequences aren't processed
/// while parsing and neither is the indentation of block strings. Use [`StringValue::decode`] to
/// get the string's actual contents.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-String)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct StringValue<'a> {
    pub value: &'a str,
    /// Whether this is a block string delimited by `"""`.
    pub block: bool,
}

impl<'a> StringValue<'a> {
    /// Creates a single-quoted string value from an unescaped text, escaping it as needed.
    pub fn escape(ctx: &'a ASTContext, text: &str) -> Self {
        let value = match escape_string(text) {
            Cow::Borrowed(text) => ctx.alloc_str(text),
            Cow::Owned(text) => ctx.alloc_string(text),
        };
        StringValue {
            value,
            block: false,
        }
    }

    /// Decodes the raw value into the string it represents.
    ///
    /// Escape sequences of single-quoted strings are processed. For block strings the common
    /// indentation and surrounding blank lines are removed instead.
    ///
    /// [Reference](https://spec.graphql.org/October2021/#sec-String-Value.Semantics)
    pub fn decode(&self) -> Result<Cow<'a, str>> {
        if self.block {
            Ok(Cow::Owned(decode_block_string(self.value)))
        } else {
            decode_string(self.value)
        }
    }
}

/// AST Node of possible input values in GraphQL.
///
/// Fields and Directives accept input values as arguments.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Input-Values)
#[derive(Debug, PartialEq, Clone)]
pub enum Value<'a> {
    Variable(Variable<'a>),
    String(StringValue<'a>),
    Float(FloatValue<'a>),
    Int(IntValue<'a>),
    Boolean(BooleanValue),
    Enum(EnumValue<'a>),
    List(ListValue<'a>),
    Object(ObjectValue<'a>),
    /// Representing JSON-like `null` values or the absence of a value
    Null,
}

/// AST Node for a List of values.
///
/// Lists in GraphQL are ordered sequences and serialize to JSON arrays. Its
/// contents may be any arbitrary value literal or variable.
/// [Reference](https://spec.graphql.org/October2021/#sec-List-Value)
#[derive(Debug, PartialEq, Clone)]
pub struct ListValue<'a> {
    pub children: bumpalo::collections::Vec<'a, Value<'a>>,
}

impl<'a> ListValue<'a> {
    /// Checks whether this List contains any values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// AST Node for a field of an Object value.
///
/// [Reference](https://spec.graphql.org/October2021/#ObjectField)
#[derive(Debug, PartialEq, Clone)]
pub struct ObjectField<'a> {
    pub name: &'a str,
    pub value: Value<'a>,
}

/// AST Node for an Object value, which is a list of Object fields.
///
/// Objects in GraphQL are unordered lists of keyed input values and serialize to JSON objects.
/// Their keys are unique, which the parser enforces, and two objects are equal regardless of
/// the order of their fields.
/// [Reference](https://spec.graphql.org/October2021/#sec-Input-Object-Values)
#[derive(Debug, Clone)]
pub struct ObjectValue<'a> {
    pub children: bumpalo::collections::Vec<'a, ObjectField<'a>>,
}

impl<'a> ObjectValue<'a> {
    /// Checks whether this Object contains any fields.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the value of the field with the given `name`.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&Value<'a>> {
        self.children
            .iter()
            .find(|field| field.name == name)
            .map(|field| &field.value)
    }

    /// Returns a `Map` keyed by all object field's names mapped to their values.
    pub fn as_map(
        &'a self,
        ctx: &'a ASTContext,
    ) -> HashMap<&str, &Value<'a>, DefaultHashBuilder, &'a bumpalo::Bump> {
        let mut map = HashMap::new_in(&ctx.arena);
        for field in self.children.iter() {
            map.insert(field.name, &field.value);
        }
        map
    }
}

impl<'a> PartialEq for ObjectValue<'a> {
    fn eq(&self, other: &Self) -> bool {
        self.children.len() == other.children.len()
            && self
                .children
                .iter()
                .all(|field| other.get(field.name) == Some(&field.value))
    }
}

/// AST Node for an Argument, which carries a name and a value.
///
/// [Reference](https://spec.graphql.org/October2021/#Argument)
#[derive(Debug, PartialEq, Clone)]
pub struct Argument<'a> {
    pub name: &'a str,
    pub value: Value<'a>,
}

/// AST Node for a list of Arguments, which are similar to parameterized inputs to a function.
///
/// Arguments in GraphQL are unordered lists of inputs to a field's or directive's arguments.
/// [Reference](https://spec.graphql.org/October2021/#Arguments)
#[derive(Debug, PartialEq, Clone)]
pub struct Arguments<'a> {
    pub children: bumpalo::collections::Vec<'a, Argument<'a>>,
}

impl<'a> Arguments<'a> {
    /// Checks whether this list of Arguments contains any values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Converts `Arguments` into an `ObjectValue`
    #[inline]
    pub fn as_object_value(&'a self, ctx: &'a ASTContext) -> ObjectValue<'a> {
        let new_children = self
            .children
            .iter()
            .map(|arg| ObjectField {
                name: arg.name,
                value: arg.value.clone(),
            })
            .collect_in(&ctx.arena);

        ObjectValue {
            children: new_children,
        }
    }

    /// Returns a `Map` keyed by all arguments' names mapped to their values.
    pub fn as_map(
        &'a self,
        ctx: &'a ASTContext,
    ) -> HashMap<&str, &Value<'a>, DefaultHashBuilder, &'a bumpalo::Bump> {
        let mut map = HashMap::new_in(&ctx.arena);
        for argument in self.children.iter() {
            map.insert(argument.name, &argument.value);
        }
        map
    }
}

/// AST Node for GraphQL Directives, which provide a way to describe alternate behavior in GraphQL.
///
/// Typical directives that occur in queries are for example `@skip`, `@include`, and `@defer`.
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Directives)
#[derive(Debug, PartialEq, Clone)]
pub struct Directive<'a> {
    pub name: &'a str,
    pub arguments: Arguments<'a>,
}

/// AST Node for lists of GraphQL Directives.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Directives)
#[derive(Debug, PartialEq, Clone)]
pub struct Directives<'a> {
    pub children: bumpalo::collections::Vec<'a, Directive<'a>>,
}

impl<'a> Directives<'a> {
    /// Checks whether this list of Directives contains any values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the first directive with the given `name`.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&Directive<'a>> {
        self.children.iter().find(|directive| directive.name == name)
    }
}

/// AST Node for Selection Sets, which provide a way to select more information on a given parent.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Selection-Sets)
#[derive(Debug, PartialEq, Clone)]
pub struct SelectionSet<'a> {
    pub selections: bumpalo::collections::Vec<'a, Selection<'a>>,
}

impl<'a> SelectionSet<'a> {
    /// Checks whether this Selection Set contains any selections.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }
}

/// AST Node for Fields, which can be likened to functions or properties on a parent object.
///
/// In JSON this would represent a property in a JSON object.
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Fields)
#[derive(Debug, PartialEq, Clone)]
pub struct Field<'a> {
    /// A Field's `alias`, which is used to request information under a different name than the
    /// Field's `name`.
    /// [Reference](https://spec.graphql.org/October2021/#sec-Field-Alias)
    pub alias: Option<&'a str>,
    /// A Field's `name`, which represents a resolver on a GraphQL schema's object type.
    pub name: &'a str,
    /// Arguments that are passed to a Field.
    ///
    /// When no Arguments are passed, this will be an empty
    /// list, as can be checked using `Arguments::is_empty`.
    /// See: [Arguments]
    pub arguments: Arguments<'a>,
    /// Directives that are annotating this Field.
    ///
    /// When no Directives are present, this will be an empty
    /// list, as can be checked using `Directives::is_empty`.
    /// See: [Directives]
    pub directives: Directives<'a>,
    /// A sub-Selection Set that is passed below this field to add selections to this field's
    /// returned GraphQL object type.
    ///
    /// Leaf fields have an empty Selection Set, as can be checked using `SelectionSet::is_empty`.
    /// See: [SelectionSet]
    pub selection_set: SelectionSet<'a>,
}

impl<'a> Field<'a> {
    /// Get the alias of the field, if present, otherwise get the name.
    #[inline]
    pub fn alias_or_name(&self) -> &'a str {
        self.alias.unwrap_or(self.name)
    }

    /// Creates a new leaf field with the given `name`.
    ///
    /// All sub-lists, like `arguments`, `directives` and `selection_set` will be created as empty
    /// defaults.
    #[inline]
    pub fn new_leaf(ctx: &'a ASTContext, name: &'a str) -> Self {
        Field {
            alias: None,
            name,
            arguments: Arguments::default_in(&ctx.arena),
            directives: Directives::default_in(&ctx.arena),
            selection_set: SelectionSet::default_in(&ctx.arena),
        }
    }

    /// Creates a new leaf field with the given `name` and `alias`.
    #[inline]
    pub fn new_aliased_leaf(ctx: &'a ASTContext, alias: &'a str, name: &'a str) -> Self {
        Field {
            alias: Some(alias),
            ..Field::new_leaf(ctx, name)
        }
    }
}

/// AST Node for a Fragment Spread, which refers to a [`FragmentDefinition`] by its name.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Fragments)
#[derive(Debug, PartialEq, Clone)]
pub struct FragmentSpread<'a> {
    /// A given name of the [FragmentDefinition] that must be spread in place of this Fragment
    /// Spread on a GraphQL API.
    pub name: NamedType<'a>,
    pub directives: Directives<'a>,
}

/// AST Node for an inline Fragment definition with an additional [`SelectionSet`].
/// This may only be applied when the type condition matches or when no type condition is present.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Fragments)
#[derive(Debug, PartialEq, Clone)]
pub struct InlineFragment<'a> {
    /// A given type condition that must match before this fragment is applied on a GraphQL API.
    /// On inline fragments this is optional.
    pub type_condition: Option<Type<'a>>,
    pub directives: Directives<'a>,
    pub selection_set: SelectionSet<'a>,
}

/// AST Node of a selection as contained inside a [`SelectionSet`].
///
/// Any given Selection Set may contain fields, fragment spread, and inline fragments.
/// [Reference](https://spec.graphql.org/October2021/#Selection)
#[derive(Debug, PartialEq, Clone)]
pub enum Selection<'a> {
    Field(Field<'a>),
    FragmentSpread(FragmentSpread<'a>),
    InlineFragment(InlineFragment<'a>),
}

impl<'a> Selection<'a> {
    /// Helper method to return the [`Field`] if the Selection is a `Field`.
    #[inline]
    pub fn field(&self) -> Option<&Field<'a>> {
        match self {
            Selection::Field(field) => Some(field),
            _ => None,
        }
    }

    /// Helper method to return the [`FragmentSpread`] if the Selection is a `FragmentSpread`.
    #[inline]
    pub fn fragment_spread(&self) -> Option<&FragmentSpread<'a>> {
        match self {
            Selection::FragmentSpread(spread) => Some(spread),
            _ => None,
        }
    }

    /// Helper method to return the [`InlineFragment`] if the Selection is an `InlineFragment`.
    #[inline]
    pub fn inline_fragment(&self) -> Option<&InlineFragment<'a>> {
        match self {
            Selection::InlineFragment(fragment) => Some(fragment),
            _ => None,
        }
    }
}

/// AST Node for a type name.
///
/// This AST uses this reference instead of a raw `&str` slice whenever the AST refers to a
/// concrete object type, input type, fragment name, or operation name.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct NamedType<'a> {
    pub name: &'a str,
}

/// AST Node for a type reference.
///
/// Type references wrap a [`NamedType`] in any number of list and non-null wrappers. A non-null
/// wrapper never directly wraps another non-null wrapper.
/// [Reference](https://spec.graphql.org/October2021/#sec-Type-References)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Type<'a> {
    /// A reference to a named type, which is a leaf node of a [Type].
    NamedType(NamedType<'a>),
    /// A list node wrapper for a Type, which indicates that a GraphQL API will always pass a list
    /// of the contained type in place.
    ListType(&'a Type<'a>),
    /// A non-null node wrapper for a Type, which indicates that a GraphQL API may not pass `null`
    /// instead of the contained type.
    NonNullType(&'a Type<'a>),
}

impl<'a> Type<'a> {
    /// Wraps this type in a list, indicating that it expects the current Type to be a list of
    /// itself instead.
    #[inline]
    pub fn into_list(self, ctx: &'a ASTContext) -> Type<'a> {
        Type::ListType(ctx.alloc(self))
    }

    /// Wraps this type in a non-null wrapper. Non-null types are returned as they are.
    #[inline]
    pub fn into_nonnull(self, ctx: &'a ASTContext) -> Type<'a> {
        match self {
            Type::NonNullType(_) => self,
            _ => Type::NonNullType(ctx.alloc(self)),
        }
    }

    #[inline]
    pub fn is_nonnull(&self) -> bool {
        matches!(self, Type::NonNullType(_))
    }

    /// Unwraps a Type recursively and returns the `NamedType` that is contained within its
    /// wrappers.
    #[inline]
    pub fn of_type(&self) -> &NamedType<'a> {
        match self {
            Type::NamedType(of_type) => of_type,
            Type::ListType(inner) | Type::NonNullType(inner) => inner.of_type(),
        }
    }
}

/// AST Node for a variable definition.
///
/// A variable definition defines a [Variable] identifier that can be used in place of any other
/// non-static [Value] throughout an operation.
///
/// [Reference](https://spec.graphql.org/October2021/#VariableDefinition)
#[derive(Debug, PartialEq, Clone)]
pub struct VariableDefinition<'a> {
    /// The variable's name, as in, its identifier, which is prefixed with a `$` sign in the
    /// document.
    pub variable: Variable<'a>,
    /// Annotation of the type of a given variable, which ultimately leads to a type reference of
    /// an input type, as defined on a GraphQL schema.
    pub of_type: Type<'a>,
    /// A GraphQL variable may be replaced by a default value, when it's not passed.
    pub default_value: Option<Value<'a>>,
    pub directives: Directives<'a>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct VariableDefinitions<'a> {
    pub children: bumpalo::collections::Vec<'a, VariableDefinition<'a>>,
}

impl<'a> VariableDefinitions<'a> {
    /// Checks whether the list of Variable Definitions is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns a `Map` keyed by all variable names mapped to their definitions.
    pub fn as_map(
        &'a self,
        ctx: &'a ASTContext,
    ) -> HashMap<&str, &'a VariableDefinition<'a>, DefaultHashBuilder, &'a bumpalo::Bump> {
        let mut map = HashMap::new_in(&ctx.arena);
        for var_def in self.children.iter() {
            map.insert(var_def.variable.name, var_def);
        }
        map
    }
}

/// AST Node for a Fragment definition with an additional Selection Set.
///
/// It extends a Selection Set by being applied using a [`FragmentSpread`] selection.
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Fragments)
#[derive(Debug, PartialEq, Clone)]
pub struct FragmentDefinition<'a> {
    /// A given name of the Fragment Definition that is used by [FragmentSpread] selections to
    /// refer to this definition.
    pub name: NamedType<'a>,
    /// A type condition that must match before this fragment is applied on a GraphQL API.
    pub type_condition: Type<'a>,
    pub directives: Directives<'a>,
    pub selection_set: SelectionSet<'a>,
}

/// AST Node for a kind of operation, as referred to by an [`OperationDefinition`].
///
/// In GraphQL there are three different operations, with each having a unique identifier on
/// Operation Definitions.
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Operations)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Default)]
pub enum OperationKind {
    #[default]
    Query,
    Mutation,
    Subscription,
}

/// AST Node for an Operation Definition, which defines the entrypoint for GraphQL's execution.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Operations)
#[derive(Debug, PartialEq, Clone)]
pub struct OperationDefinition<'a> {
    /// The kind of operation that this definition specifies
    pub operation: OperationKind,
    /// An optional name, as given to the operation definition.
    ///
    /// A [Document] may contain multiple Operation Definitions from which a single one can be
    /// selected during execution. When a Document contains only a single operation, it doesn't
    /// have to have a name.
    pub name: Option<NamedType<'a>>,
    /// A list of variables that the operation defines and accepts during execution.
    pub variable_definitions: VariableDefinitions<'a>,
    pub directives: Directives<'a>,
    /// A sub-Selection Set that is applied when this Operation Definition is executed to the root
    /// type of the specified kind of operation.
    pub selection_set: SelectionSet<'a>,
}

/// AST Node for a definition that a GraphQL service can execute.
///
/// [Reference](https://spec.graphql.org/October2021/#ExecutableDefinition)
#[derive(Debug, PartialEq, Clone)]
pub enum ExecutableDefinition<'a> {
    Operation(OperationDefinition<'a>),
    Fragment(FragmentDefinition<'a>),
}

/// AST Node for a scalar type definition, e.g. `scalar DateTime`.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Scalars)
#[derive(Debug, PartialEq, Clone)]
pub struct ScalarTypeDefinition<'a> {
    pub description: Option<StringValue<'a>>,
    pub name: NamedType<'a>,
    pub directives: Directives<'a>,
}

/// AST Node for an object type definition.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Objects)
#[derive(Debug, PartialEq, Clone)]
pub struct ObjectTypeDefinition<'a> {
    pub description: Option<StringValue<'a>>,
    pub name: NamedType<'a>,
    /// Interfaces that this object type implements, as listed after `implements`.
    pub interfaces: bumpalo::collections::Vec<'a, NamedType<'a>>,
    pub directives: Directives<'a>,
    pub fields: bumpalo::collections::Vec<'a, FieldDefinition<'a>>,
}

/// AST Node for a field of an object type definition.
///
/// [Reference](https://spec.graphql.org/October2021/#FieldDefinition)
#[derive(Debug, PartialEq, Clone)]
pub struct FieldDefinition<'a> {
    pub description: Option<StringValue<'a>>,
    pub name: &'a str,
    pub arguments: bumpalo::collections::Vec<'a, InputValueDefinition<'a>>,
    pub of_type: Type<'a>,
    pub directives: Directives<'a>,
}

/// AST Node for an argument of a field definition.
///
/// [Reference](https://spec.graphql.org/October2021/#InputValueDefinition)
#[derive(Debug, PartialEq, Clone)]
pub struct InputValueDefinition<'a> {
    pub description: Option<StringValue<'a>>,
    pub name: &'a str,
    pub of_type: Type<'a>,
    pub default_value: Option<Value<'a>>,
    pub directives: Directives<'a>,
}

/// Placeholder for interface type definitions, which aren't parsed.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Default)]
pub struct InterfaceTypeDefinition;

/// Placeholder for union type definitions, which aren't parsed.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Default)]
pub struct UnionTypeDefinition;

/// Placeholder for enum type definitions, which aren't parsed.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Default)]
pub struct EnumTypeDefinition;

/// Placeholder for input object type definitions, which aren't parsed.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Default)]
pub struct InputObjectTypeDefinition;

/// Placeholder for type system extensions, which aren't parsed.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Default)]
pub struct TypeSystemExtension;

/// AST Node for a type definition of the GraphQL type system.
///
/// Only scalar and object type definitions are parsed. The remaining kinds are named so that
/// the type system can be extended, but carry no structure.
/// [Reference](https://spec.graphql.org/October2021/#TypeDefinition)
#[derive(Debug, PartialEq, Clone)]
pub enum TypeDefinition<'a> {
    Scalar(ScalarTypeDefinition<'a>),
    Object(ObjectTypeDefinition<'a>),
    Interface(InterfaceTypeDefinition),
    Union(UnionTypeDefinition),
    Enum(EnumTypeDefinition),
    InputObject(InputObjectTypeDefinition),
}

impl<'a> TypeDefinition<'a> {
    /// Returns the name of the defined type, when the definition carries one.
    #[inline]
    pub fn name(&self) -> Option<&'a str> {
        match self {
            TypeDefinition::Scalar(scalar) => Some(scalar.name.name),
            TypeDefinition::Object(object) => Some(object.name.name),
            _ => None,
        }
    }

    /// Returns the description of the defined type, when one was given.
    #[inline]
    pub fn description(&self) -> Option<&StringValue<'a>> {
        match self {
            TypeDefinition::Scalar(scalar) => scalar.description.as_ref(),
            TypeDefinition::Object(object) => object.description.as_ref(),
            _ => None,
        }
    }
}

/// AST Node for a Definition inside a GraphQL document.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Document)
#[derive(Debug, PartialEq, Clone)]
pub enum Definition<'a> {
    Executable(ExecutableDefinition<'a>),
    TypeSystem(TypeDefinition<'a>),
    Extension(TypeSystemExtension),
}

impl<'a> Definition<'a> {
    /// Helper method to return the [`OperationDefinition`] if the Definition is an `OperationDefinition`.
    #[inline]
    pub fn operation(&self) -> Option<&OperationDefinition<'a>> {
        match self {
            Definition::Executable(ExecutableDefinition::Operation(operation)) => Some(operation),
            _ => None,
        }
    }

    /// Helper method to return the [`FragmentDefinition`] if the Definition is a `FragmentDefinition`.
    #[inline]
    pub fn fragment(&self) -> Option<&FragmentDefinition<'a>> {
        match self {
            Definition::Executable(ExecutableDefinition::Fragment(fragment)) => Some(fragment),
            _ => None,
        }
    }

    /// Helper method to return the [`TypeDefinition`] if the Definition is a `TypeDefinition`.
    #[inline]
    pub fn type_definition(&self) -> Option<&TypeDefinition<'a>> {
        match self {
            Definition::TypeSystem(definition) => Some(definition),
            _ => None,
        }
    }
}

/// AST Root Node for a GraphQL query language document. This contains one or more definitions.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Document)
///
/// Documents are equal when their definitions are equal, regardless of their `size_hint`.
#[derive(Debug, Clone)]
pub struct Document<'a> {
    pub definitions: bumpalo::collections::Vec<'a, Definition<'a>>,
    /// A hint on how large the source text was from which this Document was parsed.
    ///
    /// This gives an initial indication of the starting capacity of a `String` that will hold the
    /// stringified document.
    pub size_hint: usize,
}

impl<'a> PartialEq for Document<'a> {
    fn eq(&self, other: &Self) -> bool {
        self.definitions == other.definitions
    }
}

impl<'a> Document<'a> {
    /// Checks whether this document contains any definitions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Returns a `Map` keyed by all fragment names mapped to their fragment definitions.
    /// This is useful for manually traversing the document and resolving [`FragmentSpread`] nodes to
    /// their definitions.
    pub fn fragments(
        &'a self,
        ctx: &'a ASTContext,
    ) -> HashMap<&str, &'a FragmentDefinition<'a>, DefaultHashBuilder, &'a bumpalo::Bump> {
        let mut map = HashMap::new_in(&ctx.arena);
        for fragment in self.definitions.iter().filter_map(Definition::fragment) {
            map.insert(fragment.name.name, fragment);
        }
        map
    }

    /// Finds an operation definition by name or the single operation contained in the document
    /// when `None` is passed.
    ///
    /// [Reference](https://spec.graphql.org/October2021/#GetOperation())
    pub fn operation(&self, by_name: Option<&str>) -> Result<&OperationDefinition<'a>> {
        let mut operations = self.definitions.iter().filter_map(Definition::operation);
        if let Some(by_name) = by_name {
            operations
                .find(|operation| operation.name.map(|name| name.name) == Some(by_name))
                .ok_or_else(|| {
                    Error::new(
                        format!("Operation with name {by_name} does not exist"),
                        Some(ErrorType::GraphQL),
                    )
                })
        } else {
            match (operations.next(), operations.next()) {
                (None, _) => Err(Error::new(
                    "Document does not contain any operations",
                    Some(ErrorType::GraphQL),
                )),
                (Some(operation), None) => Ok(operation),
                (Some(_), Some(_)) => Err(Error::new(
                    "Document contains more than one operation, missing operation name",
                    Some(ErrorType::GraphQL),
                )),
            }
        }
    }
}

/// Trait implemented by all ast nodes that can have directives attached.
pub trait WithDirectives<'arena> {
    fn directives(&self) -> &Directives<'arena>;
}

macro_rules! with_directives {
    ($($for_type:ident),+) => {
        $(
            impl<'arena> WithDirectives<'arena> for $for_type<'arena> {
                #[inline]
                fn directives(&self) -> &Directives<'arena> {
                    &self.directives
                }
            }
        )+
    };
}

with_directives!(
    Field,
    FragmentSpread,
    InlineFragment,
    OperationDefinition,
    FragmentDefinition,
    VariableDefinition,
    ScalarTypeDefinition,
    ObjectTypeDefinition,
    FieldDefinition,
    InputValueDefinition
);

impl<'arena> WithDirectives<'arena> for Selection<'arena> {
    /// Helper method to get all Directives for a given selection directly.
    ///
    /// Any selection AST node may carry Directives, so when those are checked
    /// it's unnecessary to first match the type of selection.
    fn directives(&self) -> &Directives<'arena> {
        match self {
            Selection::Field(field) => &field.directives,
            Selection::FragmentSpread(spread) => &spread.directives,
            Selection::InlineFragment(fragment) => &fragment.directives,
        }
    }
}

impl<'arena> WithDirectives<'arena> for ExecutableDefinition<'arena> {
    #[inline]
    fn directives(&self) -> &Directives<'arena> {
        match self {
            ExecutableDefinition::Operation(operation) => &operation.directives,
            ExecutableDefinition::Fragment(fragment) => &fragment.directives,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{ParseNode, PrintNode};

    #[test]
    fn operation_no_operations() {
        let ctx = ASTContext::new();
        let ast = Document::parse(&ctx, r#"fragment Foo on Query { hello }"#).unwrap();
        assert_eq!(
            ast.operation(Some("queryName")).unwrap_err().message(),
            "Operation with name queryName does not exist"
        );
        assert_eq!(
            ast.operation(None).unwrap_err().message(),
            "Document does not contain any operations"
        );
    }

    #[test]
    fn operation_one_operation() {
        let ctx = ASTContext::new();
        let ast = Document::parse(&ctx, r#"query queryName { hello }"#).unwrap();
        assert_eq!(
            ast.operation(Some("queryName")).unwrap().print(),
            "query queryName {\n  hello\n}"
        );
        assert_eq!(
            ast.operation(None).unwrap().print(),
            "query queryName {\n  hello\n}"
        );
    }

    #[test]
    fn operation_one_operation_anonymous() {
        let ctx = ASTContext::new();
        let ast = Document::parse(&ctx, r#"{ hello }"#).unwrap();
        assert_eq!(
            ast.operation(Some("queryName")).unwrap_err().message(),
            "Operation with name queryName does not exist"
        );
        assert_eq!(ast.operation(None).unwrap().print(), "{\n  hello\n}");
    }

    #[test]
    fn operation_two_operations() {
        let ctx = ASTContext::new();
        let ast = Document::parse(
            &ctx,
            r#"query queryName { hello } query otherName { world }"#,
        )
        .unwrap();
        assert_eq!(
            ast.operation(Some("otherName")).unwrap().print(),
            "query otherName {\n  world\n}"
        );
        assert_eq!(
            ast.operation(Some("badName")).unwrap_err().message(),
            "Operation with name badName does not exist"
        );
        assert_eq!(
            ast.operation(None).unwrap_err().message(),
            "Document contains more than one operation, missing operation name"
        );
    }

    #[test]
    fn fragments_by_name() {
        let ctx = ASTContext::new();
        let ast = Document::parse(
            &ctx,
            "{ ...A ...B } fragment A on Query { a } fragment B on Query { b }",
        )
        .unwrap();
        let fragments = ast.fragments(&ctx);
        assert_eq!(fragments.len(), 2);
        assert_eq!(fragments["B"].selection_set.print(), "{\n  b\n}");
        assert!(!fragments.contains_key("C"));
    }

    #[test]
    fn type_wrappers() {
        let ctx = ASTContext::new();
        let named = Type::NamedType(NamedType { name: "Int" });
        let list = named.into_nonnull(&ctx).into_list(&ctx).into_nonnull(&ctx);
        assert_eq!(list.print(), "[Int!]!");
        assert_eq!(list.into_nonnull(&ctx), list);
        assert!(list.is_nonnull());
        assert_eq!(list.of_type(), &NamedType { name: "Int" });
    }

    #[test]
    fn object_values() {
        let ctx = ASTContext::new();
        let a = Value::parse(&ctx, "{ a: 1, b: [true] }").unwrap();
        let b = Value::parse(&ctx, "{ b: [true], a: 1 }").unwrap();
        let c = Value::parse(&ctx, "{ b: [false], a: 1 }").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        if let Value::Object(object) = a {
            assert_eq!(object.get("a"), Some(&Value::Int(IntValue { value: "1" })));
            assert_eq!(object.get("c"), None);
            assert_eq!(object.as_map(&ctx).len(), 2);
        } else {
            panic!("expected an object value");
        }
    }

    #[test]
    fn numbers() {
        assert_eq!(IntValue { value: "-12" }.as_i64(), Some(-12));
        assert_eq!(IntValue { value: "99999999999999999999" }.as_i64(), None);
        assert_eq!(FloatValue { value: "-1.5" }.as_f64(), Some(-1.5));
    }

    #[test]
    fn strings() {
        let ctx = ASTContext::new();
        let string = StringValue::escape(&ctx, "say \"hi\"\n");
        assert_eq!(string.value, r#"say \"hi\"\n"#);
        assert!(!string.block);
        assert_eq!(string.decode().unwrap(), "say \"hi\"\n");

        let block = StringValue {
            value: "\n    Indented\n      text\n",
            block: true,
        };
        assert_eq!(block.decode().unwrap(), "Indented\n  text");
    }
}
