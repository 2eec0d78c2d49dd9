use super::ast::*;
use super::ast_kind::ASTKind;
use super::lexer::lex;
use super::token::Token;
use crate::error::{get_location, print_span, Error, ErrorType, Result};
use bumpalo::collections::Vec;
use hashbrown::HashSet;
use logos::Span;

type ParseResult<T> = std::result::Result<T, ASTKind>;

pub(crate) mod private {
    use super::{ASTKind, ParseResult, Token, Vec};

    /// How deeply lists, objects, list types and selection sets may be nested.
    pub(crate) const MAX_DEPTH: usize = 128;

    /// The furthest point in the token list at which a rule has failed.
    #[derive(Debug, PartialEq, Eq, Clone, Copy)]
    pub struct Failure {
        pub(crate) index: usize,
        pub(crate) kind: ASTKind,
        pub(crate) reason: Option<&'static str>,
    }

    /// Private Parser context state that's kept to keep track of the current parser's progress and
    /// state. This contains the AST context's arena and the whitespace-free list of tokens.
    pub struct ParserContext<'a> {
        pub(crate) arena: &'a bumpalo::Bump,
        pub(crate) tokens: &'a [Token<'a>],
        pub(crate) index: usize,
        pub(crate) failure: Option<Failure>,
        pub(crate) depth: usize,
        pub(crate) size_hint: usize,
    }

    impl<'a> ParserContext<'a> {
        /// Create a new Parser context for a given arena and a list of tokens to parse.
        pub(crate) fn new(arena: &'a bumpalo::Bump, tokens: &'a [Token<'a>], size_hint: usize) -> Self {
            ParserContext {
                arena,
                tokens,
                index: 0,
                failure: None,
                depth: 0,
                size_hint,
            }
        }

        #[inline]
        pub(crate) fn peek(&self) -> Token<'a> {
            self.peek_nth(0)
        }

        /// Looks `n` tokens ahead of the current token, returning [`Token::End`] past the input.
        #[inline]
        pub(crate) fn peek_nth(&self, n: usize) -> Token<'a> {
            self.tokens
                .get(self.index + n)
                .copied()
                .unwrap_or(Token::End)
        }

        #[inline]
        pub(crate) fn next(&mut self) -> Token<'a> {
            let token = self.peek();
            if self.index < self.tokens.len() {
                self.index += 1;
            }
            token
        }

        /// Records a failure of the `kind` rule at the current token and returns it.
        #[inline]
        pub(crate) fn fail<T>(&mut self, kind: ASTKind) -> ParseResult<T> {
            self.fail_with(kind, None)
        }

        /// Records a failure with a reason. Only the furthest failure is kept, and rules failing
        /// later at the same token replace it.
        pub(crate) fn fail_with<T>(
            &mut self,
            kind: ASTKind,
            reason: Option<&'static str>,
        ) -> ParseResult<T> {
            let index = self.index;
            match self.failure {
                Some(failure) if failure.index > index => {}
                _ => {
                    self.failure = Some(Failure {
                        index,
                        kind,
                        reason,
                    })
                }
            }
            Err(kind)
        }

        /// Consumes the next token when it equals `token`, otherwise fails.
        #[inline]
        pub(crate) fn expect(&mut self, token: Token<'a>, kind: ASTKind) -> ParseResult<()> {
            if self.peek() == token {
                self.next();
                Ok(())
            } else {
                self.fail(kind)
            }
        }

        /// Checks whether the next token is the given keyword.
        ///
        /// Keywords that are directly followed by punctuation, like `query(`, are lexed as names and
        /// are accepted here as well.
        #[inline]
        pub(crate) fn peek_keyword(&self, keyword: &str) -> bool {
            match self.peek() {
                Token::Name(name) => name == keyword,
                token => token.keyword() == Some(keyword),
            }
        }

        #[inline]
        pub(crate) fn keyword(&mut self, keyword: &str, kind: ASTKind) -> ParseResult<()> {
            if self.peek_keyword(keyword) {
                self.next();
                Ok(())
            } else {
                self.fail(kind)
            }
        }

        /// Checks whether the next token may be used as a name, including keywords.
        #[inline]
        pub(crate) fn peek_name(&self) -> bool {
            let token = self.peek();
            matches!(token, Token::Name(_)) || token.keyword().is_some()
        }

        /// Consumes a name. Keywords are accepted as names, e.g. a field may be called `type`.
        #[inline]
        pub(crate) fn name(&mut self, kind: ASTKind) -> ParseResult<&'a str> {
            match self.peek() {
                Token::Name(name) => {
                    self.next();
                    Ok(name)
                }
                token => match token.keyword() {
                    Some(keyword) => {
                        self.next();
                        Ok(keyword)
                    }
                    None => self.fail(kind),
                },
            }
        }

        /// Runs a rule and rewinds to where it started when it fails.
        #[inline]
        pub(crate) fn attempt<T>(
            &mut self,
            rule: impl FnOnce(&mut Self) -> ParseResult<T>,
        ) -> ParseResult<T> {
            let start = self.index;
            let result = rule(self);
            if result.is_err() {
                self.index = start;
            }
            result
        }

        /// Runs a rule one nesting level deeper and fails once [`MAX_DEPTH`] is exceeded.
        #[inline]
        pub(crate) fn nested<T>(
            &mut self,
            kind: ASTKind,
            rule: impl FnOnce(&mut Self) -> ParseResult<T>,
        ) -> ParseResult<T> {
            if self.depth >= MAX_DEPTH {
                return self.fail_with(kind, Some("Maximum nesting depth exceeded"));
            }
            self.depth += 1;
            let result = rule(self);
            self.depth -= 1;
            result
        }

        #[inline]
        pub(crate) fn optional<T>(
            &mut self,
            rule: impl FnOnce(&mut Self) -> ParseResult<T>,
        ) -> Option<T> {
            self.attempt(rule).ok()
        }

        /// Runs a rule as often as it succeeds.
        pub(crate) fn many<T>(
            &mut self,
            mut rule: impl FnMut(&mut Self) -> ParseResult<T>,
        ) -> Vec<'a, T> {
            let mut items = Vec::new_in(self.arena);
            loop {
                let start = self.index;
                match self.attempt(&mut rule) {
                    Ok(item) if self.index > start => items.push(item),
                    _ => break,
                }
            }
            items
        }

        /// Runs a rule one or more times, with each run separated by a comma.
        pub(crate) fn separated<T>(
            &mut self,
            mut rule: impl FnMut(&mut Self) -> ParseResult<T>,
        ) -> ParseResult<Vec<'a, T>> {
            let mut items = Vec::new_in(self.arena);
            items.push(rule(self)?);
            while let Token::Comma = self.peek() {
                self.next();
                items.push(rule(self)?);
            }
            Ok(items)
        }
    }

    /// (Private) Trait for parsing AST Nodes from a Parser Context.
    /// The [`super::ParseNode`] trait implements the public `parse` method instead.
    pub trait ParseNode<'a>: Sized {
        fn new_with_ctx(ctx: &mut ParserContext<'a>) -> ParseResult<Self>;
    }
}

/// Trait for parsing AST Nodes from source texts using recursive descent over a list of tokens.
///
/// This trait is implemented by all AST Nodes and can hence be used to granularly parse GraphQL language.
/// However, mostly this will be used via `Document::parse`.
pub trait ParseNode<'a>: private::ParseNode<'a> {
    /// Parse an input source text into the implementor's AST Node structure and allocate the
    /// resulting AST into the current AST Context's arena.
    ///
    /// The source is lexed first and the parse fails with a lexical error when that fails.
    /// Otherwise whitespace is dropped, and the node is parsed from the remaining tokens, all of
    /// which have to be consumed.
    fn parse<T: ToString>(ctx: &'a ASTContext, source: T) -> Result<&'a Self> {
        let source = ctx.alloc_string(source.to_string());
        let (tokens, spans): (std::vec::Vec<Token<'a>>, std::vec::Vec<Span>) = lex(source)?
            .into_iter()
            .filter(|(token, _)| !token.is_whitespace())
            .unzip();
        let tokens: &'a [Token<'a>] = ctx.arena.alloc_slice_copy(&tokens);
        let mut parser_ctx = private::ParserContext::new(&ctx.arena, tokens, source.len());
        match Self::new_with_ctx(&mut parser_ctx) {
            Ok(value) if parser_ctx.index == tokens.len() => Ok(ctx.alloc(value)),
            Ok(_) => Err(syntax_error(
                source,
                &spans,
                parser_ctx.index,
                "Unexpected trailing input".to_string(),
            )),
            Err(kind) => {
                let failure = parser_ctx.failure.unwrap_or(private::Failure {
                    index: parser_ctx.index,
                    kind,
                    reason: None,
                });
                let message = match failure.reason {
                    Some(reason) => reason.to_string(),
                    None => format!("Invalid {}", failure.kind),
                };
                Err(syntax_error(source, &spans, failure.index, message))
            }
        }
    }
}

impl<'a, T: private::ParseNode<'a>> ParseNode<'a> for T {}

fn syntax_error(source: &str, spans: &[Span], index: usize, message: String) -> Error {
    let span = spans
        .get(index)
        .cloned()
        .unwrap_or(source.len()..source.len());
    Error::new_with_context(
        message,
        Some(get_location(source, span.clone())),
        print_span(source, span),
        Some(ErrorType::Syntax),
    )
    .at(index)
}

impl<'a> private::ParseNode<'a> for BooleanValue {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<BooleanValue> {
        match ctx.peek() {
            Token::Boolean(value) => {
                ctx.next();
                Ok(BooleanValue { value })
            }
            _ => ctx.fail(ASTKind::Boolean),
        }
    }
}

impl<'a> private::ParseNode<'a> for EnumValue<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<EnumValue<'a>> {
        let value = ctx.name(ASTKind::Enum)?;
        Ok(EnumValue { value })
    }
}

impl<'a> private::ParseNode<'a> for FloatValue<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<FloatValue<'a>> {
        match ctx.peek() {
            Token::Float(value) => {
                ctx.next();
                Ok(FloatValue { value })
            }
            _ => ctx.fail(ASTKind::Float),
        }
    }
}

impl<'a> private::ParseNode<'a> for IntValue<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<IntValue<'a>> {
        match ctx.peek() {
            Token::Integer(value) => {
                ctx.next();
                Ok(IntValue { value })
            }
            _ => ctx.fail(ASTKind::Int),
        }
    }
}

impl<'a> private::ParseNode<'a> for StringValue<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<StringValue<'a>> {
        match ctx.peek() {
            Token::String(value) => {
                ctx.next();
                Ok(value)
            }
            _ => ctx.fail(ASTKind::String),
        }
    }
}

impl<'a> private::ParseNode<'a> for Variable<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Variable<'a>> {
        match ctx.peek() {
            Token::VariableName(name) => {
                ctx.next();
                Ok(Variable { name })
            }
            _ => ctx.fail(ASTKind::Variable),
        }
    }
}

impl<'a> private::ParseNode<'a> for Value<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Value<'a>> {
        let token = ctx.peek();
        if let Some(value) = token.as_value() {
            ctx.next();
            return Ok(value);
        }
        match token {
            Token::BracketOpen => ListValue::new_with_ctx(ctx).map(Value::List),
            Token::BraceOpen => ObjectValue::new_with_ctx(ctx).map(Value::Object),
            Token::VariableName(_) => Variable::new_with_ctx(ctx).map(Value::Variable),
            _ if ctx.peek_name() => EnumValue::new_with_ctx(ctx).map(Value::Enum),
            _ => ctx.fail(ASTKind::Value),
        }
    }
}

impl<'a> private::ParseNode<'a> for ObjectField<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<ObjectField<'a>> {
        let name = ctx.name(ASTKind::ObjectField)?;
        ctx.expect(Token::Colon, ASTKind::ObjectField)?;
        let value = Value::new_with_ctx(ctx)?;
        Ok(ObjectField { name, value })
    }
}

impl<'a> private::ParseNode<'a> for ObjectValue<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<ObjectValue<'a>> {
        ctx.nested(ASTKind::Object, |ctx| {
            ctx.expect(Token::BraceOpen, ASTKind::Object)?;
            let mut children = Vec::new_in(ctx.arena);
            if ctx.peek() != Token::BraceClose {
                let mut names = HashSet::new_in(ctx.arena);
                loop {
                    let start = ctx.index;
                    let field = ObjectField::new_with_ctx(ctx)?;
                    if !names.insert(field.name) {
                        ctx.index = start;
                        return ctx.fail_with(ASTKind::Object, Some("Duplicate object field"));
                    }
                    children.push(field);
                    match ctx.peek() {
                        Token::Comma => ctx.next(),
                        _ => break,
                    };
                }
            }
            ctx.expect(Token::BraceClose, ASTKind::Object)?;
            Ok(ObjectValue { children })
        })
    }
}

impl<'a> private::ParseNode<'a> for ListValue<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<ListValue<'a>> {
        ctx.nested(ASTKind::List, |ctx| {
            ctx.expect(Token::BracketOpen, ASTKind::List)?;
            let children = match ctx.peek() {
                Token::BracketClose => Vec::new_in(ctx.arena),
                _ => ctx.separated(Value::new_with_ctx)?,
            };
            ctx.expect(Token::BracketClose, ASTKind::List)?;
            Ok(ListValue { children })
        })
    }
}

impl<'a> private::ParseNode<'a> for Argument<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Argument<'a>> {
        let name = ctx.name(ASTKind::Argument)?;
        ctx.expect(Token::Colon, ASTKind::Argument)?;
        let value = Value::new_with_ctx(ctx)?;
        Ok(Argument { name, value })
    }
}

/// Parses a parenthesized list of arguments, or no arguments when no parenthesis follows.
/// At least one argument has to be passed inside parentheses.
impl<'a> private::ParseNode<'a> for Arguments<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Arguments<'a>> {
        let children = if let Token::ParenOpen = ctx.peek() {
            ctx.next();
            let children = ctx.separated(Argument::new_with_ctx)?;
            ctx.expect(Token::ParenClose, ASTKind::Arguments)?;
            children
        } else {
            Vec::new_in(ctx.arena)
        };
        Ok(Arguments { children })
    }
}

impl<'a> private::ParseNode<'a> for Directive<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Directive<'a>> {
        if let Token::DirectiveName(name) = ctx.peek() {
            ctx.next();
            let arguments = Arguments::new_with_ctx(ctx)?;
            Ok(Directive { name, arguments })
        } else {
            ctx.fail(ASTKind::Directive)
        }
    }
}

impl<'a> private::ParseNode<'a> for Directives<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Directives<'a>> {
        let mut builder = Vec::new_in(ctx.arena);
        while let Token::DirectiveName(_) = ctx.peek() {
            builder.push(Directive::new_with_ctx(ctx)?);
        }
        Ok(Directives { children: builder })
    }
}

impl<'a> private::ParseNode<'a> for Field<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Field<'a>> {
        // A name is only an alias when a colon follows it
        let alias = if let Token::Colon = ctx.peek_nth(1) {
            let alias = ctx.name(ASTKind::Alias)?;
            ctx.next();
            Some(alias)
        } else {
            None
        };
        let name = ctx.name(ASTKind::Field)?;
        let arguments = Arguments::new_with_ctx(ctx)?;
        let directives = Directives::new_with_ctx(ctx)?;
        let selection_set = if let Token::BraceOpen = ctx.peek() {
            SelectionSet::new_with_ctx(ctx)?
        } else {
            SelectionSet::default_in(ctx.arena)
        };
        Ok(Field {
            alias,
            name,
            arguments,
            directives,
            selection_set,
        })
    }
}

impl<'a> private::ParseNode<'a> for FragmentSpread<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<FragmentSpread<'a>> {
        ctx.expect(Token::Ellipsis, ASTKind::FragmentSpread)?;
        let name = NamedType::new_with_ctx(ctx)?;
        let directives = Directives::new_with_ctx(ctx)?;
        Ok(FragmentSpread { name, directives })
    }
}

impl<'a> private::ParseNode<'a> for NamedType<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<NamedType<'a>> {
        let name = ctx.name(ASTKind::NamedType)?;
        Ok(NamedType { name })
    }
}

impl<'a> private::ParseNode<'a> for InlineFragment<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<InlineFragment<'a>> {
        ctx.expect(Token::Ellipsis, ASTKind::InlineFragment)?;
        let type_condition = if ctx.peek_keyword("on") {
            ctx.next();
            Some(Type::new_with_ctx(ctx)?)
        } else {
            None
        };
        let directives = Directives::new_with_ctx(ctx)?;
        let selection_set = SelectionSet::new_with_ctx(ctx)?;
        Ok(InlineFragment {
            type_condition,
            directives,
            selection_set,
        })
    }
}

impl<'a> private::ParseNode<'a> for Selection<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Selection<'a>> {
        // Inline fragments come before spreads so that `... on Type` isn't a spread of `on`
        ctx.attempt(|ctx| Field::new_with_ctx(ctx).map(Selection::Field))
            .or_else(|_| {
                ctx.attempt(|ctx| InlineFragment::new_with_ctx(ctx).map(Selection::InlineFragment))
            })
            .or_else(|_| {
                ctx.attempt(|ctx| FragmentSpread::new_with_ctx(ctx).map(Selection::FragmentSpread))
            })
            .or_else(|_| ctx.fail(ASTKind::Selection))
    }
}

impl<'a> private::ParseNode<'a> for SelectionSet<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<SelectionSet<'a>> {
        ctx.nested(ASTKind::SelectionSet, |ctx| {
            ctx.expect(Token::BraceOpen, ASTKind::SelectionSet)?;
            let mut selections = Vec::new_in(ctx.arena);
            loop {
                selections.push(Selection::new_with_ctx(ctx)?);
                if let Token::BraceClose = ctx.peek() {
                    ctx.next();
                    break;
                }
            }
            Ok(SelectionSet { selections })
        })
    }
}

/// Parses a named, list or non-null type.
///
/// List types may wrap any type, including other list types and non-null types, e.g. `[[Int!]]!`,
/// rather than only a named type.
impl<'a> private::ParseNode<'a> for Type<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Type<'a>> {
        let of_type = if let Token::BracketOpen = ctx.peek() {
            ctx.next();
            let inner = ctx.nested(ASTKind::ListType, Type::new_with_ctx)?;
            ctx.expect(Token::BracketClose, ASTKind::ListType)?;
            Type::ListType(ctx.arena.alloc(inner))
        } else if ctx.peek_name() {
            Type::NamedType(NamedType::new_with_ctx(ctx)?)
        } else {
            return ctx.fail(ASTKind::Type);
        };
        if let Token::Exclam = ctx.peek() {
            ctx.next();
            Ok(Type::NonNullType(ctx.arena.alloc(of_type)))
        } else {
            Ok(of_type)
        }
    }
}

impl<'a> private::ParseNode<'a> for VariableDefinition<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<VariableDefinition<'a>> {
        let variable = Variable::new_with_ctx(ctx)?;
        ctx.expect(Token::Colon, ASTKind::VariableDefinition)?;
        let of_type = Type::new_with_ctx(ctx)?;
        let default_value = if let Token::Equal = ctx.peek() {
            ctx.next();
            Some(Value::new_with_ctx(ctx)?)
        } else {
            None
        };
        let directives = Directives::new_with_ctx(ctx)?;
        Ok(VariableDefinition {
            variable,
            of_type,
            default_value,
            directives,
        })
    }
}

impl<'a> private::ParseNode<'a> for VariableDefinitions<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<VariableDefinitions<'a>> {
        let children = if let Token::ParenOpen = ctx.peek() {
            ctx.next();
            let children = ctx.separated(VariableDefinition::new_with_ctx)?;
            ctx.expect(Token::ParenClose, ASTKind::VariableDefinitions)?;
            children
        } else {
            Vec::new_in(ctx.arena)
        };
        Ok(VariableDefinitions { children })
    }
}

impl<'a> private::ParseNode<'a> for FragmentDefinition<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<FragmentDefinition<'a>> {
        ctx.keyword("fragment", ASTKind::FragmentDefinition)?;
        let name = NamedType::new_with_ctx(ctx)?;
        ctx.keyword("on", ASTKind::FragmentDefinition)?;
        let type_condition = Type::new_with_ctx(ctx)?;
        let directives = Directives::new_with_ctx(ctx)?;
        let selection_set = SelectionSet::new_with_ctx(ctx)?;
        Ok(FragmentDefinition {
            name,
            type_condition,
            directives,
            selection_set,
        })
    }
}

impl<'a> private::ParseNode<'a> for OperationKind {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<OperationKind> {
        let operation = if ctx.peek_keyword("query") {
            OperationKind::Query
        } else if ctx.peek_keyword("mutation") {
            OperationKind::Mutation
        } else if ctx.peek_keyword("subscription") {
            OperationKind::Subscription
        } else {
            return ctx.fail(ASTKind::OperationKind);
        };
        ctx.next();
        Ok(operation)
    }
}

impl<'a> private::ParseNode<'a> for OperationDefinition<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<OperationDefinition<'a>> {
        ctx.attempt(|ctx| {
            let operation = OperationKind::new_with_ctx(ctx)?;
            let name = if ctx.peek_name() {
                Some(NamedType::new_with_ctx(ctx)?)
            } else {
                None
            };
            let variable_definitions = VariableDefinitions::new_with_ctx(ctx)?;
            let directives = Directives::new_with_ctx(ctx)?;
            let selection_set = SelectionSet::new_with_ctx(ctx)?;
            Ok(OperationDefinition {
                operation,
                name,
                variable_definitions,
                directives,
                selection_set,
            })
        })
        .or_else(|_| {
            ctx.attempt(|ctx| {
                let selection_set = SelectionSet::new_with_ctx(ctx)?;
                Ok(OperationDefinition {
                    operation: OperationKind::Query,
                    name: None,
                    variable_definitions: VariableDefinitions::default_in(ctx.arena),
                    directives: Directives::default_in(ctx.arena),
                    selection_set,
                })
            })
        })
        .or_else(|_| ctx.fail(ASTKind::OperationDefinition))
    }
}

impl<'a> private::ParseNode<'a> for ExecutableDefinition<'a> {
    #[inline]
    fn new_with_ctx(
        ctx: &mut private::ParserContext<'a>,
    ) -> ParseResult<ExecutableDefinition<'a>> {
        ctx.attempt(|ctx| {
            OperationDefinition::new_with_ctx(ctx).map(ExecutableDefinition::Operation)
        })
        .or_else(|_| {
            ctx.attempt(|ctx| {
                FragmentDefinition::new_with_ctx(ctx).map(ExecutableDefinition::Fragment)
            })
        })
        .or_else(|_| ctx.fail(ASTKind::ExecutableDefinition))
    }
}

#[inline]
fn parse_description<'a>(ctx: &mut private::ParserContext<'a>) -> Option<StringValue<'a>> {
    match ctx.peek() {
        Token::String(description) => {
            ctx.next();
            Some(description)
        }
        _ => None,
    }
}

impl<'a> private::ParseNode<'a> for InputValueDefinition<'a> {
    #[inline]
    fn new_with_ctx(
        ctx: &mut private::ParserContext<'a>,
    ) -> ParseResult<InputValueDefinition<'a>> {
        let description = parse_description(ctx);
        let name = ctx.name(ASTKind::InputValueDefinition)?;
        ctx.expect(Token::Colon, ASTKind::InputValueDefinition)?;
        let of_type = Type::new_with_ctx(ctx)?;
        let default_value = if let Token::Equal = ctx.peek() {
            ctx.next();
            Some(Value::new_with_ctx(ctx)?)
        } else {
            None
        };
        let directives = Directives::new_with_ctx(ctx)?;
        Ok(InputValueDefinition {
            description,
            name,
            of_type,
            default_value,
            directives,
        })
    }
}

impl<'a> private::ParseNode<'a> for FieldDefinition<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<FieldDefinition<'a>> {
        let description = parse_description(ctx);
        let name = ctx.name(ASTKind::FieldDefinition)?;
        let arguments = if let Token::ParenOpen = ctx.peek() {
            ctx.next();
            let arguments = ctx.separated(InputValueDefinition::new_with_ctx)?;
            ctx.expect(Token::ParenClose, ASTKind::FieldDefinition)?;
            arguments
        } else {
            Vec::new_in(ctx.arena)
        };
        ctx.expect(Token::Colon, ASTKind::FieldDefinition)?;
        let of_type = Type::new_with_ctx(ctx)?;
        let directives = Directives::new_with_ctx(ctx)?;
        Ok(FieldDefinition {
            description,
            name,
            arguments,
            of_type,
            directives,
        })
    }
}

impl<'a> private::ParseNode<'a> for ScalarTypeDefinition<'a> {
    #[inline]
    fn new_with_ctx(
        ctx: &mut private::ParserContext<'a>,
    ) -> ParseResult<ScalarTypeDefinition<'a>> {
        let description = parse_description(ctx);
        ctx.keyword("scalar", ASTKind::ScalarTypeDefinition)?;
        let name = NamedType::new_with_ctx(ctx)?;
        let directives = Directives::new_with_ctx(ctx)?;
        Ok(ScalarTypeDefinition {
            description,
            name,
            directives,
        })
    }
}

impl<'a> private::ParseNode<'a> for ObjectTypeDefinition<'a> {
    #[inline]
    fn new_with_ctx(
        ctx: &mut private::ParserContext<'a>,
    ) -> ParseResult<ObjectTypeDefinition<'a>> {
        let description = parse_description(ctx);
        ctx.keyword("type", ASTKind::ObjectTypeDefinition)?;
        let name = NamedType::new_with_ctx(ctx)?;
        let mut interfaces = Vec::new_in(ctx.arena);
        if ctx.peek_keyword("implements") {
            ctx.next();
            if let Token::Ampersand = ctx.peek() {
                ctx.next();
            }
            interfaces.push(NamedType::new_with_ctx(ctx)?);
            while let Token::Ampersand = ctx.peek() {
                ctx.next();
                interfaces.push(NamedType::new_with_ctx(ctx)?);
            }
        }
        let directives = Directives::new_with_ctx(ctx)?;
        let fields = if let Token::BraceOpen = ctx.peek() {
            ctx.next();
            let fields = ctx.many(FieldDefinition::new_with_ctx);
            if fields.is_empty() {
                return ctx.fail(ASTKind::FieldDefinition);
            }
            ctx.expect(Token::BraceClose, ASTKind::ObjectTypeDefinition)?;
            fields
        } else {
            Vec::new_in(ctx.arena)
        };
        Ok(ObjectTypeDefinition {
            description,
            name,
            interfaces,
            directives,
            fields,
        })
    }
}

impl<'a> private::ParseNode<'a> for TypeDefinition<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<TypeDefinition<'a>> {
        ctx.attempt(|ctx| ScalarTypeDefinition::new_with_ctx(ctx).map(TypeDefinition::Scalar))
            .or_else(|_| {
                ctx.attempt(|ctx| {
                    ObjectTypeDefinition::new_with_ctx(ctx).map(TypeDefinition::Object)
                })
            })
            .or_else(|_| ctx.fail(ASTKind::TypeDefinition))
    }
}

impl<'a> private::ParseNode<'a> for Definition<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Definition<'a>> {
        ctx.attempt(|ctx| ExecutableDefinition::new_with_ctx(ctx).map(Definition::Executable))
            .or_else(|_| {
                ctx.attempt(|ctx| TypeDefinition::new_with_ctx(ctx).map(Definition::TypeSystem))
            })
            .or_else(|_| ctx.fail(ASTKind::Definition))
    }
}

impl<'a> private::ParseNode<'a> for Document<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Document<'a>> {
        let definitions = ctx.many(Definition::new_with_ctx);
        if definitions.is_empty() {
            return ctx.fail(ASTKind::Document);
        }
        Ok(Document {
            definitions,
            size_hint: ctx.size_hint,
        })
    }
}
