use super::token::Token;
use crate::error::{get_location, print_span, Error, ErrorType, Result};
use logos::{Logos, Span};

/// Lexes a source text into a list of tokens, each paired with its byte span in the source.
///
/// Whitespace and comments are kept as [`Token::Whitespace`] tokens. Keyword tokens that aren't
/// followed by whitespace, an opening brace, or the end of the input are turned into names, so
/// that `query_1` or `type(id: 1)` don't start with a keyword.
///
/// Lexing is all or nothing. When no token matches at a position a lexical [Error] is returned,
/// whose position is the character offset of that position.
pub fn lex(source: &str) -> Result<Vec<(Token<'_>, Span)>> {
    let mut tokens = Vec::with_capacity(source.len() / 3 + 1);
    for (token, span) in Token::lexer(source).spanned() {
        match token {
            Token::Error => return Err(lexical_error(source, span)),
            token if token.keyword().is_some() && !ends_keyword(&source[span.end..]) => {
                tokens.push((Token::Name(&source[span.clone()]), span))
            }
            token => tokens.push((token, span)),
        }
    }
    Ok(tokens)
}

#[inline]
fn ends_keyword(rest: &str) -> bool {
    matches!(
        rest.as_bytes().first(),
        None | Some(b' ' | b'\t' | b'\n' | b'\r' | b'#' | b'{')
    )
}

fn lexical_error(source: &str, span: Span) -> Error {
    let position = source[..span.start].chars().count();
    let (message, width) = match source[span.start..].chars().next() {
        Some('"') => ("Invalid or unterminated string".to_string(), span.len()),
        Some(c) => (format!("Unexpected character `{}`", c), c.len_utf8()),
        None => ("Unexpected end of input".to_string(), 0),
    };
    let span = span.start..span.start + width;
    Error::new_with_context(
        message,
        Some(get_location(source, span.clone())),
        print_span(source, span),
        Some(ErrorType::Lexical),
    )
    .at(position)
}

#[cfg(test)]
mod tests {
    use super::lex;
    use crate::ast::*;
    use crate::error::ErrorType;

    fn tokens(source: &str) -> std::vec::Vec<Token> {
        lex(source)
            .unwrap()
            .into_iter()
            .map(|(token, _)| token)
            .filter(|token| !token.is_whitespace())
            .collect()
    }

    #[test]
    fn keywords() {
        assert_eq!(tokens("query_field"), vec![Token::Name("query_field")]);
        assert_eq!(tokens("queryfield"), vec![Token::Name("queryfield")]);
        assert_eq!(tokens("query123"), vec![Token::Name("query123")]);
        assert_eq!(tokens("query {"), vec![Token::Query, Token::BraceOpen]);
        assert_eq!(tokens("query{"), vec![Token::Query, Token::BraceOpen]);
        assert_eq!(tokens("query"), vec![Token::Query]);
        assert_eq!(tokens("query\n"), vec![Token::Query]);
        assert_eq!(
            tokens("type(id: 1)"),
            vec![
                Token::Name("type"),
                Token::ParenOpen,
                Token::Name("id"),
                Token::Colon,
                Token::Integer("1"),
                Token::ParenClose
            ]
        );
        assert_eq!(
            tokens("... on Foo"),
            vec![Token::Ellipsis, Token::On, Token::Name("Foo")]
        );
        assert_eq!(tokens("fragment:"), vec![Token::Name("fragment"), Token::Colon]);
    }

    #[test]
    fn numbers() {
        assert_eq!(tokens("1"), vec![Token::Integer("1")]);
        assert_eq!(tokens("-1"), vec![Token::Integer("-1")]);
        assert_eq!(tokens("1.4"), vec![Token::Float("1.4")]);
        assert_eq!(tokens("-1.4"), vec![Token::Float("-1.4")]);
        assert_eq!(tokens("007"), vec![Token::Integer("007")]);
    }

    #[test]
    fn raw_strings() {
        let source = r#""\"a string with\\n\\tsome special characters: \\u1234\"""#;
        let token = tokens(source);
        assert_eq!(
            token,
            vec![Token::String(StringValue {
                value: r#"\"a string with\\n\\tsome special characters: \\u1234\""#,
                block: false
            })]
        );
    }

    #[test]
    fn block_strings() {
        assert_eq!(
            tokens(r#""""He said "hi"""""#),
            vec![Token::String(StringValue {
                value: r#"He said "hi""#,
                block: true
            })]
        );
    }

    #[test]
    fn spans() {
        let tokens = lex("{ a }").unwrap();
        assert_eq!(tokens.len(), 5);
        assert_eq!(tokens[0], (Token::BraceOpen, 0..1));
        assert_eq!(tokens[2], (Token::Name("a"), 2..3));
        assert_eq!(tokens[4], (Token::BraceClose, 4..5));
    }

    #[test]
    fn failures() {
        let error = lex("{ a % }").unwrap_err();
        assert_eq!(error.error_type(), ErrorType::Lexical);
        assert_eq!(error.position(), Some(4));
        assert_eq!(error.message(), "Unexpected character `%`");
        assert_eq!(
            error.to_string(),
            "Lexical Error: Unexpected character `%`\n 1 | { a % }\n   |     ^"
        );

        let error = lex("{ ä ? }").unwrap_err();
        assert_eq!(error.position(), Some(2));
        assert_eq!(error.message(), "Unexpected character `ä`");

        let error = lex("{ a(b: \"open) }").unwrap_err();
        assert_eq!(error.position(), Some(7));
        assert_eq!(error.message(), "Invalid or unterminated string");

        assert!(lex("1.").is_err());
        assert!(lex("$").is_err());
        assert!(lex("..").is_err());
    }
}
