//! Scanning, decoding, and escaping of GraphQL string literals.
//!
//! The lexer keeps strings raw: a [`StringValue`] holds the text between its delimiters exactly
//! as it was written. Escape sequences and block string indentation are only processed when a
//! string is explicitly decoded.

use super::ast::StringValue;
use super::token::Token;
use crate::error::{Error, ErrorType, Result};
use logos::{Lexer, Logos};
use std::borrow::Cow;

#[derive(Logos, Debug, PartialEq)]
enum BlockPart {
    #[regex(r#"[^"\\]+"#)]
    Text,

    #[regex(r#""+"#)]
    Quotes,

    #[token(r#"\""""#)]
    EscapedEndBlock,

    #[token("\\")]
    Backslash,

    #[error]
    Error,
}

#[derive(Logos, Debug, PartialEq)]
enum StringPart {
    #[regex(r#"[^\n\r\\"]+"#)]
    Text,

    #[regex(r"\\u[0-9a-fA-F][0-9a-fA-F][0-9a-fA-F][0-9a-fA-F]")]
    EscapedCodepoint,

    #[token(r#"\""#)]
    EscapedQuote,
    #[token(r#"\\"#)]
    EscapedBackslash,
    #[token(r#"\/"#)]
    EscapedSlash,
    #[token(r#"\b"#)]
    EscapedBackspace,
    #[token(r#"\f"#)]
    EscapedFormfeed,
    #[token(r#"\n"#)]
    EscapedNewline,
    #[token(r#"\r"#)]
    EscapedReturn,
    #[token(r#"\t"#)]
    EscapedTab,

    #[token("\"")]
    EndString,

    #[error]
    Error,
}

/// Callback of [`Token::String`], invoked after one to three opening quotes were matched.
pub(crate) fn scan_string<'a>(lex: &mut Lexer<'a, Token<'a>>) -> Option<StringValue<'a>> {
    match lex.slice() {
        r#""""# => Some(StringValue {
            value: "",
            block: false,
        }),
        r#"""""# => {
            let remainder = lex.remainder();
            let end = scan_block_string(remainder)?;
            lex.bump(end + 3);
            Some(StringValue {
                value: &remainder[..end],
                block: true,
            })
        }
        "\"" => {
            // Most strings contain no escapes and are only checked for their closing quote
            let remainder = lex.remainder();
            for (i, c) in remainder.char_indices() {
                match c {
                    '\n' | '\r' => return None,
                    '\\' => {
                        let end = i + scan_escaped_string(&remainder[i..])?;
                        lex.bump(end + 1);
                        return Some(StringValue {
                            value: &remainder[..end],
                            block: false,
                        });
                    }
                    '"' => {
                        lex.bump(i + 1);
                        return Some(StringValue {
                            value: &remainder[..i],
                            block: false,
                        });
                    }
                    _ => {}
                }
            }
            None
        }
        _ => None,
    }
}

/// Returns the offset of the closing quote of a string containing escape sequences.
fn scan_escaped_string(text: &str) -> Option<usize> {
    let mut sublex = StringPart::lexer(text);
    while let Some(part) = sublex.next() {
        match part {
            StringPart::EndString => return Some(sublex.span().start),
            StringPart::Error => return None,
            _ => {}
        }
    }
    None
}

/// Returns the offset of the closing `"""` of a block string.
///
/// A run of more than three quotes ends the block string at its last three quotes.
fn scan_block_string(text: &str) -> Option<usize> {
    let mut sublex = BlockPart::lexer(text);
    while let Some(part) = sublex.next() {
        match part {
            BlockPart::Quotes if sublex.slice().len() >= 3 => return Some(sublex.span().end - 3),
            BlockPart::Error => return None,
            _ => {}
        }
    }
    None
}

/// Processes the escape sequences of a raw single-quoted string.
pub(crate) fn decode_string(raw: &str) -> Result<Cow<'_, str>> {
    if !raw.contains('\\') {
        return Ok(Cow::Borrowed(raw));
    }

    let mut output = String::with_capacity(raw.len());
    let mut sublex = StringPart::lexer(raw);
    while let Some(part) = sublex.next() {
        match part {
            StringPart::Text => output.push_str(sublex.slice()),
            StringPart::EscapedQuote => output.push('"'),
            StringPart::EscapedBackslash => output.push('\\'),
            StringPart::EscapedSlash => output.push('/'),
            StringPart::EscapedBackspace => output.push('\u{8}'),
            StringPart::EscapedFormfeed => output.push('\u{c}'),
            StringPart::EscapedNewline => output.push('\n'),
            StringPart::EscapedReturn => output.push('\r'),
            StringPart::EscapedTab => output.push('\t'),
            StringPart::EscapedCodepoint => {
                use lexical_core::{parse_with_options, NumberFormatBuilder, ParseIntegerOptions};
                const FORMAT: u128 = NumberFormatBuilder::hexadecimal();
                const OPTIONS: ParseIntegerOptions = ParseIntegerOptions::new();
                let codepoint = parse_with_options::<u32, FORMAT>(
                    sublex.slice()[2..].as_bytes(),
                    &OPTIONS,
                )
                .ok()
                .and_then(char::from_u32)
                .ok_or_else(|| {
                    Error::new(
                        format!("Invalid unicode escape `{}`", sublex.slice()),
                        Some(ErrorType::GraphQL),
                    )
                })?;
                output.push(codepoint);
            }
            StringPart::EndString | StringPart::Error => {
                return Err(Error::new(
                    format!(
                        "Invalid character in string at offset {}",
                        sublex.span().start
                    ),
                    Some(ErrorType::GraphQL),
                ))
            }
        }
    }
    Ok(Cow::Owned(output))
}

fn split_lines(text: &str) -> std::vec::Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = std::vec::Vec::new();
    let mut start = 0;
    let mut index = 0;
    while index < bytes.len() {
        match bytes[index] {
            b'\n' => {
                lines.push(&text[start..index]);
                start = index + 1;
            }
            b'\r' => {
                lines.push(&text[start..index]);
                if bytes.get(index + 1) == Some(&b'\n') {
                    index += 1;
                }
                start = index + 1;
            }
            _ => {}
        }
        index += 1;
    }
    lines.push(&text[start..]);
    lines
}

#[inline]
fn is_indent(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Produces the value of a raw block string.
///
/// The common indentation of all lines but the first is removed, leading and trailing blank
/// lines are dropped, line terminators are normalised to `\n`, and `\"""` is unescaped.
///
/// [Reference](https://spec.graphql.org/October2021/#BlockStringValue())
pub(crate) fn decode_block_string(raw: &str) -> String {
    let unescaped = if raw.contains(r#"\""""#) {
        Cow::Owned(raw.replace(r#"\""""#, r#"""""#))
    } else {
        Cow::Borrowed(raw)
    };

    let lines = split_lines(&unescaped);
    let common_indent = lines
        .iter()
        .skip(1)
        .filter_map(|line| {
            let content = line.trim_start_matches(is_indent);
            (!content.is_empty()).then(|| line.len() - content.len())
        })
        .min()
        .unwrap_or(0);

    let lines = lines
        .iter()
        .enumerate()
        .map(|(index, line)| match index {
            0 => *line,
            _ => line.get(common_indent..).unwrap_or(""),
        })
        .collect::<std::vec::Vec<&str>>();

    let is_blank = |line: &&str| line.trim_start_matches(is_indent).is_empty();
    match lines.iter().position(|line| !is_blank(line)) {
        Some(first) => {
            let last = lines.iter().rposition(|line| !is_blank(line)).unwrap_or(first);
            lines[first..=last].join("\n")
        }
        None => String::new(),
    }
}

/// Escapes a text so that it can be used as the raw value of a single-quoted string.
pub(crate) fn escape_string(text: &str) -> Cow<'_, str> {
    if !text.chars().any(|c| c == '"' || c == '\\' || c < ' ') {
        return Cow::Borrowed(text);
    }

    use lexical_core::{
        write_with_options, FormattedSize, NumberFormatBuilder, WriteIntegerOptions,
    };
    const FORMAT: u128 = NumberFormatBuilder::hexadecimal();
    const OPTIONS: WriteIntegerOptions = WriteIntegerOptions::new();
    let mut buf = [b'0'; u32::FORMATTED_SIZE];

    let mut output = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str(r"\\"),
            '\n' => output.push_str(r"\n"),
            '\r' => output.push_str(r"\r"),
            '\t' => output.push_str(r"\t"),
            '\u{8}' => output.push_str(r"\b"),
            '\u{c}' => output.push_str(r"\f"),
            c if c < ' ' => {
                let digits = write_with_options::<_, FORMAT>(c as u32, &mut buf, &OPTIONS);
                output.push_str(r"\u");
                for _ in digits.len()..4 {
                    output.push('0');
                }
                output.extend(digits.iter().map(|digit| char::from(*digit)));
            }
            c => output.push(c),
        }
    }
    Cow::Owned(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    fn lex_one(source: &str) -> Option<Token> {
        let mut lex = Token::lexer(source);
        let token = lex.next();
        assert_eq!(lex.next(), None, "expected a single token for {:?}", source);
        token
    }

    fn raw(value: &str, block: bool) -> Option<Token> {
        Some(Token::String(StringValue { value, block }))
    }

    #[test]
    fn strings() {
        assert_eq!(lex_one(r#""hello world""#), raw("hello world", false));
        assert_eq!(lex_one(r#""""#), raw("", false));
        assert_eq!(
            lex_one(r#""hello \" \n \u1234 world""#),
            raw(r#"hello \" \n \u1234 world"#, false)
        );
        assert_eq!(lex_one(r#""ünïcødé""#), raw("ünïcødé", false));
    }

    #[test]
    fn bad_strings() {
        assert_eq!(Token::lexer("\"\\ \"").next(), Some(Token::Error));
        assert_eq!(Token::lexer("\"\\u12\"").next(), Some(Token::Error));
        assert_eq!(Token::lexer("\"\n\"").next(), Some(Token::Error));
        assert_eq!(Token::lexer("\"\r\"").next(), Some(Token::Error));
        assert_eq!(Token::lexer("\"open").next(), Some(Token::Error));
    }

    #[test]
    fn block_strings() {
        assert_eq!(lex_one(r#""""hello block""""#), raw("hello block", true));
        assert_eq!(lex_one(r#""""""""#), raw("", true));
        assert_eq!(
            lex_one(r#""""He said "hi"""""#),
            raw(r#"He said "hi""#, true)
        );
        assert_eq!(
            lex_one(r#""""a "" b \""" c""""#),
            raw(r#"a "" b \""" c"#, true)
        );
        assert_eq!(
            lex_one("\"\"\"line\n  \\n line\r\n\"\"\""),
            raw("line\n  \\n line\r\n", true)
        );
        assert_eq!(Token::lexer(r#""""open"#).next(), Some(Token::Error));
    }

    #[test]
    fn decoding() {
        assert_eq!(decode_string("plain").unwrap(), Cow::Borrowed("plain"));
        assert_eq!(
            decode_string(r#"a \"quote\" \\ \/ \b\f\n\r\t"#).unwrap(),
            "a \"quote\" \\ / \u{8}\u{c}\n\r\t"
        );
        assert_eq!(decode_string(r"\u0041\u00e9").unwrap(), "Aé");
        assert!(decode_string(r"\uD800").is_err());
        assert!(decode_string(r"\x").is_err());
    }

    #[test]
    fn decoding_blocks() {
        let raw = indoc! {r#"

                Hello,
                  World!

                Yours,
                  GraphQL.
            "#};
        assert_eq!(
            decode_block_string(raw),
            "Hello,\n  World!\n\nYours,\n  GraphQL."
        );
        assert_eq!(decode_block_string("  first\n    second"), "  first\nsecond");
        assert_eq!(decode_block_string(r#"say \""" now"#), r#"say """ now"#);
        assert_eq!(decode_block_string("a\r\n  b\r  c"), "a\nb\nc");
        assert_eq!(decode_block_string(" \n\t\n"), "");
    }

    #[test]
    fn escaping() {
        assert_eq!(escape_string("plain"), Cow::Borrowed("plain"));
        assert_eq!(
            escape_string("say \"hi\"\n\\ \u{1}"),
            r#"say \"hi\"\n\\ \u0001"#
        );
        assert_eq!(decode_string(&escape_string("tab\tand\u{1f}")).unwrap(), "tab\tand\u{1f}");
    }
}
