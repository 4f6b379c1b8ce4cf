//! Recursive-descent JSON reader.
//!
//! Every sub-parser advances the same [`Cursor`]. Parsing is all-or-nothing:
//! any malformed input yields a [`ParseError`] and no partial tree.

use std::str::FromStr;

use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::node::{JsonNode, Map};
use crate::number::{is_number_literal, JsonNumber};
use crate::options::{ParseMode, ParseOptions};

/// JSON parser over a single input string.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    options: ParseOptions,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str, options: ParseOptions) -> Self {
        Self {
            cursor: Cursor::new(input),
            options,
            depth: 0,
        }
    }

    /// Parse one value. In strict mode only whitespace may follow it.
    pub fn parse(mut self) -> Result<JsonNode, ParseError> {
        let value = self.parse_value()?;
        if !self.lenient() {
            self.skip_whitespace();
            if !self.cursor.is_at_end() {
                return Err(ParseError::TrailingCharacters {
                    pos: self.cursor.pos(),
                });
            }
        }
        Ok(value)
    }

    fn lenient(&self) -> bool {
        self.options.is_lenient()
    }

    /// Strict mode skips the four JSON whitespace characters. Lenient mode
    /// only knows space and newline; anything else is left to the
    /// skip-forward tolerance of the sub-parsers.
    fn skip_whitespace(&mut self) {
        match self.options.mode {
            ParseMode::Strict => self.cursor.skip_while(|c| matches!(c, ' ' | '\t' | '\n' | '\r')),
            ParseMode::Lenient => self.cursor.skip_while(|c| matches!(c, ' ' | '\n')),
        }
    }

    /// Move to the opening delimiter of the next token and consume it.
    fn open(&mut self, delimiter: char) -> Result<(), ParseError> {
        if self.lenient() {
            self.cursor.skip_while(|c| c != delimiter);
        }
        self.cursor.expect(delimiter)
    }

    fn parse_value(&mut self) -> Result<JsonNode, ParseError> {
        if !self.lenient() {
            self.skip_whitespace();
        }
        loop {
            let pos = self.cursor.pos();
            match self.cursor.current()? {
                '-' | '0'..='9' => return self.parse_number(),
                '{' => return self.parse_object(),
                '[' => return self.parse_array(),
                '"' => return self.parse_string().map(JsonNode::String),
                't' => return self.parse_literal("true", JsonNode::Boolean(true)),
                'f' => return self.parse_literal("false", JsonNode::Boolean(false)),
                'n' => return self.parse_literal("null", JsonNode::Null),
                ch @ ('}' | ']') => return Err(ParseError::UnexpectedChar { ch, pos }),
                _ if self.lenient() => self.cursor.advance(),
                ch => return Err(ParseError::UnexpectedChar { ch, pos }),
            }
        }
    }

    /// `true`, `false` or `null`. The lenient reader consumes the fixed
    /// length without checking the spelling.
    fn parse_literal(&mut self, text: &str, node: JsonNode) -> Result<JsonNode, ParseError> {
        if self.lenient() {
            self.cursor.skip_chars(text.len())?;
            return Ok(node);
        }
        if !self.cursor.starts_with(text) {
            if text.starts_with(self.cursor.rest()) {
                return Err(ParseError::UnexpectedEnd);
            }
            return Err(ParseError::InvalidLiteral {
                pos: self.cursor.pos(),
            });
        }
        self.cursor.skip_chars(text.len())?;
        Ok(node)
    }

    fn parse_number(&mut self) -> Result<JsonNode, ParseError> {
        let pos = self.cursor.pos();
        let literal = self
            .cursor
            .take_while(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));
        if !self.lenient() && !is_number_literal(literal) {
            return Err(ParseError::InvalidNumber {
                literal: literal.to_owned(),
                pos,
            });
        }
        Ok(JsonNode::Number(JsonNumber::from_literal_unchecked(
            literal.to_owned(),
        )))
    }

    fn enter(&mut self) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > self.options.max_depth {
            return Err(ParseError::NestingTooDeep {
                max: self.options.max_depth,
                pos: self.cursor.pos(),
            });
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn parse_object(&mut self) -> Result<JsonNode, ParseError> {
        self.enter()?;
        self.open('{')?;
        let map = if self.lenient() {
            self.read_object_members_lenient()?
        } else {
            self.read_object_members()?
        };
        self.leave();
        Ok(JsonNode::Object(map))
    }

    fn read_object_members(&mut self) -> Result<Map, ParseError> {
        let mut map = Map::new();
        self.skip_whitespace();
        if self.cursor.peek() == Some('}') {
            self.cursor.advance();
            return Ok(map);
        }
        loop {
            self.skip_whitespace();
            let pos = self.cursor.pos();
            match self.cursor.current()? {
                '"' => {}
                ch => return Err(ParseError::UnexpectedChar { ch, pos }),
            }
            let key = self.parse_string()?;
            self.skip_whitespace();
            self.cursor.expect(':')?;
            let value = self.parse_value()?;
            map.insert(key, value);
            self.skip_whitespace();
            let pos = self.cursor.pos();
            match self.cursor.next_char()? {
                ',' => continue,
                '}' => return Ok(map),
                ch => return Err(ParseError::UnexpectedChar { ch, pos }),
            }
        }
    }

    /// Key/value pairs until `}`. Separators are never checked: anything
    /// between a value and the next key or closing brace is skipped, which
    /// also covers whitespace outside the lenient set (`\t`, `\r`).
    fn read_object_members_lenient(&mut self) -> Result<Map, ParseError> {
        let mut map = Map::new();
        loop {
            self.skip_whitespace();
            self.cursor.skip_while(|c| !matches!(c, '"' | '}'));
            if self.cursor.current()? == '}' {
                self.cursor.advance();
                return Ok(map);
            }
            let key = self.parse_string()?;
            let value = self.parse_value()?;
            map.insert(key, value);
        }
    }

    fn parse_array(&mut self) -> Result<JsonNode, ParseError> {
        self.enter()?;
        self.open('[')?;
        let items = if self.lenient() {
            self.read_array_items_lenient()?
        } else {
            self.read_array_items()?
        };
        self.leave();
        Ok(JsonNode::Array(items))
    }

    fn read_array_items(&mut self) -> Result<Vec<JsonNode>, ParseError> {
        let mut items = Vec::new();
        self.skip_whitespace();
        if self.cursor.peek() == Some(']') {
            self.cursor.advance();
            return Ok(items);
        }
        loop {
            items.push(self.parse_value()?);
            self.skip_whitespace();
            let pos = self.cursor.pos();
            match self.cursor.next_char()? {
                ',' => continue,
                ']' => return Ok(items),
                ch => return Err(ParseError::UnexpectedChar { ch, pos }),
            }
        }
    }

    fn read_array_items_lenient(&mut self) -> Result<Vec<JsonNode>, ParseError> {
        let mut items = Vec::new();
        loop {
            self.skip_whitespace();
            // A closer reached by skipping unrecognized characters ends the
            // array instead of reaching value dispatch.
            self.cursor.skip_while(|c| !starts_array_token(c));
            match self.cursor.current()? {
                ']' => {
                    self.cursor.advance();
                    return Ok(items);
                }
                // Separator between elements; dispatch would skip it anyway,
                // but `[1, ]` must close here rather than fail inside it.
                ',' => self.cursor.advance(),
                _ => items.push(self.parse_value()?),
            }
        }
    }

    /// Read a quoted string and decode its escapes.
    fn parse_string(&mut self) -> Result<String, ParseError> {
        self.open('"')?;
        let mut out = String::new();
        loop {
            let pos = self.cursor.pos();
            match self.cursor.next_char()? {
                '"' => return Ok(out),
                '\\' => {
                    let decoded = self.parse_escape(pos)?;
                    out.push(decoded);
                }
                c => out.push(c),
            }
        }
    }

    /// Decode the escape whose backslash sits at `pos`.
    fn parse_escape(&mut self, pos: usize) -> Result<char, ParseError> {
        let decoded = match self.cursor.next_char()? {
            'b' => '\u{0008}',
            'f' => '\u{000C}',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            '0' => '\0',
            '"' => '"',
            '\\' => '\\',
            '/' => '/',
            'u' => return self.parse_unicode_escape(pos),
            other if self.lenient() => other,
            ch => return Err(ParseError::InvalidEscape { ch, pos }),
        };
        Ok(decoded)
    }

    /// Exactly four hex digits, one code unit. Surrogate halves cannot be a
    /// `char`: lenient mode substitutes U+FFFD, strict mode rejects them.
    fn parse_unicode_escape(&mut self, pos: usize) -> Result<char, ParseError> {
        let mut code = 0u32;
        for _ in 0..4 {
            let digit = self
                .cursor
                .next_char()?
                .to_digit(16)
                .ok_or(ParseError::InvalidUnicodeEscape { pos })?;
            code = code * 16 + digit;
        }
        match char::from_u32(code) {
            Some(c) => Ok(c),
            None if self.lenient() => Ok(char::REPLACEMENT_CHARACTER),
            None => Err(ParseError::InvalidUnicodeEscape { pos }),
        }
    }
}

fn starts_array_token(c: char) -> bool {
    matches!(
        c,
        ']' | ',' | '-' | '0'..='9' | '{' | '[' | '"' | 't' | 'f' | 'n'
    )
}

/// Parse JSON text with the default (strict) options.
///
/// # Example
///
/// ```
/// use json_node::{parse, NodeType};
///
/// let root = parse(r#"{"a": [1, 2, true, null], "b": "x"}"#).unwrap();
/// assert_eq!(root.get("a").get(2).as_bool(), Some(true));
/// assert_eq!(root.get("a").get(3).node_type(), NodeType::Null);
/// assert_eq!(root.get("b").as_str(), Some("x"));
///
/// assert!(parse(r#"{"a": }"#).is_err());
/// ```
pub fn parse(input: &str) -> Result<JsonNode, ParseError> {
    parse_with_options(input, ParseOptions::default())
}

pub fn parse_with_options(input: &str, options: ParseOptions) -> Result<JsonNode, ParseError> {
    tracing::trace!(len = input.len(), mode = ?options.mode, "parsing json");
    Parser::new(input, options).parse().inspect_err(|err| {
        tracing::debug!(error = %err, position = ?err.position(), "json parse failed");
    })
}

impl FromStr for JsonNode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
