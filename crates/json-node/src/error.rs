//! Error types for parsing, numeric extraction, serialization and interop.

use thiserror::Error;

/// Failure while reading JSON text.
///
/// Positions are byte offsets into the parsed input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected end of input")]
    UnexpectedEnd,
    #[error("unexpected character {ch:?} at {pos}")]
    UnexpectedChar { ch: char, pos: usize },
    #[error("invalid escape sequence \\{ch} at {pos}")]
    InvalidEscape { ch: char, pos: usize },
    #[error("invalid \\u escape at {pos}")]
    InvalidUnicodeEscape { pos: usize },
    #[error("invalid number literal {literal:?} at {pos}")]
    InvalidNumber { literal: String, pos: usize },
    #[error("invalid literal at {pos}")]
    InvalidLiteral { pos: usize },
    #[error("nesting deeper than {max} levels at {pos}")]
    NestingTooDeep { max: usize, pos: usize },
    #[error("trailing characters at {pos}")]
    TrailingCharacters { pos: usize },
}

impl ParseError {
    /// Byte offset the error refers to, if any.
    pub fn position(&self) -> Option<usize> {
        match self {
            ParseError::UnexpectedEnd => None,
            ParseError::UnexpectedChar { pos, .. }
            | ParseError::InvalidEscape { pos, .. }
            | ParseError::InvalidUnicodeEscape { pos }
            | ParseError::InvalidNumber { pos, .. }
            | ParseError::InvalidLiteral { pos }
            | ParseError::NestingTooDeep { pos, .. }
            | ParseError::TrailingCharacters { pos } => Some(*pos),
        }
    }
}

/// Failure while extracting an integer from a number literal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NumericConversionError {
    #[error("number {0:?} is not an integer")]
    NotAnInteger(String),
    #[error("number {0:?} does not fit the target integer type")]
    OutOfRange(String),
    #[error("{0:?} is not a valid number literal")]
    InvalidLiteral(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializeError {
    #[error("absent node has no JSON representation")]
    Absent,
}

/// Failure converting a node into a `serde_json::Value`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("absent node has no JSON representation")]
    Absent,
    #[error("number literal {0:?} is not representable")]
    Number(String),
}
