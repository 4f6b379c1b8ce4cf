//! JSON numbers kept as their literal text.
//!
//! The parser stores exactly what it read, so no precision is lost between
//! parse and serialize. Integer extraction is a separate, fallible step.

use std::fmt;
use std::num::IntErrorKind;

use crate::error::NumericConversionError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JsonNumber {
    literal: String,
}

impl JsonNumber {
    /// Build a number from literal text, checking it against the number
    /// grammar `-? digit+ (. digit+)? ([eE] [+-]? digit+)?`.
    ///
    /// # Example
    ///
    /// ```
    /// use json_node::JsonNumber;
    ///
    /// assert_eq!(JsonNumber::from_literal("-1.5e3").unwrap().as_str(), "-1.5e3");
    /// assert!(JsonNumber::from_literal("1.").is_err());
    /// ```
    pub fn from_literal(literal: &str) -> Result<Self, NumericConversionError> {
        if !is_number_literal(literal) {
            return Err(NumericConversionError::InvalidLiteral(literal.to_owned()));
        }
        Ok(Self::from_literal_unchecked(literal.to_owned()))
    }

    /// Wrap text without checking it. Used by the lenient parser, which keeps
    /// whatever characters it accumulated.
    pub(crate) fn from_literal_unchecked(literal: String) -> Self {
        Self { literal }
    }

    /// Canonical form of a float. Returns `None` for NaN and infinities,
    /// which the number grammar cannot express.
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        // f64 Display never uses exponent notation, so the text always
        // matches the grammar.
        Some(Self::from_literal_unchecked(value.to_string()))
    }

    pub fn from_f32(value: f32) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        Some(Self::from_literal_unchecked(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.literal
    }

    pub fn into_string(self) -> String {
        self.literal
    }

    /// True when the literal has neither a fraction nor an exponent.
    pub fn is_integer(&self) -> bool {
        !self.literal.contains(['.', 'e', 'E'])
    }

    pub fn as_i64(&self) -> Result<i64, NumericConversionError> {
        self.check_integer()?;
        self.literal.parse::<i64>().map_err(|e| self.int_error(e.kind()))
    }

    pub fn as_u64(&self) -> Result<u64, NumericConversionError> {
        self.check_integer()?;
        if self.literal.starts_with('-') && self.literal[1..].bytes().any(|b| b != b'0') {
            return Err(NumericConversionError::OutOfRange(self.literal.clone()));
        }
        let digits = self.literal.trim_start_matches('-');
        digits.parse::<u64>().map_err(|e| self.int_error(e.kind()))
    }

    fn check_integer(&self) -> Result<(), NumericConversionError> {
        if !is_number_literal(&self.literal) {
            return Err(NumericConversionError::InvalidLiteral(self.literal.clone()));
        }
        if !self.is_integer() {
            return Err(NumericConversionError::NotAnInteger(self.literal.clone()));
        }
        Ok(())
    }

    fn int_error(&self, kind: &IntErrorKind) -> NumericConversionError {
        match kind {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                NumericConversionError::OutOfRange(self.literal.clone())
            }
            _ => NumericConversionError::InvalidLiteral(self.literal.clone()),
        }
    }
}

impl fmt::Display for JsonNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.literal)
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for JsonNumber {
                fn from(value: $ty) -> Self {
                    Self::from_literal_unchecked(value.to_string())
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Numeric values that have a canonical literal form.
///
/// Floats yield `None` when they are not finite.
pub trait IntoJsonNumber {
    fn into_json_number(self) -> Option<JsonNumber>;
}

impl IntoJsonNumber for JsonNumber {
    fn into_json_number(self) -> Option<JsonNumber> {
        Some(self)
    }
}

impl IntoJsonNumber for f64 {
    fn into_json_number(self) -> Option<JsonNumber> {
        JsonNumber::from_f64(self)
    }
}

impl IntoJsonNumber for f32 {
    fn into_json_number(self) -> Option<JsonNumber> {
        JsonNumber::from_f32(self)
    }
}

macro_rules! impl_into_json_number {
    ($($ty:ty),*) => {
        $(
            impl IntoJsonNumber for $ty {
                fn into_json_number(self) -> Option<JsonNumber> {
                    Some(JsonNumber::from(self))
                }
            }
        )*
    };
}

impl_into_json_number!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Check `text` against `-? digit+ (. digit+)? ([eE] [+-]? digit+)?`.
pub fn is_number_literal(text: &str) -> bool {
    let bytes = text.as_bytes();
    let len = bytes.len();
    let mut x = 0;

    if x < len && bytes[x] == b'-' {
        x += 1;
    }
    let int_start = x;
    while x < len && bytes[x].is_ascii_digit() {
        x += 1;
    }
    if x == int_start {
        return false;
    }
    if x < len && bytes[x] == b'.' {
        x += 1;
        let frac_start = x;
        while x < len && bytes[x].is_ascii_digit() {
            x += 1;
        }
        if x == frac_start {
            return false;
        }
    }
    if x < len && (bytes[x] == b'e' || bytes[x] == b'E') {
        x += 1;
        if x < len && (bytes[x] == b'+' || bytes[x] == b'-') {
            x += 1;
        }
        let exp_start = x;
        while x < len && bytes[x].is_ascii_digit() {
            x += 1;
        }
        if x == exp_start {
            return false;
        }
    }
    x == len
}
