//! Read position shared by every sub-parser during one parse.

use crate::error::ParseError;

/// Input text plus a byte offset into it.
///
/// The offset always sits on a `char` boundary.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Current character, or `UnexpectedEnd`.
    pub fn current(&self) -> Result<char, ParseError> {
        self.peek().ok_or(ParseError::UnexpectedEnd)
    }

    pub fn advance(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    /// Consume and return the current character.
    pub fn next_char(&mut self) -> Result<char, ParseError> {
        let c = self.current()?;
        self.pos += c.len_utf8();
        Ok(c)
    }

    pub fn starts_with(&self, s: &str) -> bool {
        self.rest().starts_with(s)
    }

    /// Consume `expected` or fail with `UnexpectedChar`/`UnexpectedEnd`.
    pub fn expect(&mut self, expected: char) -> Result<(), ParseError> {
        match self.peek() {
            Some(c) if c == expected => {
                self.advance();
                Ok(())
            }
            Some(ch) => Err(ParseError::UnexpectedChar { ch, pos: self.pos }),
            None => Err(ParseError::UnexpectedEnd),
        }
    }

    /// Skip `n` characters, failing if fewer remain.
    pub fn skip_chars(&mut self, n: usize) -> Result<(), ParseError> {
        for _ in 0..n {
            self.next_char()?;
        }
        Ok(())
    }

    /// Advance past every character for which `pred` holds.
    pub fn skip_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.advance();
        }
    }

    /// Consume characters for which `pred` holds and return them as a slice.
    pub fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let start = self.pos;
        self.skip_while(pred);
        &self.input[start..self.pos]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walks_multibyte_input() {
        let mut cursor = Cursor::new("é1");
        assert_eq!(cursor.next_char(), Ok('é'));
        assert_eq!(cursor.pos(), 2);
        assert_eq!(cursor.peek(), Some('1'));
        cursor.advance();
        assert!(cursor.is_at_end());
        assert_eq!(cursor.next_char(), Err(ParseError::UnexpectedEnd));
    }

    #[test]
    fn test_expect_reports_position() {
        let mut cursor = Cursor::new("ab");
        assert_eq!(cursor.expect('a'), Ok(()));
        assert_eq!(
            cursor.expect('x'),
            Err(ParseError::UnexpectedChar { ch: 'b', pos: 1 })
        );
        cursor.advance();
        assert_eq!(cursor.expect('x'), Err(ParseError::UnexpectedEnd));
    }

    #[test]
    fn test_take_and_skip() {
        let mut cursor = Cursor::new("123abc");
        assert_eq!(cursor.take_while(|c| c.is_ascii_digit()), "123");
        assert!(cursor.starts_with("abc"));
        assert_eq!(cursor.skip_chars(5), Err(ParseError::UnexpectedEnd));
    }
}
