//! Parser configuration.

/// How forgiving the parser is about malformed structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Standard JSON grammar. Every deviation is a [`ParseError`](crate::ParseError).
    #[default]
    Strict,
    /// Tolerant reader: skips characters it does not recognize while looking
    /// for the next token, stores number text verbatim, does not verify the
    /// spelling of `true`/`false`/`null`, copies unknown escapes through and
    /// ignores trailing content. Running out of input is still an error.
    Lenient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    pub mode: ParseMode,
    /// Maximum number of nested objects/arrays.
    pub max_depth: usize,
}

impl ParseOptions {
    pub const DEFAULT_MAX_DEPTH: usize = 128;

    pub const fn strict() -> Self {
        Self {
            mode: ParseMode::Strict,
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }

    pub const fn lenient() -> Self {
        Self {
            mode: ParseMode::Lenient,
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }

    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn is_lenient(&self) -> bool {
        self.mode == ParseMode::Lenient
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::strict()
    }
}
