//! Error types for value access, parsing, and decoding

use thiserror::Error;

use crate::value::Kind;

/// Error raised by typed access and container operations on a [`Value`].
///
/// [`Value`]: crate::Value
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// Typed access asked for a payload the value does not hold
    #[error("Type error: expected {expected}, got {got}")]
    TypeMismatch {
        /// Kind the caller asked for
        expected: Kind,
        /// Kind the value actually holds
        got: Kind,
    },

    /// List operation on a value that is not a list
    #[error("Not a list: cannot use list operations on {got}")]
    NotAList {
        /// Kind the value actually holds
        got: Kind,
    },

    /// Dict operation on a value that is not a dict
    #[error("Not a dict: cannot use dict operations on {got}")]
    NotADict {
        /// Kind the value actually holds
        got: Kind,
    },
}

/// Error raised while parsing a document.
///
/// Every variant records the byte offset of the scan cursor at the point the
/// failure was detected. Parsing is all-or-nothing: no partial tree is ever
/// returned alongside one of these.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Lookahead character cannot start a value
    #[error("Unexpected token '{found}' at offset {offset}")]
    UnexpectedToken {
        /// Character found at the cursor
        found: char,
        /// Byte offset of the cursor
        offset: usize,
    },

    /// Input ended where a token was required
    #[error("Unexpected end of input at offset {offset}")]
    UnexpectedEnd {
        /// Byte offset of the cursor
        offset: usize,
    },

    /// `n`, `t` or `f` did not begin `null`, `true` or `false`
    #[error("Invalid literal at offset {offset}: expected {expected}")]
    InvalidLiteral {
        /// Literal(s) that would have been accepted
        expected: &'static str,
        /// Byte offset of the cursor
        offset: usize,
    },

    /// Missing integer digits or a `.` with no fraction digits
    #[error("Invalid number at offset {offset}")]
    InvalidNumber {
        /// Byte offset of the cursor
        offset: usize,
    },

    /// No unescaped closing quote before the end of input
    #[error("Unterminated string starting at offset {offset}")]
    UnterminatedString {
        /// Byte offset of the opening quote
        offset: usize,
    },

    /// A `//` comment with no terminating newline
    #[error("Unterminated comment at offset {offset}")]
    UnterminatedComment {
        /// Byte offset of the comment start
        offset: usize,
    },

    /// List element not followed by `,` or `]`
    #[error("Expected ',' or ']' in list at offset {offset}, found '{found}'")]
    ExpectedListSeparator {
        /// Character found at the cursor
        found: char,
        /// Byte offset of the cursor
        offset: usize,
    },

    /// Dict entry not followed by `,` or `}`
    #[error("Expected ',' or '}}' in dict at offset {offset}, found '{found}'")]
    ExpectedDictSeparator {
        /// Character found at the cursor
        found: char,
        /// Byte offset of the cursor
        offset: usize,
    },

    /// Dict key not followed by `:`
    #[error("Expected ':' after dict key at offset {offset}, found '{found}'")]
    ExpectedColon {
        /// Character found at the cursor
        found: char,
        /// Byte offset of the cursor
        offset: usize,
    },

    /// A dict key parsed to something other than a string
    #[error("Invalid dict key at offset {offset}: {source}")]
    TypeMismatch {
        /// Byte offset of the key
        offset: usize,
        /// The underlying typed-access failure
        #[source]
        source: ValueError,
    },

    /// Text remained after the top-level value and the configuration forbids it
    #[error("Trailing characters after document at offset {offset}")]
    TrailingCharacters {
        /// Byte offset of the first trailing character
        offset: usize,
    },
}

impl ParseError {
    /// Byte offset at which the failure was detected.
    pub fn offset(&self) -> usize {
        match self {
            ParseError::UnexpectedToken { offset, .. }
            | ParseError::UnexpectedEnd { offset }
            | ParseError::InvalidLiteral { offset, .. }
            | ParseError::InvalidNumber { offset }
            | ParseError::UnterminatedString { offset }
            | ParseError::UnterminatedComment { offset }
            | ParseError::ExpectedListSeparator { offset, .. }
            | ParseError::ExpectedDictSeparator { offset, .. }
            | ParseError::ExpectedColon { offset, .. }
            | ParseError::TypeMismatch { offset, .. }
            | ParseError::TrailingCharacters { offset } => *offset,
        }
    }
}

/// Error raised by [`decode`](crate::decode).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecodeError {
    /// The text was not a well-formed document
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The document did not have the shape the target type expects
    #[error(transparent)]
    Value(#[from] ValueError),
}

/// Result type alias for value operations
pub type Result<T> = std::result::Result<T, ValueError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_mismatch_message() {
        let err = ValueError::TypeMismatch {
            expected: Kind::Int,
            got: Kind::Double,
        };
        assert_eq!(err.to_string(), "Type error: expected int, got double");
    }

    #[test]
    fn test_dict_separator_message_escapes_brace() {
        let err = ParseError::ExpectedDictSeparator {
            found: 'x',
            offset: 7,
        };
        assert_eq!(
            err.to_string(),
            "Expected ',' or '}' in dict at offset 7, found 'x'"
        );
    }

    #[test]
    fn test_offset_covers_every_variant() {
        let source = ValueError::TypeMismatch {
            expected: Kind::String,
            got: Kind::Double,
        };
        let errors = [
            ParseError::UnexpectedToken { found: '?', offset: 1 },
            ParseError::UnexpectedEnd { offset: 2 },
            ParseError::InvalidLiteral {
                expected: "null",
                offset: 3,
            },
            ParseError::InvalidNumber { offset: 4 },
            ParseError::UnterminatedString { offset: 5 },
            ParseError::UnterminatedComment { offset: 6 },
            ParseError::ExpectedListSeparator { found: ' ', offset: 7 },
            ParseError::ExpectedDictSeparator { found: ' ', offset: 8 },
            ParseError::ExpectedColon { found: ' ', offset: 9 },
            ParseError::TypeMismatch { offset: 10, source },
            ParseError::TrailingCharacters { offset: 11 },
        ];
        let offsets: Vec<usize> = errors.iter().map(ParseError::offset).collect();
        assert_eq!(offsets, (1..=11).collect::<Vec<_>>());
    }

    #[test]
    fn test_decode_error_from_parse() {
        let err: DecodeError = ParseError::InvalidNumber { offset: 0 }.into();
        assert!(matches!(err, DecodeError::Parse(_)));
        assert_eq!(err.to_string(), "Invalid number at offset 0");
    }
}
