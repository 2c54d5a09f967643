//! Recursive-descent parser from document text to [`Value`]
//!
//! Grammar, with whitespace and `//` line comments allowed between tokens:
//!
//! ```text
//! value   := null | bool | number | string | list | dict
//! null    := "null"
//! bool    := "true" | "false"
//! number  := ["-"] digit+ ["." digit+]
//! string  := '"' ( any-char-except-unescaped-quote )* '"'
//! list    := "[" (value ("," value)*)? "]"
//! dict    := "{" (string ":" value ("," string ":" value)*)? "}"
//! ```
//!
//! Numbers always parse to [`Value::Double`]. Strings are captured verbatim:
//! a quote preceded by an odd run of backslashes does not close the string,
//! but no escape sequence is decoded.
//!
//! Nesting is handled by plain recursion with no depth limit, so deeply
//! nested input can exhaust the stack.

mod scanner;

use scanner::Scanner;

use crate::config::ParseConfig;
use crate::error::{ParseError, ValueError};
use crate::value::{Dict, Kind, List, Value};

/// Single-use parser over one document.
///
/// A parser is consumed by [`Parser::parse_document`]; every document gets
/// its own instance and no state is shared between them.
pub struct Parser<'a> {
    scanner: Scanner<'a>,
    allow_trailing: bool,
}

impl<'a> Parser<'a> {
    /// Create a parser for `text`. Trailing whitespace is dropped up front.
    pub fn new(text: &'a str, config: &ParseConfig) -> Self {
        Self {
            scanner: Scanner::new(text, config.allow_comments, config.trace),
            allow_trailing: config.allow_trailing,
        }
    }

    /// Parse the whole document into a value.
    pub fn parse_document(mut self) -> Result<Value, ParseError> {
        let value = self.parse_value()?;
        if !self.allow_trailing && !self.scanner.finish()? {
            return Err(ParseError::TrailingCharacters {
                offset: self.scanner.pos(),
            });
        }
        Ok(value)
    }

    fn parse_value(&mut self) -> Result<Value, ParseError> {
        match self.scanner.next_token()? {
            b'n' => self.parse_null(),
            b't' | b'f' => self.parse_bool().map(Value::Bool),
            b'-' | b'0'..=b'9' => self.parse_number().map(Value::Double),
            b'"' => self.parse_string().map(Value::String),
            b'[' => self.parse_list().map(Value::List),
            b'{' => self.parse_dict().map(Value::Dict),
            _ => Err(self.unexpected_token()),
        }
    }

    fn unexpected_token(&self) -> ParseError {
        let offset = self.scanner.pos();
        ParseError::UnexpectedToken {
            found: self.scanner.char_at(offset),
            offset,
        }
    }

    fn parse_null(&mut self) -> Result<Value, ParseError> {
        if self.scanner.starts_with("null") {
            self.scanner.advance(4);
            return Ok(Value::Null);
        }
        Err(ParseError::InvalidLiteral {
            expected: "null",
            offset: self.scanner.pos(),
        })
    }

    fn parse_bool(&mut self) -> Result<bool, ParseError> {
        if self.scanner.starts_with("true") {
            self.scanner.advance(4);
            return Ok(true);
        }
        if self.scanner.starts_with("false") {
            self.scanner.advance(5);
            return Ok(false);
        }
        Err(ParseError::InvalidLiteral {
            expected: "true or false",
            offset: self.scanner.pos(),
        })
    }

    fn parse_number(&mut self) -> Result<f64, ParseError> {
        let start = self.scanner.pos();
        if self.scanner.peek() == Some(b'-') {
            self.scanner.bump();
        }

        if self.scanner.eat_digits() == 0 {
            return Err(ParseError::InvalidNumber {
                offset: self.scanner.pos(),
            });
        }

        if self.scanner.peek() == Some(b'.') {
            self.scanner.bump();
            if self.scanner.eat_digits() == 0 {
                return Err(ParseError::InvalidNumber {
                    offset: self.scanner.pos(),
                });
            }
        }

        self.scanner
            .slice(start, self.scanner.pos())
            .parse::<f64>()
            .map_err(|_| ParseError::InvalidNumber { offset: start })
    }

    fn parse_string(&mut self) -> Result<String, ParseError> {
        let open = self.scanner.pos();
        let content = open + 1;
        let mut search = content;
        loop {
            let close = self
                .scanner
                .find(search, b'"')
                .ok_or(ParseError::UnterminatedString { offset: open })?;
            // An even run of backslashes pairs off; an odd one escapes the quote
            if self.scanner.backslashes_before(close, content) % 2 == 0 {
                let raw = self.scanner.slice(content, close).to_owned();
                self.scanner.advance(close + 1 - open);
                return Ok(raw);
            }
            search = close + 1;
        }
    }

    fn parse_list(&mut self) -> Result<List, ParseError> {
        let mut items = List::new();
        self.scanner.bump();
        if self.scanner.next_token()? == b']' {
            self.scanner.bump();
            return Ok(items);
        }

        loop {
            items.push(self.parse_value()?);
            match self.scanner.next_token()? {
                b']' => {
                    self.scanner.bump();
                    return Ok(items);
                }
                b',' => self.scanner.bump(),
                _ => {
                    let offset = self.scanner.pos();
                    return Err(ParseError::ExpectedListSeparator {
                        found: self.scanner.char_at(offset),
                        offset,
                    });
                }
            }
        }
    }

    fn parse_dict(&mut self) -> Result<Dict, ParseError> {
        let mut map = Dict::new();
        self.scanner.bump();
        if self.scanner.next_token()? == b'}' {
            self.scanner.bump();
            return Ok(map);
        }

        loop {
            self.scanner.next_token()?;
            let key_offset = self.scanner.pos();
            let key = match self.parse_value()? {
                Value::String(key) => key,
                other => {
                    return Err(ParseError::TypeMismatch {
                        offset: key_offset,
                        source: ValueError::TypeMismatch {
                            expected: Kind::String,
                            got: other.kind(),
                        },
                    })
                }
            };

            if self.scanner.next_token()? != b':' {
                let offset = self.scanner.pos();
                return Err(ParseError::ExpectedColon {
                    found: self.scanner.char_at(offset),
                    offset,
                });
            }
            self.scanner.bump();

            // Repeated keys keep the last value
            let value = self.parse_value()?;
            map.insert(key, value);

            match self.scanner.next_token()? {
                b'}' => {
                    self.scanner.bump();
                    return Ok(map);
                }
                b',' => self.scanner.bump(),
                _ => {
                    let offset = self.scanner.pos();
                    return Err(ParseError::ExpectedDictSeparator {
                        found: self.scanner.char_at(offset),
                        offset,
                    });
                }
            }
        }
    }
}

/// Parse `text` with the default configuration.
pub fn parse_document(text: &str) -> Result<Value, ParseError> {
    parse_document_with(text, &ParseConfig::default())
}

/// Parse `text` with an explicit configuration.
pub fn parse_document_with(text: &str, config: &ParseConfig) -> Result<Value, ParseError> {
    let result = Parser::new(text, config).parse_document();
    match &result {
        Ok(value) => log::debug!("parsed {} from {} bytes", value.kind(), text.len()),
        Err(err) => log::debug!("parse failed at offset {}: {}", err.offset(), err),
    }
    result
}
