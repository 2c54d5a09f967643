//! # jsonlite
//!
//! A small JSON-like document model: a tagged [`Value`], a hand-rolled
//! parser that reads it, and a serializer that writes it back out.
//!
//! ## Architecture
//!
//! ```text
//! text → [Parser] → Value → (typed access, Record decode) → [render] → text
//! ```
//!
//! - **Value**: one of null, bool, int, double, string, list or dict, with
//!   checked typed access and auto-vivifying dict slots
//! - **Parser**: recursive descent with one byte of lookahead, `//` line
//!   comments, escape-aware (but non-decoding) strings
//! - **Serializer**: compact canonical text, dict keys in ascending order
//! - **Record**: field-by-field bridge to user structs, derivable with
//!   `#[derive(Record)]`
//!
//! ```
//! use jsonlite::{parse_document, Value};
//!
//! let mut doc = parse_document("// settings\n{\"b\":1,\"a\":[true,null]}").unwrap();
//! assert_eq!(doc.render(), r#"{"a":[true,null],"b":1}"#);
//!
//! // Numeric literals always parse as doubles
//! assert_eq!(doc.get("b").unwrap(), Some(&Value::Double(1.0)));
//! assert!(doc.entry("b").unwrap().typed::<i32>().is_err());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

extern crate self as jsonlite;

pub mod config;
pub mod error;
pub mod parser;
pub mod record;
pub mod value;

// Re-export main types
pub use config::ParseConfig;
pub use error::{DecodeError, ParseError, Result, ValueError};
pub use parser::{parse_document, parse_document_with, Parser};
pub use record::{decode, encode, Decode, Encode, Record};
pub use value::{Dict, Kind, List, Payload, Value};

#[cfg(feature = "derive")]
pub use jsonlite_derive::Record;

/// Render `value` as canonical document text.
pub fn render(value: &Value) -> String {
    value.render()
}

/// jsonlite version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
