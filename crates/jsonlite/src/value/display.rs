//! Canonical text rendering for Value
//!
//! Output is compact (no whitespace anywhere), dict entries come out in
//! ascending key order, and string payloads are written back between quotes
//! exactly as stored. Since the parser keeps escape sequences verbatim,
//! parsing and re-rendering a string reproduces its original bytes.

use std::fmt::{self, Write};

use super::*;

impl Value {
    /// Render this value as canonical document text.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            // The grammar has no spelling for NaN or infinities
            Value::Double(n) if !n.is_finite() => f.write_str("null"),
            Value::Double(n) => write!(f, "{}", n),
            Value::String(s) => {
                f.write_char('"')?;
                f.write_str(s)?;
                f.write_char('"')
            }
            Value::List(items) => {
                f.write_char('[')?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_char(',')?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_char(']')
            }
            Value::Dict(map) => {
                f.write_char('{')?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_char(',')?;
                    }
                    write!(f, "\"{}\":{}", k, v)?;
                }
                f.write_char('}')
            }
        }
    }
}
