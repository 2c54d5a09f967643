//! Mapping between Rust types and values
//!
//! Scalars convert directly through [`Encode`] and [`Decode`]. Structured
//! types implement [`Record`], writing each field into a dict under a key of
//! their choosing and reading it back with typed access. Every `Record` is
//! also `Encode` and `Decode`, so records nest inside records.
//!
//! ```
//! use jsonlite::{Decode, Encode, Record, Result, Value};
//!
//! #[derive(Debug, PartialEq)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! impl Record for Point {
//!     fn encode_fields(&self, dict: &mut Value) -> Result<()> {
//!         *dict.entry("x")? = self.x.encode()?;
//!         *dict.entry("y")? = self.y.encode()?;
//!         Ok(())
//!     }
//!
//!     fn decode_fields(dict: &mut Value) -> Result<Self> {
//!         Ok(Point {
//!             x: i32::decode(dict.entry("x")?)?,
//!             y: i32::decode(dict.entry("y")?)?,
//!         })
//!     }
//! }
//!
//! let value = Point { x: 1, y: 2 }.encode().unwrap();
//! assert_eq!(value.render(), r#"{"x":1,"y":2}"#);
//! ```

use crate::error::{DecodeError, Result, ValueError};
use crate::parser::parse_document;
use crate::value::{Dict, Kind, List, Value};

/// A struct that maps field by field onto a dict value.
pub trait Record: Sized {
    /// Write every field into `dict`, which holds a [`Value::Dict`].
    fn encode_fields(&self, dict: &mut Value) -> Result<()>;

    /// Build `Self` from the entries of `dict`, which holds a [`Value::Dict`].
    ///
    /// Reading through [`Value::entry`] inserts null for missing keys, so an
    /// absent field surfaces as a [`ValueError::TypeMismatch`] against null.
    fn decode_fields(dict: &mut Value) -> Result<Self>;
}

/// Conversion into a [`Value`].
pub trait Encode {
    /// Build the value representing `self`.
    fn encode(&self) -> Result<Value>;
}

/// Conversion out of a [`Value`].
pub trait Decode: Sized {
    /// Read `Self` out of `value`.
    fn decode(value: &mut Value) -> Result<Self>;
}

impl Encode for bool {
    fn encode(&self) -> Result<Value> {
        Ok(Value::Bool(*self))
    }
}

impl Encode for i32 {
    fn encode(&self) -> Result<Value> {
        Ok(Value::Int(*self))
    }
}

impl Encode for f64 {
    fn encode(&self) -> Result<Value> {
        Ok(Value::Double(*self))
    }
}

impl Encode for String {
    fn encode(&self) -> Result<Value> {
        Ok(Value::String(self.clone()))
    }
}

impl Encode for List {
    fn encode(&self) -> Result<Value> {
        Ok(Value::List(self.clone()))
    }
}

impl Encode for Dict {
    fn encode(&self) -> Result<Value> {
        Ok(Value::Dict(self.clone()))
    }
}

impl Encode for Value {
    fn encode(&self) -> Result<Value> {
        Ok(self.clone())
    }
}

impl<T: Record> Encode for T {
    fn encode(&self) -> Result<Value> {
        let mut dict = Value::dict();
        self.encode_fields(&mut dict)?;
        Ok(dict)
    }
}

impl Decode for bool {
    fn decode(value: &mut Value) -> Result<Self> {
        value.typed::<bool>().copied()
    }
}

impl Decode for i32 {
    fn decode(value: &mut Value) -> Result<Self> {
        value.typed::<i32>().copied()
    }
}

impl Decode for f64 {
    fn decode(value: &mut Value) -> Result<Self> {
        value.typed::<f64>().copied()
    }
}

impl Decode for String {
    fn decode(value: &mut Value) -> Result<Self> {
        value.typed::<String>().cloned()
    }
}

impl Decode for List {
    fn decode(value: &mut Value) -> Result<Self> {
        value.typed::<List>().cloned()
    }
}

impl Decode for Dict {
    fn decode(value: &mut Value) -> Result<Self> {
        value.typed::<Dict>().cloned()
    }
}

impl Decode for Value {
    fn decode(value: &mut Value) -> Result<Self> {
        Ok(value.clone())
    }
}

impl<T: Record> Decode for T {
    fn decode(value: &mut Value) -> Result<Self> {
        if !value.is_dict() {
            return Err(ValueError::TypeMismatch {
                expected: Kind::Dict,
                got: value.kind(),
            });
        }
        T::decode_fields(value)
    }
}

/// Render `value` as document text.
pub fn encode<T: Encode>(value: &T) -> Result<String> {
    Ok(value.encode()?.render())
}

/// Parse `text` and read a `T` out of it.
///
/// Parsed numbers are always doubles, so decoding an `i32` from text fails;
/// `i32` fields only round-trip through values built in code.
pub fn decode<T: Decode>(text: &str) -> std::result::Result<T, DecodeError> {
    let mut value = parse_document(text)?;
    Ok(T::decode(&mut value)?)
}
