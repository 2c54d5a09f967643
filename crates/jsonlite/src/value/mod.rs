//! Value representation for parsed and constructed documents

mod access;
mod display;
mod impls;

pub use access::Payload;

use std::collections::BTreeMap;
use std::fmt;

/// Ordered sequence of values.
pub type List = Vec<Value>;

/// Mapping from unique string keys to values, iterated in ascending key order.
pub type Dict = BTreeMap<String, Value>;

/// A document value: exactly one of null, bool, int, double, string, list or dict.
///
/// Values own their children outright. Cloning a `Value` deep-copies nested
/// lists and dicts, so mutation through one copy is never visible through
/// another.
///
/// Parsing never produces [`Value::Int`]; every numeric literal becomes a
/// [`Value::Double`]. `Int` only exists for values built in code.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// The `null` literal (the default state)
    #[default]
    Null,

    /// `true` or `false`
    Bool(bool),

    /// 32-bit signed integer
    Int(i32),

    /// 64-bit floating point
    Double(f64),

    /// Raw string payload, escape sequences kept verbatim
    String(String),

    /// Ordered list
    List(List),

    /// Key-sorted dictionary
    Dict(Dict),
}

/// The variant tag of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// [`Value::Null`]
    Null,
    /// [`Value::Bool`]
    Bool,
    /// [`Value::Int`]
    Int,
    /// [`Value::Double`]
    Double,
    /// [`Value::String`]
    String,
    /// [`Value::List`]
    List,
    /// [`Value::Dict`]
    Dict,
}

impl Kind {
    /// Lowercase name used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Double => "double",
            Kind::String => "string",
            Kind::List => "list",
            Kind::Dict => "dict",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
