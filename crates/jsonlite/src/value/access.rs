//! Typed payload access and container operations

use super::{Dict, Kind, List, Value};
use crate::error::{Result, ValueError};

/// A payload type that can be borrowed out of a [`Value`] by tag.
///
/// Implemented for `bool`, `i32`, `f64`, `String`, [`List`] and [`Dict`].
/// There is no coercion between kinds: an `i32` is only ever read from
/// [`Value::Int`], never from a [`Value::Double`].
pub trait Payload: Sized {
    /// Kind whose payload is `Self`
    const KIND: Kind;

    /// Borrow the payload if the tag matches.
    fn from_ref(value: &Value) -> Option<&Self>;

    /// Mutably borrow the payload if the tag matches.
    fn from_mut(value: &mut Value) -> Option<&mut Self>;
}

macro_rules! payload {
    ($ty:ty, $variant:ident) => {
        impl Payload for $ty {
            const KIND: Kind = Kind::$variant;

            fn from_ref(value: &Value) -> Option<&Self> {
                match value {
                    Value::$variant(v) => Some(v),
                    _ => None,
                }
            }

            fn from_mut(value: &mut Value) -> Option<&mut Self> {
                match value {
                    Value::$variant(v) => Some(v),
                    _ => None,
                }
            }
        }
    };
}

payload!(bool, Bool);
payload!(i32, Int);
payload!(f64, Double);
payload!(String, String);
payload!(List, List);
payload!(Dict, Dict);

impl Value {
    /// Borrow the payload as `T`, failing with [`ValueError::TypeMismatch`]
    /// when the active variant is not `T`'s.
    pub fn typed<T: Payload>(&self) -> Result<&T> {
        let got = self.kind();
        T::from_ref(self).ok_or(ValueError::TypeMismatch {
            expected: T::KIND,
            got,
        })
    }

    /// Mutably borrow the payload as `T`, failing with
    /// [`ValueError::TypeMismatch`] when the active variant is not `T`'s.
    pub fn typed_mut<T: Payload>(&mut self) -> Result<&mut T> {
        let got = self.kind();
        T::from_mut(self).ok_or(ValueError::TypeMismatch {
            expected: T::KIND,
            got,
        })
    }

    fn list_mut(&mut self) -> Result<&mut List> {
        match self {
            Value::List(items) => Ok(items),
            other => Err(ValueError::NotAList { got: other.kind() }),
        }
    }

    fn dict_mut(&mut self) -> Result<&mut Dict> {
        match self {
            Value::Dict(map) => Ok(map),
            other => Err(ValueError::NotADict { got: other.kind() }),
        }
    }

    /// Append to the end of a list.
    pub fn push(&mut self, item: impl Into<Value>) -> Result<()> {
        self.list_mut()?.push(item.into());
        Ok(())
    }

    /// Remove and return the last element of a list, `None` if it is empty.
    pub fn pop(&mut self) -> Result<Option<Value>> {
        Ok(self.list_mut()?.pop())
    }

    /// Slot for `key` in a dict, inserting [`Value::Null`] when it is absent.
    ///
    /// This is the read-write accessor: probing a missing key with it leaves
    /// that key behind holding null. Use [`Value::get`] for a lookup that does
    /// not mutate.
    pub fn entry(&mut self, key: impl Into<String>) -> Result<&mut Value> {
        Ok(self.dict_mut()?.entry(key.into()).or_default())
    }

    /// Look up `key` in a dict without inserting anything.
    pub fn get(&self, key: &str) -> Result<Option<&Value>> {
        match self {
            Value::Dict(map) => Ok(map.get(key)),
            other => Err(ValueError::NotADict { got: other.kind() }),
        }
    }

    /// Assign `value` under `key`, returning the value it replaced.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<Option<Value>> {
        Ok(self.dict_mut()?.insert(key.into(), value.into()))
    }

    /// Number of elements in a list or entries in a dict; `None` for scalars.
    pub fn len(&self) -> Option<usize> {
        match self {
            Value::List(items) => Some(items.len()),
            Value::Dict(map) => Some(map.len()),
            _ => None,
        }
    }

    /// Whether a list or dict holds no elements; `None` for scalars.
    pub fn is_empty(&self) -> Option<bool> {
        self.len().map(|len| len == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_matches_tag() {
        let v = Value::Double(1.5);
        assert_eq!(v.typed::<f64>(), Ok(&1.5));
        assert_eq!(
            v.typed::<i32>(),
            Err(ValueError::TypeMismatch {
                expected: Kind::Int,
                got: Kind::Double,
            })
        );
    }

    #[test]
    fn test_typed_mut_writes_through() {
        let mut v = Value::from("abc");
        v.typed_mut::<String>().unwrap().push('d');
        assert_eq!(v, Value::from("abcd"));
    }

    #[test]
    fn test_push_pop() {
        let mut v = Value::list();
        v.push(1).unwrap();
        v.push(true).unwrap();
        assert_eq!(v.len(), Some(2));
        assert_eq!(v.pop(), Ok(Some(Value::Bool(true))));
        assert_eq!(v.pop(), Ok(Some(Value::Int(1))));
        assert_eq!(v.pop(), Ok(None));
    }

    #[test]
    fn test_push_on_scalar_fails() {
        let mut v = Value::Bool(false);
        assert_eq!(
            v.push(Value::Null),
            Err(ValueError::NotAList { got: Kind::Bool })
        );
        assert_eq!(v.pop(), Err(ValueError::NotAList { got: Kind::Bool }));
    }

    #[test]
    fn test_entry_auto_vivifies() {
        let mut v = Value::dict();
        assert_eq!(v.entry("missing").unwrap(), &Value::Null);
        assert_eq!(v.len(), Some(1));
        assert_eq!(v.get("missing"), Ok(Some(&Value::Null)));
    }

    #[test]
    fn test_get_does_not_insert() {
        let v = Value::dict();
        assert_eq!(v.get("missing"), Ok(None));
        assert_eq!(v.len(), Some(0));
    }

    #[test]
    fn test_insert_overwrites() {
        let mut v = Value::dict();
        assert_eq!(v.insert("k", 1), Ok(None));
        assert_eq!(v.insert("k", 2), Ok(Some(Value::Int(1))));
        assert_eq!(v.get("k"), Ok(Some(&Value::Int(2))));
    }

    #[test]
    fn test_len_of_scalar() {
        assert_eq!(Value::Null.len(), None);
        assert_eq!(Value::from("x").is_empty(), None);
        assert_eq!(Value::list().is_empty(), Some(true));
    }
}
