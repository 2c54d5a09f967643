//! Value trait implementations: constructors, predicates, setters, From traits

use super::*;

// ═══════════════════════════════════════════════════════════════════
// Convenience Constructors
// ═══════════════════════════════════════════════════════════════════

impl Value {
    /// Create an empty list value
    pub fn list() -> Self {
        Value::List(List::new())
    }

    /// Create an empty dict value
    pub fn dict() -> Self {
        Value::Dict(Dict::new())
    }

    /// Create a string value
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    /// The variant tag of this value
    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) => Kind::Int,
            Value::Double(_) => Kind::Double,
            Value::String(_) => Kind::String,
            Value::List(_) => Kind::List,
            Value::Dict(_) => Kind::Dict,
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Setters
    // ═══════════════════════════════════════════════════════════════════
    /// Replace tag and payload in one step
    pub fn set(&mut self, value: impl Into<Value>) {
        *self = value.into();
    }

    /// Reset to null
    pub fn set_null(&mut self) {
        *self = Value::Null;
    }

    // ═══════════════════════════════════════════════════════════════════
    // Type Predicates
    // ═══════════════════════════════════════════════════════════════════
    /// Check if value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Check if value is boolean
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Check if value is an int
    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    /// Check if value is a double
    pub fn is_double(&self) -> bool {
        matches!(self, Value::Double(_))
    }

    /// Check if value is a string
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Check if value is a list
    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    /// Check if value is a dict
    pub fn is_dict(&self) -> bool {
        matches!(self, Value::Dict(_))
    }
}

// ═══════════════════════════════════════════════════════════════════
// From Trait Implementations
// ═══════════════════════════════════════════════════════════════════

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Double(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<List> for Value {
    fn from(items: List) -> Self {
        Value::List(items)
    }
}

impl From<Dict> for Value {
    fn from(map: Dict) -> Self {
        Value::Dict(map)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::List(iter.into_iter().collect())
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Value::Dict(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_null() {
        assert_eq!(Value::default(), Value::Null);
        assert!(Value::default().is_null());
    }

    #[test]
    fn test_kind_of_every_variant() {
        assert_eq!(Value::Null.kind(), Kind::Null);
        assert_eq!(Value::Bool(true).kind(), Kind::Bool);
        assert_eq!(Value::Int(1).kind(), Kind::Int);
        assert_eq!(Value::Double(1.0).kind(), Kind::Double);
        assert_eq!(Value::string("s").kind(), Kind::String);
        assert_eq!(Value::list().kind(), Kind::List);
        assert_eq!(Value::dict().kind(), Kind::Dict);
    }

    #[test]
    fn test_set_replaces_tag_and_payload() {
        let mut v = Value::from(7);
        v.set("seven");
        assert!(v.is_string());
        v.set(Value::list());
        assert!(v.is_list());
        v.set_null();
        assert!(v.is_null());
    }

    #[test]
    fn test_predicates() {
        assert!(Value::Bool(false).is_bool());
        assert!(Value::Int(0).is_int());
        assert!(!Value::Int(0).is_double());
        assert!(Value::Double(0.0).is_double());
        assert!(Value::dict().is_dict());
        assert!(!Value::dict().is_list());
    }

    #[test]
    fn test_from_scalars() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(42), Value::Int(42));
        assert_eq!(Value::from(4.2), Value::Double(4.2));
        assert_eq!(Value::from("hi"), Value::String("hi".to_string()));
    }

    #[test]
    fn test_collect_list_and_dict() {
        let list: Value = vec![Value::Int(1), Value::Null].into_iter().collect();
        assert_eq!(list.len(), Some(2));

        let dict: Value = [("b", Value::Int(2)), ("a", Value::Int(1))]
            .into_iter()
            .collect();
        let keys: Vec<&String> = dict.typed::<Dict>().unwrap().keys().collect();
        assert_eq!(keys, ["a", "b"]);
    }

    #[test]
    fn test_clone_is_deep() {
        let mut original = Value::dict();
        original.insert("items", Value::list()).unwrap();
        let copy = original.clone();
        original.entry("items").unwrap().push(1).unwrap();
        assert_eq!(copy.get("items").unwrap().unwrap().len(), Some(0));
        assert_eq!(original.get("items").unwrap().unwrap().len(), Some(1));
    }
}
