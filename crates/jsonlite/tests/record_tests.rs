//! Tests for mapping structs to and from documents with `#[derive(Record)]`

use jsonlite::*;
use pretty_assertions::assert_eq;

#[derive(Debug, Clone, PartialEq, Record)]
struct Base {
    pp: f64,
    qq: String,
}

#[derive(Debug, Clone, PartialEq, Record)]
struct Mytest {
    id: f64,
    name: String,
    #[jsonlite(rename = "base")]
    q: Base,
}

#[derive(Debug, PartialEq, Record)]
struct Counter {
    count: i32,
    enabled: bool,
}

#[derive(Debug, PartialEq, Record)]
struct Loose {
    tags: List,
    extra: Value,
}

fn sample() -> Mytest {
    Mytest {
        id: 32.0,
        name: "fda".to_string(),
        q: Base {
            pp: 0.0,
            qq: String::new(),
        },
    }
}

#[test]
fn test_encode_nested_record() {
    assert_eq!(
        encode(&sample()).unwrap(),
        r#"{"base":{"pp":0,"qq":""},"id":32,"name":"fda"}"#
    );
}

#[test]
fn test_decode_nested_record() {
    let decoded: Mytest = decode(r#"{"base":{"pp":0,"qq":""},"id":32,"name":"fda"} "#).unwrap();
    assert_eq!(decoded, sample());
}

#[test]
fn test_decode_ignores_unknown_keys() {
    let decoded: Base = decode(r#"{"pp":1.5,"qq":"x","unused":[1,2]}"#).unwrap();
    assert_eq!(
        decoded,
        Base {
            pp: 1.5,
            qq: "x".to_string()
        }
    );
}

#[test]
fn test_encode_into_existing_dict() {
    let mut dict = Value::dict();
    dict.insert("keep", true).unwrap();
    sample().q.encode_fields(&mut dict).unwrap();
    assert_eq!(dict.render(), r#"{"keep":true,"pp":0,"qq":""}"#);
}

#[test]
fn test_int_field_round_trips_through_values_only() {
    let counter = Counter {
        count: 3,
        enabled: true,
    };
    let mut value = counter.encode().unwrap();
    assert_eq!(value.get("count").unwrap(), Some(&Value::Int(3)));
    assert_eq!(Counter::decode(&mut value).unwrap(), counter);

    // Once rendered and re-parsed, the count is a double
    let text = encode(&counter).unwrap();
    assert_eq!(
        decode::<Counter>(&text),
        Err(DecodeError::Value(ValueError::TypeMismatch {
            expected: Kind::Int,
            got: Kind::Double,
        }))
    );
}

#[test]
fn test_missing_field_surfaces_as_null() {
    let mut value = parse_document(r#"{"pp":1}"#).unwrap();
    assert_eq!(
        Base::decode(&mut value),
        Err(ValueError::TypeMismatch {
            expected: Kind::String,
            got: Kind::Null,
        })
    );
    // The failed probe left its key behind
    assert_eq!(value.get("qq").unwrap(), Some(&Value::Null));
}

#[test]
fn test_nested_record_must_be_dict() {
    assert_eq!(
        decode::<Mytest>(r#"{"base":[],"id":1,"name":"n"}"#),
        Err(DecodeError::Value(ValueError::TypeMismatch {
            expected: Kind::Dict,
            got: Kind::List,
        }))
    );
}

#[test]
fn test_value_and_list_fields() {
    let decoded: Loose = decode(r#"{"extra":{"any":null},"tags":["a",1]}"#).unwrap();
    assert_eq!(
        decoded.tags,
        vec![Value::string("a"), Value::Double(1.0)]
    );
    assert!(decoded.extra.is_dict());
    assert_eq!(
        encode(&decoded).unwrap(),
        r#"{"extra":{"any":null},"tags":["a",1]}"#
    );
}
