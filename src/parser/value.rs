//! Value parsing

use crate::error::{Error, Result};
use crate::options::{BLOB_TAG, CodecOptions, NDARRAY_TAG};
use crate::types::{Key, Map, Value};
use serde_json::Value as Json;

use super::array::parse_ndarray;
use super::blob::parse_blob;

/// Convert parsed JSON into a value, rebuilding tagged objects
pub fn parse_value(json: Json, options: &CodecOptions) -> Result<Value> {
    let value = match json {
        Json::Null => Value::Null,
        Json::Bool(b) => Value::Bool(b),
        Json::Number(n) => parse_number(&n)?,
        Json::String(s) => Value::String(s),
        Json::Array(items) => Value::List(
            items
                .into_iter()
                .map(|item| parse_value(item, options))
                .collect::<Result<_>>()?,
        ),
        Json::Object(obj) if obj.contains_key(NDARRAY_TAG) => Value::Array(parse_ndarray(&obj)?),
        Json::Object(obj) if obj.contains_key(BLOB_TAG) => parse_blob(&obj, options)?,
        Json::Object(obj) => Value::Map(parse_map(obj, options)?),
    };
    Ok(value)
}

/// Integers that fit `i64` stay integers, other numbers become floats
fn parse_number(n: &serde_json::Number) -> Result<Value> {
    if let Some(i) = n.as_i64() {
        return Ok(Value::Int(i));
    }
    match n.as_f64() {
        Some(f) if f.is_finite() => Ok(Value::Float(f)),
        _ => Err(Error::UnsupportedNumber {
            number: n.to_string(),
        }),
    }
}

/// Convert a JSON object, turning digit-only keys into integer keys
pub fn parse_map(obj: serde_json::Map<String, Json>, options: &CodecOptions) -> Result<Map> {
    let mut out = Map::new();
    for (key, val) in obj {
        let parsed = Key::parse(&key);
        if out.contains_key(&parsed) {
            return Err(Error::DuplicateKey { key });
        }
        out.insert(parsed, parse_value(val, options)?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numbers() {
        let opts = CodecOptions::default();
        assert_eq!(parse_value(json!(-4), &opts).unwrap(), Value::Int(-4));
        assert_eq!(parse_value(json!(2.5), &opts).unwrap(), Value::Float(2.5));
        assert_eq!(
            parse_value(json!(u64::MAX), &opts).unwrap(),
            Value::Float(u64::MAX as f64)
        );
    }

    #[test]
    fn number_conversion() {
        let n = serde_json::Number::from(i64::MIN);
        assert_eq!(parse_number(&n).unwrap(), Value::Int(i64::MIN));

        let n = serde_json::Number::from_f64(-1.5e300).unwrap();
        assert_eq!(parse_number(&n).unwrap(), Value::Float(-1.5e300));

        let err = Error::UnsupportedNumber {
            number: "1e999".into(),
        };
        assert_eq!(err.to_string(), "unsupported number 1e999");
    }

    #[test]
    fn digit_keys_become_integers_at_every_level() {
        let json = json!({"12": {"3": "a", "x": 1}, "name": [ {"0": null} ]});
        let map = match parse_value(json, &CodecOptions::default()).unwrap() {
            Value::Map(map) => map,
            other => panic!("expected map, got {:?}", other),
        };

        let inner = map[&Key::Int(12)].as_map().unwrap();
        assert!(inner.contains_key(&Key::Int(3)));
        assert!(inner.contains_key(&Key::from("x")));

        let list = map[&Key::from("name")].as_list().unwrap();
        assert!(list[0].as_map().unwrap().contains_key(&Key::Int(0)));
    }

    #[test]
    fn leading_zero_collision_fails() {
        let json = json!({"7": 1, "007": 2});
        let err = parse_value(json, &CodecOptions::default()).unwrap_err();
        assert!(matches!(err, Error::DuplicateKey { .. }));
    }

    #[test]
    fn unknown_tag_passes_through() {
        let json = json!({"__other__": "abc", "dtype": "float64"});
        let value = parse_value(json, &CodecOptions::default()).unwrap();
        assert_eq!(value.get("__other__").and_then(Value::as_str), Some("abc"));
        assert_eq!(value.get("dtype").and_then(Value::as_str), Some("float64"));
    }

    #[test]
    fn nested_tags_rebuilt() {
        let json = json!({"w": [{"__ndarray__": "AQI=", "dtype": "uint8", "shape": [2, 1]}]});
        let value = parse_value(json, &CodecOptions::default()).unwrap();
        let list = value.get("w").and_then(Value::as_list).unwrap();
        assert_eq!(list[0].as_array().unwrap().shape, vec![2, 1]);
    }
}
