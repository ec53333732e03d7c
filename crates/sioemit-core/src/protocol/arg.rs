//! Event arguments.
//!
//! Arguments are MessagePack values, so binary payloads travel as `bin`
//! instead of being coerced to strings or arrays.

use serde_json::Value as Json;

pub use rmpv::Value as Arg;

/// Convert a JSON value. Integers stay integers; other numbers become f64.
pub fn from_json(v: Json) -> Arg {
    match v {
        Json::Null => Arg::Nil,
        Json::Bool(b) => Arg::Boolean(b),
        Json::Number(n) => {
            if let Some(u) = n.as_u64() {
                Arg::from(u)
            } else if let Some(i) = n.as_i64() {
                Arg::from(i)
            } else {
                Arg::F64(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        Json::String(s) => Arg::from(s),
        Json::Array(items) => Arg::Array(items.into_iter().map(from_json).collect()),
        Json::Object(map) => Arg::Map(
            map.into_iter()
                .map(|(k, v)| (Arg::from(k), from_json(v)))
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numbers_keep_their_kind() {
        assert_eq!(from_json(json!(300)), Arg::from(300u64));
        assert_eq!(from_json(json!(-1)), Arg::from(-1i64));
        assert_eq!(from_json(json!(1.5)), Arg::F64(1.5));
    }

    #[test]
    fn nested_structures() {
        let v = from_json(json!({"a": [true, null, "x"]}));
        let expected = Arg::Map(vec![(
            Arg::from("a"),
            Arg::Array(vec![Arg::Boolean(true), Arg::Nil, Arg::from("x")]),
        )]);
        assert_eq!(v, expected);
    }
}
