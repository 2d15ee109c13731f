// File: src/input.rs
// Purpose: Turn submitted form bodies into the raw value map schemas validate

use serde_json::{Map, Number, Value};

use crate::validators;

/// Decode one `application/x-www-form-urlencoded` component
fn decode(component: &str) -> String {
    let spaced = component.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| spaced.clone())
}

/// Parse a urlencoded body into key/value pairs, keeping order and repeats
pub fn parse_urlencoded(body: &str) -> Vec<(String, String)> {
    body.split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode(key), decode(value))
        })
        .collect()
}

/// Build a raw value map from form pairs.
///
/// Keys listed in `list_fields` collect every submitted value into an array
/// (a `[]` suffix on the key is ignored); other keys keep the last value.
pub fn pairs_to_map<I>(pairs: I, list_fields: &[&str]) -> Map<String, Value>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut map = Map::new();

    for (key, value) in pairs {
        let key = key.strip_suffix("[]").map(str::to_string).unwrap_or(key);

        if list_fields.contains(&key.as_str()) {
            let entry = map
                .entry(key)
                .or_insert_with(|| Value::Array(Vec::new()));
            if let Value::Array(items) = entry {
                items.push(Value::String(value));
            }
        } else {
            map.insert(key, Value::String(value));
        }
    }

    map
}

/// Form bodies carry every value as text. Numeric text for `number_fields`
/// becomes a JSON number and blank text counts as missing; anything else is
/// left as text for the field rule to reject.
pub fn parse_number_fields(map: &mut Map<String, Value>, number_fields: &[&str]) {
    for name in number_fields {
        let Some(Value::String(text)) = map.get(*name) else {
            continue;
        };

        if text.trim().is_empty() {
            map.remove(*name);
        } else if let Some(number) = validators::parse_number(text).and_then(Number::from_f64) {
            map.insert(name.to_string(), integral(number));
        }
    }
}

/// `12.0` is stored as the integer `12`
fn integral(number: Number) -> Value {
    match number.as_f64() {
        Some(n) if n.fract() == 0.0 && n.abs() < i64::MAX as f64 => Value::from(n as i64),
        _ => Value::Number(number),
    }
}
