use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decodes `null` the same way as a missing field.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decodes each element on its own, dropping the ones that do not fit `T`.
pub fn decode_each<T: DeserializeOwned>(values: Vec<Value>, kind: &str) -> Vec<T> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::warn!("Skipping malformed {} at index {}: {}", kind, index, e);
                None
            }
        })
        .collect()
}

/// An optional array whose malformed elements are skipped. Anything other
/// than an array decodes as `None`.
pub fn lenient_opt_vec<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(values)) => Some(decode_each(values, short_type_name::<T>())),
        _ => None,
    })
}

/// Like [`lenient_opt_vec`], with a missing or non-array value as empty.
pub fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(lenient_opt_vec(deserializer)?.unwrap_or_default())
}

pub fn short_type_name<T>() -> &'static str {
    let name = std::any::type_name::<T>();
    name.rsplit("::").next().unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Counter {
        value: u32,
    }

    #[test]
    fn test_decode_each_keeps_good_elements() {
        let values = vec![json!({ "value": 1 }), json!({ "value": "x" }), json!(null), json!({ "value": 3 })];
        let decoded: Vec<Counter> = decode_each(values, "counter");
        assert_eq!(decoded, vec![Counter { value: 1 }, Counter { value: 3 }]);
    }

    #[test]
    fn test_short_type_name() {
        assert_eq!(short_type_name::<Counter>(), "Counter");
    }
}
