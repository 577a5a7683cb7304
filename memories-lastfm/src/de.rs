//! Deserialization helpers for the shapes Last.fm's JSON takes.

use serde::{Deserialize, Deserializer};

/// Last.fm encodes most numbers as strings (`"playcount": "42"`), but not always.
pub(crate) fn number_from_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<u64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(u64),
    }

    match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s.trim().parse().map_err(serde::de::Error::custom),
        StringOrNumber::Number(n) => Ok(n),
    }
}

/// As [`number_from_string`], for fields that may be absent or empty.
pub(crate) fn optional_number_from_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<u64>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(u64),
    }

    match Option::<StringOrNumber>::deserialize(deserializer)? {
        None => Ok(None),
        Some(StringOrNumber::String(s)) if s.trim().is_empty() => Ok(None),
        Some(StringOrNumber::String(s)) => {
            s.trim().parse().map(Some).map_err(serde::de::Error::custom)
        }
        Some(StringOrNumber::Number(n)) => Ok(Some(n)),
    }
}

/// Lists with a single entry are sent as a bare object instead of an array.
pub(crate) fn one_or_many<'de, D: Deserializer<'de>, T: Deserialize<'de>>(
    deserializer: D,
) -> Result<Vec<T>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany<T> {
        Many(Vec<T>),
        One(T),
    }

    Ok(match Option::<OneOrMany<T>>::deserialize(deserializer)? {
        None => vec![],
        Some(OneOrMany::Many(items)) => items,
        Some(OneOrMany::One(item)) => vec![item],
    })
}

/// Empty strings stand in for missing values (`"mbid": ""`).
pub(crate) fn non_empty_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.filter(|s| !s.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Numbers {
        #[serde(deserialize_with = "number_from_string")]
        required: u64,
        #[serde(default, deserialize_with = "optional_number_from_string")]
        optional: Option<u64>,
    }

    #[test]
    fn test_numbers() {
        let n: Numbers = serde_json::from_str(r#"{"required": "12", "optional": 3}"#).unwrap();
        assert_eq!((n.required, n.optional), (12, Some(3)));

        let n: Numbers = serde_json::from_str(r#"{"required": 7, "optional": ""}"#).unwrap();
        assert_eq!((n.required, n.optional), (7, None));

        let n: Numbers = serde_json::from_str(r#"{"required": "0"}"#).unwrap();
        assert_eq!((n.required, n.optional), (0, None));

        assert!(serde_json::from_str::<Numbers>(r#"{"required": "many"}"#).is_err());
    }

    #[derive(Debug, Deserialize)]
    struct List {
        #[serde(default, deserialize_with = "one_or_many")]
        item: Vec<u32>,
    }

    #[test]
    fn test_one_or_many() {
        let list: List = serde_json::from_str(r#"{"item": [1, 2]}"#).unwrap();
        assert_eq!(list.item, vec![1, 2]);

        let list: List = serde_json::from_str(r#"{"item": 1}"#).unwrap();
        assert_eq!(list.item, vec![1]);

        let list: List = serde_json::from_str(r#"{}"#).unwrap();
        assert!(list.item.is_empty());
    }
}
