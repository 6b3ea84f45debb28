//! Deserialization helpers shared by the record shapes.

use serde::{Deserialize, Deserializer};

/// Read an explicit `null` as the field's zero value, like an absent key.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Sample {
        #[serde(deserialize_with = "null_as_default")]
        name: String,
        #[serde(deserialize_with = "null_as_default")]
        size: u64,
    }

    #[test]
    fn test_null_reads_as_zero_value() {
        let parsed: Sample = serde_json::from_str(r#"{"name":null,"size":null}"#).unwrap();
        assert_eq!(parsed.name, "");
        assert_eq!(parsed.size, 0);
    }

    #[test]
    fn test_present_and_absent_values() {
        let parsed: Sample = serde_json::from_str(r#"{"name":"a.txt"}"#).unwrap();
        assert_eq!(parsed.name, "a.txt");
        assert_eq!(parsed.size, 0);
    }

    #[test]
    fn test_wrong_type_still_rejected() {
        assert!(serde_json::from_str::<Sample>(r#"{"size":"big"}"#).is_err());
    }
}
