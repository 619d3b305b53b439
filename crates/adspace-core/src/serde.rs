//! Serde helpers for form-style input.
//!
//! Browser forms send numeric fields either as JSON numbers or as the raw
//! text the user typed. These helpers normalize both into a `String` so the
//! value can be parsed once, at the service boundary, with a proper error.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Text(String),
    Integer(i64),
    Float(f64),
}

/// Deserialize a field that may be a string, a number, `null`, or absent.
///
/// Numbers are rendered back to their decimal text; `null` becomes an empty
/// string. Combine with `#[serde(default)]` so absent fields are empty too.
pub fn deserialize_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<StringOrNumber> = Option::deserialize(deserializer)?;
    Ok(match value {
        Some(StringOrNumber::Text(s)) => s,
        Some(StringOrNumber::Integer(n)) => n.to_string(),
        Some(StringOrNumber::Float(f)) => f.to_string(),
        None => String::new(),
    })
}

/// Deserialize an optional string, treating `""` as `None`.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    Ok(opt.filter(|s| !s.trim().is_empty()))
}
