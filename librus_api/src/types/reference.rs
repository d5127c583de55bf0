//! Shared building blocks of portal payloads.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Portal identifier for categories, subjects and users.
pub type LibrusID = i64;

/// Nested `{Id, Url}` pointer to another portal resource.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Reference {
    /// Target resource id, when the portal supplies an integer one.
    #[serde(default, deserialize_with = "integer_or_none")]
    pub id: Option<LibrusID>,

    /// Absolute URL of the target resource.
    #[serde(default)]
    pub url: Option<String>,
}

/// Any non-integer id is treated as absent so the reference resolves to
/// the unknown placeholder instead of failing the whole payload.
fn integer_or_none<'de, D>(deserializer: D) -> Result<Option<LibrusID>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_i64()))
}

/// A value the portal sends either as a string or as a number.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

impl fmt::Display for TextOrNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextOrNumber::Text(text) => f.write_str(text),
            TextOrNumber::Number(number) => write!(f, "{}", number),
        }
    }
}
