//! Homework records: raw portal shape and the resolved output shape.

use serde::{Deserialize, Deserializer, Serialize};

use super::{LibrusID, Reference, TextOrNumber};

/// Body of `GET /HomeWorks`.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct HomeWorksResponse {
    /// Records that do not fit [`RawHomework`] are skipped, not fatal.
    #[serde(rename = "HomeWorks", default, deserialize_with = "skip_malformed")]
    pub home_works: Vec<RawHomework>,
}

fn skip_malformed<'de, D>(deserializer: D) -> Result<Vec<RawHomework>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Vec::<serde_json::Value>::deserialize(deserializer)?;
    Ok(values
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<RawHomework>(value) {
            Ok(hw) => Some(hw),
            Err(e) => {
                tracing::debug!("Skipping malformed homework record: {}", e);
                None
            }
        })
        .collect())
}

/// A homework (or school event) record exactly as the portal returns it.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct RawHomework {
    #[serde(default)]
    pub id: Option<LibrusID>,

    /// Due date, `YYYY-MM-DD`.
    #[serde(default)]
    pub date: Option<String>,

    #[serde(default)]
    pub category: Option<Reference>,

    /// Absent for school-wide events.
    #[serde(default)]
    pub subject: Option<Reference>,

    #[serde(default)]
    pub created_by: Option<Reference>,

    #[serde(default)]
    pub lesson_no: Option<TextOrNumber>,

    #[serde(default)]
    pub time_from: Option<String>,

    #[serde(default)]
    pub time_to: Option<String>,

    #[serde(default)]
    pub content: Option<String>,

    /// Creation timestamp, `YYYY-MM-DD HH:MM:SS`.
    #[serde(default)]
    pub add_date: Option<String>,
}

/// A homework record with every reference resolved to a display name.
///
/// Optional fields are present only when the portal supplied them.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HomeworkEntry {
    pub id: LibrusID,
    pub date: String,
    pub subject: String,
    pub creator: String,
    pub category: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lesson_no: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_from: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_to: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_date: Option<String>,
}
