//! Bulk listings used to resolve homework references.

use serde::{Deserialize, Serialize};

use super::LibrusID;

/// Body of `GET /HomeWorks/Categories`.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct CategoriesResponse {
    #[serde(rename = "Categories", default)]
    pub categories: Vec<NamedItem>,
}

/// Body of `GET /Subjects`.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct SubjectsResponse {
    #[serde(rename = "Subjects", default)]
    pub subjects: Vec<NamedItem>,
}

/// Body of `GET /Users`.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct UsersResponse {
    #[serde(rename = "Users", default)]
    pub users: Vec<User>,
}

/// A category or subject. Other fields (`Color`, `Short`, `No`) are ignored.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct NamedItem {
    #[serde(default)]
    pub id: Option<LibrusID>,

    #[serde(default)]
    pub name: Option<String>,
}

/// A teacher or other portal user.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct User {
    #[serde(default)]
    pub id: Option<LibrusID>,

    #[serde(default)]
    pub first_name: Option<String>,

    #[serde(default)]
    pub last_name: Option<String>,
}

/// Body of `GET /Auth/TokenInfo`.
#[derive(Serialize, Deserialize, Debug)]
pub struct TokenInfo {
    #[serde(rename = "UserIdentifier")]
    pub user_identifier: super::TextOrNumber,
}
