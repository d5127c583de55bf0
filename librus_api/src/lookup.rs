//! Id → display-name maps built from the bulk listings.

use std::collections::HashMap;

use crate::types::{LibrusID, NamedItem, User};

/// Name used for anything the listings cannot resolve.
pub const UNKNOWN: &str = "Unknown";

/// Display names keyed by portal id. Lookups never fail: a missing id
/// resolves to [`UNKNOWN`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LookupMap(HashMap<LibrusID, String>);

impl LookupMap {
    /// Resolves an optional id to its display name.
    pub fn resolve(&self, id: Option<LibrusID>) -> &str {
        id.and_then(|id| self.0.get(&id))
            .map(String::as_str)
            .unwrap_or(UNKNOWN)
    }

    pub fn get(&self, id: LibrusID) -> Option<&str> {
        self.0.get(&id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(LibrusID, String)> for LookupMap {
    fn from_iter<I: IntoIterator<Item = (LibrusID, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// The three maps needed to resolve a homework record.
#[derive(Clone, Debug, Default)]
pub struct Lookups {
    pub categories: LookupMap,
    pub subjects: LookupMap,
    pub users: LookupMap,
}

/// Category id → name. Entries without an id are skipped.
pub fn build_category_map(categories: &[NamedItem]) -> LookupMap {
    build_named_map(categories)
}

/// Subject id → name. Entries without an id are skipped.
pub fn build_subject_map(subjects: &[NamedItem]) -> LookupMap {
    build_named_map(subjects)
}

/// User id → "First Last", falling back to whichever half is present.
pub fn build_user_map(users: &[User]) -> LookupMap {
    users
        .iter()
        .filter_map(|user| Some((user.id?, user_display_name(user))))
        .collect()
}

fn build_named_map(items: &[NamedItem]) -> LookupMap {
    items
        .iter()
        .filter_map(|item| {
            let name = non_empty(&item.name).unwrap_or(UNKNOWN);
            Some((item.id?, name.to_string()))
        })
        .collect()
}

fn user_display_name(user: &User) -> String {
    match (non_empty(&user.first_name), non_empty(&user.last_name)) {
        (Some(first), Some(last)) => format!("{} {}", first, last),
        (None, Some(last)) => last.to_string(),
        (Some(first), None) => first.to_string(),
        (None, None) => UNKNOWN.to_string(),
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CategoriesResponse, SubjectsResponse, UsersResponse};

    fn named(id: Option<LibrusID>, name: Option<&str>) -> NamedItem {
        NamedItem {
            id,
            name: name.map(str::to_string),
        }
    }

    fn user(id: Option<LibrusID>, first: Option<&str>, last: Option<&str>) -> User {
        User {
            id,
            first_name: first.map(str::to_string),
            last_name: last.map(str::to_string),
        }
    }

    #[test]
    fn category_map_from_listing() {
        let resp: CategoriesResponse = serde_json::from_value(serde_json::json!({
            "Categories": [
                {"Id": 8363, "Name": "kartkówka", "Color": {"Id": 21}},
                {"Id": 8556, "Name": "inne wydarzenia", "Color": {"Id": 25}},
                {"Id": 8364, "Name": "praca dodatkowa", "Color": {"Id": 29}}
            ]
        }))
        .unwrap();
        let map = build_category_map(&resp.categories);
        assert_eq!(map.len(), 3);
        assert_eq!(map.get(8363), Some("kartkówka"));
        assert_eq!(map.get(8556), Some("inne wydarzenia"));
    }

    #[test]
    fn missing_listing_key_is_empty() {
        let resp: CategoriesResponse = serde_json::from_str("{}").unwrap();
        assert!(build_category_map(&resp.categories).is_empty());

        let resp: SubjectsResponse = serde_json::from_str("{}").unwrap();
        assert!(build_subject_map(&resp.subjects).is_empty());

        let resp: UsersResponse = serde_json::from_str("{}").unwrap();
        assert!(build_user_map(&resp.users).is_empty());
    }

    #[test]
    fn entry_without_id_is_skipped() {
        let resp: CategoriesResponse =
            serde_json::from_str(r#"{"Categories": [{"Name": "x"}]}"#).unwrap();
        assert_eq!(build_category_map(&resp.categories), LookupMap::default());

        let map = build_subject_map(&[named(None, Some("Historia")), named(Some(1), Some("Fizyka"))]);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(1), Some("Fizyka"));
    }

    #[test]
    fn entry_without_name_is_unknown() {
        let map = build_category_map(&[named(Some(1), None)]);
        assert_eq!(map.get(1), Some(UNKNOWN));

        let map = build_subject_map(&[named(Some(2), Some(""))]);
        assert_eq!(map.get(2), Some(UNKNOWN));
    }

    #[test]
    fn user_with_both_names() {
        let map = build_user_map(&[user(Some(1493507), Some("Krzysztof"), Some("Krupa"))]);
        assert_eq!(map.get(1493507), Some("Krzysztof Krupa"));
    }

    #[test]
    fn user_with_last_name_only() {
        let map = build_user_map(&[user(Some(1589959), None, Some("Nowak"))]);
        assert_eq!(map.get(1589959), Some("Nowak"));
    }

    #[test]
    fn user_with_first_name_only() {
        let map = build_user_map(&[user(Some(7), Some("Anna"), None)]);
        assert_eq!(map.get(7), Some("Anna"));
    }

    #[test]
    fn user_with_null_names() {
        let resp: UsersResponse = serde_json::from_str(
            r#"{"Users": [{"Id": 8, "FirstName": null, "LastName": null}]}"#,
        )
        .unwrap();
        let map = build_user_map(&resp.users);
        assert_eq!(map.get(8), Some(UNKNOWN));
    }

    #[test]
    fn user_with_names_missing() {
        let resp: UsersResponse = serde_json::from_str(r#"{"Users": [{"Id": 9}]}"#).unwrap();
        let map = build_user_map(&resp.users);
        assert_eq!(map.get(9), Some(UNKNOWN));
    }

    #[test]
    fn user_without_id_is_skipped() {
        let map = build_user_map(&[user(None, Some("Jan"), Some("Kowalski"))]);
        assert!(map.is_empty());
    }

    #[test]
    fn resolve_falls_back_to_unknown() {
        let map = build_subject_map(&[named(Some(25678), Some("Historia"))]);
        assert_eq!(map.resolve(Some(25678)), "Historia");
        assert_eq!(map.resolve(Some(1)), UNKNOWN);
        assert_eq!(map.resolve(None), UNKNOWN);
    }
}
