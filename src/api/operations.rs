//! The four gateway operations.
//!
//! Each operation pairs a GraphQL document with its variables and the shape of
//! its `data` payload. `Output` is what callers get back once the payload is
//! unwrapped from its single top-level field.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::types::{null_as_default, Character, CharactersResult, SavedSearch};

pub const GET_CHARACTERS: &str = r#"
    query GetCharacters($name: String!) {
        getCharacters(name: $name) {
            Characters {
                name
                films
                vehicleModels
            }
            SearchID
        }
    }
"#;

pub const GET_SAVED_SEARCHES: &str = r#"
    query GetSavedSearches {
        getSavedSearches {
            ID
            SearchKey
        }
    }
"#;

pub const GET_SAVED_SEARCH_BY_ID: &str = r#"
    query GetSavedSearchByID($searchID: String!) {
        getSavedSearchesByID(searchID: $searchID) {
            films
            vehicleModels
            name
        }
    }
"#;

pub const SAVE_SEARCH: &str = r#"
    mutation SaveSearch($searchID: String!) {
        saveSearch(searchID: $searchID)
    }
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Query,
    Mutation,
}

/// A typed GraphQL document bound to its variables and payload.
pub trait Operation {
    type Variables: Serialize;
    type Data: DeserializeOwned;
    type Output;

    const NAME: &'static str;
    const DOCUMENT: &'static str;
    const KIND: OperationKind;
    /// Always fetch from the network, bypassing any intermediate cache.
    const NETWORK_ONLY: bool = false;

    fn variables(&self) -> Option<&Self::Variables>;

    fn output(data: Self::Data) -> Self::Output;
}

/// `getCharacters(name: String!)`
#[derive(Debug, Clone, Serialize)]
pub struct GetCharacters {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct GetCharactersData {
    #[serde(rename = "getCharacters", default, deserialize_with = "null_as_default")]
    pub get_characters: CharactersResult,
}

impl Operation for GetCharacters {
    type Variables = Self;
    type Data = GetCharactersData;
    type Output = CharactersResult;

    const NAME: &'static str = "GetCharacters";
    const DOCUMENT: &'static str = GET_CHARACTERS;
    const KIND: OperationKind = OperationKind::Query;

    fn variables(&self) -> Option<&Self::Variables> {
        Some(self)
    }

    fn output(data: GetCharactersData) -> CharactersResult {
        data.get_characters
    }
}

/// `getSavedSearches`
#[derive(Debug, Clone, Copy, Default)]
pub struct GetSavedSearches;

#[derive(Debug, Deserialize)]
pub struct GetSavedSearchesData {
    #[serde(rename = "getSavedSearches", default, deserialize_with = "null_as_default")]
    pub get_saved_searches: Vec<SavedSearch>,
}

impl Operation for GetSavedSearches {
    type Variables = ();
    type Data = GetSavedSearchesData;
    type Output = Vec<SavedSearch>;

    const NAME: &'static str = "GetSavedSearches";
    const DOCUMENT: &'static str = GET_SAVED_SEARCHES;
    const KIND: OperationKind = OperationKind::Query;
    const NETWORK_ONLY: bool = true;

    fn variables(&self) -> Option<&Self::Variables> {
        None
    }

    fn output(data: GetSavedSearchesData) -> Vec<SavedSearch> {
        data.get_saved_searches
    }
}

/// `getSavedSearchesByID(searchID: String!)`
#[derive(Debug, Clone, Serialize)]
pub struct GetSavedSearchByID {
    #[serde(rename = "searchID")]
    pub search_id: String,
}

#[derive(Debug, Deserialize)]
pub struct GetSavedSearchByIDData {
    #[serde(
        rename = "getSavedSearchesByID",
        default,
        deserialize_with = "null_as_default"
    )]
    pub get_saved_searches_by_id: Vec<Character>,
}

impl Operation for GetSavedSearchByID {
    type Variables = Self;
    type Data = GetSavedSearchByIDData;
    type Output = Vec<Character>;

    const NAME: &'static str = "GetSavedSearchByID";
    const DOCUMENT: &'static str = GET_SAVED_SEARCH_BY_ID;
    const KIND: OperationKind = OperationKind::Query;

    fn variables(&self) -> Option<&Self::Variables> {
        Some(self)
    }

    fn output(data: GetSavedSearchByIDData) -> Vec<Character> {
        data.get_saved_searches_by_id
    }
}

/// `saveSearch(searchID: String!)`, persisting the search server-side.
#[derive(Debug, Clone, Serialize)]
pub struct SaveSearch {
    #[serde(rename = "searchID")]
    pub search_id: String,
}

#[derive(Debug, Deserialize)]
pub struct SaveSearchData {
    /// Nullable `Boolean`, passed through as-is.
    #[serde(rename = "saveSearch", default)]
    pub save_search: Option<bool>,
}

impl Operation for SaveSearch {
    type Variables = Self;
    type Data = SaveSearchData;
    type Output = Option<bool>;

    const NAME: &'static str = "SaveSearch";
    const DOCUMENT: &'static str = SAVE_SEARCH;
    const KIND: OperationKind = OperationKind::Mutation;

    fn variables(&self) -> Option<&Self::Variables> {
        Some(self)
    }

    fn output(data: SaveSearchData) -> Option<bool> {
        data.save_search
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_documents_name_their_operations() {
        assert!(GET_CHARACTERS.contains("query GetCharacters("));
        assert!(GET_SAVED_SEARCHES.contains("query GetSavedSearches "));
        assert!(GET_SAVED_SEARCH_BY_ID.contains("query GetSavedSearchByID("));
        assert!(SAVE_SEARCH.contains("mutation SaveSearch("));
        assert_eq!(SaveSearch::KIND, OperationKind::Mutation);
    }

    #[test]
    fn test_variables_use_wire_names() {
        let op = GetSavedSearchByID {
            search_id: "65a1f0".into(),
        };
        assert_eq!(
            serde_json::to_value(op.variables()).unwrap(),
            json!({"searchID": "65a1f0"})
        );

        let op = GetCharacters { name: "Luke".into() };
        assert_eq!(
            serde_json::to_value(op.variables()).unwrap(),
            json!({"name": "Luke"})
        );
        assert!(GetSavedSearches.variables().is_none());
    }

    #[test]
    fn test_only_saved_searches_is_network_only() {
        assert!(GetSavedSearches::NETWORK_ONLY);
        assert!(!GetCharacters::NETWORK_ONLY);
        assert!(!GetSavedSearchByID::NETWORK_ONLY);
        assert!(!SaveSearch::NETWORK_ONLY);
    }

    #[test]
    fn test_unknown_saved_search_is_empty() {
        let data: GetSavedSearchByIDData =
            serde_json::from_str(r#"{"getSavedSearchesByID":null}"#).unwrap();
        assert!(GetSavedSearchByID::output(data).is_empty());
    }

    #[test]
    fn test_save_result_passes_through() {
        let data: SaveSearchData = serde_json::from_str(r#"{"saveSearch":false}"#).unwrap();
        assert_eq!(SaveSearch::output(data), Some(false));
        let data: SaveSearchData = serde_json::from_str(r#"{"saveSearch":null}"#).unwrap();
        assert_eq!(SaveSearch::output(data), None);
    }
}
