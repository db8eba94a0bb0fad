//! Wire shapes for the search gateway.
//!
//! Field names follow the gateway schema exactly (`Characters`, `SearchID`,
//! `SearchKey`, ...). The gateway resolvers answer `null` for empty lists and
//! unknown saved searches, so every collection decodes `null` as empty.

use serde::{Deserialize, Deserializer, Serialize};

/// A Star Wars character as resolved by the gateway.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Film titles the character appears in.
    #[serde(default, deserialize_with = "null_as_default")]
    pub films: Vec<String>,
    /// Models of the vehicles the character drives.
    #[serde(
        rename = "vehicleModels",
        default,
        deserialize_with = "null_as_default"
    )]
    pub vehicle_models: Vec<String>,
}

/// Characters matching a search plus the server-assigned search ID.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharactersResult {
    #[serde(rename = "Characters", default, deserialize_with = "null_as_default")]
    pub characters: Vec<Character>,
    /// Opaque token used to retrieve or save this search later.
    #[serde(rename = "SearchID", default, deserialize_with = "null_as_default")]
    pub search_id: String,
}

/// Reference to a previously executed search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedSearch {
    #[serde(rename = "ID", default, deserialize_with = "null_as_default")]
    pub id: String,
    /// The name that was searched for.
    #[serde(rename = "SearchKey", default, deserialize_with = "null_as_default")]
    pub search_key: String,
}

/// Body of a GraphQL POST.
#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a, V: Serialize> {
    #[serde(rename = "operationName")]
    pub operation_name: &'a str,
    pub query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<&'a V>,
}

/// Body of a GraphQL response.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub errors: Vec<GraphQlError>,
}

/// One entry of a response's `errors` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphQlError {
    pub message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub locations: Vec<ErrorLocation>,
    /// Mixed field names and list indices.
    #[serde(default, deserialize_with = "null_as_default")]
    pub path: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorLocation {
    pub line: u32,
    pub column: u32,
}

pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_characters_result() {
        let json = r#"{"Characters":[{"name":"R2-D2","films":["A New Hope"],"vehicleModels":[]}],"SearchID":"65a1f0"}"#;
        let result: CharactersResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.search_id, "65a1f0");
        assert_eq!(result.characters[0].name, "R2-D2");
        assert_eq!(result.characters[0].films, vec!["A New Hope"]);
        assert!(result.characters[0].vehicle_models.is_empty());
    }

    #[test]
    fn test_null_lists_are_empty() {
        let json = r#"{"Characters":null,"SearchID":null}"#;
        let result: CharactersResult = serde_json::from_str(json).unwrap();
        assert_eq!(result, CharactersResult::default());

        let character: Character =
            serde_json::from_str(r#"{"name":"Yoda","films":null,"vehicleModels":null}"#).unwrap();
        assert!(character.films.is_empty());
        assert!(character.vehicle_models.is_empty());
    }

    #[test]
    fn test_serialize_uses_wire_names() {
        let search = SavedSearch {
            id: "abc".into(),
            search_key: "luke".into(),
        };
        assert_eq!(
            serde_json::to_value(&search).unwrap(),
            json!({"ID": "abc", "SearchKey": "luke"})
        );
    }

    #[test]
    fn test_request_omits_missing_variables() {
        let request: GraphQlRequest<'_, ()> = GraphQlRequest {
            operation_name: "GetSavedSearches",
            query: "query GetSavedSearches { getSavedSearches { ID SearchKey } }",
            variables: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["operationName"], "GetSavedSearches");
        assert!(value.get("variables").is_none());
    }

    #[test]
    fn test_parse_error_entry() {
        let json = r#"{"data":null,"errors":[{"message":"failed to get search by ID","locations":[{"line":2,"column":3}],"path":["getSavedSearchesByID"]}]}"#;
        let response: GraphQlResponse<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert!(response.data.is_none());
        assert_eq!(response.errors.len(), 1);
        assert_eq!(response.errors[0].locations[0], ErrorLocation { line: 2, column: 3 });
        assert_eq!(response.errors[0].path, vec![json!("getSavedSearchesByID")]);
    }
}
