//! GraphQL client for the character search gateway.

mod client;
pub mod operations;
pub mod types;

pub use client::GatewayClient;
pub use operations::{GetCharacters, GetSavedSearchByID, GetSavedSearches, Operation, OperationKind, SaveSearch};
pub use types::{Character, CharactersResult, ErrorLocation, GraphQlError, SavedSearch};
