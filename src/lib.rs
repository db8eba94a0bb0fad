//! Typed client for the Star Wars character search gateway.
//!
//! The gateway is a GraphQL endpoint offering four operations: search
//! characters by name, list saved searches, fetch a saved search by ID and
//! save a search. [`GatewayClient`] sends them; [`SearchStore`] adds
//! per-request loading state on top.

pub mod api;
pub mod error;
pub mod settings;
pub mod store;
pub mod view;

pub use api::{Character, CharactersResult, GatewayClient, SavedSearch};
pub use error::{GatewayError, Result};
pub use settings::Settings;
pub use store::{RequestId, RequestState, RequestStatus, SearchStore, Tracked};
