//! Search state store.
//!
//! Wraps a [`GatewayClient`] and records the state of every request it sends,
//! keyed by a per-call [`RequestId`]. Loading is derived from the table, so an
//! overlapping request finishing late can never clear another request's state.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::api::operations::{GetCharacters, GetSavedSearchByID, GetSavedSearches, Operation, SaveSearch};
use crate::api::{Character, CharactersResult, GatewayClient, SavedSearch};
use crate::error::Result;

pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestStatus {
    Pending,
    Succeeded,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestState {
    /// Operation name, e.g. `GetCharacters`.
    pub operation: &'static str,
    pub status: RequestStatus,
}

/// The outcome of one store call together with the request it was tracked as.
#[derive(Debug)]
pub struct Tracked<T> {
    pub id: RequestId,
    pub result: Result<T>,
}

impl<T> Tracked<T> {
    pub fn into_result(self) -> Result<T> {
        self.result
    }
}

/// Consolidated store exposing all four gateway operations.
#[derive(Debug, Clone)]
pub struct SearchStore {
    client: Arc<GatewayClient>,
    next_id: Arc<AtomicU64>,
    requests: Arc<Mutex<HashMap<RequestId, RequestState>>>,
}

impl SearchStore {
    pub fn new(client: GatewayClient) -> Self {
        Self {
            client: Arc::new(client),
            next_id: Arc::new(AtomicU64::new(1)),
            requests: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn client(&self) -> &GatewayClient {
        &self.client
    }

    pub async fn search_characters(&self, name: &str) -> Tracked<CharactersResult> {
        self.track(&GetCharacters {
            name: name.to_string(),
        })
        .await
    }

    pub async fn get_saved_searches(&self) -> Tracked<Vec<SavedSearch>> {
        self.track(&GetSavedSearches).await
    }

    pub async fn get_saved_search_by_id(&self, search_id: &str) -> Tracked<Vec<Character>> {
        self.track(&GetSavedSearchByID {
            search_id: search_id.to_string(),
        })
        .await
    }

    pub async fn save_search(&self, search_id: &str) -> Tracked<Option<bool>> {
        self.track(&SaveSearch {
            search_id: search_id.to_string(),
        })
        .await
    }

    /// True while any character search is in flight.
    pub fn is_loading(&self) -> bool {
        self.lock()
            .values()
            .any(|s| s.operation == GetCharacters::NAME && s.status == RequestStatus::Pending)
    }

    pub fn status(&self, id: RequestId) -> Option<RequestState> {
        self.lock().get(&id).cloned()
    }

    /// Ids of requests still in flight, oldest first.
    pub fn pending(&self) -> Vec<RequestId> {
        let mut ids: Vec<RequestId> = self
            .lock()
            .iter()
            .filter(|(_, s)| s.status == RequestStatus::Pending)
            .map(|(id, _)| *id)
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Drop every resolved entry, keeping in-flight ones.
    pub fn clear_finished(&self) {
        self.lock().retain(|_, s| s.status == RequestStatus::Pending);
    }

    async fn track<O: Operation>(&self, operation: &O) -> Tracked<O::Output> {
        let in_flight = self.begin(O::NAME);
        let id = in_flight.id;
        let result = self.client.execute(operation).await;

        match &result {
            Ok(_) => in_flight.finish(RequestStatus::Succeeded),
            Err(e) => {
                tracing::warn!(request = id, operation = O::NAME, error = %e, "gateway request failed");
                in_flight.finish(RequestStatus::Failed(e.to_string()));
            }
        }

        Tracked { id, result }
    }

    fn begin(&self, operation: &'static str) -> InFlight<'_> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.lock().insert(
            id,
            RequestState {
                operation,
                status: RequestStatus::Pending,
            },
        );
        InFlight {
            store: self,
            id,
            finished: false,
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<RequestId, RequestState>> {
        self.requests.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for SearchStore {
    fn default() -> Self {
        Self::new(GatewayClient::default())
    }
}

/// A registered Pending entry. Dropped without finishing (the calling future
/// was cancelled) it removes its entry instead of leaving it Pending.
struct InFlight<'a> {
    store: &'a SearchStore,
    id: RequestId,
    finished: bool,
}

impl InFlight<'_> {
    fn finish(mut self, status: RequestStatus) {
        if let Some(state) = self.store.lock().get_mut(&self.id) {
            state.status = status;
        }
        self.finished = true;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.finished {
            self.store.lock().remove(&self.id);
        }
    }
}
