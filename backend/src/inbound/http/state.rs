//! Shared HTTP adapter state.
//!
//! Handlers accept these bundles via `actix_web::web::Data`, so they depend
//! only on domain ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{UsersQuery, UsersRelay};

use super::landing::StaticAssets;

/// Dependencies of the Query Service handlers.
#[derive(Clone)]
pub struct QueryServiceState {
    /// Read use-cases over the record store.
    pub users: Arc<dyn UsersQuery>,
}

impl QueryServiceState {
    /// Bundle the Query Service ports.
    pub fn new(users: Arc<dyn UsersQuery>) -> Self {
        Self { users }
    }
}

/// Dependencies of the fetch-and-log client handlers.
#[derive(Clone)]
pub struct ClientState {
    /// Fetch-and-log use-cases.
    pub relay: Arc<dyn UsersRelay>,
    /// Files served under `/static`.
    pub assets: Arc<StaticAssets>,
}

impl ClientState {
    /// Bundle the client ports and static assets.
    pub fn new(relay: Arc<dyn UsersRelay>, assets: Arc<StaticAssets>) -> Self {
        Self { relay, assets }
    }
}
