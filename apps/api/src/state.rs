use std::sync::Arc;

use crate::contacts::ContactStore;

/// Shared application state injected into route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable contact store. Default: PgContactStore against the hosted database.
    pub contacts: Arc<dyn ContactStore>,
}
