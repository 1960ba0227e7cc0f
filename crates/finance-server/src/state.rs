//! Application State

use std::sync::Arc;

use finance_advisor::AdviceRequester;

/// Shared application state, read-only after startup
#[derive(Clone)]
pub struct AppState {
    /// Advice requester wrapping the configured LLM provider
    pub requester: Arc<AdviceRequester>,
}

impl AppState {
    pub fn new(requester: AdviceRequester) -> Self {
        Self {
            requester: Arc::new(requester),
        }
    }
}
