use parley_generate::GenerateClient;

use crate::config::Config;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub generator: GenerateClient,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            generator: GenerateClient::new(config.model_api_url.clone()),
        }
    }
}
