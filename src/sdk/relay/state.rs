use crate::sdk::fare::FareOracle;
use std::sync::Arc;

/// Shared handler state. The oracle is the only dependency; everything else
/// about a request is local to that request.
#[derive(Clone)]
pub struct AppState {
    pub oracle: Arc<dyn FareOracle>,
}

impl AppState {
    pub fn new(oracle: Arc<dyn FareOracle>) -> Self {
        Self { oracle }
    }
}
