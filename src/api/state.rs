use crate::clients::ProductClient;
use crate::gate::AccessGate;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub products: ProductClient,
    pub gate: AccessGate,
}

impl AppState {
    pub fn new(products: ProductClient, gate: AccessGate) -> Self {
        Self { products, gate }
    }
}
