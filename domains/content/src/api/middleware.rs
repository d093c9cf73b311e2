//! Content domain state

use std::sync::Arc;

use crate::repository::ContentStore;

/// Application state for the Content domain
#[derive(Clone)]
pub struct ContentState {
    pub store: Arc<dyn ContentStore>,
}

impl ContentState {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }
}
