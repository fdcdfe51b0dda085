//! Controller module - Application logic and event handling
//!
//! This module connects user intents to the model and the catalog client.
//! It is organized into submodules by responsibility:
//!
//! - `input`: Key event handling
//! - `search`: Search/filter/pagination intents
//! - `lifecycle`: Outbound request lifecycle (single-flight, cancellation)

mod input;
mod lifecycle;
mod search;

pub use lifecycle::RequestLifecycle;

use std::sync::Arc;

use crate::model::{AppModel, DiscogsClient};

#[derive(Clone)]
pub struct AppController {
    pub(crate) model: Arc<AppModel>,
    pub(crate) client: DiscogsClient,
    pub(crate) lifecycle: RequestLifecycle,
}

impl AppController {
    pub fn new(model: Arc<AppModel>, client: DiscogsClient) -> Self {
        let lifecycle = RequestLifecycle::new(model.session_handle());
        Self {
            model,
            client,
            lifecycle,
        }
    }

    /// End the search session. Called once when the screen closes; any
    /// in-flight call is cancelled and later completions are discarded.
    pub async fn teardown(&self) {
        self.lifecycle.teardown().await;
    }
}
