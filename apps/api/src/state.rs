use std::sync::Arc;

use tokio::sync::RwLock;

use crate::display::DisplayController;
use crate::form::controller::FormController;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// One draft and one display per process: the service backs a single
/// editing session, and nothing survives a restart.
#[derive(Clone)]
pub struct AppState {
    pub form: Arc<RwLock<FormController>>,
    pub display: Arc<RwLock<DisplayController>>,
    /// Pluggable text generator. Default: GeminiClient. Tests inject stubs.
    pub generator: Arc<dyn TextGenerator>,
}

impl AppState {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            form: Arc::new(RwLock::new(FormController::new())),
            display: Arc::new(RwLock::new(DisplayController::new())),
            generator,
        }
    }
}
