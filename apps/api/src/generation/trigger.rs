//! Generation trigger — the boundary where a generate request runs end to end.
//!
//! Flow: display.begin_attempt → form snapshot → build_prompt →
//!       spawned attempt (generator.generate → display.settle) → view.
//!
//! Every failure inside an attempt is converted to a `GenerateError` and stored
//! as the display's failure state. Only "already loading" is returned to the
//! caller, because no attempt was started.
//!
//! The attempt settles on its own task: a caller that goes away mid-request
//! (client disconnect, proxy timeout) cannot leave the display in `Loading`.

use std::sync::Arc;

use anyhow::anyhow;
use tokio::sync::RwLock;
use tracing::{error, info};

use crate::display::{DisplayController, DisplayView};
use crate::errors::AppError;
use crate::form::controller::FormController;
use crate::generation::prompt_builder::build_prompt;
use crate::llm_client::{GenerateError, TextGenerator};

/// Runs one generation attempt and returns the settled view.
///
/// Locks are released before the provider call, so form edits and display
/// reads proceed while the request is in flight.
pub async fn trigger_generation(
    form: &RwLock<FormController>,
    display: Arc<RwLock<DisplayController>>,
    generator: Arc<dyn TextGenerator>,
) -> Result<DisplayView, AppError> {
    display
        .write()
        .await
        .begin_attempt()
        .map_err(|e| AppError::Conflict(e.to_string()))?;

    let draft = form.read().await.snapshot();
    let prompt = build_prompt(&draft);
    info!(
        "Generating resume: {} experience, {} education entries, {} skills, prompt {} bytes",
        draft.experience.len(),
        draft.education.len(),
        draft.skills().len(),
        prompt.len()
    );

    let attempt = tokio::spawn(async move {
        let outcome = run_generator(generator, prompt).await;

        let mut display = display.write().await;
        display.settle(outcome);
        let state = display.state();
        match display.last_generated() {
            Some(text) => info!("Generation settled: {} ({} bytes)", state, text.len()),
            None => info!("Generation settled: {}", state),
        }
        display.view()
    });

    attempt
        .await
        .map_err(|e| AppError::Internal(anyhow!("Generation attempt task failed: {e}")))
}

/// Runs the generator on its own task so a panic settles as `Unknown`
/// instead of leaving the display stuck in `Loading`.
async fn run_generator(
    generator: Arc<dyn TextGenerator>,
    prompt: String,
) -> Result<String, GenerateError> {
    let handle = tokio::spawn(async move { generator.generate(&prompt).await });

    match handle.await {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("Generation task failed: {e}");
            Err(GenerateError::Unknown)
        }
    }
}
