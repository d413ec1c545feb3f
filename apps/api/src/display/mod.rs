//! Display Controller — tracks what the result pane shows.
//!
//! ```text
//! Idle → Loading → Success(text) | Failure(reason) → Loading → ...
//! ```
//!
//! There is no terminal state. `begin_attempt()` refuses to run while a
//! generation is already `Loading`, which is what keeps the trigger disabled.

use std::fmt;

use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::llm_client::GenerateError;

pub const PLACEHOLDER_TITLE: &str = "Your resume will appear here";
pub const PLACEHOLDER_HINT: &str = "Fill out the form and click \"Generate\" to start.";
pub const LOADING_TITLE: &str = "Generating your resume...";
pub const ERROR_TITLE: &str = "An Error Occurred";
pub const TRIGGER_LABEL_IDLE: &str = "Generate Resume with AI";
pub const TRIGGER_LABEL_BUSY: &str = "Generating...";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DisplayState {
    #[default]
    Idle,
    Loading,
    Success(String),
    Failure(String),
}

impl fmt::Display for DisplayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Loading => write!(f, "Loading"),
            Self::Success(_) => write!(f, "Success"),
            Self::Failure(_) => write!(f, "Failure"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("A resume generation is already in progress")]
pub struct AlreadyLoading;

/// What the result pane should render, ready to serialize for the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Pane {
    Placeholder { title: String, hint: String },
    Loading { title: String },
    Error { title: String, message: String },
    /// `copyable` backs the copy-to-clipboard affordance.
    Resume { text: String, copyable: bool },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayView {
    pub pane: Pane,
    pub trigger_enabled: bool,
    pub trigger_label: String,
}

#[derive(Debug, Default)]
pub struct DisplayController {
    state: DisplayState,
}

impl DisplayController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    /// Clears the previous result or error and enters `Loading`.
    pub fn begin_attempt(&mut self) -> Result<(), AlreadyLoading> {
        if self.state == DisplayState::Loading {
            return Err(AlreadyLoading);
        }
        info!("Display: {} -> Loading", self.state);
        self.state = DisplayState::Loading;
        Ok(())
    }

    /// Records the outcome of the in-flight attempt.
    pub fn settle(&mut self, outcome: Result<String, GenerateError>) {
        if self.state != DisplayState::Loading {
            warn!("Display: settle() while {}, ignoring", self.state);
            return;
        }
        self.state = match outcome {
            Ok(text) => DisplayState::Success(text),
            Err(e) => DisplayState::Failure(e.to_string()),
        };
        info!("Display: Loading -> {}", self.state);
    }

    pub fn is_trigger_enabled(&self) -> bool {
        self.state != DisplayState::Loading
    }

    pub fn last_generated(&self) -> Option<&str> {
        match &self.state {
            DisplayState::Success(text) => Some(text),
            _ => None,
        }
    }

    pub fn view(&self) -> DisplayView {
        let pane = match &self.state {
            DisplayState::Idle => Pane::Placeholder {
                title: PLACEHOLDER_TITLE.to_string(),
                hint: PLACEHOLDER_HINT.to_string(),
            },
            DisplayState::Loading => Pane::Loading {
                title: LOADING_TITLE.to_string(),
            },
            DisplayState::Failure(message) => Pane::Error {
                title: ERROR_TITLE.to_string(),
                message: message.clone(),
            },
            // An empty response renders like the initial placeholder.
            DisplayState::Success(text) if text.is_empty() => Pane::Placeholder {
                title: PLACEHOLDER_TITLE.to_string(),
                hint: PLACEHOLDER_HINT.to_string(),
            },
            DisplayState::Success(text) => Pane::Resume {
                text: text.clone(),
                copyable: true,
            },
        };

        let trigger_enabled = self.is_trigger_enabled();
        DisplayView {
            pane,
            trigger_enabled,
            trigger_label: if trigger_enabled {
                TRIGGER_LABEL_IDLE
            } else {
                TRIGGER_LABEL_BUSY
            }
            .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle_with_placeholder() {
        let display = DisplayController::new();
        assert_eq!(display.state(), &DisplayState::Idle);
        let view = display.view();
        assert!(view.trigger_enabled);
        assert_eq!(view.trigger_label, TRIGGER_LABEL_IDLE);
        assert!(matches!(view.pane, Pane::Placeholder { .. }));
    }

    #[test]
    fn test_success_cycle() {
        let mut display = DisplayController::new();
        display.begin_attempt().unwrap();
        assert_eq!(display.state(), &DisplayState::Loading);
        assert!(!display.is_trigger_enabled());
        assert_eq!(display.view().trigger_label, TRIGGER_LABEL_BUSY);

        display.settle(Ok("RESUME_TEXT".to_string()));
        assert_eq!(display.last_generated(), Some("RESUME_TEXT"));
        assert_eq!(
            display.view().pane,
            Pane::Resume {
                text: "RESUME_TEXT".to_string(),
                copyable: true
            }
        );
        assert!(display.is_trigger_enabled());
    }

    #[test]
    fn test_failure_shows_error_message() {
        let mut display = DisplayController::new();
        display.begin_attempt().unwrap();
        display.settle(Err(GenerateError::Generation));

        assert_eq!(
            display.view().pane,
            Pane::Error {
                title: ERROR_TITLE.to_string(),
                message: crate::llm_client::GENERATION_FAILED_MESSAGE.to_string(),
            }
        );
        assert!(display.last_generated().is_none());
    }

    #[test]
    fn test_begin_while_loading_is_rejected() {
        let mut display = DisplayController::new();
        display.begin_attempt().unwrap();
        assert_eq!(display.begin_attempt(), Err(AlreadyLoading));
        assert_eq!(display.state(), &DisplayState::Loading);
    }

    #[test]
    fn test_new_attempt_clears_previous_result() {
        let mut display = DisplayController::new();
        display.begin_attempt().unwrap();
        display.settle(Ok("first".to_string()));
        display.begin_attempt().unwrap();

        assert!(display.last_generated().is_none());
        assert!(matches!(display.view().pane, Pane::Loading { .. }));

        display.settle(Err(GenerateError::Unknown));
        display.begin_attempt().unwrap();
        assert_eq!(display.state(), &DisplayState::Loading);
    }

    #[test]
    fn test_settle_outside_loading_is_ignored() {
        let mut display = DisplayController::new();
        display.settle(Ok("stray".to_string()));
        assert_eq!(display.state(), &DisplayState::Idle);
    }

    #[test]
    fn test_empty_success_renders_placeholder() {
        let mut display = DisplayController::new();
        display.begin_attempt().unwrap();
        display.settle(Ok(String::new()));
        assert!(matches!(display.view().pane, Pane::Placeholder { .. }));
    }

    #[test]
    fn test_view_serializes_with_kind_tag() {
        let value = serde_json::to_value(DisplayController::new().view()).unwrap();
        assert_eq!(value["pane"]["kind"], "placeholder");
        assert_eq!(value["trigger_enabled"], true);
    }
}
