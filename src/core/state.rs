//! # Application State
//!
//! Core business state for Bedside. This module contains domain state only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── generator: Arc<dyn GenerationProvider>  // text-generation service
//! ├── messages: Vec<Message>        // the transcript, append-only
//! ├── is_typing: bool               // generation request in flight
//! ├── auth: AuthPhase               // loading / signed out / signed in
//! ├── status_message: String        // title bar text
//! ├── model_name: String            // current model
//! └── max_output_tokens: u32        // reply length bound
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::sync::Arc;

use crate::auth::Identity;
use crate::core::message::Message;
use crate::core::prompt;
use crate::generation::GenerationProvider;

/// The three exclusive states of the authentication gate.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthPhase {
    Loading,
    SignedOut,
    SignedIn(Identity),
}

pub struct App {
    pub generator: Arc<dyn GenerationProvider>,
    /// Append-only during a session: entries are never edited or removed.
    pub messages: Vec<Message>,
    /// True from the moment a send begins until its outcome is appended.
    pub is_typing: bool,
    pub auth: AuthPhase,
    pub status_message: String,
    pub model_name: String,
    pub max_output_tokens: u32,
}

impl App {
    pub fn new(generator: Arc<dyn GenerationProvider>, model_name: String) -> Self {
        Self {
            generator,
            messages: Vec::new(),
            is_typing: false,
            auth: AuthPhase::Loading,
            status_message: String::from("Online"),
            model_name,
            max_output_tokens: prompt::MAX_OUTPUT_TOKENS,
        }
    }

    pub fn from_config(
        generator: Arc<dyn GenerationProvider>,
        config: &crate::core::config::ResolvedConfig,
    ) -> Self {
        Self::new(generator, config.model_name.clone())
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self.auth, AuthPhase::SignedIn(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert!(app.messages.is_empty());
        assert!(!app.is_typing);
        assert_eq!(app.auth, AuthPhase::Loading);
        assert_eq!(app.model_name, "test-model");
        assert_eq!(app.max_output_tokens, prompt::MAX_OUTPUT_TOKENS);
    }
}
