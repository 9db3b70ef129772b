//! # Actions
//!
//! Everything that can happen in Bedside becomes an `Action`.
//! User presses Enter? That's `Action::Submit`.
//! The generation call finishes? That's `Action::ResponseReceived(result)`.
//!
//! The `update()` function applies an action to the current state and
//! returns an `Effect` for the caller to execute. No I/O here — the TUI
//! layer spawns the tasks an effect asks for.
//!
//! ```text
//! State + Action  →  update()  →  Effect
//! ```
//!
//! The send lifecycle (the conversation controller) lives entirely in this
//! file: `Submit` appends the user message and raises the typing flag;
//! `ResponseReceived` appends the reply (or the fixed fallback on any
//! fault) and clears the flag. Because the outcome arrives as a `Result`
//! inside a single action, the flag is cleared on both paths by
//! construction — there is no cleanup block to forget.

use log::warn;

use crate::auth::AuthState;
use crate::core::message::Message;
use crate::core::prompt;
use crate::core::state::{App, AuthPhase};
use crate::generation::GenerationError;

#[derive(Debug)]
pub enum Action {
    /// One emission from the auth provider's state stream.
    AuthChanged(AuthState),
    /// Send the given text. Callers guarantee it is trimmed and non-empty;
    /// the input surface enforces this, not the controller.
    Submit(String),
    /// Outcome of the in-flight generation call.
    ResponseReceived(Result<String, GenerationError>),
    Quit,
}

/// Side effects requested by `update()`, executed by the event loop.
#[derive(Debug, PartialEq)]
pub enum Effect {
    None,
    /// Spawn a generation round trip for the given user text.
    SpawnGenerate(String),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::AuthChanged(state) => {
            app.auth = phase_from(state);
            // The welcome message goes in exactly once: on the first
            // authenticated state with an empty transcript.
            if app.is_signed_in() && app.messages.is_empty() {
                app.messages
                    .push(Message::assistant(prompt::WELCOME_MESSAGE));
            }
            Effect::None
        }
        Action::Submit(text) => {
            // The user's turn is visible immediately — no waiting on the
            // network round trip.
            app.messages.push(Message::user(text.clone()));
            app.is_typing = true;
            Effect::SpawnGenerate(text)
        }
        Action::ResponseReceived(result) => {
            let content = match result {
                Ok(text) => text,
                Err(e) => {
                    // Logged for operators; the patient only ever sees the
                    // fallback text.
                    warn!("Generation call failed: {e}");
                    prompt::FALLBACK_MESSAGE.to_string()
                }
            };
            app.messages.push(Message::assistant(content));
            app.is_typing = false;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

/// Maps a raw provider emission onto the gate's three exclusive states.
/// A loading emission wins regardless of any user value it carries.
fn phase_from(state: AuthState) -> AuthPhase {
    if state.is_loading {
        AuthPhase::Loading
    } else {
        match state.user {
            Some(identity) => AuthPhase::SignedIn(identity),
            None => AuthPhase::SignedOut,
        }
    }
}
