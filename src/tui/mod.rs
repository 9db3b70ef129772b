//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core `Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (auth loading, typing indicator): draws every ~80ms.
//! - **Idle**: sleeps up to 500ms, only redraws on events or resize.
//!
//! ## Background work
//!
//! The generation round trip and the auth subscription run as tokio tasks
//! and report back over an `std::sync::mpsc` channel of `Action`s, drained
//! once per loop iteration. The UI thread never blocks on the network, so
//! scrolling stays responsive while a reply is pending.

pub mod component;
pub mod components;
pub mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;

use crate::auth::{AuthProvider, TokenAuthProvider};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::prompt;
use crate::core::state::App;
use crate::generation::{GenerationProvider, GenerationRequest, OpenRouterProvider};
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, InputEvent, TranscriptState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub transcript: TranscriptState,
    pub input_box: InputBox,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            transcript: TranscriptState::new(),
            input_box: InputBox::new(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Enable Kitty keyboard protocol unconditionally (allows Shift+Enter
        // detection). Terminals that don't support it ignore the flags.
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste
        );
    }
}

/// Build the generation provider from resolved config.
///
/// A missing API key is not fatal here: the provider reports it as a
/// config fault at send time, which surfaces as the standard fallback
/// message like every other fault.
pub fn build_generator(config: &ResolvedConfig) -> Arc<dyn GenerationProvider> {
    let api_key = config.openrouter_api_key.clone().unwrap_or_default();
    Arc::new(OpenRouterProvider::new(
        api_key,
        Some(config.openrouter_base_url.clone()),
    ))
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let generator = build_generator(&config);
    let auth_provider = TokenAuthProvider::from_env();
    let mut app = App::from_config(generator, &config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    // One auth subscription per run; torn down when the watcher task ends.
    spawn_auth_watch(&auth_provider, tx.clone());

    // Animation timer
    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        // Sync InputBox props with App state
        tui.input_box.disabled = app.is_typing;

        let animating =
            app.is_typing || matches!(app.auth, crate::core::state::AuthPhase::Loading);
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            let spinner_frame = (elapsed * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for tui_event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // A submit earlier in this drain may have raised the typing
            // flag; keep the input surface in sync before dispatching.
            tui.input_box.disabled = app.is_typing;

            match tui_event {
                // Resize just needs a redraw (already flagged above)
                TuiEvent::Resize => {}

                TuiEvent::ForceQuit | TuiEvent::Quit => {
                    if update(&mut app, Action::Quit) == Effect::Quit {
                        should_quit = true;
                    }
                }

                // Scroll events always go to the transcript, even while a
                // reply is pending.
                TuiEvent::ScrollUp
                | TuiEvent::ScrollDown
                | TuiEvent::ScrollPageUp
                | TuiEvent::ScrollPageDown
                | TuiEvent::ScrollToBottom => {
                    tui.transcript.handle_event(&tui_event);
                }

                // Quick actions behave exactly like typing the canned text
                // and submitting it: same entry point, same typing guard.
                TuiEvent::QuickAction(index) => {
                    if app.is_signed_in()
                        && !app.is_typing
                        && let Some(action) = prompt::quick_action(index)
                    {
                        submit(&mut app, action.message.to_string(), &tx);
                    }
                }

                other => {
                    if !app.is_signed_in() {
                        continue;
                    }
                    if let Some(InputEvent::Submit(text)) = tui.input_box.handle_event(&other)
                        && !app.is_typing
                    {
                        submit(&mut app, text, &tx);
                    }
                }
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (auth changes, generation results)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            match update(&mut app, action) {
                Effect::Quit => {
                    should_quit = true;
                    break;
                }
                Effect::SpawnGenerate(text) => spawn_generate(&app, text, tx.clone()),
                Effect::None => {}
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Run a submit through the reducer and execute the resulting effect.
fn submit(app: &mut App, text: String, tx: &mpsc::Sender<Action>) {
    if let Effect::SpawnGenerate(text) = update(app, Action::Submit(text)) {
        spawn_generate(app, text, tx.clone());
    }
}

/// Forward auth state emissions into the action channel. The subscription
/// lives inside the task and is dropped (unsubscribing) when the channel
/// closes or the stream ends.
fn spawn_auth_watch(provider: &dyn AuthProvider, tx: mpsc::Sender<Action>) {
    info!("Subscribing to auth provider '{}'", provider.name());
    let mut subscription = provider.subscribe();
    tokio::spawn(async move {
        while let Some(state) = subscription.next().await {
            if tx.send(Action::AuthChanged(state)).is_err() {
                warn!("Failed to forward auth state: receiver dropped");
                return;
            }
        }
        debug!("Auth stream ended");
    });
}

/// One generation round trip: build the persona prompt around the user's
/// literal text, call the provider, report the outcome as a single action.
fn spawn_generate(app: &App, user_text: String, tx: mpsc::Sender<Action>) {
    info!("Spawning generation request");

    // Clone what we need for the async task
    let generator = app.generator.clone();
    let model = app.model_name.clone();
    let max_output_tokens = app.max_output_tokens;

    tokio::spawn(async move {
        let full_prompt = prompt::build_prompt(&user_text);
        let request = GenerationRequest {
            prompt: &full_prompt,
            model: &model,
            max_output_tokens,
        };
        let result = generator.generate(request).await;
        if tx.send(Action::ResponseReceived(result)).is_err() {
            warn!("Failed to send generation result: receiver dropped");
        }
    });
}
