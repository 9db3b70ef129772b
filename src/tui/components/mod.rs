//! # TUI Components
//!
//! Components follow two patterns, as in the rest of the adapter:
//!
//! - **Stateless (props-based)**: `TitleBar`, `MessageBubble`,
//!   `TypingIndicator`, `QuickActionsBar` — created fresh each frame with
//!   the data they render.
//! - **Stateful (event-driven)**: `InputBox` (draft buffer),
//!   `TranscriptState` (scroll position) — persisted in `TuiState` and fed
//!   low-level `TuiEvent`s.
//!
//! Each component file contains its state, events, rendering, and tests.
//! Components never read `App` directly; dependencies arrive as props.

pub mod input_box;
pub mod message;
pub mod quick_actions;
pub mod title_bar;
pub mod transcript;
pub mod typing_indicator;

pub use input_box::{InputBox, InputEvent};
pub use quick_actions::{QUICK_ACTIONS_HEIGHT, QuickActionsBar};
pub use title_bar::TitleBar;
pub use transcript::{Transcript, TranscriptState};
