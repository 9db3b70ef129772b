//! # Core Application Logic
//!
//! This module contains Bedside's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`message`]: The `Message` model — one chat turn
//! - [`state`]: The `App` struct — all application state in one place
//! - [`action`]: The `Action` enum and `update()` — the conversation
//!   controller's send lifecycle
//! - [`prompt`]: Persona template and hospital contact literals
//! - [`config`]: Provider settings with layered overrides

pub mod action;
pub mod config;
pub mod message;
pub mod prompt;
pub mod state;
