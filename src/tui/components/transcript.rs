//! # Transcript Component
//!
//! Scrollable view of the conversation: message bubbles oldest-first,
//! followed by the typing indicator while a reply is pending.
//!
//! ## Auto-scroll
//!
//! The view is pinned to the bottom (`stick_to_bottom`) so new content —
//! a fresh message or the typing indicator appearing — is always brought
//! into view. Scrolling up unpins; scrolling back past the end or pressing
//! End re-pins.
//!
//! ## Architecture
//!
//! `Transcript` is a transient component (created each frame) wrapping
//! `&mut TranscriptState` (persistent scroll state) plus the message list
//! and typing flag as props. Heights are predicted with
//! [`MessageBubble::calculate_height`] so the scroll area can be sized
//! before anything is rendered.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::message::Message;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::message::MessageBubble;
use crate::tui::components::typing_indicator::{TYPING_INDICATOR_HEIGHT, TypingIndicator};
use crate::tui::event::TuiEvent;

/// Scroll state for the transcript. Persisted in the parent `TuiState`.
pub struct TranscriptState {
    pub scroll_state: ScrollViewState,
    /// When true, keep the viewport pinned to the newest content.
    pub stick_to_bottom: bool,
    /// Last known viewport height, updated on render.
    pub viewport_height: u16,
    /// Total content height from the last render pass.
    pub content_height: u16,
}

impl Default for TranscriptState {
    fn default() -> Self {
        Self::new()
    }
}

impl TranscriptState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            stick_to_bottom: true, // Start attached to bottom
            viewport_height: 0,
            content_height: 0,
        }
    }

    fn max_scroll(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    /// Move the offset by `delta` rows, clamped to the content bounds.
    fn scroll_by(&mut self, delta: i32) {
        let current = self.scroll_state.offset();
        let target = (current.y as i32 + delta).clamp(0, self.max_scroll() as i32) as u16;
        self.scroll_state.set_offset(Position {
            x: current.x,
            y: target,
        });
    }

    /// Re-engage auto-scroll if the user has scrolled back to the bottom.
    fn repin_if_at_bottom(&mut self) {
        if self.scroll_state.offset().y >= self.max_scroll() {
            self.stick_to_bottom = true;
        }
    }
}

impl EventHandler for TranscriptState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<()> {
        match event {
            TuiEvent::ScrollUp => {
                self.stick_to_bottom = false;
                self.scroll_by(-1);
                Some(())
            }
            TuiEvent::ScrollDown => {
                self.scroll_by(1);
                self.repin_if_at_bottom();
                Some(())
            }
            TuiEvent::ScrollPageUp => {
                self.stick_to_bottom = false;
                self.scroll_by(-(self.viewport_height as i32));
                Some(())
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_by(self.viewport_height as i32);
                self.repin_if_at_bottom();
                Some(())
            }
            TuiEvent::ScrollToBottom => {
                self.stick_to_bottom = true;
                Some(())
            }
            _ => None,
        }
    }
}

/// Scrollable conversation view, created fresh each frame.
pub struct Transcript<'a> {
    pub state: &'a mut TranscriptState,
    pub messages: &'a [Message],
    pub is_typing: bool,
    pub spinner_frame: usize,
}

impl<'a> Component for Transcript<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // Reserve one column for the scrollbar.
        let content_width = area.width.saturating_sub(1);

        let heights: Vec<u16> = self
            .messages
            .iter()
            .map(|m| MessageBubble::calculate_height(m, content_width))
            .collect();
        let mut total_height: u16 = heights.iter().sum();
        if self.is_typing {
            total_height += TYPING_INDICATOR_HEIGHT;
        }

        self.state.viewport_height = area.height;
        self.state.content_height = total_height;

        // Pin or clamp before handing the offset to the scroll view.
        if self.state.stick_to_bottom {
            self.state.scroll_state.set_offset(Position {
                x: 0,
                y: self.state.max_scroll(),
            });
        } else {
            self.state.scroll_by(0);
        }

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = 0;
        for (message, height) in self.messages.iter().zip(&heights) {
            let rect = Rect::new(0, y_offset, content_width, *height);
            scroll_view.render_widget(MessageBubble { message }, rect);
            y_offset += height;
        }

        if self.is_typing {
            let rect = Rect::new(0, y_offset, content_width, TYPING_INDICATOR_HEIGHT);
            scroll_view.render_widget(
                TypingIndicator {
                    spinner_frame: self.spinner_frame,
                },
                rect,
            );
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}
