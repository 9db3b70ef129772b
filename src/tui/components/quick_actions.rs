//! # QuickActionsBar Component
//!
//! One-line menu of the four canned prompts, bound to F1–F4. Purely
//! presentational: the event loop resolves a function key to its prompt
//! via [`crate::core::prompt::quick_action`] and routes the literal text
//! through the same submit path as typed input.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::prompt::QUICK_ACTIONS;
use crate::tui::component::Component;

pub const QUICK_ACTIONS_HEIGHT: u16 = 1;

pub struct QuickActionsBar {
    /// Dimmed while a reply is pending, matching the frozen input box.
    pub disabled: bool,
}

impl Component for QuickActionsBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let (key_style, label_style) = if self.disabled {
            let dim = Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM);
            (dim, dim)
        } else {
            (
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                Style::default().fg(Color::Gray),
            )
        };

        let mut spans = Vec::new();
        for (i, action) in QUICK_ACTIONS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(format!("[F{}] ", i + 1), key_style));
            spans.push(Span::styled(action.label, label_style));
        }

        frame.render_widget(Line::from(spans), area);
    }
}
