//! # TitleBar Component
//!
//! Single-line header: application name, the support tagline, and a
//! transient status. Stateless — all fields are props from App state.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

use crate::tui::component::Component;

pub struct TitleBar {
    pub model_name: String,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(model_name: String, status_message: String) -> Self {
        Self {
            model_name,
            status_message,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title_text = if self.status_message.is_empty() {
            format!("Bedside Assistant | 24/7 Patient Support ({})", self.model_name)
        } else {
            format!(
                "Bedside Assistant | 24/7 Patient Support ({}) | {}",
                self.model_name, self.status_message
            )
        };
        frame.render_widget(Span::raw(title_text), area);
    }
}
