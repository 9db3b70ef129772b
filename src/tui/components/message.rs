//! # MessageBubble Component
//!
//! Renders a single transcript entry as a bordered bubble, styled by
//! sender and titled with the role and the hour:minute label.
//!
//! Content is rendered verbatim: newlines are preserved and nothing is
//! trimmed, so whitespace the assistant (or the user) put in a message
//! survives to the screen.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Padding, Paragraph, Widget, Wrap};

use crate::core::message::{Message, Sender};

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Total horizontal space consumed by borders (1 left + 1 right) and padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Total vertical space consumed by borders (1 top + 1 bottom).
const VERTICAL_OVERHEAD: u16 = 2;

/// A transient, stateless bubble: created fresh each frame by the
/// transcript with the message it needs to render.
#[derive(Clone, Copy)]
pub struct MessageBubble<'a> {
    pub message: &'a Message,
}

impl<'a> MessageBubble<'a> {
    /// Predicts the rendered height for a given width without rendering.
    ///
    /// Uses `textwrap` with options matching Ratatui's `Paragraph`
    /// wrapping so the transcript can lay out its scroll view up front.
    /// Each newline-separated line wraps independently — content is
    /// whitespace-preserving, never trimmed.
    pub fn calculate_height(message: &Message, width: u16) -> u16 {
        let content_width = width.saturating_sub(HORIZONTAL_OVERHEAD);
        if content_width == 0 {
            // Terminal too narrow for borders + padding; still occupy a row.
            return 1;
        }

        let options = textwrap::Options::new(content_width as usize)
            .break_words(true)
            .word_separator(textwrap::WordSeparator::AsciiSpace);

        let lines: u16 = message
            .content
            .split('\n')
            .map(|line| {
                if line.is_empty() {
                    1
                } else {
                    textwrap::wrap(line, &options).len() as u16
                }
            })
            .sum();

        lines.max(1) + VERTICAL_OVERHEAD
    }

    fn role_parts(&self) -> (&'static str, Style) {
        match self.message.sender {
            Sender::User => ("you", Style::default().fg(Color::Cyan)),
            Sender::Assistant => ("assistant", Style::default().fg(Color::Green)),
        }
    }
}

impl<'a> Widget for MessageBubble<'a> {
    fn render(self, area: ratatui::layout::Rect, buf: &mut ratatui::buffer::Buffer) {
        let (role, style) = self.role_parts();
        let title = format!(" {} · {} ", role, self.message.time_label());

        Paragraph::new(self.message.content.as_str())
            .block(
                Block::bordered()
                    .title(title)
                    .border_style(style.add_modifier(Modifier::DIM))
                    .title_style(style)
                    .padding(Padding::horizontal(CONTENT_PAD_H)),
            )
            .style(Style::default())
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_includes_borders() {
        let msg = Message::user("Single line");
        assert_eq!(MessageBubble::calculate_height(&msg, 80), 3);
    }

    #[test]
    fn test_height_preserves_blank_lines() {
        // Welcome-style content: text, blank line, text
        let msg = Message::assistant("Hello!\n\nHow can I help?");
        assert_eq!(MessageBubble::calculate_height(&msg, 80), 3 + 2);
    }

    #[test]
    fn test_height_wraps_long_lines() {
        let msg = Message::user("word ".repeat(40));
        let height = MessageBubble::calculate_height(&msg, 40);
        assert!(height > 3);
    }

    #[test]
    fn test_degenerate_width() {
        let msg = Message::user("x");
        assert_eq!(MessageBubble::calculate_height(&msg, 2), 1);
    }

    #[test]
    fn test_render_shows_content_and_time() {
        use ratatui::Terminal;
        use ratatui::backend::TestBackend;

        let backend = TestBackend::new(40, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        let msg = Message::assistant("Take the elevator to level 2.");

        terminal
            .draw(|f| f.render_widget(MessageBubble { message: &msg }, f.area()))
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("assistant"));
        assert!(text.contains("Take the elevator"));
        assert!(text.contains(&msg.time_label()));
    }
}
