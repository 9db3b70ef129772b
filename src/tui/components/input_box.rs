//! # InputBox Component
//!
//! The free-text draft surface.
//!
//! ## Responsibilities
//!
//! - Capture text input (chars, paste, backspace, cursor movement)
//! - Handle submission (Enter); Shift+Enter arrives as a plain `'\n'`
//! - Refuse everything while `disabled` (a reply is pending) — the draft
//!   is left untouched and no submit event is produced
//!
//! ## Submission contract
//!
//! A `Submit` event fires only when the trimmed draft is non-empty and the
//! box is enabled. The emitted text is the trimmed draft; the buffer is
//! cleared on success and untouched on rejection.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Draft lines shown before the box stops growing.
const MAX_VISIBLE_LINES: u16 = 5;
/// Top + bottom border.
const VERTICAL_OVERHEAD: u16 = 2;

const PLACEHOLDER: &str = "Type your message here...";

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User submitted the trimmed draft (Enter pressed)
    Submit(String),
    /// Draft content or cursor changed
    ContentChanged,
}

pub struct InputBox {
    /// Draft buffer (internal state)
    pub buffer: String,
    /// True while a generation request is in flight (prop from App state)
    pub disabled: bool,
    /// Byte offset of the cursor within `buffer`, always on a char boundary
    cursor: usize,
}

impl Default for InputBox {
    fn default() -> Self {
        Self::new()
    }
}

impl InputBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            disabled: false,
            cursor: 0,
        }
    }

    /// Required height for the current draft, clamped to the viewport limit.
    pub fn calculate_height(&self, width: u16) -> u16 {
        let content_lines = wrapped_line_count(&self.buffer, inner_width(width));
        content_lines.min(MAX_VISIBLE_LINES) + VERTICAL_OVERHEAD
    }
}

fn inner_width(width: u16) -> u16 {
    width.saturating_sub(2)
}

/// Line count of `text` wrapped to `width`, newlines preserved.
fn wrapped_line_count(text: &str, width: u16) -> u16 {
    if width == 0 {
        return 1;
    }
    text.split('\n')
        .map(|line| {
            if line.is_empty() {
                1
            } else {
                textwrap::wrap(line, width as usize).len() as u16
            }
        })
        .sum::<u16>()
        .max(1)
}

fn prev_char_boundary(s: &str, pos: usize) -> usize {
    s[..pos]
        .chars()
        .next_back()
        .map(|c| pos - c.len_utf8())
        .unwrap_or(0)
}

fn next_char_boundary(s: &str, pos: usize) -> usize {
    s[pos..]
        .chars()
        .next()
        .map(|c| pos + c.len_utf8())
        .unwrap_or(s.len())
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<InputEvent> {
        // The whole surface is frozen while a reply is pending.
        if self.disabled {
            return None;
        }

        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(data) => {
                self.buffer.insert_str(self.cursor, data);
                self.cursor += data.len();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                if self.cursor == 0 {
                    return None;
                }
                let prev = prev_char_boundary(&self.buffer, self.cursor);
                self.buffer.remove(prev);
                self.cursor = prev;
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::CursorLeft => {
                if self.cursor == 0 {
                    return None;
                }
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::CursorRight => {
                if self.cursor >= self.buffer.len() {
                    return None;
                }
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Submit => {
                let trimmed = self.buffer.trim();
                if trimmed.is_empty() {
                    return None;
                }
                let text = trimmed.to_string();
                self.buffer.clear();
                self.cursor = 0;
                Some(InputEvent::Submit(text))
            }
            _ => None,
        }
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let (title, border_style) = if self.disabled {
            (
                " Waiting for reply... ",
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::DIM),
            )
        } else {
            (" Message ", Style::default().fg(Color::Cyan))
        };

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(PLACEHOLDER).style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(self.buffer.as_str())
        };

        frame.render_widget(
            paragraph
                .block(Block::bordered().title(title).border_style(border_style))
                .wrap(Wrap { trim: false }),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn type_text(input: &mut InputBox, text: &str) {
        for c in text.chars() {
            input.handle_event(&TuiEvent::InputChar(c));
        }
    }

    #[test]
    fn test_submit_trims_and_clears_draft() {
        let mut input = InputBox::new();
        type_text(&mut input, "  hello there  ");

        let event = input.handle_event(&TuiEvent::Submit);
        assert_eq!(event, Some(InputEvent::Submit("hello there".to_string())));
        assert!(input.buffer.is_empty());
    }

    #[test]
    fn test_whitespace_only_draft_is_not_submitted() {
        let mut input = InputBox::new();
        type_text(&mut input, "   \n  ");

        assert_eq!(input.handle_event(&TuiEvent::Submit), None);
        // Rejection leaves the draft untouched.
        assert_eq!(input.buffer, "   \n  ");
    }

    #[test]
    fn test_empty_draft_is_not_submitted() {
        let mut input = InputBox::new();
        assert_eq!(input.handle_event(&TuiEvent::Submit), None);
    }

    #[test]
    fn test_disabled_blocks_everything() {
        let mut input = InputBox::new();
        type_text(&mut input, "draft");
        input.disabled = true;

        assert_eq!(input.handle_event(&TuiEvent::Submit), None);
        assert_eq!(input.handle_event(&TuiEvent::InputChar('x')), None);
        assert_eq!(input.handle_event(&TuiEvent::Backspace), None);
        assert_eq!(input.buffer, "draft");
    }

    #[test]
    fn test_newline_char_extends_draft() {
        // Shift+Enter arrives from the event layer as InputChar('\n')
        let mut input = InputBox::new();
        type_text(&mut input, "line one");
        input.handle_event(&TuiEvent::InputChar('\n'));
        type_text(&mut input, "line two");

        assert_eq!(input.buffer, "line one\nline two");
    }

    #[test]
    fn test_backspace_respects_char_boundaries() {
        let mut input = InputBox::new();
        type_text(&mut input, "héllo");
        for _ in 0..4 {
            input.handle_event(&TuiEvent::Backspace);
        }
        assert_eq!(input.buffer, "h");
    }

    #[test]
    fn test_cursor_insertion_mid_draft() {
        let mut input = InputBox::new();
        type_text(&mut input, "ac");
        input.handle_event(&TuiEvent::CursorLeft);
        input.handle_event(&TuiEvent::InputChar('b'));
        assert_eq!(input.buffer, "abc");
    }

    #[test]
    fn test_paste_preserves_newlines() {
        let mut input = InputBox::new();
        input.handle_event(&TuiEvent::Paste("a\nb".to_string()));
        assert_eq!(input.buffer, "a\nb");
    }

    #[test]
    fn test_height_grows_with_newlines_and_clamps() {
        let mut input = InputBox::new();
        assert_eq!(input.calculate_height(40), 1 + VERTICAL_OVERHEAD);

        input.buffer = "a\nb\nc".to_string();
        assert_eq!(input.calculate_height(40), 3 + VERTICAL_OVERHEAD);

        input.buffer = "x\n".repeat(20);
        assert_eq!(
            input.calculate_height(40),
            MAX_VISIBLE_LINES + VERTICAL_OVERHEAD
        );
    }

    #[test]
    fn test_render_placeholder_and_disabled_title() {
        let backend = TestBackend::new(40, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut input = InputBox::new();

        terminal.draw(|f| input.render(f, f.area())).unwrap();
        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Type your message here..."));

        input.disabled = true;
        terminal.draw(|f| input.render(f, f.area())).unwrap();
        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Waiting for reply..."));
    }
}
