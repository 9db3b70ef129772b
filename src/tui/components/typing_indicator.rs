//! # TypingIndicator Component
//!
//! Transient bubble shown at the bottom of the transcript while a
//! generation request is in flight. Cycles three dots off the shared
//! spinner frame counter.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph, Widget};

/// Rendered height: one dot row plus borders.
pub const TYPING_INDICATOR_HEIGHT: u16 = 3;

const DOT_FRAMES: [&str; 3] = ["●", "● ●", "● ● ●"];

#[derive(Clone, Copy)]
pub struct TypingIndicator {
    pub spinner_frame: usize,
}

impl Widget for TypingIndicator {
    fn render(self, area: ratatui::layout::Rect, buf: &mut ratatui::buffer::Buffer) {
        let style = Style::default().fg(Color::DarkGray);
        Paragraph::new(DOT_FRAMES[self.spinner_frame % DOT_FRAMES.len()])
            .block(
                Block::bordered()
                    .title(" assistant ")
                    .border_style(style.add_modifier(Modifier::DIM))
                    .title_style(style),
            )
            .style(style)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_every_frame_renders_a_dot() {
        for frame_index in 0..6 {
            let backend = TestBackend::new(20, TYPING_INDICATOR_HEIGHT);
            let mut terminal = Terminal::new(backend).unwrap();
            terminal
                .draw(|f| {
                    f.render_widget(
                        TypingIndicator {
                            spinner_frame: frame_index,
                        },
                        f.area(),
                    )
                })
                .unwrap();

            let text = terminal
                .backend()
                .buffer()
                .content()
                .iter()
                .map(|c| c.symbol())
                .collect::<String>();
            assert!(text.contains('●'));
        }
    }
}
