//! Frame layout and the three exclusive authentication views.
//!
//! Exactly one of these renders per frame, mirroring the gate's contract:
//! loading, sign-in prompt, or the full conversation UI. The loading and
//! sign-in views mount none of the conversation components.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::core::state::{App, AuthPhase};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{QUICK_ACTIONS_HEIGHT, QuickActionsBar, TitleBar, Transcript};

const SPINNER_FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    let area = frame.area();
    match app.auth {
        AuthPhase::Loading => draw_loading_view(frame, area, spinner_frame),
        AuthPhase::SignedOut => draw_sign_in_view(frame, area),
        AuthPhase::SignedIn(_) => draw_conversation(frame, app, tui, spinner_frame),
    }
}

fn draw_conversation(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};

    let input_height = tui.input_box.calculate_height(frame.area().width);
    let layout = Layout::vertical([
        Length(1),
        Min(0),
        Length(QUICK_ACTIONS_HEIGHT),
        Length(input_height),
    ]);
    let [title_area, transcript_area, actions_area, input_area] = layout.areas(frame.area());

    TitleBar::new(app.model_name.clone(), app.status_message.clone()).render(frame, title_area);

    Transcript {
        state: &mut tui.transcript,
        messages: &app.messages,
        is_typing: app.is_typing,
        spinner_frame,
    }
    .render(frame, transcript_area);

    QuickActionsBar {
        disabled: app.is_typing,
    }
    .render(frame, actions_area);

    tui.input_box.render(frame, input_area);
}

fn draw_loading_view(frame: &mut Frame, area: Rect, spinner_frame: usize) {
    let spinner = SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()];
    let [center] = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(area);
    frame.render_widget(
        Paragraph::new(format!("{spinner} Loading..."))
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        center,
    );
}

fn draw_sign_in_view(frame: &mut Frame, area: Rect) {
    let [v_center] = Layout::vertical([Constraint::Length(6)])
        .flex(Flex::Center)
        .areas(area);
    let [card] = Layout::horizontal([Constraint::Max(50)])
        .flex(Flex::Center)
        .areas(v_center);

    frame.render_widget(
        Paragraph::new(
            "Bedside Assistant\n\nPlease sign in to continue.\nSet BEDSIDE_AUTH_TOKEN and restart.",
        )
        .block(Block::bordered())
        .alignment(Alignment::Center),
        card,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthState;
    use crate::core::action::{Action, update};
    use crate::core::prompt;
    use crate::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered_text(app: &App) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut tui = TuiState::new();
        terminal
            .draw(|f| draw_ui(f, app, &mut tui, 0))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn signed_in() -> AuthState {
        AuthState {
            user: Some(crate::auth::Identity {
                id: "p".to_string(),
                display_name: None,
            }),
            is_loading: false,
        }
    }

    #[test]
    fn test_loading_view_mounts_nothing_else() {
        let app = test_app();
        let text = rendered_text(&app);
        assert!(text.contains("Loading..."));
        assert!(!text.contains("Bedside Assistant |"));
        assert!(!text.contains("[F1]"));
    }

    #[test]
    fn test_sign_in_view_mounts_no_conversation_ui() {
        let mut app = test_app();
        update(
            &mut app,
            Action::AuthChanged(AuthState {
                user: None,
                is_loading: false,
            }),
        );
        let text = rendered_text(&app);
        assert!(text.contains("Please sign in to continue."));
        assert!(!text.contains("[F1]"));
        assert!(!text.contains("Type your message here..."));
    }

    #[test]
    fn test_conversation_view_shows_welcome_and_controls() {
        let mut app = test_app();
        update(&mut app, Action::AuthChanged(signed_in()));
        let text = rendered_text(&app);
        assert!(text.contains("hospital assistant"));
        assert!(text.contains("[F1] Schedule Appointment"));
        assert!(text.contains("Type your message here..."));
    }

    #[test]
    fn test_typing_state_freezes_input_surface() {
        let mut app = test_app();
        update(&mut app, Action::AuthChanged(signed_in()));
        update(&mut app, Action::Submit("hello".to_string()));

        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut tui = TuiState::new();
        tui.input_box.disabled = app.is_typing;
        terminal
            .draw(|f| draw_ui(f, &app, &mut tui, 0))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Waiting for reply..."));
    }

    #[test]
    fn test_fallback_reply_is_visible() {
        use crate::generation::GenerationError;

        let mut app = test_app();
        update(&mut app, Action::AuthChanged(signed_in()));
        update(&mut app, Action::Submit("hi".to_string()));
        update(
            &mut app,
            Action::ResponseReceived(Err(GenerationError::Network("down".to_string()))),
        );

        let text = rendered_text(&app);
        assert!(text.contains(prompt::MAIN_PHONE));
    }
}
