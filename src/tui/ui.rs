use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{Menu, NoticeBar, TitleBar, TodoTable};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

/// Screen layout, top to bottom: banner, table, menu or prompt, notice.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(3), Min(0), Length(3), Length(1)]);
    let [title_area, table_area, input_area, notice_area] = layout.areas(frame.area());

    TitleBar::new(app.todos.len(), app.todos.capacity(), tui.data_file.clone())
        .with_splash(tui.show_splash)
        .render(frame, title_area);

    TodoTable::new(app.todos.list()).render(frame, table_area);

    match tui.prompt.as_mut() {
        Some(prompt) => prompt.render(frame, input_area),
        None => Menu.render(frame, input_area),
    }

    NoticeBar::new(app.notice.as_ref()).render(frame, notice_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::PromptKind;
    use crate::core::state::Notice;
    use crate::test_support::list_with;
    use crate::tui::components::Prompt;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen_text(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draw_ui_menu_mode() {
        let mut app = App::new(list_with(&["Buy milk"]));
        app.notice = Some(Notice::info("Todo added successfully!"));
        let mut tui = TuiState::new("todos.dat".to_string());

        let text = screen_text(&app, &mut tui);
        assert!(text.contains("TODO MANAGER 3000"));
        assert!(text.contains("Buy milk"));
        assert!(text.contains("[Q]uit program"));
        assert!(text.contains("Todo added successfully!"));
    }

    #[test]
    fn test_draw_ui_prompt_replaces_menu() {
        let app = App::new(list_with(&[]));
        let mut tui = TuiState::new("todos.dat".to_string());
        tui.prompt = Some(Prompt::new(PromptKind::Title));

        let text = screen_text(&app, &mut tui);
        assert!(text.contains("Enter todo description"));
        assert!(!text.contains("[Q]uit program"));
    }

    #[test]
    fn test_draw_ui_splash_on_first_frame_only() {
        let app = App::new(list_with(&[]));
        let mut tui = TuiState::new("todos.dat".to_string());
        assert!(screen_text(&app, &mut tui).contains("Initializing Todo Manager..."));

        tui.show_splash = false;
        assert!(!screen_text(&app, &mut tui).contains("Initializing Todo Manager..."));
    }
}
