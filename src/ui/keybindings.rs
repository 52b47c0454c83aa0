use crate::app::AppState;
use crate::domain::UiMode;
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, app: &AppState, area: Rect) {
    let hints = match app.ui_mode {
        UiMode::Normal => Line::from(vec![
            Span::raw(" ↑/↓ select   "),
            Span::raw("Enter/Space done   "),
            Span::raw("x delete   "),
            Span::raw("a add   "),
            Span::raw(format!("t {} mode   ", app.theme.other_name())),
            Span::raw("q quit"),
        ]),
        UiMode::AddingTask => Line::from(vec![
            Span::raw(" type description   "),
            Span::raw("Tab field   "),
            Span::raw("Enter add   "),
            Span::raw("Esc close"),
        ]),
    };

    let paragraph = Paragraph::new(hints).style(hint_style(app.theme));
    f.render_widget(paragraph, area);
}
