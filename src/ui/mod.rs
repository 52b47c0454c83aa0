pub mod form;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod styles;

use crate::app::AppState;
use form::render_form;
use keybindings::render_keybindings;
use layout::create_layout;
use list_pane::render_list_pane;
use ratatui::{widgets::Block, Frame};
use styles::background_style;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();

    // Paint the themed background first
    f.render_widget(Block::default().style(background_style(app.theme)), size);

    let layout = create_layout(size);

    render_keybindings(f, app, layout.keybindings_area);
    render_list_pane(f, app, layout.list_area);

    // Render the add-task form overlay if open
    if app.form.is_some() {
        render_form(f, app, size);
    }
}
