use crate::app::AppState;
use crate::domain::{ActivePicker, Priority, UiMode};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::AddingTask => handle_form_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Navigation
        KeyCode::Up => {
            app.move_selection_up();
            Ok(false)
        }
        KeyCode::Down => {
            app.move_selection_down();
            Ok(false)
        }

        // Toggle completion of the selected task
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.toggle_selected();
            Ok(false)
        }

        // Delete the selected task
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Delete => {
            app.delete_selected();
            Ok(false)
        }

        // Open the add-task form
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.open_form();
            Ok(false)
        }

        // Toggle light/dark theme
        KeyCode::Char('t') | KeyCode::Char('T') => {
            app.toggle_theme();
            Ok(false)
        }

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => Ok(true),

        KeyCode::Esc => Ok(false),

        _ => Ok(false),
    }
}

/// Handle keys in the add-task form
fn handle_form_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    let picker = app
        .form
        .as_ref()
        .map(|f| f.picker)
        .unwrap_or(ActivePicker::None);

    match key.code {
        // Enter confirms the active picker, or submits the form
        KeyCode::Enter => {
            match picker {
                ActivePicker::Priority => {
                    let current = app.form.as_ref().map(|f| f.priority);
                    if let Some(priority) = current {
                        app.form_select_priority(priority);
                    }
                }
                ActivePicker::Date => {
                    // Date is already in the draft; just dismiss the picker
                    app.form_escape();
                }
                ActivePicker::None => app.submit_form(),
            }
            Ok(false)
        }

        // Esc closes the active picker first, then the form
        KeyCode::Esc => {
            app.form_escape();
            Ok(false)
        }

        // Tab cycles focus through the sub-pickers
        KeyCode::Tab => {
            app.form_cycle_picker();
            Ok(false)
        }

        // Date picker: step by day / week
        KeyCode::Left if picker == ActivePicker::Date => {
            app.form_date_step(-1);
            Ok(false)
        }
        KeyCode::Right if picker == ActivePicker::Date => {
            app.form_date_step(1);
            Ok(false)
        }
        KeyCode::Up if picker == ActivePicker::Date => {
            app.form_date_step(-7);
            Ok(false)
        }
        KeyCode::Down if picker == ActivePicker::Date => {
            app.form_date_step(7);
            Ok(false)
        }

        // Priority picker: cycle or select directly
        KeyCode::Up if picker == ActivePicker::Priority => {
            app.form_priority_next();
            Ok(false)
        }
        KeyCode::Down if picker == ActivePicker::Priority => {
            app.form_priority_prev();
            Ok(false)
        }
        KeyCode::Char('1') if picker == ActivePicker::Priority => {
            app.form_select_priority(Priority::High);
            Ok(false)
        }
        KeyCode::Char('2') if picker == ActivePicker::Priority => {
            app.form_select_priority(Priority::Medium);
            Ok(false)
        }
        KeyCode::Char('3') if picker == ActivePicker::Priority => {
            app.form_select_priority(Priority::Low);
            Ok(false)
        }

        // Description editing
        KeyCode::Backspace => {
            app.form_backspace();
            Ok(false)
        }
        KeyCode::Char(c) => {
            app.form_add_char(c);
            Ok(false)
        }

        _ => Ok(false),
    }
}
