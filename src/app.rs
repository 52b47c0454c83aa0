use crate::domain::{order_for_display, ActivePicker, Priority, TaskStore, Theme, UiMode};
use chrono::{Days, Local, NaiveDate};
use uuid::Uuid;

/// Draft state for the add-task form
///
/// Holds uncommitted input until submit hands it to the task store. A
/// successful submit resets the drafts but leaves the form open, so several
/// tasks can be added in a row without reopening it.
#[derive(Debug, Clone)]
pub struct TaskFormState {
    pub description: String,
    pub due_date: NaiveDate,
    pub priority: Priority,
    pub picker: ActivePicker,
}

impl TaskFormState {
    fn new() -> Self {
        Self {
            description: String::new(),
            due_date: Local::now().date_naive(),
            priority: Priority::Low,
            picker: ActivePicker::None,
        }
    }

    /// Back to defaults: empty description, due today, low priority, pickers closed
    fn reset_drafts(&mut self) {
        *self = Self::new();
    }
}

/// Main application state
pub struct AppState {
    pub store: TaskStore,
    pub theme: Theme,
    pub ui_mode: UiMode,
    pub form: Option<TaskFormState>,
    /// Cursor position into the display-ordered list
    pub selected_index: usize,
    pub use_emoji: bool,
}

impl AppState {
    pub fn new(use_emoji: bool) -> Self {
        Self {
            store: TaskStore::new(),
            theme: Theme::default(),
            ui_mode: UiMode::Normal,
            form: None,
            selected_index: 0,
            use_emoji,
        }
    }

    /// Current display order (indices into the store, due date ascending)
    pub fn display_order(&self) -> Vec<usize> {
        order_for_display(self.store.tasks())
    }

    /// Id of the task under the cursor, if any
    pub fn selected_task_id(&self) -> Option<Uuid> {
        let order = self.display_order();
        order
            .get(self.selected_index)
            .map(|&i| self.store.tasks()[i].id)
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection down
    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.store.len() {
            self.selected_index += 1;
        }
    }

    /// Keep the cursor on a valid row after a deletion
    fn clamp_selection(&mut self) {
        if self.store.is_empty() {
            self.selected_index = 0;
        } else if self.selected_index >= self.store.len() {
            self.selected_index = self.store.len() - 1;
        }
    }

    /// Toggle completion of the task under the cursor
    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.store.toggle_completion(id);
        }
    }

    /// Delete the task under the cursor
    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.store.delete(id);
            self.clamp_selection();
        }
    }

    /// Flip the display theme
    pub fn toggle_theme(&mut self) {
        self.theme.toggle();
    }

    /// Open the add-task form with fresh drafts
    pub fn open_form(&mut self) {
        self.form = Some(TaskFormState::new());
        self.ui_mode = UiMode::AddingTask;
    }

    /// Close the form, discarding any unsaved drafts
    pub fn close_form(&mut self) {
        self.form = None;
        self.ui_mode = UiMode::Normal;
    }

    /// Submit the form. An empty (trimmed) description is silently ignored
    /// and the drafts are left as they were; on success the drafts reset to
    /// their defaults and the form stays open for the next task.
    pub fn submit_form(&mut self) {
        if let Some(form) = &mut self.form {
            let added = self
                .store
                .add(&form.description, form.due_date, form.priority)
                .is_some();
            if added {
                form.reset_drafts();
            }
        }
    }

    /// Escape inside the form: close the active picker first, then the form
    pub fn form_escape(&mut self) {
        match self.form.as_mut() {
            Some(form) if form.picker != ActivePicker::None => {
                form.picker = ActivePicker::None;
            }
            Some(_) => self.close_form(),
            None => {}
        }
    }

    /// Cycle form focus: description -> date picker -> priority picker
    pub fn form_cycle_picker(&mut self) {
        if let Some(form) = &mut self.form {
            form.picker = form.picker.next();
        }
    }

    /// Type a character into the description draft (only while no picker is active)
    pub fn form_add_char(&mut self, c: char) {
        if let Some(form) = &mut self.form {
            if form.picker == ActivePicker::None {
                form.description.push(c);
            }
        }
    }

    /// Backspace in the description draft
    pub fn form_backspace(&mut self) {
        if let Some(form) = &mut self.form {
            if form.picker == ActivePicker::None {
                form.description.pop();
            }
        }
    }

    /// Step the due-date draft while the date picker is active.
    /// Positive moves later, negative earlier.
    pub fn form_date_step(&mut self, days: i64) {
        if let Some(form) = &mut self.form {
            if form.picker != ActivePicker::Date {
                return;
            }
            form.due_date = if days >= 0 {
                form.due_date
                    .checked_add_days(Days::new(days as u64))
                    .unwrap_or(form.due_date)
            } else {
                form.due_date
                    .checked_sub_days(Days::new(days.unsigned_abs()))
                    .unwrap_or(form.due_date)
            };
        }
    }

    /// Cycle the priority draft while the priority picker is active
    pub fn form_priority_next(&mut self) {
        if let Some(form) = &mut self.form {
            if form.picker == ActivePicker::Priority {
                form.priority = form.priority.next();
            }
        }
    }

    /// Cycle the priority draft backwards while the priority picker is active
    pub fn form_priority_prev(&mut self) {
        if let Some(form) = &mut self.form {
            if form.picker == ActivePicker::Priority {
                form.priority = form.priority.prev();
            }
        }
    }

    /// Pick a priority level and dismiss the options (single-selection,
    /// auto-dismiss, same as the original picker)
    pub fn form_select_priority(&mut self, priority: Priority) {
        if let Some(form) = &mut self.form {
            if form.picker == ActivePicker::Priority {
                form.priority = priority;
                form.picker = ActivePicker::None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn app_with_tasks() -> AppState {
        let mut app = AppState::new(true);
        app.store.add("Later", date(2025, 3, 10), Priority::Low);
        app.store.add("Sooner", date(2025, 3, 1), Priority::High);
        app
    }

    #[test]
    fn test_display_order_follows_due_dates() {
        let app = app_with_tasks();
        let order = app.display_order();
        assert_eq!(app.store.tasks()[order[0]].description, "Sooner");
        assert_eq!(app.store.tasks()[order[1]].description, "Later");
    }

    #[test]
    fn test_selection_tracks_display_order() {
        let app = app_with_tasks();
        // Cursor starts on the first displayed row, which is the earlier-due task
        let id = app.selected_task_id().unwrap();
        assert_eq!(app.store.get(id).unwrap().description, "Sooner");
    }

    #[test]
    fn test_toggle_selected() {
        let mut app = app_with_tasks();
        app.toggle_selected();

        let id = app.selected_task_id().unwrap();
        assert!(app.store.get(id).unwrap().completed);

        app.toggle_selected();
        assert!(!app.store.get(id).unwrap().completed);
    }

    #[test]
    fn test_delete_selected_clamps_cursor() {
        let mut app = app_with_tasks();
        app.move_selection_down();
        assert_eq!(app.selected_index, 1);

        app.delete_selected();
        assert_eq!(app.store.len(), 1);
        assert_eq!(app.selected_index, 0);

        app.delete_selected();
        assert!(app.store.is_empty());
        assert_eq!(app.selected_index, 0);

        // Deleting with nothing selected is a no-op
        app.delete_selected();
        assert!(app.store.is_empty());
    }

    #[test]
    fn test_open_form_resets_drafts() {
        let mut app = AppState::new(true);
        app.open_form();

        let form = app.form.as_ref().unwrap();
        assert_eq!(form.description, "");
        assert_eq!(form.due_date, Local::now().date_naive());
        assert_eq!(form.priority, Priority::Low);
        assert_eq!(form.picker, ActivePicker::None);
        assert_eq!(app.ui_mode, UiMode::AddingTask);
    }

    #[test]
    fn test_submit_empty_description_keeps_form_open() {
        let mut app = AppState::new(true);
        app.open_form();
        app.submit_form();

        assert!(app.form.is_some());
        assert_eq!(app.ui_mode, UiMode::AddingTask);
        assert!(app.store.is_empty());
    }

    #[test]
    fn test_submit_creates_task_and_resets_drafts() {
        let mut app = AppState::new(true);
        app.open_form();
        for c in "Buy milk".chars() {
            app.form_add_char(c);
        }
        app.submit_form();

        assert_eq!(app.store.len(), 1);
        let task = &app.store.tasks()[0];
        assert_eq!(task.description, "Buy milk");
        assert_eq!(task.priority, Priority::Low);
        assert!(!task.completed);

        // Form stays open with fresh drafts
        let form = app.form.as_ref().unwrap();
        assert_eq!(form.description, "");
        assert_eq!(form.priority, Priority::Low);
    }

    #[test]
    fn test_close_form_discards_drafts() {
        let mut app = AppState::new(true);
        app.open_form();
        app.form_add_char('x');
        app.close_form();

        assert!(app.form.is_none());
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.store.is_empty());
    }

    #[test]
    fn test_escape_closes_picker_before_form() {
        let mut app = AppState::new(true);
        app.open_form();
        app.form_cycle_picker();
        assert_eq!(app.form.as_ref().unwrap().picker, ActivePicker::Date);

        app.form_escape();
        assert_eq!(app.form.as_ref().unwrap().picker, ActivePicker::None);

        app.form_escape();
        assert!(app.form.is_none());
    }

    #[test]
    fn test_date_step_requires_active_picker() {
        let mut app = AppState::new(true);
        app.open_form();
        let today = app.form.as_ref().unwrap().due_date;

        // Picker closed: stepping does nothing
        app.form_date_step(1);
        assert_eq!(app.form.as_ref().unwrap().due_date, today);

        app.form_cycle_picker(); // date picker
        app.form_date_step(1);
        assert_eq!(
            app.form.as_ref().unwrap().due_date,
            today.checked_add_days(Days::new(1)).unwrap()
        );

        app.form_date_step(-7);
        assert_eq!(
            app.form.as_ref().unwrap().due_date,
            today.checked_sub_days(Days::new(6)).unwrap()
        );
    }

    #[test]
    fn test_select_priority_dismisses_picker() {
        let mut app = AppState::new(true);
        app.open_form();
        app.form_cycle_picker(); // date
        app.form_cycle_picker(); // priority

        app.form_select_priority(Priority::High);
        let form = app.form.as_ref().unwrap();
        assert_eq!(form.priority, Priority::High);
        assert_eq!(form.picker, ActivePicker::None);
    }

    #[test]
    fn test_typing_only_reaches_description_without_picker() {
        let mut app = AppState::new(true);
        app.open_form();
        app.form_cycle_picker(); // date picker active
        app.form_add_char('x');
        assert_eq!(app.form.as_ref().unwrap().description, "");
    }

    #[test]
    fn test_theme_toggle() {
        let mut app = AppState::new(true);
        assert_eq!(app.theme, Theme::Light);
        app.toggle_theme();
        assert_eq!(app.theme, Theme::Dark);
        app.toggle_theme();
        assert_eq!(app.theme, Theme::Light);
    }
}
