use crate::app::AppState;
use crate::domain::{completion_bubble, priority_marker, Task, Theme};
use crate::ui::styles::{
    border_style, bubble_done_style, completed_style, default_style, due_date_style,
    priority_style, selected_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Render the "My Tasks" list pane
pub fn render_list_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let theme = app.theme;
    let order = app.display_order();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(theme))
        .title(Span::styled(" My Tasks ", title_style(theme)));

    if order.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "  No tasks yet — press 'a' to add one",
            due_date_style(theme),
        )))
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = order
        .iter()
        .enumerate()
        .map(|(row_idx, &task_idx)| {
            let task = &app.store.tasks()[task_idx];
            let line = create_task_line(task, theme, app.use_emoji);
            let style = if row_idx == app.selected_index {
                selected_style(theme)
            } else {
                default_style(theme)
            };

            ListItem::new(line).style(style)
        })
        .collect();

    let list = List::new(items).block(block);
    f.render_widget(list, area);
}

/// Create a single line for a task
/// Format: (✓) Buy milk   2025-03-01 ● Urgent
fn create_task_line(task: &Task, theme: Theme, use_emoji: bool) -> Line<'static> {
    let mut spans = Vec::new();

    // Completion bubble
    let bubble = completion_bubble(task.completed, use_emoji);
    let bubble_style = if task.completed {
        bubble_done_style(theme)
    } else {
        default_style(theme)
    };
    spans.push(Span::styled(format!("{} ", bubble), bubble_style));

    // Description, struck through when completed
    if task.completed {
        spans.push(Span::styled(task.description.clone(), completed_style(theme)));
    } else {
        spans.push(Span::raw(task.description.clone()));
    }

    // Padding
    spans.push(Span::raw("   ".to_string()));

    // Due date
    spans.push(Span::styled(
        task.due_date.format("%Y-%m-%d").to_string(),
        due_date_style(theme),
    ));

    // Priority marker and label
    spans.push(Span::raw(" ".to_string()));
    spans.push(Span::styled(
        format!(
            "{} {}",
            priority_marker(task.priority, use_emoji),
            task.priority.label()
        ),
        priority_style(task.priority, theme),
    ));

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Priority;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn test_task(completed: bool) -> Task {
        Task {
            id: Uuid::new_v4(),
            description: "Buy milk".to_string(),
            due_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            priority: Priority::High,
            completed,
        }
    }

    #[test]
    fn test_create_task_line() {
        let line = create_task_line(&test_task(false), Theme::Light, true);
        let line_str = format!("{:?}", line);

        assert!(line_str.contains("Buy milk"));
        assert!(line_str.contains("2025-03-01"));
        assert!(line_str.contains("Urgent"));
    }

    #[test]
    fn test_completed_task_line_has_checkmark() {
        let line = create_task_line(&test_task(true), Theme::Dark, true);
        let line_str = format!("{:?}", line);
        assert!(line_str.contains("✓"));
    }
}
