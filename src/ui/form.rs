use crate::app::AppState;
use crate::domain::{ActivePicker, Priority, Theme};
use crate::ui::{
    layout::create_form_area,
    styles::{form_accent_style, form_active_style, form_bg_style, priority_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the add-task form overlay (bottom-anchored, like the original's
/// bottom sheet)
pub fn render_form(f: &mut Frame, app: &AppState, area: Rect) {
    let theme = app.theme;

    if let Some(form) = &app.form {
        let form_area = create_form_area(area);

        // Clear the area behind the form
        f.render_widget(Clear, form_area);

        let mut lines = Vec::new();

        // Description input
        lines.push(Line::raw(""));
        let desc_label = if form.picker == ActivePicker::None {
            Span::styled("Task:", form_active_style(theme))
        } else {
            Span::raw("Task:")
        };
        lines.push(Line::from(desc_label));
        lines.push(Line::from(vec![
            Span::raw("> "),
            Span::styled(form.description.clone(), form_accent_style(theme)),
            if form.picker == ActivePicker::None {
                Span::styled("█", form_accent_style(theme)) // Cursor
            } else {
                Span::raw("")
            },
        ]));
        lines.push(Line::raw(""));

        // Due date row
        lines.push(date_row(form.due_date, form.picker, theme));

        // Priority row (plus options while the picker is open)
        lines.push(priority_row(form.priority, form.picker, theme));
        if form.picker == ActivePicker::Priority {
            for (idx, &level) in Priority::all().iter().enumerate() {
                lines.push(priority_option(idx, level, form.priority, theme));
            }
        }

        lines.push(Line::raw(""));
        lines.push(Line::raw(
            "Tab next field  ·  Enter add  ·  Esc close",
        ));

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(" Add Task ", form_accent_style(theme)))
                    .style(form_bg_style(theme)),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, form_area);
    }
}

fn date_row(due_date: chrono::NaiveDate, picker: ActivePicker, theme: Theme) -> Line<'static> {
    let label = if picker == ActivePicker::Date {
        Span::styled("Due Date:", form_active_style(theme))
    } else {
        Span::raw("Due Date:")
    };

    let mut spans = vec![
        label,
        Span::raw(" "),
        Span::styled(due_date.format("%Y-%m-%d").to_string(), form_accent_style(theme)),
    ];

    if picker == ActivePicker::Date {
        spans.push(Span::raw("   ←/→ day  ↑/↓ week"));
    }

    Line::from(spans)
}

fn priority_row(priority: Priority, picker: ActivePicker, theme: Theme) -> Line<'static> {
    let label = if picker == ActivePicker::Priority {
        Span::styled("Priority:", form_active_style(theme))
    } else {
        Span::raw("Priority:")
    };

    Line::from(vec![
        label,
        Span::raw(" "),
        Span::styled(priority.label(), priority_style(priority, theme)),
    ])
}

fn priority_option(
    idx: usize,
    level: Priority,
    current: Priority,
    theme: Theme,
) -> Line<'static> {
    let marker = if level == current { "→" } else { " " };
    Line::from(vec![
        Span::raw(format!("  {} ", marker)),
        Span::styled(format!("[{}] ", idx + 1), form_accent_style(theme)),
        Span::styled(level.label(), priority_style(level, theme)),
    ])
}
