use crate::domain::{Priority, Theme};
use ratatui::style::{Color, Modifier, Style};

/// Default text style
pub fn default_style(theme: Theme) -> Style {
    if theme.is_dark() {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Black)
    }
}

/// Screen background style
pub fn background_style(theme: Theme) -> Style {
    if theme.is_dark() {
        Style::default().bg(Color::Rgb(46, 46, 46))
    } else {
        Style::default().bg(Color::White)
    }
}

/// Selected row highlight style
pub fn selected_style(theme: Theme) -> Style {
    if theme.is_dark() {
        Style::default()
            .fg(Color::Black)
            .bg(Color::LightCyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::White)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD)
    }
}

/// Completed task style (struck through, muted)
pub fn completed_style(theme: Theme) -> Style {
    let fg = if theme.is_dark() {
        Color::DarkGray
    } else {
        Color::Gray
    };
    Style::default().fg(fg).add_modifier(Modifier::CROSSED_OUT)
}

/// Completion bubble style for finished tasks
pub fn bubble_done_style(_theme: Theme) -> Style {
    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
}

/// Due date metadata style
pub fn due_date_style(theme: Theme) -> Style {
    if theme.is_dark() {
        Style::default().fg(Color::Gray)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Priority marker style: red for urgent, amber for semi-urgent, grey otherwise
pub fn priority_style(priority: Priority, theme: Theme) -> Style {
    match priority {
        Priority::High => Style::default().fg(Color::Red),
        Priority::Medium => Style::default().fg(Color::Yellow),
        Priority::Low => {
            if theme.is_dark() {
                Style::default().fg(Color::Gray)
            } else {
                Style::default().fg(Color::DarkGray)
            }
        }
    }
}

/// Title style for panes
pub fn title_style(theme: Theme) -> Style {
    let fg = if theme.is_dark() {
        Color::Cyan
    } else {
        Color::Blue
    };
    Style::default().fg(fg).add_modifier(Modifier::BOLD)
}

/// Border style
pub fn border_style(theme: Theme) -> Style {
    if theme.is_dark() {
        Style::default().fg(Color::Gray)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Form overlay background style
pub fn form_bg_style(theme: Theme) -> Style {
    if theme.is_dark() {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    } else {
        Style::default().bg(Color::Rgb(240, 240, 240)).fg(Color::Black)
    }
}

/// Form field label / accent style
pub fn form_accent_style(_theme: Theme) -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Active form field highlight style
pub fn form_active_style(theme: Theme) -> Style {
    title_style(theme).add_modifier(Modifier::UNDERLINED)
}

/// Keybinding hint style
pub fn hint_style(theme: Theme) -> Style {
    if theme.is_dark() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Gray)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes_differ_by_theme() {
        assert_ne!(default_style(Theme::Light), default_style(Theme::Dark));
        assert_ne!(background_style(Theme::Light), background_style(Theme::Dark));
        assert_ne!(selected_style(Theme::Light), selected_style(Theme::Dark));
    }

    #[test]
    fn test_priority_colors() {
        let high = priority_style(Priority::High, Theme::Light);
        let medium = priority_style(Priority::Medium, Theme::Light);
        assert_eq!(high.fg, Some(Color::Red));
        assert_eq!(medium.fg, Some(Color::Yellow));
    }

    #[test]
    fn test_completed_style_is_struck_through() {
        let style = completed_style(Theme::Dark);
        assert!(style.add_modifier.contains(Modifier::CROSSED_OUT));
    }
}
