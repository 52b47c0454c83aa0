use serde::{Deserialize, Serialize};

/// Priority level for a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Display label shown in the priority button/options
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "No Urgency",
            Self::Medium => "Semi-Urgent",
            Self::High => "Urgent",
        }
    }

    /// Next level, wrapping (for cycling through picker options)
    pub fn next(&self) -> Self {
        match self {
            Self::Low => Self::Medium,
            Self::Medium => Self::High,
            Self::High => Self::Low,
        }
    }

    /// Previous level, wrapping
    pub fn prev(&self) -> Self {
        match self {
            Self::Low => Self::High,
            Self::Medium => Self::Low,
            Self::High => Self::Medium,
        }
    }

    /// All levels in picker order (most urgent first, matching the options list)
    pub fn all() -> &'static [Priority] {
        &[Priority::High, Priority::Medium, Priority::Low]
    }
}

/// Display theme for the whole application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    Light,
    Dark,
}

impl Default for Theme {
    fn default() -> Self {
        Self::Light
    }
}

impl Theme {
    /// Flip between light and dark. The only mutation path.
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        };
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Name of the theme a toggle would switch to (for the hint bar)
    pub fn other_name(&self) -> &'static str {
        match self {
            Self::Light => "dark",
            Self::Dark => "light",
        }
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    AddingTask,
}

/// Which sub-picker of the add-task form is active.
/// A single value, so the date and priority pickers can never be open at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivePicker {
    None,
    Date,
    Priority,
}

impl ActivePicker {
    /// Cycle focus: description input -> date picker -> priority picker -> back
    pub fn next(&self) -> Self {
        match self {
            Self::None => Self::Date,
            Self::Date => Self::Priority,
            Self::Priority => Self::None,
        }
    }
}
