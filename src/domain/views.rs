use super::enums::Priority;
use super::task::Task;

/// Compute the display order for the task list: indices into `tasks`,
/// sorted by due date ascending.
///
/// Pure projection over the store's current contents; recomputed from
/// scratch on every render rather than cached. The sort is stable, so
/// tasks sharing a due date keep their relative insertion order and rows
/// do not jump around between re-renders. Completed tasks stay
/// interleaved with active ones.
pub fn order_for_display(tasks: &[Task]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..tasks.len()).collect();
    order.sort_by_key(|&i| tasks[i].due_date);
    order
}

/// Completion bubble for a task row
pub fn completion_bubble(completed: bool, use_emoji: bool) -> &'static str {
    if use_emoji {
        if completed {
            "(✓)"
        } else {
            "( )"
        }
    } else {
        if completed {
            "[x]"
        } else {
            "[ ]"
        }
    }
}

/// Priority marker glyph (the colored dot next to the due date)
pub fn priority_marker(priority: Priority, use_emoji: bool) -> &'static str {
    if use_emoji {
        match priority {
            Priority::High => "●",
            Priority::Medium => "●",
            Priority::Low => "○",
        }
    } else {
        match priority {
            Priority::High => "!",
            Priority::Medium => "+",
            Priority::Low => "-",
        }
    }
}
