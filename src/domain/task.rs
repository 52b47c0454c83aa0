use super::enums::Priority;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single to-do entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique ID, assigned at creation and immutable afterwards
    pub id: Uuid,
    /// What needs doing (never empty or whitespace-only)
    pub description: String,
    /// When it is due (past dates are allowed)
    pub due_date: NaiveDate,
    /// Advisory urgency level
    pub priority: Priority,
    /// Whether the task has been ticked off
    pub completed: bool,
}

impl Task {
    fn new(description: String, due_date: NaiveDate, priority: Priority) -> Self {
        Self {
            id: Uuid::new_v4(),
            description,
            due_date,
            priority,
            completed: false,
        }
    }
}

/// In-memory collection of tasks. Owns id generation and all mutation.
///
/// Nothing here can fail: an empty description is silently rejected, and
/// toggling or deleting an unknown id is a no-op so duplicate taps on a
/// row that was just removed never crash.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new task and return a reference to it.
    /// Returns None (and leaves the collection untouched) if the description
    /// is empty after trimming.
    pub fn add(
        &mut self,
        description: &str,
        due_date: NaiveDate,
        priority: Priority,
    ) -> Option<&Task> {
        if description.trim().is_empty() {
            return None;
        }

        let task = Task::new(description.to_string(), due_date, priority);
        self.tasks.push(task);
        self.tasks.last()
    }

    /// Flip the completed flag on the task with the given id, if it exists
    pub fn toggle_completion(&mut self, id: Uuid) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.completed = !task.completed;
        }
    }

    /// Remove the task with the given id, if it exists
    pub fn delete(&mut self, id: Uuid) {
        self.tasks.retain(|t| t.id != id);
    }

    pub fn get(&self, id: Uuid) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// All tasks in insertion order (display ordering is a separate view)
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_add_creates_incomplete_task() {
        let mut store = TaskStore::new();
        let task = store.add("Buy milk", date(2025, 3, 10), Priority::Low).unwrap();

        assert_eq!(task.description, "Buy milk");
        assert_eq!(task.due_date, date(2025, 3, 10));
        assert_eq!(task.priority, Priority::Low);
        assert!(!task.completed);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_add_rejects_empty_description() {
        let mut store = TaskStore::new();
        assert!(store.add("", date(2025, 1, 1), Priority::Low).is_none());
        assert!(store.add("   ", date(2025, 1, 1), Priority::High).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_assigns_distinct_ids() {
        let mut store = TaskStore::new();
        for i in 0..50 {
            store.add(&format!("Task {}", i), date(2025, 1, 1), Priority::Low);
        }

        let mut ids: Vec<Uuid> = store.tasks().iter().map(|t| t.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn test_add_leaves_existing_tasks_unchanged() {
        let mut store = TaskStore::new();
        let first_id = store.add("First", date(2025, 1, 1), Priority::High).unwrap().id;
        store.add("Second", date(2025, 2, 2), Priority::Low);

        let first = store.get(first_id).unwrap();
        assert_eq!(first.description, "First");
        assert_eq!(first.priority, Priority::High);
        assert!(!first.completed);
    }

    #[test]
    fn test_toggle_completion_involution() {
        let mut store = TaskStore::new();
        let id = store.add("Task", date(2025, 1, 1), Priority::Low).unwrap().id;

        store.toggle_completion(id);
        assert!(store.get(id).unwrap().completed);

        store.toggle_completion(id);
        assert!(!store.get(id).unwrap().completed);
    }

    #[test]
    fn test_toggle_completion_affects_only_target() {
        let mut store = TaskStore::new();
        let a = store.add("A", date(2025, 1, 1), Priority::Low).unwrap().id;
        let b = store.add("B", date(2025, 1, 2), Priority::High).unwrap().id;

        store.toggle_completion(a);
        assert!(store.get(a).unwrap().completed);
        assert!(!store.get(b).unwrap().completed);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut store = TaskStore::new();
        store.add("Task", date(2025, 1, 1), Priority::Low);

        store.toggle_completion(Uuid::new_v4());
        assert_eq!(store.len(), 1);
        assert!(!store.tasks()[0].completed);
    }

    #[test]
    fn test_delete_removes_task() {
        let mut store = TaskStore::new();
        let id = store.add("Task", date(2025, 1, 1), Priority::Low).unwrap().id;

        store.delete(id);
        assert!(store.is_empty());

        // Repeating the delete is a benign no-op
        store.delete(id);
        assert!(store.is_empty());
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut store = TaskStore::new();
        store.add("Task", date(2025, 1, 1), Priority::Low);

        store.delete(Uuid::new_v4());
        assert_eq!(store.len(), 1);
    }
}
