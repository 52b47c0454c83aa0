pub mod enums;
pub mod task;
pub mod views;

pub use enums::{ActivePicker, Priority, Theme, UiMode};
pub use task::{Task, TaskStore};
pub use views::{completion_bubble, order_for_display, priority_marker};
