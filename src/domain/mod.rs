pub mod enums;
pub mod history;
pub mod settings;
pub mod timer;
pub mod todo;
pub mod views;

pub use enums::{Mode, UiMode};
pub use settings::parse_minutes;
pub use timer::{Completion, TimerState, DEFAULT_REST_MINUTES, DEFAULT_WORK_MINUTES};
pub use todo::{TodoItem, TodoList};
pub use views::{completion_message, format_clock, status_line, todo_checkbox, toggle_label};
