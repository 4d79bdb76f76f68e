pub mod config;
pub mod error;
pub mod models;
pub mod render;

pub use error::{Result, TaskListError};
pub use models::{ListIndex, SharedTask, Task, TaskList};
