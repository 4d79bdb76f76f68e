use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, TaskListError};
use crate::render;

/// A single item of work with a title and a completion flag.
///
/// The title is fixed at construction. Completion starts out `false` and is
/// changed only through [`Task::set_done`] (or [`Task::set_done_value`] for
/// untyped input).
///
/// Equality is structural: two tasks are equal when both title and completion
/// state match, regardless of whether they are the same allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct Task {
    title: String,
    done: bool,
}

impl Task {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            done: false,
        }
    }

    pub fn with_done(title: impl Into<String>, done: bool) -> Self {
        Self {
            title: title.into(),
            done,
        }
    }

    /// Build a task from a JSON object such as `{"title": "Buy milk", "done": true}`.
    ///
    /// `done` may be omitted and defaults to `false`. Anything that is not an
    /// object with a string `title` is rejected as a type mismatch; a `done`
    /// that is present but not a boolean fails validation.
    pub fn from_value(value: &Value) -> Result<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| TaskListError::not_a_task(describe_value(value)))?;

        // Serialized lists carry `name` and `tasks`; never mistake one for a task.
        if object.contains_key("tasks") {
            return Err(TaskListError::not_a_task("task list"));
        }

        let title = object
            .get("title")
            .and_then(Value::as_str)
            .ok_or_else(|| TaskListError::not_a_task("object without a string title"))?;

        let mut task = Task::new(title);
        if let Some(done) = object.get("done") {
            task.set_done_value(done)?;
        }
        Ok(task)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn done(&self) -> bool {
        self.done
    }

    pub fn set_done(&mut self, done: bool) {
        self.done = done;
    }

    /// Set completion from an untyped value. Only JSON booleans are accepted;
    /// on failure the current state is kept.
    pub fn set_done_value(&mut self, value: &Value) -> Result<()> {
        let done = value
            .as_bool()
            .ok_or_else(TaskListError::done_not_boolean)?;
        self.done = done;
        Ok(())
    }

    /// `"[X] <title>"` when done, `"[ ] <title>"` otherwise.
    pub fn render(&self) -> String {
        render::task_line(&self.title, self.done)
    }
}

impl TryFrom<Value> for Task {
    type Error = TaskListError;

    fn try_from(value: Value) -> Result<Self> {
        Task::from_value(&value)
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Short human description of a JSON value's kind, used in error messages.
pub(crate) fn describe_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("boolean {}", b),
        Value::Number(n) => format!("number {}", n),
        Value::String(s) => format!("string {:?}", s),
        Value::Array(_) => "array".to_string(),
        Value::Object(_) => "object".to_string(),
    }
}
