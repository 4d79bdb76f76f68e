use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use serde::{Serialize, Serializer};
use serde_json::Value;

use super::index::ListIndex;
use super::task::{describe_value, Task};
use crate::error::{Result, TaskListError};
use crate::render;

/// Name given to lists produced by [`TaskList::select`].
pub const SUBSET_NAME: &str = "Subset of Tasks";

/// A shared handle to a [`Task`].
///
/// Cloning a handle does not copy the task: every clone points at the same
/// value, so marking a task done through one handle is visible through all of
/// them. Use [`SharedTask::ptr_eq`] to ask whether two handles refer to the
/// same task; `==` compares title and completion state.
#[derive(Clone)]
pub struct SharedTask(Rc<RefCell<Task>>);

impl SharedTask {
    pub fn new(task: Task) -> Self {
        Self(Rc::new(RefCell::new(task)))
    }

    pub fn title(&self) -> String {
        self.0.borrow().title().to_string()
    }

    pub fn done(&self) -> bool {
        self.0.borrow().done()
    }

    pub fn set_done(&self, done: bool) {
        self.0.borrow_mut().set_done(done);
    }

    pub fn set_done_value(&self, value: &Value) -> Result<()> {
        self.0.borrow_mut().set_done_value(value)
    }

    pub fn render(&self) -> String {
        self.0.borrow().render()
    }

    /// An owned copy of the task as it is right now. Holding it never blocks
    /// changes made through the list.
    pub fn snapshot(&self) -> Task {
        self.0.borrow().clone()
    }

    pub fn ptr_eq(&self, other: &SharedTask) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl From<Task> for SharedTask {
    fn from(task: Task) -> Self {
        Self::new(task)
    }
}

impl PartialEq for SharedTask {
    fn eq(&self, other: &Self) -> bool {
        *self.0.borrow() == *other.0.borrow()
    }
}

impl Eq for SharedTask {}

impl PartialEq<Task> for SharedTask {
    fn eq(&self, other: &Task) -> bool {
        *self.0.borrow() == *other
    }
}

impl fmt::Debug for SharedTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0.borrow(), f)
    }
}

impl fmt::Display for SharedTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl Serialize for SharedTask {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.0.borrow().serialize(serializer)
    }
}

/// An ordered collection of tasks under a name.
///
/// Insertion order is kept across every operation except [`TaskList::remove_at`],
/// which closes the gap it leaves. The list holds [`SharedTask`] handles, so
/// tasks handed out by [`TaskList::to_list`], [`TaskList::task_at`] or
/// [`TaskList::select`] stay linked to the ones stored here.
///
/// # Rendering
/// ```text
/// ----- Today's Todos -----
/// [ ] Buy milk
/// [X] Clean room
/// [ ] Go to gym
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct TaskList {
    name: String,
    tasks: Vec<SharedTask>,
}

impl TaskList {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tasks: Vec::new(),
        }
    }

    /// Build a list from `{"name": ..., "tasks": [...]}`.
    ///
    /// Either every task is accepted or the whole call fails.
    pub fn from_value(value: &Value) -> Result<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| TaskListError::TypeMismatch {
                expected: "requires a TaskList",
                found: describe_value(value),
            })?;
        let name = object.get("name").and_then(Value::as_str).ok_or_else(|| {
            TaskListError::TypeMismatch {
                expected: "requires a TaskList",
                found: "object without a string name".to_string(),
            }
        })?;

        let mut list = TaskList::new(name);
        match object.get("tasks") {
            None => {}
            Some(Value::Array(items)) => {
                for item in items {
                    list.add_value(item)?;
                }
            }
            Some(other) => {
                return Err(TaskListError::TypeMismatch {
                    expected: "requires an array of tasks",
                    found: describe_value(other),
                });
            }
        }
        Ok(list)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a task to the end of the list.
    ///
    /// Passing an existing [`SharedTask`] stores that same task, not a copy.
    pub fn add(&mut self, task: impl Into<SharedTask>) {
        let task = task.into();
        tracing::trace!(list = %self.name, title = %task.title(), "adding task");
        self.tasks.push(task);
    }

    /// Append a task decoded from untyped input. The list is unchanged on error.
    pub fn add_value(&mut self, value: &Value) -> Result<()> {
        let task = Task::from_value(value)?;
        self.add(task);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn first(&self) -> Result<SharedTask> {
        self.tasks
            .first()
            .cloned()
            .ok_or_else(|| TaskListError::out_of_range(0, 0))
    }

    pub fn last(&self) -> Result<SharedTask> {
        self.tasks
            .last()
            .cloned()
            .ok_or_else(|| TaskListError::out_of_range(-1, 0))
    }

    /// A new vector of handles to the tasks, in order.
    ///
    /// Resizing the vector leaves this list alone; changing a task through it
    /// does not.
    pub fn to_list(&self) -> Vec<SharedTask> {
        self.tasks.clone()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SharedTask> {
        self.tasks.iter()
    }

    pub fn task_at(&self, index: impl ListIndex) -> Result<SharedTask> {
        let i = index.resolve(self.len())?;
        Ok(self.tasks[i].clone())
    }

    pub fn mark_done_at(&mut self, index: impl ListIndex) -> Result<()> {
        self.task_at(index)?.set_done(true);
        Ok(())
    }

    pub fn mark_undone_at(&mut self, index: impl ListIndex) -> Result<()> {
        self.task_at(index)?.set_done(false);
        Ok(())
    }

    pub fn mark_all_done(&mut self) {
        tracing::trace!(list = %self.name, count = self.len(), "marking all tasks done");
        self.each(|task| task.set_done(true));
    }

    pub fn mark_all_undone(&mut self) {
        tracing::trace!(list = %self.name, count = self.len(), "marking all tasks undone");
        self.each(|task| task.set_done(false));
    }

    /// True when every task is done. An empty list is all done.
    pub fn all_done(&self) -> bool {
        self.tasks.iter().all(SharedTask::done)
    }

    /// Remove the task at `index`, shifting later tasks down by one.
    ///
    /// The removed handle is returned; other handles to the same task remain
    /// valid.
    pub fn remove_at(&mut self, index: impl ListIndex) -> Result<SharedTask> {
        let i = index.resolve(self.len())?;
        let removed = self.tasks.remove(i);
        tracing::trace!(list = %self.name, index = i, title = %removed.title(), "removed task");
        Ok(removed)
    }

    /// Call `callback` once per task, in order.
    pub fn each<F>(&self, mut callback: F)
    where
        F: FnMut(&SharedTask),
    {
        for task in &self.tasks {
            callback(task);
        }
    }

    /// A new list named [`SUBSET_NAME`] holding the tasks that satisfy
    /// `predicate`, in their original order. The tasks are shared, not copied.
    pub fn select<P>(&self, predicate: P) -> TaskList
    where
        P: FnMut(&SharedTask) -> bool,
    {
        self.select_named(SUBSET_NAME, predicate)
    }

    /// Like [`TaskList::select`] with a caller-chosen name for the result.
    pub fn select_named<P>(&self, name: impl Into<String>, mut predicate: P) -> TaskList
    where
        P: FnMut(&SharedTask) -> bool,
    {
        let mut subset = TaskList::new(name);
        self.each(|task| {
            if predicate(task) {
                subset.tasks.push(task.clone());
            }
        });
        subset
    }

    pub fn done_tasks(&self) -> TaskList {
        self.select(SharedTask::done)
    }

    pub fn undone_tasks(&self) -> TaskList {
        self.select(|task| !task.done())
    }

    pub fn find_by_title(&self, title: &str) -> Option<SharedTask> {
        self.tasks
            .iter()
            .find(|task| task.title() == title)
            .cloned()
    }

    pub fn render(&self) -> String {
        render::list(&self.name, self.tasks.iter().map(SharedTask::render))
    }
}

impl fmt::Display for TaskList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a SharedTask;
    type IntoIter = std::slice::Iter<'a, SharedTask>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}
