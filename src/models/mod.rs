//! Domain models for task lists.
//!
//! - [`Task`]: a title with a completion flag. Equality is by value.
//! - [`TaskList`]: a named, ordered collection of tasks with indexed access,
//!   bulk marking, filtering and rendering.
//! - [`SharedTask`]: the handle a [`TaskList`] stores. Handles returned by a
//!   list point at the same task the list holds.
//! - [`ListIndex`]: the positions list operations accept, including untyped
//!   input that must be rejected when it is not an integer.

mod index;
mod task;
mod task_list;

pub use index::*;
pub use task::Task;
pub use task_list::*;
