//! Plain-text rendering for tasks and task lists.

const DONE_MARKER: &str = "[X]";
const UNDONE_MARKER: &str = "[ ]";
const HEADER_BORDER: &str = "-----";

/// Get the status marker for a completion state.
pub fn marker(done: bool) -> &'static str {
    if done {
        DONE_MARKER
    } else {
        UNDONE_MARKER
    }
}

/// Render a single task line.
///
/// ```text
/// [X] Clean room
/// ```
pub fn task_line(title: &str, done: bool) -> String {
    format!("{} {}", marker(done), title)
}

/// Render the decorative header line for a list name.
pub fn header(name: &str) -> String {
    format!("{HEADER_BORDER} {name} {HEADER_BORDER}")
}

/// Render a whole list: the header followed by one line per task.
///
/// Lines are joined with a single newline and there is no trailing newline,
/// so an empty list renders as the header alone.
///
/// ```text
/// ----- Today's Todos -----
/// [ ] Buy milk
/// [X] Clean room
/// ```
pub fn list<I>(name: &str, lines: I) -> String
where
    I: IntoIterator<Item = String>,
{
    let mut output = header(name);
    for line in lines {
        output.push('\n');
        output.push_str(&line);
    }
    output
}
