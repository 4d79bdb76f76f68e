use clap::Parser;
use serde_json::Value;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tasklist::config::Config;
use tasklist::{Task, TaskList};

#[derive(Parser)]
#[command(name = "tasklist")]
#[command(about = "Build a task list and print it")]
struct Cli {
    /// Titles of the tasks to add, in order
    titles: Vec<String>,

    /// List name (defaults to TASKLIST_NAME or "Today's Todos")
    #[arg(short, long)]
    name: Option<String>,

    /// Remove the task at this index (applied first, in the order given)
    #[arg(short, long = "remove", value_name = "INDEX")]
    remove: Vec<String>,

    /// Mark the task at this index done
    #[arg(short, long = "done", value_name = "INDEX")]
    done: Vec<String>,

    /// Mark the task at this index not done
    #[arg(short, long = "undone", value_name = "INDEX")]
    undone: Vec<String>,

    /// Mark every task done
    #[arg(long)]
    all_done: bool,

    /// Keep only tasks whose rendered line contains this text
    #[arg(short, long, value_name = "TEXT")]
    select: Option<String>,

    /// Print the list as JSON instead of text
    #[arg(long)]
    json: bool,
}

/// Initialize tracing with output to stderr so stdout carries only the list.
fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::new(&config.log_filter);

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Command-line indices arrive as text. Whole numbers become integer indices;
/// anything else is passed through untouched and rejected as a type mismatch.
fn index_arg(raw: &str) -> Value {
    match raw.trim().parse::<i64>() {
        Ok(i) => Value::from(i),
        Err(_) => Value::from(raw),
    }
}

fn build(cli: &Cli, config: &Config) -> anyhow::Result<TaskList> {
    let name = cli.name.clone().unwrap_or_else(|| config.list_name.clone());
    let mut list = TaskList::new(name);
    for title in &cli.titles {
        list.add(Task::new(title.as_str()));
    }

    for raw in &cli.remove {
        let removed = list.remove_at(index_arg(raw))?;
        tracing::debug!(title = %removed.title(), "removed");
    }
    for raw in &cli.done {
        list.mark_done_at(index_arg(raw))?;
    }
    for raw in &cli.undone {
        list.mark_undone_at(index_arg(raw))?;
    }
    if cli.all_done {
        list.mark_all_done();
    }

    if let Some(text) = &cli.select {
        list = list.select(|task| task.render().contains(text.as_str()));
    }

    Ok(list)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env();
    init_tracing(&config);

    let list = build(&cli, &config)?;
    tracing::info!(
        name = list.name(),
        tasks = list.len(),
        all_done = list.all_done(),
        "built task list"
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&list)?);
    } else {
        println!("{}", list);
    }

    Ok(())
}
