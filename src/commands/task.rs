//! `positrack task`: the to-do list.
//!
//! Due dates are given as `YYYY-MM-DD HH:MM`, or as a bare day, which means
//! 23:59 that day. `task done` toggles completion.

use crate::{
    db::tasks::Tasks,
    libs::{
        formatter::parse_date_time,
        messages::Message,
        task::{Task, TaskFilter, TaskPriority, TaskSummary},
        view::View,
    },
    msg_error_anyhow, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use chrono::Local;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    command: Option<TaskCommand>,
}

#[derive(Debug, Subcommand)]
enum TaskCommand {
    /// Create a task
    Add {
        title: String,
        #[arg(short, long, default_value = "")]
        description: String,
        /// YYYY-MM-DD [HH:MM]; a bare date means the end of that day
        #[arg(long)]
        due: Option<String>,
        #[arg(short, long, value_enum, default_value = "medium")]
        priority: TaskPriority,
    },
    /// List tasks
    List {
        #[arg(short, long, value_enum, default_value = "all")]
        filter: TaskFilter,
        #[arg(short, long, value_enum)]
        priority: Option<TaskPriority>,
    },
    /// Toggle completion
    Done { id: i32 },
    Edit {
        id: i32,
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
        #[arg(long)]
        due: Option<String>,
        /// Remove the due date
        #[arg(long, conflicts_with = "due")]
        no_due: bool,
        #[arg(short, long, value_enum)]
        priority: Option<TaskPriority>,
    },
    Delete {
        id: i32,
        #[arg(short, long)]
        yes: bool,
    },
    /// Totals, completion rate and overdue count
    Summary,
}

pub async fn cmd(args: TaskArgs) -> Result<()> {
    let mut tasks = Tasks::new()?;

    match args.command {
        Some(TaskCommand::Add {
            title,
            description,
            due,
            priority,
        }) => handle_add(&mut tasks, &title, &description, due, priority),
        Some(TaskCommand::List { filter, priority }) => handle_list(&mut tasks, filter, priority),
        Some(TaskCommand::Done { id }) => handle_toggle(&mut tasks, id),
        Some(TaskCommand::Edit {
            id,
            title,
            description,
            due,
            no_due,
            priority,
        }) => handle_edit(&mut tasks, id, title, description, due, no_due, priority),
        Some(TaskCommand::Delete { id, yes }) => handle_delete(&mut tasks, id, yes),
        Some(TaskCommand::Summary) => handle_summary(&mut tasks),
        None => handle_list(&mut tasks, TaskFilter::All, None),
    }
}

fn handle_add(tasks: &mut Tasks, title: &str, description: &str, due: Option<String>, priority: TaskPriority) -> Result<()> {
    let today = Local::now().date_naive();
    let due_date = due.map(|d| parse_date_time(&d, today)).transpose()?;

    let task = Task::new(title, description, due_date, priority)?;
    let id = tasks.insert(&task)?;
    msg_success!(Message::TaskCreated(id));
    Ok(())
}

fn handle_list(tasks: &mut Tasks, filter: TaskFilter, priority: Option<TaskPriority>) -> Result<()> {
    let list = tasks.fetch(filter, priority, Local::now().naive_local())?;
    if list.is_empty() {
        msg_info!(Message::TasksNotFound);
        return Ok(());
    }

    msg_print!(Message::TasksHeader(format!("{:?}", filter)), true);
    View::tasks(&list)?;
    Ok(())
}

fn handle_toggle(tasks: &mut Tasks, id: i32) -> Result<()> {
    let mut task = find(tasks, id)?;
    task.toggle_completion();
    tasks.set_completed(id, task.is_completed)?;

    if task.is_completed {
        msg_success!(Message::TaskCompleted(task.title));
    } else {
        msg_info!(Message::TaskReopened(task.title));
    }
    Ok(())
}

fn handle_edit(
    tasks: &mut Tasks,
    id: i32,
    title: Option<String>,
    description: Option<String>,
    due: Option<String>,
    no_due: bool,
    priority: Option<TaskPriority>,
) -> Result<()> {
    let task = find(tasks, id)?;
    let today = Local::now().date_naive();

    let due_date = match (due, no_due) {
        (_, true) => None,
        (Some(due), false) => Some(parse_date_time(&due, today)?),
        (None, false) => task.due_date,
    };

    let mut updated = Task::new(
        title.as_deref().unwrap_or(&task.title),
        description.as_deref().unwrap_or(&task.description),
        due_date,
        priority.unwrap_or(task.priority),
    )?;
    updated.id = task.id;
    updated.is_completed = task.is_completed;
    updated.created_at = task.created_at;

    tasks.update(&updated)?;
    msg_success!(Message::TaskUpdated(id));
    Ok(())
}

fn handle_delete(tasks: &mut Tasks, id: i32, yes: bool) -> Result<()> {
    let task = find(tasks, id)?;

    let confirmed = yes
        || Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(task.title.clone()).to_string())
            .default(false)
            .interact()?;

    if !confirmed {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    tasks.delete(id)?;
    msg_success!(Message::TaskDeleted(id));
    Ok(())
}

fn handle_summary(tasks: &mut Tasks) -> Result<()> {
    let summary = TaskSummary::from_tasks(&tasks.all()?, Local::now().naive_local());
    View::task_summary(&summary)?;
    Ok(())
}

fn find(tasks: &mut Tasks, id: i32) -> Result<Task> {
    tasks.get_by_id(id)?.ok_or_else(|| msg_error_anyhow!(Message::TaskNotFound(id.to_string())))
}
