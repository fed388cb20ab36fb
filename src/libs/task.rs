//! Task model, list filters and summary counts.

use super::validation::ValidationError;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum TaskPriority {
    High,
    #[default]
    Medium,
    Low,
}

impl TaskPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::High => "High",
            TaskPriority::Medium => "Medium",
            TaskPriority::Low => "Low",
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskPriority {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(TaskPriority::High),
            "medium" => Ok(TaskPriority::Medium),
            "low" => Ok(TaskPriority::Low),
            _ => Err(ValidationError::UnknownPriority(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: Option<i32>,
    pub title: String,
    pub description: String,
    pub due_date: Option<NaiveDateTime>,
    pub priority: TaskPriority,
    pub is_completed: bool,
    pub created_at: Option<NaiveDateTime>,
}

impl Task {
    pub fn new(title: &str, description: &str, due_date: Option<NaiveDateTime>, priority: TaskPriority) -> Result<Self, ValidationError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTaskTitle);
        }
        Ok(Task {
            id: None,
            title: title.to_string(),
            description: description.trim().to_string(),
            due_date,
            priority,
            is_completed: false,
            created_at: None,
        })
    }

    pub fn toggle_completion(&mut self) {
        self.is_completed = !self.is_completed;
    }

    /// Past its due date and still open.
    pub fn is_overdue(&self, now: NaiveDateTime) -> bool {
        match self.due_date {
            Some(due) => due < now && !self.is_completed,
            None => false,
        }
    }

    pub fn is_due_on(&self, date: NaiveDate) -> bool {
        self.due_date.map(|due| due.date() == date).unwrap_or(false)
    }

    pub fn matches(&self, filter: &TaskFilter, now: NaiveDateTime) -> bool {
        match filter {
            TaskFilter::All => true,
            TaskFilter::Today => self.is_due_on(now.date()),
            TaskFilter::Overdue => self.is_overdue(now),
            TaskFilter::Completed => self.is_completed,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum TaskFilter {
    #[default]
    All,
    Today,
    Overdue,
    Completed,
}

/// Applies a time-based filter and an optional priority filter.
pub fn filter_tasks(tasks: Vec<Task>, filter: TaskFilter, priority: Option<TaskPriority>, now: NaiveDateTime) -> Vec<Task> {
    tasks
        .into_iter()
        .filter(|task| task.matches(&filter, now))
        .filter(|task| priority.map(|p| task.priority == p).unwrap_or(true))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TaskSummary {
    pub total: usize,
    pub completed: usize,
    pub overdue: usize,
}

impl TaskSummary {
    pub fn from_tasks(tasks: &[Task], now: NaiveDateTime) -> Self {
        TaskSummary {
            total: tasks.len(),
            completed: tasks.iter().filter(|t| t.is_completed).count(),
            overdue: tasks.iter().filter(|t| t.is_overdue(now)).count(),
        }
    }

    /// Completed share in percent, 0 when there are no tasks.
    pub fn completion_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.completed as f64 / self.total as f64) * 100.0
    }
}
