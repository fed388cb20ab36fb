//! Task repository.
//!
//! `all()` returns open tasks first, then those due soonest; tasks without a
//! due date come last. Priorities are stored by name.

use crate::db::db::Db;
use crate::libs::messages::Message;
use crate::libs::task::{filter_tasks, Task, TaskFilter, TaskPriority};
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::NaiveDateTime;
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};

const INSERT_TASK: &str = "INSERT INTO tasks (title, description, due_date, priority, is_completed) VALUES (?1, ?2, ?3, ?4, ?5)";
const UPDATE_TASK: &str = "UPDATE tasks SET title = ?2, description = ?3, due_date = ?4, priority = ?5, is_completed = ?6 WHERE id = ?1";
const SET_COMPLETED: &str = "UPDATE tasks SET is_completed = ?2 WHERE id = ?1";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";
const SELECT_TASK_BY_ID: &str = "SELECT id, title, description, due_date, priority, is_completed, created_at FROM tasks WHERE id = ?1";
const SELECT_ALL_TASKS: &str = "SELECT id, title, description, due_date, priority, is_completed, created_at FROM tasks
    ORDER BY is_completed, due_date IS NULL, due_date, id";

pub struct Tasks {
    conn: Connection,
}

impl Tasks {
    pub fn new() -> Result<Self> {
        Ok(Self::with_db(Db::new()?))
    }

    pub fn with_db(db: Db) -> Self {
        Self { conn: db.conn }
    }

    pub fn insert(&mut self, task: &Task) -> Result<i32> {
        self.conn.execute(
            INSERT_TASK,
            params![task.title, task.description, task.due_date, task.priority.as_str(), task.is_completed],
        )?;
        Ok(self.conn.last_insert_rowid() as i32)
    }

    pub fn update(&mut self, task: &Task) -> Result<()> {
        let id = task.id.ok_or_else(|| msg_error_anyhow!(Message::TaskNotFound(task.title.clone())))?;
        let affected = self.conn.execute(
            UPDATE_TASK,
            params![id, task.title, task.description, task.due_date, task.priority.as_str(), task.is_completed],
        )?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::TaskNotFound(id.to_string())));
        }
        Ok(())
    }

    pub fn set_completed(&mut self, id: i32, completed: bool) -> Result<()> {
        let affected = self.conn.execute(SET_COMPLETED, params![id, completed])?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::TaskNotFound(id.to_string())));
        }
        Ok(())
    }

    pub fn delete(&mut self, id: i32) -> Result<usize> {
        Ok(self.conn.execute(DELETE_TASK, params![id])?)
    }

    pub fn get_by_id(&mut self, id: i32) -> Result<Option<Task>> {
        Ok(self.conn.query_row(SELECT_TASK_BY_ID, params![id], task_from_row).optional()?)
    }

    /// Open tasks first, then by due date; tasks without a due date go last.
    pub fn all(&mut self) -> Result<Vec<Task>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_TASKS)?;
        let tasks = stmt.query_map([], task_from_row)?.collect::<Result<Vec<_>, _>>()?;
        Ok(tasks)
    }

    pub fn fetch(&mut self, filter: TaskFilter, priority: Option<TaskPriority>, now: NaiveDateTime) -> Result<Vec<Task>> {
        Ok(filter_tasks(self.all()?, filter, priority, now))
    }
}

fn task_from_row(row: &Row) -> rusqlite::Result<Task> {
    let priority: String = row.get(4)?;
    let priority = priority
        .parse::<TaskPriority>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e)))?;

    Ok(Task {
        id: Some(row.get(0)?),
        title: row.get(1)?,
        description: row.get(2)?,
        due_date: row.get(3)?,
        priority,
        is_completed: row.get(5)?,
        created_at: row.get(6)?,
    })
}
