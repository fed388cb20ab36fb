//! Habit repository.
//!
//! A habit row holds the habit's own fields. Its progress lives in
//! `habit_progress`, one row per day with an amount, and is loaded together
//! with the habit.

use crate::db::db::Db;
use crate::libs::habit::{Habit, HabitFrequency};
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::collections::{BTreeMap, HashMap};

const HABIT_COLUMNS: &str = "id, name, creation_date, goal, unit, reminder, frequency, is_new, last_completion_date, last_progress_date";
const INSERT_HABIT: &str = "INSERT INTO habits (name, creation_date, goal, unit, reminder, frequency, is_new, last_completion_date, last_progress_date)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)";
const UPDATE_HABIT: &str = "UPDATE habits SET name = ?2, goal = ?3, unit = ?4, reminder = ?5, frequency = ?6, is_new = ?7,
    last_completion_date = ?8, last_progress_date = ?9 WHERE id = ?1";
const DELETE_HABIT: &str = "DELETE FROM habits WHERE id = ?1";
const UPSERT_PROGRESS: &str = "INSERT INTO habit_progress (habit_id, date, amount) VALUES (?1, ?2, ?3)
    ON CONFLICT(habit_id, date) DO UPDATE SET amount = excluded.amount";
const DELETE_PROGRESS: &str = "DELETE FROM habit_progress WHERE habit_id = ?1 AND date = ?2";
const DELETE_ALL_PROGRESS: &str = "DELETE FROM habit_progress WHERE habit_id = ?1";
const SELECT_PROGRESS: &str = "SELECT date, amount FROM habit_progress WHERE habit_id = ?1";
const SELECT_ALL_PROGRESS: &str = "SELECT habit_id, date, amount FROM habit_progress";

pub struct Habits {
    conn: Connection,
}

impl Habits {
    pub fn new() -> Result<Self> {
        Ok(Self::with_db(Db::new()?))
    }

    pub fn with_db(db: Db) -> Self {
        Self { conn: db.conn }
    }

    /// Stores a new habit together with any progress it already carries.
    pub fn insert(&mut self, habit: &Habit) -> Result<i32> {
        if self.get_by_name(&habit.name)?.is_some() {
            return Err(msg_error_anyhow!(Message::HabitAlreadyExists(habit.name.clone())));
        }

        let tx = self.conn.transaction()?;
        tx.execute(
            INSERT_HABIT,
            params![
                habit.name,
                habit.creation_date,
                habit.goal,
                habit.unit,
                habit.reminder,
                habit.frequency.id(),
                habit.is_new,
                habit.last_completion_date,
                habit.last_progress_date,
            ],
        )?;
        let id = tx.last_insert_rowid() as i32;
        for (date, amount) in &habit.daily_progress {
            tx.execute(UPSERT_PROGRESS, params![id, date, amount])?;
        }
        tx.commit()?;
        Ok(id)
    }

    /// Saves the habit's own fields. Progress is written with [`Habits::save_progress`].
    pub fn update(&mut self, habit: &Habit) -> Result<()> {
        let id = require_id(habit)?;
        if let Some(existing) = self.get_by_name(&habit.name)? {
            if existing.id != Some(id) {
                return Err(msg_error_anyhow!(Message::HabitAlreadyExists(habit.name.clone())));
            }
        }

        let affected = self.conn.execute(
            UPDATE_HABIT,
            params![
                id,
                habit.name,
                habit.goal,
                habit.unit,
                habit.reminder,
                habit.frequency.id(),
                habit.is_new,
                habit.last_completion_date,
                habit.last_progress_date,
            ],
        )?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::HabitNotFound(id.to_string())));
        }
        Ok(())
    }

    /// Persists the progress of `habit` on `date` and its last-activity dates.
    pub fn save_progress(&mut self, habit: &Habit, date: NaiveDate) -> Result<()> {
        let id = require_id(habit)?;
        let tx = self.conn.transaction()?;
        match habit.daily_progress.get(&date) {
            Some(amount) => tx.execute(UPSERT_PROGRESS, params![id, date, amount])?,
            None => tx.execute(DELETE_PROGRESS, params![id, date])?,
        };
        tx.execute(
            "UPDATE habits SET is_new = ?2, last_completion_date = ?3, last_progress_date = ?4 WHERE id = ?1",
            params![id, habit.is_new, habit.last_completion_date, habit.last_progress_date],
        )?;
        tx.commit()?;
        Ok(())
    }

    pub fn delete(&mut self, id: i32) -> Result<usize> {
        let tx = self.conn.transaction()?;
        tx.execute(DELETE_ALL_PROGRESS, params![id])?;
        let affected = tx.execute(DELETE_HABIT, params![id])?;
        tx.commit()?;
        Ok(affected)
    }

    pub fn get_by_id(&mut self, id: i32) -> Result<Option<Habit>> {
        let sql = format!("SELECT {} FROM habits WHERE id = ?1", HABIT_COLUMNS);
        let habit = self.conn.query_row(&sql, params![id], habit_from_row).optional()?;
        habit.map(|h| self.with_progress(h)).transpose()
    }

    pub fn get_by_name(&mut self, name: &str) -> Result<Option<Habit>> {
        let sql = format!("SELECT {} FROM habits WHERE name = ?1 COLLATE NOCASE", HABIT_COLUMNS);
        let habit = self.conn.query_row(&sql, params![name.trim()], habit_from_row).optional()?;
        habit.map(|h| self.with_progress(h)).transpose()
    }

    /// Looks a habit up by numeric id or, failing that, by name.
    ///
    /// Habit names are never purely numeric, so a number always means an id.
    pub fn find(&mut self, identifier: &str) -> Result<Habit> {
        let found = match identifier.trim().parse::<i32>() {
            Ok(id) => self.get_by_id(id)?,
            Err(_) => None,
        };
        let found = match found {
            Some(habit) => Some(habit),
            None => self.get_by_name(identifier)?,
        };
        found.ok_or_else(|| msg_error_anyhow!(Message::HabitNotFound(identifier.to_string())))
    }

    /// All habits in creation order, with their progress loaded.
    pub fn list(&mut self) -> Result<Vec<Habit>> {
        let sql = format!("SELECT {} FROM habits ORDER BY id", HABIT_COLUMNS);
        let mut stmt = self.conn.prepare(&sql)?;
        let mut habits = stmt.query_map([], habit_from_row)?.collect::<Result<Vec<_>, _>>()?;

        let mut progress: HashMap<i32, BTreeMap<NaiveDate, f64>> = HashMap::new();
        let mut stmt = self.conn.prepare(SELECT_ALL_PROGRESS)?;
        let rows = stmt.query_map([], |row| Ok((row.get::<_, i32>(0)?, row.get::<_, NaiveDate>(1)?, row.get::<_, f64>(2)?)))?;
        for row in rows {
            let (habit_id, date, amount) = row?;
            progress.entry(habit_id).or_default().insert(date, amount);
        }

        for habit in &mut habits {
            if let Some(days) = habit.id.and_then(|id| progress.remove(&id)) {
                habit.daily_progress = days;
            }
        }
        Ok(habits)
    }

    /// Habits due on `date`.
    pub fn due_on(&mut self, date: NaiveDate) -> Result<Vec<Habit>> {
        Ok(self.list()?.into_iter().filter(|h| h.should_display(date)).collect())
    }

    fn with_progress(&self, mut habit: Habit) -> Result<Habit> {
        if let Some(id) = habit.id {
            let mut stmt = self.conn.prepare(SELECT_PROGRESS)?;
            let days = stmt
                .query_map(params![id], |row| Ok((row.get::<_, NaiveDate>(0)?, row.get::<_, f64>(1)?)))?
                .collect::<Result<BTreeMap<_, _>, _>>()?;
            habit.daily_progress = days;
        }
        Ok(habit)
    }
}

fn require_id(habit: &Habit) -> Result<i32> {
    habit.id.ok_or_else(|| msg_error_anyhow!(Message::HabitNotFound(habit.name.clone())))
}

fn habit_from_row(row: &Row) -> rusqlite::Result<Habit> {
    let frequency: String = row.get(6)?;
    let frequency = frequency
        .parse::<HabitFrequency>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(6, Type::Text, Box::new(e)))?;

    Ok(Habit {
        id: Some(row.get(0)?),
        name: row.get(1)?,
        creation_date: row.get(2)?,
        goal: row.get(3)?,
        unit: row.get(4)?,
        reminder: row.get(5)?,
        frequency,
        is_new: row.get(7)?,
        last_completion_date: row.get(8)?,
        last_progress_date: row.get(9)?,
        daily_progress: BTreeMap::new(),
    })
}
