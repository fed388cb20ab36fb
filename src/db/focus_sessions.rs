//! Recorded focus sessions.
//!
//! Sessions are only ever appended; day queries use the session start time.

use crate::db::db::Db;
use crate::libs::focus::{FocusPreset, FocusSession};
use anyhow::Result;
use chrono::{Duration, NaiveDate, NaiveTime};
use rusqlite::types::Type;
use rusqlite::{params, Connection, Row};

const INSERT_SESSION: &str = "INSERT INTO focus_sessions (activity, preset, planned_secs, focused_secs, completed, started_at, ended_at)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const SELECT_SESSIONS_BETWEEN: &str = "SELECT id, activity, preset, planned_secs, focused_secs, completed, started_at, ended_at
    FROM focus_sessions WHERE started_at >= ?1 AND started_at < ?2 ORDER BY started_at";
const SELECT_RECENT_SESSIONS: &str = "SELECT id, activity, preset, planned_secs, focused_secs, completed, started_at, ended_at
    FROM focus_sessions ORDER BY started_at DESC LIMIT ?1";

pub struct FocusSessions {
    conn: Connection,
}

impl FocusSessions {
    pub fn new() -> Result<Self> {
        Ok(Self::with_db(Db::new()?))
    }

    pub fn with_db(db: Db) -> Self {
        Self { conn: db.conn }
    }

    pub fn insert(&mut self, session: &FocusSession) -> Result<i32> {
        self.conn.execute(
            INSERT_SESSION,
            params![
                session.activity,
                session.preset.as_str(),
                session.planned_secs,
                session.focused_secs,
                session.completed,
                session.started_at,
                session.ended_at,
            ],
        )?;
        Ok(self.conn.last_insert_rowid() as i32)
    }

    /// Sessions started on `date`, oldest first.
    pub fn fetch_for_date(&mut self, date: NaiveDate) -> Result<Vec<FocusSession>> {
        let start = date.and_time(NaiveTime::MIN);
        let end = start + Duration::days(1);
        let mut stmt = self.conn.prepare(SELECT_SESSIONS_BETWEEN)?;
        let sessions = stmt.query_map(params![start, end], session_from_row)?.collect::<Result<Vec<_>, _>>()?;
        Ok(sessions)
    }

    pub fn recent(&mut self, limit: usize) -> Result<Vec<FocusSession>> {
        let mut stmt = self.conn.prepare(SELECT_RECENT_SESSIONS)?;
        let sessions = stmt.query_map(params![limit as i64], session_from_row)?.collect::<Result<Vec<_>, _>>()?;
        Ok(sessions)
    }
}

fn session_from_row(row: &Row) -> rusqlite::Result<FocusSession> {
    let preset: String = row.get(2)?;
    let preset = preset
        .parse::<FocusPreset>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e)))?;

    Ok(FocusSession {
        id: Some(row.get(0)?),
        activity: row.get(1)?,
        preset,
        planned_secs: row.get(3)?,
        focused_secs: row.get(4)?,
        completed: row.get(5)?,
        started_at: row.get(6)?,
        ended_at: row.get(7)?,
    })
}
