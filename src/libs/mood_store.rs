//! Persistent collection of mood entries.
//!
//! The store keeps every entry in memory, newest first, and writes the whole
//! collection back under the `MoodEntries` key after each change.

use super::kv_store::KeyValueStore;
use super::mood::{MoodCategory, MoodEntry, MoodStats, StatsPeriod};
use anyhow::Result;
use chrono::{DateTime, Local, NaiveDate};
use tracing::{debug, info};

pub const MOOD_ENTRIES_KEY: &str = "MoodEntries";

pub struct MoodStore {
    entries: Vec<MoodEntry>,
    storage: KeyValueStore,
}

impl MoodStore {
    pub fn new() -> Result<Self> {
        Self::with_storage(KeyValueStore::new()?)
    }

    /// Loads the collection from `storage`.
    ///
    /// # Errors
    ///
    /// Fails when the stored collection exists but cannot be decoded; the file is
    /// left untouched so no entries are lost.
    pub fn with_storage(storage: KeyValueStore) -> Result<Self> {
        let mut entries: Vec<MoodEntry> = storage.get(MOOD_ENTRIES_KEY)?.unwrap_or_default();
        sort_newest_first(&mut entries);
        debug!(count = entries.len(), "loaded mood entries");
        Ok(Self { entries, storage })
    }

    pub fn entries(&self) -> &[MoodEntry] {
        &self.entries
    }

    pub fn get(&self, id: u32) -> Option<&MoodEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Stores a new entry and returns the id assigned to it.
    pub fn add(&mut self, mut entry: MoodEntry) -> Result<u32> {
        entry.id = self.next_id();
        let id = entry.id;
        self.entries.push(entry);
        sort_newest_first(&mut self.entries);
        self.save()?;
        info!(id, "mood entry added");
        Ok(id)
    }

    /// Removes the entry with `id`. Returns `false` when no such entry exists.
    pub fn delete(&mut self, id: u32) -> Result<bool> {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        if self.entries.len() == before {
            return Ok(false);
        }
        self.save()?;
        info!(id, "mood entry deleted");
        Ok(true)
    }

    /// Replaces the stored entry with the same id. Returns `false` when no such entry exists.
    pub fn update(&mut self, entry: MoodEntry) -> Result<bool> {
        let Some(index) = self.entries.iter().position(|e| e.id == entry.id) else {
            return Ok(false);
        };
        let id = entry.id;
        self.entries[index] = entry;
        sort_newest_first(&mut self.entries);
        self.save()?;
        info!(id, "mood entry updated");
        Ok(true)
    }

    pub fn stats(&self, period: StatsPeriod, now: DateTime<Local>) -> MoodStats {
        MoodStats::compute(&self.entries, period, now)
    }

    pub fn entries_for_day(&self, date: NaiveDate) -> Vec<&MoodEntry> {
        self.entries.iter().filter(|e| e.date() == date).collect()
    }

    pub fn entries_for_today(&self) -> Vec<&MoodEntry> {
        self.entries_for_day(Local::now().date_naive())
    }

    pub fn entries_by_category(&self, category: MoodCategory) -> Vec<&MoodEntry> {
        self.entries.iter().filter(|e| e.category == category).collect()
    }

    /// Entries whose intensity lies in `min..=max`.
    pub fn entries_by_intensity(&self, min: u8, max: u8) -> Vec<&MoodEntry> {
        self.entries.iter().filter(|e| e.intensity >= min && e.intensity <= max).collect()
    }

    fn next_id(&self) -> u32 {
        self.entries.iter().map(|e| e.id).max().unwrap_or(0) + 1
    }

    fn save(&self) -> Result<()> {
        self.storage.set(MOOD_ENTRIES_KEY, &self.entries)
    }
}

fn sort_newest_first(entries: &mut [MoodEntry]) {
    entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
}
