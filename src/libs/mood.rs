//! Mood journaling model and statistics.
//!
//! A [`MoodEntry`] is a timestamped self-report: a broad [`MoodCategory`], one of
//! that category's six subcategories, an intensity on a 1-5 scale and optional
//! context (triggers, location, activities, free-text notes).
//!
//! [`MoodStats::compute`] summarises entries over a [`StatsPeriod`] and always
//! reports a seven-day intensity trend ending today.

use super::validation::ValidationError;
use chrono::{DateTime, Duration, Local, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MIN_INTENSITY: u8 = 1;
pub const MAX_INTENSITY: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum MoodCategory {
    Happy,
    Sad,
    Anxious,
    Angry,
    Calm,
    Energetic,
    Tired,
    Excited,
}

impl MoodCategory {
    pub const ALL: [MoodCategory; 8] = [
        MoodCategory::Happy,
        MoodCategory::Sad,
        MoodCategory::Anxious,
        MoodCategory::Angry,
        MoodCategory::Calm,
        MoodCategory::Energetic,
        MoodCategory::Tired,
        MoodCategory::Excited,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MoodCategory::Happy => "Happy",
            MoodCategory::Sad => "Sad",
            MoodCategory::Anxious => "Anxious",
            MoodCategory::Angry => "Angry",
            MoodCategory::Calm => "Calm",
            MoodCategory::Energetic => "Energetic",
            MoodCategory::Tired => "Tired",
            MoodCategory::Excited => "Excited",
        }
    }

    /// Hex colour (without `#`) associated with the category.
    pub fn color(&self) -> &'static str {
        match self {
            MoodCategory::Happy => "FFD700",
            MoodCategory::Sad => "4169E1",
            MoodCategory::Anxious => "FF6347",
            MoodCategory::Angry => "DC143C",
            MoodCategory::Calm => "90EE90",
            MoodCategory::Energetic => "FF4500",
            MoodCategory::Tired => "808080",
            MoodCategory::Excited => "FF1493",
        }
    }

    pub fn subcategories(&self) -> &'static [&'static str] {
        match self {
            MoodCategory::Happy => &["Joyful", "Content", "Grateful", "Optimistic", "Cheerful", "Blissful"],
            MoodCategory::Sad => &["Melancholic", "Disappointed", "Heartbroken", "Lonely", "Gloomy", "Sorrowful"],
            MoodCategory::Anxious => &["Worried", "Nervous", "Stressed", "Panicked", "Restless", "Overwhelmed"],
            MoodCategory::Angry => &["Frustrated", "Irritated", "Furious", "Annoyed", "Resentful", "Outraged"],
            MoodCategory::Calm => &["Peaceful", "Relaxed", "Serene", "Tranquil", "Balanced", "Zen"],
            MoodCategory::Energetic => &["Vibrant", "Dynamic", "Motivated", "Enthusiastic", "Powerful", "Invigorated"],
            MoodCategory::Tired => &["Exhausted", "Drained", "Sleepy", "Weary", "Fatigued", "Lethargic"],
            MoodCategory::Excited => &["Thrilled", "Elated", "Ecstatic", "Eager", "Pumped", "Animated"],
        }
    }

    /// Canonical spelling of `subcategory` if it belongs to this category.
    pub fn canonical_subcategory(&self, subcategory: &str) -> Option<&'static str> {
        let wanted = subcategory.trim();
        self.subcategories().iter().copied().find(|s| s.eq_ignore_ascii_case(wanted))
    }
}

impl fmt::Display for MoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum MoodTrigger {
    Work,
    Relationships,
    Health,
    Family,
    Finances,
    Weather,
    Exercise,
    Food,
    Sleep,
    Social,
    Personal,
    Other,
}

impl MoodTrigger {
    pub const ALL: [MoodTrigger; 12] = [
        MoodTrigger::Work,
        MoodTrigger::Relationships,
        MoodTrigger::Health,
        MoodTrigger::Family,
        MoodTrigger::Finances,
        MoodTrigger::Weather,
        MoodTrigger::Exercise,
        MoodTrigger::Food,
        MoodTrigger::Sleep,
        MoodTrigger::Social,
        MoodTrigger::Personal,
        MoodTrigger::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MoodTrigger::Work => "Work",
            MoodTrigger::Relationships => "Relationships",
            MoodTrigger::Health => "Health",
            MoodTrigger::Family => "Family",
            MoodTrigger::Finances => "Finances",
            MoodTrigger::Weather => "Weather",
            MoodTrigger::Exercise => "Exercise",
            MoodTrigger::Food => "Food",
            MoodTrigger::Sleep => "Sleep",
            MoodTrigger::Social => "Social",
            MoodTrigger::Personal => "Personal",
            MoodTrigger::Other => "Other",
        }
    }
}

impl fmt::Display for MoodTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum MoodLocation {
    Home,
    Work,
    School,
    Outdoors,
    Gym,
    Restaurant,
    Transport,
    #[serde(rename = "Social Place")]
    Social,
    Other,
}

impl MoodLocation {
    pub const ALL: [MoodLocation; 9] = [
        MoodLocation::Home,
        MoodLocation::Work,
        MoodLocation::School,
        MoodLocation::Outdoors,
        MoodLocation::Gym,
        MoodLocation::Restaurant,
        MoodLocation::Transport,
        MoodLocation::Social,
        MoodLocation::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MoodLocation::Home => "Home",
            MoodLocation::Work => "Work",
            MoodLocation::School => "School",
            MoodLocation::Outdoors => "Outdoors",
            MoodLocation::Gym => "Gym",
            MoodLocation::Restaurant => "Restaurant",
            MoodLocation::Transport => "Transport",
            MoodLocation::Social => "Social Place",
            MoodLocation::Other => "Other",
        }
    }
}

impl fmt::Display for MoodLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    /// Assigned by the store; 0 until the entry is saved.
    pub id: u32,
    pub timestamp: DateTime<Local>,
    pub category: MoodCategory,
    pub subcategory: String,
    /// 1-5 scale.
    pub intensity: u8,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub triggers: Vec<MoodTrigger>,
    #[serde(default)]
    pub location: Option<MoodLocation>,
    #[serde(default)]
    pub activities: Vec<String>,
}

impl MoodEntry {
    pub fn new(category: MoodCategory, subcategory: &str, intensity: u8, timestamp: DateTime<Local>) -> Result<Self, ValidationError> {
        let subcategory = category
            .canonical_subcategory(subcategory)
            .ok_or_else(|| ValidationError::UnknownSubcategory {
                category: category.to_string(),
                subcategory: subcategory.to_string(),
            })?;
        validate_intensity(intensity)?;

        Ok(MoodEntry {
            id: 0,
            timestamp,
            category,
            subcategory: subcategory.to_string(),
            intensity,
            notes: String::new(),
            triggers: Vec::new(),
            location: None,
            activities: Vec::new(),
        })
    }

    pub fn with_notes(mut self, notes: &str) -> Self {
        self.notes = notes.trim().to_string();
        self
    }

    pub fn with_triggers(mut self, triggers: Vec<MoodTrigger>) -> Self {
        let mut unique = Vec::with_capacity(triggers.len());
        for trigger in triggers {
            if !unique.contains(&trigger) {
                unique.push(trigger);
            }
        }
        self.triggers = unique;
        self
    }

    pub fn with_location(mut self, location: Option<MoodLocation>) -> Self {
        self.location = location;
        self
    }

    pub fn with_activities(mut self, activities: Vec<String>) -> Self {
        self.activities = activities.into_iter().map(|a| a.trim().to_string()).filter(|a| !a.is_empty()).collect();
        self
    }

    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }
}

pub fn validate_intensity(intensity: u8) -> Result<u8, ValidationError> {
    if !(MIN_INTENSITY..=MAX_INTENSITY).contains(&intensity) {
        return Err(ValidationError::IntensityOutOfRange(intensity));
    }
    Ok(intensity)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum StatsPeriod {
    Day,
    #[default]
    Week,
    Month,
    Year,
}

impl StatsPeriod {
    pub fn label(&self) -> &'static str {
        match self {
            StatsPeriod::Day => "Today",
            StatsPeriod::Week => "This Week",
            StatsPeriod::Month => "This Month",
            StatsPeriod::Year => "This Year",
        }
    }

    /// Whether `timestamp` falls into this period as seen from `now`.
    pub fn contains(&self, timestamp: DateTime<Local>, now: DateTime<Local>) -> bool {
        match self {
            StatsPeriod::Day => timestamp.date_naive() == now.date_naive(),
            StatsPeriod::Week => timestamp >= now - Duration::days(7),
            StatsPeriod::Month => timestamp >= now.checked_sub_months(Months::new(1)).unwrap_or(now),
            StatsPeriod::Year => timestamp >= now.checked_sub_months(Months::new(12)).unwrap_or(now),
        }
    }
}

impl fmt::Display for StatsPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodStats {
    pub average_intensity: f64,
    pub most_common_category: Option<MoodCategory>,
    pub most_common_trigger: Option<MoodTrigger>,
    pub total_entries: usize,
    /// Average intensity for each of the last seven days, oldest first.
    pub weekly_trend: Vec<f64>,
}

impl MoodStats {
    pub fn compute(entries: &[MoodEntry], period: StatsPeriod, now: DateTime<Local>) -> Self {
        let filtered: Vec<&MoodEntry> = entries.iter().filter(|e| period.contains(e.timestamp, now)).collect();

        let most_common_category = most_common(&MoodCategory::ALL, |category| {
            filtered.iter().filter(|e| e.category == *category).count()
        });
        let most_common_trigger = most_common(&MoodTrigger::ALL, |trigger| {
            filtered.iter().filter(|e| e.triggers.contains(trigger)).count()
        });

        MoodStats {
            average_intensity: average_intensity(filtered.iter().copied()),
            most_common_category,
            most_common_trigger,
            total_entries: filtered.len(),
            weekly_trend: weekly_trend(entries, now.date_naive()),
        }
    }
}

/// Mean intensity, 0 for no entries.
pub fn average_intensity<'a>(entries: impl IntoIterator<Item = &'a MoodEntry>) -> f64 {
    let (sum, count) = entries.into_iter().fold((0u32, 0u32), |(sum, count), e| (sum + u32::from(e.intensity), count + 1));
    if count == 0 {
        0.0
    } else {
        f64::from(sum) / f64::from(count)
    }
}

/// Daily average intensity for the seven days ending with `today`, oldest first.
pub fn weekly_trend(entries: &[MoodEntry], today: NaiveDate) -> Vec<f64> {
    (0..7)
        .rev()
        .map(|offset| {
            let day = today - Duration::days(offset);
            average_intensity(entries.iter().filter(|e| e.date() == day))
        })
        .collect()
}

// Ties go to the variant declared first.
fn most_common<T: Copy>(candidates: &[T], count: impl Fn(&T) -> usize) -> Option<T> {
    let mut best: Option<(T, usize)> = None;
    for candidate in candidates {
        let n = count(candidate);
        if n == 0 {
            continue;
        }
        match best {
            Some((_, best_n)) if best_n >= n => {}
            _ => best = Some((*candidate, n)),
        }
    }
    best.map(|(candidate, _)| candidate)
}
