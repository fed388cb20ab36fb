//! User configuration stored as `config.json` in the data directory.
//!
//! Every section is optional; a missing section means built-in defaults.

use super::data_storage::DataStorage;
use super::focus::{session_duration, FocusPreset};
use super::habit::DEFAULT_GOAL;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::{Context, Result};
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Defaults applied to newly created habits.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HabitConfig {
    pub default_goal: f64,
    #[serde(default)]
    pub default_unit: String,
}

impl Default for HabitConfig {
    fn default() -> Self {
        HabitConfig {
            default_goal: DEFAULT_GOAL,
            default_unit: String::new(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FocusConfig {
    pub default_preset: FocusPreset,
    /// Length of the `Custom` preset in minutes.
    pub custom_minutes: u32,
}

impl Default for FocusConfig {
    fn default() -> Self {
        FocusConfig {
            default_preset: FocusPreset::Pomodoro,
            custom_minutes: FocusPreset::Custom.default_minutes(),
        }
    }
}

impl FocusConfig {
    pub fn duration_for(&self, preset: FocusPreset) -> Result<Duration> {
        Ok(session_duration(preset, Some(self.custom_minutes))?)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub habits: Option<HabitConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus: Option<FocusConfig>,
}

impl Config {
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(config_file_path)
    }

    /// Reads the configuration at `path`, defaults when the file does not exist.
    pub fn read_from(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str).with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(config_file_path)
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    pub fn habits(&self) -> HabitConfig {
        self.habits.clone().unwrap_or_default()
    }

    pub fn focus(&self) -> FocusConfig {
        self.focus.clone().unwrap_or_default()
    }

    /// Interactive wizard; starts from the saved configuration when there is one.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ConfigModule {
                key: "habits".to_string(),
                name: Message::ConfigModuleHabits.to_string(),
            },
            ConfigModule {
                key: "focus".to_string(),
                name: Message::ConfigModuleFocus.to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "habits" => {
                    let default = config.habits();
                    msg_print!(Message::ConfigModuleHabits);
                    config.habits = Some(HabitConfig {
                        default_goal: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptDefaultGoal.to_string())
                            .default(default.default_goal)
                            .validate_with(|goal: &f64| if goal.is_finite() && *goal > 0.0 { Ok(()) } else { Err("Goal must be positive") })
                            .interact_text()?,

                        default_unit: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptDefaultUnit.to_string())
                            .default(default.default_unit)
                            .allow_empty(true)
                            .interact_text()?,
                    });
                }
                "focus" => {
                    let default = config.focus();
                    msg_print!(Message::ConfigModuleFocus);
                    let preset_index = Select::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptDefaultPreset.to_string())
                        .items(&FocusPreset::ALL.iter().map(|p| p.as_str()).collect::<Vec<_>>())
                        .default(FocusPreset::ALL.iter().position(|p| *p == default.default_preset).unwrap_or(0))
                        .interact()?;

                    config.focus = Some(FocusConfig {
                        default_preset: FocusPreset::ALL[preset_index],
                        custom_minutes: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptCustomMinutes.to_string())
                            .default(default.custom_minutes)
                            .validate_with(|minutes: &u32| if *minutes > 0 { Ok(()) } else { Err("At least one minute") })
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
