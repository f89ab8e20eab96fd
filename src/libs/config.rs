//! Configuration management for the calstat application.
//!
//! The configuration names the calendar sources and the contract figures
//! the balance computation needs: per user a calendar URL, an annual
//! vacation-day allowance and monthly contract hours; per project the
//! onsite and remote hourly rates; plus optional shared fetch credentials
//! and the public-holiday calendar URL. It is stored as JSON in the
//! platform-specific application data directory and can be created through
//! an interactive setup wizard.

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::{msg_error_anyhow, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Shared fetch settings and the public-holiday source.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct GeneralConfig {
    /// HTTP basic auth user for calendar fetches, unless the URL carries
    /// its own credentials.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// URL of the public-holiday calendar; its events carry no user and
    /// only mark the workday table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_holidays: Option<String>,
}

/// One reportable user and their contract figures.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UserConfig {
    pub name: String,
    /// Calendar URL for this user's events.
    pub cal: String,
    /// Annual vacation-day allowance.
    pub vacation: u16,
    /// Monthly contract hours.
    pub monthhours: u16,
}

/// One project with its hourly rates.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ProjectConfig {
    pub name: String,
    /// Onsite hourly rate, decimal currency.
    pub onsite: f64,
    /// Remote hourly rate, decimal currency.
    pub remote: f64,
}

impl ProjectConfig {
    pub fn onsite_centi(&self) -> Result<u16> {
        to_centi(self.onsite)
    }

    pub fn remote_centi(&self) -> Result<u16> {
        to_centi(self.remote)
    }
}

/// Converts a decimal rate to fixed-point hundredths, rounding half-up.
pub fn to_centi(value: f64) -> Result<u16> {
    let centi = value * 100.0 + 0.5;
    if !(0.0..=f64::from(u16::MAX)).contains(&centi) {
        return Err(msg_error_anyhow!(Message::RateOutOfRange(value)));
    }
    Ok(centi as u16)
}

/// Main configuration container.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub users: Vec<UserConfig>,
    #[serde(default)]
    pub projects: Vec<ProjectConfig>,
}

impl Config {
    /// Reads the configuration, falling back to defaults if no file exists.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Deletes the configuration file if present.
    pub fn delete() -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    pub fn find_user(&self, name: &str) -> Option<&UserConfig> {
        self.users.iter().find(|user| user.name == name)
    }

    pub fn find_project(&self, name: &str) -> Option<&ProjectConfig> {
        self.projects.iter().find(|project| project.name == name)
    }

    /// Runs the interactive configuration setup wizard.
    ///
    /// Starts from the existing configuration so values can be confirmed or
    /// adjusted, then collects the general settings and any number of users
    /// and projects.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        let theme = ColorfulTheme::default();

        msg_print!(Message::ConfigModuleGeneral);
        let fetch_user: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptFetchUser.to_string())
            .allow_empty(true)
            .default(config.general.user.clone().unwrap_or_default())
            .interact_text()?;
        config.general.user = (!fetch_user.is_empty()).then_some(fetch_user);

        let fetch_password: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptFetchPassword.to_string())
            .allow_empty(true)
            .default(config.general.password.clone().unwrap_or_default())
            .interact_text()?;
        config.general.password = (!fetch_password.is_empty()).then_some(fetch_password);

        let holidays: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptHolidayUrl.to_string())
            .allow_empty(true)
            .default(config.general.public_holidays.clone().unwrap_or_default())
            .interact_text()?;
        config.general.public_holidays = (!holidays.is_empty()).then_some(holidays);

        while Confirm::with_theme(&theme)
            .with_prompt(Message::PromptAddUser.to_string())
            .default(false)
            .interact()?
        {
            config.users.push(UserConfig {
                name: Input::with_theme(&theme)
                    .with_prompt(Message::PromptUserName.to_string())
                    .interact_text()?,
                cal: Input::with_theme(&theme)
                    .with_prompt(Message::PromptUserCal.to_string())
                    .interact_text()?,
                vacation: Input::with_theme(&theme)
                    .with_prompt(Message::PromptUserVacation.to_string())
                    .default(30)
                    .interact_text()?,
                monthhours: Input::with_theme(&theme)
                    .with_prompt(Message::PromptUserMonthHours.to_string())
                    .default(160)
                    .interact_text()?,
            });
        }

        while Confirm::with_theme(&theme)
            .with_prompt(Message::PromptAddProject.to_string())
            .default(false)
            .interact()?
        {
            config.projects.push(ProjectConfig {
                name: Input::with_theme(&theme)
                    .with_prompt(Message::PromptProjectName.to_string())
                    .interact_text()?,
                onsite: Input::with_theme(&theme)
                    .with_prompt(Message::PromptProjectOnsite.to_string())
                    .default(0.0)
                    .interact_text()?,
                remote: Input::with_theme(&theme)
                    .with_prompt(Message::PromptProjectRemote.to_string())
                    .default(0.0)
                    .interact_text()?,
            });
        }

        Ok(config)
    }
}
