//! Configuration management for the wraptime application.
//!
//! Handles the per-user settings file: crew identity, production office API
//! connection and attachment image defaults. Configuration lives as JSON in
//! the platform data directory and is created through an interactive wizard
//! (`wraptime init`). Passwords are never stored here; see
//! [`crate::libs::secret`].

use crate::api::office::OfficeConfig;
use crate::libs::data_storage::DataStorage;
use crate::libs::image::{DEFAULT_MAX_DIMENSION, DEFAULT_QUALITY};
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name inside the application data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Departments a crew member can belong to on the daily entry form.
pub const DEPARTMENTS: [&str; 8] = [
    "PRODUCTION",
    "REALISATION",
    "IMAGE",
    "SON",
    "LUMIERE",
    "REGIE",
    "DECO",
    "HMC",
];

/// A configurable module shown by the interactive wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Unique identifier for the module used in configuration routing
    pub key: String,
    /// Display name shown to users during interactive setup
    pub name: String,
}

/// Who the recorded hours belong to.
///
/// A snapshot of these fields is copied into every saved time log, matching
/// what the production office expects on submitted timesheets.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct IdentityConfig {
    /// Work email; also the user id in time log keys.
    pub email: String,
    /// Full display name.
    pub name: String,
    /// One of [`DEPARTMENTS`].
    pub department: String,
}

impl IdentityConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "identity".to_string(),
            name: "Crew identity".to_string(),
        }
    }

    /// Interactive prompt, pre-filled from any existing configuration.
    pub fn init(existing: &Option<IdentityConfig>) -> Result<Self> {
        let current = existing.clone().unwrap_or_else(|| IdentityConfig {
            email: String::new(),
            name: String::new(),
            department: DEPARTMENTS[0].to_string(),
        });

        let email: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Work email")
            .with_initial_text(&current.email)
            .interact_text()?;
        let name: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Full name")
            .with_initial_text(&current.name)
            .interact_text()?;
        let default_department = DEPARTMENTS.iter().position(|d| *d == current.department).unwrap_or(0);
        let department = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Department")
            .items(&DEPARTMENTS)
            .default(default_department)
            .interact()?;

        Ok(Self {
            email,
            name,
            department: DEPARTMENTS[department].to_string(),
        })
    }
}

/// Attachment downscaling defaults.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ImageConfig {
    /// Longest-side cap in pixels for uploaded attachments.
    pub max_dimension: u32,
    /// JPEG quality (0-100) for re-encoded attachments.
    pub quality: u8,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            max_dimension: DEFAULT_MAX_DIMENSION,
            quality: DEFAULT_QUALITY,
        }
    }
}

/// Application configuration root.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Crew identity stamped onto saved time logs.
    pub identity: Option<IdentityConfig>,
    /// Production office API connection.
    pub office: Option<OfficeConfig>,
    /// Attachment downscaling overrides.
    #[serde(default)]
    pub image: Option<ImageConfig>,
}

impl Config {
    /// Reads the configuration file, or returns defaults when none exists.
    pub fn read() -> Result<Self> {
        let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(&config_path)?;
        let config = serde_json::from_str(&raw).map_err(|_| msg_error_anyhow!(Message::ConfigParseError))?;
        Ok(config)
    }

    /// Writes the configuration file.
    pub fn save(&self) -> Result<()> {
        let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let file = File::create(config_path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Removes the configuration file. A missing file is not an error.
    pub fn delete() -> Result<()> {
        let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_path.exists() {
            fs::remove_file(config_path)?;
        }
        Ok(())
    }

    /// Runs the interactive configuration wizard over the selected modules.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        let modules = [IdentityConfig::module(), OfficeConfig::module()];
        let module_names: Vec<&str> = modules.iter().map(|m| m.name.as_str()).collect();

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt("Select modules to configure")
            .items(&module_names)
            .defaults(&[true, false])
            .interact()?;

        for index in selected {
            match modules[index].key.as_str() {
                "identity" => config.identity = Some(IdentityConfig::init(&config.identity)?),
                "office" => config.office = Some(OfficeConfig::init(&config.office)?),
                _ => {}
            }
        }

        Ok(config)
    }

    /// The configured identity, or an error telling the user to run `init`.
    pub fn require_identity(&self) -> Result<&IdentityConfig> {
        self.identity.as_ref().ok_or_else(|| msg_error_anyhow!(Message::ConfigIdentityMissing))
    }

    /// The configured office connection, or an error telling the user to run `init`.
    pub fn require_office(&self) -> Result<&OfficeConfig> {
        self.office.as_ref().ok_or_else(|| msg_error_anyhow!(Message::ConfigOfficeMissing))
    }

    /// Effective attachment image settings.
    pub fn image_settings(&self) -> ImageConfig {
        self.image.clone().unwrap_or_default()
    }
}
