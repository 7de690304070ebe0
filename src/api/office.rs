use crate::api::{Session, MAX_RETRY_COUNT};
use crate::libs::config::ConfigModule;
use crate::libs::image::MediaFile;
use crate::libs::secret::Secret;
use crate::libs::timelog::TimeLog;
use crate::libs::week::WeekKey;
use anyhow::Result;
use chrono::{Duration, NaiveDate};
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::{multipart, Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::fs;

const SESSION_ID_FILE: &str = ".office_session_id";
const SECRET_FILE: &str = ".office_secret";
const LOGIN_URL: &str = "auth/login";
const TIMESHEET_URL: &str = "timesheet/submit-week";
const ATTACHMENT_URL: &str = "timesheet/upload-attachment";

#[derive(Serialize)]
struct LoginCredentials {
    email: String,
    password: String,
}

#[derive(Deserialize)]
struct AuthSession {
    token: String,
}

/// Production office API connection settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OfficeConfig {
    /// Base URL of the office API, e.g. `https://office.example.com/api`.
    pub api_url: String,
    /// Production identifier timesheets are filed under.
    pub project: String,
}

impl OfficeConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "office".to_string(),
            name: "Production office API".to_string(),
        }
    }

    /// Interactive prompt, pre-filled from any existing configuration.
    pub fn init(existing: &Option<OfficeConfig>) -> Result<Self> {
        let current = existing.clone().unwrap_or_else(|| OfficeConfig {
            api_url: String::new(),
            project: String::new(),
        });

        let api_url: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Office API URL")
            .with_initial_text(&current.api_url)
            .interact_text()?;
        let project: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Production id")
            .with_initial_text(&current.project)
            .interact_text()?;

        Ok(Self { api_url, project })
    }
}

/// HTTP client for the production office backend.
pub struct Office {
    client: Client,
    config: OfficeConfig,
    email: String,
    secret: Secret,
    credentials: Option<LoginCredentials>,
    retries: i32,
}

impl Office {
    pub fn new(config: &OfficeConfig, email: &str) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
            email: email.to_string(),
            secret: Secret::new(SECRET_FILE, "Enter your production office password"),
            credentials: None,
            retries: 0,
        }
    }

    /// Submits one week of time logs. Retries once through a fresh login on
    /// an expired session, up to the retry bound.
    pub async fn submit_week(&mut self, week: &WeekKey, logs: &[TimeLog]) -> Result<StatusCode> {
        loop {
            let token = self.get_session_id().await?;
            let url = format!("{}/{}", self.config.api_url, TIMESHEET_URL);
            let payload = serde_json::json!({
                "project": self.config.project,
                "week": week.to_string(),
                "logs": logs,
            });

            let res = self.client.post(url).bearer_auth(token).json(&payload).send().await?;

            match res.status() {
                StatusCode::UNAUTHORIZED if self.retries < MAX_RETRY_COUNT => {
                    self.delete_session_id()?;
                    tokio::time::sleep(Duration::seconds(1).to_std()?).await;
                    self.retries += 1;
                    continue;
                }
                _ => return Ok(res.status()),
            }
        }
    }

    /// Uploads a (downscaled) attachment for a shooting day.
    pub async fn upload_attachment(&mut self, date: NaiveDate, file: &MediaFile) -> Result<StatusCode> {
        loop {
            let token = self.get_session_id().await?;
            let url = format!("{}/{}", self.config.api_url, ATTACHMENT_URL);
            let part = multipart::Part::bytes(file.data.clone())
                .file_name(file.name.clone())
                .mime_str(&file.content_type)?;
            let form = multipart::Form::new()
                .text("project", self.config.project.clone())
                .text("date", date.format("%Y-%m-%d").to_string())
                .part("file", part);

            let res = self.client.post(url).bearer_auth(token).multipart(form).send().await?;

            match res.status() {
                StatusCode::UNAUTHORIZED if self.retries < MAX_RETRY_COUNT => {
                    self.delete_session_id()?;
                    tokio::time::sleep(Duration::seconds(1).to_std()?).await;
                    self.retries += 1;
                    continue;
                }
                _ => return Ok(res.status()),
            }
        }
    }

    /// Clears the cached session token and password. Missing caches are
    /// not errors.
    pub fn clear_session(&self) -> Result<()> {
        let session_path = crate::libs::data_storage::DataStorage::new().get_path(SESSION_ID_FILE)?;
        if session_path.exists() {
            fs::remove_file(session_path)?;
        }
        self.secret.forget()?;
        Ok(())
    }
}

impl Session for Office {
    async fn login(&self) -> Result<String> {
        let url = format!("{}/{}", self.config.api_url, LOGIN_URL);
        let credentials = self
            .credentials
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("credentials not set before login"))?;

        let res = self.client.post(url).json(credentials).send().await?;
        let session: AuthSession = res.error_for_status()?.json().await?;

        Ok(session.token)
    }

    fn set_credentials(&mut self, password: &str) -> Result<()> {
        self.credentials = Some(LoginCredentials {
            email: self.email.clone(),
            password: password.to_string(),
        });
        Ok(())
    }

    fn session_id_file(&self) -> &str {
        SESSION_ID_FILE
    }

    fn secret(&self) -> Secret {
        self.secret.clone()
    }

    fn retry(&self) -> i32 {
        self.retries
    }

    fn inc_retry(&mut self) {
        self.retries += 1;
    }
}
