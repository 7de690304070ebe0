//! API client for the production office backend.
//!
//! The production office runs the external document store that receives
//! submitted timesheets and attachments. Only the thin HTTP client lives
//! here; authentication and storage themselves are the backend's business.
//!
//! Session handling follows one pattern: the session token is cached on
//! disk, the password is cached encrypted (see [`crate::libs::secret`]),
//! and authentication retries are bounded before giving up.

use crate::libs::messages::Message;
use crate::libs::{data_storage::DataStorage, secret::Secret};
use crate::msg_error_anyhow;
use anyhow::Result;
use std::fs;
use std::io::Write;

pub mod office;

pub use office::OfficeConfig;

/// Maximum number of authentication retry attempts before giving up.
pub(crate) const MAX_RETRY_COUNT: i32 = 3;

/// Common session management for API clients.
///
/// Implementors provide the login call and credential plumbing; the trait
/// supplies the cached-session lifecycle: restore from disk, authenticate
/// with bounded retries, persist the fresh token.
#[allow(async_fn_in_trait)]
pub trait Session {
    /// Performs authentication and returns a session token.
    async fn login(&self) -> Result<String>;

    /// Stores the password for the next [`Session::login`] call.
    fn set_credentials(&mut self, password: &str) -> Result<()>;

    /// File name used for the cached session token.
    fn session_id_file(&self) -> &str;

    /// Encrypted password cache for this client.
    fn secret(&self) -> Secret;

    /// Current retry attempt count.
    fn retry(&self) -> i32;

    /// Increments the retry counter after a failed attempt.
    fn inc_retry(&mut self);

    /// Retrieves the cached session token or establishes a new one.
    async fn get_session_id(&mut self) -> Result<String> {
        let session_id_file_path = DataStorage::new().get_path(self.session_id_file())?;
        let session_id_file_path_str = session_id_file_path.to_str().unwrap();

        if let Ok(session_id) = Self::read_session_id(session_id_file_path_str) {
            return Ok(session_id);
        }

        loop {
            // Force a fresh prompt once a cached password has failed
            let password: String = match self.retry() > 0 {
                true => self.secret().prompt()?,
                false => self.secret().get_or_prompt()?,
            };

            self.set_credentials(&password)?;

            match self.login().await {
                Ok(session_id) => {
                    let _ = Self::write_session_id(session_id_file_path_str, &session_id);
                    return Ok(session_id);
                }
                Err(_) => {
                    if self.retry() < MAX_RETRY_COUNT {
                        self.inc_retry();
                        continue;
                    }
                    return Err(msg_error_anyhow!(Message::WrongPassword(MAX_RETRY_COUNT)));
                }
            }
        }
    }

    /// Reads a cached session token from disk.
    fn read_session_id(file_name: &str) -> Result<String> {
        Ok(fs::read_to_string(file_name)?)
    }

    /// Persists a session token for future runs.
    fn write_session_id(file_name: &str, session_id: &str) -> Result<()> {
        let mut file = fs::OpenOptions::new().write(true).create(true).truncate(true).open(file_name)?;
        file.write_all(session_id.as_bytes())?;
        Ok(())
    }

    /// Drops the cached session token, forcing re-authentication.
    fn delete_session_id(&self) -> Result<()> {
        let session_id_file_path = DataStorage::new().get_path(self.session_id_file())?;
        fs::remove_file(session_id_file_path)?;
        Ok(())
    }
}
