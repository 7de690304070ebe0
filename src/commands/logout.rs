use crate::api::office::Office;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;

/// Clears the cached office session token and password.
pub fn cmd() -> Result<()> {
    let config = Config::read()?;
    let identity = config.require_identity()?;
    let office = config.require_office()?;

    Office::new(office, &identity.email).clear_session()?;
    msg_success!(Message::LogoutSuccess);

    Ok(())
}
