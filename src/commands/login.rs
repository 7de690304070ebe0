use crate::api::{office::Office, Session};
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;

/// Establishes (or restores) a production office session.
pub async fn cmd() -> Result<()> {
    let config = Config::read()?;
    let identity = config.require_identity()?;
    let office = config.require_office()?;

    Office::new(office, &identity.email).get_session_id().await?;
    msg_success!(Message::LoginSuccess);

    Ok(())
}
