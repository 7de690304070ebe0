//! Encrypted password cache for the production office session.
//!
//! The office password is never stored in the configuration file. It is
//! prompted interactively, then kept AES-encrypted in the application data
//! directory so subsequent logins do not re-prompt. The key and IV are
//! embedded at build time (see `build.rs`).

use super::data_storage::DataStorage;
use aes::Aes256;
use anyhow::Result;
use base64::prelude::*;
use block_modes::block_padding::Pkcs7;
use block_modes::{BlockMode, Cbc};
use dialoguer::{theme::ColorfulTheme, Password};
use std::fs;
use std::path::PathBuf;

// Include generated metadata with encryption keys
include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

type Aes256Cbc = Cbc<Aes256, Pkcs7>;

#[derive(Clone, Debug)]
pub struct Secret {
    prompt: String,
    cache_path: PathBuf,
}

impl Secret {
    pub fn new(secret_name: &str, prompt: &str) -> Self {
        let cache_path = DataStorage::new()
            .get_path(secret_name)
            .unwrap_or_else(|_| PathBuf::from(secret_name));

        Self {
            prompt: prompt.to_owned(),
            cache_path,
        }
    }

    /// Returns the cached password, prompting and caching when no readable
    /// cache exists.
    pub fn get_or_prompt(&self) -> Result<String> {
        if self.cache_path.exists() {
            if let Ok(password) = self.decrypt() {
                return Ok(password);
            }
        }
        self.prompt()
    }

    /// Prompts for the password and replaces the cache with it.
    pub fn prompt(&self) -> Result<String> {
        let password = Password::with_theme(&ColorfulTheme::default())
            .with_prompt(&self.prompt)
            .interact()?;
        self.encrypt(&password)?;
        Ok(password)
    }

    /// Removes the cached password. A missing cache is not an error.
    pub fn forget(&self) -> Result<()> {
        if self.cache_path.exists() {
            fs::remove_file(&self.cache_path)?;
        }
        Ok(())
    }

    fn encrypt(&self, password: &str) -> Result<()> {
        let cipher = Aes256Cbc::new_from_slices(APP_METADATA_ENCRYPTION_KEY, APP_METADATA_ENCRYPTION_IV)?;
        let ciphertext = cipher.encrypt_vec(password.as_bytes());
        let encoded = BASE64_STANDARD.encode(&ciphertext);

        if let Some(parent) = self.cache_path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        fs::write(&self.cache_path, encoded.as_bytes())?;

        Ok(())
    }

    fn decrypt(&self) -> Result<String> {
        let encoded = fs::read_to_string(&self.cache_path)?;
        let ciphertext = BASE64_STANDARD.decode(encoded.trim())?;
        let cipher = Aes256Cbc::new_from_slices(APP_METADATA_ENCRYPTION_KEY, APP_METADATA_ENCRYPTION_IV)?;
        let decrypted = cipher.decrypt_vec(&ciphertext)?;

        Ok(String::from_utf8(decrypted)?)
    }
}
