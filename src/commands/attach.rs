//! Attachment command: downscale and upload a day's image.
//!
//! Reads a file from disk, runs it through the image downscaler and either
//! uploads it to the production office for the given date or, with
//! `--output`, writes the compressed copy locally instead. Non-image files
//! and images the downscaler cannot process are uploaded as-is; attaching
//! never fails because of a bad image.

use crate::api::office::Office;
use crate::commands::parse_date;
use crate::libs::config::Config;
use crate::libs::image::{content_type_for, downscale, MediaFile};
use crate::libs::messages::Message;
use crate::{msg_error, msg_success};
use anyhow::{anyhow, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Command-line arguments for the attach command.
#[derive(Debug, Args)]
pub struct AttachArgs {
    /// File to attach (call sheet photo, receipt, ...)
    file: PathBuf,

    /// Date the attachment belongs to
    #[arg(long, short, default_value = "today", help = "Date of the entry (YYYY-MM-DD or 'today')")]
    date: String,

    /// Write the compressed file here instead of uploading
    #[arg(long, short, help = "Write the downscaled copy to this path instead of uploading")]
    output: Option<PathBuf>,
}

/// Downscales the file and uploads it (or writes it locally).
pub async fn cmd(args: AttachArgs) -> Result<()> {
    let date = parse_date(&args.date)?;

    let name = args
        .file
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow!("invalid file name: {}", args.file.display()))?
        .to_string();
    let data = fs::read(&args.file)?;
    let file = MediaFile::new(name, content_type_for(&args.file), data);

    let config = Config::read()?;
    let image_settings = config.image_settings();
    let compressed = downscale(file, image_settings.max_dimension, image_settings.quality).await;

    if let Some(output) = args.output {
        fs::write(&output, &compressed.data)?;
        msg_success!(Message::AttachmentSaved(output.display().to_string()));
        return Ok(());
    }

    let identity = config.require_identity()?;
    let office = config.require_office()?;

    let status = Office::new(office, &identity.email).upload_attachment(date, &compressed).await?;
    if status.is_success() {
        msg_success!(Message::AttachmentUploaded(
            compressed.name.clone(),
            date.format("%Y-%m-%d").to_string()
        ));
    } else {
        msg_error!(Message::AttachmentUploadFailed(status.to_string()));
    }

    Ok(())
}
