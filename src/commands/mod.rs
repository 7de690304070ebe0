pub mod attach;
pub mod export;
pub mod init;
pub mod log;
pub mod login;
pub mod logout;
pub mod rm;
pub mod submit;
pub mod sum;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Record or replace the time log for a day")]
    Log(log::LogArgs),
    #[command(about = "Delete the time log for a day")]
    Rm(rm::RmArgs),
    #[command(about = "Show weekly hour summaries")]
    Sum,
    #[command(about = "Export the timesheet to a file")]
    Export(export::ExportArgs),
    #[command(about = "Send a week of logs to the production office")]
    Submit(submit::SubmitArgs),
    #[command(about = "Downscale and upload an attachment for a day")]
    Attach(attach::AttachArgs),
    #[command(about = "Sign in to the production office")]
    Login,
    #[command(about = "Clear the cached office session")]
    Logout,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Log(args) => log::cmd(args),
            Commands::Rm(args) => rm::cmd(args),
            Commands::Sum => sum::cmd(),
            Commands::Export(args) => export::cmd(args),
            Commands::Submit(args) => submit::cmd(args).await,
            Commands::Attach(args) => attach::cmd(args).await,
            Commands::Login => login::cmd().await,
            Commands::Logout => logout::cmd(),
        }
    }
}

/// Parses a date argument, either the keyword 'today' or 'YYYY-MM-DD'.
pub(crate) fn parse_date(date_str: &str) -> Result<NaiveDate> {
    if date_str.eq_ignore_ascii_case("today") {
        Ok(Local::now().date_naive())
    } else {
        Ok(NaiveDate::parse_from_str(date_str, "%Y-%m-%d")?)
    }
}
