//! Core library modules for the wraptime application.
//!
//! Domain logic (hours calculation, weekly grouping, attachment
//! downscaling) together with the shared infrastructure the commands are
//! built on: configuration, messaging, storage paths, display formatting
//! and data export.

pub mod config;
pub mod data_storage;
pub mod export;
pub mod formatter;
pub mod hours;
pub mod image;
pub mod messages;
pub mod secret;
pub mod timelog;
pub mod view;
pub mod week;
