//! Configuration management for transcription job defaults.
//!
//! This crate loads the defaults applied to new jobs from `.env` files,
//! `TRANSCRIBE_*` environment variables, and JSON profile files.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{JobDefaults, ProfileFile};
