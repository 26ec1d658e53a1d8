//! interop-worksheet library root.
//!
//! Session state, presentation-facing commands, and config for the
//! worksheet. Re-exported so the CLI binary and integration tests drive
//! the same code paths.

pub mod commands;
pub mod config;
pub mod state;
