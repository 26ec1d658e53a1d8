//! interop-core
//!
//! Selection engine for the interoperability worksheet. Pure domain types,
//! no I/O: single-select groups over fixed option tables, cross-group
//! recommendation rules, and the selection summary handed to the export layer.

pub mod error;
pub mod models;
