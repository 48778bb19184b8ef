//! Utility helpers shared by console views and the CLI.

pub mod date;
