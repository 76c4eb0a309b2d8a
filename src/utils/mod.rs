//! Utility modules shared by the generators and the CLI.

pub mod date;
pub mod path;
pub mod url;
