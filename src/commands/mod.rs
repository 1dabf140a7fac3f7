//! CLI subcommands

pub mod create;
pub mod import;
pub mod list;
pub mod render;
