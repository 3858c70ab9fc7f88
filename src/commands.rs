//! Command implementations backing the CLI subcommands.

pub mod generate;
pub mod init;
pub mod run;
