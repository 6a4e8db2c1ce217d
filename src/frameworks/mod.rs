// Frameworks layer: configuration, argument parsing and process bootstrap.

pub mod cli;
pub mod config;
pub mod runner;
