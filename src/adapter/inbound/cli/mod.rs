//! CLI module graph.

pub mod command;
pub mod config;
pub mod diagnostic;
pub mod input;
pub mod output;
pub mod paths;
pub mod project;
pub mod solve;
