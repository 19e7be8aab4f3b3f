//! Configuration files, logging setup and solver wiring.
//!
//! - [`config`] - TOML settings and their validation
//! - [`factory`] - Builds allocators and planners from settings

pub mod config;
pub mod factory;
