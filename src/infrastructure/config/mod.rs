//! Infrastructure configuration modules.

pub mod logging;
pub mod pricing;
pub mod settings;
