//! Configuration module for the envseal CLI
//!
//! - Path resolution for the settings file and audit log
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::SealPaths;
pub use settings::{OutputEncoding, Settings};
