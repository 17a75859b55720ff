//! Configuration module for VibePay
//!
//! - path resolution for settings and the key-value store
//! - user settings persistence

pub mod paths;
pub mod settings;

pub use paths::VibepayPaths;
pub use settings::Settings;
