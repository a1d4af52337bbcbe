//! Configuration and path management for Utsav

pub mod paths;
pub mod settings;

pub use paths::UtsavPaths;
pub use settings::Settings;
