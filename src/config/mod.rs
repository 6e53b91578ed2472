//! Configuration and path management for finsight

pub mod paths;
pub mod settings;

pub use paths::FinsightPaths;
pub use settings::Settings;
