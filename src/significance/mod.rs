pub mod config;
pub mod engine;
pub mod format;
pub mod input;
pub mod stats;
