pub mod config;
pub mod error;
pub mod show;
pub mod stage;
pub mod types;
