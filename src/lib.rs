// Library exports for the snake arena simulation
// This allows integration tests and external tooling to drive the core

pub mod config;
pub mod engine;
pub mod game;
pub mod grid;
pub mod perception;
pub mod policy;
pub mod sinks;
pub mod tick_log;
pub mod types;
