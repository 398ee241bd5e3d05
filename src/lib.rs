pub mod battery;
pub mod classify;
pub mod client;
pub mod config;
pub mod constants;
pub mod formatter;
pub mod runner;
pub mod schedule;
pub mod sequencer;
pub mod types;
