//! Terminal front end: wires stdin commands to the core state machine and the
//! store worker.
mod app;
mod commands;
mod config;
mod effects;
mod logging;
mod persistence;
mod render;

pub use app::run_app;
