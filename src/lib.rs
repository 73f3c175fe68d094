pub mod app;
pub mod commands;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod parity;
pub mod services;
pub mod telemetry;
