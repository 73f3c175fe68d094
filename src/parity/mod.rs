pub mod config_loader;
pub mod even;
pub mod logger;
pub mod reports;
pub mod runner;
pub mod types;

pub use even::{add_even, is_even, sum_even};
