//! Logging setup for the tix CLI.

pub mod logger;

pub use logger::init_logger;
