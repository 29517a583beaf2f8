pub mod broker;
pub mod config;
pub mod decision;
pub mod engine;
pub mod notify;
pub mod window;

pub use config::{AppConfig, Mode};
