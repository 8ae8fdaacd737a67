pub mod env;
mod loader;

pub use env::{ConfigError, FilterConfig, LoggingConfig};
pub use loader::load_config;
