pub mod config;
pub mod detectors;
pub mod domain;
pub mod infrastructure;
pub mod pipeline;

pub use config::{load_config, ConfigError, FilterConfig};
pub use domain::{Detection, SpamLogEntry, Submission, Verdict};
pub use pipeline::classify;
