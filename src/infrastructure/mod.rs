//! Infrastructure layer
//!
//! Configuration and logging setup.

mod config;
mod logging;

pub use config::{Config, JENKINS_URL_VAR, LOG_LEVEL_VAR, TIMEOUT_VAR};
pub use logging::init_logging;
