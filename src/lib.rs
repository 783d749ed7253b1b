//! # Jenkctl - Jenkins from the command line
//!
//! Jenkctl triggers and inspects jobs on a Jenkins server without opening a
//! browser. The server is identified by the `JENKINS_URL` environment
//! variable.
//!
//! ## Features
//!
//! - **Builds**: Trigger jobs, optionally with `key=value&...` parameters
//! - **Status**: Colorized dashboard, per-job health reports, build queue
//! - **Executors**: Running builds per node with progress and stuck markers
//! - **Discovery**: Locate Jenkins instances over UDP
//!
//! ## Layout
//!
//! - [`client`]: the [`CiClient`] trait and its Jenkins implementation
//! - [`color`]: ANSI colors and job status colorization
//! - [`infrastructure`]: configuration and logging
//!
//! ## License
//!
//! Licensed under either of
//! - Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <https://www.apache.org/licenses/LICENSE-2.0>)
//! - MIT license ([LICENSE-MIT](LICENSE-MIT) or <https://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod client;
pub mod color;
pub mod infrastructure;

// Re-export commonly used types
pub use client::{
    CiClient, ClientError, Computer, DiscoveryInfo, ExecutorBoard, ExecutorEntry, ExecutorState,
    JenkinsClient, JobDetail, JobStatus, JobSummary, QueueEntry,
};
pub use color::{Color, colorize, colorize_job_status};
pub use infrastructure::{Config, init_logging};
