//! Error types for the Jenkins client

use std::time::Duration;
use thiserror::Error;

/// Errors raised while talking to a CI server
#[derive(Error, Debug)]
pub enum ClientError {
    /// No server URL was configured
    #[error("JENKINS_URL environment variable is not set")]
    MissingUrl,

    /// The configured server URL cannot be used
    #[error("Invalid Jenkins URL '{url}': {reason}")]
    InvalidUrl {
        /// The rejected URL.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Transport-level failure
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("Unexpected status {status} from {url}")]
    UnexpectedStatus {
        /// HTTP status code.
        status: u16,
        /// Requested URL, without credentials.
        url: String,
    },

    /// The requested job does not exist
    #[error("Job {0} does not exist")]
    JobNotFound(String),

    /// The server does not identify itself as Jenkins
    #[error("{0} is not a Jenkins server")]
    NotJenkins(String),

    /// The response could not be understood
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// No Jenkins instance answered the discovery probe in time
    #[error("No Jenkins found on {host} within {timeout:?}")]
    DiscoveryTimeout {
        /// Probed host.
        host: String,
        /// How long the probe waited.
        timeout: Duration,
    },

    /// Socket error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
