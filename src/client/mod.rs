//! CI server client
//!
//! The [`CiClient`] trait is the seam between command handling and the
//! remote server. [`JenkinsClient`] implements it against the Jenkins JSON
//! API and the UDP discovery protocol.

mod discovery;
mod errors;
mod jenkins;
mod types;

use async_trait::async_trait;

pub use discovery::{DISCOVERY_PORT, discover, parse_discovery_reply};
pub use errors::ClientError;
pub use jenkins::JenkinsClient;
pub use types::{
    Computer, DiscoveryInfo, ExecutorBoard, ExecutorEntry, ExecutorState, JobDetail, JobStatus,
    JobSummary, QueueEntry,
};

/// Result type for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Operations offered by a CI server
#[async_trait]
#[allow(clippy::missing_errors_doc)]
pub trait CiClient: Send + Sync {
    /// Triggers a build, passing `params` (`key1=value1&key2=value2`) through untouched
    async fn build(&self, job: &str, params: Option<&str>) -> Result<()>;

    /// Lists all jobs with their status
    async fn dashboard(&self) -> Result<Vec<JobSummary>>;

    /// Locates a Jenkins instance running on `host`
    async fn discover(&self, host: &str) -> Result<DiscoveryInfo>;

    /// Lists executors per computer
    async fn executor_status(&self) -> Result<ExecutorBoard>;

    /// Fetches the status and reports of a job
    async fn job_status(&self, job: &str) -> Result<JobDetail>;

    /// Lists queued jobs
    async fn queue(&self) -> Result<Vec<QueueEntry>>;

    /// Fetches the server version
    async fn version(&self) -> Result<String>;
}
