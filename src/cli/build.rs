//! `jenkctl build` - Trigger a build
//!
//! ## Usage
//!
//! ```bash
//! jenkctl build <jobname> ["param1=value1&param2=value2"]
//! ```
//!
//! Parameters are handed to Jenkins as-is; checking them is up to the server.

use anyhow::Result;
use jenkctl::CiClient;

/// Triggers a build of `job`
pub async fn build(client: &dyn CiClient, job: &str, params: Option<&str>) -> Result<Vec<String>> {
    tracing::debug!("Triggering {} with params {:?}", job, params);
    client.build(job, params).await?;
    Ok(vec![render_build_started(job)])
}

/// Confirmation line for a triggered build
pub fn render_build_started(job: &str) -> String {
    format!("Job {job} was started successfully")
}
