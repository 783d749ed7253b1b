//! `jenkctl job` - View job status reports
//!
//! ## Usage
//!
//! ```bash
//! jenkctl job <jobname>
//! ```

use anyhow::Result;
use jenkctl::{CiClient, JobDetail};

/// Fetches and renders the status and reports of `name`
pub async fn job(client: &dyn CiClient, name: &str) -> Result<Vec<String>> {
    let detail = client.job_status(name).await?;
    Ok(render_job(name, &detail))
}

/// `<name> | <status>` followed by one line per report; the status is not colorized
pub fn render_job(name: &str, detail: &JobDetail) -> Vec<String> {
    std::iter::once(format!("{} | {}", name, detail.status))
        .chain(detail.reports.iter().map(|report| format!(" - {report}")))
        .collect()
}
