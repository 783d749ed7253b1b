//! `jenkctl dashboard` - View status of all jobs
//!
//! Prints one line per job in the order Jenkins lists them, with the status
//! colorized.

use anyhow::Result;
use jenkctl::{CiClient, JobSummary, colorize_job_status};

/// Shown when the server has no jobs
pub const NO_JOBS: &str = "Jobless Jenkins";

/// Fetches and renders the dashboard
pub async fn dashboard(client: &dyn CiClient) -> Result<Vec<String>> {
    let jobs = client.dashboard().await?;
    Ok(render_dashboard(&jobs))
}

/// `<status> - <name>` per job
pub fn render_dashboard(jobs: &[JobSummary]) -> Vec<String> {
    if jobs.is_empty() {
        return vec![NO_JOBS.to_string()];
    }

    jobs.iter()
        .map(|job| format!("{} - {}", colorize_job_status(job.status.as_str()), job.name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::testing::StubClient;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_empty_dashboard() {
        assert_eq!(render_dashboard(&[]), ["Jobless Jenkins"]);
    }

    #[test]
    fn test_render_dashboard_colors_in_order() {
        let lines = render_dashboard(&[JobSummary::new("a", "OK"), JobSummary::new("b", "FAIL")]);
        assert_eq!(
            lines,
            ["\x1b[32mOK\x1b[0m - a", "\x1b[31mFAIL\x1b[0m - b"]
        );
    }

    #[test]
    fn test_render_dashboard_unknown_status_uncolored() {
        let lines = render_dashboard(&[
            JobSummary::new("old", "DISABLED"),
            JobSummary::new("cancelled", "ABORTED"),
        ]);
        assert_eq!(lines, ["\x1b[33mDISABLED\x1b[0m - old", "ABORTED - cancelled"]);
    }

    #[test]
    fn test_render_dashboard_keeps_server_order() {
        let lines = render_dashboard(&[
            JobSummary::new("zeta", "BUILDING"),
            JobSummary::new("alpha", "BUILDING"),
        ]);
        assert_eq!(lines, ["BUILDING - zeta", "BUILDING - alpha"]);
    }

    #[tokio::test]
    async fn test_dashboard_uses_client() {
        let client = StubClient {
            jobs: vec![JobSummary::new("app", "WARN")],
            ..StubClient::default()
        };
        assert_eq!(dashboard(&client).await.unwrap(), ["WARN - app"]);
    }
}
