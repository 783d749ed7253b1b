//! `jenkctl queue` - View queued jobs

use anyhow::Result;
use jenkctl::{CiClient, QueueEntry};

/// Shown when nothing is waiting
pub const EMPTY_QUEUE: &str = "Queue is empty";

/// Fetches and renders the build queue
pub async fn queue(client: &dyn CiClient) -> Result<Vec<String>> {
    let entries = client.queue().await?;
    Ok(render_queue(&entries))
}

/// `- <job>` per queued job, in queue order
pub fn render_queue(entries: &[QueueEntry]) -> Vec<String> {
    if entries.is_empty() {
        return vec![EMPTY_QUEUE.to_string()];
    }
    entries.iter().map(|entry| format!("- {entry}")).collect()
}
