//! `jenkctl executor` - View executors' status
//!
//! Lists every computer followed by its executors:
//!
//! ```text
//! + master
//!   - idle
//!   - app #12 | 87% stuck!
//! ```

use anyhow::Result;
use jenkctl::{CiClient, ExecutorBoard, ExecutorEntry, ExecutorState};

/// Shown when the server reports no computers
pub const NO_EXECUTORS: &str = "No executor found";

/// Fetches and renders executors per computer
pub async fn executor(client: &dyn CiClient) -> Result<Vec<String>> {
    let board = client.executor_status().await?;
    Ok(render_executors(&board))
}

/// Header line per computer, then one indented line per executor
pub fn render_executors(board: &ExecutorBoard) -> Vec<String> {
    if board.is_empty() {
        return vec![NO_EXECUTORS.to_string()];
    }

    let mut lines = Vec::new();
    for computer in board.computers() {
        lines.push(format!("+ {}", computer.name));
        lines.extend(computer.executors.iter().map(render_executor));
    }
    lines
}

fn render_executor(executor: &ExecutorEntry) -> String {
    match executor.state {
        ExecutorState::Idle => "  - idle".to_string(),
        ExecutorState::Running { progress, stuck } => format!(
            "  - {} | {}%{}",
            executor.name,
            progress,
            if stuck { " stuck!" } else { "" }
        ),
    }
}
