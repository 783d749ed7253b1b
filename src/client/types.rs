//! Results returned by the CI server, shaped for rendering

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status keyword of a job, e.g. `OK`, `FAIL` or `DISABLED`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobStatus(String);

impl JobStatus {
    /// Creates a status from a keyword
    pub fn new(keyword: impl Into<String>) -> Self {
        Self(keyword.into())
    }

    /// Derives a status from a Jenkins ball color such as `blue` or `red_anime`
    #[must_use]
    pub fn from_color(color: &str) -> Self {
        if color.ends_with("_anime") {
            return Self::new("BUILDING");
        }

        let keyword = match color {
            "blue" | "green" => "OK",
            "red" => "FAIL",
            "yellow" => "WARN",
            "grey" | "aborted" => "ABORTED",
            "disabled" => "DISABLED",
            "notbuilt" => "NOTBUILT",
            other => return Self::new(other.to_uppercase()),
        };
        Self::new(keyword)
    }

    /// The keyword as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One entry of the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSummary {
    /// Job name
    pub name: String,
    /// Current status
    pub status: JobStatus,
}

impl JobSummary {
    /// Creates a dashboard entry
    pub fn new(name: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: JobStatus::new(status),
        }
    }
}

/// Status and health reports of a single job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDetail {
    /// Current status
    pub status: JobStatus,
    /// Build and test report descriptions, in server order
    pub reports: Vec<String>,
}

/// What an executor is doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExecutorState {
    /// Waiting for work
    Idle,
    /// Running a build
    Running {
        /// Estimated completion in percent, `-1` when unknown
        progress: i32,
        /// Running far beyond its expected duration
        stuck: bool,
    },
}

/// A build slot on a computer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutorEntry {
    /// Executor name, usually the build it runs
    pub name: String,
    /// Idle or running
    pub state: ExecutorState,
}

impl ExecutorEntry {
    /// An idle executor
    pub fn idle(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: ExecutorState::Idle,
        }
    }

    /// An executor running a build
    pub fn running(name: impl Into<String>, progress: i32, stuck: bool) -> Self {
        Self {
            name: name.into(),
            state: ExecutorState::Running { progress, stuck },
        }
    }
}

/// A computer (node) and its executors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Computer {
    /// Node name
    pub name: String,
    /// Executors in server order
    pub executors: Vec<ExecutorEntry>,
}

/// Executors grouped by computer, in the order the server listed them.
///
/// Computer names are unique: inserting a known name extends its executors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutorBoard {
    computers: Vec<Computer>,
}

impl ExecutorBoard {
    /// An empty board
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds executors for `computer`
    pub fn insert(&mut self, computer: impl Into<String>, executors: Vec<ExecutorEntry>) {
        let name = computer.into();
        match self.computers.iter_mut().find(|c| c.name == name) {
            Some(existing) => existing.executors.extend(executors),
            None => self.computers.push(Computer { name, executors }),
        }
    }

    /// Builder-style [`ExecutorBoard::insert`]
    #[must_use]
    pub fn with(mut self, computer: impl Into<String>, executors: Vec<ExecutorEntry>) -> Self {
        self.insert(computer, executors);
        self
    }

    /// Computers in board order
    pub fn computers(&self) -> impl Iterator<Item = &Computer> {
        self.computers.iter()
    }

    /// True when no computer is known
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.computers.is_empty()
    }
}

/// Name of a job waiting in the build queue
pub type QueueEntry = String;

/// A Jenkins instance found by discovery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryInfo {
    /// Jenkins version
    pub version: String,
    /// Canonical root URL
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_color() {
        assert_eq!(JobStatus::from_color("blue").as_str(), "OK");
        assert_eq!(JobStatus::from_color("green").as_str(), "OK");
        assert_eq!(JobStatus::from_color("red").as_str(), "FAIL");
        assert_eq!(JobStatus::from_color("yellow").as_str(), "WARN");
        assert_eq!(JobStatus::from_color("grey").as_str(), "ABORTED");
        assert_eq!(JobStatus::from_color("aborted").as_str(), "ABORTED");
        assert_eq!(JobStatus::from_color("disabled").as_str(), "DISABLED");
        assert_eq!(JobStatus::from_color("notbuilt").as_str(), "NOTBUILT");
        assert_eq!(JobStatus::from_color("red_anime").as_str(), "BUILDING");
        assert_eq!(JobStatus::from_color("purple").as_str(), "PURPLE");
    }

    #[test]
    fn test_board_keeps_insertion_order() {
        let board = ExecutorBoard::new()
            .with("zeta", vec![ExecutorEntry::idle("0")])
            .with("alpha", vec![ExecutorEntry::idle("0")]);

        let names: Vec<_> = board.computers().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["zeta", "alpha"]);
    }

    #[test]
    fn test_board_merges_duplicate_computers() {
        let board = ExecutorBoard::new()
            .with("node1", vec![ExecutorEntry::idle("0")])
            .with("node1", vec![ExecutorEntry::running("app #3", 10, false)]);

        let computers: Vec<_> = board.computers().collect();
        assert_eq!(computers.len(), 1);
        assert_eq!(computers[0].name, "node1");
        assert_eq!(computers[0].executors.len(), 2);
    }

    #[test]
    fn test_empty_board() {
        assert!(ExecutorBoard::new().is_empty());
    }

    #[test]
    fn test_status_serializes_as_keyword() {
        let json = serde_json::to_string(&JobStatus::new("OK")).unwrap();
        assert_eq!(json, r#""OK""#);
    }
}
