//! CLI commands for jenkctl
//!
//! Each command awaits a single call on the [`CiClient`] and renders the
//! result into output lines:
//! - `build`: Trigger a build with optional parameters
//! - `dashboard`: View status of all jobs
//! - `discover`: Discover a Jenkins instance on a host
//! - `executor`: View executors' status
//! - `job`: View job status reports
//! - `queue`: View queued jobs
//! - `ver`: View the Jenkins version

pub mod build;
pub mod dashboard;
pub mod discover;
pub mod executor;
pub mod job;
pub mod queue;
pub mod ver;

use anyhow::Result;
use clap::{Parser, Subcommand};
use jenkctl::{CiClient, Config, JenkinsClient};
use std::io::Write;

/// CLI arguments for jenkctl
#[derive(Parser, Debug)]
#[command(name = "jenkctl")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Trigger a build with optional parameters
    #[command(after_help = "Example:\n\tjenkctl build <jobname> [\"param1=value1&param2=value2\"]")]
    Build {
        /// Job to build
        job: String,
        /// Build parameters, e.g. "param1=value1&param2=value2"
        params: Option<String>,
    },

    /// View status of all jobs
    Dashboard,

    /// Discover Jenkins instance running on a specified host
    Discover {
        /// Host to probe
        host: String,
    },

    /// View executors' status (running builds)
    Executor,

    /// View job status reports
    Job {
        /// Job to inspect
        name: String,
    },

    /// View queued jobs
    Queue,

    /// View Jenkins version number
    Ver,
}

impl Command {
    /// Subcommand name as typed on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Self::Build { .. } => "build",
            Self::Dashboard => "dashboard",
            Self::Discover { .. } => "discover",
            Self::Executor => "executor",
            Self::Job { .. } => "job",
            Self::Queue => "queue",
            Self::Ver => "ver",
        }
    }
}

/// Runs `command` against `client` and returns the lines to print.
///
/// Nothing is rendered when the client call fails.
pub async fn execute(command: Command, client: &dyn CiClient) -> Result<Vec<String>> {
    tracing::debug!("Running command: {}", command.name());

    match command {
        Command::Build { job, params } => build::build(client, &job, params.as_deref()).await,
        Command::Dashboard => dashboard::dashboard(client).await,
        Command::Discover { host } => discover::discover(client, &host).await,
        Command::Executor => executor::executor(client).await,
        Command::Job { name } => job::job(client, &name).await,
        Command::Queue => queue::queue(client).await,
        Command::Ver => ver::ver(client).await,
    }
}

/// Parse and execute CLI arguments
pub async fn run(config: &Config) -> Result<()> {
    let args = Args::parse();
    let client = JenkinsClient::new(config)?;

    let lines = execute(args.command, &client).await?;

    let mut stdout = std::io::stdout().lock();
    for line in lines {
        writeln!(stdout, "{line}")?;
    }
    Ok(())
}
