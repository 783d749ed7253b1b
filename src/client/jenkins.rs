//! Jenkins JSON API client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Method, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

use super::discovery::{self, DISCOVERY_PORT};
use super::{
    CiClient, ClientError, DiscoveryInfo, ExecutorBoard, ExecutorEntry, JobDetail, JobStatus,
    JobSummary, QueueEntry, Result,
};
use crate::infrastructure::Config;

const VERSION_HEADER: &str = "X-Jenkins";

/// Client for a single Jenkins instance
#[derive(Debug, Clone)]
pub struct JenkinsClient {
    http: reqwest::Client,
    base_url: Option<String>,
    timeout: Duration,
}

/// A resolved request target with credentials split off the URL
struct Endpoint {
    url: Url,
    credentials: Option<(String, Option<String>)>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Crumb {
    crumb: String,
    crumb_request_field: String,
}

#[derive(Debug, Deserialize)]
struct DashboardPayload {
    #[serde(default)]
    jobs: Vec<JobPayload>,
}

#[derive(Debug, Deserialize)]
struct JobPayload {
    name: String,
    color: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JobDetailPayload {
    color: Option<String>,
    #[serde(default)]
    health_report: Vec<HealthReportPayload>,
}

#[derive(Debug, Deserialize)]
struct HealthReportPayload {
    description: String,
}

#[derive(Debug, Deserialize)]
struct ComputersPayload {
    #[serde(default)]
    computer: Vec<ComputerPayload>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ComputerPayload {
    display_name: String,
    #[serde(default)]
    executors: Vec<ExecutorPayload>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExecutorPayload {
    #[serde(default)]
    idle: bool,
    #[serde(default)]
    likely_stuck: bool,
    #[serde(default)]
    progress: i32,
    #[serde(default)]
    number: u32,
    current_executable: Option<ExecutablePayload>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExecutablePayload {
    full_display_name: Option<String>,
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct QueuePayload {
    #[serde(default)]
    items: Vec<QueueItemPayload>,
}

#[derive(Debug, Deserialize)]
struct QueueItemPayload {
    task: TaskPayload,
}

#[derive(Debug, Deserialize)]
struct TaskPayload {
    name: String,
}

fn job_status(color: Option<&str>) -> JobStatus {
    color.map_or_else(|| JobStatus::new("UNKNOWN"), JobStatus::from_color)
}

/// Path segments of a job followed by `rest`; `folder/app` becomes `job/folder/job/app`
fn job_path<'a>(job: &'a str, rest: &[&'a str]) -> Vec<&'a str> {
    job.split('/')
        .filter(|s| !s.is_empty())
        .flat_map(|name| ["job", name])
        .chain(rest.iter().copied())
        .collect()
}

/// Job name from a build URL such as `http://ci/job/app/12/`
fn job_name_from_url(url: &str) -> Option<String> {
    let segments: Vec<&str> = url.split('/').filter(|s| !s.is_empty()).collect();
    segments
        .iter()
        .rposition(|s| *s == "job")
        .and_then(|i| segments.get(i + 1))
        .map(|s| (*s).to_string())
}

impl ExecutorPayload {
    fn into_entry(self) -> ExecutorEntry {
        let fallback = format!("#{}", self.number);
        if self.idle {
            return ExecutorEntry::idle(fallback);
        }

        let name = self
            .current_executable
            .and_then(|exe| {
                exe.full_display_name
                    .or_else(|| exe.url.as_deref().and_then(job_name_from_url))
            })
            .unwrap_or(fallback);
        ExecutorEntry::running(name, self.progress, self.likely_stuck)
    }
}

/// Maps a non-success response to an error; 404 means a missing job when `job` is set
fn check_status(response: Response, job: Option<&str>) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    match job {
        Some(job) if status == StatusCode::NOT_FOUND => {
            Err(ClientError::JobNotFound(job.to_string()))
        }
        _ => Err(ClientError::UnexpectedStatus {
            status: status.as_u16(),
            url: response.url().to_string(),
        }),
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let url = response.url().to_string();
    response
        .json::<T>()
        .await
        .map_err(|e| ClientError::MalformedResponse(format!("{url}: {e}")))
}

impl JenkinsClient {
    /// Creates a client for the server configured in `config`.
    ///
    /// The URL is not checked here; a missing or invalid URL is reported by
    /// the first request.
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("jenkctl/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: config.jenkins_url.clone(),
            timeout: config.timeout,
        })
    }

    fn endpoint(&self, segments: &[&str], query: Option<&str>) -> Result<Endpoint> {
        let raw = self.base_url.as_deref().ok_or(ClientError::MissingUrl)?;
        let invalid = |reason: String| ClientError::InvalidUrl {
            url: raw.to_string(),
            reason,
        };

        let mut url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
        }

        let credentials = if url.username().is_empty() {
            None
        } else {
            Some((
                url.username().to_string(),
                url.password().map(str::to_string),
            ))
        };
        // Only fails for URLs without a host, which http(s) URLs always have
        let _ = url.set_username("");
        let _ = url.set_password(None);

        if !segments.is_empty() {
            url.path_segments_mut()
                .map_err(|()| invalid("cannot be a base URL".to_string()))?
                .pop_if_empty()
                .extend(segments);
        }
        url.set_query(query);

        Ok(Endpoint { url, credentials })
    }

    async fn send(
        &self,
        method: Method,
        endpoint: Endpoint,
        crumb: Option<&Crumb>,
    ) -> Result<Response> {
        tracing::debug!("{} {}", method, endpoint.url);

        let mut request = self.http.request(method, endpoint.url);
        if let Some((user, password)) = &endpoint.credentials {
            request = request.basic_auth(user, password.as_ref());
        }
        if let Some(crumb) = crumb {
            request = request.header(crumb.crumb_request_field.as_str(), crumb.crumb.as_str());
        }

        let response = request.send().await?;
        tracing::debug!("Response status: {}", response.status());
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: Option<&str>,
        job: Option<&str>,
    ) -> Result<T> {
        let endpoint = self.endpoint(segments, query)?;
        let response = self.send(Method::GET, endpoint, None).await?;
        read_json(check_status(response, job)?).await
    }

    /// Fetches a CSRF crumb; `None` when the server does not issue one
    async fn crumb(&self) -> Result<Option<Crumb>> {
        let endpoint = self.endpoint(&["crumbIssuer", "api", "json"], None)?;
        let response = self.send(Method::GET, endpoint, None).await?;

        if !response.status().is_success() {
            tracing::debug!("No crumb issued ({})", response.status());
            return Ok(None);
        }
        read_json(response).await.map(Some)
    }
}

#[async_trait]
impl CiClient for JenkinsClient {
    async fn build(&self, job: &str, params: Option<&str>) -> Result<()> {
        let crumb = self.crumb().await?;
        let endpoint = match params {
            Some(params) => {
                self.endpoint(&job_path(job, &["buildWithParameters"]), Some(params))?
            }
            None => self.endpoint(&job_path(job, &["build"]), None)?,
        };

        let response = self.send(Method::POST, endpoint, crumb.as_ref()).await?;
        check_status(response, Some(job))?;
        tracing::info!("Triggered build of {}", job);
        Ok(())
    }

    async fn dashboard(&self) -> Result<Vec<JobSummary>> {
        let payload: DashboardPayload = self.get_json(&["api", "json"], None, None).await?;
        Ok(payload
            .jobs
            .into_iter()
            .map(|job| JobSummary {
                status: job_status(job.color.as_deref()),
                name: job.name,
            })
            .collect())
    }

    async fn discover(&self, host: &str) -> Result<DiscoveryInfo> {
        discovery::discover(host, DISCOVERY_PORT, self.timeout).await
    }

    async fn executor_status(&self) -> Result<ExecutorBoard> {
        let payload: ComputersPayload = self
            .get_json(&["computer", "api", "json"], Some("depth=1"), None)
            .await?;

        let mut board = ExecutorBoard::new();
        for computer in payload.computer {
            let executors = computer
                .executors
                .into_iter()
                .map(ExecutorPayload::into_entry)
                .collect();
            board.insert(computer.display_name, executors);
        }
        Ok(board)
    }

    async fn job_status(&self, job: &str) -> Result<JobDetail> {
        let payload: JobDetailPayload = self
            .get_json(&job_path(job, &["api", "json"]), None, Some(job))
            .await?;

        Ok(JobDetail {
            status: job_status(payload.color.as_deref()),
            reports: payload
                .health_report
                .into_iter()
                .map(|report| report.description)
                .collect(),
        })
    }

    async fn queue(&self) -> Result<Vec<QueueEntry>> {
        let payload: QueuePayload = self.get_json(&["queue", "api", "json"], None, None).await?;
        Ok(payload.items.into_iter().map(|item| item.task.name).collect())
    }

    async fn version(&self) -> Result<String> {
        let endpoint = self.endpoint(&[], None)?;
        let response = self.send(Method::GET, endpoint, None).await?;

        if let Some(version) = response.headers().get(VERSION_HEADER) {
            return version
                .to_str()
                .map(str::to_string)
                .map_err(|e| ClientError::MalformedResponse(format!("{VERSION_HEADER}: {e}")));
        }

        let response = check_status(response, None)?;
        Err(ClientError::NotJenkins(response.url().to_string()))
    }
}
