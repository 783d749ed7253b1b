//! `jenkctl ver` - View the Jenkins version number

use anyhow::Result;
use jenkctl::CiClient;

/// Fetches and renders the server version
pub async fn ver(client: &dyn CiClient) -> Result<Vec<String>> {
    let version = client.version().await?;
    Ok(vec![render_version(&version)])
}

/// `Jenkins ver. <version>`
pub fn render_version(version: &str) -> String {
    format!("Jenkins ver. {version}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::testing::StubClient;

    #[tokio::test]
    async fn test_ver() {
        let client = StubClient::default();
        assert_eq!(ver(&client).await.unwrap(), ["Jenkins ver. 2.440.1"]);
    }

    #[tokio::test]
    async fn test_ver_failure() {
        let client = StubClient::failing();
        let err = ver(&client).await.unwrap_err();
        assert_eq!(err.to_string(), "Unexpected status 500 from http://ci.example.com/");
    }
}
