//! `jenkctl discover` - Discover a Jenkins instance on a host
//!
//! ## Usage
//!
//! ```bash
//! jenkctl discover <hostname>
//! ```

use anyhow::Result;
use jenkctl::{CiClient, DiscoveryInfo};

/// Probes `host` for a Jenkins instance
pub async fn discover(client: &dyn CiClient, host: &str) -> Result<Vec<String>> {
    let info = client.discover(host).await?;
    Ok(vec![render_discovery(&info)])
}

/// Version and URL of the discovered instance
pub fn render_discovery(info: &DiscoveryInfo) -> String {
    format!("Jenkins ver. {} is running on {}", info.version, info.url)
}
