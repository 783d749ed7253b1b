//! UDP discovery of Jenkins instances
//!
//! Jenkins listens on UDP port 33848 and answers any datagram with a small
//! XML document such as
//! `<hudson><version>2.440</version><url>http://ci:8080/</url></hudson>`.

use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;
use tokio::net::{UdpSocket, lookup_host};

use super::{ClientError, DiscoveryInfo, Result};

/// Port Jenkins answers discovery probes on
pub const DISCOVERY_PORT: u16 = 33848;

static VERSION_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<version>\s*([^<]*?)\s*</version>").expect("valid pattern"));
static URL_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<url>\s*([^<]*?)\s*</url>").expect("valid pattern"));

/// Probes `host:port` and waits up to `wait` for a reply
pub async fn discover(host: &str, port: u16, wait: Duration) -> Result<DiscoveryInfo> {
    let target = lookup_host((host, port)).await?.next().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("no address found for {host}"),
        )
    })?;

    let socket = UdpSocket::bind(local_addr_for(target)).await?;
    if target.is_ipv4() {
        socket.set_broadcast(true)?;
    }

    tracing::debug!("Sending discovery probe to {} ({})", host, target);
    socket.send_to(b"\n", target).await?;

    let mut buf = vec![0u8; 4096];
    let (len, peer) = tokio::time::timeout(wait, socket.recv_from(&mut buf))
        .await
        .map_err(|_| ClientError::DiscoveryTimeout {
            host: host.to_string(),
            timeout: wait,
        })??;

    tracing::debug!("Discovery reply from {} ({} bytes)", peer, len);
    parse_discovery_reply(&String::from_utf8_lossy(&buf[..len]))
}

/// Unspecified local address in the same family as `target`
fn local_addr_for(target: SocketAddr) -> SocketAddr {
    match target {
        SocketAddr::V4(_) => (Ipv4Addr::UNSPECIFIED, 0).into(),
        SocketAddr::V6(_) => (Ipv6Addr::UNSPECIFIED, 0).into(),
    }
}

/// Extracts version and URL from a discovery reply
pub fn parse_discovery_reply(reply: &str) -> Result<DiscoveryInfo> {
    let capture = |re: &Regex, tag: &str| {
        re.captures(reply)
            .and_then(|c| c.get(1))
            .map(|m| unescape(m.as_str()))
            .filter(|value| !value.is_empty())
            .ok_or_else(|| {
                ClientError::MalformedResponse(format!("discovery reply has no <{tag}>"))
            })
    };

    Ok(DiscoveryInfo {
        version: capture(&*VERSION_TAG, "version")?,
        url: capture(&*URL_TAG, "url")?,
    })
}

fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
