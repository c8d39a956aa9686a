//! Own-address detection.
//!
//! Default for the CLI `--ip` flag: resolve the machine's hostname and
//! take the first address, preferring IPv4. This is deliberately thin —
//! the OS resolver does the work.

use crate::error::{DdnsError, Result};
use std::net::IpAddr;

/// Resolve this machine's own IP address via hostname lookup.
pub async fn local_ip() -> Result<IpAddr> {
    let hostname = gethostname::gethostname()
        .into_string()
        .map_err(|name| DdnsError::IpDetection(format!("non-UTF-8 hostname: {name:?}")))?;

    let addrs: Vec<IpAddr> = tokio::net::lookup_host((hostname.as_str(), 0))
        .await
        .map_err(|e| DdnsError::IpDetection(format!("cannot resolve {hostname}: {e}")))?
        .map(|addr| addr.ip())
        .collect();

    let ip = addrs
        .iter()
        .find(|ip| ip.is_ipv4())
        .or_else(|| addrs.first())
        .copied()
        .ok_or_else(|| DdnsError::IpDetection(format!("no address for {hostname}")))?;

    tracing::debug!("resolved {} to {}", hostname, ip);
    Ok(ip)
}
