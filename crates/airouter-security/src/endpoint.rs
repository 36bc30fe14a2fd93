// SPDX-FileCopyrightText: 2026 airouter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Outbound endpoint policy for inference backends.
//!
//! Local inference normally runs on the same machine or the same LAN, so
//! plain HTTP is accepted for loopback, private-range, and single-label
//! hosts. Anything reachable over the public internet must use HTTPS.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::time::Duration;

use airouter_core::RouterError;
use tracing::error;
use url::{Host, Url};

/// Build a reqwest client with TLS 1.2+ and the given request timeout.
pub fn build_client(timeout: Duration) -> Result<reqwest::Client, RouterError> {
    reqwest::Client::builder()
        .min_tls_version(reqwest::tls::Version::TLS_1_2)
        .timeout(timeout)
        .build()
        .map_err(|e| {
            error!("failed to build HTTP client: {e}");
            RouterError::Security(format!("failed to build HTTP client: {e}"))
        })
}

/// Parse and check an inference endpoint base URL.
///
/// Returns the parsed URL with any trailing slash removed from the path.
pub fn validate_endpoint(raw: &str) -> Result<Url, RouterError> {
    let mut url =
        Url::parse(raw).map_err(|e| RouterError::Security(format!("invalid URL `{raw}`: {e}")))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(RouterError::Security(format!(
            "unsupported scheme `{}` in `{raw}`",
            url.scheme()
        )));
    }

    if !url.username().is_empty() || url.password().is_some() {
        return Err(RouterError::Security(format!(
            "credentials are not allowed in endpoint URL `{}`",
            url.host_str().unwrap_or_default()
        )));
    }

    let Some(host) = url.host() else {
        return Err(RouterError::Security(format!("endpoint `{raw}` has no host")));
    };

    if url.scheme() == "http" && !is_local_host(&host) {
        error!(url = %raw, "TLS required for non-local inference endpoint");
        return Err(RouterError::Security(format!(
            "TLS required for non-local endpoint `{raw}`, use HTTPS"
        )));
    }

    let trimmed = url.path().trim_end_matches('/').to_string();
    url.set_path(&trimmed);
    Ok(url)
}

/// Loopback, private-range, link-local, `.local`, and single-label hosts.
pub fn is_local_host(host: &Host<&str>) -> bool {
    match host {
        Host::Domain(name) => {
            let name = name.trim_end_matches('.');
            name.eq_ignore_ascii_case("localhost") || name.ends_with(".local") || !name.contains('.')
        }
        Host::Ipv4(ip) => is_local_ipv4(ip),
        Host::Ipv6(ip) => is_local_ipv6(ip),
    }
}

/// Same check for a bare address string.
pub fn is_local_addr(addr: &str) -> bool {
    let addr = addr.trim_start_matches('[').trim_end_matches(']');
    match addr.parse::<IpAddr>() {
        Ok(IpAddr::V4(ip)) => is_local_ipv4(&ip),
        Ok(IpAddr::V6(ip)) => is_local_ipv6(&ip),
        Err(_) => is_local_host(&Host::Domain(addr)),
    }
}

fn is_local_ipv4(ip: &Ipv4Addr) -> bool {
    ip.is_loopback() || ip.is_private() || ip.is_link_local()
}

fn is_local_ipv6(ip: &Ipv6Addr) -> bool {
    // fc00::/7 unique local, fe80::/10 link local.
    let first = ip.segments()[0];
    ip.is_loopback() || (first & 0xfe00) == 0xfc00 || (first & 0xffc0) == 0xfe80
}
