//! Audio URL validation
//!
//! The recognition service downloads the audio itself, so the URL must be
//! absolute, use http(s) and name a host. Addresses the service cannot reach
//! (loopback, private ranges) are accepted but logged.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use thiserror::Error;
use tracing::warn;
use url::{Host, Url};

/// Errors that can occur during URL validation
#[derive(Debug, Error)]
pub enum UrlValidationError {
    #[error("Audio URL must not be empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(#[from] url::ParseError),

    #[error("URL scheme must be http or https, got: {0}")]
    UnsupportedScheme(String),

    #[error("URL must have a host")]
    MissingHost,
}

/// Checks if an IPv4 address is private/internal
///
/// Covers loopback, RFC 1918, link-local, broadcast, unspecified,
/// documentation and CGNAT (100.64.0.0/10) ranges.
pub fn is_private_ipv4(ip: &Ipv4Addr) -> bool {
    if ip.is_loopback()
        || ip.is_private()
        || ip.is_link_local()
        || ip.is_broadcast()
        || ip.is_unspecified()
        || ip.is_documentation()
    {
        return true;
    }
    let octets = ip.octets();
    octets[0] == 100 && (octets[1] & 0xC0) == 64
}

/// Checks if an IPv6 address is private/internal
pub fn is_private_ipv6(ip: &Ipv6Addr) -> bool {
    if ip.is_loopback() || ip.is_unspecified() {
        return true;
    }
    let segments = ip.segments();

    // Link-local (fe80::/10)
    if segments[0] & 0xFFC0 == 0xFE80 {
        return true;
    }
    // Unique local (fc00::/7)
    if segments[0] & 0xFE00 == 0xFC00 {
        return true;
    }
    if let Some(ipv4) = ip.to_ipv4_mapped() {
        return is_private_ipv4(&ipv4);
    }
    false
}

pub fn is_private_ip(ip: &IpAddr) -> bool {
    match ip {
        IpAddr::V4(ipv4) => is_private_ipv4(ipv4),
        IpAddr::V6(ipv6) => is_private_ipv6(ipv6),
    }
}

/// Validates an audio URL before it is placed in the submit payload
///
/// # Returns
/// * `Ok(Url)` - the parsed URL
/// * `Err(UrlValidationError)` if the URL is empty, malformed, not http(s),
///   or has no host
///
/// # Example
/// ```rust
/// use volc_auc::utils::url_validation::validate_audio_url;
///
/// assert!(validate_audio_url("https://cdn.example.com/meeting.mp3").is_ok());
/// assert!(validate_audio_url("file:///tmp/meeting.mp3").is_err());
/// assert!(validate_audio_url("").is_err());
/// ```
pub fn validate_audio_url(url: &str) -> Result<Url, UrlValidationError> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    let parsed = Url::parse(trimmed)?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => return Err(UrlValidationError::UnsupportedScheme(other.to_string())),
    }

    let ip = match parsed.host() {
        Some(Host::Ipv4(ip)) => Some(IpAddr::V4(ip)),
        Some(Host::Ipv6(ip)) => Some(IpAddr::V6(ip)),
        Some(Host::Domain(domain)) => {
            if domain.eq_ignore_ascii_case("localhost") {
                warn!(host = %domain, "Audio URL points to localhost");
            }
            None
        }
        None => return Err(UrlValidationError::MissingHost),
    };
    if let Some(ip) = ip
        && is_private_ip(&ip)
    {
        warn!(host = %ip, "Audio URL points to a private address the service cannot reach");
    }

    Ok(parsed)
}
