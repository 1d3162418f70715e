use url::Url;

use crate::core::auc::AucResource;

/// Validate an API endpoint
///
/// Must be an absolute http(s) URL with a host.
pub fn validate_endpoint(name: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{name} must not be empty"));
    }

    let url = Url::parse(value).map_err(|e| format!("{name} is not a valid URL: {e}"))?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(format!("{name} must use http or https, got: {other}")),
    }
    if url.host_str().is_none() {
        return Err(format!("{name} must have a host"));
    }

    Ok(())
}

pub fn validate_resource(resource: &AucResource) -> Result<(), String> {
    if resource.as_str().is_empty() {
        return Err("resource id must not be empty".to_string());
    }
    Ok(())
}

/// All transport timeouts must be non-zero
pub fn validate_timeouts(connect: u64, read: u64, request: u64) -> Result<(), String> {
    if connect == 0 || read == 0 || request == 0 {
        return Err(format!(
            "HTTP timeouts must be greater than zero (connect={connect}s, read={read}s, request={request}s)"
        ));
    }
    Ok(())
}

pub fn validate_poll(interval_ms: u64, max_wait_secs: Option<u64>) -> Result<(), String> {
    if interval_ms == 0 {
        return Err("poll interval must be greater than zero".to_string());
    }
    if max_wait_secs == Some(0) {
        return Err("max wait must be greater than zero when set".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_endpoint_ok() {
        assert!(validate_endpoint("submit_url", "https://example.com/submit").is_ok());
        assert!(validate_endpoint("submit_url", "http://127.0.0.1:8080/submit").is_ok());
    }

    #[test]
    fn test_validate_endpoint_empty() {
        let err = validate_endpoint("query_url", "").unwrap_err();
        assert!(err.contains("query_url"));
    }

    #[test]
    fn test_validate_endpoint_bad_scheme() {
        assert!(validate_endpoint("submit_url", "ftp://example.com/submit").is_err());
        assert!(validate_endpoint("submit_url", "not a url").is_err());
    }

    #[test]
    fn test_validate_resource_empty_custom() {
        assert!(validate_resource(&AucResource::Custom(String::new())).is_err());
        assert!(validate_resource(&AucResource::SeedAsr).is_ok());
    }

    #[test]
    fn test_validate_timeouts() {
        assert!(validate_timeouts(60, 60, 60).is_ok());
        assert!(validate_timeouts(0, 60, 60).is_err());
        assert!(validate_timeouts(60, 60, 0).is_err());
    }

    #[test]
    fn test_validate_poll() {
        assert!(validate_poll(1000, None).is_ok());
        assert!(validate_poll(1000, Some(600)).is_ok());
        assert!(validate_poll(0, None).is_err());
        assert!(validate_poll(1000, Some(0)).is_err());
    }
}
