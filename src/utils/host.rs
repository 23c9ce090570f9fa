//! Hostname extraction and normalization.

use crate::AppError;
use axum::http::{HeaderMap, header};

/// Extracts the hostname from HTTP request headers.
///
/// Parses the `Host` header and normalizes the result via
/// [`normalize_hostname`], handling:
/// - IPv4 addresses (e.g., `192.168.1.1`)
/// - IPv6 addresses (e.g., `[::1]`)
/// - Hostnames with ports (e.g., `acme.igrowbig.com:3000`)
/// - Mixed-case hostnames and trailing dots (`ACME.igrowbig.com.`)
///
/// # Errors
///
/// Returns [`AppError::Validation`] if:
/// - The `Host` header is missing
/// - The header value contains invalid UTF-8
pub fn extract_hostname(headers: &HeaderMap) -> Result<String, AppError> {
    let host = headers
        .get(header::HOST)
        .ok_or_else(|| AppError::bad_request("Missing Host header", serde_json::json!({})))?
        .to_str()
        .map_err(|_| AppError::bad_request("Invalid Host header", serde_json::json!({})))?;

    Ok(normalize_hostname(host))
}

/// Normalizes a raw hostname for classification and cache keying.
///
/// Lowercases, strips a port suffix and a trailing dot. IPv6 literals keep
/// their brackets; only the port after the closing bracket is removed.
pub fn normalize_hostname(raw: &str) -> String {
    let host = raw.trim();

    let without_port = if host.starts_with('[') {
        // IPv6 address (e.g., [::1] or [::1]:8080)
        match host.find(']') {
            Some(end_bracket) => &host[..=end_bracket],
            None => host,
        }
    } else {
        host.split(':').next().unwrap_or(host)
    };

    without_port.trim_end_matches('.').to_ascii_lowercase()
}
