//! Schema loading from various sources.
//!
//! Handles loading schemas from files, strings, and HTTP URLs.

use std::path::Path;

use serde_json::Value;

use crate::error::DescribeError;

#[cfg(feature = "remote")]
use std::time::Duration;

/// Default timeout for HTTP requests (10 seconds).
#[cfg(feature = "remote")]
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Load a schema from a file path.
///
/// # Errors
///
/// Returns `DescribeError::FileNotFound` if the file doesn't exist,
/// or `DescribeError::InvalidJson` if the file isn't valid JSON.
pub fn load_schema(path: &Path) -> Result<Value, DescribeError> {
    if !path.exists() {
        return Err(DescribeError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|source| DescribeError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;

    load_schema_str(&content)
}

/// Load a schema from a JSON string.
///
/// # Errors
///
/// Returns `DescribeError::InvalidJson` if the string isn't valid JSON.
pub fn load_schema_str(content: &str) -> Result<Value, DescribeError> {
    serde_json::from_str(content).map_err(|source| DescribeError::InvalidJson { source })
}

/// Load a schema from an HTTP/HTTPS URL.
///
/// Requires the `remote` feature (enabled by default).
///
/// # Errors
///
/// Returns `DescribeError::NetworkError` if the request fails or the
/// server answers with an error status.
#[cfg(feature = "remote")]
pub fn load_schema_url(url: &str) -> Result<Value, DescribeError> {
    let network = |source| DescribeError::NetworkError {
        url: url.to_string(),
        source,
    };

    let client = reqwest::blocking::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .build()
        .map_err(network)?;

    tracing::debug!(url, "fetching schema");
    client
        .get(url)
        .send()
        .and_then(|response| response.error_for_status())
        .and_then(|response| response.json())
        .map_err(network)
}

/// Check if a string looks like a URL (starts with http:// or https://).
pub fn is_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

/// Load a schema from a file path or URL.
///
/// Automatically detects whether the source is a URL or file path.
/// URL loading requires the `remote` feature.
///
/// # Errors
///
/// Returns appropriate errors based on the source type.
pub fn load_schema_auto(source: &str) -> Result<Value, DescribeError> {
    if is_url(source) {
        #[cfg(feature = "remote")]
        {
            load_schema_url(source)
        }
        #[cfg(not(feature = "remote"))]
        {
            Err(DescribeError::FileNotFound {
                path: std::path::PathBuf::from(source),
            })
        }
    } else {
        load_schema(Path::new(source))
    }
}

/// Navigate a JSON Pointer fragment (e.g., "#/$defs/foo" or "#/oneOf/0").
///
/// The leading `#` is optional. Array segments are read as indices.
///
/// # Errors
///
/// Returns `DescribeError::PointerNotFound` if any segment is missing.
pub fn navigate_fragment<'a>(schema: &'a Value, fragment: &str) -> Result<&'a Value, DescribeError> {
    let path = fragment.trim_start_matches('#').trim_start_matches('/');
    if path.is_empty() {
        return Ok(schema);
    }

    let mut current = schema;
    for part in path.split('/') {
        // Unescape JSON Pointer encoding (~1 = /, ~0 = ~)
        let key = part.replace("~1", "/").replace("~0", "~");
        let next = match current {
            Value::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
            other => other.get(&key),
        };
        current = next.ok_or_else(|| DescribeError::PointerNotFound {
            pointer: fragment.to_string(),
        })?;
    }
    Ok(current)
}
