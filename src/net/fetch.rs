use std::collections::HashMap;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;

use crate::errors::FetchError;
use crate::net::Response;

/// Issues a GET request and returns the buffered response.
///
/// `timeout_secs` bounds the whole exchange; `0` disables the deadline.
pub async fn get(
    url: &str,
    headers: &HashMap<String, String>,
    timeout_secs: u64,
) -> Result<Response, FetchError> {
    execute(Method::GET, url, headers, None, timeout_secs).await
}

/// Issues a POST request with the given body and returns the buffered
/// response. The body is transmitted as-is, byte for byte.
pub async fn post(
    url: &str,
    headers: &HashMap<String, String>,
    body: impl Into<Vec<u8>>,
    timeout_secs: u64,
) -> Result<Response, FetchError> {
    execute(Method::POST, url, headers, Some(body.into()), timeout_secs).await
}

// Single request/response cycle shared by get() and post().
async fn execute(
    method: Method,
    url: &str,
    headers: &HashMap<String, String>,
    body: Option<Vec<u8>>,
    timeout_secs: u64,
) -> Result<Response, FetchError> {
    let parsed = url::Url::parse(url)
        .map_err(|e| FetchError::Construction(format!("invalid URL {url:?}: {e}")))?;
    let header_map = to_header_map(headers)?;

    // Fresh client per call, so no configuration leaks between requests.
    // Certificate verification stays on; there is no knob to turn it off.
    let mut builder = reqwest::Client::builder();
    if timeout_secs > 0 {
        builder = builder.timeout(Duration::from_secs(timeout_secs));
    }
    let client = builder
        .build()
        .map_err(|e| FetchError::Construction(e.to_string()))?;

    let mut request = client.request(method.clone(), parsed).headers(header_map);
    if let Some(body) = body {
        request = request.body(body);
    }

    log::debug!("{} {}", method, url);
    let res = request.send().await.map_err(|e| FetchError::Transport {
        status: e.status().map(|s| s.as_u16()),
        source: e,
    })?;

    let status = res.status();
    let status_text = status.canonical_reason().unwrap_or("Unknown").to_string();
    let final_url = res.url().clone();
    let headers = res.headers().clone();

    // bytes() consumes the response, so the connection is released before the
    // caller sees any of the result.
    let body = res
        .bytes()
        .await
        .map_err(|e| FetchError::Transport {
            status: Some(status.as_u16()),
            source: e,
        })?
        .to_vec();

    Ok(Response {
        url: final_url,
        status: status.as_u16(),
        status_text,
        headers,
        body,
    })
}

fn to_header_map(headers: &HashMap<String, String>) -> Result<HeaderMap, FetchError> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let parsed_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| FetchError::Construction(format!("invalid header name {name:?}: {e}")))?;
        let parsed_value = HeaderValue::from_str(value).map_err(|e| {
            FetchError::Construction(format!("invalid value for header {name:?}: {e}"))
        })?;
        map.insert(parsed_name, parsed_value);
    }
    Ok(map)
}
