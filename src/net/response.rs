//! Buffered HTTP response model.
//!
//! This struct represents a **fully buffered** HTTP response: by the time the
//! caller holds one, the body has been drained completely and the underlying
//! connection has already been released. It contains the final URL (after
//! redirects, if the client followed any), status code + reason, response
//! headers, and the raw body bytes.
//!
//! ## Notes
//! - The body is stored as raw `Vec<u8>`. Use [`Response::text`] for a text
//!   view or [`Response::json`] to decode with serde.
//! - `headers` is an `http::HeaderMap`, which is **case-insensitive** for
//!   header names and keeps every value of a repeated header.
//! - `status_text` is derived from the status code's canonical reason phrase
//!   and may be `"Unknown"` for non-standard codes.

use http::HeaderMap;

/// Simple structure for HTTP responses.
///
/// All fields reflect the **received** response as-is; no additional parsing
/// or transformation is performed by this type.
#[derive(Debug)]
pub struct Response {
    /// Final URL of the response (after redirects, if any).
    pub url: url::Url,

    /// Numeric HTTP status code (e.g., `200`, `404`).
    pub status: u16,

    /// Human-readable reason phrase (e.g., `"OK"`, `"Not Found"`).
    pub status_text: String,

    /// Response headers as a case-insensitive, multi-valued map.
    pub headers: HeaderMap,

    /// Raw response body bytes.
    pub body: Vec<u8>,
}

impl Response {
    /// True for 2xx status codes.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as text. Invalid UTF-8 sequences are replaced, not rejected.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Decode the body as JSON.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resp(status: u16, body: &[u8]) -> Response {
        Response {
            url: url::Url::parse("https://example.com/").expect("valid URL"),
            status,
            status_text: String::new(),
            headers: HeaderMap::new(),
            body: body.to_vec(),
        }
    }

    #[test]
    fn success_range() {
        assert!(resp(200, b"").is_success());
        assert!(resp(204, b"").is_success());
        assert!(!resp(199, b"").is_success());
        assert!(!resp(301, b"").is_success());
        assert!(!resp(404, b"").is_success());
    }

    #[test]
    fn text_is_lossy() {
        assert_eq!(resp(200, b"hello").text(), "hello");
        // invalid UTF-8 gets replaced instead of failing
        assert_eq!(resp(200, &[0x68, 0x69, 0xff]).text(), "hi\u{fffd}");
    }

    #[test]
    fn json_decode() {
        #[derive(serde::Deserialize)]
        struct Payload {
            name: String,
            count: u32,
        }

        let r = resp(200, br#"{"name":"a","count":3}"#);
        let p: Payload = r.json().unwrap();
        assert_eq!(p.name, "a");
        assert_eq!(p.count, 3);

        assert!(resp(200, b"not json").json::<Payload>().is_err());
    }
}
