// Shared HTTP helpers: header capture and request descriptions.

use axum::http::{HeaderMap, HeaderName, Uri, header};
use std::collections::BTreeMap;

pub const X_ERROR_TYPE: HeaderName = HeaderName::from_static("x-error-type");
pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

// Render request headers as a JSON-friendly map keyed by lower-case name.
// Repeated headers are joined with ", ".
pub fn header_snapshot(headers: &HeaderMap) -> BTreeMap<String, String> {
    let mut snapshot: BTreeMap<String, String> = BTreeMap::new();

    for (name, value) in headers {
        let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
        snapshot
            .entry(name.as_str().to_string())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(&value);
            })
            .or_insert(value);
    }

    snapshot
}

// First non-empty value among the given headers.
pub fn first_header(headers: &HeaderMap, names: &[&str]) -> Option<String> {
    names.iter().find_map(|name| {
        headers
            .get(*name)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    })
}

// Absolute URL when a Host header is present, otherwise the origin-form target.
pub fn request_url(uri: &Uri, headers: &HeaderMap) -> String {
    if uri.scheme().is_some() {
        return uri.to_string();
    }

    let target = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");

    match headers.get(header::HOST).and_then(|host| host.to_str().ok()) {
        Some(host) => format!("http://{host}{target}"),
        None => target.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn when_header_repeats_then_values_are_joined() {
        let mut headers = HeaderMap::new();
        headers.append("accept", HeaderValue::from_static("text/html"));
        headers.append("accept", HeaderValue::from_static("application/json"));
        headers.insert("X-Custom", HeaderValue::from_static("yes"));

        let snapshot = header_snapshot(&headers);

        assert_eq!(snapshot["accept"], "text/html, application/json");
        assert_eq!(snapshot["x-custom"], "yes");
    }

    #[test]
    fn when_first_header_is_blank_then_next_candidate_is_used() {
        let mut headers = HeaderMap::new();
        headers.insert("cf-ipcountry", HeaderValue::from_static("DE"));
        headers.insert("cloudfront-viewer-country", HeaderValue::from_static(" "));

        let value = first_header(&headers, &["cloudfront-viewer-country", "cf-ipcountry"]);

        assert_eq!(value.as_deref(), Some("DE"));
    }

    #[test]
    fn when_host_is_present_then_url_is_absolute() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("localhost:3000"));
        let uri: Uri = "/api/resptime/10?x=1".parse().expect("valid uri");

        assert_eq!(
            request_url(&uri, &headers),
            "http://localhost:3000/api/resptime/10?x=1"
        );
        assert_eq!(request_url(&uri, &HeaderMap::new()), "/api/resptime/10?x=1");
    }
}
