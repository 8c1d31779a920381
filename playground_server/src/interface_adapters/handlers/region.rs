use crate::interface_adapters::http::{first_header, header_snapshot};
use crate::interface_adapters::protocol::RegionResponse;
use axum::{
    Json,
    extract::{ConnectInfo, Request},
    http::{HeaderMap, header},
    response::IntoResponse,
};
use std::net::SocketAddr;

const UNKNOWN_IP: &str = "unknown";
const UNKNOWN_FIELD: &str = "Unknown";

// Reports where the visitor appears to come from, based on proxy/CDN headers.
#[tracing::instrument(name = "region", skip_all)]
pub async fn region(request: Request) -> impl IntoResponse {
    let peer = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string());
    let body = describe_region(request.headers(), peer);

    (
        [
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (header::ACCESS_CONTROL_ALLOW_METHODS, "GET"),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
        ],
        Json(body),
    )
}

fn describe_region(headers: &HeaderMap, peer: Option<String>) -> RegionResponse {
    let ip = forwarded_ip(headers)
        .or_else(|| first_header(headers, &["x-real-ip"]))
        .or(peer)
        .unwrap_or_else(|| UNKNOWN_IP.to_string());

    RegionResponse {
        ip,
        country: lookup(
            headers,
            &[
                "cloudfront-viewer-country",
                "cf-ipcountry",
                "x-vercel-ip-country",
            ],
        ),
        region: lookup(
            headers,
            &[
                "cloudfront-viewer-country-region",
                "x-vercel-ip-country-region",
            ],
        ),
        city: lookup(headers, &["cloudfront-viewer-city", "x-vercel-ip-city"]),
        timezone: lookup(
            headers,
            &["cloudfront-viewer-time-zone", "x-vercel-ip-timezone"],
        ),
        headers: header_snapshot(headers),
    }
}

fn lookup(headers: &HeaderMap, names: &[&str]) -> String {
    first_header(headers, names).unwrap_or_else(|| UNKNOWN_FIELD.to_string())
}

// Client address is the first hop of X-Forwarded-For.
fn forwarded_ip(headers: &HeaderMap) -> Option<String> {
    first_header(headers, &["x-forwarded-for"]).and_then(|value| {
        value
            .split(',')
            .next()
            .map(str::trim)
            .filter(|ip| !ip.is_empty())
            .map(str::to_string)
    })
}
