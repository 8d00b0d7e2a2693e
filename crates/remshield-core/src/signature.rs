//! Per-request signature consumed by the classifier.
//!
//! A `RequestSignature` is derived once from the inbound request plus the
//! platform-computed surface signals, then treated as read-only for the rest
//! of request handling. Missing or malformed URL components degrade to empty
//! strings so classification never errors.

use std::collections::BTreeMap;

/// Read-only view of one inbound request.
#[derive(Debug, Clone, Default)]
pub struct RequestSignature {
    /// URL scheme ("http"/"https"); empty when unknown.
    pub scheme: String,
    /// Host (with optional port); empty when the header is absent.
    pub host: String,
    /// Request path, as received.
    pub path: String,
    /// Parsed query parameters. Repeated keys keep the last value.
    pub query: BTreeMap<String, String>,
    /// Platform-level "this is an API request" signal.
    pub platform_is_api: bool,
    /// Platform-level "this is a feed request" signal. Feed-type detection
    /// (RSS/Atom/RDF) is the platform's responsibility.
    pub platform_is_feed: bool,
    /// Platform-level "this is a legacy RPC request" signal.
    pub platform_is_rpc: bool,
}

impl RequestSignature {
    /// Reconstruct the full request URL (`scheme://host/path?query`).
    ///
    /// Query parameters render in key order, which keeps the result
    /// deterministic for the classifier's substring catch-all.
    pub fn full_url(&self) -> String {
        let mut url = format!("{}://{}{}", self.scheme, self.host, self.path);
        if !self.query.is_empty() {
            let qs: Vec<String> = self
                .query
                .iter()
                .map(|(k, v)| {
                    if v.is_empty() {
                        k.clone()
                    } else {
                        format!("{k}={v}")
                    }
                })
                .collect();
            url.push('?');
            url.push_str(&qs.join("&"));
        }
        url
    }
}
