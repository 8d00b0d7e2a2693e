//! Platform signal glue.
//!
//! Computes the platform-provided booleans the classifier consumes blindly:
//! feed detection, the legacy RPC flag, and the API flag. This is thin,
//! deterministic path/query inspection — the classifier itself stays
//! platform-agnostic.

use std::collections::BTreeMap;

use remshield_core::signature::RequestSignature;

use crate::config::PlatformSection;

/// Query key the platform uses to request a feed rendering.
const FEED_QUERY_KEY: &str = "feed";

/// Trailing path segment selecting a feed.
const FEED_PATH_SEGMENT: &str = "feed";

/// Feed request per platform convention: a trailing `/feed` segment or a
/// `feed` query key. Feed-type specifics (RSS/Atom/RDF) stay platform-side.
pub fn is_feed_request(path: &str, query: &BTreeMap<String, String>) -> bool {
    let trimmed = path.trim_end_matches('/');
    trimmed.ends_with(&format!("/{FEED_PATH_SEGMENT}")) || query.contains_key(FEED_QUERY_KEY)
}

/// Legacy RPC request: exact match on the configured endpoint path.
pub fn is_rpc_request(platform: &PlatformSection, path: &str) -> bool {
    path.trim_end_matches('/') == platform.rpc_endpoint.trim_end_matches('/')
}

/// API request flag: the path lives under the API base path.
pub fn is_api_request(platform: &PlatformSection, path: &str) -> bool {
    path.starts_with(&platform.api_base_path)
}

/// Assemble the full per-request signature from raw parts plus platform
/// signals. `resolve_feed` is false at pre-dispatch (the platform has not
/// parsed the query yet) and true at render time.
pub fn build_signature(
    platform: &PlatformSection,
    scheme: &str,
    host: &str,
    path: &str,
    query: BTreeMap<String, String>,
    resolve_feed: bool,
) -> RequestSignature {
    let platform_is_feed = resolve_feed && is_feed_request(path, &query);
    RequestSignature {
        scheme: scheme.into(),
        host: host.into(),
        path: path.into(),
        platform_is_api: is_api_request(platform, path),
        platform_is_feed,
        platform_is_rpc: is_rpc_request(platform, path),
        query,
    }
}
