//! Default exposure suppression (discovery bookkeeping).
//!
//! Denial alone still leaves the platform advertising the disabled surfaces:
//! discovery documents, `<head>` links, link headers, and default routes.
//! This module is the fixed, toggle-gated list of those integration points.
//! It is defense in depth for discovery metadata, not the access-control
//! decision — the engine denies raw requests regardless.

use remshield_core::engine::Toggles;

use crate::config::PlatformSection;

/// A default platform exposure point that can be removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrationPoint {
    // API surface
    ApiDiscoveryDocument,
    ApiLinkHeader,
    ApiHeadLink,
    ApiDefaultRoutes,
    // Legacy RPC surface
    RsdHeadLink,
    ManifestHeadLink,
    RpcEndpointRoute,
    // Feed surface
    FeedHeadLinks,
    FeedExtraHeadLinks,
    OembedDiscoveryLinks,
    FeedRoutes,
    Pingbacks,
}

const API_POINTS: &[IntegrationPoint] = &[
    IntegrationPoint::ApiDiscoveryDocument,
    IntegrationPoint::ApiLinkHeader,
    IntegrationPoint::ApiHeadLink,
    IntegrationPoint::ApiDefaultRoutes,
];

const RPC_POINTS: &[IntegrationPoint] = &[
    IntegrationPoint::RsdHeadLink,
    IntegrationPoint::ManifestHeadLink,
    IntegrationPoint::RpcEndpointRoute,
];

const FEED_POINTS: &[IntegrationPoint] = &[
    IntegrationPoint::FeedHeadLinks,
    IntegrationPoint::FeedExtraHeadLinks,
    IntegrationPoint::OembedDiscoveryLinks,
    IntegrationPoint::FeedRoutes,
    IntegrationPoint::Pingbacks,
];

/// Every integration point to remove for the given toggles. Each group is
/// gated by its own toggle only.
pub fn suppressed_points(toggles: &Toggles) -> Vec<IntegrationPoint> {
    let mut out = Vec::new();
    if toggles.rest_disabled {
        out.extend_from_slice(API_POINTS);
    }
    if toggles.rpc_disabled {
        out.extend_from_slice(RPC_POINTS);
    }
    if toggles.feed_disabled {
        out.extend_from_slice(FEED_POINTS);
    }
    out
}

pub fn is_suppressed(toggles: &Toggles, point: IntegrationPoint) -> bool {
    suppressed_points(toggles).contains(&point)
}

/// Discovery `<link>` elements the root page would advertise, with
/// suppressed ones omitted.
pub fn head_links(toggles: &Toggles, platform: &PlatformSection) -> Vec<String> {
    let mut links = Vec::new();

    if !is_suppressed(toggles, IntegrationPoint::ApiHeadLink) {
        links.push(format!(
            "<link rel=\"https://api.w.org/\" href=\"{}\" />",
            platform.api_base_path
        ));
    }
    if !is_suppressed(toggles, IntegrationPoint::RsdHeadLink) {
        links.push(
            "<link rel=\"EditURI\" type=\"application/rsd+xml\" href=\"/rsd\" />".to_string(),
        );
    }
    if !is_suppressed(toggles, IntegrationPoint::FeedHeadLinks) {
        links.push(
            "<link rel=\"alternate\" type=\"application/rss+xml\" href=\"/feed\" />".to_string(),
        );
    }

    links
}
