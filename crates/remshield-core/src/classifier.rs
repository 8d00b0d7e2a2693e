//! Surface classification predicates.
//!
//! Three pure predicates over a [`RequestSignature`]: API, feed, and legacy
//! RPC. Toggle checks live in the engine, not here, so the classifier stays
//! config-agnostic and independently testable. No I/O, no side effects, and
//! malformed input is always a non-match.

use crate::signature::RequestSignature;

/// Query parameter that explicitly selects an API route.
pub const API_ROUTE_PARAM: &str = "rest_route";

/// Query key marking a Really Simple Discovery request.
pub const RSD_QUERY_KEY: &str = "rsd";

/// Platform route facts the classifier matches against.
#[derive(Debug, Clone)]
pub struct PlatformRoutes {
    /// Resolved base path of the API surface (e.g. `/wp-json/`).
    pub api_base_path: String,
    /// API URL prefix text (e.g. `wp-json`), used by the substring catch-all.
    pub api_url_prefix: String,
}

/// Pure request classifier for the three remote surfaces.
#[derive(Debug, Clone)]
pub struct SurfaceClassifier {
    routes: PlatformRoutes,
}

impl SurfaceClassifier {
    pub fn new(routes: PlatformRoutes) -> Self {
        Self { routes }
    }

    pub fn routes(&self) -> &PlatformRoutes {
        &self.routes
    }

    /// Is this request targeting the API surface?
    ///
    /// Checks, in order: the platform API signal, an explicit API route in the
    /// query (value starting with `/`), a path equal to the API base path,
    /// and finally whether the full URL contains the API URL prefix anywhere.
    /// The substring catch-all is deliberately permissive and can match URLs
    /// that merely echo the prefix text (e.g. in a query string); that is the
    /// documented, compatibility-preserving behavior, not a bug.
    pub fn is_api_request(&self, sig: &RequestSignature) -> bool {
        if sig.platform_is_api {
            return true;
        }

        if let Some(route) = sig.query.get(API_ROUTE_PARAM) {
            if route.starts_with('/') {
                return true;
            }
        }

        if !self.routes.api_base_path.is_empty()
            && sig.path.trim_end_matches('/') == self.routes.api_base_path.trim_end_matches('/')
        {
            return true;
        }

        !self.routes.api_url_prefix.is_empty()
            && sig.full_url().contains(&self.routes.api_url_prefix)
    }

    /// Is this request targeting the feed surface?
    ///
    /// Delegates entirely to the platform-provided feed signal.
    pub fn is_feed_request(&self, sig: &RequestSignature) -> bool {
        sig.platform_is_feed
    }

    /// Is this request targeting the legacy RPC surface?
    pub fn is_rpc_request(&self, sig: &RequestSignature) -> bool {
        sig.platform_is_rpc || sig.query.contains_key(RSD_QUERY_KEY)
    }
}
