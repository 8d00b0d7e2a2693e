//! Denial response templates (wire format, one per surface).
//!
//! Bodies must match the published contract exactly: a JSON object for the
//! API surface, an `<rss>` channel document for feeds, and an `<rsd>` service
//! document for legacy RPC. Each carries an ISO-8601 UTC timestamp, the 403
//! status, a fixed error title, and a surface-specific message. Responses are
//! built fresh per denial; the timestamp varies, so they are never cached.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::json;

/// HTTP status every denial carries.
pub const DENIAL_STATUS: u16 = 403;

/// Fixed error title shared by all three templates.
pub const ERROR_TITLE: &str = "Access Forbidden";

/// XML namespace of the RSD denial document.
pub const RSD_XMLNS: &str = "http://archipelago.phrasewise.com/rsd";

/// Which surface a denial targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenialKind {
    Api,
    Feed,
    Rpc,
}

impl DenialKind {
    /// Short name used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            DenialKind::Api => "api",
            DenialKind::Feed => "feed",
            DenialKind::Rpc => "rpc",
        }
    }

    fn message(self) -> &'static str {
        match self {
            DenialKind::Api => {
                "Your access to the REST API has been forbidden by the site admins."
            }
            DenialKind::Feed => {
                "Your access to the RSS Feeds have been forbidden by the site admins."
            }
            DenialKind::Rpc => "Your access to the RPC has been forbidden by the site admins.",
        }
    }
}

/// Terminal 403 response for one surface.
#[derive(Debug, Clone)]
pub struct DenialResponse {
    pub status: u16,
    pub content_type: String,
    pub body: String,
}

impl DenialResponse {
    /// Build a denial stamped with the current UTC time.
    pub fn new(kind: DenialKind, charset: &str) -> Self {
        Self::at(kind, charset, Utc::now())
    }

    /// Build a denial with an explicit timestamp (deterministic for tests).
    pub fn at(kind: DenialKind, charset: &str, now: DateTime<Utc>) -> Self {
        let timestamp = now.to_rfc3339_opts(SecondsFormat::Secs, false);
        let (content_type, body) = match kind {
            DenialKind::Api => (
                format!("application/json; charset={charset}"),
                json!({
                    "timestamp": timestamp,
                    "status": DENIAL_STATUS,
                    "error": ERROR_TITLE,
                    "message": kind.message(),
                })
                .to_string(),
            ),
            DenialKind::Feed => (
                format!("application/rss+xml; charset={charset}"),
                format!(
                    "<?xml version=\"1.0\" encoding=\"{charset}\"?>\n\
                     <rss version=\"2.0\">\n\
                     \x20 <channel>\n\
                     \x20   <timestamp>{timestamp}</timestamp>\n\
                     \x20   <status>{DENIAL_STATUS}</status>\n\
                     \x20   <error>{ERROR_TITLE}</error>\n\
                     \x20   <message>{msg}</message>\n\
                     \x20 </channel>\n\
                     </rss>",
                    msg = kind.message(),
                ),
            ),
            DenialKind::Rpc => (
                format!("text/xml; charset={charset}"),
                format!(
                    "<?xml version=\"1.0\" encoding=\"{charset}\"?>\n\
                     <rsd version=\"1.0\" xmlns=\"{RSD_XMLNS}\">\n\
                     \x20 <service>\n\
                     \x20   <timestamp>{timestamp}</timestamp>\n\
                     \x20   <status>{DENIAL_STATUS}</status>\n\
                     \x20   <error>{ERROR_TITLE}</error>\n\
                     \x20   <message>{msg}</message>\n\
                     \x20 </service>\n\
                     </rsd>",
                    msg = kind.message(),
                ),
            ),
        };

        Self {
            status: DENIAL_STATUS,
            content_type,
            body,
        }
    }
}
