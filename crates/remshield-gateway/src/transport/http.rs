//! Interception middleware (HTTP -> pipeline).
//!
//! Responsibilities:
//! - Build the request signature from raw parts + platform signals
//! - Drive the pipeline at `PreDispatch`, then again at `Render` with the
//!   feed signal resolved
//! - Convert a terminal denial into the HTTP response without ever invoking
//!   the inner service
//!
//! Requests that pass both phases reach the platform untouched.

use std::collections::BTreeMap;

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::app_state::AppState;
use crate::pipeline::{Phase, PhaseOutcome, RequestPass};
use crate::platform;

use super::sink::BufferedSink;

/// Parse a raw query string into a key -> value map. Repeated keys keep the
/// last value, valueless keys map to the empty string, and malformed pairs
/// are skipped — classification treats anything unparseable as a non-match.
pub fn parse_query(raw: Option<&str>) -> BTreeMap<String, String> {
    let mut out = BTreeMap::new();
    let Some(raw) = raw else {
        return out;
    };
    for pair in raw.split('&') {
        if pair.is_empty() {
            continue;
        }
        match pair.split_once('=') {
            Some((k, v)) if !k.is_empty() => {
                out.insert(k.to_string(), v.to_string());
            }
            Some(_) => {}
            None => {
                out.insert(pair.to_string(), String::new());
            }
        }
    }
    out
}

fn request_scheme(req: &Request) -> &str {
    req.headers()
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("http")
}

fn request_host(req: &Request) -> &str {
    req.headers()
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .or_else(|| req.uri().host())
        .unwrap_or("")
}

pub async fn intercept(State(app): State<AppState>, req: Request, next: Next) -> Response {
    let scheme = request_scheme(&req).to_string();
    let host = request_host(&req).to_string();
    let path = req.uri().path().to_string();
    let query = parse_query(req.uri().query());

    let mut sink = BufferedSink::new();

    // Phase 1: pre-dispatch, before the platform has parsed the query.
    let sig = platform::build_signature(app.platform(), &scheme, &host, &path, query.clone(), false);
    let mut pass = RequestPass {
        signature: &sig,
        sink: &mut sink,
    };
    if app.pipeline().run(Phase::PreDispatch, &mut pass).await == PhaseOutcome::Terminate {
        return commit(sink);
    }

    // Phase 2: render time, feed signal resolved.
    let sig = platform::build_signature(app.platform(), &scheme, &host, &path, query, true);
    let mut pass = RequestPass {
        signature: &sig,
        sink: &mut sink,
    };
    if app.pipeline().run(Phase::Render, &mut pass).await == PhaseOutcome::Terminate {
        return commit(sink);
    }

    next.run(req).await
}

fn commit(sink: BufferedSink) -> Response {
    sink.into_response()
        .unwrap_or_else(|| StatusCode::FORBIDDEN.into_response())
}
