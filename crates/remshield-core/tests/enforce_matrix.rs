//! Denial engine behavior across the toggle matrix.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use remshield_core::classifier::{PlatformRoutes, SurfaceClassifier};
use remshield_core::denial::DenialKind;
use remshield_core::engine::{DenialEngine, Enforcement, ResponseSink, Toggles};
use remshield_core::signature::RequestSignature;

/// Recording sink: collects every call so tests can assert the exact
/// emission sequence (or its absence).
#[derive(Debug, Default)]
struct RecordingSink {
    status: Option<u16>,
    headers: Vec<(String, String)>,
    body: String,
    terminated: bool,
    calls: usize,
}

impl ResponseSink for RecordingSink {
    fn set_status(&mut self, status: u16) {
        self.status = Some(status);
        self.calls += 1;
    }
    fn set_header(&mut self, name: &str, value: &str) {
        self.headers.push((name.into(), value.into()));
        self.calls += 1;
    }
    fn write_body(&mut self, body: &str) {
        self.body.push_str(body);
        self.calls += 1;
    }
    fn terminate(&mut self) {
        self.terminated = true;
        self.calls += 1;
    }
}

fn engine() -> DenialEngine {
    DenialEngine::new(
        SurfaceClassifier::new(PlatformRoutes {
            api_base_path: "/wp-json/".into(),
            api_url_prefix: "wp-json".into(),
        }),
        "UTF-8",
    )
}

fn api_sig() -> RequestSignature {
    RequestSignature {
        scheme: "https".into(),
        host: "example.org".into(),
        path: "/wp-json/".into(),
        ..Default::default()
    }
}

fn feed_sig() -> RequestSignature {
    RequestSignature {
        scheme: "https".into(),
        host: "example.org".into(),
        path: "/blog/feed".into(),
        platform_is_feed: true,
        ..Default::default()
    }
}

fn rpc_sig() -> RequestSignature {
    RequestSignature {
        scheme: "https".into(),
        host: "example.org".into(),
        path: "/xmlrpc".into(),
        platform_is_rpc: true,
        ..Default::default()
    }
}

fn plain_sig() -> RequestSignature {
    RequestSignature {
        scheme: "https".into(),
        host: "example.org".into(),
        path: "/blog/hello".into(),
        ..Default::default()
    }
}

/// A denial fires iff (toggle enabled) AND (matching predicate true),
/// independent of the other two toggles.
#[test]
fn deny_iff_toggle_and_predicate() {
    let eng = engine();

    for rest in [false, true] {
        for feed in [false, true] {
            for rpc in [false, true] {
                let toggles = Toggles {
                    rest_disabled: rest,
                    feed_disabled: feed,
                    rpc_disabled: rpc,
                };

                assert_eq!(
                    eng.evaluate(&toggles, &api_sig()),
                    rest.then_some(DenialKind::Api),
                    "api sig, toggles {toggles:?}"
                );
                assert_eq!(
                    eng.evaluate(&toggles, &feed_sig()),
                    feed.then_some(DenialKind::Feed),
                    "feed sig, toggles {toggles:?}"
                );
                assert_eq!(
                    eng.evaluate(&toggles, &rpc_sig()),
                    rpc.then_some(DenialKind::Rpc),
                    "rpc sig, toggles {toggles:?}"
                );
                assert_eq!(eng.evaluate(&toggles, &plain_sig()), None);
            }
        }
    }
}

#[test]
fn evaluation_order_is_api_feed_rpc() {
    let eng = engine();
    let all = Toggles {
        rest_disabled: true,
        feed_disabled: true,
        rpc_disabled: true,
    };

    // a signature matching every predicate resolves to the api denial
    let mut sig = api_sig();
    sig.platform_is_feed = true;
    sig.platform_is_rpc = true;
    assert_eq!(eng.evaluate(&all, &sig), Some(DenialKind::Api));

    // feed before rpc
    let mut sig = feed_sig();
    sig.platform_is_rpc = true;
    assert_eq!(eng.evaluate(&all, &sig), Some(DenialKind::Feed));
}

/// End-to-end shape of spec behavior: rest toggle on, api path -> 403 JSON.
#[test]
fn enforce_emits_full_api_denial() {
    let eng = engine();
    let toggles = Toggles {
        rest_disabled: true,
        feed_disabled: false,
        rpc_disabled: false,
    };

    let mut sink = RecordingSink::default();
    let out = eng.enforce(&toggles, &api_sig(), &mut sink);

    assert_eq!(out, Enforcement::Denied(DenialKind::Api));
    assert_eq!(sink.status, Some(403));
    assert_eq!(sink.headers.len(), 1);
    assert_eq!(sink.headers[0].0, "Content-Type");
    assert_eq!(sink.headers[0].1, "application/json; charset=UTF-8");
    assert!(sink.body.contains("\"status\":403"));
    assert!(sink.body.contains("Access Forbidden"));
    assert!(sink.terminated);
}

/// All toggles off: the sink must not be touched at all.
#[test]
fn enforce_all_off_never_calls_sink() {
    let eng = engine();
    let toggles = Toggles::default();

    for sig in [api_sig(), feed_sig(), rpc_sig(), plain_sig()] {
        let mut sink = RecordingSink::default();
        assert_eq!(eng.enforce(&toggles, &sig, &mut sink), Enforcement::Pass);
        assert_eq!(sink.calls, 0, "sink touched for {}", sig.path);
    }
}

#[test]
fn enforce_feed_and_rpc_content_types() {
    let eng = engine();

    let mut sink = RecordingSink::default();
    let toggles = Toggles {
        feed_disabled: true,
        ..Default::default()
    };
    eng.enforce(&toggles, &feed_sig(), &mut sink);
    assert_eq!(sink.headers[0].1, "application/rss+xml; charset=UTF-8");

    let mut sink = RecordingSink::default();
    let toggles = Toggles {
        rpc_disabled: true,
        ..Default::default()
    };
    eng.enforce(&toggles, &rpc_sig(), &mut sink);
    assert_eq!(sink.headers[0].1, "text/xml; charset=UTF-8");
}

/// Two-phase invocation: a pass at pre-dispatch followed by a render-time
/// denial (feed signal resolved late) emits exactly one denial.
#[test]
fn two_phase_run_is_idempotent() {
    let eng = engine();
    let toggles = Toggles {
        feed_disabled: true,
        ..Default::default()
    };

    let mut sink = RecordingSink::default();

    // pre-dispatch: platform has not resolved the feed signal yet
    let mut sig = plain_sig();
    assert_eq!(eng.enforce(&toggles, &sig, &mut sink), Enforcement::Pass);
    assert_eq!(sink.calls, 0);

    // render: signal resolved
    sig.platform_is_feed = true;
    assert_eq!(
        eng.enforce(&toggles, &sig, &mut sink),
        Enforcement::Denied(DenialKind::Feed)
    );
    assert!(sink.terminated);
    assert_eq!(sink.headers.len(), 1);
}

#[test]
fn toggles_deserialize_with_defaults() {
    let t: Toggles = serde_json::from_str("{}").unwrap();
    assert_eq!(t, Toggles::default());

    let t: Toggles = serde_json::from_str(r#"{"rest_disabled":true}"#).unwrap();
    assert!(t.rest_disabled);
    assert!(!t.feed_disabled);
    assert!(!t.rpc_disabled);
}
