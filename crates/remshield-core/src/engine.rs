//! Denial engine: toggles -> classifier -> terminal response.
//!
//! The engine reads a toggle snapshot, asks the classifier the matching
//! question for each enabled toggle in a fixed order, and on the first match
//! writes the denial through a [`ResponseSink`] and terminates it. Running it
//! twice per request (pre-dispatch and again at render time, once the feed
//! signal is resolvable) is safe: a pass is side-effect free and callers stop
//! at the first denial.

use serde::Deserialize;

use crate::classifier::SurfaceClassifier;
use crate::denial::{DenialKind, DenialResponse};
use crate::signature::RequestSignature;

/// Persisted per-surface kill switches.
///
/// Absent configuration — or an individual missing key — defaults to `false`
/// (surface allowed). The snapshot is immutable for the duration of request
/// handling.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Toggles {
    #[serde(default)]
    pub rest_disabled: bool,
    #[serde(default)]
    pub feed_disabled: bool,
    #[serde(default)]
    pub rpc_disabled: bool,
}

/// Sink the engine writes a terminal denial through.
///
/// `terminate` must abort normal continuation: once called, no further
/// handler in the request pipeline may produce output.
pub trait ResponseSink {
    fn set_status(&mut self, status: u16);
    fn set_header(&mut self, name: &str, value: &str);
    fn write_body(&mut self, body: &str);
    fn terminate(&mut self);
}

/// Outcome of one enforcement run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Enforcement {
    /// No enabled toggle matched; continue normal processing.
    Pass,
    /// A denial was emitted and the sink terminated.
    Denied(DenialKind),
}

/// Orchestrates classification and denial emission.
#[derive(Debug, Clone)]
pub struct DenialEngine {
    classifier: SurfaceClassifier,
    charset: String,
}

impl DenialEngine {
    pub fn new(classifier: SurfaceClassifier, charset: impl Into<String>) -> Self {
        Self {
            classifier,
            charset: charset.into(),
        }
    }

    pub fn classifier(&self) -> &SurfaceClassifier {
        &self.classifier
    }

    /// Decide whether the request must be denied, without side effects.
    ///
    /// Fixed evaluation order: api, feed, rpc. First match wins; each check
    /// fires only when its own toggle is enabled, independent of the others.
    pub fn evaluate(&self, toggles: &Toggles, sig: &RequestSignature) -> Option<DenialKind> {
        if toggles.rest_disabled && self.classifier.is_api_request(sig) {
            return Some(DenialKind::Api);
        }
        if toggles.feed_disabled && self.classifier.is_feed_request(sig) {
            return Some(DenialKind::Feed);
        }
        if toggles.rpc_disabled && self.classifier.is_rpc_request(sig) {
            return Some(DenialKind::Rpc);
        }
        None
    }

    /// Evaluate and, on a match, emit the denial through `sink`.
    ///
    /// On `Enforcement::Denied` the sink has received status 403, the
    /// surface-specific content type, the template body, and `terminate()`.
    /// On `Enforcement::Pass` the sink is untouched.
    pub fn enforce(
        &self,
        toggles: &Toggles,
        sig: &RequestSignature,
        sink: &mut dyn ResponseSink,
    ) -> Enforcement {
        match self.evaluate(toggles, sig) {
            Some(kind) => {
                self.emit_denial(kind, sink);
                Enforcement::Denied(kind)
            }
            None => Enforcement::Pass,
        }
    }

    fn emit_denial(&self, kind: DenialKind, sink: &mut dyn ResponseSink) {
        let resp = DenialResponse::new(kind, &self.charset);
        sink.set_status(resp.status);
        sink.set_header("Content-Type", &resp.content_type);
        sink.write_body(&resp.body);
        sink.terminate();
        tracing::info!(surface = kind.as_str(), "request denied");
    }
}
