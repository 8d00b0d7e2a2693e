//! Request pipeline: explicit ordered phase/handler registration.
//!
//! Interception runs at two request-lifecycle phases: `PreDispatch` (before
//! routing) and `Render` (once the platform has parsed the query and the feed
//! signal is resolvable). Handlers register against a phase in an explicit
//! ordered list; a terminating handler stops the walk, and nothing later in
//! the pipeline runs for that request.

pub mod deny;

use std::sync::Arc;

use async_trait::async_trait;
use remshield_core::engine::ResponseSink;
use remshield_core::signature::RequestSignature;

pub use deny::DenyHandler;

/// Request-lifecycle phase a handler can attach to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Before routing/dispatch.
    PreDispatch,
    /// At template-render time, after query parsing.
    Render,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::PreDispatch => "pre_dispatch",
            Phase::Render => "render",
        }
    }
}

/// What a handler decided for the current request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseOutcome {
    /// Let the next handler (and ultimately the platform) run.
    Continue,
    /// The request was terminally answered; stop the pipeline.
    Terminate,
}

/// Per-request state handed through the pipeline.
pub struct RequestPass<'a> {
    pub signature: &'a RequestSignature,
    pub sink: &'a mut (dyn ResponseSink + Send),
}

/// One capability: handle a phase for a request.
#[async_trait]
pub trait PhaseHandler: Send + Sync {
    async fn handle(&self, phase: Phase, pass: &mut RequestPass<'_>) -> PhaseOutcome;
}

/// Ordered registry of `(phase, handler)` pairs.
#[derive(Default)]
pub struct Pipeline {
    stages: Vec<(Phase, Arc<dyn PhaseHandler>)>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Append a handler for `phase`. Registration order is execution order.
    pub fn register(&mut self, phase: Phase, handler: Arc<dyn PhaseHandler>) {
        self.stages.push((phase, handler));
    }

    /// Run every handler registered for `phase`, in order, stopping at the
    /// first [`PhaseOutcome::Terminate`].
    pub async fn run(&self, phase: Phase, pass: &mut RequestPass<'_>) -> PhaseOutcome {
        for (p, handler) in &self.stages {
            if *p != phase {
                continue;
            }
            if handler.handle(phase, pass).await == PhaseOutcome::Terminate {
                tracing::debug!(phase = phase.as_str(), "pipeline terminated");
                return PhaseOutcome::Terminate;
            }
        }
        PhaseOutcome::Continue
    }
}
