//! Denial handler: toggle snapshot + engine, registered at both phases.

use std::sync::Arc;

use async_trait::async_trait;
use remshield_core::engine::{DenialEngine, Enforcement};

use crate::store::ToggleStore;

use super::{Phase, PhaseHandler, PhaseOutcome, RequestPass};

/// Wraps the core engine behind the pipeline seam. Fetches a fresh toggle
/// snapshot per invocation and enforces against the pass's signature.
pub struct DenyHandler {
    store: Arc<dyn ToggleStore>,
    engine: DenialEngine,
}

impl DenyHandler {
    pub fn new(store: Arc<dyn ToggleStore>, engine: DenialEngine) -> Self {
        Self { store, engine }
    }

    pub fn engine(&self) -> &DenialEngine {
        &self.engine
    }
}

#[async_trait]
impl PhaseHandler for DenyHandler {
    async fn handle(&self, phase: Phase, pass: &mut RequestPass<'_>) -> PhaseOutcome {
        let toggles = self.store.get_toggles().await;
        match self.engine.enforce(&toggles, pass.signature, &mut *pass.sink) {
            Enforcement::Denied(kind) => {
                tracing::info!(
                    phase = phase.as_str(),
                    surface = kind.as_str(),
                    path = %pass.signature.path,
                    "remote surface request denied"
                );
                PhaseOutcome::Terminate
            }
            Enforcement::Pass => PhaseOutcome::Continue,
        }
    }
}
