//! Shared application state for the remshield gateway.
//!
//! Builds the classifier/engine from the platform section, seeds the toggle
//! store from config, registers the denial handler at both pipeline phases,
//! and exposes the secret vault.

use std::sync::Arc;

use remshield_core::classifier::{PlatformRoutes, SurfaceClassifier};
use remshield_core::engine::{DenialEngine, Toggles};
use remshield_core::error::Result;

use crate::config::{GatewayConfig, PlatformSection};
use crate::pipeline::{DenyHandler, Phase, Pipeline};
use crate::secrets::SecretVault;
use crate::store::{SharedToggleStore, ToggleStore};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: GatewayConfig,
    store: Arc<SharedToggleStore>,
    pipeline: Pipeline,
    vault: SecretVault,
}

impl AppState {
    pub fn new(cfg: GatewayConfig) -> Result<Self> {
        cfg.validate()?;

        let store = Arc::new(SharedToggleStore::new(cfg.toggles));

        let classifier = SurfaceClassifier::new(PlatformRoutes {
            api_base_path: cfg.platform.api_base_path.clone(),
            api_url_prefix: cfg.platform.api_url_prefix.clone(),
        });
        let engine = DenialEngine::new(classifier, cfg.platform.charset.clone());

        // One denial handler, registered at both lifecycle phases: feed
        // detection may only resolve at render time.
        let deny = Arc::new(DenyHandler::new(
            Arc::clone(&store) as Arc<dyn ToggleStore>,
            engine,
        ));
        let mut pipeline = Pipeline::new();
        pipeline.register(Phase::PreDispatch, deny.clone());
        pipeline.register(Phase::Render, deny);

        let vault = SecretVault::new(&cfg.secrets);

        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                store,
                pipeline,
                vault,
            }),
        })
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn platform(&self) -> &PlatformSection {
        &self.inner.cfg.platform
    }

    /// Toggle snapshot used for boot-time route registration. Request-time
    /// decisions always re-read the store instead.
    pub fn boot_toggles(&self) -> Toggles {
        self.inner.cfg.toggles
    }

    pub fn store(&self) -> Arc<SharedToggleStore> {
        Arc::clone(&self.inner.store)
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.inner.pipeline
    }

    pub fn vault(&self) -> &SecretVault {
        &self.inner.vault
    }
}
