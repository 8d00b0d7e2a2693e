//! Toggle storage seam.
//!
//! The engine receives an explicit [`Toggles`] snapshot; this module is the
//! collaborator that produces it. Toggles are fetched fresh per request (no
//! caching across requests) so concurrent administrative updates take effect
//! on the next request without locking on the hot path beyond a single read.

use std::sync::RwLock;

use async_trait::async_trait;
use remshield_core::engine::Toggles;

/// Key-value toggle storage consumed once at the top of request handling.
#[async_trait]
pub trait ToggleStore: Send + Sync {
    /// Current snapshot. Absent/unreadable state yields all-off (fail open:
    /// nothing is blocked).
    async fn get_toggles(&self) -> Toggles;

    /// Replace the persisted toggles (administrative surface).
    async fn set_toggles(&self, toggles: Toggles);
}

/// In-process store over a shared snapshot.
#[derive(Debug, Default)]
pub struct SharedToggleStore {
    inner: RwLock<Toggles>,
}

impl SharedToggleStore {
    pub fn new(toggles: Toggles) -> Self {
        Self {
            inner: RwLock::new(toggles),
        }
    }
}

#[async_trait]
impl ToggleStore for SharedToggleStore {
    async fn get_toggles(&self) -> Toggles {
        // A poisoned lock counts as absent configuration: fail open.
        self.inner.read().map(|g| *g).unwrap_or_default()
    }

    async fn set_toggles(&self, toggles: Toggles) {
        if let Ok(mut g) = self.inner.write() {
            *g = toggles;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn defaults_to_all_off() {
        let store = SharedToggleStore::default();
        assert_eq!(store.get_toggles().await, Toggles::default());
    }

    #[tokio::test]
    async fn set_is_visible_to_next_get() {
        let store = SharedToggleStore::default();
        store
            .set_toggles(Toggles {
                rest_disabled: true,
                ..Default::default()
            })
            .await;
        assert!(store.get_toggles().await.rest_disabled);
    }
}
