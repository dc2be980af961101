//! The single global slice: who is logged in

use std::sync::{Arc, RwLock};

use super::types::Identity;

/// Shared handle to the logged-in identity.
///
/// Written once after login or verification and read everywhere else.
#[derive(Debug, Clone, Default)]
pub struct IdentityStore {
    current: Arc<RwLock<Option<Identity>>>,
}

impl IdentityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, identity: Identity) {
        let mut current = self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *current = Some(identity);
    }

    pub fn get(&self) -> Option<Identity> {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn clear(&self) {
        let mut current = self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *current = None;
    }

    pub fn is_signed_in(&self) -> bool {
        self.get().is_some()
    }
}
