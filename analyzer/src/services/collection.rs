//! The ordered roast profile collection
//!
//! Profiles are held in insertion order and keyed by file name. The only
//! two mutating operations are append and remove-by-file-name, both done
//! as read-snapshot / compute-next / replace so a renderer iterating an
//! earlier snapshot never observes in-place mutation.

use std::sync::{Arc, RwLock};

use shared::models::RoastProfile;

/// Ordered, atomically-replaced collection of analyzed profiles
#[derive(Debug, Default)]
pub struct ProfileStore {
    inner: RwLock<Arc<Vec<RoastProfile>>>,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current snapshot; stays valid across later appends and removals
    pub fn snapshot(&self) -> Arc<Vec<RoastProfile>> {
        Arc::clone(&self.inner.read().expect("profile store lock poisoned"))
    }

    /// Append a batch of new profiles, preserving their order
    pub fn append(&self, new_profiles: Vec<RoastProfile>) {
        let mut guard = self.inner.write().expect("profile store lock poisoned");
        let mut next = guard.as_ref().clone();
        next.extend(new_profiles);
        *guard = Arc::new(next);
    }

    /// Remove the profile with the given file name; returns whether one
    /// was removed
    pub fn remove(&self, file_name: &str) -> bool {
        let mut guard = self.inner.write().expect("profile store lock poisoned");
        if !guard.iter().any(|p| p.file_name == file_name) {
            return false;
        }
        let next: Vec<RoastProfile> = guard
            .iter()
            .filter(|p| p.file_name != file_name)
            .cloned()
            .collect();
        *guard = Arc::new(next);
        true
    }

    pub fn len(&self) -> usize {
        self.inner.read().expect("profile store lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
