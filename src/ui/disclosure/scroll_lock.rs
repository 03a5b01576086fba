// SPDX-License-Identifier: MPL-2.0
//! Background scroll suppression shared by the overlays.
//!
//! Holders are keyed by [`OverlayKind`]: acquiring twice with the same key
//! counts once, and releasing a key that is not held does nothing. The page
//! is scrollable again exactly when no key is held.

use super::OverlayKind;

/// Owner-keyed scroll lock.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrollLock {
    holders: Vec<OverlayKind>,
}

impl ScrollLock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the lock on behalf of `owner`. Returns `false` if it already held it.
    pub fn acquire(&mut self, owner: OverlayKind) -> bool {
        if self.holders.contains(&owner) {
            return false;
        }
        self.holders.push(owner);
        tracing::debug!(?owner, holders = self.holders.len(), "scroll lock acquired");
        true
    }

    /// Gives the lock back on behalf of `owner`. Returns `false` if it did not
    /// hold it.
    pub fn release(&mut self, owner: OverlayKind) -> bool {
        let Some(position) = self.holders.iter().position(|held| *held == owner) else {
            return false;
        };
        self.holders.remove(position);
        tracing::debug!(?owner, holders = self.holders.len(), "scroll lock released");
        true
    }

    /// Drops every hold at once, for teardown.
    pub fn release_all(&mut self) {
        if !self.holders.is_empty() {
            tracing::debug!(holders = self.holders.len(), "scroll lock cleared");
            self.holders.clear();
        }
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        !self.holders.is_empty()
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.holders.len()
    }

    #[must_use]
    pub fn is_held_by(&self, owner: OverlayKind) -> bool {
        self.holders.contains(&owner)
    }
}
