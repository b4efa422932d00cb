//! Bounded color-lookup cache
//!
//! Indexed bitmap ingestion resolves short color codes to ARGB values
//! over and over; this cache keeps the most recent resolutions in a
//! fixed ring with round-robin eviction, so behavior is deterministic
//! regardless of how many distinct codes pass through.

use super::Argb;

/// A fixed-size (code -> color) cache with round-robin eviction.
///
/// `N` slots are filled in insertion order; once full, the oldest
/// slot is overwritten next, then the one after it, and so on.
#[derive(Debug, Clone)]
pub struct ClutCache<const N: usize> {
    slots: [Option<(u16, Argb)>; N],
    /// Next slot to overwrite
    cursor: usize,
}

impl<const N: usize> Default for ClutCache<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> ClutCache<N> {
    /// Create an empty cache
    pub const fn new() -> Self {
        Self {
            slots: [None; N],
            cursor: 0,
        }
    }

    /// Look up a previously inserted code
    pub fn lookup(&self, code: u16) -> Option<Argb> {
        self.slots
            .iter()
            .flatten()
            .find(|(c, _)| *c == code)
            .map(|(_, color)| *color)
    }

    /// Insert a resolved color, evicting the oldest entry when full.
    ///
    /// Re-inserting a cached code refreshes its color in place
    /// without consuming a slot.
    pub fn insert(&mut self, code: u16, color: Argb) {
        if N == 0 {
            return;
        }
        if let Some(slot) = self
            .slots
            .iter_mut()
            .find(|s| matches!(s, Some((c, _)) if *c == code))
        {
            *slot = Some((code, color));
            return;
        }
        self.slots[self.cursor] = Some((code, color));
        self.cursor = (self.cursor + 1) % N;
    }

    /// Drop all cached entries
    pub fn clear(&mut self) {
        self.slots = [None; N];
        self.cursor = 0;
    }
}
