//! Per-card cosmetic tilt.
//!
//! Each card gets a small random tilt the first time it is shown. The value is
//! kept in a map keyed by card id so re-renders never re-roll it.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::CardId;

/// Default tilt range in degrees, either way
pub const DEFAULT_MAX_TILT: f64 = 3.0;

pub struct Cosmetics {
    tilts: HashMap<CardId, f64>,
    max_tilt: f64,
    rng: StdRng,
}

impl Cosmetics {
    pub fn new(max_tilt: f64, seed: u64) -> Self {
        Self {
            tilts: HashMap::new(),
            max_tilt: max_tilt.abs(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Keep tilts for `ids`, rolling new ones for cards seen for the first
    /// time and forgetting cards that are gone.
    pub fn retain_for(&mut self, ids: &[CardId]) {
        self.tilts.retain(|id, _| ids.contains(id));
        for id in ids {
            if !self.tilts.contains_key(id) {
                let tilt = if self.max_tilt > 0.0 {
                    self.rng.random_range(-self.max_tilt..=self.max_tilt)
                } else {
                    0.0
                };
                self.tilts.insert(*id, tilt);
            }
        }
    }

    /// Tilt for a card; 0 for cards never registered.
    pub fn tilt(&self, id: CardId) -> f64 {
        self.tilts.get(&id).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.tilts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tilts.is_empty()
    }
}

impl Default for Cosmetics {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TILT, rand::random())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tilt_is_stable_across_calls() {
        let mut c = Cosmetics::new(3.0, 5);
        c.retain_for(&[CardId(1), CardId(2)]);
        let first = c.tilt(CardId(1));

        c.retain_for(&[CardId(1), CardId(2), CardId(3)]);
        assert_eq!(c.tilt(CardId(1)), first);
        assert!(c.tilt(CardId(3)).abs() <= 3.0);
    }

    #[test]
    fn test_departed_cards_are_forgotten() {
        let mut c = Cosmetics::new(3.0, 5);
        c.retain_for(&[CardId(1), CardId(2)]);
        c.retain_for(&[CardId(2)]);
        assert_eq!(c.len(), 1);
        assert_eq!(c.tilt(CardId(1)), 0.0);
    }

    #[test]
    fn test_zero_range() {
        let mut c = Cosmetics::new(0.0, 5);
        c.retain_for(&[CardId(1)]);
        assert_eq!(c.tilt(CardId(1)), 0.0);
    }
}
