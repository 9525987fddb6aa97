//! Per-round value storage keyed by 0-based round index.

use serde::{Deserialize, Serialize};

/// Round index → optional value.
///
/// Rounds that have not been played yet are holes. Writing past the end pads
/// the gap with holes explicitly, so a later round never shifts an earlier one.
/// Serializes as a plain array with `null` for holes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoundSlots<T>(Vec<Option<T>>);

impl<T> Default for RoundSlots<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> RoundSlots<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, round_idx: usize) -> Option<&T> {
        self.0.get(round_idx).and_then(Option::as_ref)
    }

    pub fn set(&mut self, round_idx: usize, value: T) {
        if self.0.len() <= round_idx {
            self.0.resize_with(round_idx + 1, || None);
        }
        self.0[round_idx] = Some(value);
    }

    pub fn is_set(&self, round_idx: usize) -> bool {
        self.get(round_idx).is_some()
    }

    /// Number of slots, holes included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Filled slots in round order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.as_ref().map(|v| (idx, v)))
    }

    /// The filled slot with the highest round index.
    pub fn last(&self) -> Option<&T> {
        self.0.iter().rev().find_map(Option::as_ref)
    }
}

impl<T: Copy> RoundSlots<T> {
    pub fn value_at(&self, round_idx: usize) -> Option<T> {
        self.get(round_idx).copied()
    }
}

impl<T> From<Vec<Option<T>>> for RoundSlots<T> {
    fn from(slots: Vec<Option<T>>) -> Self {
        Self(slots)
    }
}

impl<T> FromIterator<T> for RoundSlots<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().map(Some).collect())
    }
}
