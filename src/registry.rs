//! Registry for managing multiple pager instances keyed by a host key.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

use crate::animator::SnapAnimator;
use crate::geometry::PagerGeometry;
use crate::state::PagerState;

/// Holds the engine state, snap animator, and settle bookkeeping for any
/// number of pagers. Keys are host-defined; anything hashable works
/// (an enum of screen sections, an id newtype, a `&'static str`).
#[derive(Debug)]
pub struct PagerRegistry<K> {
    states: HashMap<K, PagerState>,
    animators: HashMap<K, SnapAnimator>,
    // Settle detection for free scrolls: time of the last genuine scroll
    // report per key.
    last_scroll_at: HashMap<K, Instant>,
}

impl<K> Default for PagerRegistry<K> {
    fn default() -> Self {
        Self {
            states: HashMap::new(),
            animators: HashMap::new(),
            last_scroll_at: HashMap::new(),
        }
    }
}

impl<K> PagerRegistry<K>
where
    K: Clone + Eq + Hash,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &K) -> Option<&PagerState> {
        self.states.get(key)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut PagerState> {
        self.states.get_mut(key)
    }

    /// Get a mutable reference, creating a new state with the provided
    /// factory when absent.
    pub fn get_or_insert_with<F>(&mut self, key: K, init: F) -> &mut PagerState
    where
        F: FnOnce() -> PagerState,
    {
        self.states.entry(key).or_insert_with(init)
    }

    /// Create the pager if missing, then bring it up to date: a changed
    /// count or any changed layout field (ratios, spacing, lift, neighbor
    /// scales) triggers a full rebuild, a viewport-only change re-derives
    /// slot centers in place. This keeps initial pagers correct without
    /// waiting for a scroll event.
    pub fn ensure(
        &mut self,
        key: K,
        count: usize,
        geometry: PagerGeometry,
    ) -> &mut PagerState {
        let state = self
            .states
            .entry(key)
            .or_insert_with(|| PagerState::new(count, geometry));

        // Compare layout fields with the viewport factored out, so a
        // resize alone takes the cheaper path below.
        let mut incoming = geometry;
        incoming.set_viewport(
            state.geometry.viewport_width,
            state.geometry.viewport_height,
        );
        let layout_changed = incoming != state.geometry;

        let viewport_changed = (state.geometry.viewport_width - geometry.viewport_width).abs()
            > 0.5
            || (state.geometry.viewport_height - geometry.viewport_height).abs() > 0.5;

        if state.count() != count || layout_changed {
            state.rebuild(count, geometry);
        } else if viewport_changed {
            state.set_viewport(geometry.viewport_width, geometry.viewport_height);
        }

        state
    }

    pub fn remove(&mut self, key: &K) -> Option<PagerState> {
        self.animators.remove(key);
        self.last_scroll_at.remove(key);
        self.states.remove(key)
    }

    /// Snapshot of all keys currently registered.
    pub fn keys(&self) -> Vec<K> {
        self.states.keys().cloned().collect()
    }

    pub fn ensure_animator(&mut self, key: &K) -> &mut SnapAnimator {
        self.animators
            .entry(key.clone())
            .or_insert_with(SnapAnimator::new)
    }

    pub fn get_animator(&self, key: &K) -> Option<&SnapAnimator> {
        self.animators.get(key)
    }

    pub fn get_animator_mut(&mut self, key: &K) -> Option<&mut SnapAnimator> {
        self.animators.get_mut(key)
    }

    /// Record that a scroll report arrived for this key.
    pub fn record_scroll(&mut self, key: &K) {
        self.last_scroll_at.insert(key.clone(), Instant::now());
    }

    /// Time since the last scroll report, if any was recorded.
    pub fn time_since_scroll(&self, key: &K) -> Option<Duration> {
        self.last_scroll_at
            .get(key)
            .map(|at| Instant::now().saturating_duration_since(*at))
    }
}
