//! Update handling: routes pager messages into engine mutations, emitted
//! signals, and programmatic scroll tasks.

use std::fmt;
use std::hash::Hash;

use iced::Task;
use iced::widget::scrollable::{self, AbsoluteOffset};

use crate::constants::snap;
use crate::events::PagerEvent;
use crate::messages::PagerMessage;
use crate::registry::PagerRegistry;
use crate::state::{PagerState, TapAction};

/// Result of handling one pager message: a task to run (usually a
/// `scrollable::scroll_to`) and the signals the operation produced, in
/// order. Hosts forward the events to their observer, if any.
pub struct PagerUpdate<K> {
    pub task: Task<PagerMessage<K>>,
    pub events: Vec<PagerEvent>,
}

impl<K> PagerUpdate<K> {
    fn none() -> Self {
        Self {
            task: Task::none(),
            events: Vec::new(),
        }
    }
}

// Manual impl: `iced::Task` carries no `Debug`, so only the events are
// formatted.
impl<K> fmt::Debug for PagerUpdate<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PagerUpdate")
            .field("events", &self.events)
            .finish_non_exhaustive()
    }
}

/// Handle a pager message against the registry.
pub fn handle_pager_message<K>(
    registry: &mut PagerRegistry<K>,
    message: PagerMessage<K>,
) -> PagerUpdate<K>
where
    K: Clone + Eq + Hash + Send + 'static,
{
    match message {
        PagerMessage::ViewportChanged(key, viewport) => {
            handle_viewport_changed(registry, key, viewport)
        }
        PagerMessage::CardPressed(key, index) => handle_card_pressed(registry, key, index),
        PagerMessage::MoveToIndex(key, index) => handle_move_to_index(registry, key, index),
        PagerMessage::Reloaded(key, count) => handle_reloaded(registry, key, count),
        PagerMessage::Tick(key) => handle_tick(registry, key),
    }
}

fn handle_viewport_changed<K>(
    registry: &mut PagerRegistry<K>,
    key: K,
    viewport: scrollable::Viewport,
) -> PagerUpdate<K>
where
    K: Clone + Eq + Hash + Send + 'static,
{
    let mut update = PagerUpdate::none();

    let Some(state) = registry.get_mut(&key) else {
        return update;
    };

    let bounds = viewport.bounds();
    if (bounds.width - state.geometry.viewport_width).abs() > 0.5
        || (bounds.height - state.geometry.viewport_height).abs() > 0.5
    {
        state.set_viewport(bounds.width, bounds.height);
    }

    // A `scroll_to` we issued ourselves echoes back one viewport report
    // at the offset the engine already holds; only genuine movement
    // (re)arms drag tracking, otherwise every snap would settle twice.
    let reported = viewport.absolute_offset().x;
    let moved = (reported - state.scroll_x).abs() > 0.1;
    update.events = state.on_scroll(reported);

    let animating = state.is_animating_to_target;
    if !animating && moved {
        state.is_dragging = true;
        registry.record_scroll(&key);
    }

    if animating {
        // Completion normally arrives through ticks; if those stopped,
        // the expiry restores interaction here instead of leaving the
        // pager stuck.
        let expired = registry
            .get_animator(&key)
            .is_some_and(|animator| animator.is_expired());
        if expired {
            if let Some(animator) = registry.get_animator_mut(&key) {
                animator.cancel();
            }
            if let Some(state) = registry.get_mut(&key) {
                update.events.extend(finish_animation(state));
            }
        }
    }

    update
}

fn handle_card_pressed<K>(registry: &mut PagerRegistry<K>, key: K, index: usize) -> PagerUpdate<K>
where
    K: Clone + Eq + Hash + Send + 'static,
{
    let mut update = PagerUpdate::none();

    let Some(state) = registry.get_mut(&key) else {
        return update;
    };
    if !state.interaction_enabled {
        return update;
    }

    match state.handle_tap(index, state.scroll_x) {
        Some(TapAction::Activate(index)) => {
            update.events.push(PagerEvent::CardActivated(index));
        }
        Some(TapAction::ScrollTo { index, target_x }) => {
            log::debug!("pager navigating to card {index} at x={target_x}");
            state.interaction_enabled = false;
            state.is_animating_to_target = true;
            let current = state.scroll_x;
            registry
                .ensure_animator(&key)
                .start(current, target_x, snap::DURATION_MS, snap::EASING);
        }
        None => {}
    }

    update
}

fn handle_move_to_index<K>(registry: &mut PagerRegistry<K>, key: K, index: usize) -> PagerUpdate<K>
where
    K: Clone + Eq + Hash + Send + 'static,
{
    let mut update = PagerUpdate::none();

    if let Some(animator) = registry.get_animator_mut(&key) {
        animator.cancel();
    }

    let Some(state) = registry.get_mut(&key) else {
        return update;
    };
    state.is_animating_to_target = false;
    state.interaction_enabled = true;
    state.is_dragging = false;
    if let Some(x) = state.move_to_index(index) {
        update.task =
            scrollable::scroll_to(state.scrollable_id.clone(), AbsoluteOffset { x, y: 0.0 });
    }

    update
}

fn handle_reloaded<K>(registry: &mut PagerRegistry<K>, key: K, count: usize) -> PagerUpdate<K>
where
    K: Clone + Eq + Hash + Send + 'static,
{
    let mut update = PagerUpdate::none();

    if let Some(animator) = registry.get_animator_mut(&key) {
        animator.cancel();
    }

    let Some(state) = registry.get_mut(&key) else {
        return update;
    };
    state.rebuild(count, state.geometry);
    state.is_dragging = false;
    state.is_animating_to_target = false;
    state.interaction_enabled = true;

    if !state.is_empty() {
        // Re-sync the scrollable with the clamped offset.
        update.task = scrollable::scroll_to(
            state.scrollable_id.clone(),
            AbsoluteOffset {
                x: state.scroll_x,
                y: 0.0,
            },
        );
    }

    update
}

fn handle_tick<K>(registry: &mut PagerRegistry<K>, key: K) -> PagerUpdate<K>
where
    K: Clone + Eq + Hash + Send + 'static,
{
    let mut update = PagerUpdate::none();

    // Advance an active tween.
    let step = registry
        .get_animator_mut(&key)
        .and_then(|animator| animator.tick().map(|next| (next, animator.is_active())));
    if let Some((next, still_active)) = step {
        let Some(state) = registry.get_mut(&key) else {
            return update;
        };
        update.events = state.on_scroll(next);
        update.task = scrollable::scroll_to(
            state.scrollable_id.clone(),
            AbsoluteOffset { x: next, y: 0.0 },
        );
        if !still_active {
            update.events.extend(finish_animation(state));
        }
        return update;
    }

    {
        let Some(state) = registry.get_mut(&key) else {
            return update;
        };
        if state.is_animating_to_target {
            // The flag survived without an active animator (dropped
            // completion tick); force-complete at the current offset.
            update.events.extend(finish_animation(state));
            return update;
        }
        if !state.is_dragging || state.is_empty() {
            return update;
        }
    }

    // Idle path: detect a free scroll coming to rest and quantize it.
    let rested = registry
        .time_since_scroll(&key)
        .is_some_and(|elapsed| elapsed.as_millis() as u64 >= snap::SETTLE_MS);
    if !rested {
        return update;
    }

    let Some(state) = registry.get_mut(&key) else {
        return update;
    };
    let Some(target) = state.resolve_snap_target(state.scroll_x) else {
        return update;
    };

    // The drag-ended signal always carries the ceil-quantized index,
    // whether or not a correction tween is needed.
    state.is_dragging = false;
    update.events.push(PagerEvent::DragSettled(target.index));

    let epsilon = state.stride() * snap::EPSILON_FRACTION;
    let current = state.scroll_x;
    let id = state.scrollable_id.clone();
    if (current - target.x).abs() <= epsilon {
        if current != target.x {
            // Align the engine first so the echoed viewport report
            // matches the held offset and settles nothing anew.
            update.events.extend(state.on_scroll(target.x));
            update.task = scrollable::scroll_to(
                id,
                AbsoluteOffset {
                    x: target.x,
                    y: 0.0,
                },
            );
        }
    } else {
        log::debug!(
            "pager snapping from x={current} to card {} at x={}",
            target.index,
            target.x
        );
        // Interaction stays enabled for drag-end corrections; only
        // tap-to-navigate animations disable it.
        state.is_animating_to_target = true;
        registry
            .ensure_animator(&key)
            .start(current, target.x, snap::DURATION_MS, snap::EASING);
    }

    update
}

/// Mark an in-flight animation as done: the flag drops, interaction is
/// restored exactly once, and a settled signal fires for tap navigations
/// (drag-end corrections already reported their index at quantization).
fn finish_animation(state: &mut PagerState) -> Option<PagerEvent> {
    let was_navigation = !state.interaction_enabled;
    state.is_animating_to_target = false;
    state.interaction_enabled = true;
    state.is_dragging = false;
    if was_navigation {
        state
            .resolve_settled_index(state.scroll_x)
            .map(PagerEvent::DragSettled)
    } else {
        None
    }
}
