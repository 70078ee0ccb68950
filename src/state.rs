//! PagerState: the carousel layout engine.
//!
//! Translates a 1-D scroll offset into per-slot render transforms, and
//! resolves snap targets, settled indices, and tap actions. The engine is
//! pure layout math; view composition and scroll-event plumbing live in
//! [`crate::view`] and [`crate::update`].

use iced::widget::scrollable::Id as ScrollableId;

use crate::events::PagerEvent;
use crate::geometry::PagerGeometry;

/// Derived render parameters for one card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    /// Vertical offset in pixels. Negative raises the card.
    pub lift: f32,
    /// Multiplier on the full card width, in `(0, 1]`.
    pub width_factor: f32,
    /// Multiplier on the full card height, in `(0, 1]`.
    pub height_factor: f32,
}

impl CardTransform {
    /// Transform of a card at rest away from center: no lift, shrunk to
    /// the neighbor scale.
    fn rest(geometry: &PagerGeometry) -> Self {
        Self {
            lift: 0.0,
            width_factor: geometry.neighbor_width_scale,
            height_factor: geometry.neighbor_height_scale,
        }
    }
}

/// One card position in the carousel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    pub index: usize,
    /// Fixed center in content coordinates; derived from the stride
    /// formula at rebuild and never mutated by scrolling.
    pub center_x: f32,
    /// Last computed transform. Only slots inside the 4-slot window
    /// around the current position are updated per scroll event.
    pub transform: CardTransform,
}

/// Decomposition of a scroll offset into slot-index space. Single source
/// of truth for all per-slot transforms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interpolation {
    /// `offset / stride`, the continuous ratio reported to hosts.
    pub float_index: f32,
    /// `floor(float_index)`; negative during left overscroll.
    pub base_index: isize,
    /// `float_index - base_index`, always in `[0, 1)`.
    pub fraction: f32,
}

/// Quantized end position for a free scroll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapTarget {
    pub index: usize,
    /// `index * stride`, an exact multiple of the stride.
    pub x: f32,
}

/// Outcome of a tap on a card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TapAction {
    /// The tapped card was already centered; the host should treat this
    /// as activation.
    Activate(usize),
    /// The tapped card was off-center; navigate to it instead of
    /// activating.
    ScrollTo { index: usize, target_x: f32 },
}

/// Formula used to resolve the settled index after a programmatic
/// scroll-to-rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettleMode {
    /// `round(offset / stride)`.
    #[default]
    Nearest,
    /// Asymmetric tolerance band carried by an old revision of this
    /// widget family: `round((2*offset - 0.5) / stride / 2)`. Only for
    /// bit-exact parity with that revision.
    LegacyBanded,
}

/// Layout engine state for one pager instance.
///
/// Owns the slot list and scroll state exclusively; hosts mutate them only
/// through these operations.
#[derive(Debug, Clone)]
pub struct PagerState {
    pub geometry: PagerGeometry,
    slots: Vec<Slot>,
    /// Current scroll offset. May transiently exceed content bounds
    /// during overscroll.
    pub scroll_x: f32,
    pub is_dragging: bool,
    pub is_animating_to_target: bool,
    /// Cleared while a tap-to-navigate animation is in flight, restored
    /// exactly once on completion.
    pub interaction_enabled: bool,
    pub settle_mode: SettleMode,
    interpolation: Option<Interpolation>,
    /// Scrollable widget id for programmatic scrolling.
    pub scrollable_id: ScrollableId,
}

impl PagerState {
    /// Create an engine with `count` slots.
    pub fn new(count: usize, geometry: PagerGeometry) -> Self {
        let mut state = Self {
            geometry,
            slots: Vec::new(),
            scroll_x: 0.0,
            is_dragging: false,
            is_animating_to_target: false,
            interaction_enabled: true,
            settle_mode: SettleMode::default(),
            interpolation: None,
            scrollable_id: ScrollableId::unique(),
        };
        state.rebuild(count, geometry);
        state
    }

    /// Clear and reconstruct the slot list for a new count/geometry.
    ///
    /// Invalidates all previously derived transforms; every slot is reset
    /// and the window around the (clamped) current offset is recomputed
    /// fresh. `count == 0` leaves an empty engine.
    pub fn rebuild(&mut self, count: usize, geometry: PagerGeometry) {
        self.geometry = geometry;
        self.interpolation = None;
        self.slots.clear();

        if count == 0 {
            self.scroll_x = 0.0;
            log::debug!("pager rebuilt empty");
            return;
        }

        let rest = CardTransform::rest(&geometry);
        self.slots.extend((0..count).map(|index| Slot {
            index,
            center_x: geometry.center_x(index),
            transform: rest,
        }));

        self.scroll_x = self.scroll_x.clamp(0.0, self.max_scroll());
        let interpolation = self.interpolate(self.scroll_x);
        self.apply_window(interpolation);

        log::debug!(
            "pager rebuilt: count={}, stride={}, scroll_x={}",
            count,
            geometry.stride(),
            self.scroll_x
        );
    }

    /// Apply a container resize: slot centers are re-derived and the
    /// current window recomputed, without touching the slot count.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.geometry.set_viewport(width, height);
        for slot in &mut self.slots {
            slot.center_x = self.geometry.center_x(slot.index);
        }
        if self.slots.is_empty() {
            return;
        }
        self.scroll_x = self.scroll_x.clamp(0.0, self.max_scroll());
        let interpolation = self.interpolate(self.scroll_x);
        self.apply_window(interpolation);
    }

    /// Feed a scroll offset into the engine.
    ///
    /// Recomputes the interpolation, updates the 4-slot window around the
    /// current position, and reports the offset and ratio signals
    /// unconditionally. A no-op on an empty pager: nothing fires.
    pub fn on_scroll(&mut self, offset_x: f32) -> Vec<PagerEvent> {
        if self.slots.is_empty() {
            return Vec::new();
        }

        self.scroll_x = offset_x;
        let interpolation = self.interpolate(offset_x);
        self.apply_window(interpolation);

        vec![
            PagerEvent::ScrollOffsetChanged(offset_x),
            PagerEvent::ScrollRatioChanged(interpolation.float_index),
        ]
    }

    /// Decompose an offset into `float_index` / `base_index` / `fraction`.
    pub fn interpolate(&self, offset_x: f32) -> Interpolation {
        let float_index = offset_x / self.geometry.stride();
        let base = float_index.floor();
        Interpolation {
            float_index,
            base_index: base as isize,
            fraction: float_index - base,
        }
    }

    /// Update the transforms of `{base-1, base, base+1, base+2}`.
    /// Indices outside `[0, count-1]` are skipped; slots outside the
    /// window keep their last computed values.
    fn apply_window(&mut self, interpolation: Interpolation) {
        let lift = self.geometry.vertical_offset_normalized();
        let neighbor_w = self.geometry.neighbor_width_scale;
        let neighbor_h = self.geometry.neighbor_height_scale;
        let fraction = interpolation.fraction;
        let rest = CardTransform::rest(&self.geometry);

        let window = [
            (-1isize, rest),
            (
                0,
                CardTransform {
                    lift: lift * (1.0 - fraction),
                    width_factor: lerp(1.0, neighbor_w, fraction),
                    height_factor: lerp(1.0, neighbor_h, fraction),
                },
            ),
            (
                1,
                CardTransform {
                    lift: lift * fraction,
                    width_factor: lerp(1.0, neighbor_w, 1.0 - fraction),
                    height_factor: lerp(1.0, neighbor_h, 1.0 - fraction),
                },
            ),
            (2, rest),
        ];

        for (delta, transform) in window {
            let index = interpolation.base_index + delta;
            if index < 0 || index as usize >= self.slots.len() {
                continue;
            }
            self.slots[index as usize].transform = transform;
        }

        self.interpolation = Some(interpolation);
        log::trace!(
            "pager window updated: base={}, fraction={}",
            interpolation.base_index,
            fraction
        );
    }

    /// Quantize a proposed free-scroll end position to a card-centered
    /// offset using the ceiling rule, which biases snapping toward
    /// advancing to the next card. `None` on an empty pager.
    pub fn resolve_snap_target(&self, proposed_x: f32) -> Option<SnapTarget> {
        if self.slots.is_empty() {
            return None;
        }
        let stride = self.geometry.stride();
        let raw = ((proposed_x - stride / 2.0) / stride).ceil();
        let index = raw.clamp(0.0, (self.slots.len() - 1) as f32) as usize;
        Some(SnapTarget {
            index,
            x: index as f32 * stride,
        })
    }

    /// Resolve the discrete index considered active once a programmatic
    /// scroll-to-rest completes. `None` on an empty pager.
    pub fn resolve_settled_index(&self, offset_x: f32) -> Option<usize> {
        if self.slots.is_empty() {
            return None;
        }
        let stride = self.geometry.stride();
        let raw = match self.settle_mode {
            SettleMode::Nearest => (offset_x / stride).round(),
            SettleMode::LegacyBanded => ((2.0 * offset_x - 0.5) / stride / 2.0).round(),
        };
        Some(raw.clamp(0.0, (self.slots.len() - 1) as f32) as usize)
    }

    /// Resolve a tap on slot `index` given the current offset: the
    /// centered card activates, any other card becomes a navigation
    /// target. `None` for out-of-range indices or an empty pager.
    pub fn handle_tap(&self, index: usize, offset_x: f32) -> Option<TapAction> {
        if index >= self.slots.len() {
            return None;
        }
        let centered = self.resolve_settled_index_nearest(offset_x);
        if index == centered {
            Some(TapAction::Activate(index))
        } else {
            Some(TapAction::ScrollTo {
                index,
                target_x: self.geometry.offset_for_index(index),
            })
        }
    }

    /// Jump directly to `index` without animation. Returns the new
    /// offset, `None` for out-of-range indices.
    pub fn move_to_index(&mut self, index: usize) -> Option<f32> {
        if index >= self.slots.len() {
            return None;
        }
        let target = self.geometry.offset_for_index(index);
        self.scroll_x = target;
        let interpolation = self.interpolate(target);
        self.apply_window(interpolation);
        Some(target)
    }

    /// Tap resolution always compares against the straightforward nearest
    /// index, independent of the configured settle mode.
    fn resolve_settled_index_nearest(&self, offset_x: f32) -> usize {
        let raw = (offset_x / self.geometry.stride()).round();
        raw.clamp(0.0, (self.slots.len().saturating_sub(1)) as f32) as usize
    }

    pub fn count(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    /// Last computed interpolation, if any scroll has been applied since
    /// the last rebuild.
    pub fn interpolation(&self) -> Option<Interpolation> {
        self.interpolation
    }

    #[inline]
    pub fn stride(&self) -> f32 {
        self.geometry.stride()
    }

    /// Offset that centers the last slot; zero for empty pagers.
    #[inline]
    pub fn max_scroll(&self) -> f32 {
        self.geometry.max_scroll(self.slots.len())
    }

    /// Discrete index nearest to the current offset.
    pub fn current_index(&self) -> usize {
        if self.slots.is_empty() {
            return 0;
        }
        self.resolve_settled_index_nearest(self.scroll_x)
    }

    /// Continuous float index at the current offset.
    pub fn float_index(&self) -> f32 {
        self.scroll_x / self.geometry.stride()
    }
}

#[inline]
fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}
