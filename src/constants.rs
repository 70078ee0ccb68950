//! Pager constants
//!
//! Shared constants for pager behavior: geometry defaults, snap timing,
//! and view composition. Tuning should happen here so every pager
//! instance updates consistently.

/// Geometry defaults matching the original widget family.
pub mod defaults {
    /// Horizontal gap between adjacent cards, in reference-width units.
    pub const SPACING: f32 = 40.0;
    /// Vertical lift of the centered card, in reference-width units.
    /// Negative raises the card.
    pub const VERTICAL_OFFSET: f32 = -20.0;
    /// Card width as a fraction of the viewport width.
    pub const CARD_WIDTH_RATIO: f32 = 0.6;
    /// Card height as a fraction of the viewport height.
    pub const CARD_HEIGHT_RATIO: f32 = 0.8;
    /// Width shrink factor for non-centered cards (1.0 = no shrink).
    pub const NEIGHBOR_WIDTH_SCALE: f32 = 1.0;
    /// Height shrink factor for non-centered cards (1.0 = no shrink).
    pub const NEIGHBOR_HEIGHT_SCALE: f32 = 1.0;
    /// Reference viewport width that `SPACING` and `VERTICAL_OFFSET` are
    /// expressed against. Both are multiplied by
    /// `viewport_width / REFERENCE_WIDTH` at layout time.
    pub const REFERENCE_WIDTH: f32 = 390.0;
}

/// Snap/tween animation defaults and settle detection cadence.
pub mod snap {
    use crate::animator::Easing;

    /// Duration (ms) of the tween used for tap-to-navigate scrolls.
    pub const DURATION_MS: u64 = 200;
    /// Easing for snap tweens.
    pub const EASING: Easing = Easing::EaseOut;
    /// If within this fraction of a stride from the nearest boundary,
    /// the offset counts as aligned and no tween is started.
    pub const EPSILON_FRACTION: f32 = 0.06;
    /// Time (ms) the viewport must rest before a free scroll is snapped
    /// to the quantized target.
    pub const SETTLE_MS: u64 = 120;
    /// Grace period (ms) past the tween duration after which the
    /// animation is force-completed even if ticks were dropped, so
    /// interaction is always re-enabled.
    pub const EXPIRY_GRACE_MS: u64 = 500;
}

/// Layout constants for the pager view composition.
pub mod layout {
    /// Corner radius applied to every produced card.
    pub const CARD_CORNER_RADIUS: f32 = 12.0;
}
