//! Pager geometry: card sizing ratios, spacing, and the stride math every
//! other computation derives from.

use crate::constants::defaults;

/// Static layout configuration for a pager instance.
///
/// `spacing` and `vertical_offset` are expressed against
/// [`defaults::REFERENCE_WIDTH`] and scaled by `viewport_width / 390` at
/// layout time so proportions hold across differently sized viewports.
/// Viewport dimensions are passed in explicitly; the engine never reads
/// ambient display state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PagerGeometry {
    /// Card width as a fraction of the viewport width, in `(0, 1]`.
    pub card_width_ratio: f32,
    /// Card height as a fraction of the viewport height, in `(0, 1]`.
    pub card_height_ratio: f32,
    /// Gap between adjacent cards, in reference-width units.
    pub spacing: f32,
    /// Vertical lift of the centered card, in reference-width units.
    pub vertical_offset: f32,
    /// Width shrink factor applied to side cards, in `(0, 1]`.
    pub neighbor_width_scale: f32,
    /// Height shrink factor applied to side cards, in `(0, 1]`.
    pub neighbor_height_scale: f32,
    pub viewport_width: f32,
    pub viewport_height: f32,
}

impl Default for PagerGeometry {
    fn default() -> Self {
        Self {
            card_width_ratio: defaults::CARD_WIDTH_RATIO,
            card_height_ratio: defaults::CARD_HEIGHT_RATIO,
            spacing: defaults::SPACING,
            vertical_offset: defaults::VERTICAL_OFFSET,
            neighbor_width_scale: defaults::NEIGHBOR_WIDTH_SCALE,
            neighbor_height_scale: defaults::NEIGHBOR_HEIGHT_SCALE,
            viewport_width: defaults::REFERENCE_WIDTH,
            viewport_height: defaults::REFERENCE_WIDTH,
        }
    }
}

impl PagerGeometry {
    /// Create a geometry for the given viewport with family defaults.
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            viewport_width: viewport_width.max(1.0),
            viewport_height: viewport_height.max(1.0),
            ..Self::default()
        }
    }

    /// Update viewport dimensions in place (container resize).
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport_width = width.max(1.0);
        self.viewport_height = height.max(1.0);
    }

    /// Reference-width normalization factor applied to `spacing` and
    /// `vertical_offset`. This is visual-parity math, not a unit
    /// conversion.
    #[inline]
    pub fn standard_ratio(&self) -> f32 {
        self.viewport_width / defaults::REFERENCE_WIDTH
    }

    /// Effective gap between cards after normalization.
    #[inline]
    pub fn spacing_normalized(&self) -> f32 {
        self.spacing * self.standard_ratio()
    }

    /// Effective lift of the centered card after normalization.
    #[inline]
    pub fn vertical_offset_normalized(&self) -> f32 {
        self.vertical_offset * self.standard_ratio()
    }

    /// Horizontal distance between adjacent card centers.
    #[inline]
    pub fn stride(&self) -> f32 {
        (self.viewport_width * self.card_width_ratio + self.spacing_normalized()).max(1.0)
    }

    /// Fixed center of slot `index` in content coordinates.
    #[inline]
    pub fn center_x(&self, index: usize) -> f32 {
        self.viewport_width / 2.0 + index as f32 * self.stride()
    }

    /// Full (centered) card width in pixels.
    #[inline]
    pub fn card_width(&self) -> f32 {
        self.viewport_width * self.card_width_ratio
    }

    /// Full (centered) card height in pixels.
    #[inline]
    pub fn card_height(&self) -> f32 {
        self.viewport_height * self.card_height_ratio
    }

    /// Content offset that centers slot `index` under the viewport center.
    #[inline]
    pub fn offset_for_index(&self, index: usize) -> f32 {
        index as f32 * self.stride()
    }

    /// Scroll offset range upper bound: the offset that centers the last
    /// slot. Zero when the pager holds at most one card.
    #[inline]
    pub fn max_scroll(&self, count: usize) -> f32 {
        count.saturating_sub(1) as f32 * self.stride()
    }
}
