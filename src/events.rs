//! Signals emitted by the pager engine and the optional observer that
//! consumes them.

/// A discrete signal produced by an engine operation.
///
/// Operations return these in event order; the engine performs no
/// coalescing or debouncing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PagerEvent {
    /// The centered card was tapped and confirmed.
    CardActivated(usize),
    /// The scroll offset changed; fired on every scroll update.
    ScrollOffsetChanged(f32),
    /// The continuous float index (`offset / stride`) changed; fired on
    /// every scroll update.
    ScrollRatioChanged(f32),
    /// A drag or animation came to rest at the given index.
    DragSettled(usize),
}

impl PagerEvent {
    /// Forward this event to the matching observer method.
    pub fn dispatch(&self, observer: &mut dyn PagerObserver) {
        match *self {
            PagerEvent::CardActivated(index) => observer.on_card_activated(index),
            PagerEvent::ScrollOffsetChanged(offset) => observer.on_scroll_offset_changed(offset),
            PagerEvent::ScrollRatioChanged(ratio) => observer.on_scroll_ratio_changed(ratio),
            PagerEvent::DragSettled(index) => observer.on_drag_settled(index),
        }
    }
}

/// Host-side event sink. Every method has a no-op default so hosts
/// observe only the subset of signals they care about.
pub trait PagerObserver {
    /// Confirmed tap of the centered card.
    fn on_card_activated(&mut self, _index: usize) {}

    /// Fired on every scroll update with the raw offset.
    fn on_scroll_offset_changed(&mut self, _offset: f32) {}

    /// Fired on every scroll update with the continuous float index.
    fn on_scroll_ratio_changed(&mut self, _ratio: f32) {}

    /// Fired once per drag/animation completion with the resolved index.
    fn on_drag_settled(&mut self, _index: usize) {}
}

/// Dispatch a batch of events to an observer, preserving order.
pub fn dispatch_all(events: &[PagerEvent], observer: &mut dyn PagerObserver) {
    for event in events {
        event.dispatch(observer);
    }
}
