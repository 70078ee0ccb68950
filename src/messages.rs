//! Message types for pager interactions.

use iced::widget::scrollable;

/// Messages produced by pager views and consumed by
/// [`handle_pager_message`](crate::update::handle_pager_message).
///
/// `K` is the host's pager key; hosts wrap this enum into their own
/// message type with `Element::map`.
#[derive(Debug, Clone)]
pub enum PagerMessage<K> {
    /// Viewport/scroll reporting from the underlying scrollable.
    ViewportChanged(K, scrollable::Viewport),
    /// A card was pressed.
    CardPressed(K, usize),
    /// Host-driven jump to an index without animation.
    MoveToIndex(K, usize),
    /// The data source reloaded with a new card count; triggers a full
    /// slot rebuild.
    Reloaded(K, usize),
    /// Animation and settle heartbeat. Hosts drive this from a
    /// subscription (e.g. `time::every(Duration::from_millis(16))`)
    /// while any pager may be in motion.
    Tick(K),
}
