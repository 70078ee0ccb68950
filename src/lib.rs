//! Snapping card pager for iced.
//!
//! A horizontally scrolling carousel of cards that lifts and scales the
//! centered card, snaps free scrolls onto card boundaries, and reports
//! index/offset changes to the host. The crate separates the layout
//! engine (pure stride/interpolation math in [`PagerState`]) from view
//! composition ([`pager_view`]) and message routing
//! ([`handle_pager_message`]), with a [`PagerRegistry`] for hosts that
//! run several pagers at once.
//!
//! Typical wiring:
//! - keep a `PagerRegistry<K>` in your application state and call
//!   `registry.ensure(key, count, geometry)` from `view` before building
//!   the element with [`pager_view`];
//! - map the returned element's [`PagerMessage`] into your message type;
//! - route those messages through [`handle_pager_message`] in `update`,
//!   run the returned task, and forward the emitted [`PagerEvent`]s to
//!   your [`PagerObserver`] (or match on them directly);
//! - while any pager is in motion, feed it `PagerMessage::Tick` from a
//!   timer subscription to drive snap tweens and settle detection.

pub mod animator;
pub mod constants;
pub mod events;
pub mod geometry;
pub mod messages;
pub mod registry;
pub mod state;
pub mod update;
pub mod view;

pub use animator::{Easing, SnapAnimator};
pub use events::{PagerEvent, PagerObserver, dispatch_all};
pub use geometry::PagerGeometry;
pub use messages::PagerMessage;
pub use registry::PagerRegistry;
pub use state::{CardTransform, Interpolation, PagerState, SettleMode, Slot, SnapTarget, TapAction};
pub use update::{PagerUpdate, handle_pager_message};
pub use view::pager_view;
