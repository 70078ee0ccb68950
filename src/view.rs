//! View builder for the pager.
//!
//! Composes the card strip from stock widgets: a hidden-scrollbar
//! horizontal scrollable over fixed-width slot cells, with leading and
//! trailing spacers sized so card centers land under the viewport center
//! at offsets of exact stride multiples. Per-slot lift and scale come
//! straight from the engine's cached transforms.

use iced::widget::{Space, column, container, mouse_area, row, scrollable};
use iced::{Border, Element, Length};

use crate::constants::layout;
use crate::messages::PagerMessage;
use crate::state::PagerState;

/// Build the pager element for a key/state pair.
///
/// `create_card` produces the renderable content for a slot; a `None`
/// keeps alignment stable with an empty placeholder. Produced cards get
/// the family's fixed 12-unit corner radius. An empty pager renders a
/// zero-height container and wires nothing.
pub fn pager_view<'a, K, F>(
    key: K,
    state: &PagerState,
    create_card: F,
) -> Element<'a, PagerMessage<K>>
where
    K: Clone + 'static,
    F: Fn(usize) -> Option<Element<'a, PagerMessage<K>>>,
{
    if state.is_empty() {
        return container(Space::with_height(0.0)).into();
    }

    let geometry = &state.geometry;
    let stride = state.stride();
    let strip_height = geometry.viewport_height;
    let card_width = geometry.card_width();
    let card_height = geometry.card_height();
    let edge_spacer = ((geometry.viewport_width - stride) / 2.0).max(0.0);

    let mut cells = row![];
    cells = cells.push(Space::with_width(edge_spacer));

    for slot in state.slots() {
        let transform = slot.transform;
        let width = card_width * transform.width_factor;
        let height = card_height * transform.height_factor;
        let top_gap = ((strip_height - height) / 2.0 + transform.lift).max(0.0);

        let card: Element<'a, PagerMessage<K>> = match create_card(slot.index) {
            Some(content) => {
                let framed = container(content)
                    .width(Length::Fixed(width))
                    .height(Length::Fixed(height))
                    .clip(true)
                    .style(card_frame);
                if state.interaction_enabled {
                    mouse_area(framed)
                        .on_press(PagerMessage::CardPressed(key.clone(), slot.index))
                        .into()
                } else {
                    framed.into()
                }
            }
            // Placeholder keeps alignment stable when content is missing.
            None => Space::new(width, height).into(),
        };

        let cell = container(column![Space::with_height(top_gap), card])
            .width(Length::Fixed(stride))
            .height(Length::Fixed(strip_height))
            .align_x(iced::alignment::Horizontal::Center);
        cells = cells.push(cell);
    }

    cells = cells.push(Space::with_width(edge_spacer));

    let key_for_scroll = key;
    scrollable(cells)
        .id(state.scrollable_id.clone())
        .direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::new().width(0.0).scroller_width(0.0),
        ))
        .on_scroll(move |viewport| {
            PagerMessage::ViewportChanged(key_for_scroll.clone(), viewport)
        })
        .width(Length::Fill)
        .height(Length::Fixed(strip_height))
        .into()
}

fn card_frame(_theme: &iced::Theme) -> container::Style {
    container::Style {
        border: Border {
            radius: layout::CARD_CORNER_RADIUS.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}
