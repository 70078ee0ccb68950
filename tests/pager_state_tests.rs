//! Layout-engine tests: stride math, the sliding transform window, snap
//! quantization, settle resolution, and tap handling.

use card_pager::{
    PagerEvent, PagerGeometry, PagerObserver, PagerState, SettleMode, TapAction, dispatch_all,
};

/// Geometry at the reference width (`standard_ratio == 1`) with a card
/// ratio of 0.5, so `stride = 390 * 0.5 + 40 = 235` — exact in f32, which
/// keeps index/offset round trips bit-stable for equality asserts.
fn reference_geometry() -> PagerGeometry {
    let mut geometry = PagerGeometry::new(390.0, 600.0);
    geometry.card_width_ratio = 0.5;
    geometry
}

#[test]
fn rebuild_produces_count_slots_with_stride_centers() {
    let state = PagerState::new(5, reference_geometry());

    assert_eq!(state.count(), 5);
    assert_eq!(state.stride(), 235.0);
    for (i, slot) in state.slots().iter().enumerate() {
        assert_eq!(slot.index, i);
        assert_eq!(slot.center_x, 195.0 + i as f32 * 235.0);
    }
}

#[test]
fn family_default_geometry_matches_reference_scenario() {
    // The widget family's defaults: ratio 0.6, spacing 40, viewport 390
    // give stride = 390*0.6 + 40 = 274.
    let mut state = PagerState::new(3, PagerGeometry::new(390.0, 600.0));
    assert!((state.stride() - 274.0).abs() < 1e-3);

    let stride = state.stride();
    state.on_scroll(stride);

    let interpolation = state.interpolation().unwrap();
    assert_eq!(interpolation.base_index, 1);
    assert_eq!(interpolation.fraction, 0.0);

    // Slot 1 takes the full center transform, slot 0's lift resets.
    assert_eq!(state.slot(1).unwrap().transform.lift, -20.0);
    assert_eq!(state.slot(1).unwrap().transform.width_factor, 1.0);
    assert_eq!(state.slot(0).unwrap().transform.lift, 0.0);
}

#[test]
fn rebuild_with_zero_count_yields_empty_engine() {
    let mut state = PagerState::new(0, reference_geometry());
    assert_eq!(state.count(), 0);
    assert!(state.is_empty());

    // onScroll on an empty pager is a no-op and fires no signals.
    let events = state.on_scroll(100.0);
    assert!(events.is_empty());
    assert_eq!(state.resolve_snap_target(100.0), None);
    assert_eq!(state.resolve_settled_index(100.0), None);
    assert_eq!(state.handle_tap(0, 0.0), None);
}

#[test]
fn initial_state_centers_slot_zero() {
    let state = PagerState::new(3, reference_geometry());

    let centered = state.slot(0).unwrap().transform;
    assert_eq!(centered.lift, -20.0);
    assert_eq!(centered.width_factor, 1.0);
    assert_eq!(centered.height_factor, 1.0);

    let rest = state.slot(1).unwrap().transform;
    assert_eq!(rest.lift, 0.0);
}

#[test]
fn on_scroll_at_exact_stride_emits_both_signals() {
    let mut state = PagerState::new(3, reference_geometry());
    let events = state.on_scroll(235.0);

    assert_eq!(
        events,
        vec![
            PagerEvent::ScrollOffsetChanged(235.0),
            PagerEvent::ScrollRatioChanged(1.0),
        ]
    );
    assert_eq!(state.slot(1).unwrap().transform.lift, -20.0);
    assert_eq!(state.slot(0).unwrap().transform.lift, 0.0);
}

#[test]
fn fraction_stays_in_unit_interval() {
    let state = PagerState::new(4, reference_geometry());
    for offset in [-411.0, -1.0, 0.0, 136.9, 235.0, 352.5, 1_000.0] {
        let interpolation = state.interpolate(offset);
        assert!(
            (0.0..1.0).contains(&interpolation.fraction),
            "fraction {} out of range for offset {offset}",
            interpolation.fraction
        );
    }
}

#[test]
fn window_updates_leave_distant_slots_untouched() {
    let mut geometry = reference_geometry();
    geometry.neighbor_width_scale = 0.8;
    geometry.neighbor_height_scale = 0.9;
    let mut state = PagerState::new(8, geometry);

    let before: Vec<_> = state.slots().iter().map(|s| s.transform).collect();
    state.on_scroll(352.5); // base 1, fraction 0.5

    for (i, slot) in state.slots().iter().enumerate() {
        if (0..=3).contains(&i) {
            continue; // the {base-1..base+2} window
        }
        assert_eq!(slot.transform, before[i], "slot {i} changed outside window");
    }

    // Mid-transition both window centers share the interpolated factors.
    let base = state.slot(1).unwrap().transform;
    let next = state.slot(2).unwrap().transform;
    assert!((base.width_factor - 0.9).abs() < 1e-6);
    assert!((next.width_factor - 0.9).abs() < 1e-6);
    assert_eq!(base.lift, -10.0);
    assert_eq!(next.lift, -10.0);

    // The outer window slots are fully shrunk with no lift.
    let leading = state.slot(0).unwrap().transform;
    assert_eq!(leading.lift, 0.0);
    assert!((leading.width_factor - 0.8).abs() < 1e-6);
}

#[test]
fn on_scroll_is_idempotent_for_equal_offsets() {
    let mut state = PagerState::new(6, reference_geometry());

    let first_events = state.on_scroll(400.0);
    let first: Vec<_> = state.slots().iter().map(|s| s.transform).collect();

    let second_events = state.on_scroll(400.0);
    let second: Vec<_> = state.slots().iter().map(|s| s.transform).collect();

    assert_eq!(first, second);
    // Signals still fire unconditionally on every call.
    assert_eq!(first_events, second_events);
    assert_eq!(first_events.len(), 2);
}

#[test]
fn window_skips_out_of_range_indices_at_edges() {
    let mut state = PagerState::new(2, reference_geometry());
    // base = 1 puts base+1 and base+2 past the end; base-1 = 0 is fine.
    state.on_scroll(235.0);
    // base = -1 during left overscroll puts base-1 and base out of range.
    state.on_scroll(-100.0);
    assert_eq!(state.count(), 2);
}

#[test]
fn snap_target_is_stride_multiple_and_clamped() {
    let state = PagerState::new(4, reference_geometry());
    let stride = state.stride();

    for proposed in [-900.0, -10.0, 0.0, 100.0, 150.0, 400.0, 823.0, 5_000.0] {
        let target = state.resolve_snap_target(proposed).unwrap();
        assert!(target.index < 4);
        assert_eq!(target.x, target.index as f32 * stride);
    }

    assert_eq!(state.resolve_snap_target(-900.0).unwrap().index, 0);
    assert_eq!(state.resolve_snap_target(5_000.0).unwrap().index, 3);
}

#[test]
fn snap_uses_ceiling_rule() {
    let state = PagerState::new(4, reference_geometry());

    // Just past the half-stride boundary (117.5) advances to the next
    // card; at or below it, stay.
    assert_eq!(state.resolve_snap_target(118.0).unwrap().index, 1);
    assert_eq!(state.resolve_snap_target(117.5).unwrap().index, 0);
    assert_eq!(state.resolve_snap_target(100.0).unwrap().index, 0);
    // Never snaps backward past the starting card once the proposed end
    // clears the current card's right edge.
    assert_eq!(state.resolve_snap_target(235.0 + 118.0).unwrap().index, 2);
}

#[test]
fn settled_index_default_is_round() {
    let mut state = PagerState::new(5, reference_geometry());
    assert_eq!(state.settle_mode, SettleMode::Nearest);

    assert_eq!(state.resolve_settled_index(0.0), Some(0));
    assert_eq!(state.resolve_settled_index(117.0), Some(0));
    assert_eq!(state.resolve_settled_index(118.0), Some(1));
    assert_eq!(state.resolve_settled_index(235.0), Some(1));
    assert_eq!(state.resolve_settled_index(10_000.0), Some(4));

    state.settle_mode = SettleMode::LegacyBanded;
    for offset in [0.0_f32, 117.5, 235.0, 500.0] {
        let expected = ((2.0 * offset - 0.5) / 235.0 / 2.0).round().clamp(0.0, 4.0) as usize;
        assert_eq!(state.resolve_settled_index(offset), Some(expected));
    }
}

#[test]
fn tap_on_centered_card_activates() {
    let state = PagerState::new(3, reference_geometry());
    assert_eq!(state.handle_tap(0, 0.0), Some(TapAction::Activate(0)));
    assert_eq!(state.handle_tap(1, 235.0), Some(TapAction::Activate(1)));
}

#[test]
fn tap_on_side_card_navigates() {
    let state = PagerState::new(3, reference_geometry());
    assert_eq!(
        state.handle_tap(2, 0.0),
        Some(TapAction::ScrollTo {
            index: 2,
            target_x: 470.0,
        })
    );
    assert_eq!(state.handle_tap(3, 0.0), None);
}

#[test]
fn move_to_index_jumps_without_animation() {
    let mut state = PagerState::new(4, reference_geometry());
    assert_eq!(state.move_to_index(2), Some(470.0));
    assert_eq!(state.scroll_x, 470.0);
    assert_eq!(state.current_index(), 2);
    assert_eq!(state.slot(2).unwrap().transform.lift, -20.0);
    assert_eq!(state.move_to_index(4), None);
}

#[test]
fn rebuild_invalidates_prior_transforms_and_clamps_offset() {
    let geometry = reference_geometry();
    let mut state = PagerState::new(6, geometry);
    state.on_scroll(5.0 * 235.0);
    assert_eq!(state.slot(5).unwrap().transform.lift, -20.0);

    state.rebuild(2, geometry);
    assert_eq!(state.count(), 2);
    // Offset clamps to the new content bounds and the window recomputes
    // fresh; nothing carries over from the old slot list.
    assert_eq!(state.scroll_x, 235.0);
    assert_eq!(state.slot(1).unwrap().transform.lift, -20.0);
    assert_eq!(state.slot(0).unwrap().transform.lift, 0.0);
}

#[test]
fn viewport_resize_rescales_normalized_units() {
    let mut state = PagerState::new(3, reference_geometry());
    state.set_viewport(780.0, 600.0);

    // standard_ratio doubles: spacing 40 -> 80, lift -20 -> -40.
    assert_eq!(state.geometry.standard_ratio(), 2.0);
    assert_eq!(state.stride(), 780.0 * 0.5 + 80.0);
    assert_eq!(state.slot(0).unwrap().center_x, 390.0);
    assert_eq!(state.slot(0).unwrap().transform.lift, -40.0);
}

#[derive(Default)]
struct Recorder {
    activated: Vec<usize>,
    offsets: Vec<f32>,
    ratios: Vec<f32>,
    settled: Vec<usize>,
}

impl PagerObserver for Recorder {
    fn on_card_activated(&mut self, index: usize) {
        self.activated.push(index);
    }
    fn on_scroll_offset_changed(&mut self, offset: f32) {
        self.offsets.push(offset);
    }
    fn on_scroll_ratio_changed(&mut self, ratio: f32) {
        self.ratios.push(ratio);
    }
    fn on_drag_settled(&mut self, index: usize) {
        self.settled.push(index);
    }
}

#[test]
fn observer_receives_dispatched_signals_in_order() {
    let mut state = PagerState::new(3, reference_geometry());
    let mut recorder = Recorder::default();

    let events = state.on_scroll(117.5);
    dispatch_all(&events, &mut recorder);
    dispatch_all(&[PagerEvent::DragSettled(1)], &mut recorder);

    assert_eq!(recorder.offsets, vec![117.5]);
    assert_eq!(recorder.ratios, vec![0.5]);
    assert_eq!(recorder.settled, vec![1]);
    assert!(recorder.activated.is_empty());
}

/// A partial observer compiles and runs with the remaining signals
/// falling through to the no-op defaults.
#[test]
fn observer_defaults_are_no_ops() {
    struct OnlySettle(Vec<usize>);
    impl PagerObserver for OnlySettle {
        fn on_drag_settled(&mut self, index: usize) {
            self.0.push(index);
        }
    }

    let mut observer = OnlySettle(Vec::new());
    dispatch_all(
        &[
            PagerEvent::ScrollOffsetChanged(10.0),
            PagerEvent::CardActivated(2),
            PagerEvent::DragSettled(2),
        ],
        &mut observer,
    );
    assert_eq!(observer.0, vec![2]);
}
