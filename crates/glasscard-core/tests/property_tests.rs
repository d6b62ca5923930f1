//! Property-based tests for style resolution and the playback contract
//!
//! Uses proptest to verify invariants that must hold for every
//! configuration and every input sequence.

use std::cell::RefCell;
use std::rc::Rc;

use glasscard_core::{
    dispatch, resolve, AccessibilityBinding, CardIdentity, InputEvent, PlaybackController,
    PlaybackStatus, SizeClass, StructuralVariant, VisualTier,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

fn tier_strategy() -> impl Strategy<Value = VisualTier> {
    prop::sample::select(VisualTier::ALL.to_vec())
}

fn variant_strategy() -> impl Strategy<Value = StructuralVariant> {
    prop::sample::select(StructuralVariant::ALL.to_vec())
}

fn size_strategy() -> impl Strategy<Value = SizeClass> {
    prop::sample::select(SizeClass::ALL.to_vec())
}

/// Inputs a host could deliver to a player card
#[derive(Debug, Clone)]
enum HostInput {
    Event(InputEvent),
    SetProgress(i32),
}

fn host_input_strategy() -> impl Strategy<Value = HostInput> {
    prop_oneof![
        2 => Just(HostInput::Event(InputEvent::PointerClick)),
        2 => Just(HostInput::Event(InputEvent::key("Enter"))),
        2 => Just(HostInput::Event(InputEvent::key(" "))),
        1 => "[a-zA-Z]{1,8}".prop_map(|k| HostInput::Event(InputEvent::Key(k))),
        2 => (-200i32..300).prop_map(HostInput::SetProgress),
    ]
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Resolving twice gives identical specs
    #[test]
    fn resolution_is_deterministic(
        tier in tier_strategy(),
        variant in variant_strategy(),
        size in size_strategy(),
    ) {
        prop_assert_eq!(resolve(tier, variant, size), resolve(tier, variant, size));
    }

    /// A higher tier never lowers background alpha or blur
    #[test]
    fn tiers_are_monotonic(
        a in tier_strategy(),
        b in tier_strategy(),
        variant in variant_strategy(),
        size in size_strategy(),
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let low = resolve(low, variant, size);
        let high = resolve(high, variant, size);
        prop_assert!(low.background_alpha <= high.background_alpha);
        prop_assert!(low.blur_radius_px <= high.blur_radius_px);
    }

    /// Every spec is paintable: alphas in range, light from the top left
    #[test]
    fn specs_are_well_formed(
        tier in tier_strategy(),
        variant in variant_strategy(),
        size in size_strategy(),
        hover in 0.0f32..=1.0,
    ) {
        let spec = resolve(tier, variant, size).with_hover(hover);
        prop_assert!((0.0..=1.0).contains(&spec.background_alpha));
        prop_assert!(spec.border_alpha.is_lit_from_top_left());
        prop_assert!(!spec.shadow_layers.is_empty());
        for layer in &spec.shadow_layers {
            prop_assert!((0.0..=1.0).contains(&layer.color_alpha));
        }
    }

    /// Progress always lands in 0..=100 and never changes status
    #[test]
    fn progress_is_clamped(initial in any::<i32>(), value in any::<i32>()) {
        let mut controller = PlaybackController::new(initial);
        let before = controller.status();
        let stored = controller.set_progress(value);
        prop_assert!(stored <= 100);
        prop_assert_eq!(stored as i64, (value as i64).clamp(0, 100));
        prop_assert_eq!(controller.status(), before);
    }

    /// Each activation toggles exactly once and notifies with the new status;
    /// the ARIA view always matches the controller afterwards.
    #[test]
    fn any_input_sequence_stays_in_sync(
        inputs in prop::collection::vec(host_input_strategy(), 0..40)
    ) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let mut controller =
            PlaybackController::new(60).with_listener(move |s| sink.borrow_mut().push(s));
        let identity = CardIdentity::new("Queue", None).unwrap();
        let binding = AccessibilityBinding::new(&identity);

        let mut expected = PlaybackStatus::Idle;
        let mut expected_log = Vec::new();

        for input in &inputs {
            match input {
                HostInput::Event(event) => {
                    let handled = dispatch(event, &mut controller);
                    prop_assert_eq!(handled, event.activation().is_some());
                    if handled {
                        expected = expected.toggled();
                        expected_log.push(expected);
                    }
                }
                HostInput::SetProgress(value) => {
                    controller.set_progress(*value);
                }
            }

            let aria = binding.for_playback(controller.state());
            prop_assert_eq!(controller.status(), expected);
            prop_assert_eq!(aria.pressed, Some(expected.is_playing()));
            let live = if expected.is_playing() { "Playing" } else { "Paused" };
            prop_assert_eq!(aria.live_text.as_deref(), Some(live));
            prop_assert_eq!(
                aria.range.map(|r| r.triple()),
                Some((controller.progress_percent(), 0, 100))
            );
        }

        prop_assert_eq!(&*log.borrow(), &expected_log);
    }
}
