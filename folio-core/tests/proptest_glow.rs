use folio_core::glow::{
    ElementKind, ElementRect, GlowAxes, GlowController, PointerEvent, PointerState,
};
use folio_core::motion::MotionPreference;
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Step {
    Enter(f64, f64),
    Move(f64, f64),
    Leave,
}

fn arb_coord() -> impl Strategy<Value = f64> {
    -2000.0..2000.0f64
}

fn arb_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        (arb_coord(), arb_coord()).prop_map(|(x, y)| Step::Enter(x, y)),
        (arb_coord(), arb_coord()).prop_map(|(x, y)| Step::Move(x, y)),
        Just(Step::Leave),
    ]
}

fn arb_rect() -> impl Strategy<Value = ElementRect> {
    (-500.0..500.0f64, -500.0..500.0f64, 1.0..800.0f64, 1.0..600.0f64)
        .prop_map(|(l, t, w, h)| ElementRect::new(l, t, w, h))
}

fn arb_kind() -> impl Strategy<Value = ElementKind> {
    prop_oneof![
        Just(ElementKind::Button),
        Just(ElementKind::Card),
        Just(ElementKind::Panel),
        Just(ElementKind::FilterPill),
        Just(ElementKind::Link),
        Just(ElementKind::NavItem),
    ]
}

fn apply(glow: &mut GlowController, step: Step) {
    match step {
        Step::Enter(x, y) => glow.pointer_enter(PointerEvent::new(x, y)),
        Step::Move(x, y) => glow.pointer_move(PointerEvent::new(x, y)),
        Step::Leave => glow.pointer_leave(PointerEvent::new(0.0, 0.0)),
    }
}

proptest! {
    /// Property: whatever happened before, leave restores the resting state
    #[test]
    fn prop_leave_always_resets(
        kind in arb_kind(),
        rect in arb_rect(),
        steps in prop::collection::vec(arb_step(), 0..40),
        reduced in any::<bool>(),
    ) {
        let motion = MotionPreference::new(false);
        let mut glow = GlowController::for_kind(kind, &motion);
        glow.set_bounds(rect);
        for step in steps {
            apply(&mut glow, step);
        }
        motion.set_reduced(reduced);

        glow.pointer_leave(PointerEvent::new(0.0, 0.0));
        prop_assert_eq!(glow.state(), PointerState::resting(kind.axes()));
    }

    /// Property: with reduced motion active, enter and move never change state
    #[test]
    fn prop_reduced_motion_freezes_state(
        kind in arb_kind(),
        rect in arb_rect(),
        steps in prop::collection::vec(arb_step(), 0..40),
    ) {
        let motion = MotionPreference::new(true);
        let mut glow = GlowController::for_kind(kind, &motion);
        glow.set_bounds(rect);
        let resting = glow.state();
        for step in steps {
            apply(&mut glow, step);
            prop_assert_eq!(glow.state(), resting);
        }
    }

    /// Property: move publishes exactly the relative-position percentage
    #[test]
    fn prop_move_matches_formula(
        rect in arb_rect(),
        x in arb_coord(),
        y in arb_coord(),
    ) {
        let motion = MotionPreference::new(false);
        let mut glow = GlowController::new(GlowAxes::Both, &motion);
        glow.set_bounds(rect);
        glow.pointer_enter(PointerEvent::new(x, y));
        glow.pointer_move(PointerEvent::new(x, y));

        let state = glow.state();
        prop_assert_eq!(state.glow_x, (x - rect.left) / rect.width * 100.0);
        prop_assert_eq!(state.glow_y, Some((y - rect.top) / rect.height * 100.0));
        prop_assert_eq!(state.glow_opacity, 1.0);
    }

    /// Property: single-axis elements never publish a Y value
    #[test]
    fn prop_horizontal_has_no_y(
        rect in arb_rect(),
        steps in prop::collection::vec(arb_step(), 0..40),
    ) {
        let motion = MotionPreference::new(false);
        let mut glow = GlowController::for_kind(ElementKind::NavItem, &motion);
        glow.set_bounds(rect);
        for step in steps {
            apply(&mut glow, step);
            prop_assert_eq!(glow.state().glow_y, None);
        }
    }

    /// Property: published values stay finite even with degenerate bounds
    #[test]
    fn prop_state_is_always_finite(
        width in prop_oneof![Just(0.0), Just(f64::NAN), Just(-10.0), 1.0..100.0f64],
        steps in prop::collection::vec(arb_step(), 0..40),
    ) {
        let motion = MotionPreference::new(false);
        let mut glow = GlowController::new(GlowAxes::Both, &motion);
        glow.set_bounds(ElementRect::new(0.0, 0.0, width, 50.0));
        for step in steps {
            apply(&mut glow, step);
            let state = glow.state();
            prop_assert!(state.glow_x.is_finite());
            prop_assert!(state.glow_y.is_some_and(f64::is_finite));
        }
    }
}
