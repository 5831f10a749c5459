//! Cursor-following glow effect
//!
//! A [`GlowController`] is owned by one interactive element (button, card,
//! panel, link, nav item). The rendering layer forwards pointer events to its
//! three handlers and reads the published [`PointerState`] back as style
//! inputs (`--glow-x`, `--glow-y`, `--glow-opacity`). The controller never
//! draws anything itself.
//!
//! Invariants:
//! - after `pointer_leave` the state is back at the defaults (centered, hidden)
//! - with reduced motion active, enter/move change nothing
//! - degenerate geometry or missing bounds skip the update, never publish NaN

use tracing::trace;

use crate::motion::{MotionPreference, MotionSubscription};

/// Resting position on each axis, in percent.
pub const GLOW_CENTER: f64 = 50.0;

/// Which axes an element tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlowAxes {
    /// Horizontal only (navigation links)
    Horizontal,
    /// Horizontal and vertical (buttons, cards, panels)
    Both,
}

/// Kinds of interactive surface that carry a glow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Button,
    Card,
    Panel,
    FilterPill,
    Link,
    NavItem,
}

impl ElementKind {
    pub fn axes(self) -> GlowAxes {
        match self {
            ElementKind::NavItem | ElementKind::Link => GlowAxes::Horizontal,
            ElementKind::Button
            | ElementKind::Card
            | ElementKind::Panel
            | ElementKind::FilterPill => GlowAxes::Both,
        }
    }
}

/// Bounding rectangle of an element in the same space as pointer coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ElementRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Half-open containment: left/top edges inside, right/bottom edges outside.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x < self.left + self.width && y >= self.top && y < self.top + self.height
    }
}

fn usable_extent(extent: f64) -> bool {
    extent.is_finite() && extent > 0.0
}

/// A pointer event in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub client_x: f64,
    pub client_y: f64,
}

impl PointerEvent {
    pub fn new(client_x: f64, client_y: f64) -> Self {
        Self { client_x, client_y }
    }
}

/// Published glow state of one element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    pub glow_x: f64,
    /// `None` for single-axis elements.
    pub glow_y: Option<f64>,
    /// 0.0 or 1.0
    pub glow_opacity: f64,
}

impl PointerState {
    pub fn resting(axes: GlowAxes) -> Self {
        Self {
            glow_x: GLOW_CENTER,
            glow_y: match axes {
                GlowAxes::Horizontal => None,
                GlowAxes::Both => Some(GLOW_CENTER),
            },
            glow_opacity: 0.0,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.glow_opacity > 0.0
    }

    /// Style properties for the rendering layer, in a fixed order.
    pub fn style_vars(&self) -> Vec<(&'static str, String)> {
        let mut vars = vec![("--glow-x", format!("{}%", self.glow_x))];
        if let Some(y) = self.glow_y {
            vars.push(("--glow-y", format!("{}%", y)));
        }
        vars.push(("--glow-opacity", format!("{}", self.glow_opacity)));
        vars
    }

    /// Inline CSS declaration list, e.g. `--glow-x: 25%; --glow-opacity: 1`.
    pub fn to_css(&self) -> String {
        self.style_vars()
            .into_iter()
            .map(|(key, value)| format!("{key}: {value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Pointer-tracked glow for a single element instance.
#[derive(Debug)]
pub struct GlowController {
    axes: GlowAxes,
    state: PointerState,
    bounds: Option<ElementRect>,
    hovered: bool,
    motion: MotionSubscription,
}

impl GlowController {
    /// Mount a controller. It holds its own reduced-motion subscription until dropped.
    pub fn new(axes: GlowAxes, motion: &MotionPreference) -> Self {
        Self {
            axes,
            state: PointerState::resting(axes),
            bounds: None,
            hovered: false,
            motion: motion.subscribe(),
        }
    }

    pub fn for_kind(kind: ElementKind, motion: &MotionPreference) -> Self {
        Self::new(kind.axes(), motion)
    }

    pub fn axes(&self) -> GlowAxes {
        self.axes
    }

    pub fn state(&self) -> PointerState {
        self.state
    }

    pub fn bounds(&self) -> Option<ElementRect> {
        self.bounds
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn reduced_motion_active(&self) -> bool {
        self.motion.is_reduced()
    }

    /// Record the element's current layout rectangle.
    pub fn set_bounds(&mut self, rect: ElementRect) {
        self.bounds = Some(rect);
    }

    /// Forget the layout rectangle (element not laid out / torn down).
    pub fn clear_bounds(&mut self) {
        self.bounds = None;
    }

    pub fn pointer_enter(&mut self, _event: PointerEvent) {
        self.hovered = true;
        if self.motion.is_reduced() {
            return;
        }
        self.state.glow_opacity = 1.0;
    }

    pub fn pointer_move(&mut self, event: PointerEvent) {
        if self.motion.is_reduced() {
            return;
        }
        let Some(rect) = self.bounds else {
            trace!("pointer move before bounds are known; skipping");
            return;
        };
        if !usable_extent(rect.width) {
            return;
        }

        let x = (event.client_x - rect.left) / rect.width * 100.0;
        let y = match self.axes {
            GlowAxes::Horizontal => None,
            GlowAxes::Both => {
                if !usable_extent(rect.height) {
                    return;
                }
                Some((event.client_y - rect.top) / rect.height * 100.0)
            }
        };
        if !x.is_finite() || y.is_some_and(|y| !y.is_finite()) {
            return;
        }

        self.state.glow_x = x;
        if y.is_some() {
            self.state.glow_y = y;
        }
    }

    /// Runs even with reduced motion active so a highlight never sticks.
    pub fn pointer_leave(&mut self, _event: PointerEvent) {
        self.hovered = false;
        self.state = PointerState::resting(self.axes);
    }

    /// Derive enter/move/leave from a raw pointer position and the known
    /// bounds, for surfaces that only report pointer motion (terminals).
    pub fn track(&mut self, event: PointerEvent) {
        let inside = self
            .bounds
            .is_some_and(|rect| rect.contains(event.client_x, event.client_y));

        match (self.hovered, inside) {
            (false, true) => {
                self.pointer_enter(event);
                self.pointer_move(event);
            }
            (true, true) => self.pointer_move(event),
            (true, false) => self.pointer_leave(event),
            (false, false) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(motion: &MotionPreference) -> GlowController {
        let mut glow = GlowController::for_kind(ElementKind::Card, motion);
        glow.set_bounds(ElementRect::new(100.0, 200.0, 400.0, 100.0));
        glow
    }

    #[test]
    fn test_move_computes_percentages() {
        let motion = MotionPreference::new(false);
        let mut glow = card(&motion);

        glow.pointer_enter(PointerEvent::new(100.0, 200.0));
        glow.pointer_move(PointerEvent::new(200.0, 275.0));

        let state = glow.state();
        assert_eq!(state.glow_x, 25.0);
        assert_eq!(state.glow_y, Some(75.0));
        assert_eq!(state.glow_opacity, 1.0);
    }

    #[test]
    fn test_move_is_not_clamped() {
        let motion = MotionPreference::new(false);
        let mut glow = card(&motion);

        glow.pointer_move(PointerEvent::new(99.0, 301.0));
        assert!(glow.state().glow_x < 0.0);
        assert!(glow.state().glow_y.unwrap() > 100.0);
    }

    #[test]
    fn test_leave_resets_to_center() {
        let motion = MotionPreference::new(false);
        let mut glow = card(&motion);
        glow.pointer_enter(PointerEvent::new(110.0, 210.0));
        glow.pointer_move(PointerEvent::new(110.0, 210.0));

        glow.pointer_leave(PointerEvent::new(0.0, 0.0));
        assert_eq!(glow.state(), PointerState::resting(GlowAxes::Both));
        assert!(!glow.is_hovered());
    }

    #[test]
    fn test_nav_item_tracks_only_x() {
        let motion = MotionPreference::new(false);
        let mut glow = GlowController::for_kind(ElementKind::NavItem, &motion);
        glow.set_bounds(ElementRect::new(0.0, 0.0, 8.0, 1.0));

        glow.pointer_enter(PointerEvent::new(2.0, 0.0));
        glow.pointer_move(PointerEvent::new(2.0, 0.0));
        assert_eq!(glow.state().glow_x, 25.0);
        assert_eq!(glow.state().glow_y, None);

        glow.pointer_leave(PointerEvent::new(20.0, 0.0));
        assert_eq!(glow.state().glow_x, GLOW_CENTER);
        assert_eq!(glow.state().glow_y, None);
    }

    #[test]
    fn test_reduced_motion_suppresses_enter_and_move() {
        let motion = MotionPreference::new(true);
        let mut glow = card(&motion);

        glow.pointer_enter(PointerEvent::new(200.0, 250.0));
        glow.pointer_move(PointerEvent::new(200.0, 250.0));
        assert_eq!(glow.state(), PointerState::resting(GlowAxes::Both));
    }

    #[test]
    fn test_reduced_motion_switch_freezes_state() {
        let motion = MotionPreference::new(false);
        let mut glow = card(&motion);
        glow.pointer_enter(PointerEvent::new(200.0, 250.0));
        glow.pointer_move(PointerEvent::new(200.0, 250.0));
        let before = glow.state();

        motion.set_reduced(true);
        glow.pointer_move(PointerEvent::new(450.0, 290.0));
        assert_eq!(glow.state(), before);

        // Leave still clears it
        glow.pointer_leave(PointerEvent::new(0.0, 0.0));
        assert_eq!(glow.state().glow_opacity, 0.0);
    }

    #[test]
    fn test_missing_bounds_skip_move() {
        let motion = MotionPreference::new(false);
        let mut glow = GlowController::new(GlowAxes::Both, &motion);
        glow.pointer_enter(PointerEvent::new(5.0, 5.0));
        glow.pointer_move(PointerEvent::new(5.0, 5.0));

        assert_eq!(glow.state().glow_x, GLOW_CENTER);
        assert_eq!(glow.state().glow_opacity, 1.0);
    }

    #[test]
    fn test_zero_size_skips_move() {
        let motion = MotionPreference::new(false);
        let mut glow = GlowController::new(GlowAxes::Both, &motion);
        glow.set_bounds(ElementRect::new(10.0, 10.0, 0.0, 20.0));
        glow.pointer_move(PointerEvent::new(10.0, 15.0));
        assert_eq!(glow.state(), PointerState::resting(GlowAxes::Both));

        glow.set_bounds(ElementRect::new(10.0, 10.0, 20.0, 0.0));
        glow.pointer_move(PointerEvent::new(15.0, 10.0));
        assert_eq!(glow.state(), PointerState::resting(GlowAxes::Both));
    }

    #[test]
    fn test_track_derives_enter_and_leave() {
        let motion = MotionPreference::new(false);
        let mut glow = card(&motion);

        glow.track(PointerEvent::new(50.0, 50.0));
        assert!(!glow.is_hovered());

        glow.track(PointerEvent::new(300.0, 250.0));
        assert!(glow.is_hovered());
        assert_eq!(glow.state().glow_x, 50.0);
        assert_eq!(glow.state().glow_opacity, 1.0);

        glow.track(PointerEvent::new(500.0, 250.0));
        assert!(!glow.is_hovered());
        assert_eq!(glow.state().glow_opacity, 0.0);
    }

    #[test]
    fn test_style_vars() {
        let state = PointerState {
            glow_x: 37.5,
            glow_y: Some(50.0),
            glow_opacity: 1.0,
        };
        assert_eq!(state.to_css(), "--glow-x: 37.5%; --glow-y: 50%; --glow-opacity: 1");

        let nav = PointerState::resting(GlowAxes::Horizontal);
        assert_eq!(
            nav.style_vars(),
            vec![("--glow-x", "50%".to_string()), ("--glow-opacity", "0".to_string())]
        );
    }

    #[test]
    fn test_controller_drop_unsubscribes() {
        let motion = MotionPreference::new(false);
        let glow = card(&motion);
        let link = GlowController::for_kind(ElementKind::Link, &motion);
        assert_eq!(motion.subscriber_count(), 2);
        drop(glow);
        drop(link);
        assert_eq!(motion.subscriber_count(), 0);
    }
}
