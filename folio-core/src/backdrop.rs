//! Page backdrop parallax and header scroll state
//!
//! The backdrop drifts with scroll and leans toward the cursor. Frames are
//! throttled to one per [`THROTTLE`]; reduced motion freezes it at rest.

use std::time::{Duration, Instant};

use crate::motion::{MotionPreference, MotionSubscription};

/// Minimum spacing between published frames.
pub const THROTTLE: Duration = Duration::from_millis(50);

/// Scroll distance past which the header switches to its compact style.
pub const SCROLLED_THRESHOLD: f64 = 50.0;

const SCROLL_FACTOR: f64 = 0.02;
const CURSOR_SPREAD: f64 = 20.0;

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD
}

/// One published backdrop frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackdropFrame {
    /// Pixels.
    pub scroll_offset: f64,
    /// Percent of the viewport.
    pub cursor_x: f64,
    pub cursor_y: f64,
}

impl Default for BackdropFrame {
    fn default() -> Self {
        Self {
            scroll_offset: 0.0,
            cursor_x: 50.0,
            cursor_y: 50.0,
        }
    }
}

impl BackdropFrame {
    pub fn style_vars(&self) -> Vec<(&'static str, String)> {
        vec![
            ("--scroll-offset", format!("{}px", self.scroll_offset)),
            ("--cursor-x", format!("{}%", self.cursor_x)),
            ("--cursor-y", format!("{}%", self.cursor_y)),
        ]
    }
}

#[derive(Debug)]
pub struct Parallax {
    frame: BackdropFrame,
    scroll_y: f64,
    /// Cursor position normalized to 0..=1 of the viewport.
    cursor: (f64, f64),
    last_publish: Option<Instant>,
    motion: MotionSubscription,
}

impl Parallax {
    pub fn new(motion: &MotionPreference) -> Self {
        Self {
            frame: BackdropFrame::default(),
            scroll_y: 0.0,
            cursor: (0.5, 0.5),
            last_publish: None,
            motion: motion.subscribe(),
        }
    }

    pub fn frame(&self) -> BackdropFrame {
        self.frame
    }

    pub fn on_scroll(&mut self, scroll_y: f64, now: Instant) -> bool {
        if self.motion.is_reduced() || !scroll_y.is_finite() {
            return false;
        }
        self.scroll_y = scroll_y;
        self.publish(now)
    }

    /// `x`/`y` are cursor coordinates over a viewport of `width` x `height`.
    pub fn on_cursor(&mut self, x: f64, y: f64, width: f64, height: f64, now: Instant) -> bool {
        if self.motion.is_reduced() || !(width > 0.0 && height > 0.0) {
            return false;
        }
        let nx = x / width;
        let ny = y / height;
        if !(nx.is_finite() && ny.is_finite()) {
            return false;
        }
        self.cursor = (nx, ny);
        self.publish(now)
    }

    /// Reset to the resting frame if reduced motion was switched on.
    pub fn sync_motion(&mut self) {
        if self.motion.take_change() && self.motion.is_reduced() {
            self.frame = BackdropFrame::default();
            self.scroll_y = 0.0;
            self.cursor = (0.5, 0.5);
        }
    }

    fn publish(&mut self, now: Instant) -> bool {
        if let Some(last) = self.last_publish {
            if now.saturating_duration_since(last) <= THROTTLE {
                return false;
            }
        }
        self.frame = BackdropFrame {
            scroll_offset: self.scroll_y * SCROLL_FACTOR,
            cursor_x: 50.0 + (self.cursor.0 - 0.5) * CURSOR_SPREAD,
            cursor_y: 50.0 + (self.cursor.1 - 0.5) * CURSOR_SPREAD,
        };
        self.last_publish = Some(now);
        true
    }
}
