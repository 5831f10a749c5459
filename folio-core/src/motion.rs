//! Process-wide "prefers reduced motion" preference
//!
//! One [`MotionPreference`] is created at startup from the platform value and
//! lives until exit. Every glow-enabled element takes its own
//! [`MotionSubscription`] when it mounts and drops it when it unmounts; the
//! platform notifier is the only writer.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

/// Environment variable overriding the configured preference.
pub const REDUCED_MOTION_ENV: &str = "FOLIO_REDUCED_MOTION";

/// Shared handle to the reduced-motion signal. Cloning shares the same signal.
#[derive(Debug, Clone)]
pub struct MotionPreference {
    tx: Arc<watch::Sender<bool>>,
}

impl MotionPreference {
    /// Create the signal with its current platform value.
    pub fn new(reduce: bool) -> Self {
        let (tx, _rx) = watch::channel(reduce);
        Self { tx: Arc::new(tx) }
    }

    /// Current value of the signal.
    pub fn is_reduced(&self) -> bool {
        *self.tx.borrow()
    }

    /// Platform change notification. Returns true when the value changed.
    pub fn set_reduced(&self, reduce: bool) -> bool {
        let changed = self.tx.send_if_modified(|current| {
            if *current == reduce {
                false
            } else {
                *current = reduce;
                true
            }
        });
        if changed {
            debug!(
                reduce,
                subscribers = self.subscriber_count(),
                "reduced-motion preference changed"
            );
        }
        changed
    }

    /// Flip the signal, returning the new value.
    pub fn toggle(&self) -> bool {
        let next = !self.is_reduced();
        self.set_reduced(next);
        next
    }

    /// Subscribe a consumer. The subscription unsubscribes when dropped.
    pub fn subscribe(&self) -> MotionSubscription {
        MotionSubscription {
            rx: self.tx.subscribe(),
        }
    }

    /// Number of live subscriptions (mounted consumers).
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for MotionPreference {
    fn default() -> Self {
        Self::new(false)
    }
}

/// A consumer's own view of the preference.
#[derive(Debug, Clone)]
pub struct MotionSubscription {
    rx: watch::Receiver<bool>,
}

impl MotionSubscription {
    /// Whether the decorative effect must be suppressed right now.
    pub fn is_reduced(&self) -> bool {
        *self.rx.borrow()
    }

    /// True if the signal changed since this subscription last looked.
    /// Marks the latest value as seen.
    pub fn take_change(&mut self) -> bool {
        match self.rx.has_changed() {
            Ok(true) => {
                self.rx.borrow_and_update();
                true
            }
            _ => false,
        }
    }
}

/// Parse `1`/`true`/`yes`/`on` and `0`/`false`/`no`/`off` (case-insensitive).
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" | "reduce" => Some(true),
        "0" | "false" | "no" | "off" | "no-preference" => Some(false),
        _ => None,
    }
}
