//! Runtime capabilities the rotator adapts to

use serde::{Deserialize, Serialize};

/// What the host environment can render
///
/// Without transition support the rotator still rotates and responds to
/// drags, but creates no progress indicator and applies no transition styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Capabilities {
    #[serde(default = "default_true")]
    pub transitions: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Capabilities {
    fn default() -> Self {
        Self { transitions: true }
    }
}

impl Capabilities {
    pub fn new(transitions: bool) -> Self {
        Self { transitions }
    }

    /// Compute capabilities once from an injected check
    pub fn detect_with(supports_transitions: impl FnOnce() -> bool) -> Self {
        let transitions = supports_transitions();
        tracing::debug!(transitions, "capabilities detected");
        Self { transitions }
    }

    pub fn without_transitions() -> Self {
        Self { transitions: false }
    }
}
