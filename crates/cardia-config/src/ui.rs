//! Dashboard tuning knobs.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default event-poll cadence for the dashboard, in milliseconds.
const fn default_tick_ms() -> u64 {
    200
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiConfig {
    /// How long the dashboard waits for input before redrawing, in
    /// milliseconds. Lower values poll the response channel more often.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { tick_ms: default_tick_ms() }
    }
}

impl UiConfig {
    /// Poll cadence as a [`Duration`].
    #[must_use]
    pub const fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = UiConfig::default();
        assert_eq!(config.tick_ms, 200);
        assert_eq!(config.tick(), Duration::from_millis(200));
    }
}
