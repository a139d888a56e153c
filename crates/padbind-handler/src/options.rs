use std::time::Duration;

use serde::Deserialize;

pub(crate) const DEFAULT_ACTION_THROTTLE_MS: u64 = 500;
pub(crate) const DEFAULT_NEGATIVE_THRESHOLD: f32 = -0.3;
pub(crate) const DEFAULT_POSITIVE_THRESHOLD: f32 = 0.3;
pub(crate) const DEFAULT_DISCOVERY_INTERVAL_MS: u64 = 500;

/// Handler-wide defaults.
///
/// Every field is optional in serialized form; zero is a valid explicit value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GamepadOptions {
    /// Throttle given to bindings that do not set their own.
    pub default_action_throttle_ms: u64,
    /// Negative threshold given to axes that do not set their own.
    pub default_negative_threshold: f32,
    /// Positive threshold given to axes that do not set their own.
    pub default_positive_threshold: f32,
    /// Log every newly observed device id.
    pub list_available_gamepads: bool,
    /// Minimum spacing between two discovery passes.
    pub discovery_interval_ms: u64,
    /// Rate limit `on_hold` to one call per binding throttle.
    pub throttle_hold: bool,
}

impl Default for GamepadOptions {
    fn default() -> Self {
        Self {
            default_action_throttle_ms: DEFAULT_ACTION_THROTTLE_MS,
            default_negative_threshold: DEFAULT_NEGATIVE_THRESHOLD,
            default_positive_threshold: DEFAULT_POSITIVE_THRESHOLD,
            list_available_gamepads: false,
            discovery_interval_ms: DEFAULT_DISCOVERY_INTERVAL_MS,
            throttle_hold: false,
        }
    }
}

impl GamepadOptions {
    #[inline]
    pub fn default_action_throttle(&self) -> Duration {
        Duration::from_millis(self.default_action_throttle_ms)
    }

    #[inline]
    pub fn discovery_interval(&self) -> Duration {
        Duration::from_millis(self.discovery_interval_ms)
    }
}
