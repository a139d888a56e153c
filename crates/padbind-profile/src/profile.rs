use std::sync::Arc;
use std::time::Duration;

use padbind_control::KeyCombo;
use padbind_handler::GamepadOptions;

/// A sequence of key combos tapped in order.
pub type Macros = Vec<KeyCombo>;

/// What a trigger does when it fires.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionSpec {
    /// Tap a key combo.
    Keystroke(KeyCombo),
    Macros(Arc<Macros>),
    /// Run a command with the profile shell.
    Shell(Box<str>),
    /// Write a message to the log.
    Log(Box<str>),
}

/// A loaded, validated profile.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub options: GamepadOptions,
    pub shell: Option<Box<str>>,
    /// Mappings in declaration order; the first match wins.
    pub gamepads: Vec<GamepadProfile>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GamepadProfile {
    pub identifier: Box<str>,
    pub debug: bool,
    pub on_connect: Option<ActionSpec>,
    pub on_disconnect: Option<ActionSpec>,
    pub buttons: Vec<ButtonProfile>,
    pub axes: Vec<AxisProfile>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ButtonProfile {
    pub index: usize,
    /// Key combo held down while the button is.
    pub key: Option<Box<str>>,
    /// Hold spacing, honored only with `throttle_hold` in the options.
    pub throttle: Option<Duration>,
    pub on_click: Option<ActionSpec>,
    pub on_press: Option<ActionSpec>,
    pub on_hold: Option<ActionSpec>,
    pub on_release: Option<ActionSpec>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisProfile {
    pub index: usize,
    pub positive_threshold: Option<f32>,
    pub negative_threshold: Option<f32>,
    /// Accepted for parity with buttons; zone callbacks are not throttled.
    pub throttle: Option<Duration>,
    pub on_positive: Option<ActionSpec>,
    pub on_negative: Option<ActionSpec>,
    pub on_neutral: Option<ActionSpec>,
}
