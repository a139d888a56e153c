use padbind_handler::GamepadOptions;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ProfileV1 {
    pub version: u8,
    #[serde(default)]
    pub options: GamepadOptions,
    #[serde(default)]
    pub shell: Option<Box<str>>,
    #[serde(default)]
    pub gamepads: Vec<ProfileV1Gamepad>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ProfileV1Gamepad {
    pub identifier: String,
    #[serde(default)]
    pub debug: bool,
    #[serde(default)]
    pub on_connect: Option<ProfileV1Action>,
    #[serde(default)]
    pub on_disconnect: Option<ProfileV1Action>,
    #[serde(default)]
    pub buttons: Vec<ProfileV1Button>,
    #[serde(default)]
    pub axes: Vec<ProfileV1Axis>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ProfileV1Button {
    pub index: usize,
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub throttle_ms: Option<u64>,
    #[serde(default)]
    pub on_click: Option<ProfileV1Action>,
    #[serde(default)]
    pub on_press: Option<ProfileV1Action>,
    #[serde(default)]
    pub on_hold: Option<ProfileV1Action>,
    #[serde(default)]
    pub on_release: Option<ProfileV1Action>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ProfileV1Axis {
    pub index: usize,
    #[serde(default)]
    pub positive_threshold: Option<f32>,
    #[serde(default)]
    pub negative_threshold: Option<f32>,
    #[serde(default)]
    pub throttle_ms: Option<u64>,
    #[serde(default)]
    pub on_positive: Option<ProfileV1Action>,
    #[serde(default)]
    pub on_negative: Option<ProfileV1Action>,
    #[serde(default)]
    pub on_neutral: Option<ProfileV1Action>,
}

/// Exactly one field must be set.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ProfileV1Action {
    #[serde(default)]
    pub keystroke: Option<String>,
    #[serde(default)]
    pub macros: Option<Vec<String>>,
    #[serde(default)]
    pub shell: Option<String>,
    #[serde(default)]
    pub log: Option<String>,
}
