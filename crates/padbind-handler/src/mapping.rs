use std::fmt;
use std::time::Duration;

use ahash::AHashSet;
use padbind_gamepad::DeviceIndex;

use crate::options::GamepadOptions;
use crate::{Error, Result};

/// Zero-argument application callback.
pub type Callback = Box<dyn Fn()>;

/// Callback receiving the slot index of a device.
pub type DeviceCallback = Box<dyn Fn(DeviceIndex)>;

/// Configuration of one physical button.
///
/// Bindings are immutable once the handler owns them. Press state lives in
/// [`ButtonStateMachine`](crate::ButtonStateMachine), one per bound device.
pub struct ButtonBinding {
    pub(crate) index: usize,
    pub(crate) key: Option<Box<str>>,
    pub(crate) throttle: Option<Duration>,
    pub(crate) on_click: Option<Callback>,
    pub(crate) on_press: Option<Callback>,
    pub(crate) on_hold: Option<Callback>,
    pub(crate) on_release: Option<Callback>,
}

impl ButtonBinding {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            key: None,
            throttle: None,
            on_click: None,
            on_press: None,
            on_hold: None,
            on_release: None,
        }
    }

    /// Emit key-down on press and key-up on release for `key`.
    #[must_use]
    pub fn key(mut self, key: impl Into<Box<str>>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Minimum spacing between hold callbacks. Only consulted when
    /// [`GamepadOptions::throttle_hold`] is set; otherwise hold fires every frame.
    #[must_use]
    pub fn throttle(mut self, throttle: Duration) -> Self {
        self.throttle = Some(throttle);
        self
    }

    #[must_use]
    pub fn on_click(mut self, f: impl Fn() + 'static) -> Self {
        self.on_click = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn on_press(mut self, f: impl Fn() + 'static) -> Self {
        self.on_press = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn on_hold(mut self, f: impl Fn() + 'static) -> Self {
        self.on_hold = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn on_release(mut self, f: impl Fn() + 'static) -> Self {
        self.on_release = Some(Box::new(f));
        self
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn key_name(&self) -> Option<&str> {
        self.key.as_deref()
    }

    #[inline]
    pub fn emits_key_event(&self) -> bool {
        self.key.is_some()
    }

    /// Spacing between repeated actions. Inherited from the handler options
    /// when the binding does not set one.
    pub fn throttle_or_default(&self) -> Duration {
        self.throttle
            .unwrap_or(Duration::from_millis(crate::options::DEFAULT_ACTION_THROTTLE_MS))
    }

    fn apply_defaults(&mut self, options: &GamepadOptions) {
        self.throttle.get_or_insert(options.default_action_throttle());
    }
}

impl fmt::Debug for ButtonBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ButtonBinding")
            .field("index", &self.index)
            .field("key", &self.key)
            .field("throttle", &self.throttle)
            .field("on_click", &self.on_click.is_some())
            .field("on_press", &self.on_press.is_some())
            .field("on_hold", &self.on_hold.is_some())
            .field("on_release", &self.on_release.is_some())
            .finish()
    }
}

/// Configuration of one physical axis.
///
/// The axis has two zones: positive (`value >= positive_threshold`) and
/// negative (`value <= negative_threshold`). Zone state lives in
/// [`AxisStateMachine`](crate::AxisStateMachine).
pub struct AxisBinding {
    pub(crate) index: usize,
    pub(crate) positive_threshold: Option<f32>,
    pub(crate) negative_threshold: Option<f32>,
    pub(crate) throttle: Option<Duration>,
    pub(crate) on_positive: Option<Callback>,
    pub(crate) on_negative: Option<Callback>,
    pub(crate) on_neutral: Option<Callback>,
}

impl AxisBinding {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            positive_threshold: None,
            negative_threshold: None,
            throttle: None,
            on_positive: None,
            on_negative: None,
            on_neutral: None,
        }
    }

    #[must_use]
    pub fn positive_threshold(mut self, threshold: f32) -> Self {
        self.positive_threshold = Some(threshold);
        self
    }

    #[must_use]
    pub fn negative_threshold(mut self, threshold: f32) -> Self {
        self.negative_threshold = Some(threshold);
        self
    }

    /// Stored so axis entries accept the same keys as buttons. Zone
    /// transitions are edge-triggered and never consult it.
    #[must_use]
    pub fn throttle(mut self, throttle: Duration) -> Self {
        self.throttle = Some(throttle);
        self
    }

    #[must_use]
    pub fn on_positive(mut self, f: impl Fn() + 'static) -> Self {
        self.on_positive = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn on_negative(mut self, f: impl Fn() + 'static) -> Self {
        self.on_negative = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn on_neutral(mut self, f: impl Fn() + 'static) -> Self {
        self.on_neutral = Some(Box::new(f));
        self
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Lower bound of the positive zone.
    #[inline]
    pub fn positive(&self) -> f32 {
        self.positive_threshold
            .unwrap_or(crate::options::DEFAULT_POSITIVE_THRESHOLD)
    }

    /// Upper bound of the negative zone.
    #[inline]
    pub fn negative(&self) -> f32 {
        self.negative_threshold
            .unwrap_or(crate::options::DEFAULT_NEGATIVE_THRESHOLD)
    }

    /// Informational only, see [`AxisBinding::throttle`].
    pub fn throttle_or_default(&self) -> Duration {
        self.throttle
            .unwrap_or(Duration::from_millis(crate::options::DEFAULT_ACTION_THROTTLE_MS))
    }

    // Each threshold falls back to the default of its own sign.
    fn apply_defaults(&mut self, options: &GamepadOptions) {
        self.throttle.get_or_insert(options.default_action_throttle());
        self.positive_threshold
            .get_or_insert(options.default_positive_threshold);
        self.negative_threshold
            .get_or_insert(options.default_negative_threshold);
    }
}

impl fmt::Debug for AxisBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AxisBinding")
            .field("index", &self.index)
            .field("positive_threshold", &self.positive_threshold)
            .field("negative_threshold", &self.negative_threshold)
            .field("throttle", &self.throttle)
            .field("on_positive", &self.on_positive.is_some())
            .field("on_negative", &self.on_negative.is_some())
            .field("on_neutral", &self.on_neutral.is_some())
            .finish()
    }
}

/// Declares how one gamepad model maps onto application actions.
pub struct GamepadMapping {
    pub(crate) identifier: Box<str>,
    pub(crate) buttons: Vec<ButtonBinding>,
    pub(crate) axes: Vec<AxisBinding>,
    pub(crate) debug: bool,
    pub(crate) on_connect: Option<DeviceCallback>,
    pub(crate) on_disconnect: Option<DeviceCallback>,
}

impl GamepadMapping {
    /// Create a mapping for devices whose id contains `identifier`.
    pub fn new(identifier: impl Into<Box<str>>) -> Self {
        Self {
            identifier: identifier.into(),
            buttons: Vec::new(),
            axes: Vec::new(),
            debug: false,
            on_connect: None,
            on_disconnect: None,
        }
    }

    #[must_use]
    pub fn button(mut self, binding: ButtonBinding) -> Self {
        self.buttons.push(binding);
        self
    }

    #[must_use]
    pub fn axis(mut self, binding: AxisBinding) -> Self {
        self.axes.push(binding);
        self
    }

    #[must_use]
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    #[must_use]
    pub fn on_connect(mut self, f: impl Fn(DeviceIndex) + 'static) -> Self {
        self.on_connect = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn on_disconnect(mut self, f: impl Fn(DeviceIndex) + 'static) -> Self {
        self.on_disconnect = Some(Box::new(f));
        self
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn buttons(&self) -> &[ButtonBinding] {
        &self.buttons
    }

    pub fn axes(&self) -> &[AxisBinding] {
        &self.axes
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// Fill unset binding fields from `options` and check the result.
    pub(crate) fn prepare(&mut self, options: &GamepadOptions) -> Result<()> {
        let mut seen = AHashSet::new();
        for binding in &mut self.buttons {
            if !seen.insert(binding.index) {
                return Err(Error::DuplicateButton {
                    identifier: self.identifier.clone(),
                    index: binding.index,
                });
            }
            binding.apply_defaults(options);
        }

        seen.clear();
        for binding in &mut self.axes {
            if !seen.insert(binding.index) {
                return Err(Error::DuplicateAxis {
                    identifier: self.identifier.clone(),
                    index: binding.index,
                });
            }
            binding.apply_defaults(options);
            // Zones must be disjoint
            if binding.negative() >= binding.positive() {
                return Err(Error::InvalidThresholds {
                    identifier: self.identifier.clone(),
                    index: binding.index,
                    negative: binding.negative(),
                    positive: binding.positive(),
                });
            }
        }
        Ok(())
    }
}

impl fmt::Debug for GamepadMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GamepadMapping")
            .field("identifier", &self.identifier)
            .field("buttons", &self.buttons)
            .field("axes", &self.axes)
            .field("debug", &self.debug)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepare_fills_unset_fields() {
        let options = GamepadOptions {
            default_action_throttle_ms: 120,
            default_negative_threshold: -0.4,
            default_positive_threshold: 0.6,
            ..GamepadOptions::default()
        };
        let mut mapping = GamepadMapping::new("pad")
            .button(ButtonBinding::new(0))
            .button(ButtonBinding::new(1).throttle(Duration::from_millis(10)))
            .axis(AxisBinding::new(0))
            .axis(AxisBinding::new(1).positive_threshold(0.9));
        mapping.prepare(&options).unwrap();

        assert_eq!(mapping.buttons[0].throttle_or_default(), Duration::from_millis(120));
        assert_eq!(mapping.buttons[1].throttle_or_default(), Duration::from_millis(10));
        assert_eq!(mapping.axes[0].positive(), 0.6);
        assert_eq!(mapping.axes[0].negative(), -0.4);
        assert_eq!(mapping.axes[1].positive(), 0.9);
        assert_eq!(mapping.axes[1].negative(), -0.4);
    }

    #[test]
    fn thresholds_default_to_their_own_sign() {
        let mut mapping = GamepadMapping::new("pad").axis(AxisBinding::new(0));
        mapping.prepare(&GamepadOptions::default()).unwrap();
        assert!(mapping.axes[0].positive() > 0.0);
        assert!(mapping.axes[0].negative() < 0.0);
    }

    #[test]
    fn duplicate_button_index_is_rejected() {
        let mut mapping = GamepadMapping::new("pad")
            .button(ButtonBinding::new(3))
            .button(ButtonBinding::new(3));
        match mapping.prepare(&GamepadOptions::default()) {
            Err(Error::DuplicateButton { index, .. }) => assert_eq!(index, 3),
            _ => panic!("expected DuplicateButton"),
        }
    }

    #[test]
    fn duplicate_axis_index_is_rejected() {
        let mut mapping = GamepadMapping::new("pad")
            .axis(AxisBinding::new(1))
            .axis(AxisBinding::new(1));
        assert!(matches!(
            mapping.prepare(&GamepadOptions::default()),
            Err(Error::DuplicateAxis { index: 1, .. })
        ));
    }

    #[test]
    fn overlapping_zones_are_rejected() {
        let mut mapping = GamepadMapping::new("pad").axis(
            AxisBinding::new(0)
                .positive_threshold(-0.3)
                .negative_threshold(0.3),
        );
        assert!(matches!(
            mapping.prepare(&GamepadOptions::default()),
            Err(Error::InvalidThresholds { .. })
        ));
    }

    #[test]
    fn same_index_for_button_and_axis_is_fine() {
        let mut mapping = GamepadMapping::new("pad")
            .button(ButtonBinding::new(0))
            .axis(AxisBinding::new(0));
        assert!(mapping.prepare(&GamepadOptions::default()).is_ok());
    }
}
