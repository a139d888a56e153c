/// Slot index of a device as reported by the host.
pub type DeviceIndex = u32;

/// Point-in-time state of one gamepad.
///
/// Snapshots are never updated in place: the host hands out a fresh one on
/// every query and consumers replace what they stored.
#[derive(Debug, Clone, PartialEq)]
pub struct GamepadSnapshot {
    pub index: DeviceIndex,
    /// Human readable device identifier, e.g. `"Xbox Wireless Controller"`.
    pub id: Box<str>,
    pub connected: bool,
    /// Pressed flag per physical button slot.
    pub buttons: Vec<bool>,
    /// Axis values per physical axis slot, normalized to [-1.0, 1.0].
    pub axes: Vec<f32>,
}

impl GamepadSnapshot {
    pub fn new(index: DeviceIndex, id: impl Into<Box<str>>) -> Self {
        Self {
            index,
            id: id.into(),
            connected: true,
            buttons: Vec::new(),
            axes: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_buttons(mut self, buttons: &[bool]) -> Self {
        self.buttons = buttons.to_vec();
        self
    }

    #[must_use]
    pub fn with_axes(mut self, axes: &[f32]) -> Self {
        self.axes = axes.to_vec();
        self
    }

    #[must_use]
    pub fn disconnected(mut self) -> Self {
        self.connected = false;
        self
    }

    /// Pressed flag of a button slot, `None` when the device has no such slot.
    #[inline]
    pub fn button(&self, index: usize) -> Option<bool> {
        self.buttons.get(index).copied()
    }

    /// Value of an axis slot, `None` when the device has no such slot.
    #[inline]
    pub fn axis(&self, index: usize) -> Option<f32> {
        self.axes.get(index).copied()
    }
}
