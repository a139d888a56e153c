use crate::events::EventReceiver;
use crate::types::GamepadSnapshot;

/// Host capability that reports the current state of all device slots.
pub trait GamepadSource {
    /// Whether the host can report gamepads at all.
    fn is_supported(&self) -> bool {
        true
    }

    /// Current array of device slots. Absent slots are `None`.
    fn snapshots(&mut self) -> Vec<Option<GamepadSnapshot>>;

    /// Channel with connect/disconnect notifications, if the host has one.
    fn events(&self) -> Option<EventReceiver> {
        None
    }
}

/// Source used when no backend is compiled in.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedSource;

impl GamepadSource for UnsupportedSource {
    fn is_supported(&self) -> bool {
        false
    }

    fn snapshots(&mut self) -> Vec<Option<GamepadSnapshot>> {
        Vec::new()
    }
}
