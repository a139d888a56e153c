use crossbeam_channel::{Receiver, Sender};

use crate::types::{DeviceIndex, GamepadSnapshot};

/// Out-of-band notifications delivered by the host.
#[derive(Debug, Clone)]
pub enum HostEvent {
    /// A device has been plugged in or became visible.
    Connected(GamepadSnapshot),
    /// A device in the given slot has gone away.
    Disconnected(DeviceIndex),
}

/// Receiving end for host notifications.
pub type EventReceiver = Receiver<HostEvent>;

/// Sending end for host notifications.
pub type EventSender = Sender<HostEvent>;
