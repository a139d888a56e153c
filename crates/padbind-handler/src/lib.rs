//! Maps physical gamepad input onto application actions.
//!
//! A [`GamepadHandler`] is driven one frame at a time. Every frame it samples
//! the host through a [`GamepadSource`], binds newly seen devices to the first
//! [`GamepadMapping`] whose identifier is part of the device id, and runs every
//! configured button and axis through its state machine.

mod axis;
mod button;
mod handler;
mod mapping;
mod options;
mod resolve;

use thiserror::Error;

pub use padbind_gamepad::{
    DeviceIndex, EventReceiver, GamepadSnapshot, GamepadSource, HostEvent, KeyEvent,
    KeyEventKind, KeyTarget,
};

pub use crate::axis::{AxisEffect, AxisEffects, AxisStateMachine};
pub use crate::button::{ButtonEffect, ButtonEffects, ButtonStateMachine};
pub use crate::handler::{Flow, GamepadHandler, HandlerState};
pub use crate::mapping::{AxisBinding, ButtonBinding, Callback, DeviceCallback, GamepadMapping};
pub use crate::options::GamepadOptions;
pub use crate::resolve::{resolve, Resolved};

/// Error type for handler configuration and lifecycle.
#[derive(Debug, Error)]
pub enum Error {
    /// The host environment cannot report gamepads.
    #[error("host environment lacks gamepad support")]
    Unsupported,
    /// A mapping binds the same physical button twice.
    #[error("mapping \"{identifier}\" binds button {index} more than once")]
    DuplicateButton { identifier: Box<str>, index: usize },
    /// A mapping binds the same physical axis twice.
    #[error("mapping \"{identifier}\" binds axis {index} more than once")]
    DuplicateAxis { identifier: Box<str>, index: usize },
    /// Axis zones would overlap.
    #[error(
        "mapping \"{identifier}\" axis {index}: negative threshold {negative} must be below positive threshold {positive}"
    )]
    InvalidThresholds {
        identifier: Box<str>,
        index: usize,
        negative: f32,
        positive: f32,
    },
}

/// Convenient result alias for handler operations.
pub type Result<T> = std::result::Result<T, Error>;
