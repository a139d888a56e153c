mod events;
mod source;
mod target;
mod types;
#[cfg(feature = "sdl2-backend")]
mod sdl;

use thiserror::Error;

pub use crate::events::{EventReceiver, EventSender, HostEvent};
pub use crate::source::{GamepadSource, UnsupportedSource};
pub use crate::target::{KeyEvent, KeyEventKind, KeyTarget};
pub use crate::types::{DeviceIndex, GamepadSnapshot};
#[cfg(feature = "sdl2-backend")]
pub use crate::sdl::Sdl2Source;

/// Error type for host backend operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to initialize the backend (SDL2 or subsystems).
    #[error("Backend init failed: {0}")]
    BackendInit(String),
}

/// Convenient result alias for backend operations.
pub type Result<T> = std::result::Result<T, Error>;
