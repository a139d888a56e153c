use std::time::Instant;

use ahash::{AHashMap, AHashSet};
use log::{debug, info, warn};
use padbind_gamepad::{
    DeviceIndex, EventReceiver, GamepadSnapshot, GamepadSource, HostEvent, KeyEvent, KeyTarget,
};

use crate::axis::{AxisEffect, AxisStateMachine};
use crate::button::{ButtonEffect, ButtonStateMachine};
use crate::mapping::{AxisBinding, ButtonBinding, Callback, GamepadMapping};
use crate::options::GamepadOptions;
use crate::resolve::resolve;
use crate::{Error, Result};

/// Lifecycle of a handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandlerState {
    /// Never started, or the host lacks gamepad support.
    Off,
    Running,
    Stopped,
}

/// Whether the driver should schedule another frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flow {
    Continue,
    Stop,
}

/// A live device matched to a mapping, with per-binding runtime state.
struct BoundDevice {
    mapping: usize,
    snapshot: GamepadSnapshot,
    /// Whether `snapshot` came from the latest poll.
    fresh: bool,
    buttons: Vec<ButtonStateMachine>,
    axes: Vec<AxisStateMachine>,
}

impl BoundDevice {
    fn new(mapping_index: usize, mapping: &GamepadMapping, snapshot: GamepadSnapshot) -> Self {
        Self {
            mapping: mapping_index,
            snapshot,
            fresh: true,
            buttons: vec![ButtonStateMachine::new(); mapping.buttons.len()],
            axes: vec![AxisStateMachine::new(); mapping.axes.len()],
        }
    }

    /// Send key-up for every keyed button still held down.
    fn release_keys(&self, mapping: &GamepadMapping, target: &mut Option<Box<dyn KeyTarget>>) {
        let Some(target) = target.as_mut() else {
            return;
        };
        for (binding, machine) in mapping.buttons.iter().zip(&self.buttons) {
            if let (true, Some(key)) = (machine.is_down(), binding.key_name()) {
                target.key_event(&KeyEvent::up(key));
            }
        }
    }
}

/// Drives gamepad mappings from host samples, one frame per [`tick`](Self::tick).
///
/// The handler never schedules itself. A driver calls `tick` once per frame
/// and keeps going while it returns [`Flow::Continue`]; [`run`](Self::run)
/// does exactly that over any sequence of frame timestamps.
pub struct GamepadHandler<S> {
    source: S,
    mappings: Vec<GamepadMapping>,
    options: GamepadOptions,
    state: HandlerState,
    bound: AHashMap<DeviceIndex, BoundDevice>,
    available: AHashSet<Box<str>>,
    last_discovery: Option<Instant>,
    key_target: Option<Box<dyn KeyTarget>>,
    events: Option<EventReceiver>,
}

impl<S: GamepadSource> GamepadHandler<S> {
    /// Create a handler. Unset binding fields are filled from `options`.
    pub fn new(
        mut mappings: Vec<GamepadMapping>,
        options: GamepadOptions,
        source: S,
    ) -> Result<Self> {
        for mapping in &mut mappings {
            mapping.prepare(&options)?;
        }
        let events = source.events();
        Ok(Self {
            source,
            mappings,
            options,
            state: HandlerState::Off,
            bound: AHashMap::new(),
            available: AHashSet::new(),
            last_discovery: None,
            key_target: None,
            events,
        })
    }

    /// Set where synthetic key events go.
    #[must_use]
    pub fn with_key_target(mut self, target: impl KeyTarget + 'static) -> Self {
        self.key_target = Some(Box::new(target));
        self
    }

    /// Listen to connect/disconnect notifications on `events` instead of the
    /// channel provided by the source.
    #[must_use]
    pub fn with_events(mut self, events: EventReceiver) -> Self {
        self.events = Some(events);
        self
    }

    pub fn state(&self) -> HandlerState {
        self.state
    }

    pub fn options(&self) -> &GamepadOptions {
        &self.options
    }

    pub fn mappings(&self) -> &[GamepadMapping] {
        &self.mappings
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Check host support and begin accepting ticks.
    ///
    /// Starting a stopped handler begins from a clean slate. Starting a
    /// running one does nothing.
    pub fn start(&mut self) -> Result<()> {
        if !self.source.is_supported() {
            warn!("Host does not support gamepads, handler stays off");
            self.state = HandlerState::Off;
            return Err(Error::Unsupported);
        }
        if self.state == HandlerState::Running {
            return Ok(());
        }
        self.teardown();
        self.state = HandlerState::Running;
        Ok(())
    }

    /// Stop accepting ticks. A tick already in progress completes.
    pub fn stop(&mut self) {
        if self.state != HandlerState::Running {
            return;
        }
        self.teardown();
        self.state = HandlerState::Stopped;
    }

    fn teardown(&mut self) {
        for device in self.bound.values() {
            device.release_keys(&self.mappings[device.mapping], &mut self.key_target);
        }
        self.bound.clear();
        self.available.clear();
        self.last_discovery = None;
    }

    /// Process one frame.
    pub fn tick(&mut self, now: Instant) -> Flow {
        if self.state != HandlerState::Running {
            return Flow::Stop;
        }

        let slots = self.source.snapshots();
        self.drain_events();

        let discovery_due = self.last_discovery.map_or(true, |last| {
            now.saturating_duration_since(last) >= self.options.discovery_interval()
        });
        if discovery_due {
            for snapshot in slots.iter().flatten() {
                self.discover(snapshot);
            }
            self.last_discovery = Some(now);
        }

        self.refresh(slots);
        self.dispatch(now);

        if self.state == HandlerState::Running {
            Flow::Continue
        } else {
            Flow::Stop
        }
    }

    /// Tick once per frame timestamp until the handler stops or the frames
    /// run out. Returns the number of processed frames.
    pub fn run<I>(&mut self, frames: I) -> usize
    where
        I: IntoIterator<Item = Instant>,
    {
        let mut processed = 0;
        for now in frames {
            if self.state != HandlerState::Running {
                break;
            }
            processed += 1;
            if self.tick(now) == Flow::Stop {
                break;
            }
        }
        processed
    }

    /// Host notification: a device became available.
    pub fn on_connected(&mut self, snapshot: GamepadSnapshot) {
        if self.state != HandlerState::Running {
            debug!("Ignoring connect of gamepad {} while not running", snapshot.index);
            return;
        }
        self.discover(&snapshot);
    }

    /// Host notification: the device in slot `index` has gone away.
    pub fn on_disconnected(&mut self, index: DeviceIndex) {
        let Some(device) = self.bound.remove(&index) else {
            return;
        };
        let mapping = &self.mappings[device.mapping];
        device.release_keys(mapping, &mut self.key_target);
        if mapping.debug {
            info!("Gamepad {index} with mapping \"{}\" disconnected", mapping.identifier);
        }
        if let Some(on_disconnect) = &mapping.on_disconnect {
            on_disconnect(index);
        }
    }

    /// Every device id observed since start, bound or not.
    pub fn available_gamepad_ids(&self) -> impl Iterator<Item = &str> {
        self.available.iter().map(AsRef::as_ref)
    }

    /// Latest snapshot of a bound device.
    pub fn gamepad(&self, index: DeviceIndex) -> Option<&GamepadSnapshot> {
        self.bound.get(&index).map(|device| &device.snapshot)
    }

    /// Mapping a bound device resolved to.
    pub fn mapping_for(&self, index: DeviceIndex) -> Option<&GamepadMapping> {
        self.bound
            .get(&index)
            .map(|device| &self.mappings[device.mapping])
    }

    /// Slot indices of all bound devices, ascending.
    pub fn bound_indices(&self) -> Vec<DeviceIndex> {
        let mut indices: Vec<DeviceIndex> = self.bound.keys().copied().collect();
        indices.sort_unstable();
        indices
    }

    fn drain_events(&mut self) {
        let Some(events) = self.events.clone() else {
            return;
        };
        for event in events.try_iter() {
            match event {
                HostEvent::Connected(snapshot) => self.on_connected(snapshot),
                HostEvent::Disconnected(index) => self.on_disconnected(index),
            }
        }
    }

    fn discover(&mut self, snapshot: &GamepadSnapshot) {
        if !self.available.contains(snapshot.id.as_ref()) {
            self.available.insert(snapshot.id.clone());
            if self.options.list_available_gamepads {
                info!("Found available gamepad with id: {}", snapshot.id);
            }
        }

        if self.bound.contains_key(&snapshot.index) {
            return;
        }
        let Some(resolved) = resolve(&snapshot.id, snapshot.index, &self.mappings) else {
            return;
        };
        let mapping = resolved.mapping;
        if mapping.debug {
            info!(
                "Gamepad with mapping found, id: {} index: {} mapping: {mapping:?}",
                snapshot.id, snapshot.index
            );
        }
        self.bound.insert(
            snapshot.index,
            BoundDevice::new(resolved.mapping_index, mapping, snapshot.clone()),
        );
        if let Some(on_connect) = &mapping.on_connect {
            on_connect(snapshot.index);
        }
    }

    // Snapshots are replaced, never patched.
    fn refresh(&mut self, slots: Vec<Option<GamepadSnapshot>>) {
        for device in self.bound.values_mut() {
            device.fresh = false;
        }
        for snapshot in slots.into_iter().flatten() {
            if let Some(device) = self.bound.get_mut(&snapshot.index) {
                device.snapshot = snapshot;
                device.fresh = true;
            }
        }
    }

    fn dispatch(&mut self, now: Instant) {
        let throttle_hold = self.options.throttle_hold;
        for (index, device) in &mut self.bound {
            let mapping = &self.mappings[device.mapping];
            if !device.fresh {
                debug!("Gamepad {index} is missing from the latest poll");
                continue;
            }
            if !device.snapshot.connected {
                warn!("Gamepad {index} ({}) is in disconnected state", device.snapshot.id);
                continue;
            }

            let BoundDevice {
                snapshot,
                buttons,
                axes,
                ..
            } = device;

            for (binding, machine) in mapping.buttons.iter().zip(buttons.iter_mut()) {
                let Some(pressed) = snapshot.button(binding.index) else {
                    continue;
                };
                if mapping.debug && pressed {
                    debug!("Gamepad {index} pressed the button mapped to {binding:?}");
                }
                let hold_interval = throttle_hold.then(|| binding.throttle_or_default());
                for effect in machine.apply(binding, pressed, now, hold_interval) {
                    run_button_effect(binding, effect, &mut self.key_target);
                }
            }

            for (binding, machine) in mapping.axes.iter().zip(axes.iter_mut()) {
                let Some(value) = snapshot.axis(binding.index) else {
                    continue;
                };
                for effect in machine.apply(binding, value) {
                    run_axis_effect(binding, effect);
                }
            }
        }
    }
}

#[inline]
fn fire(callback: Option<&Callback>) {
    if let Some(callback) = callback {
        callback();
    }
}

fn run_button_effect(
    binding: &ButtonBinding,
    effect: ButtonEffect,
    target: &mut Option<Box<dyn KeyTarget>>,
) {
    match effect {
        ButtonEffect::Press => fire(binding.on_press.as_ref()),
        ButtonEffect::Hold => fire(binding.on_hold.as_ref()),
        ButtonEffect::Release => fire(binding.on_release.as_ref()),
        ButtonEffect::Click => fire(binding.on_click.as_ref()),
        ButtonEffect::KeyDown | ButtonEffect::KeyUp => {
            let (Some(target), Some(key)) = (target.as_mut(), binding.key_name()) else {
                return;
            };
            let event = if effect == ButtonEffect::KeyDown {
                KeyEvent::down(key)
            } else {
                KeyEvent::up(key)
            };
            target.key_event(&event);
        }
    }
}

fn run_axis_effect(binding: &AxisBinding, effect: AxisEffect) {
    match effect {
        AxisEffect::Positive => fire(binding.on_positive.as_ref()),
        AxisEffect::Negative => fire(binding.on_negative.as_ref()),
        AxisEffect::Neutral => fire(binding.on_neutral.as_ref()),
    }
}
