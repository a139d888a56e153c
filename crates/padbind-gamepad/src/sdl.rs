use crossbeam_channel::unbounded;
use sdl2::controller::{Axis as SdlAxis, Button as SdlButton, GameController};
use sdl2::event::Event;
use sdl2::{EventPump, GameControllerSubsystem, Sdl};

use crate::events::{EventReceiver, EventSender, HostEvent};
use crate::source::GamepadSource;
use crate::types::{DeviceIndex, GamepadSnapshot};
use crate::{Error, Result};

/// Analog triggers are reported as buttons once they pass this value.
const TRIGGER_THRESHOLD: i16 = 20000;

/// Button slots in the standard gamepad layout order.
const BUTTON_LAYOUT: [Slot; 17] = [
    Slot::Button(SdlButton::A),
    Slot::Button(SdlButton::B),
    Slot::Button(SdlButton::X),
    Slot::Button(SdlButton::Y),
    Slot::Button(SdlButton::LeftShoulder),
    Slot::Button(SdlButton::RightShoulder),
    Slot::Trigger(SdlAxis::TriggerLeft),
    Slot::Trigger(SdlAxis::TriggerRight),
    Slot::Button(SdlButton::Back),
    Slot::Button(SdlButton::Start),
    Slot::Button(SdlButton::LeftStick),
    Slot::Button(SdlButton::RightStick),
    Slot::Button(SdlButton::DPadUp),
    Slot::Button(SdlButton::DPadDown),
    Slot::Button(SdlButton::DPadLeft),
    Slot::Button(SdlButton::DPadRight),
    Slot::Button(SdlButton::Guide),
];

const AXIS_LAYOUT: [SdlAxis; 4] = [
    SdlAxis::LeftX,
    SdlAxis::LeftY,
    SdlAxis::RightX,
    SdlAxis::RightY,
];

#[derive(Clone, Copy)]
enum Slot {
    Button(SdlButton),
    Trigger(SdlAxis),
}

/// SDL2-backed gamepad source.
///
/// SDL must live entirely within the thread that created it, so the source is
/// neither `Send` nor `Sync`. Devices occupy the lowest free slot, the way the
/// browser gamepad API assigns indices.
pub struct Sdl2Source {
    _sdl: Sdl,
    subsystem: GameControllerSubsystem,
    pump: EventPump,
    slots: Vec<Option<GameController>>,
    events_tx: EventSender,
    events_rx: EventReceiver,
}

impl Sdl2Source {
    pub fn new() -> Result<Self> {
        let sdl = sdl2::init().map_err(Error::BackendInit)?;
        let subsystem = sdl.game_controller().map_err(Error::BackendInit)?;
        let pump = sdl.event_pump().map_err(Error::BackendInit)?;
        let (events_tx, events_rx) = unbounded();

        let mut source = Self {
            _sdl: sdl,
            subsystem,
            pump,
            slots: Vec::new(),
            events_tx,
            events_rx,
        };

        // Initial enumeration
        let count = source.subsystem.num_joysticks().map_err(Error::BackendInit)?;
        for i in 0..count {
            if source.subsystem.is_game_controller(i) {
                if let Ok(controller) = source.subsystem.open(i) {
                    source.insert(controller);
                }
            }
        }

        Ok(source)
    }

    fn insert(&mut self, controller: GameController) -> DeviceIndex {
        let free = self.slots.iter().position(Option::is_none);
        let slot = match free {
            Some(slot) => {
                self.slots[slot] = Some(controller);
                slot
            }
            None => {
                self.slots.push(Some(controller));
                self.slots.len() - 1
            }
        };
        slot as DeviceIndex
    }

    fn slot_of(&self, instance_id: u32) -> Option<usize> {
        self.slots.iter().position(|slot| {
            slot.as_ref()
                .is_some_and(|c| c.instance_id() == instance_id)
        })
    }

    fn pump_events(&mut self) {
        let events: Vec<Event> = self.pump.poll_iter().collect();
        for event in events {
            match event {
                Event::ControllerDeviceAdded { which, .. } => {
                    let Ok(controller) = self.subsystem.open(which) else {
                        continue;
                    };
                    // SDL also reports devices that were enumerated at startup
                    if self.slot_of(controller.instance_id()).is_some() {
                        continue;
                    }
                    let index = self.insert(controller);
                    if let Some(snapshot) = self.snapshot(index as usize) {
                        let _ = self.events_tx.send(HostEvent::Connected(snapshot));
                    }
                }
                Event::ControllerDeviceRemoved { which, .. } => {
                    if let Some(slot) = self.slot_of(which) {
                        self.slots[slot] = None;
                        let _ = self
                            .events_tx
                            .send(HostEvent::Disconnected(slot as DeviceIndex));
                    }
                }
                _ => {}
            }
        }
    }

    fn snapshot(&self, slot: usize) -> Option<GamepadSnapshot> {
        let controller = self.slots.get(slot)?.as_ref()?;
        let buttons = BUTTON_LAYOUT
            .iter()
            .map(|s| match *s {
                Slot::Button(button) => controller.button(button),
                Slot::Trigger(axis) => controller.axis(axis) > TRIGGER_THRESHOLD,
            })
            .collect();
        let axes = AXIS_LAYOUT
            .iter()
            .map(|axis| normalize(controller.axis(*axis)))
            .collect();
        Some(GamepadSnapshot {
            index: slot as DeviceIndex,
            id: controller.name().into(),
            connected: controller.attached(),
            buttons,
            axes,
        })
    }
}

impl GamepadSource for Sdl2Source {
    fn snapshots(&mut self) -> Vec<Option<GamepadSnapshot>> {
        self.pump_events();
        (0..self.slots.len()).map(|slot| self.snapshot(slot)).collect()
    }

    fn events(&self) -> Option<EventReceiver> {
        Some(self.events_rx.clone())
    }
}

#[inline]
fn normalize(value: i16) -> f32 {
    (f32::from(value) / f32::from(i16::MAX)).clamp(-1.0, 1.0)
}
