use std::time::{Duration, Instant};

use smallvec::SmallVec;

use crate::mapping::ButtonBinding;

/// Something a button transition asks the handler to do, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonEffect {
    Press,
    Hold,
    Release,
    Click,
    KeyDown,
    KeyUp,
}

pub type ButtonEffects = SmallVec<[ButtonEffect; 3]>;

/// Press state of one button binding on one device.
///
/// Two states: released and pressed. Holding is the level of the pressed
/// state, so `Hold` is reported on every sample after the first one of a
/// press, and `Release` is always followed by `Click` on the same sample.
#[derive(Debug, Default, Clone)]
pub struct ButtonStateMachine {
    is_down: bool,
    press_fired: bool,
    last_fire: Option<Instant>,
}

impl ButtonStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_down(&self) -> bool {
        self.is_down
    }

    /// Whether `Press` was already reported for the current press.
    #[inline]
    pub fn press_fired(&self) -> bool {
        self.press_fired
    }

    /// Feed one sample.
    ///
    /// With `hold_interval` set, `Hold` is reported at most once per interval,
    /// measured from the press or the previous hold.
    pub fn apply(
        &mut self,
        binding: &ButtonBinding,
        pressed: bool,
        now: Instant,
        hold_interval: Option<Duration>,
    ) -> ButtonEffects {
        let mut effects = ButtonEffects::new();

        if pressed {
            if self.press_fired {
                let due = match (hold_interval, self.last_fire) {
                    (Some(interval), Some(last)) => {
                        now.saturating_duration_since(last) >= interval
                    }
                    _ => true,
                };
                if due {
                    effects.push(ButtonEffect::Hold);
                    self.last_fire = Some(now);
                }
            } else {
                self.press_fired = true;
                self.last_fire = Some(now);
                effects.push(ButtonEffect::Press);
                if binding.emits_key_event() {
                    effects.push(ButtonEffect::KeyDown);
                }
            }
            self.is_down = true;
        } else if self.is_down {
            self.is_down = false;
            self.press_fired = false;
            self.last_fire = None;
            effects.push(ButtonEffect::Release);
            effects.push(ButtonEffect::Click);
            if binding.emits_key_event() {
                effects.push(ButtonEffect::KeyUp);
            }
        }

        effects
    }
}
