use smallvec::SmallVec;

use crate::mapping::AxisBinding;

/// Zone transition reported by an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisEffect {
    Positive,
    Negative,
    Neutral,
}

pub type AxisEffects = SmallVec<[AxisEffect; 2]>;

/// Zone membership of one axis binding on one device.
///
/// Entering a zone is reported once; staying in it is silent. Leaving both
/// zones reports `Neutral` once. Jumping straight from one zone into the
/// other reports the new zone only.
#[derive(Debug, Default, Clone)]
pub struct AxisStateMachine {
    positive_active: bool,
    negative_active: bool,
}

impl AxisStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn positive_active(&self) -> bool {
        self.positive_active
    }

    #[inline]
    pub fn negative_active(&self) -> bool {
        self.negative_active
    }

    /// Feed one sample in [-1.0, 1.0].
    pub fn apply(&mut self, binding: &AxisBinding, value: f32) -> AxisEffects {
        let mut effects = AxisEffects::new();
        let positive = value >= binding.positive();
        let negative = value <= binding.negative();

        if positive && !self.positive_active {
            effects.push(AxisEffect::Positive);
        }
        if negative && !self.negative_active {
            effects.push(AxisEffect::Negative);
        }
        if !positive && !negative && (self.positive_active || self.negative_active) {
            effects.push(AxisEffect::Neutral);
        }

        self.positive_active = positive;
        self.negative_active = negative;
        effects
    }
}
