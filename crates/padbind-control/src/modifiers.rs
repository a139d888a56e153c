use crate::key::Key;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Modifier {
    Ctrl,
    Meta,
    Shift,
    Alt,
}

impl Modifier {
    /// Order in which modifiers are pressed. Release goes in reverse.
    pub const ALL: [Modifier; 4] = [Modifier::Ctrl, Modifier::Meta, Modifier::Shift, Modifier::Alt];

    const fn bit(self) -> u8 {
        match self {
            Modifier::Ctrl => 1 << 0,
            Modifier::Meta => 1 << 1,
            Modifier::Shift => 1 << 2,
            Modifier::Alt => 1 << 3,
        }
    }

    pub const fn key(self) -> Key {
        match self {
            Modifier::Ctrl => Key::Control,
            Modifier::Meta => Key::Meta,
            Modifier::Shift => Key::Shift,
            Modifier::Alt => Key::Alt,
        }
    }
}

impl TryFrom<Key> for Modifier {
    type Error = Key;

    fn try_from(key: Key) -> Result<Self, Self::Error> {
        match key {
            Key::Control => Ok(Modifier::Ctrl),
            Key::Meta => Ok(Modifier::Meta),
            Key::Shift => Ok(Modifier::Shift),
            Key::Alt => Ok(Modifier::Alt),
            other => Err(other),
        }
    }
}

/// Set of modifiers held for a key combo.
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn add(&mut self, modifier: Modifier) {
        self.0 |= modifier.bit();
    }

    pub const fn contains(&self, modifier: Modifier) -> bool {
        self.0 & modifier.bit() != 0
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Modifiers in press order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Modifier> + '_ {
        Modifier::ALL.into_iter().filter(|m| self.contains(*m))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_has_no_modifiers() {
        let mods = Modifiers::empty();
        assert!(mods.is_empty());
        assert_eq!(mods.len(), 0);
        assert_eq!(mods.iter().count(), 0);
    }

    #[test]
    fn add_is_idempotent() {
        let mut mods = Modifiers::empty();
        mods.add(Modifier::Alt);
        mods.add(Modifier::Alt);
        assert!(mods.contains(Modifier::Alt));
        assert!(!mods.contains(Modifier::Ctrl));
        assert_eq!(mods.len(), 1);
    }

    #[test]
    fn iterates_in_press_order() {
        let mut mods = Modifiers::empty();
        mods.add(Modifier::Alt);
        mods.add(Modifier::Ctrl);
        let pressed: Vec<_> = mods.iter().collect();
        assert_eq!(pressed, vec![Modifier::Ctrl, Modifier::Alt]);
        let released: Vec<_> = mods.iter().rev().collect();
        assert_eq!(released, vec![Modifier::Alt, Modifier::Ctrl]);
    }

    #[test]
    fn only_modifier_keys_convert() {
        assert_eq!(Modifier::try_from(Key::Meta), Ok(Modifier::Meta));
        assert_eq!(Modifier::try_from(Key::Tab), Err(Key::Tab));
        assert_eq!(Modifier::Shift.key(), Key::Shift);
    }
}
