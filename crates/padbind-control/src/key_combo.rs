use std::fmt;
use std::str::FromStr;

use enigo::{
    Direction::{Click, Press, Release},
    Enigo, InputResult, Keyboard,
};
use serde::de::{Error as DeError, Visitor};
use serde::{Deserialize, Deserializer};
use smallvec::SmallVec;

use crate::key::{parse_key, Key};
use crate::{Modifier, Modifiers};

/// Keys pressed together, e.g. `ctrl+shift+t`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCombo {
    pub modifiers: Modifiers,
    pub keys: SmallVec<[Key; 4]>,
}

impl KeyCombo {
    pub fn from_key(key: Key) -> Self {
        let mut combo = Self {
            modifiers: Modifiers::empty(),
            keys: SmallVec::new(),
        };
        match Modifier::try_from(key) {
            Ok(modifier) => combo.modifiers.add(modifier),
            Err(key) => combo.keys.push(key),
        }
        combo
    }

    /// Press and release every key of the combo.
    pub fn perform(&self, enigo: &mut Enigo) -> InputResult<()> {
        for modifier in self.modifiers.iter() {
            enigo.key(modifier.key().into(), Press)?;
        }
        for key in &self.keys {
            enigo.key(key.into(), Click)?;
        }
        for modifier in self.modifiers.iter().rev() {
            enigo.key(modifier.key().into(), Release)?;
        }
        Ok(())
    }

    pub fn press(&self, enigo: &mut Enigo) -> InputResult<()> {
        for modifier in self.modifiers.iter() {
            enigo.key(modifier.key().into(), Press)?;
        }
        for key in &self.keys {
            enigo.key(key.into(), Press)?;
        }
        Ok(())
    }

    pub fn release(&self, enigo: &mut Enigo) -> InputResult<()> {
        for key in self.keys.iter().rev() {
            enigo.key(key.into(), Release)?;
        }
        for modifier in self.modifiers.iter().rev() {
            enigo.key(modifier.key().into(), Release)?;
        }
        Ok(())
    }
}

impl FromStr for KeyCombo {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err("Empty key combo".to_string());
        }
        // A lone "+" is the plus key, not a separator
        if s.trim() == "+" {
            return Ok(KeyCombo::from_key(Key::Unicode('+')));
        }

        let mut modifiers = Modifiers::empty();
        let mut keys: SmallVec<[Key; 4]> = SmallVec::new();
        for part in s.split('+').map(str::trim) {
            let Some(key) = parse_key(part) else {
                return Err(format!("Invalid key: {part}"));
            };
            match Modifier::try_from(key) {
                Ok(modifier) => modifiers.add(modifier),
                Err(key) => keys.push(key),
            }
        }
        Ok(KeyCombo { modifiers, keys })
    }
}

impl<'de> Deserialize<'de> for KeyCombo {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct KeyComboVisitor;

        impl Visitor<'_> for KeyComboVisitor {
            type Value = KeyCombo;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("key combination string")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: DeError,
            {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(KeyComboVisitor)
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        let modifier_keys = self.modifiers.iter().map(Modifier::key);
        for key in modifier_keys.chain(self.keys.iter().copied()) {
            if !first {
                f.write_str("+")?;
            }
            first = false;
            write!(f, "{key:?}")?;
        }
        Ok(())
    }
}
