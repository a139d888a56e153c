use ahash::AHashMap;
use enigo::{Enigo, InputResult, NewConError, Settings};
use log::warn;
use padbind_gamepad::{KeyEvent, KeyEventKind, KeyTarget};

use crate::KeyCombo;

/// Emulates keyboard input through enigo.
pub struct Performer {
    enigo: Enigo,
    combos: AHashMap<Box<str>, Option<KeyCombo>>,
}

impl Performer {
    /// Create a new performer.
    pub fn new() -> Result<Self, NewConError> {
        let settings = Settings::default();
        let enigo = Enigo::new(&settings)?;
        Ok(Self {
            enigo,
            combos: AHashMap::new(),
        })
    }

    /// Perform key combo.
    /// This will press and release the keys in the key combo.
    pub fn perform(&mut self, key_combo: &KeyCombo) -> InputResult<()> {
        key_combo.perform(&mut self.enigo)
    }

    /// Press keys.
    pub fn press(&mut self, key_combo: &KeyCombo) -> InputResult<()> {
        key_combo.press(&mut self.enigo)
    }

    /// Release keys.
    pub fn release(&mut self, key_combo: &KeyCombo) -> InputResult<()> {
        key_combo.release(&mut self.enigo)
    }

    fn combo_for(&mut self, name: &str) -> Option<KeyCombo> {
        if let Some(cached) = self.combos.get(name) {
            return cached.clone();
        }
        let parsed = match name.parse::<KeyCombo>() {
            Ok(combo) => Some(combo),
            Err(e) => {
                warn!("cannot emit key event for \"{name}\": {e}");
                None
            }
        };
        self.combos.insert(name.into(), parsed.clone());
        parsed
    }
}

impl KeyTarget for Performer {
    fn key_event(&mut self, event: &KeyEvent) {
        let Some(combo) = self.combo_for(&event.key) else {
            return;
        };
        let result = match event.kind {
            KeyEventKind::Down => self.press(&combo),
            KeyEventKind::Up => self.release(&combo),
        };
        if let Err(e) = result {
            warn!("failed to emit {:?} for {combo}: {e}", event.kind);
        }
    }
}
