/// Direction of a synthetic key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyEventKind {
    Down,
    Up,
}

/// Synthetic keyboard event requested by a button binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub kind: KeyEventKind,
    pub key: Box<str>,
}

impl KeyEvent {
    pub fn down(key: impl Into<Box<str>>) -> Self {
        Self {
            kind: KeyEventKind::Down,
            key: key.into(),
        }
    }

    pub fn up(key: impl Into<Box<str>>) -> Self {
        Self {
            kind: KeyEventKind::Up,
            key: key.into(),
        }
    }
}

/// Receiver of synthetic keyboard events.
pub trait KeyTarget {
    fn key_event(&mut self, event: &KeyEvent);
}

impl<T: KeyTarget + ?Sized> KeyTarget for Box<T> {
    fn key_event(&mut self, event: &KeyEvent) {
        (**self).key_event(event);
    }
}
