use enigo::Key as EnigoKey;

/// A key that can be emulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Unicode(char),
    Control,
    Meta,
    Shift,
    Alt,
    Home,
    End,
    PageUp,
    PageDown,
    UpArrow,
    DownArrow,
    LeftArrow,
    RightArrow,
    Delete,
    Backspace,
    Escape,
    Tab,
    Space,
    Return,
    VolumeUp,
    VolumeDown,
    VolumeMute,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
}

impl Key {
    /// Whether the key is one of the combo modifiers.
    pub const fn is_modifier(&self) -> bool {
        matches!(self, Key::Control | Key::Meta | Key::Shift | Key::Alt)
    }

    pub fn to_enigo(&self) -> EnigoKey {
        match self {
            Key::Unicode(ch) => EnigoKey::Unicode(*ch),
            Key::Control => EnigoKey::Control,
            Key::Meta => EnigoKey::Meta,
            Key::Shift => EnigoKey::Shift,
            Key::Alt => EnigoKey::Alt,
            Key::Home => EnigoKey::Home,
            Key::End => EnigoKey::End,
            Key::PageUp => EnigoKey::PageUp,
            Key::PageDown => EnigoKey::PageDown,
            Key::UpArrow => EnigoKey::UpArrow,
            Key::DownArrow => EnigoKey::DownArrow,
            Key::LeftArrow => EnigoKey::LeftArrow,
            Key::RightArrow => EnigoKey::RightArrow,
            Key::Delete => EnigoKey::Delete,
            Key::Backspace => EnigoKey::Backspace,
            Key::Escape => EnigoKey::Escape,
            Key::Tab => EnigoKey::Tab,
            Key::Space => EnigoKey::Space,
            Key::Return => EnigoKey::Return,
            Key::VolumeUp => EnigoKey::VolumeUp,
            Key::VolumeDown => EnigoKey::VolumeDown,
            Key::VolumeMute => EnigoKey::VolumeMute,
            Key::F1 => EnigoKey::F1,
            Key::F2 => EnigoKey::F2,
            Key::F3 => EnigoKey::F3,
            Key::F4 => EnigoKey::F4,
            Key::F5 => EnigoKey::F5,
            Key::F6 => EnigoKey::F6,
            Key::F7 => EnigoKey::F7,
            Key::F8 => EnigoKey::F8,
            Key::F9 => EnigoKey::F9,
            Key::F10 => EnigoKey::F10,
            Key::F11 => EnigoKey::F11,
            Key::F12 => EnigoKey::F12,
        }
    }
}

impl From<Key> for EnigoKey {
    fn from(key: Key) -> Self {
        key.to_enigo()
    }
}

impl From<&Key> for EnigoKey {
    fn from(key: &Key) -> Self {
        key.to_enigo()
    }
}

/// Parse a key name into a `Key`.
///
/// Names are case-insensitive. Both snake case (`arrow_up`) and the names
/// browsers put into keyboard events (`ArrowUp`, `Enter`) are accepted.
/// Any other single printable character is typed as itself.
///
/// ```
/// use padbind_control::{parse_key, Key};
///
/// assert_eq!(parse_key("ArrowUp"), Some(Key::UpArrow));
/// assert_eq!(parse_key("a"), Some(Key::Unicode('a')));
/// ```
pub fn parse_key(input: &str) -> Option<Key> {
    let mut chars = input.chars();
    if let (Some(ch), None) = (chars.next(), chars.next()) {
        return match ch {
            ' ' => Some(Key::Space),
            ch if ch.is_control() => None,
            ch => Some(Key::Unicode(ch.to_ascii_lowercase())),
        };
    }

    let name = input.to_ascii_lowercase();
    Some(match name.as_str() {
        // Modifiers
        "ctrl" | "control" => Key::Control,
        "meta" | "cmd" | "command" | "super" | "win" => Key::Meta,
        "shift" => Key::Shift,
        "alt" | "option" => Key::Alt,

        // Navigation
        "home" => Key::Home,
        "end" => Key::End,
        "page_up" | "pageup" => Key::PageUp,
        "page_down" | "pagedown" => Key::PageDown,
        "arrow_up" | "arrowup" | "up" => Key::UpArrow,
        "arrow_down" | "arrowdown" | "down" => Key::DownArrow,
        "arrow_left" | "arrowleft" | "left" => Key::LeftArrow,
        "arrow_right" | "arrowright" | "right" => Key::RightArrow,

        // Actions
        "delete" | "del" => Key::Delete,
        "backspace" => Key::Backspace,
        "escape" | "esc" => Key::Escape,
        "tab" => Key::Tab,
        "space" | "spacebar" => Key::Space,
        "enter" | "return" => Key::Return,

        // Media
        "volume_up" | "audiovolumeup" => Key::VolumeUp,
        "volume_down" | "audiovolumedown" => Key::VolumeDown,
        "volume_mute" | "audiovolumemute" => Key::VolumeMute,

        // Punctuation with names that are awkward in combos
        "plus" => Key::Unicode('+'),
        "minus" => Key::Unicode('-'),
        "comma" => Key::Unicode(','),
        "period" | "dot" => Key::Unicode('.'),
        "slash" => Key::Unicode('/'),

        "f1" => Key::F1,
        "f2" => Key::F2,
        "f3" => Key::F3,
        "f4" => Key::F4,
        "f5" => Key::F5,
        "f6" => Key::F6,
        "f7" => Key::F7,
        "f8" => Key::F8,
        "f9" => Key::F9,
        "f10" => Key::F10,
        "f11" => Key::F11,
        "f12" => Key::F12,
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_browser_key_names() {
        assert_eq!(parse_key("ArrowLeft"), Some(Key::LeftArrow));
        assert_eq!(parse_key("Enter"), Some(Key::Return));
        assert_eq!(parse_key("Escape"), Some(Key::Escape));
        assert_eq!(parse_key(" "), Some(Key::Space));
    }

    #[test]
    fn parses_snake_case_names() {
        assert_eq!(parse_key("page_down"), Some(Key::PageDown));
        assert_eq!(parse_key("volume_mute"), Some(Key::VolumeMute));
        assert_eq!(parse_key("f12"), Some(Key::F12));
    }

    #[test]
    fn single_characters_are_typed_as_is() {
        assert_eq!(parse_key("A"), Some(Key::Unicode('a')));
        assert_eq!(parse_key("7"), Some(Key::Unicode('7')));
        assert_eq!(parse_key(";"), Some(Key::Unicode(';')));
    }

    #[test]
    fn rejects_unknown_and_empty_names() {
        assert_eq!(parse_key(""), None);
        assert_eq!(parse_key("hyper"), None);
        assert_eq!(parse_key("\n"), None);
    }

    #[test]
    fn modifiers_are_flagged() {
        assert!(Key::Shift.is_modifier());
        assert!(!Key::Tab.is_modifier());
    }
}
