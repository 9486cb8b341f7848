use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};

const DIGIT_LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// One button of the pad. Presses dispatch on this tag, never on label text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeypadKey {
    /// Always `0..=9`; build it through [`KeypadKey::digit`].
    Digit(u8),
    Point,
    Backspace,
    Clear,
    Confirm,
}

impl KeypadKey {
    pub fn digit(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self::Digit(value))
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Digit(d) => DIGIT_LABELS.get(d as usize).copied().unwrap_or("?"),
            Self::Point => ".",
            Self::Backspace => "<--",
            Self::Clear => "AC",
            Self::Confirm => "OK",
        }
    }

    /// Character appended to the value, for keys that append anything.
    pub fn text(self) -> Option<char> {
        match self {
            Self::Digit(d) => char::from_digit(d as u32, 10),
            Self::Point => Some('.'),
            Self::Backspace | Self::Clear | Self::Confirm => None,
        }
    }

    pub fn is_control(self) -> bool {
        self.text().is_none()
    }

    /// Physical keyboard shortcut for a pad key.
    pub fn from_key_event(key: KeyEvent) -> Option<Self> {
        let mods = key.modifiers;
        if mods.contains(KeyModifiers::CONTROL) || mods.contains(KeyModifiers::ALT) {
            return None;
        }
        match key.code {
            KeyCode::Char(ch @ '0'..='9') => ch.to_digit(10).and_then(|d| Self::digit(d as u8)),
            KeyCode::Char('.' | ',') => Some(Self::Point),
            KeyCode::Char('c' | 'C') | KeyCode::Delete => Some(Self::Clear),
            KeyCode::Backspace => Some(Self::Backspace),
            KeyCode::Enter => Some(Self::Confirm),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::KeypadKey;
    use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn digit_constructor_rejects_out_of_range() {
        assert_eq!(KeypadKey::digit(9), Some(KeypadKey::Digit(9)));
        assert_eq!(KeypadKey::digit(10), None);
    }

    #[test]
    fn only_digits_and_point_append_text() {
        assert_eq!(KeypadKey::Digit(7).text(), Some('7'));
        assert_eq!(KeypadKey::Point.text(), Some('.'));
        assert!(KeypadKey::Backspace.is_control());
        assert!(KeypadKey::Clear.is_control());
        assert!(KeypadKey::Confirm.is_control());
    }

    #[test]
    fn labels_match_the_pad_faces() {
        assert_eq!(KeypadKey::Digit(0).label(), "0");
        assert_eq!(KeypadKey::Backspace.label(), "<--");
        assert_eq!(KeypadKey::Clear.label(), "AC");
        assert_eq!(KeypadKey::Confirm.label(), "OK");
    }

    #[test]
    fn keyboard_shortcuts() {
        let plain = |code| KeypadKey::from_key_event(KeyEvent::plain(code));
        assert_eq!(plain(KeyCode::Char('4')), Some(KeypadKey::Digit(4)));
        assert_eq!(plain(KeyCode::Char(',')), Some(KeypadKey::Point));
        assert_eq!(plain(KeyCode::Delete), Some(KeypadKey::Clear));
        assert_eq!(plain(KeyCode::Enter), Some(KeypadKey::Confirm));
        assert_eq!(plain(KeyCode::Char('x')), None);

        let ctrl_c = KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
        };
        assert_eq!(KeypadKey::from_key_event(ctrl_c), None);
    }
}
