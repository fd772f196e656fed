//! Keyboard navigation
//!
//! Keys are identified by their DOM `KeyboardEvent.key` names.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::UnknownKey;

/// A keyboard key relevant to dashboard navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Key {
    Enter,
    Escape,
    Space,
    Tab,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    PageUp,
    PageDown,
    Delete,
    Backspace,
    /// Any single printable character
    Char(char),
}

impl Key {
    /// Enter and Space trigger buttons and checkboxes
    pub fn is_activation_key(&self) -> bool {
        matches!(self, Key::Enter | Key::Space)
    }

    pub fn is_arrow_key(&self) -> bool {
        matches!(
            self,
            Key::ArrowUp | Key::ArrowDown | Key::ArrowLeft | Key::ArrowRight
        )
    }
}

impl FromStr for Key {
    type Err = UnknownKey;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let key = match name {
            "Enter" => Key::Enter,
            "Escape" => Key::Escape,
            " " => Key::Space,
            "Tab" => Key::Tab,
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "Home" => Key::Home,
            "End" => Key::End,
            "PageUp" => Key::PageUp,
            "PageDown" => Key::PageDown,
            "Delete" => Key::Delete,
            "Backspace" => Key::Backspace,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => return Err(UnknownKey(name.to_string())),
                }
            }
        };
        Ok(key)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Key::Enter => "Enter",
            Key::Escape => "Escape",
            Key::Space => " ",
            Key::Tab => "Tab",
            Key::ArrowUp => "ArrowUp",
            Key::ArrowDown => "ArrowDown",
            Key::ArrowLeft => "ArrowLeft",
            Key::ArrowRight => "ArrowRight",
            Key::Home => "Home",
            Key::End => "End",
            Key::PageUp => "PageUp",
            Key::PageDown => "PageDown",
            Key::Delete => "Delete",
            Key::Backspace => "Backspace",
            Key::Char(c) => return write!(f, "{}", c),
        };
        f.write_str(name)
    }
}

impl TryFrom<String> for Key {
    type Error = UnknownKey;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        key.to_string()
    }
}

/// Next focused index in a list of `len` items
///
/// Arrows wrap around, Home and End jump to the ends. Returns `None` for
/// other keys and for an empty list.
pub fn navigate(key: Key, current: usize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let current = current % len;

    match key {
        Key::ArrowDown | Key::ArrowRight => Some((current + 1) % len),
        Key::ArrowUp | Key::ArrowLeft => Some((current + len - 1) % len),
        Key::Home => Some(0),
        Key::End => Some(len - 1),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_down_wraps_to_first() {
        assert_eq!(navigate(Key::ArrowDown, 4, 5), Some(0));
        assert_eq!(navigate(Key::ArrowRight, 1, 5), Some(2));
    }

    #[test]
    fn test_arrow_up_wraps_to_last() {
        assert_eq!(navigate(Key::ArrowUp, 0, 5), Some(4));
        assert_eq!(navigate(Key::ArrowLeft, 3, 5), Some(2));
    }

    #[test]
    fn test_home_and_end() {
        assert_eq!(navigate(Key::Home, 3, 5), Some(0));
        assert_eq!(navigate(Key::End, 0, 5), Some(4));
    }

    #[test]
    fn test_non_navigation_keys_and_empty_lists() {
        assert_eq!(navigate(Key::Enter, 0, 5), None);
        assert_eq!(navigate(Key::Char('a'), 0, 5), None);
        assert_eq!(navigate(Key::ArrowDown, 0, 0), None);
    }

    #[test]
    fn test_single_item_list() {
        assert_eq!(navigate(Key::ArrowDown, 0, 1), Some(0));
        assert_eq!(navigate(Key::ArrowUp, 0, 1), Some(0));
    }

    #[test]
    fn test_key_classes() {
        assert!(Key::Enter.is_activation_key());
        assert!(Key::Space.is_activation_key());
        assert!(!Key::Tab.is_activation_key());
        assert!(Key::ArrowLeft.is_arrow_key());
        assert!(!Key::Home.is_arrow_key());
    }

    #[test]
    fn test_parse_dom_names() {
        assert_eq!("ArrowDown".parse::<Key>(), Ok(Key::ArrowDown));
        assert_eq!(" ".parse::<Key>(), Ok(Key::Space));
        assert_eq!("k".parse::<Key>(), Ok(Key::Char('k')));
        assert_eq!(
            "F13".parse::<Key>(),
            Err(UnknownKey("F13".to_string()))
        );
        assert!("".parse::<Key>().is_err());
    }

    #[test]
    fn test_serde_uses_dom_names() {
        let key: Key = serde_json::from_str("\"PageDown\"").unwrap();
        assert_eq!(key, Key::PageDown);
        assert_eq!(serde_json::to_string(&Key::Char('a')).unwrap(), "\"a\"");
        assert!(serde_json::from_str::<Key>("\"Hyper\"").is_err());
    }
}
