/// Events targeted at an element by node key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Pointer activation
    Click { target: String },
    /// Key press, targeted at the focused element
    Key {
        target: String,
        key: Key,
        modifiers: Modifiers,
    },
}

impl Event {
    pub fn click(target: impl Into<String>) -> Self {
        Self::Click {
            target: target.into(),
        }
    }

    pub fn key(target: impl Into<String>, key: Key) -> Self {
        Self::Key {
            target: target.into(),
            key,
            modifiers: Modifiers::default(),
        }
    }

    pub fn target(&self) -> &str {
        match self {
            Self::Click { target } | Self::Key { target, .. } => target,
        }
    }
}

/// Keys the dispatcher and focus traversal understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Tab,
    BackTab,
}

impl Key {
    pub const SPACE: Key = Key::Char(' ');
}

/// Key modifiers
///
/// Ctrl and Alt chords never activate. Shift does not block activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn alt() -> Self {
        Self {
            alt: true,
            ..Default::default()
        }
    }
}
