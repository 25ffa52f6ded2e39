use fullpage::{NavKey, Navigator};

/// The navigation keys, named after DOM `event.code` values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyCode {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    PageUp,
    PageDown,
    Home,
    End,
}

impl KeyCode {
    /// Parses a DOM-style `event.code` string. Unknown codes are simply not navigation
    /// keys.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowUp" => Some(Self::ArrowUp),
            "ArrowDown" => Some(Self::ArrowDown),
            "ArrowLeft" => Some(Self::ArrowLeft),
            "ArrowRight" => Some(Self::ArrowRight),
            "PageUp" => Some(Self::PageUp),
            "PageDown" => Some(Self::PageDown),
            "Home" => Some(Self::Home),
            "End" => Some(Self::End),
            _ => None,
        }
    }
}

/// Domain-level navigation intent, independent of which physical key produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NavCommand {
    Next,
    Previous,
    First,
    Last,
}

impl NavCommand {
    pub fn from_key(key: KeyCode) -> Self {
        match key {
            KeyCode::ArrowDown | KeyCode::ArrowRight | KeyCode::PageDown => Self::Next,
            KeyCode::ArrowUp | KeyCode::ArrowLeft | KeyCode::PageUp => Self::Previous,
            KeyCode::Home => Self::First,
            KeyCode::End => Self::Last,
        }
    }

    pub fn apply<K: NavKey>(self, nav: &mut Navigator<K>, now_ms: u64) -> bool {
        match self {
            Self::Next => nav.next(now_ms),
            Self::Previous => nav.previous(now_ms),
            Self::First => nav.first(now_ms),
            Self::Last => nav.last(now_ms),
        }
    }
}

/// Dispatches a pressed navigation key.
///
/// Returns `true` when the key was handled; hosts stop event propagation exactly for
/// handled keys. A key is handled even when the resulting navigation is a no-op (e.g. a
/// transition is in flight); with `keyboard_enabled` off, nothing is handled.
pub fn dispatch_key<K: NavKey>(nav: &mut Navigator<K>, key: KeyCode, now_ms: u64) -> bool {
    if !nav.options().keyboard_enabled {
        return false;
    }
    let command = NavCommand::from_key(key);
    fptrace!(?key, ?command, "keyboard dispatch");
    command.apply(nav, now_ms);
    true
}

/// Like [`dispatch_key`], but from a raw DOM-style `event.code` string. Unknown codes are
/// unhandled.
pub fn dispatch_code<K: NavKey>(nav: &mut Navigator<K>, code: &str, now_ms: u64) -> bool {
    match KeyCode::from_code(code) {
        Some(key) => dispatch_key(nav, key, now_ms),
        None => false,
    }
}
