//! Input event model for keymash.
//!
//! Events are immutable value types constructed by the input layer and
//! consumed by mappers and policies. Only key-down and joystick-button-down
//! events feed media selection; the remaining kinds exist so the surrounding
//! event loop can route everything through one type.

mod quit;

pub use quit::{QUIT_PHRASE, QuitTracker};

/// The kind of an input occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A key was pressed.
    KeyDown,
    /// A joystick or gamepad button was pressed.
    JoyButtonDown,
    /// The mouse moved.
    MouseMotion,
    /// A mouse button was pressed.
    MouseButtonDown,
    /// A mouse button was released.
    MouseButtonUp,
    /// The surrounding loop was asked to stop.
    Quit,
}

impl EventKind {
    /// Parse the token used for this kind in declarative rule documents.
    pub fn parse_token(s: &str) -> Option<Self> {
        match s {
            "KEYDOWN" => Some(Self::KeyDown),
            "JOYBUTTONDOWN" => Some(Self::JoyButtonDown),
            "MOUSEMOTION" => Some(Self::MouseMotion),
            "MOUSEBUTTONDOWN" => Some(Self::MouseButtonDown),
            "MOUSEBUTTONUP" => Some(Self::MouseButtonUp),
            _ => None,
        }
    }

    /// The token used for this kind in declarative rule documents.
    pub fn token(self) -> &'static str {
        match self {
            Self::KeyDown => "KEYDOWN",
            Self::JoyButtonDown => "JOYBUTTONDOWN",
            Self::MouseMotion => "MOUSEMOTION",
            Self::MouseButtonDown => "MOUSEBUTTONDOWN",
            Self::MouseButtonUp => "MOUSEBUTTONUP",
            Self::Quit => "QUIT",
        }
    }
}

/// One input occurrence.
///
/// `code` is the key code for key events and the button number for joystick
/// events; it is zero for the kinds that carry no code. `ch` is the produced
/// Unicode character, absent for non-printable keys and non-key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    /// What happened.
    pub kind: EventKind,
    /// Key code or button number.
    pub code: u32,
    /// Produced character, if any.
    pub ch: Option<char>,
}

impl InputEvent {
    /// A key press with its key code and optional produced character.
    pub fn key_down(code: u32, ch: Option<char>) -> Self {
        Self {
            kind: EventKind::KeyDown,
            code,
            ch,
        }
    }

    /// A joystick button press.
    pub fn joy_button_down(button: u32) -> Self {
        Self {
            kind: EventKind::JoyButtonDown,
            code: button,
            ch: None,
        }
    }

    /// A mouse movement.
    pub fn mouse_motion() -> Self {
        Self::plain(EventKind::MouseMotion)
    }

    /// A mouse button press.
    pub fn mouse_button_down() -> Self {
        Self::plain(EventKind::MouseButtonDown)
    }

    /// A mouse button release.
    pub fn mouse_button_up() -> Self {
        Self::plain(EventKind::MouseButtonUp)
    }

    /// A quit request.
    pub fn quit() -> Self {
        Self::plain(EventKind::Quit)
    }

    /// An event of `kind` with no code and no character.
    fn plain(kind: EventKind) -> Self {
        Self {
            kind,
            code: 0,
            ch: None,
        }
    }

    /// Whether this event feeds media selection.
    pub fn selects_media(&self) -> bool {
        matches!(self.kind, EventKind::KeyDown | EventKind::JoyButtonDown)
    }

    /// The produced character, if any.
    pub fn character(&self) -> Option<char> {
        self.ch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_tokens_round_trip() {
        for kind in [
            EventKind::KeyDown,
            EventKind::JoyButtonDown,
            EventKind::MouseMotion,
            EventKind::MouseButtonDown,
            EventKind::MouseButtonUp,
        ] {
            assert_eq!(EventKind::parse_token(kind.token()), Some(kind));
        }
        assert_eq!(EventKind::parse_token("KEYUP"), None);
        // QUIT never appears in rule documents.
        assert_eq!(EventKind::parse_token("QUIT"), None);
    }

    #[test]
    fn only_key_and_joystick_select_media() {
        assert!(InputEvent::key_down(97, Some('a')).selects_media());
        assert!(InputEvent::joy_button_down(2).selects_media());
        assert!(!InputEvent::mouse_motion().selects_media());
        assert!(!InputEvent::mouse_button_down().selects_media());
        assert!(!InputEvent::mouse_button_up().selects_media());
        assert!(!InputEvent::quit().selects_media());
    }
}
