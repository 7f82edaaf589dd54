/// Normalization of raw key events into the canonical `(key code, modifiers)` form.
///
/// Two event shapes reach this crate: a high-level UI event (AppKit style,
/// with `keyCode` and `modifierFlags` accessors) and a low-level system event
/// (Quartz style, where the key code is an integer field and the flags are a
/// raw 64-bit word). Both implement [`KeyEventSource`]; everything downstream
/// only sees a [`KeyEvent`].
use crate::keycode::KeyCode;
use crate::modifiers::ModifierMask;

/// Canonical key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub key_code: KeyCode,
    pub modifiers: ModifierMask,
}

/// Anything that can report a key code and a modifier set.
pub trait KeyEventSource {
    /// The physical key code of the event.
    fn key_code(&self) -> KeyCode;

    /// The modifier keys held during the event.
    fn modifiers(&self) -> ModifierMask;

    /// Collapse into the canonical form.
    fn to_key_event(&self) -> KeyEvent {
        KeyEvent {
            key_code: self.key_code(),
            modifiers: self.modifiers(),
        }
    }
}

impl KeyEventSource for KeyEvent {
    fn key_code(&self) -> KeyCode {
        self.key_code
    }

    fn modifiers(&self) -> ModifierMask {
        self.modifiers
    }
}

/// A UI-level key event snapshot: a 16-bit key code plus a modifier flag word.
///
/// Mirrors the accessors of `NSEvent` so callers holding a copied event (or
/// a test) can normalize it without AppKit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiKeyEvent {
    pub key_code: u16,
    pub modifier_flags: u64,
}

impl KeyEventSource for UiKeyEvent {
    fn key_code(&self) -> KeyCode {
        KeyCode::from(self.key_code)
    }

    fn modifiers(&self) -> ModifierMask {
        ModifierMask::from_raw_flags(self.modifier_flags)
    }
}

/// A system-level key event snapshot: the keycode field plus raw flags.
///
/// Mirrors the shape of a Quartz `CGEvent` as seen from an event tap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemKeyEvent {
    pub keycode: i64,
    pub flags: u64,
}

impl KeyEventSource for SystemKeyEvent {
    fn key_code(&self) -> KeyCode {
        self.keycode
    }

    fn modifiers(&self) -> ModifierMask {
        ModifierMask::from_raw_flags(self.flags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keycode::{ANSI_A, RETURN};

    #[test]
    fn test_ui_event_normalizes() {
        let event = UiKeyEvent {
            key_code: 0x24,
            // caps lock bit must not leak into the modifier set
            modifier_flags: ModifierMask::COMMAND.bits() | (1 << 16),
        };
        assert_eq!(
            event.to_key_event(),
            KeyEvent {
                key_code: RETURN,
                modifiers: ModifierMask::COMMAND,
            }
        );
    }

    #[test]
    fn test_system_event_normalizes() {
        let event = SystemKeyEvent {
            keycode: ANSI_A,
            flags: (ModifierMask::OPTION | ModifierMask::SHIFT).bits(),
        };
        assert_eq!(event.key_code(), ANSI_A);
        assert_eq!(event.modifiers(), ModifierMask::OPTION | ModifierMask::SHIFT);
    }

    #[test]
    fn test_both_shapes_agree() {
        let flags = (ModifierMask::CONTROL | ModifierMask::COMMAND).bits();
        let ui = UiKeyEvent {
            key_code: 12,
            modifier_flags: flags,
        };
        let system = SystemKeyEvent {
            keycode: 12,
            flags,
        };
        assert_eq!(ui.to_key_event(), system.to_key_event());
    }
}
