/// Key code → display string translation.
///
/// Resolution order, first match wins:
/// 1. The fixed table of special keys ([`SPECIAL_KEYS`]): function keys,
///    navigation and editing keys, the numeric keypad and two extra keys.
/// 2. The live keyboard layout, translated with dead keys disabled. Only the
///    first produced character is kept.
///
/// Anything that resolves through neither becomes the empty string. The
/// translator never returns an error.
use tracing::{debug, trace};

use crate::keycode::{self, KeyCode};
use crate::layout::{LayoutError, LayoutProvider};

/// Keys whose glyph does not depend on the keyboard layout.
///
/// Function keys use the AppKit private-use glyphs (`NSF1FunctionKey` ..
/// `NSF19FunctionKey`). The keypad minus is an en dash, not a hyphen.
pub const SPECIAL_KEYS: &[(KeyCode, &str)] = &[
    (keycode::F1, "\u{F704}"),
    (keycode::F2, "\u{F705}"),
    (keycode::F3, "\u{F706}"),
    (keycode::F4, "\u{F707}"),
    (keycode::F5, "\u{F708}"),
    (keycode::F6, "\u{F709}"),
    (keycode::F7, "\u{F70A}"),
    (keycode::F8, "\u{F70B}"),
    (keycode::F9, "\u{F70C}"),
    (keycode::F10, "\u{F70D}"),
    (keycode::F11, "\u{F70E}"),
    (keycode::F12, "\u{F70F}"),
    (keycode::F13, "\u{F710}"),
    (keycode::F14, "\u{F711}"),
    (keycode::F15, "\u{F712}"),
    (keycode::F16, "\u{F713}"),
    (keycode::F17, "\u{F714}"),
    (keycode::F18, "\u{F715}"),
    (keycode::F19, "\u{F716}"),
    (keycode::SPACE, "\u{0020}"),
    (keycode::ESCAPE, "\u{238B}"),         // ⎋
    (keycode::DELETE, "\u{232B}"),         // ⌫
    (keycode::FORWARD_DELETE, "\u{2326}"), // ⌦
    (keycode::LEFT_ARROW, "\u{2190}"),     // ←
    (keycode::RIGHT_ARROW, "\u{2192}"),    // →
    (keycode::UP_ARROW, "\u{2191}"),       // ↑
    (keycode::DOWN_ARROW, "\u{2193}"),     // ↓
    (keycode::HELP, "\u{003F}"),           // ?
    (keycode::PAGE_UP, "\u{21DE}"),        // ⇞
    (keycode::PAGE_DOWN, "\u{21DF}"),      // ⇟
    (keycode::TAB, "\u{21E5}"),            // ⇥
    (keycode::RETURN, "\u{21A9}"),         // ↩
    (keycode::KEYPAD_0, "0"),
    (keycode::KEYPAD_1, "1"),
    (keycode::KEYPAD_2, "2"),
    (keycode::KEYPAD_3, "3"),
    (keycode::KEYPAD_4, "4"),
    (keycode::KEYPAD_5, "5"),
    (keycode::KEYPAD_6, "6"),
    (keycode::KEYPAD_7, "7"),
    (keycode::KEYPAD_8, "8"),
    (keycode::KEYPAD_9, "9"),
    (keycode::KEYPAD_DECIMAL, "."),
    (keycode::KEYPAD_MULTIPLY, "*"),
    (keycode::KEYPAD_PLUS, "+"),
    (keycode::KEYPAD_CLEAR, "\u{2327}"), // ⌧
    (keycode::KEYPAD_DIVIDE, "/"),
    (keycode::KEYPAD_ENTER, "\u{2305}"), // ⌅
    (keycode::KEYPAD_MINUS, "\u{2013}"), // –
    (keycode::KEYPAD_EQUALS, "="),
    // No documented name; seen on some keyboard hardware variants.
    (keycode::EXTRA_119, "\u{2198}"), // ↘
    (keycode::EXTRA_115, "\u{2196}"), // ↖
];

/// Look up a key in [`SPECIAL_KEYS`].
#[must_use]
pub fn special_key_glyph(key_code: KeyCode) -> Option<&'static str> {
    SPECIAL_KEYS
        .iter()
        .find(|&&(code, _)| code == key_code)
        .map(|&(_, glyph)| glyph)
}

/// First Unicode scalar in a run of UTF-16 units.
///
/// A surrogate pair at the start decodes to one character; an unpaired
/// surrogate yields `None`.
#[must_use]
pub fn first_char(units: &[u16]) -> Option<char> {
    char::decode_utf16(units.iter().copied()).next()?.ok()
}

/// Where a key's display string came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Fixed glyph from [`SPECIAL_KEYS`].
    Special(&'static str),
    /// First character the live layout produced.
    Layout(char),
    /// Neither source produced anything.
    Unresolved(LayoutError),
}

impl Resolution {
    /// The display string: the glyph, the character, or `""`.
    #[must_use]
    pub fn into_string(self) -> String {
        match self {
            Self::Special(glyph) => glyph.to_owned(),
            Self::Layout(c) => c.to_string(),
            Self::Unresolved(_) => String::new(),
        }
    }

    /// Short label for the source, used in CLI output.
    #[must_use]
    pub fn source(&self) -> &'static str {
        match self {
            Self::Special(_) => "special",
            Self::Layout(_) => "layout",
            Self::Unresolved(_) => "none",
        }
    }
}

/// Translates key codes using the fixed table and a [`LayoutProvider`].
///
/// Holds no state of its own, so a shared reference can be used from any
/// number of threads as long as the provider allows it.
#[derive(Debug, Clone, Default)]
pub struct KeyTranslator<P> {
    layout: P,
}

impl<P: LayoutProvider> KeyTranslator<P> {
    #[must_use]
    pub fn new(layout: P) -> Self {
        Self { layout }
    }

    /// The layout provider used for the fallback.
    #[must_use]
    pub fn layout(&self) -> &P {
        &self.layout
    }

    /// Resolve a key code, reporting which source answered.
    #[must_use]
    pub fn resolve(&self, key_code: KeyCode) -> Resolution {
        if let Some(glyph) = special_key_glyph(key_code) {
            trace!(key_code, glyph, "special key");
            return Resolution::Special(glyph);
        }

        let units = match self.layout.translate(key_code) {
            Ok(units) => units,
            Err(err) => {
                debug!(key_code, error = %err, "layout translation failed");
                return Resolution::Unresolved(err);
            }
        };

        match first_char(&units) {
            Some(c) => {
                trace!(key_code, character = %c, "layout key");
                Resolution::Layout(c)
            }
            None => {
                debug!(key_code, ?units, "layout produced no decodable character");
                Resolution::Unresolved(LayoutError::EmptyOutput)
            }
        }
    }

    /// Display string for a key code: at most one character, `""` if unknown.
    #[must_use]
    pub fn translate(&self, key_code: KeyCode) -> String {
        self.resolve(key_code).into_string()
    }
}
