/// macOS virtual key codes (`kVK_*` from Carbon's `Events.h`).
///
/// A key code identifies a *physical* key position, not the character it
/// types. Codes are kept as a signed integer so callers can pass whatever the
/// event source reported; nothing here validates the range.

/// Platform-defined physical key identifier.
pub type KeyCode = i64;

pub const ANSI_A: KeyCode = 0x00;
pub const ANSI_S: KeyCode = 0x01;
pub const ANSI_D: KeyCode = 0x02;
pub const ANSI_Q: KeyCode = 0x0C;
pub const ANSI_W: KeyCode = 0x0D;
pub const ANSI_1: KeyCode = 0x12;
pub const ANSI_LEFT_BRACKET: KeyCode = 0x21;

pub const RETURN: KeyCode = 0x24;
pub const TAB: KeyCode = 0x30;
pub const SPACE: KeyCode = 0x31;
pub const DELETE: KeyCode = 0x33;
pub const ESCAPE: KeyCode = 0x35;
pub const HELP: KeyCode = 0x72;
pub const PAGE_UP: KeyCode = 0x74;
pub const FORWARD_DELETE: KeyCode = 0x75;
pub const PAGE_DOWN: KeyCode = 0x79;
pub const LEFT_ARROW: KeyCode = 0x7B;
pub const RIGHT_ARROW: KeyCode = 0x7C;
pub const DOWN_ARROW: KeyCode = 0x7D;
pub const UP_ARROW: KeyCode = 0x7E;

/// Keys with a fixed glyph but no documented name.
pub const EXTRA_115: KeyCode = 0x73;
pub const EXTRA_119: KeyCode = 0x77;

pub const F1: KeyCode = 0x7A;
pub const F2: KeyCode = 0x78;
pub const F3: KeyCode = 0x63;
pub const F4: KeyCode = 0x76;
pub const F5: KeyCode = 0x60;
pub const F6: KeyCode = 0x61;
pub const F7: KeyCode = 0x62;
pub const F8: KeyCode = 0x64;
pub const F9: KeyCode = 0x65;
pub const F10: KeyCode = 0x6D;
pub const F11: KeyCode = 0x67;
pub const F12: KeyCode = 0x6F;
pub const F13: KeyCode = 0x69;
pub const F14: KeyCode = 0x6B;
pub const F15: KeyCode = 0x71;
pub const F16: KeyCode = 0x6A;
pub const F17: KeyCode = 0x40;
pub const F18: KeyCode = 0x4F;
pub const F19: KeyCode = 0x50;

pub const KEYPAD_DECIMAL: KeyCode = 0x41;
pub const KEYPAD_MULTIPLY: KeyCode = 0x43;
pub const KEYPAD_PLUS: KeyCode = 0x45;
pub const KEYPAD_CLEAR: KeyCode = 0x47;
pub const KEYPAD_DIVIDE: KeyCode = 0x4B;
pub const KEYPAD_ENTER: KeyCode = 0x4C;
pub const KEYPAD_MINUS: KeyCode = 0x4E;
pub const KEYPAD_EQUALS: KeyCode = 0x51;
pub const KEYPAD_0: KeyCode = 0x52;
pub const KEYPAD_1: KeyCode = 0x53;
pub const KEYPAD_2: KeyCode = 0x54;
pub const KEYPAD_3: KeyCode = 0x55;
pub const KEYPAD_4: KeyCode = 0x56;
pub const KEYPAD_5: KeyCode = 0x57;
pub const KEYPAD_6: KeyCode = 0x58;
pub const KEYPAD_7: KeyCode = 0x59;
pub const KEYPAD_8: KeyCode = 0x5B;
pub const KEYPAD_9: KeyCode = 0x5C;

/// Function key codes in F1..F19 order.
pub const FUNCTION_KEYS: [KeyCode; 19] = [
    F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12, F13, F14, F15, F16, F17, F18, F19,
];

/// Keypad digit codes in 0..9 order (the codes are not contiguous: 8 and 9 skip 0x5A).
pub const KEYPAD_DIGITS: [KeyCode; 10] = [
    KEYPAD_0, KEYPAD_1, KEYPAD_2, KEYPAD_3, KEYPAD_4, KEYPAD_5, KEYPAD_6, KEYPAD_7, KEYPAD_8,
    KEYPAD_9,
];

/// Human-readable names for the keys with a fixed glyph, used by the CLI.
///
/// Names are lowercase and hyphenated (`page-up`, `keypad-minus`).
pub const NAMED_KEYS: &[(&str, KeyCode)] = &[
    ("return", RETURN),
    ("tab", TAB),
    ("space", SPACE),
    ("delete", DELETE),
    ("escape", ESCAPE),
    ("help", HELP),
    ("page-up", PAGE_UP),
    ("forward-delete", FORWARD_DELETE),
    ("page-down", PAGE_DOWN),
    ("left", LEFT_ARROW),
    ("right", RIGHT_ARROW),
    ("down", DOWN_ARROW),
    ("up", UP_ARROW),
    ("keypad-decimal", KEYPAD_DECIMAL),
    ("keypad-multiply", KEYPAD_MULTIPLY),
    ("keypad-plus", KEYPAD_PLUS),
    ("keypad-clear", KEYPAD_CLEAR),
    ("keypad-divide", KEYPAD_DIVIDE),
    ("keypad-enter", KEYPAD_ENTER),
    ("keypad-minus", KEYPAD_MINUS),
    ("keypad-equals", KEYPAD_EQUALS),
    ("extra-115", EXTRA_115),
    ("extra-119", EXTRA_119),
];

/// Resolve a key name to its key code.
///
/// Accepts a decimal code (`"36"`), a hex code (`"0x24"`), a name from
/// [`NAMED_KEYS`] (case-insensitive, `_` and `-` interchangeable), `f1`..`f19`,
/// and `keypad-0`..`keypad-9`.
///
/// Returns `None` for anything else.
#[must_use]
pub fn from_name(name: &str) -> Option<KeyCode> {
    let name = name.trim();
    if let Ok(code) = name.parse::<KeyCode>() {
        return Some(code);
    }
    if let Some(hex) = name.strip_prefix("0x").or_else(|| name.strip_prefix("0X")) {
        return KeyCode::from_str_radix(hex, 16).ok();
    }

    let normalized = name.to_ascii_lowercase().replace('_', "-");

    if let Some(n) = normalized.strip_prefix('f') {
        if let Ok(n) = n.parse::<usize>() {
            return n.checked_sub(1).and_then(|i| FUNCTION_KEYS.get(i)).copied();
        }
    }
    if let Some(n) = normalized.strip_prefix("keypad-") {
        if let Ok(n) = n.parse::<usize>() {
            return KEYPAD_DIGITS.get(n).copied();
        }
    }

    NAMED_KEYS
        .iter()
        .find(|(key_name, _)| *key_name == normalized)
        .map(|&(_, code)| code)
}

/// Reverse lookup of [`from_name`] for keys with a well-known name.
#[must_use]
pub fn name_of(code: KeyCode) -> Option<String> {
    if let Some(i) = FUNCTION_KEYS.iter().position(|&c| c == code) {
        return Some(format!("f{}", i + 1));
    }
    if let Some(i) = KEYPAD_DIGITS.iter().position(|&c| c == code) {
        return Some(format!("keypad-{i}"));
    }
    NAMED_KEYS
        .iter()
        .find(|&&(_, c)| c == code)
        .map(|&(name, _)| name.to_owned())
}
