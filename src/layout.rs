/// Keyboard layout collaborator: resolves a physical key to the characters it types.
use std::collections::HashMap;

use thiserror::Error;

use crate::keycode::KeyCode;

/// Raw `OSStatus` returned by Carbon calls.
pub type OsStatus = i32;

/// Typed errors from a layout query.
///
/// None of these ever reach callers of the translator; they exist so a
/// provider can say *why* a key did not resolve, and so that reason can be
/// logged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// No ASCII-capable keyboard layout is currently selected.
    #[error("No ASCII-capable keyboard layout is available")]
    NoAsciiCapableLayout,

    /// The layout exists but exposes no Unicode key layout data.
    #[error("Keyboard layout data is unavailable")]
    LayoutDataUnavailable,

    /// The key code does not fit the layout API's 16-bit key code.
    #[error("Key code {key_code} is outside the range the layout API accepts")]
    KeyCodeOutOfRange {
        /// The rejected key code.
        key_code: KeyCode,
    },

    /// The layout API reported a failure status.
    #[error("Key translation failed (status {status}): {context}")]
    TranslateFailed {
        /// Raw `OSStatus`.
        status: OsStatus,
        /// Which call failed.
        context: String,
    },

    /// The translation succeeded but produced no characters.
    #[error("Key produced no characters")]
    EmptyOutput,
}

/// Map a raw `OSStatus` to `Ok(())` or a typed [`LayoutError`].
///
/// # Errors
///
/// Returns `Err(LayoutError::TranslateFailed)` for any non-zero status.
pub fn check_os_status(status: OsStatus, context: &str) -> Result<(), LayoutError> {
    if status == 0 {
        return Ok(());
    }
    Err(LayoutError::TranslateFailed {
        status,
        context: context.to_owned(),
    })
}

/// The currently active keyboard layout, as seen by the translator.
///
/// Implementations query live state on every call; nothing is cached, so a
/// layout switch between calls is picked up immediately.
pub trait LayoutProvider {
    /// Translate `key_code` with no modifiers applied and dead-key
    /// composition disabled.
    ///
    /// Returns the UTF-16 code units the key produces in display mode.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError` when no layout is available, the code is out of
    /// range, or the layout API fails.
    fn translate(&self, key_code: KeyCode) -> Result<Vec<u16>, LayoutError>;
}

impl<P: LayoutProvider + ?Sized> LayoutProvider for &P {
    fn translate(&self, key_code: KeyCode) -> Result<Vec<u16>, LayoutError> {
        (**self).translate(key_code)
    }
}

/// A provider that never has a layout. Used on hosts without a layout service.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLayout;

impl LayoutProvider for NoLayout {
    fn translate(&self, _key_code: KeyCode) -> Result<Vec<u16>, LayoutError> {
        Err(LayoutError::NoAsciiCapableLayout)
    }
}

/// A layout with canned translations.
///
/// Keys not in the map fail with [`LayoutError::EmptyOutput`], which is how
/// a real layout behaves for a key that types nothing.
#[derive(Debug, Clone, Default)]
pub struct FixedLayout {
    keys: HashMap<KeyCode, Vec<u16>>,
}

impl FixedLayout {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a key producing `text`.
    #[must_use]
    pub fn with_key(mut self, key_code: KeyCode, text: &str) -> Self {
        self.keys.insert(key_code, text.encode_utf16().collect());
        self
    }

    /// Add a key producing raw UTF-16 units (which need not be valid UTF-16).
    #[must_use]
    pub fn with_units(mut self, key_code: KeyCode, units: &[u16]) -> Self {
        self.keys.insert(key_code, units.to_vec());
        self
    }

    /// The US ANSI letter and digit row, enough for most tests.
    #[must_use]
    pub fn us_ansi() -> Self {
        const KEYS: &[(KeyCode, &str)] = &[
            (0x00, "a"),
            (0x01, "s"),
            (0x02, "d"),
            (0x03, "f"),
            (0x04, "h"),
            (0x05, "g"),
            (0x06, "z"),
            (0x07, "x"),
            (0x08, "c"),
            (0x09, "v"),
            (0x0B, "b"),
            (0x0C, "q"),
            (0x0D, "w"),
            (0x0E, "e"),
            (0x0F, "r"),
            (0x10, "y"),
            (0x11, "t"),
            (0x12, "1"),
            (0x13, "2"),
            (0x14, "3"),
            (0x15, "4"),
            (0x16, "6"),
            (0x17, "5"),
            (0x18, "="),
            (0x19, "9"),
            (0x1A, "7"),
            (0x1B, "-"),
            (0x1C, "8"),
            (0x1D, "0"),
            (0x1E, "]"),
            (0x1F, "o"),
            (0x20, "u"),
            (0x21, "["),
            (0x22, "i"),
            (0x23, "p"),
            (0x25, "l"),
            (0x26, "j"),
            (0x27, "'"),
            (0x28, "k"),
            (0x29, ";"),
            (0x2A, "\\"),
            (0x2B, ","),
            (0x2C, "/"),
            (0x2D, "n"),
            (0x2E, "m"),
            (0x2F, "."),
            (0x32, "`"),
        ];
        KEYS.iter()
            .fold(Self::new(), |layout, &(code, text)| layout.with_key(code, text))
    }
}

impl LayoutProvider for FixedLayout {
    fn translate(&self, key_code: KeyCode) -> Result<Vec<u16>, LayoutError> {
        match self.keys.get(&key_code) {
            Some(units) if !units.is_empty() => Ok(units.clone()),
            _ => Err(LayoutError::EmptyOutput),
        }
    }
}
