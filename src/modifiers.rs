/// Modifier key bit set shared by both macOS event shapes.
///
/// AppKit's `NSEventModifierFlags` and Quartz's `CGEventFlags` agree on the
/// four device-independent modifier bits, so one mask type serves for reading
/// events and for handing a shortcut to an accelerator API (e.g.
/// `NSMenuItem.keyEquivalentModifierMask`).
use bitflags::bitflags;

bitflags! {
    /// The four accelerator modifiers, at their AppKit / Quartz bit positions.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ModifierMask: u64 {
        const SHIFT = 1 << 17;
        const CONTROL = 1 << 18;
        const OPTION = 1 << 19;
        const COMMAND = 1 << 20;
    }
}

/// Display order used by macOS menus: control, option, shift, command.
pub const GLYPH_ORDER: [(ModifierMask, char); 4] = [
    (ModifierMask::CONTROL, '⌃'),
    (ModifierMask::OPTION, '⌥'),
    (ModifierMask::SHIFT, '⇧'),
    (ModifierMask::COMMAND, '⌘'),
];

impl ModifierMask {
    /// Keep only the four modifier bits of a raw event flag word.
    ///
    /// Raw flags also carry caps lock, numeric pad, function and
    /// device-dependent bits; those are dropped.
    #[must_use]
    pub const fn from_raw_flags(raw: u64) -> Self {
        Self::from_bits_truncate(raw)
    }

    /// Build a mask from the four independent booleans.
    #[must_use]
    pub fn from_flags(shift: bool, control: bool, option: bool, command: bool) -> Self {
        let mut mask = Self::empty();
        mask.set(Self::CONTROL, control);
        mask.set(Self::OPTION, option);
        mask.set(Self::SHIFT, shift);
        mask.set(Self::COMMAND, command);
        mask
    }

    /// Render the set modifiers as glyphs in [`GLYPH_ORDER`].
    ///
    /// An empty mask renders as an empty string.
    #[must_use]
    pub fn glyphs(self) -> String {
        let mut out = String::with_capacity(4 * 3);
        for (flag, glyph) in GLYPH_ORDER {
            if self.contains(flag) {
                out.push(glyph);
            }
        }
        out
    }
}
