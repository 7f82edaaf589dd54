/// Keyboard shortcut value and its menu-style rendering.
///
/// A [`Shortcut`] is a key code plus four independent modifier flags. It
/// renders the way macOS menus show key equivalents: modifier glyphs in the
/// fixed order ⌃⌥⇧⌘ followed by the upper-cased key glyph, e.g. `"⇧⌘S"`.
use crate::event::KeyEventSource;
use crate::keycode::KeyCode;
use crate::layout::LayoutProvider;
use crate::modifiers::ModifierMask;
use crate::translate::KeyTranslator;

/// An immutable keyboard shortcut.
///
/// Equality and hashing cover all five fields. A changed shortcut is a new
/// value; there are no setters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shortcut {
    key_code: KeyCode,
    shift_down: bool,
    control_down: bool,
    option_down: bool,
    command_down: bool,
}

impl Shortcut {
    /// Build a shortcut. Any key code is accepted; codes that map to nothing
    /// simply render without a key glyph.
    #[must_use]
    pub const fn new(
        key_code: KeyCode,
        shift_down: bool,
        control_down: bool,
        option_down: bool,
        command_down: bool,
    ) -> Self {
        Self {
            key_code,
            shift_down,
            control_down,
            option_down,
            command_down,
        }
    }

    /// Build a shortcut from a key code and a modifier mask.
    #[must_use]
    pub fn with_modifiers(key_code: KeyCode, modifiers: ModifierMask) -> Self {
        Self::new(
            key_code,
            modifiers.contains(ModifierMask::SHIFT),
            modifiers.contains(ModifierMask::CONTROL),
            modifiers.contains(ModifierMask::OPTION),
            modifiers.contains(ModifierMask::COMMAND),
        )
    }

    /// Normalize a key event (UI or system shape) into a shortcut.
    #[must_use]
    pub fn from_event<E: KeyEventSource + ?Sized>(event: &E) -> Self {
        let event = event.to_key_event();
        Self::with_modifiers(event.key_code, event.modifiers)
    }

    #[must_use]
    pub const fn key_code(&self) -> KeyCode {
        self.key_code
    }

    #[must_use]
    pub const fn shift_down(&self) -> bool {
        self.shift_down
    }

    #[must_use]
    pub const fn control_down(&self) -> bool {
        self.control_down
    }

    #[must_use]
    pub const fn option_down(&self) -> bool {
        self.option_down
    }

    #[must_use]
    pub const fn command_down(&self) -> bool {
        self.command_down
    }

    /// The modifier flags as an accelerator mask (`keyEquivalentModifierMask`).
    ///
    /// Every combination is representable, including the empty mask.
    #[must_use]
    pub fn key_equivalent_modifier_mask(&self) -> ModifierMask {
        ModifierMask::from_flags(
            self.shift_down,
            self.control_down,
            self.option_down,
            self.command_down,
        )
    }

    /// Modifier glyphs in menu order: ⌃ ⌥ ⇧ ⌘. Empty when no modifier is set.
    #[must_use]
    pub fn modifier_glyphs(&self) -> String {
        self.key_equivalent_modifier_mask().glyphs()
    }

    /// The key's display string as the translator resolves it (not upper-cased).
    #[must_use]
    pub fn character<P: LayoutProvider>(&self, translator: &KeyTranslator<P>) -> String {
        translator.translate(self.key_code)
    }

    /// Full label: modifier glyphs followed by the upper-cased key glyph.
    ///
    /// Glyphs without a case mapping (arrows, digits, function-key glyphs)
    /// pass through unchanged. An untranslatable key leaves only the
    /// modifiers, e.g. `"⌘"`.
    #[must_use]
    pub fn description<P: LayoutProvider>(&self, translator: &KeyTranslator<P>) -> String {
        self.label(&self.character(translator))
    }

    /// Label for an already resolved key glyph.
    #[must_use]
    pub fn label(&self, character: &str) -> String {
        let mut out = self.modifier_glyphs();
        out.push_str(&character.to_uppercase());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{SystemKeyEvent, UiKeyEvent};
    use crate::keycode::{ANSI_A, ANSI_Q, ANSI_S, ANSI_W, F1, KEYPAD_MINUS, RETURN};
    use crate::layout::{FixedLayout, NoLayout};

    fn us() -> KeyTranslator<FixedLayout> {
        KeyTranslator::new(FixedLayout::us_ansi())
    }

    #[test]
    fn test_glyph_order_all_combinations() {
        for bits in 0u8..16 {
            let shift = bits & 1 != 0;
            let control = bits & 2 != 0;
            let option = bits & 4 != 0;
            let command = bits & 8 != 0;
            let shortcut = Shortcut::new(ANSI_A, shift, control, option, command);

            let mut expected = String::new();
            if control {
                expected.push('⌃');
            }
            if option {
                expected.push('⌥');
            }
            if shift {
                expected.push('⇧');
            }
            if command {
                expected.push('⌘');
            }
            assert_eq!(shortcut.modifier_glyphs(), expected, "bits {bits:04b}");
        }
    }

    #[test]
    fn test_shift_command_order() {
        let shortcut = Shortcut::new(ANSI_S, true, false, false, true);
        assert_eq!(shortcut.modifier_glyphs(), "⇧⌘");
    }

    #[test]
    fn test_all_modifiers_order() {
        let shortcut = Shortcut::new(ANSI_S, true, true, true, true);
        assert_eq!(shortcut.modifier_glyphs(), "⌃⌥⇧⌘");
    }

    #[test]
    fn test_description_return_command() {
        let shortcut = Shortcut::new(RETURN, false, false, false, true);
        assert_eq!(shortcut.description(&us()), "⌘↩");
    }

    #[test]
    fn test_description_layout_key_no_modifiers() {
        let t = us();
        let shortcut = Shortcut::new(ANSI_A, false, false, false, false);
        assert_eq!(shortcut.description(&t), t.translate(ANSI_A).to_uppercase());
        assert_eq!(shortcut.description(&t), "A");
        assert_eq!(shortcut.character(&t), "a");
    }

    #[test]
    fn test_description_menu_examples() {
        let t = us();
        assert_eq!(Shortcut::new(ANSI_S, true, false, false, true).description(&t), "⇧⌘S");
        assert_eq!(Shortcut::new(ANSI_W, false, false, true, true).description(&t), "⌥⌘W");
        assert_eq!(Shortcut::new(ANSI_Q, false, true, false, false).description(&t), "⌃Q");
        assert_eq!(Shortcut::new(KEYPAD_MINUS, false, false, false, true).description(&t), "⌘–");
        assert_eq!(Shortcut::new(F1, false, false, false, false).description(&t), "\u{F704}");
    }

    #[test]
    fn test_description_untranslatable_keeps_modifiers() {
        let t = KeyTranslator::new(NoLayout);
        let shortcut = Shortcut::new(ANSI_A, false, false, false, true);
        assert_eq!(shortcut.description(&t), "⌘");
    }

    #[test]
    fn test_description_non_alphabetic_passes_through() {
        let layout = FixedLayout::new().with_key(ANSI_A, "ß").with_key(ANSI_S, "1");
        let t = KeyTranslator::new(layout);
        assert_eq!(Shortcut::new(ANSI_S, false, false, false, true).description(&t), "⌘1");
        // Full Unicode upper-casing: ß becomes SS.
        assert_eq!(Shortcut::new(ANSI_A, false, false, false, false).description(&t), "SS");
    }

    #[test]
    fn test_label_matches_description() {
        let t = us();
        let shortcut = Shortcut::new(ANSI_S, true, false, false, true);
        assert_eq!(shortcut.label("s"), "⇧⌘S");
        assert_eq!(shortcut.label(""), "⇧⌘");
        assert_eq!(shortcut.label(&shortcut.character(&t)), shortcut.description(&t));
    }

    #[test]
    fn test_equality_is_structural() {
        let base = Shortcut::new(ANSI_A, true, false, true, false);
        assert_eq!(base, base);
        assert_eq!(base, Shortcut::new(ANSI_A, true, false, true, false));
        assert_eq!(
            Shortcut::new(ANSI_A, true, false, true, false),
            base,
            "symmetric"
        );

        let variants = [
            Shortcut::new(ANSI_S, true, false, true, false),
            Shortcut::new(ANSI_A, false, false, true, false),
            Shortcut::new(ANSI_A, true, true, true, false),
            Shortcut::new(ANSI_A, true, false, false, false),
            Shortcut::new(ANSI_A, true, false, true, true),
        ];
        for other in variants {
            assert_ne!(base, other);
            assert_ne!(other, base);
        }
    }

    #[test]
    fn test_event_variants_produce_equal_shortcuts() {
        let flags = (ModifierMask::SHIFT | ModifierMask::COMMAND).bits() | (1 << 16);
        let ui = UiKeyEvent {
            key_code: 1,
            modifier_flags: flags,
        };
        let system = SystemKeyEvent {
            keycode: 1,
            flags,
        };
        let a = Shortcut::from_event(&ui);
        let b = Shortcut::from_event(&system);
        assert_eq!(a, b);
        assert_eq!(a, Shortcut::new(ANSI_S, true, false, false, true));
    }

    #[test]
    fn test_modifier_mask_round_trip() {
        for bits in 0u64..16 {
            let mask = ModifierMask::from_bits_truncate(bits << 17);
            let shortcut = Shortcut::with_modifiers(ANSI_A, mask);
            assert_eq!(shortcut.key_equivalent_modifier_mask(), mask);
        }
        assert!(
            Shortcut::new(ANSI_A, false, false, false, false)
                .key_equivalent_modifier_mask()
                .is_empty()
        );
    }

    #[test]
    fn test_accessors() {
        let shortcut = Shortcut::new(RETURN, true, false, true, false);
        assert_eq!(shortcut.key_code(), RETURN);
        assert!(shortcut.shift_down());
        assert!(!shortcut.control_down());
        assert!(shortcut.option_down());
        assert!(!shortcut.command_down());
    }
}
