/// `describe` command: render a shortcut label.
use keyglyph::{KeyTranslator, LayoutProvider, Shortcut, keycode};

use crate::cli::OutputCtx;
use crate::cli::args::DescribeArgs;
use crate::cli::output::write_shortcut;
use crate::errors::CliError;
use crate::types::ShortcutOutput;

/// Run `keyglyph describe`.
///
/// # Errors
///
/// Returns `CliError::UnknownKey` if the key argument cannot be resolved to a key code.
pub fn run<P: LayoutProvider>(
    args: &DescribeArgs,
    translator: &KeyTranslator<P>,
    ctx: &OutputCtx,
) -> Result<(), CliError> {
    let key_code = keycode::from_name(&args.key).ok_or_else(|| CliError::UnknownKey {
        name: args.key.clone(),
    })?;

    let shortcut = Shortcut::with_modifiers(key_code, args.modifiers.mask());

    let _t_render = ctx.timer("render");
    let output = render(&shortcut, translator);
    drop(_t_render);

    write_shortcut(&output, ctx);
    Ok(())
}

/// Render a shortcut into its output record.
///
/// The layout is queried once; the label and the character both come from
/// that single answer.
#[must_use]
pub fn render<P: LayoutProvider>(
    shortcut: &Shortcut,
    translator: &KeyTranslator<P>,
) -> ShortcutOutput {
    let resolution = translator.resolve(shortcut.key_code());
    let source = resolution.source().to_owned();
    let character = resolution.into_string();
    ShortcutOutput {
        description: shortcut.label(&character),
        modifiers: shortcut.modifier_glyphs(),
        character,
        key_code: shortcut.key_code(),
        source,
        modifier_mask: format!("{:#x}", shortcut.key_equivalent_modifier_mask().bits()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    use keyglyph::{FixedLayout, KeyCode, LayoutError};

    /// Answers "a" on the first query and "z" afterwards.
    struct SwitchingLayout {
        calls: Cell<usize>,
    }

    impl LayoutProvider for SwitchingLayout {
        fn translate(&self, _key_code: KeyCode) -> Result<Vec<u16>, LayoutError> {
            let n = self.calls.get();
            self.calls.set(n + 1);
            let text = if n == 0 { "a" } else { "z" };
            Ok(text.encode_utf16().collect())
        }
    }

    #[test]
    fn test_render_layout_key() {
        let t = KeyTranslator::new(FixedLayout::us_ansi());
        let out = render(&Shortcut::new(keycode::ANSI_S, true, false, false, true), &t);
        assert_eq!(out.description, "⇧⌘S");
        assert_eq!(out.modifiers, "⇧⌘");
        assert_eq!(out.character, "s");
        assert_eq!(out.source, "layout");
        assert_eq!(out.modifier_mask, "0x120000");
    }

    #[test]
    fn test_render_unresolved_key() {
        let t = KeyTranslator::new(keyglyph::NoLayout);
        let out = render(&Shortcut::new(keycode::ANSI_A, false, false, false, true), &t);
        assert_eq!(out.description, "⌘");
        assert_eq!(out.character, "");
        assert_eq!(out.source, "none");
    }

    #[test]
    fn test_render_without_modifiers() {
        let t = KeyTranslator::new(keyglyph::NoLayout);
        let out = render(&Shortcut::new(keycode::ESCAPE, false, false, false, false), &t);
        assert_eq!(out.description, "⎋");
        assert_eq!(out.modifier_mask, "0x0");
        assert_eq!(out.source, "special");
    }

    #[test]
    fn test_render_queries_layout_once() {
        let layout = SwitchingLayout {
            calls: Cell::new(0),
        };
        let t = KeyTranslator::new(&layout);
        let out = render(&Shortcut::new(keycode::ANSI_A, false, false, false, true), &t);
        assert_eq!(layout.calls.get(), 1);
        assert_eq!(out.description, "⌘A");
        assert_eq!(out.character, "a");
        assert_eq!(out.source, "layout");
    }
}
