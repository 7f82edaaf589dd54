/// `keys` command: list keys with a fixed glyph.
use keyglyph::{KeyTranslator, LayoutProvider, Resolution, SPECIAL_KEYS, keycode};

use crate::cli::OutputCtx;
use crate::cli::output::write_keys;
use crate::errors::CliError;
use crate::types::{KeyOutput, codepoints};

/// Run `keyglyph keys`.
///
/// # Errors
///
/// Cannot currently fail.
pub fn run<P: LayoutProvider>(
    translator: &KeyTranslator<P>,
    ctx: &OutputCtx,
) -> Result<(), CliError> {
    let mut keys: Vec<KeyOutput> = SPECIAL_KEYS
        .iter()
        .map(|&(code, _)| key_output(code, translator))
        .collect();
    keys.sort_by_key(|k| k.key_code);

    write_keys(&keys, ctx);
    Ok(())
}

/// Resolve one key code into its output record.
#[must_use]
pub fn key_output<P: LayoutProvider>(code: i64, translator: &KeyTranslator<P>) -> KeyOutput {
    key_output_from(code, translator.resolve(code))
}

/// Build the output record for a key code from an existing resolution.
#[must_use]
pub fn key_output_from(code: i64, resolution: Resolution) -> KeyOutput {
    let source = resolution.source().to_owned();
    let reason = match &resolution {
        Resolution::Unresolved(err) => Some(err.to_string()),
        _ => None,
    };
    let glyph = resolution.into_string();
    KeyOutput {
        key_code: code,
        name: keycode::name_of(code),
        codepoints: codepoints(&glyph),
        glyph,
        source,
        reason,
    }
}
