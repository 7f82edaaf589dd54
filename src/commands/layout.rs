/// `layout` command: translate a range of key codes through the current layout.
use keyglyph::{KeyTranslator, LayoutError, LayoutProvider, Resolution};

use crate::cli::OutputCtx;
use crate::cli::args::LayoutArgs;
use crate::cli::output::write_keys;
use crate::commands::keys::key_output_from;
use crate::errors::CliError;

/// Run `keyglyph layout`.
///
/// # Errors
///
/// Returns `CliError::InvalidRange` if `--from` is greater than `--to`, and
/// `CliError::Layout` under `--strict` when the layout service is unavailable.
pub fn run<P: LayoutProvider>(
    args: &LayoutArgs,
    translator: &KeyTranslator<P>,
    ctx: &OutputCtx,
) -> Result<(), CliError> {
    if args.from > args.to {
        return Err(CliError::InvalidRange {
            from: args.from,
            to: args.to,
        });
    }

    let _t_translate = ctx.timer("translate_range");
    let mut keys = Vec::new();
    for code in args.from..=args.to {
        let resolution = translator.resolve(code);
        if args.strict {
            check_layout_service(&resolution)?;
        }
        let key = key_output_from(code, resolution);
        if args.resolved_only && key.glyph.is_empty() {
            continue;
        }
        keys.push(key);
    }
    drop(_t_translate);

    write_keys(&keys, ctx);
    Ok(())
}

/// Fail when a key was unresolved because no layout could be read at all.
fn check_layout_service(resolution: &Resolution) -> Result<(), CliError> {
    match resolution {
        Resolution::Unresolved(
            err @ (LayoutError::NoAsciiCapableLayout | LayoutError::LayoutDataUnavailable),
        ) => Err(CliError::Layout(err.clone())),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    use crate::cli::OutputFormat;
    use keyglyph::{FixedLayout, KeyCode, NoLayout};

    struct CountingLayout {
        inner: FixedLayout,
        calls: Cell<usize>,
    }

    impl LayoutProvider for CountingLayout {
        fn translate(&self, key_code: KeyCode) -> Result<Vec<u16>, LayoutError> {
            self.calls.set(self.calls.get() + 1);
            self.inner.translate(key_code)
        }
    }

    fn args(from: i64, to: i64, strict: bool) -> LayoutArgs {
        LayoutArgs {
            from,
            to,
            resolved_only: true,
            strict,
        }
    }

    fn ctx() -> OutputCtx {
        OutputCtx::new(OutputFormat::Compact, false, true, false)
    }

    #[test]
    fn test_invalid_range() {
        let t = KeyTranslator::new(FixedLayout::us_ansi());
        let err = run(&args(10, 1, false), &t, &ctx()).unwrap_err();
        assert!(matches!(err, CliError::InvalidRange { from: 10, to: 1 }));
    }

    #[test]
    fn test_strict_without_layout_fails() {
        let t = KeyTranslator::new(NoLayout);
        let err = run(&args(0, 3, true), &t, &ctx()).unwrap_err();
        assert!(matches!(err, CliError::Layout(LayoutError::NoAsciiCapableLayout)));
    }

    #[test]
    fn test_strict_with_layout_succeeds() {
        // Unmapped keys fail with EmptyOutput, which strict mode tolerates.
        let t = KeyTranslator::new(FixedLayout::us_ansi());
        assert!(run(&args(0, 127, true), &t, &ctx()).is_ok());
    }

    #[test]
    fn test_lenient_without_layout_succeeds() {
        let t = KeyTranslator::new(NoLayout);
        assert!(run(&args(0, 3, false), &t, &ctx()).is_ok());
    }

    #[test]
    fn test_strict_resolves_each_key_once() {
        let layout = CountingLayout {
            inner: FixedLayout::us_ansi(),
            calls: Cell::new(0),
        };
        let t = KeyTranslator::new(&layout);
        // 0..=15 holds no fixed-glyph keys, so every code reaches the layout.
        assert!(run(&args(0, 15, true), &t, &ctx()).is_ok());
        assert_eq!(layout.calls.get(), 16);
    }
}
