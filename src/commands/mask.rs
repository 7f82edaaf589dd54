/// `mask` command: accelerator modifier mask for a set of modifiers.
use crate::cli::OutputCtx;
use crate::cli::args::ModifierArgs;
use crate::cli::output::write_mask;
use crate::errors::CliError;
use crate::types::MaskOutput;

/// Run `keyglyph mask`.
///
/// # Errors
///
/// Cannot currently fail.
pub fn run(args: &ModifierArgs, ctx: &OutputCtx) -> Result<(), CliError> {
    let mask = args.mask();
    let output = MaskOutput {
        mask: format!("{:#x}", mask.bits()),
        bits: mask.bits(),
        glyphs: mask.glyphs(),
    };
    write_mask(&output, ctx);
    Ok(())
}
