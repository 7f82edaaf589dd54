/// Command dispatch: routes `Command` enum variants to their implementations.
pub mod describe;
pub mod keys;
pub mod layout;
pub mod mask;

use keyglyph::{KeyTranslator, LayoutProvider};

use crate::cli::OutputCtx;
use crate::cli::args::Command;
use crate::errors::CliError;

/// Dispatch a parsed `Command` to its handler.
///
/// # Errors
///
/// Returns `CliError` on any command failure.
pub fn dispatch<P: LayoutProvider>(
    command: &Command,
    translator: &KeyTranslator<P>,
    ctx: &OutputCtx,
) -> Result<(), CliError> {
    match command {
        Command::Describe(args) => describe::run(args, translator, ctx),
        Command::Keys => keys::run(translator, ctx),
        Command::Layout(args) => layout::run(args, translator, ctx),
        Command::Mask(args) => mask::run(args, ctx),
    }
}
