/// Errors from the command layer.
use thiserror::Error;

use keyglyph::LayoutError;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// The key argument is neither a number nor a known key name.
    #[error("Unknown key '{name}' (use a key code like 36 or 0x24, or a name like return, f5, keypad-minus)")]
    UnknownKey {
        /// The key argument as given.
        name: String,
    },

    /// `--from` is greater than `--to`.
    #[error("Invalid key code range {from}..={to}")]
    InvalidRange {
        /// Range start.
        from: i64,
        /// Range end.
        to: i64,
    },

    /// The layout service failed where the command needs it (`layout --strict`).
    #[error("Keyboard layout error: {0}")]
    Layout(#[from] LayoutError),
}

impl CliError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::UnknownKey { .. } | Self::InvalidRange { .. } => 4,
            Self::Layout(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            CliError::UnknownKey {
                name: "x".to_owned()
            }
            .exit_code(),
            4
        );
        assert_eq!(CliError::InvalidRange { from: 5, to: 1 }.exit_code(), 4);
        assert_eq!(CliError::from(LayoutError::NoAsciiCapableLayout).exit_code(), 1);
    }
}
