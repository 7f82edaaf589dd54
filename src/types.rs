/// Shared serializable output types for all commands.
///
/// These are what gets written to stdout, either as JSON or as a table.
use serde::{Deserialize, Serialize};

use crate::errors::CliError;

/// A rendered shortcut.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortcutOutput {
    /// Full label (e.g., "⇧⌘S").
    pub description: String,
    /// Modifier glyphs only (e.g., "⇧⌘").
    pub modifiers: String,
    /// Translated key string before upper-casing; empty if untranslatable.
    pub character: String,
    /// Physical key code.
    pub key_code: i64,
    /// Which source resolved the key: "special", "layout" or "none".
    pub source: String,
    /// Accelerator modifier mask (`keyEquivalentModifierMask`) as hex.
    pub modifier_mask: String,
}

/// One key code and its display string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyOutput {
    /// Physical key code.
    pub key_code: i64,
    /// Well-known key name, if any (e.g., "page-up").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Display string; empty if untranslatable.
    pub glyph: String,
    /// Unicode code points of the glyph (e.g., "U+21A9").
    pub codepoints: String,
    /// "special", "layout" or "none".
    pub source: String,
    /// Why the key did not resolve, when it did not.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// A modifier mask.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaskOutput {
    /// Mask as hex (e.g., "0x120000").
    pub mask: String,
    /// Mask as an integer.
    pub bits: u64,
    /// Modifier glyphs in menu order.
    pub glyphs: String,
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (snake_case).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorOutput {
    /// Construct from a `CliError`.
    #[must_use]
    pub fn from_cli_error(err: &CliError) -> Self {
        let code = match err {
            CliError::UnknownKey { .. } => "unknown_key",
            CliError::InvalidRange { .. } => "invalid_range",
            CliError::Layout(_) => "layout_error",
        };
        Self {
            ok: false,
            error: ErrorDetail {
                code: code.to_owned(),
                message: err.to_string(),
            },
        }
    }
}

/// Format a string's code points as `U+XXXX` separated by spaces.
#[must_use]
pub fn codepoints(s: &str) -> String {
    s.chars()
        .map(|c| format!("U+{:04X}", u32::from(c)))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codepoints() {
        assert_eq!(codepoints("↩"), "U+21A9");
        assert_eq!(codepoints(" "), "U+0020");
        assert_eq!(codepoints(""), "");
        assert_eq!(codepoints("\u{F704}"), "U+F704");
    }

    #[test]
    fn test_error_envelope() {
        let err = CliError::UnknownKey {
            name: "hyper".to_owned(),
        };
        let out = ErrorOutput::from_cli_error(&err);
        assert!(!out.ok);
        assert_eq!(out.error.code, "unknown_key");
        assert!(out.error.message.contains("hyper"));
    }
}
