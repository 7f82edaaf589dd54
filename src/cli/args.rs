/// CLI argument definitions via clap derive.
use clap::{Args, Parser, Subcommand, ValueEnum};

use keyglyph::ModifierMask;

/// keyglyph — render macOS keyboard shortcuts as menu-style glyphs.
#[derive(Debug, Parser)]
#[command(
    name = "keyglyph",
    about = "Render macOS keyboard shortcuts as menu-style glyph strings",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output format. Auto-detects: table when TTY, json when piped.
    #[arg(long, global = true, value_name = "FORMAT", default_value = "auto")]
    pub output: OutputFormat,

    /// Shorthand for --output json.
    #[arg(long, global = true, conflicts_with = "output")]
    pub json: bool,

    /// Omit table headers (useful for awk/cut processing).
    #[arg(long, global = true)]
    pub no_header: bool,

    /// Log layout queries and timings to stderr.
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Auto-detect: table when stdout is a TTY, json when piped.
    #[default]
    Auto,
    /// JSON array or object (pretty-printed).
    Json,
    /// Compact single-line JSON.
    Compact,
    /// Newline-delimited JSON (one object per line).
    Ndjson,
    /// Aligned table with headers (human-readable).
    Table,
    /// Glyph only, one per line.
    Plain,
}

/// All subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render a shortcut label (e.g. "⇧⌘S").
    Describe(DescribeArgs),
    /// List keys with a fixed, layout-independent glyph.
    Keys,
    /// Translate a range of key codes through the current keyboard layout.
    Layout(LayoutArgs),
    /// Print the accelerator modifier mask for a set of modifiers.
    Mask(ModifierArgs),
}

/// Modifier flags shared by `describe` and `mask`.
#[derive(Debug, Clone, Copy, Args)]
pub struct ModifierArgs {
    /// Shift (⇧).
    #[arg(long, short = 's')]
    pub shift: bool,

    /// Control (⌃).
    #[arg(long, short = 'c')]
    pub control: bool,

    /// Option / Alt (⌥).
    #[arg(long, short = 'o', visible_alias = "alt")]
    pub option: bool,

    /// Command (⌘).
    #[arg(long, short = 'm', visible_alias = "cmd")]
    pub command: bool,
}

impl ModifierArgs {
    #[must_use]
    pub fn mask(&self) -> ModifierMask {
        ModifierMask::from_flags(self.shift, self.control, self.option, self.command)
    }
}

/// Arguments for `keyglyph describe`.
#[derive(Debug, Parser)]
pub struct DescribeArgs {
    /// Key code (36, 0x24) or key name (return, f5, keypad-minus).
    pub key: String,

    #[command(flatten)]
    pub modifiers: ModifierArgs,
}

/// Key codes the layout API can address (16-bit).
fn key_code_range() -> clap::builder::RangedI64ValueParser<i64> {
    clap::value_parser!(i64).range(0..=i64::from(u16::MAX))
}

/// Arguments for `keyglyph layout`.
#[derive(Debug, Parser)]
pub struct LayoutArgs {
    /// First key code to translate.
    #[arg(long, value_name = "CODE", default_value = "0", value_parser = key_code_range())]
    pub from: i64,

    /// Last key code to translate (inclusive).
    #[arg(long, value_name = "CODE", default_value = "127", value_parser = key_code_range())]
    pub to: i64,

    /// Hide keys that resolve to nothing.
    #[arg(long)]
    pub resolved_only: bool,

    /// Fail if the keyboard layout service itself is unavailable.
    #[arg(long)]
    pub strict: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_describe() {
        let cli = Cli::try_parse_from(["keyglyph", "describe", "return", "--cmd", "-s"])
            .expect("parse");
        let Command::Describe(args) = cli.command else {
            panic!("expected describe");
        };
        assert_eq!(args.key, "return");
        assert_eq!(args.modifiers.mask(), ModifierMask::COMMAND | ModifierMask::SHIFT);
    }

    #[test]
    fn test_parse_layout_defaults() {
        let cli = Cli::try_parse_from(["keyglyph", "layout"]).expect("parse");
        let Command::Layout(args) = cli.command else {
            panic!("expected layout");
        };
        assert_eq!((args.from, args.to), (0, 127));
        assert!(!args.strict);
    }

    #[test]
    fn test_json_conflicts_with_output() {
        assert!(Cli::try_parse_from(["keyglyph", "--json", "--output", "table", "keys"]).is_err());
    }

    #[test]
    fn test_layout_range_is_bounded() {
        assert!(Cli::try_parse_from(["keyglyph", "layout", "--from=-1"]).is_err());
        assert!(Cli::try_parse_from(["keyglyph", "layout", "--to", "70000"]).is_err());
        let cli = Cli::try_parse_from(["keyglyph", "layout", "--to", "65535"]).expect("parse");
        let Command::Layout(args) = cli.command else {
            panic!("expected layout");
        };
        assert_eq!(args.to, 65535);
    }
}
