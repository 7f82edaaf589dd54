/// Output formatting: JSON, table, plain modes. TTY detection.
use std::io::{IsTerminal, Write};

use comfy_table::{Cell, Table, presets::UTF8_BORDERS_ONLY};
use serde::Serialize;

use super::args::OutputFormat;
use crate::types::{ErrorOutput, KeyOutput, MaskOutput, ShortcutOutput};

/// Resolve the effective output format, handling `--json` flag and TTY auto-detection.
#[must_use]
pub fn resolve_format(fmt: OutputFormat, json_flag: bool) -> OutputFormat {
    if json_flag {
        return OutputFormat::Json;
    }
    if fmt == OutputFormat::Auto {
        if std::io::stdout().is_terminal() {
            OutputFormat::Table
        } else {
            OutputFormat::Json
        }
    } else {
        fmt
    }
}

/// Output context passed to all formatters.
pub struct OutputCtx {
    pub format: OutputFormat,
    pub no_header: bool,
    /// When true, log phase timings.
    pub debug: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(fmt: OutputFormat, json_flag: bool, no_header: bool, debug: bool) -> Self {
        Self {
            format: resolve_format(fmt, json_flag),
            no_header,
            debug,
        }
    }

    /// Start a named debug timer. Logs elapsed time on drop only when `--debug` is set.
    #[must_use]
    pub fn timer(&self, label: &'static str) -> DebugTimer {
        DebugTimer::new(label, self.debug)
    }
}

// --- Shortcut ---

/// Write a rendered shortcut to stdout.
pub fn write_shortcut(shortcut: &ShortcutOutput, ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(shortcut),
        OutputFormat::Compact => print_compact_json(shortcut),
        OutputFormat::Ndjson => print_ndjson(std::slice::from_ref(shortcut)),
        OutputFormat::Plain => println!("{}", shortcut.description),
        OutputFormat::Table | OutputFormat::Auto => {
            let mut table = Table::new();
            table.load_preset(UTF8_BORDERS_ONLY);
            if !ctx.no_header {
                table.set_header(["SHORTCUT", "MODIFIERS", "KEY", "CODE", "SOURCE", "MASK"]);
            }
            table.add_row([
                shortcut.description.as_str(),
                shortcut.modifiers.as_str(),
                shortcut.character.as_str(),
                &shortcut.key_code.to_string(),
                shortcut.source.as_str(),
                shortcut.modifier_mask.as_str(),
            ]);
            println!("{table}");
        }
    }
}

// --- Keys ---

/// Write a list of keys to stdout.
pub fn write_keys(keys: &[KeyOutput], ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(keys),
        OutputFormat::Compact => print_compact_json(keys),
        OutputFormat::Ndjson => print_ndjson(keys),
        OutputFormat::Plain => {
            for key in keys {
                println!("{}\t{}", key.key_code, key.glyph);
            }
        }
        OutputFormat::Table | OutputFormat::Auto => write_keys_table(keys, ctx),
    }
}

fn write_keys_table(keys: &[KeyOutput], ctx: &OutputCtx) {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);

    let show_reason = keys.iter().any(|k| k.reason.is_some());
    let mut headers = vec![
        Cell::new("CODE"),
        Cell::new("NAME"),
        Cell::new("GLYPH"),
        Cell::new("CODEPOINTS"),
        Cell::new("SOURCE"),
    ];
    if show_reason {
        headers.push(Cell::new("REASON"));
    }
    if !ctx.no_header {
        table.set_header(headers);
    }

    for key in keys {
        let mut row = vec![
            Cell::new(key.key_code),
            Cell::new(key.name.as_deref().unwrap_or("")),
            Cell::new(&key.glyph),
            Cell::new(&key.codepoints),
            Cell::new(&key.source),
        ];
        if show_reason {
            row.push(Cell::new(key.reason.as_deref().unwrap_or("")));
        }
        table.add_row(row);
    }

    println!("{table}");
}

// --- Mask ---

/// Write a modifier mask to stdout.
pub fn write_mask(mask: &MaskOutput, ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(mask),
        OutputFormat::Compact => print_compact_json(mask),
        OutputFormat::Ndjson => print_ndjson(std::slice::from_ref(mask)),
        _ => println!("{}\t{}", mask.mask, mask.glyphs),
    }
}

// --- Error output ---

/// Write a structured error to stderr.
pub fn write_error(err: &ErrorOutput, format: OutputFormat, json_flag: bool) {
    let fmt = resolve_format(format, json_flag);
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    match fmt {
        OutputFormat::Json | OutputFormat::Compact | OutputFormat::Ndjson => {
            let s = serde_json::to_string_pretty(err).unwrap_or_default();
            let _ = writeln!(out, "{s}");
        }
        _ => {
            let _ = writeln!(out, "Error: {}", err.error.message);
        }
    }
}

// --- Debug timer ---

/// A RAII timer that logs elapsed milliseconds at debug level on drop.
///
/// Created via [`OutputCtx::timer`]. Does nothing when `debug` is false.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
    active: bool,
}

impl DebugTimer {
    #[must_use]
    fn new(label: &'static str, active: bool) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
            active,
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        if self.active {
            let ms = self.start.elapsed().as_secs_f64() * 1000.0;
            tracing::debug!(phase = self.label, elapsed_ms = ms, "timing");
        }
    }
}

// --- Generic JSON helpers ---

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => tracing::error!(error = %e, "JSON serialization error"),
    }
}

fn print_compact_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string(value) {
        Ok(s) => println!("{s}"),
        Err(e) => tracing::error!(error = %e, "JSON serialization error"),
    }
}

fn print_ndjson<T: Serialize>(values: &[T]) {
    for v in values {
        match serde_json::to_string(v) {
            Ok(s) => println!("{s}"),
            Err(e) => tracing::error!(error = %e, "JSON serialization error"),
        }
    }
}
