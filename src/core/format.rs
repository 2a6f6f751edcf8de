// src/core/format.rs

use crate::core::error::{Error, Result};
use serde_json::{Map, Value};
use std::borrow::Cow;

/// Ordered mapping of fact name to value, as produced by a single probe.
pub type FactSet = Map<String, Value>;

/// Width of the key column in rendered blocks.
pub const KEY_WIDTH: usize = 16;

/// Separator printed under every category name.
pub const SEPARATOR: &str = "------";

/// Value used for facts whose provider is not available on this host.
pub const NOT_AVAILABLE: &str = "N/A";

/// Value used for facts the platform does not report.
pub const UNKNOWN: &str = "unknown";

pub const SIZE_UNITS: [&str; 9] = ["bytes", "kB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Formats a byte count as a human readable size.
///
/// `binary` selects 1024 as the base instead of 1000. With `strip`, trailing
/// zero decimals and a dangling decimal point are removed ("2.50 GB" becomes
/// "2.5 GB"). Quotients are printed with two decimals, ties rounding to even.
pub fn format_size(num_bytes: u128, binary: bool, strip: bool) -> String {
    let base: u128 = if binary { 1024 } else { 1000 };

    for (index, unit) in SIZE_UNITS.iter().enumerate().rev() {
        let divider = base.pow(index as u32);
        if num_bytes >= divider {
            let quotient = num_bytes as f64 / divider as f64;
            let mut formatted = format!("{:.2}", quotient);
            if strip {
                formatted = formatted
                    .trim_end_matches('0')
                    .trim_end_matches('.')
                    .to_string();
            }
            return format!("{} {}", formatted, unit);
        }
    }

    // Only reachable for zero.
    format!("0 {}", SIZE_UNITS[0])
}

/// Signed entry point for callers holding counts that may be negative.
pub fn try_format_size(num_bytes: i128, binary: bool, strip: bool) -> Result<String> {
    let num_bytes = u128::try_from(num_bytes).map_err(|_| Error::NegativeSize(num_bytes))?;
    Ok(format_size(num_bytes, binary, strip))
}

/// Text form of a fact value: strings bare, everything else as JSON.
pub fn display_value(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        other => Cow::Owned(other.to_string()),
    }
}

pub fn format_line(key: &str, value: &Value) -> String {
    format!(
        "{:<width$.width$} : {}",
        key,
        display_value(value),
        width = KEY_WIDTH
    )
}

/// Renders one category as a block: name, separator, one aligned line per
/// fact, and a trailing blank line.
pub fn render_block(category: &str, facts: &FactSet) -> String {
    let mut lines = Vec::with_capacity(facts.len() + 3);
    lines.push(category.to_string());
    lines.push(SEPARATOR.to_string());
    for (key, value) in facts {
        lines.push(format_line(key, value));
    }
    lines.push("\n".to_string());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn zero_is_bytes() {
        assert_eq!(format_size(0, false, true), "0 bytes");
        assert_eq!(format_size(0, true, false), "0 bytes");
    }

    #[test]
    fn one_unit_in_each_base() {
        assert_eq!(format_size(1024, true, true), "1 kB");
        assert_eq!(format_size(1000, false, true), "1 kB");
        assert_eq!(format_size(1000, true, true), "1000 bytes");
    }

    #[test]
    fn strip_controls_trailing_zeros() {
        assert_eq!(format_size(1536, true, false), "1.50 kB");
        assert_eq!(format_size(1536, true, true), "1.5 kB");
        assert_eq!(format_size(2_000_000_000, false, false), "2.00 GB");
        assert_eq!(format_size(2_000_000_000, false, true), "2 GB");
    }

    #[test]
    fn small_counts_stay_in_bytes() {
        assert_eq!(format_size(1, false, false), "1.00 bytes");
        assert_eq!(format_size(999, false, true), "999 bytes");
    }

    #[test]
    fn largest_unit_is_reachable() {
        let yib = 1024u128.pow(8);
        assert_eq!(format_size(yib, true, true), "1 YB");
        assert_eq!(format_size(yib * 3, true, true), "3 YB");
    }

    #[test]
    fn negative_counts_are_rejected() {
        assert!(matches!(
            try_format_size(-1, true, true),
            Err(Error::NegativeSize(-1))
        ));
        assert_eq!(try_format_size(1536, true, true).unwrap(), "1.5 kB");
    }

    #[test]
    fn lines_are_padded_to_the_key_column() {
        assert_eq!(format_line("os", &json!("Linux")), "os               : Linux");
        assert_eq!(
            format_line("processor_cores", &json!(8)),
            "processor_cores  : 8"
        );
    }

    #[test]
    fn long_keys_are_truncated() {
        let line = format_line("a_key_that_is_far_too_long", &json!("v"));
        assert_eq!(line, "a_key_that_is_fa : v");
    }

    #[test]
    fn block_layout() {
        let mut facts = FactSet::new();
        facts.insert("version".into(), json!("1.82.0"));
        facts.insert("compiler".into(), json!("rustc 1.82.0"));

        let block = render_block("Runtime", &facts);
        assert_eq!(
            block,
            "Runtime\n------\nversion          : 1.82.0\ncompiler         : rustc 1.82.0\n\n"
        );
    }
}
