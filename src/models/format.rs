//! Human-readable file size formatting.

/// Units of the base-1024 display scale.
const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Format a byte count for display (e.g. "1.5 KB", "2.37 MB").
///
/// This is a boundary contract shared with the presentation layer: base-1024
/// scale, two-decimal rounding with trailing zeros trimmed, and a literal
/// `0 Bytes` for empty files. Values past the scale are pinned to GB.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut exp = 0;
    let mut scaled = bytes;
    while scaled >= 1024 && exp < UNITS.len() - 1 {
        scaled /= 1024;
        exp += 1;
    }

    let value = bytes as f64 / 1024f64.powi(exp as i32);
    let rendered = format!("{value:.2}");
    let rendered = rendered.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", rendered, UNITS[exp])
}
