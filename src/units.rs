// Byte magnitude formatting and fixed-width padding helpers

/// Unit suffixes from bytes up to terabytes.
const SUFFIXES: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Formats a byte quantity as a human-readable magnitude.
///
/// `base` selects the conversion step: 1000 for SI units, 1024 for binary.
/// Zero renders as the literal `"0 B"`. The magnitude index is clamped to the
/// suffix table, so sub-byte fractions stay in `B` and astronomically large
/// values stay in `TB` instead of indexing out of range.
pub fn format_bytes(bytes: f64, base: u64) -> String {
    if bytes == 0.0 {
        return "0 B".to_string();
    }

    let base = base as f64;
    let exponent = (bytes.ln() / base.ln()).floor();
    let index = (exponent.max(0.0) as usize).min(SUFFIXES.len() - 1);
    let scaled = bytes / base.powi(index as i32);

    format!("{:.2} {}", scaled, SUFFIXES[index])
}

/// Pads `input` on the left with `fill` until it is `width` columns wide.
///
/// Strings already at or past `width` are returned unchanged.
pub fn pad_left(input: &str, width: usize, fill: char) -> String {
    let deficit = width.saturating_sub(input.chars().count());
    let mut padded = String::with_capacity(width.max(input.len()));
    for _ in 0..deficit {
        padded.push(fill);
    }
    padded.push_str(input);
    padded
}

/// Pads `input` on the right with `fill` until it is `width` columns wide.
pub fn pad_right(input: &str, width: usize, fill: char) -> String {
    let deficit = width.saturating_sub(input.chars().count());
    let mut padded = String::with_capacity(width.max(input.len()));
    padded.push_str(input);
    for _ in 0..deficit {
        padded.push(fill);
    }
    padded
}
