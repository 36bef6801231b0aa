//! Human-readable formatting helpers used by the metadata row.

use base64::{engine::general_purpose, Engine as _};

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Formats a byte count with binary (1024-based) units, from bytes up to terabytes.
///
/// The number is rounded to two decimals and trailing zeros are dropped, so
/// `1536` becomes `"1.5 KB"` and `1024` becomes `"1 KB"`. Counts past the terabyte
/// range stay in `TB`.
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut unit = 0;
    let mut scaled = bytes;
    while scaled >= 1024 && unit < UNITS.len() - 1 {
        scaled /= 1024;
        unit += 1;
    }

    let value = bytes as f64 / 1024f64.powi(unit as i32);
    let rounded = format!("{:.2}", value);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, UNITS[unit])
}

/// Builds a `data:` URL that an `<img>` element can render directly.
///
/// An empty MIME type falls back to `application/octet-stream`, which browsers still
/// sniff for image content.
pub fn encode_data_url(mime_type: &str, bytes: &[u8]) -> String {
    let mime = if mime_type.is_empty() {
        "application/octet-stream"
    } else {
        mime_type
    };
    format!("data:{};base64,{}", mime, general_purpose::STANDARD.encode(bytes))
}
