//! Small presentation helpers for `view.rs`. Kept free of DOM access so they can be
//! tested natively.

use image_card_common::format::format_bytes;
use image_card_common::model::metadata::ImageMetadata;
use image_card_common::StatusKind;

/// Material icon name for a status classification.
pub fn status_icon(kind: StatusKind) -> &'static str {
    match kind {
        StatusKind::Neutral => "info",
        StatusKind::Success => "check_circle",
        StatusKind::Error => "error",
    }
}

pub fn status_color(kind: StatusKind) -> &'static str {
    match kind {
        StatusKind::Neutral => "#616161",
        StatusKind::Success => "#2e7d32",
        StatusKind::Error => "#d32f2f",
    }
}

/// `HH:MM:SS` of the last metadata update, or a dash when there is none.
pub fn last_updated_text(metadata: Option<&ImageMetadata>) -> String {
    metadata
        .and_then(|m| m.last_updated)
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Entries of the metadata row, in display order.
///
/// `metadata` must describe the selected file's own image; format and dimensions are
/// skipped while it is `None`. The size always comes from the file.
pub fn metadata_entries(
    metadata: Option<&ImageMetadata>,
    file_name: &str,
    file_size: u64,
) -> Vec<(&'static str, String)> {
    let mut entries = vec![("Name", file_name.to_string())];
    if let Some(format) = metadata.and_then(|m| m.format.clone()) {
        entries.push(("Format", format));
    }
    if let Some(dimensions) = metadata.and_then(ImageMetadata::dimensions) {
        entries.push(("Dimensions", dimensions));
    }
    entries.push(("Size", format_bytes(file_size)));
    entries
}
