use chrono::{DateTime, Local};

/// Format label written into every metadata record. The card does not sniff the
/// actual image type.
pub const FORMAT_PLACEHOLDER: &str = "Image";

/// Facts about the displayed image.
///
/// All fields are optional: a status update can create a record that only carries
/// `last_updated`, and the pixel dimensions are unknown until the `<img>` element has
/// decoded the data URL.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ImageMetadata {
    pub format: Option<String>,
    /// Natural width in pixels.
    pub width: Option<u32>,
    /// Natural height in pixels.
    pub height: Option<u32>,
    /// Size of the selected file in bytes.
    pub size: Option<u64>,
    pub last_updated: Option<DateTime<Local>>,
}

impl ImageMetadata {
    /// Record built when the image element reports a successful decode.
    pub fn decoded(width: u32, height: u32, size: Option<u64>) -> Self {
        Self {
            format: Some(FORMAT_PLACEHOLDER.to_string()),
            width: Some(width),
            height: Some(height),
            size,
            last_updated: Some(Local::now()),
        }
    }

    /// Refreshes `last_updated`, leaving every other field alone.
    pub fn touch(&mut self) {
        self.last_updated = Some(Local::now());
    }

    /// `"WxH"` once both dimensions are known.
    pub fn dimensions(&self) -> Option<String> {
        match (self.width, self.height) {
            (Some(w), Some(h)) => Some(format!("{}x{}", w, h)),
            _ => None,
        }
    }
}
