use crate::model::config::CardConfig;

/// Capability summary shown under the label, e.g. `"Read-only / Live"`.
pub fn subtitle(config: &CardConfig) -> String {
    let parts: Vec<&str> = [
        (config.can_read, "Read-only"),
        (config.can_write, "Writable"),
        (config.can_observe, "Live"),
    ]
    .into_iter()
    .filter_map(|(enabled, text)| enabled.then_some(text))
    .collect();

    if parts.is_empty() {
        "Image".to_string()
    } else {
        parts.join(" / ")
    }
}

/// Text shown in the content area while there is no image. First matching rule wins.
pub fn placeholder_text(config: &CardConfig) -> &'static str {
    if config.can_read {
        "Image Placeholder"
    } else if config.can_observe {
        "Waiting for connection..."
    } else {
        "No image available."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(can_read: bool, can_write: bool, can_observe: bool) -> CardConfig {
        CardConfig {
            can_read,
            can_write,
            can_observe,
            ..Default::default()
        }
    }

    #[test]
    fn subtitle_joins_enabled_capabilities_in_order() {
        assert_eq!(subtitle(&config(true, false, true)), "Read-only / Live");
        assert_eq!(subtitle(&config(true, true, true)), "Read-only / Writable / Live");
        assert_eq!(subtitle(&config(false, true, false)), "Writable");
    }

    #[test]
    fn subtitle_falls_back_when_nothing_is_enabled() {
        assert_eq!(subtitle(&config(false, false, false)), "Image");
    }

    #[test]
    fn placeholder_prefers_read_over_observe() {
        assert_eq!(placeholder_text(&config(true, false, false)), "Image Placeholder");
        assert_eq!(placeholder_text(&config(true, true, true)), "Image Placeholder");
        assert_eq!(
            placeholder_text(&config(false, false, true)),
            "Waiting for connection..."
        );
    }

    #[test]
    fn write_only_gets_the_generic_placeholder() {
        assert_eq!(placeholder_text(&config(false, true, false)), "No image available.");
        assert_eq!(placeholder_text(&config(false, false, false)), "No image available.");
    }
}
