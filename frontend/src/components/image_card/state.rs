//! Component state for the image card.

use image_card_common::CardState;
use yew::prelude::*;

use super::file::PickedFile;

/// Main state container for the `ImageCardComponent`.
///
/// Fields are `pub` because they are accessed by `view` and `update` modules.
pub struct ImageCardComponent {
    /// Selected file, image, metadata, status and the stored write operation.
    pub card: CardState<PickedFile>,

    /// Reference to the hidden `<input type="file">`.
    pub file_input_ref: NodeRef,
}

impl ImageCardComponent {
    pub fn new() -> Self {
        Self {
            card: CardState::new(),
            file_input_ref: Default::default(),
        }
    }

    /// Clears the file input so that picking the same file again still fires `change`.
    pub fn reset_file_input(&self) {
        if let Some(input) = self.file_input_ref.cast::<web_sys::HtmlInputElement>() {
            input.set_value("");
        }
    }
}
