use gloo_file::{Blob, File};
use image_card_common::FilePayload;

/// A file chosen in the card's picker. This is what the injected write operation
/// receives.
#[derive(Clone, Debug)]
pub struct PickedFile(File);

impl PickedFile {
    pub fn blob(&self) -> &Blob {
        &self.0
    }
}

impl From<web_sys::File> for PickedFile {
    fn from(file: web_sys::File) -> Self {
        Self(File::from(file))
    }
}

impl FilePayload for PickedFile {
    fn name(&self) -> String {
        self.0.name()
    }

    fn size(&self) -> u64 {
        self.0.size()
    }

    fn mime_type(&self) -> String {
        self.0.raw_mime_type()
    }
}
