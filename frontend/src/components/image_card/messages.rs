use image_card_common::CardError;

use super::file::PickedFile;

pub enum Msg {
    OpenFileDialog,
    FileSelected(Option<web_sys::File>),
    FileDecoded(PickedFile, Result<Vec<u8>, CardError>),
    Send,
    SendFinished(Result<(), CardError>),
    Cancel,
    ImageLoaded { width: u32, height: u32 },
    ImageFailed,
}
