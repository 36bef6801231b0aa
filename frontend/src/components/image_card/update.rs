//! Update function for the image card component.
//!
//! Elm-style: receives the current `ImageCardComponent`, the `Context`, and a `Msg`,
//! applies it to the card core, and returns whether the view should re-render.
//!
//! The two async steps run on `spawn_local` and report back with a follow-up message:
//! - `FileSelected` reads the file's bytes, then posts `FileDecoded`.
//! - `Send` awaits the injected write operation, then posts `SendFinished`.

use gloo_file::futures::read_as_bytes;
use image_card_common::CardError;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::file::PickedFile;
use super::messages::Msg;
use super::state::ImageCardComponent;

/// Central update function for the component.
pub fn update(
    component: &mut ImageCardComponent,
    ctx: &Context<ImageCardComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::OpenFileDialog => {
            if let Some(input) = component.file_input_ref.cast::<web_sys::HtmlInputElement>() {
                input.click();
            }
            false
        }
        Msg::FileSelected(file) => {
            let Some(picked) = component.card.select_file(file.map(PickedFile::from)) else {
                return false;
            };
            let link = ctx.link().clone();
            spawn_local(async move {
                let bytes = read_as_bytes(picked.blob())
                    .await
                    .map_err(|err| CardError::Read(err.to_string()));
                link.send_message(Msg::FileDecoded(picked, bytes));
            });
            true
        }
        Msg::FileDecoded(file, bytes) => {
            component.card.finish_decode(&file, bytes);
            true
        }
        Msg::Send => {
            let Some(pending) = component.card.begin_send() else {
                return false;
            };
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::SendFinished(pending.await));
            });
            true
        }
        Msg::SendFinished(result) => {
            component.card.finish_send(result);
            true
        }
        Msg::Cancel => {
            component.card.cancel();
            component.reset_file_input();
            true
        }
        Msg::ImageLoaded { width, height } => {
            component.card.image_loaded(width, height);
            true
        }
        Msg::ImageFailed => {
            component.card.image_failed();
            true
        }
    }
}
