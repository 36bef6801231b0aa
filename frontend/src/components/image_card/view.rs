//! View rendering for the image card component.
//!
//! Layout, top to bottom: header (label + capability subtitle), content area (image or
//! placeholder, with a spinner overlay while loading), metadata row, write controls,
//! and the status panel. `show_metadata`, `show_status` and `dark` only affect what is
//! drawn here.

use image_card_common::card::{placeholder_text, subtitle};
use image_card_common::FilePayload;
use web_sys::{HtmlImageElement, HtmlInputElement};
use yew::html::Scope;
use yew::prelude::*;

use super::file::PickedFile;
use super::helpers::{last_updated_text, metadata_entries, status_color, status_icon};
use super::messages::Msg;
use super::state::ImageCardComponent;

/// Main view function for the image card component.
pub fn view(component: &ImageCardComponent, ctx: &Context<ImageCardComponent>) -> Html {
    let link = ctx.link();
    let config = &ctx.props().config;
    let (background, foreground) = if config.dark {
        ("#212121", "#fafafa")
    } else {
        ("#fff", "#212121")
    };

    html! {
        <div
            class={classes!("image-card", config.dark.then_some("dark"))}
            style={format!("border:1px solid #ccc;border-radius:8px;overflow:hidden;background:{};color:{};font-family:Arial, sans-serif;", background, foreground)}
        >
            { build_header(ctx) }
            { build_content(component, ctx, link) }
            {
                match component.card.selected_file() {
                    Some(file) if config.show_metadata => build_metadata_row(component, file),
                    _ => html! {},
                }
            }
            {
                if config.can_write {
                    build_controls(component, ctx, link)
                } else {
                    html! {}
                }
            }
            {
                if config.show_status {
                    build_status_panel(component)
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn build_header(ctx: &Context<ImageCardComponent>) -> Html {
    let config = &ctx.props().config;
    html! {
        <div class="image-card-header" style="padding:12px 16px;border-bottom:1px solid #e0e0e0;">
            <div style="font-weight:bold;font-size:1rem;">{ config.label.clone() }</div>
            <div style="font-size:0.8rem;opacity:0.7;">{ subtitle(config) }</div>
        </div>
    }
}

/// Image or placeholder, sized by `config.height`. The `<img>` load/error events feed
/// `Msg::ImageLoaded` / `Msg::ImageFailed`.
fn build_content(
    component: &ImageCardComponent,
    ctx: &Context<ImageCardComponent>,
    link: &Scope<ImageCardComponent>,
) -> Html {
    let config = &ctx.props().config;
    let on_load = link.callback(|e: Event| {
        let img: HtmlImageElement = e.target_unchecked_into();
        Msg::ImageLoaded {
            width: img.natural_width(),
            height: img.natural_height(),
        }
    });
    let on_error = link.callback(|_: Event| Msg::ImageFailed);

    html! {
        <div
            class="image-card-content"
            style={format!("position:relative;height:{};display:flex;align-items:center;justify-content:center;background:rgba(0,0,0,0.04);", config.height)}
        >
            {
                if let Some(url) = component.card.image_url() {
                    html! {
                        <img
                            key={component.card.image_key().to_string()}
                            src={url.to_string()}
                            onload={on_load}
                            onerror={on_error}
                            style="max-width:100%;max-height:100%;object-fit:contain;"
                        />
                    }
                } else {
                    html! {
                        <span style="opacity:0.6;">{ placeholder_text(config) }</span>
                    }
                }
            }
            {
                if component.card.is_loading() {
                    html! {
                        <div style="position:absolute;top:0;left:0;width:100%;height:100%;display:flex;align-items:center;justify-content:center;background:rgba(255,255,255,0.7);">
                            <div class="spin" style="width:40px;height:40px;border:5px solid #ccc;border-top-color:#1976d2;border-radius:50%;animation:spin 1s linear infinite;"></div>
                            <style>{r#"
                                @keyframes spin { from { transform: rotate(0deg); } to { transform: rotate(360deg); } }
                            "#}</style>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn build_metadata_row(component: &ImageCardComponent, file: &PickedFile) -> Html {
    let entries = metadata_entries(component.card.selection_metadata(), &file.name(), file.size());
    html! {
        <div class="image-card-metadata" style="display:flex;flex-wrap:wrap;gap:12px;padding:8px 16px;font-size:0.8rem;border-top:1px solid #e0e0e0;">
            {
                for entries.into_iter().map(|(label, value)| html! {
                    <span>
                        <span style="opacity:0.6;">{ format!("{}: ", label) }</span>
                        { value }
                    </span>
                })
            }
        </div>
    }
}

/// Hidden file input plus either the choose button or the send/cancel pair.
fn build_controls(
    component: &ImageCardComponent,
    ctx: &Context<ImageCardComponent>,
    link: &Scope<ImageCardComponent>,
) -> Html {
    let config = &ctx.props().config;
    let on_change = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::FileSelected(input.files().and_then(|files| files.get(0)))
    });

    html! {
        <div class="image-card-controls" style="display:flex;gap:8px;padding:8px 16px;border-top:1px solid #e0e0e0;">
            <input
                type="file"
                ref={component.file_input_ref.clone()}
                accept={config.accepted_formats.clone()}
                onchange={on_change}
                style="display:none;"
            />
            {
                if component.card.selected_file().is_none() {
                    icon_button("upload_file", "Choose file", link.callback(|_| Msg::OpenFileDialog))
                } else {
                    html! {
                        <>
                            { icon_button("send", "Send", link.callback(|_| Msg::Send)) }
                            { icon_button("close", "Cancel", link.callback(|_| Msg::Cancel)) }
                        </>
                    }
                }
            }
        </div>
    }
}

fn build_status_panel(component: &ImageCardComponent) -> Html {
    let status = component.card.status();
    html! {
        <div class="image-card-status" style="padding:8px 16px;border-top:1px solid #e0e0e0;font-size:0.8rem;">
            <div style={format!("display:flex;align-items:center;gap:6px;color:{};", status_color(status.kind))}>
                <i class="material-icons" style="font-size:1rem;">{ status_icon(status.kind) }</i>
                <span>{ status.message.clone() }</span>
            </div>
            <div style="opacity:0.6;">
                { format!("Last updated: {}", last_updated_text(component.card.metadata())) }
            </div>
        </div>
    }
}

/// Renders a button with a Material icon and a label.
fn icon_button(icon_name: &str, label: &str, on_click: Callback<MouseEvent>) -> Html {
    html! {
        <button class="icon-btn" onclick={on_click}>
            <i class="material-icons">{ icon_name }</i>
            <span class="icon-label">{ label }</span>
        </button>
    }
}
