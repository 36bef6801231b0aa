//! Image card: root module wiring the Yew `Component` implementation with
//! submodules for state, update logic, view rendering, and helpers.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `ImageCardProps`, `ImageCardComponent`, `PickedFile`).
//! - Provide the `Component` implementation that delegates to `update::update` and `view::view`.
//! - Hand the `operations` prop to the card core on creation and whenever it changes.
//!   Nothing is loaded on first render.

use yew::prelude::*;

mod file;
mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use file::PickedFile;
pub use messages::Msg;
pub use props::ImageCardProps;
pub use state::ImageCardComponent;

impl Component for ImageCardComponent {
    type Message = Msg;
    type Properties = ImageCardProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut component = ImageCardComponent::new();
        component
            .card
            .configure(None, ctx.props().operations.clone());
        component
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().operations != old_props.operations {
            self.card.configure(None, ctx.props().operations.clone());
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
