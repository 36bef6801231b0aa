//! Defines the properties for the `ImageCardComponent`.

use image_card_common::{CardConfig, CardOperations};
use yew::prelude::*;

use super::file::PickedFile;

/// Properties for the `ImageCardComponent`.
#[derive(Properties, PartialEq, Clone)]
pub struct ImageCardProps {
    /// Label, capability flags and display options. See `CardConfig`.
    #[prop_or_default]
    pub config: CardConfig,

    /// Async callbacks supplied by the host. Only the write slot is used; it backs the
    /// send button.
    ///
    /// Compared by pointer identity, so a host should build the bundle once and pass
    /// clones of it rather than rebuilding it on every render.
    #[prop_or_default]
    pub operations: Option<CardOperations<PickedFile>>,
}
