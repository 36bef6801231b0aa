//! Platform-independent core of the image card widget.
//!
//! The browser component in `image_card_frontend` owns a [`card::CardState`] and feeds
//! it DOM events; everything that decides what the card shows lives here so it can be
//! exercised without a browser.

pub mod card;
pub mod error;
pub mod format;
pub mod model;

pub use card::{CardOperations, CardState, FilePayload, WriteOp};
pub use error::CardError;
pub use model::config::CardConfig;
pub use model::status::{Status, StatusKind};
