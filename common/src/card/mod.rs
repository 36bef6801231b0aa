//! The card's behaviour, split the same way the component is:
//!
//! - `operations`: the injected async callbacks and their bundle.
//! - `labels`: pure text derivations from the configuration.
//! - `state`: the per-instance state machine driven by UI events.

mod labels;
mod operations;
mod state;

pub use labels::{placeholder_text, subtitle};
pub use operations::{CardOperations, ObserveOp, ReadOp, WriteOp};
pub use state::{CardState, PendingSend};

/// A file handle produced by the picker.
///
/// The browser component wraps `gloo_file::File`; tests use an in-memory stand-in.
/// Handles are cheap to clone: the card keeps one and passes another to the write
/// operation.
pub trait FilePayload: Clone + 'static {
    fn name(&self) -> String;
    fn size(&self) -> u64;
    /// MIME type reported by the platform, possibly empty.
    fn mime_type(&self) -> String;
}
