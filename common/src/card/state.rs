//! Per-instance card state and the transitions the UI drives.
//!
//! Every method runs to completion synchronously. The two asynchronous steps, reading
//! the picked file and running the write operation, are split into a start and a
//! `finish_*` call so the host can await them without holding `&mut self`.

use futures_util::future::LocalBoxFuture;
use log::{debug, warn};
use serde_json::Value;

use crate::error::CardError;
use crate::format::encode_data_url;
use crate::model::metadata::ImageMetadata;
use crate::model::status::{Status, StatusKind};

use super::operations::{CardOperations, WriteOp};
use super::FilePayload;

/// Future returned by [`CardState::begin_send`]. Feed its output to
/// [`CardState::finish_send`].
pub type PendingSend = LocalBoxFuture<'static, Result<(), CardError>>;

pub const STATUS_DISPLAYING: &str = "Displaying";
pub const STATUS_LIVE_STOPPED: &str = "Live view stopped";
pub const STATUS_SENDING: &str = "Sending...";
pub const STATUS_SENT: &str = "Sent successfully";
pub const STATUS_SEND_FAILED: &str = "Failed to send";
pub const STATUS_DISPLAY_FAILED: &str = "Failed to display image";
pub const STATUS_READ_FAILED: &str = "Failed to read file";

/// State owned by one card.
///
/// Holds at most one selected file and one displayable image; a new selection
/// replaces both.
pub struct CardState<F: FilePayload> {
    selected_file: Option<F>,
    image_url: Option<String>,
    metadata: Option<ImageMetadata>,
    status: Status,
    loading: bool,
    observing: bool,
    write_op: Option<WriteOp<F>>,
    /// Bumped on every accepted selection.
    selection: u64,
    /// Selection whose bytes produced `image_url`.
    image_selection: Option<u64>,
    /// Selection that `metadata`'s dimensions were measured for.
    described_selection: Option<u64>,
    /// Bumped on every successful decode, even of identical bytes.
    image_generation: u64,
}

impl<F: FilePayload> Default for CardState<F> {
    fn default() -> Self {
        Self {
            selected_file: None,
            image_url: None,
            metadata: None,
            status: Status::default(),
            loading: false,
            observing: false,
            write_op: None,
            selection: 0,
            image_selection: None,
            described_selection: None,
            image_generation: 0,
        }
    }
}

impl<F: FilePayload> CardState<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the write operation from `operations`, if it carries one.
    ///
    /// `current_value` and the read/observe slots are accepted and ignored. Nothing is
    /// loaded or observed as a result of this call.
    pub fn configure(
        &mut self,
        _current_value: Option<&Value>,
        operations: Option<CardOperations<F>>,
    ) {
        let Some(operations) = operations else {
            return;
        };
        if let Some(write) = operations.write {
            debug!("image card: write operation configured");
            self.write_op = Some(write);
        }
    }

    /// Records a newly picked file and hands it back for decoding.
    ///
    /// Returns `None` when the picker reported no file. An active live view is
    /// stopped.
    pub fn select_file(&mut self, file: Option<F>) -> Option<F> {
        let file = file?;
        debug!("image card: selected {} ({} bytes)", file.name(), file.size());
        self.selected_file = Some(file.clone());
        self.selection = self.selection.wrapping_add(1);
        if self.observing {
            self.observing = false;
            self.set_status(STATUS_LIVE_STOPPED, StatusKind::Neutral);
        }
        Some(file)
    }

    /// Applies the outcome of reading `file`'s bytes.
    pub fn finish_decode(&mut self, file: &F, bytes: Result<Vec<u8>, CardError>) {
        match bytes {
            Ok(bytes) => {
                self.image_url = Some(encode_data_url(&file.mime_type(), &bytes));
                self.image_selection = Some(self.selection);
                self.image_generation = self.image_generation.wrapping_add(1);
                self.set_status(STATUS_DISPLAYING, StatusKind::Neutral);
            }
            Err(err) => {
                warn!("image card: reading {} failed: {}", file.name(), err);
                self.set_status(STATUS_READ_FAILED, StatusKind::Error);
            }
        }
    }

    /// Starts sending the selected file through the configured write operation.
    ///
    /// Returns `None` without touching any state when no file is selected or no write
    /// operation is configured.
    pub fn begin_send(&mut self) -> Option<PendingSend> {
        let (file, write) = match (&self.selected_file, &self.write_op) {
            (Some(file), Some(write)) => (file.clone(), write.clone()),
            _ => return None,
        };
        self.loading = true;
        self.set_status(STATUS_SENDING, StatusKind::Neutral);
        Some(write(file))
    }

    /// Applies the outcome of a send started by [`begin_send`](Self::begin_send).
    /// The loading flag is cleared whatever the outcome.
    pub fn finish_send(&mut self, result: Result<(), CardError>) {
        match result {
            Ok(()) => self.set_status(STATUS_SENT, StatusKind::Success),
            Err(err) => {
                warn!("image card: {}", err);
                self.set_status(STATUS_SEND_FAILED, StatusKind::Error);
            }
        }
        self.loading = false;
    }

    /// Runs a whole send in place. For hosts that can hold the state across an await.
    pub async fn send(&mut self) {
        if let Some(pending) = self.begin_send() {
            let result = pending.await;
            self.finish_send(result);
        }
    }

    /// Overwrites the status line.
    ///
    /// A success, or any non-error status while an image is shown, also refreshes the
    /// metadata timestamp.
    pub fn set_status(&mut self, message: impl Into<String>, kind: StatusKind) {
        self.status = Status::new(message, kind);
        let touch = kind == StatusKind::Success
            || (kind != StatusKind::Error && self.image_url.is_some());
        if touch {
            self.metadata.get_or_insert_with(ImageMetadata::default).touch();
        }
    }

    /// The `<img>` element finished decoding the data URL.
    pub fn image_loaded(&mut self, width: u32, height: u32) {
        let size = self.selected_file.as_ref().map(FilePayload::size);
        self.metadata = Some(ImageMetadata::decoded(width, height, size));
        self.described_selection = self.image_selection;
        self.loading = false;
    }

    /// The `<img>` element could not render the data URL. Leaves the loading flag as
    /// it is.
    pub fn image_failed(&mut self) {
        self.set_status(STATUS_DISPLAY_FAILED, StatusKind::Error);
    }

    /// Drops the selected file. The displayed image and its metadata stay on screen.
    pub fn cancel(&mut self) {
        self.selected_file = None;
    }

    /// Marks a live view as running or stopped. The card never starts one itself.
    pub fn set_observing(&mut self, observing: bool) {
        self.observing = observing;
    }

    pub fn selected_file(&self) -> Option<&F> {
        self.selected_file.as_ref()
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn metadata(&self) -> Option<&ImageMetadata> {
        self.metadata.as_ref()
    }

    /// Metadata measured from the current selection's image, if the `<img>` element
    /// has reported it. `None` after a re-pick until the new image has loaded, and for
    /// good if it fails to render.
    pub fn selection_metadata(&self) -> Option<&ImageMetadata> {
        match (&self.selected_file, self.described_selection) {
            (Some(_), Some(described)) if described == self.selection => self.metadata.as_ref(),
            _ => None,
        }
    }

    /// Changes with every decoded image. Used to key the `<img>` element so a re-pick
    /// of identical bytes still produces a fresh load event.
    pub fn image_key(&self) -> u64 {
        self.image_generation
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_observing(&self) -> bool {
        self.observing
    }

    pub fn has_write_op(&self) -> bool {
        self.write_op.is_some()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct FakeFile {
        name: String,
        mime: String,
        bytes: Vec<u8>,
    }

    impl FakeFile {
        fn png(name: &str, bytes: &[u8]) -> Self {
            Self {
                name: name.to_string(),
                mime: "image/png".to_string(),
                bytes: bytes.to_vec(),
            }
        }
    }

    impl FilePayload for FakeFile {
        fn name(&self) -> String {
            self.name.clone()
        }

        fn size(&self) -> u64 {
            self.bytes.len() as u64
        }

        fn mime_type(&self) -> String {
            self.mime.clone()
        }
    }

    fn select_and_decode(card: &mut CardState<FakeFile>, file: FakeFile) {
        let picked = card.select_file(Some(file)).expect("file recorded");
        let bytes = picked.bytes.clone();
        card.finish_decode(&picked, Ok(bytes));
    }

    fn recording_ops(
        log: Rc<RefCell<Vec<&'static str>>>,
        tag: &'static str,
    ) -> CardOperations<FakeFile> {
        CardOperations::new().with_write(move |_file: FakeFile| {
            let log = log.clone();
            async move {
                log.borrow_mut().push(tag);
                Ok(())
            }
        })
    }

    #[test]
    fn starts_empty_and_ready() {
        let card = CardState::<FakeFile>::new();
        assert!(card.selected_file().is_none());
        assert!(card.image_url().is_none());
        assert!(card.metadata().is_none());
        assert_eq!(card.status(), &Status::new("Ready", StatusKind::Neutral));
        assert!(!card.is_loading());
        assert!(!card.has_write_op());
    }

    #[test]
    fn empty_picker_notification_is_ignored() {
        let mut card = CardState::<FakeFile>::new();
        assert!(card.select_file(None).is_none());
        assert!(card.selected_file().is_none());
        assert_eq!(card.status().message, "Ready");
    }

    #[test]
    fn decoded_file_becomes_a_data_url() {
        let mut card = CardState::<FakeFile>::new();
        select_and_decode(&mut card, FakeFile::png("a.png", b"abc"));

        assert_eq!(card.image_url(), Some("data:image/png;base64,YWJj"));
        assert_eq!(card.status(), &Status::new(STATUS_DISPLAYING, StatusKind::Neutral));
        // Neutral status with an image shown touches the timestamp.
        assert!(card.metadata().and_then(|m| m.last_updated).is_some());
    }

    #[test]
    fn read_failure_surfaces_as_error_status() {
        let mut card = CardState::<FakeFile>::new();
        let picked = card.select_file(Some(FakeFile::png("a.png", b"abc"))).unwrap();
        card.finish_decode(&picked, Err(CardError::Read("aborted".into())));

        assert!(card.image_url().is_none());
        assert_eq!(card.status(), &Status::new(STATUS_READ_FAILED, StatusKind::Error));
        assert!(card.metadata().is_none());
    }

    #[test]
    fn new_selection_replaces_file_and_image() {
        let mut card = CardState::<FakeFile>::new();
        select_and_decode(&mut card, FakeFile::png("first.png", b"one"));
        select_and_decode(&mut card, FakeFile::png("second.png", b"two"));

        assert_eq!(card.selected_file().map(|f| f.name.as_str()), Some("second.png"));
        assert_eq!(card.image_url(), Some("data:image/png;base64,dHdv"));
    }

    #[test]
    fn selecting_a_file_stops_a_live_view() {
        let mut card = CardState::<FakeFile>::new();
        card.set_observing(true);
        card.select_file(Some(FakeFile::png("a.png", b"abc")));

        assert!(!card.is_observing());
        assert_eq!(card.status(), &Status::new(STATUS_LIVE_STOPPED, StatusKind::Neutral));
    }

    #[tokio::test]
    async fn send_without_write_op_changes_nothing() {
        let mut card = CardState::<FakeFile>::new();
        select_and_decode(&mut card, FakeFile::png("a.png", b"abc"));
        let before = card.status().clone();

        assert!(card.begin_send().is_none());
        card.send().await;

        assert_eq!(card.status(), &before);
        assert!(!card.is_loading());
    }

    #[tokio::test]
    async fn send_without_selection_changes_nothing() {
        let mut card = CardState::<FakeFile>::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        card.configure(None, Some(recording_ops(log.clone(), "write")));

        card.send().await;

        assert!(log.borrow().is_empty());
        assert_eq!(card.status().message, "Ready");
        assert!(!card.is_loading());
    }

    #[tokio::test]
    async fn begin_send_sets_loading_and_sending_status() {
        let mut card = CardState::<FakeFile>::new();
        card.configure(None, Some(CardOperations::new().with_write(|_| async { Ok(()) })));
        card.select_file(Some(FakeFile::png("a.png", b"abc")));

        let pending = card.begin_send().expect("send starts");
        assert!(card.is_loading());
        assert_eq!(card.status(), &Status::new(STATUS_SENDING, StatusKind::Neutral));

        card.finish_send(pending.await);
        assert!(!card.is_loading());
    }

    #[tokio::test]
    async fn successful_send_reports_success() {
        let mut card = CardState::<FakeFile>::new();
        let received = Rc::new(RefCell::new(None));
        let sink = received.clone();
        card.configure(
            None,
            Some(CardOperations::new().with_write(move |file: FakeFile| {
                let sink = sink.clone();
                async move {
                    *sink.borrow_mut() = Some(file.name);
                    Ok(())
                }
            })),
        );
        card.select_file(Some(FakeFile::png("upload.png", b"abc")));

        card.send().await;

        assert_eq!(received.borrow().as_deref(), Some("upload.png"));
        assert_eq!(card.status(), &Status::new(STATUS_SENT, StatusKind::Success));
        assert!(!card.is_loading());
        assert!(card.metadata().and_then(|m| m.last_updated).is_some());
    }

    #[tokio::test]
    async fn rejected_send_reports_failure() {
        let mut card = CardState::<FakeFile>::new();
        card.configure(
            None,
            Some(CardOperations::new().with_write(|_| async {
                Err(CardError::Write("server said no".into()))
            })),
        );
        card.select_file(Some(FakeFile::png("a.png", b"abc")));

        card.send().await;

        assert_eq!(card.status(), &Status::new(STATUS_SEND_FAILED, StatusKind::Error));
        assert!(!card.is_loading());
    }

    #[tokio::test]
    async fn last_configured_write_op_wins() {
        let mut card = CardState::<FakeFile>::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        card.configure(None, Some(recording_ops(log.clone(), "first")));
        card.configure(None, Some(recording_ops(log.clone(), "second")));
        card.select_file(Some(FakeFile::png("a.png", b"abc")));

        card.send().await;
        card.send().await;

        assert_eq!(*log.borrow(), vec!["second", "second"]);
    }

    #[test]
    fn configure_without_write_keeps_existing_op() {
        let mut card = CardState::<FakeFile>::new();
        card.configure(None, Some(CardOperations::new().with_write(|_| async { Ok(()) })));
        card.configure(None, None);
        card.configure(
            Some(&serde_json::json!({ "ignored": true })),
            Some(CardOperations::new().with_read(|| async { Ok(Vec::new()) })),
        );
        assert!(card.has_write_op());
    }

    #[test]
    fn configure_never_invokes_read_or_observe() {
        let calls = Rc::new(Cell::new(0));
        let (read_calls, observe_calls) = (calls.clone(), calls.clone());
        let ops = CardOperations::<FakeFile>::new()
            .with_read(move || {
                read_calls.set(read_calls.get() + 1);
                async { Ok(Vec::new()) }
            })
            .with_observe(move || {
                observe_calls.set(observe_calls.get() + 1);
                async { Ok(()) }
            });

        let mut card = CardState::<FakeFile>::new();
        card.configure(None, Some(ops));

        assert_eq!(calls.get(), 0);
        assert!(!card.has_write_op());
        assert!(!card.is_observing());
    }

    #[test]
    fn cancel_keeps_image_and_metadata() {
        let mut card = CardState::<FakeFile>::new();
        select_and_decode(&mut card, FakeFile::png("a.png", b"abc"));
        card.image_loaded(32, 16);

        card.cancel();

        assert!(card.selected_file().is_none());
        assert!(card.image_url().is_some());
        assert_eq!(card.metadata().and_then(|m| m.dimensions()).as_deref(), Some("32x16"));
    }

    #[test]
    fn image_loaded_builds_fresh_metadata_and_clears_loading() {
        let mut card = CardState::<FakeFile>::new();
        card.configure(None, Some(CardOperations::new().with_write(|_| async { Ok(()) })));
        select_and_decode(&mut card, FakeFile::png("a.png", b"abcd"));
        let _pending = card.begin_send();
        assert!(card.is_loading());

        card.image_loaded(800, 600);

        let meta = card.metadata().expect("metadata");
        assert_eq!(meta.format.as_deref(), Some("Image"));
        assert_eq!((meta.width, meta.height), (Some(800), Some(600)));
        assert_eq!(meta.size, Some(4));
        assert!(!card.is_loading());
    }

    #[test]
    fn reselection_drops_metadata_of_the_previous_image() {
        let mut card = CardState::<FakeFile>::new();
        select_and_decode(&mut card, FakeFile::png("a.png", b"abc"));
        card.image_loaded(32, 16);
        assert!(card.selection_metadata().is_some());

        select_and_decode(&mut card, FakeFile::png("b.png", b"hello"));
        card.image_failed();

        assert_eq!(card.selected_file().map(|f| f.size()), Some(5));
        assert!(card.selection_metadata().is_none());
    }

    #[test]
    fn reselection_metadata_returns_once_the_new_image_loads() {
        let mut card = CardState::<FakeFile>::new();
        select_and_decode(&mut card, FakeFile::png("a.png", b"abc"));
        card.image_loaded(32, 16);

        select_and_decode(&mut card, FakeFile::png("b.png", b"hello"));
        card.image_loaded(64, 48);

        let meta = card.selection_metadata().expect("metadata for b.png");
        assert_eq!(meta.dimensions().as_deref(), Some("64x48"));
        assert_eq!(meta.size, Some(5));
    }

    #[test]
    fn repicking_identical_bytes_changes_the_image_key() {
        let mut card = CardState::<FakeFile>::new();
        select_and_decode(&mut card, FakeFile::png("a.png", b"abc"));
        card.image_loaded(32, 16);
        let first_key = card.image_key();
        let first_url = card.image_url().map(str::to_string);

        card.cancel();
        assert!(card.selection_metadata().is_none());
        select_and_decode(&mut card, FakeFile::png("a.png", b"abc"));

        assert_eq!(card.image_url().map(str::to_string), first_url);
        assert_ne!(card.image_key(), first_key);
        assert!(card.selection_metadata().is_none());
    }

    #[tokio::test]
    async fn cancel_and_repick_are_allowed_while_a_send_is_in_flight() {
        let mut card = CardState::<FakeFile>::new();
        card.configure(None, Some(CardOperations::new().with_write(|_| async { Ok(()) })));
        card.select_file(Some(FakeFile::png("a.png", b"abc")));
        let pending = card.begin_send().expect("send starts");
        assert!(card.is_loading());

        card.cancel();
        assert!(card.selected_file().is_none());
        select_and_decode(&mut card, FakeFile::png("b.png", b"hello"));
        assert_eq!(card.selected_file().map(|f| f.name.as_str()), Some("b.png"));

        card.finish_send(pending.await);
        assert_eq!(card.status(), &Status::new(STATUS_SENT, StatusKind::Success));
        assert!(!card.is_loading());
    }

    #[test]
    fn image_failure_leaves_loading_alone() {
        let mut card = CardState::<FakeFile>::new();
        card.configure(None, Some(CardOperations::new().with_write(|_| async { Ok(()) })));
        card.select_file(Some(FakeFile::png("a.png", b"abc")));
        let _pending = card.begin_send();

        card.image_failed();

        assert_eq!(card.status(), &Status::new(STATUS_DISPLAY_FAILED, StatusKind::Error));
        assert!(card.is_loading());
    }

    #[test]
    fn status_timestamp_rule() {
        let mut card = CardState::<FakeFile>::new();

        // Neutral without an image: no metadata is created.
        card.set_status("hello", StatusKind::Neutral);
        assert!(card.metadata().is_none());

        // Success always touches, creating a timestamp-only record.
        card.set_status("done", StatusKind::Success);
        let meta = card.metadata().expect("metadata");
        assert!(meta.last_updated.is_some());
        assert!(meta.format.is_none());

        // Error never touches.
        let stamped = card.metadata().and_then(|m| m.last_updated);
        std::thread::sleep(std::time::Duration::from_millis(5));
        card.set_status("broken", StatusKind::Error);
        assert_eq!(card.metadata().and_then(|m| m.last_updated), stamped);
    }

    #[test]
    fn neutral_status_with_image_preserves_other_metadata() {
        let mut card = CardState::<FakeFile>::new();
        select_and_decode(&mut card, FakeFile::png("a.png", b"abc"));
        card.image_loaded(10, 20);
        let before = card.metadata().and_then(|m| m.last_updated);
        std::thread::sleep(std::time::Duration::from_millis(5));

        card.set_status("still here", StatusKind::Neutral);

        let meta = card.metadata().expect("metadata");
        assert_eq!(meta.dimensions().as_deref(), Some("10x20"));
        assert!(meta.last_updated > before);
    }
}
