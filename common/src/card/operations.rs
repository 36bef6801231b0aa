use std::future::Future;
use std::rc::Rc;

use futures_util::future::{FutureExt, LocalBoxFuture};

use crate::error::CardError;

/// Sends the selected file somewhere. The only side effect the card has on the
/// outside world.
pub type WriteOp<F> = Rc<dyn Fn(F) -> LocalBoxFuture<'static, Result<(), CardError>>>;

/// Fetches image bytes from the backing source. Accepted but never invoked.
pub type ReadOp = Rc<dyn Fn() -> LocalBoxFuture<'static, Result<Vec<u8>, CardError>>>;

/// Starts a live feed from the backing source. Accepted but never invoked.
pub type ObserveOp = Rc<dyn Fn() -> LocalBoxFuture<'static, Result<(), CardError>>>;

/// Bundle handed to [`CardState::configure`](super::CardState::configure).
///
/// Equality is pointer identity of the stored callbacks, which is what Yew needs to
/// decide whether the `operations` prop changed.
pub struct CardOperations<F> {
    pub read: Option<ReadOp>,
    pub write: Option<WriteOp<F>>,
    pub observe: Option<ObserveOp>,
}

impl<F: 'static> CardOperations<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the write slot from any `Fn(F) -> impl Future`.
    pub fn with_write<W, Fut>(mut self, write: W) -> Self
    where
        W: Fn(F) -> Fut + 'static,
        Fut: Future<Output = Result<(), CardError>> + 'static,
    {
        self.write = Some(Rc::new(move |file| write(file).boxed_local()));
        self
    }

    pub fn with_read<R, Fut>(mut self, read: R) -> Self
    where
        R: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<Vec<u8>, CardError>> + 'static,
    {
        self.read = Some(Rc::new(move || read().boxed_local()));
        self
    }

    pub fn with_observe<O, Fut>(mut self, observe: O) -> Self
    where
        O: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<(), CardError>> + 'static,
    {
        self.observe = Some(Rc::new(move || observe().boxed_local()));
        self
    }
}

impl<F> Default for CardOperations<F> {
    fn default() -> Self {
        Self {
            read: None,
            write: None,
            observe: None,
        }
    }
}

impl<F> Clone for CardOperations<F> {
    fn clone(&self) -> Self {
        Self {
            read: self.read.clone(),
            write: self.write.clone(),
            observe: self.observe.clone(),
        }
    }
}

impl<F> PartialEq for CardOperations<F> {
    fn eq(&self, other: &Self) -> bool {
        same_callback(&self.read, &other.read)
            && same_callback(&self.write, &other.write)
            && same_callback(&self.observe, &other.observe)
    }
}

fn same_callback<T: ?Sized>(a: &Option<Rc<T>>, b: &Option<Rc<T>>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => Rc::ptr_eq(a, b),
        (None, None) => true,
        _ => false,
    }
}
