// Per-instance memoization.
// A lazily filled slot whose computation runs at most once per owner.

use std::fmt;
use std::future::Future;

use tokio::sync::OnceCell;

/// A cache slot owned by a single instance.
///
/// The first successful fill is kept for the lifetime of the slot and every
/// later read returns it without running the computation again. There is no
/// invalidation. Concurrent first reads are serialized, so the computation
/// runs once even when the owner is shared between tasks.
pub struct Memoized<T> {
    cell: OnceCell<T>,
}

impl<T> Memoized<T> {
    /// Create an empty slot.
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::const_new(),
        }
    }

    /// Peek at the cached value without filling the slot.
    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    /// Whether the slot has been filled.
    pub fn is_filled(&self) -> bool {
        self.cell.initialized()
    }

    /// Return the cached value, running `init` only if the slot is empty.
    pub async fn get_or_init<F, Fut>(&self, init: F) -> &T
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        self.cell.get_or_init(init).await
    }

    /// Fallible variant of [`Memoized::get_or_init`].
    ///
    /// An error leaves the slot empty, so the next read runs `init` again.
    pub async fn get_or_try_init<E, F, Fut>(&self, init: F) -> Result<&T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        self.cell.get_or_try_init(init).await
    }

    /// Consume the slot, returning the cached value if any.
    pub fn into_inner(self) -> Option<T> {
        self.cell.into_inner()
    }
}

impl<T> Default for Memoized<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Memoized<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(value) => f.debug_tuple("Memoized").field(value).finish(),
            None => f.write_str("Memoized(<empty>)"),
        }
    }
}
