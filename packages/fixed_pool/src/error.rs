use thiserror::Error;

/// Errors reported by the checked operations of a [`FixedPool`][crate::FixedPool].
///
/// The unchecked counterparts (`construct()`, `destroy()` and friends) treat the same
/// conditions as silent no-ops or `None` results.
#[derive(Debug, Error, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Every slot in the pool is occupied.
    #[error("all {capacity} slots of the pool are occupied")]
    PoolExhausted {
        /// The fixed capacity of the pool.
        capacity: usize,
    },

    /// The handle was not issued by this pool.
    #[error("handle for slot {index} does not belong to this pool")]
    ForeignHandle {
        /// The slot index recorded in the handle.
        index: usize,
    },

    /// The handle was issued by this pool but its object has since been destroyed.
    ///
    /// This is what a double destroy or a use-after-destroy looks like from the pool's side.
    #[error("handle for slot {index} (generation {generation}) refers to an object that no longer exists")]
    StaleHandle {
        /// The slot index recorded in the handle.
        index: usize,

        /// The generation recorded in the handle.
        generation: u64,
    },
}

/// A specialized `Result` type for pool operations, returning the crate's
/// [`Error`] type as the error value.
///
/// This is the return type of the checked operations such as
/// [`FixedPool::try_destroy()`][crate::FixedPool::try_destroy], so callers can name it in
/// their own signatures.
pub type Result<T> = std::result::Result<T, Error>;
