//! A fixed-capacity object pool with generation-checked handles.
//!
//! This crate provides [`FixedPool`], a pool that allocates storage for exactly `N` objects of
//! type `T` when it is created and never grows. Objects are constructed into vacant slots and
//! destroyed in place, so neither operation calls the heap allocator. Vacant slots are tracked
//! by a free list threaded through the slot metadata, which makes both operations constant-time.
//!
//! # Key Features
//!
//! - **Fixed capacity**: `N` is part of the pool type and storage is allocated exactly once
//! - **Stable addresses**: objects never move while they are in the pool
//! - **Checked handles**: every [`Handle`] carries the slot's generation, so a handle to a
//!   destroyed object or to another pool's object is rejected instead of corrupting the pool
//! - **Raw pointer path**: [`FixedPool::destroy_ptr()`] recovers the slot from an address alone
//! - **Consistent on failure**: a panic while building a value leaves the pool unchanged
//! - **Configurable teardown**: [`DropPolicy`] decides whether live objects are dropped with the
//!   pool or treated as a bug
//!
//! # Example
//!
//! ```rust
//! use fixed_pool::FixedPool;
//!
//! #[derive(Debug, PartialEq)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! let mut pool = FixedPool::<Point, 2>::new();
//!
//! let a = pool.construct(Point { x: 1, y: 2 }).unwrap();
//! let b = pool.construct_with(|| Point { x: 3, y: 4 }).unwrap();
//!
//! // The pool is full.
//! assert!(pool.construct(Point { x: 5, y: 6 }).is_none());
//!
//! assert_eq!(pool.get(a), Some(&Point { x: 1, y: 2 }));
//!
//! pool.destroy(a);
//!
//! // Destroying twice is harmless because the handle is now stale.
//! pool.destroy(a);
//! assert_eq!(pool.len(), 1);
//!
//! pool.destroy(b);
//! assert!(pool.is_empty());
//! ```
//!
//! # Checked operations
//!
//! The plain operations treat invalid input as a no-op, mirroring how deallocation functions
//! treat a null pointer. The `try_` operations report the same conditions as an [`Error`]:
//!
//! ```rust
//! use fixed_pool::{Error, FixedPool};
//!
//! let mut pool = FixedPool::<u32, 1>::new();
//!
//! let handle = pool.try_construct_with(|| 1).unwrap();
//! assert_eq!(
//!     pool.try_construct_with(|| 2),
//!     Err(Error::PoolExhausted { capacity: 1 })
//! );
//!
//! pool.try_destroy(handle).unwrap();
//! assert!(matches!(
//!     pool.try_destroy(handle),
//!     Err(Error::StaleHandle { .. })
//! ));
//! ```

mod builder;
mod drop_policy;
mod error;
mod handle;
mod inserter;
mod pool;
mod slot;

pub use builder::*;
pub use drop_policy::*;
pub use error::*;
pub use handle::*;
pub use inserter::*;
pub use pool::*;
pub(crate) use slot::*;
