use std::any::type_name;
use std::fmt;
use std::marker::PhantomData;

use crate::{DropPolicy, FixedPool};

/// Builder for creating an instance of [`FixedPool`].
///
/// You only need to use this builder if you want to customize the pool configuration.
/// The default configuration used by [`FixedPool::new()`][1] is sufficient for most use cases.
/// The capacity is not configured here because it is part of the pool type.
///
/// # Examples
///
/// ```
/// use fixed_pool::{DropPolicy, FixedPool};
///
/// let pool = FixedPool::<u32, 8>::builder()
///     .drop_policy(DropPolicy::MayDropItems)
///     .build();
/// ```
///
/// [1]: FixedPool::new
#[must_use]
pub struct FixedPoolBuilder<T, const N: usize> {
    drop_policy: DropPolicy,

    _item: PhantomData<T>,
}

impl<T, const N: usize> fmt::Debug for FixedPoolBuilder<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedPoolBuilder")
            .field("item_type", &format_args!("{}", type_name::<T>()))
            .field("capacity", &N)
            .field("drop_policy", &self.drop_policy)
            .finish()
    }
}

impl<T, const N: usize> FixedPoolBuilder<T, N> {
    pub(crate) fn new() -> Self {
        Self {
            drop_policy: DropPolicy::default(),
            _item: PhantomData,
        }
    }

    /// Sets the [drop policy][DropPolicy] for the pool. This governs how
    /// to treat remaining objects in the pool when the pool is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_pool::{DropPolicy, FixedPool};
    ///
    /// let pool = FixedPool::<u32, 8>::builder()
    ///     .drop_policy(DropPolicy::MustNotDropItems)
    ///     .build();
    /// ```
    pub fn drop_policy(mut self, policy: DropPolicy) -> Self {
        self.drop_policy = policy;
        self
    }

    /// Builds the pool with the specified configuration, allocating storage for `N` objects.
    ///
    /// # Panics
    ///
    /// Panics if `N` is zero or `T` is zero-sized.
    #[must_use]
    pub fn build(self) -> FixedPool<T, N> {
        FixedPool::new_inner(self.drop_policy)
    }
}
