use crate::{FixedPool, Handle};

/// An inserter for a [`FixedPool`], enabling two-phase construction of an object.
///
/// The inserter has already picked the slot that the object will occupy, so the object's
/// [`Handle`] is known through [`handle()`][1] before the object exists. This is how an object
/// can be given its own handle at construction time.
///
/// Dropping the inserter without constructing anything leaves the pool unchanged.
///
/// Created by calling [`FixedPool::begin_construct()`].
///
/// # Example
///
/// ```rust
/// use fixed_pool::FixedPool;
///
/// let mut pool = FixedPool::<String, 4>::new();
///
/// let inserter = pool.begin_construct().unwrap();
/// let handle = inserter.handle();
///
/// let item = inserter.construct_mut("Hello".to_string());
/// item.push_str(", World!");
///
/// assert_eq!(pool.get(handle).map(String::as_str), Some("Hello, World!"));
/// ```
///
/// [1]: Self::handle
#[derive(Debug)]
pub struct FixedPoolInserter<'p, T, const N: usize> {
    pool: &'p mut FixedPool<T, N>,

    /// Index of the vacant slot that the object will be constructed in.
    index: usize,
}

impl<'p, T, const N: usize> FixedPoolInserter<'p, T, N> {
    pub(crate) fn new(pool: &'p mut FixedPool<T, N>, index: usize) -> Self {
        Self { pool, index }
    }

    /// The handle that the object will have once constructed.
    #[must_use]
    pub fn handle(&self) -> Handle<T> {
        self.pool.handle_at(self.index)
    }

    /// Constructs the object and returns a shared reference to it.
    pub fn construct<'v>(self, value: T) -> &'v T
    where
        'p: 'v,
    {
        // Constructing an object always results in an exclusive reference, so this non-mut
        // method simply downgrades the exclusive reference to a shared one.
        self.construct_mut(value)
    }

    /// Constructs the object and returns an exclusive reference to it.
    pub fn construct_mut<'v>(self, value: T) -> &'v mut T
    where
        'p: 'v,
    {
        let mut ptr = self.pool.occupy(self.index, value);

        // SAFETY: The slot was just filled with an initialized T. The reference borrows the pool
        // for 'v through 'p: 'v, so no other reference to the object can be created through
        // the pool while it is alive.
        unsafe { ptr.as_mut() }
    }
}

#[cfg(test)]
mod tests {
    use crate::FixedPool;

    #[test]
    fn begin_construct_returns_slots_in_order() {
        let mut pool = FixedPool::<u32, 3>::new();

        // We expect that we construct items in order, from the start (0, 1, 2, ...).
        for (expected_index, value) in (0..3).zip(10_u32..) {
            let inserter = pool.begin_construct().unwrap();
            let handle = inserter.handle();
            assert_eq!(handle.index(), expected_index);

            assert_eq!(*inserter.construct(value), value);
            assert_eq!(pool.get(handle), Some(&value));
        }

        assert!(pool.begin_construct().is_none());
    }

    #[test]
    fn abandoned_inserter_is_noop() {
        let mut pool = FixedPool::<u32, 3>::new();

        // If you abandon an inserter, nothing happens.
        let inserter = pool.begin_construct().unwrap();
        let abandoned = inserter.handle();
        assert_eq!(abandoned.index(), 0);

        let inserter = pool.begin_construct().unwrap();
        assert_eq!(inserter.handle().index(), 0);
        inserter.construct(20);

        assert_eq!(pool.len(), 1);

        // There must still be room for 2 more.
        _ = pool.construct(123).unwrap();
        _ = pool.construct(456).unwrap();
    }

    #[test]
    fn handle_from_inserter_matches_constructed_object() {
        let mut pool = FixedPool::<u64, 2>::new();

        let inserter = pool.begin_construct().unwrap();
        let handle = inserter.handle();
        let object = inserter.construct_mut(5);

        assert_eq!(handle.as_ptr().as_ptr().cast_const(), &raw const *object);
    }
}
