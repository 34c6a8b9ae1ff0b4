use std::any::type_name;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ptr::NonNull;

/// Identifies an object constructed in a [`FixedPool`][crate::FixedPool].
///
/// A handle pairs the address of the object with the index of its slot and the slot's
/// generation at the time of construction. The pool checks all three before it touches the
/// object, so a handle from a different pool or a handle whose object has already been
/// destroyed is rejected instead of corrupting the pool.
///
/// Handles are cheap to copy. Holding a handle does not keep the object alive.
///
/// # Example
///
/// ```rust
/// use fixed_pool::FixedPool;
///
/// let mut pool = FixedPool::<u64, 4>::new();
///
/// let handle = pool.construct(42).unwrap();
/// assert_eq!(pool.get(handle), Some(&42));
///
/// pool.destroy(handle);
///
/// // The object is gone, so the handle no longer resolves.
/// assert_eq!(pool.get(handle), None);
/// ```
pub struct Handle<T> {
    ptr: NonNull<T>,
    index: usize,
    generation: u64,
}

impl<T> Handle<T> {
    pub(crate) fn new(ptr: NonNull<T>, index: usize, generation: u64) -> Self {
        Self {
            ptr,
            index,
            generation,
        }
    }

    /// The address of the object in the pool's storage.
    ///
    /// The pointer is valid for reads and writes until the object is destroyed or the pool is
    /// dropped. The pool never moves its objects, so the address is stable even if the pool
    /// itself is moved. Dereferencing it is only sound while no reference obtained from the
    /// pool (e.g. via [`get_mut()`][crate::FixedPool::get_mut]) is alive.
    #[must_use]
    pub fn as_ptr(&self) -> NonNull<T> {
        self.ptr
    }

    /// The index of the slot that holds the object.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }
}

impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Handle<T> {}

impl<T> PartialEq for Handle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr == other.ptr && self.index == other.index && self.generation == other.generation
    }
}

impl<T> Eq for Handle<T> {}

impl<T> Hash for Handle<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ptr.hash(state);
        self.index.hash(state);
        self.generation.hash(state);
    }
}

impl<T> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle")
            .field("item_type", &format_args!("{}", type_name::<T>()))
            .field("ptr", &self.ptr)
            .field("index", &self.index)
            .field("generation", &self.generation)
            .finish()
    }
}

// SAFETY: A handle is an identifier. It never dereferences its pointer by itself and the pool
// validates it before use, so moving or sharing it between threads is harmless.
unsafe impl<T> Send for Handle<T> {}

// SAFETY: See above.
unsafe impl<T> Sync for Handle<T> {}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::collections::HashSet;

    use static_assertions::assert_impl_all;

    use super::*;

    // Handles are identifiers, so even handles to thread-bound types can cross threads.
    assert_impl_all!(Handle<Cell<u32>>: Send, Sync, Copy);

    #[test]
    fn equality_covers_all_parts() {
        let mut value = 5_u32;
        let ptr = NonNull::from(&mut value);

        let a = Handle::new(ptr, 0, 0);
        let b = Handle::new(ptr, 0, 0);
        let newer = Handle::new(ptr, 0, 1);

        assert_eq!(a, b);
        assert_ne!(a, newer);

        let set: HashSet<_> = [a, b, newer].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn debug_names_item_type() {
        let mut value = 5_u32;
        let handle = Handle::new(NonNull::from(&mut value), 3, 9);

        let text = format!("{handle:?}");
        assert!(text.contains("u32"));
        assert!(text.contains("index: 3"));
        assert!(text.contains("generation: 9"));
    }
}
