use std::alloc::{Layout, alloc, dealloc};
use std::any::type_name;
use std::fmt;
use std::mem::MaybeUninit;
use std::ptr::NonNull;
use std::thread;

use num_integer::Integer;
use tracing::{debug, trace};

use crate::{
    DropPolicy, Error, FixedPoolBuilder, FixedPoolInserter, Handle, INVALID_INDEX, Result,
    SlotMeta, SlotState,
};

/// An object pool with storage for exactly `N` objects of type `T`.
///
/// The storage for all `N` objects is allocated once, when the pool is created, and released
/// once, when the pool is dropped. Constructing and destroying objects never touches the heap
/// allocator. Vacant slots are chained into a free list stored alongside the slots, so both
/// operations are constant-time.
///
/// There are multiple ways to put an object into the pool:
///
/// * [`construct()`][1] - moves a ready-made value into a vacant slot.
/// * [`construct_with()`][2] - builds the value only if a slot is available.
/// * [`try_construct_with()`][3] - as above, reporting a full pool as an [`Error`].
/// * [`begin_construct()`][4] - reserves a slot and exposes its [`Handle`] before the value
///   exists, which is useful if the value needs to know its own handle.
///
/// Every successful construction returns a [`Handle`]. Pass it to [`destroy()`][5] to drop the
/// object or to [`remove()`][6] to move it back out. A handle that does not belong to this pool,
/// or whose object has already been destroyed, is ignored by these methods and rejected by
/// their `try_` counterparts. Destroying the same object twice is therefore harmless.
///
/// # Out of band access
///
/// Objects never move while they are in the pool. [`Handle::as_ptr()`] exposes the address of
/// an object, which remains valid until the object is destroyed or the pool is dropped. The
/// raw-pointer counterpart of [`destroy()`][5] is [`destroy_ptr()`][7], which recovers the slot
/// from the address alone.
///
/// # Thread safety
///
/// All mutating methods take `&mut self`, so sharing a pool between threads requires external
/// synchronization such as a [`Mutex`][std::sync::Mutex]. The pool can be moved to another
/// thread if `T` can.
///
/// # Example
///
/// ```rust
/// use fixed_pool::FixedPool;
///
/// let mut pool = FixedPool::<String, 2>::new();
///
/// let alice = pool.construct("Alice".to_string()).unwrap();
/// let bob = pool.construct("Bob".to_string()).unwrap();
///
/// // Both slots are taken.
/// assert!(pool.construct("Charlie".to_string()).is_none());
///
/// pool.destroy(alice);
///
/// // Destroying an object returns its slot to the pool.
/// let charlie = pool.construct("Charlie".to_string()).unwrap();
/// assert_eq!(pool.get(charlie).map(String::as_str), Some("Charlie"));
/// # pool.destroy(bob);
/// # pool.destroy(charlie);
/// ```
///
/// [1]: Self::construct
/// [2]: Self::construct_with
/// [3]: Self::try_construct_with
/// [4]: Self::begin_construct
/// [5]: Self::destroy
/// [6]: Self::remove
/// [7]: Self::destroy_ptr
pub struct FixedPool<T, const N: usize> {
    /// Start of the storage block. Each slot has the stride of `T`, so the address of slot
    /// `i` is `first_slot_ptr + i`.
    first_slot_ptr: NonNull<MaybeUninit<T>>,

    /// Per-slot occupancy and generation, indexed in step with the storage block.
    slots: Box<[SlotMeta]>,

    /// Index of the next free slot. Think of this as a virtual stack of the most recently freed
    /// slots, with the stack entries stored in the slot metadata. This is `INVALID_INDEX` if
    /// the pool is full.
    next_free_index: usize,

    /// Number of occupied slots.
    len: usize,

    drop_policy: DropPolicy,
}

impl<T, const N: usize> FixedPool<T, N> {
    /// The number of objects the pool can hold at the same time.
    pub const CAPACITY: usize = N;

    /// # Panics
    ///
    /// Panics if `N` is zero or `T` is zero-sized.
    #[must_use]
    pub(crate) fn new_inner(drop_policy: DropPolicy) -> Self {
        assert!(N > 0, "FixedPool must have non-zero capacity");
        assert!(size_of::<T>() > 0, "FixedPool must have non-zero item size");
        assert!(
            N < INVALID_INDEX,
            "FixedPool capacity must be less than usize::MAX"
        );

        // SAFETY: The layout must be valid for the target type (sure, we calculate it correctly)
        // and not zero-sized (guarded by assertions above).
        let first_slot_ptr =
            NonNull::new(unsafe { alloc(Self::layout()) }.cast::<MaybeUninit<T>>()).expect(
                "we do not intend to handle allocation failure as a real possibility - OOM is panic",
            );

        let slots = (0..N)
            .map(|index| {
                let next = index
                    .checked_add(1)
                    .expect("guarded by capacity < usize::MAX above");

                // The last slot terminates the free list.
                SlotMeta::vacant(if next == N { INVALID_INDEX } else { next })
            })
            .collect();

        Self {
            first_slot_ptr,
            slots,
            next_free_index: 0,
            len: 0,
            drop_policy,
        }
    }

    /// Creates a new [`FixedPool`] with the default configuration.
    ///
    /// All `N` slots start out vacant.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fixed_pool::FixedPool;
    ///
    /// let pool = FixedPool::<u32, 16>::new();
    ///
    /// assert_eq!(pool.capacity(), 16);
    /// assert!(pool.is_empty());
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `N` is zero or `T` is zero-sized.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Starts building a new [`FixedPool`].
    ///
    /// Use this when you want to customize the pool configuration beyond the defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fixed_pool::{DropPolicy, FixedPool};
    ///
    /// let pool = FixedPool::<u32, 16>::builder()
    ///     .drop_policy(DropPolicy::MustNotDropItems)
    ///     .build();
    ///
    /// assert!(pool.is_empty());
    /// ```
    pub fn builder() -> FixedPoolBuilder<T, N> {
        FixedPoolBuilder::new()
    }

    #[must_use]
    fn layout() -> Layout {
        Layout::array::<MaybeUninit<T>>(N).expect("simple flat array layout must be calculable")
    }

    /// The number of objects the pool can hold at the same time. This never changes.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// The number of objects currently in the pool.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fixed_pool::FixedPool;
    ///
    /// let mut pool = FixedPool::<i32, 4>::new();
    /// assert_eq!(pool.len(), 0);
    ///
    /// let handle = pool.construct(42).unwrap();
    /// assert_eq!(pool.len(), 1);
    ///
    /// pool.destroy(handle);
    /// assert_eq!(pool.len(), 0);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the pool holds no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether every slot is occupied, in which case constructing another object will fail.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.next_free_index == INVALID_INDEX
    }

    /// The number of vacant slots.
    #[must_use]
    pub fn remaining(&self) -> usize {
        N.checked_sub(self.len)
            .expect("len can never exceed capacity because every insert consumes a vacant slot")
    }

    fn slot_ptr(&self, index: usize) -> NonNull<MaybeUninit<T>> {
        assert!(
            index < N,
            "slot {index} index out of bounds in pool of {}",
            type_name::<T>()
        );

        // SAFETY: Guarded by bounds check above, so we are guaranteed that the pointer is
        // within the storage block.
        unsafe { self.first_slot_ptr.add(index) }
    }

    fn meta(&self, index: usize) -> &SlotMeta {
        self.slots
            .get(index)
            .expect("slot metadata has exactly one entry per slot")
    }

    fn meta_mut(&mut self, index: usize) -> &mut SlotMeta {
        self.slots
            .get_mut(index)
            .expect("slot metadata has exactly one entry per slot")
    }

    /// The handle for the object currently in, or about to be constructed in, a slot.
    pub(crate) fn handle_at(&self, index: usize) -> Handle<T> {
        Handle::new(
            self.slot_ptr(index).cast::<T>(),
            index,
            self.meta(index).generation,
        )
    }

    /// Reserves the next vacant slot for a two-phase construction.
    ///
    /// The returned inserter knows the [`Handle`] of the object before the object exists.
    /// Abandoning the inserter leaves the pool unchanged.
    ///
    /// Returns `None` if the pool is full.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fixed_pool::{FixedPool, Handle};
    ///
    /// struct Node {
    ///     me: Handle<Node>,
    ///     value: u32,
    /// }
    ///
    /// let mut pool = FixedPool::<Node, 4>::new();
    ///
    /// let inserter = pool.begin_construct().unwrap();
    /// let handle = inserter.handle();
    /// inserter.construct(Node { me: handle, value: 7 });
    ///
    /// let node = pool.get(handle).unwrap();
    /// assert_eq!(node.me, handle);
    /// assert_eq!(node.value, 7);
    /// ```
    #[must_use]
    pub fn begin_construct<'s, 'i>(&'s mut self) -> Option<FixedPoolInserter<'i, T, N>>
    where
        's: 'i,
    {
        #[cfg(debug_assertions)]
        self.integrity_check();

        if self.is_full() {
            debug!(
                capacity = N,
                item_type = type_name::<T>(),
                "pool exhausted"
            );
            return None;
        }

        let index = self.next_free_index;

        Some(FixedPoolInserter::new(self, index))
    }

    /// Moves `value` into a vacant slot and returns its handle.
    ///
    /// Returns `None` if the pool is full, in which case `value` is dropped. Use
    /// [`construct_with()`][Self::construct_with] to avoid creating the value at all when
    /// there is no room for it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fixed_pool::FixedPool;
    ///
    /// let mut pool = FixedPool::<u64, 1>::new();
    ///
    /// let handle = pool.construct(1).unwrap();
    /// assert_eq!(pool.get(handle), Some(&1));
    ///
    /// assert!(pool.construct(2).is_none());
    /// ```
    #[must_use]
    pub fn construct(&mut self, value: T) -> Option<Handle<T>> {
        let inserter = self.begin_construct()?;
        let handle = inserter.handle();
        inserter.construct(value);
        Some(handle)
    }

    /// Builds a value with `f` and moves it into a vacant slot, returning its handle.
    ///
    /// `f` is only called if a vacant slot exists, so on a full pool this returns `None`
    /// without any side effect. If `f` panics, the slot stays vacant and the pool is unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fixed_pool::FixedPool;
    ///
    /// let mut pool = FixedPool::<Vec<u8>, 1>::new();
    ///
    /// let handle = pool.construct_with(|| vec![1, 2, 3]).unwrap();
    /// assert_eq!(pool.get(handle).map(Vec::len), Some(3));
    ///
    /// assert!(pool.construct_with(|| unreachable!("never called on a full pool")).is_none());
    /// ```
    #[must_use]
    pub fn construct_with<F>(&mut self, f: F) -> Option<Handle<T>>
    where
        F: FnOnce() -> T,
    {
        let inserter = self.begin_construct()?;
        let handle = inserter.handle();
        inserter.construct(f());
        Some(handle)
    }

    /// Like [`construct_with()`][Self::construct_with] but reports a full pool as
    /// [`Error::PoolExhausted`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::PoolExhausted`] if every slot is occupied. `f` is not called in that case.
    pub fn try_construct_with<F>(&mut self, f: F) -> Result<Handle<T>>
    where
        F: FnOnce() -> T,
    {
        self.construct_with(f)
            .ok_or(Error::PoolExhausted { capacity: N })
    }

    /// Moves `value` into the reserved slot at `index` and pops that slot off the free list.
    pub(crate) fn occupy(&mut self, index: usize, value: T) -> NonNull<T> {
        let slot_ptr = self.slot_ptr(index).cast::<T>();

        let meta = self.meta_mut(index);

        let SlotState::Vacant { next_free_index } = meta.state else {
            panic!(
                "slot {index} was not vacant when we constructed into it in pool of {}",
                type_name::<T>()
            );
        };

        // SAFETY: The pointer is in bounds, aligned for T and the slot is vacant, so nothing else
        // refers to this memory and writing a new value does not overwrite a live one.
        unsafe {
            slot_ptr.write(value);
        }

        meta.state = SlotState::Occupied;
        let generation = meta.generation;

        self.next_free_index = next_free_index;
        self.len = self
            .len
            .checked_add(1)
            .expect("guarded by the slot being vacant, so len < capacity");

        trace!(index, generation, "object constructed");

        slot_ptr
    }

    /// Moves the value out of an occupied slot and pushes the slot onto the free list.
    ///
    /// The pool is fully consistent again by the time the caller gets the value, so a panic
    /// in the value's destructor cannot corrupt the free list.
    fn vacate(&mut self, index: usize) -> T {
        let slot_ptr = self.slot_ptr(index).cast::<T>();
        let next_free_index = self.next_free_index;

        let meta = self.meta_mut(index);

        assert!(
            meta.is_occupied(),
            "slot {index} was vacant when we tried to empty it in pool of {}",
            type_name::<T>()
        );

        // SAFETY: The slot is occupied, so it holds an initialized T. We mark it vacant right
        // after reading, so the value is never read or dropped again from the slot.
        let value = unsafe { slot_ptr.read() };

        meta.retire(next_free_index);
        let generation = meta.generation;

        self.next_free_index = index;
        self.len = self
            .len
            .checked_sub(1)
            .expect("we asserted above that the slot is occupied so len must be non-zero");

        trace!(index, generation, "object destroyed");

        value
    }

    /// Resolves a handle to the index of the occupied slot it refers to.
    fn validate(&self, handle: Handle<T>) -> Result<usize> {
        let index = handle.index();

        if index >= N || self.slot_ptr(index).cast::<T>() != handle.as_ptr() {
            return Err(Error::ForeignHandle { index });
        }

        let meta = self.meta(index);

        if !meta.is_occupied() || meta.generation != handle.generation() {
            return Err(Error::StaleHandle {
                index,
                generation: handle.generation(),
            });
        }

        Ok(index)
    }

    /// Whether `handle` refers to an object that is currently in this pool.
    #[must_use]
    pub fn contains(&self, handle: Handle<T>) -> bool {
        self.validate(handle).is_ok()
    }

    /// Gets a shared reference to the object identified by `handle`.
    ///
    /// Returns `None` if the handle does not belong to this pool or its object was destroyed.
    #[must_use]
    pub fn get(&self, handle: Handle<T>) -> Option<&T> {
        self.try_get(handle).ok()
    }

    /// Gets an exclusive reference to the object identified by `handle`.
    ///
    /// Returns `None` if the handle does not belong to this pool or its object was destroyed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fixed_pool::FixedPool;
    ///
    /// let mut pool = FixedPool::<String, 2>::new();
    /// let handle = pool.construct("Hello".to_string()).unwrap();
    ///
    /// pool.get_mut(handle).unwrap().push_str(", World!");
    ///
    /// assert_eq!(pool.get(handle).map(String::as_str), Some("Hello, World!"));
    /// ```
    #[must_use]
    pub fn get_mut(&mut self, handle: Handle<T>) -> Option<&mut T> {
        self.try_get_mut(handle).ok()
    }

    /// Gets a shared reference to the object identified by `handle`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ForeignHandle`] if the handle was not issued by this pool and
    /// [`Error::StaleHandle`] if its object has been destroyed.
    pub fn try_get(&self, handle: Handle<T>) -> Result<&T> {
        self.validate(handle)?;

        // SAFETY: The handle was validated against an occupied slot of this pool, so the pointer
        // refers to an initialized T. The returned borrow is tied to &self, which prevents any
        // conflicting &mut from being created through the pool.
        Ok(unsafe { handle.as_ptr().as_ref() })
    }

    /// Gets an exclusive reference to the object identified by `handle`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ForeignHandle`] if the handle was not issued by this pool and
    /// [`Error::StaleHandle`] if its object has been destroyed.
    pub fn try_get_mut(&mut self, handle: Handle<T>) -> Result<&mut T> {
        self.validate(handle)?;

        let mut ptr = handle.as_ptr();

        // SAFETY: The handle was validated against an occupied slot of this pool, so the pointer
        // refers to an initialized T. The returned borrow is tied to &mut self, so it is the only
        // reference created through the pool.
        Ok(unsafe { ptr.as_mut() })
    }

    /// Drops the object identified by `handle` and returns its slot to the pool.
    ///
    /// The most recently freed slot is the first to be reused.
    ///
    /// A handle that does not belong to this pool, or whose object has already been destroyed,
    /// is ignored. Use [`try_destroy()`][Self::try_destroy] to find out whether the call had
    /// any effect.
    pub fn destroy(&mut self, handle: Handle<T>) {
        match self.validate(handle) {
            Ok(index) => drop(self.vacate(index)),
            Err(error) => debug!(
                item_type = type_name::<T>(),
                %error,
                "ignoring destroy with invalid handle"
            ),
        }
    }

    /// Drops the object identified by `handle` and returns its slot to the pool.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ForeignHandle`] if the handle was not issued by this pool and
    /// [`Error::StaleHandle`] if its object has already been destroyed. The pool is unchanged
    /// in both cases.
    pub fn try_destroy(&mut self, handle: Handle<T>) -> Result<()> {
        let index = self.validate(handle)?;
        drop(self.vacate(index));
        Ok(())
    }

    /// Moves the object identified by `handle` out of the pool and returns its slot to the pool.
    ///
    /// Returns `None`, leaving the pool unchanged, if the handle does not belong to this pool
    /// or its object has already been destroyed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fixed_pool::FixedPool;
    ///
    /// let mut pool = FixedPool::<String, 2>::new();
    /// let handle = pool.construct("Hello".to_string()).unwrap();
    ///
    /// assert_eq!(pool.remove(handle).as_deref(), Some("Hello"));
    /// assert!(pool.is_empty());
    ///
    /// assert_eq!(pool.remove(handle), None);
    /// ```
    #[must_use]
    pub fn remove(&mut self, handle: Handle<T>) -> Option<T> {
        let index = self.validate(handle).ok()?;
        Some(self.vacate(index))
    }

    /// Resolves an address to the index of the slot that starts at it.
    fn index_of_ptr(&self, ptr: *const T) -> Option<usize> {
        let offset = ptr
            .addr()
            .checked_sub(self.first_slot_ptr.as_ptr().addr())?;

        let (index, remainder) = offset.div_rem(&size_of::<T>());

        (remainder == 0 && index < N).then_some(index)
    }

    /// Drops the object at `ptr` and returns its slot to the pool.
    ///
    /// This is the raw pointer counterpart of [`destroy()`][Self::destroy], for callers that
    /// only kept the address from [`Handle::as_ptr()`]. The slot is recovered from the address
    /// relative to the start of the pool's storage.
    ///
    /// The call does nothing if:
    ///
    /// * `ptr` is null.
    /// * `ptr` does not point to the start of a slot in this pool's storage.
    /// * the slot at `ptr` is vacant, e.g. because its object was already destroyed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fixed_pool::FixedPool;
    ///
    /// let mut pool = FixedPool::<u32, 2>::new();
    /// let ptr = pool.construct(5).unwrap().as_ptr();
    ///
    /// pool.destroy_ptr(ptr.as_ptr());
    /// assert!(pool.is_empty());
    ///
    /// // Null and repeated destroys are ignored.
    /// pool.destroy_ptr(std::ptr::null());
    /// pool.destroy_ptr(ptr.as_ptr());
    /// assert_eq!(pool.remaining(), 2);
    /// ```
    pub fn destroy_ptr(&mut self, ptr: *const T) {
        if ptr.is_null() {
            return;
        }

        let Some(index) = self.index_of_ptr(ptr) else {
            debug!(
                item_type = type_name::<T>(),
                ?ptr,
                "ignoring destroy of pointer outside the pool"
            );
            return;
        };

        if !self.meta(index).is_occupied() {
            debug!(
                item_type = type_name::<T>(),
                index,
                "ignoring destroy of vacant slot"
            );
            return;
        }

        drop(self.vacate(index));
    }

    /// Drops every object in the pool, leaving all `N` slots vacant.
    ///
    /// All previously issued handles become invalid.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fixed_pool::FixedPool;
    ///
    /// let mut pool = FixedPool::<u32, 3>::new();
    /// let a = pool.construct(1).unwrap();
    /// let b = pool.construct(2).unwrap();
    ///
    /// pool.clear();
    ///
    /// assert!(pool.is_empty());
    /// assert!(!pool.contains(a));
    /// assert!(!pool.contains(b));
    /// ```
    pub fn clear(&mut self) {
        for index in 0..N {
            if self.meta(index).is_occupied() {
                drop(self.vacate(index));
            }
        }

        // Vacating pushed the slots in reverse order. Relink them so that a cleared pool hands
        // out slots in the same order as a new one.
        for index in 0..N {
            let next = index
                .checked_add(1)
                .expect("guarded by capacity < usize::MAX in pool ctor");

            self.meta_mut(index).state = SlotState::Vacant {
                next_free_index: if next == N { INVALID_INDEX } else { next },
            };
        }

        self.next_free_index = 0;

        debug!(
            capacity = N,
            item_type = type_name::<T>(),
            "pool cleared"
        );
    }

    #[cfg_attr(test, mutants::skip)] // This is essentially test logic, mutation is meaningless.
    #[cfg(debug_assertions)]
    pub(crate) fn integrity_check(&self) {
        let mut free_count: usize = 0;
        let mut index = self.next_free_index;

        // No scratch buffer: this runs on every construct and must not allocate. A chain that
        // visits any slot twice never terminates, so it is caught by the step limit instead.
        while index != INVALID_INDEX {
            assert!(
                index < N,
                "free list points out of bounds to {index} in pool of {}",
                type_name::<T>()
            );

            assert!(
                free_count < N,
                "free list contains a cycle, it is longer than capacity {N} in pool of {}",
                type_name::<T>()
            );

            index = match self.meta(index).state {
                SlotState::Vacant { next_free_index } => next_free_index,
                SlotState::Occupied => panic!(
                    "free list passes through occupied slot {index} in pool of {}",
                    type_name::<T>()
                ),
            };

            free_count = free_count
                .checked_add(1)
                .expect("guarded by the step limit above, so at most N steps");
        }

        let occupied_count = self.slots.iter().filter(|meta| meta.is_occupied()).count();

        assert!(
            self.len == occupied_count,
            "self.len {} does not match the observed occupied count {} in pool of {}",
            self.len,
            occupied_count,
            type_name::<T>()
        );

        assert!(
            free_count.checked_add(occupied_count) == Some(N),
            "{free_count} slots reachable from the free list and {occupied_count} occupied slots do not add up to capacity {N} in pool of {}",
            type_name::<T>()
        );
    }
}

impl<T, const N: usize> Default for FixedPool<T, N> {
    /// Creates a new [`FixedPool`] with the default configuration.
    ///
    /// # Panics
    ///
    /// Panics if `N` is zero or `T` is zero-sized.
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for FixedPool<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedPool")
            .field("item_type", &format_args!("{}", type_name::<T>()))
            .field("capacity", &N)
            .field("len", &self.len)
            .field("next_free_index", &self.next_free_index)
            .field("drop_policy", &self.drop_policy)
            .finish_non_exhaustive()
    }
}

impl<T, const N: usize> Drop for FixedPool<T, N> {
    fn drop(&mut self) {
        let was_empty = self.is_empty();

        for index in 0..N {
            if self.meta(index).is_occupied() {
                drop(self.vacate(index));
            }
        }

        // SAFETY: The layout must match between alloc and dealloc. It does.
        unsafe {
            dealloc(self.first_slot_ptr.as_ptr().cast(), Self::layout());
        }

        // We do this check at the end so we clean up the memory first. If we are already
        // panicking, we do not want to panic again because that will simply obscure whatever
        // the original panic was.
        if self.drop_policy == DropPolicy::MustNotDropItems && !thread::panicking() {
            assert!(
                was_empty,
                "dropped a non-empty pool of {} with a policy that says it must be empty when dropped",
                type_name::<T>()
            );
        }
    }
}

// SAFETY: The raw pointer is only an address of storage exclusively owned by the pool, so as
// long as T itself can move between threads, the pool can do so, too.
unsafe impl<T: Send, const N: usize> Send for FixedPool<T, N> {}

// SAFETY: Through a shared reference the pool only hands out shared references to its objects,
// which is fine as long as T can be shared between threads.
unsafe impl<T: Sync, const N: usize> Sync for FixedPool<T, N> {}
