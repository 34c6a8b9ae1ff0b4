//! Verifies that constructing and destroying objects never goes through the global allocator.
//! The pool allocates its storage once on creation and reuses it for every object.

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

use fixed_pool::FixedPool;

thread_local! {
    // Counted per thread so that allocations made by other test harness threads do not leak in.
    static ALLOCATIONS: Cell<usize> = const { Cell::new(0) };
}

fn record_allocation() {
    // The slot may already be gone during thread teardown, in which case there is nothing to count.
    _ = ALLOCATIONS.try_with(|count| count.set(count.get().wrapping_add(1)));
}

fn allocations() -> usize {
    ALLOCATIONS.with(Cell::get)
}

struct CountingAllocator;

// SAFETY: Every call is forwarded unchanged to the system allocator, which upholds the contract.
unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        record_allocation();

        // SAFETY: Forwarding the caller's guarantees about `layout`.
        unsafe { System.alloc(layout) }
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        record_allocation();

        // SAFETY: Forwarding the caller's guarantees about `layout`.
        unsafe { System.alloc_zeroed(layout) }
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        record_allocation();

        // SAFETY: Forwarding the caller's guarantees about `ptr`, `layout` and `new_size`.
        unsafe { System.realloc(ptr, layout, new_size) }
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        // SAFETY: Forwarding the caller's guarantees about `ptr` and `layout`.
        unsafe { System.dealloc(ptr, layout) }
    }
}

#[global_allocator]
static ALLOCATOR: CountingAllocator = CountingAllocator;

const CAPACITY: usize = 8;

fn fill_and_drain(pool: &mut FixedPool<u64, CAPACITY>) {
    let mut handles = [None; CAPACITY];

    for (value, handle) in (0_u64..).zip(handles.iter_mut()) {
        *handle = if value % 2 == 0 {
            pool.construct(value)
        } else {
            pool.construct_with(|| value)
        };
    }

    assert!(pool.is_full());
    assert!(pool.construct(99).is_none());

    for (position, handle) in handles.iter().flatten().enumerate() {
        match position % 3 {
            0 => pool.destroy(*handle),
            1 => pool.destroy_ptr(handle.as_ptr().as_ptr()),
            _ => assert!(pool.remove(*handle).is_some()),
        }
    }

    assert!(pool.is_empty());
}

#[test]
fn construct_and_destroy_do_not_allocate() {
    let mut pool = FixedPool::<u64, CAPACITY>::new();

    // One untracked cycle first, so one-time work such as registering logging callsites is
    // not attributed to the pool.
    fill_and_drain(&mut pool);

    let before = allocations();

    fill_and_drain(&mut pool);
    fill_and_drain(&mut pool);

    let after = allocations();

    assert_eq!(after.wrapping_sub(before), 0);
}
