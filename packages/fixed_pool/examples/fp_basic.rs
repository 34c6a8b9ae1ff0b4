//! Basic usage of the `fixed_pool` crate:
//!
//! * Creating a pool.
//! * Constructing objects until the pool is full.
//! * Retrieving and modifying objects.
//! * Destroying objects to make room for new ones.

use fixed_pool::FixedPool;

fn main() {
    let mut pool = FixedPool::<String, 3>::new();

    // Constructing an object gives you a handle that you can later use to look it up again.
    let alice = pool.construct("Alice".to_string()).unwrap();
    let bob = pool.construct("Bob".to_string()).unwrap();
    let charlie = pool.construct("Charlie".to_string()).unwrap();

    println!(
        "Object pool contains {} objects, with a fixed capacity of {}",
        pool.len(),
        pool.capacity()
    );

    // The capacity is fixed, so there is no room for a fourth object.
    if pool.construct("Dave".to_string()).is_none() {
        println!("Pool is full, Dave has to wait");
    }

    pool.destroy(bob);

    // The slot freed by Bob is reused for Dave.
    let dave = pool.construct("Dave".to_string()).unwrap();
    println!("Dave got slot {}, which used to be Bob's", dave.index());

    // Bob's handle is stale now, so it no longer resolves, even though the slot is reused.
    println!("Looking up Bob: {:?}", pool.get(bob));

    // You can also modify the objects in-place.
    if let Some(name) = pool.get_mut(alice) {
        name.push_str(" Smith");
    }

    println!("Modified object: {:?}", pool.get(alice));

    pool.destroy(charlie);
    pool.destroy(dave);

    // Alice is still in the pool. The default drop policy drops her along with the pool.
}
