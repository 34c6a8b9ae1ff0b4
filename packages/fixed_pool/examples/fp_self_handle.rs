//! Objects that know their own handle, built with `begin_construct()`.
//!
//! The inserter picks a slot before the object exists, so the handle can be stored inside the
//! object. Here we use it to build a small intrusive linked list inside a fixed pool.

use fixed_pool::{FixedPool, Handle};

struct Node {
    me: Handle<Node>,
    next: Option<Handle<Node>>,
    label: &'static str,
}

fn main() {
    let mut pool = FixedPool::<Node, 4>::new();

    let mut head: Option<Handle<Node>> = None;

    for label in ["first", "second", "third"] {
        let inserter = pool.begin_construct().expect("pool has room for three nodes");
        let me = inserter.handle();

        inserter.construct(Node {
            me,
            next: head,
            label,
        });

        head = Some(me);
    }

    let mut cursor = head;
    while let Some(handle) = cursor {
        let node = pool.get(handle).expect("all nodes are still in the pool");
        println!("{} lives in slot {}", node.label, node.me.index());
        cursor = node.next;
    }
}
