/// Marks the end of the free list. When the head of the free list holds this value, every slot
/// in the pool is occupied.
pub(crate) const INVALID_INDEX: usize = usize::MAX;

/// Bookkeeping for one storage slot of a pool.
///
/// The value itself lives in the pool's storage block at the same index. The metadata is kept
/// in a separate array so that the storage block has exactly the stride of `T`, which is what
/// allows a slot index to be recovered from a raw pointer.
#[derive(Debug)]
pub(crate) struct SlotMeta {
    pub(crate) state: SlotState,

    /// Incremented every time the object in this slot is destroyed. A handle is only valid while
    /// its generation matches the slot's.
    pub(crate) generation: u64,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum SlotState {
    /// The slot holds a fully constructed value.
    Occupied,

    /// The slot holds no value and is linked into the free list.
    Vacant { next_free_index: usize },
}

impl SlotMeta {
    pub(crate) fn vacant(next_free_index: usize) -> Self {
        Self {
            state: SlotState::Vacant { next_free_index },
            generation: 0,
        }
    }

    #[must_use]
    pub(crate) fn is_occupied(&self) -> bool {
        matches!(self.state, SlotState::Occupied)
    }

    /// Links a just-emptied slot back into the free list and invalidates outstanding handles.
    pub(crate) fn retire(&mut self, next_free_index: usize) {
        debug_assert!(self.is_occupied(), "only occupied slots can be retired");

        self.state = SlotState::Vacant { next_free_index };
        self.generation = self.generation.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retire_bumps_generation() {
        let mut meta = SlotMeta::vacant(1);
        assert!(!meta.is_occupied());

        meta.state = SlotState::Occupied;
        assert!(meta.is_occupied());

        meta.retire(INVALID_INDEX);

        assert_eq!(
            meta.state,
            SlotState::Vacant {
                next_free_index: INVALID_INDEX
            }
        );
        assert_eq!(meta.generation, 1);
    }

    #[test]
    fn generation_wraps_around() {
        let mut meta = SlotMeta::vacant(0);
        meta.generation = u64::MAX;
        meta.state = SlotState::Occupied;

        meta.retire(0);

        assert_eq!(meta.generation, 0);
    }
}
