/// Determines what happens to live objects when a [`FixedPool`][crate::FixedPool] is dropped.
///
/// By default, the pool destroys every object that is still in it before releasing its storage.
///
/// # Examples
///
/// ```
/// use fixed_pool::{DropPolicy, FixedPool};
///
/// // The drop policy is set at pool creation time.
/// let pool = FixedPool::<u32, 4>::builder()
///     .drop_policy(DropPolicy::MustNotDropItems)
///     .build();
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[non_exhaustive]
pub enum DropPolicy {
    /// The pool will drop any objects still in it when the pool is dropped. This is the default.
    #[default]
    MayDropItems,

    /// The pool will panic if it still contains objects when it is dropped.
    ///
    /// Use this when every construction is expected to be paired with a destroy, so that a
    /// forgotten object is reported instead of being silently cleaned up. The storage itself is
    /// still released before the panic.
    MustNotDropItems,
}
