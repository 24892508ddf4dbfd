const INLINE_STACK_SIZE: usize = 16;

/// Explicit stack for iterative traversals.
#[cfg(feature = "smallvec")]
pub(crate) type Stack<T> = smallvec::SmallVec<[T; INLINE_STACK_SIZE]>;
#[cfg(not(feature = "smallvec"))]
pub(crate) type Stack<T> = alloc::vec::Vec<T>;

/// Creates an empty stack, reserving inline space for the first few levels if the storage supports it.
#[inline(always)]
pub(crate) fn stack<T>() -> Stack<T> {
    #[cfg(not(feature = "smallvec"))]
    {
        Stack::with_capacity(INLINE_STACK_SIZE)
    }
    #[cfg(feature = "smallvec")]
    {
        Stack::new()
    }
}
