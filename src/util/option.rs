use std::hint;

pub(crate) trait OptionExtension<T> {
    /// Acts like [`Option::unwrap`], but treats [`None`] as impossible: [`unreachable!`] in debug
    /// builds and [`unreachable_unchecked`](hint::unreachable_unchecked) in release builds.
    ///
    /// # Safety
    /// The caller must ensure that the Option is [`Some`].
    unsafe fn unreachable(self) -> T;
}

impl<T> OptionExtension<T> for Option<T> {
    unsafe fn unreachable(self) -> T {
        match self {
            Some(value) => value,
            None if cfg!(debug_assertions) => unreachable!(),
            // SAFETY: The caller guarantees that this Option is Some.
            None => unsafe { hint::unreachable_unchecked() },
        }
    }
}
