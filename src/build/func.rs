use std::marker::PhantomData;

use crate::{Step, Stream};

/// A stream whose step function is a closure.
pub struct FromFn<F>(F);

/// Create a stream from a closure returning one [`Step`] per call.
///
/// The closure owns whatever state the stream needs.
///
/// ```rust
/// use streams::prelude::*;
///
/// let mut countdown = 3;
/// let s = from_fn(move || {
///     if countdown == 0 {
///         return Step::Done;
///     }
///     countdown -= 1;
///     Step::More(countdown)
/// });
/// assert_eq!(s.collect(), vec![2, 1, 0]);
/// ```
pub fn from_fn<T, F>(f: F) -> FromFn<F>
where
    F: FnMut() -> Step<T>,
{
    FromFn(f)
}

impl<T, F> Stream for FromFn<F>
where
    F: FnMut() -> Step<T>,
{
    type Item = T;

    fn advance(&mut self) -> Step<T> {
        (self.0)()
    }
}

/// Calls a generator on every advance and never exhausts.
///
/// Consumers must bound it themselves, e.g. with `take` or by zipping it with a
/// finite stream.
pub struct Infinite<F>(F);

/// Create an unbounded stream from a zero-argument generator.
///
/// ```rust
/// use streams::prelude::*;
///
/// let mut n = 1;
/// let powers = infinite(move || {
///     n *= 2;
///     n
/// });
/// assert_eq!(powers.take(4), vec![2, 4, 8, 16]);
/// ```
pub fn infinite<T, F>(generator: F) -> Infinite<F>
where
    F: FnMut() -> T,
{
    Infinite(generator)
}

impl<T, F> Stream for Infinite<F>
where
    F: FnMut() -> T,
{
    type Item = T;

    fn advance(&mut self) -> Step<T> {
        Step::More((self.0)())
    }
}

/// Counts `0, 1, 2, ...` forever.
#[derive(Debug, Clone, Default)]
pub struct Iota {
    next: usize,
}

/// Create an unbounded stream of natural numbers starting at zero.
///
/// Wraps back to zero after `usize::MAX`.
pub fn iota() -> Iota {
    Iota { next: 0 }
}

impl Stream for Iota {
    type Item = usize;

    fn advance(&mut self) -> Step<usize> {
        let value = self.next;
        self.next = value.wrapping_add(1);
        Step::More(value)
    }
}

/// A stream that never produces anything.
pub struct Empty<T>(PhantomData<fn() -> T>);

/// Create an exhausted stream.
pub fn empty<T>() -> Empty<T> {
    Empty(PhantomData)
}

impl<T> Stream for Empty<T> {
    type Item = T;

    fn advance(&mut self) -> Step<T> {
        Step::Done
    }
}
