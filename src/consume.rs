//! Functions for driving streams to completion.
//!
//! Every consumer here is a loop over [`Stream::advance`]. [`reduce`] is the general
//! fold; [`collect`], [`take`] and [`count`] are folds over a composed stream, and
//! [`fill`] stops early through [`for_each_control`].

use crate::build::{indices, range};
use crate::compose::{map, zip};
use crate::{Step, Stream};

/// Tells [`for_each_control`] whether to keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    /// Stop now, leaving the rest of the stream undrained
    Break,
    /// Advance the stream again
    Continue,
}

/// Drive `stream` to exhaustion, calling `f` with each value.
pub fn for_each<S, F>(mut stream: S, mut f: F)
where
    S: Stream,
    F: FnMut(S::Item),
{
    while let Step::More(value) = stream.advance() {
        f(value);
    }
}

/// Drive `stream` until it is exhausted or `f` returns [`Control::Break`].
///
/// Returns `Break` if `f` stopped the loop and `Continue` if the stream ran out.
///
/// ```rust
/// use streams::prelude::*;
///
/// let mut seen = Vec::new();
/// let stopped = for_each_control(range(1, 5), |x| {
///     seen.push(x);
///     if x == 3 { Control::Break } else { Control::Continue }
/// });
/// assert_eq!(stopped, Control::Break);
/// assert_eq!(seen, vec![1, 2, 3]);
/// ```
pub fn for_each_control<S, F>(mut stream: S, mut f: F) -> Control
where
    S: Stream,
    F: FnMut(S::Item) -> Control,
{
    while let Step::More(value) = stream.advance() {
        if f(value) == Control::Break {
            return Control::Break;
        }
    }
    Control::Continue
}

/// Left-fold `stream` into `init`, in production order.
///
/// ```rust
/// use streams::prelude::*;
///
/// assert_eq!(reduce(range(0, 1000), 0, |acc, x| acc + x), 499500);
/// ```
pub fn reduce<S, B, F>(mut stream: S, init: B, mut combine: F) -> B
where
    S: Stream,
    F: FnMut(B, S::Item) -> B,
{
    let mut acc = init;
    while let Step::More(value) = stream.advance() {
        acc = combine(acc, value);
    }
    acc
}

/// Gather every value of `stream` into a `Vec`.
pub fn collect<S: Stream>(stream: S) -> Vec<S::Item> {
    reduce(stream, Vec::new(), |mut out, value| {
        out.push(value);
        out
    })
}

/// Gather at most `n` values of `stream` into a `Vec`.
///
/// The counter is advanced before `stream`, so `stream` is never advanced past its
/// `n`th value and can be resumed afterwards through a `&mut` borrow.
///
/// ```rust
/// use streams::prelude::*;
///
/// let mut naturals = iota();
/// assert_eq!(take(&mut naturals, 3), vec![0, 1, 2]);
/// assert_eq!(take(&mut naturals, 2), vec![3, 4]);
/// ```
pub fn take<S: Stream>(stream: S, n: usize) -> Vec<S::Item> {
    collect(map(zip(range(0, n), stream), |pair| pair.second))
}

/// Count the values left in `stream`.
pub fn count<S: Stream>(stream: S) -> usize {
    reduce(stream, 0, |n, _| n + 1)
}

/// Write values of `stream` into `dest` in index order.
///
/// Stops early if `stream` runs out, leaving the trailing slots untouched. Returns
/// the number of slots written.
///
/// ```rust
/// use streams::prelude::*;
///
/// let mut buf = [0; 5];
/// assert_eq!(fill(&mut buf, range(1, 4)), 3);
/// assert_eq!(buf, [1, 2, 3, 0, 0]);
/// ```
pub fn fill<S: Stream>(dest: &mut [S::Item], mut stream: S) -> usize {
    let mut written = 0;
    let outcome = for_each_control(indices(dest), |i| {
        let (Some(slot), Step::More(value)) = (dest.get_mut(i), stream.advance()) else {
            return Control::Break;
        };
        *slot = value;
        written += 1;
        Control::Continue
    });
    if outcome == Control::Break {
        tracing::debug!(
            written,
            len = dest.len(),
            "fill: stream ran out before destination was full"
        );
    }
    written
}

/// Gather `Ok` values of `stream` until the first `Err`, which is returned instead.
///
/// Values after the first `Err` are left in the stream.
pub fn try_collect<S, T, E>(mut stream: S) -> Result<Vec<T>, E>
where
    S: Stream<Item = Result<T, E>>,
{
    let mut out = Vec::new();
    while let Step::More(value) = stream.advance() {
        out.push(value?);
    }
    Ok(out)
}
