//! Core trait for lazy, pull-based streams.
//!
//! This module defines the [`Stream`] trait, the one capability every source,
//! transformation and consumer in this crate is built on. A [`Stream`] is a stateful
//! step function: each call to [`advance`](Stream::advance) either produces one value
//! or reports that the stream is exhausted.
//!
//! # Examples
//!
//! ```rust
//! use streams::prelude::*;
//!
//! let mut evens = range(0, 10).filter(|x| x % 2 == 0).map(|x| x * 10);
//! assert_eq!(evens.advance(), Step::More(0));
//! assert_eq!(evens.advance(), Step::More(20));
//! assert_eq!(evens.collect(), vec![40, 60, 80]);
//! ```

use std::{
    cell::RefCell,
    rc::Rc,
    sync::{Arc, Mutex},
};

use crate::{
    compose::{chain, filter, fuse, map, zip, Chain, Filter, Fuse, Map, Zip},
    consume::{self, Control},
    iter::StreamIter,
    step::Step,
};

/// Stateful producer of a lazily computed series of values.
///
/// Calling `advance()` either yields one value (`Step::More`) or signals
/// exhaustion (`Step::Done`). Nothing is computed until a consumer drives the
/// stream. Streams are single-consumer: each advance mutates the stream's own
/// position.
///
/// Every stream in this crate keeps returning `Done` once it has returned `Done`,
/// as long as its upstreams do. Use [`fuse`](Stream::fuse) to get the same
/// guarantee from a hand-written stream.
pub trait Stream {
    /// Type of value produced on each step
    type Item;

    /// Produce the next value, or `Done` if the stream is exhausted.
    fn advance(&mut self) -> Step<Self::Item>;

    /// Transform each produced value with `f`.
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> U,
    {
        map(self, f)
    }

    /// Keep only values for which `predicate` holds.
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        filter(self, predicate)
    }

    /// Pair this stream's values with `other`'s, stopping at the shorter one.
    fn zip<B>(self, other: B) -> Zip<Self, B>
    where
        Self: Sized,
        B: Stream,
    {
        zip(self, other)
    }

    /// Produce every value of this stream, then every value of `next`.
    fn chain<B>(self, next: B) -> Chain<Self, B>
    where
        Self: Sized,
        B: Stream<Item = Self::Item>,
    {
        chain(self, next)
    }

    /// Stop advancing the upstream after its first `Done`.
    fn fuse(self) -> Fuse<Self>
    where
        Self: Sized,
    {
        fuse(self)
    }

    /// Erase the concrete stream type.
    fn boxed<'a>(self) -> Box<dyn Stream<Item = Self::Item> + 'a>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }

    /// Drive the stream to exhaustion, calling `f` on every value.
    fn for_each<F>(self, f: F)
    where
        Self: Sized,
        F: FnMut(Self::Item),
    {
        consume::for_each(self, f)
    }

    /// Drive the stream until it is exhausted or `f` returns [`Control::Break`].
    fn for_each_control<F>(self, f: F) -> Control
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Control,
    {
        consume::for_each_control(self, f)
    }

    /// Left-fold every value into an accumulator.
    fn reduce<B, F>(self, init: B, combine: F) -> B
    where
        Self: Sized,
        F: FnMut(B, Self::Item) -> B,
    {
        consume::reduce(self, init, combine)
    }

    /// Gather every value into a `Vec`, in production order.
    fn collect(self) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        consume::collect(self)
    }

    /// Gather at most `n` values into a `Vec`.
    fn take(self, n: usize) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        consume::take(self, n)
    }

    /// Write values into `dest` slot by slot; returns how many slots were written.
    fn fill(self, dest: &mut [Self::Item]) -> usize
    where
        Self: Sized,
    {
        consume::fill(dest, self)
    }

    /// Count the values left in the stream.
    fn count(self) -> usize
    where
        Self: Sized,
    {
        consume::count(self)
    }

    /// Gather `Ok` values until the first `Err`, which is returned instead.
    fn try_collect<T, E>(self) -> Result<Vec<T>, E>
    where
        Self: Sized + Stream<Item = Result<T, E>>,
    {
        consume::try_collect(self)
    }

    /// Adapt the stream into a std [`Iterator`].
    fn into_iter(self) -> StreamIter<Self>
    where
        Self: Sized,
    {
        StreamIter::new(self)
    }
}

/// Error produced by a [`Shared`] stream whose lock was poisoned by a panicking holder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("shared stream lock was poisoned")]
pub struct PoisonError;

/// A cloneable handle that lets several threads drive one stream in turn.
///
/// Each advance locks the underlying stream for exactly one step, so values are
/// handed out to whichever handle asks first and no value is produced twice.
/// Failure to lock is reported in the element type: a handle that finds the lock
/// poisoned yields one `Err(PoisonError)` and is exhausted from then on. A clone
/// starts unexhausted and checks the lock itself.
pub struct Shared<S> {
    inner: Arc<Mutex<S>>,
    poisoned: bool,
}

/// Wrap `stream` so it can be driven from several handles.
///
/// ```rust
/// use streams::prelude::*;
///
/// let mut a = shared(range(0, 4));
/// let mut b = a.clone();
/// assert_eq!(a.advance(), Step::More(Ok(0)));
/// assert_eq!(b.advance(), Step::More(Ok(1)));
/// assert_eq!(a.try_collect(), Ok(vec![2, 3]));
/// ```
pub fn shared<S: Stream>(stream: S) -> Shared<S> {
    Shared {
        inner: Arc::new(Mutex::new(stream)),
        poisoned: false,
    }
}

impl<S> Clone for Shared<S> {
    fn clone(&self) -> Self {
        Shared {
            inner: Arc::clone(&self.inner),
            poisoned: false,
        }
    }
}

impl<S: Stream> Stream for Shared<S> {
    type Item = Result<S::Item, PoisonError>;

    fn advance(&mut self) -> Step<Self::Item> {
        if self.poisoned {
            return Step::Done;
        }
        match self.inner.lock() {
            Ok(mut stream) => stream.advance().map(Ok),
            Err(_) => {
                tracing::warn!("shared stream lock poisoned, exhausting handle");
                self.poisoned = true;
                Step::More(Err(PoisonError))
            }
        }
    }
}

impl<S: Stream> Stream for Rc<RefCell<S>> {
    type Item = S::Item;

    fn advance(&mut self) -> Step<Self::Item> {
        self.as_ref().borrow_mut().advance()
    }
}

impl<S: Stream> Stream for Option<S> {
    type Item = S::Item;

    fn advance(&mut self) -> Step<Self::Item> {
        match self {
            Some(s) => s.advance(),
            None => Step::Done,
        }
    }
}

impl<L, R> Stream for either::Either<L, R>
where
    L: Stream,
    R: Stream<Item = L::Item>,
{
    type Item = L::Item;

    fn advance(&mut self) -> Step<Self::Item> {
        match self {
            either::Either::Left(l) => l.advance(),
            either::Either::Right(r) => r.advance(),
        }
    }
}

impl<S: Stream + ?Sized> Stream for Box<S> {
    type Item = S::Item;

    fn advance(&mut self) -> Step<Self::Item> {
        (**self).advance()
    }
}

impl<S: Stream + ?Sized> Stream for &'_ mut S {
    type Item = S::Item;

    fn advance(&mut self) -> Step<Self::Item> {
        (**self).advance()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{elements, empty, range};
    use either::Either;
    use std::thread;

    #[test]
    fn test_method_chain_matches_free_functions() {
        let by_method = range(0, 20)
            .filter(|x| x % 3 == 0)
            .map(|x| x + 1)
            .collect();
        let by_function = consume::collect(map(filter(range(0, 20), |x| x % 3 == 0), |x| x + 1));
        assert_eq!(by_method, by_function);
        assert_eq!(by_method, vec![1, 4, 7, 10, 13, 16, 19]);
    }

    #[test]
    fn test_mut_ref_resumes_where_it_left_off() {
        let mut source = range(0, 6);
        assert_eq!((&mut source).take(2), vec![0, 1]);
        assert_eq!(source.collect(), vec![2, 3, 4, 5]);
    }

    #[test]
    fn test_boxed_streams_chain_across_types() {
        let letters: Vec<Box<dyn Stream<Item = u32>>> = vec![
            range(1, 3).boxed(),
            elements(&[7_u32, 8]).map(|x| *x).boxed(),
            empty().boxed(),
        ];
        let all = crate::compose::chain_all(letters).collect();
        assert_eq!(all, vec![1, 2, 7, 8]);
    }

    #[test]
    fn test_option_none_is_empty() {
        let mut none: Option<crate::build::Range<i32>> = None;
        assert_eq!(none.advance(), Step::Done);
        assert_eq!(Some(range(0, 2)).collect(), vec![0, 1]);
    }

    #[test]
    fn test_either_picks_one_branch() {
        let pick = |left: bool| -> Either<_, _> {
            if left {
                Either::Left(range(0, 3))
            } else {
                Either::Right(range(10, 20).filter(|x| x % 5 == 0))
            }
        };
        assert_eq!(pick(true).collect(), vec![0, 1, 2]);
        assert_eq!(pick(false).collect(), vec![10, 15]);
    }

    #[test]
    fn test_rc_refcell_shares_position() {
        let source = Rc::new(RefCell::new(range(0, 5)));
        let mut a = Rc::clone(&source);
        let mut b = Rc::clone(&source);
        assert_eq!(a.advance(), Step::More(0));
        assert_eq!(b.advance(), Step::More(1));
        assert_eq!(a.collect(), vec![2, 3, 4]);
        assert_eq!(b.advance(), Step::Done);
    }

    #[test]
    fn test_shared_hands_out_each_value_once() {
        let source = shared(range(0, 1000_u32));
        let workers: Vec<_> = (0..4)
            .map(|_| {
                let handle = source.clone();
                thread::spawn(move || handle.try_collect())
            })
            .collect();

        let mut seen: Vec<u32> = workers
            .into_iter()
            .flat_map(|w| w.join().expect("worker panicked").expect("lock poisoned"))
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..1000).collect::<Vec<_>>());
    }

    #[test]
    fn test_shared_reports_poison_once() {
        let source = shared(range(0, 10));
        let poisoner = source.clone();
        let _ = thread::spawn(move || {
            let _guard = poisoner.inner.lock();
            panic!("poison the lock");
        })
        .join();

        let mut handle = source.clone();
        assert_eq!(handle.advance(), Step::More(Err(PoisonError)));
        assert_eq!(handle.advance(), Step::Done);
        assert_eq!(source.try_collect(), Err(PoisonError));
    }

    #[test]
    fn test_clone_of_poisoned_handle_reports_poison_again() {
        let source = shared(range(0, 10));
        let poisoner = source.clone();
        let _ = thread::spawn(move || {
            let _guard = poisoner.inner.lock();
            panic!("poison the lock");
        })
        .join();

        let mut first = source.clone();
        assert_eq!(first.advance(), Step::More(Err(PoisonError)));
        assert_eq!(first.advance(), Step::Done);
        assert_eq!(first.clone().try_collect(), Err(PoisonError));
    }
}
