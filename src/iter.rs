//! Bridges between streams and std iterators.
//!
//! [`StreamIter`] lets a stream drive a `for` loop or any `Iterator` adapter, and
//! [`from_iter`] turns anything iterable into a stream.
//!
//! # Examples
//!
//! ```rust
//! use streams::prelude::*;
//!
//! let mut total = 0;
//! for x in range(0, 4).into_iter() {
//!     total += x;
//! }
//! assert_eq!(total, 6);
//!
//! let s = from_iter(vec!["a", "b"]).map(str::to_uppercase);
//! assert_eq!(s.collect(), vec!["A", "B"]);
//! ```

use crate::{Step, Stream};

/// Iterator adapter for a [`Stream`].
///
/// Remembers exhaustion: once the stream returns `Done`, it is dropped and the
/// iterator keeps returning `None` without advancing it again.
///
/// Both `StreamIter` and `&mut StreamIter` implement `Iterator`, so a partially
/// consumed iterator can be inspected afterwards.
pub struct StreamIter<S> {
    stream: Option<S>,
}

impl<S: Stream> StreamIter<S> {
    /// Create a new iterator from a stream.
    pub fn new(stream: S) -> Self {
        Self {
            stream: Some(stream),
        }
    }

    /// Check if the stream has been exhausted.
    pub fn is_done(&self) -> bool {
        self.stream.is_none()
    }

    /// Take back the stream, or `None` if it was exhausted.
    pub fn into_inner(self) -> Option<S> {
        self.stream
    }
}

impl<S: Stream> Iterator for StreamIter<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let stream = self.stream.as_mut()?;
        match stream.advance() {
            Step::More(value) => Some(value),
            Step::Done => {
                self.stream = None;
                None
            }
        }
    }
}

impl<S: Stream> std::iter::FusedIterator for StreamIter<S> {}

/// Stream over the items of a std iterator.
///
/// Created via [`from_iter`].
#[derive(Debug, Clone)]
pub struct FromIter<I> {
    iter: std::iter::Fuse<I>,
}

/// Create a stream over anything iterable.
pub fn from_iter<I: IntoIterator>(iterable: I) -> FromIter<I::IntoIter> {
    FromIter {
        iter: iterable.into_iter().fuse(),
    }
}

impl<I: Iterator> Stream for FromIter<I> {
    type Item = I::Item;

    fn advance(&mut self) -> Step<I::Item> {
        self.iter.next().into()
    }
}
