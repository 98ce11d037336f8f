use crate::{Step, Stream};

/// Two values produced side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Pair<A, B> {
    pub first: A,
    pub second: B,
}

impl<A, B> Pair<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Pair { first, second }
    }

    pub fn into_tuple(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A, B> From<(A, B)> for Pair<A, B> {
    fn from((first, second): (A, B)) -> Self {
        Pair { first, second }
    }
}

/// Advances two streams in lockstep, pairing their values.
///
/// `a` is advanced first. If it is exhausted, `b` is left untouched. If `b` is
/// exhausted, the value already taken from `a` is dropped. Either way the zip is
/// exhausted for good and neither side is advanced again.
pub struct Zip<A, B> {
    a: A,
    b: B,
    done: bool,
}

/// Create a stream of positionally aligned pairs from `a` and `b`.
///
/// ```
/// use streams::prelude::*;
///
/// let words = ["zero", "one"];
/// let pairs = zip(iota(), elements(&words)).map(Pair::into_tuple);
/// assert_eq!(pairs.collect(), vec![(0, &"zero"), (1, &"one")]);
/// ```
pub fn zip<A, B>(a: A, b: B) -> Zip<A, B>
where
    A: Stream,
    B: Stream,
{
    Zip { a, b, done: false }
}

impl<A, B> Zip<A, B> {
    /// Take back both upstreams, positioned wherever the zip left them.
    pub fn into_inner(self) -> (A, B) {
        (self.a, self.b)
    }
}

impl<A, B> Stream for Zip<A, B>
where
    A: Stream,
    B: Stream,
{
    type Item = Pair<A::Item, B::Item>;

    fn advance(&mut self) -> Step<Self::Item> {
        if self.done {
            return Step::Done;
        }
        let Step::More(first) = self.a.advance() else {
            self.done = true;
            return Step::Done;
        };
        let Step::More(second) = self.b.advance() else {
            self.done = true;
            return Step::Done;
        };
        Step::More(Pair { first, second })
    }
}
