use crate::{Step, Stream};

/// Skips values of the wrapped stream that fail a predicate.
///
/// Each advance pulls from the upstream until a value passes or the upstream is
/// exhausted, so a rejected value never ends the stream early.
#[derive(Clone)]
pub struct Filter<S, P> {
    stream: S,
    predicate: P,
}

/// Create a stream of the values of `stream` for which `predicate` holds.
///
/// ```
/// use streams::prelude::*;
///
/// let odd = filter(range(0, 10), |x| x % 2 == 1);
/// assert_eq!(odd.collect(), vec![1, 3, 5, 7, 9]);
/// ```
pub fn filter<S, P>(stream: S, predicate: P) -> Filter<S, P>
where
    S: Stream,
    P: FnMut(&S::Item) -> bool,
{
    Filter { stream, predicate }
}

impl<S, P> Stream for Filter<S, P>
where
    S: Stream,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn advance(&mut self) -> Step<S::Item> {
        loop {
            match self.stream.advance() {
                Step::More(value) if (self.predicate)(&value) => return Step::More(value),
                Step::More(_) => {}
                Step::Done => return Step::Done,
            }
        }
    }
}
