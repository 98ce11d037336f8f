use crate::{Step, Stream};

/// Create a stream of every value of `first` followed by every value of `second`.
///
/// The two streams may have different types as long as they produce the same item.
pub fn chain<A, B>(first: A, second: B) -> Chain<A, B>
where
    A: Stream,
    B: Stream<Item = A::Item>,
{
    Chain(Some(first), second)
}

/// Runs two streams back to back.
///
/// Created via [`chain()`] or [`Stream::chain`]. The first stream is dropped as
/// soon as it is exhausted.
pub struct Chain<A, B>(Option<A>, B);

impl<A, B> Stream for Chain<A, B>
where
    A: Stream,
    B: Stream<Item = A::Item>,
{
    type Item = A::Item;

    fn advance(&mut self) -> Step<Self::Item> {
        if let Some(first) = &mut self.0 {
            match first.advance() {
                Step::More(value) => return Step::More(value),
                Step::Done => {
                    tracing::trace!("chain: first stream exhausted, moving to second");
                    self.0 = None;
                }
            }
        }
        self.1.advance()
    }
}

/// Create a stream that runs each of `streams` to exhaustion in turn.
///
/// All streams share one type; use [`Stream::boxed`] to mix different sources.
///
/// ```
/// use streams::prelude::*;
///
/// let all = chain_all([range(0, 2), range(5, 7), range(9, 10)]);
/// assert_eq!(all.collect(), vec![0, 1, 5, 6, 9]);
/// ```
pub fn chain_all<S, I>(streams: I) -> ChainAll<S>
where
    S: Stream,
    I: IntoIterator<Item = S>,
{
    ChainAll {
        streams: streams.into_iter().map(Some).collect(),
        index: 0,
    }
}

/// Runs any number of same-typed streams back to back.
///
/// Created via [`chain_all`]. Each stream is dropped once it is exhausted.
pub struct ChainAll<S> {
    streams: Vec<Option<S>>,
    index: usize,
}

impl<S: Stream> Stream for ChainAll<S> {
    type Item = S::Item;

    fn advance(&mut self) -> Step<Self::Item> {
        while let Some(slot) = self.streams.get_mut(self.index) {
            if let Some(stream) = slot.as_mut() {
                if let Step::More(value) = stream.advance() {
                    return Step::More(value);
                }
                *slot = None;
            }
            self.index += 1;
            if self.index < self.streams.len() {
                tracing::trace!(index = self.index, "chain: moving to next stream");
            }
        }
        Step::Done
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{elements, empty, range};
    use crate::compose::map;

    #[test]
    fn test_chain_runs_first_then_second() {
        let mut s = chain(range(0, 2), range(10, 12));
        assert_eq!(s.advance(), Step::More(0));
        assert_eq!(s.advance(), Step::More(1));
        assert_eq!(s.advance(), Step::More(10));
        assert_eq!(s.advance(), Step::More(11));
        assert_eq!(s.advance(), Step::Done);
        assert_eq!(s.advance(), Step::Done);
    }

    #[test]
    fn test_chain_mixes_stream_types() {
        let data = [7, 8];
        let s = chain(map(elements(&data), |x| *x), range(0, 2));
        assert_eq!(s.collect(), vec![7, 8, 0, 1]);
    }

    #[test]
    fn test_chain_drops_first_when_done() {
        let mut s = chain(range(0, 1), empty());
        assert!(s.0.is_some());
        s.advance();
        s.advance();
        assert!(s.0.is_none());
    }

    #[test]
    fn test_chain_all_skips_empty_inputs() {
        let s = chain_all(vec![range(0, 0), range(1, 3), range(5, 5), range(8, 9)]);
        assert_eq!(s.collect(), vec![1, 2, 8]);
    }

    #[test]
    fn test_chain_all_cursor_stops_at_last_input() {
        let mut s = chain_all(vec![range(0, 1), range(4, 5)]);
        assert_eq!(s.advance(), Step::More(0));
        assert_eq!(s.advance(), Step::More(4));
        assert_eq!(s.advance(), Step::Done);
        assert_eq!(s.index, s.streams.len());
        assert_eq!(s.advance(), Step::Done);
        assert_eq!(s.index, 2);
    }

    #[test]
    fn test_chain_all_of_nothing() {
        let mut s = chain_all(Vec::<crate::build::Range<u8>>::new());
        assert_eq!(s.advance(), Step::Done);
        assert_eq!(s.advance(), Step::Done);
    }
}
