use crate::{Step, Stream};

/// Returns `Done` forever once the wrapped stream first returns `Done`.
///
/// The upstream is dropped at that point and never advanced again.
pub struct Fuse<S> {
    stream: Option<S>,
}

/// Create a stream that latches the first exhaustion of `stream`.
///
/// ```
/// use streams::prelude::*;
///
/// let mut flip = false;
/// let mut s = fuse(from_fn(move || {
///     flip = !flip;
///     if flip { Step::More(1) } else { Step::Done }
/// }));
/// assert_eq!(s.advance(), Step::More(1));
/// assert_eq!(s.advance(), Step::Done);
/// assert_eq!(s.advance(), Step::Done);
/// ```
pub fn fuse<S: Stream>(stream: S) -> Fuse<S> {
    Fuse {
        stream: Some(stream),
    }
}

impl<S> Fuse<S> {
    /// Returns `true` once the upstream has been exhausted.
    pub fn is_done(&self) -> bool {
        self.stream.is_none()
    }
}

impl<S: Stream> Stream for Fuse<S> {
    type Item = S::Item;

    fn advance(&mut self) -> Step<S::Item> {
        let Some(stream) = self.stream.as_mut() else {
            return Step::Done;
        };
        let step = stream.advance();
        if step.is_done() {
            self.stream = None;
        }
        step
    }
}
