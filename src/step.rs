/// Result of advancing a stream, either one produced value or exhaustion.
///
/// `Step` is the return type of [`Stream::advance`](crate::Stream::advance). It carries
/// the same information as `Option`, but names the two outcomes after what they mean
/// for a stream.
///
/// # Examples
///
/// ```rust
/// use streams::Step;
///
/// let more: Step<i32> = Step::More(42);
/// let done: Step<i32> = Step::Done;
///
/// assert_eq!(more.map(|x| x * 2), Step::More(84));
/// assert_eq!(done.map(|x| x * 2), Step::Done);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step<T> {
    /// The stream is exhausted and produced nothing
    Done,
    /// The stream produced one value
    More(T),
}

impl<T> Step<T> {
    /// Returns `true` if the step is `More`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use streams::Step;
    ///
    /// assert!(Step::More(1).is_more());
    /// assert!(!Step::<i32>::Done.is_more());
    /// ```
    #[inline]
    pub const fn is_more(&self) -> bool {
        matches!(self, Step::More(_))
    }

    /// Returns `true` if the step is `Done`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use streams::Step;
    ///
    /// assert!(Step::<i32>::Done.is_done());
    /// assert!(!Step::More(1).is_done());
    /// ```
    #[inline]
    pub const fn is_done(&self) -> bool {
        matches!(self, Step::Done)
    }

    /// Converts from `Step<T>` to `Option<T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use streams::Step;
    ///
    /// assert_eq!(Step::More(42).more_value(), Some(42));
    /// assert_eq!(Step::<i32>::Done.more_value(), None);
    /// ```
    #[inline]
    pub fn more_value(self) -> Option<T> {
        match self {
            Step::More(t) => Some(t),
            Step::Done => None,
        }
    }

    /// Maps a `Step<T>` to `Step<U>` by applying a function to the produced value.
    ///
    /// `Done` passes through untouched and `f` is not called.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Step<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Step::More(t) => Step::More(f(t)),
            Step::Done => Step::Done,
        }
    }

    /// Calls `f` with the produced value and returns its step, or `Done`.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Step<U>
    where
        F: FnOnce(T) -> Step<U>,
    {
        match self {
            Step::More(t) => f(t),
            Step::Done => Step::Done,
        }
    }

    /// Returns the produced value or a default.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use streams::Step;
    ///
    /// assert_eq!(Step::More(42).more_or(0), 42);
    /// assert_eq!(Step::Done.more_or(0), 0);
    /// ```
    #[inline]
    pub fn more_or(self, default: T) -> T {
        match self {
            Step::More(t) => t,
            Step::Done => default,
        }
    }

    /// Returns the produced value or computes it from a closure.
    #[inline]
    pub fn more_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Step::More(t) => t,
            Step::Done => f(),
        }
    }

    /// Converts from `&Step<T>` to `Step<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Step<&T> {
        match self {
            Step::More(t) => Step::More(t),
            Step::Done => Step::Done,
        }
    }

    /// Converts from `&mut Step<T>` to `Step<&mut T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use streams::Step;
    ///
    /// let mut x = Step::More(42);
    /// if let Step::More(v) = x.as_mut() {
    ///     *v = 100;
    /// }
    /// assert_eq!(x, Step::More(100));
    /// ```
    #[inline]
    pub fn as_mut(&mut self) -> Step<&mut T> {
        match self {
            Step::More(t) => Step::More(t),
            Step::Done => Step::Done,
        }
    }

    /// Returns the produced value, consuming the `self` value.
    ///
    /// # Panics
    ///
    /// Panics with `msg` if the step is `Done`.
    ///
    /// ```should_panic
    /// use streams::Step;
    ///
    /// Step::<i32>::Done.expect_more("ran dry");
    /// ```
    #[inline]
    pub fn expect_more(self, msg: &str) -> T {
        match self {
            Step::More(t) => t,
            Step::Done => panic!("{}", msg),
        }
    }

    /// Returns the produced value, consuming the `self` value.
    ///
    /// # Panics
    ///
    /// Panics if the step is `Done`.
    #[inline]
    pub fn unwrap_more(self) -> T {
        match self {
            Step::More(t) => t,
            Step::Done => panic!("called `Step::unwrap_more()` on a `Done` value"),
        }
    }
}

impl<T> Default for Step<T> {
    fn default() -> Self {
        Step::Done
    }
}

impl<T> From<Option<T>> for Step<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(t) => Step::More(t),
            None => Step::Done,
        }
    }
}

impl<T> From<Step<T>> for Option<T> {
    fn from(step: Step<T>) -> Self {
        step.more_value()
    }
}
