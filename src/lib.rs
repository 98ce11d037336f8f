//! # Streams: Lazy Pull-Based Sequences
//!
//! Produce, transform and consume possibly unbounded sequences of values without
//! materializing them, and without a hand-written type for every transformation.
//!
//! ## Core Types
//!
//! - **[`Stream`]**: anything with an `advance()` step function
//! - **[`Step`]**: the outcome of one advance, `More(value)` or `Done`
//!
//! ## Example
//!
//! ```
//! use streams::prelude::*;
//!
//! let alphabet = || map(range(b'a', b'z' + 1), char::from);
//! let alphanum = alphabet()
//!     .chain(alphabet().map(|c| c.to_ascii_uppercase()))
//!     .chain(map(range(b'0', b'9' + 1), char::from));
//!
//! let text: String = alphanum.into_iter().collect();
//! assert!(text.starts_with("abc"));
//! assert!(text.ends_with("XYZ0123456789"));
//! ```
//!
//! ## Common Functions
//!
//! **Sources:**
//! - [`range(a, b)`](build::range) - integers `a..b`
//! - [`elements(slice)`](build::elements) - each element of a slice
//! - [`receive(rx)`](build::receive) - values from a blocking channel
//! - [`iota()`](build::iota), [`infinite(f)`](build::infinite) - unbounded streams
//!
//! **Transformations:**
//! - [`map`](compose::map), [`filter`](compose::filter), [`zip`](compose::zip),
//!   [`chain`](compose::chain), [`enumerate`](compose::enumerate)
//!
//! **Consumers:**
//! - [`for_each`](consume::for_each), [`for_each_control`](consume::for_each_control),
//!   [`reduce`](consume::reduce), [`collect`](consume::collect),
//!   [`take`](consume::take), [`fill`](consume::fill)

pub mod build;
pub mod compose;
pub mod consume;
pub mod iter;
pub mod prelude;
mod step;
mod stream;

pub use step::*;
pub use stream::*;
