//! Building streams from scratch
//!
//! This module provides the sources: streams with no upstream stream, built from
//! a range of integers, an existing slice, a channel, or a closure.

mod channel;
mod elements;
mod func;
mod range;

// Re-export building blocks
pub use channel::{receive, Receive};
pub use elements::{elements, indices, Elements};
pub use func::{empty, from_fn, infinite, iota, Empty, FromFn, Infinite, Iota};
pub use range::{range, Range};
