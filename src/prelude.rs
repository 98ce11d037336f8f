//! Commonly used imports
//!
//! Use `use streams::prelude::*;` for quick access to the most common types and functions.

// Core types
pub use crate::{shared, PoisonError, Shared, Step, Stream};

// Sources
pub use crate::build::{elements, empty, from_fn, indices, infinite, iota, range, receive};
pub use crate::iter::from_iter;

// Transformations
pub use crate::compose::{chain, chain_all, enumerate, filter, fuse, map, zip, Indexed, Pair};

// Consumers
pub use crate::consume::{
    collect, count, fill, for_each, for_each_control, reduce, take, try_collect, Control,
};
