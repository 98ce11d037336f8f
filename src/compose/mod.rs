//! Combining streams together
//!
//! This module provides the transformations: streams that wrap one or more
//! upstream streams and produce their values lazily, one advance at a time.

mod chain;
mod enumerate;
mod filter;
mod fuse;
mod map;
mod zip;

// Re-export composition operations
pub use chain::{chain, chain_all, Chain, ChainAll};
pub use enumerate::{enumerate, Enumerate, Indexed};
pub use filter::{filter, Filter};
pub use fuse::{fuse, Fuse};
pub use map::{map, Map};
pub use zip::{zip, Pair, Zip};
