//! Subunit block redistribution.
//!
//! Locates contiguous key blocks in sheet grids and moves data column
//! ranges between them, clearing destination tails so a shrinking subunit
//! never leaves stale rows behind.

pub mod copy;
pub mod locate;
pub mod pipeline;

pub use copy::{Distribution, copy_block, distribute};
pub use locate::{find_all, find_first};
pub use pipeline::redistribute;
