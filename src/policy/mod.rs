//! Replacement policy implementations.
//!
//! Each policy owns a bounded frame set and counts the page faults a
//! reference stream incurs against it:
//! - [`FifoFrameSet`] / [`simulate_fifo`] - evict the longest-resident page
//! - [`LruFrameSet`] / [`simulate_lru`] - evict the least-recently-used page
//!
//! The defining difference: LRU reorders on every access, hit or miss;
//! FIFO never reorders. Both process the stream in a single forward pass
//! with O(1) amortized work per reference.

mod fifo;
mod lru;

pub use fifo::{simulate_fifo, FifoFrameSet};
pub use lru::{simulate_lru, LruFrameSet};
