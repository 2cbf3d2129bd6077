//! LRU (Least-Recently-Used) replacement policy.

use std::collections::{HashMap, VecDeque};

use log::debug;

use crate::common::{Error, PageId, Result};
use crate::generator::ReferenceStream;

/// A bounded frame pool with LRU eviction.
///
/// Recency is tracked with a stamped access queue: every access (hit or
/// miss) appends `(page, stamp)` and records the stamp as the page's
/// latest. Entries whose stamp is no longer the page's latest are stale;
/// eviction pops from the front and skips them, so the first live entry
/// is the least-recently-used page. Each queue entry is pushed and popped
/// at most once, keeping the per-access cost O(1) amortized, and the
/// queue never outgrows the number of accesses made.
pub struct LruFrameSet {
    /// Access history, oldest first. Stale entries are dropped lazily
    /// as eviction walks past them.
    queue: VecDeque<(PageId, u64)>,

    /// Latest access stamp per resident page; doubles as the membership
    /// index.
    stamps: HashMap<PageId, u64>,

    /// Maximum number of resident pages.
    capacity: usize,

    /// Monotonic access counter.
    clock: u64,
}

impl LruFrameSet {
    /// Create an empty frame set.
    ///
    /// # Errors
    /// - [`Error::ZeroFrameCount`] if `capacity == 0`
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::ZeroFrameCount);
        }
        Ok(Self {
            queue: VecDeque::with_capacity(capacity),
            stamps: HashMap::with_capacity(capacity),
            capacity,
            clock: 0,
        })
    }

    /// Reference a page, returning `true` if the access faulted.
    ///
    /// Hits refresh the page's recency; misses evict the
    /// least-recently-used page once the pool is full.
    pub fn access(&mut self, page: PageId) -> bool {
        let fault = if self.stamps.contains_key(&page) {
            false
        } else {
            if self.stamps.len() == self.capacity {
                let _ = self.evict();
            }
            true
        };

        self.clock += 1;
        self.stamps.insert(page, self.clock);
        self.queue.push_back((page, self.clock));
        fault
    }

    /// Remove and return the least-recently-used page.
    ///
    /// Returns `None` only when no page is resident.
    fn evict(&mut self) -> Option<PageId> {
        while let Some((page, stamp)) = self.queue.pop_front() {
            if self.stamps.get(&page) == Some(&stamp) {
                self.stamps.remove(&page);
                return Some(page);
            }
            // Stale entry: the page was accessed again later (or already
            // evicted), skip it.
        }
        None
    }

    /// Whether a page is currently resident.
    pub fn contains(&self, page: PageId) -> bool {
        self.stamps.contains_key(&page)
    }

    /// Number of resident pages.
    pub fn len(&self) -> usize {
        self.stamps.len()
    }

    /// Whether no page is resident.
    pub fn is_empty(&self) -> bool {
        self.stamps.is_empty()
    }

    /// Maximum number of resident pages.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Count the page faults a stream incurs under LRU replacement.
///
/// # Errors
/// - [`Error::ZeroFrameCount`] if `frame_count == 0`, before any work
///
/// # Example
/// ```
/// use faultsim::{simulate_lru, ReferenceStream};
///
/// let stream = ReferenceStream::from_pages([1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]);
/// assert_eq!(simulate_lru(&stream, 3).unwrap(), 10);
/// ```
pub fn simulate_lru(stream: &ReferenceStream, frame_count: usize) -> Result<u64> {
    let mut frames = LruFrameSet::new(frame_count)?;
    let mut faults = 0u64;

    for &page in stream {
        if frames.access(page) {
            faults += 1;
        }
    }

    debug!(
        "LRU: {} faults over {} references ({} frames)",
        faults,
        stream.len(),
        frame_count
    );
    Ok(faults)
}
