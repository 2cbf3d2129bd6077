//! FIFO (First-In-First-Out) replacement policy.

use std::collections::{HashSet, VecDeque};

use log::debug;

use crate::common::{Error, PageId, Result};
use crate::generator::ReferenceStream;

/// A bounded frame pool with FIFO eviction.
///
/// Evicts pages in the order they arrived. Re-accessing a resident page
/// never reorders the queue; arrival order is the only order.
pub struct FifoFrameSet {
    /// Queue of resident pages in arrival order (front = oldest).
    queue: VecDeque<PageId>,

    /// Set for O(1) membership check.
    resident: HashSet<PageId>,

    /// Maximum number of resident pages.
    capacity: usize,
}

impl FifoFrameSet {
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
            resident: HashSet::with_capacity(capacity),
            capacity,
        })
    }

    /// Reference a page, returning `true` if the access faulted.
    ///
    /// On a hit nothing changes. On a fault the oldest page is evicted
    /// once the pool is full, then the new page is enqueued.
    pub fn access(&mut self, page: PageId) -> bool {
        if self.resident.contains(&page) {
            return false;
        }

        if self.resident.len() == self.capacity {
            if let Some(victim) = self.queue.pop_front() {
                self.resident.remove(&victim);
            }
        }
        self.queue.push_back(page);
        self.resident.insert(page);
        true
    }

    /// Whether a page is currently resident.
    pub fn contains(&self, page: PageId) -> bool {
        self.resident.contains(&page)
    }

    /// Number of resident pages.
    pub fn len(&self) -> usize {
        self.resident.len()
    }

    /// Whether no page is resident.
    pub fn is_empty(&self) -> bool {
        self.resident.is_empty()
    }

    /// Maximum number of resident pages.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Count the page faults a stream incurs under FIFO replacement.
///
/// # Errors
/// - [`Error::ZeroFrameCount`] if `frame_count == 0`, before any work
///
/// # Example
/// ```
/// use faultsim::{simulate_fifo, ReferenceStream};
///
/// let stream = ReferenceStream::from_pages([1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]);
/// assert_eq!(simulate_fifo(&stream, 3).unwrap(), 9);
/// ```
pub fn simulate_fifo(stream: &ReferenceStream, frame_count: usize) -> Result<u64> {
    let mut frames = FifoFrameSet::new(frame_count)?;
    let mut faults = 0u64;

    for &page in stream {
        if frames.access(page) {
            faults += 1;
        }
    }

    debug!(
        "FIFO: {} faults over {} references ({} frames)",
        faults,
        stream.len(),
        frame_count
    );
    Ok(faults)
}
