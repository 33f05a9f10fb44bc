//! Reusable byte buffers for rendering log lines
//!
//! Buffers live on a bounded lock-free free list. A [`PooledBuffer`] is owned
//! by exactly one dispatch between acquisition and drop, and returns its
//! buffer to the pool on every exit path, including sink failures.

use crossbeam_channel::{bounded, Receiver, Sender};
use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;

/// Free-list slots in the process-wide pool
pub const DEFAULT_POOL_CAPACITY: usize = 64;

/// Initial capacity of a freshly allocated buffer
pub const INITIAL_BUFFER_CAPACITY: usize = 256;

/// Buffers that grew beyond this are dropped instead of retained
pub const MAX_RETAINED_CAPACITY: usize = 64 * 1024;

pub struct BufferPool {
    free_tx: Sender<Vec<u8>>,
    free_rx: Receiver<Vec<u8>>,
    allocated: AtomicU64,
    reused: AtomicU64,
}

impl BufferPool {
    pub fn new(capacity: usize) -> Self {
        let (free_tx, free_rx) = bounded(capacity.max(1));
        Self {
            free_tx,
            free_rx,
            allocated: AtomicU64::new(0),
            reused: AtomicU64::new(0),
        }
    }

    /// Take a cleared buffer, reusing a pooled one when available
    pub fn acquire(&self) -> PooledBuffer<'_> {
        let buffer = match self.free_rx.try_recv() {
            Ok(buffer) => {
                self.reused.fetch_add(1, Ordering::Relaxed);
                buffer
            }
            Err(_) => {
                self.allocated.fetch_add(1, Ordering::Relaxed);
                Vec::with_capacity(INITIAL_BUFFER_CAPACITY)
            }
        };
        PooledBuffer { buffer, pool: self }
    }

    fn release(&self, mut buffer: Vec<u8>) {
        if buffer.capacity() > MAX_RETAINED_CAPACITY {
            return;
        }
        buffer.clear();
        // Full free list: let the buffer drop.
        let _ = self.free_tx.try_send(buffer);
    }

    /// Buffers currently idle in the free list
    pub fn idle(&self) -> usize {
        self.free_rx.len()
    }

    /// Number of fresh allocations made by `acquire`
    pub fn allocated_count(&self) -> u64 {
        self.allocated.load(Ordering::Relaxed)
    }

    /// Number of acquisitions served from the free list
    pub fn reused_count(&self) -> u64 {
        self.reused.load(Ordering::Relaxed)
    }
}

impl Default for BufferPool {
    fn default() -> Self {
        Self::new(DEFAULT_POOL_CAPACITY)
    }
}

/// Process-wide pool shared by every logger
pub fn global_pool() -> &'static BufferPool {
    static POOL: OnceLock<BufferPool> = OnceLock::new();
    POOL.get_or_init(BufferPool::default)
}

/// Exclusive handle to a pooled buffer; returns it to the pool on drop
pub struct PooledBuffer<'a> {
    buffer: Vec<u8>,
    pool: &'a BufferPool,
}

impl Deref for PooledBuffer<'_> {
    type Target = Vec<u8>;

    fn deref(&self) -> &Vec<u8> {
        &self.buffer
    }
}

impl DerefMut for PooledBuffer<'_> {
    fn deref_mut(&mut self) -> &mut Vec<u8> {
        &mut self.buffer
    }
}

impl Drop for PooledBuffer<'_> {
    fn drop(&mut self) {
        self.pool.release(std::mem::take(&mut self.buffer));
    }
}
