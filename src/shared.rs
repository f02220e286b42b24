//! Mutex-guarded handle for cross-thread producer/consumer use.

use crate::buffer::CircularSampleBuffer;
use crate::config::BufferConfig;
use crate::error::BufferError;
use crate::sample::Sample;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Clonable handle sharing one [`CircularSampleBuffer`] behind a single
/// mutex.
///
/// This is the crate's whole concurrency story: every operation takes the
/// lock, so a compound decision (capacity check plus split copy) always sees
/// one consistent cursor pair. There is no lock-free fast path and no claim
/// of one. The producer and the consumer each hold a clone; no call blocks
/// waiting for data to arrive — reads come back short and oversize requests
/// are rejected immediately.
#[derive(Debug, Clone)]
pub struct SharedSampleBuffer {
    inner: Arc<Mutex<CircularSampleBuffer>>,
}

impl SharedSampleBuffer {
    /// Creates a shared buffer with a fixed byte capacity.
    pub fn new(capacity: usize) -> Result<Self, BufferError> {
        Ok(Self::from_buffer(CircularSampleBuffer::new(capacity)?))
    }

    /// Creates a shared buffer from a configuration artifact.
    pub fn from_config(config: &BufferConfig) -> Result<Self, BufferError> {
        Ok(Self::from_buffer(CircularSampleBuffer::from_config(config)?))
    }

    /// Wraps an existing buffer.
    pub fn from_buffer(buffer: CircularSampleBuffer) -> Self {
        Self {
            inner: Arc::new(Mutex::new(buffer)),
        }
    }

    /// A panicked holder cannot leave the cursors half-updated (every
    /// mutation completes before the lock is released), so a poisoned lock
    /// is recovered rather than propagated.
    fn lock(&self) -> MutexGuard<'_, CircularSampleBuffer> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// See [`CircularSampleBuffer::write`].
    pub fn write(&self, source: &[u8]) -> Result<(), BufferError> {
        self.lock().write(source)
    }

    /// See [`CircularSampleBuffer::read`].
    pub fn read(&self, destination: &mut [u8]) -> Result<usize, BufferError> {
        self.lock().read(destination)
    }

    /// See [`CircularSampleBuffer::rms_of_recent_samples`].
    pub fn rms_of_recent_samples<S: Sample>(&self, count: usize) -> f64 {
        self.lock().rms_of_recent_samples::<S>(count)
    }

    /// Fixed byte capacity of the underlying buffer.
    pub fn capacity(&self) -> usize {
        self.lock().capacity()
    }

    /// Bytes currently holding unread data.
    pub fn filled_capacity(&self) -> usize {
        self.lock().filled_capacity()
    }

    /// Bytes writable without clobbering unread data.
    pub fn free_capacity(&self) -> usize {
        self.lock().free_capacity()
    }

    /// Runs `f` with the buffer locked for the whole call.
    ///
    /// Use this for cursor administration or any sequence of operations that
    /// must observe and mutate the buffer as one critical section.
    pub fn with_buffer<R>(&self, f: impl FnOnce(&mut CircularSampleBuffer) -> R) -> R {
        f(&mut self.lock())
    }
}
