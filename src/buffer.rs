//! Fixed-capacity circular byte buffer with typed-sample analysis.

use crate::config::{BufferConfig, OverwritePolicy};
use crate::error::BufferError;
use crate::sample::Sample;
use std::path::Path;

/// Fixed-capacity circular byte buffer decoupling a sample producer from a
/// consumer running at a different rate or on a different schedule.
///
/// The storage never reallocates and never shifts after construction. `head`
/// is the index of the next byte to be written, `tail` the index of the next
/// byte to be read; both wrap modulo the capacity. A separate `filled`
/// counter disambiguates the full and empty states, which otherwise share
/// `head == tail`, so `filled_capacity() + free_capacity()` equals the
/// capacity in every reachable state.
///
/// Mutating methods take `&mut self`, so a compound decision (capacity check
/// plus split copy) always sees one consistent cursor pair. For a producer
/// and consumer on different threads, use
/// [`SharedSampleBuffer`](crate::shared::SharedSampleBuffer).
#[derive(Debug, Clone)]
pub struct CircularSampleBuffer {
    storage: Vec<u8>,
    head: usize,
    tail: usize,
    filled: usize,
    overwrite: OverwritePolicy,
}

impl CircularSampleBuffer {
    /// Creates a buffer with a fixed byte capacity and the default
    /// overwrite policy.
    pub fn new(capacity: usize) -> Result<Self, BufferError> {
        Self::with_policy(capacity, OverwritePolicy::default())
    }

    /// Creates a buffer with an explicit overwrite policy.
    pub fn with_policy(capacity: usize, overwrite: OverwritePolicy) -> Result<Self, BufferError> {
        if capacity == 0 {
            return Err(BufferError::ZeroCapacity);
        }
        Ok(Self {
            storage: vec![0; capacity],
            head: 0,
            tail: 0,
            filled: 0,
            overwrite,
        })
    }

    /// Creates a buffer from a configuration artifact.
    pub fn from_config(config: &BufferConfig) -> Result<Self, BufferError> {
        Self::with_policy(config.capacity, config.overwrite)
    }

    /// Returns the fixed byte capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Returns the number of bytes currently holding unread data.
    #[inline]
    pub fn filled_capacity(&self) -> usize {
        self.filled
    }

    /// Returns the number of bytes available for writing without clobbering
    /// unread data.
    #[inline]
    pub fn free_capacity(&self) -> usize {
        self.capacity() - self.filled
    }

    /// Returns true when no unread data is stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.filled == 0
    }

    /// Current write cursor, in bytes from the start of storage.
    #[inline]
    pub fn head_position(&self) -> usize {
        self.head
    }

    /// The overwrite policy this buffer was constructed with.
    #[inline]
    pub fn overwrite_policy(&self) -> OverwritePolicy {
        self.overwrite
    }

    /// Copies `source` into the buffer starting at the write cursor.
    ///
    /// A write of `capacity` bytes or more is rejected with
    /// [`BufferError::RequestTooLarge`] and mutates nothing. The copy splits
    /// into at most two contiguous segments when it crosses the physical end
    /// of storage, and the write cursor advances modulo the capacity.
    ///
    /// Whether a write may clobber unread data depends on the configured
    /// [`OverwritePolicy`]. Under `Overwrite` (the default) the filled count
    /// saturates at the capacity and the read cursor skips ahead so it
    /// always points at the oldest surviving byte. Under `Reject` such a
    /// write fails with [`BufferError::WouldOverwrite`] and mutates nothing.
    pub fn write(&mut self, source: &[u8]) -> Result<(), BufferError> {
        let n = source.len();
        let cap = self.capacity();
        if n >= cap {
            return Err(BufferError::RequestTooLarge {
                requested: n,
                capacity: cap,
            });
        }
        if self.overwrite == OverwritePolicy::Reject && n > self.free_capacity() {
            return Err(BufferError::WouldOverwrite {
                requested: n,
                free: self.free_capacity(),
            });
        }

        let first = n.min(cap - self.head);
        self.storage[self.head..self.head + first].copy_from_slice(&source[..first]);
        let second = n - first;
        if second > 0 {
            self.storage[..second].copy_from_slice(&source[first..]);
        }
        self.head = (self.head + n) % cap;

        if self.filled + n > cap {
            // Oldest unread bytes were clobbered; everything behind the new
            // head is the surviving data.
            self.filled = cap;
            self.tail = self.head;
        } else {
            self.filled += n;
        }
        Ok(())
    }

    /// Copies the oldest unread bytes into `destination`.
    ///
    /// A read of `capacity` bytes or more is rejected with
    /// [`BufferError::RequestTooLarge`] and copies nothing. Otherwise the
    /// buffer copies `min(destination.len(), filled_capacity())` bytes
    /// starting at the read cursor, in at most two contiguous segments, and
    /// advances the cursor past them.
    ///
    /// Returns the number of bytes actually copied. Receiving fewer bytes
    /// than requested is a short read, not an error; callers must inspect
    /// the count.
    pub fn read(&mut self, destination: &mut [u8]) -> Result<usize, BufferError> {
        let n = destination.len();
        let cap = self.capacity();
        if n >= cap {
            return Err(BufferError::RequestTooLarge {
                requested: n,
                capacity: cap,
            });
        }

        let to_copy = n.min(self.filled);
        if to_copy == 0 {
            return Ok(0);
        }
        let first = to_copy.min(cap - self.tail);
        destination[..first].copy_from_slice(&self.storage[self.tail..self.tail + first]);
        let second = to_copy - first;
        if second > 0 {
            destination[first..to_copy].copy_from_slice(&self.storage[..second]);
        }
        self.tail = (self.tail + to_copy) % cap;
        self.filled -= to_copy;
        Ok(to_copy)
    }

    /// Root of the sum of squares of the most recently written `count`
    /// samples, decoding the storage as native-endian `S` values.
    ///
    /// The window ends at the write cursor expressed in sample units
    /// (`head_position() / S::BYTE_WIDTH`) and is clamped to the number of
    /// samples the storage holds. When the window crosses the start of
    /// storage it is accumulated over two runs, the tail end of storage
    /// first. The read cursor plays no part and nothing is consumed.
    ///
    /// Despite the conventional name, the result is the Euclidean norm of
    /// the windowed samples: the sum of squares is not divided by the window
    /// length before the square root. Callers depend on this scale.
    pub fn rms_of_recent_samples<S: Sample>(&self, count: usize) -> f64 {
        let width = S::BYTE_WIDTH;
        let samples_per_buffer = self.capacity() / width;
        if samples_per_buffer == 0 {
            return 0.0;
        }
        let window = count.min(samples_per_buffer);
        let sample_head = self.head / width;

        let sum = if sample_head >= window {
            self.sum_of_squares::<S>(sample_head - window, sample_head)
        } else {
            let from_end = window - sample_head;
            self.sum_of_squares::<S>(samples_per_buffer - from_end, samples_per_buffer)
                + self.sum_of_squares::<S>(0, sample_head)
        };
        sum.sqrt()
    }

    /// Sum of squared samples over `[start, end)` in sample units.
    fn sum_of_squares<S: Sample>(&self, start: usize, end: usize) -> f64 {
        let width = S::BYTE_WIDTH;
        self.storage[start * width..end * width]
            .chunks_exact(width)
            .map(|chunk| {
                let value = S::from_ne_chunk(chunk).to_f64();
                value * value
            })
            .sum()
    }

    /// Moves the write cursor to an absolute byte position.
    ///
    /// Positions at or past the capacity are rejected with
    /// [`BufferError::InvalidCursorPosition`] and nothing moves. The filled
    /// count is recomputed as the modular distance from the read cursor;
    /// landing exactly on the read cursor reads as empty.
    pub fn set_head(&mut self, position: usize) -> Result<(), BufferError> {
        let cap = self.capacity();
        if position >= cap {
            return Err(BufferError::InvalidCursorPosition {
                position,
                capacity: cap,
            });
        }
        self.head = position;
        self.filled = (self.head + cap - self.tail) % cap;
        Ok(())
    }

    /// Seeds a filled length of `delta` bytes ahead of the read cursor
    /// without writing any data.
    ///
    /// Deltas at or past the capacity are rejected with
    /// [`BufferError::InvalidCursorPosition`] and nothing moves.
    pub fn set_tail_head_diff(&mut self, delta: usize) -> Result<(), BufferError> {
        let cap = self.capacity();
        if delta >= cap {
            return Err(BufferError::InvalidCursorPosition {
                position: delta,
                capacity: cap,
            });
        }
        self.head = (self.tail + delta) % cap;
        self.filled = delta;
        Ok(())
    }

    /// Declares the buffer empty at the origin. Storage keeps its bytes.
    pub fn reset_cursors(&mut self) {
        self.head = 0;
        self.tail = 0;
        self.filled = 0;
    }

    /// Overwrites the entire storage region with zero bytes. Cursors keep
    /// their positions.
    pub fn zeroize(&mut self) {
        self.storage.fill(0);
    }

    /// Dumps the entire storage region to `path` as a raw, header-less
    /// binary file of exactly `capacity` bytes, truncating any existing
    /// file.
    ///
    /// Logically stale regions are written as-is; the dump length never
    /// depends on how much data is unread. Bytes land in the host's
    /// in-memory order, so the file is not portable across hosts with
    /// differing sample byte orders.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), BufferError> {
        crate::io::save_raw(path.as_ref(), &self.storage)
    }
}
