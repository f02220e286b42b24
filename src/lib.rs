#![forbid(unsafe_code)]
//! Fixed-capacity circular sample buffer for real-time audio capture paths.
//!
//! `samplering` decouples an audio sample producer (such as a capture
//! callback) from a consumer running at a different rate or on a different
//! schedule (an analysis or rendering stage). The core type,
//! [`CircularSampleBuffer`], owns a fixed byte region and keeps two wrapping
//! cursors over it: bulk byte transfer in and out, wrap-aware windowed
//! sample analysis, cursor administration, and raw persistence all operate
//! on the same pair.
//!
//! # Quick Start
//!
//! ```
//! use samplering::CircularSampleBuffer;
//!
//! let mut buffer = CircularSampleBuffer::new(8).unwrap();
//! buffer.write(&[1, 2, 3, 4, 5, 6]).unwrap();
//!
//! let mut out = [0u8; 4];
//! let copied = buffer.read(&mut out).unwrap();
//! assert_eq!(copied, 4);
//! assert_eq!(out, [1, 2, 3, 4]);
//! assert_eq!(buffer.filled_capacity(), 2);
//! ```
//!
//! # Sharing across threads
//!
//! The buffer itself takes `&mut self`; for one producer thread and one
//! consumer thread, wrap it in a [`SharedSampleBuffer`] and hand each side
//! a clone:
//!
//! ```
//! use samplering::SharedSampleBuffer;
//!
//! let buffer = SharedSampleBuffer::new(1024).unwrap();
//! let producer = buffer.clone();
//! // producer.write(&chunk) from the capture callback,
//! // buffer.read(&mut scratch) from the analysis thread.
//! ```

pub mod buffer;
pub mod config;
pub mod error;
pub mod io;
pub mod sample;
pub mod shared;

pub use buffer::CircularSampleBuffer;
pub use config::{BufferConfig, OverwritePolicy};
pub use error::BufferError;
pub use sample::Sample;
pub use shared::SharedSampleBuffer;
