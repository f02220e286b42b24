//! Typed views over raw sample bytes.

/// A fixed-width sample type that can be decoded from the buffer's raw bytes.
///
/// Decoding uses the host's native byte order, matching the in-memory
/// representation the producer wrote. Access is always index-based over the
/// byte region; there are no pointer reinterpretations, so alignment of the
/// storage never matters.
pub trait Sample: Copy {
    /// Width of one sample in bytes.
    const BYTE_WIDTH: usize;

    /// Decodes one sample from a native-endian chunk.
    ///
    /// `chunk` must be exactly `BYTE_WIDTH` bytes long.
    fn from_ne_chunk(chunk: &[u8]) -> Self;

    /// The sample value as `f64`, for accumulation.
    fn to_f64(self) -> f64;
}

macro_rules! impl_sample {
    ($($t:ty => $width:expr),* $(,)?) => {
        $(
            impl Sample for $t {
                const BYTE_WIDTH: usize = $width;

                #[inline]
                fn from_ne_chunk(chunk: &[u8]) -> Self {
                    let mut bytes = [0u8; $width];
                    bytes.copy_from_slice(chunk);
                    <$t>::from_ne_bytes(bytes)
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_sample!(i16 => 2, i32 => 4, f32 => 4, f64 => 8);
