//! Windowed sample analysis over the write cursor, including windows that
//! wrap across the start of storage.

use samplering::CircularSampleBuffer;

const TOLERANCE: f64 = 1e-9;

fn write_f32_samples(buffer: &mut CircularSampleBuffer, samples: &[f32]) {
    let mut bytes = Vec::with_capacity(samples.len() * 4);
    for sample in samples {
        bytes.extend_from_slice(&sample.to_ne_bytes());
    }
    buffer.write(&bytes).unwrap();
}

// ==================== CONTIGUOUS WINDOWS ====================

#[test]
fn test_window_ending_at_head_without_wrap() {
    // 5 f32 slots; the window [3, 4] sits just below the write cursor
    let mut buffer = CircularSampleBuffer::new(20).unwrap();
    write_f32_samples(&mut buffer, &[1.0, 2.0, 3.0, 4.0]);

    let value = buffer.rms_of_recent_samples::<f32>(2);
    assert!((value - 5.0).abs() < TOLERANCE, "got {}", value);
}

#[test]
fn test_full_window_sums_every_written_sample() {
    let mut buffer = CircularSampleBuffer::new(20).unwrap();
    write_f32_samples(&mut buffer, &[1.0, 2.0, 3.0, 4.0]);

    let value = buffer.rms_of_recent_samples::<f32>(4);
    let expected = (1.0f64 + 4.0 + 9.0 + 16.0).sqrt();
    assert!((value - expected).abs() < TOLERANCE);
}

#[test]
fn test_result_is_root_of_sum_not_mean() {
    // two equal samples: a true RMS would give 3.0, this scale gives
    // sqrt(18)
    let mut buffer = CircularSampleBuffer::new(20).unwrap();
    write_f32_samples(&mut buffer, &[3.0, 3.0]);

    let value = buffer.rms_of_recent_samples::<f32>(2);
    assert!((value - 18.0f64.sqrt()).abs() < TOLERANCE);
}

// ==================== WRAPPED WINDOWS ====================

#[test]
fn test_window_behind_a_wrapped_head() {
    // 4 f32 slots filled by two writes; head lands back on slot 0
    let mut buffer = CircularSampleBuffer::new(16).unwrap();
    write_f32_samples(&mut buffer, &[1.0, 2.0]);
    write_f32_samples(&mut buffer, &[3.0, 4.0]);
    assert_eq!(buffer.head_position(), 0);

    let value = buffer.rms_of_recent_samples::<f32>(2);
    assert!((value - 5.0).abs() < TOLERANCE, "got {}", value);
}

#[test]
fn test_wrapped_window_equals_logically_contiguous_sum() {
    // keep writing pairs so the head wraps mid-window, then compare the
    // two-run accumulation against the unwrapped arithmetic
    let mut buffer = CircularSampleBuffer::new(16).unwrap();
    write_f32_samples(&mut buffer, &[1.0, 2.0]);
    write_f32_samples(&mut buffer, &[3.0, 4.0]);
    write_f32_samples(&mut buffer, &[5.0, 6.0]);

    // logical recent-most three samples are [4, 5, 6]
    let value = buffer.rms_of_recent_samples::<f32>(3);
    let expected = (16.0f64 + 25.0 + 36.0).sqrt();
    assert!((value - expected).abs() < TOLERANCE, "got {}", value);
}

// ==================== WINDOW CLAMPING AND WIDTHS ====================

#[test]
fn test_window_clamps_to_samples_per_buffer() {
    let mut buffer = CircularSampleBuffer::new(16).unwrap();
    write_f32_samples(&mut buffer, &[1.0, 2.0]);
    write_f32_samples(&mut buffer, &[3.0, 4.0]);

    let clamped = buffer.rms_of_recent_samples::<f32>(1000);
    let full = buffer.rms_of_recent_samples::<f32>(4);
    assert!((clamped - full).abs() < TOLERANCE);
}

#[test]
fn test_zero_width_buffer_for_sample_type_yields_zero() {
    // 2 bytes cannot hold a single f64 sample
    let buffer = CircularSampleBuffer::new(2).unwrap();
    assert_eq!(buffer.rms_of_recent_samples::<f64>(1), 0.0);
}

#[test]
fn test_zero_count_window_yields_zero() {
    let mut buffer = CircularSampleBuffer::new(20).unwrap();
    write_f32_samples(&mut buffer, &[1.0, 2.0, 3.0]);
    assert_eq!(buffer.rms_of_recent_samples::<f32>(0), 0.0);
}

#[test]
fn test_i16_samples_decode_at_their_own_width() {
    let mut buffer = CircularSampleBuffer::new(8).unwrap();
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&3i16.to_ne_bytes());
    bytes.extend_from_slice(&4i16.to_ne_bytes());
    buffer.write(&bytes).unwrap();

    let value = buffer.rms_of_recent_samples::<i16>(2);
    assert!((value - 5.0).abs() < TOLERANCE);
}

// ==================== READ-ONLY BEHAVIOR ====================

#[test]
fn test_analysis_ignores_the_read_cursor() {
    let mut buffer = CircularSampleBuffer::new(20).unwrap();
    write_f32_samples(&mut buffer, &[1.0, 2.0, 3.0, 4.0]);

    let before = buffer.rms_of_recent_samples::<f32>(2);
    let mut scratch = [0u8; 8];
    buffer.read(&mut scratch).unwrap();
    let after = buffer.rms_of_recent_samples::<f32>(2);

    assert_eq!(before, after);
    assert_eq!(buffer.filled_capacity(), 8);
}
