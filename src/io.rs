//! Raw persistence for buffer storage dumps.

use crate::error::BufferError;
use std::io::Write;
use std::path::Path;

/// Writes `bytes` to `path` as a header-less binary dump, truncating any
/// existing file.
///
/// The written length always equals `bytes.len()`; no metadata surrounds the
/// payload.
pub fn save_raw(path: &Path, bytes: &[u8]) -> Result<(), BufferError> {
    let mut file = std::fs::File::create(path)
        .map_err(|e| BufferError::Io(format!("{}: {}", path.display(), e)))?;
    file.write_all(bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::save_raw;

    #[test]
    fn truncates_existing_file() {
        let dir = std::env::temp_dir();
        let path = dir.join("samplering_io_truncate.bin");

        save_raw(&path, &[0xAB; 64]).unwrap();
        save_raw(&path, &[0xCD; 16]).unwrap();

        let contents = std::fs::read(&path).unwrap();
        assert_eq!(contents, vec![0xCD; 16]);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn unwritable_path_is_surfaced() {
        let path = std::path::Path::new("/nonexistent-samplering-dir/dump.bin");
        assert!(save_raw(path, &[0u8; 4]).is_err());
    }
}
