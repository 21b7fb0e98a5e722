//! Response body compression
//!
//! Whole-body, single-shot gzip. Each call allocates its own output buffer.

use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::{self, Write};

/// Gzip `data` into a fresh buffer
pub fn gzip(data: &[u8]) -> io::Result<Vec<u8>> {
    let buffer = Vec::with_capacity(data.len() / 2 + 64);
    let mut encoder = GzEncoder::new(buffer, Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::GzDecoder;
    use std::io::Read;

    fn gunzip(data: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        GzDecoder::new(data).read_to_end(&mut out).unwrap();
        out
    }

    #[test]
    fn test_gzip_restores_original() {
        let body = b"body { color: red; }\n".repeat(50);
        let compressed = gzip(&body).unwrap();
        assert!(compressed.len() < body.len());
        assert_eq!(gunzip(&compressed), body);
    }

    #[test]
    fn test_gzip_empty_body() {
        let compressed = gzip(b"").unwrap();
        assert!(!compressed.is_empty());
        assert!(gunzip(&compressed).is_empty());
    }

    #[test]
    fn test_gzip_is_deterministic() {
        assert_eq!(gzip(b"same bytes").unwrap(), gzip(b"same bytes").unwrap());
    }
}
