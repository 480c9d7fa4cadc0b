//! Encoding detection and binary-safe reading
//!
//! Wordlists are read as raw bytes and never rejected for their encoding.
//! UTF-16 files (with BOM) are transcoded to UTF-8, everything else passes
//! through untouched and is decoded line by line.

use anyhow::Context;
use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use encoding_rs_io::DecodeReaderBytesBuilder;
use std::borrow::Cow;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Result of encoding detection
#[derive(Debug, Clone)]
pub struct EncodingInfo {
    /// Detected encoding name
    pub name: &'static str,
    /// Whether the whole content is valid UTF-8
    pub is_utf8: bool,
    /// Encoding used for lines that are not valid UTF-8
    pub fallback: &'static Encoding,
}

impl Default for EncodingInfo {
    fn default() -> Self {
        Self {
            name: "UTF-8",
            is_utf8: true,
            fallback: encoding_rs::UTF_8,
        }
    }
}

/// Read a whole wordlist into memory as bytes.
///
/// A UTF-16 byte order mark switches to transcoding the file into UTF-8; any
/// BOM is stripped. Without a BOM the bytes are returned exactly as on disk.
pub fn read_wordlist(path: &Path) -> anyhow::Result<Vec<u8>> {
    let file = File::open(path).with_context(|| format!("Can't open file: {:?}", path))?;
    let size = file.metadata().map(|m| m.len() as usize).unwrap_or(0);

    let mut reader = DecodeReaderBytesBuilder::new()
        .bom_sniffing(true)
        .strip_bom(true)
        .utf8_passthru(true)
        .build(file);

    let mut content = Vec::with_capacity(size);
    reader
        .read_to_end(&mut content)
        .with_context(|| format!("Error reading file: {:?}", path))?;

    Ok(content)
}

/// Read a whole wordlist exactly as stored on disk, BOM and all.
pub fn read_raw(path: &Path) -> anyhow::Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("Error reading file: {:?}", path))
}

/// Detect how the lines of `content` should be decoded.
///
/// Valid UTF-8 needs no guessing. Otherwise chardetng picks the most likely
/// legacy encoding, which is then used for every line that is not UTF-8.
pub fn detect_encoding(content: &[u8]) -> EncodingInfo {
    if std::str::from_utf8(content).is_ok() {
        return EncodingInfo::default();
    }

    let mut detector = EncodingDetector::new();
    detector.feed(content, true);
    let fallback = detector.guess(None, false);

    EncodingInfo {
        name: fallback.name(),
        is_utf8: false,
        fallback,
    }
}

/// Permissive per-line decoder
#[derive(Debug, Clone, Copy)]
pub struct LineDecoder {
    fallback: &'static Encoding,
}

impl LineDecoder {
    pub fn new(fallback: &'static Encoding) -> Self {
        Self { fallback }
    }

    pub fn from_info(info: &EncodingInfo) -> Self {
        Self::new(info.fallback)
    }

    /// Decode one line. Never fails: malformed sequences become U+FFFD.
    pub fn decode<'a>(&self, line: &'a [u8]) -> Cow<'a, str> {
        match std::str::from_utf8(line) {
            Ok(s) => Cow::Borrowed(s),
            Err(_) => {
                let (decoded, had_errors) = self.fallback.decode_without_bom_handling(line);
                if had_errors {
                    log::debug!("Malformed {} sequence replaced in line", self.fallback.name());
                }
                decoded
            }
        }
    }
}

impl Default for LineDecoder {
    fn default() -> Self {
        Self::new(encoding_rs::UTF_8)
    }
}
