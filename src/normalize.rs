//! Line normalization
//!
//! Turns one raw wordlist line into the string that takes part in
//! deduplication: decoded, trimmed, and without a leftover line number.

use crate::cli::Normalization;
use crate::encoding::LineDecoder;
use bstr::ByteSlice;
use regex::Regex;

/// A single digit plus a space, left behind by numbered listings ("3 hunter2")
const LINE_NUMBER_PREFIX: &str = r"^[0-9] ";

/// Opening of a rendered byte literal
const BYTES_LITERAL_OPEN: &str = r"^b'";

/// Escaped newline plus closing quote of a rendered byte literal
const BYTES_LITERAL_CLOSE: &str = r"\n'";

/// Line normalizer
#[derive(Debug, Clone)]
pub struct Normalizer {
    strategy: Normalization,
    line_number: Regex,
    literal_open: Regex,
}

impl Normalizer {
    pub fn new(strategy: Normalization) -> anyhow::Result<Self> {
        Ok(Self {
            strategy,
            line_number: Regex::new(LINE_NUMBER_PREFIX)?,
            literal_open: Regex::new(BYTES_LITERAL_OPEN)?,
        })
    }

    pub fn strategy(&self) -> Normalization {
        self.strategy
    }

    /// Normalize every line of `content` and hand the results to `sink`.
    pub fn for_each_line<F>(&self, content: &[u8], decoder: &LineDecoder, mut sink: F)
    where
        F: FnMut(String),
    {
        match self.strategy {
            Normalization::Lossy => {
                for line in content.lines() {
                    sink(self.normalize_lossy(line, decoder));
                }
            }
            Normalization::Legacy => {
                for line in content.lines_with_terminator() {
                    sink(self.normalize_legacy(line));
                }
            }
        }
    }

    /// Decode permissively, trim, drop the line-number prefix.
    ///
    /// A blank line normalizes to the empty string and is kept.
    pub fn normalize_lossy(&self, line: &[u8], decoder: &LineDecoder) -> String {
        let decoded = decoder.decode(line);
        self.strip_line_number(decoded.trim()).to_string()
    }

    /// Bug-compatible rendering: the raw line, terminator included, is printed
    /// as a byte literal and the literal's framing is then regex-stripped.
    ///
    /// Empty results are kept, and a last line without a newline keeps its
    /// closing quote.
    pub fn normalize_legacy(&self, line: &[u8]) -> String {
        let rendered = bytes_literal(line);
        let rendered = self.literal_open.replace(&rendered, "");
        let rendered = rendered.replace(BYTES_LITERAL_CLOSE, "");

        self.strip_line_number(rendered.trim()).to_string()
    }

    fn strip_line_number<'a>(&self, word: &'a str) -> &'a str {
        match self.line_number.find(word) {
            Some(m) => &word[m.end()..],
            None => word,
        }
    }
}

/// Render bytes the way a Python `bytes` object prints itself, e.g. `b'admin\n'`.
///
/// Single quotes are used unless the content contains `'` and no `"`.
pub fn bytes_literal(bytes: &[u8]) -> String {
    let quote = if bytes.contains(&b'\'') && !bytes.contains(&b'"') {
        b'"'
    } else {
        b'\''
    };

    let mut out = String::with_capacity(bytes.len() + 3);
    out.push('b');
    out.push(quote as char);

    for &byte in bytes {
        match byte {
            b'\\' => out.push_str("\\\\"),
            b'\t' => out.push_str("\\t"),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            b if b == quote => {
                out.push('\\');
                out.push(b as char);
            }
            0x20..=0x7e => out.push(byte as char),
            _ => out.push_str(&format!("\\x{:02x}", byte)),
        }
    }

    out.push(quote as char);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lossy() -> Normalizer {
        Normalizer::new(Normalization::Lossy).unwrap()
    }

    fn legacy() -> Normalizer {
        Normalizer::new(Normalization::Legacy).unwrap()
    }

    fn collect(normalizer: &Normalizer, content: &[u8]) -> Vec<String> {
        let mut words = Vec::new();
        normalizer.for_each_line(content, &LineDecoder::default(), |w| words.push(w));
        words
    }

    #[test]
    fn test_trims_and_strips_line_number() {
        let n = lossy();
        let d = LineDecoder::default();

        assert_eq!(n.normalize_lossy(b"3 hunter2 ", &d), "hunter2");
        assert_eq!(n.normalize_lossy(b"  admin\t", &d), "admin");
        assert_eq!(n.normalize_lossy(b"admin\r", &d), "admin");
    }

    #[test]
    fn test_only_single_digit_prefix_is_stripped() {
        let n = lossy();
        let d = LineDecoder::default();

        assert_eq!(n.normalize_lossy(b"12 monkeys", &d), "12 monkeys");
        assert_eq!(n.normalize_lossy(b"1password", &d), "1password");
        assert_eq!(n.normalize_lossy(b"7", &d), "7");
    }

    #[test]
    fn test_prefix_stripped_after_trim() {
        let n = lossy();

        assert_eq!(
            n.normalize_lossy(b"   4 letmein", &LineDecoder::default()),
            "letmein"
        );
    }

    #[test]
    fn test_lossy_keeps_blank_lines_as_empty_entry() {
        let n = lossy();

        assert_eq!(n.normalize_lossy(b"   ", &LineDecoder::default()), "");
        assert_eq!(collect(&n, b"cat\n   \ndog\n"), vec!["cat", "", "dog"]);
        assert_eq!(collect(&n, b"cat\n\n\r\ndog\n"), vec!["cat", "", "", "dog"]);
    }

    #[test]
    fn test_lossy_handles_invalid_bytes() {
        let words = collect(&lossy(), b"ok\n\xff\xfe\xfd\nfine");

        assert_eq!(words.len(), 3);
        assert_eq!(words[0], "ok");
        assert_eq!(words[2], "fine");
    }

    #[test]
    fn test_bytes_literal() {
        assert_eq!(bytes_literal(b"admin\n"), r"b'admin\n'");
        assert_eq!(bytes_literal(b"a\\b"), r"b'a\\b'");
        assert_eq!(bytes_literal(b"it's"), r#"b"it's""#);
        assert_eq!(bytes_literal(b"it's \"x\""), r#"b'it\'s "x"'"#);
        assert_eq!(bytes_literal(b"\x00\x7f\xe9\t\r"), r"b'\x00\x7f\xe9\t\r'");
    }

    #[test]
    fn test_legacy_strips_literal_framing() {
        let n = legacy();

        assert_eq!(n.normalize_legacy(b"admin\n"), "admin");
        assert_eq!(n.normalize_legacy(b"3 hunter2 \n"), "hunter2");
        assert_eq!(n.normalize_legacy(b"\n"), "");
    }

    #[test]
    fn test_legacy_keeps_quirks() {
        let n = legacy();

        // no trailing newline: the closing quote survives
        assert_eq!(n.normalize_legacy(b"admin"), "admin'");
        // CRLF line: the escaped carriage return survives
        assert_eq!(n.normalize_legacy(b"admin\r\n"), r"admin\r");
        // non-ASCII bytes stay escaped
        assert_eq!(n.normalize_legacy(b"caf\xe9\n"), r"caf\xe9");
        // a quote switches the literal to double quotes, so no framing is stripped
        assert_eq!(n.normalize_legacy(b"it's\n"), r#"b"it's\n""#);
        // a UTF-8 BOM is rendered like any other byte
        assert_eq!(n.normalize_legacy(b"\xef\xbb\xbfadmin\n"), r"\xef\xbb\xbfadmin");
    }

    #[test]
    fn test_artifact_variants_collapse() {
        let n = lossy();
        let words = collect(&n, b"admin\nadmin \n 1 admin\nadmin\r\n");

        assert!(words.iter().all(|w| w == "admin"));
        assert_eq!(words.len(), 4);
    }
}
