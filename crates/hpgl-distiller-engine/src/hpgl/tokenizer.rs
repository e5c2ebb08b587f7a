//! Command stream and tokenizer
//!
//! HPGL commands are terminated by `;`, but files produced by converters
//! also break lines with `\n` or `\r\n`. Any run of those bytes is treated
//! as a single boundary. The tokenizer borrows the document and never
//! modifies it, so the same [`CommandStream`] can be walked more than once.

/// Bytes that end a command.
pub const DELIMITERS: &[u8] = b";\n\r";

fn is_delimiter(byte: u8) -> bool {
    DELIMITERS.contains(&byte)
}

/// The whole input document, held in memory for the length of a run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandStream {
    bytes: Vec<u8>,
}

impl CommandStream {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Start a fresh pass over the document.
    pub fn tokens(&self) -> Tokenizer<'_> {
        Tokenizer::new(&self.bytes)
    }
}

impl From<Vec<u8>> for CommandStream {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl From<&str> for CommandStream {
    fn from(text: &str) -> Self {
        Self::new(text.as_bytes().to_vec())
    }
}

/// Lazy iterator over the non-empty tokens of a buffer.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    remaining: &'a [u8],
}

impl<'a> Tokenizer<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self { remaining: buffer }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.remaining.iter().position(|&b| !is_delimiter(b))?;
        let rest = &self.remaining[start..];
        let end = rest.iter().position(|&b| is_delimiter(b)).unwrap_or(rest.len());
        let (token, tail) = rest.split_at(end);
        self.remaining = tail;
        Some(token)
    }
}

impl std::iter::FusedIterator for Tokenizer<'_> {}

/// Tokenize a borrowed buffer.
pub fn tokenize(buffer: &[u8]) -> Tokenizer<'_> {
    Tokenizer::new(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(input: &str) -> Vec<&str> {
        tokenize(input.as_bytes())
            .map(|t| std::str::from_utf8(t).unwrap())
            .collect()
    }

    #[test]
    fn test_splits_on_every_delimiter() {
        assert_eq!(
            collect("IN;PU\nPA10,20\rPD"),
            vec!["IN", "PU", "PA10,20", "PD"]
        );
    }

    #[test]
    fn test_delimiter_runs_are_one_boundary() {
        assert_eq!(collect("IN;;\r\n;PU;\n\n"), vec!["IN", "PU"]);
    }

    #[test]
    fn test_leading_delimiters_skipped() {
        assert_eq!(collect(";\r\nSP1;"), vec!["SP1"]);
    }

    #[test]
    fn test_empty_and_delimiter_only_input() {
        assert!(collect("").is_empty());
        assert!(collect(";;\n\r").is_empty());
    }

    #[test]
    fn test_tokens_borrow_source() {
        let stream = CommandStream::from("PA1,2;PD");
        let first = stream.tokens().next().unwrap();
        assert_eq!(first, b"PA1,2");
        // Walking again starts from the beginning with the buffer intact.
        assert_eq!(stream.tokens().count(), 2);
        assert_eq!(stream.as_bytes(), b"PA1,2;PD");
    }

    #[test]
    fn test_fused_after_end() {
        let mut tokens = tokenize(b"IN");
        assert_eq!(tokens.next(), Some(&b"IN"[..]));
        assert_eq!(tokens.next(), None);
        assert_eq!(tokens.next(), None);
    }

    #[test]
    fn test_non_utf8_bytes_pass_through() {
        let tokens: Vec<&[u8]> = tokenize(b"LB\xff\xfe;PU").collect();
        assert_eq!(tokens, vec![&b"LB\xff\xfe"[..], &b"PU"[..]]);
    }
}
