//! Incremental UTF-8 decoding for streamed byte chunks.
//!
//! Transport chunk boundaries are not character boundaries: a multi-byte
//! character may arrive split across reads. The accumulator holds the
//! incomplete tail (at most three bytes) until the rest arrives, so no
//! replacement character is ever emitted for a merely-incomplete sequence.

/// Stateful incremental UTF-8 decoder.
#[derive(Debug, Default)]
pub struct Utf8Accumulator {
    carry: Vec<u8>,
}

impl Utf8Accumulator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode one chunk, returning the newly decodable text.
    ///
    /// Genuinely invalid sequences decode to U+FFFD; an incomplete trailing
    /// sequence is carried into the next call instead.
    pub fn push(&mut self, chunk: &[u8]) -> String {
        let owned;
        let mut rest: &[u8] = if self.carry.is_empty() {
            chunk
        } else {
            self.carry.extend_from_slice(chunk);
            owned = std::mem::take(&mut self.carry);
            &owned
        };

        let mut out = String::new();
        loop {
            match std::str::from_utf8(rest) {
                Ok(valid) => {
                    out.push_str(valid);
                    break;
                }
                Err(error) => {
                    let (valid, after) = rest.split_at(error.valid_up_to());
                    out.push_str(std::str::from_utf8(valid).unwrap_or_default());
                    match error.error_len() {
                        Some(len) => {
                            out.push(char::REPLACEMENT_CHARACTER);
                            rest = &after[len..];
                        }
                        None => {
                            // Incomplete tail: wait for the next chunk.
                            self.carry = after.to_vec();
                            break;
                        }
                    }
                }
            }
        }
        out
    }

    /// Number of bytes held back as an incomplete trailing sequence.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.carry.len()
    }
}

#[cfg(test)]
#[path = "decode_test.rs"]
mod tests;
