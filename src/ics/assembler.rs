//! Reassembly of logical ICS lines from an arbitrarily-chunked byte stream.

/// Buffers bytes across chunk boundaries and yields complete lines.
///
/// The fetch layer hands over whatever the transport produced; a logical
/// line may be split across any number of chunks, and one chunk may carry
/// any number of lines. Each completed line is yielded exactly once, in
/// order, with the terminating `\n` and a preceding `\r` removed.
#[derive(Debug, Default)]
pub struct LineAssembler {
    pending: Vec<u8>,
}

impl LineAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes one chunk and returns the lines it completed.
    ///
    /// Bytes after the last line terminator stay buffered for the next
    /// chunk. The pending buffer grows as needed; line length is unbounded.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<String> {
        let mut lines = Vec::new();
        for &byte in chunk {
            if byte == b'\n' {
                if self.pending.last() == Some(&b'\r') {
                    self.pending.pop();
                }
                lines.push(String::from_utf8_lossy(&self.pending).into_owned());
                self.pending.clear();
            } else {
                self.pending.push(byte);
            }
        }
        lines
    }

    /// Bytes currently buffered without a terminator.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}
