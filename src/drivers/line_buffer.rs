/// Outcome of offering a byte to a [`LineBuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Stored,
    /// The buffer was full. Input is dropped at the tail until the line is
    /// completed; nothing already buffered is overwritten.
    Dropped,
}

/// Fixed-capacity line under assembly. `len()` never exceeds `C`.
pub struct LineBuffer<const C: usize> {
    bytes: [u8; C],
    offset: usize,
}

impl<const C: usize> LineBuffer<C> {
    pub const fn new() -> Self {
        Self {
            bytes: [0; C],
            offset: 0,
        }
    }

    pub const fn capacity(&self) -> usize {
        C
    }

    pub fn len(&self) -> usize {
        self.offset
    }

    pub fn is_empty(&self) -> bool {
        self.offset == 0
    }

    pub fn is_full(&self) -> bool {
        self.offset == C
    }

    pub fn push(&mut self, byte: u8) -> Admission {
        if self.is_full() {
            return Admission::Dropped;
        }
        self.bytes[self.offset] = byte;
        self.offset += 1;
        Admission::Stored
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.offset]
    }

    /// The line as handed to the display, or `None` once the buffer is
    /// full and there is no room left for a terminator.
    ///
    /// The line ends at the first NUL, as a terminated string would.
    pub fn completed_line(&self) -> Option<&[u8]> {
        if self.is_full() {
            return None;
        }
        let content = self.as_bytes();
        let end = content.iter().position(|&b| b == 0).unwrap_or(content.len());
        Some(&content[..end])
    }

    pub fn clear(&mut self) {
        self.offset = 0;
    }
}

impl<const C: usize> Default for LineBuffer<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_input_is_kept_in_order() {
        let mut line = LineBuffer::<16>::new();
        for &b in b"hello" {
            assert_eq!(line.push(b), Admission::Stored);
        }
        assert_eq!(line.len(), 5);
        assert_eq!(line.as_bytes(), b"hello");
        assert_eq!(line.completed_line(), Some(&b"hello"[..]));
    }

    #[test]
    fn full_buffer_drops_tail() {
        let mut line = LineBuffer::<4>::new();
        let admissions: Vec<Admission> = b"abcdefg".iter().map(|&b| line.push(b)).collect();

        assert_eq!(&admissions[..4], &[Admission::Stored; 4]);
        assert_eq!(&admissions[4..], &[Admission::Dropped; 3]);
        assert_eq!(line.len(), 4);
        assert!(line.is_full());
        assert_eq!(line.as_bytes(), b"abcd");
    }

    #[test]
    fn full_buffer_has_no_completed_line() {
        let mut line = LineBuffer::<2>::new();
        line.push(b'a');
        assert!(line.completed_line().is_some());
        line.push(b'b');
        assert_eq!(line.completed_line(), None);
    }

    #[test]
    fn completed_line_stops_at_nul() {
        let mut line = LineBuffer::<8>::new();
        for &b in b"ab\0cd" {
            line.push(b);
        }
        assert_eq!(line.len(), 5);
        assert_eq!(line.completed_line(), Some(&b"ab"[..]));
    }

    #[test]
    fn clear_returns_to_empty() {
        let mut line = LineBuffer::<4>::new();
        for &b in b"abcdef" {
            line.push(b);
        }
        line.clear();
        assert!(line.is_empty());
        assert_eq!(line.push(b'z'), Admission::Stored);
        assert_eq!(line.as_bytes(), b"z");
        assert_eq!(line.capacity(), 4);
    }
}
