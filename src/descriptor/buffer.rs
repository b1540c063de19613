use std::ops::Deref;

/// A fixed-capacity byte buffer.
///
/// The capacity is chosen when the buffer is created and never changes. An
/// oversized buffer records its meaningful length in a separate size field;
/// trimming replaces it with a tight copy through [`Buffer::trimmed`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Buffer {
    bytes: Box<[u8]>,
}

impl Buffer {
    /// Creates a zero-filled buffer holding exactly `capacity` bytes.
    #[must_use]
    pub fn zeroed(capacity: usize) -> Self {
        Self { bytes: vec![0; capacity].into_boxed_slice() }
    }

    /// Number of bytes the buffer holds.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.bytes.len()
    }

    /// Read-only view of the bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Writable view of the bytes. The capacity cannot change through it.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    /// Copies the first `len` bytes into a new, tightly sized buffer, or
    /// returns `None` when `len` exceeds the capacity.
    ///
    /// # Example
    /// ```
    /// use dynvar::descriptor::buffer::Buffer;
    ///
    /// let buffer = Buffer::from(vec![1, 2, 3, 0, 0]);
    ///
    /// assert_eq!(buffer.trimmed(3).unwrap().as_bytes(), &[1, 2, 3]);
    /// assert!(buffer.trimmed(6).is_none());
    /// ```
    #[must_use]
    pub fn trimmed(&self, len: usize) -> Option<Self> {
        self.bytes.get(..len).map(Self::from)
    }
}

impl Deref for Buffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<Vec<u8>> for Buffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self { bytes: bytes.into_boxed_slice() }
    }
}

impl From<&[u8]> for Buffer {
    fn from(bytes: &[u8]) -> Self {
        Self { bytes: bytes.into() }
    }
}

impl<const N: usize> From<[u8; N]> for Buffer {
    fn from(bytes: [u8; N]) -> Self {
        Self { bytes: Box::new(bytes) }
    }
}
