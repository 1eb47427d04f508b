/// Per-row validity bits, LSB first within each byte: 1 = valid, 0 = null.
/// A missing bitmap means every row is valid.
#[derive(Clone, Copy, Debug)]
pub struct ValidityBitmap<'a> {
    bits: Option<&'a [u8]>,
}

impl<'a> ValidityBitmap<'a> {
    pub fn new(bits: Option<&'a [u8]>) -> Self {
        Self { bits }
    }

    pub fn all_valid() -> Self {
        Self { bits: None }
    }

    /// Bytes needed to cover `row_count` rows.
    pub fn size_for(row_count: usize) -> usize {
        row_count.div_ceil(8)
    }

    pub fn covers(&self, row_count: usize) -> bool {
        match self.bits {
            Some(b) => b.len() >= Self::size_for(row_count),
            None => true,
        }
    }

    #[inline]
    pub fn is_null(&self, idx: usize) -> bool {
        match self.bits.and_then(|b| b.get(idx / 8)) {
            Some(byte) => (byte >> (idx % 8)) & 1 == 0,
            None => false,
        }
    }
}
