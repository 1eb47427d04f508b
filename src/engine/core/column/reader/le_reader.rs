use crate::engine::errors::MarshalError;

/// Random-access little-endian reader over a fixed-width data buffer.
pub struct LeRowReader<'a> {
    buf: &'a [u8],
    width: usize,
}

macro_rules! read_row {
    ($($name:ident => $ty:ty),* $(,)?) => {
        $(
            #[inline]
            pub fn $name(&self, row: usize) -> Result<$ty, MarshalError> {
                Ok(<$ty>::from_le_bytes(self.field(row, 0)?))
            }
        )*
    };
}

impl<'a> LeRowReader<'a> {
    pub fn new(buf: &'a [u8], width: usize) -> Self {
        Self { buf, width }
    }

    pub fn row_count(&self) -> usize {
        if self.width == 0 { 0 } else { self.buf.len() / self.width }
    }

    /// Copies `N` bytes starting `offset` bytes into the row's slot.
    pub fn field<const N: usize>(&self, row: usize, offset: usize) -> Result<[u8; N], MarshalError> {
        let start = row
            .checked_mul(self.width)
            .and_then(|s| s.checked_add(offset))
            .filter(|s| s.checked_add(N).is_some())
            .ok_or_else(|| MarshalError::corrupt(format!("row offset overflow at row={row}")))?;
        self.buf
            .get(start..start + N)
            .and_then(|s| s.try_into().ok())
            .ok_or_else(|| {
                MarshalError::corrupt(format!(
                    "data buffer too short: need {} bytes, have {}",
                    start + N,
                    self.buf.len()
                ))
            })
    }

    read_row! {
        read_u8 => u8,
        read_i8 => i8,
        read_u16 => u16,
        read_i16 => i16,
        read_u32 => u32,
        read_i32 => i32,
        read_u64 => u64,
        read_i64 => i64,
        read_f32 => f32,
        read_f64 => f64,
    }

    /// Reads a 128-bit slot as (low word, high word).
    pub fn read_halves(&self, row: usize) -> Result<(u64, i64), MarshalError> {
        let low = u64::from_le_bytes(self.field(row, 0)?);
        let high = i64::from_le_bytes(self.field(row, 8)?);
        Ok((low, high))
    }
}
