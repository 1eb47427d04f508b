use uuid::Uuid;

use crate::engine::core::column::ColumnVector;
use crate::engine::core::column::reader::wide::{split_halves, uuid_to_halves};
use crate::engine::types::{DecimalWidth, EnumIndexWidth, LogicalType, TypeRegistry};

/// Owned buffers laid out exactly as the engine hands them over.
#[derive(Debug, Clone)]
pub struct ColumnBuffers {
    pub logical: LogicalType,
    pub rows: usize,
    pub data: Vec<u8>,
    pub aux: Vec<u8>,
    pub validity: Option<Vec<u8>>,
}

impl ColumnBuffers {
    pub fn vector(&self) -> ColumnVector<'_> {
        ColumnVector::new(
            self.logical.clone(),
            self.rows,
            &self.data,
            Some(&self.aux),
            self.validity.as_deref(),
        )
        .expect("factory buffers should form a valid vector")
    }
}

pub struct ColumnBuffersFactory {
    logical: LogicalType,
    width: usize,
    rows: usize,
    data: Vec<u8>,
    aux: Vec<u8>,
    bits: Vec<u8>,
    with_bitmap: bool,
}

macro_rules! push_le {
    ($($name:ident: $ty:ty),* $(,)?) => {
        $(
            pub fn $name(self, v: $ty) -> Self {
                self.push_raw(&v.to_le_bytes())
            }
        )*
    };
}

impl ColumnBuffersFactory {
    pub fn new(logical: LogicalType) -> Self {
        let width = TypeRegistry::family(&logical).row_width();
        Self {
            logical,
            width,
            rows: 0,
            data: Vec::new(),
            aux: Vec::new(),
            bits: Vec::new(),
            with_bitmap: false,
        }
    }

    /// Emit a validity bitmap even when every row is valid.
    pub fn with_bitmap(mut self) -> Self {
        self.with_bitmap = true;
        self
    }

    fn mark(&mut self, valid: bool) {
        let row = self.rows;
        if row / 8 >= self.bits.len() {
            self.bits.push(0);
        }
        if valid {
            self.bits[row / 8] |= 1 << (row % 8);
        }
        self.rows += 1;
    }

    /// Appends one valid row; `bytes` is zero-padded to the row width.
    pub fn push_raw(mut self, bytes: &[u8]) -> Self {
        assert!(bytes.len() <= self.width, "row wider than slot");
        self.data.extend_from_slice(bytes);
        self.data
            .extend(std::iter::repeat_n(0u8, self.width - bytes.len()));
        self.mark(true);
        self
    }

    /// Appends a null row with a garbage payload.
    pub fn push_null(mut self) -> Self {
        self.data.extend(std::iter::repeat_n(0xAB, self.width));
        self.with_bitmap = true;
        self.mark(false);
        self
    }

    pub fn push_bool(self, v: bool) -> Self {
        self.push_raw(&[v as u8])
    }

    push_le! {
        push_i8: i8,
        push_i16: i16,
        push_i32: i32,
        push_i64: i64,
        push_u8: u8,
        push_u16: u16,
        push_u32: u32,
        push_u64: u64,
        push_f32: f32,
        push_f64: f64,
    }

    pub fn push_hugeint(self, v: i128) -> Self {
        let (low, high) = split_halves(v);
        self.push_halves(low, high)
    }

    pub fn push_uuid(self, v: &Uuid) -> Self {
        let (low, high) = uuid_to_halves(v);
        self.push_halves(low, high)
    }

    fn push_halves(self, low: u64, high: i64) -> Self {
        let mut row = [0u8; 16];
        row[..8].copy_from_slice(&low.to_le_bytes());
        row[8..].copy_from_slice(&high.to_le_bytes());
        self.push_raw(&row)
    }

    /// Unscaled decimal written at the width its precision selects.
    pub fn push_decimal(self, unscaled: i128) -> Self {
        let LogicalType::Decimal(ty) = &self.logical else {
            panic!("push_decimal on {}", self.logical);
        };
        match ty.width() {
            DecimalWidth::I16 => self.push_i16(unscaled as i16),
            DecimalWidth::I32 => self.push_i32(unscaled as i32),
            DecimalWidth::I64 => self.push_i64(unscaled as i64),
            DecimalWidth::I128 => self.push_hugeint(unscaled),
        }
    }

    /// Dictionary index written at the width the dictionary size selects.
    pub fn push_enum_index(self, index: u32) -> Self {
        let LogicalType::Enum(ty) = &self.logical else {
            panic!("push_enum_index on {}", self.logical);
        };
        match ty.index_width() {
            EnumIndexWidth::U8 => self.push_u8(index as u8),
            EnumIndexWidth::U16 => self.push_u16(index as u16),
            EnumIndexWidth::U32 => self.push_u32(index),
        }
    }

    pub fn push_interval(self, months: i32, days: i32, micros: i64) -> Self {
        let mut row = [0u8; 16];
        row[..4].copy_from_slice(&months.to_le_bytes());
        row[4..8].copy_from_slice(&days.to_le_bytes());
        row[8..].copy_from_slice(&micros.to_le_bytes());
        self.push_raw(&row)
    }

    /// Appends `bytes` to the aux buffer and writes the (offset, len) entry.
    pub fn push_var(mut self, bytes: &[u8]) -> Self {
        let offset = self.aux.len() as u32;
        self.aux.extend_from_slice(bytes);
        let mut row = [0u8; 8];
        row[..4].copy_from_slice(&offset.to_le_bytes());
        row[4..].copy_from_slice(&(bytes.len() as u32).to_le_bytes());
        self.push_raw(&row)
    }

    pub fn push_str(self, s: &str) -> Self {
        self.push_var(s.as_bytes())
    }

    /// Packs a '0'/'1' string MSB first behind its padding byte.
    pub fn push_bits(self, bits: &str) -> Self {
        let padding = (8 - bits.len() % 8) % 8;
        let mut payload = vec![padding as u8];
        payload.resize(1 + bits.len().div_ceil(8), 0);
        for (i, c) in bits.chars().enumerate() {
            if c == '1' {
                payload[1 + i / 8] |= 0x80 >> (i % 8);
            }
        }
        self.push_var(&payload)
    }

    pub fn create(self) -> ColumnBuffers {
        ColumnBuffers {
            logical: self.logical,
            rows: self.rows,
            data: self.data,
            aux: self.aux,
            validity: self.with_bitmap.then_some(self.bits),
        }
    }
}
