use std::fmt;

use crate::engine::types::logical_type::{
    DecimalWidth, EnumIndexWidth, LogicalType, LogicalTypeId,
};

/// Physical storage family of a column; selects the decoder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PhysicalFamily {
    Bool,
    SignedInt(usize),
    UnsignedInt(usize),
    Float32,
    Float64,
    WideInt,
    Decimal(DecimalWidth),
    Date,
    Time,
    Timestamp,
    Interval,
    Uuid,
    VarBytes,
    Dictionary(EnumIndexWidth),
    BitString,
}

impl PhysicalFamily {
    /// Bytes occupied by one row in the fixed-width data buffer.
    pub fn row_width(&self) -> usize {
        match self {
            PhysicalFamily::Bool => 1,
            PhysicalFamily::SignedInt(w) | PhysicalFamily::UnsignedInt(w) => *w,
            PhysicalFamily::Float32 => 4,
            PhysicalFamily::Float64 => 8,
            PhysicalFamily::WideInt => 16,
            PhysicalFamily::Decimal(w) => w.byte_len(),
            PhysicalFamily::Date => 4,
            PhysicalFamily::Time | PhysicalFamily::Timestamp => 8,
            PhysicalFamily::Interval | PhysicalFamily::Uuid => 16,
            PhysicalFamily::VarBytes | PhysicalFamily::BitString => 8,
            PhysicalFamily::Dictionary(w) => w.byte_len(),
        }
    }

    pub fn uses_aux(&self) -> bool {
        matches!(self, PhysicalFamily::VarBytes | PhysicalFamily::BitString)
    }
}

/// Host representations a decoded value can be adapted into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HostType {
    Bool,
    I8,
    I16,
    I32,
    I64,
    I128,
    U8,
    U16,
    U32,
    U64,
    U128,
    F32,
    F64,
    BigInt,
    Decimal,
    BigDecimal,
    FixedDecimal,
    Date,
    NaiveDate,
    Time,
    NaiveTime,
    Timestamp,
    NaiveDateTime,
    DateTimeUtc,
    Interval,
    Uuid,
    String,
    Bytes,
}

impl HostType {
    pub fn as_str(&self) -> &'static str {
        match self {
            HostType::Bool => "bool",
            HostType::I8 => "i8",
            HostType::I16 => "i16",
            HostType::I32 => "i32",
            HostType::I64 => "i64",
            HostType::I128 => "i128",
            HostType::U8 => "u8",
            HostType::U16 => "u16",
            HostType::U32 => "u32",
            HostType::U64 => "u64",
            HostType::U128 => "u128",
            HostType::F32 => "f32",
            HostType::F64 => "f64",
            HostType::BigInt => "num_bigint::BigInt",
            HostType::Decimal => "Decimal",
            HostType::BigDecimal => "bigdecimal::BigDecimal",
            HostType::FixedDecimal => "rust_decimal::Decimal",
            HostType::Date => "Date",
            HostType::NaiveDate => "chrono::NaiveDate",
            HostType::Time => "Time",
            HostType::NaiveTime => "chrono::NaiveTime",
            HostType::Timestamp => "Timestamp",
            HostType::NaiveDateTime => "chrono::NaiveDateTime",
            HostType::DateTimeUtc => "chrono::DateTime<Utc>",
            HostType::Interval => "Interval",
            HostType::Uuid => "uuid::Uuid",
            HostType::String => "String",
            HostType::Bytes => "Vec<u8>",
        }
    }
}

impl fmt::Display for HostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const INTEGER_HOSTS: &[HostType] = &[
    HostType::I8,
    HostType::I16,
    HostType::I32,
    HostType::I64,
    HostType::I128,
    HostType::U8,
    HostType::U16,
    HostType::U32,
    HostType::U64,
    HostType::U128,
    HostType::BigInt,
];

/// Closed lookup from logical type to decoder family and adaptable hosts.
pub struct TypeRegistry;

impl TypeRegistry {
    pub fn family(logical: &LogicalType) -> PhysicalFamily {
        match logical {
            LogicalType::Boolean => PhysicalFamily::Bool,
            LogicalType::TinyInt => PhysicalFamily::SignedInt(1),
            LogicalType::SmallInt => PhysicalFamily::SignedInt(2),
            LogicalType::Integer => PhysicalFamily::SignedInt(4),
            LogicalType::BigInt => PhysicalFamily::SignedInt(8),
            LogicalType::UTinyInt => PhysicalFamily::UnsignedInt(1),
            LogicalType::USmallInt => PhysicalFamily::UnsignedInt(2),
            LogicalType::UInteger => PhysicalFamily::UnsignedInt(4),
            LogicalType::UBigInt => PhysicalFamily::UnsignedInt(8),
            LogicalType::HugeInt => PhysicalFamily::WideInt,
            LogicalType::Float => PhysicalFamily::Float32,
            LogicalType::Double => PhysicalFamily::Float64,
            LogicalType::Decimal(d) => PhysicalFamily::Decimal(d.width()),
            LogicalType::Date => PhysicalFamily::Date,
            LogicalType::Time => PhysicalFamily::Time,
            LogicalType::Timestamp => PhysicalFamily::Timestamp,
            LogicalType::Interval => PhysicalFamily::Interval,
            LogicalType::Uuid => PhysicalFamily::Uuid,
            LogicalType::Varchar | LogicalType::Blob => PhysicalFamily::VarBytes,
            LogicalType::Bit => PhysicalFamily::BitString,
            LogicalType::Enum(e) => PhysicalFamily::Dictionary(e.index_width()),
        }
    }

    pub fn compatible_hosts(id: LogicalTypeId) -> &'static [HostType] {
        match id {
            LogicalTypeId::Boolean => &[HostType::Bool],
            LogicalTypeId::TinyInt
            | LogicalTypeId::SmallInt
            | LogicalTypeId::Integer
            | LogicalTypeId::BigInt
            | LogicalTypeId::HugeInt
            | LogicalTypeId::UTinyInt
            | LogicalTypeId::USmallInt
            | LogicalTypeId::UInteger
            | LogicalTypeId::UBigInt => INTEGER_HOSTS,
            LogicalTypeId::Float => &[HostType::F32, HostType::F64],
            LogicalTypeId::Double => &[HostType::F64],
            LogicalTypeId::Decimal => &[
                HostType::Decimal,
                HostType::BigDecimal,
                HostType::FixedDecimal,
            ],
            LogicalTypeId::Date => &[HostType::Date, HostType::NaiveDate],
            LogicalTypeId::Time => &[HostType::Time, HostType::NaiveTime],
            LogicalTypeId::Timestamp => &[
                HostType::Timestamp,
                HostType::NaiveDateTime,
                HostType::DateTimeUtc,
            ],
            LogicalTypeId::Interval => &[HostType::Interval],
            LogicalTypeId::Uuid => &[HostType::Uuid],
            LogicalTypeId::Varchar => &[HostType::String, HostType::Bytes],
            LogicalTypeId::Blob => &[HostType::Bytes],
            LogicalTypeId::Bit | LogicalTypeId::Enum => &[HostType::String],
        }
    }

    pub fn is_compatible(id: LogicalTypeId, host: HostType) -> bool {
        Self::compatible_hosts(id).contains(&host)
    }
}
