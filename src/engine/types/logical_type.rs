use std::fmt;
use std::sync::Arc;

use crate::engine::errors::MarshalError;

/// Raw logical type ids as reported by the engine.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LogicalTypeId {
    Boolean = 1,
    TinyInt = 2,
    SmallInt = 3,
    Integer = 4,
    BigInt = 5,
    UTinyInt = 6,
    USmallInt = 7,
    UInteger = 8,
    UBigInt = 9,
    Float = 10,
    Double = 11,
    Timestamp = 12,
    Date = 13,
    Time = 14,
    Interval = 15,
    HugeInt = 16,
    Varchar = 17,
    Blob = 18,
    Decimal = 19,
    Enum = 23,
    Uuid = 27,
    Bit = 29,
}

impl LogicalTypeId {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogicalTypeId::Boolean => "BOOLEAN",
            LogicalTypeId::TinyInt => "TINYINT",
            LogicalTypeId::SmallInt => "SMALLINT",
            LogicalTypeId::Integer => "INTEGER",
            LogicalTypeId::BigInt => "BIGINT",
            LogicalTypeId::UTinyInt => "UTINYINT",
            LogicalTypeId::USmallInt => "USMALLINT",
            LogicalTypeId::UInteger => "UINTEGER",
            LogicalTypeId::UBigInt => "UBIGINT",
            LogicalTypeId::Float => "FLOAT",
            LogicalTypeId::Double => "DOUBLE",
            LogicalTypeId::Timestamp => "TIMESTAMP",
            LogicalTypeId::Date => "DATE",
            LogicalTypeId::Time => "TIME",
            LogicalTypeId::Interval => "INTERVAL",
            LogicalTypeId::HugeInt => "HUGEINT",
            LogicalTypeId::Varchar => "VARCHAR",
            LogicalTypeId::Blob => "BLOB",
            LogicalTypeId::Decimal => "DECIMAL",
            LogicalTypeId::Enum => "ENUM",
            LogicalTypeId::Uuid => "UUID",
            LogicalTypeId::Bit => "BIT",
        }
    }
}

impl fmt::Display for LogicalTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u8> for LogicalTypeId {
    type Error = MarshalError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        let id = match v {
            1 => LogicalTypeId::Boolean,
            2 => LogicalTypeId::TinyInt,
            3 => LogicalTypeId::SmallInt,
            4 => LogicalTypeId::Integer,
            5 => LogicalTypeId::BigInt,
            6 => LogicalTypeId::UTinyInt,
            7 => LogicalTypeId::USmallInt,
            8 => LogicalTypeId::UInteger,
            9 => LogicalTypeId::UBigInt,
            10 => LogicalTypeId::Float,
            11 => LogicalTypeId::Double,
            12 => LogicalTypeId::Timestamp,
            13 => LogicalTypeId::Date,
            14 => LogicalTypeId::Time,
            15 => LogicalTypeId::Interval,
            16 => LogicalTypeId::HugeInt,
            17 => LogicalTypeId::Varchar,
            18 => LogicalTypeId::Blob,
            19 => LogicalTypeId::Decimal,
            23 => LogicalTypeId::Enum,
            27 => LogicalTypeId::Uuid,
            29 => LogicalTypeId::Bit,
            other => return Err(MarshalError::UnknownType(other)),
        };
        Ok(id)
    }
}

impl From<LogicalTypeId> for u8 {
    fn from(id: LogicalTypeId) -> u8 {
        id as u8
    }
}

/// Storage width of a packed decimal, chosen from its precision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DecimalWidth {
    I16,
    I32,
    I64,
    I128,
}

impl DecimalWidth {
    pub fn byte_len(&self) -> usize {
        match self {
            DecimalWidth::I16 => 2,
            DecimalWidth::I32 => 4,
            DecimalWidth::I64 => 8,
            DecimalWidth::I128 => 16,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DecimalType {
    precision: u8,
    scale: u8,
}

impl DecimalType {
    pub const MAX_PRECISION: u8 = 38;

    pub fn new(precision: u8, scale: u8) -> Result<Self, MarshalError> {
        if precision == 0 || precision > Self::MAX_PRECISION {
            return Err(MarshalError::InvalidTypeMetadata(format!(
                "decimal precision {precision} outside 1..={}",
                Self::MAX_PRECISION
            )));
        }
        if scale > precision {
            return Err(MarshalError::InvalidTypeMetadata(format!(
                "decimal scale {scale} exceeds precision {precision}"
            )));
        }
        Ok(Self { precision, scale })
    }

    pub fn precision(&self) -> u8 {
        self.precision
    }

    pub fn scale(&self) -> u8 {
        self.scale
    }

    pub fn width(&self) -> DecimalWidth {
        match self.precision {
            0..=4 => DecimalWidth::I16,
            5..=9 => DecimalWidth::I32,
            10..=18 => DecimalWidth::I64,
            _ => DecimalWidth::I128,
        }
    }
}

/// Storage width of an enum's per-row dictionary index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EnumIndexWidth {
    U8,
    U16,
    U32,
}

impl EnumIndexWidth {
    pub fn for_dictionary_len(len: usize) -> Self {
        if len <= u8::MAX as usize {
            EnumIndexWidth::U8
        } else if len <= u16::MAX as usize {
            EnumIndexWidth::U16
        } else {
            EnumIndexWidth::U32
        }
    }

    pub fn byte_len(&self) -> usize {
        match self {
            EnumIndexWidth::U8 => 1,
            EnumIndexWidth::U16 => 2,
            EnumIndexWidth::U32 => 4,
        }
    }
}

/// Ordered label dictionary of an enum column. Cloning shares the labels.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EnumType {
    labels: Arc<[String]>,
}

impl EnumType {
    pub fn new<I, S>(labels: I) -> Result<Self, MarshalError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Arc<[String]> = labels.into_iter().map(Into::into).collect();
        if labels.is_empty() {
            return Err(MarshalError::InvalidTypeMetadata(
                "enum dictionary is empty".into(),
            ));
        }
        if labels.len() > u32::MAX as usize {
            return Err(MarshalError::InvalidTypeMetadata(format!(
                "enum dictionary of {} labels exceeds 32-bit index range",
                labels.len()
            )));
        }
        Ok(Self { labels })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    pub fn index_width(&self) -> EnumIndexWidth {
        EnumIndexWidth::for_dictionary_len(self.labels.len())
    }
}

/// Kind-specific metadata that accompanies a raw type id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TypeMeta {
    #[default]
    None,
    Decimal { precision: u8, scale: u8 },
    Enum(Vec<String>),
}

/// Fully described logical type of a column.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum LogicalType {
    Boolean,
    TinyInt,
    SmallInt,
    Integer,
    BigInt,
    HugeInt,
    UTinyInt,
    USmallInt,
    UInteger,
    UBigInt,
    Float,
    Double,
    Decimal(DecimalType),
    Date,
    Time,
    Timestamp,
    Interval,
    Uuid,
    Varchar,
    Blob,
    Bit,
    Enum(EnumType),
}

impl LogicalType {
    /// Builds a descriptor from the engine's raw id and metadata.
    pub fn resolve(tag: u8, meta: TypeMeta) -> Result<Self, MarshalError> {
        let id = LogicalTypeId::try_from(tag)?;
        let ty = match (id, meta) {
            (LogicalTypeId::Decimal, TypeMeta::Decimal { precision, scale }) => {
                LogicalType::Decimal(DecimalType::new(precision, scale)?)
            }
            (LogicalTypeId::Enum, TypeMeta::Enum(labels)) => {
                LogicalType::Enum(EnumType::new(labels)?)
            }
            (LogicalTypeId::Decimal, _) | (LogicalTypeId::Enum, _) => {
                return Err(MarshalError::InvalidTypeMetadata(format!(
                    "{id} requires its own metadata"
                )));
            }
            (_, TypeMeta::Decimal { .. }) | (_, TypeMeta::Enum(_)) => {
                return Err(MarshalError::InvalidTypeMetadata(format!(
                    "{id} takes no metadata"
                )));
            }
            (LogicalTypeId::Boolean, TypeMeta::None) => LogicalType::Boolean,
            (LogicalTypeId::TinyInt, TypeMeta::None) => LogicalType::TinyInt,
            (LogicalTypeId::SmallInt, TypeMeta::None) => LogicalType::SmallInt,
            (LogicalTypeId::Integer, TypeMeta::None) => LogicalType::Integer,
            (LogicalTypeId::BigInt, TypeMeta::None) => LogicalType::BigInt,
            (LogicalTypeId::HugeInt, TypeMeta::None) => LogicalType::HugeInt,
            (LogicalTypeId::UTinyInt, TypeMeta::None) => LogicalType::UTinyInt,
            (LogicalTypeId::USmallInt, TypeMeta::None) => LogicalType::USmallInt,
            (LogicalTypeId::UInteger, TypeMeta::None) => LogicalType::UInteger,
            (LogicalTypeId::UBigInt, TypeMeta::None) => LogicalType::UBigInt,
            (LogicalTypeId::Float, TypeMeta::None) => LogicalType::Float,
            (LogicalTypeId::Double, TypeMeta::None) => LogicalType::Double,
            (LogicalTypeId::Date, TypeMeta::None) => LogicalType::Date,
            (LogicalTypeId::Time, TypeMeta::None) => LogicalType::Time,
            (LogicalTypeId::Timestamp, TypeMeta::None) => LogicalType::Timestamp,
            (LogicalTypeId::Interval, TypeMeta::None) => LogicalType::Interval,
            (LogicalTypeId::Uuid, TypeMeta::None) => LogicalType::Uuid,
            (LogicalTypeId::Varchar, TypeMeta::None) => LogicalType::Varchar,
            (LogicalTypeId::Blob, TypeMeta::None) => LogicalType::Blob,
            (LogicalTypeId::Bit, TypeMeta::None) => LogicalType::Bit,
        };
        Ok(ty)
    }

    pub fn decimal(precision: u8, scale: u8) -> Result<Self, MarshalError> {
        Ok(LogicalType::Decimal(DecimalType::new(precision, scale)?))
    }

    pub fn enumeration<I, S>(labels: I) -> Result<Self, MarshalError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(LogicalType::Enum(EnumType::new(labels)?))
    }

    pub fn id(&self) -> LogicalTypeId {
        match self {
            LogicalType::Boolean => LogicalTypeId::Boolean,
            LogicalType::TinyInt => LogicalTypeId::TinyInt,
            LogicalType::SmallInt => LogicalTypeId::SmallInt,
            LogicalType::Integer => LogicalTypeId::Integer,
            LogicalType::BigInt => LogicalTypeId::BigInt,
            LogicalType::HugeInt => LogicalTypeId::HugeInt,
            LogicalType::UTinyInt => LogicalTypeId::UTinyInt,
            LogicalType::USmallInt => LogicalTypeId::USmallInt,
            LogicalType::UInteger => LogicalTypeId::UInteger,
            LogicalType::UBigInt => LogicalTypeId::UBigInt,
            LogicalType::Float => LogicalTypeId::Float,
            LogicalType::Double => LogicalTypeId::Double,
            LogicalType::Decimal(_) => LogicalTypeId::Decimal,
            LogicalType::Date => LogicalTypeId::Date,
            LogicalType::Time => LogicalTypeId::Time,
            LogicalType::Timestamp => LogicalTypeId::Timestamp,
            LogicalType::Interval => LogicalTypeId::Interval,
            LogicalType::Uuid => LogicalTypeId::Uuid,
            LogicalType::Varchar => LogicalTypeId::Varchar,
            LogicalType::Blob => LogicalTypeId::Blob,
            LogicalType::Bit => LogicalTypeId::Bit,
            LogicalType::Enum(_) => LogicalTypeId::Enum,
        }
    }
}

impl fmt::Display for LogicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicalType::Decimal(d) => write!(f, "DECIMAL({},{})", d.precision(), d.scale()),
            LogicalType::Enum(e) => write!(f, "ENUM[{}]", e.len()),
            other => f.write_str(other.id().as_str()),
        }
    }
}
