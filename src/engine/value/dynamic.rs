use std::fmt;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64_STANDARD};
use serde_json::{Number, Value as JsonValue};
use uuid::Uuid;

use crate::engine::types::LogicalTypeId;
use crate::engine::value::{Date, Decimal, Interval, Time, Timestamp};

/// Type-erased value of one cell. Owns all of its data; nothing here borrows
/// from the column buffers it was decoded from.
#[derive(Debug, Clone, PartialEq)]
pub enum DynamicValue {
    Null,
    Boolean(bool),
    TinyInt(i8),
    SmallInt(i16),
    Integer(i32),
    BigInt(i64),
    HugeInt(i128),
    UTinyInt(u8),
    USmallInt(u16),
    UInteger(u32),
    UBigInt(u64),
    Float(f32),
    Double(f64),
    Decimal(Decimal),
    Date(Date),
    Time(Time),
    Timestamp(Timestamp),
    Interval(Interval),
    Uuid(Uuid),
    Varchar(String),
    Blob(Vec<u8>),
    Bit(String),
    Enum(String),
}

impl DynamicValue {
    pub fn is_null(&self) -> bool {
        matches!(self, DynamicValue::Null)
    }

    /// Logical type the value was decoded from; `None` for `Null`.
    pub fn type_id(&self) -> Option<LogicalTypeId> {
        let id = match self {
            DynamicValue::Null => return None,
            DynamicValue::Boolean(_) => LogicalTypeId::Boolean,
            DynamicValue::TinyInt(_) => LogicalTypeId::TinyInt,
            DynamicValue::SmallInt(_) => LogicalTypeId::SmallInt,
            DynamicValue::Integer(_) => LogicalTypeId::Integer,
            DynamicValue::BigInt(_) => LogicalTypeId::BigInt,
            DynamicValue::HugeInt(_) => LogicalTypeId::HugeInt,
            DynamicValue::UTinyInt(_) => LogicalTypeId::UTinyInt,
            DynamicValue::USmallInt(_) => LogicalTypeId::USmallInt,
            DynamicValue::UInteger(_) => LogicalTypeId::UInteger,
            DynamicValue::UBigInt(_) => LogicalTypeId::UBigInt,
            DynamicValue::Float(_) => LogicalTypeId::Float,
            DynamicValue::Double(_) => LogicalTypeId::Double,
            DynamicValue::Decimal(_) => LogicalTypeId::Decimal,
            DynamicValue::Date(_) => LogicalTypeId::Date,
            DynamicValue::Time(_) => LogicalTypeId::Time,
            DynamicValue::Timestamp(_) => LogicalTypeId::Timestamp,
            DynamicValue::Interval(_) => LogicalTypeId::Interval,
            DynamicValue::Uuid(_) => LogicalTypeId::Uuid,
            DynamicValue::Varchar(_) => LogicalTypeId::Varchar,
            DynamicValue::Blob(_) => LogicalTypeId::Blob,
            DynamicValue::Bit(_) => LogicalTypeId::Bit,
            DynamicValue::Enum(_) => LogicalTypeId::Enum,
        };
        Some(id)
    }

    /// Any integer variant widened to i128.
    pub fn as_i128(&self) -> Option<i128> {
        match *self {
            DynamicValue::TinyInt(v) => Some(v as i128),
            DynamicValue::SmallInt(v) => Some(v as i128),
            DynamicValue::Integer(v) => Some(v as i128),
            DynamicValue::BigInt(v) => Some(v as i128),
            DynamicValue::HugeInt(v) => Some(v),
            DynamicValue::UTinyInt(v) => Some(v as i128),
            DynamicValue::USmallInt(v) => Some(v as i128),
            DynamicValue::UInteger(v) => Some(v as i128),
            DynamicValue::UBigInt(v) => Some(v as i128),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            DynamicValue::Varchar(s) | DynamicValue::Bit(s) | DynamicValue::Enum(s) => Some(s),
            _ => None,
        }
    }

    pub fn to_json(&self) -> JsonValue {
        match self {
            DynamicValue::Null => JsonValue::Null,
            DynamicValue::Boolean(b) => JsonValue::Bool(*b),
            DynamicValue::Float(f) => Number::from_f64(*f as f64)
                .map(JsonValue::Number)
                .unwrap_or(JsonValue::Null),
            DynamicValue::Double(f) => Number::from_f64(*f)
                .map(JsonValue::Number)
                .unwrap_or(JsonValue::Null),
            DynamicValue::HugeInt(v) => match i64::try_from(*v) {
                Ok(n) => JsonValue::Number(Number::from(n)),
                // Beyond 64 bits JSON consumers lose precision; keep the digits.
                Err(_) => JsonValue::String(v.to_string()),
            },
            DynamicValue::UBigInt(v) => JsonValue::Number(Number::from(*v)),
            DynamicValue::Blob(bytes) => JsonValue::String(BASE64_STANDARD.encode(bytes)),
            other => match other.as_i128().and_then(|v| i64::try_from(v).ok()) {
                Some(n) => JsonValue::Number(Number::from(n)),
                None => JsonValue::String(other.to_string()),
            },
        }
    }
}

impl fmt::Display for DynamicValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DynamicValue::Null => f.write_str("NULL"),
            DynamicValue::Boolean(v) => write!(f, "{v}"),
            DynamicValue::TinyInt(v) => write!(f, "{v}"),
            DynamicValue::SmallInt(v) => write!(f, "{v}"),
            DynamicValue::Integer(v) => write!(f, "{v}"),
            DynamicValue::BigInt(v) => write!(f, "{v}"),
            DynamicValue::HugeInt(v) => write!(f, "{v}"),
            DynamicValue::UTinyInt(v) => write!(f, "{v}"),
            DynamicValue::USmallInt(v) => write!(f, "{v}"),
            DynamicValue::UInteger(v) => write!(f, "{v}"),
            DynamicValue::UBigInt(v) => write!(f, "{v}"),
            DynamicValue::Float(v) => write!(f, "{v}"),
            DynamicValue::Double(v) => write!(f, "{v}"),
            DynamicValue::Decimal(v) => write!(f, "{v}"),
            DynamicValue::Date(v) => write!(f, "{v}"),
            DynamicValue::Time(v) => write!(f, "{v}"),
            DynamicValue::Timestamp(v) => write!(f, "{v}"),
            DynamicValue::Interval(v) => write!(f, "{v}"),
            DynamicValue::Uuid(v) => write!(f, "{v}"),
            DynamicValue::Varchar(v) | DynamicValue::Bit(v) | DynamicValue::Enum(v) => {
                f.write_str(v)
            }
            DynamicValue::Blob(bytes) => {
                for b in bytes {
                    if b.is_ascii_graphic() && *b != b'\\' {
                        write!(f, "{}", *b as char)?;
                    } else {
                        write!(f, "\\x{b:02X}")?;
                    }
                }
                Ok(())
            }
        }
    }
}
