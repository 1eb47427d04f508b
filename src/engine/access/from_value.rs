use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use num_bigint::BigInt;
use uuid::Uuid;

use crate::engine::errors::MarshalError;
use crate::engine::types::HostType;
use crate::engine::value::{Date, Decimal, DynamicValue, Interval, Time, Timestamp};

/// Host types a non-null decoded value can be adapted into.
///
/// `HOST` is looked up in the compatibility table before `from_value` runs,
/// so implementations only have to handle the variants the table admits and
/// report narrowing failures as overflow.
pub trait FromValue: Sized {
    const HOST: HostType;

    fn from_value(value: DynamicValue) -> Result<Self, MarshalError>;
}

fn mismatch(value: &DynamicValue, host: HostType) -> MarshalError {
    let logical = value.type_id().map(|t| t.as_str()).unwrap_or("NULL");
    MarshalError::type_mismatch(logical, host.as_str())
}

impl FromValue for bool {
    const HOST: HostType = HostType::Bool;

    fn from_value(value: DynamicValue) -> Result<Self, MarshalError> {
        match value {
            DynamicValue::Boolean(b) => Ok(b),
            other => Err(mismatch(&other, Self::HOST)),
        }
    }
}

macro_rules! impl_from_value_int {
    ($($ty:ty => $host:ident),* $(,)?) => {
        $(
            impl FromValue for $ty {
                const HOST: HostType = HostType::$host;

                fn from_value(value: DynamicValue) -> Result<Self, MarshalError> {
                    let wide = value.as_i128().ok_or_else(|| mismatch(&value, Self::HOST))?;
                    <$ty>::try_from(wide).map_err(|_| MarshalError::overflow(wide, Self::HOST.as_str()))
                }
            }
        )*
    };
}

impl_from_value_int! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
}

impl FromValue for BigInt {
    const HOST: HostType = HostType::BigInt;

    fn from_value(value: DynamicValue) -> Result<Self, MarshalError> {
        value
            .as_i128()
            .map(BigInt::from)
            .ok_or_else(|| mismatch(&value, Self::HOST))
    }
}

impl FromValue for f32 {
    const HOST: HostType = HostType::F32;

    fn from_value(value: DynamicValue) -> Result<Self, MarshalError> {
        match value {
            DynamicValue::Float(f) => Ok(f),
            other => Err(mismatch(&other, Self::HOST)),
        }
    }
}

impl FromValue for f64 {
    const HOST: HostType = HostType::F64;

    fn from_value(value: DynamicValue) -> Result<Self, MarshalError> {
        match value {
            DynamicValue::Float(f) => Ok(f as f64),
            DynamicValue::Double(f) => Ok(f),
            other => Err(mismatch(&other, Self::HOST)),
        }
    }
}

impl FromValue for Decimal {
    const HOST: HostType = HostType::Decimal;

    fn from_value(value: DynamicValue) -> Result<Self, MarshalError> {
        match value {
            DynamicValue::Decimal(d) => Ok(d),
            other => Err(mismatch(&other, Self::HOST)),
        }
    }
}

impl FromValue for BigDecimal {
    const HOST: HostType = HostType::BigDecimal;

    fn from_value(value: DynamicValue) -> Result<Self, MarshalError> {
        match value {
            DynamicValue::Decimal(d) => Ok(d.to_big_decimal()),
            other => Err(mismatch(&other, Self::HOST)),
        }
    }
}

impl FromValue for rust_decimal::Decimal {
    const HOST: HostType = HostType::FixedDecimal;

    fn from_value(value: DynamicValue) -> Result<Self, MarshalError> {
        match value {
            DynamicValue::Decimal(d) => d.to_fixed(),
            other => Err(mismatch(&other, Self::HOST)),
        }
    }
}

impl FromValue for Date {
    const HOST: HostType = HostType::Date;

    fn from_value(value: DynamicValue) -> Result<Self, MarshalError> {
        match value {
            DynamicValue::Date(d) => Ok(d),
            other => Err(mismatch(&other, Self::HOST)),
        }
    }
}

impl FromValue for NaiveDate {
    const HOST: HostType = HostType::NaiveDate;

    fn from_value(value: DynamicValue) -> Result<Self, MarshalError> {
        match value {
            DynamicValue::Date(d) => d.to_naive_date(),
            other => Err(mismatch(&other, Self::HOST)),
        }
    }
}

impl FromValue for Time {
    const HOST: HostType = HostType::Time;

    fn from_value(value: DynamicValue) -> Result<Self, MarshalError> {
        match value {
            DynamicValue::Time(t) => Ok(t),
            other => Err(mismatch(&other, Self::HOST)),
        }
    }
}

impl FromValue for NaiveTime {
    const HOST: HostType = HostType::NaiveTime;

    fn from_value(value: DynamicValue) -> Result<Self, MarshalError> {
        match value {
            DynamicValue::Time(t) => t.to_naive_time(),
            other => Err(mismatch(&other, Self::HOST)),
        }
    }
}

impl FromValue for Timestamp {
    const HOST: HostType = HostType::Timestamp;

    fn from_value(value: DynamicValue) -> Result<Self, MarshalError> {
        match value {
            DynamicValue::Timestamp(ts) => Ok(ts),
            other => Err(mismatch(&other, Self::HOST)),
        }
    }
}

impl FromValue for NaiveDateTime {
    const HOST: HostType = HostType::NaiveDateTime;

    fn from_value(value: DynamicValue) -> Result<Self, MarshalError> {
        match value {
            DynamicValue::Timestamp(ts) => ts.to_naive_date_time(),
            other => Err(mismatch(&other, Self::HOST)),
        }
    }
}

impl FromValue for DateTime<Utc> {
    const HOST: HostType = HostType::DateTimeUtc;

    fn from_value(value: DynamicValue) -> Result<Self, MarshalError> {
        match value {
            DynamicValue::Timestamp(ts) => ts.to_utc(),
            other => Err(mismatch(&other, Self::HOST)),
        }
    }
}

impl FromValue for Interval {
    const HOST: HostType = HostType::Interval;

    fn from_value(value: DynamicValue) -> Result<Self, MarshalError> {
        match value {
            DynamicValue::Interval(i) => Ok(i),
            other => Err(mismatch(&other, Self::HOST)),
        }
    }
}

impl FromValue for Uuid {
    const HOST: HostType = HostType::Uuid;

    fn from_value(value: DynamicValue) -> Result<Self, MarshalError> {
        match value {
            DynamicValue::Uuid(u) => Ok(u),
            other => Err(mismatch(&other, Self::HOST)),
        }
    }
}

impl FromValue for String {
    const HOST: HostType = HostType::String;

    fn from_value(value: DynamicValue) -> Result<Self, MarshalError> {
        match value {
            DynamicValue::Varchar(s) | DynamicValue::Bit(s) | DynamicValue::Enum(s) => Ok(s),
            other => Err(mismatch(&other, Self::HOST)),
        }
    }
}

impl FromValue for Vec<u8> {
    const HOST: HostType = HostType::Bytes;

    fn from_value(value: DynamicValue) -> Result<Self, MarshalError> {
        match value {
            DynamicValue::Blob(b) => Ok(b),
            DynamicValue::Varchar(s) => Ok(s.into_bytes()),
            other => Err(mismatch(&other, Self::HOST)),
        }
    }
}
