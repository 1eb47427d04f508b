use crate::engine::core::column::column_vector::ColumnVector;
use crate::engine::core::column::reader::decoders::{DecodeOptions, PhysicalDecoder};
use crate::engine::errors::MarshalError;
use crate::engine::value::{Date, DynamicValue, Interval, Time, Timestamp};

pub struct DateDecoder;
pub struct TimeDecoder;
pub struct TimestampDecoder;
pub struct IntervalDecoder;

impl PhysicalDecoder for DateDecoder {
    fn decode(
        &self,
        vector: &ColumnVector<'_>,
        row: usize,
        _opts: &DecodeOptions,
    ) -> Result<DynamicValue, MarshalError> {
        let days = vector.reader().read_i32(row)?;
        Ok(DynamicValue::Date(Date::from_days(days)))
    }
}

impl PhysicalDecoder for TimeDecoder {
    fn decode(
        &self,
        vector: &ColumnVector<'_>,
        row: usize,
        _opts: &DecodeOptions,
    ) -> Result<DynamicValue, MarshalError> {
        let micros = vector.reader().read_i64(row)?;
        let time = u64::try_from(micros)
            .ok()
            .and_then(Time::from_micros)
            .ok_or_else(|| {
                MarshalError::corrupt(format!("time of day out of range at row={row}: {micros}"))
            })?;
        Ok(DynamicValue::Time(time))
    }
}

impl PhysicalDecoder for TimestampDecoder {
    fn decode(
        &self,
        vector: &ColumnVector<'_>,
        row: usize,
        _opts: &DecodeOptions,
    ) -> Result<DynamicValue, MarshalError> {
        let micros = vector.reader().read_i64(row)?;
        Ok(DynamicValue::Timestamp(Timestamp::from_micros(micros)))
    }
}

impl PhysicalDecoder for IntervalDecoder {
    fn decode(
        &self,
        vector: &ColumnVector<'_>,
        row: usize,
        _opts: &DecodeOptions,
    ) -> Result<DynamicValue, MarshalError> {
        let r = vector.reader();
        let months = i32::from_le_bytes(r.field(row, 0)?);
        let days = i32::from_le_bytes(r.field(row, 4)?);
        let micros = i64::from_le_bytes(r.field(row, 8)?);
        Ok(DynamicValue::Interval(Interval::new(months, days, micros)))
    }
}
