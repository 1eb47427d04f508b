use crate::engine::core::column::column_vector::ColumnVector;
use crate::engine::core::column::reader::decoders::{DecodeOptions, PhysicalDecoder};
use crate::engine::errors::MarshalError;
use crate::engine::types::PhysicalFamily;
use crate::engine::value::DynamicValue;

pub struct BoolDecoder;
pub struct SignedIntDecoder;
pub struct UnsignedIntDecoder;
pub struct FloatDecoder;

fn unexpected(family: PhysicalFamily, decoder: &str) -> MarshalError {
    MarshalError::corrupt(format!("{decoder} cannot read {family:?}"))
}

impl PhysicalDecoder for BoolDecoder {
    fn decode(
        &self,
        vector: &ColumnVector<'_>,
        row: usize,
        _opts: &DecodeOptions,
    ) -> Result<DynamicValue, MarshalError> {
        Ok(DynamicValue::Boolean(vector.reader().read_u8(row)? != 0))
    }
}

impl PhysicalDecoder for SignedIntDecoder {
    fn decode(
        &self,
        vector: &ColumnVector<'_>,
        row: usize,
        _opts: &DecodeOptions,
    ) -> Result<DynamicValue, MarshalError> {
        let r = vector.reader();
        let value = match vector.family() {
            PhysicalFamily::SignedInt(1) => DynamicValue::TinyInt(r.read_i8(row)?),
            PhysicalFamily::SignedInt(2) => DynamicValue::SmallInt(r.read_i16(row)?),
            PhysicalFamily::SignedInt(4) => DynamicValue::Integer(r.read_i32(row)?),
            PhysicalFamily::SignedInt(8) => DynamicValue::BigInt(r.read_i64(row)?),
            other => return Err(unexpected(other, "SignedIntDecoder")),
        };
        Ok(value)
    }
}

impl PhysicalDecoder for UnsignedIntDecoder {
    fn decode(
        &self,
        vector: &ColumnVector<'_>,
        row: usize,
        _opts: &DecodeOptions,
    ) -> Result<DynamicValue, MarshalError> {
        let r = vector.reader();
        let value = match vector.family() {
            PhysicalFamily::UnsignedInt(1) => DynamicValue::UTinyInt(r.read_u8(row)?),
            PhysicalFamily::UnsignedInt(2) => DynamicValue::USmallInt(r.read_u16(row)?),
            PhysicalFamily::UnsignedInt(4) => DynamicValue::UInteger(r.read_u32(row)?),
            PhysicalFamily::UnsignedInt(8) => DynamicValue::UBigInt(r.read_u64(row)?),
            other => return Err(unexpected(other, "UnsignedIntDecoder")),
        };
        Ok(value)
    }
}

impl PhysicalDecoder for FloatDecoder {
    fn decode(
        &self,
        vector: &ColumnVector<'_>,
        row: usize,
        _opts: &DecodeOptions,
    ) -> Result<DynamicValue, MarshalError> {
        let r = vector.reader();
        match vector.family() {
            PhysicalFamily::Float32 => Ok(DynamicValue::Float(r.read_f32(row)?)),
            PhysicalFamily::Float64 => Ok(DynamicValue::Double(r.read_f64(row)?)),
            other => Err(unexpected(other, "FloatDecoder")),
        }
    }
}
