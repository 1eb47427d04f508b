use uuid::Uuid;

use crate::engine::core::column::column_vector::ColumnVector;
use crate::engine::core::column::reader::decoders::{DecodeOptions, PhysicalDecoder};
use crate::engine::errors::MarshalError;
use crate::engine::value::DynamicValue;

const SIGN_BIT: u64 = 1 << 63;

/// `high * 2^64 + low`, exact over the whole i128 range.
#[inline]
pub fn combine_halves(low: u64, high: i64) -> i128 {
    ((high as i128) << 64) | low as i128
}

#[inline]
pub fn split_halves(value: i128) -> (u64, i64) {
    (value as u64, (value >> 64) as i64)
}

/// Undoes the engine's sign flip on the high word so the UUID reads in
/// standard byte order.
#[inline]
pub fn uuid_from_halves(low: u64, high: i64) -> Uuid {
    let upper = (high as u64) ^ SIGN_BIT;
    Uuid::from_u128(((upper as u128) << 64) | low as u128)
}

#[inline]
pub fn uuid_to_halves(uuid: &Uuid) -> (u64, i64) {
    let bits = uuid.as_u128();
    let upper = (bits >> 64) as u64;
    (bits as u64, (upper ^ SIGN_BIT) as i64)
}

pub struct HugeIntDecoder;
pub struct UuidDecoder;

impl PhysicalDecoder for HugeIntDecoder {
    fn decode(
        &self,
        vector: &ColumnVector<'_>,
        row: usize,
        _opts: &DecodeOptions,
    ) -> Result<DynamicValue, MarshalError> {
        let (low, high) = vector.reader().read_halves(row)?;
        Ok(DynamicValue::HugeInt(combine_halves(low, high)))
    }
}

impl PhysicalDecoder for UuidDecoder {
    fn decode(
        &self,
        vector: &ColumnVector<'_>,
        row: usize,
        _opts: &DecodeOptions,
    ) -> Result<DynamicValue, MarshalError> {
        let (low, high) = vector.reader().read_halves(row)?;
        Ok(DynamicValue::Uuid(uuid_from_halves(low, high)))
    }
}
