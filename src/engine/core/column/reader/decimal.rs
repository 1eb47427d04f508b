use crate::engine::core::column::column_vector::ColumnVector;
use crate::engine::core::column::reader::decoders::{DecodeOptions, PhysicalDecoder};
use crate::engine::core::column::reader::wide::combine_halves;
use crate::engine::errors::MarshalError;
use crate::engine::types::{DecimalWidth, LogicalType};
use crate::engine::value::{Decimal, DynamicValue};

pub struct DecimalDecoder;

impl PhysicalDecoder for DecimalDecoder {
    fn decode(
        &self,
        vector: &ColumnVector<'_>,
        row: usize,
        _opts: &DecodeOptions,
    ) -> Result<DynamicValue, MarshalError> {
        let LogicalType::Decimal(ty) = vector.logical() else {
            return Err(MarshalError::corrupt(format!(
                "DecimalDecoder cannot read {}",
                vector.logical()
            )));
        };
        let r = vector.reader();
        let unscaled = match ty.width() {
            DecimalWidth::I16 => r.read_i16(row)? as i128,
            DecimalWidth::I32 => r.read_i32(row)? as i128,
            DecimalWidth::I64 => r.read_i64(row)? as i128,
            DecimalWidth::I128 => {
                let (low, high) = r.read_halves(row)?;
                combine_halves(low, high)
            }
        };
        Ok(DynamicValue::Decimal(Decimal::new(
            unscaled,
            ty.precision(),
            ty.scale(),
        )))
    }
}
