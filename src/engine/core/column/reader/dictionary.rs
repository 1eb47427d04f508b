use crate::engine::core::column::column_vector::ColumnVector;
use crate::engine::core::column::reader::decoders::{DecodeOptions, PhysicalDecoder};
use crate::engine::errors::MarshalError;
use crate::engine::types::{EnumIndexWidth, LogicalType};
use crate::engine::value::DynamicValue;

pub struct EnumDecoder;

impl PhysicalDecoder for EnumDecoder {
    fn decode(
        &self,
        vector: &ColumnVector<'_>,
        row: usize,
        _opts: &DecodeOptions,
    ) -> Result<DynamicValue, MarshalError> {
        let LogicalType::Enum(dict) = vector.logical() else {
            return Err(MarshalError::corrupt(format!(
                "EnumDecoder cannot read {}",
                vector.logical()
            )));
        };
        let r = vector.reader();
        let index = match dict.index_width() {
            EnumIndexWidth::U8 => r.read_u8(row)? as usize,
            EnumIndexWidth::U16 => r.read_u16(row)? as usize,
            EnumIndexWidth::U32 => r.read_u32(row)? as usize,
        };
        let label = dict.label(index).ok_or_else(|| {
            MarshalError::corrupt(format!(
                "enum index {index} at row={row} outside dictionary of {}",
                dict.len()
            ))
        })?;
        Ok(DynamicValue::Enum(label.to_owned()))
    }
}
