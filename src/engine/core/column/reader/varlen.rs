use crate::engine::core::column::column_vector::ColumnVector;
use crate::engine::core::column::reader::decoders::{DecodeOptions, PhysicalDecoder};
use crate::engine::errors::MarshalError;
use crate::engine::types::LogicalType;
use crate::engine::value::DynamicValue;

pub struct VarBytesDecoder;
pub struct BitStringDecoder;

/// Resolves the row's (u32 offset, u32 length) entry against the aux buffer.
pub fn var_slice<'a>(vector: &ColumnVector<'a>, row: usize) -> Result<&'a [u8], MarshalError> {
    let r = vector.reader();
    let offset = u32::from_le_bytes(r.field(row, 0)?) as usize;
    let len = u32::from_le_bytes(r.field(row, 4)?) as usize;
    let aux = vector.aux();
    offset
        .checked_add(len)
        .and_then(|end| aux.get(offset..end))
        .ok_or_else(|| {
            MarshalError::corrupt(format!(
                "VarBytes payload OOB at idx={row}: offset={offset} len={len} aux={}",
                aux.len()
            ))
        })
}

/// Renders a bit-string payload as '0'/'1' characters.
///
/// Byte 0 holds the number of padding bits at the tail of the last byte;
/// the remaining bytes are packed MSB first.
pub fn render_bits(payload: &[u8]) -> Result<String, MarshalError> {
    let (&padding, bytes) = payload
        .split_first()
        .ok_or_else(|| MarshalError::corrupt("empty bit-string payload"))?;
    if padding > 7 || (bytes.is_empty() && padding != 0) {
        return Err(MarshalError::corrupt(format!(
            "bit-string padding {padding} invalid for {} data bytes",
            bytes.len()
        )));
    }
    let bit_len = bytes.len() * 8 - padding as usize;
    let out: String = (0..bit_len)
        .map(|i| {
            if (bytes[i / 8] >> (7 - i % 8)) & 1 == 1 {
                '1'
            } else {
                '0'
            }
        })
        .collect();
    Ok(out)
}

impl PhysicalDecoder for VarBytesDecoder {
    fn decode(
        &self,
        vector: &ColumnVector<'_>,
        row: usize,
        opts: &DecodeOptions,
    ) -> Result<DynamicValue, MarshalError> {
        let bytes = var_slice(vector, row)?.to_vec();
        match vector.logical() {
            LogicalType::Blob => Ok(DynamicValue::Blob(bytes)),
            _ if opts.strict_utf8 => Ok(DynamicValue::Varchar(String::from_utf8(bytes)?)),
            _ => Ok(DynamicValue::Varchar(
                String::from_utf8_lossy(&bytes).into_owned(),
            )),
        }
    }
}

impl PhysicalDecoder for BitStringDecoder {
    fn decode(
        &self,
        vector: &ColumnVector<'_>,
        row: usize,
        _opts: &DecodeOptions,
    ) -> Result<DynamicValue, MarshalError> {
        Ok(DynamicValue::Bit(render_bits(var_slice(vector, row)?)?))
    }
}
