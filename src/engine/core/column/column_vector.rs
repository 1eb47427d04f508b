use tracing::{debug, warn};

use crate::engine::core::column::reader::le_reader::LeRowReader;
use crate::engine::core::column::reader::{DecodeOptions, ValidityBitmap, decoder_for};
use crate::engine::errors::MarshalError;
use crate::engine::types::{LogicalType, PhysicalFamily, TypeMeta, TypeRegistry};
use crate::engine::value::DynamicValue;

/// One column of the current result chunk, borrowed from the engine.
///
/// The buffers are never copied; any value that has to outlive the chunk is
/// copied out by the decoders.
#[derive(Clone, Debug)]
pub struct ColumnVector<'a> {
    logical: LogicalType,
    family: PhysicalFamily,
    row_count: usize,
    data: &'a [u8],
    aux: &'a [u8],
    validity: ValidityBitmap<'a>,
}

impl<'a> ColumnVector<'a> {
    pub fn new(
        logical: LogicalType,
        row_count: usize,
        data: &'a [u8],
        aux: Option<&'a [u8]>,
        validity: Option<&'a [u8]>,
    ) -> Result<Self, MarshalError> {
        let family = TypeRegistry::family(&logical);
        let need = row_count
            .checked_mul(family.row_width())
            .ok_or_else(|| MarshalError::corrupt("data length overflow"))?;
        if data.len() < need {
            warn!(
                "Rejecting {} vector: data buffer {} bytes, need {}",
                logical,
                data.len(),
                need
            );
            return Err(MarshalError::corrupt(format!(
                "data buffer for {logical} holds {} bytes, {row_count} rows need {need}",
                data.len()
            )));
        }
        if family.uses_aux() && aux.is_none() && row_count > 0 {
            warn!("Rejecting {} vector: no aux buffer for {} rows", logical, row_count);
            return Err(MarshalError::corrupt(format!(
                "{logical} vector of {row_count} rows has no aux buffer"
            )));
        }
        let validity = ValidityBitmap::new(validity);
        if !validity.covers(row_count) {
            return Err(MarshalError::corrupt(format!(
                "validity bitmap does not cover {row_count} rows"
            )));
        }
        debug!(
            "Column vector ready: type={} family={:?} rows={}",
            logical, family, row_count
        );
        Ok(Self {
            logical,
            family,
            row_count,
            data,
            aux: aux.unwrap_or(&[]),
            validity,
        })
    }

    /// Builds a vector straight from the engine's raw type id and metadata.
    pub fn from_raw(
        tag: u8,
        meta: TypeMeta,
        row_count: usize,
        data: &'a [u8],
        aux: Option<&'a [u8]>,
        validity: Option<&'a [u8]>,
    ) -> Result<Self, MarshalError> {
        let logical = LogicalType::resolve(tag, meta)?;
        Self::new(logical, row_count, data, aux, validity)
    }

    pub fn logical(&self) -> &LogicalType {
        &self.logical
    }

    pub fn family(&self) -> PhysicalFamily {
        self.family
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn aux(&self) -> &'a [u8] {
        self.aux
    }

    pub fn reader(&self) -> LeRowReader<'a> {
        LeRowReader::new(self.data, self.family.row_width())
    }

    pub fn check_row(&self, row: usize) -> Result<(), MarshalError> {
        if row >= self.row_count {
            return Err(MarshalError::RowOutOfRange {
                index: row,
                count: self.row_count,
            });
        }
        Ok(())
    }

    pub fn is_null(&self, row: usize) -> Result<bool, MarshalError> {
        self.check_row(row)?;
        Ok(self.validity.is_null(row))
    }

    pub fn decode(&self, row: usize, opts: &DecodeOptions) -> Result<DynamicValue, MarshalError> {
        if self.is_null(row)? {
            return Ok(DynamicValue::Null);
        }
        decoder_for(self.family).decode(self, row, opts)
    }
}
