use tracing::debug;

use crate::engine::access::chunk::ResultChunk;
use crate::engine::access::from_value::FromValue;
use crate::engine::errors::MarshalError;
use crate::engine::types::{LogicalType, TypeRegistry};
use crate::engine::value::DynamicValue;

/// Read-only view of one row of a [`ResultChunk`].
///
/// Holds no state beyond the row index; every call decodes afresh from the
/// borrowed column buffers.
#[derive(Clone, Copy, Debug)]
pub struct RowAccessor<'c, 'a> {
    chunk: &'c ResultChunk<'a>,
    row: usize,
}

impl<'c, 'a> RowAccessor<'c, 'a> {
    pub(crate) fn new(chunk: &'c ResultChunk<'a>, row: usize) -> Self {
        Self { chunk, row }
    }

    pub fn row_index(&self) -> usize {
        self.row
    }

    pub fn column_count(&self) -> usize {
        self.chunk.column_count()
    }

    pub fn column_name(&self, column: usize) -> Result<&'c str, MarshalError> {
        self.chunk
            .table()
            .name(column)
            .ok_or(MarshalError::ColumnOutOfRange {
                index: column,
                count: self.chunk.column_count(),
            })
    }

    pub fn column_type(&self, column: usize) -> Result<&'c LogicalType, MarshalError> {
        Ok(self.chunk.column(column)?.logical())
    }

    pub fn resolve_ordinal(&self, name: &str) -> Result<usize, MarshalError> {
        self.chunk.table().resolve_ordinal(name)
    }

    pub fn is_null(&self, column: usize) -> Result<bool, MarshalError> {
        self.chunk.column(column)?.is_null(self.row)
    }

    /// Weakly typed read; null rows come back as [`DynamicValue::Null`].
    pub fn get_value(&self, column: usize) -> Result<DynamicValue, MarshalError> {
        self.chunk
            .column(column)?
            .decode(self.row, self.chunk.options())
    }

    pub fn get_value_by_name(&self, name: &str) -> Result<DynamicValue, MarshalError> {
        self.get_value(self.resolve_ordinal(name)?)
    }

    /// Every column of the row, in ordinal order.
    pub fn values(&self) -> Result<Vec<DynamicValue>, MarshalError> {
        (0..self.column_count()).map(|c| self.get_value(c)).collect()
    }

    /// Strongly typed read of a non-nullable value.
    pub fn get<T: FromValue>(&self, column: usize) -> Result<T, MarshalError> {
        self.get_opt(column)?
            .ok_or(MarshalError::NullToNonNullable {
                column,
                target: T::HOST.as_str(),
            })
    }

    /// Strongly typed read; `None` for null rows.
    pub fn get_opt<T: FromValue>(&self, column: usize) -> Result<Option<T>, MarshalError> {
        let vector = self.chunk.column(column)?;
        if vector.is_null(self.row)? {
            return Ok(None);
        }
        let logical = vector.logical();
        if !TypeRegistry::is_compatible(logical.id(), T::HOST) {
            debug!(
                "Rejected adaptation of column {} ({}) to {}",
                column,
                logical,
                T::HOST
            );
            return Err(MarshalError::type_mismatch(logical, T::HOST.as_str()));
        }
        let value = vector.decode(self.row, self.chunk.options())?;
        T::from_value(value).map(Some)
    }
}
