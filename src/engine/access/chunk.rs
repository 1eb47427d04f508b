use std::sync::Arc;

use tracing::debug;

use crate::engine::access::row_accessor::RowAccessor;
use crate::engine::core::column::reader::DecodeOptions;
use crate::engine::core::column::{ColumnTable, ColumnVector};
use crate::engine::errors::MarshalError;

/// The column vectors of the chunk the result set is currently positioned
/// on, plus the names they were declared under.
#[derive(Clone, Debug)]
pub struct ResultChunk<'a> {
    table: Arc<ColumnTable>,
    columns: Vec<ColumnVector<'a>>,
    row_count: usize,
    options: DecodeOptions,
}

impl<'a> ResultChunk<'a> {
    pub fn new(table: Arc<ColumnTable>, columns: Vec<ColumnVector<'a>>) -> Result<Self, MarshalError> {
        if table.len() != columns.len() {
            return Err(MarshalError::corrupt(format!(
                "chunk carries {} columns but {} are declared",
                columns.len(),
                table.len()
            )));
        }
        let row_count = columns.first().map(|c| c.row_count()).unwrap_or(0);
        if let Some((i, c)) = columns
            .iter()
            .enumerate()
            .find(|(_, c)| c.row_count() != row_count)
        {
            return Err(MarshalError::corrupt(format!(
                "column {i} has {} rows, expected {row_count}",
                c.row_count()
            )));
        }
        debug!(
            "Result chunk ready: columns={} rows={}",
            columns.len(),
            row_count
        );
        Ok(Self {
            table,
            columns,
            row_count,
            options: DecodeOptions::default(),
        })
    }

    /// Replaces the built-in decode options, e.g. with
    /// `DecodeOptions::from_app_config()`.
    pub fn with_options(mut self, options: DecodeOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    pub fn table(&self) -> &ColumnTable {
        &self.table
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column(&self, index: usize) -> Result<&ColumnVector<'a>, MarshalError> {
        self.columns
            .get(index)
            .ok_or(MarshalError::ColumnOutOfRange {
                index,
                count: self.columns.len(),
            })
    }

    pub fn row(&self, index: usize) -> Result<RowAccessor<'_, 'a>, MarshalError> {
        if index >= self.row_count {
            return Err(MarshalError::RowOutOfRange {
                index,
                count: self.row_count,
            });
        }
        Ok(RowAccessor::new(self, index))
    }

    pub fn rows(&self) -> impl Iterator<Item = RowAccessor<'_, 'a>> {
        (0..self.row_count).map(move |i| RowAccessor::new(self, i))
    }
}
