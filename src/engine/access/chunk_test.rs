use std::sync::Arc;

use crate::engine::access::ResultChunk;
use crate::engine::core::column::ColumnTable;
use crate::engine::core::column::reader::DecodeOptions;
use crate::engine::errors::MarshalError;
use crate::engine::types::LogicalType;
use crate::test_helpers::factory::Factory;

#[test]
fn exposes_rows_and_columns() {
    let ids = Factory::column_buffers(LogicalType::Integer)
        .push_i32(1)
        .push_i32(2)
        .create();
    let names = Factory::column_buffers(LogicalType::Varchar)
        .push_str("a")
        .push_null()
        .create();
    let table = Arc::new(ColumnTable::new(["id", "name"]).unwrap());
    let chunk = ResultChunk::new(table, vec![ids.vector(), names.vector()]).unwrap();

    assert_eq!(chunk.row_count(), 2);
    assert_eq!(chunk.column_count(), 2);
    assert_eq!(chunk.rows().count(), 2);
    assert_eq!(chunk.column(1).unwrap().logical(), &LogicalType::Varchar);
    assert!(matches!(
        chunk.column(2),
        Err(MarshalError::ColumnOutOfRange { index: 2, count: 2 })
    ));
    assert!(matches!(
        chunk.row(2),
        Err(MarshalError::RowOutOfRange { index: 2, count: 2 })
    ));
}

#[test]
fn declared_names_must_match_columns() {
    let ids = Factory::column_buffers(LogicalType::Integer)
        .push_i32(1)
        .create();
    let table = Arc::new(ColumnTable::new(["id", "extra"]).unwrap());
    assert!(matches!(
        ResultChunk::new(table, vec![ids.vector()]),
        Err(MarshalError::CorruptBuffer(_))
    ));
}

#[test]
fn columns_must_agree_on_row_count() {
    let a = Factory::column_buffers(LogicalType::Integer)
        .push_i32(1)
        .push_i32(2)
        .create();
    let b = Factory::column_buffers(LogicalType::Integer)
        .push_i32(1)
        .create();
    let table = Arc::new(ColumnTable::new(["a", "b"]).unwrap());
    assert!(ResultChunk::new(table, vec![a.vector(), b.vector()]).is_err());
}

#[test]
fn empty_chunk_has_no_rows() {
    let chunk = ResultChunk::new(Arc::new(ColumnTable::default()), Vec::new()).unwrap();
    assert_eq!(chunk.row_count(), 0);
    assert!(chunk.rows().next().is_none());
}

#[test]
fn construction_uses_built_in_options() {
    let chunk = ResultChunk::new(Arc::new(ColumnTable::default()), Vec::new()).unwrap();
    assert_eq!(chunk.options(), &DecodeOptions::default());
}

#[test]
fn options_can_be_overridden() {
    let chunk = ResultChunk::new(Arc::new(ColumnTable::default()), Vec::new())
        .unwrap()
        .with_options(DecodeOptions { strict_utf8: false });
    assert!(!chunk.options().strict_utf8);
}
