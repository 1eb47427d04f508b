use crate::engine::types::LogicalType;
use crate::test_helpers::factories::ColumnBuffersFactory;

#[test]
fn nulls_clear_validity_bits() {
    let buffers = ColumnBuffersFactory::new(LogicalType::Integer)
        .push_i32(1)
        .push_null()
        .push_i32(3)
        .create();

    assert_eq!(buffers.rows, 3);
    assert_eq!(buffers.data.len(), 12);
    assert_eq!(buffers.validity.as_deref(), Some(&[0b0000_0101][..]));
}

#[test]
fn bitmap_is_omitted_when_all_valid() {
    let buffers = ColumnBuffersFactory::new(LogicalType::Boolean)
        .push_bool(true)
        .create();
    assert!(buffers.validity.is_none());

    let forced = ColumnBuffersFactory::new(LogicalType::Boolean)
        .with_bitmap()
        .push_bool(true)
        .create();
    assert_eq!(forced.validity.as_deref(), Some(&[0b1][..]));
}

#[test]
fn varlen_rows_index_into_aux() {
    let buffers = ColumnBuffersFactory::new(LogicalType::Varchar)
        .push_str("ab")
        .push_str("cde")
        .create();

    assert_eq!(buffers.aux, b"abcde");
    assert_eq!(&buffers.data[8..12], &2u32.to_le_bytes());
    assert_eq!(&buffers.data[12..16], &3u32.to_le_bytes());
}

#[test]
fn bits_carry_padding_prefix() {
    let buffers = ColumnBuffersFactory::new(LogicalType::Bit)
        .push_bits("10101")
        .create();
    assert_eq!(buffers.aux, vec![3, 0b1010_1000]);
}
