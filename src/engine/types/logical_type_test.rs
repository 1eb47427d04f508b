use crate::engine::errors::MarshalError;
use crate::engine::types::{
    DecimalType, DecimalWidth, EnumIndexWidth, EnumType, LogicalType, LogicalTypeId, TypeMeta,
};

#[test]
fn resolves_plain_tags() {
    assert_eq!(
        LogicalType::resolve(1, TypeMeta::None).unwrap(),
        LogicalType::Boolean
    );
    assert_eq!(
        LogicalType::resolve(16, TypeMeta::None).unwrap(),
        LogicalType::HugeInt
    );
    assert_eq!(
        LogicalType::resolve(29, TypeMeta::None).unwrap(),
        LogicalType::Bit
    );
}

#[test]
fn rejects_unknown_tag() {
    let err = LogicalType::resolve(200, TypeMeta::None).unwrap_err();
    assert!(matches!(err, MarshalError::UnknownType(200)));
    assert!(err.to_string().contains("Type mismatch"));
}

#[test]
fn tag_round_trips_through_u8() {
    for raw in 0u8..=40 {
        if let Ok(id) = LogicalTypeId::try_from(raw) {
            assert_eq!(u8::from(id), raw);
        }
    }
}

#[test]
fn decimal_requires_metadata() {
    let err = LogicalType::resolve(19, TypeMeta::None).unwrap_err();
    assert!(matches!(err, MarshalError::InvalidTypeMetadata(_)));

    let ty = LogicalType::resolve(
        19,
        TypeMeta::Decimal {
            precision: 18,
            scale: 6,
        },
    )
    .unwrap();
    assert_eq!(ty.to_string(), "DECIMAL(18,6)");
}

#[test]
fn plain_tag_rejects_metadata() {
    let err = LogicalType::resolve(4, TypeMeta::Enum(vec!["a".into()])).unwrap_err();
    assert!(matches!(err, MarshalError::InvalidTypeMetadata(_)));
}

#[test]
fn decimal_width_follows_precision() {
    assert_eq!(DecimalType::new(4, 1).unwrap().width(), DecimalWidth::I16);
    assert_eq!(DecimalType::new(5, 0).unwrap().width(), DecimalWidth::I32);
    assert_eq!(DecimalType::new(9, 4).unwrap().width(), DecimalWidth::I32);
    assert_eq!(DecimalType::new(18, 6).unwrap().width(), DecimalWidth::I64);
    assert_eq!(DecimalType::new(19, 0).unwrap().width(), DecimalWidth::I128);
    assert_eq!(DecimalType::new(38, 10).unwrap().width(), DecimalWidth::I128);
}

#[test]
fn decimal_rejects_bad_precision_and_scale() {
    assert!(DecimalType::new(0, 0).is_err());
    assert!(DecimalType::new(39, 0).is_err());
    assert!(DecimalType::new(10, 11).is_err());
}

#[test]
fn enum_width_tiers_follow_dictionary_size() {
    let labels = |n: usize| (0..n).map(|i| format!("enum_{i}")).collect::<Vec<_>>();

    assert_eq!(EnumType::new(labels(255)).unwrap().index_width(), EnumIndexWidth::U8);
    assert_eq!(EnumType::new(labels(256)).unwrap().index_width(), EnumIndexWidth::U16);
    assert_eq!(EnumType::new(labels(65_535)).unwrap().index_width(), EnumIndexWidth::U16);
    assert_eq!(EnumType::new(labels(65_536)).unwrap().index_width(), EnumIndexWidth::U32);
}

#[test]
fn enum_rejects_empty_dictionary() {
    assert!(EnumType::new(Vec::<String>::new()).is_err());
}

#[test]
fn enum_label_lookup() {
    let e = EnumType::new(["DUCK_DUCK_ENUM", "GOOSE"]).unwrap();
    assert_eq!(e.label(1), Some("GOOSE"));
    assert_eq!(e.label(2), None);
    assert_eq!(LogicalType::Enum(e).to_string(), "ENUM[2]");
}
