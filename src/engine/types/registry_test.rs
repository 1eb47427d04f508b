use crate::engine::types::{
    DecimalWidth, EnumIndexWidth, HostType, LogicalType, LogicalTypeId, PhysicalFamily,
    TypeRegistry,
};

#[test]
fn family_for_fixed_width_types() {
    assert_eq!(TypeRegistry::family(&LogicalType::Boolean), PhysicalFamily::Bool);
    assert_eq!(
        TypeRegistry::family(&LogicalType::SmallInt),
        PhysicalFamily::SignedInt(2)
    );
    assert_eq!(
        TypeRegistry::family(&LogicalType::UBigInt),
        PhysicalFamily::UnsignedInt(8)
    );
    assert_eq!(TypeRegistry::family(&LogicalType::HugeInt).row_width(), 16);
}

#[test]
fn family_for_parameterized_types() {
    let dec = LogicalType::decimal(9, 4).unwrap();
    assert_eq!(
        TypeRegistry::family(&dec),
        PhysicalFamily::Decimal(DecimalWidth::I32)
    );

    let labels = (0..300).map(|i| format!("enum_{i}"));
    let en = LogicalType::enumeration(labels).unwrap();
    let fam = TypeRegistry::family(&en);
    assert_eq!(fam, PhysicalFamily::Dictionary(EnumIndexWidth::U16));
    assert_eq!(fam.row_width(), 2);
}

#[test]
fn variable_length_families_use_aux() {
    assert!(TypeRegistry::family(&LogicalType::Varchar).uses_aux());
    assert!(TypeRegistry::family(&LogicalType::Blob).uses_aux());
    assert!(TypeRegistry::family(&LogicalType::Bit).uses_aux());
    assert!(!TypeRegistry::family(&LogicalType::Uuid).uses_aux());
}

#[test]
fn decimal_is_not_compatible_with_floats() {
    assert!(TypeRegistry::is_compatible(LogicalTypeId::Decimal, HostType::BigDecimal));
    assert!(TypeRegistry::is_compatible(LogicalTypeId::Decimal, HostType::FixedDecimal));
    assert!(!TypeRegistry::is_compatible(LogicalTypeId::Decimal, HostType::F64));
    assert!(!TypeRegistry::is_compatible(LogicalTypeId::Decimal, HostType::F32));
}

#[test]
fn integers_share_integer_hosts() {
    for id in [
        LogicalTypeId::TinyInt,
        LogicalTypeId::BigInt,
        LogicalTypeId::HugeInt,
        LogicalTypeId::UBigInt,
    ] {
        assert!(TypeRegistry::is_compatible(id, HostType::I64));
        assert!(TypeRegistry::is_compatible(id, HostType::BigInt));
        assert!(!TypeRegistry::is_compatible(id, HostType::String));
        assert!(!TypeRegistry::is_compatible(id, HostType::F64));
    }
}

#[test]
fn double_does_not_narrow_to_f32() {
    assert!(TypeRegistry::is_compatible(LogicalTypeId::Float, HostType::F64));
    assert!(!TypeRegistry::is_compatible(LogicalTypeId::Double, HostType::F32));
}

#[test]
fn text_like_types_adapt_to_string() {
    assert!(TypeRegistry::is_compatible(LogicalTypeId::Varchar, HostType::String));
    assert!(TypeRegistry::is_compatible(LogicalTypeId::Enum, HostType::String));
    assert!(TypeRegistry::is_compatible(LogicalTypeId::Bit, HostType::String));
    assert!(!TypeRegistry::is_compatible(LogicalTypeId::Blob, HostType::String));
}
