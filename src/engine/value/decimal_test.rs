use std::str::FromStr;

use bigdecimal::BigDecimal;

use crate::engine::errors::MarshalError;
use crate::engine::value::Decimal;

#[test]
fn renders_exact_digits() {
    assert_eq!(Decimal::new(-9999, 4, 1).to_string(), "-999.9");
    assert_eq!(Decimal::new(999_999_999, 9, 4).to_string(), "99999.9999");
    assert_eq!(Decimal::new(5, 4, 3).to_string(), "0.005");
    assert_eq!(Decimal::new(-5, 4, 3).to_string(), "-0.005");
    assert_eq!(Decimal::new(42, 4, 0).to_string(), "42");
    assert_eq!(Decimal::new(0, 4, 2).to_string(), "0.00");
}

#[test]
fn thirty_eight_digits_stay_exact() {
    let unscaled = 99_999_999_999_999_999_999_999_999_999_999_999_999i128;
    let d = Decimal::new(unscaled, 38, 10);
    assert_eq!(d.to_string(), "9999999999999999999999999999.9999999999");
    assert_eq!(
        d.to_big_decimal(),
        BigDecimal::from_str("9999999999999999999999999999.9999999999").unwrap()
    );
    let neg = Decimal::new(-unscaled, 38, 10);
    assert_eq!(neg.to_string(), "-9999999999999999999999999999.9999999999");
}

#[test]
fn fixed_conversion_is_exact_when_it_fits() {
    let d = Decimal::new(-999_999_999_999_999_999, 18, 6);
    assert_eq!(
        d.to_fixed().unwrap(),
        rust_decimal::Decimal::from_str("-999999999999.999999").unwrap()
    );
}

#[test]
fn fixed_conversion_fails_beyond_host_precision() {
    let d = Decimal::new(99_999_999_999_999_999_999_999_999_999_999_999_999, 38, 10);
    assert!(matches!(
        d.to_fixed().unwrap_err(),
        MarshalError::Overflow {
            target: "rust_decimal::Decimal",
            ..
        }
    ));

    let deep_scale = Decimal::new(1, 38, 30);
    assert!(deep_scale.to_fixed().is_err());
}
