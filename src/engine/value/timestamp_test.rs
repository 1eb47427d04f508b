use chrono::NaiveDate;

use crate::engine::errors::MarshalError;
use crate::engine::value::{Date, Time, Timestamp};

#[test]
fn splits_into_date_and_time() {
    // 2001-09-09 01:46:40.5
    let ts = Timestamp::from_micros(1_000_000_000_500_000);
    assert_eq!(ts.date(), Date::from_ymd(2001, 9, 9).unwrap());
    assert_eq!(ts.time(), Time::from_hms_micro(1, 46, 40, 500_000).unwrap());
    assert_eq!(ts.to_string(), "2001-09-09 01:46:40.500000");
}

#[test]
fn negative_instants_borrow_from_previous_day() {
    let ts = Timestamp::from_micros(-1);
    assert_eq!(ts.date().to_string(), "1969-12-31");
    assert_eq!(ts.time().to_string(), "23:59:59.999999");
}

#[test]
fn extreme_values_decode_beyond_chrono_range() {
    let max = Timestamp::from_micros(9_223_372_036_854_775_806);
    assert_eq!(max.date(), Date::from_ymd(294_247, 1, 10).unwrap());
    assert_eq!(max.time(), Time::from_hms_micro(4, 0, 54, 775_806).unwrap());

    let min = Timestamp::from_micros(-9_223_372_022_400_000_000);
    assert_eq!(min.date(), Date::from_ymd(-290_308, 12, 22).unwrap());
    assert_eq!(min.time(), Time::from_hms(0, 0, 0).unwrap());

    for ts in [max, min, Timestamp::from_micros(i64::MIN), Timestamp::from_micros(i64::MAX)] {
        let err = ts.to_naive_date_time().unwrap_err();
        assert!(matches!(
            err,
            MarshalError::Overflow {
                target: "chrono::NaiveDateTime",
                ..
            }
        ));
        assert!(ts.to_utc().is_err());
    }
}

#[test]
fn from_parts_round_trips() {
    let date = Date::from_ymd(2024, 2, 29).unwrap();
    let time = Time::from_hms(12, 30, 0).unwrap();
    let ts = Timestamp::from_parts(date, time).unwrap();
    assert_eq!(Timestamp::from_micros(ts.micros()), ts);
}

#[test]
fn from_parts_rejects_instants_outside_i64() {
    let date = Date::from_ymd(5_000_000, 1, 1).unwrap();
    assert!(Timestamp::from_parts(date, Time::default()).is_none());
}

#[test]
fn converts_to_chrono_in_range() {
    let ts = Timestamp::from_micros(86_400_000_000 + 1);
    let expected = NaiveDate::from_ymd_opt(1970, 1, 2)
        .unwrap()
        .and_hms_micro_opt(0, 0, 0, 1)
        .unwrap();
    assert_eq!(ts.to_naive_date_time().unwrap(), expected);
    assert_eq!(ts.to_utc().unwrap().naive_utc(), expected);
}
