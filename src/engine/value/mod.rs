pub mod date;
pub mod decimal;
pub mod dynamic;
pub mod interval;
pub mod time;
pub mod timestamp;

#[cfg(test)]
mod decimal_test;
#[cfg(test)]
mod timestamp_test;

pub use date::Date;
pub use decimal::Decimal;
pub use dynamic::DynamicValue;
pub use interval::Interval;
pub use time::Time;
pub use timestamp::Timestamp;
