use std::fmt;

use crate::engine::value::time::{MICROS_PER_HOUR, MICROS_PER_MINUTE, MICROS_PER_SECOND};

/// Calendar interval: months and days are kept apart from the sub-day part
/// because their length in microseconds depends on the anchor date.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Interval {
    pub months: i32,
    pub days: i32,
    pub micros: i64,
}

impl Interval {
    pub fn new(months: i32, days: i32, micros: i64) -> Self {
        Self {
            months,
            days,
            micros,
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::with_capacity(4);
        let units = [
            (self.months as i64 / 12, "year"),
            (self.months as i64 % 12, "month"),
            (self.days as i64, "day"),
        ];
        for (n, name) in units {
            if n != 0 {
                let plural = if n.abs() == 1 { "" } else { "s" };
                parts.push(format!("{n} {name}{plural}"));
            }
        }
        if self.micros != 0 || parts.is_empty() {
            let sign = if self.micros < 0 { "-" } else { "" };
            let abs = self.micros.unsigned_abs();
            let mut clock = format!(
                "{sign}{:02}:{:02}:{:02}",
                abs / MICROS_PER_HOUR,
                abs % MICROS_PER_HOUR / MICROS_PER_MINUTE,
                abs % MICROS_PER_MINUTE / MICROS_PER_SECOND
            );
            let frac = abs % MICROS_PER_SECOND;
            if frac != 0 {
                clock.push_str(&format!(".{frac:06}"));
            }
            parts.push(clock);
        }
        f.write_str(&parts.join(" "))
    }
}
