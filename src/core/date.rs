//! UTC calendar days
//!
//! The daily puzzle is a pure function of the current UTC date, so game logic
//! takes a `UtcDay` argument instead of reading the system clock itself. Only
//! the edges (HTTP handlers, CLI) call [`UtcDay::today`].

use std::fmt;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

const SECONDS_PER_DAY: i64 = 86_400;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A UTC calendar day, stored as days since 1970-01-01
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UtcDay(i64);

/// Error type for unparseable `YYYY-MM-DD` strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateParseError(String);

impl fmt::Display for DateParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Expected date as YYYY-MM-DD, got {:?}", self.0)
    }
}

impl std::error::Error for DateParseError {}

impl UtcDay {
    /// The current UTC day from the system clock
    #[must_use]
    pub fn today() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0);
        Self::from_unix_seconds(secs)
    }

    /// Construct from a Unix timestamp in seconds
    #[must_use]
    pub const fn from_unix_seconds(secs: i64) -> Self {
        Self(secs.div_euclid(SECONDS_PER_DAY))
    }

    /// Construct from a civil year/month/day (month and day are 1-based)
    ///
    /// Uses the standard days-from-civil conversion, valid for all dates this
    /// service will ever see.
    #[must_use]
    pub const fn from_ymd(year: i32, month: u32, day: u32) -> Self {
        let y = (if month <= 2 { year - 1 } else { year }) as i64;
        let era = (if y >= 0 { y } else { y - 399 }) / 400;
        let yoe = y - era * 400;
        let mp = (if month > 2 { month - 3 } else { month + 9 }) as i64;
        let doy = (153 * mp + 2) / 5 + day as i64 - 1;
        let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
        Self(era * 146_097 + doe - 719_468)
    }

    /// Days since the Unix epoch
    #[inline]
    #[must_use]
    pub const fn days(self) -> i64 {
        self.0
    }

    /// Whole days from `earlier` to `self` (negative if `self` is earlier)
    #[inline]
    #[must_use]
    pub const fn days_since(self, earlier: Self) -> i64 {
        self.0 - earlier.0
    }

    /// The next calendar day
    #[inline]
    #[must_use]
    pub const fn succ(self) -> Self {
        Self(self.0 + 1)
    }

    /// Civil (year, month, day) for this day
    #[must_use]
    pub const fn ymd(self) -> (i32, u32, u32) {
        let z = self.0 + 719_468;
        let era = z.div_euclid(146_097);
        let doe = z.rem_euclid(146_097);
        let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
        let y = yoe + era * 400;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let mp = (5 * doy + 2) / 153;
        let d = doy - (153 * mp + 2) / 5 + 1;
        let m = if mp < 10 { mp + 3 } else { mp - 9 };
        let y = if m <= 2 { y + 1 } else { y };
        (y as i32, m as u32, d as u32)
    }

    /// Session key form: `YYYY-MM-DD`
    #[must_use]
    pub fn key(self) -> String {
        let (y, m, d) = self.ymd();
        format!("{y:04}-{m:02}-{d:02}")
    }

    /// Human-readable form for the page header, e.g. `26 August 2026`
    #[must_use]
    pub fn long(self) -> String {
        let (y, m, d) = self.ymd();
        format!("{d:02} {} {y}", MONTHS[(m - 1) as usize])
    }
}

impl fmt::Display for UtcDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for UtcDay {
    type Err = DateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || DateParseError(s.to_string());

        let mut parts = s.splitn(3, '-');
        let year: i32 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(err)?;
        let month: u32 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(err)?;
        let day: u32 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(err)?;

        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return Err(err());
        }

        let parsed = Self::from_ymd(year, month, day);
        // Round-trip guards impossible dates like February 30
        if parsed.ymd() != (year, month, day) {
            return Err(err());
        }
        Ok(parsed)
    }
}
