//! Constants module for calendar calculations

use chrono::FixedOffset;

// Cycle lengths
/// Number of celestial stems
pub const STEM_COUNT: usize = 10;
/// Number of terrestrial branches
pub const BRANCH_COUNT: usize = 12;
/// Length of the combined stem-branch cycle
pub const SEXAGENARY_COUNT: usize = 60;
/// Number of solar terms in a tropical year
pub const SOLAR_TERM_COUNT: usize = 24;
/// Number of pentads in a solar term
pub const PENTAD_COUNT: usize = 3;

// Angles
/// Degrees in a complete circle
pub const DEG360: f64 = 360.0;
/// Ecliptic longitude covered by one solar term, in degrees
pub const DEGREES_PER_TERM: f64 = DEG360 / SOLAR_TERM_COUNT as f64;

// Time constants
/// Seconds in a day
pub const DAY_S: f64 = 86_400.0;
/// J2000.0 epoch as Julian date
pub const J2000: f64 = 2_451_545.0;

// Calendar constants
/// First day of Gregorian calendar in Julian day number (1582-10-15)
pub const GREGORIAN_START: i64 = 2_299_161;

/// Offset of the base timezone from UTC, in seconds.
///
/// The lunisolar calendar is reckoned in standard time of the 120°E
/// meridian. This is a fixed offset, not the `Asia/Shanghai` zone.
pub const BASE_UTC_OFFSET_S: i32 = 8 * 60 * 60;

/// The base timezone as a chrono offset
pub const BASE_TIMEZONE: FixedOffset = match FixedOffset::east_opt(BASE_UTC_OFFSET_S) {
    Some(offset) => offset,
    None => panic!("base UTC offset must be less than a day"),
};

/// Civil date of the reference day whose term is 甲子 (1949-10-01, UTC+8)
pub const SEXAGENARY_DAY_BASE: (i32, u32, u32) = (1949, 10, 1);
/// Julian day number of [`SEXAGENARY_DAY_BASE`]
pub const SEXAGENARY_DAY_BASE_JDN: i64 = 2_433_191;

/// Lunisolar year labelled 甲子, which began on 1984-02-02 (UTC+8)
pub const SEXAGENARY_YEAR_BASE: i32 = 1984;
