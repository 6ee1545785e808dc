//! Ganzhi: Chinese sexagenary cycle and solar term primitives
//!
//! This crate provides the small value types a Chinese lunisolar calendar is
//! built from: the ten celestial stems, the twelve terrestrial branches, their
//! sixty-term combined cycle, the twenty-four solar terms, and the Julian Day
//! conversion used as the common astronomical time axis.
//!
//! Everything here is a pure computation over `Copy` values. Working out the
//! actual solar longitude or new moons for an instant is left to an
//! ephemeris provider; this crate only maps those values onto the calendar.
//!
//! # Examples
//!
//! ```
//! use ganzhi::{SexagenaryTerm, SolarTerm};
//!
//! let term = SexagenaryTerm::from_index(0);
//! assert_eq!(term.to_string(), "甲子");
//! assert_eq!(term.step(-1).to_string(), "癸亥");
//!
//! let parsed: SexagenaryTerm = "庚寅".parse().unwrap();
//! assert_eq!(parsed.index(), 26);
//!
//! assert_eq!(SolarTerm::from_longitude(270.0), SolarTerm::TheWinterSolstice);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod constants;
pub mod sexagenary;
pub mod solar;
pub mod time;

// Re-export commonly used types
pub use sexagenary::{CelestialStem, SexagenaryTerm, TerrestrialBranch, ZodiacSign};
pub use solar::{EclipticLongitude, Pentad, SolarTerm};
pub use time::{julian_day, CalendarTuple};

/// Main error type for the ganzhi library
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CalendarError {
    #[error("Unknown celestial stem: {0:?}")]
    UnknownStem(String),

    #[error("Unknown terrestrial branch: {0:?}")]
    UnknownBranch(String),

    #[error("Unknown sexagenary term: {0:?}")]
    UnknownTerm(String),

    #[error("Unknown solar term: {0:?}")]
    UnknownSolarTerm(String),

    /// An index given to a checked constructor lies outside its cycle
    #[error("{kind} index {index} is outside 0..{len}")]
    IndexOutOfRange {
        kind: &'static str,
        index: i64,
        len: usize,
    },

    /// Stem and branch differ in parity, so the pair never occurs in the cycle
    #[error("{stem}{branch} is not one of the sixty sexagenary terms")]
    InvalidPair {
        stem: CelestialStem,
        branch: TerrestrialBranch,
    },

    #[error("Invalid calendar date: {0}")]
    InvalidCalendarDate(String),

    #[error("Ecliptic longitude must be finite, got {0}")]
    NonFiniteLongitude(f64),
}

/// Result type for ganzhi operations
pub type Result<T> = std::result::Result<T, CalendarError>;

/// Character set used when rendering names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Script {
    /// 简体
    #[default]
    Simplified,
    /// 繁體
    Traditional,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CalendarError::InvalidPair {
            stem: CelestialStem::Jia,
            branch: TerrestrialBranch::Chou,
        };
        assert_eq!(
            err.to_string(),
            "甲丑 is not one of the sixty sexagenary terms"
        );

        let err = CalendarError::IndexOutOfRange {
            kind: "celestial stem",
            index: 10,
            len: 10,
        };
        assert_eq!(err.to_string(), "celestial stem index 10 is outside 0..10");
    }

    #[test]
    fn test_default_script() {
        assert_eq!(Script::default(), Script::Simplified);
    }
}
