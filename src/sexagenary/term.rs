//! Sexagenary terms (干支), the sixty-place stem and branch cycle

use super::{CelestialStem, TerrestrialBranch};
use crate::constants::{
    BASE_TIMEZONE, SEXAGENARY_COUNT, SEXAGENARY_DAY_BASE_JDN, SEXAGENARY_YEAR_BASE,
};
use crate::time::{civil_date, day_number};
use crate::{CalendarError, Result};
use chrono::{DateTime, NaiveDate, TimeZone};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

lazy_static! {
    /// Map from the two-character name of each of the sixty terms to the term
    static ref TERMS_BY_NAME: HashMap<String, SexagenaryTerm> = {
        let mut m = HashMap::with_capacity(SEXAGENARY_COUNT);
        for term in SexagenaryTerm::iter() {
            m.insert(term.to_string(), term);
        }
        m
    };
}

/// A stem and branch pair lying on the sixty-term cycle
///
/// Only pairs whose stem and branch share parity occur in the cycle, so half
/// of the 120 combinations are impossible. The fields are private and every
/// constructor keeps that invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TermFields", into = "TermFields")]
pub struct SexagenaryTerm {
    stem: CelestialStem,
    branch: TerrestrialBranch,
}

/// Serialized form of a term, checked on the way back in
#[derive(Clone, Copy, Serialize, Deserialize)]
struct TermFields {
    stem: CelestialStem,
    branch: TerrestrialBranch,
}

impl SexagenaryTerm {
    /// 甲子, the first term of the cycle
    pub const JIA_ZI: SexagenaryTerm = SexagenaryTerm {
        stem: CelestialStem::Jia,
        branch: TerrestrialBranch::Zi,
    };

    /// 癸亥, the last term of the cycle
    pub const GUI_HAI: SexagenaryTerm = SexagenaryTerm {
        stem: CelestialStem::Gui,
        branch: TerrestrialBranch::Hai,
    };

    /// Pair a stem with a branch, or `None` if they differ in parity
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ganzhi::{CelestialStem, SexagenaryTerm, TerrestrialBranch};
    ///
    /// assert!(SexagenaryTerm::new(CelestialStem::Jia, TerrestrialBranch::Xu).is_some());
    /// assert!(SexagenaryTerm::new(CelestialStem::Jia, TerrestrialBranch::Chou).is_none());
    /// ```
    pub fn new(stem: CelestialStem, branch: TerrestrialBranch) -> Option<Self> {
        if stem.index() % 2 == branch.index() % 2 {
            Some(Self { stem, branch })
        } else {
            None
        }
    }

    /// Get the term at `index`, wrapping any integer onto the 60-cycle
    ///
    /// Index 0 is 甲子, 1 is 乙丑 and 59 is 癸亥.
    pub fn from_index(index: i64) -> Self {
        let index = index.rem_euclid(SEXAGENARY_COUNT as i64);
        Self {
            stem: CelestialStem::from_index(index),
            branch: TerrestrialBranch::from_index(index),
        }
    }

    /// Look up a term by its two-character name, such as `"甲子"`
    ///
    /// The lookup goes through the table of the sixty canonical names, so
    /// text like `"甲丑"` that pairs valid characters off the cycle is
    /// rejected along with everything else.
    pub fn from_text(text: &str) -> Option<Self> {
        let term = TERMS_BY_NAME.get(text).copied();
        if term.is_none() {
            log::debug!("rejected sexagenary term text {:?}", text);
        }
        term
    }

    /// Term of the lunisolar year carrying the label `year`
    ///
    /// Year labels follow the Gregorian year in which the lunisolar year
    /// begins, so 1984 is 甲子 and 2000 is 庚辰.
    pub fn for_year(year: i32) -> Self {
        Self::from_index(year as i64 - SEXAGENARY_YEAR_BASE as i64)
    }

    /// Term of a date in the proleptic Gregorian calendar
    ///
    /// Days are counted from 1949-10-01, a 甲子 day.
    pub fn for_date(date: NaiveDate) -> Self {
        Self::from_index(day_number(date) - SEXAGENARY_DAY_BASE_JDN)
    }

    /// Term of a civil date given as fields
    ///
    /// Fails with [`CalendarError::InvalidCalendarDate`] if the fields name no
    /// day.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ganzhi::SexagenaryTerm;
    ///
    /// assert_eq!(SexagenaryTerm::for_civil_day(2000, 1, 1).unwrap().to_string(), "戊午");
    /// assert!(SexagenaryTerm::for_civil_day(2023, 2, 29).is_err());
    /// ```
    pub fn for_civil_day(year: i32, month: u32, day: u32) -> Result<Self> {
        civil_date(year, month, day).map(Self::for_date)
    }

    /// Term of the day containing `instant` in the calendar's base timezone
    ///
    /// The instant is re-expressed in UTC+8 before its date is taken, so a
    /// late-evening UTC instant may fall on the next day's term.
    pub fn for_day<Tz: TimeZone>(instant: &DateTime<Tz>) -> Self {
        Self::for_date(instant.with_timezone(&BASE_TIMEZONE).date_naive())
    }

    /// Iterate over the sixty terms from 甲子 to 癸亥
    pub fn iter() -> impl Iterator<Item = SexagenaryTerm> {
        (0..SEXAGENARY_COUNT as i64).map(Self::from_index)
    }

    pub fn stem(self) -> CelestialStem {
        self.stem
    }

    pub fn branch(self) -> TerrestrialBranch {
        self.branch
    }

    /// Position of this term in the cycle, `0..60`
    pub fn index(self) -> usize {
        let stem = self.stem.index();
        let branch = self.branch.index();
        (stem + 12 - branch) % 12 / 2 * 10 + stem
    }

    /// Move `n` places along the cycle
    ///
    /// Stem and branch step by the same amount, which keeps them in the same
    /// parity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ganzhi::SexagenaryTerm;
    ///
    /// let yi_chou = SexagenaryTerm::from_index(1);
    /// assert_eq!(yi_chou.step(-3).to_string(), "壬戌");
    /// ```
    pub fn step(self, n: i64) -> Self {
        Self {
            stem: self.stem.step(n),
            branch: self.branch.step(n),
        }
    }

    pub fn next(self) -> Self {
        self.step(1)
    }

    pub fn prev(self) -> Self {
        self.step(-1)
    }
}

impl Default for SexagenaryTerm {
    fn default() -> Self {
        Self::JIA_ZI
    }
}

impl Ord for SexagenaryTerm {
    fn cmp(&self, other: &Self) -> Ordering {
        self.index().cmp(&other.index())
    }
}

impl PartialOrd for SexagenaryTerm {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for SexagenaryTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}

impl FromStr for SexagenaryTerm {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_text(s).ok_or_else(|| CalendarError::UnknownTerm(s.to_string()))
    }
}

impl TryFrom<(CelestialStem, TerrestrialBranch)> for SexagenaryTerm {
    type Error = CalendarError;

    fn try_from((stem, branch): (CelestialStem, TerrestrialBranch)) -> Result<Self> {
        Self::new(stem, branch).ok_or(CalendarError::InvalidPair { stem, branch })
    }
}

impl From<SexagenaryTerm> for (CelestialStem, TerrestrialBranch) {
    fn from(term: SexagenaryTerm) -> Self {
        (term.stem, term.branch)
    }
}

impl TryFrom<TermFields> for SexagenaryTerm {
    type Error = CalendarError;

    fn try_from(fields: TermFields) -> Result<Self> {
        Self::try_from((fields.stem, fields.branch))
    }
}

impl From<SexagenaryTerm> for TermFields {
    fn from(term: SexagenaryTerm) -> Self {
        TermFields {
            stem: term.stem,
            branch: term.branch,
        }
    }
}
