//! Celestial stems (天干)

use crate::constants::STEM_COUNT;
use crate::{CalendarError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stem characters in canonical order, 甲 first
const STEM_CHARS: [char; STEM_COUNT] = ['甲', '乙', '丙', '丁', '戊', '己', '庚', '辛', '壬', '癸'];

/// One of the ten celestial stems
///
/// The discriminant is the position in the 10-cycle, so `Jia as usize == 0`
/// and `Gui as usize == 9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum CelestialStem {
    /// 甲
    Jia = 0,
    /// 乙
    Yi,
    /// 丙
    Bing,
    /// 丁
    Ding,
    /// 戊
    Wu,
    /// 己
    Ji,
    /// 庚
    Geng,
    /// 辛
    Xin,
    /// 壬
    Ren,
    /// 癸
    Gui,
}

impl CelestialStem {
    /// All stems in cycle order
    pub const ALL: [CelestialStem; STEM_COUNT] = [
        CelestialStem::Jia,
        CelestialStem::Yi,
        CelestialStem::Bing,
        CelestialStem::Ding,
        CelestialStem::Wu,
        CelestialStem::Ji,
        CelestialStem::Geng,
        CelestialStem::Xin,
        CelestialStem::Ren,
        CelestialStem::Gui,
    ];

    /// Get the stem at `index`, wrapping any integer onto the 10-cycle
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ganzhi::CelestialStem;
    ///
    /// assert_eq!(CelestialStem::from_index(12), CelestialStem::Bing);
    /// assert_eq!(CelestialStem::from_index(-1), CelestialStem::Gui);
    /// ```
    pub fn from_index(index: i64) -> Self {
        Self::ALL[index.rem_euclid(STEM_COUNT as i64) as usize]
    }

    /// Whether `index` names a stem without wrapping
    pub const fn is_valid_index(index: i64) -> bool {
        index >= 0 && index < STEM_COUNT as i64
    }

    /// Position of this stem in the cycle, `0..10`
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look up a stem by its character
    ///
    /// Returns `None` for anything that is not one of the ten stem characters.
    pub fn from_char(c: char) -> Option<Self> {
        STEM_CHARS
            .iter()
            .position(|&stem| stem == c)
            .map(|index| Self::ALL[index])
    }

    /// The stem's character
    pub fn char(self) -> char {
        STEM_CHARS[self.index()]
    }

    /// Move `n` places along the cycle, forwards for `n > 0` and backwards
    /// for `n < 0`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ganzhi::CelestialStem;
    ///
    /// assert_eq!(CelestialStem::Gui.step(1), CelestialStem::Jia);
    /// assert_eq!(CelestialStem::Jia.step(-3), CelestialStem::Xin);
    /// ```
    pub fn step(self, n: i64) -> Self {
        Self::from_index(self as i64 + n.rem_euclid(STEM_COUNT as i64))
    }

    /// The following stem, 癸 wraps to 甲
    pub fn next(self) -> Self {
        self.step(1)
    }

    /// The preceding stem
    pub fn prev(self) -> Self {
        self.step(-1)
    }
}

impl fmt::Display for CelestialStem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}

impl FromStr for CelestialStem {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
        .ok_or_else(|| {
            log::debug!("rejected celestial stem text {:?}", s);
            CalendarError::UnknownStem(s.to_string())
        })
    }
}

impl TryFrom<i64> for CelestialStem {
    type Error = CalendarError;

    fn try_from(index: i64) -> Result<Self> {
        if Self::is_valid_index(index) {
            Ok(Self::ALL[index as usize])
        } else {
            Err(CalendarError::IndexOutOfRange {
                kind: "celestial stem",
                index,
                len: STEM_COUNT,
            })
        }
    }
}

impl From<CelestialStem> for usize {
    fn from(stem: CelestialStem) -> Self {
        stem.index()
    }
}
