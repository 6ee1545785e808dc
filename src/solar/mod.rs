//! Solar terms (节气) and pentads (候)
//!
//! The tropical year is cut into twenty-four solar terms of 15° of solar
//! ecliptic longitude each. The sequence here starts at the spring equinox,
//! where the longitude is 0°. Computing the sun's longitude for an instant is
//! the job of an ephemeris; this module only maps a longitude to its term.

use crate::constants::{DEG360, DEGREES_PER_TERM, PENTAD_COUNT, SOLAR_TERM_COUNT};
use crate::{CalendarError, Result, Script};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Solar term names, simplified, from the spring equinox
const SOLAR_TERM_NAMES: [&str; SOLAR_TERM_COUNT] = [
    "春分", "清明", "谷雨", "立夏", "小满", "芒种",
    "夏至", "小暑", "大暑", "立秋", "处暑", "白露",
    "秋分", "寒露", "霜降", "立冬", "小雪", "大雪",
    "冬至", "小寒", "大寒", "立春", "雨水", "惊蛰",
];

/// Solar term names, traditional
const SOLAR_TERM_NAMES_TRADITIONAL: [&str; SOLAR_TERM_COUNT] = [
    "春分", "清明", "穀雨", "立夏", "小滿", "芒種",
    "夏至", "小暑", "大暑", "立秋", "處暑", "白露",
    "秋分", "寒露", "霜降", "立冬", "小雪", "大雪",
    "冬至", "小寒", "大寒", "立春", "雨水", "驚蟄",
];

/// Bring a longitude in degrees into `[0, 360)`
///
/// Non-finite input stays non-finite.
pub fn normalize_longitude(degrees: f64) -> f64 {
    if degrees >= DEG360 || degrees < 0.0 {
        degrees - (degrees / DEG360).floor() * DEG360
    } else {
        degrees
    }
}

/// Apparent ecliptic longitude of the sun, in degrees
///
/// Any finite value is accepted; it is taken modulo 360° when mapped to a
/// solar term.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct EclipticLongitude(f64);

impl EclipticLongitude {
    /// Wrap a longitude, rejecting NaN and infinities
    pub fn new(degrees: f64) -> Result<Self> {
        if degrees.is_finite() {
            Ok(Self(degrees))
        } else {
            Err(CalendarError::NonFiniteLongitude(degrees))
        }
    }

    pub fn degrees(self) -> f64 {
        self.0
    }

    /// The same direction with the value in `[0, 360)`
    pub fn normalized(self) -> Self {
        Self(normalize_longitude(self.0))
    }

    /// The solar term this longitude falls in
    pub fn solar_term(self) -> SolarTerm {
        SolarTerm::from_longitude(self.0)
    }
}

impl TryFrom<f64> for EclipticLongitude {
    type Error = CalendarError;

    fn try_from(degrees: f64) -> Result<Self> {
        Self::new(degrees)
    }
}

/// One of the twenty-four solar terms
///
/// English names follow the China Meteorological Administration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum SolarTerm {
    /// 春分, 0°
    TheSpringEquinox = 0,
    /// 清明
    PureBrightness,
    /// 谷雨
    GrainRain,
    /// 立夏
    TheBeginningOfSummer,
    /// 小满
    LesserFullnessOfGrain,
    /// 芒种
    GrainInBeard,
    /// 夏至, 90°
    TheSummerSolstice,
    /// 小暑
    LesserHeat,
    /// 大暑
    GreaterHeat,
    /// 立秋
    TheBeginningOfAutumn,
    /// 处暑
    TheEndOfHeat,
    /// 白露
    WhiteDew,
    /// 秋分, 180°
    TheAutumnEquinox,
    /// 寒露
    ColdDew,
    /// 霜降
    FrostsDescent,
    /// 立冬
    TheBeginningOfWinter,
    /// 小雪
    LesserSnow,
    /// 大雪
    GreaterSnow,
    /// 冬至, 270°
    TheWinterSolstice,
    /// 小寒
    LesserCold,
    /// 大寒
    GreaterCold,
    /// 立春
    TheBeginningOfSpring,
    /// 雨水
    RainWater,
    /// 惊蛰
    TheWakingOfInsects,
}

impl SolarTerm {
    /// All solar terms, from the spring equinox
    pub const ALL: [SolarTerm; SOLAR_TERM_COUNT] = [
        SolarTerm::TheSpringEquinox,
        SolarTerm::PureBrightness,
        SolarTerm::GrainRain,
        SolarTerm::TheBeginningOfSummer,
        SolarTerm::LesserFullnessOfGrain,
        SolarTerm::GrainInBeard,
        SolarTerm::TheSummerSolstice,
        SolarTerm::LesserHeat,
        SolarTerm::GreaterHeat,
        SolarTerm::TheBeginningOfAutumn,
        SolarTerm::TheEndOfHeat,
        SolarTerm::WhiteDew,
        SolarTerm::TheAutumnEquinox,
        SolarTerm::ColdDew,
        SolarTerm::FrostsDescent,
        SolarTerm::TheBeginningOfWinter,
        SolarTerm::LesserSnow,
        SolarTerm::GreaterSnow,
        SolarTerm::TheWinterSolstice,
        SolarTerm::LesserCold,
        SolarTerm::GreaterCold,
        SolarTerm::TheBeginningOfSpring,
        SolarTerm::RainWater,
        SolarTerm::TheWakingOfInsects,
    ];

    /// The twelve mid-terms (中气) that anchor month naming
    pub const MID_TERMS: [SolarTerm; 12] = [
        SolarTerm::TheWinterSolstice,
        SolarTerm::GreaterCold,
        SolarTerm::RainWater,
        SolarTerm::TheSpringEquinox,
        SolarTerm::GrainRain,
        SolarTerm::LesserFullnessOfGrain,
        SolarTerm::TheSummerSolstice,
        SolarTerm::GreaterHeat,
        SolarTerm::TheEndOfHeat,
        SolarTerm::TheAutumnEquinox,
        SolarTerm::FrostsDescent,
        SolarTerm::LesserSnow,
    ];

    /// Get the term at `index`, wrapping any integer onto the 24-cycle
    pub fn from_index(index: i64) -> Self {
        Self::ALL[index.rem_euclid(SOLAR_TERM_COUNT as i64) as usize]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Get the solar term containing an ecliptic longitude in degrees
    ///
    /// The longitude is first brought into `[0, 360)`, so 360° is the spring
    /// equinox again and -1° is 惊蛰. A non-finite longitude has no term; it
    /// is logged and mapped to the spring equinox.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ganzhi::SolarTerm;
    ///
    /// assert_eq!(SolarTerm::from_longitude(0.0), SolarTerm::TheSpringEquinox);
    /// assert_eq!(SolarTerm::from_longitude(359.999), SolarTerm::TheWakingOfInsects);
    /// assert_eq!(SolarTerm::from_longitude(-1.0), SolarTerm::TheWakingOfInsects);
    /// ```
    pub fn from_longitude(degrees: f64) -> Self {
        if !degrees.is_finite() {
            log::warn!("no solar term for non-finite longitude {}", degrees);
            return SolarTerm::TheSpringEquinox;
        }
        let index = (normalize_longitude(degrees) / DEGREES_PER_TERM).floor() as i64;
        // A tiny negative longitude can normalize to exactly 360.0
        Self::from_index(index.min(SOLAR_TERM_COUNT as i64 - 1))
    }

    /// Ecliptic longitude at which this term begins
    pub fn start_longitude(self) -> f64 {
        self.index() as f64 * DEGREES_PER_TERM
    }

    /// Move `n` terms along the year, forwards for `n > 0`
    pub fn step(self, n: i64) -> Self {
        Self::from_index(self as i64 + n.rem_euclid(SOLAR_TERM_COUNT as i64))
    }

    pub fn next(self) -> Self {
        self.step(1)
    }

    pub fn prev(self) -> Self {
        self.step(-1)
    }

    /// Whether this is one of the twelve mid-terms (中气)
    pub fn is_mid_term(self) -> bool {
        Self::MID_TERMS.contains(&self)
    }

    /// Whether this is one of the twelve sectional terms (节气 proper)
    pub fn is_sectional(self) -> bool {
        !self.is_mid_term()
    }

    /// Name of the term in the given script
    pub fn name(self, script: Script) -> &'static str {
        match script {
            Script::Simplified => SOLAR_TERM_NAMES[self.index()],
            Script::Traditional => SOLAR_TERM_NAMES_TRADITIONAL[self.index()],
        }
    }

    /// Look up a term by name, in either script
    pub fn from_name(name: &str) -> Option<Self> {
        SOLAR_TERM_NAMES
            .iter()
            .position(|&n| n == name)
            .or_else(|| SOLAR_TERM_NAMES_TRADITIONAL.iter().position(|&n| n == name))
            .map(|index| Self::ALL[index])
    }
}

impl fmt::Display for SolarTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name(Script::Simplified))
    }
}

impl FromStr for SolarTerm {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| {
            log::debug!("rejected solar term text {:?}", s);
            CalendarError::UnknownSolarTerm(s.to_string())
        })
    }
}

impl From<EclipticLongitude> for SolarTerm {
    fn from(longitude: EclipticLongitude) -> Self {
        longitude.solar_term()
    }
}

/// One of the three pentads (候) of a solar term
///
/// Each pentad is about five days; a few run to six. This is only a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Pentad {
    /// 初候
    First = 0,
    /// 次候
    Second,
    /// 末候
    Third,
}

impl Pentad {
    pub const ALL: [Pentad; PENTAD_COUNT] = [Pentad::First, Pentad::Second, Pentad::Third];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Pentad::First => "初候",
            Pentad::Second => "次候",
            Pentad::Third => "末候",
        }
    }
}

impl fmt::Display for Pentad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<i64> for Pentad {
    type Error = CalendarError;

    fn try_from(index: i64) -> Result<Self> {
        match index {
            0..=2 => Ok(Self::ALL[index as usize]),
            _ => Err(CalendarError::IndexOutOfRange {
                kind: "pentad",
                index,
                len: PENTAD_COUNT,
            }),
        }
    }
}
