//! Terrestrial branches (地支) and the zodiac signs (生肖) paired with them

use crate::constants::BRANCH_COUNT;
use crate::{CalendarError, Result, Script};
use chrono::Timelike;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Branch characters in canonical order, 子 first
const BRANCH_CHARS: [char; BRANCH_COUNT] = [
    '子', '丑', '寅', '卯', '辰', '巳', '午', '未', '申', '酉', '戌', '亥',
];

/// Zodiac names, simplified
const ZODIAC_NAMES: [&str; BRANCH_COUNT] = [
    "鼠", "牛", "虎", "兔", "龙", "蛇", "马", "羊", "猴", "鸡", "狗", "猪",
];

/// Zodiac names, traditional
const ZODIAC_NAMES_TRADITIONAL: [&str; BRANCH_COUNT] = [
    "鼠", "牛", "虎", "兔", "龍", "蛇", "馬", "羊", "猴", "雞", "狗", "豬",
];

/// One of the twelve terrestrial branches
///
/// Besides pairing with a stem to form a sexagenary term, a branch names a
/// double-hour (时辰), a month of the lunisolar year and a zodiac animal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum TerrestrialBranch {
    /// 子
    Zi = 0,
    /// 丑
    Chou,
    /// 寅
    Yin,
    /// 卯
    Mao,
    /// 辰
    Chen,
    /// 巳
    Si,
    /// 午
    Wu,
    /// 未
    Wei,
    /// 申
    Shen,
    /// 酉
    You,
    /// 戌
    Xu,
    /// 亥
    Hai,
}

impl TerrestrialBranch {
    /// All branches in cycle order
    pub const ALL: [TerrestrialBranch; BRANCH_COUNT] = [
        TerrestrialBranch::Zi,
        TerrestrialBranch::Chou,
        TerrestrialBranch::Yin,
        TerrestrialBranch::Mao,
        TerrestrialBranch::Chen,
        TerrestrialBranch::Si,
        TerrestrialBranch::Wu,
        TerrestrialBranch::Wei,
        TerrestrialBranch::Shen,
        TerrestrialBranch::You,
        TerrestrialBranch::Xu,
        TerrestrialBranch::Hai,
    ];

    /// Get the branch at `index`, wrapping any integer onto the 12-cycle
    pub fn from_index(index: i64) -> Self {
        Self::ALL[index.rem_euclid(BRANCH_COUNT as i64) as usize]
    }

    /// Whether `index` names a branch without wrapping
    pub const fn is_valid_index(index: i64) -> bool {
        index >= 0 && index < BRANCH_COUNT as i64
    }

    /// Position of this branch in the cycle, `0..12`
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look up a branch by its character
    pub fn from_char(c: char) -> Option<Self> {
        BRANCH_CHARS
            .iter()
            .position(|&branch| branch == c)
            .map(|index| Self::ALL[index])
    }

    /// The branch's character
    pub fn char(self) -> char {
        BRANCH_CHARS[self.index()]
    }

    /// Get the double-hour branch for an hour of the day
    ///
    /// Each branch covers two hours, and 子 straddles midnight: 23:00 to
    /// 00:59 is 子, 01:00 to 02:59 is 丑, and so on up to 21:00 to 22:59 for
    /// 亥. Hours past 23 wrap around the day.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ganzhi::TerrestrialBranch;
    ///
    /// assert_eq!(TerrestrialBranch::from_hour(23), TerrestrialBranch::Zi);
    /// assert_eq!(TerrestrialBranch::from_hour(0), TerrestrialBranch::Zi);
    /// assert_eq!(TerrestrialBranch::from_hour(1), TerrestrialBranch::Chou);
    /// assert_eq!(TerrestrialBranch::from_hour(22), TerrestrialBranch::Hai);
    /// ```
    pub fn from_hour(hour: u32) -> Self {
        let mut hour = hour % 24;
        if hour == 23 {
            hour = 0;
        }
        if hour % 2 == 1 {
            hour += 1;
        }
        Self::ALL[(hour / 2) as usize]
    }

    /// Get the double-hour branch for a time of day; only the hour is used
    pub fn from_time<T: Timelike>(time: &T) -> Self {
        Self::from_hour(time.hour())
    }

    /// Move `n` places along the cycle, forwards for `n > 0` and backwards
    /// for `n < 0`
    pub fn step(self, n: i64) -> Self {
        Self::from_index(self as i64 + n.rem_euclid(BRANCH_COUNT as i64))
    }

    /// The following branch, 亥 wraps to 子
    pub fn next(self) -> Self {
        self.step(1)
    }

    /// The preceding branch
    pub fn prev(self) -> Self {
        self.step(-1)
    }

    /// Month number this branch names in the lunisolar year
    ///
    /// 寅 is the first month; 子 and 丑 are the eleventh and twelfth.
    pub fn lunar_month(self) -> u32 {
        match self {
            TerrestrialBranch::Zi => 11,
            TerrestrialBranch::Chou => 12,
            other => other.index() as u32 - 1,
        }
    }

    /// The zodiac animal of this branch
    pub fn zodiac(self) -> ZodiacSign {
        ZodiacSign::ALL[self.index()]
    }
}

impl fmt::Display for TerrestrialBranch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}

impl FromStr for TerrestrialBranch {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
        .ok_or_else(|| {
            log::debug!("rejected terrestrial branch text {:?}", s);
            CalendarError::UnknownBranch(s.to_string())
        })
    }
}

impl TryFrom<i64> for TerrestrialBranch {
    type Error = CalendarError;

    fn try_from(index: i64) -> Result<Self> {
        if Self::is_valid_index(index) {
            Ok(Self::ALL[index as usize])
        } else {
            Err(CalendarError::IndexOutOfRange {
                kind: "terrestrial branch",
                index,
                len: BRANCH_COUNT,
            })
        }
    }
}

/// One of the twelve zodiac animals, in branch order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum ZodiacSign {
    Rat = 0,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

impl ZodiacSign {
    /// All signs in branch order
    pub const ALL: [ZodiacSign; BRANCH_COUNT] = [
        ZodiacSign::Rat,
        ZodiacSign::Ox,
        ZodiacSign::Tiger,
        ZodiacSign::Rabbit,
        ZodiacSign::Dragon,
        ZodiacSign::Snake,
        ZodiacSign::Horse,
        ZodiacSign::Goat,
        ZodiacSign::Monkey,
        ZodiacSign::Rooster,
        ZodiacSign::Dog,
        ZodiacSign::Pig,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// The branch this animal stands for
    pub fn branch(self) -> TerrestrialBranch {
        TerrestrialBranch::ALL[self.index()]
    }

    /// Name of the animal in the given script
    pub fn name(self, script: Script) -> &'static str {
        match script {
            Script::Simplified => ZODIAC_NAMES[self.index()],
            Script::Traditional => ZODIAC_NAMES_TRADITIONAL[self.index()],
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name(Script::Simplified))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn test_from_char() {
        for (index, c) in "子丑寅卯辰巳午未申酉戌亥".chars().enumerate() {
            let branch = TerrestrialBranch::from_char(c).unwrap();
            assert_eq!(branch.index(), index);
            assert_eq!(branch.to_string(), c.to_string());
        }
        assert_eq!(TerrestrialBranch::from_char('甲'), None);
        assert!("子丑".parse::<TerrestrialBranch>().is_err());
        assert_eq!("酉".parse::<TerrestrialBranch>(), Ok(TerrestrialBranch::You));
    }

    #[test]
    fn test_from_hour() {
        let expected = [
            (23, TerrestrialBranch::Zi),
            (0, TerrestrialBranch::Zi),
            (1, TerrestrialBranch::Chou),
            (2, TerrestrialBranch::Chou),
            (3, TerrestrialBranch::Yin),
            (11, TerrestrialBranch::Wu),
            (12, TerrestrialBranch::Wu),
            (13, TerrestrialBranch::Wei),
            (21, TerrestrialBranch::Hai),
            (22, TerrestrialBranch::Hai),
        ];
        for (hour, branch) in expected {
            assert_eq!(TerrestrialBranch::from_hour(hour), branch, "hour {}", hour);
        }

        // Every branch gets exactly two hours
        let mut counts = [0; BRANCH_COUNT];
        for hour in 0..24 {
            counts[TerrestrialBranch::from_hour(hour).index()] += 1;
        }
        assert!(counts.iter().all(|&c| c == 2));
    }

    #[test]
    fn test_from_time_ignores_minutes() {
        let early = NaiveTime::from_hms_opt(23, 0, 0).unwrap();
        let late = NaiveTime::from_hms_opt(0, 59, 59).unwrap();
        assert_eq!(TerrestrialBranch::from_time(&early), TerrestrialBranch::Zi);
        assert_eq!(TerrestrialBranch::from_time(&late), TerrestrialBranch::Zi);

        let noon = NaiveTime::from_hms_opt(12, 30, 0).unwrap();
        assert_eq!(TerrestrialBranch::from_time(&noon), TerrestrialBranch::Wu);
    }

    #[test]
    fn test_step() {
        assert_eq!(TerrestrialBranch::Hai.next(), TerrestrialBranch::Zi);
        assert_eq!(TerrestrialBranch::Zi.prev(), TerrestrialBranch::Hai);
        assert_eq!(TerrestrialBranch::Zi.step(-13), TerrestrialBranch::Hai);
        for n in -50..=50 {
            let branch = TerrestrialBranch::Mao;
            assert_eq!(branch.step(n).step(-n), branch);
        }
    }

    #[test]
    fn test_lunar_month() {
        let months: Vec<u32> = TerrestrialBranch::ALL
            .iter()
            .map(|b| b.lunar_month())
            .collect();
        assert_eq!(months, vec![11, 12, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_zodiac() {
        assert_eq!(TerrestrialBranch::Zi.zodiac(), ZodiacSign::Rat);
        assert_eq!(TerrestrialBranch::Hai.zodiac(), ZodiacSign::Pig);
        for branch in TerrestrialBranch::ALL {
            assert_eq!(branch.zodiac().branch(), branch);
        }

        assert_eq!(ZodiacSign::Dragon.name(Script::Simplified), "龙");
        assert_eq!(ZodiacSign::Dragon.name(Script::Traditional), "龍");
        assert_eq!(ZodiacSign::Rooster.to_string(), "鸡");
    }

    #[test]
    fn test_try_from() {
        assert_eq!(TerrestrialBranch::try_from(11), Ok(TerrestrialBranch::Hai));
        assert!(TerrestrialBranch::try_from(12).is_err());
    }
}
