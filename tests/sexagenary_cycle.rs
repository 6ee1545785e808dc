//! Integration tests for the stem, branch and sexagenary term cycles

use ganzhi::{CalendarError, CelestialStem, SexagenaryTerm, TerrestrialBranch, ZodiacSign};
use rstest::rstest;

const SEXAGENARY_NAMES: [&str; 60] = [
    "甲子", "乙丑", "丙寅", "丁卯", "戊辰", "己巳", "庚午", "辛未", "壬申", "癸酉",
    "甲戌", "乙亥", "丙子", "丁丑", "戊寅", "己卯", "庚辰", "辛巳", "壬午", "癸未",
    "甲申", "乙酉", "丙戌", "丁亥", "戊子", "己丑", "庚寅", "辛卯", "壬辰", "癸巳",
    "甲午", "乙未", "丙申", "丁酉", "戊戌", "己亥", "庚子", "辛丑", "壬寅", "癸卯",
    "甲辰", "乙巳", "丙午", "丁未", "戊申", "己酉", "庚戌", "辛亥", "壬子", "癸丑",
    "甲寅", "乙卯", "丙辰", "丁巳", "戊午", "己未", "庚申", "辛酉", "壬戌", "癸亥",
];

#[rstest]
#[case(0)]
#[case(1)]
#[case(-1)]
#[case(59)]
#[case(61)]
#[case(-121)]
#[case(1_000_003)]
#[case(i64::MAX)]
#[case(i64::MIN + 1)]
fn step_is_undone_by_opposite_step(#[case] n: i64) {
    let stem = CelestialStem::from_index(0);
    let branch = TerrestrialBranch::from_index(0);
    let term = SexagenaryTerm::from_index(0);

    assert_eq!(stem.step(n).step(-n), stem);
    assert_eq!(branch.step(n).step(-n), branch);
    assert_eq!(term.step(n).step(-n), term);
}

#[test]
fn index_is_floored_modulo_sixty() {
    for i in -200..=200 {
        let expected = ((i % 60) + 60) % 60;
        assert_eq!(SexagenaryTerm::from_index(i).index() as i64, expected);
    }
}

#[test]
fn next_from_jia_zi_produces_canonical_table() {
    let names: Vec<String> = std::iter::successors(Some(SexagenaryTerm::from_index(0)), |t| {
        Some(t.next())
    })
    .take(60)
    .map(|t| t.to_string())
    .collect();
    assert_eq!(names, SEXAGENARY_NAMES);

    let jia_zi = SexagenaryTerm::from_index(0);
    assert_eq!(jia_zi.to_string(), "甲子");
    assert_eq!(jia_zi.step(59).to_string(), "癸亥");
    assert_eq!(jia_zi.step(60).to_string(), "甲子");
}

#[test]
fn every_canonical_name_parses_back() {
    for i in 0..60 {
        let term = SexagenaryTerm::from_index(i);
        let text = term.to_string();
        assert_eq!(SexagenaryTerm::from_text(&text), Some(term));
        assert_eq!(text.parse::<SexagenaryTerm>(), Ok(term));
    }
}

#[rstest]
#[case("甲丑")]
#[case("乙子")]
#[case("甲")]
#[case("甲子丑")]
#[case("jiazi")]
#[case("")]
fn invalid_term_text_is_rejected(#[case] text: &str) {
    assert_eq!(SexagenaryTerm::from_text(text), None);
    assert_eq!(
        text.parse::<SexagenaryTerm>(),
        Err(CalendarError::UnknownTerm(text.to_string()))
    );
}

#[rstest]
#[case(23, TerrestrialBranch::Zi)]
#[case(0, TerrestrialBranch::Zi)]
#[case(1, TerrestrialBranch::Chou)]
#[case(5, TerrestrialBranch::Mao)]
#[case(6, TerrestrialBranch::Mao)]
#[case(22, TerrestrialBranch::Hai)]
fn double_hours(#[case] hour: u32, #[case] branch: TerrestrialBranch) {
    assert_eq!(TerrestrialBranch::from_hour(hour), branch);
}

#[rstest]
#[case(TerrestrialBranch::Zi, 11, ZodiacSign::Rat)]
#[case(TerrestrialBranch::Chou, 12, ZodiacSign::Ox)]
#[case(TerrestrialBranch::Yin, 1, ZodiacSign::Tiger)]
#[case(TerrestrialBranch::Mao, 2, ZodiacSign::Rabbit)]
#[case(TerrestrialBranch::Hai, 10, ZodiacSign::Pig)]
fn branch_month_and_zodiac(
    #[case] branch: TerrestrialBranch,
    #[case] month: u32,
    #[case] zodiac: ZodiacSign,
) {
    assert_eq!(branch.lunar_month(), month);
    assert_eq!(branch.zodiac(), zodiac);
}

#[rstest]
#[case(1949, 10, 1, "甲子")]
#[case(2000, 1, 1, "戊午")]
#[case(2000, 1, 7, "甲子")]
#[case(1949, 9, 29, "壬戌")]
fn day_terms(#[case] year: i32, #[case] month: u32, #[case] day: u32, #[case] name: &str) {
    let term = SexagenaryTerm::for_civil_day(year, month, day).unwrap();
    assert_eq!(term.to_string(), name);
}

#[rstest]
#[case(2023, 2, 29)]
#[case(2023, 2, 30)]
#[case(2023, 13, 1)]
#[case(2023, 4, 31)]
#[case(2023, 1, 0)]
fn impossible_days_have_no_term(#[case] year: i32, #[case] month: u32, #[case] day: u32) {
    assert!(matches!(
        SexagenaryTerm::for_civil_day(year, month, day),
        Err(CalendarError::InvalidCalendarDate(_))
    ));
}

#[test]
fn day_term_turns_over_at_base_midnight() {
    use chrono::{TimeZone, Utc};

    // 2000-01-06 16:00 UTC is 2000-01-07 00:00 in UTC+8, a 甲子 day
    let before = Utc.with_ymd_and_hms(2000, 1, 6, 15, 59, 59).unwrap();
    let after = Utc.with_ymd_and_hms(2000, 1, 6, 16, 0, 0).unwrap();
    assert_eq!(SexagenaryTerm::for_day(&before).to_string(), "癸亥");
    assert_eq!(SexagenaryTerm::for_day(&after).to_string(), "甲子");
}

#[test]
fn consecutive_years_take_consecutive_terms() {
    for year in 1900..2100 {
        let term = SexagenaryTerm::for_year(year);
        assert_eq!(term.next(), SexagenaryTerm::for_year(year + 1));
        assert_eq!(term.branch().zodiac(), SexagenaryTerm::for_year(year + 60).branch().zodiac());
    }
    assert_eq!(SexagenaryTerm::for_year(2024).branch().zodiac(), ZodiacSign::Dragon);
}
