use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::LifeCalcError;
use crate::LifeCalcResult;

const FIRST_YEAR: i32 = 1900;
const LAST_YEAR: i32 = 2049;

/// Packed month lengths per lunar year 1900..=2049. The low nibble is the
/// leap month (0 if none), bit `0x10000 >> m` marks a 30-day month m, and
/// bit 0x10000 marks a 30-day leap month.
const LUNAR_INFO: [u32; 150] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2,
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977,
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970,
    0x06566, 0x0d4a0, 0x0ea50, 0x06e95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950,
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557,
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5b0, 0x14573, 0x052b0, 0x0a9a8, 0x0e950, 0x06aa0,
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0,
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b6a0, 0x195a6,
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570,
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x05ac0, 0x0ab60, 0x096d5, 0x092e0,
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5,
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930,
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530,
    0x05aa0, 0x076a3, 0x096d0, 0x04afb, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45,
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0,
];

/// Lunar new year of 1900 in the solar calendar.
fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 31).unwrap_or_default()
}

fn info(year: i32) -> u32 {
    LUNAR_INFO[(year - FIRST_YEAR) as usize]
}

fn leap_month(year: i32) -> u32 {
    info(year) & 0xf
}

fn leap_month_days(year: i32) -> i64 {
    if leap_month(year) == 0 {
        0
    } else if info(year) & 0x10000 != 0 {
        30
    } else {
        29
    }
}

fn month_days(year: i32, month: u32) -> i64 {
    if info(year) & (0x10000 >> month) != 0 {
        30
    } else {
        29
    }
}

fn year_days(year: i32) -> i64 {
    let mut days = 348;
    let mut bit = 0x8000;
    while bit > 0x8 {
        if info(year) & bit != 0 {
            days += 1;
        }
        bit >>= 1;
    }
    days + leap_month_days(year)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LunarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// True when the date falls in the intercalary (leap) month.
    #[serde(default)]
    pub is_leap_month: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalendarSystem {
    Lunar,
    Solar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConvertedDate {
    Lunar(LunarDate),
    Solar(NaiveDate),
}

/// Lunisolar date for a solar calendar date within 1900..=2049.
pub fn solar_to_lunar(date: NaiveDate) -> LifeCalcResult<LunarDate> {
    let mut offset = (date - epoch()).num_days();
    if offset < 0 {
        return Err(LifeCalcError::DateError(format!(
            "{date} predates the lunar table epoch 1900-01-31"
        )));
    }

    let mut year = FIRST_YEAR;
    loop {
        if year > LAST_YEAR {
            return Err(LifeCalcError::DateError(format!(
                "{date} is past the lunar table end ({LAST_YEAR})"
            )));
        }
        let days = year_days(year);
        if offset < days {
            break;
        }
        offset -= days;
        year += 1;
    }

    let leap = leap_month(year);
    let mut month = 1u32;
    let mut is_leap_month = false;
    loop {
        let days = month_days(year, month);
        if offset < days {
            break;
        }
        offset -= days;
        if month == leap {
            let extra = leap_month_days(year);
            if offset < extra {
                is_leap_month = true;
                break;
            }
            offset -= extra;
        }
        month += 1;
    }

    Ok(LunarDate {
        year,
        month,
        day: offset as u32 + 1,
        is_leap_month,
    })
}

/// Solar calendar date for a lunisolar date within 1900..=2049.
pub fn lunar_to_solar(lunar: &LunarDate) -> LifeCalcResult<NaiveDate> {
    if !(FIRST_YEAR..=LAST_YEAR).contains(&lunar.year) {
        return Err(LifeCalcError::DateError(format!(
            "lunar year {} outside the table range {FIRST_YEAR}..={LAST_YEAR}",
            lunar.year
        )));
    }
    if !(1..=12).contains(&lunar.month) {
        return Err(LifeCalcError::DateError(format!(
            "lunar month {} out of range",
            lunar.month
        )));
    }
    if lunar.is_leap_month && leap_month(lunar.year) != lunar.month {
        return Err(LifeCalcError::DateError(format!(
            "lunar year {} has no leap month {}",
            lunar.year, lunar.month
        )));
    }
    let days_in_month = if lunar.is_leap_month {
        leap_month_days(lunar.year)
    } else {
        month_days(lunar.year, lunar.month)
    };
    if !(1..=days_in_month as u32).contains(&lunar.day) {
        return Err(LifeCalcError::DateError(format!(
            "lunar day {} out of range for {}-{:02}",
            lunar.day, lunar.year, lunar.month
        )));
    }

    let mut offset: i64 = 0;
    for y in FIRST_YEAR..lunar.year {
        offset += year_days(y);
    }
    let leap = leap_month(lunar.year);
    for m in 1..lunar.month {
        offset += month_days(lunar.year, m);
        if m == leap {
            offset += leap_month_days(lunar.year);
        }
    }
    if lunar.is_leap_month {
        offset += month_days(lunar.year, lunar.month);
    }
    offset += lunar.day as i64 - 1;

    Ok(epoch() + Duration::days(offset))
}

/// One-call conversion in either direction.
pub fn convert_date(input: ConvertedDate) -> LifeCalcResult<ConvertedDate> {
    match input {
        ConvertedDate::Solar(date) => solar_to_lunar(date).map(ConvertedDate::Lunar),
        ConvertedDate::Lunar(lunar) => lunar_to_solar(&lunar).map(ConvertedDate::Solar),
    }
}
