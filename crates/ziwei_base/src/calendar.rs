//! Calendar facts supplied by an external lunar-calendar provider.
//!
//! The engine performs no Gregorian to lunar conversion. It reads the
//! lunar month and day, the year's sexagenary label and the clock hour;
//! every other field is carried through for callers.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ZiweiError;
use crate::ganzhi::{Branch, Stem, hour_branch, parse_cyclic_label};

/// Biological sex flag used for limit directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Male => "男",
            Self::Female => "女",
        }
    }

    pub const fn is_male(self) -> bool {
        matches!(self, Self::Male)
    }
}

impl Display for Sex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.glyph())
    }
}

/// Accepts `M`/`F`, `male`/`female` or `男`/`女`.
impl FromStr for Sex {
    type Err = ZiweiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "m" | "male" | "男" => Ok(Self::Male),
            "f" | "female" | "女" => Ok(Self::Female),
            _ => Err(ZiweiError::InvalidSex(s.to_string())),
        }
    }
}

impl TryFrom<String> for Sex {
    type Error = ZiweiError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Civil calendar date, carried for reference only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GregorianDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

/// A birth (or query) moment as delivered by the calendar collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarFact {
    /// Civil date, if the provider supplied one.
    #[serde(default)]
    pub gregorian_date: Option<GregorianDate>,
    /// Clock hour, 0..=23.
    pub hour: u8,
    /// Clock minute, 0..=59.
    #[serde(default)]
    pub minute: u8,
    #[serde(default)]
    pub lunar_year: Option<i32>,
    /// Lunar month, 1..=12.
    pub lunar_month: u8,
    /// Lunar day, 1..=30.
    pub lunar_day: u8,
    #[serde(default)]
    pub leap_month: bool,
    /// Sexagenary year label, e.g. `甲子`.
    pub year_label: String,
    #[serde(default)]
    pub month_label: Option<String>,
    #[serde(default)]
    pub day_label: Option<String>,
    #[serde(default)]
    pub hour_label: Option<String>,
    #[serde(default)]
    pub solar_term: Option<String>,
}

impl CalendarFact {
    /// A fact carrying only the fields the engine reads.
    pub fn new(
        year_label: impl Into<String>,
        lunar_month: u8,
        lunar_day: u8,
        hour: u8,
        minute: u8,
    ) -> Self {
        Self {
            gregorian_date: None,
            hour,
            minute,
            lunar_year: None,
            lunar_month,
            lunar_day,
            leap_month: false,
            year_label: year_label.into(),
            month_label: None,
            day_label: None,
            hour_label: None,
            solar_term: None,
        }
    }

    pub fn with_gregorian_date(mut self, year: i32, month: u8, day: u8) -> Self {
        self.gregorian_date = Some(GregorianDate { year, month, day });
        self
    }

    pub fn with_lunar_year(mut self, year: i32) -> Self {
        self.lunar_year = Some(year);
        self
    }

    pub fn with_leap_month(mut self, leap: bool) -> Self {
        self.leap_month = leap;
        self
    }

    /// Year stem and branch from the year label.
    pub fn year_pillar(&self) -> Result<(Stem, Branch), ZiweiError> {
        parse_cyclic_label(&self.year_label)
    }

    /// Double-hour branch of the clock hour.
    pub fn hour_branch(&self) -> Result<Branch, ZiweiError> {
        hour_branch(self.hour)
    }

    /// Check every field the engine reads and return the resolved values.
    pub fn resolve(&self) -> Result<ResolvedFact, ZiweiError> {
        if !(1..=12).contains(&self.lunar_month) {
            return Err(ZiweiError::InvalidLunarMonth(self.lunar_month));
        }
        if !(1..=30).contains(&self.lunar_day) {
            return Err(ZiweiError::InvalidLunarDay(self.lunar_day));
        }
        if self.minute > 59 {
            return Err(ZiweiError::InvalidMinute(self.minute));
        }
        let (year_stem, year_branch) = self.year_pillar()?;
        Ok(ResolvedFact {
            year_stem,
            year_branch,
            lunar_month: self.lunar_month,
            lunar_day: self.lunar_day,
            hour_branch: self.hour_branch()?,
        })
    }
}

/// The validated subset of a [`CalendarFact`] that drives placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedFact {
    pub year_stem: Stem,
    pub year_branch: Branch,
    pub lunar_month: u8,
    pub lunar_day: u8,
    pub hour_branch: Branch,
}

fn numeral(c: char) -> Option<u8> {
    Some(match c {
        '一' => 1,
        '二' => 2,
        '三' => 3,
        '四' => 4,
        '五' => 5,
        '六' => 6,
        '七' => 7,
        '八' => 8,
        '九' => 9,
        '十' => 10,
        _ => return None,
    })
}

/// Read a Chinese numeral in 1..=30 (`十`, `十一`, `二十`, `廿三`, `卅`, ...).
fn parse_numeral(s: &str) -> Option<u8> {
    let chars: Vec<char> = s.chars().collect();
    match chars.as_slice() {
        ['卅'] => Some(30),
        ['廿'] => Some(20),
        ['廿', d] => numeral(*d).filter(|n| *n < 10).map(|n| 20 + n),
        ['十', d] => numeral(*d).filter(|n| *n < 10).map(|n| 10 + n),
        [t, '十'] => numeral(*t).filter(|n| (2..=3).contains(n)).map(|n| n * 10),
        [t, '十', d] => {
            let tens = numeral(*t).filter(|n| *n == 2)?;
            numeral(*d).filter(|n| *n < 10).map(|n| tens * 10 + n)
        }
        [c] => numeral(*c),
        _ => None,
    }
}

/// Parse a lunar day written as `初一`..`三十`, `廿X`, `卅` or digits.
/// A trailing `日` is ignored.
pub fn parse_lunar_day(text: &str) -> Result<u8, ZiweiError> {
    let bad = || ZiweiError::InvalidLunarText(text.to_string());
    let t = text.trim();
    let t = t.strip_suffix('日').unwrap_or(t);
    let day = if let Ok(n) = t.parse::<u8>() {
        n
    } else if let Some(rest) = t.strip_prefix('初') {
        let n = parse_numeral(rest).ok_or_else(bad)?;
        if n > 10 {
            return Err(bad());
        }
        n
    } else {
        parse_numeral(t).ok_or_else(bad)?
    };
    if !(1..=30).contains(&day) {
        return Err(ZiweiError::InvalidLunarDay(day));
    }
    Ok(day)
}

/// Parse a lunar month written as `正月`, `一月`..`十二月`, `冬月`,
/// `臘月` or digits. A leading `閏` is ignored; leap status travels
/// separately on [`CalendarFact::leap_month`].
pub fn parse_lunar_month(text: &str) -> Result<u8, ZiweiError> {
    let bad = || ZiweiError::InvalidLunarText(text.to_string());
    let t = text.trim();
    let t = t.strip_prefix('閏').unwrap_or(t);
    let t = t.strip_suffix('月').unwrap_or(t);
    let month = match t {
        "正" => 1,
        "冬" => 11,
        "臘" | "腊" => 12,
        "十一" => 11,
        "十二" => 12,
        _ => match t.parse::<u8>() {
            Ok(n) => n,
            Err(_) => {
                let mut chars = t.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => numeral(c).ok_or_else(bad)?,
                    _ => return Err(bad()),
                }
            }
        },
    };
    if !(1..=12).contains(&month) {
        return Err(ZiweiError::InvalidLunarMonth(month));
    }
    Ok(month)
}
