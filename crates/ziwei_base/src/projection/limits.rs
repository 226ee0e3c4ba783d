//! Major (大限) and minor (小限) limits.
//!
//! Major limits: start age from the bureau of (year stem, life branch);
//! twelve ten-year periods walk from the life house, forward for
//! yang-male and yin-female charts, backward otherwise.
//!
//! Minor limits: age 1 sits on a branch fixed by the year-branch trine;
//! each later age steps one branch, forward for men, backward for women.

use serde::Serialize;

use crate::calendar::Sex;
use crate::error::ZiweiError;
use crate::ganzhi::{Branch, Element, Stem};
use crate::palace::{HouseName, PalaceRing};
use crate::star::Star;
use crate::tables::{
    Bureau, Direction, bureau_for, major_limit_direction, minor_limit_direction,
    minor_limit_start,
};

/// Years covered by one major limit.
pub const MAJOR_PERIOD_YEARS: u32 = 10;

/// Longest run of minor limits: the span the twelve major limits cover.
pub const MAX_MINOR_YEARS: u32 = 12 * MAJOR_PERIOD_YEARS;

/// One ten-year period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MajorPeriod {
    /// 1-indexed position in the sequence.
    pub order: u8,
    pub house: HouseName,
    pub branch: Branch,
    pub stem: Stem,
    pub element: Element,
    pub stars: Vec<Star>,
    /// First age, inclusive.
    pub age_start: u32,
    /// Last age, inclusive.
    pub age_end: u32,
}

impl MajorPeriod {
    pub fn contains(&self, age: u32) -> bool {
        (self.age_start..=self.age_end).contains(&age)
    }
}

/// All twelve major limits of a ring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MajorLimits {
    pub bureau: Bureau,
    pub start_age: u32,
    pub direction: Direction,
    pub periods: Vec<MajorPeriod>,
}

impl MajorLimits {
    /// Period covering `age`, if the age falls inside the twelve periods.
    pub fn current(&self, age: u32) -> Option<&MajorPeriod> {
        self.periods.iter().find(|p| p.contains(age))
    }
}

/// Compute the twelve major limits from the ring's current life house.
pub fn major_limits(ring: &PalaceRing, year_stem: Stem, sex: Sex) -> MajorLimits {
    let life = ring.life_branch();
    let bureau = bureau_for(year_stem, life);
    let start_age = bureau.start_age();
    let direction = major_limit_direction(year_stem, sex);
    let periods = (0..12u8)
        .map(|i| {
            let palace = ring.palace(life.offset(direction.sign() * i as i32));
            let age_start = start_age + i as u32 * MAJOR_PERIOD_YEARS;
            MajorPeriod {
                order: i + 1,
                house: palace.house,
                branch: palace.branch,
                stem: palace.stem,
                element: palace.element,
                stars: palace.stars.clone(),
                age_start,
                age_end: age_start + MAJOR_PERIOD_YEARS - 1,
            }
        })
        .collect();
    MajorLimits {
        bureau,
        start_age,
        direction,
        periods,
    }
}

/// The house a single year of age falls on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MinorLimit {
    pub age: u32,
    pub house: HouseName,
    pub branch: Branch,
    pub stem: Stem,
    pub element: Element,
    pub stars: Vec<Star>,
}

/// A run of minor limits with their shared start and direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MinorLimits {
    pub start_branch: Branch,
    pub direction: Direction,
    pub limits: Vec<MinorLimit>,
}

fn minor_at(ring: &PalaceRing, start: Branch, direction: Direction, age: u32) -> MinorLimit {
    let steps = ((age - 1) % 12) as i32;
    let palace = ring.palace(start.offset(direction.sign() * steps));
    MinorLimit {
        age,
        house: palace.house,
        branch: palace.branch,
        stem: palace.stem,
        element: palace.element,
        stars: palace.stars.clone(),
    }
}

/// Minor limit for one age (ages start at 1).
pub fn minor_limit(
    ring: &PalaceRing,
    year_branch: Branch,
    sex: Sex,
    age: u32,
) -> Result<MinorLimit, ZiweiError> {
    if age == 0 {
        return Err(ZiweiError::InvalidAge(age));
    }
    let start = minor_limit_start(year_branch);
    Ok(minor_at(ring, start, minor_limit_direction(sex), age))
}

/// Minor limits for ages `1..=years`, with `years` in `1..=MAX_MINOR_YEARS`.
pub fn minor_limits(
    ring: &PalaceRing,
    year_branch: Branch,
    sex: Sex,
    years: u32,
) -> Result<MinorLimits, ZiweiError> {
    if !(1..=MAX_MINOR_YEARS).contains(&years) {
        return Err(ZiweiError::InvalidAge(years));
    }
    let start_branch = minor_limit_start(year_branch);
    let direction = minor_limit_direction(sex);
    let limits = (1..=years)
        .map(|age| minor_at(ring, start_branch, direction, age))
        .collect();
    Ok(MinorLimits {
        start_branch,
        direction,
        limits,
    })
}
