//! Tables driving the body house and the limit projections.

use crate::calendar::Sex;
use crate::ganzhi::{Branch, Stem, TrineGroup};
use crate::palace::HouseName;

/// Walking direction around the ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Forward => "順行",
            Self::Backward => "逆行",
        }
    }

    /// +1 or -1.
    pub const fn sign(self) -> i32 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

/// Body house by hour branch: opposite branches share a house.
pub const fn body_house(hour_branch: Branch) -> HouseName {
    match hour_branch.index() % 6 {
        0 => HouseName::Life,
        1 => HouseName::Fortune,
        2 => HouseName::Career,
        3 => HouseName::Travel,
        4 => HouseName::Wealth,
        _ => HouseName::Spouse,
    }
}

/// Major limits run forward for yang-male and yin-female charts.
pub const fn major_limit_direction(year_stem: Stem, sex: Sex) -> Direction {
    if year_stem.is_yang() == sex.is_male() {
        Direction::Forward
    } else {
        Direction::Backward
    }
}

/// Branch where the age-1 minor limit sits, by year-branch trine.
pub const fn minor_limit_start(year_branch: Branch) -> Branch {
    match year_branch.trine_group() {
        TrineGroup::YinWuXu => Branch::Chen,
        TrineGroup::ShenZiChen => Branch::Xu,
        TrineGroup::SiYouChou => Branch::Wei,
        TrineGroup::HaiMaoWei => Branch::Chou,
    }
}

/// Minor limits run forward for men and backward for women.
pub const fn minor_limit_direction(sex: Sex) -> Direction {
    if sex.is_male() {
        Direction::Forward
    } else {
        Direction::Backward
    }
}
