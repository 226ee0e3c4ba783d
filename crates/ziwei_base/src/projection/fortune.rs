//! Annual (流年), monthly (流月) and daily (流日) fortunes.
//!
//! Annual: the year branch carries the annual 命宮.
//! Monthly: month 1 sits where the annual ring holds the house that the
//! natal ring puts on 寅; month M is M-1 branches further on.
//! Daily: day 1 sits one branch after the monthly 命宮; day D is D-1
//! branches further on.

use tracing::debug;

use crate::error::ZiweiError;
use crate::ganzhi::Branch;
use crate::palace::{HouseName, PalaceRing};

use super::{ProjectedHouse, Projection, ProjectionKind};

/// Year branch counted from 子 at 1900.
pub const fn annual_branch(year: i32) -> Branch {
    Branch::Zi.offset(year - 1900)
}

fn walk(ring: &PalaceRing, kind: ProjectionKind, target: i32, life: Branch) -> Projection {
    let houses = (0..12u8)
        .map(|i| {
            let palace = ring.palace(life.offset(i as i32));
            ProjectedHouse::from_palace(HouseName::from_index(i), palace)
        })
        .collect();
    Projection {
        kind,
        target,
        houses,
    }
}

/// Annual fortune for a Gregorian year.
pub fn annual_fortune(ring: &PalaceRing, year: i32) -> Projection {
    annual_fortune_at(ring, annual_branch(year), year)
}

/// Annual fortune with an explicit year branch.
pub fn annual_fortune_at(ring: &PalaceRing, year_branch: Branch, year: i32) -> Projection {
    debug!(year, branch = year_branch.glyph(), "annual fortune");
    walk(ring, ProjectionKind::Annual, year, year_branch)
}

/// Monthly fortune inside `annual`.
pub fn monthly_fortune(
    ring: &PalaceRing,
    annual: &Projection,
    month: u8,
) -> Result<Projection, ZiweiError> {
    if !(1..=12).contains(&month) {
        return Err(ZiweiError::InvalidTargetMonth(month));
    }
    annual.require_kind(ProjectionKind::Annual)?;
    let natal_at_yin = ring.palace(Branch::Yin).house;
    let anchor = annual
        .by_house(natal_at_yin)
        .map(|h| h.branch)
        .ok_or(ZiweiError::IncompleteProjection {
            kind: annual.kind,
            houses: annual.houses.len(),
        })?;
    let life = anchor.offset(month as i32 - 1);
    debug!(
        month,
        anchor = anchor.glyph(),
        life = life.glyph(),
        "monthly fortune"
    );

    let mut out = walk(ring, ProjectionKind::Monthly, month as i32, life);
    for h in &mut out.houses {
        h.annual_house = annual.house_at(h.branch).map(|a| a.house);
    }
    Ok(out)
}

/// Daily fortune inside `monthly` (and its `annual`).
pub fn daily_fortune(
    ring: &PalaceRing,
    annual: &Projection,
    monthly: &Projection,
    day: u8,
) -> Result<Projection, ZiweiError> {
    if !(1..=30).contains(&day) {
        return Err(ZiweiError::InvalidTargetDay(day));
    }
    annual.require_kind(ProjectionKind::Annual)?;
    monthly.require_kind(ProjectionKind::Monthly)?;
    let monthly_life = monthly.life_branch().ok_or(ZiweiError::IncompleteProjection {
        kind: monthly.kind,
        houses: monthly.houses.len(),
    })?;
    let anchor = monthly_life.next();
    let life = anchor.offset(day as i32 - 1);
    debug!(day, anchor = anchor.glyph(), life = life.glyph(), "daily fortune");

    let mut out = walk(ring, ProjectionKind::Daily, day as i32, life);
    for h in &mut out.houses {
        let in_month = monthly.house_at(h.branch);
        h.monthly_house = in_month.map(|m| m.house);
        h.annual_house = in_month
            .and_then(|m| m.annual_house)
            .or_else(|| annual.house_at(h.branch).map(|a| a.house));
    }
    Ok(out)
}
