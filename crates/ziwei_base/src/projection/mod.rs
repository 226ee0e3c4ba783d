//! Temporal projections over a palace ring.
//!
//! Each projection anchors a life house somewhere on the ring and walks
//! the canonical house sequence forward from it. Projections copy what
//! they need and never mutate the ring they read.
//!
//! - [`major_limits`]: twelve ten-year periods (大限)
//! - [`minor_limit`] / [`minor_limits`]: one house per year of age (小限)
//! - [`annual_fortune`]: year ring (流年)
//! - [`monthly_fortune`]: month ring inside a year (流月)
//! - [`daily_fortune`]: day ring inside a month (流日)

pub mod fortune;
pub mod limits;

use serde::Serialize;

use crate::error::ZiweiError;
use crate::ganzhi::{Branch, Element, Stem};
use crate::palace::{HouseName, Palace};
use crate::star::Star;

pub use fortune::{
    annual_branch, annual_fortune, annual_fortune_at, daily_fortune, monthly_fortune,
};
pub use limits::{
    MAX_MINOR_YEARS, MajorLimits, MajorPeriod, MinorLimit, MinorLimits, major_limits, minor_limit,
    minor_limits,
};

/// The cascade of projection levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectionKind {
    Major,
    Minor,
    Annual,
    Monthly,
    Daily,
}

impl ProjectionKind {
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Major => "大限",
            Self::Minor => "小限",
            Self::Annual => "流年",
            Self::Monthly => "流月",
            Self::Daily => "流日",
        }
    }
}

/// One house of a year/month/day ring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectedHouse {
    /// House name inside this projection.
    pub house: HouseName,
    pub branch: Branch,
    pub stem: Stem,
    pub element: Element,
    pub stars: Vec<Star>,
    /// House the natal ring gives this branch.
    pub natal_house: HouseName,
    /// House the annual ring gives this branch (monthly and daily only).
    pub annual_house: Option<HouseName>,
    /// House the monthly ring gives this branch (daily only).
    pub monthly_house: Option<HouseName>,
}

impl ProjectedHouse {
    pub(crate) fn from_palace(house: HouseName, palace: &Palace) -> Self {
        Self {
            house,
            branch: palace.branch,
            stem: palace.stem,
            element: palace.element,
            stars: palace.stars.clone(),
            natal_house: palace.house,
            annual_house: None,
            monthly_house: None,
        }
    }
}

/// A year, month or day ring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Projection {
    pub kind: ProjectionKind,
    /// What the ring was cast for, read according to `kind`:
    ///
    /// - `Annual`: the Gregorian year (e.g. 2024)
    /// - `Monthly`: the lunar month, 1..=12
    /// - `Daily`: the lunar day, 1..=30
    pub target: i32,
    /// Houses in projection order, 命宮 first.
    pub houses: Vec<ProjectedHouse>,
}

impl Projection {
    /// Fails unless this is a complete ring of the `expected` kind.
    pub(crate) fn require_kind(&self, expected: ProjectionKind) -> Result<(), ZiweiError> {
        if self.kind != expected {
            return Err(ZiweiError::ProjectionKind {
                expected,
                found: self.kind,
            });
        }
        if self.houses.len() != 12 {
            return Err(ZiweiError::IncompleteProjection {
                kind: self.kind,
                houses: self.houses.len(),
            });
        }
        Ok(())
    }

    /// Branch of this projection's life house.
    pub fn life_branch(&self) -> Option<Branch> {
        self.houses.first().map(|h| h.branch)
    }

    pub fn house_at(&self, branch: Branch) -> Option<&ProjectedHouse> {
        self.houses.iter().find(|h| h.branch == branch)
    }

    pub fn by_house(&self, house: HouseName) -> Option<&ProjectedHouse> {
        self.houses.iter().find(|h| h.house == house)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::palace::PalaceRing;

    fn annual() -> Projection {
        let ring = PalaceRing::new(Branch::Yin, Stem::Jia);
        fortune::annual_fortune(&ring, 2024)
    }

    #[test]
    fn require_kind_matches() {
        let a = annual();
        assert_eq!(a.require_kind(ProjectionKind::Annual), Ok(()));
        assert_eq!(
            a.require_kind(ProjectionKind::Monthly),
            Err(ZiweiError::ProjectionKind {
                expected: ProjectionKind::Monthly,
                found: ProjectionKind::Annual,
            })
        );
    }

    #[test]
    fn require_kind_rejects_truncated_ring() {
        let mut a = annual();
        a.houses.truncate(5);
        assert_eq!(
            a.require_kind(ProjectionKind::Annual),
            Err(ZiweiError::IncompleteProjection {
                kind: ProjectionKind::Annual,
                houses: 5,
            })
        );
    }
}
