//! Chart session: a natal snapshot plus a working ring.
//!
//! Rotations and transformation overlays change the working ring only.
//! Projections read the working ring; [`Chart::reset`] restores the natal
//! one.

use tracing::debug;

use crate::builder::{NatalChart, build_chart};
use crate::calendar::{CalendarFact, Sex};
use crate::divination::{Divination, divine_ring};
use crate::error::ZiweiError;
use crate::ganzhi::{Branch, Stem, minute_branch, parse_cyclic_label};
use crate::options::{AnnualAnchor, ChartOptions, TaichiMode};
use crate::palace::{PalaceRing, PalaceView};
use crate::projection::{
    MajorLimits, MinorLimit, MinorLimits, Projection, annual_branch, annual_fortune_at,
    daily_fortune, major_limits, minor_limit, minor_limits, monthly_fortune,
};
use crate::sihua::{TransformationRecord, apply_transformations, clear_transformations};
use crate::taichi::{TaichiMapping, rotate_in_place};

/// Minor-limit run length when none is requested.
pub const DEFAULT_MINOR_YEARS: u32 = 12;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chart {
    natal: NatalChart,
    working: PalaceRing,
    options: ChartOptions,
}

impl Chart {
    pub fn new(fact: &CalendarFact, sex: Sex, options: ChartOptions) -> Result<Self, ZiweiError> {
        let natal = build_chart(fact, sex, &options)?;
        Ok(Self::from_natal(natal, options))
    }

    pub fn from_natal(natal: NatalChart, options: ChartOptions) -> Self {
        let working = natal.ring.clone();
        Self {
            natal,
            working,
            options,
        }
    }

    pub fn natal(&self) -> &NatalChart {
        &self.natal
    }

    /// Current working ring.
    pub fn ring(&self) -> &PalaceRing {
        &self.working
    }

    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    pub fn views(&self) -> Vec<PalaceView> {
        self.working.views()
    }

    /// Restore the natal ring, dropping rotations and overlays.
    pub fn reset(&mut self) {
        self.working = self.natal.ring.clone();
    }

    /// Make `center` the working ring's 命宮.
    pub fn taichi(&mut self, center: Branch) -> TaichiMapping {
        if self.options.taichi == TaichiMode::FromNatal {
            self.reset();
        }
        rotate_in_place(&mut self.working, center)
    }

    /// Replace the working ring's tags with those of `stem`.
    pub fn apply_stem(&mut self, stem: Stem) -> Vec<TransformationRecord> {
        apply_transformations(&mut self.working, stem)
    }

    pub fn clear_transformations(&mut self) {
        clear_transformations(&mut self.working);
    }

    pub fn major_limits(&self) -> MajorLimits {
        major_limits(&self.working, self.natal.year_stem, self.natal.sex)
    }

    pub fn minor_limit(&self, age: u32) -> Result<MinorLimit, ZiweiError> {
        minor_limit(&self.working, self.natal.year_branch, self.natal.sex, age)
    }

    pub fn minor_limits(&self, years: u32) -> Result<MinorLimits, ZiweiError> {
        minor_limits(&self.working, self.natal.year_branch, self.natal.sex, years)
    }

    /// Branch carrying the annual 命宮 for `year`.
    ///
    /// Under [`AnnualAnchor::CyclicLabel`] a supplied label's branch wins;
    /// without one the 1900 epoch count is used.
    pub fn annual_branch(&self, year: i32, label: Option<&str>) -> Result<Branch, ZiweiError> {
        match (self.options.annual_anchor, label) {
            (AnnualAnchor::CyclicLabel, Some(label)) => Ok(parse_cyclic_label(label)?.1),
            (AnnualAnchor::CyclicLabel, None) => {
                debug!(year, "no year label supplied, counting from 1900");
                Ok(annual_branch(year))
            }
            (AnnualAnchor::Epoch1900, _) => Ok(annual_branch(year)),
        }
    }

    pub fn annual(&self, year: i32, label: Option<&str>) -> Result<Projection, ZiweiError> {
        let branch = self.annual_branch(year, label)?;
        Ok(annual_fortune_at(&self.working, branch, year))
    }

    pub fn monthly(
        &self,
        year: i32,
        label: Option<&str>,
        month: u8,
    ) -> Result<Projection, ZiweiError> {
        let annual = self.annual(year, label)?;
        monthly_fortune(&self.working, &annual, month)
    }

    pub fn daily(
        &self,
        year: i32,
        label: Option<&str>,
        month: u8,
        day: u8,
    ) -> Result<Projection, ZiweiError> {
        let annual = self.annual(year, label)?;
        let monthly = monthly_fortune(&self.working, &annual, month)?;
        daily_fortune(&self.working, &annual, &monthly, day)
    }

    /// Divination at `hour:minute` over the natal ring. The session is not changed.
    pub fn divine(&self, hour: u8, minute: u8) -> Result<Divination, ZiweiError> {
        let branch = minute_branch(hour, minute)?;
        Ok(divine_ring(&self.natal.ring, branch))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palace::HouseName;
    use crate::sihua::tagged_count;

    fn chart(options: ChartOptions) -> Chart {
        Chart::new(&CalendarFact::new("甲子", 1, 1, 0, 0), Sex::Male, options).unwrap()
    }

    #[test]
    fn from_natal_rotations_do_not_stack() {
        let mut c = chart(ChartOptions::default());
        c.taichi(Branch::Wu);
        let m = c.taichi(Branch::Shen);
        assert_eq!(c.ring().life_branch(), Branch::Shen);
        // Rotated from the natal ring, where 申 is 遷移.
        assert_eq!(m.entries[0].previous_house, HouseName::Travel);
    }

    #[test]
    fn compose_rotations_stack() {
        let mut c = chart(ChartOptions {
            taichi: TaichiMode::Compose,
            ..ChartOptions::default()
        });
        c.taichi(Branch::Wu);
        let m = c.taichi(Branch::Shen);
        assert_eq!(m.entries[0].previous_house, HouseName::Fortune);
    }

    #[test]
    fn reset_restores_natal() {
        let mut c = chart(ChartOptions::default());
        c.taichi(Branch::Wu);
        c.apply_stem(Stem::Geng);
        assert_ne!(c.ring(), &c.natal().ring);
        c.reset();
        assert_eq!(c.ring(), &c.natal().ring);
    }

    #[test]
    fn overlays_replace_each_other() {
        let mut c = chart(ChartOptions::default());
        let records = c.apply_stem(Stem::Yi);
        assert_eq!(
            tagged_count(c.ring()),
            records.iter().filter(|r| r.is_found()).count()
        );
        c.clear_transformations();
        assert_eq!(tagged_count(c.ring()), 0);
    }

    #[test]
    fn major_limits_follow_working_ring() {
        let c = chart(ChartOptions::default());
        let m = c.major_limits();
        assert_eq!(m.start_age, 6);
        assert_eq!(m.periods[0].branch, Branch::Yin);
        assert_eq!(c.minor_limits(DEFAULT_MINOR_YEARS).unwrap().limits.len(), 12);
        assert!(c.minor_limit(0).is_err());
    }

    #[test]
    fn annual_anchor_modes() {
        let epoch = chart(ChartOptions::default());
        let a = epoch.annual(2024, Some("甲子")).unwrap();
        assert_eq!(a.life_branch(), Some(Branch::Chen));

        let labelled = chart(ChartOptions {
            annual_anchor: AnnualAnchor::CyclicLabel,
            ..ChartOptions::default()
        });
        let a = labelled.annual(2024, Some("甲子")).unwrap();
        assert_eq!(a.life_branch(), Some(Branch::Zi));
        let a = labelled.annual(2024, None).unwrap();
        assert_eq!(a.life_branch(), Some(Branch::Chen));
        assert!(labelled.annual(2024, Some("甲丑")).is_err());
    }

    #[test]
    fn cascade_through_session() {
        let c = chart(ChartOptions::default());
        let d = c.daily(2024, None, 1, 1).unwrap();
        assert_eq!(d.life_branch(), Some(Branch::Si));
        assert!(c.monthly(2024, None, 0).is_err());
    }

    #[test]
    fn divination_leaves_session_alone() {
        let c = chart(ChartOptions::default());
        let before = c.ring().clone();
        let d = c.divine(10, 25).unwrap();
        assert_eq!(d.ring.life_branch(), Branch::Shen);
        assert_eq!(c.ring(), &before);
    }
}
