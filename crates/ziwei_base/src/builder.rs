//! Natal chart construction.
//!
//! Placement runs in a fixed order:
//! 1. life-house branch (寅 forward to the birth month, then back by the hour)
//! 2. life-house stem (month stem + 2, kept as metadata)
//! 3. twelve palaces with names, stems and elements
//! 4. bureau and 紫微
//! 5. the remaining main stars from the basic chart
//! 6. the eight auxiliary tables
//! 7. body house
//! 8. optional natal four transformations

use serde::Serialize;
use tracing::{debug, info};

use crate::calendar::{CalendarFact, Sex};
use crate::error::ZiweiError;
use crate::ganzhi::{Branch, Stem, month_stem};
use crate::options::ChartOptions;
use crate::palace::{HouseName, PalaceRing};
use crate::sihua::{TransformationRecord, apply_transformations};
use crate::star::{HOUR_STARS, Star, StarName};
use crate::tables::{
    Bureau, auxiliary_placements, body_house, bureau_for, hour_dependent_stars, main_star_layout,
    purple_star_branch,
};

/// A built chart together with every input it was resolved from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NatalChart {
    pub year_stem: Stem,
    pub year_branch: Branch,
    pub lunar_month: u8,
    pub lunar_day: u8,
    pub hour_branch: Branch,
    pub sex: Sex,
    pub life_branch: Branch,
    /// Month stem + 2. Palace stems come from the palace-stem table instead.
    pub life_stem: Stem,
    pub bureau: Bureau,
    pub purple_branch: Branch,
    pub body_house: HouseName,
    pub body_branch: Branch,
    /// Natal year-stem transformations, empty when disabled.
    pub transformations: Vec<TransformationRecord>,
    pub ring: PalaceRing,
}

/// Life-house branch: forward from 寅 by `lunar_month - 1`, then back by
/// the hour branch's ordinal.
pub fn life_branch(lunar_month: u8, hour_branch: Branch) -> Result<Branch, ZiweiError> {
    if !(1..=12).contains(&lunar_month) {
        return Err(ZiweiError::InvalidLunarMonth(lunar_month));
    }
    let month_house = Branch::Yin.offset(lunar_month as i32 - 1);
    Ok(month_house.offset(-(hour_branch.index() as i32)))
}

/// Build the natal ring. Natal transformations are applied.
pub fn build(fact: &CalendarFact, sex: Sex) -> Result<PalaceRing, ZiweiError> {
    Ok(build_chart(fact, sex, &ChartOptions::default())?.ring)
}

/// Build the natal ring and keep the resolved inputs alongside it.
pub fn build_chart(
    fact: &CalendarFact,
    sex: Sex,
    options: &ChartOptions,
) -> Result<NatalChart, ZiweiError> {
    let resolved = fact.resolve()?;
    let year_stem = resolved.year_stem;

    let life_branch = life_branch(resolved.lunar_month, resolved.hour_branch)?;
    let life_stem = month_stem(year_stem, resolved.lunar_month)?.offset(2);
    debug!(
        life_branch = life_branch.glyph(),
        life_stem = life_stem.glyph(),
        "life house resolved"
    );

    let mut ring = PalaceRing::new(life_branch, year_stem);

    let bureau = bureau_for(year_stem, life_branch);
    let purple_branch = purple_star_branch(bureau, resolved.lunar_day)?;
    ring.place(purple_branch, Star::plain(StarName::ZiWei));
    debug!(
        bureau = bureau.glyph(),
        purple_branch = purple_branch.glyph(),
        "purple star placed"
    );

    for &(branch, name, strength) in main_star_layout(purple_branch) {
        ring.place(branch, Star::with_strength(name, strength));
    }
    debug!("main stars placed");

    let aux = auxiliary_placements(
        year_stem,
        resolved.year_branch,
        resolved.lunar_month,
        resolved.hour_branch,
    )?;
    for (name, branch) in aux {
        ring.place(branch, Star::plain(name));
    }
    debug!("auxiliary stars placed");

    let body_house = body_house(resolved.hour_branch);
    ring.mark_body(body_house);
    let body_branch = ring.branch_of(body_house);

    let transformations = if options.apply_natal_transformations {
        apply_transformations(&mut ring, year_stem)
    } else {
        Vec::new()
    };

    info!(
        year = fact.year_label.as_str(),
        life = life_branch.glyph(),
        bureau = bureau.glyph(),
        "natal chart built"
    );

    Ok(NatalChart {
        year_stem,
        year_branch: resolved.year_branch,
        lunar_month: resolved.lunar_month,
        lunar_day: resolved.lunar_day,
        hour_branch: resolved.hour_branch,
        sex,
        life_branch,
        life_stem,
        bureau,
        purple_branch,
        body_house,
        body_branch,
        transformations,
        ring,
    })
}

/// Move the six hour-dependent stars (文昌, 文曲, 地空, 地劫, 火星, 鈴星)
/// to the positions they would take at `branch`. A transformation tag on
/// a moved star travels with it.
pub fn relocate_hour_stars(ring: &mut PalaceRing, year_branch: Branch, branch: Branch) {
    let removed: Vec<Star> = HOUR_STARS
        .iter()
        .filter_map(|&name| ring.remove(name))
        .collect();
    for (name, target) in hour_dependent_stars(year_branch, branch) {
        let transformation = removed
            .iter()
            .find(|s| s.name == name)
            .and_then(|s| s.transformation);
        ring.place(
            target,
            Star {
                name,
                strength: None,
                transformation,
            },
        );
    }
    debug!(branch = branch.glyph(), "hour stars relocated");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::star::Transformation;

    fn reference() -> NatalChart {
        let fact = CalendarFact::new("甲子", 1, 1, 0, 0);
        build_chart(&fact, Sex::Male, &ChartOptions::default()).unwrap()
    }

    #[test]
    fn life_branch_two_ends_meet() {
        assert_eq!(life_branch(1, Branch::Zi), Ok(Branch::Yin));
        assert_eq!(life_branch(1, Branch::Yin), Ok(Branch::Zi));
        assert_eq!(life_branch(12, Branch::Hai), Ok(Branch::Yin));
        assert_eq!(life_branch(6, Branch::Mao), Ok(Branch::Chen));
        assert!(life_branch(0, Branch::Zi).is_err());
    }

    #[test]
    fn reference_metadata() {
        let c = reference();
        assert_eq!(c.life_branch, Branch::Yin);
        assert_eq!(c.life_stem, Stem::Wu);
        assert_eq!(c.bureau, Bureau::Fire6);
        assert_eq!(c.purple_branch, Branch::You);
        assert_eq!(c.body_house, HouseName::Life);
        assert_eq!(c.body_branch, Branch::Yin);
        assert_eq!(c.transformations.len(), 4);
    }

    #[test]
    fn every_star_placed_once() {
        let c = reference();
        let names = c.ring.star_names();
        assert_eq!(names.len(), 30);
        let mut dedup = names.clone();
        dedup.dedup();
        assert_eq!(dedup.len(), 30);
    }

    #[test]
    fn purple_keeps_table_strength() {
        let c = reference();
        let zw = c.ring.palace(Branch::You).star(StarName::ZiWei).unwrap();
        assert_eq!(zw.to_string(), "紫微（旺地）");
    }

    #[test]
    fn transformations_optional() {
        let fact = CalendarFact::new("甲子", 1, 1, 0, 0);
        let opts = ChartOptions {
            apply_natal_transformations: false,
            ..ChartOptions::default()
        };
        let c = build_chart(&fact, Sex::Male, &opts).unwrap();
        assert!(c.transformations.is_empty());
        assert!(
            c.ring
                .iter()
                .flat_map(|p| p.stars.iter())
                .all(|s| s.transformation.is_none())
        );
    }

    #[test]
    fn bad_inputs_fail_whole_build() {
        let fact = CalendarFact::new("甲子", 1, 31, 0, 0);
        assert_eq!(
            build(&fact, Sex::Male),
            Err(ZiweiError::InvalidLunarDay(31))
        );
        let fact = CalendarFact::new("甲子", 13, 1, 0, 0);
        assert_eq!(
            build(&fact, Sex::Female),
            Err(ZiweiError::InvalidLunarMonth(13))
        );
    }

    #[test]
    fn relocation_moves_hour_stars_and_tags() {
        // 辛 tags 文曲 (科) and 文昌 (忌).
        let fact = CalendarFact::new("辛未", 3, 10, 0, 0);
        let mut c = build_chart(&fact, Sex::Female, &ChartOptions::default()).unwrap();
        let before = c.ring.star_names();
        relocate_hour_stars(&mut c.ring, c.year_branch, Branch::Wu);
        assert_eq!(c.ring.star_names(), before);
        let qu = c.ring.locate(StarName::WenQu).unwrap();
        assert_eq!(qu.branch, Branch::Xu);
        assert_eq!(
            qu.star(StarName::WenQu).unwrap().transformation,
            Some(Transformation::Ke)
        );
        let chang = c.ring.locate(StarName::WenChang).unwrap();
        assert_eq!(chang.branch, Branch::Chen);
        assert_eq!(
            chang.star(StarName::WenChang).unwrap().transformation,
            Some(Transformation::Ji)
        );
        // 未 year: 亥卯未 trine, fire starts at 酉, bell at 戌.
        assert_eq!(c.ring.locate(StarName::HuoXing).unwrap().branch, Branch::Mao);
        assert_eq!(c.ring.locate(StarName::LingXing).unwrap().branch, Branch::Chen);
    }
}
