//! Property tests over randomly generated valid birth data.

use proptest::prelude::*;
use ziwei_base::tables::bureau_for;
use ziwei_base::{
    ALL_BRANCHES, ALL_HOUSES, ALL_STEMS, Branch, Bureau, CalendarFact, PalaceRing, Sex, Stem,
    annual_branch, apply_transformations, build, clear_transformations, major_limits, rotate,
};

fn label(n: usize) -> String {
    format!("{}{}", ALL_STEMS[n % 10], ALL_BRANCHES[n % 12])
}

fn sex(male: bool) -> Sex {
    if male { Sex::Male } else { Sex::Female }
}

prop_compose! {
    fn birth()(
        n in 0usize..60,
        month in 1u8..=12,
        day in 1u8..=30,
        hour in 0u8..=23,
        male in any::<bool>(),
    ) -> (CalendarFact, Sex, Stem) {
        (CalendarFact::new(label(n), month, day, hour, 0), sex(male), ALL_STEMS[n % 10])
    }
}

fn ring_of(fact: &CalendarFact, sex: Sex) -> PalaceRing {
    build(fact, sex).unwrap()
}

proptest! {
    #[test]
    fn houses_and_branches_permute((fact, sex, _) in birth()) {
        let ring = ring_of(&fact, sex);
        let mut branches: Vec<Branch> = ring.iter().map(|p| p.branch).collect();
        branches.sort();
        prop_assert_eq!(branches, ALL_BRANCHES.to_vec());
        let mut houses: Vec<_> = ring.iter().map(|p| p.house).collect();
        houses.sort();
        let mut all = ALL_HOUSES.to_vec();
        all.sort();
        prop_assert_eq!(houses, all);
        prop_assert_eq!(ring.star_names().len(), 30);
    }

    #[test]
    fn transformations_idempotent((fact, sex, _) in birth(), s in 0usize..10) {
        let mut ring = ring_of(&fact, sex);
        clear_transformations(&mut ring);
        let first = apply_transformations(&mut ring, ALL_STEMS[s]);
        let views_first = ring.views();
        let second = apply_transformations(&mut ring, ALL_STEMS[s]);
        prop_assert_eq!(first, second);
        prop_assert_eq!(views_first, ring.views());
    }

    #[test]
    fn rotate_to_own_life_is_identity((fact, sex, _) in birth()) {
        let ring = ring_of(&fact, sex);
        let (out, mapping) = rotate(&ring, ring.life_branch());
        prop_assert_eq!(&out, &ring);
        prop_assert!(mapping.is_identity());
    }

    #[test]
    fn rotate_preserves_stars((fact, sex, _) in birth(), b in 0u8..12) {
        let ring = ring_of(&fact, sex);
        let (out, _) = rotate(&ring, Branch::from_index(b));
        prop_assert_eq!(out.star_names(), ring.star_names());
        prop_assert_eq!(out.life_branch(), Branch::from_index(b));
    }

    #[test]
    fn major_limits_tile_120_years((fact, sex, stem) in birth()) {
        let ring = ring_of(&fact, sex);
        let limits = major_limits(&ring, stem, sex);
        prop_assert_eq!(limits.periods.len(), 12);
        let mut next = limits.start_age;
        for p in &limits.periods {
            prop_assert_eq!(p.age_start, next);
            prop_assert_eq!(p.age_end, p.age_start + 9);
            next = p.age_end + 1;
        }
        prop_assert_eq!(next, limits.start_age + 120);
        let mut branches: Vec<Branch> = limits.periods.iter().map(|p| p.branch).collect();
        branches.sort();
        prop_assert_eq!(branches, ALL_BRANCHES.to_vec());
    }
}

#[test]
fn jia_zi_is_water_two() {
    let bureau = bureau_for(Stem::Jia, Branch::Zi);
    assert_eq!(bureau, Bureau::Water2);
    assert_eq!(bureau.start_age(), 2);
}

#[test]
fn annual_epoch() {
    assert_eq!(annual_branch(1900), Branch::Zi);
    assert_eq!(annual_branch(1912), Branch::Zi);
    assert_eq!(annual_branch(1901), Branch::Chou);
}
