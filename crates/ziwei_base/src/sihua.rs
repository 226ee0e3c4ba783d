//! Four-transformation overlay (四化).
//!
//! Applying a stem tags up to four stars on the ring with 祿/權/科/忌.
//! Any previous tags are cleared first, so at most four stars carry a
//! tag at any time. A target star missing from the ring is not an error:
//! its record carries [`Placement::NotFound`] and a warning is logged.

use serde::Serialize;
use tracing::{debug, warn};

use crate::ganzhi::{Branch, Stem};
use crate::palace::{HouseName, PalaceRing};
use crate::star::{ALL_TRANSFORMATIONS, StarName, Transformation};
use crate::tables::transformation_stars;

/// Where a transformation target was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Placement {
    Found { house: HouseName, branch: Branch },
    NotFound,
}

/// One transformation applied (or attempted) on a ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TransformationRecord {
    pub stem: Stem,
    pub kind: Transformation,
    pub star: StarName,
    pub placement: Placement,
}

impl TransformationRecord {
    pub fn is_found(&self) -> bool {
        matches!(self.placement, Placement::Found { .. })
    }

    /// House holding the tagged star, if found.
    pub fn house(&self) -> Option<HouseName> {
        match self.placement {
            Placement::Found { house, .. } => Some(house),
            Placement::NotFound => None,
        }
    }
}

/// Strip every transformation tag, leaving strengths untouched.
pub fn clear_transformations(ring: &mut PalaceRing) {
    for palace in ring.iter_mut() {
        for star in &mut palace.stars {
            star.transformation = None;
        }
    }
}

/// Tag the four stars of `stem` and report where each landed.
///
/// Stars are searched in branch order; the first palace holding the
/// target name wins.
pub fn apply_transformations(ring: &mut PalaceRing, stem: Stem) -> Vec<TransformationRecord> {
    clear_transformations(ring);
    let targets = transformation_stars(stem);
    let mut records = Vec::with_capacity(4);
    for kind in ALL_TRANSFORMATIONS {
        let star = targets[kind.index() as usize];
        let placement = match ring.locate_mut(star) {
            Some((palace, i)) => {
                palace.stars[i].transformation = Some(kind);
                debug!(
                    stem = stem.glyph(),
                    star = star.glyph(),
                    kind = kind.glyph(),
                    house = palace.house.glyph(),
                    "transformation placed"
                );
                Placement::Found {
                    house: palace.house,
                    branch: palace.branch,
                }
            }
            None => {
                warn!(
                    stem = stem.glyph(),
                    star = star.glyph(),
                    kind = kind.glyph(),
                    "transformation target not on ring"
                );
                Placement::NotFound
            }
        };
        records.push(TransformationRecord {
            stem,
            kind,
            star,
            placement,
        });
    }
    records
}

/// Records for `stem` against the ring without tagging anything.
pub fn locate_transformations(ring: &PalaceRing, stem: Stem) -> Vec<TransformationRecord> {
    let targets = transformation_stars(stem);
    ALL_TRANSFORMATIONS
        .iter()
        .map(|&kind| {
            let star = targets[kind.index() as usize];
            let placement = match ring.locate(star) {
                Some(p) => Placement::Found {
                    house: p.house,
                    branch: p.branch,
                },
                None => Placement::NotFound,
            };
            TransformationRecord {
                stem,
                kind,
                star,
                placement,
            }
        })
        .collect()
}

/// Number of tagged stars currently on the ring.
pub fn tagged_count(ring: &PalaceRing) -> usize {
    ring.iter()
        .flat_map(|p| p.stars.iter())
        .filter(|s| s.transformation.is_some())
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::star::{Star, Strength};

    fn ring_with(stars: &[(Branch, StarName)]) -> PalaceRing {
        let mut r = PalaceRing::new(Branch::Yin, Stem::Jia);
        for (b, s) in stars {
            r.place(*b, Star::with_strength(*s, Strength::Neutral));
        }
        r
    }

    #[test]
    fn jia_tags_four_stars() {
        let mut r = ring_with(&[
            (Branch::Chou, StarName::LianZhen),
            (Branch::Si, StarName::PoJun),
            (Branch::Si, StarName::WuQu),
            (Branch::Wu, StarName::TaiYang),
        ]);
        let recs = apply_transformations(&mut r, Stem::Jia);
        assert_eq!(recs.len(), 4);
        assert!(recs.iter().all(TransformationRecord::is_found));
        assert_eq!(recs[0].star, StarName::LianZhen);
        assert_eq!(recs[0].kind, Transformation::Lu);
        assert_eq!(recs[3].house(), Some(HouseName::Career));
        assert_eq!(
            r.palace(Branch::Chou).stars[0].to_string(),
            "廉貞（平和）化祿"
        );
        assert_eq!(tagged_count(&r), 4);
    }

    #[test]
    fn missing_target_is_recorded_not_raised() {
        let mut r = ring_with(&[(Branch::Chou, StarName::LianZhen)]);
        let recs = apply_transformations(&mut r, Stem::Jia);
        assert!(recs[0].is_found());
        assert_eq!(recs[1].placement, Placement::NotFound);
        assert_eq!(recs[1].house(), None);
        assert_eq!(tagged_count(&r), 1);
    }

    #[test]
    fn reapply_clears_previous_stem() {
        let mut r = ring_with(&[
            (Branch::Chou, StarName::LianZhen),
            (Branch::Zi, StarName::TianJi),
        ]);
        apply_transformations(&mut r, Stem::Jia);
        apply_transformations(&mut r, Stem::Yi);
        let lz = r.palace(Branch::Chou).star(StarName::LianZhen).unwrap();
        assert_eq!(lz.transformation, None);
        assert_eq!(lz.strength, Some(Strength::Neutral));
        let tj = r.palace(Branch::Zi).star(StarName::TianJi).unwrap();
        assert_eq!(tj.transformation, Some(Transformation::Lu));
    }

    #[test]
    fn clear_keeps_strength() {
        let mut r = ring_with(&[(Branch::Chou, StarName::LianZhen)]);
        apply_transformations(&mut r, Stem::Jia);
        clear_transformations(&mut r);
        assert_eq!(tagged_count(&r), 0);
        assert_eq!(
            r.palace(Branch::Chou).stars[0].to_string(),
            "廉貞（平和）"
        );
    }

    #[test]
    fn locate_does_not_mutate() {
        let r = ring_with(&[(Branch::Wu, StarName::TaiYang)]);
        let recs = locate_transformations(&r, Stem::Jia);
        assert_eq!(
            recs[3].placement,
            Placement::Found {
                house: HouseName::Career,
                branch: Branch::Wu
            }
        );
        assert_eq!(tagged_count(&r), 0);
    }

    #[test]
    fn record_serializes_with_status() {
        let r = ring_with(&[(Branch::Wu, StarName::TaiYang)]);
        let recs = locate_transformations(&r, Stem::Jia);
        let json = serde_json::to_value(recs[3]).unwrap();
        assert_eq!(json["stem"], "甲");
        assert_eq!(json["kind"], "忌");
        assert_eq!(json["star"], "太陽");
        assert_eq!(json["placement"]["status"], "found");
        assert_eq!(json["placement"]["house"], "官祿");
        let missing = serde_json::to_value(recs[0]).unwrap();
        assert_eq!(missing["placement"]["status"], "not_found");
    }
}
