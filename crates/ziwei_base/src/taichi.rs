//! Taichi re-centering (太極點).
//!
//! Rotation renames the twelve houses so that 命宮 sits on a chosen
//! branch. Stars, stems, elements and the body flag stay on their
//! physical branch; only house names move.

use serde::Serialize;
use tracing::info;

use crate::ganzhi::Branch;
use crate::palace::{HouseName, PalaceRing};

/// One row of a rotation: the house a branch carried before and after.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaichiEntry {
    pub branch: Branch,
    pub house: HouseName,
    pub previous_house: HouseName,
}

/// Branch to new house-name mapping produced by a rotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaichiMapping {
    /// Branch that became 命宮.
    pub center: Branch,
    /// Rows in new house order, 命宮 first.
    pub entries: Vec<TaichiEntry>,
}

impl TaichiMapping {
    /// New house name at `branch`.
    pub fn house_at(&self, branch: Branch) -> HouseName {
        HouseName::from_index(self.center.distance_to(branch))
    }

    /// True when no house changed branch.
    pub fn is_identity(&self) -> bool {
        self.entries.iter().all(|e| e.house == e.previous_house)
    }
}

/// Rotate a copy of `ring` so that 命宮 lands on `center`.
pub fn rotate(ring: &PalaceRing, center: Branch) -> (PalaceRing, TaichiMapping) {
    let mut out = ring.clone();
    let mapping = rotate_in_place(&mut out, center);
    (out, mapping)
}

/// Rotate `ring` itself; see [`rotate`].
pub fn rotate_in_place(ring: &mut PalaceRing, center: Branch) -> TaichiMapping {
    let previous_life = ring.life_branch();
    let entries: Vec<TaichiEntry> = (0..12)
        .map(|i| {
            let branch = center.offset(i);
            TaichiEntry {
                branch,
                house: HouseName::from_index(i as u8),
                previous_house: ring.palace(branch).house,
            }
        })
        .collect();
    ring.relabel(center);
    info!(
        center = center.glyph(),
        previous_life = previous_life.glyph(),
        "taichi rotation applied"
    );
    TaichiMapping { center, entries }
}
