//! Time divination (占卜).
//!
//! The minute of the question picks a branch; the natal ring is rotated to
//! make that branch 命宮, and the stem of the palace standing there drives
//! a fresh four-transformation overlay on the rotated ring.

use serde::Serialize;
use tracing::info;

use crate::builder::build_chart;
use crate::calendar::{CalendarFact, Sex};
use crate::error::ZiweiError;
use crate::ganzhi::{Branch, Stem, minute_branch};
use crate::options::ChartOptions;
use crate::palace::PalaceRing;
use crate::sihua::{TransformationRecord, apply_transformations};
use crate::taichi::{TaichiMapping, rotate_in_place};

/// Outcome of one divination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Divination {
    pub minute_branch: Branch,
    /// Stem of the palace at the minute branch.
    pub palace_stem: Stem,
    pub mapping: TaichiMapping,
    pub records: Vec<TransformationRecord>,
    /// Rotated ring carrying only the divination transformations.
    pub ring: PalaceRing,
}

/// Cast a divination for a question asked at `hour:minute`.
pub fn divine(
    fact: &CalendarFact,
    sex: Sex,
    hour: u8,
    minute: u8,
    options: &ChartOptions,
) -> Result<Divination, ZiweiError> {
    let branch = minute_branch(hour, minute)?;
    let ring = build_chart(fact, sex, options)?.ring;
    Ok(cast(ring, branch))
}

/// Divination over an existing ring, which is cloned and left untouched.
pub fn divine_ring(ring: &PalaceRing, branch: Branch) -> Divination {
    cast(ring.clone(), branch)
}

fn cast(mut ring: PalaceRing, branch: Branch) -> Divination {
    let mapping = rotate_in_place(&mut ring, branch);
    let palace_stem = ring.palace(branch).stem;
    let records = apply_transformations(&mut ring, palace_stem);
    info!(
        minute_branch = branch.glyph(),
        stem = palace_stem.glyph(),
        found = records.iter().filter(|r| r.is_found()).count(),
        "divination cast"
    );
    Divination {
        minute_branch: branch,
        palace_stem,
        mapping,
        records,
        ring,
    }
}
