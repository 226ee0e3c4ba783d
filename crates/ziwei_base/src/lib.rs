//! Purple Star Astrology (紫微斗數) chart engine.
//!
//! This crate provides:
//! - Stem/branch arithmetic and calendar-fact validation
//! - Natal chart construction over a twelve-palace ring
//! - Four-transformation (四化) overlays and Taichi (太極) rotation
//! - Major/minor limits and annual, monthly and daily fortune projections
//! - Time divination and a pluggable guidance-text lookup
//!
//! Calendar conversion is out of scope: callers supply lunar month/day,
//! the year's sexagenary label and the clock hour.

/// Serialize closed enumerations as their Chinese glyph text.
macro_rules! glyph_serialize {
    ($($ty:path),+ $(,)?) => {
        $(
            impl serde::Serialize for $ty {
                fn serialize<S: serde::Serializer>(
                    &self,
                    serializer: S,
                ) -> Result<S::Ok, S::Error> {
                    serializer.serialize_str(self.glyph())
                }
            }
        )+
    };
}

pub mod builder;
pub mod calendar;
pub mod chart;
pub mod divination;
pub mod error;
pub mod explanation;
pub mod ganzhi;
pub mod options;
pub mod palace;
pub mod projection;
pub mod sihua;
pub mod star;
pub mod tables;
pub mod taichi;

glyph_serialize!(
    ganzhi::Stem,
    ganzhi::Branch,
    ganzhi::Element,
    ganzhi::ElementRelation,
    tables::Bureau,
    tables::Direction,
    star::StarName,
    star::Strength,
    star::Transformation,
    palace::HouseName,
    calendar::Sex,
    projection::ProjectionKind,
);

pub use builder::{NatalChart, build, build_chart, life_branch, relocate_hour_stars};
pub use calendar::{
    CalendarFact, GregorianDate, ResolvedFact, Sex, parse_lunar_day, parse_lunar_month,
};
pub use chart::{Chart, DEFAULT_MINOR_YEARS};
pub use divination::{Divination, divine, divine_ring};
pub use error::ZiweiError;
pub use explanation::{
    ExplainedRecord, ExplanationLookup, Guidance, GuidanceRow, GuidanceTable, explain_records,
};
pub use ganzhi::{
    ALL_BRANCHES, ALL_STEMS, Branch, Element, ElementRelation, Stem, TrineGroup, hour_branch,
    minute_branch, month_stem, palace_stem, parse_cyclic_label,
};
pub use options::{AnnualAnchor, ChartOptions, TaichiMode};
pub use palace::{ALL_HOUSES, HouseName, Palace, PalaceRing, PalaceView};
pub use projection::{
    MAX_MINOR_YEARS, MajorLimits, MajorPeriod, MinorLimit, MinorLimits, ProjectedHouse, Projection,
    ProjectionKind,
    annual_branch, annual_fortune, annual_fortune_at, daily_fortune, major_limits, minor_limit,
    minor_limits, monthly_fortune,
};
pub use sihua::{
    Placement, TransformationRecord, apply_transformations, clear_transformations,
    locate_transformations, tagged_count,
};
pub use star::{ALL_STARS, ALL_TRANSFORMATIONS, Star, StarName, Strength, Transformation};
pub use tables::{Bureau, Direction};
pub use taichi::{TaichiEntry, TaichiMapping, rotate, rotate_in_place};
