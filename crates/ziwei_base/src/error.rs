//! Error types for chart construction and projection.

use thiserror::Error;

use crate::projection::ProjectionKind;

/// Errors raised when an input lies outside its declared domain.
///
/// Every variant is a configuration error: the engine has no transient
/// failures, so nothing here is retryable. Lookup misses during the
/// four-transformation overlay are not errors; they are reported as
/// [`Placement::NotFound`](crate::sihua::Placement::NotFound).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ZiweiError {
    /// Lunar month outside 1..=12.
    #[error("invalid lunar month {0} (expected 1-12)")]
    InvalidLunarMonth(u8),
    /// Lunar day outside 1..=30.
    #[error("invalid lunar day {0} (expected 1-30)")]
    InvalidLunarDay(u8),
    /// Clock hour outside 0..=23.
    #[error("invalid hour {0} (expected 0-23)")]
    InvalidHour(u8),
    /// Clock minute outside 0..=59.
    #[error("invalid minute {0} (expected 0-59)")]
    InvalidMinute(u8),
    /// Sexagenary label that is not a valid stem+branch pair.
    #[error("malformed cyclic label '{0}'")]
    InvalidCyclicLabel(String),
    /// Text that names no heavenly stem.
    #[error("unknown heavenly stem '{0}'")]
    InvalidStem(String),
    /// Text that names no earthly branch.
    #[error("unknown earthly branch '{0}'")]
    InvalidBranch(String),
    /// Text that names no palace.
    #[error("unknown house name '{0}'")]
    InvalidHouse(String),
    /// Text that names no transformation kind.
    #[error("unknown transformation '{0}'")]
    InvalidTransformation(String),
    /// Unrecognized sex flag.
    #[error("unrecognized sex value '{0}' (expected M/F)")]
    InvalidSex(String),
    /// Lunar day or month text that cannot be read as a number.
    #[error("cannot parse lunar date text '{0}'")]
    InvalidLunarText(String),
    /// Minor-limit age of 0, or a run length outside 1..=120.
    #[error("invalid age {0}")]
    InvalidAge(u32),
    /// Monthly fortune target outside 1..=12.
    #[error("invalid target month {0} (expected 1-12)")]
    InvalidTargetMonth(u8),
    /// Daily fortune target outside 1..=30.
    #[error("invalid target day {0} (expected 1-30)")]
    InvalidTargetDay(u8),
    /// A fortune was anchored on the wrong kind of parent projection.
    #[error("expected a {} projection, found {}", .expected.glyph(), .found.glyph())]
    ProjectionKind {
        expected: ProjectionKind,
        found: ProjectionKind,
    },
    /// A parent projection without its twelve houses.
    #[error("{} projection has {houses} houses (expected 12)", .kind.glyph())]
    IncompleteProjection { kind: ProjectionKind, houses: usize },
}
