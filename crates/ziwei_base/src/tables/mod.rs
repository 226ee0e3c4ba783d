//! Constant lookup tables.
//!
//! Every lookup is total over its typed domain; range-checked inputs
//! (lunar month, lunar day) return [`ZiweiError`](crate::ZiweiError).

pub mod auxiliary;
pub mod bureau;
pub mod limits;
pub mod main_chart;
pub mod purple;
pub mod sihua;

pub use auxiliary::{StarPosition, auxiliary_placements, hour_dependent_stars};
pub use bureau::{ALL_BUREAUS, Bureau, bureau_for};
pub use limits::{
    Direction, body_house, major_limit_direction, minor_limit_direction, minor_limit_start,
};
pub use main_chart::{MainStarEntry, main_star_layout};
pub use purple::purple_star_branch;
pub use sihua::{transformation_star, transformation_stars};
