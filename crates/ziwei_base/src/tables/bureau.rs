//! Five-element bureau (五行局) resolution.
//!
//! Keyed by year stem and life-house branch. Stems five apart share a
//! row (甲/己, 乙/庚, ...) and branches pair up (子丑, 寅卯, ...), so the
//! table collapses to 5 x 6 entries.

use crate::ganzhi::{Branch, Element, Stem};

/// One of the five bureaus, each carrying its starting age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bureau {
    Water2,
    Wood3,
    Metal4,
    Earth5,
    Fire6,
}

/// All bureaus, ordered by start age.
pub const ALL_BUREAUS: [Bureau; 5] = [
    Bureau::Water2,
    Bureau::Wood3,
    Bureau::Metal4,
    Bureau::Earth5,
    Bureau::Fire6,
];

impl Bureau {
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Water2 => "水二局",
            Self::Wood3 => "木三局",
            Self::Metal4 => "金四局",
            Self::Earth5 => "土五局",
            Self::Fire6 => "火六局",
        }
    }

    /// Age at which the first major limit begins (2..=6).
    pub const fn start_age(self) -> u32 {
        match self {
            Self::Water2 => 2,
            Self::Wood3 => 3,
            Self::Metal4 => 4,
            Self::Earth5 => 5,
            Self::Fire6 => 6,
        }
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Water2 => Element::Water,
            Self::Wood3 => Element::Wood,
            Self::Metal4 => Element::Metal,
            Self::Earth5 => Element::Earth,
            Self::Fire6 => Element::Fire,
        }
    }

    /// Row index into per-bureau tables.
    pub const fn index(self) -> usize {
        self as usize
    }
}

use Bureau::{Earth5, Fire6, Metal4, Water2, Wood3};

/// `[stem % 5][branch / 2]`.
const BUREAU_TABLE: [[Bureau; 6]; 5] = [
    // 甲 己
    [Water2, Fire6, Wood3, Earth5, Metal4, Fire6],
    // 乙 庚
    [Fire6, Earth5, Metal4, Wood3, Water2, Earth5],
    // 丙 辛
    [Earth5, Wood3, Water2, Metal4, Fire6, Wood3],
    // 丁 壬
    [Wood3, Metal4, Fire6, Water2, Earth5, Metal4],
    // 戊 癸
    [Metal4, Water2, Earth5, Fire6, Wood3, Water2],
];

/// Bureau for a year stem and life-house branch.
pub const fn bureau_for(year_stem: Stem, life_branch: Branch) -> Bureau {
    BUREAU_TABLE[(year_stem.index() % 5) as usize][(life_branch.index() / 2) as usize]
}
