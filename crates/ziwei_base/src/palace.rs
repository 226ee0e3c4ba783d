//! The twelve-palace ring.
//!
//! A [`PalaceRing`] holds exactly 12 [`Palace`] records indexed by branch.
//! Branch, stem and element of a slot never change after construction;
//! house names move only under relabeling.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use crate::error::ZiweiError;
use crate::ganzhi::{ALL_BRANCHES, Branch, Element, Stem, palace_stem};
use crate::star::{Star, StarName};

/// The 12 canonical house names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HouseName {
    Life,
    Parents,
    Fortune,
    Property,
    Career,
    Friends,
    Travel,
    Health,
    Wealth,
    Children,
    Spouse,
    Siblings,
}

/// House names in ring order, starting from the life house and advancing
/// one branch per entry.
pub const ALL_HOUSES: [HouseName; 12] = [
    HouseName::Life,
    HouseName::Parents,
    HouseName::Fortune,
    HouseName::Property,
    HouseName::Career,
    HouseName::Friends,
    HouseName::Travel,
    HouseName::Health,
    HouseName::Wealth,
    HouseName::Children,
    HouseName::Spouse,
    HouseName::Siblings,
];

impl HouseName {
    /// Short canonical name (命宮, 父母, 福德, ...).
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Life => "命宮",
            Self::Parents => "父母",
            Self::Fortune => "福德",
            Self::Property => "田宅",
            Self::Career => "官祿",
            Self::Friends => "交友",
            Self::Travel => "遷移",
            Self::Health => "疾厄",
            Self::Wealth => "財帛",
            Self::Children => "子女",
            Self::Spouse => "夫妻",
            Self::Siblings => "兄弟",
        }
    }

    /// Name with the 宮 suffix (父母宮, 福德宮, ...).
    pub fn full_name(self) -> String {
        match self {
            Self::Life => self.glyph().to_string(),
            _ => format!("{}宮", self.glyph()),
        }
    }

    /// Position in [`ALL_HOUSES`].
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn from_index(i: u8) -> Self {
        ALL_HOUSES[(i % 12) as usize]
    }

    pub const fn all() -> &'static [HouseName; 12] {
        &ALL_HOUSES
    }
}

impl Display for HouseName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.glyph())
    }
}

/// Accepts the short or 宮-suffixed name; 僕役 is an alias of 交友.
impl FromStr for HouseName {
    type Err = ZiweiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t == "命宮" || t == "命" {
            return Ok(Self::Life);
        }
        let t = t.strip_suffix('宮').unwrap_or(t);
        if t == "僕役" {
            return Ok(Self::Friends);
        }
        ALL_HOUSES
            .iter()
            .copied()
            .find(|h| h.glyph() == t)
            .ok_or_else(|| ZiweiError::InvalidHouse(s.to_string()))
    }
}

/// One physical slot of the ring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palace {
    pub house: HouseName,
    pub branch: Branch,
    pub stem: Stem,
    pub element: Element,
    pub stars: Vec<Star>,
    pub is_body: bool,
}

impl Palace {
    pub fn has_star(&self, name: StarName) -> bool {
        self.stars.iter().any(|s| s.name == name)
    }

    pub fn star(&self, name: StarName) -> Option<&Star> {
        self.stars.iter().find(|s| s.name == name)
    }

    /// Stable external view of this palace.
    pub fn view(&self) -> PalaceView {
        PalaceView {
            name: self.house.glyph().to_string(),
            branch: self.branch.glyph().to_string(),
            stem: self.stem.glyph().to_string(),
            element: self.element.glyph().to_string(),
            stars: self.stars.iter().map(Star::to_string).collect(),
            is_body_palace: self.is_body,
        }
    }
}

/// Serialization contract for one palace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PalaceView {
    pub name: String,
    pub branch: String,
    pub stem: String,
    pub element: String,
    pub stars: Vec<String>,
    pub is_body_palace: bool,
}

/// Exactly 12 palaces, slot `i` holding branch `i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PalaceRing {
    palaces: [Palace; 12],
}

impl PalaceRing {
    /// Empty ring: houses assigned forward from `life_branch`, stems from
    /// the year stem's palace-stem start, no stars, no body flag.
    pub fn new(life_branch: Branch, year_stem: Stem) -> Self {
        let palaces = ALL_BRANCHES.map(|branch| Palace {
            house: HouseName::from_index(life_branch.distance_to(branch)),
            branch,
            stem: palace_stem(year_stem, branch),
            element: branch.element(),
            stars: Vec::new(),
            is_body: false,
        });
        Self { palaces }
    }

    /// Palace at a branch.
    pub fn palace(&self, branch: Branch) -> &Palace {
        &self.palaces[branch.index() as usize]
    }

    pub fn palace_mut(&mut self, branch: Branch) -> &mut Palace {
        &mut self.palaces[branch.index() as usize]
    }

    /// Palace currently carrying `house`.
    pub fn by_house(&self, house: HouseName) -> &Palace {
        self.palace(self.branch_of(house))
    }

    /// Branch currently carrying `house`.
    pub fn branch_of(&self, house: HouseName) -> Branch {
        // House names are a bijection over the ring, so the offset from any
        // slot recovers the target without a search.
        let first = &self.palaces[0];
        let steps = (house.index() + 12 - first.house.index()) % 12;
        Branch::Zi.offset(steps as i32)
    }

    /// Branch of the life house.
    pub fn life_branch(&self) -> Branch {
        self.branch_of(HouseName::Life)
    }

    /// Branch of the body house, if one is flagged.
    pub fn body_branch(&self) -> Option<Branch> {
        self.palaces.iter().find(|p| p.is_body).map(|p| p.branch)
    }

    /// Palaces in branch order (子 first).
    pub fn iter(&self) -> impl Iterator<Item = &Palace> {
        self.palaces.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Palace> {
        self.palaces.iter_mut()
    }

    /// Palaces in house order (命宮 first).
    pub fn iter_houses(&self) -> impl Iterator<Item = &Palace> {
        let life = self.life_branch();
        (0..12).map(move |i| self.palace(life.offset(i)))
    }

    /// Add a star to the palace at `branch`. A star already present there
    /// has its strength updated in place instead of being duplicated.
    pub fn place(&mut self, branch: Branch, star: Star) {
        let palace = self.palace_mut(branch);
        match palace.stars.iter_mut().find(|s| s.name == star.name) {
            Some(existing) => {
                if star.strength.is_some() {
                    existing.strength = star.strength;
                }
            }
            None => palace.stars.push(star),
        }
    }

    /// First palace (in branch order) holding `name`.
    pub fn locate(&self, name: StarName) -> Option<&Palace> {
        self.palaces.iter().find(|p| p.has_star(name))
    }

    pub fn locate_mut(&mut self, name: StarName) -> Option<(&mut Palace, usize)> {
        self.palaces.iter_mut().find_map(|p| {
            let i = p.stars.iter().position(|s| s.name == name)?;
            Some((p, i))
        })
    }

    /// Remove every occurrence of `name`, returning the first removed star.
    pub fn remove(&mut self, name: StarName) -> Option<Star> {
        let mut first = None;
        for p in &mut self.palaces {
            if let Some(i) = p.stars.iter().position(|s| s.name == name) {
                let s = p.stars.remove(i);
                if first.is_none() {
                    first = Some(s);
                }
            }
        }
        first
    }

    /// Reassign house names so that 命宮 lands on `life_branch`.
    pub fn relabel(&mut self, life_branch: Branch) {
        for p in &mut self.palaces {
            p.house = HouseName::from_index(life_branch.distance_to(p.branch));
        }
    }

    /// Flag the palace named `house` as the body house, clearing any other.
    pub fn mark_body(&mut self, house: HouseName) {
        let target = self.branch_of(house);
        for p in &mut self.palaces {
            p.is_body = p.branch == target;
        }
    }

    /// Every star name on the ring, sorted.
    pub fn star_names(&self) -> Vec<StarName> {
        let mut names: Vec<StarName> = self
            .palaces
            .iter()
            .flat_map(|p| p.stars.iter().map(|s| s.name))
            .collect();
        names.sort();
        names
    }

    /// External views in house order.
    pub fn views(&self) -> Vec<PalaceView> {
        self.iter_houses().map(Palace::view).collect()
    }
}

impl Serialize for PalaceRing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.views())
    }
}
