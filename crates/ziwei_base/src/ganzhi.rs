//! Heavenly stems, earthly branches and their cyclic arithmetic.
//!
//! The 10 stems and 12 branches are closed enumerations. Branch order
//! (子 = 0 .. 亥 = 11) fixes the physical position of every palace on the
//! chart ring; all ring walks in this crate are offsets in that order.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::ZiweiError;

/// The 10 heavenly stems, 甲 through 癸.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in cyclic order (0 = 甲).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

impl Stem {
    /// Chinese glyph.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Jia => "甲",
            Self::Yi => "乙",
            Self::Bing => "丙",
            Self::Ding => "丁",
            Self::Wu => "戊",
            Self::Ji => "己",
            Self::Geng => "庚",
            Self::Xin => "辛",
            Self::Ren => "壬",
            Self::Gui => "癸",
        }
    }

    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jia => "Jia",
            Self::Yi => "Yi",
            Self::Bing => "Bing",
            Self::Ding => "Ding",
            Self::Wu => "Wu",
            Self::Ji => "Ji",
            Self::Geng => "Geng",
            Self::Xin => "Xin",
            Self::Ren => "Ren",
            Self::Gui => "Gui",
        }
    }

    /// 0-based index (甲=0 .. 癸=9).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Stem at a 0-based index, wrapping mod 10.
    pub const fn from_index(i: u8) -> Self {
        ALL_STEMS[(i % 10) as usize]
    }

    /// Look up a stem by its glyph.
    pub fn from_glyph(c: char) -> Option<Self> {
        ALL_STEMS
            .iter()
            .copied()
            .find(|s| s.glyph().starts_with(c))
    }

    /// Yang stems sit at even 0-based index (甲丙戊庚壬).
    pub const fn is_yang(self) -> bool {
        self.index() % 2 == 0
    }

    /// Move `n` steps along the stem cycle (negative moves backward).
    pub const fn offset(self, n: i32) -> Self {
        Self::from_index((self.index() as i32 + n).rem_euclid(10) as u8)
    }

    /// Five-phase element of the stem.
    pub const fn element(self) -> Element {
        match self {
            Self::Jia | Self::Yi => Element::Wood,
            Self::Bing | Self::Ding => Element::Fire,
            Self::Wu | Self::Ji => Element::Earth,
            Self::Geng | Self::Xin => Element::Metal,
            Self::Ren | Self::Gui => Element::Water,
        }
    }

    /// All 10 stems in order.
    pub const fn all() -> &'static [Stem; 10] {
        &ALL_STEMS
    }
}

/// The 12 earthly branches, 子 through 亥.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in ring order (0 = 子).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

impl Branch {
    /// Chinese glyph.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Zi => "子",
            Self::Chou => "丑",
            Self::Yin => "寅",
            Self::Mao => "卯",
            Self::Chen => "辰",
            Self::Si => "巳",
            Self::Wu => "午",
            Self::Wei => "未",
            Self::Shen => "申",
            Self::You => "酉",
            Self::Xu => "戌",
            Self::Hai => "亥",
        }
    }

    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "Zi",
            Self::Chou => "Chou",
            Self::Yin => "Yin",
            Self::Mao => "Mao",
            Self::Chen => "Chen",
            Self::Si => "Si",
            Self::Wu => "Wu",
            Self::Wei => "Wei",
            Self::Shen => "Shen",
            Self::You => "You",
            Self::Xu => "Xu",
            Self::Hai => "Hai",
        }
    }

    /// 0-based index (子=0 .. 亥=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Branch at a 0-based index, wrapping mod 12.
    pub const fn from_index(i: u8) -> Self {
        ALL_BRANCHES[(i % 12) as usize]
    }

    /// Look up a branch by its glyph.
    pub fn from_glyph(c: char) -> Option<Self> {
        ALL_BRANCHES
            .iter()
            .copied()
            .find(|b| b.glyph().starts_with(c))
    }

    /// Move `n` positions around the ring (negative moves backward).
    pub const fn offset(self, n: i32) -> Self {
        Self::from_index((self.index() as i32 + n).rem_euclid(12) as u8)
    }

    /// Forward steps from `self` to `to`, in 0..12.
    pub const fn distance_to(self, to: Branch) -> u8 {
        ((to.index() + 12 - self.index()) % 12) as u8
    }

    /// Next branch in ring order.
    pub const fn next(self) -> Self {
        self.offset(1)
    }

    /// Five-phase element of the branch.
    pub const fn element(self) -> Element {
        match self {
            Self::Zi | Self::Hai => Element::Water,
            Self::Yin | Self::Mao => Element::Wood,
            Self::Si | Self::Wu => Element::Fire,
            Self::Shen | Self::You => Element::Metal,
            Self::Chou | Self::Chen | Self::Wei | Self::Xu => Element::Earth,
        }
    }

    /// Trine family the branch belongs to.
    pub const fn trine_group(self) -> TrineGroup {
        match self {
            Self::Yin | Self::Wu | Self::Xu => TrineGroup::YinWuXu,
            Self::Shen | Self::Zi | Self::Chen => TrineGroup::ShenZiChen,
            Self::Si | Self::You | Self::Chou => TrineGroup::SiYouChou,
            Self::Hai | Self::Mao | Self::Wei => TrineGroup::HaiMaoWei,
        }
    }

    /// All 12 branches in ring order.
    pub const fn all() -> &'static [Branch; 12] {
        &ALL_BRANCHES
    }
}

/// Move `n` positions around the ring from `b`.
pub const fn offset(b: Branch, n: i32) -> Branch {
    b.offset(n)
}

/// Forward distance from `b1` to `b2` in 0..12.
pub const fn distance(b1: Branch, b2: Branch) -> u8 {
    b1.distance_to(b2)
}

/// Trine family of a branch.
pub const fn trine_group(b: Branch) -> TrineGroup {
    b.trine_group()
}

/// The four trine families (三合) of branches four steps apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrineGroup {
    /// 寅午戌
    YinWuXu,
    /// 申子辰
    ShenZiChen,
    /// 巳酉丑
    SiYouChou,
    /// 亥卯未
    HaiMaoWei,
}

impl TrineGroup {
    /// The three member branches, in traditional recitation order.
    pub const fn members(self) -> [Branch; 3] {
        match self {
            Self::YinWuXu => [Branch::Yin, Branch::Wu, Branch::Xu],
            Self::ShenZiChen => [Branch::Shen, Branch::Zi, Branch::Chen],
            Self::SiYouChou => [Branch::Si, Branch::You, Branch::Chou],
            Self::HaiMaoWei => [Branch::Hai, Branch::Mao, Branch::Wei],
        }
    }
}

/// The five phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// How one element acts on another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementRelation {
    /// Same element.
    Same,
    /// `self` generates `other` (木生火).
    Generates,
    /// `self` controls `other` (木剋土).
    Controls,
    /// `other` generates `self`.
    GeneratedBy,
    /// `other` controls `self`.
    ControlledBy,
}

impl Element {
    /// Chinese glyph.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// Position in the generating cycle (木 0, 火 1, 土 2, 金 3, 水 4).
    const fn cycle_index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// Relation of `self` toward `other`.
    pub const fn relation(self, other: Element) -> ElementRelation {
        match (other.cycle_index() + 5 - self.cycle_index()) % 5 {
            0 => ElementRelation::Same,
            1 => ElementRelation::Generates,
            2 => ElementRelation::Controls,
            3 => ElementRelation::ControlledBy,
            _ => ElementRelation::GeneratedBy,
        }
    }
}

impl ElementRelation {
    /// Chinese glyph (同/生/剋/被生/被剋).
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Same => "同",
            Self::Generates => "生",
            Self::Controls => "剋",
            Self::GeneratedBy => "被生",
            Self::ControlledBy => "被剋",
        }
    }
}

impl Display for Stem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.glyph())
    }
}

impl Display for Branch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.glyph())
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.glyph())
    }
}

/// Single-glyph text or pinyin name.
impl FromStr for Stem {
    type Err = ZiweiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let mut chars = t.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(stem) = Stem::from_glyph(c) {
                return Ok(stem);
            }
        }
        ALL_STEMS
            .iter()
            .copied()
            .find(|st| st.name().eq_ignore_ascii_case(t))
            .ok_or_else(|| ZiweiError::InvalidStem(s.to_string()))
    }
}

/// Single-glyph text or pinyin name.
impl FromStr for Branch {
    type Err = ZiweiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let mut chars = t.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(branch) = Branch::from_glyph(c) {
                return Ok(branch);
            }
        }
        ALL_BRANCHES
            .iter()
            .copied()
            .find(|b| b.name().eq_ignore_ascii_case(t))
            .ok_or_else(|| ZiweiError::InvalidBranch(s.to_string()))
    }
}

/// Split a sexagenary label such as "甲子" into its stem and branch.
///
/// Only the 60 valid pairings are accepted: stem and branch must share
/// parity (a yang stem never pairs with a yin branch).
pub fn parse_cyclic_label(label: &str) -> Result<(Stem, Branch), ZiweiError> {
    let bad = || ZiweiError::InvalidCyclicLabel(label.to_string());
    let mut chars = label.trim().chars();
    let (Some(s), Some(b), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(bad());
    };
    let stem = Stem::from_glyph(s).ok_or_else(bad)?;
    let branch = Branch::from_glyph(b).ok_or_else(bad)?;
    if stem.index() % 2 != branch.index() % 2 {
        return Err(bad());
    }
    Ok((stem, branch))
}

/// Branch of the double-hour (時辰) containing a clock hour.
///
/// 23:00 and 00:00 both fall in 子; each later branch covers two hours.
pub fn hour_branch(hour: u8) -> Result<Branch, ZiweiError> {
    if hour > 23 {
        return Err(ZiweiError::InvalidHour(hour));
    }
    Ok(Branch::from_index(((hour as u16 + 1) / 2 % 12) as u8))
}

/// Branch of the ten-minute slot within the double-hour.
///
/// Each double-hour spans 120 minutes split into 12 slots from 子. The
/// first clock hour of a double-hour is 23 or an odd hour; the second
/// (0 or an even hour) starts 60 minutes in.
pub fn minute_branch(hour: u8, minute: u8) -> Result<Branch, ZiweiError> {
    if hour > 23 {
        return Err(ZiweiError::InvalidHour(hour));
    }
    if minute > 59 {
        return Err(ZiweiError::InvalidMinute(minute));
    }
    let second_hour = hour != 23 && hour % 2 == 0;
    let elapsed = minute as u16 + if second_hour { 60 } else { 0 };
    Ok(Branch::from_index(((elapsed / 10) % 12) as u8))
}

/// Stem of a lunar month within a year (五虎遁).
///
/// Month 1 starts at 丙 for 甲/己 years, 戊 for 乙/庚, 庚 for 丙/辛,
/// 壬 for 丁/壬 and 甲 for 戊/癸; each later month advances two stems.
pub fn month_stem(year_stem: Stem, lunar_month: u8) -> Result<Stem, ZiweiError> {
    if !(1..=12).contains(&lunar_month) {
        return Err(ZiweiError::InvalidLunarMonth(lunar_month));
    }
    Ok(tiger_stem(year_stem).offset((lunar_month as i32 - 1) * 2))
}

/// Stem governing the 寅 position for a year stem.
pub const fn tiger_stem(year_stem: Stem) -> Stem {
    // (2 * year + 2) mod 10 reproduces 甲己→丙, 乙庚→戊, 丙辛→庚, 丁壬→壬, 戊癸→甲.
    Stem::from_index((year_stem.index() % 5) * 2 + 2)
}

/// Stem of the palace at `branch`, counted forward from the 寅 palace.
pub const fn palace_stem(year_stem: Stem, branch: Branch) -> Stem {
    tiger_stem(year_stem).offset(Branch::Yin.distance_to(branch) as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_indices_sequential() {
        for (i, s) in ALL_STEMS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
            assert_eq!(Stem::from_index(i as u8), *s);
        }
    }

    #[test]
    fn branch_indices_sequential() {
        for (i, b) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(b.index() as usize, i);
        }
    }

    #[test]
    fn glyph_round_trip() {
        for s in ALL_STEMS {
            let c = s.glyph().chars().next().unwrap();
            assert_eq!(Stem::from_glyph(c), Some(s));
        }
        for b in ALL_BRANCHES {
            let c = b.glyph().chars().next().unwrap();
            assert_eq!(Branch::from_glyph(c), Some(b));
        }
    }

    #[test]
    fn offset_wraps_both_ways() {
        assert_eq!(Branch::Hai.offset(1), Branch::Zi);
        assert_eq!(Branch::Zi.offset(-1), Branch::Hai);
        assert_eq!(Branch::Yin.offset(25), Branch::Mao);
        assert_eq!(Stem::Gui.offset(2), Stem::Yi);
    }

    #[test]
    fn distance_forward() {
        assert_eq!(distance(Branch::Zi, Branch::Zi), 0);
        assert_eq!(distance(Branch::Xu, Branch::Zi), 2);
        assert_eq!(distance(Branch::Zi, Branch::Hai), 11);
    }

    #[test]
    fn trine_members_share_group() {
        for b in ALL_BRANCHES {
            assert!(b.trine_group().members().contains(&b));
        }
    }

    #[test]
    fn yang_stems() {
        assert!(Stem::Jia.is_yang());
        assert!(!Stem::Yi.is_yang());
        assert!(Stem::Ren.is_yang());
    }

    #[test]
    fn branch_elements() {
        assert_eq!(Branch::Zi.element(), Element::Water);
        assert_eq!(Branch::Chou.element(), Element::Earth);
        assert_eq!(Branch::Si.element(), Element::Fire);
        assert_eq!(Branch::You.element(), Element::Metal);
    }

    #[test]
    fn element_relations() {
        assert_eq!(Element::Wood.relation(Element::Fire), ElementRelation::Generates);
        assert_eq!(Element::Wood.relation(Element::Earth), ElementRelation::Controls);
        assert_eq!(Element::Water.relation(Element::Wood), ElementRelation::Generates);
        assert_eq!(Element::Fire.relation(Element::Wood), ElementRelation::GeneratedBy);
        assert_eq!(Element::Earth.relation(Element::Wood), ElementRelation::ControlledBy);
        assert_eq!(Element::Metal.relation(Element::Metal), ElementRelation::Same);
    }

    #[test]
    fn cyclic_label_valid() {
        assert_eq!(parse_cyclic_label("甲子"), Ok((Stem::Jia, Branch::Zi)));
        assert_eq!(parse_cyclic_label("癸亥"), Ok((Stem::Gui, Branch::Hai)));
    }

    #[test]
    fn cyclic_label_rejects_parity_mismatch() {
        assert!(parse_cyclic_label("甲丑").is_err());
    }

    #[test]
    fn cyclic_label_rejects_bad_shape() {
        assert!(parse_cyclic_label("").is_err());
        assert!(parse_cyclic_label("甲").is_err());
        assert!(parse_cyclic_label("甲子年").is_err());
        assert!(parse_cyclic_label("子甲").is_err());
    }

    #[test]
    fn hour_branches() {
        assert_eq!(hour_branch(23), Ok(Branch::Zi));
        assert_eq!(hour_branch(0), Ok(Branch::Zi));
        assert_eq!(hour_branch(1), Ok(Branch::Chou));
        assert_eq!(hour_branch(2), Ok(Branch::Chou));
        assert_eq!(hour_branch(11), Ok(Branch::Wu));
        assert_eq!(hour_branch(22), Ok(Branch::Hai));
        assert_eq!(hour_branch(24), Err(ZiweiError::InvalidHour(24)));
    }

    #[test]
    fn minute_branches() {
        assert_eq!(minute_branch(23, 5), Ok(Branch::Zi));
        assert_eq!(minute_branch(0, 5), Ok(Branch::Wu));
        assert_eq!(minute_branch(13, 59), Ok(Branch::Si));
        assert_eq!(minute_branch(14, 59), Ok(Branch::Hai));
        assert_eq!(minute_branch(10, 60), Err(ZiweiError::InvalidMinute(60)));
    }

    #[test]
    fn month_stems() {
        assert_eq!(month_stem(Stem::Jia, 1), Ok(Stem::Bing));
        assert_eq!(month_stem(Stem::Ji, 2), Ok(Stem::Wu));
        assert_eq!(month_stem(Stem::Yi, 1), Ok(Stem::Wu));
        assert_eq!(month_stem(Stem::Bing, 1), Ok(Stem::Geng));
        assert_eq!(month_stem(Stem::Ding, 1), Ok(Stem::Ren));
        assert_eq!(month_stem(Stem::Gui, 1), Ok(Stem::Jia));
        assert_eq!(month_stem(Stem::Gui, 12), Ok(Stem::Bing));
        assert!(month_stem(Stem::Jia, 13).is_err());
    }

    #[test]
    fn palace_stems_from_yin() {
        assert_eq!(palace_stem(Stem::Jia, Branch::Yin), Stem::Bing);
        assert_eq!(palace_stem(Stem::Jia, Branch::Xu), Stem::Jia);
        assert_eq!(palace_stem(Stem::Jia, Branch::Zi), Stem::Bing);
        assert_eq!(palace_stem(Stem::Jia, Branch::Chou), Stem::Ding);
        assert_eq!(palace_stem(Stem::Wu, Branch::Yin), Stem::Jia);
    }

    #[test]
    fn parse_stem_and_branch_text() {
        assert_eq!("甲".parse::<Stem>(), Ok(Stem::Jia));
        assert_eq!("geng".parse::<Stem>(), Ok(Stem::Geng));
        assert_eq!("寅".parse::<Branch>(), Ok(Branch::Yin));
        assert_eq!("Hai".parse::<Branch>(), Ok(Branch::Hai));
        assert!("X".parse::<Branch>().is_err());
    }
}
