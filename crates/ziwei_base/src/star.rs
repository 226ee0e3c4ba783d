//! Star catalogue, brightness qualifiers and transformation tags.
//!
//! A star on the chart is a value `{name, strength?, transformation?}`.
//! Its display form is the traditional annotated text, e.g. `太陽（入廟）化祿`.

use std::fmt::{Display, Formatter};

use serde::{Serialize, Serializer};

/// The closed catalogue of stars placed by the engine.
///
/// The first 14 entries are the main stars, in traditional order. The
/// remaining 16 come from the auxiliary tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StarName {
    ZiWei,
    TianJi,
    TaiYang,
    WuQu,
    TianTong,
    LianZhen,
    TianFu,
    TaiYin,
    TanLang,
    JuMen,
    TianXiang,
    TianLiang,
    QiSha,
    PoJun,
    LuCun,
    QingYang,
    TuoLuo,
    TianKui,
    TianYue,
    ZuoFu,
    YouBi,
    TianMa,
    WenQu,
    WenChang,
    DiKong,
    DiJie,
    HongLuan,
    TianXi,
    HuoXing,
    LingXing,
}

/// All 30 catalogue entries.
pub const ALL_STARS: [StarName; 30] = [
    StarName::ZiWei,
    StarName::TianJi,
    StarName::TaiYang,
    StarName::WuQu,
    StarName::TianTong,
    StarName::LianZhen,
    StarName::TianFu,
    StarName::TaiYin,
    StarName::TanLang,
    StarName::JuMen,
    StarName::TianXiang,
    StarName::TianLiang,
    StarName::QiSha,
    StarName::PoJun,
    StarName::LuCun,
    StarName::QingYang,
    StarName::TuoLuo,
    StarName::TianKui,
    StarName::TianYue,
    StarName::ZuoFu,
    StarName::YouBi,
    StarName::TianMa,
    StarName::WenQu,
    StarName::WenChang,
    StarName::DiKong,
    StarName::DiJie,
    StarName::HongLuan,
    StarName::TianXi,
    StarName::HuoXing,
    StarName::LingXing,
];

/// Stars whose position depends on the hour branch.
pub const HOUR_STARS: [StarName; 6] = [
    StarName::WenChang,
    StarName::WenQu,
    StarName::DiKong,
    StarName::DiJie,
    StarName::HuoXing,
    StarName::LingXing,
];

impl StarName {
    /// Chinese name.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::ZiWei => "紫微",
            Self::TianJi => "天機",
            Self::TaiYang => "太陽",
            Self::WuQu => "武曲",
            Self::TianTong => "天同",
            Self::LianZhen => "廉貞",
            Self::TianFu => "天府",
            Self::TaiYin => "太陰",
            Self::TanLang => "貪狼",
            Self::JuMen => "巨門",
            Self::TianXiang => "天相",
            Self::TianLiang => "天梁",
            Self::QiSha => "七殺",
            Self::PoJun => "破軍",
            Self::LuCun => "祿存",
            Self::QingYang => "擎羊",
            Self::TuoLuo => "陀羅",
            Self::TianKui => "天魁",
            Self::TianYue => "天鉞",
            Self::ZuoFu => "左輔",
            Self::YouBi => "右弼",
            Self::TianMa => "天馬",
            Self::WenQu => "文曲",
            Self::WenChang => "文昌",
            Self::DiKong => "地空",
            Self::DiJie => "地劫",
            Self::HongLuan => "紅鸞",
            Self::TianXi => "天喜",
            Self::HuoXing => "火星",
            Self::LingXing => "鈴星",
        }
    }

    /// 0-based catalogue index.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// True for the 14 main stars.
    pub const fn is_main(self) -> bool {
        self.index() < 14
    }

    /// Look up a star by its Chinese name.
    pub fn from_glyph(s: &str) -> Option<Self> {
        ALL_STARS.iter().copied().find(|n| n.glyph() == s)
    }

    pub const fn all() -> &'static [StarName; 30] {
        &ALL_STARS
    }
}

/// Brightness qualifier attached to a main star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strength {
    /// 入廟
    Temple,
    /// 旺地
    Prosperous,
    /// 平和
    Neutral,
    /// 落陷
    Fallen,
    /// 廟旺, used by a handful of chart variants.
    TempleProsperous,
}

impl Strength {
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Temple => "入廟",
            Self::Prosperous => "旺地",
            Self::Neutral => "平和",
            Self::Fallen => "落陷",
            Self::TempleProsperous => "廟旺",
        }
    }
}

/// The four transformations (四化).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Transformation {
    /// 祿
    Lu,
    /// 權
    Quan,
    /// 科
    Ke,
    /// 忌
    Ji,
}

/// The four kinds in application order.
pub const ALL_TRANSFORMATIONS: [Transformation; 4] = [
    Transformation::Lu,
    Transformation::Quan,
    Transformation::Ke,
    Transformation::Ji,
];

impl Transformation {
    /// Single glyph (祿/權/科/忌).
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Lu => "祿",
            Self::Quan => "權",
            Self::Ke => "科",
            Self::Ji => "忌",
        }
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Accepts `祿` or `化祿`.
    pub fn from_glyph(s: &str) -> Option<Self> {
        let s = s.trim();
        let s = s.strip_prefix('化').unwrap_or(s);
        ALL_TRANSFORMATIONS.iter().copied().find(|t| t.glyph() == s)
    }
}

/// One star placed in a palace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Star {
    pub name: StarName,
    pub strength: Option<Strength>,
    pub transformation: Option<Transformation>,
}

impl Star {
    /// A star with no qualifier and no tag.
    pub const fn plain(name: StarName) -> Self {
        Self {
            name,
            strength: None,
            transformation: None,
        }
    }

    pub const fn with_strength(name: StarName, strength: Strength) -> Self {
        Self {
            name,
            strength: Some(strength),
            transformation: None,
        }
    }
}

impl Display for Star {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name.glyph())?;
        if let Some(s) = self.strength {
            write!(f, "（{}）", s.glyph())?;
        }
        if let Some(t) = self.transformation {
            write!(f, "化{}", t.glyph())?;
        }
        Ok(())
    }
}

/// Serialized as its annotated display text.
impl Serialize for Star {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl Display for StarName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.glyph())
    }
}

impl Display for Transformation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.glyph())
    }
}
