//! The eight auxiliary-star tables.
//!
//! | Table | Key | Stars |
//! |---|---|---|
//! | luck | year stem | 祿存 擎羊 陀羅 |
//! | noble | year stem | 天魁 天鉞 |
//! | month | lunar month | 左輔 右弼 |
//! | horse | year branch | 天馬 |
//! | hour | hour branch | 文曲 文昌 地空 地劫 |
//! | romance | year branch | 紅鸞 天喜 |
//! | fire | year branch trine + hour branch | 火星 |
//! | bell | year branch trine + hour branch | 鈴星 |
//!
//! No two tables target the same star, so application order is free.

use crate::error::ZiweiError;
use crate::ganzhi::Branch::{self, Chen, Chou, Hai, Mao, Shen, Si, Wei, Wu, Xu, Yin, You, Zi};
use crate::ganzhi::{Stem, TrineGroup};
use crate::star::StarName;

/// A star and the branch it lands on.
pub type StarPosition = (StarName, Branch);

/// Stars keyed by year stem: 祿存, 擎羊, 陀羅, 天魁, 天鉞.
#[rustfmt::skip]
const YEAR_STEM_TABLE: [[Branch; 5]; 10] = [
    [Yin, Mao, Chou, Chou, Wei],  // 甲
    [Mao, Chen, Yin, Zi, Shen],   // 乙
    [Si, Wu, Chen, Hai, You],     // 丙
    [Wu, Wei, Si, Hai, You],      // 丁
    [Si, Wu, Chen, Chou, Wei],    // 戊
    [Wu, Wei, Si, Zi, Shen],      // 己
    [Shen, You, Wei, Chou, Wei],  // 庚
    [You, Xu, Shen, Wu, Yin],     // 辛
    [Hai, Zi, Xu, Mao, Si],       // 壬
    [Zi, Chou, Hai, Mao, Si],     // 癸
];

/// 左輔, 右弼 by lunar month 1..=12.
#[rustfmt::skip]
const MONTH_TABLE: [[Branch; 2]; 12] = [
    [Chen, Xu], [Si, You], [Wu, Shen], [Wei, Wei],
    [Shen, Wu], [You, Si], [Xu, Chen], [Hai, Mao],
    [Zi, Yin], [Chou, Chou], [Yin, Zi], [Mao, Hai],
];

/// 文曲, 文昌, 地空, 地劫 by hour branch.
#[rustfmt::skip]
const HOUR_TABLE: [[Branch; 4]; 12] = [
    [Chen, Xu, Hai, Hai],   // 子
    [Si, You, Xu, Zi],      // 丑
    [Wu, Shen, You, Chou],  // 寅
    [Wei, Wei, Shen, Yin],  // 卯
    [Shen, Wu, Wei, Mao],   // 辰
    [You, Si, Wu, Chen],    // 巳
    [Xu, Chen, Si, Si],     // 午
    [Hai, Mao, Chen, Wu],   // 未
    [Zi, Yin, Mao, Wei],    // 申
    [Chou, Chou, Yin, Shen], // 酉
    [Yin, Zi, Chou, You],   // 戌
    [Mao, Hai, Zi, Xu],     // 亥
];

/// 紅鸞 by year branch. 天喜 always sits opposite.
const HONG_LUAN_TABLE: [Branch; 12] = [
    Mao, Yin, Chou, Zi, Hai, Xu, You, Shen, Wei, Wu, Si, Chen,
];

/// 天馬 by year-branch trine.
const fn tian_ma(group: TrineGroup) -> Branch {
    match group {
        TrineGroup::ShenZiChen => Yin,
        TrineGroup::HaiMaoWei => Si,
        TrineGroup::YinWuXu => Shen,
        TrineGroup::SiYouChou => Hai,
    }
}

/// 火星 at the 子 hour, by year-branch trine. Later hours run forward.
const fn fire_start(group: TrineGroup) -> Branch {
    match group {
        TrineGroup::ShenZiChen => Yin,
        TrineGroup::SiYouChou => Mao,
        TrineGroup::YinWuXu => Chou,
        TrineGroup::HaiMaoWei => You,
    }
}

/// 鈴星 at the 子 hour, by year-branch trine. Later hours run forward.
const fn bell_start(group: TrineGroup) -> Branch {
    match group {
        TrineGroup::YinWuXu => Mao,
        _ => Xu,
    }
}

/// 祿存, 擎羊, 陀羅.
pub const fn luck_stars(year_stem: Stem) -> [StarPosition; 3] {
    let row = YEAR_STEM_TABLE[year_stem.index() as usize];
    [
        (StarName::LuCun, row[0]),
        (StarName::QingYang, row[1]),
        (StarName::TuoLuo, row[2]),
    ]
}

/// 天魁, 天鉞.
pub const fn noble_stars(year_stem: Stem) -> [StarPosition; 2] {
    let row = YEAR_STEM_TABLE[year_stem.index() as usize];
    [(StarName::TianKui, row[3]), (StarName::TianYue, row[4])]
}

/// 左輔, 右弼 for a lunar month.
pub fn month_stars(lunar_month: u8) -> Result<[StarPosition; 2], ZiweiError> {
    if !(1..=12).contains(&lunar_month) {
        return Err(ZiweiError::InvalidLunarMonth(lunar_month));
    }
    let row = MONTH_TABLE[(lunar_month - 1) as usize];
    Ok([(StarName::ZuoFu, row[0]), (StarName::YouBi, row[1])])
}

/// 天馬.
pub const fn horse_star(year_branch: Branch) -> StarPosition {
    (StarName::TianMa, tian_ma(year_branch.trine_group()))
}

/// 文曲, 文昌, 地空, 地劫.
pub const fn hour_stars(hour_branch: Branch) -> [StarPosition; 4] {
    let row = HOUR_TABLE[hour_branch.index() as usize];
    [
        (StarName::WenQu, row[0]),
        (StarName::WenChang, row[1]),
        (StarName::DiKong, row[2]),
        (StarName::DiJie, row[3]),
    ]
}

/// 紅鸞, 天喜.
pub const fn romance_stars(year_branch: Branch) -> [StarPosition; 2] {
    let hong = HONG_LUAN_TABLE[year_branch.index() as usize];
    [(StarName::HongLuan, hong), (StarName::TianXi, hong.offset(6))]
}

/// 火星.
pub const fn fire_star(year_branch: Branch, hour_branch: Branch) -> StarPosition {
    let start = fire_start(year_branch.trine_group());
    (StarName::HuoXing, start.offset(hour_branch.index() as i32))
}

/// 鈴星.
pub const fn bell_star(year_branch: Branch, hour_branch: Branch) -> StarPosition {
    let start = bell_start(year_branch.trine_group());
    (StarName::LingXing, start.offset(hour_branch.index() as i32))
}

/// The six stars that follow the hour branch (hour table plus fire and bell).
pub fn hour_dependent_stars(year_branch: Branch, hour_branch: Branch) -> Vec<StarPosition> {
    let mut out = Vec::with_capacity(6);
    out.extend(hour_stars(hour_branch));
    out.push(fire_star(year_branch, hour_branch));
    out.push(bell_star(year_branch, hour_branch));
    out
}

/// Every auxiliary placement for a chart, table by table.
pub fn auxiliary_placements(
    year_stem: Stem,
    year_branch: Branch,
    lunar_month: u8,
    hour_branch: Branch,
) -> Result<Vec<StarPosition>, ZiweiError> {
    let mut out = Vec::with_capacity(16);
    out.extend(luck_stars(year_stem));
    out.extend(noble_stars(year_stem));
    out.extend(month_stars(lunar_month)?);
    out.push(horse_star(year_branch));
    out.extend(hour_stars(hour_branch));
    out.extend(romance_stars(year_branch));
    out.push(fire_star(year_branch, hour_branch));
    out.push(bell_star(year_branch, hour_branch));
    Ok(out)
}
