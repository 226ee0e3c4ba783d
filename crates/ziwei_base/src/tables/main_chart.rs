//! Main-star basic chart (基本盤).
//!
//! Twelve variants keyed by the branch holding 紫微. Each variant lists
//! every one of the 14 main stars exactly once, with its brightness at
//! that position.

use crate::ganzhi::Branch;
use crate::ganzhi::Branch::{Chen, Chou, Hai, Mao, Shen, Si, Wei, Wu, Xu, Yin, You, Zi};
use crate::star::StarName::{
    JuMen, LianZhen, PoJun, QiSha, TaiYang, TaiYin, TanLang, TianFu, TianJi, TianLiang, TianTong,
    TianXiang, WuQu, ZiWei,
};
use crate::star::Strength::{Fallen, Neutral, Prosperous, Temple, TempleProsperous};
use crate::star::{StarName, Strength};

/// One main-star placement: (branch, star, brightness).
pub type MainStarEntry = (Branch, StarName, Strength);

/// Indexed by the 紫微 branch.
const MAIN_STAR_CHART: [&[MainStarEntry]; 12] = [
    // 紫微在子
    &[
        (Zi, ZiWei, Neutral),
        (Yin, PoJun, Neutral),
        (Chen, LianZhen, Neutral),
        (Chen, TianFu, Temple),
        (Si, TaiYin, Fallen),
        (Wu, TanLang, Prosperous),
        (Wei, TianTong, Fallen),
        (Wei, JuMen, Fallen),
        (Shen, WuQu, Neutral),
        (Shen, TianXiang, Temple),
        (You, TaiYang, Neutral),
        (You, TianLiang, Neutral),
        (Xu, QiSha, Temple),
        (Hai, TianJi, Neutral),
    ],
    // 紫微在丑
    &[
        (Zi, TianJi, Temple),
        (Chou, ZiWei, Temple),
        (Chou, PoJun, Prosperous),
        (Mao, TianFu, Neutral),
        (Chen, TaiYin, Fallen),
        (Si, LianZhen, Fallen),
        (Si, TanLang, Fallen),
        (Wu, JuMen, Prosperous),
        (Wei, TianXiang, Neutral),
        (Shen, TianTong, Prosperous),
        (Shen, TianLiang, Fallen),
        (You, WuQu, Neutral),
        (You, QiSha, Prosperous),
        (Xu, TaiYang, Fallen),
    ],
    // 紫微在寅
    &[
        (Zi, PoJun, Temple),
        (Chou, TianJi, Fallen),
        (Yin, ZiWei, Prosperous),
        (Yin, TianFu, Temple),
        (Mao, TaiYin, Fallen),
        (Chen, TanLang, Temple),
        (Si, JuMen, Prosperous),
        (Wu, LianZhen, Neutral),
        (Wu, TianXiang, Temple),
        (Wei, TianLiang, Prosperous),
        (Shen, QiSha, Temple),
        (You, TianTong, Neutral),
        (Xu, WuQu, Temple),
        (Hai, TaiYang, Fallen),
    ],
    // 紫微在卯
    &[
        (Zi, TaiYang, Fallen),
        (Chou, TianFu, Temple),
        (Yin, TianJi, Neutral),
        (Yin, TaiYin, Prosperous),
        (Mao, ZiWei, Prosperous),
        (Mao, TanLang, Neutral),
        (Chen, JuMen, Fallen),
        (Si, TianXiang, Neutral),
        (Wu, TianLiang, Temple),
        (Wei, LianZhen, Neutral),
        (Wei, QiSha, Temple),
        (Xu, TianTong, Neutral),
        (Hai, WuQu, Neutral),
        (Hai, PoJun, Neutral),
    ],
    // 紫微在辰
    &[
        (Zi, WuQu, Neutral),
        (Zi, TianFu, Temple),
        (Chou, TaiYang, Fallen),
        (Chou, TaiYin, Temple),
        (Yin, TanLang, Neutral),
        (Mao, TianJi, Prosperous),
        (Mao, JuMen, Temple),
        (Chen, ZiWei, Neutral),
        (Chen, TianXiang, Neutral),
        (Si, TianLiang, Fallen),
        (Wu, QiSha, Prosperous),
        (Shen, LianZhen, Temple),
        (Xu, PoJun, Prosperous),
        (Hai, TianTong, Temple),
    ],
    // 紫微在巳
    &[
        (Zi, TianTong, Prosperous),
        (Zi, TaiYin, Temple),
        (Chou, WuQu, Temple),
        (Chou, TanLang, Temple),
        (Yin, TaiYang, Prosperous),
        (Yin, JuMen, Temple),
        (Mao, TianXiang, Fallen),
        (Chen, TianJi, Neutral),
        (Chen, TianLiang, Temple),
        (Si, ZiWei, Prosperous),
        (Si, QiSha, Neutral),
        (You, LianZhen, Neutral),
        (You, PoJun, Fallen),
        (Hai, TianFu, Neutral),
    ],
    // 紫微在午
    &[
        (Zi, TanLang, Prosperous),
        (Chou, TianTong, Fallen),
        (Chou, JuMen, Fallen),
        (Yin, WuQu, Neutral),
        (Yin, TianXiang, Temple),
        (Mao, TaiYang, Temple),
        (Mao, TianLiang, Temple),
        (Chen, QiSha, Temple),
        (Si, TianJi, Neutral),
        (Wu, ZiWei, Temple),
        (Shen, PoJun, Neutral),
        (Xu, LianZhen, Neutral),
        (Xu, TianFu, Temple),
        (Hai, TaiYin, Temple),
    ],
    // 紫微在未
    &[
        (Zi, JuMen, Prosperous),
        (Chou, TianXiang, Neutral),
        (Yin, TianTong, Neutral),
        (Yin, TianLiang, TempleProsperous),
        (Mao, WuQu, Neutral),
        (Mao, QiSha, Prosperous),
        (Chen, TaiYang, Prosperous),
        (Wu, TianJi, Temple),
        (Wei, ZiWei, Temple),
        (Wei, PoJun, Prosperous),
        (You, TianFu, Prosperous),
        (Xu, TaiYin, Prosperous),
        (Hai, LianZhen, Fallen),
        (Hai, TanLang, Fallen),
    ],
    // 紫微在申
    &[
        (Zi, LianZhen, Neutral),
        (Zi, TianXiang, Temple),
        (Chou, TianLiang, Prosperous),
        (Yin, QiSha, Temple),
        (Mao, TianTong, Neutral),
        (Chen, WuQu, Temple),
        (Si, TaiYang, Prosperous),
        (Wu, PoJun, Temple),
        (Wei, TianJi, Fallen),
        (Shen, ZiWei, Prosperous),
        (Shen, TianFu, Neutral),
        (You, TaiYin, Prosperous),
        (Xu, TanLang, Temple),
        (Hai, JuMen, Prosperous),
    ],
    // 紫微在酉
    &[
        (Zi, TianLiang, Temple),
        (Chou, LianZhen, Neutral),
        (Chou, QiSha, Temple),
        (Chen, TianTong, Neutral),
        (Si, WuQu, Neutral),
        (Si, PoJun, Neutral),
        (Wu, TaiYang, Prosperous),
        (Wei, TianFu, Temple),
        (Shen, TianJi, Neutral),
        (Shen, TaiYin, Neutral),
        (You, ZiWei, Prosperous),
        (You, TanLang, Neutral),
        (Xu, JuMen, Fallen),
        (Hai, TianXiang, Neutral),
    ],
    // 紫微在戌
    &[
        (Zi, QiSha, Prosperous),
        (Yin, LianZhen, Temple),
        (Chen, PoJun, Prosperous),
        (Si, TianTong, Temple),
        (Wu, WuQu, Prosperous),
        (Wu, TianFu, Prosperous),
        (Wei, TaiYang, Neutral),
        (Wei, TaiYin, Fallen),
        (Shen, TanLang, Neutral),
        (You, TianJi, Neutral),
        (You, JuMen, Temple),
        (Xu, ZiWei, Neutral),
        (Xu, TianXiang, Neutral),
        (Hai, TianLiang, Fallen),
    ],
    // 紫微在亥
    &[
        (Mao, LianZhen, Neutral),
        (Mao, PoJun, Fallen),
        (Si, TianFu, Neutral),
        (Wu, TianTong, Fallen),
        (Wu, TaiYin, Fallen),
        (Wei, WuQu, TempleProsperous),
        (Wei, TanLang, TempleProsperous),
        (Shen, TaiYang, Neutral),
        (Shen, JuMen, Temple),
        (You, TianXiang, Fallen),
        (Xu, TianJi, Neutral),
        (Xu, TianLiang, Prosperous),
        (Hai, ZiWei, Prosperous),
        (Hai, QiSha, Neutral),
    ],
];

/// Main-star layout for the chart variant whose 紫微 sits at `purple`.
pub const fn main_star_layout(purple: Branch) -> &'static [MainStarEntry] {
    MAIN_STAR_CHART[purple.index() as usize]
}
