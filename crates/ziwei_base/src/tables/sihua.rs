//! Four-transformation table (十干四化).

use crate::ganzhi::Stem;
use crate::star::StarName::{
    JuMen, LianZhen, PoJun, TaiYang, TaiYin, TanLang, TianJi, TianLiang, TianTong, WenChang,
    WenQu, WuQu, YouBi, ZiWei, ZuoFu,
};
use crate::star::{StarName, Transformation};

/// `[stem]` → stars taking 祿, 權, 科, 忌 in that order.
const FOUR_TRANSFORMATIONS: [[StarName; 4]; 10] = [
    [LianZhen, PoJun, WuQu, TaiYang],      // 甲
    [TianJi, TianLiang, ZiWei, TaiYin],    // 乙
    [TianTong, TianJi, WenChang, LianZhen], // 丙
    [TaiYin, TianTong, TianJi, JuMen],     // 丁
    [TanLang, TaiYin, YouBi, TianJi],      // 戊
    [WuQu, TanLang, TianLiang, WenQu],     // 己
    [TaiYang, WuQu, TaiYin, TianTong],     // 庚
    [JuMen, TaiYang, WenQu, WenChang],     // 辛
    [TianLiang, ZiWei, ZuoFu, WuQu],       // 壬
    [PoJun, JuMen, TaiYin, TanLang],       // 癸
];

/// The four target stars of a stem, indexed by [`Transformation::index`].
pub const fn transformation_stars(stem: Stem) -> [StarName; 4] {
    FOUR_TRANSFORMATIONS[stem.index() as usize]
}

/// Star that takes `kind` under `stem`.
pub const fn transformation_star(stem: Stem, kind: Transformation) -> StarName {
    FOUR_TRANSFORMATIONS[stem.index() as usize][kind.index() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ganzhi::ALL_STEMS;

    #[test]
    fn jia_row() {
        assert_eq!(
            transformation_stars(Stem::Jia),
            [LianZhen, PoJun, WuQu, TaiYang]
        );
    }

    #[test]
    fn four_distinct_stars_per_stem() {
        for stem in ALL_STEMS {
            let row = transformation_stars(stem);
            for i in 0..4 {
                for j in (i + 1)..4 {
                    assert_ne!(row[i], row[j], "stem {stem}");
                }
            }
        }
    }

    #[test]
    fn lookup_by_kind() {
        assert_eq!(transformation_star(Stem::Wu, Transformation::Ke), YouBi);
        assert_eq!(transformation_star(Stem::Ren, Transformation::Ke), ZuoFu);
        assert_eq!(transformation_star(Stem::Xin, Transformation::Ji), WenChang);
    }
}
