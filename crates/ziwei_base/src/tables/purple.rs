//! Purple Star (紫微) position by bureau and lunar day.

use crate::error::ZiweiError;
use crate::ganzhi::Branch;
use crate::ganzhi::Branch::{Chen, Chou, Hai, Mao, Shen, Si, Wei, Wu, Xu, Yin, You, Zi};

use super::bureau::Bureau;

/// `[bureau][lunar_day - 1]`.
#[rustfmt::skip]
const PURPLE_STAR_TABLE: [[Branch; 30]; 5] = [
    // 水二局
    [Chou, Yin, Yin, Mao, Mao, Chen, Chen, Si, Si, Wu, Wu, Wei, Wei, Shen, Shen, You, You, Xu, Xu, Hai, Hai, Zi, Zi, Chou, Chou, Yin, Yin, Mao, Mao, Chen],
    // 木三局
    [Chen, Chou, Yin, Si, Yin, Mao, Wu, Mao, Chen, Wei, Chen, Si, Shen, Si, Wu, You, Wu, Wei, Xu, Wei, Shen, Hai, Shen, You, Zi, You, Xu, Chou, Xu, Hai],
    // 金四局
    [Hai, Chen, Chou, Yin, Zi, Si, Yin, Mao, Chou, Wu, Mao, Chen, Yin, Wei, Chen, Si, Mao, Shen, Si, Wu, Chen, You, Wu, Wei, Si, Xu, Wei, Shen, Wu, Hai],
    // 土五局
    [Wu, Hai, Chen, Chou, Yin, Wei, Zi, Si, Yin, Mao, Shen, Chou, Wu, Mao, Chen, You, Yin, Wei, Chen, Si, Xu, Mao, Shen, Si, Wu, Hai, Chen, You, Wu, Wei],
    // 火六局
    [You, Wu, Hai, Chen, Chou, Yin, Xu, Wei, Zi, Si, Yin, Mao, Hai, Shen, Chou, Wu, Mao, Chen, Zi, You, Yin, Wei, Chen, Si, Chou, Xu, Mao, Shen, Si, Wu],
];

/// Branch holding 紫微 for a bureau and lunar day (1..=30).
pub fn purple_star_branch(bureau: Bureau, lunar_day: u8) -> Result<Branch, ZiweiError> {
    if !(1..=30).contains(&lunar_day) {
        return Err(ZiweiError::InvalidLunarDay(lunar_day));
    }
    Ok(PURPLE_STAR_TABLE[bureau.index()][(lunar_day - 1) as usize])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn water_two_first_days() {
        assert_eq!(purple_star_branch(Bureau::Water2, 1), Ok(Chou));
        assert_eq!(purple_star_branch(Bureau::Water2, 2), Ok(Yin));
        assert_eq!(purple_star_branch(Bureau::Water2, 30), Ok(Chen));
    }

    #[test]
    fn fire_six_day_one() {
        assert_eq!(purple_star_branch(Bureau::Fire6, 1), Ok(You));
    }

    #[test]
    fn day_out_of_range() {
        assert_eq!(
            purple_star_branch(Bureau::Wood3, 0),
            Err(ZiweiError::InvalidLunarDay(0))
        );
        assert_eq!(
            purple_star_branch(Bureau::Wood3, 31),
            Err(ZiweiError::InvalidLunarDay(31))
        );
    }

    #[test]
    fn water_two_advances_every_two_days() {
        // 水二局 moves one branch for every two days after day 1.
        for day in 1..=30u8 {
            let expected = Chou.offset(day as i32 / 2);
            assert_eq!(purple_star_branch(Bureau::Water2, day), Ok(expected), "day {day}");
        }
    }
}
