use crate::domain::card::Rank;

/// Битовая маска рангов: бит 0 = двойка, бит 12 = туз.
pub type RankMask = u16;

const FIVE_IN_A_ROW: RankMask = 0b1_1111;
const WHEEL: RankMask = (1 << 12) | 0b1111;

/// Маски стритов, индекс = старшая карта минус 5 (0 – колесо A2345).
pub const STRAIGHT_MASKS: [RankMask; 10] = straight_masks();

const fn straight_masks() -> [RankMask; 10] {
    let mut masks = [WHEEL; 10];
    let mut i = 1;
    while i < masks.len() {
        masks[i] = FIVE_IN_A_ROW << (i - 1);
        i += 1;
    }
    masks
}

pub fn rank_to_bit(rank: Rank) -> RankMask {
    1 << (rank.value() - 2)
}

/// Старшая карта стрита в маске, если стрит есть.
/// Для колеса это пятёрка, туз считается младшим.
pub fn detect_straight(rank_mask: RankMask) -> Option<Rank> {
    (0..STRAIGHT_MASKS.len())
        .rev()
        .find(|&i| rank_mask & STRAIGHT_MASKS[i] == STRAIGHT_MASKS[i])
        .and_then(|i| Rank::from_value(i as u8 + 5))
}

