use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::{Chips, SeatIndex};

/// Сайд-пот: часть банка, в которую участвуют только некоторые места.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SidePot {
    pub amount: Chips,
    /// Места, внёсшие не меньше уровня этого пота (по возрастанию индекса).
    pub eligible_seats: Vec<SeatIndex>,
}

/// Посчитать сайд-поты из сумм, которые внесли места за всю раздачу.
///
/// Выход: список от основного пота к старшим. Сумма `amount` всех потов
/// равна сумме вкладов. Сфолдившие места тоже попадают в `eligible_seats`,
/// отсеивать их – задача шоудауна.
pub fn compute_side_pots(contributions: &HashMap<SeatIndex, Chips>) -> Vec<SidePot> {
    let mut entries: Vec<(SeatIndex, Chips)> = contributions
        .iter()
        .filter(|(_, chips)| !chips.is_zero())
        .map(|(seat, chips)| (*seat, *chips))
        .collect();

    if entries.is_empty() {
        return Vec::new();
    }

    entries.sort_by_key(|(seat, c)| (c.0, *seat));

    let mut pots: Vec<SidePot> = Vec::new();
    let mut prev_level = Chips::ZERO;

    for &(_, level) in entries.iter() {
        if level == prev_level {
            continue;
        }

        // Каждый вносит в этот слой min(вклад, level) - prev_level.
        let mut amount = Chips::ZERO;
        let mut eligible = Vec::new();
        for &(seat, contrib) in entries.iter() {
            if contrib > prev_level {
                amount += contrib.min(level) - prev_level;
            }
            if contrib >= level {
                eligible.push(seat);
            }
        }
        eligible.sort_unstable();

        pots.push(SidePot {
            amount,
            eligible_seats: eligible,
        });
        prev_level = level;
    }

    pots
}
