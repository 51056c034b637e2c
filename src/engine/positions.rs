use crate::domain::{Seat, SeatIndex};

/// Найти следующее по кругу место, удовлетворяющее `pred`
/// (включая/исключая start). Единственная функция обхода стола:
/// очередь хода, блайнды, раздача карт и кнопка строятся на ней.
pub fn next_seat_where<F>(
    seats: &[Seat],
    start: SeatIndex,
    include_start: bool,
    pred: F,
) -> Option<SeatIndex>
where
    F: Fn(&Seat) -> bool,
{
    let max = seats.len();
    if max == 0 {
        return None;
    }

    let mut idx = start % max;
    if !include_start {
        idx = (idx + 1) % max;
    }

    for _ in 0..max {
        if pred(&seats[idx]) {
            return Some(idx);
        }
        idx = (idx + 1) % max;
    }

    None
}

/// Следующее место, которое может сделать ход (в раздаче и с фишками).
pub fn next_active_seat(seats: &[Seat], start: SeatIndex, include_start: bool) -> Option<SeatIndex> {
    next_seat_where(seats, start, include_start, Seat::is_active)
}

/// Следующее место с ненулевым стеком.
pub fn next_funded_seat(seats: &[Seat], start: SeatIndex, include_start: bool) -> Option<SeatIndex> {
    next_seat_where(seats, start, include_start, |s| !s.stack.is_zero())
}

/// Все места, удовлетворяющие `pred`, по кругу начиная со start.
pub fn collect_seats_from<F>(seats: &[Seat], start: SeatIndex, pred: F) -> Vec<SeatIndex>
where
    F: Fn(&Seat) -> bool,
{
    let max = seats.len();
    (0..max)
        .map(|i| (start + i) % max)
        .filter(|&idx| pred(&seats[idx]))
        .collect()
}

/// Позиции блайндов: (small blind, big blind).
///
/// Хедз-ап: малый блайнд ставит дилер, большой – оппонент.
/// Иначе SB – следующий после кнопки, BB – следующий после SB.
/// Места без фишек пропускаются.
pub fn blind_positions(seats: &[Seat], dealer: SeatIndex) -> Option<(SeatIndex, SeatIndex)> {
    let funded = seats.iter().filter(|s| !s.stack.is_zero()).count();
    if funded < 2 {
        return None;
    }

    let sb = if funded == 2 {
        next_funded_seat(seats, dealer, true)?
    } else {
        next_funded_seat(seats, dealer, false)?
    };
    let bb = next_funded_seat(seats, sb, false)?;
    Some((sb, bb))
}
