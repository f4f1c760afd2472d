//! Circle-method round robin.
//!
//! The first slot stays fixed while the others rotate one step per round; an
//! odd field gets an empty slot and whoever lands opposite it sits out.

use std::iter;

/// `(home, away)` pairings played on the same day.
pub type Round<T> = Vec<(T, T)>;

/// Moves the last slot to second position, shifting the others down.
fn rotate<T: Copy>(slots: &[Option<T>]) -> Vec<Option<T>> {
    match slots {
        [first, middle @ .., last] if !middle.is_empty() => iter::once(*first)
            .chain(iter::once(*last))
            .chain(middle.iter().copied())
            .collect(),
        _ => slots.to_vec(),
    }
}

/// Pairs slot `i` with slot `n - 1 - i`. The anchor pairing swaps sides on
/// odd rounds; the other pairings keep slot order, which the rotation already
/// alternates.
fn pair_round<T: Copy>(round: usize, slots: &[Option<T>]) -> Round<T> {
    let n = slots.len();

    (0..n / 2)
        .filter_map(|i| match (slots[i], slots[n - 1 - i]) {
            (Some(a), Some(b)) if i == 0 && round % 2 == 1 => Some((b, a)),
            (Some(a), Some(b)) => Some((a, b)),
            _ => None,
        })
        .collect()
}

/// Every team meets every other team exactly once.
///
/// Yields `n - 1` rounds for an even field and `n` rounds for an odd one, with
/// one team resting per round. Fewer than two teams yields no rounds.
pub fn round_robin_pairings<T: Copy>(teams: &[T]) -> Vec<Round<T>> {
    if teams.len() < 2 {
        return Vec::new();
    }

    let mut slots: Vec<Option<T>> = teams.iter().copied().map(Some).collect();
    if slots.len() % 2 == 1 {
        slots.push(None);
    }
    let round_count = slots.len() - 1;

    iter::successors(Some(slots), |previous| Some(rotate(previous)))
        .take(round_count)
        .enumerate()
        .map(|(round, slots)| pair_round(round, &slots))
        .collect()
}

/// Spreads `rounds` over `days` match days. Once the rounds run out they are
/// replayed from the start with home and away reversed, as often as needed.
pub fn extend_over_days<T: Copy>(rounds: &[Round<T>], days: usize) -> Vec<Round<T>> {
    if rounds.is_empty() {
        return vec![Vec::new(); days];
    }

    (0..days)
        .map(|day| {
            let round = &rounds[day % rounds.len()];
            if day < rounds.len() {
                round.clone()
            } else {
                round.iter().map(|&(home, away)| (away, home)).collect()
            }
        })
        .collect()
}
