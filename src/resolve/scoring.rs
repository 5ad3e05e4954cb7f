use crate::domain::card::{Card, Rank};

/// Баккара-значение ранга: A=1, 2..9 — номинал, 10/J/Q/K = 0.
pub fn baccarat_value(rank: Rank) -> u32 {
    match rank {
        Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 0,
        r => r.value(),
    }
}

/// Баккара-очки руки: сумма значений по модулю 10.
///
/// Используется несколькими дескрипторами (baccarat*, teen3, teen9) —
/// реализовано один раз здесь. Заглушки и нечитаемые ранги дают 0.
pub fn baccarat_score(hand: &[Card]) -> u32 {
    let sum: u32 = hand
        .iter()
        .filter(|c| !c.placeholder)
        .filter_map(|c| c.rank)
        .map(baccarat_value)
        .sum();
    sum % 10
}

/// Сумма значений карт руки (A=1 ... K=13).
pub fn hand_value_sum(hand: &[Card]) -> u32 {
    hand.iter().map(|c| c.value()).sum()
}

/// Максимальное значение одиночной карты руки.
pub fn high_card_value(hand: &[Card]) -> u32 {
    hand.iter().map(|c| c.value()).max().unwrap_or(0)
}
