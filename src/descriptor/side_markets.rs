use crate::domain::card::{Card, CardColor, Suit};
use crate::domain::participant::{Participant, SideMarketResult};

/// Библиотека вычислителей побочных рынков.
///
/// Набор фиксированный; дескриптор игры выбирает, какие из них и с
/// какими параметрами применимы к его раздаче.
#[derive(Clone, Copy, Debug)]
pub enum SideMarketRule {
    /// Пара (повтор ранга) в руке роли.
    Pair { role: &'static str },
    /// Все карты руки одного цвета.
    ColorPlus { role: &'static str },
    /// Сумма значений руки достигла порога («60 or more»).
    ThresholdSum {
        role: &'static str,
        threshold: u32,
        name: &'static str,
    },
    /// Суммы значений по мастям среди всех сданных карт.
    SuitGroups,
    /// Чёт/нечет решающей карты.
    OddEven { role: &'static str, index: usize },
    /// Цвет решающей карты.
    RedBlack { role: &'static str, index: usize },
    /// Прокинуть сегмент `#`-описания как текстовый рынок. Схема
    /// сегментов у каждой игры своя, поэтому номер живёт в дескрипторе.
    DescSegment {
        segment: usize,
        name: &'static str,
    },
}

impl SideMarketRule {
    /// Вычислить рынок. `None` = по текущим данным рынок ещё не определён
    /// (рука не сдана, сегмента нет) — в выход такой рынок не попадает,
    /// чтобы не утверждать то, чего в записи нет.
    pub fn evaluate(
        &self,
        participants: &[Participant],
        all_cards: &[Card],
        segments: &[String],
    ) -> Vec<SideMarketResult> {
        match self {
            SideMarketRule::Pair { role } => {
                let hand = hand_of(participants, role);
                if hand.len() < 2 {
                    return Vec::new();
                }
                vec![SideMarketResult::flag(
                    format!("{role} Pair"),
                    has_pair(hand),
                )]
            }

            SideMarketRule::ColorPlus { role } => {
                let hand = hand_of(participants, role);
                if hand.len() < 2 {
                    return Vec::new();
                }
                vec![SideMarketResult::flag(
                    format!("{role} Color Plus"),
                    same_color(hand),
                )]
            }

            SideMarketRule::ThresholdSum {
                role,
                threshold,
                name,
            } => {
                let hand = hand_of(participants, role);
                if hand.is_empty() {
                    return Vec::new();
                }
                let sum: u32 = hand.iter().map(|c| c.value()).sum();
                vec![SideMarketResult::flag(*name, sum >= *threshold)]
            }

            SideMarketRule::SuitGroups => {
                let mut out = Vec::new();
                for (suit, name) in [
                    (Suit::Hearts, "Hearts"),
                    (Suit::Diamonds, "Diamonds"),
                    (Suit::Clubs, "Clubs"),
                    (Suit::Spades, "Spades"),
                ] {
                    let sum: u32 = all_cards
                        .iter()
                        .filter(|c| !c.placeholder && c.suit == Some(suit))
                        .map(|c| c.value())
                        .sum();
                    if sum > 0 {
                        out.push(SideMarketResult::number(name, sum as i64));
                    }
                }
                out
            }

            SideMarketRule::OddEven { role, index } => {
                match deciding_card(participants, role, *index) {
                    Some(card) if card.value() > 0 => {
                        let label = if card.value() % 2 == 1 { "Odd" } else { "Even" };
                        vec![SideMarketResult::text(format!("{role} Odd/Even"), label)]
                    }
                    _ => Vec::new(),
                }
            }

            SideMarketRule::RedBlack { role, index } => {
                match deciding_card(participants, role, *index) {
                    Some(card) => match card.color() {
                        CardColor::Red => {
                            vec![SideMarketResult::text(format!("{role} Red/Black"), "Red")]
                        }
                        CardColor::Black => {
                            vec![SideMarketResult::text(format!("{role} Red/Black"), "Black")]
                        }
                        CardColor::Unknown => Vec::new(),
                    },
                    _ => Vec::new(),
                }
            }

            SideMarketRule::DescSegment { segment, name } => {
                match segments.get(*segment) {
                    Some(text) if !text.trim().is_empty() => {
                        vec![SideMarketResult::text(*name, text.trim())]
                    }
                    _ => Vec::new(),
                }
            }
        }
    }
}

fn hand_of<'a>(participants: &'a [Participant], role: &str) -> &'a [Card] {
    participants
        .iter()
        .find(|p| p.role == role)
        .map(|p| p.cards.as_slice())
        .unwrap_or(&[])
}

fn deciding_card(participants: &[Participant], role: &str, index: usize) -> Option<Card> {
    hand_of(participants, role).get(index).copied()
}

/// Есть ли в руке повтор ранга.
fn has_pair(hand: &[Card]) -> bool {
    for (i, a) in hand.iter().enumerate() {
        for b in &hand[i + 1..] {
            if let (Some(ra), Some(rb)) = (a.rank, b.rank) {
                if ra == rb {
                    return true;
                }
            }
        }
    }
    false
}

/// Все карты руки одного (известного) цвета.
fn same_color(hand: &[Card]) -> bool {
    let mut colors = hand.iter().map(|c| c.color());
    match colors.next() {
        Some(first) if first != CardColor::Unknown => colors.all(|c| c == first),
        _ => false,
    }
}
