use crate::domain::card::{Card, Suit};

/// Один именованный слот: роль + явные индексы карт в сыром списке.
#[derive(Clone, Copy, Debug)]
pub struct SlotSpec {
    pub role: &'static str,
    pub indices: &'static [usize],
}

/// Правило раскладки сырого списка карт по участникам.
///
/// Раскладка всегда работает по ПОЗИЦИЯМ исходного списка: заглушки
/// (`"1"`) на этом этапе ещё не выброшены, иначе позиционные правила
/// поехали бы на недосданных раундах.
#[derive(Clone, Copy, Debug)]
pub enum DistributionRule {
    /// Фиксированные позиции: card[0] = Dragon, card[1] = Tiger и т.п.
    FixedSlots(&'static [SlotSpec]),

    /// Раздача по кругу: карта i → roles[i % roles.len()].
    ///
    /// `per_role` ограничивает основной круг (`roles.len() * per_role`
    /// карт); всё сверх лимита уходит роли `trailing`, если она задана
    /// (teen8: 24 карты по кругу на 8 игроков, хвост — дилеру).
    RoundRobin {
        roles: &'static [&'static str],
        per_role: Option<usize>,
        trailing: Option<&'static str>,
    },

    /// Чередование двух сторон по чётности индекса (andar/bahar,
    /// teen patti A/B). `lead_joker` — ведущая карта-джокер, сдвигающая
    /// чётность всей последовательности (есть не у всех вариантов).
    Alternating {
        first: &'static str,
        second: &'static str,
        lead_joker: Option<&'static str>,
    },

    /// Парные колонки: карты 0..N — первая карманная карта каждого из N
    /// игроков, N..2N — вторая и т.д.; остаток — общий борд (poker6).
    Columns {
        roles: &'static [&'static str],
        per_role: usize,
        board: Option<&'static str>,
    },

    /// Все карты в одну общую руку (lucky7, worli, cmeter).
    Board(&'static str),

    /// Карта уходит роли своей масти (race20: четыре «гонщика»-масти).
    /// Карты с нераспознанной мастью никому не достаются.
    BySuit(&'static [(Suit, &'static str)]),
}

impl DistributionRule {
    /// Список ролей в порядке отображения. Непустой для любого правила —
    /// это гарантирует инвариант «участники известной игры не пусты».
    pub fn roles(&self) -> Vec<&'static str> {
        match self {
            DistributionRule::FixedSlots(slots) => slots.iter().map(|s| s.role).collect(),
            DistributionRule::RoundRobin {
                roles, trailing, ..
            } => {
                let mut out: Vec<&'static str> = roles.to_vec();
                if let Some(t) = *trailing {
                    out.push(t);
                }
                out
            }
            DistributionRule::Alternating {
                first,
                second,
                lead_joker,
            } => {
                let mut out = Vec::with_capacity(3);
                if let Some(j) = *lead_joker {
                    out.push(j);
                }
                out.push(*first);
                out.push(*second);
                out
            }
            DistributionRule::Columns { roles, board, .. } => {
                let mut out: Vec<&'static str> = roles.to_vec();
                if let Some(b) = *board {
                    out.push(b);
                }
                out
            }
            DistributionRule::Board(role) => vec![*role],
            DistributionRule::BySuit(map) => map.iter().map(|(_, r)| *r).collect(),
        }
    }

    /// Разложить карты по ролям в порядке сдачи.
    ///
    /// Возвращает пары (индекс роли в `roles()`, карта) — порядок сдачи
    /// нужен производным правилам победителя вроде «гонки до N очков».
    /// Карты, которым правило не назначает роли, молча пропускаются.
    pub fn assign(&self, cards: &[Card]) -> Vec<(usize, Card)> {
        let mut out = Vec::with_capacity(cards.len());

        match self {
            DistributionRule::FixedSlots(slots) => {
                for (i, card) in cards.iter().enumerate() {
                    if let Some(slot_idx) =
                        slots.iter().position(|s| s.indices.contains(&i))
                    {
                        out.push((slot_idx, *card));
                    }
                }
            }

            DistributionRule::RoundRobin {
                roles,
                per_role,
                trailing,
            } => {
                let main_cap = per_role.map(|p| roles.len() * p);
                for (i, card) in cards.iter().enumerate() {
                    match main_cap {
                        Some(cap) if i >= cap => {
                            if trailing.is_some() {
                                out.push((roles.len(), *card));
                            }
                        }
                        _ => out.push((i % roles.len(), *card)),
                    }
                }
            }

            DistributionRule::Alternating { lead_joker, .. } => {
                // Индексация ролей согласована с roles():
                // с джокером — [joker, first, second], без — [first, second].
                let (joker_idx, first_idx, second_idx) = if lead_joker.is_some() {
                    (Some(0), 1, 2)
                } else {
                    (None, 0, 1)
                };

                for (i, card) in cards.iter().enumerate() {
                    if let Some(j) = joker_idx {
                        if i == 0 {
                            out.push((j, *card));
                            continue;
                        }
                        let parity = (i - 1) % 2;
                        out.push((if parity == 0 { first_idx } else { second_idx }, *card));
                    } else {
                        out.push((if i % 2 == 0 { first_idx } else { second_idx }, *card));
                    }
                }
            }

            DistributionRule::Columns {
                roles,
                per_role,
                board,
            } => {
                let cap = roles.len() * per_role;
                for (i, card) in cards.iter().enumerate() {
                    if i < cap {
                        out.push((i % roles.len(), *card));
                    } else if board.is_some() {
                        out.push((roles.len(), *card));
                    }
                }
            }

            DistributionRule::Board(_) => {
                for card in cards {
                    out.push((0, *card));
                }
            }

            DistributionRule::BySuit(map) => {
                for card in cards {
                    if let Some(suit) = card.suit {
                        if let Some(idx) = map.iter().position(|(s, _)| *s == suit) {
                            out.push((idx, *card));
                        }
                    }
                }
            }
        }

        out
    }
}
