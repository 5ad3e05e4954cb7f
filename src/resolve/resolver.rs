use crate::descriptor::{descriptor_for, DescriptorKind, GameDescriptor, WinFallback, WinTarget};
use crate::domain::card::Card;
use crate::domain::flags::DecodeFlag;
use crate::domain::game_type::{CanonicalGameType, GameType};
use crate::domain::participant::Participant;
use crate::domain::result::CanonicalResult;
use crate::feed::{parse_record, ParsedFields, RawRoundRecord};

use super::cricket;
use super::scoring::{baccarat_score, hand_value_sum, high_card_value};

/// Декодировать запись известного типа игры в канонический результат.
///
/// Тотальная функция: любой частичный/кривой вход даёт результат с
/// явными «неизвестно» и флагами, но никогда не панику.
pub fn resolve(game: CanonicalGameType, record: &RawRoundRecord) -> CanonicalResult {
    let descriptor = descriptor_for(game);
    let mut flags = Vec::new();

    if descriptor.kind == DescriptorKind::CricketMeta {
        return cricket::resolve_cricket(game, descriptor, record, flags);
    }

    let parsed = parse_record(record, descriptor, &mut flags);

    // 1. Раскладка карт по участникам. Роли присутствуют все, даже с
    //    пустыми руками — «ещё не сдано» тоже валидное состояние.
    let roles = descriptor.distribution.roles();
    let assignments = descriptor.distribution.assign(&parsed.cards);

    let mut participants: Vec<Participant> =
        roles.iter().map(|r| Participant::new(*r)).collect();
    for (role_idx, card) in &assignments {
        if !card.placeholder {
            participants[*role_idx].cards.push(*card);
        }
    }

    // 2. Победитель: сперва карта кодов этой игры, затем производное
    //    правило, иначе — никого не назначаем и показываем сырой код.
    let outcome = determine_winner(descriptor, &parsed, &participants, &assignments, &mut flags);
    if let Some(idx) = outcome.winner_idx {
        participants[idx].is_winner = true;
    }

    // 3. Побочные рынки в порядке правил дескриптора.
    let mut side_markets = Vec::new();
    for rule in descriptor.side_markets {
        side_markets.extend(rule.evaluate(&participants, &parsed.cards, &parsed.desc_segments));
    }

    let raw_win_code = parsed.win.clone().unwrap_or_default();
    let win_label = pick_win_label(&parsed, outcome.label, &participants);

    CanonicalResult {
        game_type: GameType::Known(game),
        participants,
        side_markets,
        raw_win_code,
        win_label,
        round_id: record.round_id.clone(),
        flags,
    }
}

/// Итог определения победителя.
struct WinOutcome {
    winner_idx: Option<usize>,
    /// Метка исхода, если её удалось вывести (роль, «Tie», «Low Card»...).
    label: Option<String>,
}

impl WinOutcome {
    fn none() -> Self {
        Self {
            winner_idx: None,
            label: None,
        }
    }

    fn labeled(label: &str) -> Self {
        Self {
            winner_idx: None,
            label: Some(label.to_string()),
        }
    }
}

fn determine_winner(
    descriptor: &GameDescriptor,
    parsed: &ParsedFields,
    participants: &[Participant],
    assignments: &[(usize, Card)],
    flags: &mut Vec<DecodeFlag>,
) -> WinOutcome {
    match &parsed.win {
        Some(code) => match descriptor.win_target(code) {
            Some(target) => apply_target(target, participants),
            None => {
                // Код есть, но в карте его нет: пробуем производное
                // правило; не вышло — фиксируем флаг, победителя не выдумываем.
                match derive_winner(descriptor, participants, assignments) {
                    Some(outcome) => outcome,
                    None => {
                        flags.push(DecodeFlag::UnmappedWinCode(code.clone()));
                        WinOutcome::none()
                    }
                }
            }
        },
        None => {
            flags.push(DecodeFlag::missing_field("win"));
            derive_winner(descriptor, participants, assignments).unwrap_or_else(WinOutcome::none)
        }
    }
}

fn apply_target(target: WinTarget, participants: &[Participant]) -> WinOutcome {
    match target {
        WinTarget::Role(role) => {
            let idx = participants.iter().position(|p| p.role == role);
            WinOutcome {
                winner_idx: idx,
                label: Some(role.to_string()),
            }
        }
        WinTarget::Outcome(label) => WinOutcome::labeled(label),
        WinTarget::Tie => WinOutcome::labeled("Tie"),
        WinTarget::NoResult => WinOutcome::labeled("No Result"),
    }
}

/// Производное правило победителя. `None` = правило неприменимо к тому,
/// что реально есть в записи (мало рук, нет карт).
fn derive_winner(
    descriptor: &GameDescriptor,
    participants: &[Participant],
    assignments: &[(usize, Card)],
) -> Option<WinOutcome> {
    match descriptor.win_fallback {
        WinFallback::None => None,

        WinFallback::BaccaratScore => {
            compare_hands(participants, |hand| baccarat_score(hand))
        }

        WinFallback::HighCardValue => {
            compare_hands(participants, |hand| high_card_value(hand))
        }

        WinFallback::HandValueSum => compare_hands(participants, |hand| hand_value_sum(hand)),

        WinFallback::ThresholdRace(threshold) => {
            // По порядку сдачи: выигрывает рука, первой добравшая порог.
            let mut sums = vec![0u32; participants.len()];
            for (role_idx, card) in assignments {
                if card.placeholder {
                    continue;
                }
                sums[*role_idx] += card.value();
                if sums[*role_idx] >= threshold {
                    return Some(WinOutcome {
                        winner_idx: Some(*role_idx),
                        label: Some(participants[*role_idx].role.clone()),
                    });
                }
            }
            None
        }

        WinFallback::PivotCard(pivot) => {
            let card = participants.iter().flat_map(|p| p.cards.first()).next()?;
            let value = card.value();
            if value == 0 {
                return None;
            }
            let label = if value < pivot {
                "Low Card"
            } else if value > pivot {
                "High Card"
            } else {
                return Some(WinOutcome::labeled("Tie"));
            };
            Some(WinOutcome::labeled(label))
        }
    }
}

/// Сравнить руки по метрике: строго лучший выигрывает, равенство — ничья.
///
/// Нужны минимум две сданные руки: по одной руке в недосданном раунде
/// победителя объявлять нельзя.
fn compare_hands<F>(participants: &[Participant], metric: F) -> Option<WinOutcome>
where
    F: Fn(&[Card]) -> u32,
{
    let contenders: Vec<(usize, u32)> = participants
        .iter()
        .enumerate()
        .filter(|(_, p)| !p.cards.is_empty())
        .map(|(i, p)| (i, metric(&p.cards)))
        .collect();

    if contenders.len() < 2 {
        return None;
    }

    let best = contenders.iter().map(|(_, s)| *s).max()?;
    let mut at_best = contenders.iter().filter(|(_, s)| *s == best);
    let (winner_idx, _) = *at_best.next()?;

    if at_best.next().is_some() {
        // Несколько рук с одинаковым максимумом.
        return Some(WinOutcome::labeled("Tie"));
    }

    Some(WinOutcome {
        winner_idx: Some(winner_idx),
        label: Some(participants[winner_idx].role.clone()),
    })
}

/// Подпись победителя для показа: `winnat` из фида → выведенная метка →
/// роль победителя → сырой код → `"N/A"`.
fn pick_win_label(
    parsed: &ParsedFields,
    derived: Option<String>,
    participants: &[Participant],
) -> String {
    if let Some(nat) = &parsed.winnat {
        return nat.clone();
    }
    if let Some(label) = derived {
        return label;
    }
    if let Some(winner) = participants.iter().find(|p| p.is_winner) {
        return winner.role.clone();
    }
    if let Some(code) = &parsed.win {
        return code.clone();
    }
    "N/A".to_string()
}
