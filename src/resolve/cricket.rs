use std::collections::BTreeMap;

use serde_json::Value;

use crate::descriptor::{GameDescriptor, WinTarget};
use crate::domain::flags::DecodeFlag;
use crate::domain::game_type::{CanonicalGameType, GameType};
use crate::domain::participant::{Participant, SideMarketResult};
use crate::domain::result::CanonicalResult;
use crate::feed::RawRoundRecord;

/// Агрегат одного иннингса.
#[derive(Clone, Copy, Debug, Default)]
struct InningsTotals {
    runs: u64,
    wickets: u64,
    balls: u64,
}

/// Крикет-мета путь: вместо карт агрегируется ball-by-ball `score`.
///
/// Группировка по иннингсам: суммарные раны, калитки и оверы. Кривые
/// записи мячей пропускаются с флагом — остальной раунд не страдает.
pub fn resolve_cricket(
    game: CanonicalGameType,
    descriptor: &GameDescriptor,
    record: &RawRoundRecord,
    mut flags: Vec<DecodeFlag>,
) -> CanonicalResult {
    let mut innings: BTreeMap<u64, InningsTotals> = BTreeMap::new();

    match &record.score {
        Some(balls) => {
            for (i, ball) in balls.iter().enumerate() {
                match read_ball(ball) {
                    Some((inning, runs, wicket)) => {
                        let totals = innings.entry(inning).or_default();
                        totals.runs += runs;
                        totals.balls += 1;
                        if wicket {
                            totals.wickets += 1;
                        }
                    }
                    None => flags.push(DecodeFlag::MalformedBallRecord(i)),
                }
            }
        }
        None => flags.push(DecodeFlag::missing_field("score")),
    }

    // Участники-команды: минимум те, что объявлены дескриптором,
    // плюс команды дополнительных иннингсов, если фид их прислал.
    let mut participants: Vec<Participant> = descriptor
        .distribution
        .roles()
        .iter()
        .map(|r| Participant::new(*r))
        .collect();
    for inning in innings.keys() {
        let role = format!("Team {inning}");
        if !participants.iter().any(|p| p.role == role) {
            participants.push(Participant::new(role));
        }
    }

    let mut side_markets = Vec::new();
    for (inning, totals) in &innings {
        side_markets.push(SideMarketResult::number(
            format!("Innings {inning} Runs"),
            totals.runs as i64,
        ));
        side_markets.push(SideMarketResult::number(
            format!("Innings {inning} Wickets"),
            totals.wickets as i64,
        ));
        side_markets.push(SideMarketResult::text(
            format!("Innings {inning} Overs"),
            format!("{}.{}", totals.balls / 6, totals.balls % 6),
        ));
    }

    // Победитель — только по карте кодов; из сырых мячей итог матча
    // не выводим (live-запись почти всегда не доиграна).
    let win = record
        .win
        .as_ref()
        .map(|w| w.trim().to_string())
        .filter(|w| !w.is_empty());

    let mut win_label: Option<String> = None;
    if let Some(code) = &win {
        match descriptor.win_target(code) {
            Some(WinTarget::Role(role)) => {
                if let Some(p) = participants.iter_mut().find(|p| p.role == role) {
                    p.is_winner = true;
                }
                win_label = Some(role.to_string());
            }
            Some(WinTarget::Tie) => win_label = Some("Tie".to_string()),
            Some(WinTarget::Outcome(label)) => win_label = Some(label.to_string()),
            Some(WinTarget::NoResult) => win_label = Some("No Result".to_string()),
            None => flags.push(DecodeFlag::UnmappedWinCode(code.clone())),
        }
    } else {
        flags.push(DecodeFlag::missing_field("win"));
    }

    let winnat = record
        .winnat
        .as_ref()
        .map(|w| w.trim().to_string())
        .filter(|w| !w.is_empty());

    let win_label = winnat
        .or(win_label)
        .or_else(|| win.clone())
        .unwrap_or_else(|| "N/A".to_string());

    CanonicalResult {
        game_type: GameType::Known(game),
        participants,
        side_markets,
        raw_win_code: win.unwrap_or_default(),
        win_label,
        round_id: record.round_id.clone(),
        flags,
    }
}

/// Прочитать одну запись мяча: (иннингс, раны, калитка).
///
/// Ключи и типы значений гуляют между продуктами, поэтому принимаем и
/// числа, и числа-в-строках.
fn read_ball(ball: &Value) -> Option<(u64, u64, bool)> {
    let obj = ball.as_object()?;

    let inning = obj
        .get("innings")
        .or_else(|| obj.get("inning"))
        .and_then(read_u64)?;

    let runs = obj
        .get("runs")
        .or_else(|| obj.get("run"))
        .and_then(read_u64)
        .unwrap_or(0);

    let wicket = obj
        .get("isWicket")
        .or_else(|| obj.get("wicket"))
        .map(read_flag)
        .unwrap_or(false);

    Some((inning, runs, wicket))
}

fn read_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn read_flag(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_u64().unwrap_or(0) != 0,
        Value::String(s) => matches!(s.trim(), "1" | "true" | "True"),
        _ => false,
    }
}
