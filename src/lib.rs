//! Декодер результатов раундов живого казино-фида.
//!
//! Фид кодирует ~45 карточных игр горсткой слабо структурированных
//! строковых полей (CSV карт, `#`-описание, кодовые поля победителя),
//! причём смысл одного и того же литерала зависит от игры: `"1"` —
//! это и «Player A», и «Dragon», и «Andar». Ядро приводит такую запись
//! к каноническому результату (участники, их карты, победитель,
//! побочные рынки) одной тотальной функцией: никогда не падает,
//! на кривом входе деградирует до явных «неизвестно».
//!
//! Конвейер: сырая запись → `normalize` (канонический тип) →
//! `descriptor` (правила конкретной игры) → `feed` (типизированные
//! поля) → `resolve` → `CanonicalResult`.

pub mod descriptor;
pub mod domain;
pub mod feed;
pub mod infra;
pub mod normalize;
pub mod resolve;

use crate::domain::{CanonicalResult, DecodeFlag, GameType};
use crate::feed::RawRoundRecord;

/// Декодировать одну запись раунда в канонический результат.
///
/// Единственная точка входа конвейера. Чистая и без состояния:
/// один вход — один выход, между вызовами ничего не живёт, поэтому
/// её можно безопасно дёргать из любого числа потоков.
pub fn decode_round(record: &RawRoundRecord) -> CanonicalResult {
    match normalize::normalize(&record.game_type) {
        GameType::Known(game) => resolve::resolve(game, record),

        // Неизвестный тип: разрешение пропускаем, сырьё наружу как есть.
        GameType::Unrecognized(cleaned) => {
            let win = record
                .win
                .as_ref()
                .map(|w| w.trim().to_string())
                .filter(|w| !w.is_empty());
            let winnat = record
                .winnat
                .as_ref()
                .map(|w| w.trim().to_string())
                .filter(|w| !w.is_empty());

            CanonicalResult {
                game_type: GameType::Unrecognized(cleaned.clone()),
                participants: Vec::new(),
                side_markets: Vec::new(),
                raw_win_code: win.clone().unwrap_or_default(),
                win_label: winnat.or(win).unwrap_or_else(|| "N/A".to_string()),
                round_id: record.round_id.clone(),
                flags: vec![DecodeFlag::UnrecognizedGameType(cleaned)],
            }
        }
    }
}
