use serde::{Deserialize, Serialize};

/// Сырая запись раунда, как её присылает фид.
///
/// Все поля, кроме типа игры, опциональны: живой фид шлёт снапшоты
/// незавершённых раундов, где карт/описания/победителя ещё нет.
/// Исторические написания полей (`gtype`, `card`, `mid` и т.п.)
/// принимаются через промежуточную wire-структуру: одна запись может
/// нести ОБА написания сразу, и тогда выигрывает каноническое
/// (`cards` важнее `card`) — serde-алиасы на таком входе падали бы
/// с «duplicate field».
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(from = "WireRecord")]
pub struct RawRoundRecord {
    /// Свободная строка типа игры (`"TEEN_PATTI_20B"`, `"dt6"` и т.п.).
    pub game_type: String,

    /// Карты через запятую; `"1"` — слот без карты.
    pub cards: Option<String>,

    /// `#`-описание раунда (старый формат).
    pub desc: Option<String>,

    /// `#`-описание нового формата; есть не у всех игр.
    pub newdesc: Option<String>,

    /// Кодовое значение победителя — авторитетно для карты кодов.
    pub win: Option<String>,

    /// Человекочитаемая подпись победителя — предпочтительна для показа.
    pub winnat: Option<String>,

    /// Ball-by-ball записи крикет-столов; структура у продуктов разная,
    /// поэтому остаёмся на уровне `serde_json::Value`.
    pub score: Option<Vec<serde_json::Value>>,

    pub round_id: String,
}

impl RawRoundRecord {
    /// Минимальная запись для исторического запроса: тип + раунд.
    pub fn new(game_type: impl Into<String>, round_id: impl Into<String>) -> Self {
        Self {
            game_type: game_type.into(),
            round_id: round_id.into(),
            ..Self::default()
        }
    }
}

/// Запись в том виде, в каком она лежит в JSON фида: каждое историческое
/// написание — отдельное опциональное поле.
#[derive(Debug, Default, Deserialize)]
struct WireRecord {
    #[serde(default)]
    game_type: Option<String>,
    #[serde(default)]
    gtype: Option<String>,
    #[serde(default, rename = "gameType")]
    game_type_camel: Option<String>,

    #[serde(default)]
    cards: Option<String>,
    #[serde(default)]
    card: Option<String>,

    #[serde(default)]
    desc: Option<String>,
    #[serde(default)]
    newdesc: Option<String>,
    #[serde(default)]
    win: Option<String>,
    #[serde(default)]
    winnat: Option<String>,
    #[serde(default)]
    score: Option<Vec<serde_json::Value>>,

    #[serde(default)]
    round_id: Option<String>,
    #[serde(default)]
    mid: Option<String>,
    #[serde(default, rename = "roundId")]
    round_id_camel: Option<String>,
}

impl From<WireRecord> for RawRoundRecord {
    fn from(wire: WireRecord) -> Self {
        RawRoundRecord {
            game_type: wire
                .game_type
                .or(wire.gtype)
                .or(wire.game_type_camel)
                .unwrap_or_default(),
            cards: wire.cards.or(wire.card),
            desc: wire.desc,
            newdesc: wire.newdesc,
            win: wire.win,
            winnat: wire.winnat,
            score: wire.score,
            round_id: wire
                .round_id
                .or(wire.mid)
                .or(wire.round_id_camel)
                .unwrap_or_default(),
        }
    }
}
