use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Нефатальные проблемы декодирования.
///
/// Ядро никогда не возвращает `Err` и не паникует: живой фид регулярно
/// присылает неполные и кривые записи, и одна такая запись не должна
/// ломать обработку следующих. Всё, что не удалось разобрать,
/// фиксируется флагом в `CanonicalResult.flags`, а соответствующее поле
/// вывода деградирует до явного «неизвестно».
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum DecodeFlag {
    #[error("Неизвестный тип игры: {0}")]
    UnrecognizedGameType(String),

    #[error("Нечитаемый токен карты: {0}")]
    MalformedCardToken(String),

    #[error("Отсутствует поле записи: {0}")]
    MissingField(String),

    #[error("Код победителя {0} не описан в дескрипторе")]
    UnmappedWinCode(String),

    #[error("Нечитаемая запись мяча #{0} в score")]
    MalformedBallRecord(usize),
}

impl DecodeFlag {
    /// Флаг отсутствующего поля (имя поля — как в сырой записи).
    pub fn missing_field(name: &str) -> Self {
        DecodeFlag::MissingField(name.to_string())
    }
}
