//! Нормализация сырого типа игры.
//!
//! Фид присылает один и тот же стол под разными написаниями
//! (`"TEEN_PATTI_20B"`, `"teen20b"`, `"Teen Patti 2.0 B"`), поэтому
//! строка сначала чистится, а затем прогоняется через упорядоченный
//! список правил — первый совпавший выигрывает.
//!
//! Функция тотальная: если правила не нашлось, возвращается
//! `GameType::Unrecognized` с очищенной строкой — пайплайн деградирует,
//! но не падает.

pub mod rules;

use crate::domain::GameType;
use rules::RULES;

/// Очистка сырой строки: lowercase, только буквы и цифры.
/// `"DRAGON_TIGER_20_2"` → `"dragontiger202"`.
pub fn clean(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Привести сырой тип игры к каноническому.
pub fn normalize(raw: &str) -> GameType {
    let cleaned = clean(raw);

    for (matcher, game) in RULES {
        if matcher.matches(&cleaned) {
            return GameType::Known(*game);
        }
    }

    GameType::Unrecognized(cleaned)
}
