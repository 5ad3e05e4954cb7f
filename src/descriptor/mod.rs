//! Дескрипторы игр: вся вариативность «45 игр — 45 наборов правил»
//! живёт здесь в виде статических данных, а не ветвлений в коде.
//!
//! Один дескриптор на один канонический тип:
//!   - `distribution` — как позиции сырого списка карт раскладываются
//!     по участникам;
//!   - `win_codes` — что значат сырые коды победителя ИМЕННО в этой
//!     игре (карты кодов у игр разные по замыслу, общего словаря нет);
//!   - `win_fallback` — производное правило, когда код не описан;
//!   - `side_markets` — применимые вычислители побочных рынков;
//!   - `prefer_newdesc` / `desc`-сегменты — схема разбора описания.

pub mod distribution;
pub mod side_markets;
pub mod table;
pub mod win;

pub use distribution::{DistributionRule, SlotSpec};
pub use side_markets::SideMarketRule;
pub use table::descriptor_for;
pub use win::{WinFallback, WinTarget};

use crate::domain::CanonicalGameType;

/// Какой путь обработки нужен записи этой игры.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DescriptorKind {
    /// Обычный карточный путь: карты → участники → победитель → рынки.
    CardGame,
    /// Крикет-мета: вместо карт агрегируется ball-by-ball `score`.
    CricketMeta,
}

/// Конфигурация одного канонического типа игры.
#[derive(Clone, Copy, Debug)]
pub struct GameDescriptor {
    pub game: CanonicalGameType,
    pub kind: DescriptorKind,
    pub distribution: DistributionRule,
    /// (сырой код из `win`, его смысл). Область действия — только эта игра.
    pub win_codes: &'static [(&'static str, WinTarget)],
    pub win_fallback: WinFallback,
    pub side_markets: &'static [SideMarketRule],
    /// true = при наличии `#` в `newdesc` описание берётся из него;
    /// false = всегда из `desc` (новый формат переписали не всем играм).
    pub prefer_newdesc: bool,
    /// Неймспейс карточных ассетов для слоя отображения
    /// (teen20b рисуется ассетами baccarat2 — так исторически сложилось).
    pub asset_namespace: &'static str,
}

impl GameDescriptor {
    /// Смысл сырого кода победителя в этой игре.
    pub fn win_target(&self, code: &str) -> Option<WinTarget> {
        self.win_codes
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, t)| *t)
    }
}
